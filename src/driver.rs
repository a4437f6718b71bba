//! Batch processing of ODT files.
//!
//! The driver opens each input path in turn and runs the selected actions
//! against it. A file that fails to open produces a single `error:` line and
//! the batch moves on to the next file; one bad input never aborts its
//! siblings. Output goes to any [`io::Write`] sink so tests can capture it.

use crate::package::Package;
use crate::query::{list, verify};
use std::io;
use std::path::{Path, PathBuf};

/// Two-space prefix applied to report lines in multi-file output.
const INDENT: &str = "  ";

/// Actions to run against each input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actions {
    /// List each file's members with sizes.
    pub list: bool,
    /// Verify each file contains the required members.
    pub verify: bool,
}

impl Actions {
    /// Resolve the action flags from CLI input.
    ///
    /// Listing is the default action: when neither flag is given, list-mode
    /// is enabled. When any flag is given, exactly the given flags apply, so
    /// `--verify` alone disables the implicit listing.
    pub fn resolve(list: bool, verify: bool) -> Self {
        if !list && !verify {
            Self {
                list: true,
                verify: false,
            }
        } else {
            Self { list, verify }
        }
    }
}

/// Process a batch of input paths, writing all report and error lines to
/// `out`.
///
/// A single input is reported without decoration. With more than one input,
/// each file gets a `file: <path>` header and its report lines are indented.
/// Per-file failures are printed as `error: <message>` and do not stop the
/// batch.
///
/// # Errors
///
/// Returns an error only when writing to `out` fails.
pub fn run<W: io::Write>(paths: &[PathBuf], actions: Actions, out: &mut W) -> io::Result<()> {
    if let [path] = paths {
        if let Err(err) = process(path, actions, false, out)? {
            writeln!(out, "error: {}", err)?;
        }
        return Ok(());
    }

    for path in paths {
        writeln!(out, "file: {}", path.display())?;
        if let Err(err) = process(path, actions, true, out)? {
            writeln!(out, "error: {}", err)?;
        }
    }
    Ok(())
}

/// Open one file and run the selected actions, verify before list.
///
/// The outer `io::Result` carries failures of the output sink; the inner
/// result carries the per-file open failure the caller reports and skips.
fn process<W: io::Write>(
    path: &Path,
    actions: Actions,
    indent: bool,
    out: &mut W,
) -> io::Result<std::result::Result<(), crate::Error>> {
    let package = match Package::open(path) {
        Ok(package) => package,
        Err(err) => return Ok(Err(err)),
    };
    let pad = if indent { INDENT } else { "" };

    if actions.verify {
        writeln!(out, "{}{}", pad, verify(&package))?;
    }
    if actions.list {
        for member in list(&package) {
            writeln!(out, "{}{}", pad, member)?;
        }
    }
    Ok(Ok(()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write as _;
    use zip::CompressionMethod;
    use zip::write::FileOptions;

    /// Write a ZIP archive with the given members to `path`.
    fn write_archive(path: &Path, entries: &[(&str, &[u8])]) {
        let mut writer = zip::ZipWriter::new(File::create(path).unwrap());
        let options: FileOptions<'_, ()> =
            FileOptions::default().compression_method(CompressionMethod::Deflated);
        for (name, content) in entries {
            writer.start_file(*name, options).unwrap();
            writer.write_all(content).unwrap();
        }
        writer.finish().unwrap();
    }

    fn write_complete_odt(path: &Path) {
        write_archive(
            path,
            &[
                ("mimetype", b"application/vnd.oasis.opendocument.text"),
                ("content.xml", b"<office:document-content/>"),
                ("styles.xml", b"<office:document-styles/>"),
                ("meta.xml", b"<office:document-meta/>"),
                ("META-INF/manifest.xml", b"<manifest:manifest/>"),
            ],
        );
    }

    fn run_to_string(paths: &[PathBuf], actions: Actions) -> String {
        let mut out = Vec::new();
        run(paths, actions, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_single_file_verify_unindented() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.odt");
        write_complete_odt(&path);

        let output = run_to_string(
            &[path],
            Actions {
                list: false,
                verify: true,
            },
        );
        assert_eq!(output, "verified — contains all essential files\n");
    }

    #[test]
    fn test_single_file_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.odt");
        write_archive(&path, &[("content.xml", b""), ("mimetype", b"abcd")]);

        let output = run_to_string(
            &[path],
            Actions {
                list: true,
                verify: false,
            },
        );
        assert_eq!(output, "content.xml (empty)\nmimetype (4 bytes)\n");
    }

    #[test]
    fn test_verify_runs_before_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.odt");
        write_archive(&path, &[("content.xml", b"x")]);

        let output = run_to_string(
            &[path],
            Actions {
                list: true,
                verify: true,
            },
        );
        assert_eq!(
            output,
            "failed verification — missing files: META-INF/manifest.xml meta.xml \
             mimetype styles.xml\ncontent.xml (1 bytes)\n"
        );
    }

    #[test]
    fn test_multi_file_headers_and_indent() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.odt");
        let second = dir.path().join("b.odt");
        write_complete_odt(&first);
        write_archive(&second, &[("mimetype", b"zz")]);

        let output = run_to_string(
            &[first.clone(), second.clone()],
            Actions {
                list: false,
                verify: true,
            },
        );
        assert_eq!(
            output,
            format!(
                "file: {}\n  verified — contains all essential files\n\
                 file: {}\n  failed verification — missing files: \
                 content.xml META-INF/manifest.xml meta.xml styles.xml\n",
                first.display(),
                second.display()
            )
        );
    }

    #[test]
    fn test_bad_file_does_not_abort_batch() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.odt");
        let missing = dir.path().join("no-such-file.odt");
        write_complete_odt(&good);

        let output = run_to_string(
            &[missing.clone(), good.clone()],
            Actions {
                list: false,
                verify: true,
            },
        );

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], format!("file: {}", missing.display()));
        assert!(lines[1].starts_with("error: "));
        assert_eq!(lines[2], format!("file: {}", good.display()));
        assert_eq!(lines[3], "  verified — contains all essential files");
    }

    #[test]
    fn test_single_bad_file_prints_error_line() {
        let dir = tempfile::tempdir().unwrap();
        let garbage = dir.path().join("garbage.odt");
        std::fs::write(&garbage, b"not a zip archive at all").unwrap();

        let output = run_to_string(
            &[garbage],
            Actions {
                list: true,
                verify: true,
            },
        );
        assert_eq!(output, "error: invalid ODT package: not a ZIP archive\n");
    }

    #[test]
    fn test_resolve_defaults_to_list() {
        assert_eq!(
            Actions::resolve(false, false),
            Actions {
                list: true,
                verify: false
            }
        );
    }

    #[test]
    fn test_resolve_verify_alone_disables_listing() {
        assert_eq!(
            Actions::resolve(false, true),
            Actions {
                list: false,
                verify: true
            }
        );
    }

    #[test]
    fn test_resolve_both_flags() {
        assert_eq!(
            Actions::resolve(true, true),
            Actions {
                list: true,
                verify: true
            }
        );
    }
}
