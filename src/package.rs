//! ODT package (ZIP archive) handling functionality.
//!
//! An ODT file is a ZIP container holding the document's XML members plus any
//! embedded resources. [`Package`] materializes the container into an
//! immutable member-path → bytes mapping; the [`Archive`] trait is the
//! capability surface the verifier and lister operate against, so they can be
//! exercised without touching a real ZIP archive.

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

/// Read-only view over a parsed package: enumerate member paths and fetch
/// member bytes by path.
pub trait Archive {
    /// Iterate over all member paths in the archive.
    fn member_names(&self) -> impl Iterator<Item = &str>;

    /// Fetch a member's raw bytes, or `None` if no such member exists.
    fn member_bytes(&self, name: &str) -> Option<&[u8]>;
}

/// An ODT package loaded into memory.
///
/// Member paths are forward-slash separated and unique by construction.
/// Directory placeholder entries in the ZIP container are skipped; only file
/// members are kept. The mapping is immutable once constructed.
///
/// # Examples
///
/// ```no_run
/// use odtquery::{Archive, Package};
///
/// # fn main() -> odtquery::Result<()> {
/// let pkg = Package::open("document.odt")?;
/// for name in pkg.member_names() {
///     println!("{}", name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Package {
    members: BTreeMap<String, Vec<u8>>,
}

impl Package {
    /// Open an ODT package from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid ZIP
    /// archive. Presence of the required ODT members is not checked here;
    /// that is the verifier's job.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Open an ODT package from any seekable reader.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut archive = zip::ZipArchive::new(reader)
            .map_err(|_| Error::InvalidPackage("not a ZIP archive".to_string()))?;

        let mut members = BTreeMap::new();
        for i in 0..archive.len() {
            let mut entry = archive.by_index(i)?;
            if entry.is_dir() {
                continue;
            }
            let mut content = Vec::with_capacity(entry.size() as usize);
            entry.read_to_end(&mut content)?;
            members.insert(entry.name().to_string(), content);
        }

        Ok(Self { members })
    }

    /// Get a member's bytes by path.
    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.members.get(path).map(Vec::as_slice)
    }

    /// Check if a member exists in the package.
    pub fn contains(&self, path: &str) -> bool {
        self.members.contains_key(path)
    }

    /// Number of members in the package.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the package has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Archive for Package {
    fn member_names(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    fn member_bytes(&self, name: &str) -> Option<&[u8]> {
        self.get(name)
    }
}
