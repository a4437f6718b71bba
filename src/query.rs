//! Verification and listing of ODT package members.
//!
//! A structurally valid ODT package always carries five essential members
//! ([`REQUIRED_FILES`]). [`verify`] reports which of them are missing, and
//! [`list`] enumerates every member with its byte size. Both operate on the
//! [`Archive`] capability trait and never mutate the package.

use crate::package::Archive;
use std::collections::HashSet;
use std::fmt;

/// Member paths every valid ODT package must contain.
pub const REQUIRED_FILES: &[&str] = &[
    "content.xml",
    "META-INF/manifest.xml",
    "meta.xml",
    "mimetype",
    "styles.xml",
];

/// Outcome of verifying an archive against [`REQUIRED_FILES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// All required members are present.
    Verified,
    /// Missing required member paths, sorted ascending case-insensitively.
    Missing(Vec<String>),
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verification::Verified => write!(f, "verified — contains all essential files"),
            Verification::Missing(names) => {
                write!(f, "failed verification — missing files:")?;
                for name in names {
                    write!(f, " {}", name)?;
                }
                Ok(())
            }
        }
    }
}

/// Check that every path in [`REQUIRED_FILES`] exists among the archive's
/// members.
///
/// Missing paths are reported sorted ascending by their lower-cased form.
/// The sort is stable, so equal keys keep their relative order (member paths
/// are unique, so ties cannot occur in practice).
pub fn verify(archive: &impl Archive) -> Verification {
    let present: HashSet<&str> = archive
        .member_names()
        .filter(|name| REQUIRED_FILES.contains(name))
        .collect();

    if present.len() == REQUIRED_FILES.len() {
        Verification::Verified
    } else {
        let mut missing: Vec<String> = REQUIRED_FILES
            .iter()
            .filter(|name| !present.contains(**name))
            .map(|name| name.to_string())
            .collect();
        missing.sort_by_key(|name| name.to_lowercase());
        Verification::Missing(missing)
    }
}

/// One archive member and its content size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Member path, forward-slash separated.
    pub name: String,
    /// Content length in bytes.
    pub size: u64,
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.size == 0 {
            write!(f, "{} (empty)", self.name)
        } else {
            write!(f, "{} ({} bytes)", self.name, commas(self.size))
        }
    }
}

/// Enumerate every member of the archive with its byte size.
///
/// Order follows the archive's member enumeration order.
pub fn list(archive: &impl Archive) -> Vec<Member> {
    archive
        .member_names()
        .map(|name| Member {
            name: name.to_string(),
            size: archive.member_bytes(name).map_or(0, |bytes| bytes.len() as u64),
        })
        .collect()
}

/// Format an integer with thousands-grouping commas, e.g. `12345` → `12,345`.
fn commas(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
