//! odtquery - A Rust library and CLI for querying OpenDocument Text files
//!
//! An ODT file is a ZIP-based package holding an office document's XML
//! content and metadata members. This crate opens such packages, verifies
//! that the essential members are present, and lists every member with its
//! byte size.
//!
//! # Example - Verifying an ODT file
//!
//! ```no_run
//! use odtquery::{verify, Package, Verification};
//!
//! # fn main() -> odtquery::Result<()> {
//! let pkg = Package::open("document.odt")?;
//!
//! match verify(&pkg) {
//!     Verification::Verified => println!("all essential files present"),
//!     Verification::Missing(names) => println!("missing: {:?}", names),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Listing an ODT file's members
//!
//! ```no_run
//! use odtquery::{list, Package};
//!
//! # fn main() -> odtquery::Result<()> {
//! let pkg = Package::open("document.odt")?;
//!
//! for member in list(&pkg) {
//!     // "content.xml (12,345 bytes)" or "mimetype (empty)"
//!     println!("{}", member);
//! }
//! # Ok(())
//! # }
//! ```

/// Batch driver running the selected actions over input files
pub mod driver;
/// Unified error types
pub mod error;
/// ODT package (ZIP archive) reading
pub mod package;
/// Verification and listing of package members
pub mod query;

// Re-export the main APIs
pub use driver::{Actions, run};
pub use error::{Error, Result};
pub use package::{Archive, Package};
pub use query::{Member, REQUIRED_FILES, Verification, list, verify};
