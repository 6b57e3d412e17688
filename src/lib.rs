//! Finds text files whose line-ending convention differs from an expected
//! baseline.
//!
//! [`classifier`] decides which terminator a piece of text uses and
//! [`traversal`] walks a directory tree applying the folder and extension
//! filters, streaming each mismatch to a [`traversal::ScanObserver`].

pub mod classifier;
pub mod config;
pub mod formatters;
pub mod traversal;
pub mod types;

pub use classifier::{classify, classify_file, classify_str};
pub use config::{DEFAULT_EXTENSIONS, ExtensionSet, ScanConfig};
pub use traversal::{ScanObserver, Silent, scan};
pub use types::{LineEndingType, Mismatch, ScanSummary};
