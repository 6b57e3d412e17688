use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::types::LineEndingType;

/// Extensions checked when none are given on the command line.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".cs", ".csproj", ".sln", ".xaml", ".xml", ".cpp", ".cxx", ".hpp", ".hxx", ".h", ".htm",
    ".html", ".rc",
];

/// Accepted file extensions, lower-cased and dot-prefixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    exts: BTreeSet<String>,
}

impl ExtensionSet {
    pub fn defaults() -> Self {
        Self::from_args(DEFAULT_EXTENSIONS.iter().copied())
    }

    /// Normalizes user-supplied extensions: `cs`, `.cs` and `.CS` all become `.cs`.
    /// Blank entries are dropped, so the result may be empty.
    pub fn from_args<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let exts = items
            .into_iter()
            .filter_map(|raw| {
                let t = raw.as_ref().trim();
                if t.is_empty() {
                    return None;
                }
                let lower = t.to_lowercase();
                Some(if lower.starts_with('.') {
                    lower
                } else {
                    format!(".{lower}")
                })
            })
            .collect();
        ExtensionSet { exts }
    }

    pub fn is_empty(&self) -> bool {
        self.exts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.exts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.exts.iter().map(String::as_str)
    }

    /// Whether a file with this name passes the filter. The extension is
    /// everything from the last `.` of the name, compared case-insensitively.
    pub fn accepts(&self, file_name: &str) -> bool {
        match file_name.rfind('.') {
            Some(idx) => self.exts.contains(&file_name[idx..].to_lowercase()),
            None => false,
        }
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Everything one scan needs; fixed for the duration of the scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub extensions: ExtensionSet,
    pub expected: LineEndingType,
    pub follow_symlinks: bool,
}

impl ScanConfig {
    /// Builds a config with `root` made absolute against the current directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    pub fn new(root: &Path, extensions: ExtensionSet, expected: LineEndingType) -> Result<Self> {
        let root = std::path::absolute(root)
            .with_context(|| format!("resolve scan root: {}", root.display()))?;
        Ok(ScanConfig {
            root,
            extensions,
            expected,
            follow_symlinks: false,
        })
    }

    #[must_use]
    pub fn follow_symlinks(mut self, yes: bool) -> Self {
        self.follow_symlinks = yes;
        self
    }
}
