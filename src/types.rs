use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Serialize;

/// Line-ending convention detected in a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LineEndingType {
    /// Sentinel before the first terminator is seen.
    Unknown,
    #[serde(rename = "LF")]
    Lf,
    #[serde(rename = "CRLF")]
    Crlf,
    #[serde(rename = "CR")]
    Cr,
    /// At least two different terminator kinds.
    Mixed,
    /// No terminators at all.
    None,
}

impl LineEndingType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Lf => "LF",
            Self::Crlf => "CRLF",
            Self::Cr => "CR",
            Self::Mixed => "Mixed",
            Self::None => "None",
        }
    }
}

impl fmt::Display for LineEndingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineEndingType {
    type Err = String;

    // Only concrete conventions make sense as a baseline.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lf" => Ok(Self::Lf),
            "crlf" => Ok(Self::Crlf),
            "cr" => Ok(Self::Cr),
            other => Err(format!("unknown line ending '{other}' (expected lf, crlf or cr)")),
        }
    }
}

/// A file whose line endings differ from the expected baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// Path relative to the scan root, for display.
    pub path: String,
    #[serde(skip)]
    pub absolute: PathBuf,
    pub line_ending: LineEndingType,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanSummary {
    pub root: PathBuf,
    pub expected: LineEndingType,
    pub files_scanned: usize,
    pub files_unreadable: usize,
    /// Directories that could not be listed, symlink loops and similar.
    pub walk_errors: usize,
    pub count: usize,
    pub by_type: IndexMap<LineEndingType, usize>,
    pub mismatches: Vec<Mismatch>,
}

impl ScanSummary {
    pub fn new(root: PathBuf, expected: LineEndingType) -> Self {
        ScanSummary {
            root,
            expected,
            files_scanned: 0,
            files_unreadable: 0,
            walk_errors: 0,
            count: 0,
            by_type: IndexMap::new(),
            mismatches: Vec::new(),
        }
    }

    pub fn record(&mut self, mismatch: Mismatch) {
        *self.by_type.entry(mismatch.line_ending).or_default() += 1;
        self.count += 1;
        self.mismatches.push(mismatch);
    }
}
