use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueHint};

use crate::types::LineEndingType;

mod run_impl;

#[allow(clippy::struct_excessive_bools)]
#[derive(Parser, Debug, Clone)]
#[command(
    name = "eolscan",
    version,
    about = "Find text files whose line endings differ from the expected convention",
    long_about = None,
    after_help = "If no extensions are given, these file types are checked: \
.cs .csproj .sln .xaml .xml .cpp .cxx .hpp .hxx .h .htm .html .rc\n\n\
Examples:\n  eolscan . .cs          check C# files in the current directory\n  \
eolscan /dev/src        check all default file types under /dev/src"
)]
pub struct Args {
    /// Directory to scan
    #[arg(value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub path: PathBuf,

    /// Extensions to check, separated by space (e.g. .cs .xaml); a missing leading dot is added
    #[arg(value_name = "EXTENSIONS")]
    pub extensions: Option<Vec<String>>,

    /// Line ending every file is expected to use: crlf, lf or cr
    #[arg(long = "expected", value_name = "TYPE", default_value = "crlf")]
    pub expected: LineEndingType,

    /// Output JSON summary instead of text lines
    #[arg(long = "json", action = ArgAction::SetTrue, conflicts_with = "csv")]
    pub json: bool,

    /// Output CSV of mismatching files instead of text lines
    #[arg(long = "csv", action = ArgAction::SetTrue, conflicts_with = "json")]
    pub csv: bool,

    /// Descend into symlinked directories
    #[arg(long = "follow-symlinks", action = ArgAction::SetTrue)]
    pub follow_symlinks: bool,

    /// Show a progress spinner with the folder being scanned
    #[arg(long = "progress", action = ArgAction::SetTrue)]
    pub progress: bool,

    /// Exit with an error status when any file mismatches
    #[arg(long = "fail-on-mismatch", action = ArgAction::SetTrue)]
    pub fail_on_mismatch: bool,

    /// Verbose logging
    #[arg(long = "verbose", short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

/// Runs the CLI application.
///
/// # Errors
/// Returns an error if the scan root is unusable, output cannot be produced,
/// or `--fail-on-mismatch` is set and mismatches were found.
pub fn run() -> Result<()> {
    let args = Args::parse();
    run_impl::run_with_args(&args)
}
