use std::path::Path;

use anyhow::{Result, bail};
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{ExtensionSet, ScanConfig};
use crate::formatters;
use crate::formatters::text::Colors;
use crate::traversal::{self, ScanObserver};
use crate::types::{LineEndingType, Mismatch};

use super::Args;

pub fn run_with_args(args: &Args) -> Result<()> {
    let extensions = match args.extensions {
        Some(ref list) => ExtensionSet::from_args(list),
        None => ExtensionSet::defaults(),
    };
    let config = ScanConfig::new(&args.path, extensions, args.expected)?
        .follow_symlinks(args.follow_symlinks);

    traversal::check_root(&config.root)?;

    let streaming = !(args.json || args.csv);
    if args.verbose > 0 {
        eprintln!("Scanning path: {}", config.root.display());
        eprintln!(
            "Extensions filter: {}",
            config.extensions.iter().collect::<Vec<_>>().join(" ")
        );
        eprintln!("Expected line ending: {}", config.expected);
    }
    if streaming {
        println!("{}", formatters::text::start_line(&config.root));
    }

    let pb = if args.progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner} {msg}")?.tick_chars("⠁⠃⠇⠋⠙⠸⢰⣠⣄⡆"),
        );
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let mut console = ConsoleObserver {
        streaming,
        verbose: args.verbose,
        pb,
        out_colors: Colors::for_stdout(),
        err_colors: Colors::for_stderr(),
    };
    let summary = traversal::scan(&config, &mut console)?;
    if let Some(pb) = console.pb.take() {
        pb.finish_and_clear();
    }

    if args.verbose > 1 {
        eprintln!(
            "Totals: scanned={}, unreadable={}, walk_errors={}, mismatched={}",
            summary.files_scanned, summary.files_unreadable, summary.walk_errors, summary.count
        );
    }

    if args.json {
        let s = serde_json::to_string_pretty(&summary)?;
        println!("{s}");
    } else if args.csv {
        print!("{}", formatters::csv::format(&summary));
    } else {
        println!(
            "{}",
            formatters::text::summary_line(summary.expected, summary.count)
        );
    }

    if args.fail_on_mismatch && summary.count > 0 {
        bail!(
            "{} file(s) with line endings different from {}",
            summary.count,
            summary.expected
        );
    }
    Ok(())
}

struct ConsoleObserver {
    streaming: bool,
    verbose: u8,
    pb: Option<ProgressBar>,
    out_colors: Colors,
    err_colors: Colors,
}

impl ConsoleObserver {
    // keeps printed lines from tearing through the spinner
    fn emit(&self, f: impl FnOnce()) {
        match self.pb {
            Some(ref pb) => pb.suspend(f),
            None => f(),
        }
    }
}

impl ScanObserver for ConsoleObserver {
    fn on_folder(&mut self, relative: &str) {
        if let Some(ref pb) = self.pb {
            pb.set_message(format!("Scanning folder {relative}..."));
        } else if self.streaming || self.verbose > 0 {
            eprintln!("{}", formatters::text::folder_line(relative, &self.err_colors));
        }
    }

    fn on_classified(&mut self, path: &Path, detected: LineEndingType) {
        if self.verbose > 1 {
            self.emit(|| eprintln!("{}: {detected}", path.display()));
        }
    }

    fn on_mismatch(&mut self, mismatch: &Mismatch) {
        if self.streaming {
            let line = formatters::text::mismatch_line(mismatch, &self.out_colors);
            self.emit(|| println!("{line}"));
        }
    }

    fn on_unreadable(&mut self, _path: &Path, err: &anyhow::Error) {
        self.emit(|| eprintln!("warning: skipped {err:#}"));
    }
}
