use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use walkdir::WalkDir;

use crate::classifier::classify_file;
use crate::config::ScanConfig;
use crate::types::{LineEndingType, Mismatch, ScanSummary};

/// Receives scan events as they happen. All methods default to no-ops.
pub trait ScanObserver {
    /// Entering an immediate child directory of the root.
    fn on_folder(&mut self, _relative: &str) {}

    fn on_classified(&mut self, _path: &Path, _detected: LineEndingType) {}

    fn on_mismatch(&mut self, _mismatch: &Mismatch) {}

    /// A file or directory that could not be read; the scan carries on.
    fn on_unreadable(&mut self, _path: &Path, _err: &anyhow::Error) {}
}

/// Observer that ignores every event.
pub struct Silent;

impl ScanObserver for Silent {}

/// Whether a detected type is reported against the expected baseline.
/// Files without any terminator never disagree with a convention.
pub fn is_mismatch(detected: LineEndingType, expected: LineEndingType) -> bool {
    detected != expected && detected != LineEndingType::None
}

/// Hidden directories and build output (`bin`, `obj`) are never descended.
pub fn should_skip_dir(dir: &Path) -> bool {
    let Some(name) = dir.file_name() else {
        return true;
    };
    let name = name.to_string_lossy();
    name.starts_with('.') || name == "bin" || name == "obj"
}

/// `path` relative to `root` for display. The root prefix is matched
/// case-insensitively; paths outside the root are returned whole.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let root_s = root.to_string_lossy();
    let path_s = path.to_string_lossy();
    match path_s.get(..root_s.len()) {
        Some(prefix) if prefix.to_lowercase() == root_s.to_lowercase() => path_s[root_s.len()..]
            .trim_start_matches(['/', '\\'])
            .to_string(),
        _ => path_s.into_owned(),
    }
}

/// Walks `config.root` depth-first, classifying every file whose extension is
/// accepted and reporting those that differ from `config.expected`. Within a
/// directory, files are visited before subdirectories, each group by name.
///
/// # Errors
/// Returns an error if the root does not exist, is not a directory, or cannot
/// be listed. Problems below the root are reported through
/// [`ScanObserver::on_unreadable`] and skipped.
pub fn scan<O: ScanObserver + ?Sized>(config: &ScanConfig, observer: &mut O) -> Result<ScanSummary> {
    let root = &config.root;
    check_root(root)?;

    let mut summary = ScanSummary::new(root.clone(), config.expected);
    let walker = WalkDir::new(root)
        .follow_links(config.follow_symlinks)
        .sort_by(|a, b| {
            a.file_type()
                .is_dir()
                .cmp(&b.file_type().is_dir())
                .then_with(|| a.file_name().cmp(b.file_name()))
        })
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_type().is_dir() || !should_skip_dir(e.path()));

    for dent in walker {
        let dent = match dent {
            Ok(d) => d,
            Err(walk_err) if walk_err.depth() == 0 => {
                return Err(walk_err).with_context(|| format!("list directory: {}", root.display()));
            }
            Err(walk_err) => {
                let path = walk_err.path().map_or_else(|| root.clone(), Path::to_path_buf);
                summary.walk_errors += 1;
                observer.on_unreadable(&path, &anyhow::Error::new(walk_err));
                continue;
            }
        };

        let ft = dent.file_type();
        if ft.is_dir() {
            if dent.depth() == 1 {
                observer.on_folder(&relative_path(root, dent.path()));
            }
            continue;
        }
        // unfollowed links count when they point at a file; dangling ones never do
        if !(ft.is_file() || (ft.is_symlink() && dent.path().is_file())) {
            continue;
        }
        if !config.extensions.accepts(&dent.file_name().to_string_lossy()) {
            continue;
        }
        check_file(config, dent.path(), &mut summary, observer);
    }
    Ok(summary)
}

/// Fails unless `root` exists, is a directory, and can be listed.
///
/// # Errors
/// Returns the underlying I/O error, or an error naming a non-directory root.
pub fn check_root(root: &Path) -> Result<()> {
    let md = fs::metadata(root).with_context(|| format!("scan root: {}", root.display()))?;
    if !md.is_dir() {
        bail!("scan root is not a directory: {}", root.display());
    }
    fs::read_dir(root).with_context(|| format!("list directory: {}", root.display()))?;
    Ok(())
}

fn check_file<O: ScanObserver + ?Sized>(
    config: &ScanConfig,
    path: &Path,
    summary: &mut ScanSummary,
    observer: &mut O,
) {
    let detected = match classify_file(path) {
        Ok(t) => t,
        Err(err) => {
            summary.files_unreadable += 1;
            observer.on_unreadable(path, &err);
            return;
        }
    };
    summary.files_scanned += 1;
    observer.on_classified(path, detected);
    if !is_mismatch(detected, config.expected) {
        return;
    }
    let mismatch = Mismatch {
        path: relative_path(&config.root, path),
        absolute: path.to_path_buf(),
        line_ending: detected,
    };
    observer.on_mismatch(&mismatch);
    summary.record(mismatch);
}
