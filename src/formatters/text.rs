use std::io::IsTerminal;
use std::path::Path;

use crate::types::{LineEndingType, Mismatch};

pub fn start_line(root: &Path) -> String {
    format!("Starting scan on directory {}", root.display())
}

pub fn folder_line(relative: &str, colors: &Colors) -> String {
    colors.paint(&format!("Scanning folder {relative}..."), "37")
}

pub fn mismatch_line(m: &Mismatch, colors: &Colors) -> String {
    // dark yellow tag, plain details
    format!(
        "{} File {} line ending {}",
        colors.paint("MATCH:", "33"),
        m.path,
        m.line_ending
    )
}

pub fn summary_line(expected: LineEndingType, count: usize) -> String {
    format!("Number of files with line endings different from {expected}: {count}")
}

pub struct Colors {
    enabled: bool,
}

impl Colors {
    pub fn for_stdout() -> Self {
        Self::detect(std::io::stdout().is_terminal())
    }

    pub fn for_stderr() -> Self {
        Self::detect(std::io::stderr().is_terminal())
    }

    pub const fn plain() -> Self {
        Colors { enabled: false }
    }

    fn detect(term: bool) -> Self {
        let var = |key: &str| std::env::var(key).ok();
        Colors {
            enabled: color_enabled(
                var("CLICOLOR_FORCE").as_deref(),
                std::env::var_os("NO_COLOR").is_some(),
                var("CLICOLOR").as_deref(),
                term,
            ),
        }
    }

    pub fn paint(&self, s: &str, code: &str) -> String {
        if self.enabled {
            format!("\x1b[{code}m{s}\x1b[0m")
        } else {
            s.to_string()
        }
    }
}

// CLICOLOR_FORCE (non-"0") wins, then NO_COLOR / CLICOLOR=0 disable, else follow the tty.
fn color_enabled(force: Option<&str>, no_color: bool, clicolor: Option<&str>, term: bool) -> bool {
    match (force, no_color, clicolor) {
        (Some(f), _, _) if f != "0" => true,
        (_, true, _) | (_, _, Some("0")) => false,
        _ => term,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn lines_match_console_contract() {
        let m = Mismatch {
            path: "app/b.cs".to_string(),
            absolute: PathBuf::from("/src/app/b.cs"),
            line_ending: LineEndingType::Mixed,
        };
        let plain = Colors::plain();
        assert_eq!(mismatch_line(&m, &plain), "MATCH: File app/b.cs line ending Mixed");
        assert_eq!(folder_line("app", &plain), "Scanning folder app...");
        assert_eq!(
            summary_line(LineEndingType::Crlf, 2),
            "Number of files with line endings different from CRLF: 2"
        );
    }

    #[test]
    fn color_env_precedence() {
        assert!(color_enabled(None, false, None, true));
        assert!(!color_enabled(None, false, None, false));
        assert!(!color_enabled(None, true, None, true));
        assert!(!color_enabled(None, false, Some("0"), true));
        assert!(color_enabled(Some("1"), true, Some("0"), false));
        assert!(!color_enabled(Some("0"), false, None, false));
        assert!(color_enabled(Some("0"), false, Some("1"), true));
    }

    #[test]
    fn enabled_colors_wrap_in_escape_codes() {
        let c = Colors { enabled: true };
        assert_eq!(c.paint("MATCH:", "33"), "\x1b[33mMATCH:\x1b[0m");
    }
}
