use crate::types::ScanSummary;

pub fn format(s: &ScanSummary) -> String {
    let mut out = String::new();
    out.push_str("path,line_ending\n");
    for m in &s.mismatches {
        push_row(&mut out, &m.path, m.line_ending.as_str());
    }
    out
}

fn push_row(out: &mut String, path: &str, line_ending: &str) {
    use std::fmt::Write as _;
    let _ = writeln!(out, "{},{}", quote(path), line_ending);
}

fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LineEndingType, Mismatch};
    use std::path::PathBuf;

    #[test]
    fn rows_follow_header() {
        let mut s = ScanSummary::new(PathBuf::from("/src"), LineEndingType::Crlf);
        for (p, t) in [("a.cs", LineEndingType::Lf), ("odd,name.h", LineEndingType::Mixed)] {
            s.record(Mismatch {
                path: p.to_string(),
                absolute: PathBuf::from("/src").join(p),
                line_ending: t,
            });
        }
        let out = format(&s);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["path,line_ending", "a.cs,LF", "\"odd,name.h\",Mixed"]);
    }
}
