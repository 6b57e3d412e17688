use std::borrow::Cow;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::types::LineEndingType;

/// Outcome of feeding one terminator into the classification state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Established(LineEndingType),
    Mixed,
}

// Unknown -> {LF | CR | CRLF} -> same or Mixed. Mixed is terminal.
fn transition(established: LineEndingType, seen: LineEndingType) -> Step {
    match established {
        LineEndingType::Unknown => Step::Established(seen),
        LineEndingType::Lf | LineEndingType::Crlf | LineEndingType::Cr if established == seen => {
            Step::Established(established)
        }
        _ => Step::Mixed,
    }
}

/// Determines the single line-ending convention used throughout `text`.
///
/// `\r\n` is one CRLF terminator, a `\r` not followed by `\n` (including one at
/// the very end of the input) is CR, and a lone `\n` is LF. Returns
/// [`LineEndingType::Mixed`] as soon as a second kind shows up, and
/// [`LineEndingType::None`] when there is no terminator at all.
pub fn classify(text: &[u8]) -> LineEndingType {
    let mut established = LineEndingType::Unknown;
    let mut pos = 0;
    while let Some(off) = memchr::memchr2(b'\r', b'\n', &text[pos..]) {
        let i = pos + off;
        let (seen, width) = match text[i] {
            b'\r' if text.get(i + 1) == Some(&b'\n') => (LineEndingType::Crlf, 2),
            b'\r' => (LineEndingType::Cr, 1),
            _ => (LineEndingType::Lf, 1),
        };
        match transition(established, seen) {
            Step::Established(t) => established = t,
            Step::Mixed => return LineEndingType::Mixed,
        }
        pos = i + width;
    }

    if established == LineEndingType::Unknown {
        LineEndingType::None
    } else {
        established
    }
}

pub fn classify_str(text: &str) -> LineEndingType {
    classify(text.as_bytes())
}

/// Reads the whole file and classifies its content.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn classify_file(path: &Path) -> Result<LineEndingType> {
    let raw = fs::read(path).with_context(|| format!("read file: {}", path.display()))?;
    Ok(classify(&decode_text(&raw)))
}

/// UTF-16 content (detected by its byte-order mark) is decoded so its
/// two-byte terminators become visible; anything else is scanned as is.
fn decode_text(raw: &[u8]) -> Cow<'_, [u8]> {
    match raw {
        [0xFF, 0xFE, body @ ..] => Cow::Owned(decode_utf16(body, u16::from_le_bytes)),
        [0xFE, 0xFF, body @ ..] => Cow::Owned(decode_utf16(body, u16::from_be_bytes)),
        _ => Cow::Borrowed(raw),
    }
}

fn decode_utf16(body: &[u8], to_u16: fn([u8; 2]) -> u16) -> Vec<u8> {
    let units: Vec<u16> = body
        .chunks_exact(2)
        .map(|pair| to_u16([pair[0], pair[1]]))
        .collect();
    String::from_utf16_lossy(&units).into_bytes()
}
