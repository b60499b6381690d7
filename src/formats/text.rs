//! Plain text notes
//!
//! One text block per line of the decoded file. Lines end at `\n`, `\r`,
//! `\r\n`, vertical tab, form feed, the file/group/record separators, NEL,
//! or the Unicode line and paragraph separators.

use crate::notes::{ExtractionResult, Result};

/// Split UTF-8 bytes into one block per line
///
/// Empty interior lines are kept as empty blocks. A trailing line
/// terminator does not produce an extra block, and `\r\n` counts as one
/// terminator.
pub fn extract_text(data: &[u8]) -> Result<ExtractionResult> {
    let text = String::from_utf8(data.to_vec())?;
    let lines: Vec<String> = split_lines(&text).into_iter().map(str::to_string).collect();

    tracing::debug!(lines = lines.len(), "Extracted text lines");

    Ok(ExtractionResult::from_texts(lines))
}

/// Characters that end a line
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}'
            | '\u{2028}' | '\u{2029}'
    )
}

fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..index]);

        let mut end = index + c.len_utf8();
        if c == '\r' && matches!(chars.peek(), Some((_, '\n'))) {
            chars.next();
            end += 1;
        }
        start = end;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::ExtractionError;

    #[test]
    fn test_keeps_empty_lines() {
        let result = extract_text(b"a\n\nb").unwrap();
        assert_eq!(result.texts, vec!["a", "", "b"]);
        assert!(result.images.is_empty());
    }

    #[test]
    fn test_trailing_newline_and_crlf() {
        let result = extract_text(b"first\r\nsecond\r\n").unwrap();
        assert_eq!(result.texts, vec!["first", "second"]);
    }

    #[test]
    fn test_bare_carriage_returns() {
        let result = extract_text(b"a\rb\rc").unwrap();
        assert_eq!(result.texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unicode_and_control_separators() {
        let result = extract_text("x\u{2028}y\x0cz\u{85}w\x0b".as_bytes()).unwrap();
        assert_eq!(result.texts, vec!["x", "y", "z", "w"]);
    }

    #[test]
    fn test_mixed_terminators() {
        let result = extract_text(b"one\r\n\rtwo\n\r\n").unwrap();
        assert_eq!(result.texts, vec!["one", "", "two", ""]);
    }

    #[test]
    fn test_empty_file() {
        let result = extract_text(b"").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_unicode() {
        let result = extract_text("café\n日本語".as_bytes()).unwrap();
        assert_eq!(result.texts, vec!["café", "日本語"]);
    }

    #[test]
    fn test_invalid_utf8() {
        let result = extract_text(&[0x66, 0x6f, 0xff, 0xfe]);
        assert!(matches!(result, Err(ExtractionError::InvalidText(_))));
    }
}
