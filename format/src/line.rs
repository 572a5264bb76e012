//! Positional access to one fixed-width record line.
//!
//! SDIF records are lines of text where every field lives at a fixed
//! 1-based column with a fixed width. `LineReader` slices fields out of an
//! incoming line and `LineWriter` paints fields into an outgoing one.
//! Both work in characters, not bytes, so a name with a non-ASCII letter
//! cannot shift the columns that follow it.

/// A record line meant for reading.
///
/// Example usage:
///
/// ```
/// let line = sdif_format::LineReader::new("D0 Smith, Jane");
/// assert_eq!(line.code(), "D0");
/// assert_eq!(line.field(4, 10), "Smith, Jan");
/// ```
pub struct LineReader<'a> {
    text: &'a str,
}

impl<'a> LineReader<'a> {
    /// Wrap a single line. Any trailing newline must already be stripped.
    pub fn new(text: &'a str) -> LineReader<'a> {
        LineReader { text }
    }

    /// The 2-character record type code in columns 1-2. Shorter lines
    /// return whatever is there.
    pub fn code(&self) -> &'a str {
        self.field(1, 2)
    }

    /// The field starting at 1-based column `start`, `width` characters
    /// wide. A line shorter than `start + width` yields the part that is
    /// present, possibly the empty string.
    pub fn field(&self, start: usize, width: usize) -> &'a str {
        debug_assert!(start >= 1);
        let mut boundaries = self
            .text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(self.text.len()));
        let begin = match boundaries.nth(start - 1) {
            Some(b) => b,
            None => return "",
        };
        let end = boundaries.nth(width.saturating_sub(1)).unwrap_or(self.text.len());
        &self.text[begin..end]
    }

    /// The field with surrounding spaces removed.
    pub fn field_trimmed(&self, start: usize, width: usize) -> &'a str {
        self.field(start, width).trim()
    }
}

/// A record line meant for writing.
///
/// Starts out as `width` spaces; fields are painted over it and the
/// finished string is always exactly `width` characters.
pub struct LineWriter {
    chars: Vec<char>,
}

impl LineWriter {
    pub fn new(width: usize) -> LineWriter {
        LineWriter {
            chars: vec![' '; width],
        }
    }

    /// Paint `text` into the field at 1-based column `start`, keeping at
    /// most `width` characters (the left side survives truncation).
    /// Shorter values leave the rest of the field as spaces.
    pub fn put(&mut self, start: usize, width: usize, text: &str) {
        debug_assert!(start >= 1 && start - 1 + width <= self.chars.len());
        for (i, ch) in text.chars().take(width).enumerate() {
            self.chars[start - 1 + i] = ch;
        }
    }

    /// Paint `text` right-justified within the field.
    pub fn put_right(&mut self, start: usize, width: usize, text: &str) {
        let len = text.chars().count();
        if len >= width {
            self.put(start, width, text);
        } else {
            self.put(start + (width - len), len, text);
        }
    }

    pub fn finish(self) -> String {
        self.chars.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_slicing() {
        let line = LineReader::new("A0xV3      02");
        assert_eq!(line.code(), "A0");
        assert_eq!(line.field(3, 1), "x");
        assert_eq!(line.field(4, 8), "V3      ");
        assert_eq!(line.field_trimmed(4, 8), "V3");
        assert_eq!(line.field(12, 2), "02");
    }

    #[test]
    fn test_short_line_yields_partial_or_empty() {
        let line = LineReader::new("D0 abc");
        assert_eq!(line.field(4, 10), "abc");
        assert_eq!(line.field(40, 12), "");
    }

    #[test]
    fn test_field_is_char_based() {
        let line = LineReader::new("F0 Ség, Ana");
        assert_eq!(line.field(4, 8), "Ség, Ana");
    }

    #[test]
    fn test_writer_pads_and_truncates() {
        let mut w = LineWriter::new(10);
        w.put(1, 2, "D0");
        w.put(4, 4, "abcdef");
        let line = w.finish();
        assert_eq!(line, "D0 abcd   ");
        assert_eq!(line.len(), 10);
    }

    #[test]
    fn test_writer_right_justify() {
        let mut w = LineWriter::new(8);
        w.put_right(1, 8, "1:23.45");
        assert_eq!(w.finish(), " 1:23.45");
    }
}
