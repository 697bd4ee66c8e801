//! Line and column lookup for byte offsets

/// Location of a byte offset within a source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePosition {
    /// 1-based line number
    pub line: usize,
    /// 0-based column, counted in characters
    pub column: usize,
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self { line: 1, column: 0 }
    }
}

impl SourcePosition {
    /// Locate `offset` in `text`
    ///
    /// `\r\n`, `\r` and `\n` each end one line. The offset may equal the
    /// text length (the end-of-input position). Returns None past the
    /// end or inside a multi-byte character.
    pub fn locate(text: &str, offset: usize) -> Option<Self> {
        if offset > text.len() || !text.is_char_boundary(offset) {
            return None;
        }

        let mut line = 1;
        let mut line_start = 0;
        for (i, c) in text[..offset].char_indices() {
            let breaks = match c {
                '\n' => true,
                // The \n of a \r\n pair ends the line
                '\r' => !text[i + 1..].starts_with('\n'),
                _ => false,
            };
            if breaks {
                line += 1;
                line_start = i + 1;
            }
        }

        Some(Self {
            line,
            column: text[line_start..offset].chars().count(),
        })
    }
}
