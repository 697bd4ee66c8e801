//! Display attributes for highlighted text
//!
//! Style strings use the Pygments notation: space-separated words such
//! as `#aa0000`, `bg:#ffffff`, `bold` or `noinherit`. The empty string
//! sets nothing and so inherits everything from the parent category.

use crate::error::{HighlightError, Result};

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse from a hex string like "#aa0000", "aa0000" or "#a00"
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self { r, g, b })
            }
            3 => {
                // #rgb is shorthand for #rrggbb
                let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
                Some(Self {
                    r: digit(0)?,
                    g: digit(1)?,
                    b: digit(2)?,
                })
            }
            _ => None,
        }
    }

    /// Format as "#rrggbb"
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Resolved text style attributes
///
/// The default value sets nothing, leaving rendering to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Option<Color>,
    /// Background color
    pub bg: Option<Color>,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Underlined text
    pub underline: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            ..Default::default()
        }
    }

    /// Builder: set background color
    pub fn with_bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Builder: set underline
    pub fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Layer `entry` on top of this style
    pub(crate) fn apply(&mut self, entry: &StyleEntry) {
        if entry.no_inherit {
            *self = Style::default();
        }
        if let Some(fg) = entry.fg {
            self.fg = Some(fg);
        }
        if let Some(bg) = entry.bg {
            self.bg = Some(bg);
        }
        if let Some(bold) = entry.bold {
            self.bold = bold;
        }
        if let Some(italic) = entry.italic {
            self.italic = italic;
        }
        if let Some(underline) = entry.underline {
            self.underline = underline;
        }
    }
}

/// One parsed style string; unset fields inherit from the parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleEntry {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    /// Discard everything inherited before applying this entry
    pub no_inherit: bool,
}

impl StyleEntry {
    /// Parse a Pygments style string
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = |reason: String| HighlightError::InvalidStyle {
            style: text.to_string(),
            reason,
        };

        let mut entry = StyleEntry::default();
        for word in text.split_whitespace() {
            match word {
                "bold" => entry.bold = Some(true),
                "nobold" => entry.bold = Some(false),
                "italic" => entry.italic = Some(true),
                "noitalic" => entry.italic = Some(false),
                "underline" => entry.underline = Some(true),
                "nounderline" => entry.underline = Some(false),
                "noinherit" => entry.no_inherit = true,
                _ => {
                    if let Some(hex) = word.strip_prefix("bg:") {
                        let color = Color::from_hex(hex)
                            .ok_or_else(|| invalid(format!("bad background color '{}'", hex)))?;
                        entry.bg = Some(color);
                    } else if word.starts_with('#') {
                        let color = Color::from_hex(word)
                            .ok_or_else(|| invalid(format!("bad color '{}'", word)))?;
                        entry.fg = Some(color);
                    } else {
                        return Err(invalid(format!("unknown attribute '{}'", word)));
                    }
                }
            }
        }
        Ok(entry)
    }

    /// Check if this entry sets nothing
    pub fn is_inherit(&self) -> bool {
        *self == Self::default()
    }
}

/// A styled span of highlighted text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Byte offset where this span starts (inclusive)
    pub start: usize,
    /// Byte offset where this span ends (exclusive)
    pub end: usize,
    /// Style to apply to this span
    pub style: Style,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize, style: Style) -> Self {
        Self { start, end, style }
    }

    /// Check if this span contains a byte position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Get the length of this span in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if span is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#aa0000"), Some(Color::rgb(0xaa, 0, 0)));
        assert_eq!(Color::from_hex("ffffb6"), Some(Color::rgb(0xff, 0xff, 0xb6)));
        assert_eq!(Color::from_hex("#a0f"), Some(Color::rgb(0xaa, 0x00, 0xff)));
        assert_eq!(Color::from_hex("#aa00"), None);
        assert_eq!(Color::from_hex("#gggggg"), None);
        assert_eq!(Color::from_hex("#ééé"), None);
    }

    #[test]
    fn test_color_to_hex() {
        assert_eq!(Color::rgb(0xaa, 0x00, 0xaa).to_hex(), "#aa00aa");
    }

    #[test]
    fn test_parse_empty_is_inherit() {
        assert!(StyleEntry::parse("").unwrap().is_inherit());
        assert!(StyleEntry::parse("   ").unwrap().is_inherit());
    }

    #[test]
    fn test_parse_words() {
        let entry = StyleEntry::parse("bold #aa0000 bg:#fff noitalic").unwrap();
        assert_eq!(entry.fg, Some(Color::rgb(0xaa, 0, 0)));
        assert_eq!(entry.bg, Some(Color::rgb(0xff, 0xff, 0xff)));
        assert_eq!(entry.bold, Some(true));
        assert_eq!(entry.italic, Some(false));
        assert_eq!(entry.underline, None);
        assert!(!entry.no_inherit);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(matches!(
            StyleEntry::parse("blink"),
            Err(HighlightError::InvalidStyle { .. })
        ));
        assert!(StyleEntry::parse("#zzzzzz").is_err());
        assert!(StyleEntry::parse("bg:red").is_err());
    }

    #[test]
    fn test_apply_layers() {
        let mut style = Style::default();
        style.apply(&StyleEntry::parse("#aa0000 bold").unwrap());
        style.apply(&StyleEntry::parse("nobold italic").unwrap());
        assert_eq!(style, Style::fg(Color::rgb(0xaa, 0, 0)).with_italic());

        style.apply(&StyleEntry::parse("noinherit underline").unwrap());
        assert_eq!(style, Style::default().with_underline());
    }

    #[test]
    fn test_style_builders() {
        let style = Style::fg(Color::rgb(1, 2, 3)).with_bold().with_bg(Color::rgb(4, 5, 6));
        assert_eq!(style.fg, Some(Color::rgb(1, 2, 3)));
        assert_eq!(style.bg, Some(Color::rgb(4, 5, 6)));
        assert!(style.bold);
        assert!(!style.is_default());
        assert!(Style::default().is_default());
    }

    #[test]
    fn test_span_contains() {
        let span = Span::new(5, 10, Style::default());
        assert!(!span.contains(4));
        assert!(span.contains(5));
        assert!(span.contains(9));
        assert!(!span.contains(10));
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
    }
}
