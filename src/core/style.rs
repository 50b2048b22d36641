//! Text style and color
//!
//! A `Style` is an immutable snapshot of the display attributes applied to
//! printed characters. SGR sequences never mutate a style in place; they
//! produce a new value from the previous one.

use serde::{Deserialize, Serialize};

use crate::parser::SgrAttribute;

/// Foreground/background color: the terminal default or one of the 16
/// palette entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// Default terminal color (foreground or background)
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    const PALETTE: [Color; 16] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::BrightBlack,
        Color::BrightRed,
        Color::BrightGreen,
        Color::BrightYellow,
        Color::BrightBlue,
        Color::BrightMagenta,
        Color::BrightCyan,
        Color::BrightWhite,
    ];

    /// Palette entry for an index in 0-15 (0-7 standard, 8-15 bright)
    pub fn from_index(index: u8) -> Option<Color> {
        Self::PALETTE.get(index as usize).copied()
    }

    /// Palette index of this color, `None` for `Default`
    pub fn index(&self) -> Option<u8> {
        Self::PALETTE
            .iter()
            .position(|c| c == self)
            .map(|i| i as u8)
    }

    pub fn is_default(&self) -> bool {
        *self == Color::Default
    }

    pub fn is_bright(&self) -> bool {
        self.index().is_some_and(|i| i >= 8)
    }

    /// Convert this color to RGB using the xterm palette.
    /// `Default` resolves to light gray for foreground and black for background.
    pub fn to_rgb(&self, is_foreground: bool) -> (u8, u8, u8) {
        match self.index() {
            None => {
                if is_foreground {
                    (229, 229, 229)
                } else {
                    (0, 0, 0)
                }
            }
            Some(index) => match index {
                0 => (0, 0, 0),        // Black
                1 => (205, 0, 0),      // Red
                2 => (0, 205, 0),      // Green
                3 => (205, 205, 0),    // Yellow
                4 => (0, 0, 238),      // Blue
                5 => (205, 0, 205),    // Magenta
                6 => (0, 205, 205),    // Cyan
                7 => (229, 229, 229),  // White
                8 => (127, 127, 127),  // Bright Black
                9 => (255, 0, 0),      // Bright Red
                10 => (0, 255, 0),     // Bright Green
                11 => (255, 255, 0),   // Bright Yellow
                12 => (92, 92, 255),   // Bright Blue
                13 => (255, 0, 255),   // Bright Magenta
                14 => (0, 255, 255),   // Bright Cyan
                _ => (255, 255, 255),  // Bright White
            },
        }
    }
}

/// Display attributes of a printed character.
///
/// `Style` is `Copy`: every cell owns its own value, so later style changes
/// can never reach back into cells that were already printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Style {
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub dim: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(default, skip_serializing_if = "Color::is_default")]
    pub fg: Color,
    #[serde(default, skip_serializing_if = "Color::is_default")]
    pub bg: Color,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Style {
    /// Style with only the given background, used for erased cells
    pub fn with_background(bg: Color) -> Self {
        Style {
            bg,
            ..Style::default()
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Style::default()
    }

    /// Combine a list of SGR attributes with this style, left to right,
    /// returning the resulting style.
    ///
    /// Flags accumulate, `Reset` starts over from the default style, and
    /// each color channel is replaced independently of the other.
    #[must_use]
    pub fn apply(self, attrs: &[SgrAttribute]) -> Style {
        attrs.iter().fold(self, |style, attr| style.apply_one(*attr))
    }

    fn apply_one(self, attr: SgrAttribute) -> Style {
        match attr {
            SgrAttribute::Reset => Style::default(),
            SgrAttribute::Bold => Style { bold: true, ..self },
            SgrAttribute::Dim => Style { dim: true, ..self },
            SgrAttribute::Italic => Style { italic: true, ..self },
            SgrAttribute::Underline => Style {
                underline: true,
                ..self
            },
            SgrAttribute::NormalIntensity => Style {
                bold: false,
                dim: false,
                ..self
            },
            SgrAttribute::NotItalic => Style {
                italic: false,
                ..self
            },
            SgrAttribute::NotUnderline => Style {
                underline: false,
                ..self
            },
            SgrAttribute::Foreground(fg) => Style { fg, ..self },
            SgrAttribute::Background(bg) => Style { bg, ..self },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_palette_index() {
        assert_eq!(Color::from_index(1), Some(Color::Red));
        assert_eq!(Color::from_index(9), Some(Color::BrightRed));
        assert_eq!(Color::from_index(16), None);
        assert_eq!(Color::BrightWhite.index(), Some(15));
        assert_eq!(Color::Default.index(), None);
        assert!(Color::BrightCyan.is_bright());
        assert!(!Color::Cyan.is_bright());
    }

    #[test]
    fn test_color_to_rgb() {
        assert_eq!(Color::Red.to_rgb(true), (205, 0, 0));
        assert_eq!(Color::BrightWhite.to_rgb(true), (255, 255, 255));
        assert_eq!(Color::Default.to_rgb(true), (229, 229, 229));
        assert_eq!(Color::Default.to_rgb(false), (0, 0, 0));
    }

    #[test]
    fn test_flags_accumulate() {
        let style = Style::default()
            .apply(&[SgrAttribute::Bold])
            .apply(&[SgrAttribute::Underline]);
        assert!(style.bold);
        assert!(style.underline);
        assert!(!style.italic);
    }

    #[test]
    fn test_reset_replaces_wholesale() {
        let style = Style::default().apply(&[
            SgrAttribute::Bold,
            SgrAttribute::Foreground(Color::Red),
            SgrAttribute::Reset,
            SgrAttribute::Italic,
        ]);
        assert_eq!(
            style,
            Style {
                italic: true,
                ..Style::default()
            }
        );
    }

    #[test]
    fn test_color_channels_are_independent() {
        let style = Style::default()
            .apply(&[SgrAttribute::Background(Color::Blue)])
            .apply(&[SgrAttribute::Foreground(Color::Yellow)]);
        assert_eq!(style.fg, Color::Yellow);
        assert_eq!(style.bg, Color::Blue);

        let style = style.apply(&[SgrAttribute::Foreground(Color::Default)]);
        assert_eq!(style.fg, Color::Default);
        assert_eq!(style.bg, Color::Blue);
    }

    #[test]
    fn test_apply_leaves_original_untouched() {
        let original = Style::default().apply(&[SgrAttribute::Bold]);
        let derived = original.apply(&[SgrAttribute::Dim]);
        assert!(!original.dim);
        assert!(derived.bold && derived.dim);
    }

    #[test]
    fn test_normal_intensity_clears_bold_and_dim() {
        let style = Style::default()
            .apply(&[SgrAttribute::Bold, SgrAttribute::Dim, SgrAttribute::Italic])
            .apply(&[SgrAttribute::NormalIntensity]);
        assert!(!style.bold);
        assert!(!style.dim);
        assert!(style.italic);
    }

    #[test]
    fn test_style_serialization_skips_defaults() {
        let style = Style {
            bold: true,
            fg: Color::Green,
            ..Style::default()
        };
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r#"{"bold":true,"fg":"green"}"#);

        let restored: Style = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, style);
    }
}
