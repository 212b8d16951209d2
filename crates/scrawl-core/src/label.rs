//! Text label model.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a text label.
///
/// Monotonic per board, handed out by [`crate::Board::allocate_id`] and never
/// reused within a session.
pub type LabelId = u64;

/// Font size options, matching the CSS pixel tokens used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontSize {
    #[default]
    #[serde(rename = "16px")]
    Px16,
    #[serde(rename = "20px")]
    Px20,
    #[serde(rename = "24px")]
    Px24,
    #[serde(rename = "32px")]
    Px32,
    #[serde(rename = "40px")]
    Px40,
    #[serde(rename = "48px")]
    Px48,
    #[serde(rename = "56px")]
    Px56,
    #[serde(rename = "64px")]
    Px64,
}

impl FontSize {
    /// Get the CSS token for this size.
    pub fn css(&self) -> &'static str {
        match self {
            FontSize::Px16 => "16px",
            FontSize::Px20 => "20px",
            FontSize::Px24 => "24px",
            FontSize::Px32 => "32px",
            FontSize::Px40 => "40px",
            FontSize::Px48 => "48px",
            FontSize::Px56 => "56px",
            FontSize::Px64 => "64px",
        }
    }

    /// Get all available font sizes.
    pub fn all() -> &'static [FontSize] {
        &[
            FontSize::Px16,
            FontSize::Px20,
            FontSize::Px24,
            FontSize::Px32,
            FontSize::Px40,
            FontSize::Px48,
            FontSize::Px56,
            FontSize::Px64,
        ]
    }
}

/// Font style options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// Upright text (default).
    #[default]
    Normal,
    /// Italic text.
    Italic,
    /// Oblique (slanted) text.
    Oblique,
}

impl FontStyle {
    /// Get the CSS token for this style.
    pub fn css(&self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
            FontStyle::Oblique => "oblique",
        }
    }

    /// Get all available font styles.
    pub fn all() -> &'static [FontStyle] {
        &[FontStyle::Normal, FontStyle::Italic, FontStyle::Oblique]
    }
}

/// Font family options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontFamily {
    /// Roboto clean sans-serif font (default).
    #[default]
    Roboto,
    /// Edu AU VIC WA NT Pre handwriting font.
    #[serde(rename = "Edu AU VIC WA NT Pre")]
    EduAu,
    /// Londrina Sketch hand-drawn display font.
    #[serde(rename = "Londrina Sketch")]
    LondrinaSketch,
}

impl FontFamily {
    /// Get the font family name as used by the renderer.
    pub fn name(&self) -> &'static str {
        match self {
            FontFamily::Roboto => "Roboto",
            FontFamily::EduAu => "Edu AU VIC WA NT Pre",
            FontFamily::LondrinaSketch => "Londrina Sketch",
        }
    }

    /// Get all available font families.
    pub fn all() -> &'static [FontFamily] {
        &[
            FontFamily::Roboto,
            FontFamily::EduAu,
            FontFamily::LondrinaSketch,
        ]
    }
}

/// 24-bit text color, serialized as a `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Parse a hex color string (`#rgb`, `#rrggbb`, or `#rrggbbaa`; alpha
    /// is accepted and ignored).
    pub fn parse(color: &str) -> Option<Self> {
        let hex = color.strip_prefix('#')?.trim();
        // Multi-byte input would fall on a char boundary below; it can never
        // be valid hex anyway.
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            3 => {
                // #rgb -> #rrggbb
                let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
                Some(Self::new(r, g, b))
            }
            6 | 8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::black()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid color: {s}")))
    }
}

/// Style properties shared by the style pickers and new labels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LabelStyle {
    pub font_size: FontSize,
    pub font_style: FontStyle,
    pub font_family: FontFamily,
    pub color: Rgb,
}

/// A draggable text label on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextLabel {
    /// Unique identifier, assigned at creation.
    pub id: LabelId,
    /// The text content.
    pub content: String,
    /// Font size token.
    pub font_size: FontSize,
    /// Font style token.
    pub font_style: FontStyle,
    /// Font family token.
    pub font_family: FontFamily,
    /// Text color.
    #[serde(rename = "textColor")]
    pub color: Rgb,
    /// Position (top-left corner) on the canvas.
    pub position: Point,
}

impl TextLabel {
    /// Where newly created labels land on the canvas.
    pub const SPAWN_POSITION: Point = Point::new(50.0, 50.0);

    /// Create a new label at the spawn position with default styling.
    pub fn new(id: LabelId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            font_size: FontSize::default(),
            font_style: FontStyle::default(),
            font_family: FontFamily::default(),
            color: Rgb::default(),
            position: Self::SPAWN_POSITION,
        }
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: FontSize) -> Self {
        self.font_size = size;
        self
    }

    /// Set the font style.
    pub fn with_font_style(mut self, style: FontStyle) -> Self {
        self.font_style = style;
        self
    }

    /// Set the font family.
    pub fn with_font_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }

    /// Set the text color.
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// Apply a full style-picker snapshot.
    pub fn with_style(mut self, style: LabelStyle) -> Self {
        self.font_size = style.font_size;
        self.font_style = style.font_style;
        self.font_family = style.font_family;
        self.color = style.color;
        self
    }

    /// Set the position.
    pub fn at(mut self, position: Point) -> Self {
        self.position = position;
        self
    }
}
