//! Flat per-element styling.
//!
//! There is no cascade and no theme: every element carries its own
//! background, tint, text color, alpha and visibility, taken straight
//! from its props.

use crate::error::{StyleError, StyleResult};

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    /// Solid red.
    pub const RED: Self = Self::rgba(1.0, 0.0, 0.0, 1.0);
    /// Solid yellow.
    pub const YELLOW: Self = Self::rgba(1.0, 1.0, 0.0, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from RGB values (0-1) with full alpha.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates a color from hex value (0xRRGGBBAA).
    #[must_use]
    pub const fn hex(hex: u32) -> Self {
        let r = ((hex >> 24) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let b = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let a = (hex & 0xFF) as f32 / 255.0;
        Self::rgba(r, g, b, a)
    }

    /// Parses a platform color string.
    ///
    /// Accepts `#RRGGBB`, `#AARRGGBB` and the basic color names
    /// (`red`, `gray`, `navy`, ...), case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidColor`] for anything else.
    pub fn parse(input: &str) -> StyleResult<Self> {
        let trimmed = input.trim();
        if let Some(digits) = trimmed.strip_prefix('#') {
            // from_str_radix alone would take a leading sign.
            if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(StyleError::InvalidColor(input.to_owned()));
            }
            let value = u32::from_str_radix(digits, 16)
                .map_err(|_| StyleError::InvalidColor(input.to_owned()))?;
            return match digits.len() {
                6 => Ok(Self::hex((value << 8) | 0xFF)),
                // #AARRGGBB: rotate alpha to the low byte.
                8 => Ok(Self::hex(value.rotate_left(8))),
                _ => Err(StyleError::InvalidColor(input.to_owned())),
            };
        }
        named_color(&trimmed.to_ascii_lowercase())
            .ok_or_else(|| StyleError::InvalidColor(input.to_owned()))
    }

    /// Returns a new color with different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Packs to 0xAARRGGBB, the layout most host toolkits take.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_argb(self) -> u32 {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.a) << 24) | (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// Converts to array format.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

fn named_color(name: &str) -> Option<Color> {
    let rgb = match name {
        "black" => 0x00_0000,
        "darkgray" | "darkgrey" => 0x44_4444,
        "gray" | "grey" => 0x88_8888,
        "lightgray" | "lightgrey" => 0xCC_CCCC,
        "white" => 0xFF_FFFF,
        "red" => 0xFF_0000,
        "green" => 0x00_FF00,
        "blue" => 0x00_00FF,
        "yellow" => 0xFF_FF00,
        "cyan" | "aqua" => 0x00_FFFF,
        "magenta" | "fuchsia" => 0xFF_00FF,
        "lime" => 0x00_FF00,
        "maroon" => 0x80_0000,
        "navy" => 0x00_0080,
        "olive" => 0x80_8000,
        "purple" => 0x80_0080,
        "silver" => 0xC0_C0C0,
        "teal" => 0x00_8080,
        "transparent" => return Some(Color::TRANSPARENT),
        _ => return None,
    };
    Some(Color::hex((rgb << 8) | 0xFF))
}

/// Parses an optional color prop, logging and skipping a malformed one.
pub(crate) fn parse_color_prop(key: &str, raw: Option<&str>) -> Option<Color> {
    let raw = raw?;
    match Color::parse(raw) {
        Ok(color) => Some(color),
        Err(err) => {
            tracing::warn!("Skipping '{}': {}", key, err);
            None
        }
    }
}

/// Outline drawn around a background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Width in px.
    pub width: f32,
    /// Stroke color.
    pub color: Color,
}

/// Rounded rectangle background.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Background {
    /// Fill color.
    pub fill: Color,
    /// Corner radius in px.
    pub corner_radius: f32,
    /// Optional outline.
    pub stroke: Option<Stroke>,
}

/// Whether an element takes part in rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Rendered.
    #[default]
    Visible,
    /// Not rendered, takes no space.
    Gone,
}

impl Visibility {
    /// `"hidden"` collapses; anything else is visible.
    #[must_use]
    pub fn from_prop(value: Option<&str>) -> Self {
        if value == Some("hidden") {
            Self::Gone
        } else {
            Self::Visible
        }
    }
}

/// Text alignment inside a text-bearing element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Start edge.
    #[default]
    Start,
    /// Centered.
    Center,
    /// End edge.
    End,
}

impl TextAlign {
    /// Parses `left` / `center` / `right`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "left" | "start" => Some(Self::Start),
            "center" => Some(Self::Center),
            "right" | "end" => Some(Self::End),
            _ => None,
        }
    }
}

/// Style of one element.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Shape background.
    pub background: Option<Background>,
    /// Background tint (buttons keep their own shape and take a tint).
    pub tint: Option<Color>,
    /// Text color for text-bearing elements.
    pub text_color: Option<Color>,
    /// Text alignment.
    pub text_align: TextAlign,
    /// Opacity (0-1).
    pub alpha: f32,
    /// Visibility.
    pub visibility: Visibility,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: None,
            tint: None,
            text_color: None,
            text_align: TextAlign::Start,
            alpha: 1.0,
            visibility: Visibility::Visible,
        }
    }
}

impl Style {
    /// Returns true if the element is rendered.
    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        let color = Color::hex(0xFF00_00FF);
        assert!((color.r - 1.0).abs() < 0.01);
        assert!((color.g - 0.0).abs() < 0.01);
        assert!((color.a - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_parse_rgb_and_argb() {
        assert_eq!(Color::parse("#FF0000").unwrap(), Color::RED);
        assert_eq!(Color::parse("#0E64D2").unwrap().to_argb(), 0xFF0E_64D2);
        let translucent = Color::parse("#800000FF").unwrap();
        assert!((translucent.a - 0.502).abs() < 0.01);
        assert!((translucent.b - 1.0).abs() < 0.01);
        assert_eq!(translucent.to_argb(), 0x8000_00FF);
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(Color::parse("Yellow").unwrap(), Color::YELLOW);
        assert_eq!(Color::parse("transparent").unwrap(), Color::TRANSPARENT);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in [
            "", "#FFF", "#GGGGGG", "rouge", "FF0000", "#FF00000", "#+FFFFF", "#+FFFFFFF", "#-0000FF",
        ] {
            assert!(Color::parse(bad).is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn test_malformed_prop_is_skipped() {
        assert_eq!(parse_color_prop("backgroundColor", Some("nope")), None);
        assert_eq!(parse_color_prop("backgroundColor", None), None);
        assert_eq!(parse_color_prop("backgroundColor", Some("#000000")), Some(Color::BLACK));
    }

    #[test]
    fn test_visibility_and_align() {
        assert_eq!(Visibility::from_prop(Some("hidden")), Visibility::Gone);
        assert_eq!(Visibility::from_prop(Some("gone")), Visibility::Visible);
        assert_eq!(Visibility::from_prop(None), Visibility::Visible);
        assert_eq!(TextAlign::parse("RIGHT"), Some(TextAlign::End));
        assert_eq!(TextAlign::parse("justify"), None);
    }
}
