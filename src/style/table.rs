//! Style tables and color parsing.
//!
//! A [`ListStyles`] value describes how the list and each of its items look in
//! every state. Tables are plain immutable data, shared by `Rc` between a list
//! and its items, and can come from one of the built-in TOML tables or from a
//! custom TOML file.
//!
//! # Built-in Tables
//!
//! - `light`: Light background with a blue selection (default)
//! - `dark`: Dark background with a teal selection
//!
//! # TOML Format
//!
//! Colors are hex strings, `#rrggbb` or `#rrggbbaa`. Border and padding sizes
//! default to zero when omitted.
//!
//! ```toml
//! name = "my-table"
//!
//! [scroller]
//! bg_color = "#ffffff"
//! border_color = "#a0a0a0"
//! scrollbar_width = 12.0
//!
//! [item.normal]
//! paddings = { top = 1.0, right = 4.0, bottom = 1.0, left = 4.0 }
//! border_color = "#00000000"
//! bg_color = "#ffffff"
//! fg_color = "#202020"
//!
//! # item.over, item.selected, item.highlighted and item.sel_high follow the same shape
//! ```
//!
//! # Example
//!
//! ```
//! use picklist::style::ListStyles;
//!
//! let styles = ListStyles::from_name("dark").unwrap();
//! assert_eq!(styles.name, "dark");
//! ```

use crate::domain::error::{PicklistError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// An opaque RGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// An RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color4 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Edge sizes used for both borders and paddings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderSizes {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl BorderSizes {
    #[must_use]
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Presentation of a single item in one state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemStyle {
    #[serde(default)]
    pub border: BorderSizes,
    #[serde(default)]
    pub paddings: BorderSizes,
    pub border_color: Color4,
    pub bg_color: Color4,
    pub fg_color: Color,
}

/// The five item presentations of a list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemStyles {
    /// Neither selected nor highlighted.
    pub normal: ItemStyle,
    /// Pointer hovering over the item.
    pub over: ItemStyle,
    pub selected: ItemStyle,
    pub highlighted: ItemStyle,
    /// Selected and highlighted at once.
    pub sel_high: ItemStyle,
}

/// Appearance of the scroll container hosting the items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollerStyle {
    pub bg_color: Color4,
    pub border_color: Color4,
    #[serde(default)]
    pub border: BorderSizes,
    /// Thickness of the scrollbar track.
    #[serde(default)]
    pub scrollbar_width: f32,
}

/// Complete style table for a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListStyles {
    /// Human-readable table name.
    pub name: String,
    pub scroller: ScrollerStyle,
    pub item: ItemStyles,
}

impl ListStyles {
    /// Loads a built-in table by name.
    ///
    /// Supported names: `light`, `dark`.
    ///
    /// # Errors
    ///
    /// Returns [`PicklistError::Style`] if the name is unknown.
    pub fn from_name(name: &str) -> Result<Self> {
        let toml_str = match name {
            "light" => include_str!("../../styles/light.toml"),
            "dark" => include_str!("../../styles/dark.toml"),
            _ => return Err(PicklistError::Style(format!("unknown style table '{name}'"))),
        };

        Self::from_toml_str(toml_str)
    }

    /// Parses a table from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`PicklistError::Style`] on invalid TOML, missing fields or
    /// malformed colors.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| PicklistError::Style(format!("Failed to parse style TOML: {e}")))
    }

    /// Loads a table from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read (file not found, permission denied, etc.)
    /// - The TOML content cannot be parsed (invalid syntax, missing fields, bad colors)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

impl Default for ListStyles {
    /// Returns the built-in `light` table.
    ///
    /// # Panics
    ///
    /// Panics if the built-in table fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("light").expect("Built-in light style table should always parse")
    }
}

/// Parses `#rrggbb` or `#rrggbbaa` into 0-255 channels.
fn parse_hex(hex: &str) -> Result<[u8; 4]> {
    let digits = hex.trim().trim_start_matches('#');
    if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
        return Err(PicklistError::Style(format!("invalid color '{hex}'")));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|_| PicklistError::Style(format!("invalid color '{hex}'")))
    };

    let alpha = if digits.len() == 8 { channel(6)? } else { 255 };
    Ok([channel(0)?, channel(2)?, channel(4)?, alpha])
}

fn to_unit(channel: u8) -> f32 {
    f32::from(channel) / 255.0
}

fn to_byte(unit: f32) -> u8 {
    // Clamped first, so the cast cannot truncate out of range.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let byte = (unit.clamp(0.0, 1.0) * 255.0).round() as u8;
    byte
}

impl Color {
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color; any alpha digits are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PicklistError::Style`] for malformed input.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let [r, g, b, _] = parse_hex(hex)?;
        Ok(Self::new(to_unit(r), to_unit(g), to_unit(b)))
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", to_byte(self.r), to_byte(self.g), to_byte(self.b))
    }
}

impl Color4 {
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parses a hex color; alpha defaults to opaque.
    ///
    /// # Errors
    ///
    /// Returns [`PicklistError::Style`] for malformed input.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let [r, g, b, a] = parse_hex(hex)?;
        Ok(Self::new(to_unit(r), to_unit(g), to_unit(b), to_unit(a)))
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            to_byte(self.r),
            to_byte(self.g),
            to_byte(self.b),
            to_byte(self.a)
        )
    }
}

impl TryFrom<String> for Color {
    type Error = PicklistError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for Color4 {
    type Error = PicklistError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<Color4> for String {
    fn from(color: Color4) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_tables_parse() {
        let light = ListStyles::from_name("light").unwrap();
        let dark = ListStyles::from_name("dark").unwrap();

        assert_eq!(light.name, "light");
        assert_eq!(dark.name, "dark");
        assert_ne!(light.item.selected, dark.item.selected);
    }

    #[test]
    fn default_is_the_light_table() {
        assert_eq!(ListStyles::default(), ListStyles::from_name("light").unwrap());
    }

    #[test]
    fn unknown_builtin_is_a_style_error() {
        let err = ListStyles::from_name("neon").unwrap_err();
        assert!(matches!(err, PicklistError::Style(_)));
    }

    #[test]
    fn hex_parsing_handles_alpha_and_rejects_garbage() {
        let opaque = Color4::from_hex("#ff0000").unwrap();
        assert_eq!(opaque, Color4::new(1.0, 0.0, 0.0, 1.0));

        let clear = Color4::from_hex("#00000000").unwrap();
        assert_eq!(clear.a, 0.0);

        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#zzzzzz").is_err());
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn hex_output_reparses_to_the_same_color() {
        let color = Color::from_hex("#3a7bd5").unwrap();
        assert_eq!(color.to_hex(), "#3a7bd5");
    }

    #[test]
    fn malformed_color_in_table_is_reported() {
        let light = include_str!("../../styles/light.toml");
        let broken = light.replacen("#ffffff", "#fffff", 1);

        let err = ListStyles::from_toml_str(&broken).unwrap_err();
        assert!(err.to_string().contains("Failed to parse style TOML"));
    }

    #[test]
    fn table_loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(include_str!("../../styles/dark.toml").as_bytes())
            .unwrap();

        let styles = ListStyles::from_file(file.path()).unwrap();
        assert_eq!(styles, ListStyles::from_name("dark").unwrap());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ListStyles::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, PicklistError::Io(_)));
    }
}
