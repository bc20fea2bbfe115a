//! Style tables and the resolver that picks an item's presentation.
//!
//! # Modules
//!
//! - [`table`]: Style table types, built-in tables and TOML loading
//! - [`resolver`]: (selected, highlighted) → [`StyleVariant`] mapping
//!
//! The resolved style an item ends up with is exposed as [`AppliedStyle`], the
//! value a renderer reads back after every restyle pass.

pub mod resolver;
pub mod table;

pub use resolver::StyleVariant;
pub use table::{BorderSizes, Color, Color4, ItemStyle, ItemStyles, ListStyles, ScrollerStyle};

/// Style currently applied to an item.
///
/// Same fields as [`ItemStyle`], except that `paddings.left` already includes
/// the item's extra left padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppliedStyle {
    pub variant: StyleVariant,
    pub border: BorderSizes,
    pub paddings: BorderSizes,
    pub border_color: Color4,
    pub bg_color: Color4,
    pub fg_color: Color,
}

impl AppliedStyle {
    /// Builds the applied form of `style` with `extra_left` added to the left padding.
    #[must_use]
    pub fn compose(variant: StyleVariant, style: &ItemStyle, extra_left: f32) -> Self {
        let mut paddings = style.paddings;
        paddings.left += extra_left;
        Self {
            variant,
            border: style.border,
            paddings,
            border_color: style.border_color,
            bg_color: style.bg_color,
            fg_color: style.fg_color,
        }
    }
}
