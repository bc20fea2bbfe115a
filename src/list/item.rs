//! Item wrapper coupling a content handle to its selection state and style.
//!
//! Flags are only writable inside the crate: every mutation goes through
//! [`List`](crate::List), which keeps the single-selection invariant and
//! decides when to restyle. Setting a flag never restyles by itself.

use crate::domain::{ContentHandle, Size};
use crate::style::{AppliedStyle, ListStyles, StyleVariant};
use std::fmt;

/// One entry of a list.
pub struct ListItem {
    content: ContentHandle,
    content_size: Size,
    selected: bool,
    highlighted: bool,
    pad_left: f32,
    applied: AppliedStyle,
}

impl ListItem {
    /// Wraps `content`, recording its natural size, and applies the Normal style.
    pub(crate) fn new(content: ContentHandle, styles: &ListStyles) -> Self {
        let content_size = content.natural_size();
        Self {
            content,
            content_size,
            selected: false,
            highlighted: false,
            pad_left: 0.0,
            applied: AppliedStyle::compose(StyleVariant::Normal, &styles.item.normal, 0.0),
        }
    }

    /// The wrapped content handle.
    #[must_use]
    pub const fn content(&self) -> &ContentHandle {
        &self.content
    }

    /// Natural size reported by the content when it was wrapped.
    #[must_use]
    pub const fn content_size(&self) -> Size {
        self.content_size
    }

    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    #[must_use]
    pub const fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Extra left padding added on top of the style's own.
    #[must_use]
    pub const fn pad_left(&self) -> f32 {
        self.pad_left
    }

    /// Style applied by the last restyle.
    #[must_use]
    pub const fn applied_style(&self) -> &AppliedStyle {
        &self.applied
    }

    pub(crate) fn set_selected(&mut self, state: bool) {
        self.selected = state;
    }

    pub(crate) fn set_highlighted(&mut self, state: bool) {
        self.highlighted = state;
    }

    /// Re-resolves the style from the current flags and applies it.
    pub(crate) fn refresh_style(&mut self, styles: &ListStyles) {
        let variant = StyleVariant::resolve(self.selected, self.highlighted);
        let style = styles.item.for_variant(variant);
        self.applied = AppliedStyle::compose(variant, style, self.pad_left);
    }

    /// Sets the indent offset and restyles immediately.
    pub(crate) fn set_pad_left(&mut self, pad: f32, styles: &ListStyles) {
        self.pad_left = pad;
        self.refresh_style(styles);
    }
}

impl fmt::Debug for ListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListItem")
            .field("content", &self.content.describe())
            .field("selected", &self.selected)
            .field("highlighted", &self.highlighted)
            .field("pad_left", &self.pad_left)
            .field("variant", &self.applied.variant)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TextContent;

    fn item(styles: &ListStyles) -> ListItem {
        ListItem::new(TextContent::handle("row", Size::new(50.0, 14.0)), styles)
    }

    #[test]
    fn new_items_start_normal_and_sized() {
        let styles = ListStyles::default();
        let item = item(&styles);

        assert_eq!(item.applied_style().variant, StyleVariant::Normal);
        assert_eq!(item.content_size(), Size::new(50.0, 14.0));
        assert!(!item.is_selected());
        assert!(!item.is_highlighted());
    }

    #[test]
    fn setters_do_not_restyle() {
        let styles = ListStyles::default();
        let mut item = item(&styles);

        item.set_selected(true);
        item.set_highlighted(true);
        assert_eq!(item.applied_style().variant, StyleVariant::Normal);

        item.refresh_style(&styles);
        assert_eq!(
            item.applied_style().variant,
            StyleVariant::SelectedAndHighlighted
        );
    }

    #[test]
    fn refresh_yields_the_documented_variant_for_each_flag_pair() {
        let styles = ListStyles::default();
        let mut item = item(&styles);

        for (selected, highlighted, expected) in [
            (false, false, StyleVariant::Normal),
            (true, false, StyleVariant::Selected),
            (false, true, StyleVariant::Highlighted),
            (true, true, StyleVariant::SelectedAndHighlighted),
        ] {
            item.set_selected(selected);
            item.set_highlighted(highlighted);
            item.refresh_style(&styles);

            let applied = item.applied_style();
            let source = styles.item.for_variant(expected);
            assert_eq!(applied.variant, expected);
            assert_eq!(applied.bg_color, source.bg_color);
            assert_eq!(applied.border, source.border);
        }
    }

    #[test]
    fn pad_left_is_added_to_style_padding_and_applied_at_once() {
        let styles = ListStyles::default();
        let mut item = item(&styles);
        let base = styles.item.normal.paddings.left;

        item.set_pad_left(16.0, &styles);

        assert_eq!(item.pad_left(), 16.0);
        assert_eq!(item.applied_style().paddings.left, base + 16.0);
        assert_eq!(
            item.applied_style().paddings.right,
            styles.item.normal.paddings.right
        );
    }
}
