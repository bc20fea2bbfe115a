//! Maps an item's (selected, highlighted) flags to a style variant.

use super::table::{ItemStyle, ItemStyles};

/// The four presentations an item can resolve to.
///
/// The table's `over` entry is a hover style the renderer may use on its own;
/// the resolver never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleVariant {
    Normal,
    Selected,
    Highlighted,
    SelectedAndHighlighted,
}

impl StyleVariant {
    /// Resolves the variant for a pair of flags. Total over all four inputs.
    ///
    /// # Example
    ///
    /// ```
    /// use picklist::style::StyleVariant;
    ///
    /// assert_eq!(StyleVariant::resolve(true, false), StyleVariant::Selected);
    /// assert_eq!(StyleVariant::resolve(false, false), StyleVariant::Normal);
    /// ```
    #[must_use]
    pub const fn resolve(selected: bool, highlighted: bool) -> Self {
        match (selected, highlighted) {
            (true, false) => Self::Selected,
            (false, true) => Self::Highlighted,
            (true, true) => Self::SelectedAndHighlighted,
            (false, false) => Self::Normal,
        }
    }
}

impl ItemStyles {
    /// Returns the table entry for `variant`.
    #[must_use]
    pub const fn for_variant(&self, variant: StyleVariant) -> &ItemStyle {
        match variant {
            StyleVariant::Normal => &self.normal,
            StyleVariant::Selected => &self.selected,
            StyleVariant::Highlighted => &self.highlighted,
            StyleVariant::SelectedAndHighlighted => &self.sel_high,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ListStyles;

    #[test]
    fn resolution_covers_every_flag_combination() {
        let cases = [
            (false, false, StyleVariant::Normal),
            (true, false, StyleVariant::Selected),
            (false, true, StyleVariant::Highlighted),
            (true, true, StyleVariant::SelectedAndHighlighted),
        ];
        for (selected, highlighted, expected) in cases {
            assert_eq!(StyleVariant::resolve(selected, highlighted), expected);
        }
    }

    #[test]
    fn variants_pick_distinct_table_entries() {
        let styles = ListStyles::default();
        let item = &styles.item;

        assert_eq!(item.for_variant(StyleVariant::Normal), &item.normal);
        assert_eq!(item.for_variant(StyleVariant::Selected), &item.selected);
        assert_eq!(item.for_variant(StyleVariant::Highlighted), &item.highlighted);
        assert_eq!(
            item.for_variant(StyleVariant::SelectedAndHighlighted),
            &item.sel_high
        );
    }
}
