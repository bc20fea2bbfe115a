//! Input mode and key types for the list.
//!
//! The dispatcher interprets input differently depending on two flags held by
//! the list: whether it acts as a dropdown and whether it allows a single
//! selection only. [`InputMode`] collapses them into the three behaviors that
//! actually exist, with dropdown taking precedence.
//!
//! # State Machine
//!
//! - **Dropdown**: hover previews the selection, arrows move it, Enter closes
//! - **Single**: arrows move the selection
//! - **Multi**: arrows move the highlight, Space toggles the highlighted item
//!
//! # Example
//!
//! ```rust
//! use picklist::list::modes::InputMode;
//!
//! assert_eq!(InputMode::from_flags(true, false), InputMode::Dropdown);
//! assert_eq!(InputMode::from_flags(false, false), InputMode::Multi);
//! ```

use crate::scroll::Orientation;

/// Key codes the dispatcher distinguishes.
///
/// Anything else arrives as [`Key::Char`] or [`Key::Other`] and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
    /// A printable character other than space.
    Char(char),
    /// Any other host key code; the list ignores it.
    Other(u32),
}

/// Keys that move the cursor forwards and backwards for an orientation.
///
/// Vertical lists navigate with Down/Up, horizontal lists with Right/Left.
#[must_use]
pub const fn navigation_keys(orientation: Orientation) -> (Key, Key) {
    match orientation {
        Orientation::Vertical => (Key::Down, Key::Up),
        Orientation::Horizontal => (Key::Right, Key::Left),
    }
}

/// Effective input behavior of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// List shown as a dropdown popup.
    ///
    /// Hovering an item selects it without notifying, arrow keys move the
    /// selection, Enter hides the list.
    Dropdown,

    /// Listbox with at most one selected item.
    ///
    /// Clicking an item selects it exclusively, arrow keys move the selection.
    Single,

    /// Listbox with any number of selected items.
    ///
    /// Clicking toggles an item, arrow keys move the highlight cursor and
    /// Space toggles the highlighted item.
    Multi,
}

impl InputMode {
    /// Derives the mode from the list's flags.
    #[must_use]
    pub const fn from_flags(dropdown: bool, single_selection: bool) -> Self {
        if dropdown {
            Self::Dropdown
        } else if single_selection {
            Self::Single
        } else {
            Self::Multi
        }
    }

    /// Whether arrow keys move the selection (true) or the highlight (false).
    #[must_use]
    pub const fn navigates_selection(self) -> bool {
        !matches!(self, Self::Multi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropdown_takes_precedence_over_selection_mode() {
        assert_eq!(InputMode::from_flags(true, true), InputMode::Dropdown);
        assert_eq!(InputMode::from_flags(true, false), InputMode::Dropdown);
        assert_eq!(InputMode::from_flags(false, true), InputMode::Single);
        assert_eq!(InputMode::from_flags(false, false), InputMode::Multi);
    }

    #[test]
    fn only_multi_mode_navigates_the_highlight() {
        assert!(InputMode::Dropdown.navigates_selection());
        assert!(InputMode::Single.navigates_selection());
        assert!(!InputMode::Multi.navigates_selection());
    }

    #[test]
    fn orientation_decides_navigation_keys() {
        assert_eq!(navigation_keys(Orientation::Vertical), (Key::Down, Key::Up));
        assert_eq!(
            navigation_keys(Orientation::Horizontal),
            (Key::Right, Key::Left)
        );
    }
}
