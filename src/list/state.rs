//! Selection and navigation engine.
//!
//! This module defines [`List`], the owner of every item wrapper and the only
//! writer of their selection and highlight flags. It keeps item order in sync
//! with its scroll container, reconciles single-selection mode, restyles
//! items after mutations and notifies change observers.
//!
//! # Selection vs. Highlight
//!
//! - **Selection**: committed, possibly multi-item state (click, Space, Enter)
//! - **Highlight**: a single navigation cursor used in multi-select lists
//!
//! Navigation can move either one. The "current position" of a cursor is the
//! first item carrying its flag, even when several items are selected.
//!
//! # Invalid Input
//!
//! Positions out of range and unknown content handles are silent no-ops,
//! traced at debug level. Input events can refer to items that were removed
//! between queueing and handling, so these are not programming errors.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use picklist::{List, ListStyles, Size, TextContent};
//!
//! let mut list = List::vertical(100.0, Rc::new(ListStyles::default()));
//! for name in ["alpha", "beta", "gamma"] {
//!     list.add(TextContent::handle(name, Size::new(80.0, 20.0)));
//! }
//!
//! assert_eq!(list.move_next(true, true), Some(0));
//! assert_eq!(list.move_next(true, true), Some(1));
//! assert_eq!(list.selected_items().len(), 1);
//! ```

use super::item::ListItem;
use super::modes::{navigation_keys, InputMode, Key};
use super::observers::{Observers, SubscriptionId};
use crate::domain::{same_content, ContentHandle};
use crate::scroll::{Orientation, ScrollContainer, Scroller};
use crate::style::ListStyles;
use std::rc::Rc;

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Next,
    Previous,
}

impl Direction {
    /// Neighbor of `pos` in this direction, `None` at the boundary.
    fn neighbor(self, pos: usize, len: usize) -> Option<usize> {
        match self {
            Self::Next => (pos + 1 < len).then_some(pos + 1),
            Self::Previous => pos.checked_sub(1),
        }
    }
}

/// Scrollable list of wrapped content with selection state.
///
/// Owns its items and its scroll container `S`; content handles are shared
/// with the caller. See the [module docs](self) for the selection model.
pub struct List<S: ScrollContainer = Scroller> {
    items: Vec<ListItem>,
    scroller: S,
    styles: Rc<ListStyles>,
    orientation: Orientation,
    single_selection: bool,
    dropdown: bool,
    keyboard_focus: bool,
    visible: bool,
    observers: Observers,
}

impl List<Scroller> {
    /// Creates an empty list backed by a [`Scroller`] with the given viewport extent.
    #[must_use]
    pub fn new(orientation: Orientation, viewport: f32, styles: Rc<ListStyles>) -> Self {
        Self::with_scroller(orientation, Scroller::new(orientation, viewport), styles)
    }

    /// Creates an empty vertical list navigated with Down/Up.
    #[must_use]
    pub fn vertical(viewport: f32, styles: Rc<ListStyles>) -> Self {
        Self::new(Orientation::Vertical, viewport, styles)
    }

    /// Creates an empty horizontal list navigated with Right/Left.
    #[must_use]
    pub fn horizontal(viewport: f32, styles: Rc<ListStyles>) -> Self {
        Self::new(Orientation::Horizontal, viewport, styles)
    }
}

impl<S: ScrollContainer> List<S> {
    /// Creates an empty list around a host-provided scroll container.
    ///
    /// The container must be empty; the list mirrors every insertion and
    /// removal into it from then on.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `scroller` already has slots.
    pub fn with_scroller(orientation: Orientation, scroller: S, styles: Rc<ListStyles>) -> Self {
        debug_assert!(
            scroller.is_empty(),
            "scroll container must start empty, found {} slots",
            scroller.len()
        );
        Self {
            items: Vec::new(),
            scroller,
            styles,
            orientation,
            single_selection: true,
            dropdown: false,
            keyboard_focus: false,
            visible: true,
            observers: Observers::default(),
        }
    }

    // ------------------------------------------------------------------
    // Items
    // ------------------------------------------------------------------

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Wrapper at `pos`, for reading flags and the applied style.
    #[must_use]
    pub fn get(&self, pos: usize) -> Option<&ListItem> {
        self.items.get(pos)
    }

    /// Wrappers in display order.
    pub fn items(&self) -> impl Iterator<Item = &ListItem> {
        self.items.iter()
    }

    /// Appends `item` at the end of the list.
    pub fn add(&mut self, item: ContentHandle) {
        self.insert_at(self.items.len(), item);
    }

    /// Inserts `item` at `pos`, shifting later items by one.
    ///
    /// No-op when `pos > len()`.
    pub fn insert_at(&mut self, pos: usize, item: ContentHandle) {
        if pos > self.items.len() {
            tracing::debug!(pos, len = self.items.len(), "insert position out of range");
            return;
        }

        let wrapper = ListItem::new(item, &self.styles);
        self.scroller.insert_at(pos, wrapper.content_size());
        tracing::trace!(pos, content = %wrapper.content().describe(), "item inserted");
        self.items.insert(pos, wrapper);
    }

    /// Removes the item at `pos`. No-op when out of range.
    pub fn remove_at(&mut self, pos: usize) {
        if pos >= self.items.len() {
            tracing::debug!(pos, len = self.items.len(), "remove position out of range");
            return;
        }

        self.items.remove(pos);
        self.scroller.remove_at(pos);
        tracing::trace!(pos, "item removed");
    }

    /// Removes the first item wrapping `item`. No-op when absent.
    pub fn remove(&mut self, item: &ContentHandle) {
        match self.item_position(item) {
            Some(pos) => self.remove_at(pos),
            None => tracing::debug!("remove: item not in list"),
        }
    }

    /// Content at `pos`.
    #[must_use]
    pub fn item_at(&self, pos: usize) -> Option<ContentHandle> {
        self.items.get(pos).map(|wrapper| Rc::clone(wrapper.content()))
    }

    /// Position of `item`, compared by identity; `None` when absent.
    #[must_use]
    pub fn item_position(&self, item: &ContentHandle) -> Option<usize> {
        self.items
            .iter()
            .position(|wrapper| same_content(wrapper.content(), item))
    }

    /// Selected content in list order.
    #[must_use]
    pub fn selected_items(&self) -> Vec<ContentHandle> {
        self.items
            .iter()
            .filter(|wrapper| wrapper.is_selected())
            .map(|wrapper| Rc::clone(wrapper.content()))
            .collect()
    }

    /// Sets the extra left padding of the item at `pos` and restyles it.
    ///
    /// Used by tree views to indent nested entries. No-op when out of range.
    pub fn set_padding_override_at(&mut self, pos: usize, pad: f32) {
        match self.items.get_mut(pos) {
            Some(wrapper) => wrapper.set_pad_left(pad, &self.styles),
            None => tracing::debug!(pos, "padding override position out of range"),
        }
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Selects or deselects `item`.
    ///
    /// No-op when `item` is not in the list or already has `state`. Otherwise
    /// the change goes through [`apply_selection`](Self::apply_selection),
    /// restyles and notifies.
    pub fn set_selected(&mut self, item: &ContentHandle, state: bool) {
        let Some(pos) = self.item_position(item) else {
            tracing::debug!("set_selected: item not in list");
            return;
        };
        self.select_pos(pos, state);
    }

    /// Selects or deselects the item at `pos`.
    ///
    /// No-op when `pos` is out of range or the item already has `state`.
    pub fn select_pos(&mut self, pos: usize, state: bool) {
        let Some(wrapper) = self.items.get(pos) else {
            tracing::debug!(pos, "select position out of range");
            return;
        };
        if wrapper.is_selected() == state {
            tracing::trace!(pos, state, "selection unchanged");
            return;
        }
        self.apply_selection(pos, state, true, true);
    }

    /// Central selection mutation.
    ///
    /// Sets the selected flag of the item at `index`. Unless `force` is set,
    /// nothing happens when the flag already equals `state`. In single-selection
    /// mode every other item is deselected. Always restyles all items, and
    /// notifies observers when `notify` is set.
    pub fn apply_selection(&mut self, index: usize, state: bool, force: bool, notify: bool) {
        let Some(wrapper) = self.items.get_mut(index) else {
            tracing::debug!(index, "apply_selection position out of range");
            return;
        };
        if wrapper.is_selected() == state && !force {
            return;
        }
        wrapper.set_selected(state);

        if self.single_selection {
            for (pos, other) in self.items.iter_mut().enumerate() {
                if pos != index {
                    other.set_selected(false);
                }
            }
        }

        tracing::debug!(index, state, notify, "selection applied");
        self.refresh_styles();
        if notify {
            self.observers.notify();
        }
    }

    /// Position of the first selected item.
    #[must_use]
    pub fn first_selected_index(&self) -> Option<usize> {
        self.items.iter().position(ListItem::is_selected)
    }

    /// Position of the first highlighted item.
    #[must_use]
    pub fn first_highlighted_index(&self) -> Option<usize> {
        self.items.iter().position(ListItem::is_highlighted)
    }

    /// Switches between single and multiple selection.
    ///
    /// Entering single mode with several items selected keeps only the first
    /// one selected, restyles and notifies.
    pub fn set_single_selection_mode(&mut self, single: bool) {
        self.single_selection = single;
        if !single {
            return;
        }

        let mut seen = false;
        let mut cleared = false;
        for wrapper in &mut self.items {
            if wrapper.is_selected() {
                if seen {
                    wrapper.set_selected(false);
                    cleared = true;
                }
                seen = true;
            }
        }

        if cleared {
            tracing::debug!("extra selections cleared entering single mode");
            self.refresh_styles();
            self.observers.notify();
        }
    }

    #[must_use]
    pub const fn single_selection(&self) -> bool {
        self.single_selection
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Moves the selection (`selecting`) or highlight cursor to the next item.
    ///
    /// Returns the position of the item that is active after the move, or
    /// `None` for an empty list. See [`Self::move_previous`] for the rules.
    pub fn move_next(&mut self, selecting: bool, then_refresh: bool) -> Option<usize> {
        self.step(Direction::Next, selecting, then_refresh)
    }

    /// Moves the selection (`selecting`) or highlight cursor to the previous item.
    ///
    /// # Algorithm
    ///
    /// 1. Empty list: nothing happens, returns `None`
    /// 2. No cursor yet: the first item becomes active
    /// 3. Interior cursor: the flag moves to the neighbor, scrolling the
    ///    container by one item if the neighbor is out of view
    /// 4. Cursor at the boundary: nothing changes, the boundary item is returned
    ///
    /// When `then_refresh` is set all items are restyled. Observers are
    /// notified only for selection moves that changed something (2 or 3).
    pub fn move_previous(&mut self, selecting: bool, then_refresh: bool) -> Option<usize> {
        self.step(Direction::Previous, selecting, then_refresh)
    }

    fn step(&mut self, direction: Direction, selecting: bool, then_refresh: bool) -> Option<usize> {
        let _span = tracing::debug_span!("step", ?direction, selecting).entered();

        if self.items.is_empty() {
            return None;
        }

        let cursor = if selecting {
            self.first_selected_index()
        } else {
            self.first_highlighted_index()
        };

        let (active, changed) = match cursor {
            None => {
                self.set_cursor_flag(0, selecting, true);
                (0, true)
            }
            Some(pos) => match direction.neighbor(pos, self.items.len()) {
                Some(next) => {
                    self.set_cursor_flag(pos, selecting, false);
                    self.set_cursor_flag(next, selecting, true);
                    self.scroll_into_view(direction, next);
                    (next, true)
                }
                None => {
                    tracing::trace!(pos, "cursor at boundary");
                    (pos, false)
                }
            },
        };

        if then_refresh {
            self.refresh_styles();
        }
        if selecting && changed {
            self.observers.notify();
        }

        tracing::debug!(active, changed, "cursor moved");
        Some(active)
    }

    fn set_cursor_flag(&mut self, pos: usize, selecting: bool, state: bool) {
        let wrapper = &mut self.items[pos];
        if selecting {
            wrapper.set_selected(state);
        } else {
            wrapper.set_highlighted(state);
        }
    }

    fn scroll_into_view(&mut self, direction: Direction, pos: usize) {
        match direction {
            Direction::Next if !self.scroller.item_visible(pos) => self.scroller.scroll_down(),
            Direction::Previous if pos < self.scroller.first_visible() => {
                self.scroller.scroll_up();
            }
            _ => {}
        }
    }

    // ------------------------------------------------------------------
    // Presentation and modes
    // ------------------------------------------------------------------

    /// Restyles every item from its current flags.
    pub fn refresh_styles(&mut self) {
        for wrapper in &mut self.items {
            wrapper.refresh_style(&self.styles);
        }
    }

    #[must_use]
    pub const fn styles(&self) -> &Rc<ListStyles> {
        &self.styles
    }

    /// Replaces the style table and restyles every item.
    pub fn set_styles(&mut self, styles: Rc<ListStyles>) {
        tracing::debug!(name = %styles.name, "style table replaced");
        self.styles = styles;
        self.refresh_styles();
    }

    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Key moving the cursor forwards.
    #[must_use]
    pub const fn next_key(&self) -> Key {
        navigation_keys(self.orientation).0
    }

    /// Key moving the cursor backwards.
    #[must_use]
    pub const fn previous_key(&self) -> Key {
        navigation_keys(self.orientation).1
    }

    /// Makes the list behave as a dropdown popup.
    pub fn set_dropdown(&mut self, dropdown: bool) {
        self.dropdown = dropdown;
    }

    #[must_use]
    pub const fn is_dropdown(&self) -> bool {
        self.dropdown
    }

    /// Input behavior derived from the dropdown and selection flags.
    #[must_use]
    pub const fn input_mode(&self) -> InputMode {
        InputMode::from_flags(self.dropdown, self.single_selection)
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    #[must_use]
    pub const fn has_keyboard_focus(&self) -> bool {
        self.keyboard_focus
    }

    pub(crate) fn set_keyboard_focus(&mut self, focus: bool) {
        self.keyboard_focus = focus;
    }

    // ------------------------------------------------------------------
    // Scroll container delegation
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn scroller(&self) -> &S {
        &self.scroller
    }

    /// Mutable access to the container, for viewport changes made by the host.
    pub fn scroller_mut(&mut self) -> &mut S {
        &mut self.scroller
    }

    /// Whether the item at `pos` is inside the viewport.
    #[must_use]
    pub fn item_visible(&self, pos: usize) -> bool {
        self.scroller.item_visible(pos)
    }

    // ------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------

    /// Registers `observer` to run whenever the selection changes.
    pub fn subscribe(&mut self, observer: impl FnMut() + 'static) -> SubscriptionId {
        self.observers.subscribe(Box::new(observer))
    }

    /// Removes an observer; returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}

impl<S: ScrollContainer + std::fmt::Debug> std::fmt::Debug for List<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("List")
            .field("items", &self.items)
            .field("scroller", &self.scroller)
            .field("style", &self.styles.name)
            .field("orientation", &self.orientation)
            .field("single_selection", &self.single_selection)
            .field("dropdown", &self.dropdown)
            .field("keyboard_focus", &self.keyboard_focus)
            .field("visible", &self.visible)
            .field("observers", &self.observers)
            .finish()
    }
}
