//! Scroll container seam.
//!
//! The list delegates geometry to a [`ScrollContainer`]: the container keeps
//! one slot per item (in list order), knows which slots fit inside its
//! viewport, and can shift that window by one item. The list only ever asks
//! whether an index is visible and where the window starts, and tells the
//! container to scroll when the active item leaves the window.
//!
//! # Implementations
//!
//! - [`Scroller`]: Cumulative-extent viewport along the list's orientation (default)
//!
//! Hosts with their own layout engine implement the trait on their container
//! and build the list with [`List::with_scroller`](crate::List::with_scroller).

mod scroller;

pub use scroller::Scroller;

use crate::domain::Size;

/// Axis along which the list lays out and navigates its items.
///
/// A closed enum, so an unsupported orientation cannot be constructed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    /// Extent of `size` along this axis.
    #[must_use]
    pub const fn extent(self, size: Size) -> f32 {
        match self {
            Self::Vertical => size.height,
            Self::Horizontal => size.width,
        }
    }
}

/// Geometry collaborator driven by the list.
///
/// Positions passed in are always valid for the call: the list bounds-checks
/// before forwarding.
pub trait ScrollContainer {
    /// Inserts a slot for an item with the given natural size at `pos`.
    ///
    /// Slots inserted before the window start shift the window, so the items
    /// on screen stay the same.
    fn insert_at(&mut self, pos: usize, size: Size);

    /// Removes the slot at `pos`.
    fn remove_at(&mut self, pos: usize);

    /// Number of slots.
    fn len(&self) -> usize;

    /// Returns true when the container has no slots.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the item at `index` lies entirely inside the viewport.
    fn item_visible(&self, index: usize) -> bool;

    /// Index of the first item in the viewport.
    fn first_visible(&self) -> usize;

    /// Shifts the viewport one item towards the end, if there is more content.
    fn scroll_down(&mut self);

    /// Shifts the viewport one item towards the start, if not already there.
    fn scroll_up(&mut self);
}
