//! Default scroll container keeping per-item extents.

use super::{Orientation, ScrollContainer};
use crate::domain::Size;

/// Tolerance for accumulated float extents.
const EXTENT_EPSILON: f32 = 1e-3;

/// Viewport over a sequence of item extents.
///
/// Each slot stores the item's extent along the orientation axis. The window
/// starts at `first` and includes every following item whose cumulative
/// extent still fits inside `viewport`.
///
/// # Example
///
/// ```
/// use picklist::scroll::{Orientation, ScrollContainer, Scroller};
/// use picklist::Size;
///
/// let mut scroller = Scroller::new(Orientation::Vertical, 40.0);
/// for pos in 0..4 {
///     scroller.insert_at(pos, Size::new(100.0, 20.0));
/// }
///
/// assert!(scroller.item_visible(1));
/// assert!(!scroller.item_visible(2));
///
/// scroller.scroll_down();
/// assert_eq!(scroller.first_visible(), 1);
/// assert!(scroller.item_visible(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Scroller {
    orientation: Orientation,
    viewport: f32,
    extents: Vec<f32>,
    first: usize,
}

impl Scroller {
    #[must_use]
    pub const fn new(orientation: Orientation, viewport: f32) -> Self {
        Self {
            orientation,
            viewport,
            extents: Vec::new(),
            first: 0,
        }
    }

    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub const fn viewport(&self) -> f32 {
        self.viewport
    }

    /// Resizes the viewport; the window start is kept.
    pub fn set_viewport(&mut self, viewport: f32) {
        self.viewport = viewport.max(0.0);
    }

    /// Total extent of all items.
    #[must_use]
    pub fn content_extent(&self) -> f32 {
        self.extents.iter().sum()
    }

    /// Whether items past the end of the window remain hidden.
    fn has_more_below(&self) -> bool {
        self.extents
            .len()
            .checked_sub(1)
            .is_some_and(|last| !self.item_visible(last))
    }
}

impl ScrollContainer for Scroller {
    fn insert_at(&mut self, pos: usize, size: Size) {
        let pos = pos.min(self.extents.len());
        self.extents.insert(pos, self.orientation.extent(size));
        if pos < self.first {
            self.first += 1;
        }
    }

    fn remove_at(&mut self, pos: usize) {
        if pos >= self.extents.len() {
            return;
        }
        self.extents.remove(pos);
        if pos < self.first {
            self.first -= 1;
        }
        self.first = self.first.min(self.extents.len().saturating_sub(1));
    }

    fn len(&self) -> usize {
        self.extents.len()
    }

    fn item_visible(&self, index: usize) -> bool {
        if index < self.first || index >= self.extents.len() {
            return false;
        }
        let used: f32 = self.extents[self.first..=index].iter().sum();
        used <= self.viewport + EXTENT_EPSILON
    }

    fn first_visible(&self) -> usize {
        self.first
    }

    fn scroll_down(&mut self) {
        if self.has_more_below() && self.first + 1 < self.extents.len() {
            self.first += 1;
            tracing::trace!(first = self.first, "scrolled down");
        }
    }

    fn scroll_up(&mut self) {
        if self.first > 0 {
            self.first -= 1;
            tracing::trace!(first = self.first, "scrolled up");
        }
    }
}
