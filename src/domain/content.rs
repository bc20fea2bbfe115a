//! Listable content handles and the geometry they report.
//!
//! The list never owns what it displays. Callers hand it a [`ContentHandle`]
//! (an `Rc<dyn Content>`) and keep their own clone; identity lookups such as
//! [`List::remove`](crate::List::remove) compare handles by pointer.

use std::fmt;
use std::rc::Rc;

/// Width and height of a piece of content, in the host toolkit's units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Anything that can be shown as a list entry.
///
/// The only capability the list needs is the content's natural size, which
/// it forwards to the scroll container when the entry is inserted.
///
/// # Example
///
/// ```
/// use picklist::{Content, Size};
///
/// struct Label(String);
///
/// impl Content for Label {
///     fn natural_size(&self) -> Size {
///         Size::new(self.0.len() as f32 * 8.0, 16.0)
///     }
/// }
/// ```
pub trait Content {
    /// Size the content wants when laid out without constraints.
    fn natural_size(&self) -> Size;

    /// Short description used in trace output.
    fn describe(&self) -> String {
        String::from("content")
    }
}

/// Shared, non-owning handle to listed content.
pub type ContentHandle = Rc<dyn Content>;

/// Returns true when both handles point at the same content.
#[must_use]
pub fn same_content(a: &ContentHandle, b: &ContentHandle) -> bool {
    // Compare data pointers only; vtable pointers may differ across codegen units.
    std::ptr::eq(
        Rc::as_ptr(a).cast::<u8>(),
        Rc::as_ptr(b).cast::<u8>(),
    )
}

/// Plain text entry with a fixed natural size.
///
/// Handy for hosts that only list strings, and for tests.
#[derive(Clone, PartialEq)]
pub struct TextContent {
    pub text: String,
    pub size: Size,
}

impl TextContent {
    #[must_use]
    pub fn new(text: impl Into<String>, size: Size) -> Self {
        Self {
            text: text.into(),
            size,
        }
    }

    /// Wraps the text in a [`ContentHandle`].
    #[must_use]
    pub fn handle(text: impl Into<String>, size: Size) -> ContentHandle {
        Rc::new(Self::new(text, size))
    }
}

impl Content for TextContent {
    fn natural_size(&self) -> Size {
        self.size
    }

    fn describe(&self) -> String {
        self.text.clone()
    }
}

impl fmt::Debug for TextContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextContent").field(&self.text).finish()
    }
}
