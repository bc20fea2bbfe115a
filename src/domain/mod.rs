//! Domain layer for the picklist crate.
//!
//! Types shared by every other layer, with no knowledge of styles, scrolling
//! or input.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`content`]: The capability trait for listable content and its handle type
//!
//! # Examples
//!
//! ```
//! use picklist::domain::{ContentHandle, Result, Size, TextContent};
//!
//! fn make_row() -> Result<ContentHandle> {
//!     Ok(TextContent::handle("first row", Size::new(120.0, 18.0)))
//! }
//! ```

pub mod content;
pub mod error;

pub use content::{same_content, Content, ContentHandle, Size, TextContent};
pub use error::{PicklistError, Result};
