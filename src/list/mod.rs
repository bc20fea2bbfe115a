//! List layer: items, selection state and input dispatch.
//!
//! This module holds everything that gives the list its behavior. Data flows
//! one way:
//!
//! ```text
//! Toolkit Input → Event → handle_event → List mutations → Actions → Host
//!                                              ↓
//!                                   restyle + change observers
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects the host performs after an event
//! - [`handler`]: Event dispatch per input mode
//! - [`item`]: Per-item wrapper with selection flags and applied style
//! - [`modes`]: Input mode derivation and key codes
//! - [`state`]: The selection and navigation engine
//! - `observers`: Change notification registry (internal)
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use picklist::list::{handle_event, Event, List};
//! use picklist::{Key, ListStyles, Size, TextContent};
//!
//! let mut list = List::vertical(60.0, Rc::new(ListStyles::default()));
//! list.add(TextContent::handle("a", Size::new(20.0, 20.0)));
//! list.add(TextContent::handle("b", Size::new(20.0, 20.0)));
//!
//! handle_event(&mut list, &Event::ItemMouseDown(1));
//! assert_eq!(list.first_selected_index(), Some(1));
//!
//! handle_event(&mut list, &Event::KeyDown(Key::Up));
//! assert_eq!(list.first_selected_index(), Some(0));
//! ```

pub mod actions;
pub mod handler;
pub mod item;
pub mod modes;
mod observers;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use item::ListItem;
pub use modes::{InputMode, Key};
pub use observers::SubscriptionId;
pub use state::List;
