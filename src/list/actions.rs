//! Actions the host toolkit performs on behalf of the list.
//!
//! [`handle_event`](crate::handle_event) mutates the list directly and returns
//! the side effects that belong to the surrounding toolkit (focus management,
//! event propagation, popup visibility) as a `Vec<Action>`, executed by the
//! host in order.
//!
//! # Example
//!
//! ```rust
//! use picklist::{handle_event, Action, Config, Event, Key};
//!
//! let mut list = picklist::initialize(&Config::default());
//! let actions = handle_event(&mut list, &Event::KeyDown(Key::Down));
//! assert_eq!(actions, vec![Action::StopPropagation]);
//! ```

/// Side effects requested by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Give this list exclusive keyboard focus.
    ///
    /// Emitted when the list body receives a mouse-down.
    RequestKeyFocus,

    /// Stop the event from reaching containing layers.
    ///
    /// Emitted for every key the current mode recognizes.
    StopPropagation,

    /// Hide the list.
    ///
    /// Emitted when a dropdown list accepts its selection with Enter; the
    /// list's own `visible` flag is already cleared.
    Hide,
}
