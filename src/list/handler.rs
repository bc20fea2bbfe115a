//! Input dispatch for the list.
//!
//! [`handle_event`] translates toolkit input into engine calls according to
//! the list's [`InputMode`] and returns the side effects the host must carry
//! out. Events from the list body and from individual items share one
//! [`Event`] enum; item events carry the item's position.
//!
//! # Event Types
//!
//! - **Pointer**: `MouseDown`, `ItemMouseDown`, `CursorEnter`
//! - **Keyboard**: `KeyDown`, `KeyRepeat` (handled identically)
//! - **Focus**: `FocusLost`
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use picklist::{handle_event, Action, Event, Key, List, ListStyles, Size, TextContent};
//!
//! let mut list = List::vertical(100.0, Rc::new(ListStyles::default()));
//! list.add(TextContent::handle("one", Size::new(40.0, 12.0)));
//! list.set_dropdown(true);
//!
//! handle_event(&mut list, &Event::KeyDown(Key::Down));
//! let actions = handle_event(&mut list, &Event::KeyDown(Key::Enter));
//!
//! assert_eq!(actions, vec![Action::StopPropagation, Action::Hide]);
//! assert!(!list.is_visible());
//! ```

use super::actions::Action;
use super::modes::{InputMode, Key};
use super::state::List;
use crate::scroll::ScrollContainer;

/// Input delivered to the list by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Mouse button pressed on the list body.
    MouseDown,

    /// Mouse button pressed on the item at the given position.
    ItemMouseDown(usize),

    /// Pointer entered the item at the given position.
    CursorEnter(usize),

    /// Key pressed while the list has keyboard focus.
    KeyDown(Key),

    /// Auto-repeat of a held key.
    KeyRepeat(Key),

    /// The list lost keyboard focus.
    FocusLost,
}

/// Processes an event, mutates the list and returns actions to execute.
///
/// # Parameters
///
/// * `list` - List receiving the event
/// * `event` - Event to process
///
/// # Returns
///
/// Actions for the host, in order. Empty when the event means nothing in the
/// list's current mode or refers to a position that no longer exists.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event and the input mode.
pub fn handle_event<S: ScrollContainer>(list: &mut List<S>, event: &Event) -> Vec<Action> {
    let mode = list.input_mode();
    let _span = tracing::debug_span!("handle_event", ?event, ?mode).entered();

    match *event {
        Event::MouseDown => {
            list.set_keyboard_focus(true);
            vec![Action::RequestKeyFocus]
        }
        Event::ItemMouseDown(pos) => {
            item_clicked(list, pos);
            vec![]
        }
        Event::CursorEnter(pos) => {
            if mode == InputMode::Dropdown && pos < list.len() {
                list.apply_selection(pos, true, true, false);
            }
            vec![]
        }
        Event::KeyDown(key) | Event::KeyRepeat(key) => key_pressed(list, mode, key),
        Event::FocusLost => {
            list.set_keyboard_focus(false);
            vec![]
        }
    }
}

fn item_clicked<S: ScrollContainer>(list: &mut List<S>, pos: usize) {
    let Some(item) = list.get(pos) else {
        tracing::debug!(pos, "click on missing item");
        return;
    };

    if list.single_selection() {
        list.apply_selection(pos, true, true, true);
    } else {
        let toggled = !item.is_selected();
        list.apply_selection(pos, toggled, true, true);
    }
}

fn key_pressed<S: ScrollContainer>(list: &mut List<S>, mode: InputMode, key: Key) -> Vec<Action> {
    let selecting = mode.navigates_selection();

    let recognized = if key == list.next_key() {
        list.move_next(selecting, true);
        true
    } else if key == list.previous_key() {
        list.move_previous(selecting, true);
        true
    } else {
        match (mode, key) {
            (InputMode::Dropdown, Key::Enter) => {
                list.set_visible(false);
                return vec![Action::StopPropagation, Action::Hide];
            }
            (InputMode::Multi, Key::Space) => {
                toggle_highlighted(list);
                true
            }
            _ => false,
        }
    };

    if recognized {
        vec![Action::StopPropagation]
    } else {
        tracing::trace!(?key, "key ignored");
        vec![]
    }
}

fn toggle_highlighted<S: ScrollContainer>(list: &mut List<S>) {
    let Some(pos) = list.first_highlighted_index() else {
        tracing::debug!("space with nothing highlighted");
        return;
    };
    let selected = list.get(pos).is_some_and(|item| item.is_selected());
    list.apply_selection(pos, !selected, true, true);
}
