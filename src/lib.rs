//! Picklist: selection state for scrollable list widgets.
//!
//! Picklist is the state engine behind a GUI list control. It provides:
//! - Ordered items wrapping caller-owned content, inserted and removed by position or identity
//! - Single and multiple selection with a separate keyboard highlight cursor
//! - Keyboard navigation that keeps the active item scrolled into view
//! - Dropdown, single and multi input modes driven by toolkit events
//! - Style resolution from TOML style tables, reapplied after every change
//! - Synchronous change notification
//!
//! Rendering, layout and event delivery stay with the host toolkit.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host toolkit                                       │  ← Events in, Actions out
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  List layer (list/)                                 │
//! │  - Input dispatch per mode                          │
//! │  - Selection and navigation engine                  │
//! │  - Item wrappers and change observers               │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Styles        │   │ Scrolling     │   │ Domain        │
//! │ (style/)      │   │ (scroll/)     │   │ (domain/)     │
//! │ - Tables      │   │ - Container   │   │ - Content     │
//! │ - Resolver    │   │   trait       │   │ - Errors      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//! ```
//!
//! # Modules
//!
//! - [`domain`]: Content capability trait, sizes and errors
//! - [`style`]: Style tables and the (selected, highlighted) resolver
//! - [`scroll`]: Scroll container seam and the default [`Scroller`]
//! - [`list`]: Item wrappers, the [`List`] engine and [`handle_event`]
//! - [`observability`]: Optional tracing subscriber setup
//!
//! # Configuration
//!
//! Hosts usually build a list from a [`Config`], given either as a key/value
//! map or as a TOML document:
//!
//! ```toml
//! orientation = "vertical"
//! single_selection = false
//! dropdown = false
//! style = "dark"
//! viewport_extent = 240.0
//! trace_level = "debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use picklist::{handle_event, initialize, Action, Config, Event, Key, Size, TextContent};
//!
//! let mut list = initialize(&Config::default());
//! for name in ["apples", "pears", "plums"] {
//!     list.add(TextContent::handle(name, Size::new(100.0, 20.0)));
//! }
//!
//! let picked = std::rc::Rc::new(std::cell::Cell::new(0));
//! let counter = std::rc::Rc::clone(&picked);
//! list.subscribe(move || counter.set(counter.get() + 1));
//!
//! assert_eq!(handle_event(&mut list, &Event::MouseDown), vec![Action::RequestKeyFocus]);
//! handle_event(&mut list, &Event::KeyDown(Key::Down));
//! handle_event(&mut list, &Event::KeyDown(Key::Down));
//!
//! assert_eq!(list.first_selected_index(), Some(1));
//! assert_eq!(picked.get(), 2);
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod domain;
pub mod list;
pub mod observability;
pub mod scroll;
pub mod style;

pub use domain::{same_content, Content, ContentHandle, PicklistError, Result, Size, TextContent};
pub use list::{handle_event, Action, Event, InputMode, Key, List, ListItem, SubscriptionId};
pub use scroll::{Orientation, ScrollContainer, Scroller};
pub use style::{AppliedStyle, ListStyles, StyleVariant};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::rc::Rc;

const DEFAULT_VIEWPORT_EXTENT: f32 = 200.0;

/// List configuration supplied by the host.
///
/// # Example
///
/// ```rust
/// use picklist::{Config, Orientation};
///
/// let config = Config::from_toml_str(r#"
///     orientation = "horizontal"
///     style = "dark"
/// "#)?;
///
/// assert_eq!(config.orientation, Orientation::Horizontal);
/// assert_eq!(config.style_name.as_deref(), Some("dark"));
/// # Ok::<(), picklist::PicklistError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Layout and navigation axis. Default: vertical
    pub orientation: Orientation,

    /// Whether at most one item can be selected. Default: `true`
    pub single_selection: bool,

    /// Whether the list acts as a dropdown popup. Default: `false`
    pub dropdown: bool,

    /// Built-in style table to use.
    ///
    /// Options: `light`, `dark`. Ignored if `style_file` is set.
    #[serde(rename = "style")]
    pub style_name: Option<String>,

    /// Path to a custom TOML style table.
    ///
    /// Takes precedence over `style_name`. See [`style::table`] for the format.
    pub style_file: Option<String>,

    /// Viewport extent of the default scroller along the list's axis. Default: 200
    pub viewport_extent: f32,

    /// Tracing filter used by [`observability::init_tracing`].
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            single_selection: true,
            dropdown: false,
            style_name: None,
            style_file: None,
            viewport_extent: DEFAULT_VIEWPORT_EXTENT,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a host key/value map.
    ///
    /// Hosts that configure widgets through string properties hand them over
    /// as a `BTreeMap<String, String>`. Parsing is lenient: every value that is
    /// missing or malformed falls back to its default.
    ///
    /// # Parameters
    ///
    /// * `map` - Configuration properties
    ///
    /// # Parsing Rules
    ///
    /// - `orientation`: `vertical` | `horizontal` (case-insensitive)
    /// - `single_selection`, `dropdown`: `true` | `false`
    /// - `style`: `String` → `Option<String>`
    /// - `style_file`: `String` → `Option<String>`
    /// - `viewport_extent`: non-negative finite number
    /// - `trace_level`: `String` → `Option<String>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use picklist::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("single_selection".to_string(), "false".to_string());
    /// map.insert("viewport_extent".to_string(), "oops".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert!(!config.single_selection);
    /// assert_eq!(config.viewport_extent, Config::default().viewport_extent);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let orientation = match map.get("orientation").map(|s| s.trim().to_ascii_lowercase()) {
            Some(s) if s == "horizontal" => Orientation::Horizontal,
            Some(s) if s == "vertical" => Orientation::Vertical,
            Some(other) => {
                tracing::debug!(orientation = %other, "unknown orientation, using default");
                defaults.orientation
            }
            None => defaults.orientation,
        };

        let flag = |key: &str, default: bool| {
            map.get(key)
                .and_then(|s| s.trim().parse::<bool>().ok())
                .unwrap_or(default)
        };

        let viewport_extent = map
            .get("viewport_extent")
            .and_then(|s| s.trim().parse::<f32>().ok())
            .filter(|v| v.is_finite() && *v >= 0.0)
            .unwrap_or(defaults.viewport_extent);

        Self {
            orientation,
            single_selection: flag("single_selection", defaults.single_selection),
            dropdown: flag("dropdown", defaults.dropdown),
            style_name: map.get("style").cloned(),
            style_file: map.get("style_file").cloned(),
            viewport_extent,
            trace_level: map.get("trace_level").cloned(),
        }
    }

    /// Parses configuration from a TOML document.
    ///
    /// Unlike [`Config::from_map`] this is strict: unknown keys, wrong types
    /// and invalid values are errors. Omitted keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PicklistError::Config`] if the document cannot be parsed or
    /// `viewport_extent` is negative or not finite.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| PicklistError::Config(format!("Failed to parse config TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read (file not found, permission denied, etc.)
    /// - The content is rejected by [`Config::from_toml_str`]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    fn validate(&self) -> Result<()> {
        if !self.viewport_extent.is_finite() || self.viewport_extent < 0.0 {
            return Err(PicklistError::Config(format!(
                "viewport_extent must be a non-negative number, got {}",
                self.viewport_extent
            )));
        }
        Ok(())
    }
}

/// Builds a list from configuration.
///
/// Creates an empty [`List`] with:
/// - The style table from `style_file`, else `style_name`, else the default table
/// - A [`Scroller`] sized to `viewport_extent`
/// - The configured orientation, selection mode and dropdown flag
///
/// A style file or name that fails to load is traced at debug level and
/// replaced by the default table.
///
/// # Parameters
///
/// * `config` - List configuration
///
/// # Example
///
/// ```rust
/// use picklist::{initialize, Config, InputMode};
///
/// let config = Config {
///     dropdown: true,
///     style_name: Some("dark".to_string()),
///     ..Default::default()
/// };
///
/// let list = initialize(&config);
/// assert_eq!(list.input_mode(), InputMode::Dropdown);
/// assert_eq!(list.styles().name, "dark");
/// ```
#[must_use]
pub fn initialize(config: &Config) -> List<Scroller> {
    tracing::debug!(orientation = ?config.orientation, dropdown = config.dropdown, "initializing list");

    let styles = config.style_file.as_ref().map_or_else(
        || {
            config.style_name.as_ref().map_or_else(ListStyles::default, |style_name| {
                ListStyles::from_name(style_name).unwrap_or_else(|e| {
                    tracing::debug!(style_name = %style_name, error = %e, "failed to load style table, using default");
                    ListStyles::default()
                })
            })
        },
        |style_file| {
            ListStyles::from_file(style_file).unwrap_or_else(|e| {
                tracing::debug!(style_file = %style_file, error = %e, "failed to load style file, using default");
                ListStyles::default()
            })
        },
    );

    let mut list = List::new(config.orientation, config.viewport_extent, Rc::new(styles));
    list.set_single_selection_mode(config.single_selection);
    list.set_dropdown(config.dropdown);
    list
}
