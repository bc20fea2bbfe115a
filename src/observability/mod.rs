//! Tracing subscriber setup.
//!
//! The library only emits `tracing` spans and events; nothing is printed
//! unless the host installs a subscriber. Hosts without their own can call
//! [`init_tracing`] once at startup to get formatted output on stderr.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `trace_level` option in [`Config`](crate::Config)
//! 2. Default: `"info"`
//!
//! The value is an `EnvFilter` directive, so per-module levels such as
//! `"picklist::list=trace,info"` work too.
//!
//! # Usage
//!
//! ```rust
//! use picklist::observability::init_tracing;
//! use picklist::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("list host started");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Subscriber construction and installation

mod init;

pub use init::init_tracing;
