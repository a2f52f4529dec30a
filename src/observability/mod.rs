//! Structured logging for the crate.
//!
//! All modules emit `tracing` events and spans (`reduce`, `file_set_item`, ...).
//! Nothing is printed until a host installs a subscriber; [`init_tracing`]
//! sets up the standard one.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup with env filter and stderr or file output

mod init;

pub use init::init_tracing;
