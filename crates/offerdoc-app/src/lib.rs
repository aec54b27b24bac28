//! offerdoc-app library root.
//!
//! The editing session that ties form state, live preview and export
//! together, plus the pieces the `offerdoc` binary needs around it
//! (config, logging, download sinks). Exposed as a library so integration
//! tests can drive a session without the binary.

pub mod config;
pub mod download;
pub mod error;
pub mod logging;
pub mod session;
pub mod surface;
