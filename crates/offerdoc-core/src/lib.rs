//! offerdoc-core
//!
//! Pure domain types for quote/offer documents: form state, redaction,
//! template variants, filename slugs and date display.
//! No rendering dependency; this is the shared vocabulary of offerdoc.

pub mod dates;
pub mod error;
pub mod models;
pub mod slug;
