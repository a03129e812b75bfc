//! Core types shared across the Lotgate parking gateway.
//!
//! This crate defines the vocabulary the rest of the workspace speaks:
//! normalized tag identifiers, matched identities, the shared error
//! taxonomy, and the static configuration constants (bus topics, command
//! payloads, timeouts).

pub mod constants;
pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Identity, TagId};

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
