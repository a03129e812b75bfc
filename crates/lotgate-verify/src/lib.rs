//! Verification coordination core for the Lotgate parking gateway.
//!
//! This crate owns the one piece of the gateway with real state and
//! ordering semantics: reconciling tag arrivals from two sources (the
//! message-bus listener and directly submitted tags) against the user
//! directory, and exposing a consistent "who is currently verified"
//! answer to any number of concurrent pollers.
//!
//! # State model
//!
//! Two logically independent pieces of shared state, each explicitly
//! owned and serialized:
//!
//! - [`VerificationState`]: a single lock-guarded slot holding the
//!   identity of the most recent successful match (or empty after a miss).
//!   Latest lookup always wins; the overwrite is atomic.
//! - [`ScanMailbox`]: a single-slot mailbox bridging asynchronous bus
//!   events into a bounded synchronous wait. Overwritten by each event,
//!   cleared when a wait begins, taken destructively by the waiter.
//!
//! The mailbox carries the *lookup outcome* ([`BusScan`]), not just the
//! raw tag, so a waiter never has to trust that the shared state was
//! already updated by the time it wakes.

pub mod coordinator;
pub mod error;
pub mod mailbox;
pub mod state;

pub use coordinator::VerificationCoordinator;
pub use error::{VerifyError, VerifyResult};
pub use mailbox::{BusScan, ScanMailbox};
pub use state::{Verification, VerificationState};
