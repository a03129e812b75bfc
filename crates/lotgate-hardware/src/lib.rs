//! Local RFID reader abstraction for the Lotgate parking gateway.
//!
//! This crate models the physically attached RFID reader behind a trait so
//! the gateway can run against mock hardware in development and tests, with
//! a seam for real SPI/GPIO drivers later.
//!
//! # Design
//!
//! - **Async-first**: the reader trait uses native `async fn` (Rust 1.90 +
//!   Edition 2024 RPITIT); no `async_trait` macro.
//! - **Exclusive access**: the physical reader is exclusive per device.
//!   [`LocalScanner`] serializes reads with a `tokio::sync::Mutex` so the
//!   read operation is never invoked concurrently with itself.
//! - **Guaranteed release**: the reader's low-level pin state is scoped in
//!   a [`PinGuard`] that releases on every exit path, including errors.
//!
//! # Example
//!
//! ```
//! use lotgate_hardware::{LocalScanner, mock::MockReader};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> lotgate_hardware::Result<()> {
//!     let (reader, handle) = MockReader::new();
//!     let scanner = LocalScanner::new(reader, Duration::from_millis(100));
//!
//!     handle.present_tag("4fa9b2c1").await;
//!     let tag = scanner.scan_once().await?;
//!     assert_eq!(tag.as_str(), "4fa9b2c1");
//!     Ok(())
//! }
//! ```

pub mod devices;
pub mod error;
pub mod mock;
pub mod scanner;
pub mod traits;

pub use devices::AnyReader;
pub use error::{HardwareError, Result};
pub use scanner::{LocalScanner, PinGuard};
pub use traits::RfidReader;
