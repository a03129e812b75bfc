//! Enum wrapper for reader dispatch.
//!
//! Native `async fn` in traits (RPITIT) is not object-safe, so the reader
//! cannot live behind `Box<dyn RfidReader>`. The enum wrapper gives the
//! gateway one concrete reader type with compile-time dispatch, and a
//! place for real hardware backends to slot in behind feature flags.

use crate::error::Result;
use crate::mock::MockReader;
use crate::traits::RfidReader;

/// Concrete reader dispatch for the gateway.
#[derive(Debug)]
#[non_exhaustive]
pub enum AnyReader {
    /// Mock reader for development and testing.
    Mock(MockReader),
    // Planned variants behind `hardware-spi` / `hardware-gpio`:
    // - Mfrc522(Mfrc522Reader) - SPI-attached MFRC522 module
}

impl RfidReader for AnyReader {
    async fn read_raw(&mut self) -> Result<String> {
        match self {
            Self::Mock(reader) => reader.read_raw().await,
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Mock(reader) => reader.name(),
        }
    }
}
