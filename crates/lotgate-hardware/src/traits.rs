//! Reader trait definition.
//!
//! The contract between the gateway and the physically attached RFID
//! reader. Implementations block (cooperatively) until a tag is presented
//! and return the raw payload; normalization happens one layer up in
//! [`LocalScanner`](crate::scanner::LocalScanner).

#![allow(async_fn_in_trait)]

use crate::error::Result;

/// A physically attached RFID reader.
///
/// `read_raw` suspends until a credential is presented to the reader and
/// resolves to the raw payload exactly as the hardware reported it. The
/// payload is not assumed to be normalized; callers run it through
/// `TagId::new`.
///
/// Implementations must be `Send` so reads can run on any Tokio worker;
/// exclusivity over the physical device is the caller's responsibility
/// (see `LocalScanner`).
pub trait RfidReader: Send {
    /// Block until a tag is presented, returning its raw payload.
    async fn read_raw(&mut self) -> Result<String>;

    /// Human-readable device name for logs.
    fn name(&self) -> &str;
}
