//! Error type for memory read/write operations.

use core::fmt;

use embedded_hal::i2c::{Error as I2cError, ErrorKind, NoAcknowledgeSource};

/// Outcome of a failed memory operation.
///
/// A closed set mirroring the chip protocol's possible outcomes: the first
/// three variants are local pre-flight validation failures detected before
/// any bus traffic; the rest classify a failed bus transaction.
///
/// Configuration and protection operations use plain `bool` success flags
/// instead — see [`Mem24Csm01`](crate::Mem24Csm01).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryError {
    /// The requested address is above [`MAX_MEMORY_ADDRESS`](crate::MAX_MEMORY_ADDRESS).
    AddressExceedsLimit,

    /// The data slice is larger than one 256-byte page.
    BufferTooLarge,

    /// The write would straddle a 256-byte page boundary; the chip wraps
    /// within a page mid-cycle, so such writes are rejected up front.
    NotOnSinglePage,

    /// The device did not acknowledge its address.
    AddressError,

    /// The device did not acknowledge a data byte.
    DataError,

    /// The bus transport reported a timeout.
    Timeout,

    /// Any other bus failure.
    GenericError,
}

impl MemoryError {
    /// Classify a bus error reported by the I2C transport.
    pub fn from_bus<E: I2cError>(error: E) -> Self {
        Self::classify(error.kind())
    }

    /// Map an [`ErrorKind`] onto the chip-protocol outcome set.
    ///
    /// Total over every kind: address NACKs and data NACKs keep their
    /// identity, everything else collapses to [`GenericError`](Self::GenericError).
    /// Blocking HALs surface bus timeouts as `ErrorKind::Other`, so
    /// [`Timeout`](Self::Timeout) is never produced by this mapping; it stays
    /// in the outcome set for transports that report one directly.
    pub fn classify(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address) => Self::AddressError,
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data) => Self::DataError,
            _ => Self::GenericError,
        }
    }
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MemoryError::AddressExceedsLimit => write!(f, "address exceeds the 0x1FFFF limit"),
            MemoryError::BufferTooLarge => write!(f, "buffer larger than one 256-byte page"),
            MemoryError::NotOnSinglePage => write!(f, "write crosses a page boundary"),
            MemoryError::AddressError => write!(f, "device address not acknowledged"),
            MemoryError::DataError => write!(f, "data byte not acknowledged"),
            MemoryError::Timeout => write!(f, "bus timeout"),
            MemoryError::GenericError => write!(f, "bus transaction failed"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MemoryError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            MemoryError::AddressExceedsLimit => defmt::write!(f, "address exceeds limit"),
            MemoryError::BufferTooLarge => defmt::write!(f, "buffer too large"),
            MemoryError::NotOnSinglePage => defmt::write!(f, "not on single page"),
            MemoryError::AddressError => defmt::write!(f, "address NACK"),
            MemoryError::DataError => defmt::write!(f, "data NACK"),
            MemoryError::Timeout => defmt::write!(f, "bus timeout"),
            MemoryError::GenericError => defmt::write!(f, "bus error"),
        }
    }
}
