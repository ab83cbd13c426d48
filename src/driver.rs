//! Low-level wire primitives for the 24CSM01 protocol.
//!
//! Register reads send a word address and read back with a repeated start;
//! everything else is a single plain write or read. This module is
//! crate-private — consumers interact with [`Mem24Csm01`](crate::Mem24Csm01)
//! in `eeprom.rs` instead.

use embedded_hal::i2c::I2c;

use crate::error::MemoryError;

/// Thin wrapper around the I2C peripheral mapping bus failures onto
/// [`MemoryError`].
pub(crate) struct WireDriver<I2C> {
    i2c: I2C,
}

impl<I2C> WireDriver<I2C>
where
    I2C: I2c,
{
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Give the peripheral back to the caller.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Write a word address, then read `buffer.len()` bytes with a repeated
    /// start (the chip requires no stop between the two legs).
    pub fn read_register(
        &mut self,
        device: u8,
        word_address: &[u8],
        buffer: &mut [u8],
    ) -> Result<(), MemoryError> {
        self.i2c
            .write_read(device, word_address, buffer)
            .map_err(MemoryError::from_bus)
    }

    /// Send one complete write transaction.
    pub fn write_message(&mut self, device: u8, bytes: &[u8]) -> Result<(), MemoryError> {
        self.i2c.write(device, bytes).map_err(MemoryError::from_bus)
    }

    /// Read `buffer.len()` bytes in one transaction.
    pub fn read_message(&mut self, device: u8, buffer: &mut [u8]) -> Result<(), MemoryError> {
        self.i2c.read(device, buffer).map_err(MemoryError::from_bus)
    }
}

/// Device addressing for one memory access, derived from a 17-bit logical
/// address.
///
/// The 24CSM01 folds the 17th address bit into bit 1 of the device address
/// byte; the remaining 16 bits follow as the two word-address bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AddressPacket {
    pub device_address: u8,
    pub msb: u8,
    pub lsb: u8,
}

impl AddressPacket {
    pub fn new(memory_address: u8, address: u32) -> Self {
        let high_bit = ((address >> 16) & 1) as u8;
        Self {
            device_address: memory_address | (high_bit << 1),
            msb: (address >> 8) as u8,
            lsb: address as u8,
        }
    }
}
