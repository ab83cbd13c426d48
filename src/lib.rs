//! Blocking I2C driver for the Microchip 24CSM01 1-Mbit EEPROM.
//!
//! The 24CSM01 pairs a 128 KiB memory array with a 16-bit configuration
//! register (software write protection over eight 16 KiB zones, a permanent
//! lock), a factory-programmed 16-byte serial number and a manufacturer
//! identification register. This crate encodes that register protocol over
//! any [`embedded-hal`](embedded_hal) I2C implementation.
//!
//! # Architecture
//!
//! The crate is split into thin layers:
//!
//! - **`registers`** — bit-exact protocol constants from the data sheet.
//! - **`driver`** (crate-private) — wire primitives: word-address reads with
//!   repeated start, raw writes, and memory address-packet derivation.
//! - **[`Mem24Csm01`]** — validated, high-level API owning the cached
//!   configuration mirror.
//!
//! # Quick start
//!
//! ```ignore
//! use mem24csm01::Mem24Csm01;
//!
//! // A1/A2 chip-select pins strapped low.
//! let mut eeprom = Mem24Csm01::new(i2c, false, false);
//!
//! let raw = eeprom.read_configuration()?;
//! let mut serial = [0u8; 16];
//! eeprom.serial_number(&mut serial);
//!
//! eeprom.write_block(0x0000, b"hello")?;
//! ```
//!
//! # Caveats
//!
//! - One write cycle cannot cross a 256-byte page boundary;
//!   [`write_block`](Mem24Csm01::write_block) rejects such requests with
//!   [`MemoryError::NotOnSinglePage`].
//! - The driver does not wait out the chip's internal write cycle; poll or
//!   delay between writes as your application requires.
//! - [`lock_configuration_permanently`](Mem24Csm01::lock_configuration_permanently)
//!   is irreversible in hardware.
//!
//! # Features
//!
//! - **`defmt`** — Enable [`defmt::Format`] implementations on public types
//!   for embedded logging.

#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

pub use config::{ConfigurationRegister, ManufacturerId};
pub use eeprom::{zone_protection_mask, Mem24Csm01};
pub use error::MemoryError;
pub use registers::{MAX_MEMORY_ADDRESS, MAX_PAGE_SIZE, SERIAL_NUMBER_LEN, ZONE_COUNT};

mod config;
mod driver;
mod eeprom;
mod error;
#[cfg(test)]
mod mock;
mod registers;
