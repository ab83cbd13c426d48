//! In-memory mirrors of the 24CSM01's configuration and manufacturer
//! registers.
//!
//! [`ConfigurationRegister`] is the driver's cached copy of the 16-bit
//! hardware register. It is populated only by an explicit
//! [`read_configuration`](crate::Mem24Csm01::read_configuration) call and
//! pushed back only by an explicit update, so it can diverge from the chip
//! until an update succeeds.

use crate::registers::{ECS_MASK, EWPM_MASK, LOCK_MASK};

/// Decoded view of the 16-bit configuration register.
///
/// Register layout:
///
/// | bits  | field |
/// |-------|-------|
/// | 15    | ECS — previous read required error correction (read-only) |
/// | 14–10 | unimplemented, read as 0 |
/// | 9     | EWPM — enhanced software write protection mode |
/// | 8     | LOCK — register lock (permanent once confirmed) |
/// | 7–0   | SWP7–SWP0 — per-zone write protection |
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigurationRegister {
    /// The previously executed read operation needed the on-chip ECC.
    pub error_correction_occurred: bool,
    /// Enhanced protection: the WP pin is ignored and the zone bits apply.
    /// When clear, the chip is in legacy protection (WP pin governs).
    pub software_write_protect: bool,
    /// The configuration register is locked. In hardware this is
    /// write-once; the mirror only reflects what was last read or staged.
    pub config_locked: bool,
    /// One bit per 16 KiB zone; bit 0 covers `0x00000..=0x03FFF`.
    pub zone_protection: u8,
}

impl ConfigurationRegister {
    /// Decode the raw big-endian register value.
    pub fn from_raw(raw: u16) -> Self {
        Self {
            error_correction_occurred: raw & ECS_MASK != 0,
            software_write_protect: raw & EWPM_MASK != 0,
            config_locked: raw & LOCK_MASK != 0,
            zone_protection: (raw & 0xFF) as u8,
        }
    }

    /// Encode the mirror as the `[high, low]` pair sent after the word
    /// address. The ECS bit is read-only and never written back.
    pub(crate) fn encode(&self) -> [u8; 2] {
        let high = (u8::from(self.software_write_protect) << 1) | u8::from(self.config_locked);
        [high, self.zone_protection]
    }
}

/// Decoded manufacturer identification register.
///
/// Fetched through the reserved host code; 24 bits packing the manufacturer
/// code, device density code and die revision. Not cached by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ManufacturerId {
    /// JEDEC manufacturer code (bits 23:12), `0x00D` for Microchip.
    pub manufacturer: u16,
    /// Device density code (bits 11:3).
    pub density: u16,
    /// Die revision (bits 2:0).
    pub revision: u8,
}

impl ManufacturerId {
    /// Raw register value the 24CSM01 data sheet specifies for this part.
    pub const EXPECTED_RAW: u32 = 0x00D0D0;

    /// Split a raw 24-bit register value into its fields.
    pub fn from_raw(raw: u32) -> Self {
        Self {
            manufacturer: ((raw >> 12) & 0xFFF) as u16,
            density: ((raw >> 3) & 0x1FF) as u16,
            revision: (raw & 0x7) as u8,
        }
    }
}
