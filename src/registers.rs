//! Protocol constants for the Microchip 24CSM01 EEPROM.
//!
//! The chip exposes three logical I2C targets derived from the same pair of
//! chip-select pins:
//! - the memory array, at a `0b1010_xxx`-pattern device address;
//! - the configuration register, at the matching `0b1011_xxx` address;
//! - the security register (serial number), sharing the configuration
//!   address but selected by a different word address.
//!
//! Register accesses send a two-byte word address immediately after device
//! addressing; the manufacturer register instead uses a reserved host code
//! for both legs of its transaction.

// ---------------------------------------------------------------------------
// Device address patterns (7-bit)
// ---------------------------------------------------------------------------

/// Base device address for memory-array access: `0b1010 A2 A1 0`.
///
/// The A2/A1 chip-select pins occupy bits 3 and 2; bit 1 carries the 17th
/// memory-address bit during reads and writes.
pub const BASE_MEMORY_ADDRESS: u8 = 0b101_0000;

/// Base device address for configuration/security register access:
/// `0b1011 A2 A1 0`.
pub const BASE_CONFIG_ADDRESS: u8 = 0b101_1000;

/// Reserved host code addressing the manufacturer identification register.
///
/// The same code is used for both the device-select write and the 3-byte
/// read that follows it.
pub const RESERVED_HOST_CODE: u8 = 0b111_1100;

// ---------------------------------------------------------------------------
// Word addresses
// ---------------------------------------------------------------------------

/// Two-byte word address selecting the configuration register.
pub const CONFIG_WORD_ADDRESS: [u8; 2] = [0b1000_1000, 0b0000_0000];

/// Two-byte word address selecting the security register (serial number).
pub const SECURITY_WORD_ADDRESS: [u8; 2] = [0b0000_1000, 0b0000_0000];

// ---------------------------------------------------------------------------
// Configuration register layout (16-bit)
// ---------------------------------------------------------------------------

/// Error Correction State: the previous read required ECC (read-only).
pub const ECS_MASK: u16 = 1 << 15;

/// Enhanced Software Write Protection Mode: WP pin ignored, zones apply.
pub const EWPM_MASK: u16 = 1 << 9;

/// Configuration register lock. Once confirmed with [`REGISTER_LOCKED`],
/// this bit is permanent.
pub const LOCK_MASK: u16 = 1 << 8;

/// Lock-confirmation byte leaving the configuration register mutable.
pub const REGISTER_UNLOCKED: u8 = 0x66;

/// Lock-confirmation byte that makes the LOCK bit **permanent and
/// irreversible** when written alongside a set LOCK bit.
pub const REGISTER_LOCKED: u8 = 0x99;

// ---------------------------------------------------------------------------
// Memory geometry
// ---------------------------------------------------------------------------

/// Highest valid memory address (1 Mbit = 128 KiB, 17 address bits).
pub const MAX_MEMORY_ADDRESS: u32 = 0x1_FFFF;

/// Maximum number of bytes in a single page-write cycle.
pub const MAX_PAGE_SIZE: usize = 256;

/// Number of software write-protection zones (16 KiB each).
pub const ZONE_COUNT: u8 = 8;

/// Length of the factory-programmed serial number in the security register.
pub const SERIAL_NUMBER_LEN: usize = 16;
