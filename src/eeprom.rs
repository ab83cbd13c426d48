//! High-level interface for the 24CSM01 EEPROM.
//!
//! [`Mem24Csm01`] wraps the low-level wire driver with address derivation,
//! pre-flight validation of memory accesses, and the cached configuration
//! mirror.

use embedded_hal::i2c::I2c;

use crate::config::{ConfigurationRegister, ManufacturerId};
use crate::driver::{AddressPacket, WireDriver};
use crate::error::MemoryError;
use crate::registers::{
    BASE_CONFIG_ADDRESS, BASE_MEMORY_ADDRESS, CONFIG_WORD_ADDRESS, MAX_MEMORY_ADDRESS,
    MAX_PAGE_SIZE, REGISTER_LOCKED, REGISTER_UNLOCKED, RESERVED_HOST_CODE, SECURITY_WORD_ADDRESS,
    SERIAL_NUMBER_LEN, ZONE_COUNT,
};

/// Build a zone-protection mask from individual zone flags.
///
/// `zones[0]` covers zone 0 (`0x00000..=0x03FFF`), `zones[7]` covers zone 7
/// (`0x1C000..=0x1FFFF`).
///
/// ```
/// use mem24csm01::zone_protection_mask;
///
/// let mask = zone_protection_mask([true, false, true, false, false, false, false, false]);
/// assert_eq!(mask, 0b0000_0101);
/// ```
pub fn zone_protection_mask(zones: [bool; 8]) -> u8 {
    zones
        .iter()
        .enumerate()
        .fold(0, |mask, (zone, &on)| mask | (u8::from(on) << zone))
}

/// Driver for the Microchip 24CSM01 1-Mbit I2C EEPROM.
///
/// Translates high-level operations into the chip's register protocol:
/// configuration and write-protection management, serial number and
/// manufacturer identification, and byte/block memory access.
///
/// All calls are blocking and issue a single attempt; the driver performs no
/// retries and keeps no state besides the configuration mirror. It owns the
/// I2C peripheral exclusively — if the bus is shared, serialize access
/// externally.
///
/// # Error idioms
///
/// Configuration and protection operations return `bool` (`true` = accepted
/// by the hardware); memory operations return `Result<_, MemoryError>` and
/// distinguish local validation failures from bus failures.
///
/// # Example
///
/// ```ignore
/// use mem24csm01::Mem24Csm01;
///
/// // `i2c` is any initialized `embedded-hal` I2C implementation;
/// // A1 and A2 mirror the chip-select pin strapping.
/// let mut eeprom = Mem24Csm01::new(i2c, false, false);
///
/// eeprom.write_byte(0x0040, 0xA5)?;
/// let value = eeprom.read_byte(0x0040)?;
/// ```
pub struct Mem24Csm01<I2C> {
    driver: WireDriver<I2C>,
    /// Device address for memory-array access.
    memory_address: u8,
    /// Device address for the configuration register.
    config_address: u8,
    /// Device address for the security register (same as `config_address`
    /// on this chip, kept separate to mirror the datasheet's addressing).
    security_address: u8,
    configuration: ConfigurationRegister,
}

impl<I2C> Mem24Csm01<I2C>
where
    I2C: I2c,
{
    /// Create a driver from the chip-select pin strapping.
    ///
    /// `a1` and `a2` mirror the levels of the A1 and A2 pins (`true` = VCC).
    /// Derives all three device addresses; performs no bus I/O, so the
    /// peripheral must already be initialized by the HAL.
    pub fn new(i2c: I2C, a1: bool, a2: bool) -> Self {
        let pins = (u8::from(a2) << 3) | (u8::from(a1) << 2);
        let config_address = BASE_CONFIG_ADDRESS | pins;
        Self {
            driver: WireDriver::new(i2c),
            memory_address: BASE_MEMORY_ADDRESS | pins,
            config_address,
            security_address: config_address,
            configuration: ConfigurationRegister::default(),
        }
    }

    /// Create a driver from an explicit memory-access device address.
    ///
    /// The configuration/security address is derived by setting bit 4
    /// (`0b1010_xxx` becomes `0b1011_xxx`).
    pub fn with_base_address(i2c: I2C, memory_address: u8) -> Self {
        let config_address = memory_address | (1 << 4);
        Self {
            driver: WireDriver::new(i2c),
            memory_address,
            config_address,
            security_address: config_address,
            configuration: ConfigurationRegister::default(),
        }
    }

    /// Destroy the driver and hand the I2C peripheral back.
    pub fn release(self) -> I2C {
        self.driver.release()
    }

    // -----------------------------------------------------------------------
    // Configuration and security registers
    // -----------------------------------------------------------------------

    /// Read the 16-bit configuration register from the chip.
    ///
    /// Returns the raw big-endian value and refreshes the cached mirror
    /// returned by [`configuration`](Self::configuration).
    pub fn read_configuration(&mut self) -> Result<u16, MemoryError> {
        let mut raw = [0u8; 2];
        self.driver
            .read_register(self.config_address, &CONFIG_WORD_ADDRESS, &mut raw)?;
        let value = u16::from_be_bytes(raw);
        self.configuration = ConfigurationRegister::from_raw(value);
        Ok(value)
    }

    /// The cached configuration mirror.
    ///
    /// Only [`read_configuration`](Self::read_configuration) refreshes it
    /// from hardware; the protection setters mutate it locally before
    /// pushing, so it can diverge from the chip until an update succeeds.
    /// Re-read after locking to confirm the hardware state.
    pub fn configuration(&self) -> ConfigurationRegister {
        self.configuration
    }

    /// Read the 16-byte factory serial number from the security register.
    ///
    /// Returns `false` without touching the bus unless `buffer` is exactly
    /// [`SERIAL_NUMBER_LEN`] bytes long, and `false` on a failed
    /// transaction.
    pub fn serial_number(&mut self, buffer: &mut [u8]) -> bool {
        if buffer.len() != SERIAL_NUMBER_LEN {
            return false;
        }
        self.driver
            .read_register(self.security_address, &SECURITY_WORD_ADDRESS, buffer)
            .is_ok()
    }

    /// Read the raw 24-bit manufacturer identification register.
    ///
    /// Uses the reserved host code for both transaction legs, selecting this
    /// device by writing its memory address in read mode. The data sheet
    /// value for this part is [`ManufacturerId::EXPECTED_RAW`]; validation
    /// is left to the caller.
    pub fn manufacturer_register(&mut self) -> Result<u32, MemoryError> {
        let mut raw = [0u8; 3];
        self.driver
            .read_register(RESERVED_HOST_CODE, &[self.memory_address << 1], &mut raw)?;
        Ok(u32::from(raw[0]) << 16 | u32::from(raw[1]) << 8 | u32::from(raw[2]))
    }

    /// Read and decode the manufacturer identification register.
    pub fn manufacturer_id(&mut self) -> Result<ManufacturerId, MemoryError> {
        Ok(ManufacturerId::from_raw(self.manufacturer_register()?))
    }

    /// Push the cached configuration mirror to the chip.
    ///
    /// Always sends the *unlock* confirmation byte, so the register stays
    /// mutable even when the mirror's lock flag is set; making the lock
    /// permanent requires the explicit
    /// [`lock_configuration_permanently`](Self::lock_configuration_permanently).
    pub fn update_config_register(&mut self) -> bool {
        self.push_configuration(REGISTER_UNLOCKED)
    }

    /// Permanently lock the configuration register. **Irreversible.**
    ///
    /// Sets the mirror's lock flag and writes it with the lock-confirmation
    /// byte. Once the chip accepts this transaction the configuration
    /// register — zone protection included — can never be changed again.
    /// Re-read the configuration afterwards to confirm the chip took it.
    pub fn lock_configuration_permanently(&mut self) -> bool {
        self.configuration.config_locked = true;
        self.push_configuration(REGISTER_LOCKED)
    }

    fn push_configuration(&mut self, confirm_lock: u8) -> bool {
        let [high, low] = self.configuration.encode();
        let message = [
            CONFIG_WORD_ADDRESS[0],
            CONFIG_WORD_ADDRESS[1],
            high,
            low,
            confirm_lock,
        ];
        self.driver
            .write_message(self.config_address, &message)
            .is_ok()
    }

    // -----------------------------------------------------------------------
    // Write protection
    // -----------------------------------------------------------------------

    /// Switch the chip to enhanced software write protection (WP pin
    /// ignored, zone bits apply) and push the register.
    pub fn enable_software_write_protect(&mut self) -> bool {
        self.configuration.software_write_protect = true;
        self.update_config_register()
    }

    /// Switch the chip back to legacy protection (WP pin governs) and push
    /// the register.
    pub fn disable_software_write_protect(&mut self) -> bool {
        self.configuration.software_write_protect = false;
        self.update_config_register()
    }

    /// Protect one 16 KiB zone (0..=7), leaving the other zone bits
    /// untouched. Returns `false` for an out-of-range zone or a rejected
    /// update.
    pub fn set_write_protection_zone(&mut self, zone: u8) -> bool {
        if zone >= ZONE_COUNT {
            return false;
        }
        self.configuration.zone_protection |= 1 << zone;
        self.update_config_register()
    }

    /// Unprotect one 16 KiB zone (0..=7), leaving the other zone bits
    /// untouched.
    pub fn remove_write_protection_zone(&mut self, zone: u8) -> bool {
        if zone >= ZONE_COUNT {
            return false;
        }
        self.configuration.zone_protection &= !(1 << zone);
        self.update_config_register()
    }

    /// Replace the whole zone-protection byte and push the register.
    ///
    /// Combine with [`zone_protection_mask`] to spell the zones out.
    pub fn write_protection(&mut self, zones: u8) -> bool {
        self.configuration.zone_protection = zones;
        self.update_config_register()
    }

    // -----------------------------------------------------------------------
    // Memory access
    // -----------------------------------------------------------------------

    /// Write a single byte at `address`.
    pub fn write_byte(&mut self, address: u32, byte: u8) -> Result<(), MemoryError> {
        self.write_block(address, &[byte])
    }

    /// Write up to one page of data starting at `address`.
    ///
    /// Validation order matters: the address limit is checked first, then
    /// the buffer size, then the page boundary. A single write cycle must
    /// not straddle a 256-byte page — the chip would wrap around within the
    /// page instead of advancing.
    pub fn write_block(&mut self, address: u32, data: &[u8]) -> Result<(), MemoryError> {
        if address > MAX_MEMORY_ADDRESS {
            return Err(MemoryError::AddressExceedsLimit);
        }
        if data.len() > MAX_PAGE_SIZE {
            return Err(MemoryError::BufferTooLarge);
        }
        let last = address as usize + data.len().saturating_sub(1);
        if last > 0xFF {
            return Err(MemoryError::NotOnSinglePage);
        }

        let packet = AddressPacket::new(self.memory_address, address);
        let mut message = [0u8; 2 + MAX_PAGE_SIZE];
        message[0] = packet.msb;
        message[1] = packet.lsb;
        message[2..2 + data.len()].copy_from_slice(data);
        self.driver
            .write_message(packet.device_address, &message[..2 + data.len()])
    }

    /// Read one byte at the chip's internal address pointer.
    ///
    /// The 24CSM01 keeps the word address of the last byte accessed plus
    /// one, so after a read of address `n` this returns the byte at `n + 1`.
    pub fn read_current(&mut self) -> Result<u8, MemoryError> {
        // Address-only transaction to select the device.
        self.driver.write_message(self.memory_address, &[])?;
        let mut byte = 0u8;
        self.driver
            .read_message(self.memory_address, core::slice::from_mut(&mut byte))?;
        Ok(byte)
    }

    /// Read a single byte at `address` (random read).
    pub fn read_byte(&mut self, address: u32) -> Result<u8, MemoryError> {
        let mut byte = 0u8;
        self.read_block(address, core::slice::from_mut(&mut byte))?;
        Ok(byte)
    }

    /// Read `buffer.len()` bytes starting at `address`.
    ///
    /// Sets the chip's internal address pointer with a write-only
    /// transaction, then reads sequentially. Sequential reads may cross
    /// page boundaries, so only the address limit and the buffer size are
    /// validated. The transfer is all-or-nothing: a failed transaction
    /// returns an error rather than a partially filled buffer.
    pub fn read_block(&mut self, address: u32, buffer: &mut [u8]) -> Result<(), MemoryError> {
        if address > MAX_MEMORY_ADDRESS {
            return Err(MemoryError::AddressExceedsLimit);
        }
        if buffer.len() > MAX_PAGE_SIZE {
            return Err(MemoryError::BufferTooLarge);
        }

        let packet = AddressPacket::new(self.memory_address, address);
        self.driver
            .write_message(packet.device_address, &[packet.msb, packet.lsb])?;
        self.driver.read_message(packet.device_address, buffer)
    }
}
