//! Scripted I2C bus double for unit tests.
//!
//! [`BusMock`] implements `embedded_hal::i2c::I2c` against a fixed list of
//! expected transactions. Each expectation checks the device address and
//! the bytes written, supplies the bytes to be read, and can inject a bus
//! error. [`BusMock::done`] asserts the script was fully consumed.

use std::vec::Vec;

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};

/// One expected bus transaction.
#[derive(Debug, Clone)]
pub enum Expectation {
    Write {
        address: u8,
        bytes: Vec<u8>,
        result: Result<(), ErrorKind>,
    },
    Read {
        address: u8,
        response: Vec<u8>,
        result: Result<(), ErrorKind>,
    },
    WriteRead {
        address: u8,
        bytes: Vec<u8>,
        response: Vec<u8>,
        result: Result<(), ErrorKind>,
    },
}

impl Expectation {
    pub fn write(address: u8, bytes: &[u8]) -> Self {
        Self::Write {
            address,
            bytes: bytes.to_vec(),
            result: Ok(()),
        }
    }

    pub fn write_error(address: u8, bytes: &[u8], kind: ErrorKind) -> Self {
        Self::Write {
            address,
            bytes: bytes.to_vec(),
            result: Err(kind),
        }
    }

    pub fn read(address: u8, response: &[u8]) -> Self {
        Self::Read {
            address,
            response: response.to_vec(),
            result: Ok(()),
        }
    }

    pub fn read_error(address: u8, len: usize, kind: ErrorKind) -> Self {
        Self::Read {
            address,
            response: vec![0; len],
            result: Err(kind),
        }
    }

    pub fn write_read(address: u8, bytes: &[u8], response: &[u8]) -> Self {
        Self::WriteRead {
            address,
            bytes: bytes.to_vec(),
            response: response.to_vec(),
            result: Ok(()),
        }
    }

    pub fn write_read_error(address: u8, bytes: &[u8], read_len: usize, kind: ErrorKind) -> Self {
        Self::WriteRead {
            address,
            bytes: bytes.to_vec(),
            response: vec![0; read_len],
            result: Err(kind),
        }
    }
}

/// Fake I2C bus replaying a script of [`Expectation`]s.
pub struct BusMock {
    expected: Vec<Expectation>,
    position: usize,
}

impl BusMock {
    pub fn new(expected: Vec<Expectation>) -> Self {
        Self {
            expected,
            position: 0,
        }
    }

    /// Assert every scripted transaction was performed.
    pub fn done(&self) {
        assert_eq!(
            self.position,
            self.expected.len(),
            "{} scripted I2C transaction(s) never happened",
            self.expected.len() - self.position
        );
    }
}

impl ErrorType for BusMock {
    type Error = ErrorKind;
}

impl I2c for BusMock {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), ErrorKind> {
        let index = self.position;
        self.position += 1;
        let expectation = self
            .expected
            .get(index)
            .expect("unexpected I2C transaction past the end of the script");

        match (expectation, operations) {
            (
                Expectation::Write {
                    address: expected,
                    bytes,
                    result,
                },
                [Operation::Write(sent)],
            ) => {
                assert_eq!(address, *expected, "write to the wrong device address");
                assert_eq!(&sent[..], &bytes[..], "write payload mismatch");
                *result
            }
            (
                Expectation::Read {
                    address: expected,
                    response,
                    result,
                },
                [Operation::Read(buffer)],
            ) => {
                assert_eq!(address, *expected, "read from the wrong device address");
                assert_eq!(buffer.len(), response.len(), "read length mismatch");
                if result.is_ok() {
                    buffer.copy_from_slice(response);
                }
                *result
            }
            (
                Expectation::WriteRead {
                    address: expected,
                    bytes,
                    response,
                    result,
                },
                [Operation::Write(sent), Operation::Read(buffer)],
            ) => {
                assert_eq!(address, *expected, "write-read to the wrong device address");
                assert_eq!(&sent[..], &bytes[..], "write payload mismatch");
                assert_eq!(buffer.len(), response.len(), "read length mismatch");
                if result.is_ok() {
                    buffer.copy_from_slice(response);
                }
                *result
            }
            (expectation, operations) => panic!(
                "transaction shape mismatch: expected {:?}, got {} operation(s)",
                expectation,
                operations.len()
            ),
        }
    }
}
