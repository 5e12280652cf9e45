//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`]
//! struct for communicating with the display controller over I2C.
//!
//! ## Wire format
//!
//! Every call is a single bus transaction of exactly two bytes: a control
//! prefix (`0x00` for commands, `0x40` for data) followed by the payload
//! byte. The controller has no query-back capability, so the transport is
//! write-only.
//!
//! ## Retry policy
//!
//! A failed transaction is resent verbatim. By default the loop never gives
//! up, matching the behavior expected for a single dedicated peripheral
//! where the only sane response to a glitching bus is to wait it out. Set a
//! nonzero retry limit with [`Interface::set_retry_limit`] to surface
//! [`InterfaceError`] instead of blocking forever.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bmd31m090::{DisplayInterface, Interface, DEFAULT_ADDRESS};
//! # use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};
//! # use core::convert::Infallible;
//! # struct MockI2c;
//! # impl ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c<SevenBitAddress> for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: SevenBitAddress,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! // Create interface on the default device address
//! let mut interface = Interface::new(MockI2c, DEFAULT_ADDRESS);
//!
//! // Send command (0x00-prefixed transaction)
//! let _ = interface.send_command(0xAF); // Display on
//!
//! // Send data (0x40-prefixed transaction)
//! let _ = interface.send_data(0xFF);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::command::{CONTROL_COMMAND, CONTROL_DATA};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Default device address (`I2C Addr SEL` strapped low)
pub const DEFAULT_ADDRESS: SevenBitAddress = 0x3C;

/// Alternate device address (`I2C Addr SEL` strapped high)
pub const ALTERNATE_ADDRESS: SevenBitAddress = 0x3D;

/// Bus clock rate the module is specified for, in Hz
///
/// Clock configuration belongs to the transport; this constant only
/// documents what the peripheral expects.
pub const DEFAULT_BUS_FREQUENCY_HZ: u32 = 400_000;

/// Default retry limit: 0 retries the failed transaction forever
pub const DEFAULT_RETRY_LIMIT: u32 = 0;

/// Trait for the hardware interface to the display controller
///
/// This trait abstracts over the transport, allowing
/// [`Display`](crate::display::Display) to work with any implementation
/// that can frame single command and data bytes onto the bus.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. Implement this
/// trait directly to capture traffic in tests or to drive the controller
/// over a different transport.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send one command byte to the controller
    ///
    /// The implementation must frame the byte as a command transaction
    /// (control prefix `0x00`).
    ///
    /// # Errors
    ///
    /// Returns an error if the transport gives up on the transaction.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send one data byte to the controller
    ///
    /// The implementation must frame the byte as a data transaction
    /// (control prefix `0x40`).
    ///
    /// # Errors
    ///
    /// Returns an error if the transport gives up on the transaction.
    fn send_data(&mut self, data: u8) -> InterfaceResult<(), Self::Error>;
}

/// Error produced when a bounded retry policy gives up on a transaction
///
/// Carries the last bus error and the number of attempts made. Only
/// produced when a nonzero retry limit is configured; the default policy
/// blocks until the bus recovers.
#[derive(Debug)]
pub struct InterfaceError<E> {
    /// Number of attempts made before giving up
    pub attempts: u32,
    /// The bus error from the final attempt
    pub source: E,
}

impl<E: Debug> core::fmt::Display for InterfaceError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "bus transaction failed after {} attempts: {:?}",
            self.attempts, self.source
        )
    }
}

impl<E: Debug> core::error::Error for InterfaceError<E> {}

/// I2C interface implementation for the BMD31M090
///
/// Implements [`DisplayInterface`] over any embedded-hal v1.0
/// [`I2c`] bus.
///
/// ## Type Parameters
///
/// * `I2C` - Bus implementing [`I2c`] with seven-bit addressing
pub struct Interface<I2C> {
    /// I2C bus
    i2c: I2C,
    /// Seven-bit device address (0x3C or 0x3D depending on strapping)
    address: SevenBitAddress,
    /// Maximum transaction attempts; 0 = retry forever
    retry_limit: u32,
}

impl<I2C> Interface<I2C>
where
    I2C: I2c<SevenBitAddress>,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `i2c` - Bus implementing [`I2c`]
    /// * `address` - Device address, [`DEFAULT_ADDRESS`] or
    ///   [`ALTERNATE_ADDRESS`] per the module's address-select strap
    pub fn new(i2c: I2C, address: SevenBitAddress) -> Self {
        Self {
            i2c,
            address,
            retry_limit: DEFAULT_RETRY_LIMIT,
        }
    }

    /// Set the maximum number of attempts per transaction
    ///
    /// Default is 0, meaning a failed transaction is resent until it
    /// succeeds. A nonzero limit makes [`DisplayInterface`] calls return
    /// [`InterfaceError`] once exhausted.
    pub fn set_retry_limit(&mut self, limit: u32) -> &mut Self {
        self.retry_limit = limit;
        self
    }

    /// Get the current retry limit (0 = unlimited)
    pub fn retry_limit(&self) -> u32 {
        self.retry_limit
    }

    /// Release the underlying bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Send one control-prefixed payload byte, retrying per policy
    fn write_framed(&mut self, control: u8, payload: u8) -> Result<(), InterfaceError<I2C::Error>> {
        let mut attempts = 0u32;
        loop {
            match self.i2c.write(self.address, &[control, payload]) {
                Ok(()) => return Ok(()),
                Err(source) => {
                    attempts += 1;
                    log::trace!(
                        "display transaction [{control:#04x} {payload:#04x}] failed, attempt {attempts}"
                    );
                    if self.retry_limit > 0 && attempts >= self.retry_limit {
                        return Err(InterfaceError { attempts, source });
                    }
                }
            }
        }
    }
}

impl<I2C> DisplayInterface for Interface<I2C>
where
    I2C: I2c<SevenBitAddress>,
    I2C::Error: Debug,
{
    type Error = InterfaceError<I2C::Error>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.write_framed(CONTROL_COMMAND, command)
    }

    fn send_data(&mut self, data: u8) -> InterfaceResult<(), Self::Error> {
        self.write_framed(CONTROL_DATA, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct MockBusError;

    impl embedded_hal::i2c::Error for MockBusError {
        fn kind(&self) -> embedded_hal::i2c::ErrorKind {
            embedded_hal::i2c::ErrorKind::Other
        }
    }

    /// Records writes; fails the first `failures` transactions.
    struct MockI2c {
        writes: alloc::vec::Vec<(SevenBitAddress, alloc::vec::Vec<u8>)>,
        failures: u32,
    }

    impl MockI2c {
        fn new(failures: u32) -> Self {
            Self {
                writes: alloc::vec::Vec::new(),
                failures,
            }
        }
    }

    impl embedded_hal::i2c::ErrorType for MockI2c {
        type Error = MockBusError;
    }

    impl I2c<SevenBitAddress> for MockI2c {
        fn transaction(
            &mut self,
            address: SevenBitAddress,
            operations: &mut [embedded_hal::i2c::Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.failures > 0 {
                self.failures -= 1;
                return Err(MockBusError);
            }
            for op in operations {
                if let embedded_hal::i2c::Operation::Write(bytes) = op {
                    self.writes.push((address, bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_command_framing() {
        let mut interface = Interface::new(MockI2c::new(0), DEFAULT_ADDRESS);
        interface.send_command(0xAF).unwrap();
        let bus = interface.release();
        assert_eq!(bus.writes, alloc::vec![(0x3C, alloc::vec![0x00, 0xAF])]);
    }

    #[test]
    fn test_data_framing() {
        let mut interface = Interface::new(MockI2c::new(0), ALTERNATE_ADDRESS);
        interface.send_data(0x5A).unwrap();
        let bus = interface.release();
        assert_eq!(bus.writes, alloc::vec![(0x3D, alloc::vec![0x40, 0x5A])]);
    }

    #[test]
    fn test_retry_until_success() {
        // Three failures, unbounded policy: the fourth attempt lands.
        let mut interface = Interface::new(MockI2c::new(3), DEFAULT_ADDRESS);
        interface.send_command(0xA6).unwrap();
        let bus = interface.release();
        assert_eq!(bus.writes, alloc::vec![(0x3C, alloc::vec![0x00, 0xA6])]);
    }

    #[test]
    fn test_retry_limit_exhausted() {
        let mut interface = Interface::new(MockI2c::new(10), DEFAULT_ADDRESS);
        interface.set_retry_limit(4);
        let err = interface.send_command(0xA6).unwrap_err();
        assert_eq!(err.attempts, 4);
        assert_eq!(err.source, MockBusError);
        assert!(interface.release().writes.is_empty());
    }

    #[test]
    fn test_bounded_retry_succeeds_within_limit() {
        let mut interface = Interface::new(MockI2c::new(2), DEFAULT_ADDRESS);
        interface.set_retry_limit(4);
        assert!(interface.send_data(0x01).is_ok());
    }

    #[test]
    fn test_default_retry_limit_is_unbounded() {
        let interface = Interface::new(MockI2c::new(0), DEFAULT_ADDRESS);
        assert_eq!(interface.retry_limit(), DEFAULT_RETRY_LIMIT);
        assert_eq!(DEFAULT_RETRY_LIMIT, 0);
    }
}
