// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Pin selection for the `PSEL.*` registers.
//!
//! Peripheral drivers should use the `Pinmux` type (instead of a `u32`) for
//! fields that determine which pins are used by the hardware. The board
//! configuration should create `Pinmux`s and pass them into peripheral
//! drivers during initialization.

use crate::common::PSEL;
use crate::ErrorCode;
use tock_registers::fields::FieldValue;

/// Number of pins on port P0.
pub const NUM_PINS: u32 = 32;

/// `PSEL` value that leaves the peripheral signal unconnected. This is also
/// the reset value of every `PSEL` register.
pub const PSEL_DISCONNECTED: FieldValue<u32, PSEL::Register> = PSEL::CONNECT::Disconnected;

/// A GPIO pin that can be routed to a peripheral signal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pinmux(u32);

impl Pinmux {
    /// Wrap pin `pin` of port P0.
    ///
    /// Returns `INVAL` if the pin does not exist.
    pub fn new(pin: u32) -> Result<Pinmux, ErrorCode> {
        if pin < NUM_PINS {
            Ok(Pinmux(pin))
        } else {
            Err(ErrorCode::INVAL)
        }
    }

    pub fn pin(self) -> u32 {
        self.0
    }

    /// The value to write to a `PSEL` register to connect this pin.
    pub fn psel(self) -> FieldValue<u32, PSEL::Register> {
        PSEL::PIN.val(self.0) + PSEL::CONNECT::Connected
    }
}

impl From<Pinmux> for u32 {
    fn from(val: Pinmux) -> Self {
        val.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn rejects_missing_pins() {
        assert_eq!(Pinmux::new(31).map(u32::from), Ok(31));
        assert_eq!(Pinmux::new(32), Err(ErrorCode::INVAL));
    }

    #[test]
    fn connect_and_disconnect() {
        let reg = InMemoryRegister::<u32, PSEL::Register>::new(0xFFFF_FFFF);
        let pin = Pinmux::new(12).unwrap();

        reg.write(pin.psel());
        assert_eq!(reg.get(), 12);
        assert!(reg.matches_all(PSEL::CONNECT::Connected));

        reg.write(PSEL_DISCONNECTED);
        assert_eq!(reg.get(), 0x8000_0000);
        assert_eq!(reg.read(PSEL::PIN), 0);
    }
}
