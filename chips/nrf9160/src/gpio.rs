// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! GPIO port P0
//!
//! OUT, IN, DIR and LATCH hold one bit per pin. The SET/CLR variants of
//! OUT and DIR share their layout. Per-pin configuration lives in
//! `PIN_CNF[n]`.

use crate::memory_map;
use crate::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

pub const P0_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(memory_map::P0 as *const GpioRegisters) };

/// Number of pins on the port.
pub const NUM_PINS: usize = 32;

register_structs! {
    pub GpioRegisters {
        (0x000 => _reserved0),
        /// Write GPIO port
        (0x004 => pub out: ReadWrite<u32, OUT::Register>),
        /// Set individual bits in GPIO port
        (0x008 => pub outset: ReadWrite<u32, OUT::Register>),
        /// Clear individual bits in GPIO port
        (0x00C => pub outclr: ReadWrite<u32, OUT::Register>),
        /// Read GPIO port
        (0x010 => pub in_: ReadOnly<u32, IN::Register>),
        /// Direction of GPIO pins
        (0x014 => pub dir: ReadWrite<u32, DIR::Register>),
        /// DIR set register
        (0x018 => pub dirset: ReadWrite<u32, DIR::Register>),
        /// DIR clear register
        (0x01C => pub dirclr: ReadWrite<u32, DIR::Register>),
        /// Latch register indicating what GPIO pins that have met the
        /// criteria set in the PIN_CNF[n].SENSE registers
        (0x020 => pub latch: ReadWrite<u32, LATCH::Register>),
        /// Select between default DETECT signal behaviour and LDETECT mode
        /// (for non-secure pin only)
        (0x024 => pub detectmode: ReadWrite<u32, DETECTMODE::Register>),
        /// Select between default DETECT signal behaviour and LDETECT mode
        /// (for secure pin only)
        (0x028 => pub detectmode_sec: ReadWrite<u32, DETECTMODE::Register>),
        (0x02C => _reserved1),
        /// Configuration of GPIO pins
        (0x200 => pub pin_cnf: [ReadWrite<u32, PIN_CNF::Register>; NUM_PINS]),
        (0x280 => @END),
    }
}

register_bitfields![u32,
    /// OUT, OUTSET and OUTCLR: pin driver level
    pub OUT [
        PIN0 OFFSET(0) NUMBITS(1) [
            /// Pin driver is low
            Low = 0,
            /// Pin driver is high
            High = 1
        ],
        PIN1 OFFSET(1) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN2 OFFSET(2) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN3 OFFSET(3) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN4 OFFSET(4) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN5 OFFSET(5) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN6 OFFSET(6) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN7 OFFSET(7) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN8 OFFSET(8) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN9 OFFSET(9) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN10 OFFSET(10) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN11 OFFSET(11) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN12 OFFSET(12) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN13 OFFSET(13) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN14 OFFSET(14) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN15 OFFSET(15) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN16 OFFSET(16) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN17 OFFSET(17) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN18 OFFSET(18) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN19 OFFSET(19) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN20 OFFSET(20) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN21 OFFSET(21) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN22 OFFSET(22) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN23 OFFSET(23) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN24 OFFSET(24) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN25 OFFSET(25) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN26 OFFSET(26) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN27 OFFSET(27) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN28 OFFSET(28) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN29 OFFSET(29) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN30 OFFSET(30) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN31 OFFSET(31) NUMBITS(1) [
            Low = 0,
            High = 1
        ]
    ],

    /// IN: pin input level
    pub IN [
        PIN0 OFFSET(0) NUMBITS(1) [
            /// Pin input is low
            Low = 0,
            /// Pin input is high
            High = 1
        ],
        PIN1 OFFSET(1) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN2 OFFSET(2) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN3 OFFSET(3) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN4 OFFSET(4) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN5 OFFSET(5) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN6 OFFSET(6) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN7 OFFSET(7) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN8 OFFSET(8) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN9 OFFSET(9) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN10 OFFSET(10) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN11 OFFSET(11) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN12 OFFSET(12) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN13 OFFSET(13) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN14 OFFSET(14) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN15 OFFSET(15) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN16 OFFSET(16) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN17 OFFSET(17) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN18 OFFSET(18) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN19 OFFSET(19) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN20 OFFSET(20) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN21 OFFSET(21) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN22 OFFSET(22) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN23 OFFSET(23) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN24 OFFSET(24) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN25 OFFSET(25) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN26 OFFSET(26) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN27 OFFSET(27) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN28 OFFSET(28) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN29 OFFSET(29) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN30 OFFSET(30) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        PIN31 OFFSET(31) NUMBITS(1) [
            Low = 0,
            High = 1
        ]
    ],

    /// DIR, DIRSET and DIRCLR: pin direction
    pub DIR [
        PIN0 OFFSET(0) NUMBITS(1) [
            /// Pin set as input
            Input = 0,
            /// Pin set as output
            Output = 1
        ],
        PIN1 OFFSET(1) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        PIN2 OFFSET(2) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        PIN3 OFFSET(3) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        PIN4 OFFSET(4) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        PIN5 OFFSET(5) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        PIN6 OFFSET(6) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        PIN7 OFFSET(7) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        PIN8 OFFSET(8) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        PIN9 OFFSET(9) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        PIN10 OFFSET(10) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        PIN11 OFFSET(11) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        PIN12 OFFSET(12) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        PIN13 OFFSET(13) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        PIN14 OFFSET(14) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        PIN15 OFFSET(15) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        PIN16 OFFSET(16) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        PIN17 OFFSET(17) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        PIN18 OFFSET(18) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        PIN19 OFFSET(19) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        PIN20 OFFSET(20) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        PIN21 OFFSET(21) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        PIN22 OFFSET(22) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        PIN23 OFFSET(23) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        PIN24 OFFSET(24) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        PIN25 OFFSET(25) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        PIN26 OFFSET(26) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        PIN27 OFFSET(27) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        PIN28 OFFSET(28) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        PIN29 OFFSET(29) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        PIN30 OFFSET(30) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        PIN31 OFFSET(31) NUMBITS(1) [
            Input = 0,
            Output = 1
        ]
    ],

    /// LATCH: pins that met their SENSE criteria
    pub LATCH [
        PIN0 OFFSET(0) NUMBITS(1) [
            /// Criteria has not been met
            NotLatched = 0,
            /// Criteria has been met
            Latched = 1
        ],
        PIN1 OFFSET(1) NUMBITS(1) [
            NotLatched = 0,
            Latched = 1
        ],
        PIN2 OFFSET(2) NUMBITS(1) [
            NotLatched = 0,
            Latched = 1
        ],
        PIN3 OFFSET(3) NUMBITS(1) [
            NotLatched = 0,
            Latched = 1
        ],
        PIN4 OFFSET(4) NUMBITS(1) [
            NotLatched = 0,
            Latched = 1
        ],
        PIN5 OFFSET(5) NUMBITS(1) [
            NotLatched = 0,
            Latched = 1
        ],
        PIN6 OFFSET(6) NUMBITS(1) [
            NotLatched = 0,
            Latched = 1
        ],
        PIN7 OFFSET(7) NUMBITS(1) [
            NotLatched = 0,
            Latched = 1
        ],
        PIN8 OFFSET(8) NUMBITS(1) [
            NotLatched = 0,
            Latched = 1
        ],
        PIN9 OFFSET(9) NUMBITS(1) [
            NotLatched = 0,
            Latched = 1
        ],
        PIN10 OFFSET(10) NUMBITS(1) [
            NotLatched = 0,
            Latched = 1
        ],
        PIN11 OFFSET(11) NUMBITS(1) [
            NotLatched = 0,
            Latched = 1
        ],
        PIN12 OFFSET(12) NUMBITS(1) [
            NotLatched = 0,
            Latched = 1
        ],
        PIN13 OFFSET(13) NUMBITS(1) [
            NotLatched = 0,
            Latched = 1
        ],
        PIN14 OFFSET(14) NUMBITS(1) [
            NotLatched = 0,
            Latched = 1
        ],
        PIN15 OFFSET(15) NUMBITS(1) [
            NotLatched = 0,
            Latched = 1
        ],
        PIN16 OFFSET(16) NUMBITS(1) [
            NotLatched = 0,
            Latched = 1
        ],
        PIN17 OFFSET(17) NUMBITS(1) [
            NotLatched = 0,
            Latched = 1
        ],
        PIN18 OFFSET(18) NUMBITS(1) [
            NotLatched = 0,
            Latched = 1
        ],
        PIN19 OFFSET(19) NUMBITS(1) [
            NotLatched = 0,
            Latched = 1
        ],
        PIN20 OFFSET(20) NUMBITS(1) [
            NotLatched = 0,
            Latched = 1
        ],
        PIN21 OFFSET(21) NUMBITS(1) [
            NotLatched = 0,
            Latched = 1
        ],
        PIN22 OFFSET(22) NUMBITS(1) [
            NotLatched = 0,
            Latched = 1
        ],
        PIN23 OFFSET(23) NUMBITS(1) [
            NotLatched = 0,
            Latched = 1
        ],
        PIN24 OFFSET(24) NUMBITS(1) [
            NotLatched = 0,
            Latched = 1
        ],
        PIN25 OFFSET(25) NUMBITS(1) [
            NotLatched = 0,
            Latched = 1
        ],
        PIN26 OFFSET(26) NUMBITS(1) [
            NotLatched = 0,
            Latched = 1
        ],
        PIN27 OFFSET(27) NUMBITS(1) [
            NotLatched = 0,
            Latched = 1
        ],
        PIN28 OFFSET(28) NUMBITS(1) [
            NotLatched = 0,
            Latched = 1
        ],
        PIN29 OFFSET(29) NUMBITS(1) [
            NotLatched = 0,
            Latched = 1
        ],
        PIN30 OFFSET(30) NUMBITS(1) [
            NotLatched = 0,
            Latched = 1
        ],
        PIN31 OFFSET(31) NUMBITS(1) [
            NotLatched = 0,
            Latched = 1
        ]
    ],

    pub DETECTMODE [
        DETECTMODE OFFSET(0) NUMBITS(1) [
            /// DETECT directly connected to PIN DETECT signals
            Default = 0,
            /// Use the latched LDETECT behaviour
            LDETECT = 1
        ]
    ],

    pub PIN_CNF [
        /// Pin direction. Same physical register as DIR register
        DIR OFFSET(0) NUMBITS(1) [
            /// Configure pin as an input pin
            Input = 0,
            /// Configure pin as an output pin
            Output = 1
        ],
        /// Connect or disconnect input buffer
        INPUT OFFSET(1) NUMBITS(1) [
            /// Connect input buffer
            Connect = 0,
            /// Disconnect input buffer
            Disconnect = 1
        ],
        /// Pull configuration
        PULL OFFSET(2) NUMBITS(2) [
            /// No pull
            Disabled = 0,
            /// Pull down on pin
            Pulldown = 1,
            /// Pull up on pin
            Pullup = 3
        ],
        /// Drive configuration
        DRIVE OFFSET(8) NUMBITS(3) [
            /// Standard '0', standard '1'
            S0S1 = 0,
            /// High drive '0', standard '1'
            H0S1 = 1,
            /// Standard '0', high drive '1'
            S0H1 = 2,
            /// High drive '0', high 'drive '1'
            H0H1 = 3,
            /// Disconnect '0' standard '1'
            D0S1 = 4,
            /// Disconnect '0', high drive '1'
            D0H1 = 5,
            /// Standard '0', disconnect '1'
            S0D1 = 6,
            /// High drive '0', disconnect '1'
            H0D1 = 7
        ],
        /// Pin sensing mechanism
        SENSE OFFSET(16) NUMBITS(2) [
            /// Disabled
            Disabled = 0,
            /// Sense for high level
            High = 2,
            /// Sense for low level
            Low = 3
        ]
    ]
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitfield::FieldLayout;
    use core::mem::offset_of;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(GpioRegisters, out), 0x004);
        assert_eq!(offset_of!(GpioRegisters, detectmode_sec), 0x028);
        assert_eq!(offset_of!(GpioRegisters, pin_cnf), 0x200);
        assert_eq!(core::mem::size_of::<GpioRegisters>(), 0x280);
    }

    #[test]
    fn pin_bits() {
        assert_eq!(OUT::PIN0.mask_in_place(), 0x1);
        assert_eq!(DIR::PIN31.mask_in_place(), 0x8000_0000);
        assert_eq!(OUT::PIN5::High.value, 1 << 5);
        assert_eq!(DIR::PIN31::Output.value, 0x8000_0000);
    }

    #[test]
    fn latch_decoding() {
        let latch = LocalRegisterCopy::<u32, LATCH::Register>::new(0x0000_0004);
        assert_eq!(
            latch.read_as_enum(LATCH::PIN2),
            Some(LATCH::PIN2::Value::Latched)
        );
        assert_eq!(
            latch.read_as_enum(LATCH::PIN3),
            Some(LATCH::PIN3::Value::NotLatched)
        );
        let input = LocalRegisterCopy::<u32, IN::Register>::new(0x8000_0000);
        assert!(input.matches_all(IN::PIN31::High + IN::PIN0::Low));
    }

    #[test]
    fn output_with_pullup() {
        let cnf = PIN_CNF::DIR::Output
            + PIN_CNF::INPUT::Disconnect
            + PIN_CNF::PULL::Pullup
            + PIN_CNF::DRIVE::H0H1
            + PIN_CNF::SENSE::Low;
        assert_eq!(cnf.value, 0x0003_030F);
    }
}
