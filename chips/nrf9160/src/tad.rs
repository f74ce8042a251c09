// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Trace and debug control (TAD)
//!
//! Lives on the private peripheral bus, outside the APB windows, so it has
//! no peripheral ID and a single secure address. The trace port pins are
//! fixed: each PSEL register only accepts its own pin number.

use crate::common::TASK;
use crate::memory_map;
use crate::StaticRef;
use tock_registers::registers::{ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

pub const TAD_BASE: StaticRef<TadRegisters> =
    unsafe { StaticRef::new(memory_map::TAD_S as *const TadRegisters) };

register_structs! {
    pub TadRegisters {
        /// Start all trace and debug clocks
        (0x000 => pub tasks_clockstart: WriteOnly<u32, TASK::Register>),
        /// Stop all trace and debug clocks
        (0x004 => pub tasks_clockstop: WriteOnly<u32, TASK::Register>),
        (0x008 => _reserved0),
        /// Enable debug domain and acquire selected GPIOs
        (0x500 => pub enable: ReadWrite<u32, ENABLE::Register>),
        /// Pin configuration for TRACECLK
        (0x504 => pub psel_traceclk: ReadWrite<u32, TRACECLK::Register>),
        /// Pin configuration for TRACEDATA[0]
        (0x508 => pub psel_tracedata0: ReadWrite<u32, TRACEDATA0::Register>),
        /// Pin configuration for TRACEDATA[1]
        (0x50C => pub psel_tracedata1: ReadWrite<u32, TRACEDATA1::Register>),
        /// Pin configuration for TRACEDATA[2]
        (0x510 => pub psel_tracedata2: ReadWrite<u32, TRACEDATA2::Register>),
        /// Pin configuration for TRACEDATA[3]
        (0x514 => pub psel_tracedata3: ReadWrite<u32, TRACEDATA3::Register>),
        /// Clocking options for the Trace Port debug interface
        (0x518 => pub traceportspeed: ReadWrite<u32, TRACEPORTSPEED::Register>),
        (0x51C => @END),
    }
}

register_bitfields![u32,
    pub ENABLE [
        ENABLE OFFSET(0) NUMBITS(1) [
            /// Disable debug domain and release selected GPIOs
            DISABLED = 0,
            /// Enable debug domain and acquire selected GPIOs
            ENABLED = 1
        ]
    ],

    pub TRACECLK [
        PIN OFFSET(0) NUMBITS(5) [
            /// TRACECLK pin
            Traceclk = 21
        ],
        CONNECT OFFSET(31) NUMBITS(1) [
            Connected = 0,
            Disconnected = 1
        ]
    ],

    pub TRACEDATA0 [
        PIN OFFSET(0) NUMBITS(5) [
            /// TRACEDATA0 pin
            Tracedata0 = 22
        ],
        CONNECT OFFSET(31) NUMBITS(1) [
            Connected = 0,
            Disconnected = 1
        ]
    ],

    pub TRACEDATA1 [
        PIN OFFSET(0) NUMBITS(5) [
            /// TRACEDATA1 pin
            Tracedata1 = 23
        ],
        CONNECT OFFSET(31) NUMBITS(1) [
            Connected = 0,
            Disconnected = 1
        ]
    ],

    pub TRACEDATA2 [
        PIN OFFSET(0) NUMBITS(5) [
            /// TRACEDATA2 pin
            Tracedata2 = 24
        ],
        CONNECT OFFSET(31) NUMBITS(1) [
            Connected = 0,
            Disconnected = 1
        ]
    ],

    pub TRACEDATA3 [
        PIN OFFSET(0) NUMBITS(5) [
            /// TRACEDATA3 pin
            Tracedata3 = 25
        ],
        CONNECT OFFSET(31) NUMBITS(1) [
            Connected = 0,
            Disconnected = 1
        ]
    ],

    pub TRACEPORTSPEED [
        /// Speed of Trace Port clock. Note that the TRACECLK pin output
        /// will be divided again by two from the Trace Port clock.
        TRACEPORTSPEED OFFSET(0) NUMBITS(2) [
            /// Trace Port clock is 32 MHz
            Clk32MHz = 0,
            /// Trace Port clock is 16 MHz
            Clk16MHz = 1,
            /// Trace Port clock is 8 MHz
            Clk8MHz = 2,
            /// Trace Port clock is 4 MHz
            Clk4MHz = 3
        ]
    ]
];

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::offset_of;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(TadRegisters, enable), 0x500);
        assert_eq!(offset_of!(TadRegisters, psel_tracedata3), 0x514);
        assert_eq!(offset_of!(TadRegisters, traceportspeed), 0x518);
        assert_eq!(TAD_BASE.address(), 0xE008_0000);
    }

    #[test]
    fn trace_pins() {
        let clk = TRACECLK::PIN::Traceclk + TRACECLK::CONNECT::Connected;
        assert_eq!(clk.value, 21);
        assert_eq!(TRACEDATA3::PIN::Tracedata3.value, 25);
        assert_eq!(TRACEPORTSPEED::TRACEPORTSPEED::Clk4MHz.value, 3);
    }
}
