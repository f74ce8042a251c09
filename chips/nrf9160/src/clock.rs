// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Clock control
//!
//! CLOCK shares its register block and peripheral ID with POWER.

use crate::common::{EVENT, PUBLISH, SUBSCRIBE, TASK};
use crate::memory_map;
use crate::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

pub const CLOCK_BASE: StaticRef<ClockRegisters> =
    unsafe { StaticRef::new(memory_map::CLOCK as *const ClockRegisters) };

register_structs! {
    pub ClockRegisters {
        /// Start HFCLK source as selected in LFCLKSRC
        (0x000 => pub tasks_hfclkstart: WriteOnly<u32, TASK::Register>),
        /// Stop HFCLK source
        (0x004 => pub tasks_hfclkstop: WriteOnly<u32, TASK::Register>),
        /// Start LFCLK source as selected in LFCLKSRC
        (0x008 => pub tasks_lfclkstart: WriteOnly<u32, TASK::Register>),
        /// Stop LFCLK source
        (0x00C => pub tasks_lfclkstop: WriteOnly<u32, TASK::Register>),
        (0x010 => _reserved0),
        (0x080 => pub subscribe_hfclkstart: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x084 => pub subscribe_hfclkstop: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x088 => pub subscribe_lfclkstart: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x08C => pub subscribe_lfclkstop: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x090 => _reserved1),
        /// HFCLK oscillator started
        (0x100 => pub events_hfclkstarted: ReadWrite<u32, EVENT::Register>),
        /// LFCLK started
        (0x104 => pub events_lfclkstarted: ReadWrite<u32, EVENT::Register>),
        (0x108 => _reserved2),
        (0x180 => pub publish_hfclkstarted: ReadWrite<u32, PUBLISH::Register>),
        (0x184 => pub publish_lfclkstarted: ReadWrite<u32, PUBLISH::Register>),
        (0x188 => _reserved3),
        /// Enable or disable interrupt
        (0x300 => pub inten: ReadWrite<u32, INTEN::Register>),
        /// Enable interrupt
        (0x304 => pub intenset: ReadWrite<u32, INTEN::Register>),
        /// Disable interrupt
        (0x308 => pub intenclr: ReadWrite<u32, INTEN::Register>),
        /// Pending interrupts
        (0x30C => pub intpend: ReadOnly<u32, INTEN::Register>),
        (0x310 => _reserved4),
        /// Status indicating that HFCLKSTART task has been triggered
        (0x408 => pub hfclkrun: ReadOnly<u32, RUN::Register>),
        /// The register shows if HFXO has been requested by triggering
        /// HFCLKSTART task and if it has been started (STATE)
        (0x40C => pub hfclkstat: ReadOnly<u32, HFCLKSTAT::Register>),
        (0x410 => _reserved5),
        /// Status indicating that LFCLKSTART task has been triggered
        (0x414 => pub lfclkrun: ReadOnly<u32, RUN::Register>),
        /// The register shows which LFCLK source has been requested and if
        /// it has been started
        (0x418 => pub lfclkstat: ReadOnly<u32, LFCLKSTAT::Register>),
        /// Copy of LFCLKSRC register, set after LFCLKSTART task has been
        /// triggered
        (0x41C => pub lfclksrccopy: ReadOnly<u32, LFCLKSRC::Register>),
        (0x420 => _reserved6),
        /// Clock source for the LFCLK
        (0x518 => pub lfclksrc: ReadWrite<u32, LFCLKSRC::Register>),
        (0x51C => @END),
    }
}

register_bitfields![u32,
    /// INTEN, INTENSET, INTENCLR and INTPEND share one layout
    pub INTEN [
        /// Interrupt for event HFCLKSTARTED
        HFCLKSTARTED OFFSET(0) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        /// Interrupt for event LFCLKSTARTED
        LFCLKSTARTED OFFSET(1) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ]
    ],

    /// HFCLKRUN / LFCLKRUN
    pub RUN [
        /// Start task triggered or not
        STATUS OFFSET(0) NUMBITS(1) [
            /// Task not triggered
            NotTriggered = 0,
            /// Task triggered
            Triggered = 1
        ]
    ],

    pub HFCLKSTAT [
        /// Active clock source
        SRC OFFSET(0) NUMBITS(1) [
            /// HFINT - 64 MHz on-chip oscillator
            HFINT = 0,
            /// HFXO - 64 MHz clock derived from external 32 MHz crystal
            /// oscillator
            HFXO = 1
        ],
        /// HFCLK state
        STATE OFFSET(16) NUMBITS(1) [
            /// HFCLK not running
            NotRunning = 0,
            /// HFCLK running
            Running = 1
        ]
    ],

    pub LFCLKSTAT [
        /// Active clock source
        SRC OFFSET(0) NUMBITS(2) [
            /// Reserved for future use
            RFU = 0,
            /// 32.768 kHz RC oscillator
            LFRC = 1,
            /// 32.768 kHz crystal oscillator
            LFXO = 2
        ],
        /// LFCLK state
        STATE OFFSET(16) NUMBITS(1) [
            /// LFCLK not running
            NotRunning = 0,
            /// LFCLK running
            Running = 1
        ]
    ],

    /// LFCLKSRC / LFCLKSRCCOPY
    pub LFCLKSRC [
        /// Clock source
        SRC OFFSET(0) NUMBITS(2) [
            /// Reserved for future use (equals selecting LFRC)
            RFU = 0,
            /// 32.768 kHz RC oscillator
            LFRC = 1,
            /// 32.768 kHz crystal oscillator
            LFXO = 2
        ]
    ]
];

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::offset_of;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(ClockRegisters, events_lfclkstarted), 0x104);
        assert_eq!(offset_of!(ClockRegisters, hfclkstat), 0x40C);
        assert_eq!(offset_of!(ClockRegisters, lfclksrc), 0x518);
    }

    #[test]
    fn decode_hfclkstat() {
        let stat = LocalRegisterCopy::<u32, HFCLKSTAT::Register>::new(0x0001_0001);
        assert_eq!(
            stat.read_as_enum(HFCLKSTAT::SRC),
            Some(HFCLKSTAT::SRC::Value::HFXO)
        );
        assert!(stat.matches_all(HFCLKSTAT::STATE::Running));
    }

    #[test]
    fn unknown_lfclk_source() {
        let stat = LocalRegisterCopy::<u32, LFCLKSTAT::Register>::new(0x3);
        assert_eq!(stat.read_as_enum::<LFCLKSTAT::SRC::Value>(LFCLKSTAT::SRC), None);
    }
}
