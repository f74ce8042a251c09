// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Real-time counter (RTC)

use crate::common::{EVENT, PUBLISH, SUBSCRIBE, TASK};
use crate::memory_map;
use crate::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

pub const RTC0_BASE: StaticRef<RtcRegisters> =
    unsafe { StaticRef::new(memory_map::RTC0 as *const RtcRegisters) };
pub const RTC1_BASE: StaticRef<RtcRegisters> =
    unsafe { StaticRef::new(memory_map::RTC1 as *const RtcRegisters) };

pub const NUM_CC: usize = 4;

register_structs! {
    pub RtcRegisters {
        /// Start RTC counter
        (0x000 => pub tasks_start: WriteOnly<u32, TASK::Register>),
        /// Stop RTC counter
        (0x004 => pub tasks_stop: WriteOnly<u32, TASK::Register>),
        /// Clear RTC counter
        (0x008 => pub tasks_clear: WriteOnly<u32, TASK::Register>),
        /// Set counter to 0xFFFFF0
        (0x00C => pub tasks_trigovrflw: WriteOnly<u32, TASK::Register>),
        (0x010 => _reserved0),
        (0x080 => pub subscribe_start: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x084 => pub subscribe_stop: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x088 => pub subscribe_clear: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x08C => pub subscribe_trigovrflw: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x090 => _reserved1),
        /// Event on counter increment
        (0x100 => pub events_tick: ReadWrite<u32, EVENT::Register>),
        /// Event on counter overflow
        (0x104 => pub events_ovrflw: ReadWrite<u32, EVENT::Register>),
        (0x108 => _reserved2),
        /// Compare event on CC[n] match
        (0x140 => pub events_compare: [ReadWrite<u32, EVENT::Register>; NUM_CC]),
        (0x150 => _reserved3),
        (0x180 => pub publish_tick: ReadWrite<u32, PUBLISH::Register>),
        (0x184 => pub publish_ovrflw: ReadWrite<u32, PUBLISH::Register>),
        (0x188 => _reserved4),
        (0x1C0 => pub publish_compare: [ReadWrite<u32, PUBLISH::Register>; NUM_CC]),
        (0x1D0 => _reserved5),
        /// Enable interrupt
        (0x304 => pub intenset: ReadWrite<u32, INTEN::Register>),
        /// Disable interrupt
        (0x308 => pub intenclr: ReadWrite<u32, INTEN::Register>),
        (0x30C => _reserved6),
        /// Enable or disable event routing
        (0x340 => pub evten: ReadWrite<u32, INTEN::Register>),
        /// Enable event routing
        (0x344 => pub evtenset: ReadWrite<u32, INTEN::Register>),
        /// Disable event routing
        (0x348 => pub evtenclr: ReadWrite<u32, INTEN::Register>),
        (0x34C => _reserved7),
        /// Current counter value
        (0x504 => pub counter: ReadOnly<u32, COUNTER::Register>),
        /// 12-bit prescaler for counter frequency (32768/(PRESCALER+1)).
        /// Must be written when RTC is stopped.
        (0x508 => pub prescaler: ReadWrite<u32, PRESCALER::Register>),
        (0x50C => _reserved8),
        /// Compare register n
        (0x540 => pub cc: [ReadWrite<u32, CC::Register>; NUM_CC]),
        (0x550 => @END),
    }
}

register_bitfields![u32,
    /// INTEN*, EVTEN* share one layout
    pub INTEN [
        TICK OFFSET(0) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        OVRFLW OFFSET(1) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        COMPARE0 OFFSET(16) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        COMPARE1 OFFSET(17) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        COMPARE2 OFFSET(18) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        COMPARE3 OFFSET(19) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ]
    ],

    pub COUNTER [
        /// Counter value
        COUNTER OFFSET(0) NUMBITS(24) []
    ],

    pub PRESCALER [
        PRESCALER OFFSET(0) NUMBITS(12) []
    ],

    pub CC [
        /// Compare value
        COMPARE OFFSET(0) NUMBITS(24) []
    ]
];

/// Counter frequency in Hz for a given prescaler setting. Only the 12 bits
/// the PRESCALER register holds are used.
pub const fn frequency(prescaler: u32) -> u32 {
    32_768 / ((prescaler & PRESCALER::PRESCALER.mask) + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitfield::FieldLayout;
    use core::mem::offset_of;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(RtcRegisters, events_compare), 0x140);
        assert_eq!(offset_of!(RtcRegisters, evtenclr), 0x348);
        assert_eq!(offset_of!(RtcRegisters, counter), 0x504);
        assert_eq!(offset_of!(RtcRegisters, cc), 0x540);
    }

    #[test]
    fn counter_is_24_bits() {
        assert_eq!(COUNTER::COUNTER.mask_in_place(), 0x00FF_FFFF);
        assert_eq!(CC::COMPARE.width(), 24);
        assert_eq!(PRESCALER::PRESCALER.mask_in_place(), 0xFFF);
    }

    #[test]
    fn prescaler_frequency() {
        assert_eq!(frequency(0), 32_768);
        assert_eq!(frequency(0xFFF), 8);
    }

    #[test]
    fn prescaler_wider_than_register_is_truncated() {
        assert_eq!(frequency(u32::MAX), 8);
        assert_eq!(frequency(0x1000), 32_768);
    }
}
