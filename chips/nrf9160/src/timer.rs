// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Timer/counter (TIMER)

use crate::common::{EVENT, PUBLISH, SUBSCRIBE, TASK, WORD};
use crate::memory_map;
use crate::StaticRef;
use tock_registers::registers::{ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

pub const TIMER0_BASE: StaticRef<TimerRegisters> =
    unsafe { StaticRef::new(memory_map::TIMER0 as *const TimerRegisters) };
pub const TIMER1_BASE: StaticRef<TimerRegisters> =
    unsafe { StaticRef::new(memory_map::TIMER1 as *const TimerRegisters) };
pub const TIMER2_BASE: StaticRef<TimerRegisters> =
    unsafe { StaticRef::new(memory_map::TIMER2 as *const TimerRegisters) };

/// Capture/compare registers per instance.
pub const NUM_CC: usize = 6;

register_structs! {
    pub TimerRegisters {
        /// Start Timer
        (0x000 => pub tasks_start: WriteOnly<u32, TASK::Register>),
        /// Stop Timer
        (0x004 => pub tasks_stop: WriteOnly<u32, TASK::Register>),
        /// Increment Timer (Counter mode only)
        (0x008 => pub tasks_count: WriteOnly<u32, TASK::Register>),
        /// Clear time
        (0x00C => pub tasks_clear: WriteOnly<u32, TASK::Register>),
        /// Shut down timer
        (0x010 => pub tasks_shutdown: WriteOnly<u32, TASK::Register>),
        (0x014 => _reserved0),
        /// Capture Timer value to CC[n] register
        (0x040 => pub tasks_capture: [WriteOnly<u32, TASK::Register>; NUM_CC]),
        (0x058 => _reserved1),
        (0x080 => pub subscribe_start: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x084 => pub subscribe_stop: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x088 => pub subscribe_count: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x08C => pub subscribe_clear: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x090 => pub subscribe_shutdown: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x094 => _reserved2),
        (0x0C0 => pub subscribe_capture: [ReadWrite<u32, SUBSCRIBE::Register>; NUM_CC]),
        (0x0D8 => _reserved3),
        /// Compare event on CC[n] match
        (0x140 => pub events_compare: [ReadWrite<u32, EVENT::Register>; NUM_CC]),
        (0x158 => _reserved4),
        (0x1C0 => pub publish_compare: [ReadWrite<u32, PUBLISH::Register>; NUM_CC]),
        (0x1D8 => _reserved5),
        /// Shortcuts between local events and tasks
        (0x200 => pub shorts: ReadWrite<u32, SHORTS::Register>),
        (0x204 => _reserved6),
        /// Enable interrupt
        (0x304 => pub intenset: ReadWrite<u32, INTEN::Register>),
        /// Disable interrupt
        (0x308 => pub intenclr: ReadWrite<u32, INTEN::Register>),
        (0x30C => _reserved7),
        /// Timer mode selection
        (0x504 => pub mode: ReadWrite<u32, MODE::Register>),
        /// Configure the number of bits used by the TIMER
        (0x508 => pub bitmode: ReadWrite<u32, BITMODE::Register>),
        (0x50C => _reserved8),
        /// Timer prescaler register
        (0x510 => pub prescaler: ReadWrite<u32, PRESCALER::Register>),
        (0x514 => _reserved9),
        /// Capture/Compare register n
        (0x540 => pub cc: [ReadWrite<u32, WORD::Register>; NUM_CC]),
        (0x558 => @END),
    }
}

register_bitfields![u32,
    pub SHORTS [
        COMPARE0_CLEAR OFFSET(0) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        COMPARE1_CLEAR OFFSET(1) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        COMPARE2_CLEAR OFFSET(2) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        COMPARE3_CLEAR OFFSET(3) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        COMPARE4_CLEAR OFFSET(4) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        COMPARE5_CLEAR OFFSET(5) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        COMPARE0_STOP OFFSET(8) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        COMPARE1_STOP OFFSET(9) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        COMPARE2_STOP OFFSET(10) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        COMPARE3_STOP OFFSET(11) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        COMPARE4_STOP OFFSET(12) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        COMPARE5_STOP OFFSET(13) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ]
    ],

    pub INTEN [
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
        ],
        COMPARE4 OFFSET(20) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        COMPARE5 OFFSET(21) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ]
    ],

    pub MODE [
        /// Timer mode
        MODE OFFSET(0) NUMBITS(2) [
            /// Select Timer mode
            Timer = 0,
            /// Deprecated enumerator - Select Counter mode
            Counter = 1,
            /// Select Low Power Counter mode
            LowPowerCounter = 2
        ]
    ],

    pub BITMODE [
        /// Timer bit width
        BITMODE OFFSET(0) NUMBITS(2) [
            Bit16 = 0,
            Bit08 = 1,
            Bit24 = 2,
            Bit32 = 3
        ]
    ],

    pub PRESCALER [
        /// Prescaler value; the timer runs at 16 MHz / 2^PRESCALER
        PRESCALER OFFSET(0) NUMBITS(4) []
    ]
];

impl BITMODE::BITMODE::Value {
    /// Width of the counter in bits.
    pub fn bits(self) -> u32 {
        match self {
            BITMODE::BITMODE::Value::Bit08 => 8,
            BITMODE::BITMODE::Value::Bit16 => 16,
            BITMODE::BITMODE::Value::Bit24 => 24,
            BITMODE::BITMODE::Value::Bit32 => 32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitfield::FieldLayout;
    use core::mem::offset_of;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(TimerRegisters, tasks_capture), 0x040);
        assert_eq!(offset_of!(TimerRegisters, subscribe_capture), 0x0C0);
        assert_eq!(offset_of!(TimerRegisters, events_compare), 0x140);
        assert_eq!(offset_of!(TimerRegisters, publish_compare), 0x1C0);
        assert_eq!(offset_of!(TimerRegisters, prescaler), 0x510);
        assert_eq!(offset_of!(TimerRegisters, cc), 0x540);
    }

    #[test]
    fn bitmode_encoding_is_not_monotonic() {
        let bm = LocalRegisterCopy::<u32, BITMODE::Register>::new(1);
        let width = bm.read_as_enum(BITMODE::BITMODE).map(BITMODE::BITMODE::Value::bits);
        assert_eq!(width, Some(8));
        assert_eq!(BITMODE::BITMODE::Bit32.value, 3);
    }

    #[test]
    fn shorts_and_interrupts() {
        assert_eq!(SHORTS::COMPARE5_STOP.mask_in_place(), 1 << 13);
        assert_eq!(INTEN::COMPARE0.position(), 16);
    }
}
