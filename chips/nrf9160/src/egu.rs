// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Event generator unit (EGU)

use crate::common::{EVENT, PUBLISH, SUBSCRIBE, TASK};
use crate::memory_map;
use crate::StaticRef;
use tock_registers::registers::{ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

pub const EGU0_BASE: StaticRef<EguRegisters> =
    unsafe { StaticRef::new(memory_map::EGU0 as *const EguRegisters) };
pub const EGU1_BASE: StaticRef<EguRegisters> =
    unsafe { StaticRef::new(memory_map::EGU1 as *const EguRegisters) };
pub const EGU2_BASE: StaticRef<EguRegisters> =
    unsafe { StaticRef::new(memory_map::EGU2 as *const EguRegisters) };
pub const EGU3_BASE: StaticRef<EguRegisters> =
    unsafe { StaticRef::new(memory_map::EGU3 as *const EguRegisters) };
pub const EGU4_BASE: StaticRef<EguRegisters> =
    unsafe { StaticRef::new(memory_map::EGU4 as *const EguRegisters) };
pub const EGU5_BASE: StaticRef<EguRegisters> =
    unsafe { StaticRef::new(memory_map::EGU5 as *const EguRegisters) };

pub const NUM_TRIGGERS: usize = 16;

register_structs! {
    pub EguRegisters {
        /// Trigger n for triggering the corresponding TRIGGERED[n] event
        (0x000 => pub tasks_trigger: [WriteOnly<u32, TASK::Register>; NUM_TRIGGERS]),
        (0x040 => _reserved0),
        (0x080 => pub subscribe_trigger: [ReadWrite<u32, SUBSCRIBE::Register>; NUM_TRIGGERS]),
        (0x0C0 => _reserved1),
        /// Event number n generated by triggering the corresponding
        /// TRIGGER[n] task
        (0x100 => pub events_triggered: [ReadWrite<u32, EVENT::Register>; NUM_TRIGGERS]),
        (0x140 => _reserved2),
        (0x180 => pub publish_triggered: [ReadWrite<u32, PUBLISH::Register>; NUM_TRIGGERS]),
        (0x1C0 => _reserved3),
        /// Enable or disable interrupt
        (0x300 => pub inten: ReadWrite<u32, INTEN::Register>),
        /// Enable interrupt
        (0x304 => pub intenset: ReadWrite<u32, INTEN::Register>),
        /// Disable interrupt
        (0x308 => pub intenclr: ReadWrite<u32, INTEN::Register>),
        (0x30C => @END),
    }
}

register_bitfields![u32,
    pub INTEN [
        TRIGGERED0 OFFSET(0) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        TRIGGERED1 OFFSET(1) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        TRIGGERED2 OFFSET(2) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        TRIGGERED3 OFFSET(3) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        TRIGGERED4 OFFSET(4) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        TRIGGERED5 OFFSET(5) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        TRIGGERED6 OFFSET(6) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        TRIGGERED7 OFFSET(7) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        TRIGGERED8 OFFSET(8) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        TRIGGERED9 OFFSET(9) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        TRIGGERED10 OFFSET(10) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        TRIGGERED11 OFFSET(11) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        TRIGGERED12 OFFSET(12) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        TRIGGERED13 OFFSET(13) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        TRIGGERED14 OFFSET(14) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        TRIGGERED15 OFFSET(15) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ]
    ]
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitfield::FieldLayout;
    use core::mem::offset_of;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(EguRegisters, subscribe_trigger), 0x080);
        assert_eq!(offset_of!(EguRegisters, events_triggered), 0x100);
        assert_eq!(offset_of!(EguRegisters, publish_triggered), 0x180);
        assert_eq!(offset_of!(EguRegisters, inten), 0x300);
    }

    #[test]
    fn one_interrupt_bit_per_trigger() {
        assert_eq!(INTEN::TRIGGERED15.position() as usize, NUM_TRIGGERS - 1);
    }
}
