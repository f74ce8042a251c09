// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Distributed programmable peripheral interconnect controller (DPPIC)
//!
//! Peripherals publish events to, and subscribe tasks on, one of 16
//! channels through their own `PUBLISH_*` / `SUBSCRIBE_*` registers. The
//! controller only enables channels, individually or in groups.

use crate::common::{SUBSCRIBE, TASK};
use crate::memory_map;
use crate::StaticRef;
use tock_registers::registers::{ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

pub const DPPIC_BASE: StaticRef<DppicRegisters> =
    unsafe { StaticRef::new(memory_map::DPPIC as *const DppicRegisters) };

pub const NUM_CHANNELS: usize = 16;
pub const NUM_GROUPS: usize = 6;

register_structs! {
    pub GroupTasks {
        /// Enable channel group n
        (0x0 => pub en: WriteOnly<u32, TASK::Register>),
        /// Disable channel group n
        (0x4 => pub dis: WriteOnly<u32, TASK::Register>),
        (0x8 => @END),
    },

    pub GroupSubscribe {
        (0x0 => pub en: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x4 => pub dis: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x8 => @END),
    },

    pub DppicRegisters {
        (0x000 => pub tasks_chg: [GroupTasks; NUM_GROUPS]),
        (0x030 => _reserved0),
        (0x080 => pub subscribe_chg: [GroupSubscribe; NUM_GROUPS]),
        (0x0B0 => _reserved1),
        /// Channel enable register
        (0x500 => pub chen: ReadWrite<u32, CHEN::Register>),
        /// Channel enable set register
        (0x504 => pub chenset: ReadWrite<u32, CHEN::Register>),
        /// Channel enable clear register
        (0x508 => pub chenclr: ReadWrite<u32, CHEN::Register>),
        (0x50C => _reserved2),
        /// Channel group n. Note: Writes to this register are ignored if
        /// either SUBSCRIBE_CHG[n].EN or SUBSCRIBE_CHG[n].DIS is enabled.
        (0x800 => pub chg: [ReadWrite<u32, CHG::Register>; NUM_GROUPS]),
        (0x818 => @END),
    }
}

register_bitfields![u32,
    /// CHEN, CHENSET and CHENCLR
    pub CHEN [
        CH0 OFFSET(0) NUMBITS(1) [
            /// Disable channel
            Disabled = 0,
            /// Enable channel
            Enabled = 1
        ],
        CH1 OFFSET(1) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        CH2 OFFSET(2) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        CH3 OFFSET(3) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        CH4 OFFSET(4) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        CH5 OFFSET(5) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        CH6 OFFSET(6) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        CH7 OFFSET(7) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        CH8 OFFSET(8) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        CH9 OFFSET(9) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        CH10 OFFSET(10) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        CH11 OFFSET(11) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        CH12 OFFSET(12) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        CH13 OFFSET(13) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        CH14 OFFSET(14) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        CH15 OFFSET(15) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ]
    ],

    /// Channel group membership CHG[n]
    pub CHG [
        CH0 OFFSET(0) NUMBITS(1) [
            /// Exclude
            Excluded = 0,
            /// Include
            Included = 1
        ],
        CH1 OFFSET(1) NUMBITS(1) [
            Excluded = 0,
            Included = 1
        ],
        CH2 OFFSET(2) NUMBITS(1) [
            Excluded = 0,
            Included = 1
        ],
        CH3 OFFSET(3) NUMBITS(1) [
            Excluded = 0,
            Included = 1
        ],
        CH4 OFFSET(4) NUMBITS(1) [
            Excluded = 0,
            Included = 1
        ],
        CH5 OFFSET(5) NUMBITS(1) [
            Excluded = 0,
            Included = 1
        ],
        CH6 OFFSET(6) NUMBITS(1) [
            Excluded = 0,
            Included = 1
        ],
        CH7 OFFSET(7) NUMBITS(1) [
            Excluded = 0,
            Included = 1
        ],
        CH8 OFFSET(8) NUMBITS(1) [
            Excluded = 0,
            Included = 1
        ],
        CH9 OFFSET(9) NUMBITS(1) [
            Excluded = 0,
            Included = 1
        ],
        CH10 OFFSET(10) NUMBITS(1) [
            Excluded = 0,
            Included = 1
        ],
        CH11 OFFSET(11) NUMBITS(1) [
            Excluded = 0,
            Included = 1
        ],
        CH12 OFFSET(12) NUMBITS(1) [
            Excluded = 0,
            Included = 1
        ],
        CH13 OFFSET(13) NUMBITS(1) [
            Excluded = 0,
            Included = 1
        ],
        CH14 OFFSET(14) NUMBITS(1) [
            Excluded = 0,
            Included = 1
        ],
        CH15 OFFSET(15) NUMBITS(1) [
            Excluded = 0,
            Included = 1
        ]
    ]
];

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{ReadWriteable, Readable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn register_offsets() {
        assert_eq!(size_of::<GroupTasks>(), 8);
        assert_eq!(offset_of!(DppicRegisters, subscribe_chg), 0x080);
        assert_eq!(offset_of!(DppicRegisters, chenclr), 0x508);
        assert_eq!(offset_of!(DppicRegisters, chg), 0x800);
    }

    #[test]
    fn channel_group_membership() {
        let chg: InMemoryRegister<u32, CHG::Register> = InMemoryRegister::new(0);
        chg.modify(CHG::CH0::Included + CHG::CH15::Included);
        assert_eq!(chg.get(), 0x8001);
        assert!(chg.is_set(CHG::CH15));
        assert_eq!(chg.read_as_enum(CHG::CH1), Some(CHG::CH1::Value::Excluded));
    }

    #[test]
    fn channel_enable() {
        let chen: InMemoryRegister<u32, CHEN::Register> = InMemoryRegister::new(0);
        chen.modify(CHEN::CH3::Enabled);
        assert_eq!(chen.get(), 1 << 3);
        assert_eq!(chen.read_as_enum(CHEN::CH3), Some(CHEN::CH3::Value::Enabled));
    }
}
