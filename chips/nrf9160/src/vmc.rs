// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Volatile memory controller (VMC): power and retention control of the
//! eight 32 KiB RAM blocks, each split into four 8 KiB sections.

use crate::memory_map;
use crate::StaticRef;
use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

pub const VMC_BASE: StaticRef<VmcRegisters> =
    unsafe { StaticRef::new(memory_map::VMC as *const VmcRegisters) };

pub const NUM_RAM_BLOCKS: usize = 8;

register_structs! {
    pub RamBlock {
        /// RAMn power control register
        (0x0 => pub power: ReadWrite<u32, POWER::Register>),
        /// RAMn power control set register
        (0x4 => pub powerset: ReadWrite<u32, POWER::Register>),
        /// RAMn power control clear register
        (0x8 => pub powerclr: ReadWrite<u32, POWER::Register>),
        (0xC => _reserved0),
        (0x10 => @END),
    },

    pub VmcRegisters {
        (0x000 => _reserved0),
        (0x600 => pub ram: [RamBlock; NUM_RAM_BLOCKS]),
        (0x680 => @END),
    }
}

register_bitfields![u32,
    /// POWER, POWERSET and POWERCLR: section power in System ON
    /// (`SnPOWER`) and retention in System OFF (`SnRETENTION`)
    pub POWER [
        S0POWER OFFSET(0) NUMBITS(1) [
            /// Off
            Off = 0,
            /// On
            On = 1
        ],
        S1POWER OFFSET(1) NUMBITS(1) [
            Off = 0,
            On = 1
        ],
        S2POWER OFFSET(2) NUMBITS(1) [
            Off = 0,
            On = 1
        ],
        S3POWER OFFSET(3) NUMBITS(1) [
            Off = 0,
            On = 1
        ],
        S0RETENTION OFFSET(16) NUMBITS(1) [
            Off = 0,
            On = 1
        ],
        S1RETENTION OFFSET(17) NUMBITS(1) [
            Off = 0,
            On = 1
        ],
        S2RETENTION OFFSET(18) NUMBITS(1) [
            Off = 0,
            On = 1
        ],
        S3RETENTION OFFSET(19) NUMBITS(1) [
            Off = 0,
            On = 1
        ]
    ]
];

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};

    #[test]
    fn register_offsets() {
        assert_eq!(size_of::<RamBlock>(), 0x10);
        assert_eq!(offset_of!(VmcRegisters, ram), 0x600);
    }

    #[test]
    fn all_sections_on() {
        let on = POWER::S0POWER::On
            + POWER::S1POWER::On
            + POWER::S2POWER::On
            + POWER::S3POWER::On;
        assert_eq!(on.value, 0xF);
        assert_eq!(POWER::S3RETENTION::On.value, 1 << 19);
        assert_eq!(POWER::S0RETENTION::Off.value, 0);
    }
}
