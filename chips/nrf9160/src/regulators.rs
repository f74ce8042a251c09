// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Voltage regulators control

use crate::memory_map;
use crate::StaticRef;
use tock_registers::registers::{ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

pub const REGULATORS_BASE: StaticRef<RegulatorsRegisters> =
    unsafe { StaticRef::new(memory_map::REGULATORS as *const RegulatorsRegisters) };

register_structs! {
    pub RegulatorsRegisters {
        (0x000 => _reserved0),
        /// System OFF register
        (0x500 => pub systemoff: WriteOnly<u32, SYSTEMOFF::Register>),
        (0x504 => _reserved1),
        /// Power-fail comparator configuration
        (0x510 => pub pofcon: ReadWrite<u32, POFCON::Register>),
        (0x514 => _reserved2),
        /// Enable DC/DC mode of the main voltage regulator
        (0x578 => pub dcdcen: ReadWrite<u32, DCDCEN::Register>),
        (0x57C => @END),
    }
}

register_bitfields![u32,
    pub SYSTEMOFF [
        /// Enable System OFF mode
        SYSTEMOFF OFFSET(0) NUMBITS(1) [
            /// Enable System OFF mode
            Enter = 1
        ]
    ],

    pub POFCON [
        /// Enable or disable power-fail comparator
        POF OFFSET(0) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        /// Power-fail comparator threshold setting
        THRESHOLD OFFSET(1) NUMBITS(4) [
            /// Set threshold to 1.9 V
            V19 = 6,
            /// Set threshold to 2.0 V
            V20 = 7,
            /// Set threshold to 2.1 V
            V21 = 8,
            /// Set threshold to 2.2 V
            V22 = 9,
            /// Set threshold to 2.3 V
            V23 = 10,
            /// Set threshold to 2.4 V
            V24 = 11,
            /// Set threshold to 2.5 V
            V25 = 12,
            /// Set threshold to 2.6 V
            V26 = 13,
            /// Set threshold to 2.7 V
            V27 = 14,
            /// Set threshold to 2.8 V
            V28 = 15
        ]
    ],

    pub DCDCEN [
        /// Enable DC/DC buck converter
        DCDCEN OFFSET(0) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
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
        assert_eq!(offset_of!(RegulatorsRegisters, systemoff), 0x500);
        assert_eq!(offset_of!(RegulatorsRegisters, pofcon), 0x510);
        assert_eq!(offset_of!(RegulatorsRegisters, dcdcen), 0x578);
    }

    #[test]
    fn power_fail_threshold() {
        let pofcon = POFCON::POF::Enabled + POFCON::THRESHOLD::V28;
        assert_eq!(pofcon.value, 0x1F);
        let reg = LocalRegisterCopy::<u32, POFCON::Register>::new(0xD);
        assert_eq!(
            reg.read_as_enum(POFCON::THRESHOLD),
            Some(POFCON::THRESHOLD::Value::V19)
        );
        assert!(reg.matches_all(POFCON::POF::Enabled));
    }
}
