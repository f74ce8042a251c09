// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Serial peripheral interface master with EasyDMA (SPIM)

use crate::common::{EVENT, LIST, PSEL, PUBLISH, SUBSCRIBE, TASK, WORD};
use crate::memory_map;
use crate::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

pub const SPIM0_BASE: StaticRef<SpimRegisters> =
    unsafe { StaticRef::new(memory_map::SERIAL0 as *const SpimRegisters) };
pub const SPIM1_BASE: StaticRef<SpimRegisters> =
    unsafe { StaticRef::new(memory_map::SERIAL1 as *const SpimRegisters) };
pub const SPIM2_BASE: StaticRef<SpimRegisters> =
    unsafe { StaticRef::new(memory_map::SERIAL2 as *const SpimRegisters) };
pub const SPIM3_BASE: StaticRef<SpimRegisters> =
    unsafe { StaticRef::new(memory_map::SERIAL3 as *const SpimRegisters) };

register_structs! {
    pub SpimRegisters {
        (0x000 => _reserved0),
        /// Start SPI transaction
        (0x010 => pub tasks_start: WriteOnly<u32, TASK::Register>),
        /// Stop SPI transaction
        (0x014 => pub tasks_stop: WriteOnly<u32, TASK::Register>),
        (0x018 => _reserved1),
        /// Suspend SPI transaction
        (0x01C => pub tasks_suspend: WriteOnly<u32, TASK::Register>),
        /// Resume SPI transaction
        (0x020 => pub tasks_resume: WriteOnly<u32, TASK::Register>),
        (0x024 => _reserved2),
        (0x090 => pub subscribe_start: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x094 => pub subscribe_stop: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x098 => _reserved3),
        (0x09C => pub subscribe_suspend: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x0A0 => pub subscribe_resume: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x0A4 => _reserved4),
        /// SPI transaction has stopped
        (0x104 => pub events_stopped: ReadWrite<u32, EVENT::Register>),
        (0x108 => _reserved5),
        /// End of RXD buffer reached
        (0x110 => pub events_endrx: ReadWrite<u32, EVENT::Register>),
        (0x114 => _reserved6),
        /// End of RXD buffer and TXD buffer reached
        (0x118 => pub events_end: ReadWrite<u32, EVENT::Register>),
        (0x11C => _reserved7),
        /// End of TXD buffer reached
        (0x120 => pub events_endtx: ReadWrite<u32, EVENT::Register>),
        (0x124 => _reserved8),
        /// Transaction started
        (0x14C => pub events_started: ReadWrite<u32, EVENT::Register>),
        (0x150 => _reserved9),
        (0x184 => pub publish_stopped: ReadWrite<u32, PUBLISH::Register>),
        (0x188 => _reserved10),
        (0x190 => pub publish_endrx: ReadWrite<u32, PUBLISH::Register>),
        (0x194 => _reserved11),
        (0x198 => pub publish_end: ReadWrite<u32, PUBLISH::Register>),
        (0x19C => _reserved12),
        (0x1A0 => pub publish_endtx: ReadWrite<u32, PUBLISH::Register>),
        (0x1A4 => _reserved13),
        (0x1CC => pub publish_started: ReadWrite<u32, PUBLISH::Register>),
        (0x1D0 => _reserved14),
        /// Shortcuts between local events and tasks
        (0x200 => pub shorts: ReadWrite<u32, SHORTS::Register>),
        (0x204 => _reserved15),
        /// Enable interrupt
        (0x304 => pub intenset: ReadWrite<u32, INTEN::Register>),
        /// Disable interrupt
        (0x308 => pub intenclr: ReadWrite<u32, INTEN::Register>),
        (0x30C => _reserved16),
        /// Enable SPIM
        (0x500 => pub enable: ReadWrite<u32, ENABLE::Register>),
        (0x504 => _reserved17),
        /// Pin select for SCK
        (0x508 => pub psel_sck: ReadWrite<u32, PSEL::Register>),
        /// Pin select for MOSI signal
        (0x50C => pub psel_mosi: ReadWrite<u32, PSEL::Register>),
        /// Pin select for MISO signal
        (0x510 => pub psel_miso: ReadWrite<u32, PSEL::Register>),
        (0x514 => _reserved18),
        /// SPI frequency. Accuracy depends on the HFCLK source selected.
        (0x524 => pub frequency: ReadWrite<u32, FREQUENCY::Register>),
        (0x528 => _reserved19),
        /// Data pointer
        (0x534 => pub rxd_ptr: ReadWrite<u32, WORD::Register>),
        /// Maximum number of bytes in receive buffer
        (0x538 => pub rxd_maxcnt: ReadWrite<u32, MAXCNT::Register>),
        /// Number of bytes transferred in the last transaction
        (0x53C => pub rxd_amount: ReadOnly<u32, MAXCNT::Register>),
        /// EasyDMA list type
        (0x540 => pub rxd_list: ReadWrite<u32, LIST::Register>),
        /// Data pointer
        (0x544 => pub txd_ptr: ReadWrite<u32, WORD::Register>),
        /// Number of bytes in transmit buffer
        (0x548 => pub txd_maxcnt: ReadWrite<u32, MAXCNT::Register>),
        /// Number of bytes transferred in the last transaction
        (0x54C => pub txd_amount: ReadOnly<u32, MAXCNT::Register>),
        /// EasyDMA list type
        (0x550 => pub txd_list: ReadWrite<u32, LIST::Register>),
        /// Configuration register
        (0x554 => pub config: ReadWrite<u32, CONFIG::Register>),
        (0x558 => _reserved20),
        /// Over-read character. Character clocked out in case an over-read
        /// of the TXD buffer.
        (0x5C0 => pub orc: ReadWrite<u32, ORC::Register>),
        (0x5C4 => @END),
    }
}

register_bitfields![u32,
    pub SHORTS [
        /// Shortcut between event END and task START
        END_START OFFSET(17) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ]
    ],

    pub INTEN [
        STOPPED OFFSET(1) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        ENDRX OFFSET(4) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        END OFFSET(6) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        ENDTX OFFSET(8) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        STARTED OFFSET(19) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ]
    ],

    pub ENABLE [
        ENABLE OFFSET(0) NUMBITS(4) [
            Disabled = 0,
            Enabled = 7
        ]
    ],

    pub FREQUENCY [
        /// SPI master data rate
        FREQUENCY OFFSET(0) NUMBITS(32) [
            /// 125 kbps
            K125 = 0x02000000,
            /// 250 kbps
            K250 = 0x04000000,
            /// 500 kbps
            K500 = 0x08000000,
            /// 1 Mbps
            M1 = 0x10000000,
            /// 2 Mbps
            M2 = 0x20000000,
            /// 4 Mbps
            M4 = 0x40000000,
            /// 8 Mbps
            M8 = 0x80000000
        ]
    ],

    pub MAXCNT [
        MAXCNT OFFSET(0) NUMBITS(13) []
    ],

    pub CONFIG [
        /// Bit order
        ORDER OFFSET(0) NUMBITS(1) [
            /// Most significant bit shifted out first
            MsbFirst = 0,
            /// Least significant bit shifted out first
            LsbFirst = 1
        ],
        /// Serial clock (SCK) phase
        CPHA OFFSET(1) NUMBITS(1) [
            /// Sample on leading edge of clock, shift serial data on
            /// trailing edge
            Leading = 0,
            /// Sample on trailing edge of clock, shift serial data on
            /// leading edge
            Trailing = 1
        ],
        /// Serial clock (SCK) polarity
        CPOL OFFSET(2) NUMBITS(1) [
            /// Active high
            ActiveHigh = 0,
            /// Active low
            ActiveLow = 1
        ]
    ],

    pub ORC [
        /// Over-read character
        ORC OFFSET(0) NUMBITS(8) []
    ]
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitfield::FieldLayout;
    use core::mem::offset_of;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(SpimRegisters, tasks_start), 0x010);
        assert_eq!(offset_of!(SpimRegisters, events_started), 0x14C);
        assert_eq!(offset_of!(SpimRegisters, frequency), 0x524);
        assert_eq!(offset_of!(SpimRegisters, txd_list), 0x550);
        assert_eq!(offset_of!(SpimRegisters, orc), 0x5C0);
    }

    #[test]
    fn mode_3_config() {
        let config = CONFIG::ORDER::MsbFirst + CONFIG::CPHA::Trailing + CONFIG::CPOL::ActiveLow;
        assert_eq!(config.value, 0b110);
        assert_eq!(SHORTS::END_START.mask_in_place(), 1 << 17);
    }

    #[test]
    fn frequency_values() {
        assert_eq!(FREQUENCY::FREQUENCY::M8.value, 0x8000_0000);
        assert_eq!(FREQUENCY::FREQUENCY::K125.value, 0x0200_0000);
    }
}
