// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! I2C compatible two-wire interface master with EasyDMA (TWIM)

use crate::common::{EVENT, LIST, PSEL, PUBLISH, SUBSCRIBE, TASK, WORD};
use crate::memory_map;
use crate::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

pub const TWIM0_BASE: StaticRef<TwimRegisters> =
    unsafe { StaticRef::new(memory_map::SERIAL0 as *const TwimRegisters) };
pub const TWIM1_BASE: StaticRef<TwimRegisters> =
    unsafe { StaticRef::new(memory_map::SERIAL1 as *const TwimRegisters) };
pub const TWIM2_BASE: StaticRef<TwimRegisters> =
    unsafe { StaticRef::new(memory_map::SERIAL2 as *const TwimRegisters) };
pub const TWIM3_BASE: StaticRef<TwimRegisters> =
    unsafe { StaticRef::new(memory_map::SERIAL3 as *const TwimRegisters) };

register_structs! {
    pub TwimRegisters {
        /// Start TWI receive sequence
        (0x000 => pub tasks_startrx: WriteOnly<u32, TASK::Register>),
        (0x004 => _reserved0),
        /// Start TWI transmit sequence
        (0x008 => pub tasks_starttx: WriteOnly<u32, TASK::Register>),
        (0x00C => _reserved1),
        /// Stop TWI transaction. Must be issued while the TWI master is not
        /// suspended.
        (0x014 => pub tasks_stop: WriteOnly<u32, TASK::Register>),
        (0x018 => _reserved2),
        /// Suspend TWI transaction
        (0x01C => pub tasks_suspend: WriteOnly<u32, TASK::Register>),
        /// Resume TWI transaction
        (0x020 => pub tasks_resume: WriteOnly<u32, TASK::Register>),
        (0x024 => _reserved3),
        (0x080 => pub subscribe_startrx: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x084 => _reserved4),
        (0x088 => pub subscribe_starttx: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x08C => _reserved5),
        (0x094 => pub subscribe_stop: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x098 => _reserved6),
        (0x09C => pub subscribe_suspend: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x0A0 => pub subscribe_resume: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x0A4 => _reserved7),
        /// TWI stopped
        (0x104 => pub events_stopped: ReadWrite<u32, EVENT::Register>),
        (0x108 => _reserved8),
        /// TWI error
        (0x124 => pub events_error: ReadWrite<u32, EVENT::Register>),
        (0x128 => _reserved9),
        /// Last byte has been sent out after the SUSPEND task has been
        /// issued, TWI traffic is now suspended.
        (0x148 => pub events_suspended: ReadWrite<u32, EVENT::Register>),
        /// Receive sequence started
        (0x14C => pub events_rxstarted: ReadWrite<u32, EVENT::Register>),
        /// Transmit sequence started
        (0x150 => pub events_txstarted: ReadWrite<u32, EVENT::Register>),
        (0x154 => _reserved10),
        /// Byte boundary, starting to receive the last byte
        (0x15C => pub events_lastrx: ReadWrite<u32, EVENT::Register>),
        /// Byte boundary, starting to transmit the last byte
        (0x160 => pub events_lasttx: ReadWrite<u32, EVENT::Register>),
        (0x164 => _reserved11),
        (0x184 => pub publish_stopped: ReadWrite<u32, PUBLISH::Register>),
        (0x188 => _reserved12),
        (0x1A4 => pub publish_error: ReadWrite<u32, PUBLISH::Register>),
        (0x1A8 => _reserved13),
        (0x1C8 => pub publish_suspended: ReadWrite<u32, PUBLISH::Register>),
        (0x1CC => pub publish_rxstarted: ReadWrite<u32, PUBLISH::Register>),
        (0x1D0 => pub publish_txstarted: ReadWrite<u32, PUBLISH::Register>),
        (0x1D4 => _reserved14),
        (0x1DC => pub publish_lastrx: ReadWrite<u32, PUBLISH::Register>),
        (0x1E0 => pub publish_lasttx: ReadWrite<u32, PUBLISH::Register>),
        (0x1E4 => _reserved15),
        /// Shortcuts between local events and tasks
        (0x200 => pub shorts: ReadWrite<u32, SHORTS::Register>),
        (0x204 => _reserved16),
        /// Enable or disable interrupt
        (0x300 => pub inten: ReadWrite<u32, INTEN::Register>),
        /// Enable interrupt
        (0x304 => pub intenset: ReadWrite<u32, INTEN::Register>),
        /// Disable interrupt
        (0x308 => pub intenclr: ReadWrite<u32, INTEN::Register>),
        (0x30C => _reserved17),
        /// Error source
        (0x4C4 => pub errorsrc: ReadWrite<u32, ERRORSRC::Register>),
        (0x4C8 => _reserved18),
        /// Enable TWIM
        (0x500 => pub enable: ReadWrite<u32, ENABLE::Register>),
        (0x504 => _reserved19),
        /// Pin select for SCL signal
        (0x508 => pub psel_scl: ReadWrite<u32, PSEL::Register>),
        /// Pin select for SDA signal
        (0x50C => pub psel_sda: ReadWrite<u32, PSEL::Register>),
        (0x510 => _reserved20),
        /// TWI frequency. Accuracy depends on the HFCLK source selected.
        (0x524 => pub frequency: ReadWrite<u32, FREQUENCY::Register>),
        (0x528 => _reserved21),
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
        /// Maximum number of bytes in transmit buffer
        (0x548 => pub txd_maxcnt: ReadWrite<u32, MAXCNT::Register>),
        /// Number of bytes transferred in the last transaction
        (0x54C => pub txd_amount: ReadOnly<u32, MAXCNT::Register>),
        /// EasyDMA list type
        (0x550 => pub txd_list: ReadWrite<u32, LIST::Register>),
        (0x554 => _reserved22),
        /// Address used in the TWI transfer
        (0x588 => pub address: ReadWrite<u32, ADDRESS::Register>),
        (0x58C => @END),
    }
}

register_bitfields![u32,
    pub SHORTS [
        /// Shortcut between event LASTTX and task STARTRX
        LASTTX_STARTRX OFFSET(7) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        /// Shortcut between event LASTTX and task SUSPEND
        LASTTX_SUSPEND OFFSET(8) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        /// Shortcut between event LASTTX and task STOP
        LASTTX_STOP OFFSET(9) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        /// Shortcut between event LASTRX and task STARTTX
        LASTRX_STARTTX OFFSET(10) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        /// Shortcut between event LASTRX and task SUSPEND
        LASTRX_SUSPEND OFFSET(11) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        /// Shortcut between event LASTRX and task STOP
        LASTRX_STOP OFFSET(12) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ]
    ],

    pub INTEN [
        STOPPED OFFSET(1) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        ERROR OFFSET(9) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        SUSPENDED OFFSET(18) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        RXSTARTED OFFSET(19) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        TXSTARTED OFFSET(20) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        LASTRX OFFSET(23) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        LASTTX OFFSET(24) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ]
    ],

    /// Written '1' to clear
    pub ERRORSRC [
        /// Overrun error. A new byte was received before the previous byte
        /// got transferred into RXD buffer.
        OVERRUN OFFSET(0) NUMBITS(1) [
            NotReceived = 0,
            Received = 1
        ],
        /// NACK received after sending the address
        ANACK OFFSET(1) NUMBITS(1) [
            NotReceived = 0,
            Received = 1
        ],
        /// NACK received after sending a data byte
        DNACK OFFSET(2) NUMBITS(1) [
            NotReceived = 0,
            Received = 1
        ]
    ],

    pub ENABLE [
        ENABLE OFFSET(0) NUMBITS(4) [
            Disabled = 0,
            Enabled = 6
        ]
    ],

    pub FREQUENCY [
        FREQUENCY OFFSET(0) NUMBITS(32) [
            /// 100 kbps
            K100 = 0x01980000,
            /// 250 kbps
            K250 = 0x04000000,
            /// 400 kbps
            K400 = 0x06400000
        ]
    ],

    pub MAXCNT [
        MAXCNT OFFSET(0) NUMBITS(13) []
    ],

    pub ADDRESS [
        /// Address used in the TWI transfer
        ADDRESS OFFSET(0) NUMBITS(7) []
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
        assert_eq!(offset_of!(TwimRegisters, events_lasttx), 0x160);
        assert_eq!(offset_of!(TwimRegisters, errorsrc), 0x4C4);
        assert_eq!(offset_of!(TwimRegisters, psel_sda), 0x50C);
        assert_eq!(offset_of!(TwimRegisters, address), 0x588);
    }

    #[test]
    fn address_nack() {
        let err = LocalRegisterCopy::<u32, ERRORSRC::Register>::new(0b010);
        assert!(err.matches_all(ERRORSRC::ANACK::Received));
        assert!(err.matches_all(ERRORSRC::DNACK::NotReceived));
    }

    #[test]
    fn field_layout() {
        assert_eq!(ADDRESS::ADDRESS.mask_in_place(), 0x7F);
        assert_eq!(INTEN::LASTTX.mask_in_place(), 1 << 24);
        assert_eq!(FREQUENCY::FREQUENCY::K400.value, 0x0640_0000);
    }
}
