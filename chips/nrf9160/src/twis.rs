// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! I2C compatible two-wire interface slave with EasyDMA (TWIS)

use crate::common::{EVENT, LIST, PSEL, PUBLISH, SUBSCRIBE, TASK, WORD};
use crate::memory_map;
use crate::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

pub const TWIS0_BASE: StaticRef<TwisRegisters> =
    unsafe { StaticRef::new(memory_map::SERIAL0 as *const TwisRegisters) };
pub const TWIS1_BASE: StaticRef<TwisRegisters> =
    unsafe { StaticRef::new(memory_map::SERIAL1 as *const TwisRegisters) };
pub const TWIS2_BASE: StaticRef<TwisRegisters> =
    unsafe { StaticRef::new(memory_map::SERIAL2 as *const TwisRegisters) };
pub const TWIS3_BASE: StaticRef<TwisRegisters> =
    unsafe { StaticRef::new(memory_map::SERIAL3 as *const TwisRegisters) };

/// Number of slave addresses the peripheral can respond to.
pub const NUM_ADDRESSES: usize = 2;

register_structs! {
    pub TwisRegisters {
        (0x000 => _reserved0),
        /// Stop TWI transaction
        (0x014 => pub tasks_stop: WriteOnly<u32, TASK::Register>),
        (0x018 => _reserved1),
        /// Suspend TWI transaction
        (0x01C => pub tasks_suspend: WriteOnly<u32, TASK::Register>),
        /// Resume TWI transaction
        (0x020 => pub tasks_resume: WriteOnly<u32, TASK::Register>),
        (0x024 => _reserved2),
        /// Prepare the TWI slave to respond to a write command
        (0x030 => pub tasks_preparerx: WriteOnly<u32, TASK::Register>),
        /// Prepare the TWI slave to respond to a read command
        (0x034 => pub tasks_preparetx: WriteOnly<u32, TASK::Register>),
        (0x038 => _reserved3),
        (0x094 => pub subscribe_stop: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x098 => _reserved4),
        (0x09C => pub subscribe_suspend: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x0A0 => pub subscribe_resume: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x0A4 => _reserved5),
        (0x0B0 => pub subscribe_preparerx: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x0B4 => pub subscribe_preparetx: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x0B8 => _reserved6),
        /// TWI stopped
        (0x104 => pub events_stopped: ReadWrite<u32, EVENT::Register>),
        (0x108 => _reserved7),
        /// TWI error
        (0x124 => pub events_error: ReadWrite<u32, EVENT::Register>),
        (0x128 => _reserved8),
        /// Receive sequence started
        (0x14C => pub events_rxstarted: ReadWrite<u32, EVENT::Register>),
        /// Transmit sequence started
        (0x150 => pub events_txstarted: ReadWrite<u32, EVENT::Register>),
        (0x154 => _reserved9),
        /// Write command received
        (0x164 => pub events_write: ReadWrite<u32, EVENT::Register>),
        /// Read command received
        (0x168 => pub events_read: ReadWrite<u32, EVENT::Register>),
        (0x16C => _reserved10),
        (0x184 => pub publish_stopped: ReadWrite<u32, PUBLISH::Register>),
        (0x188 => _reserved11),
        (0x1A4 => pub publish_error: ReadWrite<u32, PUBLISH::Register>),
        (0x1A8 => _reserved12),
        (0x1CC => pub publish_rxstarted: ReadWrite<u32, PUBLISH::Register>),
        (0x1D0 => pub publish_txstarted: ReadWrite<u32, PUBLISH::Register>),
        (0x1D4 => _reserved13),
        (0x1E4 => pub publish_write: ReadWrite<u32, PUBLISH::Register>),
        (0x1E8 => pub publish_read: ReadWrite<u32, PUBLISH::Register>),
        (0x1EC => _reserved14),
        /// Shortcuts between local events and tasks
        (0x200 => pub shorts: ReadWrite<u32, SHORTS::Register>),
        (0x204 => _reserved15),
        /// Enable or disable interrupt
        (0x300 => pub inten: ReadWrite<u32, INTEN::Register>),
        /// Enable interrupt
        (0x304 => pub intenset: ReadWrite<u32, INTEN::Register>),
        /// Disable interrupt
        (0x308 => pub intenclr: ReadWrite<u32, INTEN::Register>),
        (0x30C => _reserved16),
        /// Error source
        (0x4D0 => pub errorsrc: ReadWrite<u32, ERRORSRC::Register>),
        /// Status register indicating which address had a match
        (0x4D4 => pub match_: ReadOnly<u32, MATCH::Register>),
        (0x4D8 => _reserved17),
        /// Enable TWIS
        (0x500 => pub enable: ReadWrite<u32, ENABLE::Register>),
        (0x504 => _reserved18),
        /// Pin select for SCL signal
        (0x508 => pub psel_scl: ReadWrite<u32, PSEL::Register>),
        /// Pin select for SDA signal
        (0x50C => pub psel_sda: ReadWrite<u32, PSEL::Register>),
        (0x510 => _reserved19),
        /// RXD Data pointer
        (0x534 => pub rxd_ptr: ReadWrite<u32, WORD::Register>),
        /// Maximum number of bytes in RXD buffer
        (0x538 => pub rxd_maxcnt: ReadWrite<u32, MAXCNT::Register>),
        /// Number of bytes transferred in the last RXD transaction
        (0x53C => pub rxd_amount: ReadOnly<u32, MAXCNT::Register>),
        /// EasyDMA list type
        (0x540 => pub rxd_list: ReadWrite<u32, LIST::Register>),
        /// TXD Data pointer
        (0x544 => pub txd_ptr: ReadWrite<u32, WORD::Register>),
        /// Maximum number of bytes in TXD buffer
        (0x548 => pub txd_maxcnt: ReadWrite<u32, MAXCNT::Register>),
        /// Number of bytes transferred in the last TXD transaction
        (0x54C => pub txd_amount: ReadOnly<u32, MAXCNT::Register>),
        /// EasyDMA list type
        (0x550 => pub txd_list: ReadWrite<u32, LIST::Register>),
        (0x554 => _reserved20),
        /// TWI slave address n
        (0x588 => pub address: [ReadWrite<u32, ADDRESS::Register>; NUM_ADDRESSES]),
        (0x590 => _reserved21),
        /// Configuration register for the address match mechanism
        (0x594 => pub config: ReadWrite<u32, CONFIG::Register>),
        (0x598 => _reserved22),
        /// Over-read character. Character sent out in case of an over-read
        /// of the transmit buffer.
        (0x5C0 => pub orc: ReadWrite<u32, ORC::Register>),
        (0x5C4 => @END),
    }
}

register_bitfields![u32,
    pub SHORTS [
        /// Shortcut between event WRITE and task SUSPEND
        WRITE_SUSPEND OFFSET(13) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        /// Shortcut between event READ and task SUSPEND
        READ_SUSPEND OFFSET(14) NUMBITS(1) [
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
        RXSTARTED OFFSET(19) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        TXSTARTED OFFSET(20) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        WRITE OFFSET(25) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        READ OFFSET(26) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ]
    ],

    pub ERRORSRC [
        /// RX buffer overflow detected, and prevented
        OVERFLOW OFFSET(0) NUMBITS(1) [
            NotDetected = 0,
            Detected = 1
        ],
        /// NACK sent after receiving a data byte
        DNACK OFFSET(2) NUMBITS(1) [
            NotReceived = 0,
            Received = 1
        ],
        /// TX buffer over-read detected, and prevented
        OVERREAD OFFSET(3) NUMBITS(1) [
            NotDetected = 0,
            Detected = 1
        ]
    ],

    pub MATCH [
        /// Which of the addresses in ADDRESS matched the incoming address
        MATCH OFFSET(0) NUMBITS(1) []
    ],

    pub ENABLE [
        ENABLE OFFSET(0) NUMBITS(4) [
            Disabled = 0,
            Enabled = 9
        ]
    ],

    pub MAXCNT [
        MAXCNT OFFSET(0) NUMBITS(13) []
    ],

    pub ADDRESS [
        ADDRESS OFFSET(0) NUMBITS(7) []
    ],

    pub CONFIG [
        /// Enable or disable address matching on ADDRESS[0]
        ADDRESS0 OFFSET(0) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        /// Enable or disable address matching on ADDRESS[1]
        ADDRESS1 OFFSET(1) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ]
    ],

    pub ORC [
        ORC OFFSET(0) NUMBITS(8) []
    ]
];

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::offset_of;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(TwisRegisters, tasks_preparetx), 0x034);
        assert_eq!(offset_of!(TwisRegisters, events_read), 0x168);
        assert_eq!(offset_of!(TwisRegisters, match_), 0x4D4);
        assert_eq!(offset_of!(TwisRegisters, address), 0x588);
        assert_eq!(offset_of!(TwisRegisters, config), 0x594);
    }

    #[test]
    fn address_config() {
        let cfg = CONFIG::ADDRESS0::Enabled + CONFIG::ADDRESS1::Enabled;
        assert_eq!(cfg.value, 0b11);
        assert_eq!(ENABLE::ENABLE::Enabled.value, 9);
    }
}
