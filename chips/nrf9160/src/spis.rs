// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Serial peripheral interface slave with EasyDMA (SPIS)
//!
//! The CPU and the SPI slave share the transmit and receive buffers through a
//! hardware semaphore: the CPU must acquire it with `TASKS_ACQUIRE` before
//! touching `RXD`/`TXD` and give it back with `TASKS_RELEASE`.

use crate::common::{EVENT, PSEL, PUBLISH, SUBSCRIBE, TASK, WORD};
use crate::memory_map;
use crate::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

pub const SPIS0_BASE: StaticRef<SpisRegisters> =
    unsafe { StaticRef::new(memory_map::SERIAL0 as *const SpisRegisters) };
pub const SPIS1_BASE: StaticRef<SpisRegisters> =
    unsafe { StaticRef::new(memory_map::SERIAL1 as *const SpisRegisters) };
pub const SPIS2_BASE: StaticRef<SpisRegisters> =
    unsafe { StaticRef::new(memory_map::SERIAL2 as *const SpisRegisters) };
pub const SPIS3_BASE: StaticRef<SpisRegisters> =
    unsafe { StaticRef::new(memory_map::SERIAL3 as *const SpisRegisters) };

register_structs! {
    pub SpisRegisters {
        (0x000 => _reserved0),
        /// Acquire SPI semaphore
        (0x024 => pub tasks_acquire: WriteOnly<u32, TASK::Register>),
        /// Release SPI semaphore, enabling the SPI slave to acquire it
        (0x028 => pub tasks_release: WriteOnly<u32, TASK::Register>),
        (0x02C => _reserved1),
        (0x0A4 => pub subscribe_acquire: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x0A8 => pub subscribe_release: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x0AC => _reserved2),
        /// Granted transaction completed
        (0x104 => pub events_end: ReadWrite<u32, EVENT::Register>),
        (0x108 => _reserved3),
        /// End of RXD buffer reached
        (0x110 => pub events_endrx: ReadWrite<u32, EVENT::Register>),
        (0x114 => _reserved4),
        /// Semaphore acquired
        (0x128 => pub events_acquired: ReadWrite<u32, EVENT::Register>),
        (0x12C => _reserved5),
        (0x184 => pub publish_end: ReadWrite<u32, PUBLISH::Register>),
        (0x188 => _reserved6),
        (0x190 => pub publish_endrx: ReadWrite<u32, PUBLISH::Register>),
        (0x194 => _reserved7),
        (0x1A8 => pub publish_acquired: ReadWrite<u32, PUBLISH::Register>),
        (0x1AC => _reserved8),
        /// Shortcuts between local events and tasks
        (0x200 => pub shorts: ReadWrite<u32, SHORTS::Register>),
        (0x204 => _reserved9),
        /// Enable interrupt
        (0x304 => pub intenset: ReadWrite<u32, INTEN::Register>),
        /// Disable interrupt
        (0x308 => pub intenclr: ReadWrite<u32, INTEN::Register>),
        (0x30C => _reserved10),
        /// Semaphore status register
        (0x400 => pub semstat: ReadOnly<u32, SEMSTAT::Register>),
        (0x404 => _reserved11),
        /// Status from last transaction
        (0x440 => pub status: ReadWrite<u32, STATUS::Register>),
        (0x444 => _reserved12),
        /// Enable SPI slave
        (0x500 => pub enable: ReadWrite<u32, ENABLE::Register>),
        (0x504 => _reserved13),
        /// Pin select for SCK
        (0x508 => pub psel_sck: ReadWrite<u32, PSEL::Register>),
        /// Pin select for MISO signal
        (0x50C => pub psel_miso: ReadWrite<u32, PSEL::Register>),
        /// Pin select for MOSI signal
        (0x510 => pub psel_mosi: ReadWrite<u32, PSEL::Register>),
        /// Pin select for CSN signal
        (0x514 => pub psel_csn: ReadWrite<u32, PSEL::Register>),
        (0x518 => _reserved14),
        /// RXD data pointer
        (0x534 => pub rxd_ptr: ReadWrite<u32, WORD::Register>),
        /// Maximum number of bytes in receive buffer
        (0x538 => pub rxd_maxcnt: ReadWrite<u32, MAXCNT::Register>),
        /// Number of bytes received in last granted transaction
        (0x53C => pub rxd_amount: ReadOnly<u32, MAXCNT::Register>),
        (0x540 => _reserved15),
        /// TXD data pointer
        (0x544 => pub txd_ptr: ReadWrite<u32, WORD::Register>),
        /// Maximum number of bytes in transmit buffer
        (0x548 => pub txd_maxcnt: ReadWrite<u32, MAXCNT::Register>),
        /// Number of bytes transmitted in last granted transaction
        (0x54C => pub txd_amount: ReadOnly<u32, MAXCNT::Register>),
        (0x550 => _reserved16),
        /// Configuration register
        (0x554 => pub config: ReadWrite<u32, CONFIG::Register>),
        (0x558 => _reserved17),
        /// Default character. Character clocked out in case of an ignored
        /// transaction.
        (0x55C => pub def: ReadWrite<u32, CHARACTER::Register>),
        (0x560 => _reserved18),
        /// Over-read character
        (0x5C0 => pub orc: ReadWrite<u32, CHARACTER::Register>),
        (0x5C4 => @END),
    }
}

register_bitfields![u32,
    pub SHORTS [
        /// Shortcut between event END and task ACQUIRE
        END_ACQUIRE OFFSET(2) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ]
    ],

    pub INTEN [
        END OFFSET(1) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        ENDRX OFFSET(4) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        ACQUIRED OFFSET(10) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ]
    ],

    pub SEMSTAT [
        /// Semaphore status
        SEMSTAT OFFSET(0) NUMBITS(2) [
            /// Semaphore is free
            Free = 0,
            /// Semaphore is assigned to CPU
            CPU = 1,
            /// Semaphore is assigned to SPI slave
            SPIS = 2,
            /// Semaphore is assigned to SPI but a handover to the CPU is
            /// pending
            CPUPending = 3
        ]
    ],

    /// Written '1' to clear
    pub STATUS [
        /// TX buffer over-read detected, and prevented
        OVERREAD OFFSET(0) NUMBITS(1) [
            NotPresent = 0,
            Present = 1
        ],
        /// RX buffer overflow detected, and prevented
        OVERFLOW OFFSET(1) NUMBITS(1) [
            NotPresent = 0,
            Present = 1
        ]
    ],

    pub ENABLE [
        ENABLE OFFSET(0) NUMBITS(4) [
            Disabled = 0,
            Enabled = 2
        ]
    ],

    pub MAXCNT [
        MAXCNT OFFSET(0) NUMBITS(13) []
    ],

    pub CONFIG [
        ORDER OFFSET(0) NUMBITS(1) [
            MsbFirst = 0,
            LsbFirst = 1
        ],
        CPHA OFFSET(1) NUMBITS(1) [
            Leading = 0,
            Trailing = 1
        ],
        CPOL OFFSET(2) NUMBITS(1) [
            ActiveHigh = 0,
            ActiveLow = 1
        ]
    ],

    /// DEF and ORC
    pub CHARACTER [
        CHARACTER OFFSET(0) NUMBITS(8) []
    ]
];

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::offset_of;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(SpisRegisters, tasks_acquire), 0x024);
        assert_eq!(offset_of!(SpisRegisters, semstat), 0x400);
        assert_eq!(offset_of!(SpisRegisters, psel_csn), 0x514);
        assert_eq!(offset_of!(SpisRegisters, def), 0x55C);
        assert_eq!(offset_of!(SpisRegisters, orc), 0x5C0);
    }

    #[test]
    fn semaphore_states() {
        let stat = LocalRegisterCopy::<u32, SEMSTAT::Register>::new(3);
        assert_eq!(
            stat.read_as_enum(SEMSTAT::SEMSTAT),
            Some(SEMSTAT::SEMSTAT::Value::CPUPending)
        );
        let status = LocalRegisterCopy::<u32, STATUS::Register>::new(0b10);
        assert!(status.is_set(STATUS::OVERFLOW));
        assert!(!status.is_set(STATUS::OVERREAD));
    }
}
