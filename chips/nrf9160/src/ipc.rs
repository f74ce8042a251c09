// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Interprocessor communication (IPC) between the application core and the
//! LTE modem.

use crate::common::{EVENT, PUBLISH, SUBSCRIBE, TASK, WORD};
use crate::memory_map;
use crate::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

pub const IPC_BASE: StaticRef<IpcRegisters> =
    unsafe { StaticRef::new(memory_map::IPC as *const IpcRegisters) };

pub const NUM_CHANNELS: usize = 8;
pub const NUM_GPMEM: usize = 2;

register_structs! {
    pub IpcRegisters {
        /// Trigger events on channel enabled in SEND_CNF[n]
        (0x000 => pub tasks_send: [WriteOnly<u32, TASK::Register>; NUM_CHANNELS]),
        (0x020 => _reserved0),
        (0x080 => pub subscribe_send: [ReadWrite<u32, SUBSCRIBE::Register>; NUM_CHANNELS]),
        (0x0A0 => _reserved1),
        /// Event received on one or more of the enabled channels in
        /// RECEIVE_CNF[n]
        (0x100 => pub events_receive: [ReadWrite<u32, EVENT::Register>; NUM_CHANNELS]),
        (0x120 => _reserved2),
        (0x180 => pub publish_receive: [ReadWrite<u32, PUBLISH::Register>; NUM_CHANNELS]),
        (0x1A0 => _reserved3),
        /// Enable or disable interrupt
        (0x300 => pub inten: ReadWrite<u32, INTEN::Register>),
        /// Enable interrupt
        (0x304 => pub intenset: ReadWrite<u32, INTEN::Register>),
        /// Disable interrupt
        (0x308 => pub intenclr: ReadWrite<u32, INTEN::Register>),
        /// Pending interrupts
        (0x30C => pub intpend: ReadOnly<u32, INTEN::Register>),
        (0x310 => _reserved4),
        /// Send event configuration for TASKS_SEND[n]
        (0x510 => pub send_cnf: [ReadWrite<u32, SEND_CNF::Register>; NUM_CHANNELS]),
        (0x530 => _reserved5),
        /// Receive event configuration for EVENTS_RECEIVE[n]
        (0x590 => pub receive_cnf: [ReadWrite<u32, RECEIVE_CNF::Register>; NUM_CHANNELS]),
        (0x5B0 => _reserved6),
        /// General purpose memory
        (0x610 => pub gpmem: [ReadWrite<u32, WORD::Register>; NUM_GPMEM]),
        (0x618 => @END),
    }
}

register_bitfields![u32,
    /// INTEN, INTENSET, INTENCLR and INTPEND
    pub INTEN [
        RECEIVE0 OFFSET(0) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        RECEIVE1 OFFSET(1) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        RECEIVE2 OFFSET(2) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        RECEIVE3 OFFSET(3) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        RECEIVE4 OFFSET(4) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        RECEIVE5 OFFSET(5) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        RECEIVE6 OFFSET(6) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        RECEIVE7 OFFSET(7) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ]
    ],

    /// SEND_CNF[n]: channels TASKS_SEND[n] signals on
    pub SEND_CNF [
        CHEN0 OFFSET(0) NUMBITS(1) [
            /// Disable broadcasting on channel
            Disable = 0,
            /// Enable broadcasting on channel
            Enable = 1
        ],
        CHEN1 OFFSET(1) NUMBITS(1) [
            Disable = 0,
            Enable = 1
        ],
        CHEN2 OFFSET(2) NUMBITS(1) [
            Disable = 0,
            Enable = 1
        ],
        CHEN3 OFFSET(3) NUMBITS(1) [
            Disable = 0,
            Enable = 1
        ],
        CHEN4 OFFSET(4) NUMBITS(1) [
            Disable = 0,
            Enable = 1
        ],
        CHEN5 OFFSET(5) NUMBITS(1) [
            Disable = 0,
            Enable = 1
        ],
        CHEN6 OFFSET(6) NUMBITS(1) [
            Disable = 0,
            Enable = 1
        ],
        CHEN7 OFFSET(7) NUMBITS(1) [
            Disable = 0,
            Enable = 1
        ]
    ],

    /// RECEIVE_CNF[n]: channels EVENTS_RECEIVE[n] listens on
    pub RECEIVE_CNF [
        CHEN0 OFFSET(0) NUMBITS(1) [
            /// Disable events
            Disable = 0,
            /// Enable events
            Enable = 1
        ],
        CHEN1 OFFSET(1) NUMBITS(1) [
            Disable = 0,
            Enable = 1
        ],
        CHEN2 OFFSET(2) NUMBITS(1) [
            Disable = 0,
            Enable = 1
        ],
        CHEN3 OFFSET(3) NUMBITS(1) [
            Disable = 0,
            Enable = 1
        ],
        CHEN4 OFFSET(4) NUMBITS(1) [
            Disable = 0,
            Enable = 1
        ],
        CHEN5 OFFSET(5) NUMBITS(1) [
            Disable = 0,
            Enable = 1
        ],
        CHEN6 OFFSET(6) NUMBITS(1) [
            Disable = 0,
            Enable = 1
        ],
        CHEN7 OFFSET(7) NUMBITS(1) [
            Disable = 0,
            Enable = 1
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
        assert_eq!(offset_of!(IpcRegisters, intpend), 0x30C);
        assert_eq!(offset_of!(IpcRegisters, send_cnf), 0x510);
        assert_eq!(offset_of!(IpcRegisters, receive_cnf), 0x590);
        assert_eq!(offset_of!(IpcRegisters, gpmem), 0x610);
    }

    #[test]
    fn channel_configuration() {
        let send = SEND_CNF::CHEN0::Enable + SEND_CNF::CHEN7::Enable;
        assert_eq!(send.value, 0x81);
        let receive = LocalRegisterCopy::<u32, RECEIVE_CNF::Register>::new(0x2);
        assert_eq!(
            receive.read_as_enum(RECEIVE_CNF::CHEN1),
            Some(RECEIVE_CNF::CHEN1::Value::Enable)
        );
        assert_eq!(
            receive.read_as_enum(RECEIVE_CNF::CHEN0),
            Some(RECEIVE_CNF::CHEN0::Value::Disable)
        );
    }
}
