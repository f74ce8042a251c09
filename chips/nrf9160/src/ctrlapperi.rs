// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Control access port (CTRL-AP) peripheral side
//!
//! A mailbox for exchanging words with a debugger through the CTRL-AP, and
//! the ERASEPROTECT lock that blocks ERASEALL requests from the debugger.
//! Only mapped in the secure region.

use crate::common::WORD;
use crate::memory_map;
use crate::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

pub const CTRLAPPERI_BASE: StaticRef<CtrlApPeriRegisters> =
    unsafe { StaticRef::new(memory_map::CTRL_AP_PERI_S as *const CtrlApPeriRegisters) };

register_structs! {
    pub CtrlApPeriRegisters {
        (0x000 => _reserved0),
        /// Data sent from the debugger to the CPU
        (0x400 => pub mailbox_rxdata: ReadOnly<u32, WORD::Register>),
        /// Status to indicate if data sent from the debugger to the CPU
        /// has been read
        (0x404 => pub mailbox_rxstatus: ReadOnly<u32, STATUS::Register>),
        (0x408 => _reserved1),
        /// Data sent from the CPU to the debugger
        (0x480 => pub mailbox_txdata: ReadWrite<u32, WORD::Register>),
        /// Status to indicate if data sent from the CPU to the debugger has
        /// been read
        (0x484 => pub mailbox_txstatus: ReadOnly<u32, STATUS::Register>),
        (0x488 => _reserved2),
        /// Lock register ERASEPROTECT.DISABLE. Once locked, the register
        /// remains locked until the next reset.
        (0x500 => pub eraseprotect_lock: ReadWrite<u32, LOCK::Register>),
        /// Disable ERASEPROTECT and perform ERASEALL
        (0x504 => pub eraseprotect_disable: ReadWrite<u32, DISABLE::Register>),
        (0x508 => @END),
    }
}

register_bitfields![u32,
    /// MAILBOX.RXSTATUS and MAILBOX.TXSTATUS
    pub STATUS [
        STATUS OFFSET(0) NUMBITS(1) [
            /// No data pending in register RXDATA (TXDATA)
            NoDataPending = 0,
            /// Data pending in register RXDATA (TXDATA)
            DataPending = 1
        ]
    ],

    pub LOCK [
        /// Lock ERASEPROTECT.DISABLE register from being written until next
        /// reset
        LOCK OFFSET(0) NUMBITS(1) [
            /// Register ERASEPROTECT.DISABLE is writeable
            Unlocked = 0,
            /// Register ERASEPROTECT.DISABLE is read-only
            Locked = 1
        ]
    ],

    pub DISABLE [
        /// The value of this register is compared to the value written to
        /// the CTRL-AP ERASEPROTECT.DISABLE register. A match disables
        /// ERASEPROTECT and starts ERASEALL.
        KEY OFFSET(0) NUMBITS(32) []
    ]
];

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::offset_of;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(CtrlApPeriRegisters, mailbox_rxdata), 0x400);
        assert_eq!(offset_of!(CtrlApPeriRegisters, mailbox_txstatus), 0x484);
        assert_eq!(offset_of!(CtrlApPeriRegisters, eraseprotect_lock), 0x500);
        assert_eq!(offset_of!(CtrlApPeriRegisters, eraseprotect_disable), 0x504);
        assert_eq!(CTRLAPPERI_BASE.address(), 0x5000_6000);
    }

    #[test]
    fn mailbox_status() {
        let status = LocalRegisterCopy::<u32, STATUS::Register>::new(1);
        assert_eq!(
            status.read_as_enum(STATUS::STATUS),
            Some(STATUS::STATUS::Value::DataPending)
        );
        assert_eq!(LOCK::LOCK::Locked.value, 1);
    }
}
