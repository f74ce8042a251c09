// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Key management unit (KMU)
//!
//! Pushes keys stored in the UICR key slots to CryptoCell without exposing
//! them to software. Shares its address space with NVMC; only the secure
//! view is used.

use crate::common::{EVENT, TASK};
use crate::memory_map;
use crate::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

pub const KMU_BASE: StaticRef<KmuRegisters> =
    unsafe { StaticRef::new(memory_map::KMU_S as *const KmuRegisters) };

register_structs! {
    pub KmuRegisters {
        /// Push a key slot over secure APB
        (0x000 => pub tasks_push_keyslot: WriteOnly<u32, TASK::Register>),
        (0x004 => _reserved0),
        /// Key slot successfully pushed over secure APB
        (0x100 => pub events_keyslot_pushed: ReadWrite<u32, EVENT::Register>),
        /// Key slot has been revoked and cannot be tasked for selection
        (0x104 => pub events_keyslot_revoked: ReadWrite<u32, EVENT::Register>),
        /// No key slot selected, no destination address defined, or error
        /// during push operation
        (0x108 => pub events_keyslot_error: ReadWrite<u32, EVENT::Register>),
        (0x10C => _reserved1),
        /// Enable or disable interrupt
        (0x300 => pub inten: ReadWrite<u32, INTEN::Register>),
        /// Enable interrupt
        (0x304 => pub intenset: ReadWrite<u32, INTEN::Register>),
        /// Disable interrupt
        (0x308 => pub intenclr: ReadWrite<u32, INTEN::Register>),
        /// Pending interrupts
        (0x30C => pub intpend: ReadOnly<u32, INTEN::Register>),
        (0x310 => _reserved2),
        /// Status bits for KMU operation
        (0x40C => pub status: ReadOnly<u32, STATUS::Register>),
        (0x410 => _reserved3),
        /// Select key slot ID to be read over AHB or pushed over secure APB
        /// when TASKS_PUSH_KEYSLOT is started
        (0x500 => pub selectkeyslot: ReadWrite<u32, SELECTKEYSLOT::Register>),
        (0x504 => @END),
    }
}

register_bitfields![u32,
    pub INTEN [
        KEYSLOT_PUSHED OFFSET(0) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        KEYSLOT_REVOKED OFFSET(1) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        KEYSLOT_ERROR OFFSET(2) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ]
    ],

    pub STATUS [
        /// Key slot ID successfully selected by the KMU
        SELECTED OFFSET(0) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        /// Violation status
        BLOCKED OFFSET(1) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ]
    ],

    pub SELECTKEYSLOT [
        /// Select key slot ID to be read over AHB, or pushed over secure APB.
        /// ID 0 deselects all key slots; slots are numbered from 1.
        ID OFFSET(0) NUMBITS(8) []
    ]
];

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::offset_of;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(KmuRegisters, events_keyslot_error), 0x108);
        assert_eq!(offset_of!(KmuRegisters, status), 0x40C);
        assert_eq!(offset_of!(KmuRegisters, selectkeyslot), 0x500);
    }
}
