// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Non-volatile memory controller (NVMC)

use crate::common::WORD;
use crate::memory_map;
use crate::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

pub const NVMC_BASE: StaticRef<NvmcRegisters> =
    unsafe { StaticRef::new(memory_map::NVMC as *const NvmcRegisters) };

/// Size of a flash page in bytes.
pub const PAGE_SIZE: usize = 4096;

register_structs! {
    pub NvmcRegisters {
        (0x000 => _reserved0),
        /// Ready flag
        (0x400 => pub ready: ReadOnly<u32, READY::Register>),
        (0x404 => _reserved1),
        /// Ready flag
        (0x408 => pub readynext: ReadOnly<u32, READYNEXT::Register>),
        (0x40C => _reserved2),
        /// Configuration register
        (0x504 => pub config: ReadWrite<u32, CONFIG::Register>),
        (0x508 => _reserved3),
        /// Register for erasing all non-volatile user memory
        (0x50C => pub eraseall: WriteOnly<u32, ERASEALL::Register>),
        (0x510 => _reserved4),
        /// Register for partial erase configuration
        (0x51C => pub erasepagepartialcfg: ReadWrite<u32, ERASEPAGEPARTIALCFG::Register>),
        (0x520 => _reserved5),
        /// I-code cache configuration register
        (0x540 => pub icachecnf: ReadWrite<u32, ICACHECNF::Register>),
        (0x544 => _reserved6),
        /// I-code cache hit counter
        (0x548 => pub ihit: ReadWrite<u32, WORD::Register>),
        /// I-code cache miss counter
        (0x54C => pub imiss: ReadWrite<u32, WORD::Register>),
        (0x550 => _reserved7),
        /// Unsecure configuration register
        (0x584 => pub configns: ReadWrite<u32, CONFIGNS::Register>),
        /// Non-secure APPROTECT enable register
        (0x588 => pub writeuicrns: WriteOnly<u32, WRITEUICRNS::Register>),
        (0x58C => @END),
    }
}

register_bitfields![u32,
    pub READY [
        /// NVMC is ready or busy
        READY OFFSET(0) NUMBITS(1) [
            /// NVMC is busy (on-going write or erase operation)
            Busy = 0,
            /// NVMC is ready
            Ready = 1
        ]
    ],

    pub READYNEXT [
        /// NVMC can accept a new write operation
        READYNEXT OFFSET(0) NUMBITS(1) [
            Busy = 0,
            Ready = 1
        ]
    ],

    pub CONFIG [
        /// Program memory access mode. It is strongly recommended to only
        /// activate erase and write modes when they are actively used.
        WEN OFFSET(0) NUMBITS(3) [
            /// Read only access
            Ren = 0,
            /// Write enabled
            Wen = 1,
            /// Erase enabled
            Een = 2,
            /// Partial erase enabled
            PEen = 4
        ]
    ],

    pub ERASEALL [
        /// Erase all non-volatile memory including UICR registers. The
        /// erase must be enabled using CONFIG.WEN before the non-volatile
        /// memory can be erased.
        ERASEALL OFFSET(0) NUMBITS(1) [
            NoOperation = 0,
            Erase = 1
        ]
    ],

    pub ERASEPAGEPARTIALCFG [
        /// Duration of the partial erase in milliseconds. The user must
        /// ensure that the total erase time is long enough for a complete
        /// erase of the flash page.
        DURATION OFFSET(0) NUMBITS(7) []
    ],

    pub ICACHECNF [
        /// Cache enable
        CACHEEN OFFSET(0) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        /// Cache profiling enable
        CACHEPROFEN OFFSET(8) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ]
    ],

    pub CONFIGNS [
        /// Program memory access mode for non-secure accesses
        WEN OFFSET(0) NUMBITS(2) [
            Ren = 0,
            Wen = 1,
            Een = 2
        ]
    ],

    pub WRITEUICRNS [
        /// Allow non-secure code to set APPROTECT
        SET OFFSET(0) NUMBITS(1) [
            Set = 1
        ],
        /// Key to write in order to validate the write operation
        KEY OFFSET(4) NUMBITS(28) [
            Keyvalid = 0xAFBE5A7
        ]
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
        assert_eq!(offset_of!(NvmcRegisters, ready), 0x400);
        assert_eq!(offset_of!(NvmcRegisters, config), 0x504);
        assert_eq!(offset_of!(NvmcRegisters, erasepagepartialcfg), 0x51C);
        assert_eq!(offset_of!(NvmcRegisters, icachecnf), 0x540);
        assert_eq!(offset_of!(NvmcRegisters, writeuicrns), 0x588);
    }

    #[test]
    fn write_uicr_ns_key() {
        assert_eq!(WRITEUICRNS::KEY.mask_in_place(), 0xFFFF_FFF0);
        let word = WRITEUICRNS::SET::Set + WRITEUICRNS::KEY::Keyvalid;
        assert_eq!(word.value, 0xAFBE_5A71);
    }

    #[test]
    fn partial_erase_mode() {
        let config = LocalRegisterCopy::<u32, CONFIG::Register>::new(4);
        assert!(config.matches_all(CONFIG::WEN::PEen));
        assert_eq!(ERASEPAGEPARTIALCFG::DURATION.mask_in_place(), 0x7F);
        assert_eq!(ERASEPAGEPARTIALCFG::DURATION.val(10).value, 0x0A);
    }
}
