// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! User Information Configuration Registers (UICR)
//!
//! Non-volatile configuration read by the chip at boot: debug access port
//! protection, the HFXO source and the KMU key slots. UICR is written
//! through the NVMC like ordinary flash; this module only reads it.

use crate::memory_map;
use crate::StaticRef;
use tock_registers::interfaces::Readable;
use tock_registers::registers::ReadOnly;
use tock_registers::{register_bitfields, register_structs, LocalRegisterCopy};

pub const UICR_BASE: StaticRef<UicrRegisters> =
    unsafe { StaticRef::new(memory_map::UICR_S as *const UicrRegisters) };

pub const NUM_OTP: usize = 190;
pub const NUM_KEYSLOTS: usize = 128;

register_structs! {
    pub KeyslotConfig {
        /// Destination address where content of the key value registers
        /// (KEYSLOT.KEYn.VALUE[0-3]) will be pushed by KMU
        (0x0 => pub dest: ReadOnly<u32, WORD::Register>),
        /// Define permissions for the key slot with ID=n+1
        (0x4 => pub perm: ReadOnly<u32, KEYSLOT_PERM::Register>),
        (0x8 => @END),
    },

    pub KeyslotKey {
        /// Define bits [31+o*32:0+o*32] of value assigned to KMU key slot
        /// ID=n+1
        (0x0 => pub value: [ReadOnly<u32, WORD::Register>; 4]),
        (0x10 => @END),
    },

    pub UicrRegisters {
        /// Access port protection
        (0x000 => pub approtect: ReadOnly<u32, PALL::Register>),
        (0x004 => _reserved0),
        /// Oscillator control
        (0x014 => pub xosc32m: ReadOnly<u32, XOSC32M::Register>),
        (0x018 => _reserved1),
        /// HFXO clock source selection
        (0x01C => pub hfxosrc: ReadOnly<u32, HFXOSRC::Register>),
        /// HFXO startup counter
        (0x020 => pub hfxocnt: ReadOnly<u32, HFXOCNT::Register>),
        (0x024 => _reserved2),
        /// Secure access port protection
        (0x02C => pub secureapprotect: ReadOnly<u32, PALL::Register>),
        /// Erase protection
        (0x030 => pub eraseprotect: ReadOnly<u32, PALL::Register>),
        (0x034 => _reserved3),
        /// One time programmable memory
        (0x108 => pub otp: [ReadOnly<u32, WORD::Register>; NUM_OTP]),
        (0x400 => pub keyslot_config: [KeyslotConfig; NUM_KEYSLOTS]),
        (0x800 => pub keyslot_key: [KeyslotKey; NUM_KEYSLOTS]),
        (0x1000 => @END),
    }
}

register_bitfields![u32,
    pub WORD [
        VALUE OFFSET(0) NUMBITS(32) []
    ],

    /// APPROTECT, SECUREAPPROTECT and ERASEPROTECT
    pub PALL [
        PALL OFFSET(0) NUMBITS(32) [
            /// Protected
            Protected = 0x00000000,
            /// Unprotected
            Unprotected = 0xFFFFFFFF
        ]
    ],

    pub XOSC32M [
        /// Pierce current DAC control signals
        CTRIM OFFSET(0) NUMBITS(6) []
    ],

    pub HFXOSRC [
        /// HFXO clock source selection
        HFXOSRC OFFSET(0) NUMBITS(1) [
            /// 32 MHz temperature compensated crystal oscillator (TCXO)
            TCXO = 0,
            /// 32 MHz crystal oscillator
            XTAL = 1
        ]
    ],

    pub HFXOCNT [
        /// HFXO startup counter. Total debounce time = HFXOCNT*64 us +
        /// 0.5 us
        HFXOCNT OFFSET(0) NUMBITS(8) [
            /// Min debounce time = (0*64 us + 0.5 us)
            MinDebounceTime = 0,
            /// Max debounce time = (255*64 us + 0.5 us)
            MaxDebounceTime = 255
        ]
    ],

    pub KEYSLOT_PERM [
        /// Write permission for key slot
        WRITE OFFSET(0) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        /// Read permission for key slot
        READ OFFSET(1) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        /// Push permission for key slot
        PUSH OFFSET(2) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        /// Revocation state for the key slot
        STATE OFFSET(16) NUMBITS(1) [
            /// Key value registers can no longer be read or pushed
            Revoked = 0,
            /// Key value registers are readable (if enabled) and can be
            /// pushed (if enabled)
            Active = 1
        ]
    ]
];

/// Source of the 32 MHz high frequency clock.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HfxoSource {
    Tcxo,
    Xtal,
}

pub struct Uicr {
    registers: StaticRef<UicrRegisters>,
}

impl Uicr {
    pub const fn new() -> Uicr {
        Uicr {
            registers: UICR_BASE,
        }
    }

    pub fn is_ap_protect_enabled(&self) -> bool {
        is_protected(self.registers.approtect.get())
    }

    pub fn is_secure_ap_protect_enabled(&self) -> bool {
        is_protected(self.registers.secureapprotect.get())
    }

    pub fn erase_protect_enabled(&self) -> bool {
        is_protected(self.registers.eraseprotect.get())
    }

    pub fn hfxo_source(&self) -> HfxoSource {
        hfxo_source(self.registers.hfxosrc.get())
    }

    /// HFXO debounce time in HFXOCNT units of 64 us.
    pub fn hfxo_debounce(&self) -> u8 {
        self.registers.hfxocnt.read(HFXOCNT::HFXOCNT) as u8
    }
}

/// Anything other than the erased value counts as protected.
fn is_protected(raw: u32) -> bool {
    !LocalRegisterCopy::<u32, PALL::Register>::new(raw).matches_all(PALL::PALL::Unprotected)
}

fn hfxo_source(raw: u32) -> HfxoSource {
    let reg = LocalRegisterCopy::<u32, HFXOSRC::Register>::new(raw);
    match reg.read_as_enum(HFXOSRC::HFXOSRC) {
        Some(HFXOSRC::HFXOSRC::Value::TCXO) => HfxoSource::Tcxo,
        _ => HfxoSource::Xtal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};

    #[test]
    fn register_offsets() {
        assert_eq!(size_of::<KeyslotConfig>(), 8);
        assert_eq!(size_of::<KeyslotKey>(), 0x10);
        assert_eq!(offset_of!(UicrRegisters, hfxosrc), 0x01C);
        assert_eq!(offset_of!(UicrRegisters, eraseprotect), 0x030);
        assert_eq!(offset_of!(UicrRegisters, otp), 0x108);
        assert_eq!(offset_of!(UicrRegisters, keyslot_config), 0x400);
        assert_eq!(offset_of!(UicrRegisters, keyslot_key), 0x800);
    }

    #[test]
    fn protection_decoding() {
        assert!(!is_protected(0xFFFF_FFFF));
        assert!(is_protected(0x0000_0000));
        assert!(is_protected(0x0000_00FF));
    }

    #[test]
    fn hfxo_source_decoding() {
        assert_eq!(hfxo_source(0), HfxoSource::Tcxo);
        assert_eq!(hfxo_source(1), HfxoSource::Xtal);
        // Erased UICR reads as all ones.
        assert_eq!(hfxo_source(0xFFFF_FFFF), HfxoSource::Xtal);
    }

    #[test]
    fn keyslot_permissions() {
        let perm = LocalRegisterCopy::<u32, KEYSLOT_PERM::Register>::new(0x0001_0004);
        assert!(perm.matches_all(KEYSLOT_PERM::PUSH::Enabled + KEYSLOT_PERM::STATE::Active));
        assert!(!perm.is_set(KEYSLOT_PERM::READ));
    }
}
