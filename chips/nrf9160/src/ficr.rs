// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Factory Information Configuration Registers (FICR)
//!
//! Factory information configuration registers (FICR) are pre-programmed in
//! factory and cannot be erased by the user. These registers contain
//! chip-specific information and configuration. On the nRF9160 the FICR is
//! only readable from the secure domain.

use core::fmt;

use crate::memory_map;
use crate::StaticRef;
use tock_registers::interfaces::Readable;
use tock_registers::registers::ReadOnly;
use tock_registers::{register_bitfields, register_structs};

pub const FICR_BASE: StaticRef<FicrRegisters> =
    unsafe { StaticRef::new(memory_map::FICR_S as *const FicrRegisters) };

pub const NUM_TRIMCNF: usize = 256;

register_structs! {
    /// Factory trim: a register address and the value written to it at
    /// boot
    pub TrimCnf {
        (0x0 => pub addr: ReadOnly<u32, WORD32::Register>),
        (0x4 => pub data: ReadOnly<u32, WORD32::Register>),
        (0x8 => @END),
    },

    pub FicrRegisters {
        (0x000 => _reserved0),
        /// Configuration identifier
        (0x200 => pub info_configid: ReadOnly<u32, CONFIGID::Register>),
        /// Device identifier
        (0x204 => pub info_deviceid: [ReadOnly<u32, WORD32::Register>; 2]),
        /// Part code
        (0x20C => pub info_part: ReadOnly<u32, PART::Register>),
        /// Part Variant, Hardware version and Production configuration
        (0x210 => pub info_variant: ReadOnly<u32, VARIANT::Register>),
        /// Package option
        (0x214 => pub info_package: ReadOnly<u32, PACKAGE::Register>),
        /// RAM variant
        (0x218 => pub info_ram: ReadOnly<u32, RAM::Register>),
        /// Flash variant
        (0x21C => pub info_flash: ReadOnly<u32, FLASH::Register>),
        /// Code memory page size in bytes
        (0x220 => pub info_codepagesize: ReadOnly<u32, CODEPAGESIZE::Register>),
        /// Code memory size
        (0x224 => pub info_codesize: ReadOnly<u32, CODESIZE::Register>),
        /// Device type
        (0x228 => pub info_devicetype: ReadOnly<u32, DEVICETYPE::Register>),
        (0x22C => _reserved1),
        (0x300 => pub trimcnf: [TrimCnf; NUM_TRIMCNF]),
        (0xB00 => _reserved2),
        /// Amount of bytes for the required entropy bits
        (0xC00 => pub trng90b_bytes: ReadOnly<u32, WORD32::Register>),
        /// Repetition counter cutoff
        (0xC04 => pub trng90b_rccutoff: ReadOnly<u32, WORD32::Register>),
        /// Adaptive proportion cutoff
        (0xC08 => pub trng90b_apcutoff: ReadOnly<u32, WORD32::Register>),
        /// Amount of bytes for the startup tests
        (0xC0C => pub trng90b_startup: ReadOnly<u32, WORD32::Register>),
        /// Sample count for ring oscillator 1
        (0xC10 => pub trng90b_rosc1: ReadOnly<u32, WORD32::Register>),
        /// Sample count for ring oscillator 2
        (0xC14 => pub trng90b_rosc2: ReadOnly<u32, WORD32::Register>),
        /// Sample count for ring oscillator 3
        (0xC18 => pub trng90b_rosc3: ReadOnly<u32, WORD32::Register>),
        /// Sample count for ring oscillator 4
        (0xC1C => pub trng90b_rosc4: ReadOnly<u32, WORD32::Register>),
        (0xC20 => @END),
    }
}

register_bitfields![u32,
    pub WORD32 [
        VALUE OFFSET(0) NUMBITS(32) []
    ],

    pub CONFIGID [
        /// Identification number for the HW
        HWID OFFSET(0) NUMBITS(16) []
    ],

    pub PART [
        /// Part code
        PART OFFSET(0) NUMBITS(32) [
            /// nRF9120
            N9120 = 0x9120,
            /// nRF9160
            N9160 = 0x9160,
            Unspecified = 0xFFFFFFFF
        ]
    ],

    pub VARIANT [
        /// Part Variant, Hardware version and Production configuration,
        /// encoded as ASCII
        VARIANT OFFSET(0) NUMBITS(32) [
            /// AAAA
            AAAA = 0x41414141,
            /// AABA
            AABA = 0x41414241,
            /// AAB0
            AAB0 = 0x41414230,
            Unspecified = 0xFFFFFFFF
        ]
    ],

    pub PACKAGE [
        /// Package option. The nRF9160 SiP documents no package code other
        /// than the erased value.
        PACKAGE OFFSET(0) NUMBITS(32) [
            Unspecified = 0xFFFFFFFF
        ]
    ],

    pub RAM [
        /// RAM variant
        RAM OFFSET(0) NUMBITS(32) [
            /// 256 kByte RAM
            K256 = 0x100,
            Unspecified = 0xFFFFFFFF
        ]
    ],

    pub FLASH [
        /// Flash variant
        FLASH OFFSET(0) NUMBITS(32) [
            /// 1 MByte FLASH
            K1024 = 0x400,
            Unspecified = 0xFFFFFFFF
        ]
    ],

    pub CODEPAGESIZE [
        CODEPAGESIZE OFFSET(0) NUMBITS(32) [
            /// 4 kByte
            K4096 = 4096
        ]
    ],

    pub CODESIZE [
        /// Code memory size in number of pages
        CODESIZE OFFSET(0) NUMBITS(32) [
            /// 256 pages
            P256 = 256
        ]
    ],

    pub DEVICETYPE [
        DEVICETYPE OFFSET(0) NUMBITS(32) [
            /// Device is a physical DIE
            Die = 0x00000000,
            /// Device is an FPGA
            FPGA = 0xFFFFFFFF
        ]
    ]
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Part {
    N9120,
    N9160,
    Unspecified,
}

impl From<u32> for Part {
    fn from(raw: u32) -> Part {
        match raw {
            0x9120 => Part::N9120,
            0x9160 => Part::N9160,
            0xFFFF_FFFF => Part::Unspecified,
            other => {
                log::warn!("ficr: unknown part code {:#x}", other);
                Part::Unspecified
            }
        }
    }
}

/// Variant describes part variant, hardware version, and production
/// configuration.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Variant {
    AAAA,
    AABA,
    AAB0,
    Unspecified,
}

impl From<u32> for Variant {
    fn from(raw: u32) -> Variant {
        match raw {
            0x41414141 => Variant::AAAA,
            0x41414241 => Variant::AABA,
            0x41414230 => Variant::AAB0,
            _ => Variant::Unspecified,
        }
    }
}

/// Package option. Codes other than [`PACKAGE::PACKAGE::Unspecified`] are
/// kept as read.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Package {
    Code(u32),
    Unspecified,
}

impl From<u32> for Package {
    fn from(raw: u32) -> Package {
        match raw {
            0xFFFF_FFFF => Package::Unspecified,
            code => Package::Code(code),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Ram {
    K256,
    Unspecified,
}

impl From<u32> for Ram {
    fn from(raw: u32) -> Ram {
        match raw {
            0x100 => Ram::K256,
            _ => Ram::Unspecified,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Flash {
    K1024,
    Unspecified,
}

impl From<u32> for Flash {
    fn from(raw: u32) -> Flash {
        match raw {
            0x400 => Flash::K1024,
            _ => Flash::Unspecified,
        }
    }
}

pub struct Ficr {
    registers: StaticRef<FicrRegisters>,
}

impl Ficr {
    pub const fn new() -> Ficr {
        Ficr {
            registers: FICR_BASE,
        }
    }

    pub fn part(&self) -> Part {
        Part::from(self.registers.info_part.get())
    }

    pub fn variant(&self) -> Variant {
        Variant::from(self.registers.info_variant.get())
    }

    pub fn package(&self) -> Package {
        Package::from(self.registers.info_package.get())
    }

    pub fn ram(&self) -> Ram {
        Ram::from(self.registers.info_ram.get())
    }

    pub fn flash(&self) -> Flash {
        Flash::from(self.registers.info_flash.get())
    }

    /// 64-bit unique device identifier, least significant byte first.
    pub fn id(&self) -> [u8; 8] {
        device_id(
            self.registers.info_deviceid[0].get(),
            self.registers.info_deviceid[1].get(),
        )
    }

    /// Flash page size in bytes.
    pub fn codepage_size(&self) -> u32 {
        self.registers.info_codepagesize.get()
    }

    /// Flash size in pages.
    pub fn code_size(&self) -> u32 {
        self.registers.info_codesize.get()
    }

    /// Decode the INFO registers in one pass.
    pub fn info(&self) -> FicrInfo {
        FicrInfo {
            part: self.part(),
            variant: self.variant(),
            package: self.package(),
            ram: self.ram(),
            flash: self.flash(),
        }
    }

    /// Log the decoded factory information at debug level.
    pub fn log_summary(&self) {
        log::debug!("{}", self);
    }
}

/// Decoded part, variant, package and memory sizes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FicrInfo {
    pub part: Part,
    pub variant: Variant,
    pub package: Package,
    pub ram: Ram,
    pub flash: Flash,
}

impl FicrInfo {
    /// Decode raw INFO.PART, INFO.VARIANT, INFO.PACKAGE, INFO.RAM and
    /// INFO.FLASH words.
    pub fn from_raw(part: u32, variant: u32, package: u32, ram: u32, flash: u32) -> FicrInfo {
        FicrInfo {
            part: Part::from(part),
            variant: Variant::from(variant),
            package: Package::from(package),
            ram: Ram::from(ram),
            flash: Flash::from(flash),
        }
    }
}

impl fmt::Display for FicrInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "NRF9160 HW INFO: Variant: {:?}, Part: {:?}, Package: {:?}, Ram: {:?}, Flash: {:?}",
            self.variant, self.part, self.package, self.ram, self.flash
        )
    }
}

fn device_id(low: u32, high: u32) -> [u8; 8] {
    let mut id = [0; 8];
    id[..4].copy_from_slice(&low.to_le_bytes());
    id[4..].copy_from_slice(&high.to_le_bytes());
    id
}

impl fmt::Display for Ficr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.info(), f)
    }
}

/// Static instance for the board. Only one (read-only) set of factory
/// registers.
pub static FICR_INSTANCE: Ficr = Ficr::new();

// `StaticRef` holds a raw pointer; the FICR is read-only factory data.
unsafe impl Sync for Ficr {}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use core::mem::offset_of;
    use std::string::{String, ToString};
    use std::sync::{Mutex, Once};
    use std::vec::Vec;

    static WARNINGS: Mutex<Vec<String>> = Mutex::new(Vec::new());
    static LOGGER_INIT: Once = Once::new();

    struct CaptureLogger;

    impl log::Log for CaptureLogger {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= log::Level::Warn
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                if let Ok(mut warnings) = WARNINGS.lock() {
                    warnings.push(record.args().to_string());
                }
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger;

    fn capture_warnings() {
        LOGGER_INIT.call_once(|| {
            let _ = log::set_logger(&LOGGER);
            log::set_max_level(log::LevelFilter::Warn);
        });
    }

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(FicrRegisters, info_configid), 0x200);
        assert_eq!(offset_of!(FicrRegisters, info_part), 0x20C);
        assert_eq!(offset_of!(FicrRegisters, info_devicetype), 0x228);
        assert_eq!(offset_of!(FicrRegisters, trimcnf), 0x300);
        assert_eq!(offset_of!(FicrRegisters, trng90b_rosc4), 0xC1C);
    }

    #[test]
    fn part_codes() {
        assert_eq!(PART::PART::N9160.value, 0x9160);
        assert_eq!(Part::from(0x9160), Part::N9160);
        assert_eq!(Part::from(0x9120), Part::N9120);
        assert_eq!(Part::from(0x52840), Part::Unspecified);
    }

    #[test]
    fn variant_is_ascii() {
        assert_eq!(&0x41414230u32.to_be_bytes(), b"AAB0");
        assert_eq!(Variant::from(0x41414230), Variant::AAB0);
        assert_eq!(Variant::from(0), Variant::Unspecified);
    }

    #[test]
    fn memory_sizes() {
        assert_eq!(Ram::from(0x100), Ram::K256);
        assert_eq!(Flash::from(0x400), Flash::K1024);
        assert_eq!(Flash::from(0x200), Flash::Unspecified);
        assert_eq!(Package::from(0xFFFF_FFFF), Package::Unspecified);
        assert_eq!(Package::from(0x2000), Package::Code(0x2000));
        assert_eq!(PACKAGE::PACKAGE::Unspecified.value, 0xFFFF_FFFF);
    }

    #[test]
    fn display_summary() {
        let info = FicrInfo::from_raw(0x9160, 0x41414230, 0xFFFF_FFFF, 0x100, 0x400);
        assert_eq!(
            info.to_string(),
            "NRF9160 HW INFO: Variant: AAB0, Part: N9160, Package: Unspecified, Ram: K256, Flash: K1024"
        );

        let blank = FicrInfo::from_raw(0xFFFF_FFFF, 0xFFFF_FFFF, 0x2000, 0, 0);
        assert_eq!(
            blank.to_string(),
            "NRF9160 HW INFO: Variant: Unspecified, Part: Unspecified, Package: Code(8192), Ram: Unspecified, Flash: Unspecified"
        );
    }

    #[test]
    fn unknown_part_is_logged() {
        capture_warnings();
        assert_eq!(Part::from(0x5340), Part::Unspecified);
        assert_eq!(Part::from(0xFFFF_FFFF), Part::Unspecified);
        let warnings = WARNINGS.lock().map(|w| w.clone()).unwrap_or_default();
        assert!(warnings
            .iter()
            .any(|w| w == "ficr: unknown part code 0x5340"));
        assert!(!warnings.iter().any(|w| w.contains("0xffffffff")));
    }

    #[test]
    fn device_id_byte_order() {
        assert_eq!(
            device_id(0x0403_0201, 0x0807_0605),
            [1, 2, 3, 4, 5, 6, 7, 8]
        );
    }
}
