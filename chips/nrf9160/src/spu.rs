// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! System protection unit (SPU)
//!
//! The SPU assigns flash regions, RAM regions, peripherals, DPPI channels
//! and GPIO pins to the secure or non-secure domain. Flash is split into
//! 32 regions of 32 KiB and RAM into 32 regions of 8 KiB.

use crate::common::{EVENT, PUBLISH};
use crate::memory_map::{self, PeripheralId};
use crate::ErrorCode;
use crate::StaticRef;
use tock_registers::fields::FieldValue;
use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs, LocalRegisterCopy};

pub const SPU_BASE: StaticRef<SpuRegisters> =
    unsafe { StaticRef::new(memory_map::SPU_S as *const SpuRegisters) };

pub const NUM_FLASH_REGIONS: usize = 32;
pub const NUM_RAM_REGIONS: usize = 32;
pub const NUM_NSC: usize = 2;
pub const NUM_PERIPHID: usize = 67;

pub const FLASH_REGION_SIZE: usize = 32 * 1024;
pub const RAM_REGION_SIZE: usize = 8 * 1024;
pub const FLASH_START: usize = 0x0000_0000;
pub const RAM_START: usize = 0x2000_0000;

register_structs! {
    pub DppiPermissions {
        /// Select between secure and non-secure attribute for the DPPI
        /// channels
        (0x0 => pub perm: ReadWrite<u32, DPPI_PERM::Register>),
        /// Prevent further modification of the corresponding PERM register
        (0x4 => pub lock: ReadWrite<u32, LOCK::Register>),
        (0x8 => @END),
    },

    pub GpioPortPermissions {
        /// Select between secure and non-secure attribute for pins 0 to 31
        (0x0 => pub perm: ReadWrite<u32, GPIOPORT_PERM::Register>),
        /// Prevent further modification of the corresponding PERM register
        (0x4 => pub lock: ReadWrite<u32, LOCK::Register>),
        (0x8 => @END),
    },

    /// Non-secure callable region
    pub NscRegion {
        /// Define which flash or RAM region can contain the non-secure
        /// callable (NSC) region n
        (0x0 => pub region: ReadWrite<u32, NSC_REGION::Register>),
        /// Define the size of the non-secure callable (NSC) region n
        (0x4 => pub size: ReadWrite<u32, NSC_SIZE::Register>),
        (0x8 => @END),
    },

    pub SpuRegisters {
        (0x000 => _reserved0),
        /// A security violation has been detected for the RAM memory space
        (0x100 => pub events_ramaccerr: ReadWrite<u32, EVENT::Register>),
        /// A security violation has been detected for the flash memory
        /// space
        (0x104 => pub events_flashaccerr: ReadWrite<u32, EVENT::Register>),
        /// A security violation has been detected on one or several
        /// peripherals
        (0x108 => pub events_periphaccerr: ReadWrite<u32, EVENT::Register>),
        (0x10C => _reserved1),
        (0x180 => pub publish_ramaccerr: ReadWrite<u32, PUBLISH::Register>),
        (0x184 => pub publish_flashaccerr: ReadWrite<u32, PUBLISH::Register>),
        (0x188 => pub publish_periphaccerr: ReadWrite<u32, PUBLISH::Register>),
        (0x18C => _reserved2),
        /// Enable or disable interrupt
        (0x300 => pub inten: ReadWrite<u32, INTEN::Register>),
        /// Enable interrupt
        (0x304 => pub intenset: ReadWrite<u32, INTEN::Register>),
        /// Disable interrupt
        (0x308 => pub intenclr: ReadWrite<u32, INTEN::Register>),
        (0x30C => _reserved3),
        /// Show implemented features for the current device
        (0x400 => pub cap: ReadOnly<u32, CAP::Register>),
        (0x404 => _reserved4),
        /// Access for bus access generated from the external domain n
        (0x440 => pub extdomain_perm: ReadWrite<u32, EXTDOMAIN_PERM::Register>),
        (0x444 => _reserved5),
        (0x480 => pub dppi: DppiPermissions),
        (0x488 => _reserved6),
        (0x4C0 => pub gpioport: GpioPortPermissions),
        (0x4C8 => _reserved7),
        (0x500 => pub flashnsc: [NscRegion; NUM_NSC]),
        (0x510 => _reserved8),
        (0x540 => pub ramnsc: [NscRegion; NUM_NSC]),
        (0x550 => _reserved9),
        /// Access permissions for flash region n
        (0x600 => pub flashregion_perm: [ReadWrite<u32, REGION_PERM::Register>; NUM_FLASH_REGIONS]),
        (0x680 => _reserved10),
        /// Access permissions for RAM region n
        (0x700 => pub ramregion_perm: [ReadWrite<u32, REGION_PERM::Register>; NUM_RAM_REGIONS]),
        (0x780 => _reserved11),
        /// Peripheral n settings, indexed by peripheral ID
        (0x800 => pub periphid_perm: [ReadWrite<u32, PERIPHID_PERM::Register>; NUM_PERIPHID]),
        (0x90C => @END),
    }
}

register_bitfields![u32,
    pub INTEN [
        RAMACCERR OFFSET(0) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        FLASHACCERR OFFSET(1) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        PERIPHACCERR OFFSET(2) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ]
    ],

    pub CAP [
        /// Show ARM TrustZone status
        TZM OFFSET(0) NUMBITS(1) [
            /// ARM TrustZone support not available
            NotAvailable = 0,
            /// ARM TrustZone support is available
            Enabled = 1
        ]
    ],

    pub EXTDOMAIN_PERM [
        /// Define configuration capabilities for TrustZone Cortex-M secure
        /// attribute
        SECUREMAPPING OFFSET(0) NUMBITS(2) [
            /// The bus access from this external domain always have the
            /// non-secure attribute set
            NonSecure = 0,
            /// The bus access from this external domain always have the
            /// secure attribute set
            Secure = 1,
            /// Non-secure or secure attribute for bus access from this
            /// domain is defined by the EXTDOMAIN[n].PERM register
            UserSelectable = 2
        ],
        /// Peripheral security mapping
        SECATTR OFFSET(4) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        LOCK OFFSET(8) NUMBITS(1) [
            Unlocked = 0,
            Locked = 1
        ]
    ],

    /// DPPI[n].PERM: security mapping of each DPPI channel
    pub DPPI_PERM [
        CHANNEL0 OFFSET(0) NUMBITS(1) [
            /// Channel is non-secure
            NonSecure = 0,
            /// Channel is secure
            Secure = 1
        ],
        CHANNEL1 OFFSET(1) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        CHANNEL2 OFFSET(2) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        CHANNEL3 OFFSET(3) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        CHANNEL4 OFFSET(4) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        CHANNEL5 OFFSET(5) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        CHANNEL6 OFFSET(6) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        CHANNEL7 OFFSET(7) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        CHANNEL8 OFFSET(8) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        CHANNEL9 OFFSET(9) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        CHANNEL10 OFFSET(10) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        CHANNEL11 OFFSET(11) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        CHANNEL12 OFFSET(12) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        CHANNEL13 OFFSET(13) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        CHANNEL14 OFFSET(14) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        CHANNEL15 OFFSET(15) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ]
    ],

    /// GPIOPORT[n].PERM: security mapping of each pin of port n
    pub GPIOPORT_PERM [
        PIN0 OFFSET(0) NUMBITS(1) [
            /// Pin is non-secure
            NonSecure = 0,
            /// Pin is secure
            Secure = 1
        ],
        PIN1 OFFSET(1) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        PIN2 OFFSET(2) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        PIN3 OFFSET(3) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        PIN4 OFFSET(4) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        PIN5 OFFSET(5) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        PIN6 OFFSET(6) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        PIN7 OFFSET(7) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        PIN8 OFFSET(8) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        PIN9 OFFSET(9) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        PIN10 OFFSET(10) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        PIN11 OFFSET(11) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        PIN12 OFFSET(12) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        PIN13 OFFSET(13) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        PIN14 OFFSET(14) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        PIN15 OFFSET(15) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        PIN16 OFFSET(16) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        PIN17 OFFSET(17) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        PIN18 OFFSET(18) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        PIN19 OFFSET(19) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        PIN20 OFFSET(20) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        PIN21 OFFSET(21) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        PIN22 OFFSET(22) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        PIN23 OFFSET(23) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        PIN24 OFFSET(24) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        PIN25 OFFSET(25) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        PIN26 OFFSET(26) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        PIN27 OFFSET(27) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        PIN28 OFFSET(28) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        PIN29 OFFSET(29) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        PIN30 OFFSET(30) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        PIN31 OFFSET(31) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ]
    ],

    /// DPPI[n].LOCK and GPIOPORT[n].LOCK
    pub LOCK [
        LOCK OFFSET(0) NUMBITS(1) [
            Unlocked = 0,
            Locked = 1
        ]
    ],

    pub NSC_REGION [
        /// Region number
        REGION OFFSET(0) NUMBITS(5) [],
        LOCK OFFSET(8) NUMBITS(1) [
            Unlocked = 0,
            Locked = 1
        ]
    ],

    pub NSC_SIZE [
        /// Size of the non-secure callable (NSC) region n, in bytes
        SIZE OFFSET(0) NUMBITS(4) [
            /// The region n is not defined as a non-secure callable region.
            /// Normal security attributes (secure or non-secure) are
            /// enforced.
            Disabled = 0,
            Size32 = 1,
            Size64 = 2,
            Size128 = 3,
            Size256 = 4,
            Size512 = 5,
            Size1024 = 6,
            Size2048 = 7,
            Size4096 = 8
        ],
        LOCK OFFSET(8) NUMBITS(1) [
            Unlocked = 0,
            Locked = 1
        ]
    ],

    /// FLASHREGION[n].PERM and RAMREGION[n].PERM
    pub REGION_PERM [
        /// Configure instruction fetch permissions from region n
        EXECUTE OFFSET(0) NUMBITS(1) [
            Disable = 0,
            Enable = 1
        ],
        /// Configure write permission for region n
        WRITE OFFSET(1) NUMBITS(1) [
            Disable = 0,
            Enable = 1
        ],
        /// Configure read permissions for region n
        READ OFFSET(2) NUMBITS(1) [
            Disable = 0,
            Enable = 1
        ],
        /// Security attribute for region n
        SECATTR OFFSET(4) NUMBITS(1) [
            Non_Secure = 0,
            Secure = 1
        ],
        LOCK OFFSET(8) NUMBITS(1) [
            Unlocked = 0,
            Locked = 1
        ]
    ],

    pub PERIPHID_PERM [
        /// Define configuration capabilities for TrustZone Cortex-M secure
        /// attribute
        SECUREMAPPING OFFSET(0) NUMBITS(2) [
            /// This peripheral is always accessible as a non-secure
            /// peripheral
            NonSecure = 0,
            /// This peripheral is always accessible as a secure peripheral
            Secure = 1,
            /// Non-secure or secure attribute for this peripheral is defined
            /// by the PERIPHID[n].PERM register
            UserSelectable = 2,
            /// This peripheral implements the split security mechanism
            Split = 3
        ],
        /// Indicates if the peripheral has DMA capabilities and if DMA
        /// transfer can be assigned to a different security attribute than
        /// the peripheral itself
        DMA OFFSET(2) NUMBITS(2) [
            /// Peripheral has no DMA capability
            NoDMA = 0,
            /// Peripheral has DMA and DMA transfers always have the same
            /// security attribute as assigned to the peripheral
            NoSeparateAttribute = 1,
            /// Peripheral has DMA and DMA transfers can have a different
            /// security attribute than the one assigned to the peripheral
            SeparateAttribute = 2
        ],
        /// Peripheral security mapping
        SECATTR OFFSET(4) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        /// Security attribution for the DMA transfer
        DMASEC OFFSET(5) NUMBITS(1) [
            NonSecure = 0,
            Secure = 1
        ],
        LOCK OFFSET(8) NUMBITS(1) [
            Unlocked = 0,
            Locked = 1
        ],
        /// Indicate if a peripheral is present with ID n
        PRESENT OFFSET(31) NUMBITS(1) [
            NotPresent = 0,
            IsPresent = 1
        ]
    ]
];

/// Access rights for one flash or RAM region.
///
/// Starts with every access denied in the non-secure domain; each setter
/// returns the updated value so permissions can be chained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpuPermissions {
    read: bool,
    write: bool,
    execute: bool,
    secure: bool,
    lock: bool,
}

impl SpuPermissions {
    pub const fn new() -> SpuPermissions {
        SpuPermissions {
            read: false,
            write: false,
            execute: false,
            secure: false,
            lock: false,
        }
    }

    pub const fn read(mut self, allow: bool) -> SpuPermissions {
        self.read = allow;
        self
    }

    pub const fn write(mut self, allow: bool) -> SpuPermissions {
        self.write = allow;
        self
    }

    pub const fn execute(mut self, allow: bool) -> SpuPermissions {
        self.execute = allow;
        self
    }

    pub const fn secure(mut self, secure: bool) -> SpuPermissions {
        self.secure = secure;
        self
    }

    /// Lock the region configuration until the next reset.
    pub const fn lock(mut self, lock: bool) -> SpuPermissions {
        self.lock = lock;
        self
    }

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    pub fn is_locked(&self) -> bool {
        self.lock
    }

    /// The `PERM` register value for these permissions.
    pub fn field_value(&self) -> FieldValue<u32, REGION_PERM::Register> {
        let read = if self.read {
            REGION_PERM::READ::Enable
        } else {
            REGION_PERM::READ::Disable
        };
        let write = if self.write {
            REGION_PERM::WRITE::Enable
        } else {
            REGION_PERM::WRITE::Disable
        };
        let execute = if self.execute {
            REGION_PERM::EXECUTE::Enable
        } else {
            REGION_PERM::EXECUTE::Disable
        };
        let secattr = if self.secure {
            REGION_PERM::SECATTR::Secure
        } else {
            REGION_PERM::SECATTR::Non_Secure
        };
        let lock = if self.lock {
            REGION_PERM::LOCK::Locked
        } else {
            REGION_PERM::LOCK::Unlocked
        };
        read + write + execute + secattr + lock
    }
}

impl From<u32> for SpuPermissions {
    fn from(raw: u32) -> SpuPermissions {
        let perm = LocalRegisterCopy::<u32, REGION_PERM::Register>::new(raw);
        SpuPermissions {
            read: perm.is_set(REGION_PERM::READ),
            write: perm.is_set(REGION_PERM::WRITE),
            execute: perm.is_set(REGION_PERM::EXECUTE),
            secure: perm.is_set(REGION_PERM::SECATTR),
            lock: perm.is_set(REGION_PERM::LOCK),
        }
    }
}

/// Index of the `FLASHREGION` that contains `addr`.
pub fn flash_region(addr: usize) -> Result<usize, ErrorCode> {
    region_index(addr, FLASH_START, FLASH_REGION_SIZE, NUM_FLASH_REGIONS)
}

/// Index of the `RAMREGION` that contains `addr`.
pub fn ram_region(addr: usize) -> Result<usize, ErrorCode> {
    region_index(addr, RAM_START, RAM_REGION_SIZE, NUM_RAM_REGIONS)
}

fn region_index(
    addr: usize,
    start: usize,
    region_size: usize,
    count: usize,
) -> Result<usize, ErrorCode> {
    let index = addr
        .checked_sub(start)
        .map(|offset| offset / region_size)
        .ok_or(ErrorCode::INVAL)?;
    if index < count {
        Ok(index)
    } else {
        Err(ErrorCode::INVAL)
    }
}

impl SpuRegisters {
    /// The `PERIPHID[n].PERM` register of a peripheral.
    pub fn periph_perm(&self, id: PeripheralId) -> &ReadWrite<u32, PERIPHID_PERM::Register> {
        &self.periphid_perm[id as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitfield::FieldLayout;
    use core::mem::{offset_of, size_of};

    #[test]
    fn register_offsets() {
        assert_eq!(size_of::<NscRegion>(), 8);
        assert_eq!(offset_of!(SpuRegisters, cap), 0x400);
        assert_eq!(offset_of!(SpuRegisters, extdomain_perm), 0x440);
        assert_eq!(offset_of!(SpuRegisters, dppi), 0x480);
        assert_eq!(offset_of!(SpuRegisters, gpioport), 0x4C0);
        assert_eq!(offset_of!(SpuRegisters, ramnsc), 0x540);
        assert_eq!(offset_of!(SpuRegisters, flashregion_perm), 0x600);
        assert_eq!(offset_of!(SpuRegisters, ramregion_perm), 0x700);
        assert_eq!(offset_of!(SpuRegisters, periphid_perm), 0x800);
    }

    #[test]
    fn channel_and_pin_security() {
        assert_eq!(DPPI_PERM::CHANNEL15::Secure.value, 0x8000);
        assert_eq!(DPPI_PERM::CHANNEL0::NonSecure.value, 0);
        assert_eq!(GPIOPORT_PERM::PIN31.mask_in_place(), 0x8000_0000);
        let pins = GPIOPORT_PERM::PIN0::Secure + GPIOPORT_PERM::PIN2::Secure;
        assert_eq!(pins.value, 0x5);
    }

    #[test]
    fn permission_word() {
        let perm = SpuPermissions::new()
            .read(true)
            .write(true)
            .execute(true)
            .secure(true);
        assert_eq!(perm.field_value().value, 0x17);

        let locked_ns = SpuPermissions::new().read(true).lock(true);
        assert_eq!(locked_ns.field_value().value, 0x104);
        assert!(!locked_ns.is_secure());
    }

    #[test]
    fn permission_decode() {
        let perm = SpuPermissions::from(0x0000_0116);
        assert_eq!(
            perm,
            SpuPermissions::new()
                .read(true)
                .write(true)
                .secure(true)
                .lock(true)
        );
        assert!(perm.is_locked());
    }

    #[test]
    fn flash_regions() {
        assert_eq!(flash_region(0x0000_0000), Ok(0));
        assert_eq!(flash_region(0x0000_7FFF), Ok(0));
        assert_eq!(flash_region(0x0000_8000), Ok(1));
        assert_eq!(flash_region(0x000F_FFFF), Ok(31));
        assert_eq!(flash_region(0x0010_0000), Err(ErrorCode::INVAL));
    }

    #[test]
    fn ram_regions() {
        assert_eq!(ram_region(0x2000_0000), Ok(0));
        assert_eq!(ram_region(0x2000_2000), Ok(1));
        assert_eq!(ram_region(0x2003_FFFF), Ok(31));
        assert_eq!(ram_region(0x2004_0000), Err(ErrorCode::INVAL));
        assert_eq!(ram_region(0x1FFF_FFFF), Err(ErrorCode::INVAL));
    }

    #[test]
    fn periphid_layout() {
        assert_eq!(PERIPHID_PERM::PRESENT.mask_in_place(), 0x8000_0000);
        assert_eq!(PERIPHID_PERM::DMA.mask_in_place(), 0xC);
        assert_eq!(NUM_PERIPHID, PeripheralId::GPIO as usize + 1);
    }
}
