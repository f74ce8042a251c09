// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Power control

use crate::common::{EVENT, PUBLISH, SUBSCRIBE, TASK};
use crate::memory_map;
use crate::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

pub const POWER_BASE: StaticRef<PowerRegisters> =
    unsafe { StaticRef::new(memory_map::POWER as *const PowerRegisters) };

/// Number of general purpose retention registers.
pub const NUM_GPREGRET: usize = 2;

register_structs! {
    pub PowerRegisters {
        (0x000 => _reserved0),
        /// Enable Constant Latency mode
        (0x078 => pub tasks_constlat: WriteOnly<u32, TASK::Register>),
        /// Enable Low-power mode (variable latency)
        (0x07C => pub tasks_lowpwr: WriteOnly<u32, TASK::Register>),
        (0x080 => _reserved1),
        (0x0F8 => pub subscribe_constlat: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x0FC => pub subscribe_lowpwr: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x100 => _reserved2),
        /// Power failure warning
        (0x108 => pub events_pofwarn: ReadWrite<u32, EVENT::Register>),
        (0x10C => _reserved3),
        /// CPU entered WFI/WFE sleep
        (0x114 => pub events_sleepenter: ReadWrite<u32, EVENT::Register>),
        /// CPU exited WFI/WFE sleep
        (0x118 => pub events_sleepexit: ReadWrite<u32, EVENT::Register>),
        (0x11C => _reserved4),
        (0x188 => pub publish_pofwarn: ReadWrite<u32, PUBLISH::Register>),
        (0x18C => _reserved5),
        (0x194 => pub publish_sleepenter: ReadWrite<u32, PUBLISH::Register>),
        (0x198 => pub publish_sleepexit: ReadWrite<u32, PUBLISH::Register>),
        (0x19C => _reserved6),
        /// Enable or disable interrupt
        (0x300 => pub inten: ReadWrite<u32, INTEN::Register>),
        /// Enable interrupt
        (0x304 => pub intenset: ReadWrite<u32, INTEN::Register>),
        /// Disable interrupt
        (0x308 => pub intenclr: ReadWrite<u32, INTEN::Register>),
        (0x30C => _reserved7),
        /// Reset reason
        (0x400 => pub resetreas: ReadWrite<u32, RESETREAS::Register>),
        (0x404 => _reserved8),
        /// Modem domain power status
        (0x440 => pub powerstatus: ReadOnly<u32, POWERSTATUS::Register>),
        (0x444 => _reserved9),
        /// General purpose retention registers
        (0x51C => pub gpregret: [ReadWrite<u32, GPREGRET::Register>; NUM_GPREGRET]),
        (0x524 => @END),
    }
}

register_bitfields![u32,
    /// INTEN, INTENSET and INTENCLR share one layout
    pub INTEN [
        /// Interrupt for event POFWARN
        POFWARN OFFSET(2) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        /// Interrupt for event SLEEPENTER
        SLEEPENTER OFFSET(5) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        /// Interrupt for event SLEEPEXIT
        SLEEPEXIT OFFSET(6) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ]
    ],

    /// Reset reason. Bits are cleared by writing '1' to them.
    pub RESETREAS [
        /// Reset from pin-reset detected
        RESETPIN OFFSET(0) NUMBITS(1) [
            NotDetected = 0,
            Detected = 1
        ],
        /// Reset from global watchdog detected
        DOG OFFSET(1) NUMBITS(1) [
            NotDetected = 0,
            Detected = 1
        ],
        /// Reset due to wake-up from System OFF mode
        OFF OFFSET(2) NUMBITS(1) [
            NotDetected = 0,
            Detected = 1
        ],
        /// Reset due to wake-up from System OFF mode when wakeup is
        /// triggered from entering into debug interface mode
        DIF OFFSET(3) NUMBITS(1) [
            NotDetected = 0,
            Detected = 1
        ],
        /// Reset from AIRCR.SYSRESETREQ detected
        SREQ OFFSET(4) NUMBITS(1) [
            NotDetected = 0,
            Detected = 1
        ],
        /// Reset from CPU lock-up detected
        LOCKUP OFFSET(5) NUMBITS(1) [
            NotDetected = 0,
            Detected = 1
        ],
        /// Reset triggered through CTRL-AP
        CTRLAP OFFSET(6) NUMBITS(1) [
            NotDetected = 0,
            Detected = 1
        ]
    ],

    pub POWERSTATUS [
        /// LTE modem domain status
        LTEMODEM OFFSET(0) NUMBITS(1) [
            /// LTE modem domain is powered off
            Off = 0,
            /// LTE modem domain is powered on
            On = 1
        ]
    ],

    pub GPREGRET [
        /// General purpose retention register
        GPREGRET OFFSET(0) NUMBITS(8) []
    ]
];

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::offset_of;
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(PowerRegisters, tasks_constlat), 0x078);
        assert_eq!(offset_of!(PowerRegisters, resetreas), 0x400);
        assert_eq!(offset_of!(PowerRegisters, gpregret), 0x51C);
    }

    #[test]
    fn reset_reason_bits() {
        let resetreas = InMemoryRegister::<u32, RESETREAS::Register>::new(0);
        resetreas.write(RESETREAS::DOG::Detected + RESETREAS::CTRLAP::Detected);
        assert_eq!(resetreas.get(), 0x42);
        assert!(resetreas.is_set(RESETREAS::DOG));
        assert!(!resetreas.is_set(RESETREAS::LOCKUP));
    }
}
