// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Watchdog timer (WDT)

use crate::common::{EVENT, PUBLISH, SUBSCRIBE, TASK};
use crate::memory_map;
use crate::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

pub const WDT_BASE: StaticRef<WdtRegisters> =
    unsafe { StaticRef::new(memory_map::WDT as *const WdtRegisters) };

/// Number of reload request registers.
pub const NUM_RR: usize = 8;

register_structs! {
    pub WdtRegisters {
        /// Start the watchdog
        (0x000 => pub tasks_start: WriteOnly<u32, TASK::Register>),
        (0x004 => _reserved0),
        (0x080 => pub subscribe_start: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x084 => _reserved1),
        /// Watchdog timeout
        (0x100 => pub events_timeout: ReadWrite<u32, EVENT::Register>),
        (0x104 => _reserved2),
        (0x180 => pub publish_timeout: ReadWrite<u32, PUBLISH::Register>),
        (0x184 => _reserved3),
        /// Enable interrupt
        (0x304 => pub intenset: ReadWrite<u32, INTEN::Register>),
        /// Disable interrupt
        (0x308 => pub intenclr: ReadWrite<u32, INTEN::Register>),
        (0x30C => _reserved4),
        /// Run status
        (0x400 => pub runstatus: ReadOnly<u32, RUNSTATUS::Register>),
        /// Request status
        (0x404 => pub reqstatus: ReadOnly<u32, REQSTATUS::Register>),
        (0x408 => _reserved5),
        /// Counter reload value
        (0x504 => pub crv: ReadWrite<u32, CRV::Register>),
        /// Enable register for reload request registers
        (0x508 => pub rren: ReadWrite<u32, RREN::Register>),
        /// Configuration register
        (0x50C => pub config: ReadWrite<u32, CONFIG::Register>),
        (0x510 => _reserved6),
        /// Reload request n
        (0x600 => pub rr: [WriteOnly<u32, RELOAD::Register>; NUM_RR]),
        (0x620 => @END),
    }
}

register_bitfields![u32,
    pub INTEN [
        TIMEOUT OFFSET(0) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ]
    ],

    pub RUNSTATUS [
        /// Indicates whether or not the watchdog is running
        RUNSTATUSWDT OFFSET(0) NUMBITS(1) [
            NotRunning = 0,
            Running = 1
        ]
    ],

    /// REQSTATUS: pending reload requests
    pub REQSTATUS [
        RR0 OFFSET(0) NUMBITS(1) [
            /// RR[n] register is not enabled, or are already requesting reload
            DisabledOrRequested = 0,
            /// RR[n] register is enabled, and are not yet requesting reload
            EnabledAndUnrequested = 1
        ],
        RR1 OFFSET(1) NUMBITS(1) [
            DisabledOrRequested = 0,
            EnabledAndUnrequested = 1
        ],
        RR2 OFFSET(2) NUMBITS(1) [
            DisabledOrRequested = 0,
            EnabledAndUnrequested = 1
        ],
        RR3 OFFSET(3) NUMBITS(1) [
            DisabledOrRequested = 0,
            EnabledAndUnrequested = 1
        ],
        RR4 OFFSET(4) NUMBITS(1) [
            DisabledOrRequested = 0,
            EnabledAndUnrequested = 1
        ],
        RR5 OFFSET(5) NUMBITS(1) [
            DisabledOrRequested = 0,
            EnabledAndUnrequested = 1
        ],
        RR6 OFFSET(6) NUMBITS(1) [
            DisabledOrRequested = 0,
            EnabledAndUnrequested = 1
        ],
        RR7 OFFSET(7) NUMBITS(1) [
            DisabledOrRequested = 0,
            EnabledAndUnrequested = 1
        ]
    ],

    /// RREN: which RR[n] registers take part in reloading
    pub RREN [
        RR0 OFFSET(0) NUMBITS(1) [
            /// Disable RR[n] register
            Disabled = 0,
            /// Enable RR[n] register
            Enabled = 1
        ],
        RR1 OFFSET(1) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        RR2 OFFSET(2) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        RR3 OFFSET(3) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        RR4 OFFSET(4) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        RR5 OFFSET(5) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        RR6 OFFSET(6) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        RR7 OFFSET(7) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ]
    ],

    pub CRV [
        /// Counter reload value in number of cycles of the 32.768 kHz clock
        CRV OFFSET(0) NUMBITS(32) []
    ],

    pub CONFIG [
        /// Configure WDT to either be paused, or kept running, while the
        /// CPU is sleeping
        SLEEP OFFSET(0) NUMBITS(1) [
            Pause = 0,
            Run = 1
        ],
        /// Configure WDT to either be paused, or kept running, while the
        /// CPU is halted by the debugger
        HALT OFFSET(3) NUMBITS(1) [
            Pause = 0,
            Run = 1
        ]
    ],

    pub RELOAD [
        /// Reload request register
        RR OFFSET(0) NUMBITS(32) [
            /// Value to request a reload of the watchdog timer
            Reload = 0x6E524635
        ]
    ]
];

/// Smallest value accepted by CRV.
pub const CRV_MIN: u32 = 0xF;

/// CRV setting for a timeout in milliseconds, or `None` if the timeout is
/// below the minimum the watchdog supports.
pub fn crv_for_timeout_ms(ms: u32) -> Option<u32> {
    let ticks = (u64::from(ms) * 32_768) / 1000;
    let ticks = u32::try_from(ticks).unwrap_or(u32::MAX);
    if ticks < CRV_MIN {
        None
    } else {
        Some(ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::offset_of;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(WdtRegisters, runstatus), 0x400);
        assert_eq!(offset_of!(WdtRegisters, config), 0x50C);
        assert_eq!(offset_of!(WdtRegisters, rr), 0x600);
    }

    #[test]
    fn reload_magic() {
        assert_eq!(RELOAD::RR::Reload.value, 0x6E52_4635);
        let cfg = CONFIG::SLEEP::Run + CONFIG::HALT::Pause;
        assert_eq!(cfg.value, 0x1);
    }

    #[test]
    fn reload_request_status() {
        assert_eq!(RREN::RR0::Enabled.value, 0x1);
        let status = LocalRegisterCopy::<u32, REQSTATUS::Register>::new(0x1);
        assert_eq!(
            status.read_as_enum(REQSTATUS::RR0),
            Some(REQSTATUS::RR0::Value::EnabledAndUnrequested)
        );
        assert_eq!(
            status.read_as_enum(REQSTATUS::RR7),
            Some(REQSTATUS::RR7::Value::DisabledOrRequested)
        );
    }

    #[test]
    fn timeout_conversion() {
        assert_eq!(crv_for_timeout_ms(1000), Some(32_768));
        assert_eq!(crv_for_timeout_ms(0), None);
    }
}
