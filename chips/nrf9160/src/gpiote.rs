// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! GPIO Tasks and Events
//!
//! GPIOTE0 is reachable from the secure domain only, GPIOTE1 from the
//! non-secure domain only.

use crate::common::{EVENT, PUBLISH, SUBSCRIBE, TASK};
use crate::memory_map;
use crate::StaticRef;
use tock_registers::registers::{ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

pub const GPIOTE0_BASE: StaticRef<GpioteRegisters> =
    unsafe { StaticRef::new(memory_map::GPIOTE0_S as *const GpioteRegisters) };
pub const GPIOTE1_BASE: StaticRef<GpioteRegisters> =
    unsafe { StaticRef::new(memory_map::GPIOTE1_NS as *const GpioteRegisters) };

/// Number of GPIOTE channels.
pub const NUM_CHANNELS: usize = 8;

register_structs! {
    pub GpioteRegisters {
        /// Task for writing to pin specified in CONFIG[n].PSEL. Action on
        /// pin is configured in CONFIG[n].POLARITY.
        (0x000 => pub tasks_out: [WriteOnly<u32, TASK::Register>; NUM_CHANNELS]),
        (0x020 => _reserved0),
        /// Task for writing to pin specified in CONFIG[n].PSEL. Action on
        /// pin is to set it high.
        (0x030 => pub tasks_set: [WriteOnly<u32, TASK::Register>; NUM_CHANNELS]),
        (0x050 => _reserved1),
        /// Task for writing to pin specified in CONFIG[n].PSEL. Action on
        /// pin is to set it low.
        (0x060 => pub tasks_clr: [WriteOnly<u32, TASK::Register>; NUM_CHANNELS]),
        (0x080 => pub subscribe_out: [ReadWrite<u32, SUBSCRIBE::Register>; NUM_CHANNELS]),
        (0x0A0 => _reserved2),
        (0x0B0 => pub subscribe_set: [ReadWrite<u32, SUBSCRIBE::Register>; NUM_CHANNELS]),
        (0x0D0 => _reserved3),
        (0x0E0 => pub subscribe_clr: [ReadWrite<u32, SUBSCRIBE::Register>; NUM_CHANNELS]),
        /// Event generated from pin specified in CONFIG[n].PSEL
        (0x100 => pub events_in: [ReadWrite<u32, EVENT::Register>; NUM_CHANNELS]),
        (0x120 => _reserved4),
        /// Event generated from multiple input GPIO pins with SENSE
        /// mechanism enabled
        (0x17C => pub events_port: ReadWrite<u32, EVENT::Register>),
        (0x180 => pub publish_in: [ReadWrite<u32, PUBLISH::Register>; NUM_CHANNELS]),
        (0x1A0 => _reserved5),
        (0x1FC => pub publish_port: ReadWrite<u32, PUBLISH::Register>),
        (0x200 => _reserved6),
        /// Enable interrupt
        (0x304 => pub intenset: ReadWrite<u32, INTEN::Register>),
        /// Disable interrupt
        (0x308 => pub intenclr: ReadWrite<u32, INTEN::Register>),
        (0x30C => _reserved7),
        /// Configuration for OUT[n], SET[n] and CLR[n] tasks and IN[n]
        /// event
        (0x510 => pub config: [ReadWrite<u32, CONFIG::Register>; NUM_CHANNELS]),
        (0x530 => @END),
    }
}

register_bitfields![u32,
    /// INTENSET and INTENCLR share one layout
    pub INTEN [
        IN0 OFFSET(0) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        IN1 OFFSET(1) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        IN2 OFFSET(2) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        IN3 OFFSET(3) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        IN4 OFFSET(4) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        IN5 OFFSET(5) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        IN6 OFFSET(6) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        IN7 OFFSET(7) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        PORT OFFSET(31) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ]
    ],

    pub CONFIG [
        /// Mode
        MODE OFFSET(0) NUMBITS(2) [
            /// Disabled. Pin specified by PSEL will not be acquired by the
            /// GPIOTE module.
            Disabled = 0,
            /// Event mode
            Event = 1,
            /// Task mode
            Task = 3
        ],
        /// GPIO number associated with SET[n], CLR[n] and OUT[n] tasks and
        /// IN[n] event
        PSEL OFFSET(8) NUMBITS(5) [],
        /// When In task mode: Operation to be performed on output when
        /// OUT[n] task is triggered. When In event mode: Operation on input
        /// that shall trigger IN[n] event.
        POLARITY OFFSET(16) NUMBITS(2) [
            /// Task mode: No effect on pin from OUT[n] task. Event mode: no
            /// IN[n] event generated on pin activity.
            None = 0,
            /// Task mode: Set pin from OUT[n] task. Event mode: Generate
            /// IN[n] event when rising edge on pin.
            LoToHi = 1,
            /// Task mode: Clear pin from OUT[n] task. Event mode: Generate
            /// IN[n] event when falling edge on pin.
            HiToLo = 2,
            /// Task mode: Toggle pin from OUT[n]. Event mode: Generate IN[n]
            /// when any change on pin.
            Toggle = 3
        ],
        /// When in task mode: Initial value of the output when the GPIOTE
        /// channel is configured. When in event mode: No effect.
        OUTINIT OFFSET(20) NUMBITS(1) [
            /// Task mode: Initial value of pin before task triggering is low
            Low = 0,
            /// Task mode: Initial value of pin before task triggering is high
            High = 1
        ]
    ]
];

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::offset_of;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(GpioteRegisters, tasks_set), 0x030);
        assert_eq!(offset_of!(GpioteRegisters, events_port), 0x17C);
        assert_eq!(offset_of!(GpioteRegisters, publish_port), 0x1FC);
        assert_eq!(offset_of!(GpioteRegisters, config), 0x510);
    }

    #[test]
    fn event_on_falling_edge() {
        let config = CONFIG::MODE::Event + CONFIG::PSEL.val(17) + CONFIG::POLARITY::HiToLo;
        assert_eq!(config.value, 0x0002_1101);
    }
}
