// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Pulse density modulation (PDM) interface
//!
//! Samples one or two digital microphones and writes 16-bit PCM samples to
//! RAM through EasyDMA.

use crate::common::{ENABLE_BIT, EVENT, PSEL, PUBLISH, SUBSCRIBE, TASK, WORD};
use crate::memory_map;
use crate::StaticRef;
use tock_registers::registers::{ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

pub const PDM_BASE: StaticRef<PdmRegisters> =
    unsafe { StaticRef::new(memory_map::PDM as *const PdmRegisters) };

register_structs! {
    pub PdmRegisters {
        /// Starts continuous PDM transfer
        (0x000 => pub tasks_start: WriteOnly<u32, TASK::Register>),
        /// Stops PDM transfer
        (0x004 => pub tasks_stop: WriteOnly<u32, TASK::Register>),
        (0x008 => _reserved0),
        (0x080 => pub subscribe_start: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x084 => pub subscribe_stop: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x088 => _reserved1),
        /// PDM transfer has started
        (0x100 => pub events_started: ReadWrite<u32, EVENT::Register>),
        /// PDM transfer has finished
        (0x104 => pub events_stopped: ReadWrite<u32, EVENT::Register>),
        /// The PDM has written the last sample specified by SAMPLE.MAXCNT
        /// (or the last sample after a STOP task has been received) to
        /// Data RAM
        (0x108 => pub events_end: ReadWrite<u32, EVENT::Register>),
        (0x10C => _reserved2),
        (0x180 => pub publish_started: ReadWrite<u32, PUBLISH::Register>),
        (0x184 => pub publish_stopped: ReadWrite<u32, PUBLISH::Register>),
        (0x188 => pub publish_end: ReadWrite<u32, PUBLISH::Register>),
        (0x18C => _reserved3),
        /// Enable or disable interrupt
        (0x300 => pub inten: ReadWrite<u32, INTEN::Register>),
        /// Enable interrupt
        (0x304 => pub intenset: ReadWrite<u32, INTEN::Register>),
        /// Disable interrupt
        (0x308 => pub intenclr: ReadWrite<u32, INTEN::Register>),
        (0x30C => _reserved4),
        /// PDM module enable register
        (0x500 => pub enable: ReadWrite<u32, ENABLE_BIT::Register>),
        /// PDM clock generator control
        (0x504 => pub pdmclkctrl: ReadWrite<u32, PDMCLKCTRL::Register>),
        /// Defines the routing of the connected PDM microphones' signals
        (0x508 => pub mode: ReadWrite<u32, MODE::Register>),
        (0x50C => _reserved5),
        /// Left output gain adjustment
        (0x518 => pub gainl: ReadWrite<u32, GAIN::Register>),
        /// Right output gain adjustment
        (0x51C => pub gainr: ReadWrite<u32, GAIN::Register>),
        /// Selects the ratio between PDM_CLK and output sample rate
        (0x520 => pub ratio: ReadWrite<u32, RATIO::Register>),
        (0x524 => _reserved6),
        /// Pin number configuration for PDM CLK signal
        (0x540 => pub psel_clk: ReadWrite<u32, PSEL::Register>),
        /// Pin number configuration for PDM DIN signal
        (0x544 => pub psel_din: ReadWrite<u32, PSEL::Register>),
        (0x548 => _reserved7),
        /// RAM address pointer to write samples to with EasyDMA
        (0x560 => pub sample_ptr: ReadWrite<u32, WORD::Register>),
        /// Number of samples to allocate memory for in EasyDMA mode
        (0x564 => pub sample_maxcnt: ReadWrite<u32, MAXCNT::Register>),
        (0x568 => @END),
    }
}

register_bitfields![u32,
    /// INTEN, INTENSET and INTENCLR share one layout
    pub INTEN [
        /// Interrupt for event STARTED
        STARTED OFFSET(0) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        /// Interrupt for event STOPPED
        STOPPED OFFSET(1) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        /// Interrupt for event END
        END OFFSET(2) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ]
    ],

    pub PDMCLKCTRL [
        /// PDM_CLK frequency
        FREQ OFFSET(0) NUMBITS(32) [
            /// PDM_CLK = 32 MHz / 32 = 1.000 MHz
            Freq1000K = 0x08000000,
            /// PDM_CLK = 32 MHz / 31 = 1.032 MHz. Nominal clock for
            /// RATIO=Ratio64.
            Default = 0x08400000,
            /// PDM_CLK = 32 MHz / 30 = 1.067 MHz
            Freq1067K = 0x08800000,
            /// PDM_CLK = 32 MHz / 26 = 1.231 MHz
            Freq1231K = 0x09800000,
            /// PDM_CLK = 32 MHz / 25 = 1.280 MHz. Nominal clock for
            /// RATIO=Ratio80.
            Freq1280K = 0x0A000000,
            /// PDM_CLK = 32 MHz / 24 = 1.333 MHz
            Freq1333K = 0x0A800000
        ]
    ],

    pub MODE [
        /// Mono or stereo operation
        OPERATION OFFSET(0) NUMBITS(1) [
            /// Sample and store one pair (left + right) of 16-bit samples
            /// per RAM word R=[31:16]; L=[15:0]
            Stereo = 0,
            /// Sample and store two successive left samples (16 bits each)
            /// per RAM word L1=[31:16]; L0=[15:0]
            Mono = 1
        ],
        /// Defines on which PDM_CLK edge left (or mono) is sampled
        EDGE OFFSET(1) NUMBITS(1) [
            /// Left (or mono) is sampled on falling edge of PDM_CLK
            LeftFalling = 0,
            /// Left (or mono) is sampled on rising edge of PDM_CLK
            LeftRising = 1
        ]
    ],

    /// GAINL and GAINR
    pub GAIN [
        /// Output gain adjustment, in 0.5 dB steps, around the default
        /// module gain
        GAIN OFFSET(0) NUMBITS(7) [
            /// -20 dB gain adjustment (minimum)
            MinGain = 0x00,
            /// 0 dB gain adjustment
            DefaultGain = 0x28,
            /// +20 dB gain adjustment (maximum)
            MaxGain = 0x50
        ]
    ],

    pub RATIO [
        /// Selects the ratio between PDM_CLK and output sample rate
        RATIO OFFSET(0) NUMBITS(1) [
            /// Ratio of 64
            Ratio64 = 0,
            /// Ratio of 80
            Ratio80 = 1
        ]
    ],

    pub MAXCNT [
        /// Length of DMA RAM allocation in number of samples
        BUFFSIZE OFFSET(0) NUMBITS(15) []
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
        assert_eq!(offset_of!(PdmRegisters, events_end), 0x108);
        assert_eq!(offset_of!(PdmRegisters, publish_end), 0x188);
        assert_eq!(offset_of!(PdmRegisters, inten), 0x300);
        assert_eq!(offset_of!(PdmRegisters, gainl), 0x518);
        assert_eq!(offset_of!(PdmRegisters, ratio), 0x520);
        assert_eq!(offset_of!(PdmRegisters, psel_din), 0x544);
        assert_eq!(offset_of!(PdmRegisters, sample_maxcnt), 0x564);
    }

    #[test]
    fn clock_and_gain() {
        assert_eq!(PDMCLKCTRL::FREQ::Value::Default as u32, 0x0840_0000);
        assert_eq!(GAIN::GAIN.mask_in_place(), 0x7F);
        assert_eq!(GAIN::GAIN::DefaultGain.value, 0x28);
        assert_eq!(MAXCNT::BUFFSIZE.mask_in_place(), 0x7FFF);
    }

    #[test]
    fn mono_on_rising_edge() {
        let mode = LocalRegisterCopy::<u32, MODE::Register>::new(0x3);
        assert_eq!(
            mode.read_as_enum(MODE::OPERATION),
            Some(MODE::OPERATION::Value::Mono)
        );
        assert_eq!(
            mode.read_as_enum(MODE::EDGE),
            Some(MODE::EDGE::Value::LeftRising)
        );
    }
}
