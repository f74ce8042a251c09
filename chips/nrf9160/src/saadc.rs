// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Successive approximation analog-to-digital converter (SAADC)

use crate::common::{ENABLE_BIT, EVENT, PUBLISH, SUBSCRIBE, TASK, WORD};
use crate::memory_map;
use crate::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

pub const SAADC_BASE: StaticRef<SaadcRegisters> =
    unsafe { StaticRef::new(memory_map::SAADC as *const SaadcRegisters) };

pub const NUM_CHANNELS: usize = 8;

register_structs! {
    /// Per-channel limit events
    pub ChannelEvents {
        /// Last result is equal or above CH[n].LIMIT.HIGH
        (0x0 => pub limith: ReadWrite<u32, EVENT::Register>),
        /// Last result is equal or below CH[n].LIMIT.LOW
        (0x4 => pub limitl: ReadWrite<u32, EVENT::Register>),
        (0x8 => @END),
    },

    pub ChannelPublish {
        (0x0 => pub limith: ReadWrite<u32, PUBLISH::Register>),
        (0x4 => pub limitl: ReadWrite<u32, PUBLISH::Register>),
        (0x8 => @END),
    },

    /// Per-channel configuration
    pub Channel {
        /// Input positive pin selection for CH[n]
        (0x0 => pub pselp: ReadWrite<u32, PSEL::Register>),
        /// Input negative pin selection for CH[n]
        (0x4 => pub pseln: ReadWrite<u32, PSEL::Register>),
        /// Input configuration for CH[n]
        (0x8 => pub config: ReadWrite<u32, CONFIG::Register>),
        /// High/low limits for event monitoring a channel
        (0xC => pub limit: ReadWrite<u32, LIMIT::Register>),
        (0x10 => @END),
    },

    pub SaadcRegisters {
        /// Start the ADC and prepare the result buffer in RAM
        (0x000 => pub tasks_start: WriteOnly<u32, TASK::Register>),
        /// Take one ADC sample, if scan is enabled all channels are sampled
        (0x004 => pub tasks_sample: WriteOnly<u32, TASK::Register>),
        /// Stop the ADC and terminate any on-going conversion
        (0x008 => pub tasks_stop: WriteOnly<u32, TASK::Register>),
        /// Starts offset auto-calibration
        (0x00C => pub tasks_calibrateoffset: WriteOnly<u32, TASK::Register>),
        (0x010 => _reserved0),
        (0x080 => pub subscribe_start: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x084 => pub subscribe_sample: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x088 => pub subscribe_stop: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x08C => pub subscribe_calibrateoffset: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x090 => _reserved1),
        /// The ADC has started
        (0x100 => pub events_started: ReadWrite<u32, EVENT::Register>),
        /// The ADC has filled up the Result buffer
        (0x104 => pub events_end: ReadWrite<u32, EVENT::Register>),
        /// A conversion task has been completed. Depending on the mode,
        /// multiple conversions might be needed for a result to be
        /// transferred to RAM.
        (0x108 => pub events_done: ReadWrite<u32, EVENT::Register>),
        /// A result is ready to get transferred to RAM
        (0x10C => pub events_resultdone: ReadWrite<u32, EVENT::Register>),
        /// Calibration is complete
        (0x110 => pub events_calibratedone: ReadWrite<u32, EVENT::Register>),
        /// The ADC has stopped
        (0x114 => pub events_stopped: ReadWrite<u32, EVENT::Register>),
        (0x118 => pub events_ch: [ChannelEvents; NUM_CHANNELS]),
        (0x158 => _reserved2),
        (0x180 => pub publish_started: ReadWrite<u32, PUBLISH::Register>),
        (0x184 => pub publish_end: ReadWrite<u32, PUBLISH::Register>),
        (0x188 => pub publish_done: ReadWrite<u32, PUBLISH::Register>),
        (0x18C => pub publish_resultdone: ReadWrite<u32, PUBLISH::Register>),
        (0x190 => pub publish_calibratedone: ReadWrite<u32, PUBLISH::Register>),
        (0x194 => pub publish_stopped: ReadWrite<u32, PUBLISH::Register>),
        (0x198 => pub publish_ch: [ChannelPublish; NUM_CHANNELS]),
        (0x1D8 => _reserved3),
        /// Enable or disable interrupt
        (0x300 => pub inten: ReadWrite<u32, INTEN::Register>),
        /// Enable interrupt
        (0x304 => pub intenset: ReadWrite<u32, INTEN::Register>),
        /// Disable interrupt
        (0x308 => pub intenclr: ReadWrite<u32, INTEN::Register>),
        (0x30C => _reserved4),
        /// Status
        (0x400 => pub status: ReadOnly<u32, STATUS::Register>),
        (0x404 => _reserved5),
        /// Enable or disable ADC
        (0x500 => pub enable: ReadWrite<u32, ENABLE_BIT::Register>),
        (0x504 => _reserved6),
        (0x510 => pub ch: [Channel; NUM_CHANNELS]),
        (0x590 => _reserved7),
        /// Resolution configuration
        (0x5F0 => pub resolution: ReadWrite<u32, RESOLUTION::Register>),
        /// Oversampling configuration. OVERSAMPLE should not be combined
        /// with SCAN.
        (0x5F4 => pub oversample: ReadWrite<u32, OVERSAMPLE::Register>),
        /// Controls normal or continuous sample rate
        (0x5F8 => pub samplerate: ReadWrite<u32, SAMPLERATE::Register>),
        (0x5FC => _reserved8),
        /// Data pointer
        (0x62C => pub result_ptr: ReadWrite<u32, WORD::Register>),
        /// Maximum number of 16-bit samples to be written to output RAM
        /// buffer
        (0x630 => pub result_maxcnt: ReadWrite<u32, MAXCNT::Register>),
        /// Number of 16-bit samples written to output RAM buffer since the
        /// previous START task
        (0x634 => pub result_amount: ReadOnly<u32, MAXCNT::Register>),
        (0x638 => @END),
    }
}

register_bitfields![u32,
    pub INTEN [
        STARTED OFFSET(0) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        END OFFSET(1) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        DONE OFFSET(2) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        RESULTDONE OFFSET(3) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        CALIBRATEDONE OFFSET(4) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        STOPPED OFFSET(5) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        CH0LIMITH OFFSET(6) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        CH0LIMITL OFFSET(7) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        CH1LIMITH OFFSET(8) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        CH1LIMITL OFFSET(9) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        CH2LIMITH OFFSET(10) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        CH2LIMITL OFFSET(11) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        CH3LIMITH OFFSET(12) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        CH3LIMITL OFFSET(13) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        CH4LIMITH OFFSET(14) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        CH4LIMITL OFFSET(15) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        CH5LIMITH OFFSET(16) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        CH5LIMITL OFFSET(17) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        CH6LIMITH OFFSET(18) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        CH6LIMITL OFFSET(19) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        CH7LIMITH OFFSET(20) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        CH7LIMITL OFFSET(21) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ]
    ],

    pub STATUS [
        /// Status
        STATUS OFFSET(0) NUMBITS(1) [
            /// SAADC is ready. No on-going conversions.
            Ready = 0,
            /// SAADC is busy. Single conversion in progress.
            Busy = 1
        ]
    ],

    /// CH[n].PSELP and CH[n].PSELN
    pub PSEL [
        /// Analog input
        PSEL OFFSET(0) NUMBITS(4) [
            NC = 0,
            AnalogInput0 = 1,
            AnalogInput1 = 2,
            AnalogInput2 = 3,
            AnalogInput3 = 4,
            AnalogInput4 = 5,
            AnalogInput5 = 6,
            AnalogInput6 = 7,
            AnalogInput7 = 8,
            /// VDD_GPIO
            VDDGPIO = 9
        ]
    ],

    pub CONFIG [
        /// Positive channel resistor control
        RESP OFFSET(0) NUMBITS(2) [
            /// Bypass resistor ladder
            Bypass = 0,
            /// Pull-down to GND
            Pulldown = 1,
            /// Pull-up to VDD_GPIO
            Pullup = 2,
            /// Set input at VDD_GPIO/2
            VDD1_2 = 3
        ],
        /// Negative channel resistor control
        RESN OFFSET(4) NUMBITS(2) [
            Bypass = 0,
            Pulldown = 1,
            Pullup = 2,
            VDD1_2 = 3
        ],
        /// Gain control
        GAIN OFFSET(8) NUMBITS(3) [
            Gain1_6 = 0,
            Gain1_5 = 1,
            Gain1_4 = 2,
            Gain1_3 = 3,
            Gain1_2 = 4,
            Gain1 = 5,
            Gain2 = 6,
            Gain4 = 7
        ],
        /// Reference control
        REFSEL OFFSET(12) NUMBITS(1) [
            /// Internal reference (0.6 V)
            Internal = 0,
            /// VDD_GPIO/4 as reference
            VDD1_4 = 1
        ],
        /// Acquisition time, the time the ADC uses to sample the input
        /// voltage
        TACQ OFFSET(16) NUMBITS(3) [
            Us3 = 0,
            Us5 = 1,
            Us10 = 2,
            Us15 = 3,
            Us20 = 4,
            Us40 = 5
        ],
        /// Enable differential mode
        MODE OFFSET(20) NUMBITS(1) [
            /// Single ended, PSELN will be ignored, negative input to ADC
            /// shorted to GND
            SE = 0,
            /// Differential
            Diff = 1
        ],
        /// Enable burst mode
        BURST OFFSET(24) NUMBITS(1) [
            Disabled = 0,
            /// Burst mode is enabled. SAADC takes 2^OVERSAMPLE number of
            /// samples as fast as it can, and sends the average to Data RAM.
            Enabled = 1
        ]
    ],

    pub LIMIT [
        /// Low level limit
        LOW OFFSET(0) NUMBITS(16) [],
        /// High level limit
        HIGH OFFSET(16) NUMBITS(16) []
    ],

    pub RESOLUTION [
        /// Set the resolution
        VAL OFFSET(0) NUMBITS(3) [
            Bit8 = 0,
            Bit10 = 1,
            Bit12 = 2,
            Bit14 = 3
        ]
    ],

    pub OVERSAMPLE [
        /// Oversample control
        OVERSAMPLE OFFSET(0) NUMBITS(4) [
            Bypass = 0,
            Over2x = 1,
            Over4x = 2,
            Over8x = 3,
            Over16x = 4,
            Over32x = 5,
            Over64x = 6,
            Over128x = 7,
            Over256x = 8
        ]
    ],

    pub SAMPLERATE [
        /// Capture and compare value. Sample rate is 16 MHz/CC
        CC OFFSET(0) NUMBITS(11) [],
        /// Select mode for sample rate control
        MODE OFFSET(12) NUMBITS(1) [
            /// Rate is controlled from SAMPLE task
            Task = 0,
            /// Rate is controlled from local timer (use CC to control the
            /// rate)
            Timers = 1
        ]
    ],

    pub MAXCNT [
        MAXCNT OFFSET(0) NUMBITS(15) []
    ]
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitfield::FieldLayout;
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn register_offsets() {
        assert_eq!(size_of::<Channel>(), 0x10);
        assert_eq!(offset_of!(SaadcRegisters, events_ch), 0x118);
        assert_eq!(offset_of!(SaadcRegisters, publish_ch), 0x198);
        assert_eq!(offset_of!(SaadcRegisters, ch), 0x510);
        assert_eq!(offset_of!(SaadcRegisters, resolution), 0x5F0);
        assert_eq!(offset_of!(SaadcRegisters, result_amount), 0x634);
    }

    #[test]
    fn channel_limit_interrupts() {
        assert_eq!(INTEN::CH0LIMITH.position(), 6);
        assert_eq!(INTEN::CH7LIMITL.mask_in_place(), 1 << 21);
    }

    #[test]
    fn single_ended_config() {
        let config: InMemoryRegister<u32, CONFIG::Register> = InMemoryRegister::new(0);
        config.write(
            CONFIG::GAIN::Gain1_6
                + CONFIG::REFSEL::Internal
                + CONFIG::TACQ::Us10
                + CONFIG::MODE::SE,
        );
        assert_eq!(config.get(), 0x0002_0000);
        assert_eq!(config.read_as_enum(CONFIG::TACQ), Some(CONFIG::TACQ::Value::Us10));
    }

    #[test]
    fn limit_halves() {
        let limit = LIMIT::LOW.val(0x8000) + LIMIT::HIGH.val(0x7FFF);
        assert_eq!(limit.value, 0x7FFF_8000);
    }
}
