// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Pulse width modulation unit (PWM)
//!
//! Each instance drives four channels from up to two sequences of duty
//! cycle values stored in RAM.

use crate::common::{ENABLE_BIT, EVENT, PSEL, PUBLISH, SUBSCRIBE, TASK, WORD};
use crate::memory_map;
use crate::StaticRef;
use tock_registers::registers::{ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

pub const PWM0_BASE: StaticRef<PwmRegisters> =
    unsafe { StaticRef::new(memory_map::PWM0 as *const PwmRegisters) };
pub const PWM1_BASE: StaticRef<PwmRegisters> =
    unsafe { StaticRef::new(memory_map::PWM1 as *const PwmRegisters) };
pub const PWM2_BASE: StaticRef<PwmRegisters> =
    unsafe { StaticRef::new(memory_map::PWM2 as *const PwmRegisters) };
pub const PWM3_BASE: StaticRef<PwmRegisters> =
    unsafe { StaticRef::new(memory_map::PWM3 as *const PwmRegisters) };

pub const NUM_SEQUENCES: usize = 2;
pub const NUM_CHANNELS: usize = 4;

register_structs! {
    pub Sequence {
        /// Beginning address in RAM of this sequence
        (0x00 => pub ptr: ReadWrite<u32, WORD::Register>),
        /// Number of values (duty cycles) in this sequence
        (0x04 => pub cnt: ReadWrite<u32, SEQ_CNT::Register>),
        /// Number of additional PWM periods between samples loaded into
        /// compare register
        (0x08 => pub refresh: ReadWrite<u32, SEQ_REFRESH::Register>),
        /// Time added after the sequence
        (0x0C => pub enddelay: ReadWrite<u32, SEQ_ENDDELAY::Register>),
        (0x10 => _reserved0),
        (0x20 => @END),
    },

    pub PwmRegisters {
        (0x000 => _reserved0),
        /// Stops PWM pulse generation on all channels at the end of current
        /// PWM period, and stops sequence playback
        (0x004 => pub tasks_stop: WriteOnly<u32, TASK::Register>),
        /// Loads the first PWM value on all enabled channels from sequence
        /// n, and starts playing that sequence
        (0x008 => pub tasks_seqstart: [WriteOnly<u32, TASK::Register>; NUM_SEQUENCES]),
        /// Steps by one value in the current sequence on all enabled
        /// channels if DECODER.MODE=NextStep
        (0x010 => pub tasks_nextstep: WriteOnly<u32, TASK::Register>),
        (0x014 => _reserved1),
        (0x084 => pub subscribe_stop: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x088 => pub subscribe_seqstart: [ReadWrite<u32, SUBSCRIBE::Register>; NUM_SEQUENCES]),
        (0x090 => pub subscribe_nextstep: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x094 => _reserved2),
        /// Response to STOP task, emitted when PWM pulses are no longer
        /// generated
        (0x104 => pub events_stopped: ReadWrite<u32, EVENT::Register>),
        /// First PWM period started on sequence n
        (0x108 => pub events_seqstarted: [ReadWrite<u32, EVENT::Register>; NUM_SEQUENCES]),
        /// Emitted at end of every sequence n, when last value from RAM has
        /// been applied to wave counter
        (0x110 => pub events_seqend: [ReadWrite<u32, EVENT::Register>; NUM_SEQUENCES]),
        /// Emitted at the end of each PWM period
        (0x118 => pub events_pwmperiodend: ReadWrite<u32, EVENT::Register>),
        /// Concatenated sequences have been played the amount of times
        /// defined in LOOP.CNT
        (0x11C => pub events_loopsdone: ReadWrite<u32, EVENT::Register>),
        (0x120 => _reserved3),
        (0x184 => pub publish_stopped: ReadWrite<u32, PUBLISH::Register>),
        (0x188 => pub publish_seqstarted: [ReadWrite<u32, PUBLISH::Register>; NUM_SEQUENCES]),
        (0x190 => pub publish_seqend: [ReadWrite<u32, PUBLISH::Register>; NUM_SEQUENCES]),
        (0x198 => pub publish_pwmperiodend: ReadWrite<u32, PUBLISH::Register>),
        (0x19C => pub publish_loopsdone: ReadWrite<u32, PUBLISH::Register>),
        (0x1A0 => _reserved4),
        /// Shortcuts between local events and tasks
        (0x200 => pub shorts: ReadWrite<u32, SHORTS::Register>),
        (0x204 => _reserved5),
        /// Enable or disable interrupt
        (0x300 => pub inten: ReadWrite<u32, INTEN::Register>),
        /// Enable interrupt
        (0x304 => pub intenset: ReadWrite<u32, INTEN::Register>),
        /// Disable interrupt
        (0x308 => pub intenclr: ReadWrite<u32, INTEN::Register>),
        (0x30C => _reserved6),
        /// PWM module enable register
        (0x500 => pub enable: ReadWrite<u32, ENABLE_BIT::Register>),
        /// Selects operating mode of the wave counter
        (0x504 => pub mode: ReadWrite<u32, MODE::Register>),
        /// Value up to which the pulse generator counter counts
        (0x508 => pub countertop: ReadWrite<u32, COUNTERTOP::Register>),
        /// Configuration for PWM_CLK
        (0x50C => pub prescaler: ReadWrite<u32, PRESCALER::Register>),
        /// Configuration of the decoder
        (0x510 => pub decoder: ReadWrite<u32, DECODER::Register>),
        /// Number of playbacks of a loop
        (0x514 => pub loop_: ReadWrite<u32, LOOP::Register>),
        (0x518 => _reserved7),
        (0x520 => pub seq: [Sequence; NUM_SEQUENCES]),
        /// Output pin select for PWM channel n
        (0x560 => pub psel_out: [ReadWrite<u32, PSEL::Register>; NUM_CHANNELS]),
        (0x570 => @END),
    }
}

register_bitfields![u32,
    pub SHORTS [
        /// Shortcut between event SEQEND[0] and task STOP
        SEQEND0_STOP OFFSET(0) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        /// Shortcut between event SEQEND[1] and task STOP
        SEQEND1_STOP OFFSET(1) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        /// Shortcut between event LOOPSDONE and task SEQSTART[0]
        LOOPSDONE_SEQSTART0 OFFSET(2) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        /// Shortcut between event LOOPSDONE and task SEQSTART[1]
        LOOPSDONE_SEQSTART1 OFFSET(3) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        /// Shortcut between event LOOPSDONE and task STOP
        LOOPSDONE_STOP OFFSET(4) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ]
    ],

    pub INTEN [
        STOPPED OFFSET(1) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        SEQSTARTED0 OFFSET(2) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        SEQSTARTED1 OFFSET(3) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        SEQEND0 OFFSET(4) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        SEQEND1 OFFSET(5) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        PWMPERIODEND OFFSET(6) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        LOOPSDONE OFFSET(7) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ]
    ],

    pub MODE [
        /// Selects up mode or up-and-down mode for the counter
        UPDOWN OFFSET(0) NUMBITS(1) [
            /// Up counter, edge-aligned PWM duty cycle
            Up = 0,
            /// Up and down counter, center-aligned PWM duty cycle
            UpAndDown = 1
        ]
    ],

    pub COUNTERTOP [
        /// Value up to which the pulse generator counter counts. This
        /// register is ignored when DECODER.MODE=WaveForm and only values
        /// from RAM are used.
        COUNTERTOP OFFSET(0) NUMBITS(15) []
    ],

    pub PRESCALER [
        /// Prescaler of PWM_CLK
        PRESCALER OFFSET(0) NUMBITS(3) [
            /// Divide by 1 (16 MHz)
            DIV_1 = 0,
            /// Divide by 2 (8 MHz)
            DIV_2 = 1,
            /// Divide by 4 (4 MHz)
            DIV_4 = 2,
            /// Divide by 8 (2 MHz)
            DIV_8 = 3,
            /// Divide by 16 (1 MHz)
            DIV_16 = 4,
            /// Divide by 32 (500 kHz)
            DIV_32 = 5,
            /// Divide by 64 (250 kHz)
            DIV_64 = 6,
            /// Divide by 128 (125 kHz)
            DIV_128 = 7
        ]
    ],

    pub DECODER [
        /// How a sequence is read from RAM and spread to the compare
        /// register
        LOAD OFFSET(0) NUMBITS(2) [
            /// 1st half word (16-bit) used in all PWM channels 0..3
            Common = 0,
            /// 1st half word (16-bit) used in channel 0..1; 2nd word in
            /// channel 2..3
            Grouped = 1,
            /// 1st half word (16-bit) in ch.0; 2nd in ch.1; ...; 4th in ch.3
            Individual = 2,
            /// 1st half word (16-bit) in ch.0; 2nd in ch.1; ...; 4th in
            /// COUNTERTOP
            WaveForm = 3
        ],
        /// Selects source for advancing the active sequence
        MODE OFFSET(8) NUMBITS(1) [
            /// SEQ[n].REFRESH is used to determine loading internal compare
            /// registers
            RefreshCount = 0,
            /// NEXTSTEP task causes a new value to be loaded to internal
            /// compare registers
            NextStep = 1
        ]
    ],

    pub LOOP [
        /// Number of playbacks of pattern cycles
        CNT OFFSET(0) NUMBITS(16) [
            /// Looping disabled (stop at the end of the sequence)
            Disabled = 0
        ]
    ],

    pub SEQ_CNT [
        /// Number of values (duty cycles) in this sequence
        CNT OFFSET(0) NUMBITS(15) [
            /// Sequence is disabled, and shall not be started as it is
            /// empty
            Disabled = 0
        ]
    ],

    pub SEQ_REFRESH [
        /// Number of additional PWM periods between samples loaded into
        /// compare register (load every REFRESH.CNT+1 PWM periods)
        CNT OFFSET(0) NUMBITS(24) [
            /// Update every PWM period
            Continuous = 0
        ]
    ],

    pub SEQ_ENDDELAY [
        /// Time added after the sequence in PWM periods
        CNT OFFSET(0) NUMBITS(24) []
    ]
];

/// Layout of a single 16-bit duty cycle value in a sequence buffer in RAM.
pub mod duty_cycle {
    /// Duty cycle setting
    pub const COMPARE_MASK: u16 = 0x7FFF;
    /// Edge polarity of the first edge of the PWM period
    pub const POLARITY_FALLING_EDGE: u16 = 1 << 15;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitfield::FieldLayout;
    use core::mem::{offset_of, size_of};

    #[test]
    fn register_offsets() {
        assert_eq!(size_of::<Sequence>(), 0x20);
        assert_eq!(offset_of!(PwmRegisters, tasks_seqstart), 0x008);
        assert_eq!(offset_of!(PwmRegisters, events_loopsdone), 0x11C);
        assert_eq!(offset_of!(PwmRegisters, loop_), 0x514);
        assert_eq!(offset_of!(PwmRegisters, seq), 0x520);
        assert_eq!(offset_of!(PwmRegisters, psel_out), 0x560);
    }

    #[test]
    fn decoder_layout() {
        assert_eq!(DECODER::MODE.position(), 8);
        let decoder = DECODER::LOAD::Individual + DECODER::MODE::NextStep;
        assert_eq!(decoder.value, 0x102);
        assert_eq!(COUNTERTOP::COUNTERTOP.mask_in_place(), 0x7FFF);
    }

    #[test]
    fn duty_cycle_bits() {
        assert_eq!(duty_cycle::COMPARE_MASK | duty_cycle::POLARITY_FALLING_EDGE, 0xFFFF);
    }
}
