// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Inter-IC Sound (I2S)

use crate::common::{ENABLE_BIT, EVENT, PSEL, PUBLISH, SUBSCRIBE, TASK, WORD};
use crate::memory_map;
use crate::StaticRef;
use tock_registers::registers::{ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

pub const I2S_BASE: StaticRef<I2sRegisters> =
    unsafe { StaticRef::new(memory_map::I2S as *const I2sRegisters) };

register_structs! {
    pub I2sRegisters {
        /// Starts continuous I2S transfer. Also starts MCK generator when
        /// this is enabled.
        (0x000 => pub tasks_start: WriteOnly<u32, TASK::Register>),
        /// Stops I2S transfer. Also stops MCK generator. Triggering this
        /// task will cause the STOPPED event to be generated.
        (0x004 => pub tasks_stop: WriteOnly<u32, TASK::Register>),
        (0x008 => _reserved0),
        (0x080 => pub subscribe_start: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x084 => pub subscribe_stop: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x088 => _reserved1),
        /// The RXD.PTR register has been copied to internal double-buffers
        (0x104 => pub events_rxptrupd: ReadWrite<u32, EVENT::Register>),
        /// I2S transfer stopped
        (0x108 => pub events_stopped: ReadWrite<u32, EVENT::Register>),
        (0x10C => _reserved2),
        /// The TXD.PTR register has been copied to internal double-buffers
        (0x114 => pub events_txptrupd: ReadWrite<u32, EVENT::Register>),
        (0x118 => _reserved3),
        (0x184 => pub publish_rxptrupd: ReadWrite<u32, PUBLISH::Register>),
        (0x188 => pub publish_stopped: ReadWrite<u32, PUBLISH::Register>),
        (0x18C => _reserved4),
        (0x194 => pub publish_txptrupd: ReadWrite<u32, PUBLISH::Register>),
        (0x198 => _reserved5),
        /// Enable or disable interrupt
        (0x300 => pub inten: ReadWrite<u32, INTEN::Register>),
        /// Enable interrupt
        (0x304 => pub intenset: ReadWrite<u32, INTEN::Register>),
        /// Disable interrupt
        (0x308 => pub intenclr: ReadWrite<u32, INTEN::Register>),
        (0x30C => _reserved6),
        /// Enable I2S module
        (0x500 => pub enable: ReadWrite<u32, ENABLE_BIT::Register>),
        /// I2S mode
        (0x504 => pub config_mode: ReadWrite<u32, MODE::Register>),
        /// Reception (RX) enable
        (0x508 => pub config_rxen: ReadWrite<u32, ENABLE_BIT::Register>),
        /// Transmission (TX) enable
        (0x50C => pub config_txen: ReadWrite<u32, ENABLE_BIT::Register>),
        /// Master clock generator enable
        (0x510 => pub config_mcken: ReadWrite<u32, ENABLE_BIT::Register>),
        /// Master clock generator frequency
        (0x514 => pub config_mckfreq: ReadWrite<u32, MCKFREQ::Register>),
        /// MCK / LRCK ratio
        (0x518 => pub config_ratio: ReadWrite<u32, RATIO::Register>),
        /// Sample width
        (0x51C => pub config_swidth: ReadWrite<u32, SWIDTH::Register>),
        /// Alignment of sample within a frame
        (0x520 => pub config_align: ReadWrite<u32, ALIGN::Register>),
        /// Frame format
        (0x524 => pub config_format: ReadWrite<u32, FORMAT::Register>),
        /// Enable channels
        (0x528 => pub config_channels: ReadWrite<u32, CHANNELS::Register>),
        (0x52C => _reserved7),
        /// Receive buffer RAM start address
        (0x538 => pub rxd_ptr: ReadWrite<u32, WORD::Register>),
        (0x53C => _reserved8),
        /// Transmit buffer RAM start address
        (0x540 => pub txd_ptr: ReadWrite<u32, WORD::Register>),
        (0x544 => _reserved9),
        /// Size of RXD and TXD buffers
        (0x550 => pub rxtxd_maxcnt: ReadWrite<u32, MAXCNT::Register>),
        (0x554 => _reserved10),
        /// Pin select for MCK signal
        (0x560 => pub psel_mck: ReadWrite<u32, PSEL::Register>),
        /// Pin select for SCK signal
        (0x564 => pub psel_sck: ReadWrite<u32, PSEL::Register>),
        /// Pin select for LRCK signal
        (0x568 => pub psel_lrck: ReadWrite<u32, PSEL::Register>),
        /// Pin select for SDIN signal
        (0x56C => pub psel_sdin: ReadWrite<u32, PSEL::Register>),
        /// Pin select for SDOUT signal
        (0x570 => pub psel_sdout: ReadWrite<u32, PSEL::Register>),
        (0x574 => @END),
    }
}

register_bitfields![u32,
    /// INTEN, INTENSET and INTENCLR share one layout
    pub INTEN [
        /// Interrupt for event RXPTRUPD
        RXPTRUPD OFFSET(1) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        /// Interrupt for event STOPPED
        STOPPED OFFSET(2) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        /// Interrupt for event TXPTRUPD
        TXPTRUPD OFFSET(5) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ]
    ],

    pub MODE [
        /// I2S mode
        MODE OFFSET(0) NUMBITS(1) [
            /// Master mode. SCK and LRCK generated from internal master
            /// clock (MCK) and output on pins defined by PSEL.xxx.
            Master = 0,
            /// Slave mode. SCK and LRCK generated by external master and
            /// received on pins defined by PSEL.xxx.
            Slave = 1
        ]
    ],

    pub MCKFREQ [
        /// Master clock generator frequency
        MCKFREQ OFFSET(0) NUMBITS(32) [
            /// 32 MHz / 8 = 4.0 MHz
            M32Div8 = 0x20000000,
            /// 32 MHz / 10 = 3.2 MHz
            M32Div10 = 0x18000000,
            /// 32 MHz / 11 = 2.9090909 MHz
            M32Div11 = 0x16000000,
            /// 32 MHz / 15 = 2.1333333 MHz
            M32Div15 = 0x11000000,
            /// 32 MHz / 16 = 2.0 MHz
            M32Div16 = 0x10000000,
            /// 32 MHz / 21 = 1.5238095 MHz
            M32Div21 = 0x0C000000,
            /// 32 MHz / 23 = 1.3913043 MHz
            M32Div23 = 0x0B000000,
            /// 32 MHz / 30 = 1.0666667 MHz
            M32Div30 = 0x08800000,
            /// 32 MHz / 31 = 1.0322581 MHz
            M32Div31 = 0x08400000,
            /// 32 MHz / 32 = 1.0 MHz
            M32Div32 = 0x08000000,
            /// 32 MHz / 42 = 0.7619048 MHz
            M32Div42 = 0x06000000,
            /// 32 MHz / 63 = 0.5079365 MHz
            M32Div63 = 0x04100000,
            /// 32 MHz / 125 = 0.256 MHz
            M32Div125 = 0x020C0000
        ]
    ],

    pub RATIO [
        /// MCK / LRCK ratio
        RATIO OFFSET(0) NUMBITS(4) [
            /// LRCK = MCK / 32
            X32 = 0,
            /// LRCK = MCK / 48
            X48 = 1,
            /// LRCK = MCK / 64
            X64 = 2,
            /// LRCK = MCK / 96
            X96 = 3,
            /// LRCK = MCK / 128
            X128 = 4,
            /// LRCK = MCK / 192
            X192 = 5,
            /// LRCK = MCK / 256
            X256 = 6,
            /// LRCK = MCK / 384
            X384 = 7,
            /// LRCK = MCK / 512
            X512 = 8
        ]
    ],

    pub SWIDTH [
        /// Sample width
        SWIDTH OFFSET(0) NUMBITS(2) [
            /// 8 bit
            Bit8 = 0,
            /// 16 bit
            Bit16 = 1,
            /// 24 bit
            Bit24 = 2
        ]
    ],

    pub ALIGN [
        /// Alignment of sample within a frame
        ALIGN OFFSET(0) NUMBITS(1) [
            /// Left-aligned
            Left = 0,
            /// Right-aligned
            Right = 1
        ]
    ],

    pub FORMAT [
        /// Frame format
        FORMAT OFFSET(0) NUMBITS(1) [
            /// Original I2S format
            I2S = 0,
            /// Alternate (left- or right-aligned) format
            Aligned = 1
        ]
    ],

    pub CHANNELS [
        /// Enable channels
        CHANNELS OFFSET(0) NUMBITS(2) [
            /// Stereo
            Stereo = 0,
            /// Left only
            Left = 1,
            /// Right only
            Right = 2
        ]
    ],

    pub MAXCNT [
        /// Size of RXD and TXD buffers in number of 32 bit words
        MAXCNT OFFSET(0) NUMBITS(14) []
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
        assert_eq!(offset_of!(I2sRegisters, events_rxptrupd), 0x104);
        assert_eq!(offset_of!(I2sRegisters, events_txptrupd), 0x114);
        assert_eq!(offset_of!(I2sRegisters, publish_txptrupd), 0x194);
        assert_eq!(offset_of!(I2sRegisters, config_mode), 0x504);
        assert_eq!(offset_of!(I2sRegisters, config_channels), 0x528);
        assert_eq!(offset_of!(I2sRegisters, rxd_ptr), 0x538);
        assert_eq!(offset_of!(I2sRegisters, txd_ptr), 0x540);
        assert_eq!(offset_of!(I2sRegisters, rxtxd_maxcnt), 0x550);
        assert_eq!(offset_of!(I2sRegisters, psel_sdout), 0x570);
    }

    #[test]
    fn interrupt_bits_follow_event_offsets() {
        assert_eq!(INTEN::RXPTRUPD.position(), (0x104 - 0x100) / 4);
        assert_eq!(INTEN::STOPPED.position(), (0x108 - 0x100) / 4);
        assert_eq!(INTEN::TXPTRUPD.position(), (0x114 - 0x100) / 4);
    }

    #[test]
    fn master_clock_setting() {
        assert_eq!(MCKFREQ::MCKFREQ::Value::M32Div8 as u32, 0x2000_0000);
        let ratio = LocalRegisterCopy::<u32, RATIO::Register>::new(6);
        assert_eq!(
            ratio.read_as_enum(RATIO::RATIO),
            Some(RATIO::RATIO::Value::X256)
        );
        assert_eq!(SWIDTH::SWIDTH::Bit24.value, 2);
        assert_eq!(MAXCNT::MAXCNT.mask_in_place(), 0x3FFF);
    }
}
