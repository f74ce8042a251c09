// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Universal asynchronous receiver/transmitter with EasyDMA (UARTE)
//!
//! UARTEn shares its address and peripheral ID with SPIMn, SPISn, TWIMn and
//! TWISn; only one of them can be enabled at a time.

use crate::common::{EVENT, PSEL, PUBLISH, SUBSCRIBE, TASK, WORD};
use crate::memory_map;
use crate::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

pub const UARTE0_BASE: StaticRef<UarteRegisters> =
    unsafe { StaticRef::new(memory_map::SERIAL0 as *const UarteRegisters) };
pub const UARTE1_BASE: StaticRef<UarteRegisters> =
    unsafe { StaticRef::new(memory_map::SERIAL1 as *const UarteRegisters) };
pub const UARTE2_BASE: StaticRef<UarteRegisters> =
    unsafe { StaticRef::new(memory_map::SERIAL2 as *const UarteRegisters) };
pub const UARTE3_BASE: StaticRef<UarteRegisters> =
    unsafe { StaticRef::new(memory_map::SERIAL3 as *const UarteRegisters) };

register_structs! {
    pub UarteRegisters {
        /// Start UART receiver
        (0x000 => pub tasks_startrx: WriteOnly<u32, TASK::Register>),
        /// Stop UART receiver
        (0x004 => pub tasks_stoprx: WriteOnly<u32, TASK::Register>),
        /// Start UART transmitter
        (0x008 => pub tasks_starttx: WriteOnly<u32, TASK::Register>),
        /// Stop UART transmitter
        (0x00C => pub tasks_stoptx: WriteOnly<u32, TASK::Register>),
        (0x010 => _reserved0),
        /// Flush RX FIFO into RX buffer
        (0x02C => pub tasks_flushrx: WriteOnly<u32, TASK::Register>),
        (0x030 => _reserved1),
        (0x080 => pub subscribe_startrx: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x084 => pub subscribe_stoprx: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x088 => pub subscribe_starttx: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x08C => pub subscribe_stoptx: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x090 => _reserved2),
        (0x0AC => pub subscribe_flushrx: ReadWrite<u32, SUBSCRIBE::Register>),
        (0x0B0 => _reserved3),
        /// CTS is activated (set low). Clear To Send.
        (0x100 => pub events_cts: ReadWrite<u32, EVENT::Register>),
        /// CTS is deactivated (set high). Not Clear To Send.
        (0x104 => pub events_ncts: ReadWrite<u32, EVENT::Register>),
        /// Data received in RXD (but potentially not yet transferred to
        /// Data RAM)
        (0x108 => pub events_rxdrdy: ReadWrite<u32, EVENT::Register>),
        (0x10C => _reserved4),
        /// Receive buffer is filled up
        (0x110 => pub events_endrx: ReadWrite<u32, EVENT::Register>),
        (0x114 => _reserved5),
        /// Data sent from TXD
        (0x11C => pub events_txdrdy: ReadWrite<u32, EVENT::Register>),
        /// Last TX byte transmitted
        (0x120 => pub events_endtx: ReadWrite<u32, EVENT::Register>),
        /// Error detected
        (0x124 => pub events_error: ReadWrite<u32, EVENT::Register>),
        (0x128 => _reserved6),
        /// Receiver timeout
        (0x144 => pub events_rxto: ReadWrite<u32, EVENT::Register>),
        (0x148 => _reserved7),
        /// UART receiver has started
        (0x14C => pub events_rxstarted: ReadWrite<u32, EVENT::Register>),
        /// UART transmitter has started
        (0x150 => pub events_txstarted: ReadWrite<u32, EVENT::Register>),
        (0x154 => _reserved8),
        /// Transmitter stopped
        (0x158 => pub events_txstopped: ReadWrite<u32, EVENT::Register>),
        (0x15C => _reserved9),
        (0x180 => pub publish_cts: ReadWrite<u32, PUBLISH::Register>),
        (0x184 => pub publish_ncts: ReadWrite<u32, PUBLISH::Register>),
        (0x188 => pub publish_rxdrdy: ReadWrite<u32, PUBLISH::Register>),
        (0x18C => _reserved10),
        (0x190 => pub publish_endrx: ReadWrite<u32, PUBLISH::Register>),
        (0x194 => _reserved11),
        (0x19C => pub publish_txdrdy: ReadWrite<u32, PUBLISH::Register>),
        (0x1A0 => pub publish_endtx: ReadWrite<u32, PUBLISH::Register>),
        (0x1A4 => pub publish_error: ReadWrite<u32, PUBLISH::Register>),
        (0x1A8 => _reserved12),
        (0x1C4 => pub publish_rxto: ReadWrite<u32, PUBLISH::Register>),
        (0x1C8 => _reserved13),
        (0x1CC => pub publish_rxstarted: ReadWrite<u32, PUBLISH::Register>),
        (0x1D0 => pub publish_txstarted: ReadWrite<u32, PUBLISH::Register>),
        (0x1D4 => _reserved14),
        (0x1D8 => pub publish_txstopped: ReadWrite<u32, PUBLISH::Register>),
        (0x1DC => _reserved15),
        /// Shortcuts between local events and tasks
        (0x200 => pub shorts: ReadWrite<u32, SHORTS::Register>),
        (0x204 => _reserved16),
        /// Enable or disable interrupt
        (0x300 => pub inten: ReadWrite<u32, INTEN::Register>),
        /// Enable interrupt
        (0x304 => pub intenset: ReadWrite<u32, INTEN::Register>),
        /// Disable interrupt
        (0x308 => pub intenclr: ReadWrite<u32, INTEN::Register>),
        (0x30C => _reserved17),
        /// Error source. Bits are cleared by writing '1' to them.
        (0x480 => pub errorsrc: ReadWrite<u32, ERRORSRC::Register>),
        (0x484 => _reserved18),
        /// Enable UART
        (0x500 => pub enable: ReadWrite<u32, ENABLE::Register>),
        (0x504 => _reserved19),
        /// Pin select for RTS signal
        (0x508 => pub psel_rts: ReadWrite<u32, PSEL::Register>),
        /// Pin select for TXD signal
        (0x50C => pub psel_txd: ReadWrite<u32, PSEL::Register>),
        /// Pin select for CTS signal
        (0x510 => pub psel_cts: ReadWrite<u32, PSEL::Register>),
        /// Pin select for RXD signal
        (0x514 => pub psel_rxd: ReadWrite<u32, PSEL::Register>),
        (0x518 => _reserved20),
        /// Baud rate. Accuracy depends on the HFCLK source selected.
        (0x524 => pub baudrate: ReadWrite<u32, BAUDRATE::Register>),
        (0x528 => _reserved21),
        /// Data pointer
        (0x534 => pub rxd_ptr: ReadWrite<u32, WORD::Register>),
        /// Maximum number of bytes in receive buffer
        (0x538 => pub rxd_maxcnt: ReadWrite<u32, MAXCNT::Register>),
        /// Number of bytes transferred in the last transaction
        (0x53C => pub rxd_amount: ReadOnly<u32, MAXCNT::Register>),
        (0x540 => _reserved22),
        /// Data pointer
        (0x544 => pub txd_ptr: ReadWrite<u32, WORD::Register>),
        /// Maximum number of bytes in transmit buffer
        (0x548 => pub txd_maxcnt: ReadWrite<u32, MAXCNT::Register>),
        /// Number of bytes transferred in the last transaction
        (0x54C => pub txd_amount: ReadOnly<u32, MAXCNT::Register>),
        (0x550 => _reserved23),
        /// Configuration of parity and hardware flow control
        (0x56C => pub config: ReadWrite<u32, CONFIG::Register>),
        (0x570 => @END),
    }
}

register_bitfields![u32,
    pub SHORTS [
        /// Shortcut between event ENDRX and task STARTRX
        ENDRX_STARTRX OFFSET(5) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        /// Shortcut between event ENDRX and task STOPRX
        ENDRX_STOPRX OFFSET(6) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ]
    ],

    /// INTEN, INTENSET and INTENCLR share one layout
    pub INTEN [
        CTS OFFSET(0) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        NCTS OFFSET(1) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        RXDRDY OFFSET(2) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        ENDRX OFFSET(4) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        TXDRDY OFFSET(7) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        ENDTX OFFSET(8) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        ERROR OFFSET(9) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        RXTO OFFSET(17) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        RXSTARTED OFFSET(19) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        TXSTARTED OFFSET(20) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        TXSTOPPED OFFSET(22) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ]
    ],

    pub ERRORSRC [
        /// Overrun error
        OVERRUN OFFSET(0) NUMBITS(1) [
            NotPresent = 0,
            Present = 1
        ],
        /// Parity error
        PARITY OFFSET(1) NUMBITS(1) [
            NotPresent = 0,
            Present = 1
        ],
        /// Framing error occurred
        FRAMING OFFSET(2) NUMBITS(1) [
            NotPresent = 0,
            Present = 1
        ],
        /// Break condition
        BREAK OFFSET(3) NUMBITS(1) [
            NotPresent = 0,
            Present = 1
        ]
    ],

    pub ENABLE [
        /// Enable or disable UARTE
        ENABLE OFFSET(0) NUMBITS(4) [
            /// Disable UARTE
            Disabled = 0,
            /// Enable UARTE
            Enabled = 8
        ]
    ],

    pub BAUDRATE [
        /// Baud rate
        BAUDRATE OFFSET(0) NUMBITS(32) [
            /// 1200 baud (actual rate: 1205)
            Baud1200 = 0x0004F000,
            /// 2400 baud (actual rate: 2396)
            Baud2400 = 0x0009D000,
            /// 4800 baud (actual rate: 4808)
            Baud4800 = 0x0013B000,
            /// 9600 baud (actual rate: 9598)
            Baud9600 = 0x00275000,
            /// 14400 baud (actual rate: 14401)
            Baud14400 = 0x003AF000,
            /// 19200 baud (actual rate: 19208)
            Baud19200 = 0x004EA000,
            /// 28800 baud (actual rate: 28777)
            Baud28800 = 0x0075C000,
            /// 31250 baud
            Baud31250 = 0x00800000,
            /// 38400 baud (actual rate: 38369)
            Baud38400 = 0x009D0000,
            /// 56000 baud (actual rate: 55944)
            Baud56000 = 0x00E50000,
            /// 57600 baud (actual rate: 57554)
            Baud57600 = 0x00EB0000,
            /// 76800 baud (actual rate: 76923)
            Baud76800 = 0x013A9000,
            /// 115200 baud (actual rate: 115108)
            Baud115200 = 0x01D60000,
            /// 230400 baud (actual rate: 231884)
            Baud230400 = 0x03B00000,
            /// 250000 baud
            Baud250000 = 0x04000000,
            /// 460800 baud (actual rate: 457143)
            Baud460800 = 0x07400000,
            /// 921600 baud (actual rate: 941176)
            Baud921600 = 0x0F000000,
            /// 1Mega baud
            Baud1M = 0x10000000
        ]
    ],

    /// RXD.MAXCNT, RXD.AMOUNT, TXD.MAXCNT and TXD.AMOUNT
    pub MAXCNT [
        /// Number of bytes
        MAXCNT OFFSET(0) NUMBITS(13) []
    ],

    pub CONFIG [
        /// Hardware flow control
        HWFC OFFSET(0) NUMBITS(1) [
            Disabled = 0,
            Enabled = 1
        ],
        /// Parity
        PARITY OFFSET(1) NUMBITS(3) [
            /// Exclude parity bit
            Excluded = 0,
            /// Include parity bit
            Included = 7
        ],
        /// Stop bits
        STOP OFFSET(4) NUMBITS(1) [
            /// One stop bit
            One = 0,
            /// Two stop bits
            Two = 1
        ],
        /// Even or odd parity type
        PARITYTYPE OFFSET(8) NUMBITS(1) [
            /// Even parity
            Even = 0,
            /// Odd parity
            Odd = 1
        ]
    ]
];

impl BAUDRATE::BAUDRATE::Value {
    /// The register setting for a baud rate in bits per second, if the
    /// peripheral supports it.
    pub fn from_bps(bps: u32) -> Option<Self> {
        match bps {
            1200 => Some(Self::Baud1200),
            2400 => Some(Self::Baud2400),
            4800 => Some(Self::Baud4800),
            9600 => Some(Self::Baud9600),
            14400 => Some(Self::Baud14400),
            19200 => Some(Self::Baud19200),
            28800 => Some(Self::Baud28800),
            31250 => Some(Self::Baud31250),
            38400 => Some(Self::Baud38400),
            56000 => Some(Self::Baud56000),
            57600 => Some(Self::Baud57600),
            76800 => Some(Self::Baud76800),
            115200 => Some(Self::Baud115200),
            230400 => Some(Self::Baud230400),
            250000 => Some(Self::Baud250000),
            460800 => Some(Self::Baud460800),
            921600 => Some(Self::Baud921600),
            1000000 => Some(Self::Baud1M),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitfield::FieldLayout;
    use core::mem::offset_of;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(UarteRegisters, tasks_flushrx), 0x02C);
        assert_eq!(offset_of!(UarteRegisters, events_txstopped), 0x158);
        assert_eq!(offset_of!(UarteRegisters, publish_txstopped), 0x1D8);
        assert_eq!(offset_of!(UarteRegisters, errorsrc), 0x480);
        assert_eq!(offset_of!(UarteRegisters, baudrate), 0x524);
        assert_eq!(offset_of!(UarteRegisters, config), 0x56C);
    }

    #[test]
    fn interrupt_bits_follow_event_offsets() {
        assert_eq!(INTEN::ENDRX.position(), (0x110 - 0x100) / 4);
        assert_eq!(INTEN::ENDTX.position(), (0x120 - 0x100) / 4);
        assert_eq!(INTEN::TXSTOPPED.position(), (0x158 - 0x100) / 4);
    }

    #[test]
    fn baud_rate_lookup() {
        assert_eq!(
            BAUDRATE::BAUDRATE::Value::from_bps(115200),
            Some(BAUDRATE::BAUDRATE::Value::Baud115200)
        );
        assert_eq!(BAUDRATE::BAUDRATE::Value::Baud115200 as u32, 0x01D6_0000);
        assert_eq!(BAUDRATE::BAUDRATE::Value::from_bps(300), None);
    }

    #[test]
    fn enable_value() {
        assert_eq!(ENABLE::ENABLE::Enabled.value, 8);
        assert_eq!(MAXCNT::MAXCNT.mask_in_place(), 0x1FFF);
    }

    #[test]
    fn odd_parity_two_stop_bits() {
        assert_eq!(CONFIG::PARITYTYPE.position(), 8);
        let cfg = CONFIG::PARITY::Included + CONFIG::STOP::Two + CONFIG::PARITYTYPE::Odd;
        assert_eq!(cfg.value, 0x11E);
    }

    #[test]
    fn interrupt_enable_values() {
        let inten = INTEN::ENDRX::Enabled + INTEN::RXTO::Enabled + INTEN::ERROR::Disabled;
        assert_eq!(inten.value, (1 << 4) | (1 << 17));
    }
}
