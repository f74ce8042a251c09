// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Bitfields shared by every peripheral.
//!
//! All nRF9160 peripherals expose tasks, events and their DPPI
//! subscribe/publish registers with the same layout, and every serial
//! peripheral uses the same pin-select encoding.

use tock_registers::register_bitfields;

register_bitfields![u32,
    /// Task trigger register (`TASKS_*`)
    pub TASK [
        /// Trigger the task
        TASK OFFSET(0) NUMBITS(1) [
            Trigger = 1
        ]
    ],

    /// Event register (`EVENTS_*`)
    pub EVENT [
        EVENT OFFSET(0) NUMBITS(1) [
            /// Event not generated
            NotGenerated = 0,
            /// Event generated
            Generated = 1
        ]
    ],

    /// DPPI subscribe configuration for a task (`SUBSCRIBE_*`)
    pub SUBSCRIBE [
        /// DPPI channel that the task will subscribe to
        CHIDX OFFSET(0) NUMBITS(4) [],
        EN OFFSET(31) NUMBITS(1) [
            /// Disable subscription
            Disabled = 0,
            /// Enable subscription
            Enabled = 1
        ]
    ],

    /// DPPI publish configuration for an event (`PUBLISH_*`)
    pub PUBLISH [
        /// DPPI channel that the event will publish to
        CHIDX OFFSET(0) NUMBITS(4) [],
        EN OFFSET(31) NUMBITS(1) [
            /// Disable publishing
            Disabled = 0,
            /// Enable publishing
            Enabled = 1
        ]
    ],

    /// Pin select register (`PSEL.*`)
    pub PSEL [
        /// Pin number
        PIN OFFSET(0) NUMBITS(5) [],
        /// Connection
        CONNECT OFFSET(31) NUMBITS(1) [
            /// Connect
            Connected = 0,
            /// Disconnect
            Disconnected = 1
        ]
    ],

    /// Single bit enable register
    pub ENABLE_BIT [
        ENABLE OFFSET(0) NUMBITS(1) [
            /// Disable
            Disabled = 0,
            /// Enable
            Enabled = 1
        ]
    ],

    /// EasyDMA list type (`RXD.LIST` / `TXD.LIST`)
    pub LIST [
        /// List type
        LIST OFFSET(0) NUMBITS(2) [
            /// Disable EasyDMA list
            Disabled = 0,
            /// Use array list
            ArrayList = 1
        ]
    ],

    /// Full-width word (pointers, amounts and raw values)
    pub WORD [
        VALUE OFFSET(0) NUMBITS(32) []
    ]
];

#[cfg(test)]
mod tests {
    use super::{EVENT, PSEL, SUBSCRIBE};
    use crate::bitfield::FieldLayout;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn dppi_channel_layout() {
        assert_eq!(SUBSCRIBE::CHIDX.mask_in_place(), 0xF);
        assert_eq!(SUBSCRIBE::EN.position(), 31);
        assert_eq!(SUBSCRIBE::EN::Enabled.value, 0x8000_0000);
        let sub = SUBSCRIBE::CHIDX.val(3) + SUBSCRIBE::EN::Enabled;
        assert_eq!(sub.value, 0x8000_0003);
    }

    #[test]
    fn event_decoding() {
        let ev = LocalRegisterCopy::<u32, EVENT::Register>::new(1);
        assert_eq!(
            ev.read_as_enum(EVENT::EVENT),
            Some(EVENT::EVENT::Value::Generated)
        );
    }

    #[test]
    fn psel_reset_value_is_disconnected() {
        let psel = LocalRegisterCopy::<u32, PSEL::Register>::new(0xFFFF_FFFF);
        assert!(psel.matches_all(PSEL::CONNECT::Disconnected));
        assert_eq!(psel.read(PSEL::PIN), 31);
    }
}
