// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Arm TrustZone CryptoCell 310 enable register. The CryptoCell itself is
//! driven through its own register space at `CRYPTOCELL_S + 0x1000`.

use crate::common::ENABLE_BIT;
use crate::memory_map;
use crate::StaticRef;
use tock_registers::register_structs;
use tock_registers::registers::ReadWrite;

pub const CRYPTOCELL_BASE: StaticRef<CryptocellRegisters> =
    unsafe { StaticRef::new(memory_map::CRYPTOCELL_S as *const CryptocellRegisters) };

register_structs! {
    pub CryptocellRegisters {
        (0x000 => _reserved0),
        /// Control power and clock for CRYPTOCELL subsystem
        (0x500 => pub enable: ReadWrite<u32, ENABLE_BIT::Register>),
        (0x504 => @END),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::offset_of;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(CryptocellRegisters, enable), 0x500);
        assert_eq!(CRYPTOCELL_BASE.address(), 0x5084_0000);
    }
}
