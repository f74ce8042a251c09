// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! FPU exception peripheral. It has no functional registers; the slot only
//! provides the peripheral ID that routes floating-point exceptions to the
//! NVIC (`interrupts::FPU`).

use crate::memory_map;
use crate::StaticRef;
use tock_registers::register_structs;
use tock_registers::registers::ReadOnly;

pub const FPU_BASE: StaticRef<FpuRegisters> =
    unsafe { StaticRef::new(memory_map::FPU as *const FpuRegisters) };

register_structs! {
    pub FpuRegisters {
        /// Unused
        (0x000 => pub unused: ReadOnly<u32>),
        (0x004 => @END),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interrupts;
    use crate::memory_map::PeripheralId;
    use core::mem::size_of;

    #[test]
    fn single_word_block() {
        assert_eq!(size_of::<FpuRegisters>(), 4);
        assert_eq!(
            PeripheralId::from_address(memory_map::FPU_NS),
            Ok(PeripheralId::FPU)
        );
        assert_eq!(interrupts::FPU, 44);
    }
}
