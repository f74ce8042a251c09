// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Header-style views of register fields.
//!
//! A `Field` stores its mask right-aligned together with a shift. Vendor
//! headers instead publish `_Pos` (the shift) and `_Msk` (the mask already
//! shifted into place); [`FieldLayout`] exposes those two numbers.

use tock_registers::fields::{Field, FieldValue};
use tock_registers::RegisterLongName;

/// Bit position and in-place mask of a register field.
pub trait FieldLayout {
    /// Bit offset of the field within its register (`_Pos`).
    fn position(&self) -> u32;

    /// Mask covering the field, shifted into position (`_Msk`).
    fn mask_in_place(&self) -> u32;

    /// Number of bits the field spans.
    fn width(&self) -> u32;
}

impl<R: RegisterLongName> FieldLayout for Field<u32, R> {
    fn position(&self) -> u32 {
        self.shift as u32
    }

    fn mask_in_place(&self) -> u32 {
        self.mask << self.shift
    }

    fn width(&self) -> u32 {
        self.mask.count_ones()
    }
}

/// The raw bits a named field value contributes to its register, the C
/// `<REGISTER>_<FIELD>_<Value>` constant shifted by `_Pos`.
pub fn value_in_place<R: RegisterLongName>(value: FieldValue<u32, R>) -> u32 {
    value.value
}

#[cfg(test)]
mod tests {
    use super::{value_in_place, FieldLayout};
    use crate::clock::{HFCLKSTAT, LFCLKSRC};
    use crate::uarte::BAUDRATE;

    #[test]
    fn single_bit_field() {
        assert_eq!(HFCLKSTAT::STATE.position(), 16);
        assert_eq!(HFCLKSTAT::STATE.mask_in_place(), 0x0001_0000);
        assert_eq!(HFCLKSTAT::STATE.width(), 1);
    }

    #[test]
    fn multi_bit_field() {
        assert_eq!(LFCLKSRC::SRC.position(), 0);
        assert_eq!(LFCLKSRC::SRC.mask_in_place(), 0x3);
        assert_eq!(LFCLKSRC::SRC.width(), 2);
    }

    #[test]
    fn full_width_field() {
        assert_eq!(BAUDRATE::BAUDRATE.position(), 0);
        assert_eq!(BAUDRATE::BAUDRATE.mask_in_place(), 0xFFFF_FFFF);
        assert_eq!(BAUDRATE::BAUDRATE.width(), 32);
    }

    #[test]
    fn named_values_are_shifted() {
        assert_eq!(value_in_place(HFCLKSTAT::STATE::Running), 0x0001_0000);
        assert_eq!(value_in_place(LFCLKSRC::SRC::LFXO), 0x2);
    }
}
