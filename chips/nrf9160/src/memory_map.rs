// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Peripheral base addresses and IDs.
//!
//! Every peripheral is mapped twice: once in the secure region
//! (`0x5xxx_xxxx`) and once in the non-secure region (`0x4xxx_xxxx`). The two
//! aliases differ only in address bit 28. The peripheral ID, which is also
//! the SPU `PERIPHID[n]` index and the NVIC interrupt number, is bits 12..20
//! of the address.

use crate::ErrorCode;

/// Address bit separating the secure and non-secure alias.
pub const SECURE_ALIAS_BIT: usize = 1 << 28;

pub const FICR_S: usize = 0x00FF_0000;
pub const UICR_S: usize = 0x00FF_8000;

pub const SPU_S: usize = 0x5000_3000;
pub const REGULATORS_NS: usize = 0x4000_4000;
pub const REGULATORS_S: usize = 0x5000_4000;
pub const CLOCK_NS: usize = 0x4000_5000;
pub const CLOCK_S: usize = 0x5000_5000;
pub const POWER_NS: usize = 0x4000_5000;
pub const POWER_S: usize = 0x5000_5000;
pub const CTRL_AP_PERI_S: usize = 0x5000_6000;

// SPIM, SPIS, TWIM, TWIS and UARTE instance n share one address.
pub const SERIAL0_NS: usize = 0x4000_8000;
pub const SERIAL0_S: usize = 0x5000_8000;
pub const SERIAL1_NS: usize = 0x4000_9000;
pub const SERIAL1_S: usize = 0x5000_9000;
pub const SERIAL2_NS: usize = 0x4000_A000;
pub const SERIAL2_S: usize = 0x5000_A000;
pub const SERIAL3_NS: usize = 0x4000_B000;
pub const SERIAL3_S: usize = 0x5000_B000;

pub const GPIOTE0_S: usize = 0x5000_D000;
pub const SAADC_NS: usize = 0x4000_E000;
pub const SAADC_S: usize = 0x5000_E000;
pub const TIMER0_NS: usize = 0x4000_F000;
pub const TIMER0_S: usize = 0x5000_F000;
pub const TIMER1_NS: usize = 0x4001_0000;
pub const TIMER1_S: usize = 0x5001_0000;
pub const TIMER2_NS: usize = 0x4001_1000;
pub const TIMER2_S: usize = 0x5001_1000;
pub const RTC0_NS: usize = 0x4001_4000;
pub const RTC0_S: usize = 0x5001_4000;
pub const RTC1_NS: usize = 0x4001_5000;
pub const RTC1_S: usize = 0x5001_5000;
pub const DPPIC_NS: usize = 0x4001_7000;
pub const DPPIC_S: usize = 0x5001_7000;
pub const WDT_NS: usize = 0x4001_8000;
pub const WDT_S: usize = 0x5001_8000;
pub const EGU0_NS: usize = 0x4001_B000;
pub const EGU0_S: usize = 0x5001_B000;
pub const EGU1_NS: usize = 0x4001_C000;
pub const EGU1_S: usize = 0x5001_C000;
pub const EGU2_NS: usize = 0x4001_D000;
pub const EGU2_S: usize = 0x5001_D000;
pub const EGU3_NS: usize = 0x4001_E000;
pub const EGU3_S: usize = 0x5001_E000;
pub const EGU4_NS: usize = 0x4001_F000;
pub const EGU4_S: usize = 0x5001_F000;
pub const EGU5_NS: usize = 0x4002_0000;
pub const EGU5_S: usize = 0x5002_0000;
pub const PWM0_NS: usize = 0x4002_1000;
pub const PWM0_S: usize = 0x5002_1000;
pub const PWM1_NS: usize = 0x4002_2000;
pub const PWM1_S: usize = 0x5002_2000;
pub const PWM2_NS: usize = 0x4002_3000;
pub const PWM2_S: usize = 0x5002_3000;
pub const PWM3_NS: usize = 0x4002_4000;
pub const PWM3_S: usize = 0x5002_4000;
pub const PDM_NS: usize = 0x4002_6000;
pub const PDM_S: usize = 0x5002_6000;
pub const I2S_NS: usize = 0x4002_8000;
pub const I2S_S: usize = 0x5002_8000;
pub const IPC_NS: usize = 0x4002_A000;
pub const IPC_S: usize = 0x5002_A000;
pub const FPU_NS: usize = 0x4002_C000;
pub const FPU_S: usize = 0x5002_C000;
pub const GPIOTE1_NS: usize = 0x4003_1000;
pub const KMU_NS: usize = 0x4003_9000;
pub const KMU_S: usize = 0x5003_9000;
pub const NVMC_NS: usize = 0x4003_9000;
pub const NVMC_S: usize = 0x5003_9000;
pub const VMC_NS: usize = 0x4003_A000;
pub const VMC_S: usize = 0x5003_A000;
pub const CRYPTOCELL_S: usize = 0x5084_0000;
pub const P0_NS: usize = 0x4084_2500;
pub const P0_S: usize = 0x5084_2500;

/// Trace and debug control, on the private peripheral bus.
pub const TAD_S: usize = 0xE008_0000;

/// Pick the alias selected by the `nonsecure` feature.
const fn select(secure: usize, nonsecure: usize) -> usize {
    if cfg!(feature = "nonsecure") {
        nonsecure
    } else {
        secure
    }
}

pub const REGULATORS: usize = select(REGULATORS_S, REGULATORS_NS);
pub const CLOCK: usize = select(CLOCK_S, CLOCK_NS);
pub const POWER: usize = select(POWER_S, POWER_NS);
pub const SERIAL0: usize = select(SERIAL0_S, SERIAL0_NS);
pub const SERIAL1: usize = select(SERIAL1_S, SERIAL1_NS);
pub const SERIAL2: usize = select(SERIAL2_S, SERIAL2_NS);
pub const SERIAL3: usize = select(SERIAL3_S, SERIAL3_NS);
pub const SAADC: usize = select(SAADC_S, SAADC_NS);
pub const TIMER0: usize = select(TIMER0_S, TIMER0_NS);
pub const TIMER1: usize = select(TIMER1_S, TIMER1_NS);
pub const TIMER2: usize = select(TIMER2_S, TIMER2_NS);
pub const RTC0: usize = select(RTC0_S, RTC0_NS);
pub const RTC1: usize = select(RTC1_S, RTC1_NS);
pub const DPPIC: usize = select(DPPIC_S, DPPIC_NS);
pub const WDT: usize = select(WDT_S, WDT_NS);
pub const EGU0: usize = select(EGU0_S, EGU0_NS);
pub const EGU1: usize = select(EGU1_S, EGU1_NS);
pub const EGU2: usize = select(EGU2_S, EGU2_NS);
pub const EGU3: usize = select(EGU3_S, EGU3_NS);
pub const EGU4: usize = select(EGU4_S, EGU4_NS);
pub const EGU5: usize = select(EGU5_S, EGU5_NS);
pub const PWM0: usize = select(PWM0_S, PWM0_NS);
pub const PWM1: usize = select(PWM1_S, PWM1_NS);
pub const PWM2: usize = select(PWM2_S, PWM2_NS);
pub const PWM3: usize = select(PWM3_S, PWM3_NS);
pub const PDM: usize = select(PDM_S, PDM_NS);
pub const I2S: usize = select(I2S_S, I2S_NS);
pub const IPC: usize = select(IPC_S, IPC_NS);
pub const FPU: usize = select(FPU_S, FPU_NS);
pub const NVMC: usize = select(NVMC_S, NVMC_NS);
pub const VMC: usize = select(VMC_S, VMC_NS);
pub const P0: usize = select(P0_S, P0_NS);

/// Peripheral IDs, as used by `SPU.PERIPHID[n]` and the NVIC.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PeripheralId {
    SPU = 3,
    REGULATORS = 4,
    CLOCK_POWER = 5,
    CTRL_AP_PERI = 6,
    SERIAL0 = 8,
    SERIAL1 = 9,
    SERIAL2 = 10,
    SERIAL3 = 11,
    GPIOTE0 = 13,
    SAADC = 14,
    TIMER0 = 15,
    TIMER1 = 16,
    TIMER2 = 17,
    RTC0 = 20,
    RTC1 = 21,
    DPPIC = 23,
    WDT = 24,
    EGU0 = 27,
    EGU1 = 28,
    EGU2 = 29,
    EGU3 = 30,
    EGU4 = 31,
    EGU5 = 32,
    PWM0 = 33,
    PWM1 = 34,
    PWM2 = 35,
    PWM3 = 36,
    PDM = 38,
    I2S = 40,
    IPC = 42,
    FPU = 44,
    GPIOTE1 = 49,
    KMU_NVMC = 57,
    VMC = 58,
    CRYPTOCELL = 64,
    GPIO = 66,
}

impl TryFrom<u8> for PeripheralId {
    type Error = ErrorCode;

    fn try_from(id: u8) -> Result<PeripheralId, ErrorCode> {
        match id {
            3 => Ok(PeripheralId::SPU),
            4 => Ok(PeripheralId::REGULATORS),
            5 => Ok(PeripheralId::CLOCK_POWER),
            6 => Ok(PeripheralId::CTRL_AP_PERI),
            8 => Ok(PeripheralId::SERIAL0),
            9 => Ok(PeripheralId::SERIAL1),
            10 => Ok(PeripheralId::SERIAL2),
            11 => Ok(PeripheralId::SERIAL3),
            13 => Ok(PeripheralId::GPIOTE0),
            14 => Ok(PeripheralId::SAADC),
            15 => Ok(PeripheralId::TIMER0),
            16 => Ok(PeripheralId::TIMER1),
            17 => Ok(PeripheralId::TIMER2),
            20 => Ok(PeripheralId::RTC0),
            21 => Ok(PeripheralId::RTC1),
            23 => Ok(PeripheralId::DPPIC),
            24 => Ok(PeripheralId::WDT),
            27 => Ok(PeripheralId::EGU0),
            28 => Ok(PeripheralId::EGU1),
            29 => Ok(PeripheralId::EGU2),
            30 => Ok(PeripheralId::EGU3),
            31 => Ok(PeripheralId::EGU4),
            32 => Ok(PeripheralId::EGU5),
            33 => Ok(PeripheralId::PWM0),
            34 => Ok(PeripheralId::PWM1),
            35 => Ok(PeripheralId::PWM2),
            36 => Ok(PeripheralId::PWM3),
            38 => Ok(PeripheralId::PDM),
            40 => Ok(PeripheralId::I2S),
            42 => Ok(PeripheralId::IPC),
            44 => Ok(PeripheralId::FPU),
            49 => Ok(PeripheralId::GPIOTE1),
            57 => Ok(PeripheralId::KMU_NVMC),
            58 => Ok(PeripheralId::VMC),
            64 => Ok(PeripheralId::CRYPTOCELL),
            66 => Ok(PeripheralId::GPIO),
            _ => Err(ErrorCode::NODEVICE),
        }
    }
}

impl PeripheralId {
    /// Identify the peripheral that owns `addr`.
    ///
    /// Both aliases are accepted. Addresses outside the APB and AHB
    /// peripheral windows return `INVAL`; unused slots return `NODEVICE`.
    pub fn from_address(addr: usize) -> Result<PeripheralId, ErrorCode> {
        if addr & !(SECURE_ALIAS_BIT | 0x0FFF_FFFF) != 0x4000_0000 {
            return Err(ErrorCode::INVAL);
        }
        let offset = addr & 0x0FFF_FFFF;
        let in_apb = offset < 0x0004_0000;
        let in_ahb = (0x0084_0000..0x0085_0000).contains(&offset);
        if !(in_apb || in_ahb) {
            return Err(ErrorCode::INVAL);
        }
        PeripheralId::try_from(((offset >> 12) & 0xFF) as u8)
    }

    /// Peripherals with no non-secure alias.
    pub fn is_secure_only(self) -> bool {
        matches!(
            self,
            PeripheralId::SPU
                | PeripheralId::CTRL_AP_PERI
                | PeripheralId::GPIOTE0
                | PeripheralId::CRYPTOCELL
        )
    }
}

/// Whether `addr` lies in the secure alias.
pub const fn is_secure_address(addr: usize) -> bool {
    addr & SECURE_ALIAS_BIT != 0
}

/// The secure alias of a peripheral address.
pub const fn secure_alias(addr: usize) -> usize {
    addr | SECURE_ALIAS_BIT
}

/// The non-secure alias of a peripheral address.
pub const fn nonsecure_alias(addr: usize) -> usize {
    addr & !SECURE_ALIAS_BIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_differ_in_bit_28() {
        assert_eq!(secure_alias(CLOCK_NS), CLOCK_S);
        assert_eq!(nonsecure_alias(P0_S), P0_NS);
        assert!(is_secure_address(SPU_S));
        assert!(!is_secure_address(SERIAL0_NS));
    }

    #[test]
    fn id_from_address() {
        assert_eq!(PeripheralId::from_address(SPU_S), Ok(PeripheralId::SPU));
        assert_eq!(
            PeripheralId::from_address(CLOCK_NS),
            Ok(PeripheralId::CLOCK_POWER)
        );
        assert_eq!(
            PeripheralId::from_address(SERIAL2_S + 0x524),
            Ok(PeripheralId::SERIAL2)
        );
        assert_eq!(
            PeripheralId::from_address(NVMC_S),
            Ok(PeripheralId::KMU_NVMC)
        );
        assert_eq!(
            PeripheralId::from_address(CRYPTOCELL_S),
            Ok(PeripheralId::CRYPTOCELL)
        );
        assert_eq!(PeripheralId::from_address(P0_NS), Ok(PeripheralId::GPIO));
        assert_eq!(PeripheralId::from_address(PDM_S), Ok(PeripheralId::PDM));
        assert_eq!(PeripheralId::from_address(I2S_NS), Ok(PeripheralId::I2S));
        assert_eq!(PeripheralId::from_address(FPU_S), Ok(PeripheralId::FPU));
        assert_eq!(
            PeripheralId::from_address(CTRL_AP_PERI_S),
            Ok(PeripheralId::CTRL_AP_PERI)
        );
    }

    #[test]
    fn id_from_bad_address() {
        assert_eq!(
            PeripheralId::from_address(FICR_S),
            Err(ErrorCode::INVAL)
        );
        assert_eq!(PeripheralId::from_address(TAD_S), Err(ErrorCode::INVAL));
        assert_eq!(
            PeripheralId::from_address(0x2000_0000),
            Err(ErrorCode::INVAL)
        );
        assert_eq!(
            PeripheralId::from_address(0x4010_0000),
            Err(ErrorCode::INVAL)
        );
        // Slot 7 is unused.
        assert_eq!(
            PeripheralId::from_address(0x5000_7000),
            Err(ErrorCode::NODEVICE)
        );
    }

    #[test]
    fn secure_only_peripherals() {
        assert!(PeripheralId::SPU.is_secure_only());
        assert!(PeripheralId::CRYPTOCELL.is_secure_only());
        assert!(!PeripheralId::SERIAL0.is_secure_only());
    }

    #[test]
    fn default_build_uses_secure_alias() {
        if cfg!(feature = "nonsecure") {
            assert_eq!(CLOCK, CLOCK_NS);
        } else {
            assert_eq!(CLOCK, CLOCK_S);
        }
    }
}
