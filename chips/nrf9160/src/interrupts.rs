// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! NVIC interrupt numbers.
//!
//! On the nRF9160 the interrupt number of a peripheral equals its ID.

use crate::memory_map::PeripheralId;

pub const SPU: u32 = PeripheralId::SPU as u32;
pub const CLOCK_POWER: u32 = PeripheralId::CLOCK_POWER as u32;
pub const SERIAL0: u32 = PeripheralId::SERIAL0 as u32;
pub const SERIAL1: u32 = PeripheralId::SERIAL1 as u32;
pub const SERIAL2: u32 = PeripheralId::SERIAL2 as u32;
pub const SERIAL3: u32 = PeripheralId::SERIAL3 as u32;
pub const GPIOTE0: u32 = PeripheralId::GPIOTE0 as u32;
pub const SAADC: u32 = PeripheralId::SAADC as u32;
pub const TIMER0: u32 = PeripheralId::TIMER0 as u32;
pub const TIMER1: u32 = PeripheralId::TIMER1 as u32;
pub const TIMER2: u32 = PeripheralId::TIMER2 as u32;
pub const RTC0: u32 = PeripheralId::RTC0 as u32;
pub const RTC1: u32 = PeripheralId::RTC1 as u32;
pub const WDT: u32 = PeripheralId::WDT as u32;
pub const EGU0: u32 = PeripheralId::EGU0 as u32;
pub const EGU1: u32 = PeripheralId::EGU1 as u32;
pub const EGU2: u32 = PeripheralId::EGU2 as u32;
pub const EGU3: u32 = PeripheralId::EGU3 as u32;
pub const EGU4: u32 = PeripheralId::EGU4 as u32;
pub const EGU5: u32 = PeripheralId::EGU5 as u32;
pub const PWM0: u32 = PeripheralId::PWM0 as u32;
pub const PWM1: u32 = PeripheralId::PWM1 as u32;
pub const PWM2: u32 = PeripheralId::PWM2 as u32;
pub const PWM3: u32 = PeripheralId::PWM3 as u32;
pub const PDM: u32 = PeripheralId::PDM as u32;
pub const I2S: u32 = PeripheralId::I2S as u32;
pub const IPC: u32 = PeripheralId::IPC as u32;
pub const FPU: u32 = PeripheralId::FPU as u32;
pub const GPIOTE1: u32 = PeripheralId::GPIOTE1 as u32;
pub const KMU: u32 = PeripheralId::KMU_NVMC as u32;
pub const CRYPTOCELL: u32 = PeripheralId::CRYPTOCELL as u32;
