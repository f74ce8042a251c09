// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Check field positions, masks and named values against the constants
//! published in the vendor C header (`nrf9160_bitfields.h`).

use nrf9160::bitfield::{value_in_place, FieldLayout};
use nrf9160::memory_map::{self, PeripheralId};
use nrf9160::{
    clock, ctrlapperi, dppic, egu, ficr, gpio, gpiote, i2s, ipc, nvmc, pdm, power, regulators,
    saadc, spim, spu, tad, timer, twim, uarte, uicr, vmc, wdt,
};

#[test]
fn clock_hfclkstat() {
    // CLOCK_HFCLKSTAT_STATE_Pos / _Msk
    assert_eq!(clock::HFCLKSTAT::STATE.position(), 16);
    assert_eq!(clock::HFCLKSTAT::STATE.mask_in_place(), 0x1 << 16);
    // CLOCK_HFCLKSTAT_SRC_HFXO
    assert_eq!(clock::HFCLKSTAT::SRC::Value::HFXO as u32, 1);
    // CLOCK_LFCLKSRC_SRC_LFXO
    assert_eq!(value_in_place(clock::LFCLKSRC::SRC::LFXO), 2);
}

#[test]
fn ficr_info_part() {
    // FICR_INFO_PART_PART_N9160
    assert_eq!(ficr::PART::PART::Value::N9160 as u32, 0x9160);
    assert_eq!(ficr::PART::PART::Value::N9120 as u32, 0x9120);
    assert_eq!(ficr::PART::PART.mask_in_place(), 0xFFFF_FFFF);
    assert_eq!(ficr::CODEPAGESIZE::CODEPAGESIZE::Value::K4096 as u32, 4096);
}

#[test]
fn uarte_baudrate() {
    use uarte::BAUDRATE::BAUDRATE::Value;
    assert_eq!(Value::Baud9600 as u32, 0x0027_5000);
    assert_eq!(Value::Baud115200 as u32, 0x01D6_0000);
    assert_eq!(Value::Baud1M as u32, 0x1000_0000);
    assert_eq!(uarte::CONFIG::PARITY::Value::Included as u32, 7);
    assert_eq!(uarte::CONFIG::STOP.position(), 4);
    // UARTE_CONFIG_PARITYTYPE_Odd
    assert_eq!(uarte::CONFIG::PARITYTYPE.mask_in_place(), 0x100);
    assert_eq!(uarte::CONFIG::PARITYTYPE::Value::Odd as u32, 1);
}

#[test]
fn spim_and_twim_frequency() {
    assert_eq!(spim::FREQUENCY::FREQUENCY::Value::M1 as u32, 0x1000_0000);
    assert_eq!(spim::FREQUENCY::FREQUENCY::Value::M8 as u32, 0x8000_0000);
    assert_eq!(twim::FREQUENCY::FREQUENCY::Value::K100 as u32, 0x0198_0000);
    assert_eq!(twim::FREQUENCY::FREQUENCY::Value::K250 as u32, 0x0400_0000);
}

#[test]
fn timer_bitmode() {
    use timer::BITMODE::BITMODE::Value;
    assert_eq!(Value::Bit16 as u32, 0);
    assert_eq!(Value::Bit08 as u32, 1);
    assert_eq!(Value::Bit24 as u32, 2);
    assert_eq!(Value::Bit32 as u32, 3);
    assert_eq!(timer::MODE::MODE::Value::LowPowerCounter as u32, 2);
}

#[test]
fn gpio_pin_cnf() {
    assert_eq!(gpio::PIN_CNF::PULL.mask_in_place(), 0x3 << 2);
    assert_eq!(gpio::PIN_CNF::DRIVE.mask_in_place(), 0x7 << 8);
    assert_eq!(gpio::PIN_CNF::SENSE.mask_in_place(), 0x3 << 16);
    assert_eq!(gpio::PIN_CNF::PULL::Value::Pullup as u32, 3);
    assert_eq!(gpio::PIN_CNF::SENSE::Value::Low as u32, 3);
}

#[test]
fn gpiote_config() {
    assert_eq!(gpiote::CONFIG::PSEL.position(), 8);
    assert_eq!(gpiote::CONFIG::POLARITY.mask_in_place(), 0x3 << 16);
    assert_eq!(gpiote::CONFIG::MODE::Value::Task as u32, 3);
}

#[test]
fn saadc_config() {
    assert_eq!(saadc::CONFIG::GAIN.mask_in_place(), 0x7 << 8);
    assert_eq!(saadc::CONFIG::TACQ::Value::Us40 as u32, 5);
    assert_eq!(saadc::RESOLUTION::VAL::Value::Bit14 as u32, 3);
    assert_eq!(saadc::OVERSAMPLE::OVERSAMPLE::Value::Over256x as u32, 8);
    assert_eq!(saadc::PSEL::PSEL::Value::VDDGPIO as u32, 9);
}

#[test]
fn power_resetreas() {
    assert_eq!(power::RESETREAS::DOG.mask_in_place(), 0x2);
    assert_eq!(power::RESETREAS::CTRLAP.position(), 6);
}

#[test]
fn wdt_reload_value() {
    assert_eq!(wdt::RELOAD::RR::Value::Reload as u32, 0x6E52_4635);
}

#[test]
fn spu_periphid_matches_memory_map() {
    for addr in [
        memory_map::SERIAL0_S,
        memory_map::TIMER2_S,
        memory_map::PWM3_NS,
        memory_map::IPC_NS,
        memory_map::CRYPTOCELL_S,
    ] {
        let id = PeripheralId::from_address(addr).expect("peripheral address");
        assert_eq!((addr >> 12) & 0xFF, id as usize);
        assert!((id as usize) < spu::NUM_PERIPHID);
    }
    assert_eq!(spu::REGION_PERM::SECATTR.mask_in_place(), 0x10);
    assert_eq!(spu::REGION_PERM::LOCK.mask_in_place(), 0x100);
}

#[test]
fn uicr_hfxosrc() {
    assert_eq!(uicr::HFXOSRC::HFXOSRC::Value::TCXO as u32, 0);
    assert_eq!(uicr::HFXOSRC::HFXOSRC::Value::XTAL as u32, 1);
    assert_eq!(uicr::KEYSLOT_PERM::STATE.position(), 16);
}

#[test]
fn gpio_port_registers() {
    // GPIO_OUT_PIN0_High, GPIO_DIR_PIN0_Output, GPIO_LATCH_PIN0_Latched
    assert_eq!(gpio::OUT::PIN0::Value::Low as u32, 0);
    assert_eq!(gpio::OUT::PIN0::Value::High as u32, 1);
    assert_eq!(gpio::IN::PIN17::Value::High as u32, 1);
    assert_eq!(gpio::DIR::PIN0::Value::Input as u32, 0);
    assert_eq!(gpio::DIR::PIN0::Value::Output as u32, 1);
    assert_eq!(gpio::LATCH::PIN0::Value::NotLatched as u32, 0);
    assert_eq!(gpio::LATCH::PIN0::Value::Latched as u32, 1);
    assert_eq!(gpio::LATCH::PIN31.mask_in_place(), 0x8000_0000);
}

#[test]
fn interrupt_enable_values() {
    // <PERIPHERAL>_INTEN_<EVENT>_Disabled / _Enabled
    assert_eq!(gpiote::INTEN::PORT::Value::Enabled as u32, 1);
    assert_eq!(gpiote::INTEN::PORT.position(), 31);
    assert_eq!(spim::INTEN::END::Value::Disabled as u32, 0);
    assert_eq!(egu::INTEN::TRIGGERED15.mask_in_place(), 1 << 15);
    assert_eq!(value_in_place(timer::INTEN::COMPARE5::Enabled), 1 << 21);
    assert_eq!(value_in_place(wdt::INTEN::TIMEOUT::Enabled), 1);
    // TIMER_SHORTS_COMPARE0_CLEAR_Enabled
    assert_eq!(value_in_place(timer::SHORTS::COMPARE0_CLEAR::Enabled), 1);
    assert_eq!(value_in_place(timer::SHORTS::COMPARE5_STOP::Enabled), 1 << 13);
}

#[test]
fn channel_registers() {
    // DPPIC_CHEN_CH0_Enabled, DPPIC_CHG_CH0_Included
    assert_eq!(dppic::CHEN::CH0::Value::Disabled as u32, 0);
    assert_eq!(dppic::CHEN::CH0::Value::Enabled as u32, 1);
    assert_eq!(dppic::CHG::CH15::Value::Excluded as u32, 0);
    assert_eq!(dppic::CHG::CH15::Value::Included as u32, 1);
    // IPC_SEND_CNF_CHEN0_Enable, IPC_RECEIVE_CNF_CHEN7_Enable
    assert_eq!(ipc::SEND_CNF::CHEN0::Value::Enable as u32, 1);
    assert_eq!(value_in_place(ipc::RECEIVE_CNF::CHEN7::Enable), 0x80);
    // SPU_DPPI_PERM_CHANNEL0_Secure, SPU_GPIOPORT_PERM_PIN0_Secure
    assert_eq!(spu::DPPI_PERM::CHANNEL0::Value::NonSecure as u32, 0);
    assert_eq!(spu::DPPI_PERM::CHANNEL0::Value::Secure as u32, 1);
    assert_eq!(value_in_place(spu::GPIOPORT_PERM::PIN31::Secure), 0x8000_0000);
}

#[test]
fn watchdog_reload_requests() {
    // WDT_RREN_RR0_Enabled, WDT_REQSTATUS_RR0_EnabledAndUnrequested
    assert_eq!(wdt::RREN::RR0::Value::Enabled as u32, 1);
    assert_eq!(wdt::REQSTATUS::RR0::Value::DisabledOrRequested as u32, 0);
    assert_eq!(wdt::REQSTATUS::RR0::Value::EnabledAndUnrequested as u32, 1);
    assert_eq!(wdt::RREN::RR7.mask_in_place(), 0x80);
}

#[test]
fn ram_power() {
    // VMC_RAM_POWER_S0POWER_On, VMC_RAM_POWER_S0RETENTION_Pos
    assert_eq!(vmc::POWER::S0POWER::Value::Off as u32, 0);
    assert_eq!(vmc::POWER::S0POWER::Value::On as u32, 1);
    assert_eq!(vmc::POWER::S0RETENTION.position(), 16);
}

#[test]
fn power_fail_and_partial_erase() {
    // REGULATORS_POFCON_THRESHOLD_Pos / _Msk / _V28
    assert_eq!(regulators::POFCON::THRESHOLD.position(), 1);
    assert_eq!(regulators::POFCON::THRESHOLD.mask_in_place(), 0xF << 1);
    assert_eq!(regulators::POFCON::THRESHOLD::Value::V19 as u32, 6);
    assert_eq!(regulators::POFCON::THRESHOLD::Value::V28 as u32, 15);
    // NVMC_ERASEPAGEPARTIALCFG_DURATION_Msk
    assert_eq!(nvmc::ERASEPAGEPARTIALCFG::DURATION.mask_in_place(), 0x7F);
    assert_eq!(ficr::PACKAGE::PACKAGE::Value::Unspecified as u32, 0xFFFF_FFFF);
}

#[test]
fn audio_interfaces() {
    // PDM_PDMCLKCTRL_FREQ_1032K (Default), PDM_RATIO_RATIO_Ratio80
    assert_eq!(pdm::PDMCLKCTRL::FREQ::Value::Freq1000K as u32, 0x0800_0000);
    assert_eq!(pdm::PDMCLKCTRL::FREQ::Value::Freq1333K as u32, 0x0A80_0000);
    assert_eq!(pdm::RATIO::RATIO::Value::Ratio80 as u32, 1);
    assert_eq!(pdm::GAIN::GAIN::Value::MaxGain as u32, 0x50);
    // I2S_CONFIG_MCKFREQ_MCKFREQ_32MDIV125, I2S_CONFIG_RATIO_RATIO_512X
    assert_eq!(i2s::MCKFREQ::MCKFREQ::Value::M32Div125 as u32, 0x020C_0000);
    assert_eq!(i2s::RATIO::RATIO::Value::X512 as u32, 8);
    assert_eq!(i2s::CHANNELS::CHANNELS::Value::Right as u32, 2);
    assert_eq!(i2s::FORMAT::FORMAT::Value::Aligned as u32, 1);
}

#[test]
fn debug_blocks() {
    assert_eq!(ctrlapperi::STATUS::STATUS::Value::DataPending as u32, 1);
    assert_eq!(ctrlapperi::LOCK::LOCK::Value::Locked as u32, 1);
    // TAD_PSEL_TRACECLK_PIN_Traceclk, TAD_TRACEPORTSPEED_TRACEPORTSPEED_32MHz
    assert_eq!(tad::TRACECLK::PIN::Value::Traceclk as u32, 21);
    assert_eq!(tad::TRACEDATA0::PIN::Value::Tracedata0 as u32, 22);
    assert_eq!(tad::TRACEPORTSPEED::TRACEPORTSPEED::Value::Clk32MHz as u32, 0);
    assert_eq!(tad::TRACECLK::CONNECT.mask_in_place(), 0x8000_0000);
}

#[test]
fn new_peripherals_are_addressable() {
    for (addr, id) in [
        (memory_map::PDM_S, PeripheralId::PDM),
        (memory_map::I2S_NS, PeripheralId::I2S),
        (memory_map::FPU_S, PeripheralId::FPU),
        (memory_map::CTRL_AP_PERI_S, PeripheralId::CTRL_AP_PERI),
    ] {
        assert_eq!(PeripheralId::from_address(addr), Ok(id));
    }
}
