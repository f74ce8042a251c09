// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Peripheral register definitions for the Nordic nRF9160.
//!
//! Every peripheral gets a module holding its register block layout
//! (`register_structs!`) and the position, width and named values of each
//! field (`register_bitfields!`). The C header names map onto the Rust items
//! as follows:
//!
//! ```rust
//! use nrf9160::bitfield::FieldLayout;
//! use nrf9160::clock::HFCLKSTAT;
//!
//! // CLOCK_HFCLKSTAT_STATE_Pos
//! assert_eq!(HFCLKSTAT::STATE.position(), 16);
//! // CLOCK_HFCLKSTAT_STATE_Msk
//! assert_eq!(HFCLKSTAT::STATE.mask_in_place(), 0x1 << 16);
//! // CLOCK_HFCLKSTAT_STATE_Running
//! assert_eq!(HFCLKSTAT::STATE::Value::Running as u32, 1);
//! ```
//!
//! Base addresses point at the secure alias unless the `nonsecure` feature
//! is enabled.

#![no_std]
#![crate_name = "nrf9160"]
#![crate_type = "rlib"]
// The larger peripherals have many register definitions in
// `register_structs!` and require a deeper recursion limit than the default
// to fully expand.
#![recursion_limit = "256"]

pub mod bitfield;
pub mod common;
pub mod errorcode;
pub mod interrupts;
pub mod memory_map;
pub mod pinmux;
mod static_ref;

pub mod clock;
pub mod cryptocell;
pub mod ctrlapperi;
pub mod dppic;
pub mod egu;
pub mod ficr;
pub mod fpu;
pub mod gpio;
pub mod gpiote;
pub mod i2s;
pub mod ipc;
pub mod kmu;
pub mod nvmc;
pub mod pdm;
pub mod power;
pub mod pwm;
pub mod regulators;
pub mod rtc;
pub mod saadc;
pub mod spim;
pub mod spis;
pub mod spu;
pub mod tad;
pub mod timer;
pub mod twim;
pub mod twis;
pub mod uarte;
pub mod uicr;
pub mod vmc;
pub mod wdt;

pub use crate::errorcode::ErrorCode;
pub use crate::static_ref::StaticRef;
