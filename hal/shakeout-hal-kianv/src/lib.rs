//! KianV board support
//!
//! Memory-mapped implementations of the `shakeout-hal` traits for the
//! simulated KianV RISC-V SoC. This is the only crate in the workspace
//! that contains `unsafe`: every register access goes through the
//! volatile cell in [`mmio`], and every register address is a named
//! constant in [`board::map`].
//!
//! Construct [`Peripherals`] once at startup and hand the individual
//! handles to the drivers; nothing here is a global.

#![no_std]

pub mod board;
pub mod mmio;

pub use board::{map, KianvCycles, KianvPwm, KianvSpi, KianvUart, Peripherals};
