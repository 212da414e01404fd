//! Polled peripheral drivers
//!
//! Concrete drivers over the register traits in `shakeout-hal`:
//!
//! - [`Uart`]: byte in/out console with hex dump helpers
//! - [`Spi`]: chip-select control and blocking full-duplex transfers
//!
//! Both drivers busy-wait on status bits and never time out; an
//! unresponsive peripheral blocks the caller forever.

#![no_std]
#![deny(unsafe_code)]

pub mod spi;
pub mod uart;

pub use spi::Spi;
pub use uart::Uart;
