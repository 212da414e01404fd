//! Board-agnostic logic for the Shakeout power-on self-test
//!
//! Everything here is generic over the register traits in
//! `shakeout-hal`, so the whole sequence runs unmodified against either
//! the real memory-mapped peripherals or scripted mocks:
//!
//! - [`selftest`]: the fixed SPI validation sequence plus the PWM and
//!   cycle-counter touches
//! - [`echo`]: the UART banner and the lowercase-folding echo console

#![no_std]
#![deny(unsafe_code)]

pub mod echo;
pub mod selftest;

pub use echo::BANNER;
pub use selftest::SelfTestFailure;
