//! Shakeout hardware abstraction layer
//!
//! This crate defines register-level traits for the peripherals the
//! self-test touches. The drivers in `shakeout-drivers` are generic over
//! these traits, so the same polling logic runs against the real
//! memory-mapped registers on the board (`shakeout-hal-kianv`) and
//! against scripted mocks in host tests.
//!
//! The traits are deliberately thin: one method per register access, no
//! buffering, no error types. On this board a peripheral either responds
//! or the program spins forever waiting for it (see [`poll::spin_until`]).

#![no_std]
#![deny(unsafe_code)]

pub mod cycles;
pub mod poll;
pub mod pwm;
pub mod spi;
pub mod uart;

pub use cycles::CycleCounter;
pub use poll::spin_until;
pub use pwm::PwmChannel;
pub use spi::SpiRegisters;
pub use uart::UartRegisters;
