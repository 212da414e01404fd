//! Shakeout firmware entry point
//!
//! Power-on sequence for the simulated KianV board: validate the SPI
//! loopback fixture, touch the PWM and cycle-counter registers, emit the
//! banner, then echo UART input forever with uppercase folded to
//! lowercase. A failed SPI check parks the hart immediately, before any
//! UART activity.

#![no_std]
#![no_main]

use panic_halt as _;
use riscv_rt::entry;

use shakeout_core::{echo, selftest};
use shakeout_drivers::{Spi, Uart};
use shakeout_hal_kianv::Peripherals;

#[entry]
fn main() -> ! {
    // SAFETY: this is the only construction of the peripheral handles.
    let p = unsafe { Peripherals::new() };

    let mut spi = Spi::new(p.spi);
    let mut pwm = p.pwm;
    if selftest::run(&mut spi, &p.cycles, &mut pwm).is_err() {
        park();
    }

    let mut uart = Uart::new(p.uart);
    echo::write_banner(&mut uart);
    echo::echo_forever(&mut uart)
}

/// Halt the hart. The failure path's rendering of a nonzero exit status:
/// no message goes out, nothing further is touched.
fn park() -> ! {
    loop {
        // SAFETY: waiting for an interrupt with none enabled is a plain
        // stall; no state is touched.
        unsafe { riscv::asm::wfi() };
    }
}
