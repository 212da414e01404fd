//! Polled UART driver
//!
//! Byte-at-a-time console I/O gated on the line-status register. Writes
//! wait for the transmit path to drain (`THRE` or `TEMT`), reads wait for
//! `DR`. No buffering, no timeouts.

use shakeout_hal::poll::spin_until;
use shakeout_hal::uart::{lsr, UartRegisters};

/// Uppercase hex digit table used by the dump helpers.
const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// Polled UART console driver.
pub struct Uart<R: UartRegisters> {
    regs: R,
}

impl<R: UartRegisters> Uart<R> {
    /// Take ownership of the UART register block.
    pub fn new(regs: R) -> Self {
        Self { regs }
    }

    /// Transmit one byte, spinning until the transmitter can accept it.
    pub fn put_char(&mut self, byte: u8) {
        spin_until(|| self.regs.line_status() & (lsr::THRE | lsr::TEMT) != 0);
        self.regs.write_tx(byte);
    }

    /// Receive one byte, spinning until one is available.
    pub fn get_char(&mut self) -> u8 {
        spin_until(|| self.regs.line_status() & lsr::DR != 0);
        self.regs.read_rx()
    }

    /// Transmit a string byte-for-byte. No line-ending translation.
    pub fn put_str(&mut self, s: &str) {
        for &byte in s.as_bytes() {
            self.put_char(byte);
        }
    }

    /// Transmit a byte as two uppercase hex digits, high nibble first.
    pub fn put_hex_byte(&mut self, byte: u8) {
        self.put_char(HEX_CHARS[(byte >> 4) as usize]);
        self.put_char(HEX_CHARS[(byte & 0xF) as usize]);
    }

    /// Dump a buffer as hex, each byte followed by a space.
    pub fn put_hex(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.put_hex_byte(byte);
            self.put_char(b' ');
        }
    }

    /// Release the underlying register block.
    pub fn free(self) -> R {
        self.regs
    }
}
