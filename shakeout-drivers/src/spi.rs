//! Polled SPI driver
//!
//! Blocking full-duplex transfers over the two-register (ctrl/data)
//! peripheral. The busy flag is checked twice per transfer: before
//! writing the data register, so a new byte never collides with an
//! in-flight exchange, and again before reading it, so the result is
//! never stale. Chip-select writes bypass the busy gate entirely.

use shakeout_hal::poll::spin_until;
use shakeout_hal::spi::{SpiRegisters, CTRL_BUSY};

/// Polled SPI master driver.
pub struct Spi<R: SpiRegisters> {
    regs: R,
}

impl<R: SpiRegisters> Spi<R> {
    /// Take ownership of the SPI register pair.
    pub fn new(regs: R) -> Self {
        Self { regs }
    }

    /// Drive the chip-select selector directly.
    ///
    /// Fire-and-forget: the control register's low bits are written as
    /// given, with no busy check. See [`CS_SELECT`] and [`CS_DESELECT`]
    /// for the values used by the self-test.
    ///
    /// [`CS_SELECT`]: shakeout_hal::spi::CS_SELECT
    /// [`CS_DESELECT`]: shakeout_hal::spi::CS_DESELECT
    pub fn set_chip_select(&mut self, select: u32) {
        self.regs.write_ctrl(select);
    }

    /// Perform a blocking full-duplex exchange of one byte.
    pub fn transfer_byte(&mut self, tx: u8) -> u8 {
        spin_until(|| self.regs.read_ctrl() & CTRL_BUSY == 0);
        self.regs.write_data(tx as u32);
        spin_until(|| self.regs.read_ctrl() & CTRL_BUSY == 0);
        (self.regs.read_data() & 0xFF) as u8
    }

    /// Send a byte, discarding the response.
    #[inline]
    pub fn write_byte(&mut self, tx: u8) {
        let _ = self.transfer_byte(tx);
    }

    /// Read a byte, sending 0x00.
    #[inline]
    pub fn read_byte(&mut self) -> u8 {
        self.transfer_byte(0x00)
    }

    /// Transfer a byte buffer in-place.
    pub fn transfer_in_place(&mut self, buf: &mut [u8]) {
        for byte in buf.iter_mut() {
            *byte = self.transfer_byte(*byte);
        }
    }

    /// Release the underlying register pair.
    pub fn free(self) -> R {
        self.regs
    }
}
