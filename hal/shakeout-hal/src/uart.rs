//! UART register-level access trait
//!
//! The board exposes an NS16550-style console: a shared receive/transmit
//! data address plus a line-status register. All flow control is done by
//! polling the line-status bits; there are no FIFOs or interrupts.

/// Line-status register bits.
pub mod lsr {
    /// Data ready: a received byte is waiting in the data register.
    pub const DR: u8 = 0x01;
    /// Transmit holding register empty.
    pub const THRE: u8 = 0x20;
    /// Transmitter empty (shift register drained).
    pub const TEMT: u8 = 0x40;
}

/// Register-level view of the UART peripheral.
///
/// Invariants the caller must uphold:
/// - write the data register only when `THRE` or `TEMT` is set,
/// - read the data register only when `DR` is set.
///
/// The `Uart` driver in `shakeout-drivers` enforces both by spinning on
/// [`line_status`](Self::line_status).
pub trait UartRegisters {
    /// Read the line-status register.
    fn line_status(&self) -> u8;

    /// Write one byte to the transmit data register.
    fn write_tx(&mut self, byte: u8);

    /// Read one byte from the receive data register.
    fn read_rx(&mut self) -> u8;
}
