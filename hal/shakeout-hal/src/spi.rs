//! SPI register-level access trait
//!
//! The SPI block is a two-register peripheral: a control register whose
//! top bit reports an in-flight transfer and whose low bits drive the
//! chip-select lines, and a data register that starts a full-duplex
//! exchange on write and holds the received byte after completion.

/// Control-register busy flag (bit 31). Must be clear before the data
/// register is written or read.
pub const CTRL_BUSY: u32 = 1 << 31;

/// Chip-select selector value asserting line 0.
pub const CS_SELECT: u32 = 1;

/// Chip-select selector value releasing all lines.
pub const CS_DESELECT: u32 = 0;

/// Register-level view of the SPI peripheral.
pub trait SpiRegisters {
    /// Read the control register.
    fn read_ctrl(&self) -> u32;

    /// Write the control register.
    ///
    /// Writing the low bits drives the chip-select selector directly;
    /// there is no busy gating on this path.
    fn write_ctrl(&mut self, value: u32);

    /// Read the data register. The low byte is the last received value.
    fn read_data(&mut self) -> u32;

    /// Write the data register, starting a hardware exchange.
    fn write_data(&mut self, value: u32);
}
