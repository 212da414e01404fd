//! KianV peripheral handles and address map

use shakeout_hal::{CycleCounter, PwmChannel, SpiRegisters, UartRegisters};

use crate::mmio::Reg;

/// Register address map of the simulated KianV SoC.
pub mod map {
    /// Base of the byte-wide I/O region.
    pub const IO_BASE: usize = 0x1000_0000;
    /// UART data register; receive and transmit share this address.
    pub const UART_DATA: usize = IO_BASE;
    /// UART line-status register.
    pub const UART_LSR: usize = IO_BASE + 0x05;
    /// Write-only PWM output register.
    pub const PWM: usize = IO_BASE + 0x14;
    /// Free-running cycle counter.
    pub const CYCLE_COUNTER: usize = IO_BASE + 0x18;

    /// Base of the SPI register block.
    pub const SPI_BASE: usize = 0x1050_0000;
    /// SPI control register (busy flag + chip-select selector).
    pub const SPI_CTRL: usize = SPI_BASE;
    /// SPI data register.
    pub const SPI_DATA: usize = SPI_BASE + 0x04;
    /// SPI clock-divider register.
    pub const SPI_CLK_DIV: usize = SPI_BASE + 0x10;
}

/// The board's UART register block.
pub struct KianvUart {
    data: Reg<u8>,
    lsr: Reg<u8>,
}

impl UartRegisters for KianvUart {
    fn line_status(&self) -> u8 {
        self.lsr.read()
    }

    fn write_tx(&mut self, byte: u8) {
        self.data.write(byte);
    }

    fn read_rx(&mut self) -> u8 {
        self.data.read()
    }
}

/// The board's SPI register block.
pub struct KianvSpi {
    ctrl: Reg<u32>,
    data: Reg<u32>,
    clk_div: Reg<u32>,
}

impl KianvSpi {
    /// Set the SPI clock divider. Not used by the self-test sequence;
    /// the simulator's reset default is taken as-is.
    pub fn set_clock_divider(&mut self, divider: u32) {
        self.clk_div.write(divider);
    }
}

impl SpiRegisters for KianvSpi {
    fn read_ctrl(&self) -> u32 {
        self.ctrl.read()
    }

    fn write_ctrl(&mut self, value: u32) {
        self.ctrl.write(value);
    }

    fn read_data(&mut self) -> u32 {
        self.data.read()
    }

    fn write_data(&mut self, value: u32) {
        self.data.write(value);
    }
}

/// The board's PWM output register.
pub struct KianvPwm {
    out: Reg<u32>,
}

impl PwmChannel for KianvPwm {
    fn set_duty(&mut self, value: u32) {
        self.out.write(value);
    }
}

/// The board's free-running cycle counter.
pub struct KianvCycles {
    count: Reg<u32>,
}

impl CycleCounter for KianvCycles {
    fn read(&self) -> u32 {
        self.count.read()
    }
}

/// All peripheral handles of the board, constructed once at startup.
pub struct Peripherals {
    pub uart: KianvUart,
    pub spi: KianvSpi,
    pub pwm: KianvPwm,
    pub cycles: KianvCycles,
}

impl Peripherals {
    /// Build the peripheral handles from the fixed address map.
    ///
    /// # Safety
    ///
    /// Call at most once. Each handle assumes exclusive ownership of its
    /// registers for the lifetime of the program.
    pub const unsafe fn new() -> Self {
        Self {
            uart: KianvUart {
                data: Reg::new(map::UART_DATA),
                lsr: Reg::new(map::UART_LSR),
            },
            spi: KianvSpi {
                ctrl: Reg::new(map::SPI_CTRL),
                data: Reg::new(map::SPI_DATA),
                clk_div: Reg::new(map::SPI_CLK_DIV),
            },
            pwm: KianvPwm {
                out: Reg::new(map::PWM),
            },
            cycles: KianvCycles {
                count: Reg::new(map::CYCLE_COUNTER),
            },
        }
    }
}
