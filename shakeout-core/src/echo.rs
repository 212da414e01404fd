//! UART banner and echo console
//!
//! The terminal steady state of the firmware: after the self-test passes
//! the banner goes out once, then every received byte is echoed back
//! with uppercase ASCII letters folded to lowercase. The loop has no
//! exit condition.

use shakeout_drivers::Uart;
use shakeout_hal::UartRegisters;

/// Banner transmitted once before the echo loop starts. Eleven bytes,
/// trailing newline, no terminator.
pub const BANNER: &str = "Hello UART\n";

/// Transmit the banner byte-for-byte.
pub fn write_banner<R: UartRegisters>(uart: &mut Uart<R>) {
    uart.put_str(BANNER);
}

/// Fold an uppercase ASCII letter to lowercase; pass every other byte
/// through unchanged.
pub fn fold_uppercase(byte: u8) -> u8 {
    if byte.is_ascii_uppercase() {
        byte + 32
    } else {
        byte
    }
}

/// Receive one byte and echo it back, folded.
pub fn echo_once<R: UartRegisters>(uart: &mut Uart<R>) {
    let byte = uart.get_char();
    uart.put_char(fold_uppercase(byte));
}

/// Echo received bytes forever. Never returns.
pub fn echo_forever<R: UartRegisters>(uart: &mut Uart<R>) -> ! {
    loop {
        echo_once(uart);
    }
}
