//! PWM output trait

/// A write-only PWM output register.
///
/// A single write sets the duty/level value; there is no readback and no
/// further interaction.
pub trait PwmChannel {
    /// Set the output duty/level value.
    fn set_duty(&mut self, value: u32);
}
