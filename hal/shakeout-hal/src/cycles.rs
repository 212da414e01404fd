//! Cycle counter trait

/// A read-only free-running 32-bit cycle counter.
pub trait CycleCounter {
    /// Read the current counter value.
    fn read(&self) -> u32;
}
