//! Volatile register cell
//!
//! A typed wrapper over a fixed memory-mapped register address. All
//! accesses use `read_volatile`/`write_volatile` so the compiler can
//! neither elide nor reorder them relative to other volatile accesses,
//! which is what the polled status-bit protocol depends on.

use core::ptr;

/// A single memory-mapped register of width `T`.
pub struct Reg<T> {
    addr: *mut T,
}

impl<T: Copy> Reg<T> {
    /// Wrap a register address.
    ///
    /// # Safety
    ///
    /// `addr` must be the address of a memory-mapped register of width
    /// `T` on the target, properly aligned, and the caller must ensure
    /// no other handle to the same register is live (the drivers assume
    /// exclusive ownership).
    pub const unsafe fn new(addr: usize) -> Self {
        Self {
            addr: addr as *mut T,
        }
    }

    /// Volatile read of the register.
    #[inline]
    pub fn read(&self) -> T {
        // SAFETY: `addr` is a valid MMIO register per the `new` contract.
        unsafe { ptr::read_volatile(self.addr) }
    }

    /// Volatile write to the register.
    #[inline]
    pub fn write(&mut self, value: T) {
        // SAFETY: `addr` is a valid MMIO register per the `new` contract.
        unsafe { ptr::write_volatile(self.addr, value) }
    }
}
