//! Busy-wait polling
//!
//! Every wait in this firmware is an unbounded spin on a status bit: the
//! simulated peripherals are deterministic and always eventually ready,
//! so there are no timeouts anywhere. Routing all of those waits through
//! one helper keeps the drivers free of raw `while` loops and leaves a
//! single place to substitute a bounded wait if real hardware ever needs
//! one.

/// Spin until `ready` returns true.
///
/// A peripheral that never becomes ready stalls the caller forever; that
/// is the accepted failure mode for this board.
pub fn spin_until<F>(mut ready: F)
where
    F: FnMut() -> bool,
{
    while !ready() {
        core::hint::spin_loop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_immediately_when_ready() {
        let mut polls = 0;
        spin_until(|| {
            polls += 1;
            true
        });
        assert_eq!(polls, 1);
    }

    #[test]
    fn polls_until_predicate_flips() {
        let mut polls = 0;
        spin_until(|| {
            polls += 1;
            polls == 5
        });
        assert_eq!(polls, 5);
    }
}
