//! SPI self-test sequence
//!
//! Validates the board's SPI loopback fixture: with chip select
//! asserted, each byte of a fixed pattern is exchanged and the response
//! checked against a fixed expectation table. On the first mismatch the
//! sequence stops where it stands — chip select is left asserted and the
//! diagnostic register touches never happen. On success the chip select
//! is released, the cycle counter is read once and the PWM output is set
//! to a fixed level before the console takes over.

use shakeout_drivers::Spi;
use shakeout_hal::spi::{SpiRegisters, CS_DESELECT, CS_SELECT};
use shakeout_hal::{CycleCounter, PwmChannel};

/// Bytes sent to the loopback fixture, in order.
pub const TEST_PATTERN: [u8; 4] = [0xDE, 0xAD, 0xBE, 0xAF];

/// Responses the fixture must produce, position by position.
///
/// The fixture replies with the sent byte shifted right by one, except
/// that it answers `0xBE` with the literal `0xDF`. The table reproduces
/// the fixture's behavior verbatim; it is the contract, not a formula.
pub const EXPECTED_RESPONSES: [u8; 4] = [0xDE >> 1, 0xAD >> 1, 0xDF, 0xAF >> 1];

/// Level written to the PWM output once the SPI checks pass.
pub const PWM_LEVEL: u32 = 0xAA;

/// A response byte that did not match the expectation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SelfTestFailure {
    /// Zero-based position in the test pattern.
    pub index: usize,
    /// Byte that was sent.
    pub sent: u8,
    /// Byte the fixture should have returned.
    pub expected: u8,
    /// Byte the fixture actually returned.
    pub got: u8,
}

/// Run the SPI validation sequence and the diagnostic register touches.
///
/// On `Err` the chip select is still asserted and neither the cycle
/// counter nor the PWM register has been touched; the caller is expected
/// to halt without any further peripheral activity.
pub fn run<S, C, P>(spi: &mut Spi<S>, cycles: &C, pwm: &mut P) -> Result<(), SelfTestFailure>
where
    S: SpiRegisters,
    C: CycleCounter,
    P: PwmChannel,
{
    spi.set_chip_select(CS_SELECT);
    for (index, (&sent, &expected)) in
        TEST_PATTERN.iter().zip(EXPECTED_RESPONSES.iter()).enumerate()
    {
        let got = spi.transfer_byte(sent);
        if got != expected {
            return Err(SelfTestFailure {
                index,
                sent,
                expected,
                got,
            });
        }
    }
    spi.set_chip_select(CS_DESELECT);

    // Exercise the cycle-counter load once; the value itself is unused.
    let _ = cycles.read();
    pwm.set_duty(PWM_LEVEL);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use heapless::{Deque, Vec};

    /// One peripheral access, in program order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        ChipSelect(u32),
        Transfer(u8),
        CycleRead,
        PwmWrite(u32),
    }

    type Log = RefCell<Vec<Event, 16>>;

    fn log(events: &Log, event: Event) {
        events.borrow_mut().push(event).unwrap();
    }

    /// SPI fixture mock: always idle, answers transfers from a queue.
    struct FixtureSpi<'a> {
        events: &'a Log,
        responses: Deque<u8, 8>,
    }

    impl<'a> FixtureSpi<'a> {
        fn new(events: &'a Log, responses: &[u8]) -> Self {
            let mut queue = Deque::new();
            for &r in responses {
                queue.push_back(r).unwrap();
            }
            Self {
                events,
                responses: queue,
            }
        }
    }

    impl SpiRegisters for FixtureSpi<'_> {
        fn read_ctrl(&self) -> u32 {
            0
        }

        fn write_ctrl(&mut self, value: u32) {
            log(self.events, Event::ChipSelect(value));
        }

        fn read_data(&mut self) -> u32 {
            self.responses.pop_front().unwrap() as u32
        }

        fn write_data(&mut self, value: u32) {
            log(self.events, Event::Transfer(value as u8));
        }
    }

    struct MockCycles<'a> {
        events: &'a Log,
    }

    impl CycleCounter for MockCycles<'_> {
        fn read(&self) -> u32 {
            log(self.events, Event::CycleRead);
            0x1234_5678
        }
    }

    struct MockPwm<'a> {
        events: &'a Log,
    }

    impl PwmChannel for MockPwm<'_> {
        fn set_duty(&mut self, value: u32) {
            log(self.events, Event::PwmWrite(value));
        }
    }

    fn run_with_responses(
        responses: &[u8],
    ) -> (Result<(), SelfTestFailure>, Vec<Event, 16>) {
        let events: Log = RefCell::new(Vec::new());
        let mut spi = Spi::new(FixtureSpi::new(&events, responses));
        let cycles = MockCycles { events: &events };
        let mut pwm = MockPwm { events: &events };
        let result = run(&mut spi, &cycles, &mut pwm);
        (result, events.into_inner())
    }

    #[test]
    fn passes_with_the_reference_responses() {
        let (result, events) = run_with_responses(&[0x6F, 0x56, 0xDF, 0x57]);
        assert_eq!(result, Ok(()));
        assert_eq!(
            events,
            [
                Event::ChipSelect(1),
                Event::Transfer(0xDE),
                Event::Transfer(0xAD),
                Event::Transfer(0xBE),
                Event::Transfer(0xAF),
                Event::ChipSelect(0),
                Event::CycleRead,
                Event::PwmWrite(0xAA),
            ]
        );
    }

    #[test]
    fn first_mismatch_stops_the_sequence() {
        let (result, events) = run_with_responses(&[0x00, 0x56, 0xDF, 0x57]);
        assert_eq!(
            result,
            Err(SelfTestFailure {
                index: 0,
                sent: 0xDE,
                expected: 0x6F,
                got: 0x00,
            })
        );
        // Chip select stays asserted and nothing after the failing
        // transfer runs.
        assert_eq!(events, [Event::ChipSelect(1), Event::Transfer(0xDE)]);
    }

    #[test]
    fn third_position_requires_the_literal_df() {
        // 0xBE >> 1 would be 0x5F; the fixture contract says 0xDF.
        let (result, events) = run_with_responses(&[0x6F, 0x56, 0x5F, 0x57]);
        assert_eq!(
            result,
            Err(SelfTestFailure {
                index: 2,
                sent: 0xBE,
                expected: 0xDF,
                got: 0x5F,
            })
        );
        assert!(!events.contains(&Event::ChipSelect(0)));
    }

    #[test]
    fn failure_on_the_last_byte_skips_the_register_touches() {
        let (result, events) = run_with_responses(&[0x6F, 0x56, 0xDF, 0x00]);
        assert_eq!(
            result,
            Err(SelfTestFailure {
                index: 3,
                sent: 0xAF,
                expected: 0x57,
                got: 0x00,
            })
        );
        assert!(!events.contains(&Event::ChipSelect(0)));
        assert!(!events.contains(&Event::CycleRead));
        assert!(!events.contains(&Event::PwmWrite(0xAA)));
    }

    #[test]
    fn expectation_table_matches_the_shift_rule_except_position_three() {
        for (i, (&sent, &expected)) in TEST_PATTERN
            .iter()
            .zip(EXPECTED_RESPONSES.iter())
            .enumerate()
        {
            if i == 2 {
                assert_eq!(expected, 0xDF);
            } else {
                assert_eq!(expected, sent >> 1);
            }
        }
    }
}
