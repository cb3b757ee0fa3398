//! Test doubles for the MSGEQ7 collaborators.
//!
//! Pins, ADC and delay all append to one shared [`Timeline`] that advances a
//! simulated nanosecond clock on every delay, so tests can assert both the
//! order of transitions and the time between them.

use core::cell::RefCell;
use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, ErrorType, OutputPin};

use crate::analog::AnalogInput;

const MAX_EVENTS: usize = 512;
const MAX_SAMPLES: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MockError;

impl digital::Error for MockError {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line {
    Reset,
    Strobe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Event {
    /// Pin driven high (`true`) or low (`false`).
    Write(Line, bool),
    /// Delay in ns.
    Delay(u64),
    /// Analog sample returned to the driver.
    Sample(u16),
}

/// Chronological record of everything the driver did.
pub(crate) struct Timeline {
    events: [Event; MAX_EVENTS],
    stamps: [u64; MAX_EVENTS],
    len: usize,
    samples: [u16; MAX_SAMPLES],
    sample_count: usize,
    next_sample: usize,
    now_ns: u64,
    /// Line that fails once the countdown reaches zero, and whether only
    /// that one write fails.
    fail: Option<(Line, usize, bool)>,
}

impl Timeline {
    pub(crate) fn new() -> Self {
        Self {
            events: [Event::Delay(0); MAX_EVENTS],
            stamps: [0; MAX_EVENTS],
            len: 0,
            samples: [0; MAX_SAMPLES],
            sample_count: 0,
            next_sample: 0,
            now_ns: 0,
            fail: None,
        }
    }

    /// Timeline whose ADC returns `samples` in order, then errors.
    pub(crate) fn with_samples(samples: &[u16]) -> Self {
        let mut tl = Self::new();
        tl.samples[..samples.len()].copy_from_slice(samples);
        tl.sample_count = samples.len();
        tl
    }

    /// Let `n` more writes to `line` succeed, then fail every write to it.
    pub(crate) fn fail_write_after(&mut self, line: Line, n: usize) {
        self.fail = Some((line, n, false));
    }

    /// Let `n` more writes to `line` succeed, fail the next one, then
    /// recover.
    pub(crate) fn fail_write_once(&mut self, line: Line, n: usize) {
        self.fail = Some((line, n, true));
    }

    /// Last level written to `line`, if any.
    pub(crate) fn level(&self, line: Line) -> Option<bool> {
        self.events().iter().rev().find_map(|e| match *e {
            Event::Write(l, level) if l == line => Some(level),
            _ => None,
        })
    }

    /// Forget recorded events and restart the clock. Samples are kept.
    pub(crate) fn clear(&mut self) {
        self.len = 0;
        self.now_ns = 0;
    }

    pub(crate) fn events(&self) -> &[Event] {
        &self.events[..self.len]
    }

    /// Events paired with the clock value at which they happened.
    pub(crate) fn stamped(&self) -> impl Iterator<Item = (u64, Event)> + '_ {
        self.stamps[..self.len]
            .iter()
            .copied()
            .zip(self.events[..self.len].iter().copied())
    }

    pub(crate) fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events().iter().filter(|e| pred(*e)).count()
    }

    pub(crate) fn now_ns(&self) -> u64 {
        self.now_ns
    }

    pub(crate) fn samples_taken(&self) -> usize {
        self.next_sample
    }

    fn push(&mut self, event: Event) {
        self.events[self.len] = event;
        self.stamps[self.len] = self.now_ns;
        self.len += 1;
    }

    fn write(&mut self, line: Line, level: bool) -> Result<(), MockError> {
        if let Some((fail_line, remaining, once)) = self.fail.as_mut() {
            if *fail_line == line {
                if *remaining == 0 {
                    if *once {
                        self.fail = None;
                    }
                    return Err(MockError);
                }
                *remaining -= 1;
            }
        }
        self.push(Event::Write(line, level));
        Ok(())
    }

    fn sample(&mut self) -> Result<u16, MockError> {
        if self.next_sample >= self.sample_count {
            return Err(MockError);
        }
        let v = self.samples[self.next_sample];
        self.next_sample += 1;
        self.push(Event::Sample(v));
        Ok(v)
    }

    fn delay(&mut self, ns: u64) {
        self.push(Event::Delay(ns));
        self.now_ns += ns;
    }
}

// ── Pins ──────────────────────────────────────────────────────────────────

pub(crate) struct MockPin<'a> {
    line: Line,
    tl: &'a RefCell<Timeline>,
}

impl<'a> MockPin<'a> {
    pub(crate) fn new(line: Line, tl: &'a RefCell<Timeline>) -> Self {
        Self { line, tl }
    }

    pub(crate) fn line(&self) -> Line {
        self.line
    }
}

impl ErrorType for MockPin<'_> {
    type Error = MockError;
}

impl OutputPin for MockPin<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.tl.borrow_mut().write(self.line, false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.tl.borrow_mut().write(self.line, true)
    }
}

/// Pin that accepts every write and records nothing.
pub(crate) struct NullPin;

impl ErrorType for NullPin {
    type Error = Infallible;
}

impl OutputPin for NullPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

// ── ADC ───────────────────────────────────────────────────────────────────

pub(crate) struct MockAdc<'a> {
    tl: &'a RefCell<Timeline>,
}

impl<'a> MockAdc<'a> {
    pub(crate) fn new(tl: &'a RefCell<Timeline>) -> Self {
        Self { tl }
    }
}

impl AnalogInput for MockAdc<'_> {
    type Error = MockError;

    fn read_sample(&mut self) -> Result<u16, MockError> {
        self.tl.borrow_mut().sample()
    }
}

// ── Delay ─────────────────────────────────────────────────────────────────

pub(crate) struct MockDelay<'a> {
    tl: &'a RefCell<Timeline>,
}

impl<'a> MockDelay<'a> {
    pub(crate) fn new(tl: &'a RefCell<Timeline>) -> Self {
        Self { tl }
    }
}

impl DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.tl.borrow_mut().delay(ns as u64);
    }

    fn delay_us(&mut self, us: u32) {
        self.tl.borrow_mut().delay(us as u64 * 1_000);
    }
}

/// Delay that returns immediately.
pub(crate) struct NoopDelay;

impl DelayNs for NoopDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}
