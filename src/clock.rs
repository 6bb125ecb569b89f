//! Calibrated busy-wait timing built on a free-running hardware counter.
//!
//! There is no sleeping and no interrupt involvement: the counter is
//! polled in a spin loop until the requested number of ticks has
//! elapsed. Callers get at-least semantics; quantization makes short
//! delays run long, never short.

use embassy_time::Duration;

/// Blocking delay capability.
///
/// The animation pace and the mode controller's debounce and indicator
/// intervals all go through this trait, so the whole control loop can
/// run against a virtual clock in tests.
pub trait Clock {
    /// Block for at least `micros` microseconds.
    fn delay_micros(&mut self, micros: u32);

    /// Block for at least `millis` milliseconds.
    fn delay_millis(&mut self, millis: u32) {
        for _ in 0..millis {
            self.delay_micros(1000);
        }
    }

    /// Block for at least the given duration.
    fn delay(&mut self, duration: Duration) {
        let mut remaining = duration.as_micros();
        while remaining > u64::from(u32::MAX) {
            self.delay_micros(u32::MAX);
            remaining -= u64::from(u32::MAX);
        }
        #[allow(clippy::cast_possible_truncation)]
        self.delay_micros(remaining as u32);
    }
}

/// A free-running hardware counter.
///
/// The counter wraps at `u16::MAX` and is never reset by this crate;
/// delays are measured as tick differences under wrapping arithmetic.
pub trait TickCounter {
    /// Current counter value.
    fn now(&self) -> u16;

    /// Counter increments per microsecond. Must be at least 1 and small
    /// enough that half the counter range still covers a useful wait
    /// (values up to a few hundred are fine).
    fn ticks_per_micro(&self) -> u32;
}

/// Busy-wait [`Clock`] over a [`TickCounter`].
///
/// Requests longer than the counter can unambiguously measure are
/// decomposed into repeated half-range waits plus a remainder, so a
/// single counter wraparound inside any one wait is tolerated.
pub struct SpinClock<T> {
    counter: T,
}

impl<T: TickCounter> SpinClock<T> {
    pub const fn new(counter: T) -> Self {
        Self { counter }
    }

    /// Spin until `ticks` counter increments have been observed.
    ///
    /// `ticks` must stay within half the counter range so the wrapping
    /// difference below is unambiguous.
    fn spin_ticks(&self, ticks: u16) {
        let start = self.counter.now();
        while self.counter.now().wrapping_sub(start) < ticks {}
    }
}

impl<T: TickCounter> Clock for SpinClock<T> {
    fn delay_micros(&mut self, micros: u32) {
        let ticks_per_micro = self.counter.ticks_per_micro().max(1);
        // Longest single wait that stays unambiguous across a wraparound.
        let chunk_micros = ((u32::from(u16::MAX) / 2) / ticks_per_micro).max(1);
        #[allow(clippy::cast_possible_truncation)]
        let chunk_ticks = (chunk_micros * ticks_per_micro) as u16;

        let mut remaining = micros;
        while remaining > chunk_micros {
            self.spin_ticks(chunk_ticks);
            remaining -= chunk_micros;
        }
        #[allow(clippy::cast_possible_truncation)]
        self.spin_ticks((remaining * ticks_per_micro) as u16);
    }
}
