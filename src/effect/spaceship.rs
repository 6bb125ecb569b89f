//! Spaceship chase generator.
//!
//! Two four-position rings chase in lockstep: each ring brightens its
//! lead channel toward a shared oscillating ceiling while fading the
//! channel behind it, and advances the lead once the ceiling is
//! reached. The rings run complementary ceilings and opposite hues, so
//! one breathes up while the other breathes down.

use embassy_time::Duration;

use super::Effect;
use crate::color::{Hsv, hsv_to_rgb};
use crate::frame::Frame;

const RING_POSITIONS: usize = 4;

// Outer and inner ring channel layouts.
const OUTER_CHANNELS: [usize; RING_POSITIONS] = [5, 6, 0, 3];
const INNER_CHANNELS: [usize; RING_POSITIONS] = [1, 7, 4, 2];

const VALUE_STEP: f32 = 0.004;
const CEILING_STEP: f32 = 0.0004;
const HUE_STEP: f32 = 0.0004;
const INNER_HUE_OFFSET: f32 = 0.5;

const BASE_PACE_MS: f32 = 10.0;

#[derive(Debug, Clone)]
struct Ring {
    channels: [usize; RING_POSITIONS],
    values: [f32; RING_POSITIONS],
    lead: usize,
    advance: bool,
    hue: f32,
}

impl Ring {
    const fn new(channels: [usize; RING_POSITIONS], lead: usize, hue: f32) -> Self {
        Self {
            channels,
            values: [0.0; RING_POSITIONS],
            lead,
            advance: false,
            hue,
        }
    }

    fn step(&mut self, ceiling: f32, frame: &mut Frame) {
        let trail = (self.lead + RING_POSITIONS - 1) % RING_POSITIONS;

        if self.values[self.lead] >= ceiling {
            self.values[self.lead] = ceiling;
            // The trailing light must read zero before the lead moves
            // on, so the advance waits for the next step.
            self.values[trail] = 0.0;
            self.advance = true;
        } else {
            self.values[self.lead] = (self.values[self.lead] + VALUE_STEP).min(ceiling);
            self.values[trail] = (self.values[trail] - VALUE_STEP).max(0.0);
        }

        for position in [self.lead, trail] {
            let color = hsv_to_rgb(Hsv {
                h: self.hue,
                s: 1.0,
                v: self.values[position],
            });
            frame.set(self.channels[position], color);
        }
    }

    fn finish_step(&mut self) {
        if self.advance {
            self.lead = (self.lead + 1) % RING_POSITIONS;
            self.advance = false;
        }
    }
}

/// Spaceship chase generator state.
#[derive(Debug, Clone)]
pub struct SpaceshipEffect {
    outer: Ring,
    inner: Ring,
    ceiling: f32,
    ceiling_step: f32,
    peak: f32,
    pace: Duration,
}

impl SpaceshipEffect {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(level: f32) -> Self {
        Self {
            outer: Ring::new(OUTER_CHANNELS, 0, 1.0),
            inner: Ring::new(INNER_CHANNELS, 2, INNER_HUE_OFFSET),
            ceiling: level,
            ceiling_step: CEILING_STEP,
            peak: level,
            pace: Duration::from_millis((BASE_PACE_MS / level) as u64),
        }
    }

    /// Lead positions of the outer and inner rings.
    pub fn leads(&self) -> (usize, usize) {
        (self.outer.lead, self.inner.lead)
    }
}

impl Effect for SpaceshipEffect {
    fn step(&mut self, frame: &mut Frame) {
        self.outer.step(self.ceiling, frame);
        self.inner.step(self.peak - self.ceiling, frame);

        self.outer.hue += HUE_STEP;
        if self.outer.hue > 1.0 {
            self.outer.hue = 0.0;
        }
        self.inner.hue = self.outer.hue + INNER_HUE_OFFSET;
        if self.inner.hue > 1.0 {
            self.inner.hue -= 1.0;
        }

        // The ceiling breathes between dark and the level-scaled peak,
        // reversing direction at either bound.
        self.ceiling += self.ceiling_step;
        if self.ceiling > self.peak {
            self.ceiling = self.peak;
            self.ceiling_step = -self.ceiling_step;
        } else if self.ceiling < 0.0 {
            self.ceiling = 0.0;
            self.ceiling_step = -self.ceiling_step;
        }

        self.outer.finish_step();
        self.inner.finish_step();
    }

    fn pace(&self) -> Duration {
        self.pace
    }
}
