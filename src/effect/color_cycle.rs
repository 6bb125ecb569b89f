//! Uniform color cycle generator.
//!
//! Every channel shows the same fully saturated color; the hue sweeps
//! the whole circle in small steps, wrapping forever.

use embassy_time::Duration;

use super::Effect;
use crate::color::{Hsv, hsv_to_rgb};
use crate::frame::{CHANNEL_COUNT, Frame};

const HUE_STEP: f32 = 0.001;

const PACE: Duration = Duration::from_millis(50);

/// Uniform color cycle generator state.
#[derive(Debug, Clone)]
pub struct ColorCycleEffect {
    hue: f32,
    value: f32,
}

impl ColorCycleEffect {
    pub const fn new(level: f32) -> Self {
        Self {
            hue: 0.0,
            value: level,
        }
    }

    /// Current hue, for external observation.
    pub const fn hue(&self) -> f32 {
        self.hue
    }
}

impl Effect for ColorCycleEffect {
    fn step(&mut self, frame: &mut Frame) {
        let color = hsv_to_rgb(Hsv {
            h: self.hue,
            s: 1.0,
            v: self.value,
        });
        for channel in 0..CHANNEL_COUNT {
            frame.set(channel, color);
        }

        self.hue += HUE_STEP;
        if self.hue > 1.0 {
            self.hue -= 1.0;
        }
    }

    fn pace(&self) -> Duration {
        PACE
    }
}
