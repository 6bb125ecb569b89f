//! Ornament breathing generator.
//!
//! Two disjoint four-channel sets take turns: one set ramps a single
//! primary color to the level-scaled ceiling, the other then ramps a
//! white overlay to the same ceiling, and both fade back down together
//! at four times the ramp rate. Each completed cycle swaps the active
//! set and moves to the next primary.

use embassy_time::Duration;

use super::Effect;
use crate::color::Rgb;
use crate::frame::{COMPONENT_MAX, Frame};

const SET_CHANNELS: [[usize; 4]; 2] = [[1, 3, 4, 6], [0, 2, 5, 7]];

const LEVEL_STEP: u16 = 1;
const FADE_STEP: u16 = LEVEL_STEP * 4;

const BASE_PACE_MS: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    ColorRamp,
    WhiteRamp,
    FadeOut,
}

/// Ornament breathing generator state.
#[derive(Debug, Clone)]
pub struct OrnamentEffect {
    levels: [u16; 3],
    white: u16,
    color: usize,
    active_set: usize,
    phase: Phase,
    ceiling: u16,
    pace: Duration,
}

impl OrnamentEffect {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(level: f32) -> Self {
        Self {
            levels: [0; 3],
            white: 0,
            color: 0,
            active_set: 0,
            phase: Phase::ColorRamp,
            ceiling: (f32::from(COMPONENT_MAX) * level) as u16,
            pace: Duration::from_millis((BASE_PACE_MS / level) as u64),
        }
    }

    /// Active channel set and ramp color, for external observation.
    pub fn cycle_position(&self) -> (usize, usize) {
        (self.active_set, self.color)
    }

    fn fill_set(frame: &mut Frame, set: usize, color: Rgb) {
        for &channel in &SET_CHANNELS[set] {
            frame.set(channel, color);
        }
    }

    fn color_level(&self) -> Rgb {
        Rgb {
            r: self.levels[0],
            g: self.levels[1],
            b: self.levels[2],
        }
    }

    fn white_level(&self) -> Rgb {
        Rgb {
            r: self.white,
            g: self.white,
            b: self.white,
        }
    }
}

impl Effect for OrnamentEffect {
    fn step(&mut self, frame: &mut Frame) {
        let overlay_set = (self.active_set + 1) % 2;

        match self.phase {
            Phase::ColorRamp => {
                Self::fill_set(frame, self.active_set, self.color_level());
                self.levels[self.color] += LEVEL_STEP;
                if self.levels[self.color] > self.ceiling {
                    self.phase = Phase::WhiteRamp;
                }
            }
            Phase::WhiteRamp => {
                Self::fill_set(frame, overlay_set, self.white_level());
                self.white += LEVEL_STEP;
                if self.white > self.ceiling {
                    self.phase = Phase::FadeOut;
                }
            }
            Phase::FadeOut => {
                Self::fill_set(frame, self.active_set, self.color_level());
                Self::fill_set(frame, overlay_set, self.white_level());

                self.levels[self.color] = self.levels[self.color].saturating_sub(FADE_STEP);
                self.white = self.white.saturating_sub(FADE_STEP);

                if self.levels[self.color] == 0 && self.white == 0 {
                    Self::fill_set(frame, self.active_set, Rgb::default());
                    Self::fill_set(frame, overlay_set, Rgb::default());
                    self.levels = [0; 3];
                    self.active_set = overlay_set;
                    self.color = (self.color + 1) % 3;
                    self.phase = Phase::ColorRamp;
                }
            }
        }
    }

    fn pace(&self) -> Duration {
        self.pace
    }
}
