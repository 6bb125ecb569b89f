//! Animation engine with compile-time known generator variants.
//!
//! All generators are stored in an enum to avoid heap allocations.
//! Each generator implements the `Effect` trait; selection is a
//! 4-variant × 2-brightness-tier product addressed by a single
//! program slot index.

mod color_cycle;
mod ornament;
mod spaceship;
mod sun;

use embassy_time::Duration;

pub use color_cycle::ColorCycleEffect;
pub use ornament::OrnamentEffect;
pub use spaceship::SpaceshipEffect;
pub use sun::SunCycleEffect;

use crate::frame::Frame;

const PROGRAM_NAME_SUN: &str = "sun_cycle";
const PROGRAM_NAME_SPACESHIP: &str = "spaceship_chase";
const PROGRAM_NAME_ORNAMENT: &str = "ornament_breathing";
const PROGRAM_NAME_COLOR_CYCLE: &str = "color_cycle";

const PROGRAM_ID_SUN: u8 = 0;
const PROGRAM_ID_SPACESHIP: u8 = 1;
const PROGRAM_ID_ORNAMENT: u8 = 2;
const PROGRAM_ID_COLOR_CYCLE: u8 = 3;

const PROGRAM_COUNT: u8 = 4;

pub trait Effect {
    /// Advance the animation by one quantum, writing affected channels.
    ///
    /// Sequences are infinite; stepping never runs out. Restart only by
    /// rebuilding the generator.
    fn step(&mut self, frame: &mut Frame);

    /// Delay the caller should hold between steps.
    fn pace(&self) -> Duration;
}

/// Output brightness tier. Slots 0–3 run full, 4–7 run half.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Brightness {
    Full,
    Half,
}

impl Brightness {
    /// Scaling factor applied to generator peaks and pacing.
    pub const fn level(self) -> f32 {
        match self {
            Self::Full => 1.0,
            Self::Half => 0.5,
        }
    }
}

/// Known generator algorithms that can be selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ProgramId {
    SunCycle = PROGRAM_ID_SUN,
    SpaceshipChase = PROGRAM_ID_SPACESHIP,
    OrnamentBreathing = PROGRAM_ID_ORNAMENT,
    ColorCycle = PROGRAM_ID_COLOR_CYCLE,
}

impl ProgramId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PROGRAM_ID_SUN => Self::SunCycle,
            PROGRAM_ID_SPACESHIP => Self::SpaceshipChase,
            PROGRAM_ID_ORNAMENT => Self::OrnamentBreathing,
            PROGRAM_ID_COLOR_CYCLE => Self::ColorCycle,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SunCycle => PROGRAM_NAME_SUN,
            Self::SpaceshipChase => PROGRAM_NAME_SPACESHIP,
            Self::OrnamentBreathing => PROGRAM_NAME_ORNAMENT,
            Self::ColorCycle => PROGRAM_NAME_COLOR_CYCLE,
        }
    }

    /// Build a fresh generator at the given brightness level.
    pub fn to_slot(self, level: f32) -> EffectSlot {
        match self {
            Self::SunCycle => EffectSlot::Sun(SunCycleEffect::new(level)),
            Self::SpaceshipChase => EffectSlot::Spaceship(SpaceshipEffect::new(level)),
            Self::OrnamentBreathing => EffectSlot::Ornament(OrnamentEffect::new(level)),
            Self::ColorCycle => EffectSlot::Cycle(ColorCycleEffect::new(level)),
        }
    }
}

/// Program slot index selecting one generator × brightness combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProgramSlot(u8);

impl ProgramSlot {
    /// Total number of selectable slots.
    pub const COUNT: u8 = PROGRAM_COUNT * 2;

    pub const fn new(raw: u8) -> Self {
        Self(raw % Self::COUNT)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// Following slot, wrapping past the last.
    pub const fn next(self) -> Self {
        Self::new(self.0 + 1)
    }

    pub const fn program(self) -> ProgramId {
        match self.0 % PROGRAM_COUNT {
            PROGRAM_ID_SUN => ProgramId::SunCycle,
            PROGRAM_ID_SPACESHIP => ProgramId::SpaceshipChase,
            PROGRAM_ID_ORNAMENT => ProgramId::OrnamentBreathing,
            _ => ProgramId::ColorCycle,
        }
    }

    pub const fn brightness(self) -> Brightness {
        if self.0 < PROGRAM_COUNT {
            Brightness::Full
        } else {
            Brightness::Half
        }
    }

    /// Build the slot's generator with all state at its initial values.
    pub fn to_effect(self) -> EffectSlot {
        self.program().to_slot(self.brightness().level())
    }
}

/// Generator slot - enum containing all possible generators.
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// Radial day-cycle simulation over four color bands
    Sun(SunCycleEffect),
    /// Two counter-phased four-position chases
    Spaceship(SpaceshipEffect),
    /// Alternating primary/white breathing on two channel sets
    Ornament(OrnamentEffect),
    /// Uniform hue sweep across every channel
    Cycle(ColorCycleEffect),
}

impl EffectSlot {
    /// Advance the active generator by one step.
    pub fn step(&mut self, frame: &mut Frame) {
        match self {
            Self::Sun(effect) => effect.step(frame),
            Self::Spaceship(effect) => effect.step(frame),
            Self::Ornament(effect) => effect.step(frame),
            Self::Cycle(effect) => effect.step(frame),
        }
    }

    /// Inter-step delay of the active generator.
    pub fn pace(&self) -> Duration {
        match self {
            Self::Sun(effect) => effect.pace(),
            Self::Spaceship(effect) => effect.pace(),
            Self::Ornament(effect) => effect.pace(),
            Self::Cycle(effect) => effect.pace(),
        }
    }

    /// Get the program ID for external observation.
    pub fn id(&self) -> ProgramId {
        match self {
            Self::Sun(_) => ProgramId::SunCycle,
            Self::Spaceship(_) => ProgramId::SpaceshipChase,
            Self::Ornament(_) => ProgramId::OrnamentBreathing,
            Self::Cycle(_) => ProgramId::ColorCycle,
        }
    }
}
