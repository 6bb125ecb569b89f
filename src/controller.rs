//! Mode state machine and main-loop orchestration.
//!
//! One `run_once` call is one main-loop iteration: consume a pending
//! program change, derive the operating mode from the switch inputs,
//! sample ambient light in sense mode, then advance and transmit the
//! active animation.

use embassy_time::Duration;

use crate::OutputLink;
use crate::cell::ProgramSelect;
use crate::clock::Clock;
use crate::color::Rgb;
use crate::effect::{Brightness, EffectSlot};
use crate::frame::{COMPONENT_MAX, Frame};

/// Channel whose flash signals the active brightness tier after a
/// program change.
const INDICATOR_CHANNEL: usize = 0;

/// Operating mode derived from the switch inputs each iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Output blanked, no animation.
    Off,
    /// Animate unless ambient light says it is too bright.
    Sense,
    /// Animate unconditionally.
    On,
}

/// Two-position mode switch.
///
/// The inputs are mutually exclusive in intended use; with neither
/// asserted the controller treats the switch as off.
pub trait ModeSwitch {
    fn sense_selected(&mut self) -> bool;
    fn on_selected(&mut self) -> bool;
}

/// Ambient light sensor collaborator.
///
/// Conversion timing and channel selection are the implementation's
/// concern; the controller only starts conversions and reads codes.
pub trait AmbientSensor {
    /// Begin a new conversion.
    fn start_sample(&mut self);

    /// Whether the running conversion has finished.
    fn sample_ready(&mut self) -> bool;

    /// Brightness code of the finished conversion.
    fn read_sample(&mut self) -> u16;
}

/// Configuration for the mode controller.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Ambient code above which sense mode blanks the output.
    pub sense_threshold: u16,
    /// Blackout interval after a program change.
    pub debounce: Duration,
    /// How long the brightness-tier indicator stays lit.
    pub tier_flash: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            sense_threshold: 260,
            debounce: Duration::from_millis(500),
            tier_flash: Duration::from_millis(400),
        }
    }
}

/// Mode controller - the main orchestrator.
pub struct Controller<'a, O, C, S, A> {
    // External dependencies and configuration
    output: O,
    clock: C,
    switch: S,
    sensor: A,
    select: &'a ProgramSelect,
    config: ControllerConfig,

    // Internal state
    frame: Frame,
    effect: EffectSlot,
    mode: Mode,
    reinit: bool,
    ambient: u16,
}

impl<'a, O, C, S, A> Controller<'a, O, C, S, A>
where
    O: OutputLink,
    C: Clock,
    S: ModeSwitch,
    A: AmbientSensor,
{
    pub fn new(
        output: O,
        clock: C,
        switch: S,
        sensor: A,
        select: &'a ProgramSelect,
        config: ControllerConfig,
    ) -> Self {
        Self {
            output,
            clock,
            switch,
            sensor,
            select,
            config,
            frame: Frame::new(),
            effect: select.current().to_effect(),
            mode: Mode::Off,
            reinit: false,
            ambient: 0,
        }
    }

    /// Run one main-loop iteration.
    ///
    /// Call this continuously. The asynchronous program-advance handler
    /// may fire at any point; its effects are observed at the start of
    /// the next call.
    pub fn run_once(&mut self) -> Result<(), O::Error> {
        if let Some(slot) = self.select.take_pending() {
            #[cfg(feature = "defmt")]
            defmt::debug!("program change -> {}", slot);
            self.blank()?;
            self.reinit = true;
            self.clock.delay(self.config.debounce);
            self.flash_tier(slot.brightness())?;
        }
        self.select.rearm();

        let mode = self.read_mode();
        if mode == Mode::Off {
            if self.mode != Mode::Off {
                #[cfg(feature = "defmt")]
                defmt::debug!("mode -> off");
                self.blank()?;
            }
            self.mode = Mode::Off;
            return Ok(());
        }

        // Leaving off: drop whatever the frame held before it can flash.
        if self.mode == Mode::Off {
            self.blank()?;
        }

        if mode == Mode::Sense {
            if self.mode != Mode::Sense {
                #[cfg(feature = "defmt")]
                defmt::debug!("mode -> sense");
                self.blank()?;
                self.sensor.start_sample();
            }
            self.mode = Mode::Sense;

            // Free-running sampling: reading a finished conversion
            // immediately starts the next one.
            if self.sensor.sample_ready() {
                self.ambient = self.sensor.read_sample();
                self.sensor.start_sample();
            }

            if self.ambient > self.config.sense_threshold {
                // Too bright for a nightlight; skip this iteration
                // without leaving sense mode. A pending re-init stays
                // pending until an animation step consumes it.
                self.blank()?;
                return Ok(());
            }
        } else {
            #[cfg(feature = "defmt")]
            if self.mode != Mode::On {
                defmt::debug!("mode -> on");
            }
            self.mode = Mode::On;
        }

        if self.reinit {
            self.effect = self.select.current().to_effect();
            self.reinit = false;
        }
        self.effect.step(&mut self.frame);
        self.output.transmit(&self.frame)?;
        self.clock.delay(self.effect.pace());
        Ok(())
    }

    /// Last derived operating mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current frame contents.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    fn read_mode(&mut self) -> Mode {
        if self.switch.sense_selected() {
            Mode::Sense
        } else if self.switch.on_selected() {
            Mode::On
        } else {
            Mode::Off
        }
    }

    fn blank(&mut self) -> Result<(), O::Error> {
        self.frame.clear();
        self.output.transmit(&self.frame)
    }

    fn flash_tier(&mut self, brightness: Brightness) -> Result<(), O::Error> {
        let indicator = match brightness {
            Brightness::Full => Rgb {
                r: COMPONENT_MAX,
                g: 0,
                b: 0,
            },
            Brightness::Half => Rgb {
                r: 0,
                g: 0,
                b: COMPONENT_MAX,
            },
        };
        self.frame.set(INDICATOR_CHANNEL, indicator);
        self.output.transmit(&self.frame)?;
        self.clock.delay(self.config.tier_flash);
        self.blank()
    }
}
