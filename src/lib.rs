#![no_std]

pub mod cell;
pub mod clock;
pub mod color;
pub mod controller;
pub mod driver;
pub mod effect;
pub mod frame;

pub use cell::ProgramSelect;
pub use clock::{Clock, SpinClock, TickCounter};
pub use color::{Hsv, Rgb};
pub use controller::{AmbientSensor, Controller, ControllerConfig, Mode, ModeSwitch};
pub use driver::SerialLink;
pub use effect::{Brightness, Effect, EffectSlot, ProgramId, ProgramSlot};
pub use frame::{CHANNEL_COUNT, COMPONENT_MAX, Frame};

pub use embassy_time::Duration;

/// Abstract frame output trait
///
/// Implement this trait to support different hardware platforms.
/// The mode controller is generic over this trait.
pub trait OutputLink {
    type Error;

    /// Commit a frame to the physical driver chain.
    fn transmit(&mut self, frame: &Frame) -> Result<(), Self::Error>;
}
