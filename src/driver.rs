//! Bit-serial output protocol for the daisy-chained driver ICs.
//!
//! The chain is fed over a two-line data/clock interface and committed
//! with a shared latch/blank pair. Shift-out never disturbs the visible
//! frame; the new frame appears atomically at the latch edge. The link
//! is open-loop: nothing is acknowledged, so nothing is retried.

use embedded_hal::digital::OutputPin;

use crate::OutputLink;
use crate::frame::{CHANNEL_COUNT, Frame};

const BITS_PER_COMPONENT: u32 = 12;

/// Four-wire link to the driver chain.
///
/// Devices are daisy-chained, so channels are shifted out in descending
/// index order: the first bits pushed end up at the far end of the
/// chain. Within a channel the components go out blue, red, green, each
/// most-significant-bit first.
pub struct SerialLink<D, K, L, B> {
    data: D,
    sclk: K,
    xlat: L,
    blank: B,
}

impl<D, K, L, B, E> SerialLink<D, K, L, B>
where
    D: OutputPin<Error = E>,
    K: OutputPin<Error = E>,
    L: OutputPin<Error = E>,
    B: OutputPin<Error = E>,
{
    pub fn new(data: D, sclk: K, xlat: L, blank: B) -> Self {
        Self {
            data,
            sclk,
            xlat,
            blank,
        }
    }

    /// Shift one component out, most-significant bit first, one clock
    /// rise and fall per bit.
    fn shift_component(&mut self, value: u16) -> Result<(), E> {
        let mut mask = 1u16 << (BITS_PER_COMPONENT - 1);
        while mask != 0 {
            if value & mask != 0 {
                self.data.set_high()?;
            } else {
                self.data.set_low()?;
            }
            self.sclk.set_high()?;
            self.sclk.set_low()?;
            mask >>= 1;
        }
        Ok(())
    }
}

impl<D, K, L, B, E> OutputLink for SerialLink<D, K, L, B>
where
    D: OutputPin<Error = E>,
    K: OutputPin<Error = E>,
    L: OutputPin<Error = E>,
    B: OutputPin<Error = E>,
{
    type Error = E;

    fn transmit(&mut self, frame: &Frame) -> Result<(), E> {
        for channel in (0..CHANNEL_COUNT).rev() {
            for component in frame.channel_components(channel) {
                self.shift_component(component)?;
            }
        }

        // Latch the shifted frame while blank is held, so the chain's
        // grayscale clock restarts together with the new frame.
        self.blank.set_high()?;
        self.xlat.set_high()?;
        self.xlat.set_low()?;
        self.blank.set_low()?;
        Ok(())
    }
}
