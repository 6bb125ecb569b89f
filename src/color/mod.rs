mod blend;
mod convert;

pub use blend::{FORBIDDEN_HUE_MAX, FORBIDDEN_HUE_MIN, blend_hsv, lerp, lerp_hue};
pub use convert::{hsv_to_rgb, rgb_to_hsv};
use smart_leds::RGB;

/// Color triple holding 12-bit components.
pub type Rgb = RGB<u16>;

/// Normalized HSV color. All components are in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}
