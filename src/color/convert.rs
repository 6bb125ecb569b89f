use libm::{floorf, roundf};

use crate::color::{Hsv, Rgb};
use crate::frame::COMPONENT_MAX;

/// Convert a normalized HSV color to 12-bit RGB components.
///
/// Standard six-sector piecewise conversion: the hue circle is split at
/// `floor(h * 6)` and the fractional remainder interpolates the p/q/t
/// intermediate terms.
pub fn hsv_to_rgb(color: Hsv) -> Rgb {
    let Hsv { h, s, v } = color;

    let sector = floorf(h * 6.0);
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    #[allow(clippy::cast_possible_truncation)]
    let (r, g, b) = match (sector as i32).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb {
        r: scale_component(r),
        g: scale_component(g),
        b: scale_component(b),
    }
}

/// Convert 12-bit RGB components back to normalized HSV.
///
/// Inverse of [`hsv_to_rgb`]; hue is undefined (reported as 0) when the
/// color is achromatic.
pub fn rgb_to_hsv(color: Rgb) -> Hsv {
    let max = color.r.max(color.g).max(color.b);
    let min = color.r.min(color.g).min(color.b);

    let depth = f32::from(COMPONENT_MAX);
    let v = f32::from(max) / depth;
    let delta = f32::from(max - min) / depth;
    let s = if max == 0 { 0.0 } else { delta / v };

    if max == min {
        return Hsv { h: 0.0, s, v };
    }

    let r = f32::from(color.r) / depth;
    let g = f32::from(color.g) / depth;
    let b = f32::from(color.b) / depth;

    let mut h = if max == color.r {
        let mut h = (g - b) / delta;
        if color.g < color.b {
            h += 6.0;
        }
        h
    } else if max == color.g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    h /= 6.0;

    Hsv { h, s, v }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_component(component: f32) -> u16 {
    roundf(component * f32::from(COMPONENT_MAX)) as u16
}
