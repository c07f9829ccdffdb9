//! Color type and hue-wheel conversion.
//!
//! Hues are expressed on the six-sided wheel `[0.0, 6.0)`: `0` is red, `2` is
//! green and `4` is blue, with each unit step covering one sextant. The
//! conversion itself is palette's; this module adds the input normalisation
//! and the 8-bit quantisation used by strip drivers.

use palette::{FromColor, Hsv, Srgb};

/// An 8-bit-per-channel strip color.
pub type Color = Srgb<u8>;

/// All channels off.
pub const BLACK: Color = Color::new(0, 0, 0);

/// Sentinel written to cells that are not lit. Same value as [`BLACK`].
pub const OFF: Color = BLACK;

pub const RED: Color = Color::new(255, 0, 0);
pub const GREEN: Color = Color::new(0, 255, 0);
pub const BLUE: Color = Color::new(0, 0, 255);
pub const WHITE: Color = Color::new(255, 255, 255);

/// Number of sextants on the hue wheel.
pub const HUE_SEXTANTS: f32 = 6.0;

const DEGREES_PER_SEXTANT: f32 = 60.0;

/// Converts a hue/saturation/value triple to an 8-bit color.
///
/// Inputs are normalised rather than rejected:
/// * `hue` wraps modulo 6, so `6.0` is red again and `-1.0` equals `5.0`.
///   A non-finite hue is treated as `0.0`.
/// * `saturation` and `value` are clamped to `[0.0, 1.0]`; NaN becomes `0.0`.
///
/// Each resulting channel is `round(255 * x)`.
pub fn hsv_to_color(hue: f32, saturation: f32, value: f32) -> Color {
    let hsv: Hsv = Hsv::new(
        wrap_hue(hue) * DEGREES_PER_SEXTANT,
        unit(saturation),
        unit(value),
    );
    let rgb = Srgb::from_color(hsv);

    Color::new(channel(rgb.red), channel(rgb.green), channel(rgb.blue))
}

/// Fully saturated, full brightness color for a hue.
#[inline]
pub fn hue(hue: f32) -> Color {
    hsv_to_color(hue, 1.0, 1.0)
}

/// Hue of element `index` in a rainbow spread over `len` elements.
///
/// The wheel is divided into 256 steps and each element advances by
/// `256 / len` of them (integer division), so strips longer than 256
/// elements get a step of zero and show a single hue.
pub fn rainbow_hue(index: usize, len: usize) -> f32 {
    if len == 0 {
        return 0.0;
    }
    let step = 256 / len;
    let position = (index * step) % 256;
    position as f32 * HUE_SEXTANTS / 256.0
}

fn wrap_hue(hue: f32) -> f32 {
    if !hue.is_finite() {
        return 0.0;
    }
    let wrapped = libm::fmodf(hue, HUE_SEXTANTS);
    let wrapped = if wrapped < 0.0 {
        wrapped + HUE_SEXTANTS
    } else {
        wrapped
    };
    // -tiny + 6.0 rounds to 6.0 in f32
    if wrapped >= HUE_SEXTANTS { 0.0 } else { wrapped }
}

fn unit(x: f32) -> f32 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

fn channel(x: f32) -> u8 {
    libm::roundf(x * 255.0).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sextant_boundaries_hit_primaries_and_secondaries() {
        assert_eq!(hsv_to_color(0.0, 1.0, 1.0), RED);
        assert_eq!(hsv_to_color(1.0, 1.0, 1.0), Color::new(255, 255, 0));
        assert_eq!(hsv_to_color(2.0, 1.0, 1.0), GREEN);
        assert_eq!(hsv_to_color(3.0, 1.0, 1.0), Color::new(0, 255, 255));
        assert_eq!(hsv_to_color(4.0, 1.0, 1.0), BLUE);
        assert_eq!(hsv_to_color(5.0, 1.0, 1.0), Color::new(255, 0, 255));
    }

    #[test]
    fn midpoint_of_first_sextant_is_orange() {
        assert_eq!(hsv_to_color(0.5, 1.0, 1.0), Color::new(255, 128, 0));
    }

    #[test]
    fn hue_wraps_instead_of_overflowing() {
        assert_eq!(hsv_to_color(6.0, 1.0, 1.0), RED);
        assert_eq!(hsv_to_color(-2.0, 1.0, 1.0), BLUE);
        assert_eq!(hsv_to_color(f32::NAN, 1.0, 1.0), RED);
        assert_eq!(hsv_to_color(f32::INFINITY, 1.0, 1.0), RED);
    }

    #[test]
    fn saturation_and_value_are_clamped() {
        assert_eq!(hsv_to_color(0.0, 2.0, 1.5), RED);
        assert_eq!(hsv_to_color(0.0, -1.0, 1.0), WHITE);
        assert_eq!(hsv_to_color(3.0, 1.0, -0.5), BLACK);
        assert_eq!(hsv_to_color(3.0, f32::NAN, f32::NAN), BLACK);
    }

    #[test]
    fn rainbow_hue_spreads_one_wheel_over_the_strip() {
        assert_eq!(rainbow_hue(0, 4), 0.0);
        assert_eq!(rainbow_hue(1, 4), 1.5);
        assert_eq!(rainbow_hue(2, 4), 3.0);
        assert_eq!(rainbow_hue(3, 4), 4.5);
        assert_eq!(rainbow_hue(5, 300), 0.0);
        assert_eq!(rainbow_hue(0, 0), 0.0);
    }
}
