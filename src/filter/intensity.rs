use image::Rgba;

use crate::error::{Error, Result};

pub const MAX_COLOR_VAL: u8 = 255;

/// Strength at which a filter is applied, fixed at construction as
/// `multiplier / max_multiplier`.
///
/// A multiplier above the maximum is allowed and makes the blend overshoot the
/// filtered value; the result is still clamped into the color range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intensity(f64);

impl Intensity {
    pub const FULL: Intensity = Intensity(1.0);

    pub fn new(multiplier: u32, max_multiplier: u32) -> Result<Self> {
        if max_multiplier == 0 {
            return Err(Error::ZeroMaxMultiplier);
        }

        Ok(Self(multiplier as f64 / max_multiplier as f64))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Linear blend `original * (1 - intensity) + filtered * intensity`,
    /// clamped into `[0, 255]`.
    pub fn apply(&self, original: i32, filtered: i32) -> u8 {
        clamp_to_color_range(original as f64 * (1.0 - self.0) + filtered as f64 * self.0)
    }
}

/// Truncates `value` toward zero and bounds it to `[0, 255]`.
///
/// Truncation happens before the upper bound check, so `255.9` yields `255`.
pub fn clamp_to_color_range(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }

    (value.trunc() as i64).clamp(0, MAX_COLOR_VAL as i64) as u8
}

/// A color filter whose full-strength effect is blended with the original
/// pixel at a configured [`Intensity`].
///
/// Implementors only describe what the filter does at full strength; the blend
/// is shared by every filter through [`IntensityFilter::blend_pixel`].
pub trait IntensityFilter {
    fn intensity(&self) -> Intensity;

    /// Full-strength result for one pixel. Values may fall outside the color
    /// range.
    fn filter_rgb(&self, rgb: [u8; 3]) -> [i32; 3];

    fn blend_pixel(&self, px: Rgba<u8>) -> Rgba<u8> {
        let intensity = self.intensity();
        let filtered = self.filter_rgb([px[0], px[1], px[2]]);

        Rgba::from([
            intensity.apply(px[0] as i32, filtered[0]),
            intensity.apply(px[1] as i32, filtered[1]),
            intensity.apply(px[2] as i32, filtered[2]),
            px[3],
        ])
    }
}
