use hsl::HSL;

use super::{Intensity, IntensityFilter};

/// Rotates every pixel's hue by a fixed angle.
pub struct Hue {
    degrees: f64,
    intensity: Intensity,
}

impl Hue {
    pub fn new(degrees: f64, intensity: Intensity) -> Self {
        Self { degrees, intensity }
    }
}

impl IntensityFilter for Hue {
    fn intensity(&self) -> Intensity {
        self.intensity
    }

    fn filter_rgb(&self, rgb: [u8; 3]) -> [i32; 3] {
        let mut hsl = HSL::from_rgb(&rgb);
        hsl.h = rotate_hue(hsl.h, self.degrees);
        let (r, g, b) = hsl.to_rgb();

        [r as i32, g as i32, b as i32]
    }
}

/// Adds `degrees` to `hue`, wrapping into `[0, 360)`.
pub fn rotate_hue(hue: f64, degrees: f64) -> f64 {
    (hue + degrees).rem_euclid(360.0)
}
