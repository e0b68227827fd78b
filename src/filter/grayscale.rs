use super::{clamp_to_color_range, Intensity, IntensityFilter};

pub struct Grayscale {
    intensity: Intensity,
}

impl Grayscale {
    pub fn new(intensity: Intensity) -> Self {
        Self { intensity }
    }
}

impl IntensityFilter for Grayscale {
    fn intensity(&self) -> Intensity {
        self.intensity
    }

    fn filter_rgb(&self, rgb: [u8; 3]) -> [i32; 3] {
        let luma = luminance(rgb);
        [luma; 3]
    }
}

/// Rec. 601 luma, truncated.
pub fn luminance(rgb: [u8; 3]) -> i32 {
    clamp_to_color_range(0.299 * rgb[0] as f64 + 0.587 * rgb[1] as f64 + 0.114 * rgb[2] as f64)
        as i32
}
