use super::{Intensity, IntensityFilter, MAX_COLOR_VAL};

pub struct Invert {
    intensity: Intensity,
}

impl Invert {
    pub fn new(intensity: Intensity) -> Self {
        Self { intensity }
    }
}

impl IntensityFilter for Invert {
    fn intensity(&self) -> Intensity {
        self.intensity
    }

    fn filter_rgb(&self, rgb: [u8; 3]) -> [i32; 3] {
        rgb.map(|c| (MAX_COLOR_VAL - c) as i32)
    }
}
