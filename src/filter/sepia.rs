use super::{Intensity, IntensityFilter};

const SEPIA: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

pub struct Sepia {
    intensity: Intensity,
}

impl Sepia {
    pub fn new(intensity: Intensity) -> Self {
        Self { intensity }
    }
}

impl IntensityFilter for Sepia {
    fn intensity(&self) -> Intensity {
        self.intensity
    }

    // Bright inputs exceed 255 here; the blend clamps them.
    fn filter_rgb(&self, rgb: [u8; 3]) -> [i32; 3] {
        SEPIA.map(|row| {
            (row[0] * rgb[0] as f64 + row[1] * rgb[1] as f64 + row[2] * rgb[2] as f64) as i32
        })
    }
}
