use image::Rgb;

use super::{Intensity, IntensityFilter};
use crate::error::{Error, Result};

/// Pulls every channel halfway toward a fixed color.
pub struct Tint {
    color: Rgb<u8>,
    intensity: Intensity,
}

impl Tint {
    pub fn new(color: Rgb<u8>, intensity: Intensity) -> Self {
        Self { color, intensity }
    }
}

impl IntensityFilter for Tint {
    fn intensity(&self) -> Intensity {
        self.intensity
    }

    fn filter_rgb(&self, rgb: [u8; 3]) -> [i32; 3] {
        let mut out = [0; 3];
        for i in 0..3 {
            out[i] = (rgb[i] as i32 + self.color[i] as i32) / 2;
        }
        out
    }
}

/// Parses `rrggbb`, with or without a leading `#`.
pub fn parse_rgb(color: &str) -> Result<Rgb<u8>> {
    let hex = color.strip_prefix('#').unwrap_or(color);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::InvalidColor(color.to_string()));
    }

    let mut buf = [0; 3];
    for i in 0..3 {
        let idx = i * 2;
        buf[i] = u8::from_str_radix(&hex[idx..(idx + 2)], 16)
            .map_err(|_| Error::InvalidColor(color.to_string()))?;
    }

    Ok(Rgb::from(buf))
}
