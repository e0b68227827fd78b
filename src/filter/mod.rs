mod grayscale;
mod hue;
mod intensity;
mod invert;
mod sepia;
mod tint;

pub use grayscale::Grayscale;
pub use hue::Hue;
pub use intensity::{clamp_to_color_range, Intensity, IntensityFilter, MAX_COLOR_VAL};
pub use invert::Invert;
pub use sepia::Sepia;
pub use tint::{parse_rgb, Tint};

use clap::ValueEnum;
use image::Rgb;
use log::debug;

use crate::{error::Result, grid::Pixel};

pub trait Filter {
    fn transform_buffer(&mut self, buffer: &mut Vec<Pixel>);
}

impl<T: IntensityFilter> Filter for T {
    fn transform_buffer(&mut self, buffer: &mut Vec<Pixel>) {
        for px in buffer {
            px.value = self.blend_pixel(px.value);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterKind {
    None,
    Grayscale,
    Invert,
    Sepia,
    Tint,
    Hue,
}

/// The currently selected filter and the strength it is applied at.
#[derive(Debug, Clone)]
pub struct FilterState {
    pub kind: FilterKind,
    pub tint: Rgb<u8>,
    pub hue_degrees: f64,
    multiplier: u32,
    max_multiplier: u32,
}

impl FilterState {
    pub fn new(kind: FilterKind, multiplier: u32, max_multiplier: u32) -> Self {
        Self {
            kind,
            tint: Rgb::from([255, 0, 0]),
            hue_degrees: 180.0,
            multiplier,
            max_multiplier,
        }
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    pub fn max_multiplier(&self) -> u32 {
        self.max_multiplier
    }

    pub fn set_multiplier(&mut self, multiplier: u32) {
        self.multiplier = multiplier;
    }

    /// Builds a fresh filter for the current multiplier. `None` means the grid
    /// is shown unfiltered.
    pub fn build(&self) -> Result<Option<Box<dyn Filter>>> {
        let intensity = Intensity::new(self.multiplier, self.max_multiplier)?;
        debug!("Building {:?} filter at intensity {:.3}", self.kind, intensity.value());

        let filter: Box<dyn Filter> = match self.kind {
            FilterKind::None => return Ok(None),
            FilterKind::Grayscale => Box::new(Grayscale::new(intensity)),
            FilterKind::Invert => Box::new(Invert::new(intensity)),
            FilterKind::Sepia => Box::new(Sepia::new(intensity)),
            FilterKind::Tint => Box::new(Tint::new(self.tint, intensity)),
            FilterKind::Hue => Box::new(Hue::new(self.hue_degrees, intensity)),
        };

        Ok(Some(filter))
    }
}
