use std::path::Path;

use hsl::HSL;
use image::{Rgba, RgbaImage};
use log::debug;
use rand::Rng;

use crate::error::{Error, Result};

/// Largest hue offset of a cell from the grid's base hue on initialization.
const HUE_SPREAD: f64 = 40.0;

pub const MAX_GRID_PIXELS: usize = 1 << 26;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel {
    pub x: u32,
    pub y: u32,
    pub value: Rgba<u8>,
}

#[derive(Debug, Clone)]
pub struct GridState {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl GridState {
    /// Creates a black, opaque grid.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyGrid(width, height));
        }

        let len = (width as usize)
            .checked_mul(height as usize)
            .filter(|len| *len <= MAX_GRID_PIXELS)
            .ok_or(Error::GridTooLarge(width, height))?;

        let mut pixels = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                pixels.push(Pixel {
                    x,
                    y,
                    value: Rgba::from([0, 0, 0, 0xff]),
                });
            }
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn from_image(path: impl AsRef<Path>) -> Result<Self> {
        let image = image::open(path.as_ref())?.to_rgba8();
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::EmptyGrid(width, height));
        }

        let pixels = image
            .enumerate_pixels()
            .map(|(x, y, value)| Pixel {
                x,
                y,
                value: *value,
            })
            .collect();

        debug!("Loaded {width}x{height} grid from {}", path.as_ref().display());
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Recolors every cell around a random base hue.
    pub fn initialize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let base = rng.random_range(0.0..360.0);

        for px in self.pixels.iter_mut() {
            let hue = (base + rng.random_range(-HUE_SPREAD..HUE_SPREAD)).rem_euclid(360.0);
            let (r, g, b) = HSL {
                h: hue,
                s: 1.0,
                l: 0.5,
            }
            .to_rgb();
            px.value = Rgba::from([r, g, b, 0xff]);
        }

        debug!("Initialized grid around hue {base:.1}");
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn to_image(&self) -> RgbaImage {
        buffer_to_image(self.width, self.height, &self.pixels)
    }
}

/// Paints `buffer` onto a `width` x `height` image. Pixels outside the image
/// are dropped.
pub fn buffer_to_image(width: u32, height: u32, buffer: &[Pixel]) -> RgbaImage {
    let mut image = RgbaImage::new(width, height);
    for px in buffer {
        if px.x < width && px.y < height {
            image.put_pixel(px.x, px.y, px.value);
        }
    }
    image
}
