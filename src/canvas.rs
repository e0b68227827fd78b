use std::{fs, path::PathBuf};

use image::RgbaImage;
use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    error::Result,
    filter::FilterState,
    grid::{buffer_to_image, GridState},
};

#[derive(Debug, Clone)]
pub struct CanvasState {
    pub grid: GridState,
    pub filter: FilterState,
}

pub struct Canvas {
    state: CanvasState,
    capture_dir: PathBuf,
    rng: StdRng,
    captures: u32,
}

impl Canvas {
    pub fn new(state: CanvasState, capture_dir: impl Into<PathBuf>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            state,
            capture_dir: capture_dir.into(),
            rng,
            captures: 0,
        }
    }

    pub fn state(&self) -> &CanvasState {
        &self.state
    }

    pub fn initialize(&mut self) {
        self.state.grid.initialize(&mut self.rng);
    }

    pub fn max_multiplier(&self) -> u32 {
        self.state.filter.max_multiplier()
    }

    pub fn set_multiplier(&mut self, multiplier: u32) {
        self.state.filter.set_multiplier(multiplier);
    }

    /// Applies the selected filter to a copy of the grid.
    pub fn render(&self) -> Result<RgbaImage> {
        let grid = &self.state.grid;
        let Some(mut filter) = self.state.filter.build()? else {
            return Ok(grid.to_image());
        };

        let mut buffer = grid.pixels().to_vec();
        filter.transform_buffer(&mut buffer);

        Ok(buffer_to_image(grid.width(), grid.height(), &buffer))
    }

    /// Renders the canvas and writes it as a numbered PNG into the capture
    /// directory.
    pub fn save_capture(&mut self) -> Result<PathBuf> {
        let image = self.render()?;

        fs::create_dir_all(&self.capture_dir)?;
        let path = self.capture_dir.join(format!(
            "capture-{:04}-m{:02}.png",
            self.captures,
            self.state.filter.multiplier()
        ));
        image.save(&path)?;
        self.captures += 1;

        info!("Saved capture {}", path.display());
        debug!(
            "Capture used {:?} at {}/{}",
            self.state.filter.kind,
            self.state.filter.multiplier(),
            self.state.filter.max_multiplier()
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterKind;
    use image::Rgba;

    fn canvas(kind: FilterKind, multiplier: u32, dir: &std::path::Path) -> Canvas {
        let state = CanvasState {
            grid: GridState::new(2, 2).unwrap(),
            filter: FilterState::new(kind, multiplier, 4),
        };
        Canvas::new(state, dir, Some(3))
    }

    #[test]
    fn test_render_does_not_touch_grid() {
        let dir = tempfile::tempdir().unwrap();
        let canvas = canvas(FilterKind::Invert, 4, dir.path());

        let image = canvas.render().unwrap();
        assert_eq!(*image.get_pixel(0, 0), Rgba::from([255, 255, 255, 255]));
        assert_eq!(
            canvas.state().grid.pixels()[0].value,
            Rgba::from([0, 0, 0, 255])
        );
    }

    #[test]
    fn test_render_at_intensity() {
        let dir = tempfile::tempdir().unwrap();
        let mut canvas = canvas(FilterKind::Invert, 1, dir.path());
        // 255 * 0.25 = 63.75
        assert_eq!(
            *canvas.render().unwrap().get_pixel(1, 1),
            Rgba::from([63, 63, 63, 255])
        );

        canvas.set_multiplier(2);
        assert_eq!(
            *canvas.render().unwrap().get_pixel(1, 1),
            Rgba::from([127, 127, 127, 255])
        );
    }

    #[test]
    fn test_initialize_is_deterministic_with_seed() {
        let dir = tempfile::tempdir().unwrap();
        let mut a = canvas(FilterKind::None, 0, dir.path());
        let mut b = canvas(FilterKind::None, 0, dir.path());
        a.initialize();
        b.initialize();
        assert_eq!(a.state().grid.pixels(), b.state().grid.pixels());
    }

    #[test]
    fn test_save_capture_numbers_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("clips");
        let mut canvas = canvas(FilterKind::Grayscale, 2, &out);

        let first = canvas.save_capture().unwrap();
        let second = canvas.save_capture().unwrap();

        assert_eq!(first, out.join("capture-0000-m02.png"));
        assert_eq!(second, out.join("capture-0001-m02.png"));
        assert!(first.is_file() && second.is_file());

        let saved = image::open(&first).unwrap().to_rgba8();
        assert_eq!(saved.dimensions(), (2, 2));
    }
}
