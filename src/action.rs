use std::path::PathBuf;

use clap::ValueEnum;
use log::info;

use crate::{canvas::Canvas, error::Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Recolor the grid
    Initialize,
    /// Save the filtered canvas once
    SaveCapture,
    /// Save one capture per multiplier in [0, max multiplier)
    SaveAllClips,
}

#[derive(Debug, Default, PartialEq)]
pub struct Outcome {
    pub saved: Vec<PathBuf>,
}

type Handler = fn(&mut Canvas) -> Result<Outcome>;

impl Action {
    fn handler(self) -> Handler {
        match self {
            Action::Initialize => initialize,
            Action::SaveCapture => save_capture,
            Action::SaveAllClips => save_all_clips,
        }
    }
}

pub fn dispatch(action: Action, canvas: &mut Canvas) -> Result<Outcome> {
    action.handler()(canvas)
}

fn initialize(canvas: &mut Canvas) -> Result<Outcome> {
    canvas.initialize();
    Ok(Outcome::default())
}

fn save_capture(canvas: &mut Canvas) -> Result<Outcome> {
    Ok(Outcome {
        saved: vec![canvas.save_capture()?],
    })
}

fn save_all_clips(canvas: &mut Canvas) -> Result<Outcome> {
    let max = canvas.max_multiplier();
    info!("Saving {max} clips");

    let mut saved = Vec::with_capacity(max as usize);
    for multiplier in 0..max {
        canvas.set_multiplier(multiplier);
        saved.push(canvas.save_capture()?);
    }

    Ok(Outcome { saved })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        canvas::CanvasState,
        filter::{FilterKind, FilterState},
        grid::GridState,
    };
    use image::Rgba;

    fn canvas(dir: &std::path::Path, max_multiplier: u32) -> Canvas {
        let state = CanvasState {
            grid: GridState::new(3, 1).unwrap(),
            filter: FilterState::new(FilterKind::Invert, 0, max_multiplier),
        };
        Canvas::new(state, dir, Some(11))
    }

    #[test]
    fn test_initialize_changes_grid() {
        let dir = tempfile::tempdir().unwrap();
        let mut canvas = canvas(dir.path(), 4);
        let before = canvas.state().grid.pixels().to_vec();

        let outcome = dispatch(Action::Initialize, &mut canvas).unwrap();
        assert!(outcome.saved.is_empty());
        assert_ne!(canvas.state().grid.pixels(), before.as_slice());
    }

    #[test]
    fn test_save_capture_writes_one_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut canvas = canvas(dir.path(), 4);

        let outcome = dispatch(Action::SaveCapture, &mut canvas).unwrap();
        assert_eq!(outcome.saved, vec![dir.path().join("capture-0000-m00.png")]);
    }

    #[test]
    fn test_save_all_clips_steps_multiplier() {
        let dir = tempfile::tempdir().unwrap();
        let mut canvas = canvas(dir.path(), 4);

        let outcome = dispatch(Action::SaveAllClips, &mut canvas).unwrap();
        assert_eq!(outcome.saved.len(), 4);
        assert_eq!(canvas.state().filter.multiplier(), 3);

        // Black grid inverted at 0, 1/4, 2/4, 3/4.
        let expected = [0, 63, 127, 191];
        for (path, value) in outcome.saved.iter().zip(expected) {
            let image = image::open(path).unwrap().to_rgba8();
            assert_eq!(*image.get_pixel(2, 0), Rgba::from([value, value, value, 255]));
        }
        assert!(outcome.saved[3].ends_with("capture-0003-m03.png"));
    }

    #[test]
    fn test_zero_max_saves_no_clips_and_capture_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut canvas = canvas(dir.path(), 0);

        let outcome = dispatch(Action::SaveAllClips, &mut canvas).unwrap();
        assert!(outcome.saved.is_empty());
        assert!(dispatch(Action::SaveCapture, &mut canvas).is_err());
    }
}
