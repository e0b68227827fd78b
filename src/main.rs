mod action;
mod canvas;
mod error;
mod filter;
mod grid;

use std::{io::Write, path::PathBuf};

use anyhow::{anyhow, Result};
use clap::Parser;
use log::info;

use crate::{
    action::{dispatch, Action},
    canvas::{Canvas, CanvasState},
    filter::{parse_rgb, FilterKind, FilterState},
    grid::GridState,
};

#[derive(Parser)]
struct Args {
    /// The file to load the base grid from, instead of generating one
    #[arg(short = 'f', long)]
    file: Option<PathBuf>,

    /// Width of a generated grid
    #[arg(long, value_name = "PX", default_value_t = 256)]
    width: u32,

    /// Height of a generated grid
    #[arg(long, value_name = "PX", default_value_t = 256)]
    height: u32,

    /// Seed for grid initialization
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// The filter applied to captures
    #[arg(long, value_enum, default_value_t = FilterKind::Grayscale)]
    filter: FilterKind,

    /// Filter strength, as a fraction of the max multiplier
    #[arg(short = 'm', long, default_value_t = 0)]
    multiplier: u32,

    /// Number of intensity steps
    #[arg(long, value_name = "NUM", default_value_t = 10)]
    max_multiplier: u32,

    /// Color for the tint filter
    #[arg(long, value_name = "RRGGBB", default_value = "ff0000")]
    tint: String,

    /// Rotation for the hue filter
    #[arg(long, value_name = "DEG", default_value_t = 180.0)]
    hue: f64,

    /// Directory captures are written to
    #[arg(short = 'o', long, value_name = "DIR", default_value = "captures")]
    out: PathBuf,

    /// Actions to run, in order
    #[arg(short = 'a', long = "action", value_enum, default_values_t = [Action::Initialize, Action::SaveAllClips])]
    actions: Vec<Action>,
}

#[derive(Debug, Clone)]
struct Config {
    file: Option<PathBuf>,
    grid_size: (u32, u32),
    seed: Option<u64>,
    capture_dir: PathBuf,
    filter: FilterState,
    actions: Vec<Action>,
}

impl TryFrom<Args> for Config {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> Result<Self> {
        if args.max_multiplier == 0 {
            return Err(anyhow!("--max-multiplier must be greater than zero"));
        }

        let mut filter = FilterState::new(args.filter, args.multiplier, args.max_multiplier);
        filter.tint = parse_rgb(&args.tint)?;
        filter.hue_degrees = args.hue;

        Ok(Self {
            file: args.file,
            grid_size: (args.width, args.height),
            seed: args.seed,
            capture_dir: args.out,
            filter,
            actions: args.actions,
        })
    }
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            writeln!(
                buf,
                "[{style}{}{style:#} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn main() -> Result<()> {
    init_logger();

    let config = Config::try_from(Args::parse())?;

    let grid = match &config.file {
        Some(file) => GridState::from_image(file)?,
        None => GridState::new(config.grid_size.0, config.grid_size.1)?,
    };
    let state = CanvasState {
        grid,
        filter: config.filter.clone(),
    };
    let mut canvas = Canvas::new(state, &config.capture_dir, config.seed);

    let state = canvas.state();
    info!(
        "Canvas {}x{} with {:?} filter at {}/{}",
        state.grid.width(),
        state.grid.height(),
        state.filter.kind,
        state.filter.multiplier(),
        state.filter.max_multiplier()
    );

    for action in config.actions.iter() {
        let outcome = dispatch(*action, &mut canvas)?;
        info!("{action:?} done, {} file(s) saved", outcome.saved.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_into_config() {
        let args = Args::parse_from([
            "colorclip",
            "--filter",
            "tint",
            "--tint",
            "#00ff80",
            "-m",
            "3",
            "--max-multiplier",
            "6",
            "-a",
            "save-capture",
        ]);
        let config = Config::try_from(args).unwrap();

        assert_eq!(config.filter.kind, FilterKind::Tint);
        assert_eq!(config.filter.tint, image::Rgb::from([0, 255, 128]));
        assert_eq!(config.filter.multiplier(), 3);
        assert_eq!(config.actions, vec![Action::SaveCapture]);
        assert_eq!(config.capture_dir, PathBuf::from("captures"));
    }

    #[test]
    fn test_default_actions() {
        let config = Config::try_from(Args::parse_from(["colorclip"])).unwrap();
        assert_eq!(
            config.actions,
            vec![Action::Initialize, Action::SaveAllClips]
        );
        assert_eq!(config.grid_size, (256, 256));
    }

    #[test]
    fn test_zero_max_multiplier_rejected() {
        let args = Args::parse_from(["colorclip", "--max-multiplier", "0"]);
        assert!(Config::try_from(args).is_err());
    }
}
