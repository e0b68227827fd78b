pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("max multiplier must be greater than zero")]
    ZeroMaxMultiplier,
    #[error("grid must be at least 1x1, got {0}x{1}")]
    EmptyGrid(u32, u32),
    #[error("grid {0}x{1} has too many pixels")]
    GridTooLarge(u32, u32),
    #[error("invalid color {0:?}, expected RRGGBB")]
    InvalidColor(String),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
