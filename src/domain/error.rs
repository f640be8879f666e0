use thiserror::Error;

pub type UniverseResult<T> = Result<T, UniverseError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UniverseError {
    #[error("Invalid dimensions {width}x{height}, both must be non-zero")]
    InvalidDimension { width: u32, height: u32 },

    #[error("Cell ({row}, {column}) is outside the {width}x{height} universe")]
    OutOfRange {
        row: u32,
        column: u32,
        width: u32,
        height: u32,
    },
}
