//! Error types for the solution counter

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("board size {size} is too large, at most {max} is supported")]
    SizeTooLarge { size: u32, max: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
