use alloc::string::String;
use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid coordinates ({x}, {y})")]
    InvalidCoords { x: Coord, y: Coord },
    #[error("Invalid side length {0}, must be between 1 and {max}", max = crate::MAX_SIDE_LENGTH)]
    InvalidSideLength(Coord),
    #[error("Invalid grid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = core::result::Result<T, GridError>;
