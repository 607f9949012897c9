use std::num::ParseIntError;

use thiserror::Error;

use crate::geometry::Shape;

/// Errors raised while building a dungeon
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("layer dimensions must be positive and addressable, got {cols}x{rows}")]
    InvalidDimension { cols: usize, rows: usize },
    #[error("{name} must lie within [0, 1], got {value}")]
    InvalidRatio { name: &'static str, value: f64 },
    #[error("content was already allocated for this layer")]
    ContentAlreadyAllocated,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error parsing a `COLSxROWS` shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseShapeError {
    #[error("expected COLSxROWS, got {0:?}")]
    Format(String),
    #[error("invalid side length: {0}")]
    Side(#[from] ParseIntError),
}

pub(crate) fn check_ratio(name: &'static str, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(Error::InvalidRatio { name, value })
    }
}

/// Both sides positive, and the wall grids of the shape addressable
pub(crate) fn check_shape(shape: &Shape) -> Result<Shape> {
    let Shape { cols, rows } = *shape;
    let walls = cols
        .checked_add(1)
        .and_then(|c| c.checked_mul(rows))
        .zip(rows.checked_add(1).and_then(|r| r.checked_mul(cols)))
        .and_then(|(horizontal, vertical)| horizontal.checked_add(vertical));
    if cols == 0 || rows == 0 || walls.is_none() {
        return Err(Error::InvalidDimension { cols, rows });
    }
    Ok(*shape)
}
