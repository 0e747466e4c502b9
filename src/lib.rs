//! Packs folders of images into 3-D `u8` arrays inside an HDF5 file.
//!
//! Every source folder becomes one array named after the folder, with shape
//! `(count, height, width)`. Images are converted to grayscale and resized to
//! a common shape on the way in.

/// A catch-all error type.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Error(pub &'static str);

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for Error {}

// ----------------------------------------------------------------------------

/// A general `Result` type.
pub type Result<T=()> = std::result::Result<T, Box<dyn std::error::Error>>;

// ----------------------------------------------------------------------------

/// Pixel coordinates, with `(0, 0)` at the top left. The coordinates are
/// listed in the order `(row, column)`, i.e. y-coordinate first.
pub type Grid = (usize, usize);

// ----------------------------------------------------------------------------

pub mod io;

pub mod sources;
pub use sources::{Dataset};

pub mod shape;
pub use shape::{Shape};

pub mod container;
pub use container::{Packer, Outcome, Summary};
