use std::path::{Path};
use std::str::{FromStr};

use super::{Error, Result, Dataset};

/// The width and height, in pixels, that every image of a dataset is stored
/// at. Written `WxH`, e.g. `640x480`.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub struct Shape {
    pub width: u32,
    pub height: u32,
}

impl Shape {
    /// Reads the intrinsic size of the image at `path`.
    pub fn infer(path: &Path) -> Result<Self> {
        let (width, height) = super::io::open_image(path)?.into_dimensions()?;
        Ok(Shape {width, height})
    }

    /// Returns `fixed`, or else the size of the first image of `dataset`.
    ///
    /// Failure to read that image is fatal to the run: nothing can be written
    /// without a shape.
    pub fn resolve(fixed: Option<Shape>, dataset: &Dataset) -> Result<Self> {
        if let Some(shape) = fixed { return Ok(shape); }
        let path = dataset.files.first().ok_or(Error("Empty dataset"))?;
        log::debug!("Trying to read shape from {}", path.display());
        Shape::infer(path).map_err(|e| {
            log::error!("Couldn't read image from file {}! Exiting...", path.display());
            e
        })
    }

    /// The shape of an array holding `count` images, `(count, height, width)`.
    pub fn dims(self, count: usize) -> (usize, usize, usize) {
        (count, self.height as usize, self.width as usize)
    }
}

impl FromStr for Shape {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (w, h) = s.split_once('x').ok_or(Error("Expected a shape like '640x480'"))?;
        let parse = |x: &str| match x.parse::<u32>() {
            Ok(0) | Err(_) => Err(Error("Expected a positive integer")),
            Ok(n) => Ok(n),
        };
        Ok(Shape {width: parse(w)?, height: parse(h)?})
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

// ----------------------------------------------------------------------------
