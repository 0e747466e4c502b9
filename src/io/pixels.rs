use image::{GrayImage, RgbImage};
use image::imageops::{self, FilterType};
use ndarray::{ArrayView2, ShapeError};

use crate::{Grid, Shape};

// ----------------------------------------------------------------------------

/// ITU-R 601-2 luma of an RGB pixel, in 16-bit fixed point.
pub fn luma([r, g, b]: [u8; 3]) -> u8 {
    let (r, g, b) = (u32::from(r), u32::from(g), u32::from(b));
    ((r * 19595 + g * 38470 + b * 7471 + 0x8000) >> 16) as u8
}

/// Converts `img` to a single channel using [`luma()`].
pub fn to_gray(img: &RgbImage) -> GrayImage {
    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        image::Luma([luma(img.get_pixel(x, y).0)])
    })
}

// ----------------------------------------------------------------------------

/// A grayscale image at the size of one array slice.
pub struct Frame(GrayImage);

impl Frame {
    /// Fits `gray` to `shape`. Images of a different size are resampled with a
    /// bicubic filter; images already at `shape` are kept as they are.
    pub fn fit(gray: GrayImage, shape: Shape) -> Self {
        if gray.dimensions() == (shape.width, shape.height) { return Frame(gray); }
        log::debug!("Resizing {}x{} to {}", gray.width(), gray.height(), shape);
        Frame(imageops::resize(&gray, shape.width, shape.height, FilterType::CatmullRom))
    }

    /// Returns `(height, width)`.
    pub fn size(&self) -> Grid { (self.0.height() as usize, self.0.width() as usize) }

    /// Returns the pixel at `(row, column)`.
    pub fn at(&self, (y, x): Grid) -> u8 { self.0.get_pixel(x as u32, y as u32).0[0] }

    /// Borrows the pixels as a `(height, width)` array.
    pub fn view(&self) -> Result<ArrayView2<'_, u8>, ShapeError> {
        ArrayView2::from_shape(self.size(), self.0.as_raw())
    }

    /// Returns the pixels in row-major order.
    pub fn into_raw(self) -> Vec<u8> { self.0.into_raw() }
}

// ----------------------------------------------------------------------------
