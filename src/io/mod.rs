use std::fs::{File};
use std::io::{BufReader};
use std::path::{Path};
use image::{DynamicImage, GrayImage};

use super::{Shape};

pub mod cli;

mod pixels;
pub use pixels::{Frame, luma, to_gray};

// ----------------------------------------------------------------------------

/// Opens `path` for decoding. The format is sniffed from the file contents,
/// falling back to the extension.
pub fn open_image(path: &Path) -> crate::Result<image::io::Reader<BufReader<File>>> {
    Ok(image::io::Reader::open(path)?.with_guessed_format()?)
}

/// Decodes the specified file into a grayscale image at its native size.
pub fn load_gray(path: &Path) -> crate::Result<GrayImage> {
    let img = open_image(path)?.decode()?;
    Ok(match img {
        DynamicImage::ImageLuma8(img) => img,
        DynamicImage::ImageLumaA8(img) => GrayImage::from_fn(img.width(), img.height(), |x, y| {
            image::Luma([img.get_pixel(x, y).0[0]])
        }),
        img => to_gray(&img.to_rgb8()),
    })
}

/// Load the specified file into a `Frame` of exactly `shape`.
pub fn load_frame(path: &Path, shape: Shape) -> crate::Result<Frame> {
    Ok(Frame::fit(load_gray(path)?, shape))
}

// ----------------------------------------------------------------------------
