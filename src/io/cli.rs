use std::path::{PathBuf};
use clap::{Parser, ArgAction};
use log::{LevelFilter};

use crate::{Shape};

// ----------------------------------------------------------------------------

#[derive(Debug, Parser)]
#[command(about = "Create HDF5 files from folders of images.")]
#[command(author, version, long_about = None)]
pub struct Args {
    /// Verbose mode. -v for Info, -vv for Debug.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// The group inside the output file that receives the datasets.
    #[arg(short, long, default_value = "/")]
    pub root: String,

    /// A shape like '640x480' or '120x120' applied to every image.
    #[arg(short, long, value_name = "WxH")]
    pub shape: Option<Shape>,

    /// Folders (or single images) to pack. Each folder name is used as the
    /// name of its dataset.
    #[arg(required = true, num_args = 1..)]
    pub source: Vec<PathBuf>,

    /// The output HDF5 file.
    #[arg(short, long)]
    pub output: PathBuf,
}

// ----------------------------------------------------------------------------

/// Maps a `-v` count to a log level, saturating at `Debug`.
pub fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Installs the process logger. Call once, before anything logs.
pub fn init_logging(verbose: u8) {
    let level = level(verbose);
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
    log::info!("Set the verbosity level to {}.", level.as_str());
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("h5packer").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let args = parse(&["-o", "out.h5", "cats"]).unwrap();
        assert_eq!(args.verbose, 0);
        assert_eq!(args.root, "/");
        assert_eq!(args.shape, None);
        assert_eq!(args.source, vec![PathBuf::from("cats")]);
        assert_eq!(args.output, PathBuf::from("out.h5"));
    }

    #[test]
    fn everything() {
        let args = parse(&["-vv", "-r", "/train", "-s", "640x480", "-o", "out.h5", "cats", "dogs"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.root, "/train");
        assert_eq!(args.shape, Some(Shape {width: 640, height: 480}));
        assert_eq!(args.source.len(), 2);
    }

    #[test]
    fn rejects() {
        assert!(parse(&["cats"]).is_err());
        assert!(parse(&["-o", "out.h5"]).is_err());
        assert!(parse(&["-s", "abcx10", "-o", "out.h5", "cats"]).is_err());
        assert!(parse(&["-s", "10", "-o", "out.h5", "cats"]).is_err());
    }

    #[test]
    fn verbosity_saturates() {
        assert_eq!(level(0), LevelFilter::Warn);
        assert_eq!(level(1), LevelFilter::Info);
        assert_eq!(level(2), LevelFilter::Debug);
        assert_eq!(level(7), LevelFilter::Debug);
    }
}
