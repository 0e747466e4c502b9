use std::process::{ExitCode};
use clap::{Parser};
use h5packer::io::{cli};
use h5packer::{sources, Packer, Summary};

fn main() -> ExitCode {
    let args = cli::Args::parse();
    cli::init_logging(args.verbose);
    log::info!("Started HDF5 packer");

    let datasets = sources::map_sources(&args.source);
    if datasets.is_empty() {
        log::warn!("Couldn't find a single dataset! Exiting...");
        return ExitCode::SUCCESS;
    }

    let packer = match Packer::open(&args.output, &args.root, args.shape) {
        Ok(packer) => packer,
        Err(e) => {
            log::error!("Error with output file: {}\nExiting...", e);
            return ExitCode::FAILURE;
        },
    };
    match packer.pack_all(&datasets) {
        Ok(outcomes) => {
            log::info!("Finished: {}", Summary::of(&outcomes));
            ExitCode::SUCCESS
        },
        Err(e) => {
            log::error!("{}\nExiting...", e);
            ExitCode::FAILURE
        },
    }
}
