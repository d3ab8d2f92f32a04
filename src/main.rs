//! Entry point for the nc2xml converter.
//! Parses the command line, runs the conversion pipeline, and reports errors.

use clap::Parser;
use nc2xml::cli::Args;
use nc2xml::config::read_config_file;
use nc2xml::{convert_file, FormatVersion};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            if args.backtrace {
                let mut cause = err.source();
                while let Some(source) = cause {
                    eprintln!("caused by: {}", source);
                    cause = source.source();
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> nc2xml::Result<()> {
    // The config file is read for parity with the command surface; the
    // conversion takes no settings from it.
    if let Some(config) = &args.config {
        read_config_file(config)?;
    }

    convert_file(
        &args.netcdf_file,
        &args.output_file,
        FormatVersion::V1,
        args.debug,
    )
}
