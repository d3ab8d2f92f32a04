//! Defines command-line interface options using `clap` for the nc2xml converter.

use clap::Parser;
use std::path::PathBuf;

/// A CLI tool for converting netCDF parameter files to XML
#[derive(Parser, Debug)]
#[command(
    version,
    name = "nc2xml",
    about = "Convert a netCDF parameter file into an XML description"
)]
pub struct Args {
    /// Path to the netCDF file
    #[arg(short = 'f', long = "netcdf-file")]
    pub netcdf_file: PathBuf,

    /// Path to the XML output file
    #[arg(short = 'o', long = "output-file", default_value = "junk.xml")]
    pub output_file: PathBuf,

    /// Path to config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Extra debugging output
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Show error cause chains as extra debugging output
    #[arg(long, default_value_t = false)]
    pub backtrace: bool,
}
