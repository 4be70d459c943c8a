//! Command-line argument definitions for the Tactiboard CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the input lesson, the output directory,
//! configuration file selection, output size, the extra exports and logging
//! verbosity.

use clap::Parser;

/// Command-line arguments for the Tactiboard diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input lesson-plan JSON file
    #[arg(help = "Path to the input lesson file")]
    pub input: String,

    /// Directory receiving one SVG per drill
    #[arg(short, long, default_value = "out")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Output width in pixels, overriding the configuration
    #[arg(long)]
    pub width: Option<u32>,

    /// Output height in pixels, overriding the configuration
    #[arg(long)]
    pub height: Option<u32>,

    /// Also write the lesson sheet as `lesson.md`
    #[arg(long)]
    pub sheet: bool,

    /// Also write an image data URL per drill
    #[arg(long)]
    pub data_url: bool,
}
