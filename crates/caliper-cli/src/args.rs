//! Command-line argument definitions for the Caliper CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the character and font to measure, the
//! output path, configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Caliper glyph metrics tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Character whose metrics are drawn
    pub character: char,

    /// Font file containing the glyph; the label font is used when omitted
    #[arg(short, long)]
    pub font: Option<String>,

    /// Path to the output file; `.png` or `.svg`
    #[arg(short, long, default_value = "out.png")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
