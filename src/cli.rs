//! Command line interface.

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Errors and warnings
    Warn,
    /// Informational output (default)
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "raylite")]
#[command(about = "A minimal offline ray tracer with PPM output")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 400, help = "Image width in pixels")]
    pub width: u32,

    /// Ratio of image width over height
    #[arg(long, default_value_t = 16.0 / 9.0, help = "Ratio of image width over height")]
    pub aspect_ratio: f64,

    /// Number of samples per pixel (1 renders through pixel centers)
    #[arg(long, short = 's', default_value_t = 100, help = "Number of samples per pixel")]
    pub samples_per_pixel: u32,

    /// Seed for the jitter PRNG; omit to seed from OS entropy
    #[arg(long, help = "Seed for the jitter PRNG (reproducible renders)")]
    pub seed: Option<u64>,

    /// Output file path (.ppm); omit to write the image to stdout
    #[arg(short, long, help = "Output file path (.ppm), stdout when omitted")]
    pub output: Option<String>,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,
}
