use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
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

/// Built-in scene presets
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ScenePreset {
    /// Book-cover scene: a field of random spheres, some with motion blur
    BouncingSpheres,
    /// A diffuse sphere lit by an emissive sphere against a dark background
    SimpleLight,
}

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "lumapath")]
#[command(about = "A CPU path tracer with motion blur and depth of field")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Scene preset to render
    #[arg(long, value_enum, default_value_t = ScenePreset::BouncingSpheres)]
    pub scene: ScenePreset,

    /// Image width in pixels (the height follows the scene's aspect ratio)
    #[arg(long, default_value = "800", value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value = "100", value_parser = clap::value_parser!(u32).range(1..))]
    pub samples_per_pixel: u32,

    /// Maximum number of ray bounces per sample
    #[arg(long, default_value = "50", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_depth: u32,

    /// Base RNG seed; omit for a random seed per run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output path: .ppm or .png, or "-" for a PPM stream on stdout
    #[arg(short, long, default_value = "output.ppm")]
    pub output: String,
}
