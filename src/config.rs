use crate::discovery;
use crate::error::Error;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(version, about = "Webcam-driven ambient backlight controller")]
pub struct Args {
    /// Path to the webcam device
    #[arg(long)]
    pub webcam: Option<PathBuf>,

    /// Path to the brightness control file
    #[arg(long)]
    pub brightness: Option<PathBuf>,

    /// Path to the max brightness control file
    #[arg(long)]
    pub max_brightness: Option<PathBuf>,

    /// Time between ambient light samples (e.g. 30s, 2m)
    #[arg(long, default_value = "30s", value_parser = humantime::parse_duration)]
    pub every: Duration,

    /// Minimum brightness percentage
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..=100))]
    pub min_brightness: u64,

    /// Set brightness to this percentage once and exit
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=100))]
    pub set: Option<u64>,

    /// Show maximum brightness value and exit
    #[arg(long)]
    pub max: bool,

    /// Step size for brightness transitions, in hardware units
    #[arg(long, default_value_t = 120, value_parser = clap::value_parser!(u64).range(1..))]
    pub scale: u64,
}

/// Immutable runtime parameters, resolved once at startup.
#[derive(Debug)]
pub struct Config {
    pub brightness_path: PathBuf,
    pub max_brightness_path: PathBuf,
    pub webcam: Option<PathBuf>,
    pub interval: Duration,
    pub min_brightness: u64,
    pub scale: u64,
}

impl Config {
    pub fn from_args(args: &Args) -> Result<Self, Error> {
        if args.every < Duration::from_secs(1) {
            return Err(Error::InvalidConfig(format!(
                "sampling interval must be at least 1s, got {}",
                humantime::format_duration(args.every)
            )));
        }

        let (brightness_path, max_brightness_path) =
            resolve_backlight(args, Path::new(discovery::BACKLIGHT_CLASS))?;

        Ok(Self {
            brightness_path,
            max_brightness_path,
            webcam: args.webcam.clone(),
            interval: args.every,
            min_brightness: args.min_brightness,
            scale: args.scale,
        })
    }
}

/// The two attribute files belong to one device directory, so they are only
/// taken from the command line as a pair; if either is absent, both come
/// from discovery.
fn resolve_backlight(args: &Args, base: &Path) -> Result<(PathBuf, PathBuf), Error> {
    match (&args.brightness, &args.max_brightness) {
        (Some(brightness), Some(max_brightness)) => {
            Ok((brightness.clone(), max_brightness.clone()))
        }
        _ => {
            let found = discovery::find_backlight(base)?;
            Ok((found.brightness, found.max_brightness))
        }
    }
}
