use clap::Parser;
use std::path::Path;
use std::process;

mod brightness;
mod config;
mod controller;
mod device_file;
mod discovery;
mod error;
mod frame;
mod luma;

use brightness::Brightness;
use error::Error;

fn main() {
    let panic_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        panic_hook(panic_info);
        process::exit(1);
    }));

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(err) = run() {
        log::error!("{}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let args = config::Args::parse();
    let config = config::Config::from_args(&args)?;

    log::debug!("Using {:#?}", config);

    let backlight = brightness::Backlight::new(
        &config.brightness_path,
        &config.max_brightness_path,
    )?;

    if args.max {
        println!("{}", backlight.max()?);
        return Ok(());
    }

    let actuator = brightness::Controller::new(
        Box::new(backlight),
        config.min_brightness,
        config.scale,
    );

    if let Some(level) = args.set {
        return actuator.set(level as f64);
    }

    let video = match &config.webcam {
        Some(path) => path.clone(),
        None => discovery::find_video(Path::new(discovery::VIDEO_DEV_DIR))?,
    };

    log::info!(
        "Sampling ambient light from {} every {}",
        video.display(),
        humantime::format_duration(config.interval)
    );

    let capturer = frame::Webcam::new(&video);
    controller::Controller::new(Box::new(capturer), actuator, config.interval).run()
}
