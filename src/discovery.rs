use crate::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

pub const BACKLIGHT_CLASS: &str = "/sys/class/backlight";
pub const VIDEO_DEV_DIR: &str = "/dev";

#[derive(Debug)]
pub struct BacklightPaths {
    pub brightness: PathBuf,
    pub max_brightness: PathBuf,
}

/// Picks the first backlight device (sorted for determinism) and derives the
/// sibling `max_brightness` attribute from the same directory.
pub fn find_backlight(base: &Path) -> Result<BacklightPaths, Error> {
    let mut devices: Vec<PathBuf> = fs::read_dir(base)
        .map_err(|_| Error::NoBacklight(base.to_path_buf()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.join("brightness").is_file())
        .collect();
    devices.sort();

    devices
        .into_iter()
        .next()
        .map(|dir| BacklightPaths {
            brightness: dir.join("brightness"),
            max_brightness: dir.join("max_brightness"),
        })
        .ok_or_else(|| Error::NoBacklight(base.to_path_buf()))
}

/// Picks the first `video*` node in the device directory.
pub fn find_video(base: &Path) -> Result<PathBuf, Error> {
    let mut devices: Vec<PathBuf> = fs::read_dir(base)
        .map_err(|_| Error::NoVideoDevice(base.to_path_buf()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with("video"))
        })
        .collect();
    devices.sort();

    devices
        .into_iter()
        .next()
        .ok_or_else(|| Error::NoVideoDevice(base.to_path_buf()))
}
