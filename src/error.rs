use std::path::PathBuf;

pub type ErrorBox = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("no backlight device found in {}", .0.display())]
    NoBacklight(PathBuf),

    #[error("no video capture device found in {}", .0.display())]
    NoVideoDevice(PathBuf),

    #[error("refusing to set brightness to zero")]
    ZeroBrightness,

    #[error("unable to access backlight: {0}")]
    Backlight(#[source] ErrorBox),

    #[error("unable to set up video capture: {0}")]
    CaptureSetup(#[source] ErrorBox),

    #[error("unable to read frame: {0}")]
    Frame(#[source] std::io::Error),

    #[error("unable to decode frame: {0}")]
    Decode(#[source] image::ImageError),

    #[error("captured frame has no pixels")]
    EmptyFrame,
}

impl Error {
    /// Transient errors abort a single sampling cycle; every other error
    /// leaves hardware or startup state in doubt and terminates the process.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::Frame(_) | Error::Decode(_) | Error::EmptyFrame)
    }
}
