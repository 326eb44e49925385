mod webcam;

pub use webcam::Webcam;

use crate::error::Error;
#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait Capturer {
    /// Takes one encoded frame from the device.
    fn frame(&mut self) -> Result<Vec<u8>, Error>;
}
