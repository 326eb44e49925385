mod backlight;
mod controller;

pub use backlight::Backlight;
pub use controller::Controller;

use crate::error::Error;
#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait Brightness {
    /// Current hardware value.
    fn get(&self) -> Result<u64, Error>;

    /// Hardware ceiling. Re-read on every call, the hardware file stays
    /// authoritative.
    fn max(&self) -> Result<u64, Error>;

    /// Writes a value and returns what was actually written.
    fn set(&self, value: u64) -> Result<u64, Error>;
}
