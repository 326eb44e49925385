use crate::brightness;
use crate::error::Error;
use crate::frame::Capturer;
use crate::luma;
use std::thread;
use std::time::Duration;

pub struct Controller {
    capturer: Box<dyn Capturer>,
    brightness: brightness::Controller,
    interval: Duration,
}

impl Controller {
    pub fn new(
        capturer: Box<dyn Capturer>,
        brightness: brightness::Controller,
        interval: Duration,
    ) -> Self {
        Self {
            capturer,
            brightness,
            interval,
        }
    }

    /// Runs the sampling loop until a fatal error occurs. Transient capture
    /// and decode failures abort one cycle and the loop self-heals on the
    /// next interval.
    pub fn run(&mut self) -> Result<(), Error> {
        loop {
            if let Err(err) = self.step() {
                if err.is_fatal() {
                    return Err(err);
                }
                log::warn!("Skipping cycle: {}", err);
            }
            thread::sleep(self.interval);
        }
    }

    fn step(&mut self) -> Result<(), Error> {
        let raw = self.capturer.frame()?;
        let image = image::load_from_memory(&raw).map_err(Error::Decode)?;
        let score = luma::analyze(&image)?;

        log::debug!("Ambient brightness score: {:.1}", score);

        self.brightness.set(score)
    }
}
