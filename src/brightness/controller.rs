use super::Brightness;
use crate::error::Error;
use std::thread;
use std::time::Duration;

const TRANSITION_STEP_MS: u64 = 5;

pub struct Controller {
    brightness: Box<dyn Brightness>,
    min_percent: u64,
    scale: u64,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
struct Target {
    desired: u64,
    step: i64,
}

impl Target {
    fn new(current: u64, desired: u64, scale: u64) -> Self {
        let scale = scale.max(1) as i64;
        let step = if desired >= current { scale } else { -scale };
        Self { desired, step }
    }

    /// True once a value reaches or crosses the desired endpoint.
    fn reached(&self, value: i64) -> bool {
        (self.step > 0 && value >= self.desired as i64)
            || (self.step < 0 && value <= self.desired as i64)
    }
}

impl Controller {
    pub fn new(brightness: Box<dyn Brightness>, min_percent: u64, scale: u64) -> Self {
        Self {
            brightness,
            min_percent,
            scale,
        }
    }

    /// Fades the hardware value toward `target` percent of the maximum in
    /// uniform steps, then writes the exact target so the transition always
    /// converges regardless of step remainder.
    pub fn set(&self, target: f64) -> Result<(), Error> {
        if target == 0.0 {
            return Err(Error::ZeroBrightness);
        }

        let max = self.brightness.max()?;
        let current = self.brightness.get()?;

        let mut desired = target.trunc() as u64 * max / 100;
        let floor = self.min_percent * max / 100;
        if desired < floor {
            desired = floor;
        }

        log::debug!("Transitioning brightness {} -> {} (max {})", current, desired, max);

        let target = Target::new(current, desired, self.scale);
        let mut value = current as i64 + target.step;
        while !target.reached(value) {
            // Intermediate values sit strictly between current and desired,
            // so the cast back to u64 cannot underflow.
            self.brightness.set(value as u64)?;
            thread::sleep(Duration::from_millis(TRANSITION_STEP_MS));
            value += target.step;
        }
        self.brightness.set(desired)?;

        Ok(())
    }
}
