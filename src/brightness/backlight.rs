use super::Brightness;
use crate::device_file::{read, write};
use crate::error::Error;
use std::cell::RefCell;
use std::fs::{File, OpenOptions};
use std::path::Path;

pub struct Backlight {
    brightness: RefCell<File>,
    max_brightness: RefCell<File>,
}

impl Backlight {
    pub fn new(brightness_path: &Path, max_brightness_path: &Path) -> Result<Self, Error> {
        let brightness = OpenOptions::new()
            .read(true)
            .write(true)
            .open(brightness_path)
            .map_err(|err| Error::Backlight(err.into()))?;

        let max_brightness =
            File::open(max_brightness_path).map_err(|err| Error::Backlight(err.into()))?;

        Ok(Self {
            brightness: RefCell::new(brightness),
            max_brightness: RefCell::new(max_brightness),
        })
    }
}

impl Brightness for Backlight {
    fn get(&self) -> Result<u64, Error> {
        read(&mut self.brightness.borrow_mut()).map_err(Error::Backlight)
    }

    fn max(&self) -> Result<u64, Error> {
        read(&mut self.max_brightness.borrow_mut()).map_err(Error::Backlight)
    }

    fn set(&self, value: u64) -> Result<u64, Error> {
        // Zero would risk an unreadable display and sysfs rejects values
        // above the ceiling, so writes are pinned to [1, max] even when the
        // hardware reports a current value outside that range.
        let value = value.clamp(1, self.max()?.max(1));
        write(&mut self.brightness.borrow_mut(), value).map_err(Error::Backlight)?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn setup(name: &str, current: &str, max: &str) -> (PathBuf, PathBuf) {
        let dir = std::env::temp_dir().join(format!(
            "camlux-backlight-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        let brightness = dir.join("brightness");
        let max_brightness = dir.join("max_brightness");
        fs::write(&brightness, current).unwrap();
        fs::write(&max_brightness, max).unwrap();
        (brightness, max_brightness)
    }

    #[test]
    fn test_get_and_max_read_the_hardware_files() -> Result<(), Error> {
        let (brightness, max_brightness) = setup("read", "42\n", "255\n");
        let backlight = Backlight::new(&brightness, &max_brightness)?;

        assert_eq!(42, backlight.get()?);
        assert_eq!(255, backlight.max()?);
        Ok(())
    }

    #[test]
    fn test_max_is_reread_on_every_call() -> Result<(), Error> {
        let (brightness, max_brightness) = setup("reread", "42\n", "255\n");
        let backlight = Backlight::new(&brightness, &max_brightness)?;

        assert_eq!(255, backlight.max()?);
        assert_eq!(255, backlight.max()?);
        Ok(())
    }

    #[test]
    fn test_set_writes_and_reports_the_value() -> Result<(), Error> {
        let (brightness, max_brightness) = setup("write", "42\n", "255\n");
        let backlight = Backlight::new(&brightness, &max_brightness)?;

        assert_eq!(87, backlight.set(87)?);
        assert_eq!(87, backlight.get()?);
        Ok(())
    }

    #[test]
    fn test_set_never_writes_zero() -> Result<(), Error> {
        let (brightness, max_brightness) = setup("zero", "5\n", "255\n");
        let backlight = Backlight::new(&brightness, &max_brightness)?;

        assert_eq!(1, backlight.set(0)?);
        assert_eq!(1, backlight.get()?);
        Ok(())
    }

    #[test]
    fn test_set_clamps_to_the_hardware_ceiling() -> Result<(), Error> {
        let (brightness, max_brightness) = setup("ceiling", "500\n", "255\n");
        let backlight = Backlight::new(&brightness, &max_brightness)?;

        assert_eq!(255, backlight.set(380)?);
        assert_eq!(255, backlight.get()?);
        Ok(())
    }

    #[test]
    fn test_new_fails_when_brightness_file_is_missing() {
        let (brightness, max_brightness) = setup("missing", "42\n", "255\n");
        fs::remove_file(&brightness).unwrap();

        assert!(matches!(
            Backlight::new(&brightness, &max_brightness),
            Err(Error::Backlight(_))
        ));
    }
}
