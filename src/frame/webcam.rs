use super::Capturer;
use crate::error::Error;
use itertools::Itertools;
use std::path::{Path, PathBuf};
use v4l::buffer::Type;
use v4l::io::mmap::Stream;
use v4l::io::traits::CaptureStream;
use v4l::video::Capture;
use v4l::{Device, FourCC};

pub struct Webcam {
    path: PathBuf,
}

impl Webcam {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    fn setup(&self) -> Result<Device, Error> {
        let device = Device::with_path(&self.path).map_err(setup_err)?;

        let mut format = device.format().map_err(setup_err)?;
        format.fourcc = FourCC::new(b"MJPG");

        // The smallest advertised resolution is plenty for an average over
        // the whole frame, and keeps capture and decode cheap.
        let (width, height) = device
            .enum_framesizes(format.fourcc)
            .map_err(setup_err)?
            .into_iter()
            .flat_map(|f| {
                f.size
                    .to_discrete()
                    .into_iter()
                    .map(|d| (d.width, d.height))
                    .collect_vec()
            })
            .min_by(|&(w1, h1), &(w2, h2)| h1.cmp(&h2).then(w1.cmp(&w2)))
            .ok_or_else(|| Error::CaptureSetup("unable to find a capture resolution".into()))?;

        format.width = width;
        format.height = height;
        device.set_format(&format).map_err(setup_err)?;

        Ok(device)
    }
}

impl Capturer for Webcam {
    // The device and stream are locals, so the handle is released on every
    // exit path before the next sampling cycle.
    fn frame(&mut self) -> Result<Vec<u8>, Error> {
        let device = self.setup()?;
        let mut stream = Stream::new(&device, Type::VideoCapture).map_err(setup_err)?;
        let (bytes, _) = stream.next().map_err(Error::Frame)?;

        Ok(bytes.to_vec())
    }
}

fn setup_err(err: std::io::Error) -> Error {
    Error::CaptureSetup(err.into())
}
