//! The Sense HAT joystick as an evdev key source.

use std::fs::File;
use std::io::{self, Read};
use std::os::fd::AsRawFd;
use std::path::Path;
use std::time::Duration;

use arrayvec::ArrayVec;
use log::{info, warn};

use crate::discovery::{self, INPUT_DIR};
use crate::error::DeviceError;
use crate::input::{decode_events, first_key_press, InputEvent, KeySource, EVENT_SIZE, MAX_EVENTS};
use crate::types::Key;

/// Name the joystick driver reports through `EVIOCGNAME`
pub const JOYSTICK_NAME: &str = "Raspberry Pi Sense HAT Joystick";

pub struct Joystick {
    file: File,
    buf: [u8; EVENT_SIZE * MAX_EVENTS],
}

impl Joystick {
    /// Find the event device named `name` under `/dev/input`.
    pub fn open(name: &str) -> Result<Self, DeviceError> {
        Self::open_in(Path::new(INPUT_DIR), name)
    }

    pub fn open_in(dir: &Path, name: &str) -> Result<Self, DeviceError> {
        let file = discovery::open_event_device(dir, name)?;
        info!("joystick '{}' opened", name);
        Ok(Self::from_file(file))
    }

    pub fn from_file(file: File) -> Self {
        Self {
            file,
            buf: [0; EVENT_SIZE * MAX_EVENTS],
        }
    }

    /// Whether a read would return data within `timeout`.
    pub fn poll(&self, timeout: Duration) -> io::Result<bool> {
        let mut fds = libc::pollfd {
            fd: self.file.as_raw_fd(),
            events: libc::POLLIN,
            revents: 0,
        };
        let ms = timeout.as_millis().min(i32::MAX as u128) as libc::c_int;
        // SAFETY: one valid pollfd for the duration of the call.
        let rc = unsafe { libc::poll(&mut fds, 1, ms) };
        if rc < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(rc > 0 && fds.revents & libc::POLLIN != 0)
    }

    /// Read whatever records are pending (up to `MAX_EVENTS`).
    ///
    /// A read shorter than one record is logged and yields no events.
    pub fn read_events(&mut self) -> io::Result<ArrayVec<InputEvent, MAX_EVENTS>> {
        let n = match self.file.read(&mut self.buf) {
            Ok(n) => n,
            Err(err) if err.kind() == io::ErrorKind::WouldBlock => 0,
            Err(err) => return Err(err),
        };
        if n < EVENT_SIZE {
            warn!("joystick: expected at least {} bytes, got {}", EVENT_SIZE, n);
            return Ok(ArrayVec::new());
        }
        Ok(decode_events(&self.buf[..n]))
    }

    /// Wait up to `timeout` for events; empty when none arrived.
    pub fn wait_events(&mut self, timeout: Duration) -> io::Result<ArrayVec<InputEvent, MAX_EVENTS>> {
        if self.poll(timeout)? {
            self.read_events()
        } else {
            Ok(ArrayVec::new())
        }
    }
}

impl KeySource for Joystick {
    fn read_key(&mut self) -> Key {
        match self.wait_events(Duration::ZERO) {
            Ok(events) => first_key_press(&events),
            Err(err) => {
                warn!("joystick read failed: {err}");
                Key::None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::evdev::{KEY_LEFT, KEY_UP};
    use std::io::{Seek, SeekFrom, Write};

    fn joystick_with(bytes: &[u8]) -> Joystick {
        let mut file = tempfile::tempfile().unwrap();
        file.write_all(bytes).unwrap();
        file.seek(SeekFrom::Start(0)).unwrap();
        Joystick::from_file(file)
    }

    #[test]
    fn test_reads_first_press() {
        let release = InputEvent {
            value: 0,
            ..InputEvent::key_press(KEY_UP)
        };
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&release.to_bytes());
        bytes.extend_from_slice(&InputEvent::key_press(KEY_LEFT).to_bytes());
        bytes.extend_from_slice(&InputEvent::key_press(KEY_UP).to_bytes());

        let mut js = joystick_with(&bytes);
        assert_eq!(js.read_key(), Key::Left);
        // Everything pending was consumed by the first read.
        assert_eq!(js.read_key(), Key::None);
    }

    #[test]
    fn test_short_read_is_none() {
        let mut js = joystick_with(&[1, 2, 3]);
        assert_eq!(js.read_key(), Key::None);
    }

    #[test]
    fn test_empty_device_is_none() {
        let mut js = joystick_with(&[]);
        assert_eq!(js.read_key(), Key::None);
    }

    #[test]
    fn test_open_in_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = Joystick::open_in(&missing, JOYSTICK_NAME).err().unwrap();
        assert!(matches!(err, DeviceError::Scan { .. }));
    }
}
