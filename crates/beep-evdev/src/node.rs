//! Event device handle
//!
//! `EventNode` owns the open device node; dropping it closes the descriptor.
//! `EventDevice` is the small slice of the evdev API the driver needs, so the
//! driver can run against something other than a real kernel device.

use std::fs::File;
use std::io::{self, Write};
use std::os::fd::{AsRawFd, RawFd};
use std::path::Path;

use beep_core::{open_checked_char_device, DeviceError};

use crate::ioctl;

pub trait EventDevice {
    /// Identifies the handle in diagnostic traces.
    fn handle_id(&self) -> RawFd;

    /// Bitmask of supported `EV_SND` codes (`1 << SND_*`).
    fn sound_capabilities(&self) -> io::Result<u64>;

    /// Hand one encoded record to the device in a single write call.
    fn write_event(&mut self, record: &[u8]) -> io::Result<usize>;
}

#[derive(Debug)]
pub struct EventNode {
    file: File,
}

impl EventNode {
    /// Open `path` and make sure it is a character device implementing the
    /// `EV_SND` API.
    pub fn open(path: &Path) -> Result<Self, DeviceError> {
        let node = Self {
            file: open_checked_char_device(path)?,
        };

        if let Err(source) = node.query_sound_status() {
            log::debug!("{} does not implement EV_SND API", node.handle_id());
            return Err(DeviceError::MissingInterface {
                path: path.to_path_buf(),
                interface: "EV_SND",
                source,
            });
        }

        Ok(node)
    }

    fn query_sound_status(&self) -> io::Result<()> {
        // SAFETY: a zero-length EVIOCGSND copies nothing back.
        let rc = unsafe { libc::ioctl(self.file.as_raw_fd(), ioctl::eviocgsnd_probe()) };
        if rc == -1 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }
}

impl EventDevice for EventNode {
    fn handle_id(&self) -> RawFd {
        self.file.as_raw_fd()
    }

    fn sound_capabilities(&self) -> io::Result<u64> {
        let mut bits: libc::c_ulong = 0;
        // SAFETY: the request encodes size_of::<c_ulong>(), the size of `bits`.
        let rc = unsafe {
            libc::ioctl(
                self.file.as_raw_fd(),
                ioctl::eviocgbit_snd(),
                &mut bits as *mut libc::c_ulong,
            )
        };
        if rc == -1 {
            return Err(io::Error::last_os_error());
        }
        Ok(bits as u64)
    }

    fn write_event(&mut self, record: &[u8]) -> io::Result<usize> {
        self.file.write(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_file_is_not_an_event_node() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = EventNode::open(file.path()).unwrap_err();
        assert!(matches!(err, DeviceError::NotCharDevice { .. }));
    }

    #[test]
    fn test_char_device_without_sound_api() {
        let err = EventNode::open(Path::new("/dev/null")).unwrap_err();
        match err {
            DeviceError::MissingInterface { interface, path, .. } => {
                assert_eq!(interface, "EV_SND");
                assert_eq!(path, Path::new("/dev/null"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
