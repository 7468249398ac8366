//! Device Validator - open a device node and make sure it is a character device
//!
//! Backends layer their own interface checks on top of this.

use std::fs::{File, OpenOptions};
use std::io;
use std::os::unix::fs::FileTypeExt;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("could not open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("{} is not a character device", .path.display())]
    NotCharDevice { path: PathBuf },

    #[error("{} does not implement the {interface} API: {source}", .path.display())]
    MissingInterface {
        path: PathBuf,
        interface: &'static str,
        source: io::Error,
    },
}

impl DeviceError {
    pub fn path(&self) -> &Path {
        match self {
            DeviceError::Open { path, .. }
            | DeviceError::NotCharDevice { path }
            | DeviceError::MissingInterface { path, .. } => path,
        }
    }
}

/// Open `path` for writing and check that it refers to a character device.
///
/// The file is closed again on every failure path.
pub fn open_checked_char_device(path: &Path) -> Result<File, DeviceError> {
    let file = OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(|source| {
            log::debug!("could not open {}: {}", path.display(), source);
            DeviceError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;

    let metadata = file.metadata().map_err(|source| DeviceError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    if !metadata.file_type().is_char_device() {
        log::debug!("{} is not a character device", path.display());
        return Err(DeviceError::NotCharDevice {
            path: path.to_path_buf(),
        });
    }

    log::debug!("opened character device {}", path.display());
    Ok(file)
}
