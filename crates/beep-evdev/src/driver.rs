//! evdev beep driver
//!
//! Lifecycle of one instance:
//! - `detect` opens a single device node (the caller's, or `DEFAULT_DEVICE`)
//!   and probes which `EV_SND` flavour it supports.
//! - `begin_tone`/`end_tone` write one `input_event` each.
//! - `fini` closes the node again.
//!
//! A write that does not hand the whole record to the kernel goes to the
//! fatal handler: without working writes a running tone cannot be stopped.

use std::path::{Path, PathBuf};

use beep_core::{exit_on_fatal, BeepDriver, DeviceError, FatalHandler};
use thiserror::Error;

use crate::event::SoundEvent;
use crate::node::{EventDevice, EventNode};
use crate::sound_api::{Protocol, SoundApi};

/// Well-known node of the PC speaker input device.
pub const DEFAULT_DEVICE: &str = "/dev/input/by-path/platform-pcspkr-event-spkr";

#[derive(Debug, Error)]
pub enum DetectError {
    #[error(transparent)]
    DeviceUnavailable(#[from] DeviceError),

    #[error("{} supports neither SND_TONE nor SND_BELL", .path.display())]
    ProtocolUnsupported { path: PathBuf },

    #[error("device {} is already open", .path.display())]
    AlreadyOpen { path: PathBuf },
}

type Opener<D> = Box<dyn Fn(&Path) -> Result<D, DeviceError> + Send>;

pub struct EvdevDriver<D: EventDevice = EventNode> {
    opener: Opener<D>,
    on_fatal: FatalHandler,
    device: Option<D>,
    device_name: Option<PathBuf>,
    protocol: Option<Protocol>,
}

impl EvdevDriver<EventNode> {
    pub fn new() -> Self {
        Self::with_opener(EventNode::open)
    }
}

impl Default for EvdevDriver<EventNode> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: EventDevice> EvdevDriver<D> {
    /// Build a driver that validates and opens nodes through `opener`.
    pub fn with_opener<F>(opener: F) -> Self
    where
        F: Fn(&Path) -> Result<D, DeviceError> + Send + 'static,
    {
        Self {
            opener: Box::new(opener),
            on_fatal: exit_on_fatal,
            device: None,
            device_name: None,
            protocol: None,
        }
    }

    /// Replace the handler run when a sound event cannot be written.
    pub fn on_fatal(mut self, handler: FatalHandler) -> Self {
        self.on_fatal = handler;
        self
    }

    pub fn is_open(&self) -> bool {
        self.device.is_some()
    }

    pub fn protocol(&self) -> Option<Protocol> {
        self.protocol
    }

    /// Open the device and select a protocol.
    ///
    /// On `ProtocolUnsupported` the node stays open until `fini`.
    pub fn try_detect(&mut self, device: Option<&Path>) -> Result<Protocol, DetectError> {
        if let Some(path) = &self.device_name {
            log::warn!("driver already holds {}", path.display());
            return Err(DetectError::AlreadyOpen { path: path.clone() });
        }

        // Only one well-known node so far; turn this into a list once more
        // become known.
        let path = device.unwrap_or(Path::new(DEFAULT_DEVICE));
        let opened = self.open_device(path)?;

        match probe(opened) {
            Some(protocol) => {
                self.protocol = Some(protocol);
                Ok(protocol)
            }
            None => Err(DetectError::ProtocolUnsupported {
                path: path.to_path_buf(),
            }),
        }
    }

    fn open_device(&mut self, path: &Path) -> Result<&D, DeviceError> {
        log::debug!("driver_detect {:p} {}", self, path.display());

        let device = (self.opener)(path).inspect_err(|err| {
            log::debug!("driver_detect {:p} rejected {}: {}", self, err.path().display(), err);
        })?;

        self.device_name = Some(path.to_path_buf());
        Ok(self.device.insert(device))
    }

    fn emit(&mut self, event: impl FnOnce(&Protocol) -> SoundEvent) {
        let on_fatal = self.on_fatal;
        let (Some(device), Some(protocol)) = (self.device.as_mut(), self.protocol.as_ref()) else {
            log::warn!("evdev driver used before a successful detect");
            return;
        };

        let record = event(protocol).to_bytes();
        match device.write_event(&record) {
            Ok(written) if written == record.len() => {}
            Ok(written) => on_fatal(&format!(
                "write EV_SND: wrote {written} of {} bytes",
                record.len()
            )),
            Err(err) => on_fatal(&format!("write EV_SND: {err}")),
        }
    }
}

fn probe<D: EventDevice>(device: &D) -> Option<Protocol> {
    let fd = device.handle_id();

    let capabilities = match device.sound_capabilities() {
        Ok(bits) => bits,
        Err(err) => {
            log::debug!("{fd} does not implement EVIOCGBIT: {err}");
            return None;
        }
    };

    match Protocol::select(capabilities) {
        Some(protocol @ Protocol::ToneProtocol(_)) => {
            log::debug!("found {} support for fd={fd}", protocol.name());
            Some(protocol)
        }
        Some(protocol @ Protocol::BellProtocol(_)) => {
            log::debug!("falling back to {} support for fd={fd}", protocol.name());
            Some(protocol)
        }
        None => {
            log::debug!("fd={fd} supports neither SND_TONE nor SND_BELL");
            None
        }
    }
}

impl<D: EventDevice + Send> BeepDriver for EvdevDriver<D> {
    fn name(&self) -> &'static str {
        "evdev"
    }

    fn detect(&mut self, device: Option<&Path>) -> bool {
        self.try_detect(device).is_ok()
    }

    fn init(&mut self) {
        log::debug!("driver_init {:p}", self);
    }

    fn fini(&mut self) {
        log::debug!("driver_fini {:p}", self);
        if let Some(device) = self.device.take() {
            log::debug!("closing fd={}", device.handle_id());
        }
        self.device_name = None;
        self.protocol = None;
    }

    fn begin_tone(&mut self, frequency: u16) {
        log::debug!("driver_begin_tone {:p} {}", self, frequency);
        self.emit(|protocol| protocol.begin_event(frequency));
    }

    fn end_tone(&mut self) {
        log::debug!("driver_end_tone {:p}", self);
        self.emit(|protocol| protocol.end_event());
    }

    fn device_name(&self) -> Option<&Path> {
        self.device_name.as_deref()
    }
}
