//! Linux evdev beep driver
//!
//! Drives the PC speaker (or anything else exposing `EV_SND`) through a
//! generic input event device node.

mod driver;
mod event;
mod ioctl;
mod node;
mod sound_api;

pub use driver::{DetectError, EvdevDriver, DEFAULT_DEVICE};
pub use event::{SoundEvent, EVENT_SIZE, EV_SND, SND_BELL, SND_TONE};
pub use node::{EventDevice, EventNode};
pub use sound_api::{BellProtocol, Protocol, SoundApi, ToneProtocol};

use beep_core::DriverRegistry;

/// Make the evdev driver known to `registry`.
pub fn register(registry: &mut DriverRegistry) {
    registry.register(Box::new(EvdevDriver::new()));
}
