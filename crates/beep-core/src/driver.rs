// Platform-agnostic beep driver trait
use std::path::Path;

/// Invoked when a driver can no longer guarantee that a running tone can be
/// silenced. Never returns.
pub type FatalHandler = fn(&str) -> !;

/// Default fatal handler: log and terminate the process.
pub fn exit_on_fatal(context: &str) -> ! {
    log::error!("fatal: {context}");
    std::process::exit(1)
}

/// A backend able to turn a tone on and off.
///
/// The registry drives every backend through the same lifecycle:
/// `detect` → `init` → any number of `begin_tone`/`end_tone` pairs → `fini`.
/// Calls into one driver are never concurrent.
pub trait BeepDriver: Send {
    fn name(&self) -> &'static str;

    /// Open and probe a device. `device` overrides the backend's default
    /// node. Returns `false` when this backend cannot be used; the caller is
    /// still expected to call `fini` afterwards.
    fn detect(&mut self, device: Option<&Path>) -> bool;

    fn init(&mut self);

    /// Release whatever `detect` acquired. Calling it more than once is a
    /// no-op.
    fn fini(&mut self);

    fn begin_tone(&mut self, frequency: u16);

    fn end_tone(&mut self);

    /// The device node currently held open, if any.
    fn device_name(&self) -> Option<&Path> {
        None
    }
}
