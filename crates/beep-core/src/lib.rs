pub mod device;
pub mod driver;
pub mod registry;

pub use device::{open_checked_char_device, DeviceError};
pub use driver::{exit_on_fatal, BeepDriver, FatalHandler};
pub use registry::DriverRegistry;
