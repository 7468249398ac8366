//! Driver Registry - explicit list of beep backends
//!
//! Backends are registered once at startup by the composition root. `detect`
//! walks them in registration order and hands out the first one that works.
//! The selected driver stays active until `fini`.

use std::path::Path;

use crate::driver::BeepDriver;

#[derive(Default)]
pub struct DriverRegistry {
    drivers: Vec<Box<dyn BeepDriver>>,
    active: Option<usize>,
}

impl DriverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, driver: Box<dyn BeepDriver>) {
        log::debug!("registering driver {}", driver.name());
        self.drivers.push(driver);
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    /// Names of the registered drivers, in the order they are tried.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.drivers.iter().map(|driver| driver.name())
    }

    /// Find the first driver able to use `device` (or its own default node).
    ///
    /// The winner has already been through `init`. Losers get `fini` so that
    /// a handle opened before probing failed is released right away. Once a
    /// driver is active, later calls return it as is.
    pub fn detect(&mut self, device: Option<&Path>) -> Option<&mut dyn BeepDriver> {
        if let Some(index) = self.active {
            let driver = self.drivers[index].as_mut();
            log::debug!("driver {} already active", driver.name());
            return Some(driver);
        }

        if self.is_empty() {
            log::warn!("no beep drivers registered");
            return None;
        }

        log::debug!("detecting among {} drivers", self.len());
        for (index, driver) in self.drivers.iter_mut().enumerate() {
            log::debug!("trying driver {}", driver.name());
            if driver.detect(device) {
                log::debug!("driver {} selected", driver.name());
                driver.init();
                self.active = Some(index);
                return Some(driver.as_mut());
            }
            driver.fini();
        }

        log::debug!("no usable driver found");
        None
    }

    /// Release the active driver, if any. A later `detect` starts over.
    pub fn fini(&mut self) {
        if let Some(index) = self.active.take() {
            self.drivers[index].fini();
        }
    }
}
