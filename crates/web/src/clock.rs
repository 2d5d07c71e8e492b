//! Wall-clock source and the timestamp text shown on the home page.

use std::cell::Cell;

use chrono::{DateTime, FixedOffset, Local};

/// Browser `Date()` style, e.g. `Tue Mar 23 2021 09:15:00 GMT-0500`.
pub const TIMESTAMP_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Local time from the host (the browser on `wasm32`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().into()
    }
}

/// Test clock that returns whatever it was last set to.
#[derive(Debug, Clone)]
pub struct FixedClock {
    at: Cell<DateTime<FixedOffset>>,
}

impl FixedClock {
    pub fn new(at: DateTime<FixedOffset>) -> Self {
        Self { at: Cell::new(at) }
    }

    pub fn set(&self, at: DateTime<FixedOffset>) {
        self.at.set(at);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.at.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}

pub fn format_timestamp(at: &DateTime<FixedOffset>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}
