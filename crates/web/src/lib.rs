//! `prodcheck-web`
//!
//! **Responsibility:** browser UI for the product checker.
//!
//! This crate provides:
//! - The home page view controller (`HomeSession`) that owns the product store
//! - Clock text with manual refresh
//! - Static navigation links and UI configuration
//! - A Leptos frontend, compiled only for `wasm32`

pub mod clock;
pub mod config;
pub mod nav;
pub mod session;
pub mod view_model;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, UiConfig};
pub use session::HomeSession;
pub use view_model::ProductRow;
