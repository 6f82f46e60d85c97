//! Core of the colorcycle demo page: palette cycling, name validation,
//! welcome messages and the timers behind the page's visual cues.
//!
//! Everything here is platform-independent. The browser shell lives in
//! `crates/colorcycle_web`; [`page_model`] drives the same controller on the
//! host.

#[path = "core/config.rs"]
pub mod config;

#[path = "core/controller.rs"]
pub mod controller;

#[path = "core/error.rs"]
pub mod error;

#[path = "core/messages.rs"]
pub mod messages;

#[path = "core/nav.rs"]
pub mod nav;

#[path = "core/palette.rs"]
pub mod palette;

#[path = "core/prng.rs"]
pub mod prng;

#[path = "core/reaction.rs"]
pub mod reaction;

#[path = "core/schedule.rs"]
pub mod schedule;

#[path = "core/time.rs"]
pub mod time;

#[path = "core/validation.rs"]
pub mod validation;

pub mod page_model;

pub use config::DemoConfig;
pub use controller::{Controller, StateSnapshot};
pub use error::DemoError;
