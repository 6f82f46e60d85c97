//! Browser side of the colorcycle page: binds the core controller to the
//! document's trigger, form and output elements.
//!
//! Only `--features web` on wasm32 compiles the shell; every other build gets
//! an empty crate.

/// Empty on native targets.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn placeholder() {}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::{mount, start, DemoHandle};
