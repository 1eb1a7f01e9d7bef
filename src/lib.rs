//! Memspace - bouncing space members in a bounded viewport
//!
//! Core modules:
//! - `sim`: Motion and state simulation (entities, collection controller, ticks)
//! - `renderer`: Adapter that projects entity state onto a rendering primitive
//! - `settings`: Driver configuration
//! - `scenario`: Scripted headless runs
//! - `error`: Errors raised at the file/JSON edge

pub mod error;
pub mod renderer;
pub mod scenario;
pub mod settings;
pub mod sim;

pub use error::MemspaceError;
pub use scenario::{RunReport, Scenario};
pub use settings::Settings;

use std::f32::consts::TAU;

/// Simulation constants
pub mod consts {
    /// Ticks longer than this are skipped entirely (seconds)
    pub const MAX_TICK_SECS: f32 = 1.0;

    /// Width and height assigned when a member finishes loading
    pub const DEFAULT_DIAMETER: f32 = 50.0;

    /// Heading given to every member on shuffle (radians, pointing left)
    pub const SHUFFLE_DIRECTION: f32 = std::f32::consts::PI;
}

/// Normalize a heading to [0, 2π)
#[inline]
pub fn normalize_direction(radians: f32) -> f32 {
    let angle = ((radians % TAU) + TAU) % TAU;
    // Rounding can land exactly on TAU for tiny negative inputs
    if angle >= TAU { 0.0 } else { angle }
}

#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees.to_radians()
}

#[inline]
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians.to_degrees()
}
