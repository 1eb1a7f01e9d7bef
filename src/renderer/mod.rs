//! Rendering adapter
//!
//! The simulation never draws. A `MemberRaster` wraps one handle from the
//! hosting renderer (anything implementing `RasterPrimitive`) and mirrors a
//! member onto it once per published frame.

pub mod headless;
pub mod raster;

pub use headless::HeadlessRaster;
pub use raster::{MemberRaster, RasterEvent, RasterHandler, RasterPrimitive};
