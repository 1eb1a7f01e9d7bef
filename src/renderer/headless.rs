//! In-memory raster primitive
//!
//! Stands in for a real sprite when running without a display (the driver
//! binary, tests). Events are raised explicitly with `fire`.

use glam::Vec2;
use std::collections::HashMap;
use std::fmt;

use super::raster::{RasterEvent, RasterHandler, RasterPrimitive};
use crate::sim::Bounds;

pub struct HeadlessRaster {
    source: String,
    position: Vec2,
    size: Vec2,
    view: Bounds,
    handlers: HashMap<RasterEvent, RasterHandler>,
    removed: bool,
}

impl HeadlessRaster {
    pub fn new(view: Bounds) -> Self {
        Self {
            source: String::new(),
            position: Vec2::ZERO,
            size: Vec2::ZERO,
            view,
            handlers: HashMap::new(),
            removed: false,
        }
    }

    /// Resize the view (window resize)
    pub fn set_view_bounds(&mut self, view: Bounds) {
        self.view = view;
    }

    /// Invoke the handler for `event`. Returns false if none is attached.
    pub fn fire(&mut self, event: RasterEvent) -> bool {
        match self.handlers.get_mut(&event) {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }
}

impl fmt::Debug for HeadlessRaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadlessRaster")
            .field("source", &self.source)
            .field("position", &self.position)
            .field("size", &self.size)
            .field("view", &self.view)
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .field("removed", &self.removed)
            .finish()
    }
}

impl RasterPrimitive for HeadlessRaster {
    fn source(&self) -> &str {
        &self.source
    }

    fn set_source(&mut self, source: &str) {
        self.source = source.to_string();
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }

    fn view_bounds(&self) -> Bounds {
        self.view
    }

    fn set_handler(&mut self, event: RasterEvent, handler: Option<RasterHandler>) {
        match handler {
            Some(handler) => {
                self.handlers.insert(event, handler);
            }
            None => {
                self.handlers.remove(&event);
            }
        }
    }

    fn has_handler(&self, event: RasterEvent) -> bool {
        self.handlers.contains_key(&event)
    }

    fn remove(&mut self) {
        self.handlers.clear();
        self.removed = true;
    }
}
