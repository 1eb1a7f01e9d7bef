//! Member raster: a rendering handle driven by member state

use glam::Vec2;

use crate::normalize_direction;
use crate::sim::{Bounds, Kinematics, SpaceMember, StepOutcome};

/// Pointer/asset events a primitive can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RasterEvent {
    Load,
    MouseEnter,
    MouseLeave,
}

/// Callback attached to a primitive event
pub type RasterHandler = Box<dyn FnMut()>;

/// The drawable the hosting renderer hands us (image sprite, raster, node...)
pub trait RasterPrimitive {
    fn source(&self) -> &str;
    fn set_source(&mut self, source: &str);
    /// Center position
    fn position(&self) -> Vec2;
    fn set_position(&mut self, position: Vec2);
    fn size(&self) -> Vec2;
    fn set_size(&mut self, size: Vec2);
    /// Bounds of the view the primitive is drawn in
    fn view_bounds(&self) -> Bounds;
    /// Attach or clear the handler for `event`
    fn set_handler(&mut self, event: RasterEvent, handler: Option<RasterHandler>);
    fn has_handler(&self, event: RasterEvent) -> bool;
    /// Detach from the scene
    fn remove(&mut self);
}

/// Presentation-side view of one member
pub struct MemberRaster<P: RasterPrimitive> {
    raster: P,
    speed_pixels_per_second: f32,
    direction_radians: f32,
}

impl<P: RasterPrimitive> MemberRaster<P> {
    pub fn new(mut raster: P, position: Vec2) -> Self {
        raster.set_position(position);
        Self {
            raster,
            speed_pixels_per_second: 0.0,
            direction_radians: 0.0,
        }
    }

    /// Build a raster already showing `member`
    pub fn for_member(raster: P, member: &SpaceMember) -> Self {
        let mut this = Self::new(raster, member.position());
        this.project(member);
        this
    }

    pub fn raster(&self) -> &P {
        &self.raster
    }

    pub fn raster_mut(&mut self) -> &mut P {
        &mut self.raster
    }

    pub fn source(&self) -> &str {
        self.raster.source()
    }

    pub fn set_source(&mut self, source: &str) {
        self.raster.set_source(source);
    }

    pub fn position(&self) -> Vec2 {
        self.raster.position()
    }

    pub fn speed_pixels_per_second(&self) -> f32 {
        self.speed_pixels_per_second
    }

    pub fn set_speed_pixels_per_second(&mut self, speed: f32) {
        self.speed_pixels_per_second = speed;
    }

    pub fn direction_radians(&self) -> f32 {
        self.direction_radians
    }

    pub fn set_direction_radians(&mut self, radians: f32) {
        self.direction_radians = normalize_direction(radians);
    }

    pub fn width(&self) -> f32 {
        self.raster.size().x
    }

    pub fn set_width(&mut self, width: f32) {
        let size = self.raster.size();
        self.raster.set_size(Vec2::new(width, size.y));
    }

    pub fn height(&self) -> f32 {
        self.raster.size().y
    }

    pub fn set_height(&mut self, height: f32) {
        let size = self.raster.size();
        self.raster.set_size(Vec2::new(size.x, height));
    }

    pub fn on_load(&mut self, handler: Option<RasterHandler>) {
        self.raster.set_handler(RasterEvent::Load, handler);
    }

    pub fn on_mouse_enter(&mut self, handler: Option<RasterHandler>) {
        self.raster.set_handler(RasterEvent::MouseEnter, handler);
    }

    pub fn on_mouse_leave(&mut self, handler: Option<RasterHandler>) {
        self.raster.set_handler(RasterEvent::MouseLeave, handler);
    }

    /// Mirror `member` onto the primitive.
    ///
    /// This is the per-frame path: the member is the source of truth and the
    /// raster only copies it.
    pub fn project(&mut self, member: &SpaceMember) {
        if self.raster.source() != member.photo_url() {
            self.raster.set_source(member.photo_url());
        }
        self.raster.set_position(member.position());
        self.raster.set_size(member.size());
        self.speed_pixels_per_second = member.speed_pixels_per_second();
        self.direction_radians = member.direction_radians();
    }

    /// Move the raster on its own inside its view, for hosts that animate
    /// presentation without a member collection behind it
    pub fn update(&mut self, elapsed_seconds: f32) -> StepOutcome {
        let bounds = self.raster.view_bounds();
        let mut kinematics = Kinematics {
            pos: self.raster.position(),
            size: self.raster.size(),
            speed: self.speed_pixels_per_second,
            direction: self.direction_radians,
        };
        let outcome = kinematics.step(elapsed_seconds, &bounds);
        if let StepOutcome::Moved { .. } = outcome {
            self.raster.set_position(kinematics.pos);
            self.direction_radians = kinematics.direction;
        }
        outcome
    }

    /// Detach the primitive from its scene and hand it back
    pub fn remove(mut self) -> P {
        self.raster.remove();
        self.raster
    }
}
