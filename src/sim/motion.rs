//! Straight-line integration with wall reflection
//!
//! Both the entity model and the render adapter move through `Kinematics::step`,
//! so logical and presented motion can never disagree.

use glam::Vec2;
use std::f32::consts::{PI, TAU};

use super::bounds::Bounds;
use crate::consts::MAX_TICK_SECS;
use crate::normalize_direction;

/// What a single step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Elapsed time exceeded `MAX_TICK_SECS`; nothing changed
    Skipped,
    /// Position advanced; flags report which axes reflected off a wall
    Moved { bounced_x: bool, bounced_y: bool },
}

/// Moving body state: center position, box size, effective speed, heading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub pos: Vec2,
    pub size: Vec2,
    /// Effective speed in pixels/second (0 while paused)
    pub speed: f32,
    /// Heading in radians, kept in [0, 2π)
    pub direction: f32,
}

impl Kinematics {
    #[inline]
    pub fn half_extent(&self) -> Vec2 {
        self.size / 2.0
    }

    /// Displacement for `elapsed` seconds along the current heading
    #[inline]
    pub fn displacement(&self, elapsed: f32) -> Vec2 {
        let distance = self.speed * elapsed;
        Vec2::new(self.direction.cos(), self.direction.sin()) * distance
    }

    /// Advance by `elapsed` seconds and reflect off the walls of `bounds`.
    ///
    /// All four walls are checked every step, so a body driven into a corner
    /// reflects and clamps on both axes at once.
    pub fn step(&mut self, elapsed: f32, bounds: &Bounds) -> StepOutcome {
        // TODO: resolve every wall crossing inside long ticks instead of skipping them
        if elapsed > MAX_TICK_SECS {
            return StepOutcome::Skipped;
        }

        self.pos += self.displacement(elapsed);

        let half = self.half_extent();
        let mut bounced_x = false;
        let mut bounced_y = false;

        if self.pos.x > bounds.right - half.x {
            self.direction = normalize_direction(PI - self.direction);
            self.pos.x = bounds.right - half.x;
            bounced_x = true;
        }

        if self.pos.x < bounds.left + half.x {
            self.direction = normalize_direction(PI - self.direction);
            self.pos.x = bounds.left + half.x;
            bounced_x = true;
        }

        if self.pos.y > bounds.bottom - half.y {
            self.direction = normalize_direction(TAU - self.direction);
            self.pos.y = bounds.bottom - half.y;
            bounced_y = true;
        }

        if self.pos.y < bounds.top + half.y {
            self.direction = normalize_direction(TAU - self.direction);
            self.pos.y = bounds.top + half.y;
            bounced_y = true;
        }

        StepOutcome::Moved {
            bounced_x,
            bounced_y,
        }
    }
}
