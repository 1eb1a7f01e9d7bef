//! Rectangular viewport limits

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Viewport bounds in the same coordinate space as member positions.
///
/// `top < bottom` and `left < right` (y grows downward, like screen space).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(0.0, 0.0, 600.0, 800.0)
    }
}

impl Bounds {
    pub fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Shrink each side by the given half extent.
    ///
    /// An axis too small to hold the extent collapses onto its center line.
    pub fn inset(&self, half_extent: Vec2) -> Self {
        let center = self.center();
        let (left, right) = if self.width() >= half_extent.x * 2.0 {
            (self.left + half_extent.x, self.right - half_extent.x)
        } else {
            (center.x, center.x)
        };
        let (top, bottom) = if self.height() >= half_extent.y * 2.0 {
            (self.top + half_extent.y, self.bottom - half_extent.y)
        } else {
            (center.y, center.y)
        };
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Check if a point lies inside (edges included)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }
}
