//! Space member entity
//!
//! One moving, displayable participant: display metadata, visibility flags,
//! and the kinematic state advanced by `update`.

use glam::Vec2;

use super::bounds::Bounds;
use super::motion::{Kinematics, StepOutcome};
use super::roster::{Member, MemberSnapshot};
use crate::consts::DEFAULT_DIAMETER;
use crate::{degrees_to_radians, normalize_direction, radians_to_degrees};

/// A simulated member.
///
/// Cloning produces an independent value; the collection relies on this for
/// its copy-on-write updates.
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceMember {
    id: String,
    username: String,
    photo_url: String,
    pub message: String,
    pos: Vec2,
    position_initialized: bool,
    pub width: f32,
    pub height: f32,
    desired_speed: f32,
    direction: f32,
    paused: bool,
    loaded: bool,
    pub show_username: bool,
    pub show_message: bool,
}

impl SpaceMember {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        photo_url: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            photo_url: photo_url.into(),
            message: message.into(),
            pos: Vec2::ZERO,
            position_initialized: false,
            width: 0.0,
            height: 0.0,
            desired_speed: 0.0,
            direction: 0.0,
            paused: false,
            loaded: false,
            show_username: false,
            show_message: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn photo_url(&self) -> &str {
        &self.photo_url
    }

    pub fn set_photo_url(&mut self, photo_url: impl Into<String>) {
        self.photo_url = photo_url.into();
    }

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    pub fn set_x(&mut self, x: f32) {
        self.pos.x = x;
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }

    pub fn set_y(&mut self, y: f32) {
        self.pos.y = y;
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn position_initialized(&self) -> bool {
        self.position_initialized
    }

    /// Set the starting position. Only the first call has any effect.
    pub fn initialize_position(&mut self, x: f32, y: f32) {
        if self.position_initialized {
            return;
        }
        self.pos = Vec2::new(x, y);
        self.position_initialized = true;
    }

    /// Move to a fresh position, bypassing the one-time initialization gate
    pub(crate) fn relocate(&mut self, pos: Vec2) {
        self.pos = pos;
        self.position_initialized = true;
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn half_extent(&self) -> Vec2 {
        self.size() / 2.0
    }

    /// Speed requested by the user, kept while paused
    pub fn desired_speed_pixels_per_second(&self) -> f32 {
        self.desired_speed
    }

    /// Effective speed: 0 while paused
    pub fn speed_pixels_per_second(&self) -> f32 {
        if self.paused { 0.0 } else { self.desired_speed }
    }

    pub fn set_speed_pixels_per_second(&mut self, speed: f32) {
        self.desired_speed = speed;
    }

    /// Heading in radians, always in [0, 2π)
    pub fn direction_radians(&self) -> f32 {
        self.direction
    }

    pub fn set_direction_radians(&mut self, radians: f32) {
        self.direction = normalize_direction(radians);
    }

    pub fn direction_degrees(&self) -> f32 {
        radians_to_degrees(self.direction)
    }

    pub fn set_direction_degrees(&mut self, degrees: f32) {
        self.set_direction_radians(degrees_to_radians(degrees));
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn unpause(&mut self) {
        self.paused = false;
    }

    pub fn loaded(&self) -> bool {
        self.loaded
    }

    /// Mark the visual asset ready and give the member its default size
    pub fn load(&mut self) {
        if self.loaded {
            return;
        }
        self.loaded = true;
        self.width = DEFAULT_DIAMETER;
        self.height = DEFAULT_DIAMETER;
    }

    /// Current motion state as seen by the integrator
    pub fn kinematics(&self) -> Kinematics {
        Kinematics {
            pos: self.pos,
            size: self.size(),
            speed: self.speed_pixels_per_second(),
            direction: self.direction,
        }
    }

    /// Advance one tick and bounce off the walls of `bounds`
    pub fn update(&mut self, elapsed_seconds: f32, bounds: &Bounds) -> StepOutcome {
        let mut kinematics = self.kinematics();
        let outcome = kinematics.step(elapsed_seconds, bounds);
        match outcome {
            StepOutcome::Skipped => {
                log::trace!(
                    "Member {} skipped tick of {:.3}s",
                    self.id,
                    elapsed_seconds
                );
            }
            StepOutcome::Moved { .. } => {
                self.pos = kinematics.pos;
                self.direction = kinematics.direction;
            }
        }
        outcome
    }

    /// Public view for the rendering and message-edit layers
    pub fn snapshot(&self) -> MemberSnapshot {
        MemberSnapshot {
            id: self.id.clone(),
            username: self.username.clone(),
            photo_url: self.photo_url.clone(),
            message: self.message.clone(),
            paused: self.paused,
            x: self.pos.x,
            y: self.pos.y,
            width: self.width,
            height: self.height,
            show_username: self.show_username,
            show_message: self.show_message,
        }
    }
}

impl From<&Member> for SpaceMember {
    fn from(member: &Member) -> Self {
        Self::new(
            member.id.as_str(),
            member.username.as_str(),
            member.photo_url.as_str(),
            member.message.as_str(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn member() -> SpaceMember {
        SpaceMember::new("1", "username", "photoUrl", "message")
    }

    /// Member at (50, 50) with a 4x4 box, inside a 100x100 viewport
    fn placed(speed: f32, direction: f32) -> (SpaceMember, Bounds) {
        let mut m = member();
        m.initialize_position(50.0, 50.0);
        m.width = 4.0;
        m.height = 4.0;
        m.set_speed_pixels_per_second(speed);
        m.set_direction_radians(direction);
        (m, Bounds::new(0.0, 0.0, 100.0, 100.0))
    }

    #[test]
    fn test_new_member_defaults() {
        let m = member();
        assert_eq!(m.id(), "1");
        assert_eq!(m.message, "message");
        assert!(!m.loaded());
        assert!(!m.paused());
        assert!(!m.position_initialized());
        assert!(!m.show_username && !m.show_message);
        assert_eq!(m.speed_pixels_per_second(), 0.0);
    }

    #[test]
    fn test_speed_when_unpaused() {
        let mut m = member();
        m.set_speed_pixels_per_second(50.0);
        m.unpause();
        assert_eq!(m.speed_pixels_per_second(), 50.0);
    }

    #[test]
    fn test_speed_when_paused() {
        let mut m = member();
        m.set_speed_pixels_per_second(50.0);
        m.pause();
        assert_eq!(m.speed_pixels_per_second(), 0.0);
        assert_eq!(m.desired_speed_pixels_per_second(), 50.0);

        m.unpause();
        assert_eq!(m.speed_pixels_per_second(), 50.0);
    }

    #[test]
    fn test_direction_negative_angle() {
        let mut m = member();
        m.set_direction_radians(-(7.0 * PI) / 3.0); // -420 degrees
        assert!((m.direction_radians() - (5.0 * PI) / 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_direction_excessive_angle() {
        let mut m = member();
        m.set_direction_radians((13.0 * PI) / 6.0); // 750 degrees
        assert!((m.direction_radians() - PI / 6.0).abs() < 1e-4);
    }

    #[test]
    fn test_direction_degrees_round_trip() {
        let mut m = member();
        m.set_direction_degrees(100.0);
        assert!((m.direction_degrees() - 100.0).abs() < 1e-3);
        m.set_direction_degrees(-60.0);
        assert!((m.direction_degrees() - 300.0).abs() < 1e-3);
    }

    #[test]
    fn test_load_sets_default_size() {
        let mut m = member();
        m.load();
        assert!(m.loaded());
        assert_eq!(m.width, 50.0);
        assert_eq!(m.height, 50.0);
    }

    #[test]
    fn test_load_is_idempotent() {
        let mut m = member();
        m.load();
        m.width = 10.0;
        m.height = 12.0;
        m.load();
        assert_eq!(m.size(), Vec2::new(10.0, 12.0));
    }

    #[test]
    fn test_initialize_position() {
        let mut m = member();
        m.initialize_position(1.0, 1.0);
        assert_eq!(m.x(), 1.0);
        assert_eq!(m.y(), 1.0);
        assert!(m.position_initialized());
    }

    #[test]
    fn test_initialize_position_only_once() {
        let mut m = member();
        m.initialize_position(1.0, 1.0);
        m.initialize_position(2.0, 2.0);
        assert_eq!(m.position(), Vec2::new(1.0, 1.0));
        assert!(m.position_initialized());
    }

    #[test]
    fn test_update_moves_member() {
        let (mut m, bounds) = placed(5.0, 0.0);
        m.update(1.0, &bounds);
        assert_eq!(m.x(), 55.0);
        assert_eq!(m.y(), 50.0);
    }

    #[test]
    fn test_update_paused_member_stays() {
        let (mut m, bounds) = placed(5.0, 0.0);
        m.pause();
        m.update(1.0, &bounds);
        assert_eq!(m.position(), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_update_skips_long_tick() {
        let (mut m, bounds) = placed(80.0, PI / 6.0);
        let before = m.clone();
        assert_eq!(m.update(2.0, &bounds), StepOutcome::Skipped);
        assert_eq!(m, before);
    }

    #[test]
    fn test_bounce_left_wall() {
        let (mut m, bounds) = placed(80.0, (5.0 * PI) / 6.0); // 150 degrees
        m.update(1.0, &bounds);
        assert_eq!(m.x(), 2.0);
        assert!((m.direction_radians() - PI / 6.0).abs() < 1e-4); // 30 degrees
    }

    #[test]
    fn test_bounce_right_wall() {
        let (mut m, bounds) = placed(80.0, PI / 6.0); // 30 degrees
        m.update(1.0, &bounds);
        assert_eq!(m.x(), 98.0);
        assert!((m.direction_radians() - (5.0 * PI) / 6.0).abs() < 1e-4); // 150 degrees
    }

    #[test]
    fn test_bounce_bottom_wall() {
        let (mut m, bounds) = placed(80.0, PI / 3.0); // 60 degrees, y grows downward
        m.update(1.0, &bounds);
        assert_eq!(m.y(), 98.0);
        assert!((m.direction_radians() - (5.0 * PI) / 3.0).abs() < 1e-4); // 300 degrees
    }

    #[test]
    fn test_bounce_top_wall() {
        let (mut m, bounds) = placed(80.0, (4.0 * PI) / 3.0); // 240 degrees
        m.update(1.0, &bounds);
        assert_eq!(m.y(), 2.0);
        assert!((m.direction_radians() - (2.0 * PI) / 3.0).abs() < 1e-4); // 120 degrees
    }

    #[test]
    fn test_clone_is_independent() {
        let m = member();
        let mut cloned = m.clone();
        assert_eq!(cloned.id(), m.id());
        cloned.message = "changed".to_string();
        assert_eq!(m.message, "message");
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let (mut m, _) = placed(5.0, 0.0);
        m.show_message = true;
        let snap = m.snapshot();
        assert_eq!(snap.id, "1");
        assert_eq!((snap.x, snap.y), (50.0, 50.0));
        assert_eq!((snap.width, snap.height), (4.0, 4.0));
        assert!(snap.show_message);
        assert!(!snap.show_username);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Radians(f32),
        Degrees(f32),
        Update(f32),
        TogglePause,
    }

    fn op() -> impl proptest::strategy::Strategy<Value = Op> {
        use proptest::prelude::*;
        prop_oneof![
            (-1.0e5f32..1.0e5).prop_map(Op::Radians),
            (-1.0e5f32..1.0e5).prop_map(Op::Degrees),
            (0.0f32..2.0).prop_map(Op::Update),
            Just(Op::TogglePause),
        ]
    }

    proptest::proptest! {
        #[test]
        fn direction_stays_normalized(speed in 0.0f32..500.0, ops in proptest::collection::vec(op(), 1..40)) {
            let (mut m, bounds) = placed(speed, 0.0);
            for op in ops {
                match op {
                    Op::Radians(r) => m.set_direction_radians(r),
                    Op::Degrees(d) => m.set_direction_degrees(d),
                    Op::Update(dt) => {
                        m.update(dt, &bounds);
                    }
                    Op::TogglePause => {
                        if m.paused() { m.unpause() } else { m.pause() }
                    }
                }
                proptest::prop_assert!(m.direction_radians() >= 0.0);
                proptest::prop_assert!(m.direction_radians() < 2.0 * PI);
                let k = m.kinematics();
                proptest::prop_assert_eq!(k.direction, m.direction_radians());
            }
        }
    }
}
