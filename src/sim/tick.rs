//! Per-frame driver
//!
//! Discrete user actions are queued as `MemberAction`s and applied in order
//! before the frame's motion step, so an action arriving between two frames
//! is always observed whole by the next one.

use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use super::members::SpaceMembers;
use super::random::RandomSource;

/// A discrete action from the user-facing layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MemberAction {
    Load { id: String },
    TogglePaused { id: String },
    ShowDetails { id: String, show: bool },
    UpdateMessage { id: String, message: String },
    /// Applies to every member
    SetSize { diameter: f32 },
    SetSpeed { id: String, speed: f32 },
    SetDirectionDegrees { id: String, degrees: f32 },
    SetPositionX { id: String, x: f32 },
    SetPositionY { id: String, y: f32 },
    /// Applies to every member
    Shuffle,
}

/// An action pinned to the frame it should run on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledAction {
    pub tick: u64,
    pub action: MemberAction,
}

impl<R: RandomSource> SpaceMembers<R> {
    /// Apply one action. Shuffles use `bounds`.
    pub fn apply(&mut self, action: &MemberAction, bounds: &Bounds) {
        match action {
            MemberAction::Load { id } => self.load_member(id),
            MemberAction::TogglePaused { id } => self.toggle_paused(id),
            MemberAction::ShowDetails { id, show } => self.set_show_details(id, *show),
            MemberAction::UpdateMessage { id, message } => {
                self.update_message(id, message.as_str())
            }
            MemberAction::SetSize { diameter } => self.set_size(*diameter),
            MemberAction::SetSpeed { id, speed } => self.set_speed(id, *speed),
            MemberAction::SetDirectionDegrees { id, degrees } => {
                self.set_direction_degrees(id, *degrees)
            }
            MemberAction::SetPositionX { id, x } => self.set_position_x(id, *x),
            MemberAction::SetPositionY { id, y } => self.set_position_y(id, *y),
            MemberAction::Shuffle => self.shuffle(bounds),
        }
    }
}

/// Advance one frame: apply queued actions in order, then move every member
pub fn tick<R: RandomSource>(
    members: &mut SpaceMembers<R>,
    actions: &[MemberAction],
    elapsed_seconds: f32,
    bounds: &Bounds,
) {
    for action in actions {
        members.apply(action, bounds);
    }
    members.update_all(elapsed_seconds, bounds);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::{MidpointRandom, PcgRandom};
    use crate::sim::roster::Member;
    use glam::Vec2;
    use std::f32::consts::PI;

    const DT: f32 = 1.0 / 60.0;

    fn members() -> SpaceMembers<MidpointRandom> {
        let roster = vec![
            Member::new("1", "username1", "photoUrl1", "message1"),
            Member::new("2", "username2", "photoUrl2", "message2"),
        ];
        SpaceMembers::from_roster(&roster, MidpointRandom)
    }

    #[test]
    fn test_tick_applies_actions_before_motion() {
        let mut members = members();
        let bounds = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let actions = [
            MemberAction::Shuffle,
            MemberAction::SetSpeed {
                id: "1".into(),
                speed: 60.0,
            },
        ];
        tick(&mut members, &actions, DT, &bounds);

        // Shuffle points left, so member 1 moved one pixel left of center
        let m = &members.members()[0];
        assert!((m.x() - 49.0).abs() < 1e-4);
        assert!((m.y() - 50.0).abs() < 1e-4);
        assert_eq!(members.members()[1].position(), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_paused_member_holds_position() {
        let mut members = members();
        let bounds = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let setup = [
            MemberAction::SetSpeed {
                id: "1".into(),
                speed: 60.0,
            },
            MemberAction::TogglePaused { id: "1".into() },
        ];
        tick(&mut members, &setup, DT, &bounds);
        for _ in 0..30 {
            tick(&mut members, &[], DT, &bounds);
        }
        assert_eq!(members.members()[0].position(), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_members_stay_inside_bounds() {
        let roster: Vec<Member> = (0..8)
            .map(|i| Member::new(i.to_string(), format!("user{i}"), "p", ""))
            .collect();
        let mut members = SpaceMembers::from_roster(&roster, PcgRandom::new(12345));
        let bounds = Bounds::new(0.0, 0.0, 300.0, 400.0);
        for (i, member) in roster.iter().enumerate() {
            members.apply(&MemberAction::Load { id: member.id.clone() }, &bounds);
            members.set_speed(&member.id, 250.0);
            members.set_direction_degrees(&member.id, i as f32 * 47.0);
        }

        for _ in 0..600 {
            tick(&mut members, &[], DT, &bounds);
            for m in members.members() {
                assert!(bounds.inset(m.half_extent()).contains(m.position()));
                assert!((0.0..2.0 * PI).contains(&m.direction_radians()));
            }
        }
    }

    #[test]
    fn test_action_json_shape() {
        let json = r#"{"type": "update_message", "id": "1", "message": "hello"}"#;
        let action: MemberAction = serde_json::from_str(json).unwrap();
        assert_eq!(
            action,
            MemberAction::UpdateMessage {
                id: "1".into(),
                message: "hello".into()
            }
        );

        let shuffle: MemberAction = serde_json::from_str(r#"{"type": "shuffle"}"#).unwrap();
        assert_eq!(shuffle, MemberAction::Shuffle);
    }
}
