//! Collection of space members with copy-on-write updates
//!
//! The collection is published as an immutable snapshot. Every mutation
//! clones only the members it touches, applies the change to the clones, and
//! swaps in a new snapshot; untouched members keep their exact allocation.
//! Anyone holding an older snapshot never sees a member change under them.

use glam::Vec2;
use std::collections::HashSet;
use std::sync::Arc;

use super::bounds::Bounds;
use super::member::SpaceMember;
use super::random::{PcgRandom, RandomSource};
use super::roster::{Member, MemberSnapshot};
use crate::consts::SHUFFLE_DIRECTION;

/// An immutable, ordered view of the collection
pub type Snapshot = Arc<[Arc<SpaceMember>]>;

/// Owner of the authoritative member collection.
///
/// Unknown ids are ignored by every single-member operation: callers are
/// expected to pass ids taken from the same collection.
#[derive(Debug, Clone)]
pub struct SpaceMembers<R: RandomSource = PcgRandom> {
    members: Snapshot,
    rng: R,
}

impl<R: RandomSource> SpaceMembers<R> {
    /// Create an empty collection drawing placement randomness from `rng`
    pub fn new(rng: R) -> Self {
        Self {
            members: Arc::from(Vec::new()),
            rng,
        }
    }

    pub fn from_roster(roster: &[Member], rng: R) -> Self {
        let mut members = Self::new(rng);
        members.replace_roster(roster);
        members
    }

    /// Discard every member and rebuild from `roster`, in roster order.
    ///
    /// Later entries reusing an id already seen are dropped.
    pub fn replace_roster(&mut self, roster: &[Member]) {
        let mut seen = HashSet::with_capacity(roster.len());
        let mut next = Vec::with_capacity(roster.len());
        for member in roster {
            if !seen.insert(member.id.as_str()) {
                log::warn!("Dropping duplicate roster id {}", member.id);
                continue;
            }
            next.push(Arc::new(SpaceMember::from(member)));
        }
        log::info!("Roster replaced ({} members)", next.len());
        self.members = next.into();
    }

    /// Current snapshot (cheap, shares the published allocation)
    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.members)
    }

    pub fn members(&self) -> &[Arc<SpaceMember>] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.members.iter().position(|m| m.id() == id)
    }

    pub fn get(&self, id: &str) -> Option<&Arc<SpaceMember>> {
        self.members.iter().find(|m| m.id() == id)
    }

    /// Public views of every member, in rendering order
    pub fn snapshots(&self) -> Vec<MemberSnapshot> {
        self.members.iter().map(|m| m.snapshot()).collect()
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Clone the member with `id`, mutate the clone, and publish it in place.
    ///
    /// Returns false (and publishes nothing) when no member has that id.
    fn with_member<F>(&mut self, id: &str, f: F) -> bool
    where
        F: FnOnce(&mut SpaceMember),
    {
        let Some(index) = self.index_of(id) else {
            log::debug!("No member with id {}, ignoring", id);
            return false;
        };

        let mut member = SpaceMember::clone(&self.members[index]);
        f(&mut member);

        let mut next = self.members.to_vec();
        next[index] = Arc::new(member);
        self.members = next.into();
        true
    }

    /// Clone, mutate, and republish every member
    fn with_all_members<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut SpaceMember, &mut R),
    {
        let rng = &mut self.rng;
        let next: Snapshot = self
            .members
            .iter()
            .map(|m| {
                let mut member = SpaceMember::clone(m);
                f(&mut member, rng);
                Arc::new(member)
            })
            .collect();
        self.members = next;
    }

    pub fn load_member(&mut self, id: &str) {
        self.with_member(id, |m| m.load());
    }

    pub fn toggle_paused(&mut self, id: &str) {
        self.with_member(id, |m| {
            if m.paused() {
                m.unpause();
            } else {
                m.pause();
            }
            log::debug!("Member {} paused: {}", m.id(), m.paused());
        });
    }

    pub fn set_show_details(&mut self, id: &str, show: bool) {
        self.with_member(id, |m| {
            m.show_username = show;
            m.show_message = show;
        });
    }

    pub fn update_message(&mut self, id: &str, message: impl Into<String>) {
        let message = message.into();
        self.with_member(id, |m| m.message = message);
    }

    /// Resize every member to a `diameter` square
    pub fn set_size(&mut self, diameter: f32) {
        self.with_all_members(|m, _| {
            m.width = diameter;
            m.height = diameter;
        });
    }

    pub fn set_speed(&mut self, id: &str, speed: f32) {
        self.with_member(id, |m| m.set_speed_pixels_per_second(speed));
    }

    pub fn set_direction_degrees(&mut self, id: &str, degrees: f32) {
        self.with_member(id, |m| m.set_direction_degrees(degrees));
    }

    pub fn set_position_x(&mut self, id: &str, x: f32) {
        self.with_member(id, |m| m.set_x(x));
    }

    pub fn set_position_y(&mut self, id: &str, y: f32) {
        self.with_member(id, |m| m.set_y(y));
    }

    /// Scatter every member to a random point and point them all left
    pub fn shuffle(&mut self, bounds: &Bounds) {
        self.with_all_members(|m, rng| {
            let pos = random_position(rng, bounds, m.half_extent());
            m.relocate(pos);
            m.set_direction_radians(SHUFFLE_DIRECTION);
        });
        log::debug!("Shuffled {} members", self.members.len());
    }

    /// Advance every member by one tick.
    ///
    /// Members that have never been placed first get a random position, so
    /// callers never need to seed positions themselves.
    pub fn update_all(&mut self, elapsed_seconds: f32, bounds: &Bounds) {
        self.with_all_members(|m, rng| {
            if !m.position_initialized() {
                let pos = random_position(rng, bounds, m.half_extent());
                m.initialize_position(pos.x, pos.y);
            }
            m.update(elapsed_seconds, bounds);
        });
    }
}

impl Default for SpaceMembers<PcgRandom> {
    fn default() -> Self {
        Self::new(PcgRandom::new(0))
    }
}

/// Uniform point inside `bounds`, keeping `half_extent` clear of every wall
fn random_position<R: RandomSource>(rng: &mut R, bounds: &Bounds, half_extent: Vec2) -> Vec2 {
    let area = bounds.inset(half_extent);
    let x = rng.uniform(area.left, area.right);
    let y = rng.uniform(area.top, area.bottom);
    Vec2::new(x, y)
}
