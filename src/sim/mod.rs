//! Motion and state simulation
//!
//! Everything that decides where a member is and how it moves lives here.
//! Nothing in this module renders, touches the network, or blocks:
//! - Entities are plain data plus their motion step
//! - The collection publishes immutable snapshots (copy-on-write)
//! - Randomness is injected through `RandomSource`

pub mod bounds;
pub mod member;
pub mod members;
pub mod motion;
pub mod random;
pub mod roster;
pub mod tick;

pub use bounds::Bounds;
pub use member::SpaceMember;
pub use members::SpaceMembers;
pub use motion::{Kinematics, StepOutcome};
pub use random::{MidpointRandom, PcgRandom, RandomSource, RngState};
pub use roster::{Member, MemberSnapshot, parse_roster};
pub use tick::{MemberAction, ScheduledAction, tick};
