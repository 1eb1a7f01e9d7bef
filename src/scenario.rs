//! Scripted headless runs
//!
//! A scenario is a roster, settings, and actions pinned to frames. Running it
//! drives the member collection at a fixed frame rate and mirrors every frame
//! onto headless rasters, the same way a display host would.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use crate::error::{MemspaceError, Result, read_json};
use crate::renderer::{HeadlessRaster, MemberRaster, RasterEvent};
use crate::settings::Settings;
use crate::sim::{
    Member, MemberAction, MemberSnapshot, PcgRandom, RandomSource, RngState, ScheduledAction,
    SpaceMembers, parse_roster, tick,
};

/// Read a roster (JSON array of members) from disk
pub fn load_roster(path: &Path) -> Result<Vec<Member>> {
    let text = std::fs::read_to_string(path).map_err(|source| MemspaceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let roster = parse_roster(&text).map_err(|source| MemspaceError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Loaded {} roster entries from {}", roster.len(), path.display());
    Ok(roster)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub settings: Settings,
    pub members: Vec<Member>,
    #[serde(default)]
    pub actions: Vec<ScheduledAction>,
}

/// Where a raster ended up on screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentedMember {
    pub id: String,
    pub source: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Outcome of a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub ticks: u64,
    /// Seed record the placement RNG started from
    pub rng: RngState,
    pub members: Vec<MemberSnapshot>,
    pub presented: Vec<PresentedMember>,
}

impl Scenario {
    pub fn new(members: Vec<Member>, settings: Settings) -> Self {
        Self {
            settings,
            members,
            actions: Vec::new(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let scenario: Self = read_json(path)?;
        log::info!(
            "Loaded scenario from {} ({} members, {} actions)",
            path.display(),
            scenario.members.len(),
            scenario.actions.len()
        );
        Ok(scenario)
    }

    /// Run the scenario to completion
    pub fn run(&self) -> RunReport {
        let settings = &self.settings;
        let bounds = settings.viewport;
        let mut members = SpaceMembers::from_roster(&self.members, PcgRandom::new(settings.seed));

        // Raster events are queued and applied at the next frame boundary
        let inbox: Rc<RefCell<Vec<MemberAction>>> = Rc::default();
        let mut rasters: Vec<(String, MemberRaster<HeadlessRaster>)> = members
            .members()
            .iter()
            .map(|member| {
                let mut raster = MemberRaster::for_member(HeadlessRaster::new(bounds), member);
                let queue = Rc::clone(&inbox);
                let id = member.id().to_string();
                raster.on_load(Some(Box::new(move || {
                    queue
                        .borrow_mut()
                        .push(MemberAction::Load { id: id.clone() })
                })));
                (member.id().to_string(), raster)
            })
            .collect();

        // Headless sources are ready immediately
        for (_, raster) in &mut rasters {
            raster.raster_mut().fire(RasterEvent::Load);
        }
        for action in inbox.borrow_mut().drain(..) {
            members.apply(&action, &bounds);
        }
        members.set_size(settings.member_diameter);

        for (id, _) in &rasters {
            members.set_speed(id, settings.initial_speed);
            if settings.randomize_headings {
                let degrees = members.rng_mut().uniform(0.0, 360.0);
                members.set_direction_degrees(id, degrees);
            }
        }

        let mut scheduled = self.actions.clone();
        scheduled.sort_by_key(|s| s.tick);
        let mut pending = scheduled.into_iter().peekable();

        let dt = settings.tick_secs();
        let total = settings.total_ticks();
        log::info!(
            "Running {} members for {} ticks at {} Hz",
            members.len(),
            total,
            settings.tick_rate_hz
        );

        for frame in 0..total {
            let mut due: Vec<MemberAction> = inbox.borrow_mut().drain(..).collect();
            while let Some(next) = pending.next_if(|s| s.tick <= frame) {
                log::debug!("Tick {}: {:?}", frame, next.action);
                due.push(next.action);
            }

            tick(&mut members, &due, dt, &bounds);

            for ((_, raster), member) in rasters.iter_mut().zip(members.members()) {
                raster.project(member);
            }
        }

        let presented = rasters
            .iter()
            .map(|(id, raster)| PresentedMember {
                id: id.clone(),
                source: raster.source().to_string(),
                x: raster.position().x,
                y: raster.position().y,
                width: raster.width(),
                height: raster.height(),
            })
            .collect();

        RunReport {
            ticks: total,
            rng: members.rng().state(),
            members: members.snapshots(),
            presented,
        }
    }
}
