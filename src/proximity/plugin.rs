//! ProximityPlugin publishes the trigger zones and keeps occupancy current.
use bevy::prelude::*;

use crate::player::plugin::PlayerMovementSet;

use super::{
    detector::{TriggerZone, TriggerZones, ZoneOccupancy},
    systems::update_zone_occupancy,
};

/// Runs after the player moved; dialogue input reads its result.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZoneDetectionSet;

pub struct ProximityPlugin {
    zones: Vec<TriggerZone>,
}

impl ProximityPlugin {
    pub fn new(zones: Vec<TriggerZone>) -> Self {
        Self { zones }
    }
}

impl Plugin for ProximityPlugin {
    fn build(&self, app: &mut App) {
        info!("ProximityPlugin registered with {} zones", self.zones.len());

        app.insert_resource(TriggerZones::new(self.zones.clone()))
            .init_resource::<ZoneOccupancy>()
            .add_systems(
                Update,
                update_zone_occupancy
                    .in_set(ZoneDetectionSet)
                    .after(PlayerMovementSet),
            );
    }
}
