//! Per-frame zone membership update.
use bevy::prelude::*;

use crate::{
    player::{
        components::{Player, PlayerHitbox},
        systems::player_bounds,
    },
    proximity::detector::{TriggerZones, ZoneOccupancy},
};

/// Recomputes which trigger zones the player overlaps.
pub fn update_zone_occupancy(
    player_query: Query<(&Transform, &PlayerHitbox), With<Player>>,
    zones: Res<TriggerZones>,
    mut occupancy: ResMut<ZoneOccupancy>,
) {
    let next = match player_query.single() {
        Ok((transform, hitbox)) => {
            ZoneOccupancy::evaluate(player_bounds(transform, hitbox), zones.as_slice())
        }
        Err(_) => ZoneOccupancy::default(),
    };

    if *occupancy == next {
        return;
    }

    for index in next.inside() {
        if !occupancy.is_inside(*index) {
            if let Some(zone) = zones.get(*index) {
                debug!("Player entered zone '{}'", zone.tag);
            }
        }
    }
    for index in occupancy.inside() {
        if !next.is_inside(*index) {
            if let Some(zone) = zones.get(*index) {
                debug!("Player left zone '{}'", zone.tag);
            }
        }
    }

    *occupancy = next;
}
