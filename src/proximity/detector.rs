//! Rectangle overlap between the player and the scene's trigger zones.
use bevy::prelude::*;

use crate::dialogue::types::{SequenceId, ZoneScript};

/// A static trigger region taken from the map's object layer.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerZone {
    /// Name of the map object this zone came from.
    pub tag: String,
    pub bounds: Rect,
    pub script: ZoneScript,
}

impl TriggerZone {
    pub fn new(tag: impl Into<String>, bounds: Rect, script: ZoneScript) -> Self {
        Self {
            tag: tag.into(),
            bounds,
            script,
        }
    }
}

/// Axis-aligned overlap test; touching edges count as overlapping.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.min.x <= b.max.x && b.min.x <= a.max.x && a.min.y <= b.max.y && b.min.y <= a.max.y
}

/// Every trigger zone of the scene, in map order.
#[derive(Resource, Debug, Clone, Default)]
pub struct TriggerZones {
    zones: Vec<TriggerZone>,
}

impl TriggerZones {
    pub fn new(zones: Vec<TriggerZone>) -> Self {
        Self { zones }
    }

    pub fn get(&self, index: usize) -> Option<&TriggerZone> {
        self.zones.get(index)
    }

    pub fn as_slice(&self) -> &[TriggerZone] {
        &self.zones
    }

    /// Text of the sign the player is reading, if any.
    pub fn sign_text(&self, occupancy: &ZoneOccupancy) -> Option<&str> {
        let zone = self.zones.get(occupancy.sign?)?;
        match &zone.script {
            ZoneScript::Sign { text } => Some(text.as_str()),
            ZoneScript::Conversation { .. } => None,
        }
    }
}

/// Zones the player currently overlaps, recomputed every frame.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneOccupancy {
    inside: Vec<usize>,
    sign: Option<usize>,
    conversation: Option<SequenceId>,
}

impl ZoneOccupancy {
    /// Pure function of the player bounds and the zones.
    pub fn evaluate(player: Rect, zones: &[TriggerZone]) -> Self {
        let mut occupancy = Self::default();
        for (index, zone) in zones.iter().enumerate() {
            if !overlaps(player, zone.bounds) {
                continue;
            }
            occupancy.inside.push(index);
            match zone.script {
                ZoneScript::Sign { .. } => {
                    occupancy.sign.get_or_insert(index);
                }
                ZoneScript::Conversation { sequence } => {
                    occupancy.conversation.get_or_insert(sequence);
                }
            }
        }
        occupancy
    }

    pub fn inside(&self) -> &[usize] {
        &self.inside
    }

    pub fn is_inside(&self, index: usize) -> bool {
        self.inside.contains(&index)
    }

    /// True when the player stands in at least one sign zone.
    pub fn sign_visible(&self) -> bool {
        self.sign.is_some()
    }

    /// Conversation bound to the first conversation zone the player is in.
    pub fn conversation(&self) -> Option<SequenceId> {
        self.conversation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, x + w, y + h)
    }

    fn sign(tag: &str, bounds: Rect, text: &str) -> TriggerZone {
        TriggerZone::new(
            tag,
            bounds,
            ZoneScript::Sign {
                text: text.to_string(),
            },
        )
    }

    fn zones() -> Vec<TriggerZone> {
        vec![
            sign("dialogue1", rect(0.0, 0.0, 32.0, 32.0), "one"),
            sign("dialogue2", rect(24.0, 0.0, 32.0, 32.0), "two"),
            TriggerZone::new(
                "dialogue3",
                rect(100.0, 100.0, 20.0, 20.0),
                ZoneScript::Conversation {
                    sequence: SequenceId::new(0),
                },
            ),
        ]
    }

    #[test]
    fn touching_edges_overlap() {
        let zone = rect(0.0, 0.0, 10.0, 10.0);
        assert!(overlaps(rect(10.0, 0.0, 5.0, 5.0), zone));
        assert!(overlaps(rect(-5.0, -5.0, 5.0, 5.0), zone));
        assert!(!overlaps(rect(10.5, 0.0, 5.0, 5.0), zone));
        assert!(!overlaps(rect(0.0, -6.0, 5.0, 5.0), zone));
    }

    #[test]
    fn sign_visibility_is_or_of_membership() {
        let zones = zones();

        let both = ZoneOccupancy::evaluate(rect(26.0, 4.0, 4.0, 4.0), &zones);
        assert_eq!(both.inside(), &[0, 1]);
        assert!(both.sign_visible());

        let second = ZoneOccupancy::evaluate(rect(40.0, 4.0, 4.0, 4.0), &zones);
        assert_eq!(second.inside(), &[1]);
        assert!(second.sign_visible());

        let outside = ZoneOccupancy::evaluate(rect(60.0, 60.0, 4.0, 4.0), &zones);
        assert!(outside.inside().is_empty());
        assert!(!outside.sign_visible());
        assert_eq!(outside.conversation(), None);
    }

    #[test]
    fn first_overlapping_sign_wins() {
        let zones = TriggerZones::new(zones());
        let both = ZoneOccupancy::evaluate(rect(26.0, 4.0, 4.0, 4.0), zones.as_slice());
        assert_eq!(zones.sign_text(&both), Some("one"));

        let second = ZoneOccupancy::evaluate(rect(40.0, 4.0, 4.0, 4.0), zones.as_slice());
        assert_eq!(zones.sign_text(&second), Some("two"));
    }

    #[test]
    fn conversation_zone_reports_its_sequence() {
        let zones = zones();
        let occupancy = ZoneOccupancy::evaluate(rect(105.0, 105.0, 4.0, 4.0), &zones);
        assert!(occupancy.is_inside(2));
        assert!(!occupancy.sign_visible());
        assert_eq!(occupancy.conversation(), Some(SequenceId::new(0)));
    }

    #[test]
    fn evaluation_is_idempotent() {
        let zones = zones();
        let player = rect(26.0, 4.0, 4.0, 4.0);
        assert_eq!(
            ZoneOccupancy::evaluate(player, &zones),
            ZoneOccupancy::evaluate(player, &zones)
        );
    }
}
