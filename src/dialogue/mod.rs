//! Dialogue module hosting the content book, typewriter, and stepper state machine.
pub mod config;
pub mod events;
pub mod plugin;
pub mod stepper;
pub mod systems;
pub mod types;
pub mod typewriter;

pub use plugin::DialoguePlugin;

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bevy::prelude::*;

    use super::{
        config::DialogueContent,
        stepper::{DialoguePhase, DialogueProgress, DialogueStepper},
        types::{Choice, SequenceId},
    };
    use crate::{
        proximity::detector::{TriggerZones, ZoneOccupancy},
        world::{map::tests::SAMPLE_MAP, map::TiledMap, scene::SceneBlueprint},
    };

    const INTERVAL: Duration = Duration::from_millis(25);

    fn finish_reveal(stepper: &mut DialogueStepper) {
        while stepper.is_typing() {
            stepper.tick(INTERVAL);
        }
    }

    #[test]
    fn proposal_zone_runs_end_to_end() {
        let map = TiledMap::from_json("sample", SAMPLE_MAP).unwrap();
        let scene =
            SceneBlueprint::assemble(&map, "objects", &DialogueContent::default()).unwrap();
        let zones = TriggerZones::new(scene.zones.clone());
        let mut stepper = DialogueStepper::new(scene.book.clone(), INTERVAL);

        let zone = zones
            .as_slice()
            .iter()
            .find(|zone| zone.tag == "dialogue3")
            .unwrap();
        let player = Rect::from_center_size(zone.bounds.center(), Vec2::splat(8.0));
        let occupancy = ZoneOccupancy::evaluate(player, zones.as_slice());
        let proposal = occupancy.conversation().unwrap();
        assert_eq!(zones.sign_text(&occupancy), None);
        assert!(stepper.hint_visible(Some(proposal)));

        let mut last = None;
        for _ in 0..4 {
            last = stepper.interact(occupancy.conversation());
            finish_reveal(&mut stepper);
        }
        assert_eq!(
            last,
            Some(DialogueProgress::ChoiceOffered { sequence: proposal })
        );
        assert!(stepper.is_choosing());
        assert!(!stepper.hint_visible(Some(proposal)));

        assert_eq!(
            stepper.choose(Choice::No),
            vec![DialogueProgress::Declined { sequence: proposal }]
        );
        assert_eq!(
            stepper.phase(),
            DialoguePhase::AwaitingChoice { sequence: proposal }
        );

        let celebration = SequenceId::new(1);
        assert_eq!(
            stepper.choose(Choice::Yes),
            vec![
                DialogueProgress::Accepted {
                    from: proposal,
                    to: celebration
                },
                DialogueProgress::LineStarted {
                    sequence: celebration,
                    line: 0
                },
            ]
        );
        assert!(!stepper.is_choosing());
        assert_eq!(
            stepper.phase(),
            DialoguePhase::Active {
                sequence: celebration
            }
        );
        assert!(stepper.is_typing());
        assert_eq!(stepper.visible_text(), Some(""));

        stepper.tick(INTERVAL);
        assert_eq!(stepper.visible_text(), Some("Y"));
    }

    #[test]
    fn sign_zones_do_not_start_conversations() {
        let map = TiledMap::from_json("sample", SAMPLE_MAP).unwrap();
        let scene =
            SceneBlueprint::assemble(&map, "objects", &DialogueContent::default()).unwrap();
        let zones = TriggerZones::new(scene.zones);
        let mut stepper = DialogueStepper::new(scene.book, INTERVAL);

        let sign = &zones.as_slice()[0];
        let player = Rect::from_center_size(sign.bounds.center(), Vec2::splat(4.0));
        let occupancy = ZoneOccupancy::evaluate(player, zones.as_slice());

        assert!(occupancy.sign_visible());
        assert_eq!(
            zones.sign_text(&occupancy),
            Some("Welcome! Use the arrow keys to look around.")
        );
        assert_eq!(stepper.interact(occupancy.conversation()), None);
        assert!(!stepper.hint_visible(occupancy.conversation()));
    }
}
