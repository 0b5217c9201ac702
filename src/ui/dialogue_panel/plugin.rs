// src/ui/dialogue_panel/plugin.rs
//
// UiPlugin coordinates dialogue UI systems and resources.

use bevy::prelude::*;

use crate::{dialogue::plugin::DialogueStepSet, proximity::plugin::ZoneDetectionSet};

use super::components::{ChoiceFeedback, DialoguePanelSettings};
use super::systems::{
    handle_choice_buttons, highlight_choice_buttons, spawn_dialogue_ui, sync_choice_panel,
    sync_dialogue_box, sync_interact_hint, sync_sign_box,
};

/// Plugin providing the dialogue box, sign box, interact hint, and yes/no panel.
///
/// # System Ordering
///
/// 1. `handle_choice_buttons` - runs inside `DialogueStepSet` with the other stepper mutations
/// 2. `sync_*` - run after both `DialogueStepSet` and `ZoneDetectionSet`
///
/// # Dependencies
///
/// - `DialoguePlugin` (stepper, texts, progress messages)
/// - `ProximityPlugin` (zones and occupancy)
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        info!("UiPlugin registered");

        app.insert_resource(DialoguePanelSettings::default())
            .init_resource::<ChoiceFeedback>()
            .add_systems(Startup, spawn_dialogue_ui)
            .add_systems(
                Update,
                (
                    handle_choice_buttons.in_set(DialogueStepSet),
                    highlight_choice_buttons,
                    (
                        sync_dialogue_box,
                        sync_sign_box,
                        sync_interact_hint,
                        sync_choice_panel,
                    )
                        .after(DialogueStepSet)
                        .after(ZoneDetectionSet),
                ),
            );
    }
}
