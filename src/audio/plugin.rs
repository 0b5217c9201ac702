//! SceneAudioPlugin wires scene sounds to the dialogue stepper.
use bevy::prelude::*;

use crate::dialogue::plugin::DialogueStepSet;

use super::systems::{spawn_scene_audio, sync_typing_sound};

pub struct SceneAudioPlugin;

impl Plugin for SceneAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_scene_audio)
            .add_systems(Update, sync_typing_sound.after(DialogueStepSet));
    }
}
