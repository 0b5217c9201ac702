//! Messages emitted when the dialogue stepper changes state.
use bevy::prelude::*;

use super::stepper::DialogueProgress;

/// Fired for every stepper transition (line start/reveal, choice, completion).
#[derive(Message, Debug, Clone, Copy)]
pub struct DialogueProgressEvent {
    pub progress: DialogueProgress,
}
