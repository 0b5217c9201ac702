//! Systems feeding input and frame time into the dialogue stepper.
use bevy::prelude::*;

use crate::{
    core::plugin::SimulationClock,
    proximity::detector::ZoneOccupancy,
};

use super::{
    events::DialogueProgressEvent,
    stepper::{DialogueProgress, DialogueStepper},
    types::SequenceId,
};

const INTERACT_KEYS: [KeyCode; 2] = [KeyCode::KeyE, KeyCode::Space];

/// Ticks the pending reveal timer with the scaled frame delta.
pub fn advance_typewriter(
    clock: Res<SimulationClock>,
    mut stepper: ResMut<DialogueStepper>,
    mut progress: MessageWriter<DialogueProgressEvent>,
) {
    if !stepper.is_typing() {
        return;
    }
    if let Some(event) = stepper.tick(clock.delta()) {
        progress.write(DialogueProgressEvent { progress: event });
    }
}

/// Passes the rising edge of the interact key to the stepper.
pub fn handle_interact_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    occupancy: Res<ZoneOccupancy>,
    mut stepper: ResMut<DialogueStepper>,
    mut progress: MessageWriter<DialogueProgressEvent>,
) {
    if !keyboard.any_just_pressed(INTERACT_KEYS) {
        return;
    }

    if stepper.is_typing() {
        debug!("Interact ignored while a line is still typing");
        return;
    }

    match stepper.interact(occupancy.conversation()) {
        Some(event) => {
            progress.write(DialogueProgressEvent { progress: event });
        }
        None => debug!("Interact had no effect"),
    }
}

/// Logs every stepper transition.
pub fn log_dialogue_progress(
    mut events: MessageReader<DialogueProgressEvent>,
    stepper: Res<DialogueStepper>,
) {
    let name = |id: SequenceId| {
        stepper
            .book()
            .get(id)
            .map(|sequence| sequence.name().to_string())
            .unwrap_or_else(|| format!("#{}", id.value()))
    };

    for event in events.read() {
        match event.progress {
            DialogueProgress::LineStarted { sequence, line } => {
                info!(target: "dialogue", "{}: revealing line {}", name(sequence), line)
            }
            DialogueProgress::LineRevealed { sequence, line } => {
                debug!(target: "dialogue", "{}: line {} fully shown", name(sequence), line)
            }
            DialogueProgress::ChoiceOffered { sequence } => {
                info!(target: "dialogue", "{}: waiting for yes/no", name(sequence))
            }
            DialogueProgress::Declined { sequence } => {
                info!(target: "dialogue", "{}: player answered no", name(sequence))
            }
            DialogueProgress::Accepted { from, to } => info!(
                target: "dialogue",
                "{}: player answered yes, starting {}",
                name(from),
                name(to)
            ),
            DialogueProgress::Completed { sequence } => {
                info!(target: "dialogue", "{}: completed", name(sequence))
            }
        }
    }
}
