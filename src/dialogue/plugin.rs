//! Dialogue plugin wiring the stepper resource and its systems.
use bevy::prelude::*;

use crate::{core::settings::GameSettings, proximity::plugin::ZoneDetectionSet};

use super::{
    events::DialogueProgressEvent,
    stepper::DialogueStepper,
    systems::{advance_typewriter, handle_interact_input, log_dialogue_progress},
    types::{DialogueBook, DialogueTexts},
};

/// Stepper mutations; UI sync runs after this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct DialogueStepSet;

pub struct DialoguePlugin {
    book: DialogueBook,
    texts: DialogueTexts,
}

impl DialoguePlugin {
    pub fn new(book: DialogueBook, texts: DialogueTexts) -> Self {
        Self { book, texts }
    }
}

impl Plugin for DialoguePlugin {
    fn build(&self, app: &mut App) {
        let reveal_interval = app
            .world()
            .get_resource::<GameSettings>()
            .map(|settings| settings.dialogue.reveal_interval)
            .unwrap_or_else(|| GameSettings::default().dialogue.reveal_interval);

        app.insert_resource(DialogueStepper::new(self.book.clone(), reveal_interval))
            .insert_resource(self.texts.clone())
            .add_message::<DialogueProgressEvent>()
            .add_systems(Startup, log_dialogue_book)
            .add_systems(
                Update,
                (
                    (
                        advance_typewriter,
                        handle_interact_input.after(ZoneDetectionSet),
                    )
                        .chain()
                        .in_set(DialogueStepSet),
                    log_dialogue_progress.after(DialogueStepSet),
                ),
            );
    }
}

fn log_dialogue_book(stepper: Res<DialogueStepper>) {
    info!(
        "DialoguePlugin initialised with {} sequences",
        stepper.book().len()
    );
}
