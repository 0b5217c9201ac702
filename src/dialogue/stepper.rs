//! The dialogue state machine.
//!
//! `Inactive -> Active -> (AwaitingChoice ->) Inactive`, with the typewriter's
//! typing flag gating every input. Each transition reports a
//! [`DialogueProgress`] so systems can log it and the UI can react.
use std::time::Duration;

use bevy::prelude::Resource;

use super::{
    typewriter::Typewriter,
    types::{Choice, DialogueBook, SequenceEnding, SequenceId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialoguePhase {
    Inactive,
    Active { sequence: SequenceId },
    AwaitingChoice { sequence: SequenceId },
}

/// Transition reported by the stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogueProgress {
    LineStarted { sequence: SequenceId, line: usize },
    LineRevealed { sequence: SequenceId, line: usize },
    ChoiceOffered { sequence: SequenceId },
    Declined { sequence: SequenceId },
    Accepted { from: SequenceId, to: SequenceId },
    Completed { sequence: SequenceId },
}

#[derive(Resource, Debug)]
pub struct DialogueStepper {
    book: DialogueBook,
    phase: DialoguePhase,
    typewriter: Option<Typewriter>,
    reveal_interval: Duration,
}

impl DialogueStepper {
    pub fn new(book: DialogueBook, reveal_interval: Duration) -> Self {
        Self {
            book,
            phase: DialoguePhase::Inactive,
            typewriter: None,
            reveal_interval,
        }
    }

    pub fn book(&self) -> &DialogueBook {
        &self.book
    }

    pub fn phase(&self) -> DialoguePhase {
        self.phase
    }

    pub fn is_typing(&self) -> bool {
        self.typewriter
            .as_ref()
            .is_some_and(|typewriter| typewriter.is_typing())
    }

    pub fn is_choosing(&self) -> bool {
        matches!(self.phase, DialoguePhase::AwaitingChoice { .. })
    }

    pub fn is_engaged(&self) -> bool {
        self.phase != DialoguePhase::Inactive
    }

    /// Text currently shown in the dialogue box, if any.
    pub fn visible_text(&self) -> Option<&str> {
        self.typewriter.as_ref().map(Typewriter::revealed)
    }

    /// Whether the interact prompt should show for the zone the player is in.
    pub fn hint_visible(&self, zone_sequence: Option<SequenceId>) -> bool {
        if self.is_engaged() {
            return false;
        }
        zone_sequence
            .and_then(|id| self.book.get(id))
            .is_some_and(|sequence| !sequence.is_completed())
    }

    /// Handles a rising edge of the interact input.
    ///
    /// `zone_sequence` is the conversation bound to the zone the player stands
    /// in; it only matters while the stepper is inactive.
    pub fn interact(&mut self, zone_sequence: Option<SequenceId>) -> Option<DialogueProgress> {
        if self.is_typing() {
            return None;
        }

        match self.phase {
            DialoguePhase::Inactive => {
                let id = zone_sequence?;
                if self.book.get(id)?.is_completed() {
                    return None;
                }
                self.begin(id)
            }
            DialoguePhase::Active { sequence } => {
                let next = self.book.get_mut(sequence)?.advance();
                self.enter_line(sequence, next)
            }
            DialoguePhase::AwaitingChoice { .. } => None,
        }
    }

    /// Handles a click on the yes/no panel.
    ///
    /// Returns every transition the answer caused, in order: "yes" reports
    /// `Accepted` followed by the follow-up sequence's first step. Empty when
    /// no choice is pending.
    pub fn choose(&mut self, choice: Choice) -> Vec<DialogueProgress> {
        let DialoguePhase::AwaitingChoice { sequence } = self.phase else {
            return Vec::new();
        };

        match choice {
            Choice::No => vec![DialogueProgress::Declined { sequence }],
            Choice::Yes => {
                let Some(current) = self.book.get_mut(sequence) else {
                    return Vec::new();
                };
                let SequenceEnding::Choice { on_accept } = current.ending() else {
                    return Vec::new();
                };
                current.mark_completed();
                self.typewriter = None;
                self.phase = DialoguePhase::Inactive;

                let mut progress = vec![DialogueProgress::Accepted {
                    from: sequence,
                    to: on_accept,
                }];
                progress.extend(self.begin(on_accept));
                progress
            }
        }
    }

    /// Advances the reveal timer by `delta`.
    pub fn tick(&mut self, delta: Duration) -> Option<DialogueProgress> {
        let fired = self.typewriter.as_mut().map_or(0, |typewriter| {
            if typewriter.is_typing() {
                typewriter.tick(delta)
            } else {
                0
            }
        });
        if fired > 0 && !self.is_typing() {
            return self.revealed_progress();
        }
        None
    }

    /// Fires exactly one reveal step.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn step_reveal(&mut self) -> Option<DialogueProgress> {
        let finished = self.typewriter.as_mut().is_some_and(Typewriter::step);
        if finished {
            return self.revealed_progress();
        }
        None
    }

    fn revealed_progress(&self) -> Option<DialogueProgress> {
        let DialoguePhase::Active { sequence } = self.phase else {
            return None;
        };
        let line = self.book.get(sequence)?.index();
        Some(DialogueProgress::LineRevealed { sequence, line })
    }

    fn begin(&mut self, id: SequenceId) -> Option<DialogueProgress> {
        self.book.get_mut(id)?.restart();
        self.phase = DialoguePhase::Active { sequence: id };
        self.enter_line(id, 0)
    }

    fn enter_line(&mut self, id: SequenceId, line: usize) -> Option<DialogueProgress> {
        let sequence = self.book.get_mut(id)?;

        if let Some(text) = sequence.line(line) {
            self.typewriter = Some(Typewriter::new(text, self.reveal_interval));
            return Some(DialogueProgress::LineStarted { sequence: id, line });
        }

        match sequence.ending() {
            SequenceEnding::Complete => {
                sequence.mark_completed();
                self.typewriter = None;
                self.phase = DialoguePhase::Inactive;
                Some(DialogueProgress::Completed { sequence: id })
            }
            SequenceEnding::Choice { .. } => {
                self.phase = DialoguePhase::AwaitingChoice { sequence: id };
                Some(DialogueProgress::ChoiceOffered { sequence: id })
            }
        }
    }
}
