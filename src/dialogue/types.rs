//! Dialogue content types shared by the stepper, the zones, and the UI.
use bevy::prelude::Resource;

/// Index of a sequence inside its [`DialogueBook`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SequenceId(usize);

impl SequenceId {
    pub fn new(value: usize) -> Self {
        Self(value)
    }

    pub fn value(self) -> usize {
        self.0
    }
}

/// What happens once every line of a sequence has been shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceEnding {
    /// The sequence is marked completed and the stepper goes idle.
    Complete,
    /// A yes/no choice is offered; "yes" starts `on_accept`.
    Choice { on_accept: SequenceId },
}

/// Ordered lines plus a cursor that only ever moves forward.
#[derive(Debug, Clone)]
pub struct DialogueSequence {
    name: String,
    lines: Vec<String>,
    index: usize,
    completed: bool,
    ending: SequenceEnding,
}

impl DialogueSequence {
    pub fn new(name: impl Into<String>, lines: Vec<String>, ending: SequenceEnding) -> Self {
        Self {
            name: name.into(),
            lines,
            index: 0,
            completed: false,
            ending,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position of the current line; equals `len()` once exhausted.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn ending(&self) -> SequenceEnding {
        self.ending
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub(super) fn restart(&mut self) {
        self.index = 0;
        self.completed = false;
    }

    pub(super) fn advance(&mut self) -> usize {
        self.index = (self.index + 1).min(self.lines.len());
        self.index
    }

    pub(super) fn mark_completed(&mut self) {
        self.index = self.lines.len();
        self.completed = true;
    }
}

/// Every sequence available to the scene.
#[derive(Debug, Clone, Default)]
pub struct DialogueBook {
    sequences: Vec<DialogueSequence>,
}

impl DialogueBook {
    pub fn push(&mut self, sequence: DialogueSequence) -> SequenceId {
        self.sequences.push(sequence);
        SequenceId::new(self.sequences.len() - 1)
    }

    pub fn get(&self, id: SequenceId) -> Option<&DialogueSequence> {
        self.sequences.get(id.value())
    }

    pub(super) fn get_mut(&mut self, id: SequenceId) -> Option<&mut DialogueSequence> {
        self.sequences.get_mut(id.value())
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }
}

/// Answer picked in the yes/no panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Yes,
    No,
}

/// Behaviour bound to a trigger zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneScript {
    /// Static text shown while the player stands inside.
    Sign { text: String },
    /// Sequence started by the interact key while inside.
    Conversation { sequence: SequenceId },
}

/// Fixed UI strings that accompany the dialogue.
#[derive(Resource, Debug, Clone)]
pub struct DialogueTexts {
    pub hint: String,
    pub decline_message: String,
}
