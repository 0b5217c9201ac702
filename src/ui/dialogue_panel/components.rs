// src/ui/dialogue_panel/components.rs
//
// Components and resources for the dialogue, sign, hint, and choice UI.

use bevy::prelude::*;

use crate::dialogue::types::Choice;

/// Root node of the conversation box.
#[derive(Component, Debug)]
pub struct DialogueBox;

/// Text node inside the conversation box holding the revealed line.
#[derive(Component, Debug)]
pub struct DialogueBoxText;

/// Root node of the sign box shown inside sign zones.
#[derive(Component, Debug)]
pub struct SignBox;

#[derive(Component, Debug)]
pub struct SignBoxText;

/// "Press E" prompt.
#[derive(Component, Debug)]
pub struct InteractHint;

/// Container for the yes/no buttons.
#[derive(Component, Debug)]
pub struct ChoicePanel;

/// Button carrying the answer it submits.
#[derive(Component, Debug)]
pub struct ChoiceButton {
    pub choice: Choice,
}

/// Message shown after answering "no".
#[derive(Component, Debug)]
pub struct ChoiceErrorText;

/// Whether the player has declined the current choice at least once.
#[derive(Resource, Debug, Default)]
pub struct ChoiceFeedback {
    pub declined: bool,
}

/// Resource containing layout settings for the dialogue UI.
#[derive(Resource, Debug)]
pub struct DialoguePanelSettings {
    /// Panel width as a percentage of the window.
    pub width_percent: f32,

    /// Padding inside panels (pixels).
    pub padding: f32,

    /// Border width (pixels).
    pub border_width: f32,

    /// Offset from bottom edge of screen (pixels).
    pub bottom_offset: f32,

    /// Font size for dialogue and sign text (points).
    pub text_font_size: f32,

    /// Font size for the interact hint (points).
    pub hint_font_size: f32,

    /// Font size for the yes/no labels (points).
    pub button_font_size: f32,
}

impl Default for DialoguePanelSettings {
    fn default() -> Self {
        Self {
            width_percent: 80.0,
            padding: 14.0,
            border_width: 2.0,
            bottom_offset: 24.0,
            text_font_size: 20.0,
            hint_font_size: 16.0,
            button_font_size: 18.0,
        }
    }
}
