// src/ui/dialogue_panel/systems.rs
//
// Systems for spawning the dialogue UI and keeping it in sync with the
// stepper and the zone occupancy.

use bevy::prelude::*;

use crate::{
    dialogue::{
        events::DialogueProgressEvent,
        stepper::DialogueStepper,
        types::{Choice, DialogueTexts},
    },
    proximity::detector::{TriggerZones, ZoneOccupancy},
};

use super::components::{
    ChoiceButton, ChoiceErrorText, ChoiceFeedback, ChoicePanel, DialogueBox, DialogueBoxText,
    DialoguePanelSettings, InteractHint, SignBox, SignBoxText,
};

// Visual constants
const BACKGROUND_COLOR: Color = Color::srgba(0.08, 0.08, 0.1, 0.92);
const BORDER_COLOR: Color = Color::srgb(0.85, 0.8, 0.65);
const TEXT_COLOR: Color = Color::WHITE;
const HINT_COLOR: Color = Color::srgb(1.0, 0.9, 0.4);
const ERROR_COLOR: Color = Color::srgb(1.0, 0.45, 0.4);
const BUTTON_COLOR: Color = Color::srgba(0.18, 0.18, 0.22, 0.95);
const BUTTON_HOVER_COLOR: Color = Color::srgba(0.28, 0.28, 0.34, 0.95);
const BUTTON_PRESSED_COLOR: Color = Color::srgba(0.4, 0.35, 0.2, 0.95);

fn panel_node(settings: &DialoguePanelSettings) -> Node {
    Node {
        position_type: PositionType::Absolute,
        bottom: Val::Px(settings.bottom_offset),
        left: Val::Percent((100.0 - settings.width_percent) / 2.0),
        width: Val::Percent(settings.width_percent),
        min_height: Val::Px(96.0),
        padding: UiRect::all(Val::Px(settings.padding)),
        border: UiRect::all(Val::Px(settings.border_width)),
        flex_direction: FlexDirection::Column,
        ..default()
    }
}

fn body_text(settings: &DialoguePanelSettings) -> (Text, TextFont, TextColor) {
    (
        Text::new(""),
        TextFont {
            font_size: settings.text_font_size,
            ..default()
        },
        TextColor(TEXT_COLOR),
    )
}

/// Spawns every dialogue UI node, all hidden.
pub fn spawn_dialogue_ui(
    mut commands: Commands,
    settings: Res<DialoguePanelSettings>,
    texts: Res<DialogueTexts>,
) {
    commands
        .spawn((
            panel_node(&settings),
            BackgroundColor(BACKGROUND_COLOR),
            BorderColor::from(BORDER_COLOR),
            Visibility::Hidden,
            DialogueBox,
            Name::new("Dialogue Box"),
        ))
        .with_children(|parent| {
            parent.spawn((body_text(&settings), DialogueBoxText));
        });

    commands
        .spawn((
            panel_node(&settings),
            BackgroundColor(BACKGROUND_COLOR),
            BorderColor::from(BORDER_COLOR),
            Visibility::Hidden,
            SignBox,
            Name::new("Sign Box"),
        ))
        .with_children(|parent| {
            parent.spawn((body_text(&settings), SignBoxText));
        });

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(settings.bottom_offset),
            right: Val::Px(settings.bottom_offset),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(BACKGROUND_COLOR),
        Text::new(texts.hint.clone()),
        TextFont {
            font_size: settings.hint_font_size,
            ..default()
        },
        TextColor(HINT_COLOR),
        Visibility::Hidden,
        InteractHint,
        Name::new("Interact Hint"),
    ));

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(settings.bottom_offset + 130.0),
                left: Val::Percent(35.0),
                width: Val::Percent(30.0),
                padding: UiRect::all(Val::Px(settings.padding)),
                border: UiRect::all(Val::Px(settings.border_width)),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(10.0),
                ..default()
            },
            BackgroundColor(BACKGROUND_COLOR),
            BorderColor::from(BORDER_COLOR),
            Visibility::Hidden,
            ChoicePanel,
            Name::new("Choice Panel"),
        ))
        .with_children(|parent| {
            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    column_gap: Val::Px(16.0),
                    ..default()
                })
                .with_children(|row| {
                    for (choice, label) in [(Choice::Yes, "Yes"), (Choice::No, "No")] {
                        row.spawn((
                            Node {
                                width: Val::Px(96.0),
                                padding: UiRect::all(Val::Px(8.0)),
                                border: UiRect::all(Val::Px(1.5)),
                                justify_content: JustifyContent::Center,
                                align_items: AlignItems::Center,
                                ..default()
                            },
                            Button,
                            Interaction::None,
                            BackgroundColor(BUTTON_COLOR),
                            BorderColor::from(BORDER_COLOR),
                            ChoiceButton { choice },
                            Name::new(format!("Choice Button {}", label)),
                        ))
                        .with_children(|button| {
                            button.spawn((
                                Text::new(label),
                                TextFont {
                                    font_size: settings.button_font_size,
                                    ..default()
                                },
                                TextColor(TEXT_COLOR),
                            ));
                        });
                    }
                });

            parent.spawn((
                Text::new(texts.decline_message.clone()),
                TextFont {
                    font_size: settings.hint_font_size,
                    ..default()
                },
                TextColor(ERROR_COLOR),
                Visibility::Hidden,
                ChoiceErrorText,
            ));
        });

    info!("Dialogue UI spawned");
}

fn set_visible(visibility: &mut Mut<Visibility>, visible: bool) {
    let next = if visible {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    if **visibility != next {
        **visibility = next;
    }
}

fn set_text(text: &mut Mut<Text>, value: &str) {
    if text.0 != value {
        text.0.clear();
        text.0.push_str(value);
    }
}

/// Mirrors the typewriter output into the conversation box.
pub fn sync_dialogue_box(
    stepper: Res<DialogueStepper>,
    mut boxes: Query<&mut Visibility, With<DialogueBox>>,
    mut texts: Query<&mut Text, With<DialogueBoxText>>,
) {
    if !stepper.is_changed() {
        return;
    }

    let visible = stepper.visible_text();
    for mut visibility in boxes.iter_mut() {
        set_visible(&mut visibility, visible.is_some());
    }
    for mut text in texts.iter_mut() {
        set_text(&mut text, visible.unwrap_or_default());
    }
}

/// Shows the first overlapping sign's text, unless a conversation owns the UI.
pub fn sync_sign_box(
    zones: Res<TriggerZones>,
    occupancy: Res<ZoneOccupancy>,
    stepper: Res<DialogueStepper>,
    mut boxes: Query<&mut Visibility, With<SignBox>>,
    mut texts: Query<&mut Text, With<SignBoxText>>,
) {
    let sign = if stepper.is_engaged() {
        None
    } else {
        zones.sign_text(&occupancy)
    };

    for mut visibility in boxes.iter_mut() {
        set_visible(&mut visibility, sign.is_some());
    }
    for mut text in texts.iter_mut() {
        set_text(&mut text, sign.unwrap_or_default());
    }
}

pub fn sync_interact_hint(
    occupancy: Res<ZoneOccupancy>,
    stepper: Res<DialogueStepper>,
    mut hints: Query<&mut Visibility, With<InteractHint>>,
) {
    let visible = stepper.hint_visible(occupancy.conversation());
    for mut visibility in hints.iter_mut() {
        set_visible(&mut visibility, visible);
    }
}

/// Shows the yes/no panel while a choice is pending, plus the error after "no".
pub fn sync_choice_panel(
    stepper: Res<DialogueStepper>,
    mut feedback: ResMut<ChoiceFeedback>,
    mut panels: Query<&mut Visibility, (With<ChoicePanel>, Without<ChoiceErrorText>)>,
    mut errors: Query<&mut Visibility, (With<ChoiceErrorText>, Without<ChoicePanel>)>,
) {
    let choosing = stepper.is_choosing();
    if !choosing && feedback.declined {
        feedback.declined = false;
    }

    for mut visibility in panels.iter_mut() {
        set_visible(&mut visibility, choosing);
    }
    for mut visibility in errors.iter_mut() {
        set_visible(&mut visibility, choosing && feedback.declined);
    }
}

/// Submits yes/no clicks to the stepper.
#[allow(clippy::type_complexity)]
pub fn handle_choice_buttons(
    buttons: Query<(&Interaction, &ChoiceButton), (Changed<Interaction>, With<Button>)>,
    mut stepper: ResMut<DialogueStepper>,
    mut feedback: ResMut<ChoiceFeedback>,
    mut progress: MessageWriter<DialogueProgressEvent>,
) {
    for (interaction, button) in buttons.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }

        let events = stepper.choose(button.choice);
        if events.is_empty() {
            continue;
        }
        feedback.declined = button.choice == Choice::No;
        for event in events {
            progress.write(DialogueProgressEvent { progress: event });
        }
    }
}

/// Hover and press feedback for the yes/no buttons.
#[allow(clippy::type_complexity)]
pub fn highlight_choice_buttons(
    mut buttons: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<ChoiceButton>),
    >,
) {
    for (interaction, mut background) in buttons.iter_mut() {
        background.0 = match interaction {
            Interaction::Pressed => BUTTON_PRESSED_COLOR,
            Interaction::Hovered => BUTTON_HOVER_COLOR,
            Interaction::None => BUTTON_COLOR,
        };
    }
}
