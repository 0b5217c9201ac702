//! Background loop and typewriter sound.
use bevy::{
    audio::{AudioSinkPlayback, Volume},
    prelude::*,
};

use crate::{
    audio::components::{BackgroundMusic, TypingSound},
    core::settings::GameSettings,
    dialogue::stepper::DialogueStepper,
};

/// Starts the background loop once at scene entry and parks the typing loop, paused.
pub fn spawn_scene_audio(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings: Res<GameSettings>,
) {
    let audio = &settings.audio;

    if let Some(path) = &audio.background {
        commands.spawn((
            AudioPlayer::new(asset_server.load(path.clone())),
            PlaybackSettings::LOOP.with_volume(Volume::Linear(audio.background_volume)),
            BackgroundMusic,
            Name::new("Background Music"),
        ));
        info!("Background music started: {}", path);
    }

    if let Some(path) = &audio.typing {
        commands.spawn((
            AudioPlayer::new(asset_server.load(path.clone())),
            PlaybackSettings::LOOP
                .paused()
                .with_volume(Volume::Linear(audio.typing_volume)),
            TypingSound,
            Name::new("Typing Sound"),
        ));
    }
}

/// Change to apply to the typing loop's sink this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkChange {
    Play,
    Pause,
}

fn typing_sink_change(typing: bool, paused: bool) -> Option<SinkChange> {
    match (typing, paused) {
        (true, true) => Some(SinkChange::Play),
        (false, false) => Some(SinkChange::Pause),
        _ => None,
    }
}

/// Plays the typing loop exactly while a line is being revealed.
pub fn sync_typing_sound(
    stepper: Res<DialogueStepper>,
    sinks: Query<&AudioSink, With<TypingSound>>,
) {
    let typing = stepper.is_typing();
    for sink in sinks.iter() {
        match typing_sink_change(typing, sink.is_paused()) {
            Some(SinkChange::Play) => sink.play(),
            Some(SinkChange::Pause) => sink.pause(),
            None => {}
        }
    }
}
