use bevy::prelude::*;

mod audio;
mod core;
mod dialogue;
mod player;
mod proximity;
mod ui;
mod world;

use crate::{
    audio::SceneAudioPlugin,
    core::{settings::GameSettings, CorePlugin},
    dialogue::{types::DialogueTexts, DialoguePlugin},
    player::PlayerPlugin,
    proximity::ProximityPlugin,
    ui::UiPlugin,
    world::{scene::SceneBlueprint, WorldPlugin},
};

const WINDOW_SIZE: (u32, u32) = (800, 600);

fn main() -> AppExit {
    let mut app = App::new();
    app.insert_resource(ClearColor(Color::srgb_u8(0x1d, 0x1d, 0x1d)))
        .add_plugins(
            DefaultPlugins
                .set(ImagePlugin::default_nearest())
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Lakeside".into(),
                        resolution: WINDOW_SIZE.into(),
                        ..default()
                    }),
                    ..default()
                }),
        );

    let settings = GameSettings::load_or_default();
    let scene = match SceneBlueprint::load(&settings) {
        Ok(scene) => scene,
        Err(err) => {
            error!("Failed to load scene: {err}");
            return AppExit::error();
        }
    };

    let SceneBlueprint {
        layout,
        zones,
        book,
        hint,
        decline_message,
    } = scene;

    app.add_plugins((
        CorePlugin::new(settings),
        WorldPlugin::new(layout),
        PlayerPlugin,
        ProximityPlugin::new(zones),
        DialoguePlugin::new(book, DialogueTexts { hint, decline_message }),
        UiPlugin,
        SceneAudioPlugin,
    ))
    .run()
}
