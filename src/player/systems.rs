//! Systems for spawning, moving, and animating the player.
use bevy::prelude::*;

use crate::{
    core::{plugin::SimulationClock, settings::GameSettings},
    player::{
        animation::{AnimationClips, SpriteAnimator},
        components::{Player, PlayerHitbox, PlayerMotion},
        controller::{AnimationKey, DirectionalInput, Facing, PlayerController},
    },
    world::scene::MapLayout,
};

const PLAYER_Z: f32 = 10.0;

/// Spawns the player sprite at the map's spawn point.
pub fn spawn_player(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut atlas_layouts: ResMut<Assets<TextureAtlasLayout>>,
    settings: Res<GameSettings>,
    layout: Res<MapLayout>,
    clips: Res<AnimationClips>,
) {
    let player = &settings.player;
    let atlas_layout = atlas_layouts.add(TextureAtlasLayout::from_grid(
        player.frame_size,
        player.sheet_columns,
        player.sheet_rows,
        None,
        None,
    ));
    let idle = AnimationKey::idle(Facing::Down);

    commands.spawn((
        Sprite::from_atlas_image(
            asset_server.load(player.sprite_sheet.clone()),
            TextureAtlas {
                layout: atlas_layout,
                index: clips.range(idle).first,
            },
        ),
        Transform::from_translation(layout.spawn.extend(PLAYER_Z)),
        Player,
        PlayerController::default(),
        PlayerMotion {
            velocity: Vec2::ZERO,
            animation: idle,
        },
        PlayerHitbox {
            size: player.hitbox,
        },
        SpriteAnimator::default(),
        Name::new("Player"),
    ));

    info!(
        "Player spawned at ({:.1}, {:.1})",
        layout.spawn.x, layout.spawn.y
    );
}

fn read_directional_input(keyboard: &ButtonInput<KeyCode>) -> DirectionalInput {
    DirectionalInput {
        up: keyboard.any_pressed([KeyCode::ArrowUp, KeyCode::KeyW]),
        down: keyboard.any_pressed([KeyCode::ArrowDown, KeyCode::KeyS]),
        left: keyboard.any_pressed([KeyCode::ArrowLeft, KeyCode::KeyA]),
        right: keyboard.any_pressed([KeyCode::ArrowRight, KeyCode::KeyD]),
    }
}

/// Reads directional keys and updates velocity plus animation key.
pub fn drive_player_controller(
    keyboard: Res<ButtonInput<KeyCode>>,
    settings: Res<GameSettings>,
    mut query: Query<(&mut PlayerController, &mut PlayerMotion), With<Player>>,
) {
    let input = read_directional_input(&keyboard);
    for (mut controller, mut motion) in query.iter_mut() {
        let output = controller.update(input, settings.player.speed);
        if output.animation != motion.animation {
            debug!("Player animation: {} -> {}", motion.animation, output.animation);
        }
        motion.velocity = output.velocity;
        motion.animation = output.animation;
    }
}

/// Integrates velocity and keeps the player inside the map.
pub fn move_player(
    clock: Res<SimulationClock>,
    layout: Res<MapLayout>,
    mut query: Query<(&PlayerMotion, &mut Transform), With<Player>>,
) {
    let delta = clock.delta_secs();
    for (motion, mut transform) in query.iter_mut() {
        if motion.velocity == Vec2::ZERO {
            continue;
        }
        let mut next = transform.translation.truncate() + motion.velocity * delta;
        if layout.size_px.cmpgt(Vec2::ZERO).all() {
            next = next.clamp(
                Vec2::new(0.0, -layout.size_px.y),
                Vec2::new(layout.size_px.x, 0.0),
            );
        }
        transform.translation.x = next.x;
        transform.translation.y = next.y;
    }
}

/// Advances the sprite sheet frame for the current clip.
pub fn animate_player_sprite(
    clock: Res<SimulationClock>,
    clips: Res<AnimationClips>,
    mut query: Query<(&PlayerMotion, &mut SpriteAnimator, &mut Sprite), With<Player>>,
) {
    for (motion, mut animator, mut sprite) in query.iter_mut() {
        let index = animator.play(motion.animation, &clips, clock.delta());
        if let Some(atlas) = sprite.texture_atlas.as_mut() {
            atlas.index = index;
        }
    }
}

/// World-space box used for zone overlap.
pub fn player_bounds(transform: &Transform, hitbox: &PlayerHitbox) -> Rect {
    hitbox.bounds(transform.translation.truncate())
}
