//! Per-tick mapping from directional input to velocity and animation key.
use std::fmt;

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    Up,
    Down,
    Left,
    Right,
}

impl Facing {
    pub fn label(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    Idle,
    Walk,
}

/// One of the eight animation clips, e.g. `walk-left` or `idle-down`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationKey {
    pub motion: Motion,
    pub facing: Facing,
}

impl AnimationKey {
    pub const fn walk(facing: Facing) -> Self {
        Self {
            motion: Motion::Walk,
            facing,
        }
    }

    pub const fn idle(facing: Facing) -> Self {
        Self {
            motion: Motion::Idle,
            facing,
        }
    }
}

impl fmt::Display for AnimationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let motion = match self.motion {
            Motion::Idle => "idle",
            Motion::Walk => "walk",
        };
        write!(f, "{}-{}", motion, self.facing.label())
    }
}

/// Four independent directional signals sampled for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionalInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionalInput {
    /// Unit step per axis in world space (y-up). Opposing keys cancel.
    pub fn axis(self) -> Vec2 {
        let x = f32::from(i8::from(self.right) - i8::from(self.left));
        let y = f32::from(i8::from(self.up) - i8::from(self.down));
        Vec2::new(x, y)
    }
}

/// Result of one controller tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerOutput {
    pub velocity: Vec2,
    pub animation: AnimationKey,
}

/// Remembers the last direction walked so idle clips face the same way.
#[derive(Component, Debug, Default)]
pub struct PlayerController {
    last_facing: Option<Facing>,
}

impl PlayerController {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn last_facing(&self) -> Option<Facing> {
        self.last_facing
    }

    pub fn update(&mut self, input: DirectionalInput, speed: f32) -> ControllerOutput {
        let velocity = input.axis() * speed;

        let walking = if velocity.x < 0.0 {
            Some(Facing::Left)
        } else if velocity.x > 0.0 {
            Some(Facing::Right)
        } else if velocity.y > 0.0 {
            Some(Facing::Up)
        } else if velocity.y < 0.0 {
            Some(Facing::Down)
        } else {
            None
        };

        let animation = match walking {
            Some(facing) => {
                self.last_facing = Some(facing);
                AnimationKey::walk(facing)
            }
            None => AnimationKey::idle(self.last_facing.unwrap_or(Facing::Down)),
        };

        ControllerOutput {
            velocity,
            animation,
        }
    }
}
