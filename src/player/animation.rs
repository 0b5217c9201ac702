//! Sprite sheet clips and frame playback for the player.
use std::{collections::HashMap, time::Duration};

use bevy::prelude::*;

use super::controller::{AnimationKey, Facing};

const IDLE_ROW: usize = 4;

/// Inclusive frame range of one clip inside the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipRange {
    pub first: usize,
    pub last: usize,
}

impl ClipRange {
    pub const fn new(first: usize, last: usize) -> Self {
        Self { first, last }
    }

    pub fn len(self) -> usize {
        self.last.saturating_sub(self.first) + 1
    }
}

/// Frame ranges for the eight player clips.
///
/// The first four rows of the sheet hold the walk cycles (down, left, right,
/// up), one frame per column. The fifth row, when present, holds one idle
/// frame per direction in the same order; otherwise the idle clip reuses the
/// first walk frame. Rows missing from smaller sheets fall back to the last
/// row, so every index stays inside the atlas.
#[derive(Resource, Debug, Clone)]
pub struct AnimationClips {
    clips: HashMap<AnimationKey, ClipRange>,
    frame_duration: Duration,
}

impl AnimationClips {
    pub fn from_grid(columns: u32, rows: u32, fps: f32) -> Self {
        let columns = columns.max(1) as usize;
        let rows = rows.max(1) as usize;
        let order = [Facing::Down, Facing::Left, Facing::Right, Facing::Up];

        let mut clips = HashMap::with_capacity(order.len() * 2);
        for (row, facing) in order.into_iter().enumerate() {
            let first = row.min(rows - 1) * columns;
            let walk = ClipRange::new(first, first + columns - 1);
            let idle = if rows > IDLE_ROW {
                let frame = IDLE_ROW * columns + row.min(columns - 1);
                ClipRange::new(frame, frame)
            } else {
                ClipRange::new(walk.first, walk.first)
            };
            clips.insert(AnimationKey::walk(facing), walk);
            clips.insert(AnimationKey::idle(facing), idle);
        }

        let fps = if fps.is_finite() { fps.max(1.0) } else { 1.0 };
        Self {
            clips,
            frame_duration: Duration::from_secs_f32(1.0 / fps),
        }
    }

    pub fn range(&self, key: AnimationKey) -> ClipRange {
        self.clips
            .get(&key)
            .copied()
            .unwrap_or(ClipRange::new(0, 0))
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }
}

/// Playback cursor inside the current clip.
#[derive(Component, Debug, Default)]
pub struct SpriteAnimator {
    key: Option<AnimationKey>,
    frame: usize,
    elapsed: Duration,
}

impl SpriteAnimator {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn key(&self) -> Option<AnimationKey> {
        self.key
    }

    /// Plays `key`, restarting the clip when it changes, and returns the
    /// atlas index to display.
    pub fn play(&mut self, key: AnimationKey, clips: &AnimationClips, delta: Duration) -> usize {
        let range = clips.range(key);

        if self.key != Some(key) {
            self.key = Some(key);
            self.frame = 0;
            self.elapsed = Duration::ZERO;
            return range.first;
        }

        let frame_duration = clips.frame_duration();
        if frame_duration.is_zero() {
            return range.first + self.frame;
        }

        self.elapsed += delta;
        while self.elapsed >= frame_duration {
            self.elapsed -= frame_duration;
            self.frame = (self.frame + 1) % range.len();
        }
        range.first + self.frame
    }
}
