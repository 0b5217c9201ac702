//! Markers for the scene's looping sounds.
use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct BackgroundMusic;

/// Loop gated by the typewriter.
#[derive(Component, Debug)]
pub struct TypingSound;
