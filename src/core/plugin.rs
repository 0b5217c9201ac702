//! CorePlugin owns the scaled frame clock and publishes the loaded game settings.
use bevy::prelude::*;
#[cfg(feature = "core_debug")]
use bevy::time::TimerMode;
use std::time::Duration;

use super::settings::GameSettings;

const DEFAULT_TIME_SCALE: f32 = 1.0;
const MIN_TIME_SCALE: f32 = 0.001;

#[cfg(feature = "core_debug")]
#[derive(Resource)]
struct DebugTickTimer {
    timer: Timer,
}

#[cfg(feature = "core_debug")]
impl Default for DebugTickTimer {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(1.0, TimerMode::Repeating),
        }
    }
}

/// Scaled frame time shared by movement, animation and the typewriter.
#[derive(Resource, Debug)]
pub struct SimulationClock {
    time_scale: f32,
    last_real_delta: Duration,
    last_scaled_delta: Duration,
    elapsed: Duration,
    frames: u64,
}

impl SimulationClock {
    pub fn new(time_scale: f32) -> Self {
        Self {
            time_scale: time_scale.max(MIN_TIME_SCALE),
            last_real_delta: Duration::ZERO,
            last_scaled_delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frames: 0,
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(MIN_TIME_SCALE);
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    #[cfg_attr(not(feature = "core_debug"), allow(dead_code))]
    pub fn last_real_delta(&self) -> Duration {
        self.last_real_delta
    }

    /// Delta of the current frame after applying the time scale.
    pub fn delta(&self) -> Duration {
        self.last_scaled_delta
    }

    pub fn delta_secs(&self) -> f32 {
        self.last_scaled_delta.as_secs_f32()
    }

    #[cfg_attr(not(any(test, feature = "core_debug")), allow(dead_code))]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[cfg_attr(not(any(test, feature = "core_debug")), allow(dead_code))]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn tick(&mut self, real_delta: Duration) {
        self.last_real_delta = real_delta;
        self.last_scaled_delta = real_delta.mul_f32(self.time_scale);
        self.elapsed += self.last_scaled_delta;
        self.frames = self.frames.saturating_add(1);
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_SCALE)
    }
}

/// Registers the frame clock and the settings resource.
#[derive(Debug, Clone)]
pub struct CorePlugin {
    settings: GameSettings,
}

impl CorePlugin {
    pub fn new(settings: GameSettings) -> Self {
        Self { settings }
    }
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.settings.clone())
            .insert_resource(SimulationClock::new(
                self.settings.simulation.time_scale,
            ))
            .add_systems(Startup, log_startup_settings)
            .add_systems(First, update_simulation_clock);

        #[cfg(feature = "core_debug")]
        {
            app.insert_resource(DebugTickTimer::default())
                .add_systems(Update, log_scaled_ticks);
        }
    }
}

fn update_simulation_clock(mut clock: ResMut<SimulationClock>, time: Res<Time>) {
    clock.tick(time.delta());
}

fn log_startup_settings(clock: Res<SimulationClock>, settings: Res<GameSettings>) {
    info!(
        "CorePlugin initialised: time scale {:.3}, player speed {:.1}, reveal interval {}ms",
        clock.time_scale(),
        settings.player.speed,
        settings.dialogue.reveal_interval.as_millis()
    );
}

#[cfg(feature = "core_debug")]
fn log_scaled_ticks(mut timer: ResMut<DebugTickTimer>, clock: Res<SimulationClock>) {
    if timer.timer.tick(clock.delta()).just_finished() {
        info!(
            target: "core_debug",
            "Sim elapsed: {:.2}s | frames: {} | scale: {:.3} | real dt: {:.4}s | scaled dt: {:.4}s",
            clock.elapsed().as_secs_f32(),
            clock.frames(),
            clock.time_scale(),
            clock.last_real_delta().as_secs_f32(),
            clock.delta_secs(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_scales_delta_and_counts_frames() {
        let mut clock = SimulationClock::new(2.0);
        clock.tick(Duration::from_millis(16));
        clock.tick(Duration::from_millis(16));

        let scaled = Duration::from_millis(16).mul_f32(2.0);
        assert_eq!(clock.delta(), scaled);
        assert_eq!(clock.elapsed(), scaled * 2);
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn plugin_uses_configured_time_scale() {
        let mut settings = GameSettings::default();
        settings.simulation.time_scale = 0.5;

        let mut app = App::new();
        app.add_plugins(CorePlugin::new(settings));

        let clock = app.world().resource::<SimulationClock>();
        assert_eq!(clock.time_scale(), 0.5);
        assert!(app.world().get_resource::<GameSettings>().is_some());
    }

    #[test]
    fn clock_clamps_min_time_scale() {
        let mut clock = SimulationClock::new(0.0);
        assert!((clock.time_scale() - MIN_TIME_SCALE).abs() < f32::EPSILON);

        clock.set_time_scale(-5.0);
        assert!((clock.time_scale() - MIN_TIME_SCALE).abs() < f32::EPSILON);
    }
}
