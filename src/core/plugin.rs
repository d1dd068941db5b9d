//! CorePlugin owns the monotonic clock read by timed confirmation intents.
use bevy::prelude::*;
use std::time::Duration;

/// Monotonic elapsed time, ticked once per frame by the driver loop.
///
/// Timed logic (the reset confirmation window) samples this resource at the
/// moment an intent is handled instead of reading a wall clock, so tests can
/// tick it by hand.
#[derive(Resource, Debug, Default)]
pub struct SimulationClock {
    elapsed: Duration,
}

impl SimulationClock {
    /// Total duration elapsed since the clock was initialised.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Applies a frame delta to the clock.
    pub fn tick(&mut self, delta: Duration) {
        self.elapsed += delta;
    }
}

/// Registers the simulation clock and its per-frame tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>()
            .add_systems(Update, update_simulation_clock);
    }
}

fn update_simulation_clock(mut clock: ResMut<SimulationClock>, time: Res<Time>) {
    clock.tick(time.delta());
}
