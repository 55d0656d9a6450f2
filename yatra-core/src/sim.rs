//! Simulation tuning: seed sizing, geography, and movement bounds.

use std::time::Duration;

use yatra_model::{GeoPoint, RestrictedZone};

/// Name pool the seeder draws from when generating tourists.
pub(crate) const NAME_POOL: [&str; 8] = [
    "Aarav", "Diya", "Kabir", "Anaya", "Vivaan", "Zara", "Ishan", "Meera",
];

/// Knobs for the seeded dataset and the live-movement simulation.
///
/// `Default` reproduces the reference sizing: 120 tourists scattered around
/// central Jaipur, 5 seeded SOS alerts, 5-point trails, a ±0.001° step per
/// tick, one tick every 3 seconds.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Number of tourists generated at seed time.
    pub tourist_count: usize,
    /// Number of tourists flipped to SOS, one alert each.
    pub alert_count: usize,
    /// Maximum retained trail positions per tourist.
    pub trail_length: usize,
    /// Geographic center tourists scatter around.
    pub center: GeoPoint,
    /// Maximum per-axis offset from the center at seed time, in degrees.
    pub scatter_degrees: f64,
    /// Maximum per-axis position change per tick, in degrees.
    pub step_degrees: f64,
    /// Period of the movement tick.
    pub tick_interval: Duration,
    /// The static restricted-area polygon.
    pub restricted_zone: RestrictedZone,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tourist_count: 120,
            alert_count: 5,
            trail_length: 5,
            center: GeoPoint::new(26.9124, 75.7873),
            scatter_degrees: 0.15,
            step_degrees: 0.001,
            tick_interval: Duration::from_secs(3),
            restricted_zone: RestrictedZone::new(vec![
                GeoPoint::new(26.93, 75.75),
                GeoPoint::new(26.98, 75.77),
                GeoPoint::new(26.95, 75.84),
                GeoPoint::new(26.90, 75.82),
            ]),
        }
    }
}
