//! The in-memory entity store: tourists, alerts, and the restricted zone.

use chrono::Utc;
use parking_lot::RwLock;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use yatra_model::{
    Alert, AlertId, AlertStatus, GeoPoint, RestrictedZone, Tourist, TouristStatus,
};

use crate::sim::{NAME_POOL, SimulationConfig};

/// Sole owner of the tourist and alert collections.
///
/// All mutation funnels through one lock, so concurrent readers always
/// observe a consistent (if instantly stale) snapshot and concurrent status
/// writes to the same alert are last-write-wins without tearing. No
/// operation here blocks on I/O or awaits.
pub struct SafetyStore {
    config: SimulationConfig,
    inner: RwLock<Inner>,
}

struct Inner {
    tourists: Vec<Tourist>,
    alerts: Vec<Alert>,
    rng: StdRng,
}

impl std::fmt::Debug for SafetyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("SafetyStore")
            .field("tourist_count", &inner.tourists.len())
            .field("alert_count", &inner.alerts.len())
            .finish_non_exhaustive()
    }
}

impl SafetyStore {
    /// Seed a store from OS entropy.
    pub fn seed(config: SimulationConfig) -> Self {
        Self::seed_with_rng(config, StdRng::from_os_rng())
    }

    /// Seed a store from a caller-supplied generator. Deterministic given a
    /// seeded `StdRng`.
    pub fn seed_with_rng(config: SimulationConfig, mut rng: StdRng) -> Self {
        let mut tourists = Vec::with_capacity(config.tourist_count);
        for i in 0..config.tourist_count {
            tourists.push(generate_tourist(&config, i, &mut rng));
        }

        // Distinct picks: one SOS flip + one alert per pick, first alert the
        // most recent.
        let now = Utc::now().timestamp_millis();
        let picks = rand::seq::index::sample(
            &mut rng,
            tourists.len(),
            config.alert_count.min(tourists.len()),
        );
        let mut alerts = Vec::with_capacity(picks.len());
        for (i, pick) in picks.iter().enumerate() {
            let tourist = &mut tourists[pick];
            tourist.status = TouristStatus::Sos;
            alerts.push(Alert {
                id: format!("S{}", i + 1)
                    .parse()
                    .expect("seeded alert ids are well-formed"),
                tourist_id: tourist.id.clone(),
                created_at: now - (i as i64) * 60_000,
                status: AlertStatus::Active,
            });
        }

        info!(
            tourists = tourists.len(),
            alerts = alerts.len(),
            "safety store seeded"
        );

        Self {
            config,
            inner: RwLock::new(Inner {
                tourists,
                alerts,
                rng,
            }),
        }
    }

    /// Snapshot of the tourist collection.
    pub fn tourists(&self) -> Vec<Tourist> {
        self.inner.read().tourists.clone()
    }

    /// Snapshot of the alert collection.
    pub fn alerts(&self) -> Vec<Alert> {
        self.inner.read().alerts.clone()
    }

    /// The static restricted-area polygon.
    pub fn restricted_zone(&self) -> &RestrictedZone {
        &self.config.restricted_zone
    }

    /// Simulation settings this store was seeded with.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Overwrite an alert's status. Returns `false` without side effects when
    /// no alert matches `id`. Transition ordering is deliberately not
    /// enforced; any status may be set at any time.
    pub fn set_alert_status(&self, id: &AlertId, status: AlertStatus) -> bool {
        let mut inner = self.inner.write();
        match inner.alerts.iter_mut().find(|alert| &alert.id == id) {
            Some(alert) => {
                alert.status = status;
                true
            }
            None => false,
        }
    }

    /// Advance the simulation one step: perturb every tourist's position by
    /// a bounded random delta and roll it into the trail, evicting the oldest
    /// entry past the bound. The only post-seed tourist mutation.
    pub fn tick(&self) {
        let step = self.config.step_degrees;
        let trail_length = self.config.trail_length;

        let mut guard = self.inner.write();
        let Inner { tourists, rng, .. } = &mut *guard;
        for tourist in tourists.iter_mut() {
            let next = GeoPoint::new(
                tourist.position.lat + rng.random_range(-step..step),
                tourist.position.lng + rng.random_range(-step..step),
            );
            tourist.position = next;
            tourist.trail.push(next);
            if tourist.trail.len() > trail_length {
                tourist.trail.remove(0);
            }
        }
    }
}

fn generate_tourist(config: &SimulationConfig, index: usize, rng: &mut StdRng) -> Tourist {
    let scatter = config.scatter_degrees;
    let initial = char::from(b'A' + rng.random_range(0..26u8));
    let position = GeoPoint::new(
        config.center.lat + rng.random_range(-scatter..scatter),
        config.center.lng + rng.random_range(-scatter..scatter),
    );

    // Back-project the trail: offsets shrink to zero at the newest entry, so
    // the last trail element equals the position from construction.
    let trail: Vec<GeoPoint> = (0..config.trail_length)
        .map(|k| {
            let age = (config.trail_length - 1 - k) as f64 / config.trail_length as f64;
            GeoPoint::new(
                position.lat + rng.random_range(-0.01..0.01) * age,
                position.lng + rng.random_range(-0.01..0.01) * age,
            )
        })
        .collect();

    Tourist {
        id: format!("T{}", 1000 + index),
        name: format!(
            "{} {initial}.",
            NAME_POOL[rng.random_range(0..NAME_POOL.len())]
        ),
        phone: format!("+91{}", rng.random_range(6_000_000_000u64..10_000_000_000u64)),
        emergency_contact: format!("+91{}", rng.random_range(9_000_000_000u64..9_100_000_000u64)),
        position,
        trail,
        status: TouristStatus::Normal,
    }
}
