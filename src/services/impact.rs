use crate::config::config;
use crate::models::{LocationRecord, RefreshBounds};
use akkss_common::impact::simulate_refresh;
use std::time::Duration;
use tracing::debug;

/// Stand-in for a backend refresh: waits, then bumps every counter by a
/// small random amount.
pub struct SimulatedImpact {
    delay: Duration,
    bounds: RefreshBounds,
}

impl SimulatedImpact {
    pub fn new(delay: Duration, bounds: RefreshBounds) -> Self {
        Self { delay, bounds }
    }

    pub fn from_config() -> Self {
        Self::new(config().refresh_delay, RefreshBounds::default())
    }

    pub async fn refresh(&self, baseline: &[LocationRecord]) -> Vec<LocationRecord> {
        tokio::time::sleep(self.delay).await;
        let next = simulate_refresh(baseline, &self.bounds, &mut rand::thread_rng());
        debug!("Simulated refresh of {} locations", next.len());
        next
    }
}
