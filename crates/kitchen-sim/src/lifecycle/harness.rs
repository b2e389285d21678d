//! # Harness
//!
//! Drives one simulation run end to end: fetch a problem, feed its orders into
//! the kitchen at the configured rate, dispatch a courier per order, then
//! submit the resulting ledger.

use crate::clients::ChallengeApi;
use crate::config::AppSettings;
use crate::lifecycle::HarnessError;
use crate::model::Options;
use chrono::Utc;
use kitchen_core::model::Action;
use kitchen_core::{KitchenHandle, StorageManager};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{debug, info, info_span, instrument, Instrument};

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub test_id: String,
    /// The ledger exactly as submitted.
    pub actions: Vec<Action>,
    /// The verifier's response body.
    pub result: String,
}

pub struct Harness<A> {
    api: A,
    settings: AppSettings,
}

impl<A: ChallengeApi> Harness<A> {
    pub fn new(api: A, settings: AppSettings) -> Self {
        Self { api, settings }
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Runs the simulation once and submits the ledger.
    ///
    /// Every placement and pickup happens under the kitchen lock, with its
    /// timestamp read only once the lock is held, so the ledger is ordered by
    /// time. A placement that cannot find any slot aborts the run.
    #[instrument(skip(self), fields(seed = self.settings.challenge.seed))]
    pub async fn run(&self) -> Result<RunReport, HarnessError> {
        self.settings.validate()?;
        let challenge = &self.settings.challenge;
        let harness = &self.settings.harness;

        let problem = self.api.new_problem(&challenge.name, challenge.seed).await?;
        info!(
            test_id = %problem.test_id,
            orders = problem.orders.len(),
            "Starting simulation"
        );

        let kitchen = KitchenHandle::new(StorageManager::new(self.settings.storage.capacities())?);
        let mut rng = if challenge.seed != 0 {
            StdRng::seed_from_u64(challenge.seed as u64)
        } else {
            StdRng::from_entropy()
        };
        let rate = Duration::from_millis(harness.rate_ms);
        let window_ms = harness.min_pickup_sec.saturating_mul(1000)
            ..=harness.max_pickup_sec.saturating_mul(1000);

        let mut couriers = JoinSet::new();
        for order in problem.orders {
            let order_id = order.id.clone();
            info!(order_id = %order_id, name = %order.name, temp = ?order.temp, "Received order");

            {
                let mut manager = kitchen.lock().await;
                manager.place_order(order, Utc::now())?;
            }

            let delay = Duration::from_millis(rng.gen_range(window_ms.clone()));
            debug!(order_id = %order_id, delay_ms = delay.as_millis() as u64, "Courier dispatched");

            let courier = kitchen.clone();
            let span = info_span!("courier", order_id = %order_id);
            couriers.spawn(
                async move {
                    tokio::time::sleep(delay).await;
                    let mut manager = courier.lock().await;
                    manager.pickup_order(&order_id, Utc::now());
                }
                .instrument(span),
            );

            tokio::time::sleep(rate).await;
        }

        while let Some(joined) = couriers.join_next().await {
            joined.map_err(|e| HarnessError::PickupTask(e.to_string()))?;
        }

        let actions = kitchen.ledger().await;
        let options = Options::from(harness);
        info!(actions = actions.len(), "Submitting ledger");
        let result = self.api.solve(&problem.test_id, &options, &actions).await?;
        info!(test_id = %problem.test_id, %result, "Verifier responded");

        Ok(RunReport {
            test_id: problem.test_id,
            actions,
            result,
        })
    }
}
