//! # Kitchen Handle
//!
//! The mutual-exclusion handle shared by everyone who calls into the kitchen.

use crate::error::KitchenError;
use crate::manager::StorageManager;
use crate::model::{Action, Order};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// Serializes access to a [`StorageManager`].
///
/// Cheap to clone; every clone guards the same manager. Each call holds the
/// lock for exactly one manager operation, so placements and pickups issued
/// from different tasks observe a strict total order.
///
/// ```rust
/// use chrono::Utc;
/// use kitchen_core::model::{Capacities, Order};
/// use kitchen_core::{KitchenHandle, StorageManager};
///
/// #[tokio::main]
/// async fn main() -> Result<(), kitchen_core::KitchenError> {
///     let kitchen = KitchenHandle::new(StorageManager::new(Capacities::default())?);
///
///     let courier = kitchen.clone();
///     kitchen.place_order(Order::new("o1", "Pho", "hot", 12, 60), Utc::now()).await?;
///     courier.pickup_order("o1", Utc::now()).await;
///
///     assert_eq!(kitchen.ledger().await.len(), 2);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct KitchenHandle {
    inner: Arc<Mutex<StorageManager>>,
}

impl KitchenHandle {
    pub fn new(manager: StorageManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    /// Acquires the kitchen for a critical section of the caller's choosing.
    ///
    /// Useful when `now` should be read only once the lock is held.
    pub async fn lock(&self) -> MutexGuard<'_, StorageManager> {
        self.inner.lock().await
    }

    pub async fn place_order(&self, order: Order, now: DateTime<Utc>) -> Result<(), KitchenError> {
        self.inner.lock().await.place_order(order, now)
    }

    pub async fn pickup_order(&self, id: &str, now: DateTime<Utc>) {
        self.inner.lock().await.pickup_order(id, now)
    }

    /// Snapshot of the ledger so far.
    pub async fn ledger(&self) -> Vec<Action> {
        self.inner.lock().await.actions().to_vec()
    }
}
