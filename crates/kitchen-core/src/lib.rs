//! # Kitchen Core
//!
//! Order storage and eviction for a kitchen that holds perishable orders
//! until a courier picks them up.
//!
//! ## Core Components
//!
//! - **[`model`]**: Orders, temperatures, storage classes, capacities and the
//!   ledger [`Action`](model::Action).
//! - **[`decay`]**: Freshness arithmetic. Ideal storage decays at 1x, anything
//!   else at 2x.
//! - **[`record`]**: [`OrderRecord`], the mutable per-order state.
//! - **[`eviction`]**: [`EvictionIndex`], a lazily cleaned min-heap over shelf
//!   expiry instants.
//! - **[`manager`]**: [`StorageManager`], the placement/pickup state machine and
//!   ledger owner.
//! - **[`handle`]**: [`KitchenHandle`], the lock every caller goes through.
//!
//! ## Determinism
//!
//! No operation reads the clock. Every call takes `now` from the caller, so a
//! test can replay any schedule exactly.
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use kitchen_core::model::{ActionKind, Capacities, Order};
//! use kitchen_core::StorageManager;
//!
//! let t0 = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
//! let mut kitchen = StorageManager::new(Capacities::default()).unwrap();
//!
//! kitchen.place_order(Order::new("o1", "Salad", "cold", 8, 10), t0).unwrap();
//! kitchen.pickup_order("o1", t0 + Duration::seconds(11));
//!
//! // Ten seconds of freshness ran out before the courier arrived.
//! assert_eq!(kitchen.actions()[1].action, ActionKind::Discard);
//! ```

pub mod decay;
pub mod error;
pub mod eviction;
pub mod handle;
pub mod manager;
pub mod model;
pub mod record;

pub use error::KitchenError;
pub use eviction::{EvictionEntry, EvictionIndex};
pub use handle::KitchenHandle;
pub use manager::StorageManager;
pub use record::OrderRecord;
