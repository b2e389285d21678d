//! # Run Lifecycle
//!
//! Wiring for a simulation run.
//!
//! - [`Harness`] owns a [`ChallengeApi`](crate::clients::ChallengeApi) and the
//!   [`AppSettings`](crate::config::AppSettings), and turns one problem into one
//!   submitted ledger.
//! - [`setup_tracing`] installs the log subscriber the binary runs with.
//! - [`HarnessError`] collects every failure a run can end with.
//!
//! Couriers are plain tokio tasks sharing a cloned
//! [`KitchenHandle`](kitchen_core::KitchenHandle). The harness waits for all of
//! them before it submits, so the ledger is complete when it leaves.

pub mod error;
pub mod harness;
pub mod tracing;

pub use self::error::HarnessError;
pub use self::harness::{Harness, RunReport};
pub use self::tracing::setup_tracing;
