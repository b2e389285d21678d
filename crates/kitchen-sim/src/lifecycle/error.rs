use crate::clients::ClientError;
use crate::config::ConfigError;
use kitchen_core::KitchenError;
use thiserror::Error;

/// Anything that stops a simulation run.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Kitchen(#[from] KitchenError),

    /// A courier task panicked or was cancelled before it could pick up.
    #[error("Pickup task failed: {0}")]
    PickupTask(String),
}
