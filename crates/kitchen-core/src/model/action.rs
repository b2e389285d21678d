//! Ledger entries produced by every kitchen state transition.

use crate::model::StorageClass;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Place,
    Move,
    Pickup,
    Discard,
}

impl ActionKind {
    pub fn name(self) -> &'static str {
        match self {
            ActionKind::Place => "place",
            ActionKind::Move => "move",
            ActionKind::Pickup => "pickup",
            ActionKind::Discard => "discard",
        }
    }
}

impl Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One entry in the action ledger.
///
/// `target` is the destination for `place` and `move`, and the vacated class
/// for `pickup` and `discard`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Microseconds since the Unix epoch.
    pub timestamp: i64,
    pub id: String,
    pub action: ActionKind,
    pub target: StorageClass,
}

impl Action {
    pub fn new(
        at: DateTime<Utc>,
        id: impl Into<String>,
        action: ActionKind,
        target: StorageClass,
    ) -> Self {
        Self {
            timestamp: at.timestamp_micros(),
            id: id.into(),
            action,
            target,
        }
    }
}
