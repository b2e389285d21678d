//! The body submitted to the verifier.

use crate::config::HarnessSettings;
use kitchen_core::model::Action;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Harness parameters the run used, all in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Inverse order rate.
    pub rate: u64,
    /// Minimum pickup delay.
    pub min: u64,
    /// Maximum pickup delay.
    pub max: u64,
}

impl Options {
    pub fn new(rate: Duration, min: Duration, max: Duration) -> Self {
        Self {
            rate: micros(rate),
            min: micros(min),
            max: micros(max),
        }
    }
}

impl From<&HarnessSettings> for Options {
    fn from(settings: &HarnessSettings) -> Self {
        Self::new(
            Duration::from_millis(settings.rate_ms),
            Duration::from_secs(settings.min_pickup_sec),
            Duration::from_secs(settings.max_pickup_sec),
        )
    }
}

fn micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

#[derive(Debug, Serialize)]
pub struct Solution<'a> {
    pub options: &'a Options,
    pub actions: &'a [Action],
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use kitchen_core::model::{ActionKind, StorageClass};

    #[test]
    fn test_options_from_default_harness_settings() {
        let options = Options::from(&HarnessSettings::default());
        assert_eq!(options.rate, 500_000);
        assert_eq!(options.min, 4_000_000);
        assert_eq!(options.max, 8_000_000);
    }

    #[test]
    fn test_solution_json_shape() {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let options = Options::new(
            Duration::from_millis(250),
            Duration::from_secs(1),
            Duration::from_secs(2),
        );
        let actions = [
            Action::new(at, "a", ActionKind::Place, StorageClass::Shelf),
            Action::new(at, "a", ActionKind::Pickup, StorageClass::Shelf),
        ];

        let json = serde_json::to_value(Solution {
            options: &options,
            actions: &actions,
        })
        .unwrap();

        assert_eq!(
            json["options"],
            serde_json::json!({ "rate": 250_000, "min": 1_000_000, "max": 2_000_000 })
        );
        assert_eq!(json["actions"][1]["action"], "pickup");
        assert_eq!(json["actions"][1]["target"], "shelf");
        assert_eq!(json["actions"][0]["timestamp"], at.timestamp_micros());
    }
}
