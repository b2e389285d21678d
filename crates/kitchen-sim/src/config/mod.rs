//! # Settings
//!
//! Typed settings for the simulation, merged from three layers (later wins):
//!
//! 1. Built-in defaults.
//! 2. An optional JSON file (`appsettings.json` unless told otherwise).
//! 3. Environment variables.
//!
//! | Variable             | Field                            | Default                          |
//! |----------------------|----------------------------------|----------------------------------|
//! | `CHALLENGE_ENDPOINT` | `challenge.endpoint`             | `https://api.cloudkitchens.com`  |
//! | `CHALLENGE_AUTH`     | `challenge.auth`                 | empty                            |
//! | `CHALLENGE_NAME`     | `challenge.name`                 | empty                            |
//! | `CHALLENGE_SEED`     | `challenge.seed` (0 = random)    | `0`                              |
//! | `HARNESS_RATE_MS`    | `harness.rate_ms`                | `500`                            |
//! | `HARNESS_MIN_SEC`    | `harness.min_pickup_sec`         | `4`                              |
//! | `HARNESS_MAX_SEC`    | `harness.max_pickup_sec`         | `8`                              |
//! | `STORAGE_HEATER_CAP` | `storage.heater_capacity`        | `6`                              |
//! | `STORAGE_COOLER_CAP` | `storage.cooler_capacity`        | `6`                              |
//! | `STORAGE_SHELF_CAP`  | `storage.shelf_capacity`         | `12`                             |
//!
//! Empty environment values are ignored.

pub mod error;

pub use error::ConfigError;

use kitchen_core::model::Capacities;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

pub const DEFAULT_SETTINGS_FILE: &str = "appsettings.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    #[serde(alias = "Challenge")]
    pub challenge: ChallengeSettings,
    #[serde(alias = "Harness")]
    pub harness: HarnessSettings,
    #[serde(alias = "Storage")]
    pub storage: StorageSettings,
}

/// Where to fetch problems and who we are.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChallengeSettings {
    #[serde(alias = "Endpoint")]
    pub endpoint: String,
    #[serde(alias = "Auth")]
    pub auth: String,
    #[serde(alias = "Name")]
    pub name: String,
    /// Problem seed; 0 asks for a random one.
    #[serde(alias = "Seed")]
    pub seed: i64,
}

impl Default for ChallengeSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.cloudkitchens.com".to_string(),
            auth: String::new(),
            name: String::new(),
            seed: 0,
        }
    }
}

/// Order pacing and the courier pickup window.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HarnessSettings {
    /// Delay between consecutive order placements.
    #[serde(alias = "RateMs", alias = "rateMs")]
    pub rate_ms: u64,
    #[serde(alias = "MinPickupSec", alias = "minPickupSec")]
    pub min_pickup_sec: u64,
    #[serde(alias = "MaxPickupSec", alias = "maxPickupSec")]
    pub max_pickup_sec: u64,
}

impl Default for HarnessSettings {
    fn default() -> Self {
        Self {
            rate_ms: 500,
            min_pickup_sec: 4,
            max_pickup_sec: 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    #[serde(alias = "HeaterCapacity", alias = "heaterCapacity")]
    pub heater_capacity: usize,
    #[serde(alias = "CoolerCapacity", alias = "coolerCapacity")]
    pub cooler_capacity: usize,
    #[serde(alias = "ShelfCapacity", alias = "shelfCapacity")]
    pub shelf_capacity: usize,
}

impl Default for StorageSettings {
    fn default() -> Self {
        let caps = Capacities::default();
        Self {
            heater_capacity: caps.heater,
            cooler_capacity: caps.cooler,
            shelf_capacity: caps.shelf,
        }
    }
}

impl StorageSettings {
    pub fn capacities(&self) -> Capacities {
        Capacities::new(self.heater_capacity, self.cooler_capacity, self.shelf_capacity)
    }
}

impl AppSettings {
    /// Loads settings from `path` (or `appsettings.json`) and the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Like [`AppSettings::load`], reading overrides through `env` instead of
    /// the process environment.
    pub fn load_with<F>(path: Option<&Path>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_SETTINGS_FILE));
        let mut settings = if path.exists() {
            debug!(path = %path.display(), "Reading settings file");
            let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            debug!(path = %path.display(), "No settings file, using defaults");
            Self::default()
        };

        settings.apply_overrides(&env)?;
        settings.validate()?;
        Ok(settings)
    }

    fn apply_overrides<F>(&mut self, env: &F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let challenge = &mut self.challenge;
        override_string(env, "CHALLENGE_ENDPOINT", &mut challenge.endpoint);
        override_string(env, "CHALLENGE_AUTH", &mut challenge.auth);
        override_string(env, "CHALLENGE_NAME", &mut challenge.name);
        override_number(env, "CHALLENGE_SEED", &mut challenge.seed)?;

        let harness = &mut self.harness;
        override_number(env, "HARNESS_RATE_MS", &mut harness.rate_ms)?;
        override_number(env, "HARNESS_MIN_SEC", &mut harness.min_pickup_sec)?;
        override_number(env, "HARNESS_MAX_SEC", &mut harness.max_pickup_sec)?;

        let storage = &mut self.storage;
        override_number(env, "STORAGE_HEATER_CAP", &mut storage.heater_capacity)?;
        override_number(env, "STORAGE_COOLER_CAP", &mut storage.cooler_capacity)?;
        override_number(env, "STORAGE_SHELF_CAP", &mut storage.shelf_capacity)?;
        Ok(())
    }

    /// Rejects settings the kitchen or harness cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(class) = self.storage.capacities().first_empty() {
            return Err(ConfigError::Invalid(format!("{class} capacity must be at least 1")));
        }
        let harness = &self.harness;
        if harness.min_pickup_sec > harness.max_pickup_sec {
            return Err(ConfigError::Invalid(format!(
                "min pickup ({}s) exceeds max pickup ({}s)",
                harness.min_pickup_sec, harness.max_pickup_sec
            )));
        }
        Ok(())
    }
}

fn lookup<F>(env: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    env(key).filter(|value| !value.trim().is_empty())
}

fn override_string<F>(env: &F, key: &str, target: &mut String)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(env, key) {
        *target = value;
    }
}

fn override_number<F, T>(env: &F, key: &str, target: &mut T) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(value) = lookup(env, key) {
        *target = value.trim().parse().map_err(|_| ConfigError::InvalidVariable {
            key: key.to_string(),
            value,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn write_settings(name: &str, body: &str) -> PathBuf {
        let file = format!("kitchen-sim-{}-{name}.json", std::process::id());
        let path = std::env::temp_dir().join(file);
        std::fs::write(&path, body).unwrap();
        path
    }

    fn missing_file() -> PathBuf {
        std::env::temp_dir().join("kitchen-sim-settings-that-do-not-exist.json")
    }

    #[test]
    fn test_defaults_without_file_or_env() {
        let settings = AppSettings::load_with(Some(missing_file().as_path()), no_env).unwrap();
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.harness.rate_ms, 500);
        assert_eq!(settings.storage.capacities(), Capacities::new(6, 6, 12));
        assert_eq!(settings.challenge.endpoint, "https://api.cloudkitchens.com");
    }

    #[test]
    fn test_file_values_accept_pascal_case_and_keep_defaults() {
        let path = write_settings(
            "pascal",
            r#"{
                "Challenge": { "Auth": "token", "Seed": 42 },
                "Storage": { "ShelfCapacity": 3 }
            }"#,
        );
        let settings = AppSettings::load_with(Some(path.as_path()), no_env).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.challenge.auth, "token");
        assert_eq!(settings.challenge.seed, 42);
        assert_eq!(settings.storage.capacities(), Capacities::new(6, 6, 3));
        assert_eq!(settings.harness, HarnessSettings::default());
    }

    #[test]
    fn test_env_overrides_file() {
        let path = write_settings(
            "env",
            r#"{ "harness": { "rate_ms": 100, "min_pickup_sec": 1, "max_pickup_sec": 2 } }"#,
        );
        let env = env_from(&[
            ("HARNESS_RATE_MS", "250"),
            ("HARNESS_MAX_SEC", "9"),
            ("CHALLENGE_NAME", "  "),
            ("STORAGE_HEATER_CAP", "2"),
        ]);
        let settings = AppSettings::load_with(Some(path.as_path()), env).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.harness.rate_ms, 250);
        assert_eq!(settings.harness.min_pickup_sec, 1);
        assert_eq!(settings.harness.max_pickup_sec, 9);
        // Blank values do not override.
        assert_eq!(settings.challenge.name, "");
        assert_eq!(settings.storage.heater_capacity, 2);
    }

    #[test]
    fn test_unparsable_number_is_an_error() {
        let env = env_from(&[("STORAGE_SHELF_CAP", "twelve")]);
        let err = AppSettings::load_with(Some(missing_file().as_path()), env).unwrap_err();
        match err {
            ConfigError::InvalidVariable { key, value } => {
                assert_eq!(key, "STORAGE_SHELF_CAP");
                assert_eq!(value, "twelve");
            }
            other => panic!("Expected InvalidVariable, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = write_settings("broken", "{ not json");
        let err = AppSettings::load_with(Some(path.as_path()), no_env).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_validation_rejects_inconsistent_values() {
        let env = env_from(&[("STORAGE_COOLER_CAP", "0")]);
        let err = AppSettings::load_with(Some(missing_file().as_path()), env).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("cooler")));

        let env = env_from(&[("HARNESS_MIN_SEC", "10")]);
        let err = AppSettings::load_with(Some(missing_file().as_path()), env).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
