//! Storage classes and their capacities.

use crate::model::Temperature;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Where an order can be held while it waits for pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageClass {
    Heater,
    Cooler,
    Shelf,
}

impl StorageClass {
    pub const ALL: [StorageClass; 3] = [
        StorageClass::Heater,
        StorageClass::Cooler,
        StorageClass::Shelf,
    ];

    /// Name reported in the action ledger.
    pub fn name(self) -> &'static str {
        match self {
            StorageClass::Heater => "heater",
            StorageClass::Cooler => "cooler",
            StorageClass::Shelf => "shelf",
        }
    }

    /// The storage class that matches a temperature exactly.
    pub fn ideal_for(temp: Temperature) -> Self {
        match temp {
            Temperature::Hot => StorageClass::Heater,
            Temperature::Cold => StorageClass::Cooler,
            Temperature::Room => StorageClass::Shelf,
        }
    }

    /// Freshness decay multiplier for an order of `temp` held in `self`.
    ///
    /// 1 for ideal placement, 2 for everything else.
    pub fn decay_rate_for(self, temp: Temperature) -> u32 {
        match (self, temp) {
            (StorageClass::Heater, Temperature::Hot)
            | (StorageClass::Cooler, Temperature::Cold)
            | (StorageClass::Shelf, Temperature::Room) => 1,
            _ => 2,
        }
    }
}

impl Display for StorageClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ideal storage class for a raw temperature string.
pub fn ideal_class_for(temp: &str) -> StorageClass {
    StorageClass::ideal_for(Temperature::parse(temp))
}

/// Decay multiplier for a raw temperature string held in `class`.
pub fn decay_rate_for(class: StorageClass, temp: &str) -> u32 {
    class.decay_rate_for(Temperature::parse(temp))
}

/// Maximum number of orders each storage class holds at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacities {
    pub heater: usize,
    pub cooler: usize,
    pub shelf: usize,
}

impl Capacities {
    pub fn new(heater: usize, cooler: usize, shelf: usize) -> Self {
        Self { heater, cooler, shelf }
    }

    pub fn of(&self, class: StorageClass) -> usize {
        match class {
            StorageClass::Heater => self.heater,
            StorageClass::Cooler => self.cooler,
            StorageClass::Shelf => self.shelf,
        }
    }

    /// Returns the first class configured with zero capacity, if any.
    pub fn first_empty(&self) -> Option<StorageClass> {
        StorageClass::ALL.into_iter().find(|class| self.of(*class) == 0)
    }
}

impl Default for Capacities {
    fn default() -> Self {
        Self::new(6, 6, 12)
    }
}
