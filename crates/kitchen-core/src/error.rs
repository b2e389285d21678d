//! # Kitchen Errors
//!
//! Errors surfaced by the storage manager. Unknown ids on pickup and
//! malformed temperatures are not errors and never show up here.

use crate::model::StorageClass;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KitchenError {
    /// A storage class was configured with no room at all.
    #[error("Capacity for {class} must be at least 1")]
    InvalidCapacity { class: StorageClass },

    /// The order id is already resident in the kitchen.
    #[error("Order already resident: {order_id}")]
    DuplicateOrder { order_id: String },

    /// Every placement fallback ran and the order still has nowhere to go.
    /// Indicates broken capacity accounting.
    #[error("Placement exhausted for order {order_id}: shelf still full after freeing a slot")]
    PlacementExhausted { order_id: String },
}
