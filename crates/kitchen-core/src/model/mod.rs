//! Pure data structures shared by the kitchen and its collaborators.

pub mod action;
pub mod order;
pub mod storage;

pub use action::*;
pub use order::*;
pub use storage::*;
