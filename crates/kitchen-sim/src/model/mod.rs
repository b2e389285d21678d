//! Wire types exchanged with the challenge server.
//!
//! Orders and ledger actions come from [`kitchen_core::model`]; this module
//! only adds the envelopes around them.

pub mod problem;
pub mod solution;

pub use problem::*;
pub use solution::*;
