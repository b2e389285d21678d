//! Clients for the remote challenge server.
//!
//! [`ChallengeApi`] is the seam the harness depends on. [`HttpChallengeClient`]
//! talks to the real server; [`mock::MockChallengeClient`] serves canned
//! problems in tests.

pub mod challenge_client;
pub mod error;
pub mod mock;

pub use challenge_client::*;
pub use error::*;
