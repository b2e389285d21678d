//! # Kitchen Simulation
//!
//! Runs the [`kitchen_core`] storage engine against the remote challenge
//! server and submits the resulting ledger for verification.
//!
//! - **[`config`]**: [`AppSettings`](config::AppSettings) from defaults, an
//!   optional JSON file and the environment.
//! - **[`model`]**: The problem and solution envelopes exchanged with the server.
//! - **[`clients`]**: The [`ChallengeApi`](clients::ChallengeApi) seam, its HTTP
//!   implementation and an in-memory mock.
//! - **[`lifecycle`]**: The [`Harness`](lifecycle::Harness) that drives a run,
//!   plus tracing setup.
//!
//! ## Testing
//!
//! See [`clients::mock`] for running the full harness without a server.

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
