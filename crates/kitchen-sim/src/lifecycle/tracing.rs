//! # Tracing Setup
//!
//! Every ledger entry is logged by `kitchen_core` as it happens, so the
//! subscriber installed here is the live view of a run.
//!
//! ```bash
//! RUST_LOG=info kitchen-sim <auth>                    # ledger entries and run summary
//! RUST_LOG=debug kitchen-sim <auth>                   # plus placement fallback decisions
//! RUST_LOG=kitchen_core=debug,info kitchen-sim <auth> # debug for the storage engine only
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global compact `fmt` subscriber, filtered by `RUST_LOG`.
///
/// Call once, at the top of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
