use kitchen_sim::clients::HttpChallengeClient;
use kitchen_sim::config::AppSettings;
use kitchen_sim::lifecycle::{setup_tracing, Harness};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let mut settings = AppSettings::load(None).map_err(|e| {
        error!(error = %e, "Failed to load settings");
        e.to_string()
    })?;

    // First positional argument overrides the auth token.
    if let Some(auth) = std::env::args().nth(1) {
        settings.challenge.auth = auth;
    }

    let client = HttpChallengeClient::new(&settings.challenge.endpoint, &settings.challenge.auth)
        .map_err(|e| {
            error!(error = %e, "Failed to create challenge client");
            e.to_string()
        })?;

    info!(endpoint = %settings.challenge.endpoint, "Starting simulation run");

    match Harness::new(client, settings).run().await {
        Ok(report) => {
            info!(
                test_id = %report.test_id,
                actions = report.actions.len(),
                result = %report.result,
                "Simulation completed"
            );
            println!("{}", report.result);
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Simulation failed");
            Err(e.to_string())
        }
    }
}
