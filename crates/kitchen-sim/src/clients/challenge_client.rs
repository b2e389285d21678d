//! # Challenge Client
//!
//! Fetches test problems and submits the action ledger as a solution.

use crate::clients::ClientError;
use crate::model::{Options, Problem, Solution};
use async_trait::async_trait;
use kitchen_core::model::{Action, Order};
use rand::Rng;
use tracing::{debug, info, instrument};

/// Header carrying the test id on both the problem response and the solve request.
pub const TEST_ID_HEADER: &str = "x-test-id";

/// Operations the harness needs from the challenge server.
#[async_trait]
pub trait ChallengeApi: Send + Sync {
    /// Fetches a new problem. A `seed` of 0 asks for a random one.
    async fn new_problem(&self, name: &str, seed: i64) -> Result<Problem, ClientError>;

    /// Submits a ledger and returns the verifier's verdict verbatim.
    async fn solve(
        &self,
        test_id: &str,
        options: &Options,
        actions: &[Action],
    ) -> Result<String, ClientError>;
}

/// [`ChallengeApi`] over HTTP.
#[derive(Clone)]
pub struct HttpChallengeClient {
    endpoint: String,
    auth: String,
    http: reqwest::Client,
}

impl HttpChallengeClient {
    pub fn new(endpoint: impl Into<String>, auth: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(ClientError::Build)?;
        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            auth: auth.into(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/interview/challenge/{path}", self.endpoint)
    }
}

#[async_trait]
impl ChallengeApi for HttpChallengeClient {
    #[instrument(skip(self))]
    async fn new_problem(&self, name: &str, seed: i64) -> Result<Problem, ClientError> {
        let seed = if seed == 0 {
            rand::thread_rng().gen_range(1..i64::MAX)
        } else {
            seed
        };
        let url = self.url("new");
        debug!(%url, seed, "Requesting problem");

        let seed = seed.to_string();
        let response = self
            .http
            .get(&url)
            .query(&[("auth", self.auth.as_str()), ("name", name), ("seed", seed.as_str())])
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { url, status });
        }

        let test_id = response
            .headers()
            .get(TEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .ok_or_else(|| ClientError::MissingTestId {
                url: url.clone(),
                header: TEST_ID_HEADER,
            })?;

        let orders: Vec<Order> = response
            .json()
            .await
            .map_err(|source| ClientError::Decode { url, source })?;

        info!(%test_id, %seed, orders = orders.len(), "Fetched new test problem");
        Ok(Problem::new(test_id, orders))
    }

    #[instrument(skip(self, options, actions), fields(actions = actions.len()))]
    async fn solve(
        &self,
        test_id: &str,
        options: &Options,
        actions: &[Action],
    ) -> Result<String, ClientError> {
        let url = self.url("solve");
        debug!(%url, ?options, "Submitting solution");

        let response = self
            .http
            .post(&url)
            .query(&[("auth", self.auth.as_str())])
            .header(TEST_ID_HEADER, test_id)
            .json(&Solution { options, actions })
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { url, status });
        }

        response
            .text()
            .await
            .map_err(|source| ClientError::Decode { url, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_ignore_trailing_slash() {
        let client = HttpChallengeClient::new("https://example.test/", "secret").unwrap();
        assert_eq!(client.url("new"), "https://example.test/interview/challenge/new");
        assert_eq!(client.url("solve"), "https://example.test/interview/challenge/solve");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_transport_error() {
        // Port 9 (discard) on localhost is closed in test environments.
        let client = HttpChallengeClient::new("http://127.0.0.1:9", "secret").unwrap();
        let err = client.new_problem("", 7).await.unwrap_err();
        match err {
            ClientError::Transport { url, .. } => {
                assert_eq!(url, "http://127.0.0.1:9/interview/challenge/new");
                assert!(!url.contains("secret"));
            }
            other => panic!("Expected Transport error, got {other:?}"),
        }
    }
}
