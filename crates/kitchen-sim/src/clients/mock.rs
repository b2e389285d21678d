//! # Mock Challenge Client
//!
//! [`MockChallengeClient`] implements [`ChallengeApi`] entirely in memory. It
//! hands out one canned [`Problem`] and records everything submitted to it, so a
//! harness run can be asserted on without a server.
//!
//! ```rust
//! use kitchen_core::model::Order;
//! use kitchen_sim::clients::mock::MockChallengeClient;
//! use kitchen_sim::clients::ChallengeApi;
//! use kitchen_sim::model::{Options, Problem};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockChallengeClient::new(Problem::new(
//!         "t-1",
//!         vec![Order::new("a", "Soup", "hot", 5, 30)],
//!     ))
//!     .with_result("pass");
//!
//!     let problem = mock.new_problem("", 42).await.unwrap();
//!     let options = Options { rate: 0, min: 0, max: 0 };
//!     let verdict = mock.solve(&problem.test_id, &options, &[]).await.unwrap();
//!
//!     assert_eq!(verdict, "pass");
//!     assert_eq!(mock.problem_requests().await, vec![(String::new(), 42)]);
//! }
//! ```

use crate::clients::{ChallengeApi, ClientError};
use crate::model::{Options, Problem};
use async_trait::async_trait;
use kitchen_core::model::Action;
use reqwest::StatusCode;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A solution as the mock received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub test_id: String,
    pub options: Options,
    pub actions: Vec<Action>,
}

#[derive(Default)]
struct Recorded {
    problem_requests: Vec<(String, i64)>,
    submissions: Vec<Submission>,
}

/// In-memory [`ChallengeApi`]. Clones share their recordings.
#[derive(Clone)]
pub struct MockChallengeClient {
    problem: Problem,
    result: String,
    solve_status: Option<StatusCode>,
    recorded: Arc<Mutex<Recorded>>,
}

impl MockChallengeClient {
    pub fn new(problem: Problem) -> Self {
        Self {
            problem,
            result: "ok".to_string(),
            solve_status: None,
            recorded: Arc::default(),
        }
    }

    /// Verdict returned from every `solve`.
    pub fn with_result(mut self, result: impl Into<String>) -> Self {
        self.result = result.into();
        self
    }

    /// Makes every `solve` fail as if the server answered `status`.
    pub fn fail_solve_with(mut self, status: StatusCode) -> Self {
        self.solve_status = Some(status);
        self
    }

    /// `(name, seed)` of every `new_problem` call, in order.
    pub async fn problem_requests(&self) -> Vec<(String, i64)> {
        self.recorded.lock().await.problem_requests.clone()
    }

    pub async fn submissions(&self) -> Vec<Submission> {
        self.recorded.lock().await.submissions.clone()
    }
}

#[async_trait]
impl ChallengeApi for MockChallengeClient {
    async fn new_problem(&self, name: &str, seed: i64) -> Result<Problem, ClientError> {
        self.recorded
            .lock()
            .await
            .problem_requests
            .push((name.to_string(), seed));
        Ok(self.problem.clone())
    }

    async fn solve(
        &self,
        test_id: &str,
        options: &Options,
        actions: &[Action],
    ) -> Result<String, ClientError> {
        self.recorded.lock().await.submissions.push(Submission {
            test_id: test_id.to_string(),
            options: *options,
            actions: actions.to_vec(),
        });
        match self.solve_status {
            Some(status) => Err(ClientError::Status {
                url: "mock://solve".to_string(),
                status,
            }),
            None => Ok(self.result.clone()),
        }
    }
}
