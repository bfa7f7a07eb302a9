//! The smoke-test runner: one prompt in, one POST out, one report back.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::consts::TEST_ENDPOINT;

const BANNER_WIDTH: usize = 50;

/// Issues smoke-test requests against a Claude Code endpoint.
///
/// The client is reused across calls as a connection pool; nothing else
/// is carried over from one call to the next.
pub struct Runner {
    client: reqwest::Client,
    base_url: String,
}

impl Runner {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Send one prompt to the endpoint, print the outcome, and return
    /// the parsed report for further inspection.
    ///
    /// Transport failures and non-JSON bodies are not handled here;
    /// they propagate to the caller. A response with `success: false`
    /// is a normal (failed) test result, not an error.
    pub async fn run(&self, prompt: &str) -> Result<TestReport> {
        println!("{}", test_banner(prompt));

        let url = format!("{}{}", self.base_url, TEST_ENDPOINT);
        let resp = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(&TestRequest { prompt })
            .send()
            .await?;

        let status = resp.status().as_u16();
        let text = resp.text().await?;
        let response: TestResponse = serde_json::from_str(&text).map_err(|e| {
            anyhow::anyhow!("endpoint returned a non-JSON body: {}\nraw: {}", e, text)
        })?;

        let report = TestReport {
            prompt: prompt.to_string(),
            status,
            response,
        };
        println!("{}", report.summary());

        Ok(report)
    }
}

/// The `Testing: <prompt>` banner printed before the request goes out.
pub fn test_banner(prompt: &str) -> String {
    let bar = "=".repeat(BANNER_WIDTH);
    format!("\n{bar}\nTesting: {prompt}\n{bar}")
}

/// Everything observed for a single test: the prompt sent, the HTTP
/// status, and the parsed body.
#[derive(Debug, Clone)]
pub struct TestReport {
    pub prompt: String,
    pub status: u16,
    pub response: TestResponse,
}

impl TestReport {
    /// Whether the endpoint reported a successful execution.
    pub fn passed(&self) -> bool {
        self.response.success
    }

    /// The status/success/time/output block printed after each test.
    pub fn summary(&self) -> String {
        let time = match self.response.execution_time {
            Some(ms) => ms.to_string(),
            None => "none".to_string(),
        };
        let output = self
            .response
            .output
            .as_deref()
            .or(self.response.error.as_deref())
            .unwrap_or("");

        format!(
            "Status: {}\nSuccess: {}\nExecution time: {}ms\nOutput:\n{}",
            self.status, self.response.success, time, output,
        )
    }
}

// --- wire types ---

#[derive(Serialize)]
struct TestRequest<'a> {
    prompt: &'a str,
}

/// Body returned by the endpoint. Every field except `success` may be
/// absent; printing falls back from `output` to `error`.
#[derive(Debug, Clone, Deserialize)]
pub struct TestResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(rename = "executionTime")]
    pub execution_time: Option<f64>,
    pub output: Option<String>,
    pub error: Option<String>,
}
