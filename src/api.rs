//! Client for the remote path-finding service.
//!
//! The service owns the actual shortest-path computation; this module only
//! speaks its wire format: a JSON POST of `{ "start", "goal" }` answered by
//! a JSON object whose `path` field is an ordered array of landmark names,
//! possibly empty or absent when no path connects the pair.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default service endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/find-path";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Endpoint and timeout for the path-finding service.
#[derive(Clone, Debug)]
pub struct ClientConfig {
	/// Full URL of the find-path endpoint.
	pub endpoint: String,
	/// Upper bound on each request, including the response body.
	pub timeout: Duration,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			endpoint: DEFAULT_ENDPOINT.to_string(),
			timeout: DEFAULT_TIMEOUT,
		}
	}
}

#[derive(Debug, Serialize)]
struct PathRequest<'a> {
	start: &'a str,
	goal: &'a str,
}

#[derive(Debug, Deserialize)]
struct PathResponse {
	#[serde(default)]
	path: Option<Vec<String>>,
}

/// A settled answer from the service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathOutcome {
	/// Ordered walk from start to goal, inclusive, as the service returned it.
	Found(Vec<String>),
	/// The service answered but no path connects the pair.
	NotFound,
}

impl From<PathResponse> for PathOutcome {
	fn from(body: PathResponse) -> Self {
		match body.path {
			Some(path) if !path.is_empty() => PathOutcome::Found(path),
			_ => PathOutcome::NotFound,
		}
	}
}

/// Transport or protocol failure. Callers surface these as one generic
/// user-facing message; the detail is only logged.
#[derive(Debug, Error)]
pub enum PathError {
	/// Network error, non-success status or malformed response body.
	#[error("path service request failed: {0}")]
	Request(#[from] reqwest::Error),
}

/// Thin client over the path-finding service. Cheap to clone.
#[derive(Clone, Debug, Default)]
pub struct PathClient {
	http: reqwest::Client,
	config: ClientConfig,
}

impl PathClient {
	/// Build a client for the given endpoint and timeout.
	pub fn new(config: ClientConfig) -> Self {
		Self {
			http: reqwest::Client::new(),
			config,
		}
	}

	/// Ask the service for a path. Issues exactly one request; no retries,
	/// no caching. Start and goal are forwarded verbatim, so unknown names
	/// surface as whatever failure the service produces.
	pub async fn find_path(&self, start: &str, goal: &str) -> Result<PathOutcome, PathError> {
		let response = self
			.http
			.post(&self.config.endpoint)
			.timeout(self.config.timeout)
			.json(&PathRequest { start, goal })
			.send()
			.await?
			.error_for_status()?;
		let body: PathResponse = response.json().await?;
		Ok(body.into())
	}
}
