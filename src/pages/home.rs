//! Landmark path finder page: selection controls, request lifecycle and
//! the status display, with the canvas map underneath.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, error, info};

use crate::api::{PathClient, PathError, PathOutcome};
use crate::components::landmark_map::{LANDMARKS, LandmarkMapCanvas};

const LOADING_TEXT: &str = "Finding path...";
const NO_PATH_TEXT: &str = "No path found between these landmarks.";
const REQUEST_FAILED_TEXT: &str =
	"An error occurred while finding the path. Please check landmark names.";
const IDLE_TEXT: &str = "Select landmarks to find a path.";

/// Display state of the path request lifecycle. Exactly one of these is
/// visible at any time.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum FetchState {
	/// No request issued yet.
	#[default]
	Idle,
	/// A request is outstanding; any previous path is already cleared.
	Loading,
	/// The service returned a non-empty walk from start to goal.
	Resolved(Vec<String>),
	/// The service answered that no path connects the pair.
	NotFound,
	/// Transport or protocol failure, with the user-facing message.
	Failed(String),
}

/// Request lifecycle state machine with stale-response protection.
///
/// Every request gets a sequence number at issue time and a response is
/// applied only if it carries the latest issued number, so when selections
/// change while a request is outstanding the latest-issued request always
/// wins regardless of arrival order.
#[derive(Clone, Debug, Default)]
pub struct FetchMachine {
	state: FetchState,
	latest: u64,
}

impl FetchMachine {
	pub fn new() -> Self {
		Self::default()
	}

	/// Issue a new request: enters `Loading`, clearing any displayed path,
	/// and returns the sequence number to settle with.
	pub fn begin(&mut self) -> u64 {
		self.latest += 1;
		self.state = FetchState::Loading;
		self.latest
	}

	/// Apply a settled request. Returns false when the response is stale,
	/// in which case the state is untouched.
	pub fn settle(&mut self, seq: u64, result: Result<PathOutcome, PathError>) -> bool {
		if seq != self.latest {
			debug!(
				"dropping stale response for request {seq} (latest is {})",
				self.latest
			);
			return false;
		}
		self.state = match result {
			Ok(PathOutcome::Found(path)) => FetchState::Resolved(path),
			Ok(PathOutcome::NotFound) => FetchState::NotFound,
			Err(err) => {
				error!("path request {seq} failed: {err}");
				FetchState::Failed(REQUEST_FAILED_TEXT.to_string())
			}
		};
		true
	}

	pub fn state(&self) -> &FetchState {
		&self.state
	}

	/// The currently displayed path; empty in every state but `Resolved`.
	pub fn path(&self) -> &[String] {
		match &self.state {
			FetchState::Resolved(path) => path,
			_ => &[],
		}
	}
}

fn landmark_select(signal: RwSignal<String>) -> impl IntoView {
	view! {
		<select
			class="dropdown"
			prop:value=move || signal.get()
			on:change=move |ev| signal.set(event_target_value(&ev))
		>
			{LANDMARKS
				.iter()
				.map(|&l| {
					view! {
						<option value=l selected=move || signal.get() == l>
							{l}
						</option>
					}
				})
				.collect_view()}
		</select>
	}
}

/// Landmark path finder page.
#[component]
pub fn Home() -> impl IntoView {
	let start = RwSignal::new("Museum".to_string());
	let goal = RwSignal::new("Mall".to_string());
	let machine = RwSignal::new(FetchMachine::new());
	let client = PathClient::default();

	// Selection change is the sole fetch trigger; the first run covers the
	// default selection at startup.
	Effect::new(move |_| {
		let (s, g) = (start.get(), goal.get());
		let seq = machine.try_update(|m| m.begin()).unwrap_or(0);
		info!("finding path {s} -> {g} (request {seq})");
		let client = client.clone();
		spawn_local(async move {
			let result = client.find_path(&s, &g).await;
			machine.update(|m| {
				m.settle(seq, result);
			});
		});
	});

	let path = Signal::derive(move || machine.with(|m| m.path().to_vec()));

	let status = move || {
		machine.with(|m| match m.state() {
			FetchState::Idle => view! { <p class="status-text">{IDLE_TEXT}</p> }.into_any(),
			FetchState::Loading => {
				view! { <p class="status-text loading-text">{LOADING_TEXT}</p> }.into_any()
			}
			FetchState::NotFound => {
				view! { <p class="status-text error-text">{NO_PATH_TEXT}</p> }.into_any()
			}
			FetchState::Failed(message) => {
				view! { <p class="status-text error-text">{message.clone()}</p> }.into_any()
			}
			FetchState::Resolved(path) => view! {
				<h2 class="path-title">"📍 Shortest Path:"</h2>
				<p class="path-text">{path.join(" → ")}</p>
			}
			.into_any(),
		})
	};

	view! {
		<div class="app-container">
			<h1 class="app-title">"🗺️ Tourist Landmark Path Finder"</h1>

			<div class="controls-container">
				<div class="dropdown-group">
					<label class="label">"Start:"</label>
					{landmark_select(start)}
				</div>

				<div class="dropdown-group">
					<label class="label">"Destination:"</label>
					{landmark_select(goal)}
				</div>
			</div>

			<div class="path-display">{status}</div>

			<div class="graph-container">
				<LandmarkMapCanvas path=path />
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn found(ids: &[&str]) -> Result<PathOutcome, PathError> {
		Ok(PathOutcome::Found(
			ids.iter().map(|s| s.to_string()).collect(),
		))
	}

	fn transport_error() -> PathError {
		// A builder error stands in for a network failure.
		reqwest::Client::new()
			.post("not a url")
			.build()
			.unwrap_err()
			.into()
	}

	#[test]
	fn begin_enters_loading_and_clears_the_path() {
		let mut m = FetchMachine::new();
		let seq = m.begin();
		assert!(m.settle(seq, found(&["Museum", "Mall"])));
		assert_eq!(m.path(), ["Museum".to_string(), "Mall".to_string()]);

		m.begin();
		assert_eq!(*m.state(), FetchState::Loading);
		assert!(m.path().is_empty());
	}

	#[test]
	fn resolved_path_joins_with_arrows() {
		let mut m = FetchMachine::new();
		let seq = m.begin();
		assert!(m.settle(seq, found(&["Museum", "Library", "Theater", "Mall"])));
		assert_eq!(
			m.path().join(" → "),
			"Museum → Library → Theater → Mall"
		);
	}

	#[test]
	fn empty_service_answer_becomes_not_found() {
		let mut m = FetchMachine::new();
		let seq = m.begin();
		assert!(m.settle(seq, Ok(PathOutcome::NotFound)));
		assert_eq!(*m.state(), FetchState::NotFound);
		assert!(m.path().is_empty());
	}

	#[test]
	fn transport_failure_shows_the_generic_message() {
		let mut m = FetchMachine::new();
		let seq = m.begin();
		assert!(m.settle(seq, Err(transport_error())));
		assert_eq!(
			*m.state(),
			FetchState::Failed(REQUEST_FAILED_TEXT.to_string())
		);
		assert!(m.path().is_empty());
	}

	#[test]
	fn latest_issued_request_wins_the_race() {
		let mut m = FetchMachine::new();
		let seq_a = m.begin();
		let seq_b = m.begin();

		// B resolves first, then A's stale answer arrives.
		assert!(m.settle(seq_b, found(&["Park", "Cafe", "Station"])));
		assert!(!m.settle(seq_a, found(&["Museum", "Library", "Theater", "Mall"])));

		assert_eq!(
			*m.state(),
			FetchState::Resolved(vec![
				"Park".to_string(),
				"Cafe".to_string(),
				"Station".to_string(),
			])
		);
	}

	#[test]
	fn stale_failure_does_not_disturb_a_fresh_result() {
		let mut m = FetchMachine::new();
		let seq_a = m.begin();
		let seq_b = m.begin();

		assert!(m.settle(seq_b, found(&["Museum"])));
		assert!(!m.settle(seq_a, Err(transport_error())));
		assert_eq!(
			*m.state(),
			FetchState::Resolved(vec!["Museum".to_string()])
		);
	}

	#[test]
	fn single_node_path_is_a_valid_resolution() {
		let mut m = FetchMachine::new();
		let seq = m.begin();
		assert!(m.settle(seq, found(&["Museum"])));
		assert_eq!(m.path(), ["Museum".to_string()]);
		assert_eq!(m.path().join(" → "), "Museum");
	}
}
