use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub catalogue: Catalogue,
	#[serde(default)]
	pub search: Search,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Catalogue {
	/// JSON array of course records, re-read on every request.
	pub path: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Search {
	/// One of "distance" or "relevance". Used when a request carries no recognised sort.
	pub default_sort: String,
	/// Overviews longer than this many characters are split into a lead and a continuation.
	pub overview_limit_chars: u32,
}
impl Default for Search {
	fn default() -> Self {
		Self { default_sort: "distance".to_string(), overview_limit_chars: 450 }
	}
}

fn default_log_level() -> String {
	"info".to_string()
}
