use std::sync::LazyLock;

use regex::Regex;

static NON_SLUG_RUN: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("Slug pattern must compile."));

/// Stable identifier built from a course name and provider.
pub fn slug_of(name: Option<&str>, provider: Option<&str>) -> String {
	let joined =
		format!("{}-{}", name.unwrap_or_default(), provider.unwrap_or_default()).to_lowercase();

	NON_SLUG_RUN.replace_all(&joined, "-").trim_matches('-').to_string()
}
