use std::sync::LazyLock;

use regex::Regex;

static MILES_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"\d+(?:\.\d+)?|\.\d+").expect("Distance pattern must compile.")
});

/// Reads the first number out of free text such as `"12.5 miles"`.
pub fn parse_miles(raw: &str) -> Option<f64> {
	let found = MILES_PATTERN.find(raw)?;
	let miles = found.as_str().parse::<f64>().ok()?;

	miles.is_finite().then_some(miles)
}

/// Sort and filter key for a record distance; absent or unreadable distances rank last.
pub fn miles_or_max(raw: Option<&str>) -> f64 {
	raw.and_then(parse_miles).unwrap_or(f64::INFINITY)
}
