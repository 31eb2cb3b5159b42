use serde::{Deserialize, Serialize};

/// Sentinel posted by checkbox groups when every box was cleared.
pub const UNCHECKED: &str = "unchecked";

const TYPE_ALIASES: &[(&str, &str)] = &[
	("a levels", "a level"),
	("t levels", "t level"),
	("btecs", "btec"),
	("degrees", "degree"),
	("diplomas", "diploma"),
	("apprenticeships", "apprenticeship"),
];
const DELIVERY_METHOD_ALIASES: &[(&str, &str)] = &[
	("online", "online"),
	("classroom based", "classroom based"),
	("work based", "work based"),
	("hybrid", "hybrid"),
];
const COURSE_HOURS_ALIASES: &[(&str, &str)] = &[
	("full time", "full time"),
	("ft", "full time"),
	("part time", "part time"),
	("pt", "part time"),
	("flexible", "flexible"),
	("flexi", "flexible"),
	("flex", "flexible"),
];
const STUDY_TIME_ALIASES: &[(&str, &str)] =
	&[("daytime", "daytime"), ("evening", "evening"), ("weekend", "weekend")];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetKind {
	Type,
	Level,
	DeliveryMethod,
	CourseHours,
	StudyTime,
}
impl FacetKind {
	pub const ALL: [Self; 5] =
		[Self::Type, Self::Level, Self::DeliveryMethod, Self::CourseHours, Self::StudyTime];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Type => "type",
			Self::Level => "level",
			Self::DeliveryMethod => "delivery_method",
			Self::CourseHours => "course_hours",
			Self::StudyTime => "study_time",
		}
	}

	fn aliases(self) -> &'static [(&'static str, &'static str)] {
		match self {
			Self::Type => TYPE_ALIASES,
			Self::Level => &[],
			Self::DeliveryMethod => DELIVERY_METHOD_ALIASES,
			Self::CourseHours => COURSE_HOURS_ALIASES,
			Self::StudyTime => STUDY_TIME_ALIASES,
		}
	}
}

/// Lower-cases, turns `-` and `_` into spaces, collapses whitespace runs and trims.
pub fn normalize(raw: &str) -> String {
	let lowered = raw.to_lowercase();
	let mut out = String::with_capacity(lowered.len());

	for token in lowered.split(|ch: char| ch == '-' || ch == '_' || ch.is_whitespace()) {
		if token.is_empty() {
			continue;
		}
		if !out.is_empty() {
			out.push(' ');
		}

		out.push_str(token);
	}

	out
}

pub fn resolve_alias(kind: FacetKind, raw: &str) -> String {
	let normalized = normalize(raw);

	kind.aliases()
		.iter()
		.find(|(alias, _)| *alias == normalized)
		.map(|(_, canonical)| (*canonical).to_string())
		.unwrap_or(normalized)
}

pub fn is_unchecked(raw: &str) -> bool {
	normalize(raw) == UNCHECKED
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn alias_targets_are_canonical() {
		for kind in FacetKind::ALL {
			for (alias, canonical) in kind.aliases() {
				assert_eq!(normalize(alias), *alias, "alias key {alias:?} must be normalized");
				assert_eq!(
					resolve_alias(kind, canonical),
					*canonical,
					"{canonical:?} must resolve to itself for {}",
					kind.as_str()
				);
			}
		}
	}

	#[test]
	fn unchecked_sentinel_survives_separator_folding() {
		assert!(is_unchecked("_unchecked"));
		assert!(is_unchecked(" _UNCHECKED "));
		assert!(!is_unchecked("checked"));
	}
}
