//! Fixed lookup data for qualification levels, types and survey answers.
//!
//! Keys are stored in their normalized form so callers can look them up with the output of
//! [`normalize`](crate::normalize::normalize).

use serde::{Deserialize, Serialize};

use crate::normalize::normalize;

/// Legacy grouped levels and the fine-grained levels each one stands for.
const LEVEL_GROUPS: &[(&str, &[&str])] = &[
	("level 1 2", &["level 1", "level 2"]),
	("level 4 7", &["level 4", "level 5", "level 6", "level 7"]),
];
const LEVEL_QUALIFICATIONS: &[(&str, &[&str])] = &[
	("entry", &["Functional Skills"]),
	("level 1", &["BTEC", "Apprenticeship"]),
	("level 2", &["BTEC", "Apprenticeship"]),
	("level 3", &["A Level", "BTEC", "T Level", "Apprenticeship"]),
	("level 4", &["Diploma"]),
	("level 5", &["Diploma"]),
	("level 6", &["Degree"]),
	("level 7", &["Degree"]),
];
const LEVEL_LABELS: &[(&str, &str)] = &[
	("entry", "Entry level"),
	("level 1", "Level 1"),
	("level 2", "Level 2"),
	("level 3", "Level 3"),
	("level 4", "Level 4"),
	("level 5", "Level 5"),
	("level 6", "Level 6"),
	("level 7", "Level 7"),
];
const TYPE_LABELS: &[(&str, &str)] = &[
	("a level", "A Level"),
	("apprenticeship", "Apprenticeship"),
	("btec", "BTEC"),
	("degree", "Degree"),
	("diploma", "Diploma"),
	("functional skills", "Functional Skills"),
	("t level", "T Level"),
];
const AGE_BANDS: &[&str] = &["under 18", "18 21", "over 24"];
const HIGHER_EDUCATION_STEP: &str = "university";
const HIGHER_EDUCATION_GROUP: &str = "level 4 7";

const ACADEMIC: &[&str] = &["A Level", "Degree"];
const PRACTICAL: &[&str] = &["Apprenticeship", "T Level", "Diploma", "BTEC"];
const ACADEMIC_AND_PRACTICAL: &[&str] =
	&["A Level", "Degree", "Apprenticeship", "T Level", "Diploma", "BTEC"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningStyle {
	Academic,
	Practical,
	Both,
}
impl LearningStyle {
	/// Accepts the survey wording as well as the short style names.
	pub fn parse(raw: &str) -> Option<Self> {
		match normalize(raw).as_str() {
			"i prefer academic courses" | "academic" => Some(Self::Academic),
			"i prefer practical courses" | "practical" => Some(Self::Practical),
			"i'd like to see both academic and practical courses" | "both" => Some(Self::Both),
			_ => None,
		}
	}

	/// Qualification types suggested for the style, as display labels.
	pub fn qualifications(self) -> &'static [&'static str] {
		match self {
			Self::Academic => ACADEMIC,
			Self::Practical => PRACTICAL,
			Self::Both => ACADEMIC_AND_PRACTICAL,
		}
	}
}

/// Expands a normalized level into the levels it stands for. Ungrouped levels map to themselves.
pub fn expand_level(level: &str) -> Vec<String> {
	match LEVEL_GROUPS.iter().find(|(group, _)| *group == level) {
		Some((_, members)) => members.iter().map(|member| (*member).to_string()).collect(),
		None => vec![level.to_string()],
	}
}

/// Qualification type labels offered at a normalized level. Unknown levels offer none.
pub fn qualifications_for_level(level: &str) -> &'static [&'static str] {
	LEVEL_QUALIFICATIONS
		.iter()
		.find(|(key, _)| *key == level)
		.map(|(_, types)| *types)
		.unwrap_or(&[])
}

pub fn level_label(level: &str) -> String {
	lookup_label(LEVEL_LABELS, level).unwrap_or_else(|| level.to_string())
}

pub fn type_label(qualification: &str) -> String {
	lookup_label(TYPE_LABELS, qualification).unwrap_or_else(|| capitalize(qualification))
}

/// True when a "university" next step comes with a recognised age band, which implies the
/// higher-education levels.
pub fn implies_higher_education(next_step: &str, age: &str) -> bool {
	normalize(next_step) == HIGHER_EDUCATION_STEP && AGE_BANDS.contains(&normalize(age).as_str())
}

pub fn higher_education_levels() -> Vec<String> {
	expand_level(HIGHER_EDUCATION_GROUP)
}

fn lookup_label(table: &[(&str, &str)], key: &str) -> Option<String> {
	table.iter().find(|(candidate, _)| *candidate == key).map(|(_, label)| (*label).to_string())
}

fn capitalize(value: &str) -> String {
	let mut chars = value.chars();

	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
