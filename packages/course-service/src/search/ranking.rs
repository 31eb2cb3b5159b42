use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use course_catalogue::CourseRecord;
use course_domain::{distance, normalize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
	#[default]
	Distance,
	Relevance,
}
impl SortMode {
	pub fn parse(raw: &str) -> Option<Self> {
		match normalize(raw).as_str() {
			"distance" => Some(Self::Distance),
			"relevance" => Some(Self::Relevance),
			_ => None,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Distance => "distance",
			Self::Relevance => "relevance",
		}
	}
}

/// Stable sort; courses that compare equal keep their catalogue order.
pub(crate) fn sort_courses(courses: &mut [&CourseRecord], mode: SortMode) {
	match mode {
		SortMode::Distance => courses.sort_by(|a, b| {
			cmp_distance(a, b).then_with(|| cmp_relevance_desc(a.relevance, b.relevance))
		}),
		SortMode::Relevance => courses.sort_by(|a, b| {
			cmp_relevance_desc(a.relevance, b.relevance).then_with(|| cmp_distance(a, b))
		}),
	}
}

/// Ascending miles; a missing or unreadable distance sorts last.
fn cmp_distance(a: &CourseRecord, b: &CourseRecord) -> Ordering {
	let a = distance::miles_or_max(a.distance.as_deref());
	let b = distance::miles_or_max(b.distance.as_deref());

	a.total_cmp(&b)
}

/// Descending score; a missing score sorts last.
fn cmp_relevance_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
	match (a, b) {
		(Some(a), Some(b)) => b.total_cmp(&a),
		(Some(_), None) => Ordering::Less,
		(None, Some(_)) => Ordering::Greater,
		(None, None) => Ordering::Equal,
	}
}
