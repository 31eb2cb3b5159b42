use serde::Serialize;

use crate::{
	facets::{self, RECORD_FACETS},
	resolve::FilterSet,
};
use course_catalogue::CourseRecord;
use course_domain::{distance, normalize, resolve_alias};

pub(crate) const BASE_SEARCH_STAGE: &str = "base_search";
pub(crate) const DISTANCE_STAGE: &str = "distance";

/// Candidate counts around one pipeline stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StageImpact {
	pub stage: &'static str,
	pub count_pre: usize,
	pub count_post: usize,
}
impl StageImpact {
	pub fn dropped(&self) -> usize {
		self.count_pre.saturating_sub(self.count_post)
	}
}

/// Courses whose location and subject text contain the requested search text. Both must match
/// when both are given; neither given keeps every course.
pub(crate) fn base_search<'a>(
	courses: &'a [CourseRecord],
	filters: &FilterSet,
	trace: &mut Vec<StageImpact>,
) -> Vec<&'a CourseRecord> {
	let kept: Vec<_> = courses
		.iter()
		.filter(|course| {
			filters.location.as_deref().is_none_or(|location| matches_location(course, location))
		})
		.filter(|course| {
			filters.subject.as_deref().is_none_or(|subject| matches_subject(course, subject))
		})
		.collect();

	trace.push(StageImpact {
		stage: BASE_SEARCH_STAGE,
		count_pre: courses.len(),
		count_post: kept.len(),
	});

	kept
}

/// Narrows the base results by each applicable facet, then by travel distance.
pub(crate) fn refine<'a>(
	mut candidates: Vec<&'a CourseRecord>,
	filters: &FilterSet,
	trace: &mut Vec<StageImpact>,
) -> Vec<&'a CourseRecord> {
	for kind in RECORD_FACETS {
		let Some(values) = filters.values(kind) else {
			continue;
		};
		let pre = candidates.len();

		candidates.retain(|course| {
			facets::record_value(course, kind)
				.is_some_and(|raw| values.contains(&resolve_alias(kind, raw)))
		});
		trace.push(StageImpact {
			stage: kind.as_str(),
			count_pre: pre,
			count_post: candidates.len(),
		});
	}

	if let Some(ceiling) = filters.max_distance_miles {
		let pre = candidates.len();

		candidates.retain(|course| distance::miles_or_max(course.distance.as_deref()) <= ceiling);
		trace.push(StageImpact {
			stage: DISTANCE_STAGE,
			count_pre: pre,
			count_post: candidates.len(),
		});
	}

	candidates
}

fn matches_location(course: &CourseRecord, location: &str) -> bool {
	contains_normalized(course.location.as_deref(), location)
}

fn matches_subject(course: &CourseRecord, subject: &str) -> bool {
	contains_normalized(course.name.as_deref(), subject)
		|| contains_normalized(course.overview.as_deref(), subject)
}

fn contains_normalized(field: Option<&str>, needle: &str) -> bool {
	field.is_some_and(|text| normalize(text).contains(needle))
}
