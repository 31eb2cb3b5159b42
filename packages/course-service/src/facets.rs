//! Facet applicability against the catalogue actually loaded.
//!
//! A facet is applied only when at least one requested value exists somewhere in the catalogue.
//! Otherwise the facet is dropped for this query so a remembered or derived preference the
//! catalogue cannot serve never empties the result list on its own.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::resolve::FilterSet;
use course_catalogue::{Catalogue, CourseRecord};
use course_domain::{FacetKind, resolve_alias, vocabulary};

/// Facets checked against catalogue values, in the order they are applied.
pub(crate) const RECORD_FACETS: [FacetKind; 4] =
	[FacetKind::Type, FacetKind::DeliveryMethod, FacetKind::CourseHours, FacetKind::StudyTime];

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SkippedFacet {
	pub facet: FacetKind,
	pub requested: BTreeSet<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FacetMatch {
	pub applicable: FilterSet,
	pub skipped: Vec<SkippedFacet>,
}

/// Raw record text for a facet. Level is not stored on records.
pub(crate) fn record_value(course: &CourseRecord, kind: FacetKind) -> Option<&str> {
	match kind {
		FacetKind::Type => course.course_type.as_deref(),
		FacetKind::DeliveryMethod => course.delivery_method.as_deref(),
		FacetKind::CourseHours => course.course_hours.as_deref(),
		FacetKind::StudyTime => course.study_time.as_deref(),
		FacetKind::Level => None,
	}
}

/// Distinct canonical values of a facet across the whole catalogue.
pub fn catalogue_values(catalogue: &Catalogue, kind: FacetKind) -> BTreeSet<String> {
	catalogue
		.courses()
		.iter()
		.filter_map(|course| record_value(course, kind))
		.map(|raw| resolve_alias(kind, raw))
		.filter(|value| !value.is_empty())
		.collect()
}

pub fn applicable_facets(filters: &FilterSet, catalogue: &Catalogue) -> FacetMatch {
	let mut applicable = filters.clone();
	let mut skipped = Vec::new();

	for kind in RECORD_FACETS {
		let Some(requested) = filters.values(kind) else {
			continue;
		};
		let available = catalogue_values(catalogue, kind);

		if !requested.is_disjoint(&available) {
			continue;
		}

		tracing::warn!(
			facet = kind.as_str(),
			requested = ?requested,
			available = available.len(),
			"Facet skipped because no catalogue course carries a requested value."
		);

		applicable.facets.remove(&kind);
		skipped.push(SkippedFacet { facet: kind, requested: requested.clone() });
	}

	skip_inert_levels(&mut applicable, &mut skipped);

	FacetMatch { applicable, skipped }
}

/// Levels only act through the types they map to. Levels that map to no type, or that are left
/// without an applied type facet, did no filtering and are reported as skipped.
fn skip_inert_levels(applicable: &mut FilterSet, skipped: &mut Vec<SkippedFacet>) {
	let types_applied = applicable.facets.contains_key(&FacetKind::Type);
	let Some(levels) = applicable.facets.get_mut(&FacetKind::Level) else {
		return;
	};
	let inert: BTreeSet<String> = levels
		.values
		.iter()
		.filter(|level| {
			!types_applied || vocabulary::qualifications_for_level(level.as_str()).is_empty()
		})
		.cloned()
		.collect();

	if inert.is_empty() {
		return;
	}

	levels.values.retain(|level| !inert.contains(level));

	if levels.values.is_empty() {
		applicable.facets.remove(&FacetKind::Level);
	}

	tracing::warn!(
		levels = ?inert,
		types_applied,
		"Level skipped because it maps to no applied qualification type."
	);

	skipped.push(SkippedFacet { facet: FacetKind::Level, requested: inert });
}
