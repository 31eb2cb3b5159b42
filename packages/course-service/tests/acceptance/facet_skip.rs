use course_domain::FacetKind;
use course_service::{
	FilterRequest, Provenance,
	resolve::{LEVEL_PARAM, TYPE_PARAM},
};
use course_testkit::courses_of_type;

use super::{rendered, search, service_with};

#[test]
fn unavailable_type_is_skipped_instead_of_emptying_results() {
	let service = service_with(courses_of_type("Engineering", "BTEC", 15));
	let outcome = search(&service, FilterRequest::default().explicit(TYPE_PARAM, "A Level"));
	let page = rendered(&outcome);

	assert_eq!(page.total_results, 15);
	assert_eq!(page.items.len(), 10);
	assert_eq!(page.total_pages, 2);
	assert!(!page.no_results);
	assert!(page.filters.values(FacetKind::Type).is_none());
	assert_eq!(page.skipped_facets.len(), 1);
	assert_eq!(page.skipped_facets[0].facet, FacetKind::Type);
	assert!(page.type_labels.is_empty());
}

#[test]
fn skipped_facet_requests_stay_reported() {
	let service = service_with(courses_of_type("Engineering", "BTEC", 3));
	let request = FilterRequest::default()
		.remembered(TYPE_PARAM, vec!["A Level", "Degree"])
		.remembered("course-hours", "evening-only");
	let outcome = search(&service, request);
	let page = rendered(&outcome);
	let skipped: Vec<_> = page.skipped_facets.iter().map(|skip| skip.facet).collect();

	assert_eq!(page.total_results, 3);
	assert_eq!(skipped, vec![FacetKind::Type, FacetKind::CourseHours]);
	assert!(page.filters.facets.is_empty());
	assert!(
		page.skipped_facets[0].requested.contains("a level")
			&& page.skipped_facets[0].requested.contains("degree")
	);
}

#[test]
fn overlapping_type_is_applied_with_its_provenance() {
	let mut courses = courses_of_type("Engineering", "BTEC", 4);

	courses.extend(courses_of_type("History", "A Level", 2));

	let service = service_with(courses);
	let outcome = search(&service, FilterRequest::default().remembered(TYPE_PARAM, "A Levels"));
	let page = rendered(&outcome);

	assert_eq!(page.total_results, 2);
	assert!(page.skipped_facets.is_empty());
	assert_eq!(page.filters.facets[&FacetKind::Type].provenance, Provenance::Remembered);
	assert_eq!(page.type_labels, vec!["A Level"]);
}

#[test]
fn level_without_qualification_types_is_not_echoed_as_applied() {
	let service = service_with(courses_of_type("Engineering", "BTEC", 1));
	let outcome = search(&service, FilterRequest::default().remembered(LEVEL_PARAM, "none"));
	let page = rendered(&outcome);

	assert_eq!(page.total_results, 1);
	assert!(page.filters.values(FacetKind::Level).is_none());
	assert!(page.filters.values(FacetKind::Type).is_none());
	assert!(page.level_labels.is_empty());
	assert_eq!(page.skipped_facets.len(), 1);
	assert_eq!(page.skipped_facets[0].facet, FacetKind::Level);
	assert!(page.skipped_facets[0].requested.contains("none"));
}
