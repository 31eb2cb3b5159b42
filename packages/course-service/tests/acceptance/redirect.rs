use course_service::{FilterRequest, SearchOutcome, resolve::SUBJECT_PARAM};
use course_testkit::CourseBuilder;

use super::{search, service_with};

#[test]
fn subject_matching_nothing_signals_redirect() {
	let service = service_with(vec![
		CourseBuilder::new("Business Studies", "Leeds College").location("Leeds").build(),
		CourseBuilder::new("Plumbing", "Leeds College").location("Leeds").build(),
	]);
	let outcome = search(&service, FilterRequest::default().explicit(SUBJECT_PARAM, "Nursing"));

	assert!(outcome.is_redirect());

	let SearchOutcome::NoResultsRedirect { selections, .. } = outcome else {
		unreachable!();
	};

	assert_eq!(selections.subject, "Nursing");
}

#[test]
fn remembered_location_matching_nothing_also_redirects() {
	let service = service_with(vec![
		CourseBuilder::new("Plumbing", "Leeds College").location("Leeds").build(),
	]);
	let outcome = search(&service, FilterRequest::default().remembered("location", "Hull"));

	assert!(outcome.is_redirect());
}

#[test]
fn empty_search_text_never_redirects() {
	let service = service_with(Vec::new());
	let outcome = search(&service, FilterRequest::default().explicit(SUBJECT_PARAM, "  "));

	assert!(!outcome.is_redirect());
	assert_eq!(outcome.page().map(|page| page.total_pages), Some(1));
}
