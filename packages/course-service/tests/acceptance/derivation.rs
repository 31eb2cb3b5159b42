use course_domain::FacetKind;
use course_service::{FilterRequest, Provenance, resolve::LOCATION_PARAM};
use course_testkit::{CourseBuilder, courses_of_type};

use super::{item_names, rendered, search, service_with};

fn mixed_catalogue() -> Vec<serde_json::Value> {
	let mut courses = courses_of_type("Maths", "A Level", 2);

	courses.extend(courses_of_type("Welding", "Apprenticeship", 2));
	courses.push(CourseBuilder::new("Nursing", "Leeds University").course_type("Degree").build());

	courses
}

#[test]
fn learning_style_narrows_results_when_nothing_was_chosen() {
	let service = service_with(mixed_catalogue());
	let request = FilterRequest::default().remembered("learning-style", "I prefer academic courses");
	let outcome = search(&service, request);
	let page = rendered(&outcome);

	assert_eq!(page.total_results, 3);
	assert_eq!(page.filters.facets[&FacetKind::Type].provenance, Provenance::Derived);
	assert!(item_names(page).iter().all(|name| !name.starts_with("Welding")));
}

#[test]
fn university_plans_select_higher_education() {
	let service = service_with(mixed_catalogue());
	let request = FilterRequest::default()
		.remembered("next-step", "University")
		.remembered("age", "18-21")
		.remembered("learning-style", "I prefer practical courses");
	let outcome = search(&service, request);
	let page = rendered(&outcome);

	assert_eq!(item_names(page), vec!["Nursing"]);
	assert_eq!(page.level_labels, vec!["Level 4", "Level 5", "Level 6", "Level 7"]);
}

#[test]
fn explicit_location_blocks_derivation() {
	let service = service_with(mixed_catalogue());
	let request = FilterRequest::default()
		.explicit(LOCATION_PARAM, "leeds")
		.remembered("learning-style", "I prefer academic courses");
	let outcome = search(&service, request);
	let page = rendered(&outcome);

	assert_eq!(page.total_results, 4);
	assert!(page.filters.facets.is_empty());
}
