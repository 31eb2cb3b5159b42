use course_service::{
	FilterRequest,
	resolve::{SUBJECT_PARAM, TYPE_PARAM},
};
use course_testkit::CourseBuilder;

use super::{rendered, search, service_with};

fn catalogue() -> Vec<serde_json::Value> {
	vec![
		CourseBuilder::new("Business Studies", "Leeds College").course_type("BTEC").build(),
		CourseBuilder::new("Business Admin", "York College").course_type("BTEC").build(),
		CourseBuilder::new("Applied Business", "Hull College").course_type("BTEC").build(),
		CourseBuilder::new("History", "Leeds University").course_type("Degree").build(),
	]
}

#[test]
fn facets_emptying_base_results_render_no_results() {
	let service = service_with(catalogue());
	let request =
		FilterRequest::default().explicit(SUBJECT_PARAM, "business").explicit(TYPE_PARAM, "Degree");
	let outcome = search(&service, request);
	let page = rendered(&outcome);

	assert!(page.no_results);
	assert_eq!(page.total_results, 0);
	assert_eq!(page.total_pages, 1);
	assert!(page.items.is_empty());
	assert_eq!(page.stages[0].count_post, 3);
	assert_eq!(page.stages[1].stage, "type");
	assert_eq!(page.stages[1].count_post, 0);
}

#[test]
fn empty_catalogue_without_search_text_is_not_no_results() {
	let service = service_with(Vec::new());
	let outcome = search(&service, FilterRequest::default());
	let page = rendered(&outcome);

	assert!(!page.no_results);
	assert_eq!(page.total_results, 0);
}
