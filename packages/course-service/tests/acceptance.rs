mod acceptance {
	mod derivation;
	mod facet_skip;
	mod no_results;
	mod record_facets;
	mod redirect;

	use std::sync::Arc;

	use serde_json::Value;

	use course_catalogue::{CourseRecord, StaticCatalogue};
	use course_config::{Catalogue, Config, Search, Service};
	use course_service::{CourseService, FilterRequest, ResultPage, SearchOutcome};

	pub fn test_config() -> Config {
		Config {
			service: Service {
				http_bind: "127.0.0.1:0".to_string(),
				log_level: "info".to_string(),
			},
			catalogue: Catalogue { path: "unused.json".into() },
			search: Search { default_sort: "distance".to_string(), overview_limit_chars: 450 },
		}
	}

	pub fn service_with(courses: Vec<Value>) -> CourseService {
		let records: Vec<CourseRecord> = serde_json::from_value(Value::Array(courses))
			.expect("Test courses must deserialize.");

		CourseService::new(test_config(), Arc::new(StaticCatalogue::new(records)))
	}

	pub fn search(service: &CourseService, request: FilterRequest) -> SearchOutcome {
		service.search(request).expect("Search must succeed.").outcome
	}

	pub fn rendered(outcome: &SearchOutcome) -> &ResultPage {
		outcome.page().expect("Expected a rendered page.")
	}

	pub fn item_names(page: &ResultPage) -> Vec<String> {
		page.items.iter().filter_map(|item| item.course.name.clone()).collect()
	}
}
