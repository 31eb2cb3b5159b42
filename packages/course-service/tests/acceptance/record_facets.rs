use std::collections::BTreeSet;

use course_domain::FacetKind;
use course_service::{
	FilterRequest,
	resolve::{DELIVERY_METHOD_PARAM, STUDY_TIME_PARAM, TRAVEL_DISTANCE_PARAM, TYPE_PARAM},
};
use course_testkit::CourseBuilder;

use super::{item_names, rendered, search, service_with};

fn catalogue() -> Vec<serde_json::Value> {
	vec![
		CourseBuilder::new("A", "Leeds College")
			.course_type("BTEC")
			.delivery_method("Online")
			.study_time("Daytime")
			.distance("2 miles")
			.build(),
		CourseBuilder::new("B", "Leeds College")
			.course_type("BTEC")
			.delivery_method("Classroom-based")
			.study_time("Evening")
			.distance("3 miles")
			.build(),
		CourseBuilder::new("C", "Leeds College")
			.course_type("BTEC")
			.delivery_method("classroom_based")
			.study_time("daytime")
			.distance("4 miles")
			.build(),
		CourseBuilder::new("D", "York College")
			.course_type("T Level")
			.delivery_method("Classroom Based")
			.study_time("Daytime")
			.distance("30 miles")
			.build(),
	]
}

#[test]
fn delivery_method_and_study_time_narrow_results() {
	let service = service_with(catalogue());
	let request = FilterRequest::default()
		.explicit(DELIVERY_METHOD_PARAM, "classroom-based")
		.explicit(STUDY_TIME_PARAM, "Daytime");
	let outcome = search(&service, request);
	let page = rendered(&outcome);

	assert_eq!(item_names(page), vec!["C", "D"]);
	assert!(page.skipped_facets.is_empty());
	assert_eq!(
		page.filters.values(FacetKind::DeliveryMethod),
		Some(&BTreeSet::from(["classroom based".to_string()]))
	);
}

#[test]
fn hyphenated_catalogue_values_match_spaced_requests() {
	let service = service_with(catalogue());
	let request = FilterRequest::default().remembered(DELIVERY_METHOD_PARAM, "Classroom based");
	let outcome = search(&service, request);
	let page = rendered(&outcome);

	assert_eq!(item_names(page), vec!["B", "C", "D"]);
}

#[test]
fn stages_run_in_pipeline_order() {
	let service = service_with(catalogue());
	let request = FilterRequest::default()
		.explicit(TYPE_PARAM, "BTEC")
		.explicit(DELIVERY_METHOD_PARAM, "classroom based")
		.explicit(STUDY_TIME_PARAM, "daytime")
		.explicit(TRAVEL_DISTANCE_PARAM, "10 miles")
		.explicit("course-hours", "_unchecked");
	let outcome = search(&service, request);
	let page = rendered(&outcome);
	let stages: Vec<_> = page.stages.iter().map(|stage| stage.stage).collect();
	let counts: Vec<_> =
		page.stages.iter().map(|stage| (stage.count_pre, stage.count_post)).collect();

	assert_eq!(stages, vec!["base_search", "type", "delivery_method", "study_time", "distance"]);
	assert_eq!(counts, vec![(4, 4), (4, 3), (3, 2), (2, 1), (1, 1)]);
	assert_eq!(item_names(page), vec!["C"]);
}
