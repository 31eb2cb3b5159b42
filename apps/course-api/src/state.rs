use std::sync::Arc;

use course_service::CourseService;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<CourseService>,
}
impl AppState {
	pub fn new(config: course_config::Config) -> Self {
		Self::with_service(CourseService::from_config(config))
	}

	pub fn with_service(service: CourseService) -> Self {
		Self { service: Arc::new(service) }
	}
}
