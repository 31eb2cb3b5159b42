use serde::Serialize;

use crate::{CourseService, Result};
use course_catalogue::{Catalogue, CourseRecord};

/// A single course as shown on its detail page.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CourseDetail {
	#[serde(flatten)]
	pub course: CourseRecord,
	pub slug: String,
}

impl CourseService {
	/// Looks a course up by slug. A miss is `Ok(None)`; only an unreadable catalogue is an error.
	pub fn course(&self, slug: &str) -> Result<Option<CourseDetail>> {
		let catalogue = self.catalogue.load()?;
		let detail = find_course(&catalogue, slug);

		if detail.is_none() {
			tracing::info!(slug, "No course matches slug.");
		}

		Ok(detail)
	}
}

pub fn find_course(catalogue: &Catalogue, slug: &str) -> Option<CourseDetail> {
	catalogue
		.find_by_slug(slug)
		.map(|course| CourseDetail { course: course.clone(), slug: course.slug() })
}
