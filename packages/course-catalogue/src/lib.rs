pub mod models;

mod error;

pub use error::Error;
pub use models::CourseRecord;

pub type Result<T, E = Error> = std::result::Result<T, E>;

use std::{
	fs,
	path::{Path, PathBuf},
};

/// Immutable snapshot of the catalogue handed to a single search or lookup.
#[derive(Clone, Debug, Default)]
pub struct Catalogue {
	courses: Vec<CourseRecord>,
}
impl Catalogue {
	pub fn new(courses: Vec<CourseRecord>) -> Self {
		Self { courses }
	}

	pub fn courses(&self) -> &[CourseRecord] {
		&self.courses
	}

	pub fn len(&self) -> usize {
		self.courses.len()
	}

	pub fn is_empty(&self) -> bool {
		self.courses.is_empty()
	}

	/// First record whose slug equals `slug`.
	pub fn find_by_slug(&self, slug: &str) -> Option<&CourseRecord> {
		self.courses.iter().find(|course| course.slug() == slug)
	}
}

/// Supplies a fresh catalogue snapshot for each request.
pub trait CatalogueSource
where
	Self: Send + Sync,
{
	fn load(&self) -> Result<Catalogue>;
}

/// Reads a JSON array of course objects from disk on every load.
#[derive(Clone, Debug)]
pub struct JsonFileCatalogue {
	path: PathBuf,
}
impl JsonFileCatalogue {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}
impl CatalogueSource for JsonFileCatalogue {
	fn load(&self) -> Result<Catalogue> {
		load(&self.path)
	}
}

/// Serves the same in-memory snapshot on every load.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalogue {
	catalogue: Catalogue,
}
impl StaticCatalogue {
	pub fn new(courses: Vec<CourseRecord>) -> Self {
		Self { catalogue: Catalogue::new(courses) }
	}
}
impl CatalogueSource for StaticCatalogue {
	fn load(&self) -> Result<Catalogue> {
		Ok(self.catalogue.clone())
	}
}

pub fn load(path: &Path) -> Result<Catalogue> {
	let raw = fs::read_to_string(path).map_err(|err| {
		tracing::error!(error = %err, path = %path.display(), "Failed to read catalogue.");

		Error::Read { path: path.to_path_buf(), source: err }
	})?;
	let courses: Vec<CourseRecord> = serde_json::from_str(&raw).map_err(|err| {
		tracing::error!(error = %err, path = %path.display(), "Failed to parse catalogue.");

		Error::Parse { path: path.to_path_buf(), source: err }
	})?;

	tracing::debug!(path = %path.display(), courses = courses.len(), "Catalogue loaded.");

	Ok(Catalogue::new(courses))
}
