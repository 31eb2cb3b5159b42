mod error;

pub use error::{Error, Result};

use std::{
	env, fs,
	path::{Path, PathBuf},
};

use serde_json::{Map, Value};
use uuid::Uuid;

/// Builds one course object in the catalogue's JSON shape.
#[derive(Clone, Debug, Default)]
pub struct CourseBuilder {
	fields: Map<String, Value>,
}
impl CourseBuilder {
	pub fn new(name: &str, provider: &str) -> Self {
		Self::default().text("name", name).text("provider", provider)
	}

	pub fn course_type(self, value: &str) -> Self {
		self.text("type", value)
	}

	pub fn location(self, value: &str) -> Self {
		self.text("location", value)
	}

	pub fn overview(self, value: &str) -> Self {
		self.text("overview", value)
	}

	pub fn delivery_method(self, value: &str) -> Self {
		self.text("deliveryMethod", value)
	}

	pub fn course_hours(self, value: &str) -> Self {
		self.text("courseHours", value)
	}

	pub fn study_time(self, value: &str) -> Self {
		self.text("studyTime", value)
	}

	pub fn distance(self, value: &str) -> Self {
		self.text("distance", value)
	}

	pub fn relevance(self, value: f64) -> Self {
		self.field("relevance", Value::from(value))
	}

	pub fn text(self, key: &str, value: &str) -> Self {
		self.field(key, Value::String(value.to_string()))
	}

	pub fn field(mut self, key: &str, value: Value) -> Self {
		self.fields.insert(key.to_string(), value);

		self
	}

	pub fn build(self) -> Value {
		Value::Object(self.fields)
	}
}

/// A catalogue file in the temp directory that is removed on drop.
pub struct TestCatalogueFile {
	path: PathBuf,
	cleaned: bool,
}
impl TestCatalogueFile {
	pub fn new(courses: &[Value]) -> Result<Self> {
		let payload = serde_json::to_string_pretty(&Value::Array(courses.to_vec()))?;

		Self::with_contents(&payload)
	}

	/// Writes `contents` verbatim, which allows malformed catalogues.
	pub fn with_contents(contents: &str) -> Result<Self> {
		let mut path = env::temp_dir();

		path.push(format!("course_catalogue_test_{}.json", Uuid::new_v4().simple()));

		fs::write(&path, contents).map_err(|err| {
			Error::Message(format!("Failed to write test catalogue at {}: {err}.", path.display()))
		})?;

		Ok(Self { path, cleaned: false })
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn cleanup(mut self) -> Result<()> {
		self.remove()
	}

	fn remove(&mut self) -> Result<()> {
		if self.cleaned {
			return Ok(());
		}

		self.cleaned = true;

		match fs::remove_file(&self.path) {
			Ok(()) => Ok(()),
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
			Err(err) => Err(err.into()),
		}
	}
}
impl Drop for TestCatalogueFile {
	fn drop(&mut self) {
		if let Err(err) = self.remove() {
			eprintln!("Failed to remove test catalogue {}: {err}.", self.path.display());
		}
	}
}

/// A path in the temp directory that is guaranteed not to exist.
pub fn missing_catalogue_path() -> PathBuf {
	let mut path = env::temp_dir();

	path.push(format!("course_catalogue_missing_{}.json", Uuid::new_v4().simple()));

	path
}

/// `count` courses of one type, named `"<prefix> <n>"` and spread over increasing distances.
pub fn courses_of_type(prefix: &str, course_type: &str, count: usize) -> Vec<Value> {
	(1..=count)
		.map(|n| {
			CourseBuilder::new(&format!("{prefix} {n}"), "Test College")
				.course_type(course_type)
				.location("Leeds")
				.distance(&format!("{n} miles"))
				.relevance(50.0)
				.build()
		})
		.collect()
}
