pub mod detail;
pub mod facets;
pub mod resolve;
pub mod search;

mod error;

pub use detail::CourseDetail;
pub use error::{Error, Result};
pub use facets::{FacetMatch, SkippedFacet};
pub use resolve::{FacetSelection, FilterRequest, FilterSet, ParamValue, Provenance, Selections};
pub use search::{
	CourseItem, PAGE_SIZE, ResultPage, SearchOutcome, SearchResponse, SortMode, StageImpact,
};

use std::sync::Arc;

use course_catalogue::{CatalogueSource, JsonFileCatalogue};
use course_config::Config;

pub struct CourseService {
	pub cfg: Config,
	catalogue: Arc<dyn CatalogueSource>,
}
impl CourseService {
	pub fn new(cfg: Config, catalogue: Arc<dyn CatalogueSource>) -> Self {
		Self { cfg, catalogue }
	}

	/// Serves the catalogue file named in the configuration, re-read on every request.
	pub fn from_config(cfg: Config) -> Self {
		let catalogue = Arc::new(JsonFileCatalogue::new(cfg.catalogue.path.clone()));

		Self::new(cfg, catalogue)
	}

	/// The configured sort mode. Configuration validation guarantees it parses.
	pub fn default_sort(&self) -> SortMode {
		SortMode::parse(&self.cfg.search.default_sort).unwrap_or_default()
	}
}
