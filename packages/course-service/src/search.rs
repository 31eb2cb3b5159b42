pub mod filter;
pub mod ranking;

pub use filter::StageImpact;
pub use ranking::SortMode;

use serde::Serialize;
use uuid::Uuid;

use crate::{
	CourseService, Result,
	facets::{self, SkippedFacet},
	resolve::{self, FilterRequest, FilterSet, ResolvedQuery, Selections},
};
use course_catalogue::{Catalogue, CourseRecord};
use course_chunking::OverviewSplit;
use course_domain::{FacetKind, vocabulary};

pub const PAGE_SIZE: usize = 10;

/// A course on a result page, annotated for display.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseItem {
	#[serde(flatten)]
	pub course: CourseRecord,
	pub slug: String,
	pub short_overview: String,
	pub remaining_overview: String,
}
impl CourseItem {
	fn annotate(course: &CourseRecord, overview_limit_chars: usize) -> Self {
		let OverviewSplit { short, remaining } = course_chunking::split_overview(
			course.overview.as_deref().unwrap_or_default(),
			overview_limit_chars,
		);

		Self {
			course: course.clone(),
			slug: course.slug(),
			short_overview: short,
			remaining_overview: remaining,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage {
	pub items: Vec<CourseItem>,
	pub current_page: usize,
	pub total_pages: usize,
	pub total_results: usize,
	/// Base results existed but the facets removed all of them. An empty catalogue searched
	/// without location or subject text has no base results, so it renders zero results with
	/// this flag unset.
	pub no_results: bool,
	pub sort: SortMode,
	/// Filters actually applied, for re-displaying the filter panel.
	pub filters: FilterSet,
	pub skipped_facets: Vec<SkippedFacet>,
	pub selections: Selections,
	pub level_labels: Vec<String>,
	pub type_labels: Vec<String>,
	pub stages: Vec<StageImpact>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchOutcome {
	Render {
		page: ResultPage,
	},
	/// The location or subject text matched nothing at all; the caller should send the user back
	/// to refine it.
	NoResultsRedirect {
		selections: Selections,
		filters: FilterSet,
		stages: Vec<StageImpact>,
	},
}
impl SearchOutcome {
	pub fn page(&self) -> Option<&ResultPage> {
		match self {
			Self::Render { page } => Some(page),
			Self::NoResultsRedirect { .. } => None,
		}
	}

	pub fn is_redirect(&self) -> bool {
		matches!(self, Self::NoResultsRedirect { .. })
	}
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchResponse {
	pub trace_id: Uuid,
	#[serde(flatten)]
	pub outcome: SearchOutcome,
}

impl CourseService {
	pub fn search(&self, req: FilterRequest) -> Result<SearchResponse> {
		let trace_id = Uuid::new_v4();
		let span = tracing::info_span!("search", trace_id = %trace_id);
		let _guard = span.enter();
		let catalogue = self.catalogue.load()?;
		let query = resolve::resolve(&req, self.default_sort());
		let outcome =
			search_catalogue(&catalogue, &query, self.cfg.search.overview_limit_chars as usize);

		match &outcome {
			SearchOutcome::Render { page } => tracing::info!(
				total = page.total_results,
				page = page.current_page,
				no_results = page.no_results,
				skipped = page.skipped_facets.len(),
				"Search rendered."
			),
			SearchOutcome::NoResultsRedirect { .. } => {
				tracing::info!("Search text matched no courses.")
			},
		}

		Ok(SearchResponse { trace_id, outcome })
	}
}

/// Runs one resolved query against a catalogue snapshot.
pub fn search_catalogue(
	catalogue: &Catalogue,
	query: &ResolvedQuery,
	overview_limit_chars: usize,
) -> SearchOutcome {
	let matched = facets::applicable_facets(&query.filters, catalogue);
	let filters = matched.applicable;
	let mut stages = Vec::new();
	let base = filter::base_search(catalogue.courses(), &filters, &mut stages);

	if filters.has_base_search() && base.is_empty() {
		return SearchOutcome::NoResultsRedirect {
			selections: query.selections.clone(),
			filters,
			stages,
		};
	}

	let base_count = base.len();
	let mut courses = filter::refine(base, &filters, &mut stages);

	ranking::sort_courses(&mut courses, query.sort);

	let total_results = courses.len();
	let items = page_slice(&courses, query.page)
		.iter()
		.map(|course| CourseItem::annotate(course, overview_limit_chars))
		.collect();
	let level_labels = labels(&filters, FacetKind::Level, vocabulary::level_label);
	let type_labels = labels(&filters, FacetKind::Type, vocabulary::type_label);

	SearchOutcome::Render {
		page: ResultPage {
			items,
			current_page: query.page,
			total_pages: total_pages(total_results),
			total_results,
			no_results: base_count > 0 && total_results == 0,
			sort: query.sort,
			filters,
			skipped_facets: matched.skipped,
			selections: query.selections.clone(),
			level_labels,
			type_labels,
			stages,
		},
	}
}

pub fn total_pages(total_results: usize) -> usize {
	total_results.div_ceil(PAGE_SIZE).max(1)
}

/// One-based page of `items`; pages past the end are empty.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
	let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE);

	if start >= items.len() {
		return &[];
	}

	let end = start.saturating_add(PAGE_SIZE).min(items.len());

	&items[start..end]
}

fn labels(filters: &FilterSet, kind: FacetKind, label: fn(&str) -> String) -> Vec<String> {
	filters
		.values(kind)
		.map(|values| values.iter().map(|value| label(value)).collect())
		.unwrap_or_default()
}
