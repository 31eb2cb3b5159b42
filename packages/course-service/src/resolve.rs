use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::search::SortMode;
use course_domain::{
	FacetKind, distance, normalize,
	normalize::is_unchecked,
	resolve_alias,
	vocabulary::{self, LearningStyle},
};

pub const TYPE_PARAM: &str = "filter";
pub const LEVEL_PARAM: &str = "qualification-level";
pub const DELIVERY_METHOD_PARAM: &str = "learning-method";
pub const COURSE_HOURS_PARAM: &str = "course-hours";
pub const STUDY_TIME_PARAM: &str = "course-times";
pub const LOCATION_PARAM: &str = "option-select-filter-location";
pub const SUBJECT_PARAM: &str = "subject-filter";
pub const TRAVEL_DISTANCE_PARAM: &str = "travel-location";
pub const AGE_PARAM: &str = "age";
pub const NEXT_STEP_PARAM: &str = "next-step";
pub const LEARNING_STYLE_PARAM: &str = "learning-style";
pub const SORT_PARAM: &str = "sort";
pub const PAGE_PARAM: &str = "page";

const REMEMBERED_LOCATION_KEYS: &[&str] = &["location"];
const REMEMBERED_SUBJECT_KEYS: &[&str] = &["interest-1", "job-1"];
/// Any of these in the explicit input means the user acted on the filters themselves.
const DERIVATION_BLOCKING_PARAMS: &[&str] =
	&[TYPE_PARAM, LEVEL_PARAM, LOCATION_PARAM, SUBJECT_PARAM];

/// A raw parameter as it arrives from a form: one value or several.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
	One(String),
	Many(Vec<String>),
}
impl ParamValue {
	/// Trimmed values, without blanks and the unchecked sentinel.
	pub fn cleaned(&self) -> Vec<&str> {
		let raw = match self {
			Self::One(value) => std::slice::from_ref(value),
			Self::Many(values) => values.as_slice(),
		};

		raw.iter()
			.map(|value| value.trim())
			.filter(|value| !value.is_empty() && !is_unchecked(value))
			.collect()
	}

	pub fn first(&self) -> Option<&str> {
		self.cleaned().into_iter().next()
	}
}
impl From<&str> for ParamValue {
	fn from(value: &str) -> Self {
		Self::One(value.to_string())
	}
}
impl From<Vec<&str>> for ParamValue {
	fn from(values: Vec<&str>) -> Self {
		Self::Many(values.into_iter().map(str::to_string).collect())
	}
}
impl<'de> Deserialize<'de> for ParamValue {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let value = Value::deserialize(deserializer)?;

		Ok(match value {
			Value::Array(items) => Self::Many(items.into_iter().filter_map(scalar_text).collect()),
			other => scalar_text(other).map(Self::One).unwrap_or(Self::Many(Vec::new())),
		})
	}
}

/// Filter inputs for one query: the request's own parameters and the answers remembered from
/// earlier steps. Both maps are keyed by form parameter name.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct FilterRequest {
	#[serde(default)]
	pub explicit: HashMap<String, ParamValue>,
	#[serde(default)]
	pub remembered: HashMap<String, ParamValue>,
}
impl FilterRequest {
	pub fn explicit(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
		self.explicit.insert(key.to_string(), value.into());

		self
	}

	pub fn remembered(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
		self.remembered.insert(key.to_string(), value.into());

		self
	}

	fn has_explicit(&self, key: &str) -> bool {
		self.explicit.contains_key(key)
	}

	/// Explicit values win whenever the key is present, even if every value was cleaned away.
	fn facet_values(&self, key: &str) -> Option<(Vec<&str>, Provenance)> {
		if let Some(value) = self.explicit.get(key) {
			return Some((value.cleaned(), Provenance::Explicit));
		}

		self.remembered.get(key).map(|value| (value.cleaned(), Provenance::Remembered))
	}

	fn text_value(&self, explicit_key: &str, remembered_keys: &[&str]) -> String {
		if let Some(value) = self.explicit.get(explicit_key) {
			return value.first().unwrap_or_default().to_string();
		}

		remembered_keys
			.iter()
			.filter_map(|key| self.remembered.get(*key))
			.find_map(ParamValue::first)
			.unwrap_or_default()
			.to_string()
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
	Explicit,
	Remembered,
	Derived,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FacetSelection {
	pub values: BTreeSet<String>,
	pub provenance: Provenance,
}

/// Canonical filters for one query. Facets with no values are absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FilterSet {
	pub facets: BTreeMap<FacetKind, FacetSelection>,
	/// Normalized location search text.
	pub location: Option<String>,
	/// Normalized subject search text, matched against course names and overviews.
	pub subject: Option<String>,
	pub max_distance_miles: Option<f64>,
}
impl FilterSet {
	pub fn values(&self, kind: FacetKind) -> Option<&BTreeSet<String>> {
		self.facets.get(&kind).map(|selection| &selection.values)
	}

	pub fn has_base_search(&self) -> bool {
		self.location.is_some() || self.subject.is_some()
	}

	fn insert(&mut self, kind: FacetKind, values: BTreeSet<String>, provenance: Provenance) {
		if !values.is_empty() {
			self.facets.insert(kind, FacetSelection { values, provenance });
		}
	}
}

/// The text inputs as the user typed them, for re-display.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selections {
	pub location: String,
	pub subject: String,
	pub travel_distance: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedQuery {
	pub filters: FilterSet,
	pub selections: Selections,
	pub sort: SortMode,
	pub page: usize,
}

pub fn resolve(request: &FilterRequest, default_sort: SortMode) -> ResolvedQuery {
	let (mut direct_types, mut type_provenance) = request
		.facet_values(TYPE_PARAM)
		.map(|(values, provenance)| (canonical_set(FacetKind::Type, &values), provenance))
		.unwrap_or((BTreeSet::new(), Provenance::Explicit));
	let (mut levels, mut level_provenance) = request
		.facet_values(LEVEL_PARAM)
		.map(|(values, provenance)| (expand_levels(&values), provenance))
		.unwrap_or((BTreeSet::new(), Provenance::Explicit));

	if direct_types.is_empty()
		&& levels.is_empty()
		&& !DERIVATION_BLOCKING_PARAMS.iter().any(|key| request.has_explicit(key))
	{
		let age = request.text_value(AGE_PARAM, &[AGE_PARAM]);
		let next_step = request.text_value(NEXT_STEP_PARAM, &[NEXT_STEP_PARAM]);
		let learning_style = request.text_value(LEARNING_STYLE_PARAM, &[LEARNING_STYLE_PARAM]);

		if vocabulary::implies_higher_education(&next_step, &age) {
			levels = vocabulary::higher_education_levels().into_iter().collect();
			level_provenance = Provenance::Derived;

			tracing::debug!(next_step = %next_step, age = %age, "Derived higher-education levels.");
		} else if let Some(style) = LearningStyle::parse(&learning_style) {
			direct_types = canonical_set(FacetKind::Type, style.qualifications());
			type_provenance = Provenance::Derived;

			tracing::debug!(?style, "Derived qualification types from learning style.");
		}
	}

	let level_types = levels
		.iter()
		.flat_map(|level| vocabulary::qualifications_for_level(level))
		.map(|label| resolve_alias(FacetKind::Type, label));
	let types_provenance = if direct_types.is_empty() { level_provenance } else { type_provenance };
	let types = direct_types.iter().cloned().chain(level_types).collect();
	let mut filters = FilterSet::default();

	filters.insert(FacetKind::Type, types, types_provenance);
	filters.insert(FacetKind::Level, levels, level_provenance);

	for (kind, key) in [
		(FacetKind::DeliveryMethod, DELIVERY_METHOD_PARAM),
		(FacetKind::CourseHours, COURSE_HOURS_PARAM),
		(FacetKind::StudyTime, STUDY_TIME_PARAM),
	] {
		if let Some((values, provenance)) = request.facet_values(key) {
			filters.insert(kind, canonical_set(kind, &values), provenance);
		}
	}

	let selections = Selections {
		location: request.text_value(LOCATION_PARAM, REMEMBERED_LOCATION_KEYS),
		subject: request.text_value(SUBJECT_PARAM, REMEMBERED_SUBJECT_KEYS),
		travel_distance: request.text_value(TRAVEL_DISTANCE_PARAM, &[TRAVEL_DISTANCE_PARAM]),
	};

	filters.location = non_empty(normalize(&selections.location));
	filters.subject = non_empty(normalize(&selections.subject));
	filters.max_distance_miles = distance::parse_miles(&selections.travel_distance);

	let sort = request
		.explicit
		.get(SORT_PARAM)
		.and_then(ParamValue::first)
		.and_then(SortMode::parse)
		.unwrap_or(default_sort);
	let page = request
		.explicit
		.get(PAGE_PARAM)
		.and_then(ParamValue::first)
		.and_then(parse_page)
		.filter(|page| *page >= 1)
		.unwrap_or(1);

	ResolvedQuery { filters, selections, sort, page }
}

fn canonical_set(kind: FacetKind, values: &[&str]) -> BTreeSet<String> {
	values
		.iter()
		.map(|value| resolve_alias(kind, value))
		.filter(|value| !value.is_empty())
		.collect()
}

fn expand_levels(values: &[&str]) -> BTreeSet<String> {
	values
		.iter()
		.map(|value| normalize(value))
		.filter(|value| !value.is_empty())
		.flat_map(|value| vocabulary::expand_level(&value))
		.collect()
}

/// Digit strings too long for `usize` still name a page past the end.
fn parse_page(raw: &str) -> Option<usize> {
	if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
		return None;
	}

	Some(raw.parse::<usize>().unwrap_or(usize::MAX))
}

fn non_empty(value: String) -> Option<String> {
	if value.is_empty() { None } else { Some(value) }
}

fn scalar_text(value: Value) -> Option<String> {
	match value {
		Value::String(text) => Some(text),
		Value::Number(number) => Some(number.to_string()),
		Value::Bool(flag) => Some(flag.to_string()),
		_ => None,
	}
}
