use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use course_domain::slug;

/// One entry of the course catalogue. Every field is optional in the source data; fields the
/// engine does not read are kept in `extra` and echoed back untouched.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
	#[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
	pub provider: Option<String>,
	#[serde(
		rename = "type",
		default,
		deserialize_with = "lenient_text",
		skip_serializing_if = "Option::is_none"
	)]
	pub course_type: Option<String>,
	#[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
	pub location: Option<String>,
	#[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
	pub overview: Option<String>,
	#[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
	pub delivery_method: Option<String>,
	#[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
	pub course_hours: Option<String>,
	#[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
	pub study_time: Option<String>,
	/// Free text such as "4.5 miles"; numbers are accepted and kept as text.
	#[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
	pub distance: Option<String>,
	#[serde(default, deserialize_with = "lenient_score", skip_serializing_if = "Option::is_none")]
	pub relevance: Option<f64>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}
impl CourseRecord {
	pub fn slug(&self) -> String {
		slug::slug_of(self.name.as_deref(), self.provider.as_deref())
	}
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Option::<Value>::deserialize(deserializer)?;

	Ok(match value {
		Some(Value::String(text)) => Some(text),
		Some(Value::Number(number)) => Some(number.to_string()),
		Some(Value::Bool(flag)) => Some(flag.to_string()),
		_ => None,
	})
}

fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Option::<Value>::deserialize(deserializer)?;
	let score = match value {
		Some(Value::Number(number)) => number.as_f64(),
		Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
		_ => None,
	};

	Ok(score.filter(|score| score.is_finite()))
}
