use axum::{
	Json, Router,
	extract::{Path, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;

use crate::state::AppState;
use course_service::{CourseDetail, Error as ServiceError, FilterRequest, SearchResponse};

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/courses/search", post(search))
		.route("/v1/courses/{slug}", get(course))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn search(
	State(state): State<AppState>,
	Json(payload): Json<FilterRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
	let service = state.service.clone();
	let response = tokio::task::spawn_blocking(move || service.search(payload)).await??;

	Ok(Json(response))
}

async fn course(
	State(state): State<AppState>,
	Path(slug): Path<String>,
) -> Result<Json<CourseDetail>, ApiError> {
	let service = state.service.clone();
	let lookup = slug.clone();
	let detail = tokio::task::spawn_blocking(move || service.course(&lookup)).await??;

	match detail {
		Some(detail) => Ok(Json(detail)),
		None => Err(json_error(
			StatusCode::NOT_FOUND,
			"not_found",
			format!("No course matches slug {slug}."),
		)),
	}
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}
}
impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::CatalogueUnavailable { message } => {
				tracing::error!(error = %message, "Catalogue unavailable.");

				json_error(StatusCode::INTERNAL_SERVER_ERROR, "catalogue_unavailable", message)
			},
		}
	}
}
impl From<tokio::task::JoinError> for ApiError {
	fn from(err: tokio::task::JoinError) -> Self {
		tracing::error!(error = %err, "Request worker failed.");

		json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", "Request worker failed.")
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}

pub fn json_error(status: StatusCode, code: &str, message: impl Into<String>) -> ApiError {
	ApiError::new(status, code, message)
}
