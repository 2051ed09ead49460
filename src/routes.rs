use std::path::Path;

use axum::{
	extract::{Query, State},
	http::{header, StatusCode},
	response::{IntoResponse, Response},
	routing::get,
	Json, Router,
};
use chrono::Utc;
use nagayo_core::{fetch::Fetcher, query::LessonQuery, ValidationError};
use serde::Deserialize;
use serde_json::json;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
	pub fetcher: Fetcher,
}

pub fn router(state: AppState, static_dir: &Path) -> Router {
	Router::new()
		.route("/ping", get(ping))
		.route("/nagayo.ics", get(nagayo_ics))
		.fallback_service(ServeDir::new(static_dir))
		.with_state(state)
		.layer(TraceLayer::new_for_http())
		.layer(CorsLayer::permissive())
}

/// Raw query string of `/nagayo.ics`, validated into a [`LessonQuery`].
#[derive(Debug, Deserialize)]
pub struct CalendarParams {
	day: Option<String>,
	start: Option<String>,
	end: Option<String>,
}

/// Rejected requests answer 400 with the reason as plain text.
pub struct BadRequest(ValidationError);

impl IntoResponse for BadRequest {
	fn into_response(self) -> Response {
		(StatusCode::BAD_REQUEST, self.0.to_string()).into_response()
	}
}

async fn ping() -> impl IntoResponse {
	Json(json!({ "message": "hello" }))
}

/// GET /nagayo.ics?day=3&start=1930&end=2030
async fn nagayo_ics(
	State(state): State<AppState>,
	Query(params): Query<CalendarParams>,
) -> Result<impl IntoResponse, BadRequest> {
	let query = LessonQuery::from_params(
		params.day.as_deref(),
		params.start.as_deref(),
		params.end.as_deref(),
	)
	.map_err(|err| {
		tracing::info!("rejected calendar request: {err}");
		BadRequest(err)
	})?;

	let today = Utc::now().with_timezone(&nagayo_core::TZ).date_naive();
	let calendar = state.fetcher.calendar(&query, today).await;

	Ok(([(header::CONTENT_TYPE, "text/calendar")], calendar.to_string()))
}
