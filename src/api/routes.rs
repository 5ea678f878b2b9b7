use crate::api::infra::{deserialize_date, deserialize_optional_date, AppState};
use crate::error::AppError;
use crate::workflows::enrollment::{
    field_options, suggested_fields, FieldOfStudyChoice, TraineeId, TraineeView,
    EXPORT_FILE_NAME, OTHER_FIELD_OPTION,
};
use crate::workflows::schedule::{parse_day, SlotRoster};
use crate::workflows::{AttendanceReceipt, EnrollForm, TrackerService};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct EnrollRequest {
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) email: String,
    #[serde(default)]
    pub(crate) phone: String,
    #[serde(default)]
    pub(crate) field_of_study: String,
    /// Free-text field used when `field_of_study` is the "Other" entry.
    #[serde(default)]
    pub(crate) other_field_of_study: String,
    #[serde(default)]
    pub(crate) round: String,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) enrollment_date: Option<NaiveDate>,
    #[serde(deserialize_with = "deserialize_date")]
    pub(crate) graduation_date: NaiveDate,
    #[serde(default)]
    pub(crate) total_lectures: Option<u32>,
}

impl From<EnrollRequest> for EnrollForm {
    fn from(request: EnrollRequest) -> Self {
        Self {
            field_of_study: FieldOfStudyChoice::from_selection(
                &request.field_of_study,
                &request.other_field_of_study,
            ),
            name: request.name,
            email: request.email,
            phone: request.phone,
            round: request.round,
            enrollment_date: request.enrollment_date,
            graduation_date: request.graduation_date,
            total_lectures: request.total_lectures,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct DayScheduleResponse {
    pub(crate) day: &'static str,
    pub(crate) slots: Vec<SlotRoster>,
}

/// Trainee, attendance, export, and schedule endpoints plus `/health`.
pub fn tracker_router(service: Arc<TrackerService>) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/api/v1/fields", get(fields_endpoint))
        .route(
            "/api/v1/trainees",
            get(list_trainees_endpoint).post(enroll_endpoint),
        )
        .route("/api/v1/trainees/export.csv", get(export_endpoint))
        .route(
            "/api/v1/trainees/:trainee_id/attendance",
            post(attendance_endpoint),
        )
        .route("/api/v1/schedule", get(schedule_endpoint))
        .route("/api/v1/schedule/:day", get(day_schedule_endpoint))
        .with_state(service)
}

/// Adds readiness and metrics endpoints, which read [`AppState`] from an
/// `Extension` layer installed by the server.
pub(crate) fn with_operational_routes(router: Router) -> Router {
    router
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn fields_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "suggested": suggested_fields(),
        "other_option": OTHER_FIELD_OPTION,
        "options": field_options(),
    }))
}

pub(crate) async fn list_trainees_endpoint(
    State(service): State<Arc<TrackerService>>,
) -> Json<Vec<TraineeView>> {
    Json(service.trainees())
}

pub(crate) async fn enroll_endpoint(
    State(service): State<Arc<TrackerService>>,
    Json(payload): Json<EnrollRequest>,
) -> Result<(StatusCode, Json<TraineeView>), AppError> {
    let today = Local::now().date_naive();
    let view = service.enroll(payload.into(), today)?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub(crate) async fn attendance_endpoint(
    State(service): State<Arc<TrackerService>>,
    Path(trainee_id): Path<usize>,
) -> Result<Json<AttendanceReceipt>, AppError> {
    let receipt = service.mark_attendance(TraineeId(trainee_id))?;
    Ok(Json(receipt))
}

pub(crate) async fn export_endpoint(
    State(service): State<Arc<TrackerService>>,
) -> Result<impl IntoResponse, AppError> {
    let body = service.export_csv()?;
    let headers = [
        (header::CONTENT_TYPE, mime::TEXT_CSV.essence_str().to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
        ),
    ];
    Ok((StatusCode::OK, headers, body))
}

pub(crate) async fn schedule_endpoint(
    State(service): State<Arc<TrackerService>>,
) -> Json<Vec<SlotRoster>> {
    Json(service.weekly_rosters())
}

pub(crate) async fn day_schedule_endpoint(
    State(service): State<Arc<TrackerService>>,
    Path(day): Path<String>,
) -> Result<Json<DayScheduleResponse>, AppError> {
    let weekday = parse_day(&day).map_err(AppError::InvalidDay)?;
    Ok(Json(DayScheduleResponse {
        day: crate::workflows::schedule::day_name(weekday),
        slots: service.day_rosters(weekday),
    }))
}
