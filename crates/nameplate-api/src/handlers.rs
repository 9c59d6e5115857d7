use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use nameplate_core::{PersonDto, PersonId, PreviewDto};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Body for creating or previewing a person. The email is always derived,
/// so any other field is rejected. Handlers take the extractor as a
/// `Result` so rejections reach the client as an `ErrorBody`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NameRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HealthDto {
    pub status: String,
}

pub async fn health() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
    })
}

pub async fn create_person(
    State(state): State<AppState>,
    request: Result<Json<NameRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PersonDto>), ApiError> {
    let Json(request) = request?;
    let draft = state.naming().draft(&request.name)?;
    let store = state.store().lock().await;
    let person = store.people().create(Utc::now().timestamp(), draft)?;
    info!(id = %person.id, "person created");
    Ok((StatusCode::CREATED, Json(person.into())))
}

pub async fn list_people(State(state): State<AppState>) -> Result<Json<Vec<PersonDto>>, ApiError> {
    let store = state.store().lock().await;
    let people = store.people().list_all()?;
    Ok(Json(people.into_iter().map(PersonDto::from).collect()))
}

pub async fn get_person(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<PersonDto>, ApiError> {
    let Path(id) = id?;
    let store = state.store().lock().await;
    let person = store.people().require(PersonId::from_i64(id))?;
    Ok(Json(person.into()))
}

pub async fn preview(
    State(state): State<AppState>,
    request: Result<Json<NameRequest>, JsonRejection>,
) -> Result<Json<PreviewDto>, ApiError> {
    let Json(request) = request?;
    let draft = state.naming().draft(&request.name)?;
    debug!(email = %draft.email, "preview derived");
    Ok(Json(draft.into()))
}
