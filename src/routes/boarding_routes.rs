use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::info;

use crate::dto::boarding_dto::BoardingRequest;
use crate::models::boarding::Boarding;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::validate_uuid;

pub fn create_boarding_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_boarding))
        .route("/:id", get(get_boarding))
}

async fn create_boarding(
    State(state): State<AppState>,
    payload: Result<Json<BoardingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Boarding>), AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let boarding = state.boardings.save(request).await?;
    info!("📦 Boarding creado: {}", boarding.id);
    Ok((StatusCode::CREATED, Json(boarding)))
}

async fn get_boarding(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Boarding>, AppError> {
    // Un id que no es UUID se trata igual que uno inexistente
    let uuid = validate_uuid(&id).map_err(|_| not_found_error("Boarding", &id))?;

    state
        .boardings
        .find_by_id(uuid)
        .await?
        .map(Json)
        .ok_or_else(|| not_found_error("Boarding", &id))
}
