use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    db,
    error::{AppError, AppResult},
    models::{CreatePlant, Plant, UpdatePlantStock},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_plants(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Vec<Plant>>)> {
    let plants = db::fetch_all_plants(&state.db).await?;

    info!(count = plants.len(), "Listed plants");

    Ok((StatusCode::OK, Json(plants)))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_plant(
    State(state): State<AppState>,
    payload: Result<Json<CreatePlant>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Plant>)> {
    // A missing or mistyped field is the client's fault, not a server fault
    let Json(payload) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let plant = db::insert_plant(&state.db, &payload).await?;

    info!(id = plant.id, name = %plant.name, "Created plant");

    Ok((StatusCode::CREATED, Json(plant)))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_plant(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<(StatusCode, Json<Plant>)> {
    let plant = db::fetch_plant_by_id(&state.db, id).await?;

    info!(id, "Fetched plant");

    Ok((StatusCode::OK, Json(plant)))
}

// ── Update stock ──────────────────────────────────────────────────────────────

pub async fn update_plant_stock(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdatePlantStock>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Plant>)> {
    let Json(payload) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let plant = db::update_plant_stock(&state.db, id, payload.is_in_stock).await?;

    info!(id, is_in_stock = plant.is_in_stock, "Updated plant stock");

    Ok((StatusCode::OK, Json(plant)))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_plant(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    db::delete_plant(&state.db, id).await?;

    info!(id, "Deleted plant");

    Ok(StatusCode::NO_CONTENT)
}
