// src/handlers/subject.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use validator::Validate;

use crate::{
    error::AppError, matcher::resolve_all, models::subject::ResolveSubjectsRequest,
    pathways::Pathways,
};

/// Resolves subject keys against the posted catalog snapshot.
/// Keys without a catalog match fall back to the static subject table.
pub async fn resolve_subjects(
    State(pathways): State<Arc<Pathways>>,
    Json(req): Json<ResolveSubjectsRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let subjects = resolve_all(&req.keys, &req.catalog, &pathways.subjects);

    Ok(Json(subjects))
}
