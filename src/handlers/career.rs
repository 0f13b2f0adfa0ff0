// src/handlers/career.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    error::AppError,
    matcher::resolve_all,
    models::{career::Career, subject::CareerSubjectsRequest},
    pathways::Pathways,
};

/// Query parameters for listing careers.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
    pub q: Option<String>,
}

/// Lists careers, optionally filtered by category and search keyword.
pub async fn list_careers(
    State(pathways): State<Arc<Pathways>>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let careers: Vec<Career> = pathways
        .search(params.category.as_deref(), params.q.as_deref())
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(careers))
}

/// Retrieves a single career by ID.
pub async fn get_career(
    State(pathways): State<Arc<Pathways>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let career = pathways
        .career(&id)
        .ok_or(AppError::NotFound("Career not found".to_string()))?;

    Ok(Json(career.clone()))
}

/// Resolves a career's recommended subjects against the posted catalog.
pub async fn career_subjects(
    State(pathways): State<Arc<Pathways>>,
    Path(id): Path<String>,
    Json(req): Json<CareerSubjectsRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let career = pathways
        .career(&id)
        .ok_or(AppError::NotFound("Career not found".to_string()))?;

    let subjects = resolve_all(&career.subjects, &req.catalog, &pathways.subjects);

    Ok(Json(subjects))
}
