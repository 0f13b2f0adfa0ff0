// src/handlers/stats.rs

use axum::{
    Extension, Json,
    extract::Query,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::quiz::{QuizStatsQuery, StatsRequest, StatsResponse},
    stats::{aggregate, query_quiz_stats},
    utils::jwt::Claims,
};

/// Computes dashboard statistics from a snapshot of quizzes and attempts.
///
/// * Overview and subject rollups always cover the whole snapshot.
/// * The quiz list is filtered, sorted and paged per the query string.
///
/// Admin only.
pub async fn quiz_stats(
    Extension(claims): Extension<Claims>,
    Query(query): Query<QuizStatsQuery>,
    Json(req): Json<StatsRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let report = aggregate(&req.quizzes, &req.attempts);
    let page = query_quiz_stats(&report.quiz_stats, &query);

    tracing::info!(
        "Stats for {}: {} quizzes, {} attempts, {} subjects",
        claims.sub,
        report.overview.total_quizzes,
        report.overview.total_attempts,
        report.subject_stats.len()
    );

    Ok(Json(StatsResponse {
        generated_at: chrono::Utc::now(),
        overview: report.overview,
        subject_stats: report.subject_stats,
        quiz_stats: page,
    }))
}
