// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A quiz row as fetched from the hosted catalog, with its nested
/// topic -> chapter -> subject relation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizMeta {
    pub id: String,

    pub title: String,

    /// Difficulty label (e.g., "easy", "hard"). Passed through untouched.
    #[serde(default)]
    pub difficulty: Option<String>,

    #[serde(default, alias = "question_count")]
    pub question_count: u32,

    /// Time limit in minutes.
    #[serde(default, alias = "time_limit")]
    pub time_limit: Option<u32>,

    /// The catalog names the relation `topics` even though it is one row.
    #[serde(default, alias = "topics")]
    pub topic: Option<TopicRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopicRef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "chapters")]
    pub chapter: Option<ChapterRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChapterRef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "subjects")]
    pub subject: Option<SubjectRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubjectRef {
    #[serde(default)]
    pub name: Option<String>,
}

impl QuizMeta {
    pub fn topic_name(&self) -> Option<&str> {
        self.topic.as_ref()?.name.as_deref()
    }

    pub fn subject_name(&self) -> Option<&str> {
        self.topic.as_ref()?.chapter.as_ref()?.subject.as_ref()?.name.as_deref()
    }
}

/// One attempt at a quiz by some student.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttemptRecord {
    #[serde(alias = "quiz_id")]
    pub quiz_id: String,

    /// Percentage score, 0-100. Absent for abandoned attempts.
    #[serde(default)]
    pub score: Option<f64>,

    #[serde(default)]
    pub completed: bool,
}

/// Per-quiz rollup shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizStat {
    pub id: String,
    pub title: String,
    pub subject_name: String,
    pub topic_name: String,
    pub difficulty: Option<String>,
    pub completion_rate: f64,
    pub avg_score: f64,
    pub attempts: u64,
    pub question_count: u32,
    pub time_limit: Option<u32>,
}

/// Per-subject rollup derived from the quiz rollups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectStat {
    /// Same as `name`; subjects are grouped by display name.
    pub id: String,
    pub name: String,
    pub quiz_count: u64,
    pub total_attempts: u64,
    pub avg_completion_rate: f64,
    pub avg_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_quizzes: u64,
    pub total_questions: u64,
    pub total_attempts: u64,
    pub avg_score: f64,
    pub completion_rate: f64,
}

/// Everything the statistics dashboard needs, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    pub quiz_stats: Vec<QuizStat>,
    pub subject_stats: Vec<SubjectStat>,
    pub overview: Overview,
}

/// DTO for posting a data snapshot to the statistics endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct StatsRequest {
    #[validate(length(max = 5000))]
    pub quizzes: Vec<QuizMeta>,
    #[validate(length(max = 100000))]
    pub attempts: Vec<QuizAttemptRecord>,
}

/// Field the quiz list is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuizSort {
    #[default]
    Attempts,
    AvgScore,
    CompletionRate,
    Title,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Query parameters for shaping the quiz list on the dashboard.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizStatsQuery {
    pub subject: Option<String>,
    pub difficulty: Option<String>,
    /// Title search keyword.
    pub q: Option<String>,
    #[serde(default)]
    pub sort: QuizSort,
    #[serde(default)]
    pub order: SortOrder,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

/// One page of quiz rollups.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizStatsPage {
    pub items: Vec<QuizStat>,
    /// Number of rows matching the filters, before paging.
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
}

/// Response body of the statistics endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub overview: Overview,
    pub subject_stats: Vec<SubjectStat>,
    pub quiz_stats: QuizStatsPage,
}
