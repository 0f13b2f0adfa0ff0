// src/stats.rs

//! Quiz statistics for the admin dashboard.
//!
//! All figures are running means updated once per attempt; nothing is
//! recomputed by re-scanning history.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::{
    models::quiz::{
        Overview, QuizAttemptRecord, QuizMeta, QuizSort, QuizStat, QuizStatsPage, QuizStatsQuery,
        SortOrder, StatsReport, SubjectStat,
    },
    utils::fields::{UNKNOWN, field_or},
};

pub const DEFAULT_PER_PAGE: usize = 20;
pub const MAX_PER_PAGE: usize = 100;

/// Folds `attempts` into per-quiz, per-subject and overall statistics.
///
/// Never fails: unknown quiz ids are dropped, missing scores count as 0,
/// and empty inputs produce a zeroed report.
pub fn aggregate(quizzes: &[QuizMeta], attempts: &[QuizAttemptRecord]) -> StatsReport {
    let quiz_stats = quiz_stats(quizzes, attempts);
    let subject_stats = subject_stats(&quiz_stats);
    let overview = overview(&quiz_stats);

    StatsReport {
        quiz_stats,
        subject_stats,
        overview,
    }
}

/// Running mean after adding `value` as the `n`-th sample.
fn running_mean(mean: f64, n: u64, value: f64) -> f64 {
    (mean * (n - 1) as f64 + value) / n as f64
}

fn quiz_stats(quizzes: &[QuizMeta], attempts: &[QuizAttemptRecord]) -> Vec<QuizStat> {
    let mut stats: Vec<QuizStat> = Vec::with_capacity(quizzes.len());
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(quizzes.len());

    for quiz in quizzes {
        if index.contains_key(quiz.id.as_str()) {
            tracing::debug!("Duplicate quiz {} ignored", quiz.id);
            continue;
        }
        index.insert(quiz.id.as_str(), stats.len());
        stats.push(QuizStat {
            id: quiz.id.clone(),
            title: quiz.title.clone(),
            subject_name: field_or(quiz, QuizMeta::subject_name, UNKNOWN),
            topic_name: field_or(quiz, QuizMeta::topic_name, UNKNOWN),
            difficulty: quiz.difficulty.clone(),
            completion_rate: 0.0,
            avg_score: 0.0,
            attempts: 0,
            question_count: quiz.question_count,
            time_limit: quiz.time_limit,
        });
    }

    let mut dropped = 0usize;
    for attempt in attempts {
        let Some(&i) = index.get(attempt.quiz_id.as_str()) else {
            dropped += 1;
            continue;
        };
        let stat = &mut stats[i];
        stat.attempts += 1;
        let completed = if attempt.completed { 100.0 } else { 0.0 };
        stat.completion_rate = running_mean(stat.completion_rate, stat.attempts, completed);
        stat.avg_score = running_mean(stat.avg_score, stat.attempts, attempt.score.unwrap_or(0.0));
    }

    if dropped > 0 {
        tracing::debug!("Dropped {} attempts referencing unknown quizzes", dropped);
    }

    stats
}

/// Groups quiz stats by subject name.
///
/// Each quiz weighs the same in the subject averages, including quizzes
/// nobody has attempted yet, which pull the averages toward zero.
fn subject_stats(quiz_stats: &[QuizStat]) -> Vec<SubjectStat> {
    let mut subjects: Vec<SubjectStat> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for quiz in quiz_stats {
        let i = *index.entry(quiz.subject_name.as_str()).or_insert_with(|| {
            subjects.push(SubjectStat {
                id: quiz.subject_name.clone(),
                name: quiz.subject_name.clone(),
                quiz_count: 0,
                total_attempts: 0,
                avg_completion_rate: 0.0,
                avg_score: 0.0,
            });
            subjects.len() - 1
        });

        let subject = &mut subjects[i];
        subject.quiz_count += 1;
        subject.total_attempts += quiz.attempts;
        subject.avg_completion_rate =
            running_mean(subject.avg_completion_rate, subject.quiz_count, quiz.completion_rate);
        subject.avg_score = running_mean(subject.avg_score, subject.quiz_count, quiz.avg_score);
    }

    // Stable: ties keep first-seen order.
    subjects.sort_by(|a, b| b.total_attempts.cmp(&a.total_attempts));
    subjects
}

fn overview(quiz_stats: &[QuizStat]) -> Overview {
    let total_attempts: u64 = quiz_stats.iter().map(|q| q.attempts).sum();

    let (avg_score, completion_rate) = if total_attempts == 0 {
        (0.0, 0.0)
    } else {
        let weighted_score: f64 = quiz_stats
            .iter()
            .map(|q| q.avg_score * q.attempts as f64)
            .sum();
        let completed: f64 = quiz_stats
            .iter()
            .map(|q| q.completion_rate * q.attempts as f64 / 100.0)
            .sum();
        (
            weighted_score / total_attempts as f64,
            completed / total_attempts as f64 * 100.0,
        )
    };

    Overview {
        total_quizzes: quiz_stats.len() as u64,
        total_questions: quiz_stats.iter().map(|q| u64::from(q.question_count)).sum(),
        total_attempts,
        avg_score,
        completion_rate,
    }
}

/// Filters, sorts and pages quiz stats for the dashboard table.
pub fn query_quiz_stats(quiz_stats: &[QuizStat], query: &QuizStatsQuery) -> QuizStatsPage {
    let subject = query.subject.as_deref().map(str::to_lowercase);
    let difficulty = query.difficulty.as_deref().map(str::to_lowercase);
    let keyword = query
        .q
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_lowercase);

    let mut rows: Vec<&QuizStat> = quiz_stats
        .iter()
        .filter(|q| subject.as_ref().is_none_or(|s| q.subject_name.to_lowercase() == *s))
        .filter(|q| {
            difficulty.as_ref().is_none_or(|d| {
                q.difficulty.as_deref().is_some_and(|qd| qd.to_lowercase() == *d)
            })
        })
        .filter(|q| keyword.as_ref().is_none_or(|k| q.title.to_lowercase().contains(k.as_str())))
        .collect();

    rows.sort_by(|a, b| {
        let ord = compare(a, b, query.sort);
        match query.order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });

    let per_page = query
        .per_page
        .unwrap_or(DEFAULT_PER_PAGE)
        .clamp(1, MAX_PER_PAGE);
    let page = query.page.unwrap_or(1).max(1);
    let total = rows.len();

    let items = rows
        .into_iter()
        .skip((page - 1).saturating_mul(per_page))
        .take(per_page)
        .cloned()
        .collect();

    QuizStatsPage {
        items,
        total,
        page,
        per_page,
    }
}

fn compare(a: &QuizStat, b: &QuizStat, sort: QuizSort) -> Ordering {
    match sort {
        QuizSort::Attempts => a.attempts.cmp(&b.attempts),
        QuizSort::AvgScore => a.avg_score.total_cmp(&b.avg_score),
        QuizSort::CompletionRate => a.completion_rate.total_cmp(&b.completion_rate),
        QuizSort::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
    }
}
