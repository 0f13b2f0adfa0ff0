// tests/stats_tests.rs

use eduportal::models::quiz::{
    ChapterRef, Overview, QuizAttemptRecord, QuizMeta, QuizSort, QuizStatsQuery, SortOrder,
    SubjectRef, TopicRef,
};
use eduportal::stats::{aggregate, query_quiz_stats};

fn quiz(id: &str, subject: Option<&str>, questions: u32) -> QuizMeta {
    QuizMeta {
        id: id.to_string(),
        title: format!("Quiz {}", id),
        difficulty: Some("medium".to_string()),
        question_count: questions,
        time_limit: Some(15),
        topic: Some(TopicRef {
            name: Some(format!("Topic {}", id)),
            chapter: Some(ChapterRef {
                name: Some("Chapter".to_string()),
                subject: subject.map(|s| SubjectRef {
                    name: Some(s.to_string()),
                }),
            }),
        }),
    }
}

fn attempt(quiz_id: &str, score: Option<f64>, completed: bool) -> QuizAttemptRecord {
    QuizAttemptRecord {
        quiz_id: quiz_id.to_string(),
        score,
        completed,
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn attempt_count_matches_processed_attempts() {
    let quizzes = vec![quiz("a", Some("Biology"), 10)];
    let attempts = vec![
        attempt("a", Some(50.0), true),
        attempt("a", None, false),
        attempt("a", Some(100.0), false),
        attempt("a", Some(0.0), true),
    ];

    let report = aggregate(&quizzes, &attempts);

    assert_eq!(report.quiz_stats[0].attempts, 4);
}

#[test]
fn average_score_is_running_mean() {
    let quizzes = vec![quiz("a", Some("Biology"), 10)];
    let attempts = vec![
        attempt("a", Some(80.0), true),
        attempt("a", Some(60.0), true),
        attempt("a", Some(100.0), true),
    ];

    let report = aggregate(&quizzes, &attempts);

    assert_close(report.quiz_stats[0].avg_score, 80.0);
    assert_close(report.quiz_stats[0].completion_rate, 100.0);
}

#[test]
fn completion_rate_is_independent_of_score() {
    let quizzes = vec![quiz("a", Some("Biology"), 10)];
    let attempts = vec![attempt("a", Some(0.0), true), attempt("a", Some(100.0), false)];

    let report = aggregate(&quizzes, &attempts);

    assert_close(report.quiz_stats[0].completion_rate, 50.0);
    assert_close(report.quiz_stats[0].avg_score, 50.0);
}

#[test]
fn missing_score_counts_as_zero() {
    let quizzes = vec![quiz("a", Some("Biology"), 10)];
    let attempts = vec![attempt("a", Some(90.0), true), attempt("a", None, true)];

    let report = aggregate(&quizzes, &attempts);

    assert_close(report.quiz_stats[0].avg_score, 45.0);
}

#[test]
fn unknown_quiz_attempts_are_dropped() {
    let quizzes = vec![quiz("a", Some("Biology"), 10)];
    let known = vec![attempt("a", Some(70.0), true)];
    let mut with_stray = known.clone();
    with_stray.push(attempt("ghost", Some(100.0), true));

    let baseline = aggregate(&quizzes, &known);
    let report = aggregate(&quizzes, &with_stray);

    assert_eq!(report.overview.total_attempts, 1);
    assert_eq!(report.overview, baseline.overview);
    assert_eq!(report.quiz_stats.len(), 1);
}

#[test]
fn overview_is_attempt_weighted() {
    let quizzes = vec![quiz("a", Some("Biology"), 5), quiz("b", Some("Chemistry"), 7)];
    let attempts = vec![
        attempt("a", Some(100.0), true),
        attempt("b", Some(0.0), true),
        attempt("b", Some(0.0), false),
        attempt("b", Some(0.0), true),
    ];

    let report = aggregate(&quizzes, &attempts);

    assert_eq!(report.overview.total_quizzes, 2);
    assert_eq!(report.overview.total_questions, 12);
    assert_eq!(report.overview.total_attempts, 4);
    assert_close(report.overview.avg_score, 25.0);
    // 3 of 4 attempts completed
    assert_close(report.overview.completion_rate, 75.0);
}

#[test]
fn empty_input_yields_zeroed_overview() {
    let report = aggregate(&[], &[]);

    assert!(report.quiz_stats.is_empty());
    assert!(report.subject_stats.is_empty());
    assert_eq!(
        report.overview,
        Overview {
            total_quizzes: 0,
            total_questions: 0,
            total_attempts: 0,
            avg_score: 0.0,
            completion_rate: 0.0,
        }
    );
}

#[test]
fn quizzes_without_attempts_are_zeroed_not_nan() {
    let quizzes = vec![quiz("a", Some("Biology"), 3)];

    let report = aggregate(&quizzes, &[]);

    let stat = &report.quiz_stats[0];
    assert_eq!(stat.attempts, 0);
    assert_eq!(stat.avg_score, 0.0);
    assert_eq!(stat.completion_rate, 0.0);
    assert_eq!(report.overview.total_quizzes, 1);
    assert_eq!(report.overview.total_questions, 3);
    assert_eq!(report.overview.avg_score, 0.0);
}

#[test]
fn aggregation_is_idempotent() {
    let quizzes = vec![quiz("a", Some("Biology"), 5), quiz("b", None, 2)];
    let attempts = vec![
        attempt("a", Some(65.0), true),
        attempt("b", Some(20.0), false),
        attempt("a", None, false),
    ];

    assert_eq!(aggregate(&quizzes, &attempts), aggregate(&quizzes, &attempts));
}

#[test]
fn missing_relations_become_unknown() {
    let mut bare = quiz("a", None, 1);
    bare.topic = None;
    let no_subject = quiz("b", None, 1);

    let report = aggregate(&[bare, no_subject], &[]);

    assert_eq!(report.quiz_stats[0].subject_name, "Unknown");
    assert_eq!(report.quiz_stats[0].topic_name, "Unknown");
    assert_eq!(report.quiz_stats[1].subject_name, "Unknown");
    assert_eq!(report.quiz_stats[1].topic_name, "Topic b");
    assert_eq!(report.subject_stats.len(), 1);
    assert_eq!(report.subject_stats[0].quiz_count, 2);
}

#[test]
fn unattempted_quizzes_dilute_subject_averages() {
    let quizzes = vec![quiz("a", Some("Maths"), 4), quiz("b", Some("Maths"), 6)];
    let attempts = vec![attempt("a", Some(80.0), true)];

    let report = aggregate(&quizzes, &attempts);

    let maths = &report.subject_stats[0];
    assert_eq!(maths.id, "Maths");
    assert_eq!(maths.quiz_count, 2);
    assert_eq!(maths.total_attempts, 1);
    assert_close(maths.avg_score, 40.0);
    assert_close(maths.avg_completion_rate, 50.0);
}

#[test]
fn subject_means_are_unweighted_across_quizzes() {
    let quizzes = vec![quiz("a", Some("Physics"), 1), quiz("b", Some("Physics"), 1)];
    let attempts = vec![
        attempt("a", Some(100.0), true),
        attempt("b", Some(0.0), false),
        attempt("b", Some(0.0), false),
        attempt("b", Some(0.0), false),
    ];

    let report = aggregate(&quizzes, &attempts);

    // Quiz a and b count once each, whatever their attempt counts.
    assert_close(report.subject_stats[0].avg_score, 50.0);
    assert_close(report.subject_stats[0].avg_completion_rate, 50.0);
    // The overview, by contrast, weighs by attempts.
    assert_close(report.overview.avg_score, 25.0);
}

#[test]
fn subjects_sorted_by_total_attempts() {
    let quizzes = vec![
        quiz("a", Some("Biology"), 1),
        quiz("b", Some("History"), 1),
        quiz("c", Some("Chemistry"), 1),
        quiz("d", Some("Art"), 1),
    ];
    let attempts = vec![
        attempt("a", Some(10.0), true),
        attempt("c", Some(10.0), true),
        attempt("c", Some(10.0), true),
        attempt("c", Some(10.0), true),
    ];

    let report = aggregate(&quizzes, &attempts);

    let names: Vec<&str> = report.subject_stats.iter().map(|s| s.name.as_str()).collect();
    // Ties (History, Art) keep first-seen order.
    assert_eq!(names, vec!["Chemistry", "Biology", "History", "Art"]);
}

#[test]
fn duplicate_quiz_ids_keep_first_entry() {
    let mut second = quiz("a", Some("Chemistry"), 99);
    second.title = "Duplicate".to_string();
    let quizzes = vec![quiz("a", Some("Biology"), 5), second];

    let report = aggregate(&quizzes, &[attempt("a", Some(40.0), true)]);

    assert_eq!(report.quiz_stats.len(), 1);
    assert_eq!(report.quiz_stats[0].title, "Quiz a");
    assert_eq!(report.quiz_stats[0].attempts, 1);
}

#[test]
fn catalog_json_shape_is_accepted() {
    let quizzes: Vec<QuizMeta> = serde_json::from_value(serde_json::json!([
        {
            "id": "q-1",
            "title": "Photosynthesis",
            "difficulty": "easy",
            "question_count": 8,
            "time_limit": 20,
            "topics": {
                "name": "Plants",
                "chapters": { "name": "Life Processes", "subjects": { "name": "Biology" } }
            }
        },
        { "id": "q-2", "title": "Orphan", "questionCount": 2, "topic": null }
    ]))
    .unwrap();
    let attempts: Vec<QuizAttemptRecord> = serde_json::from_value(serde_json::json!([
        { "quiz_id": "q-1", "score": 75, "completed": true },
        { "quizId": "q-2", "score": null, "completed": false }
    ]))
    .unwrap();

    let report = aggregate(&quizzes, &attempts);

    assert_eq!(report.quiz_stats[0].subject_name, "Biology");
    assert_eq!(report.quiz_stats[0].topic_name, "Plants");
    assert_eq!(report.quiz_stats[0].question_count, 8);
    assert_eq!(report.quiz_stats[0].time_limit, Some(20));
    assert_eq!(report.quiz_stats[1].subject_name, "Unknown");
    assert_eq!(report.overview.total_questions, 10);
    assert_close(report.overview.avg_score, 37.5);
}

fn dashboard_stats() -> Vec<eduportal::models::quiz::QuizStat> {
    let mut easy = quiz("c", Some("Chemistry"), 1);
    easy.difficulty = Some("Easy".to_string());
    let quizzes = vec![quiz("a", Some("Biology"), 1), quiz("b", Some("Biology"), 1), easy];
    let attempts = vec![
        attempt("a", Some(30.0), true),
        attempt("b", Some(90.0), true),
        attempt("b", Some(70.0), false),
        attempt("c", Some(60.0), true),
        attempt("c", Some(60.0), true),
        attempt("c", Some(60.0), true),
    ];
    aggregate(&quizzes, &attempts).quiz_stats
}

#[test]
fn quiz_list_defaults_to_most_attempted_first() {
    let stats = dashboard_stats();

    let page = query_quiz_stats(&stats, &QuizStatsQuery::default());

    let ids: Vec<&str> = page.items.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "b", "a"]);
    assert_eq!(page.total, 3);
    assert_eq!(page.page, 1);
    assert_eq!(page.per_page, 20);
}

#[test]
fn quiz_list_filters_and_sorts() {
    let stats = dashboard_stats();

    let query = QuizStatsQuery {
        subject: Some("biology".to_string()),
        sort: QuizSort::AvgScore,
        order: SortOrder::Asc,
        ..Default::default()
    };
    let page = query_quiz_stats(&stats, &query);
    let ids: Vec<&str> = page.items.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);

    let easy = query_quiz_stats(
        &stats,
        &QuizStatsQuery {
            difficulty: Some("EASY".to_string()),
            ..Default::default()
        },
    );
    assert_eq!(easy.total, 1);
    assert_eq!(easy.items[0].id, "c");

    let search = query_quiz_stats(
        &stats,
        &QuizStatsQuery {
            q: Some(" quiz B ".to_string()),
            ..Default::default()
        },
    );
    assert_eq!(search.total, 1);
    assert_eq!(search.items[0].id, "b");
}

#[test]
fn quiz_list_pages_and_clamps() {
    let stats = dashboard_stats();

    let second = query_quiz_stats(
        &stats,
        &QuizStatsQuery {
            sort: QuizSort::Title,
            order: SortOrder::Asc,
            page: Some(2),
            per_page: Some(2),
            ..Default::default()
        },
    );
    assert_eq!(second.total, 3);
    assert_eq!(second.items.len(), 1);
    assert_eq!(second.items[0].id, "c");

    let clamped = query_quiz_stats(
        &stats,
        &QuizStatsQuery {
            page: Some(0),
            per_page: Some(0),
            ..Default::default()
        },
    );
    assert_eq!(clamped.page, 1);
    assert_eq!(clamped.per_page, 1);
    assert_eq!(clamped.items.len(), 1);

    let huge = query_quiz_stats(
        &stats,
        &QuizStatsQuery {
            per_page: Some(10_000),
            ..Default::default()
        },
    );
    assert_eq!(huge.per_page, 100);

    let past_end = query_quiz_stats(
        &stats,
        &QuizStatsQuery {
            page: Some(9),
            ..Default::default()
        },
    );
    assert!(past_end.items.is_empty());
    assert_eq!(past_end.total, 3);
}
