// src/utils/fields.rs

/// Placeholder shown when a nested catalog relation is missing.
pub const UNKNOWN: &str = "Unknown";

/// Reads a nested optional field through `path`, falling back to `default`.
///
/// Every relation lookup in the statistics goes through here so the
/// fallback policy lives in one place.
pub fn field_or<'a, T: ?Sized>(
    root: &'a T,
    path: impl FnOnce(&'a T) -> Option<&'a str>,
    default: &str,
) -> String {
    path(root).unwrap_or(default).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::quiz::{ChapterRef, QuizMeta, SubjectRef, TopicRef};

    fn quiz(topic: Option<TopicRef>) -> QuizMeta {
        QuizMeta {
            id: "q1".into(),
            title: "Cells".into(),
            difficulty: None,
            question_count: 0,
            time_limit: None,
            topic,
        }
    }

    #[test]
    fn missing_links_fall_back() {
        let bare = quiz(None);
        assert_eq!(field_or(&bare, QuizMeta::subject_name, UNKNOWN), "Unknown");
        assert_eq!(field_or(&bare, QuizMeta::topic_name, UNKNOWN), "Unknown");

        let no_subject = quiz(Some(TopicRef {
            name: Some("Cells".into()),
            chapter: Some(ChapterRef { name: Some("Life".into()), subject: None }),
        }));
        assert_eq!(field_or(&no_subject, QuizMeta::topic_name, UNKNOWN), "Cells");
        assert_eq!(field_or(&no_subject, QuizMeta::subject_name, UNKNOWN), "Unknown");
    }

    #[test]
    fn full_path_resolves() {
        let full = quiz(Some(TopicRef {
            name: Some("Cells".into()),
            chapter: Some(ChapterRef {
                name: Some("Life".into()),
                subject: Some(SubjectRef { name: Some("Biology".into()) }),
            }),
        }));
        assert_eq!(field_or(&full, QuizMeta::subject_name, UNKNOWN), "Biology");
    }
}
