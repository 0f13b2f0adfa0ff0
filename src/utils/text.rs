// src/utils/text.rs

use std::sync::LazyLock;

use regex::Regex;

static NON_ALNUM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-z0-9]").expect("static pattern is valid")
});

/// Lowercases `input` and strips everything outside `[a-z0-9]`.
///
/// "Computer Science" and "computer-science" both become "computerscience".
pub fn normalize(input: &str) -> String {
    NON_ALNUM.replace_all(&input.to_lowercase(), "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn strips_punctuation_and_case() {
        assert_eq!(normalize("Computer Science"), "computerscience");
        assert_eq!(normalize("computer-science"), "computerscience");
        assert_eq!(normalize("A-Level Maths (Pure)"), "alevelmathspure");
    }

    #[test]
    fn non_ascii_letters_are_dropped() {
        assert_eq!(normalize("Économie"), "conomie");
        assert_eq!(normalize("---"), "");
    }
}
