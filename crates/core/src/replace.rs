use crate::template::{is_forbidden_char, RuleError};
use serde::{Deserialize, Serialize};

/// 旧名・新名それぞれの中の一致区間 (バイト位置)。表示側がハイライトに使う。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchSpan {
    pub original_start: usize,
    pub original_end: usize,
    pub proposed_start: usize,
    pub proposed_end: usize,
}

pub fn render_replace(
    search: &str,
    replace: &str,
    original_name: &str,
) -> (String, Vec<MatchSpan>) {
    if search.is_empty() {
        return (original_name.to_string(), Vec::new());
    }

    let mut output = String::with_capacity(original_name.len());
    let mut spans = Vec::new();
    let mut cursor = 0usize;

    while let Some(pos) = original_name[cursor..].find(search) {
        let match_start = cursor + pos;
        output.push_str(&original_name[cursor..match_start]);

        let proposed_start = output.len();
        output.push_str(replace);
        spans.push(MatchSpan {
            original_start: match_start,
            original_end: match_start + search.len(),
            proposed_start,
            proposed_end: output.len(),
        });

        cursor = match_start + search.len();
    }

    output.push_str(&original_name[cursor..]);
    (output, spans)
}

pub fn validate_replacement(replace: &str) -> Result<(), RuleError> {
    match replace.chars().find(|ch| is_forbidden_char(*ch)) {
        Some(ch) => Err(RuleError::InvalidCharacter(ch)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_search_is_identity_without_spans() {
        let (name, spans) = render_replace("", "xyz", "readme");
        assert_eq!(name, "readme");
        assert!(spans.is_empty());
    }

    #[test]
    fn replaces_every_occurrence() {
        let (name, spans) = render_replace("a", "oo", "banana");
        assert_eq!(name, "boonoonoo");
        assert_eq!(spans.len(), 3);
    }

    #[test]
    fn missing_search_leaves_name_unchanged() {
        let (name, spans) = render_replace("zzz", "x", "readme");
        assert_eq!(name, "readme");
        assert!(spans.is_empty());
    }

    #[test]
    fn spans_cover_old_and_new_substrings() {
        let (name, spans) = render_replace("read", "skim", "readme-read");
        assert_eq!(name, "skimme-skim");
        assert_eq!(spans.len(), 2);

        let first = spans[0];
        assert_eq!(&"readme-read"[first.original_start..first.original_end], "read");
        assert_eq!(&name[first.proposed_start..first.proposed_end], "skim");

        let second = spans[1];
        assert_eq!(
            &"readme-read"[second.original_start..second.original_end],
            "read"
        );
        assert_eq!(&name[second.proposed_start..second.proposed_end], "skim");
    }

    #[test]
    fn empty_replacement_yields_zero_width_span() {
        let (name, spans) = render_replace("me", "", "readme");
        assert_eq!(name, "read");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].proposed_start, spans[0].proposed_end);
    }

    #[test]
    fn replacement_with_path_separator_is_rejected() {
        let err = validate_replacement("a/b").expect_err("must fail");
        assert_eq!(err, RuleError::InvalidCharacter('/'));
        validate_replacement("a_b").expect("must pass");
    }
}
