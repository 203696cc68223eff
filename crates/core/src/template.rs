use thiserror::Error;

pub const ORIGINAL_NAME_TOKEN: &str = "[original-name]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart {
    Literal(String),
    Counter { start: u64, width: usize },
    OriginalName,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("ファイル名に使用できない文字が含まれています: {0:?}")]
    InvalidCharacter(char),
    #[error("カウンタの開始値が大きすぎます: {0}")]
    CounterOverflow(String),
}

pub fn validate_template(input: &str) -> Result<(), RuleError> {
    parse_template(input).map(|_| ())
}

/// 最初の数字連続のみカウンタとして扱う。2つ目以降はリテラル。
pub fn parse_template(input: &str) -> Result<Vec<TemplatePart>, RuleError> {
    let mut parts = Vec::new();
    let mut literal = String::new();
    let mut counter_seen = false;
    let mut rest = input;

    while !rest.is_empty() {
        if let Some(stripped) = rest.strip_prefix(ORIGINAL_NAME_TOKEN) {
            flush_literal(&mut parts, &mut literal);
            parts.push(TemplatePart::OriginalName);
            rest = stripped;
            continue;
        }

        let Some(ch) = rest.chars().next() else {
            break;
        };

        if is_forbidden_char(ch) {
            return Err(RuleError::InvalidCharacter(ch));
        }

        if ch.is_ascii_digit() {
            let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
            rest = &rest[digits.len()..];
            if counter_seen {
                literal.push_str(&digits);
            } else {
                let start = digits
                    .parse::<u64>()
                    .map_err(|_| RuleError::CounterOverflow(digits.clone()))?;
                flush_literal(&mut parts, &mut literal);
                parts.push(TemplatePart::Counter {
                    start,
                    width: digits.len(),
                });
                counter_seen = true;
            }
            continue;
        }

        literal.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    flush_literal(&mut parts, &mut literal);
    Ok(parts)
}

pub fn render_template(parts: &[TemplatePart], index: usize, original_name: &str) -> String {
    if parts.is_empty() {
        return original_name.to_string();
    }

    let mut output = String::new();
    for part in parts {
        match part {
            TemplatePart::Literal(s) => output.push_str(s),
            TemplatePart::Counter { start, width } => {
                let value = start.saturating_add(index as u64);
                output.push_str(&format!("{:0w$}", value, w = *width));
            }
            TemplatePart::OriginalName => output.push_str(original_name),
        }
    }

    output
}

fn flush_literal(parts: &mut Vec<TemplatePart>, literal: &mut String) {
    if !literal.is_empty() {
        parts.push(TemplatePart::Literal(std::mem::take(literal)));
    }
}

pub(crate) fn is_forbidden_char(ch: char) -> bool {
    matches!(ch, '/' | '\\' | '\0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_start_and_width_from_digit_run() {
        let parts = parse_template("file-01").expect("must parse");
        assert_eq!(
            parts,
            vec![
                TemplatePart::Literal("file-".to_string()),
                TemplatePart::Counter { start: 1, width: 2 },
            ]
        );
    }

    #[test]
    fn parse_keeps_later_digit_runs_as_literal() {
        let parts = parse_template("v1-part01").expect("must parse");
        assert_eq!(
            parts,
            vec![
                TemplatePart::Literal("v".to_string()),
                TemplatePart::Counter { start: 1, width: 1 },
                TemplatePart::Literal("-part01".to_string()),
            ]
        );
    }

    #[test]
    fn parse_recognizes_original_name_token() {
        let parts = parse_template("[original-name]_001").expect("must parse");
        assert_eq!(
            parts,
            vec![
                TemplatePart::OriginalName,
                TemplatePart::Literal("_".to_string()),
                TemplatePart::Counter { start: 1, width: 3 },
            ]
        );
    }

    #[test]
    fn parse_rejects_path_separator() {
        let err = parse_template("a/b").expect_err("must fail");
        assert_eq!(err, RuleError::InvalidCharacter('/'));
    }

    #[test]
    fn parse_rejects_counter_beyond_u64() {
        let err = parse_template("x99999999999999999999").expect_err("must fail");
        assert!(matches!(err, RuleError::CounterOverflow(_)));
    }

    #[test]
    fn render_pads_counter_to_token_width() {
        let parts = parse_template("file-01").expect("must parse");
        assert_eq!(render_template(&parts, 0, "a"), "file-01");
        assert_eq!(render_template(&parts, 1, "b"), "file-02");
        assert_eq!(render_template(&parts, 99, "c"), "file-100");
    }

    #[test]
    fn render_starts_from_literal_value() {
        let parts = parse_template("0").expect("must parse");
        assert_eq!(render_template(&parts, 0, "a"), "0");
        assert_eq!(render_template(&parts, 3, "b"), "3");
    }

    #[test]
    fn render_empty_template_echoes_original_name() {
        let parts = parse_template("").expect("must parse");
        assert_eq!(render_template(&parts, 0, "a"), "a");
        assert_eq!(render_template(&parts, 5, "b"), "b");
    }

    #[test]
    fn render_without_counter_collapses_to_fixed_name() {
        let parts = parse_template("fixed").expect("must parse");
        assert_eq!(render_template(&parts, 0, "x"), "fixed");
        assert_eq!(render_template(&parts, 1, "y"), "fixed");
    }

    #[test]
    fn render_expands_original_name_token_per_entry() {
        let parts = parse_template("[original-name]-01").expect("must parse");
        assert_eq!(render_template(&parts, 0, "holiday"), "holiday-01");
        assert_eq!(render_template(&parts, 1, "work"), "work-02");
    }
}
