//! Rendering of the final `.env` document.
//!
//! Substitutes each `{{KEY}}` placeholder in the output template with
//! the answered (or defaulted) value, double-quoted when non-empty.

use std::collections::HashMap;

use crate::declarations::ParseResult;

/// Collected values keyed by variable key. Missing or empty entries
/// fall back to the variable's default, then to the empty string.
pub type Answers = HashMap<String, String>;

/// Renders the output document from a parse result and the collected
/// answers.
///
/// Each declared variable's `{{KEY}}` placeholder is substituted
/// exactly once. Non-empty values are wrapped in double quotes with
/// embedded quotes escaped; variables without an answer or default
/// render as a bare `KEY=` assignment.
#[must_use]
pub fn render(parsed: &ParseResult, answers: &Answers) -> String {
    let mut output = parsed.output_template.clone();

    for variable in &parsed.variables {
        let value = answers
            .get(&variable.key)
            .map(String::as_str)
            .filter(|answer| !answer.is_empty())
            .or(variable.default.as_deref())
            .unwrap_or("");

        let replacement = if value.is_empty() {
            String::new()
        } else {
            format!("\"{}\"", value.replace('"', "\\\""))
        };

        let placeholder = format!("{{{{{}}}}}", variable.key);
        output = output.replacen(&placeholder, &replacement, 1);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declarations::parse;

    fn answers(pairs: &[(&str, &str)]) -> Answers {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn parse_then_render_round_trips_the_value() {
        let parsed = parse("# the key\nKEY=value").unwrap();
        let output = render(&parsed, &answers(&[("KEY", "value")]));
        assert_eq!(output, "# the key\nKEY=\"value\"");
    }

    #[test]
    fn missing_answer_falls_back_to_default() {
        let parsed = parse("# default: fallback\nKEY=").unwrap();
        let output = render(&parsed, &Answers::new());
        assert_eq!(output, "# default: fallback\nKEY=\"fallback\"");
    }

    #[test]
    fn missing_answer_without_default_renders_empty_assignment() {
        let parsed = parse("# no default here\nKEY=").unwrap();
        let output = render(&parsed, &Answers::new());
        assert_eq!(output, "# no default here\nKEY=");
    }

    #[test]
    fn empty_answer_falls_back_to_default() {
        let parsed = parse("# default: kept\nKEY=").unwrap();
        let output = render(&parsed, &answers(&[("KEY", "")]));
        assert_eq!(output, "# default: kept\nKEY=\"kept\"");
    }

    #[test]
    fn embedded_double_quotes_are_escaped() {
        let parsed = parse("# quoting\nKEY=").unwrap();
        let output = render(&parsed, &answers(&[("KEY", "say \"hi\"")]));
        assert_eq!(output, "# quoting\nKEY=\"say \\\"hi\\\"\"");
    }

    #[test]
    fn every_placeholder_is_resolved() {
        let parsed = parse("# a\nA=\n\n# b\nB=\n\nC=inline").unwrap();
        let output = render(&parsed, &answers(&[("A", "1")]));
        assert!(!output.contains("{{"), "unresolved placeholder in {output:?}");
        assert!(output.contains("A=\"1\""));
        assert!(output.contains("B="));
        assert!(output.contains("C=\"inline\""));
    }

    #[test]
    fn comments_and_blank_lines_survive_rendering() {
        let parsed = parse("# header\n\n# Port\nPORT=3000\n\n# footer").unwrap();
        let output = render(&parsed, &Answers::new());
        assert_eq!(output, "# header\n\n# Port\nPORT=\"3000\"\n\n# footer");
    }
}
