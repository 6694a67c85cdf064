//! Prompt question descriptors.
//!
//! Maps parsed variables to pure question descriptors for the prompt
//! layer. No I/O happens here; the CLI decides how each kind is
//! actually asked.

use crate::declarations::VariableDeclaration;
use crate::format::{BaseFormat, FormatSpec};

/// How a question should be presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Free-text input.
    Text,
    /// Masked input, never echoed.
    Secret,
    /// Numeric input; `float` distinguishes `number` from `integer`.
    /// Prompt layers that validate through [`Question::format`] get the
    /// integer/float distinction from the validator and may ignore this
    /// flag; it exists for consumers with typed numeric inputs.
    Number { float: bool },
    /// Single choice out of a fixed set; `initial` is the index of the
    /// variable's default within `choices`, when it is one of them.
    Select { choices: Vec<String>, initial: Option<usize> },
}

/// One question to ask for a configurable variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub kind: QuestionKind,
    /// The variable key; answers are collected under this name.
    pub name: String,
    /// Prompt message shown to the user.
    pub message: String,
    /// Pre-filled value, if the variable has a default.
    pub initial: Option<String>,
    /// The variable's format, for wiring the validator into the
    /// prompt's re-ask loop.
    pub format: FormatSpec,
}

/// Builds question descriptors for every configurable variable, in
/// declaration order.
#[must_use]
pub fn build_questions(variables: &[VariableDeclaration]) -> Vec<Question> {
    variables
        .iter()
        .filter(|variable| variable.configurable)
        .map(|variable| question_for(variable))
        .collect()
}

fn question_for(variable: &VariableDeclaration) -> Question {
    let kind = match &variable.format {
        FormatSpec::Base(BaseFormat::Secret) => QuestionKind::Secret,
        FormatSpec::Base(BaseFormat::Integer) => QuestionKind::Number { float: false },
        FormatSpec::Base(BaseFormat::Number) => QuestionKind::Number { float: true },
        FormatSpec::Enum(choices) => QuestionKind::Select {
            choices: choices.clone(),
            initial: variable
                .default
                .as_ref()
                .and_then(|default| choices.iter().position(|choice| choice == default)),
        },
        _ => QuestionKind::Text,
    };

    Question {
        kind,
        name: variable.key.clone(),
        message: variable
            .description
            .clone()
            .unwrap_or_else(|| format!("Please enter a value for {}", variable.key)),
        initial: variable.default.clone(),
        format: variable.format.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declarations::parse;

    #[test]
    fn only_configurable_variables_produce_questions() {
        let parsed = parse("# asked\nASKED=\nSKIPPED=value").unwrap();
        let questions = build_questions(&parsed.variables);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].name, "ASKED");
    }

    #[test]
    fn secret_format_maps_to_masked_input() {
        let parsed = parse("# format: secret\nTOKEN=").unwrap();
        let questions = build_questions(&parsed.variables);
        assert_eq!(questions[0].kind, QuestionKind::Secret);
    }

    #[test]
    fn numeric_formats_map_to_number_input() {
        let parsed = parse("# format: integer\nPORT=\n\n# format: number\nRATIO=").unwrap();
        let questions = build_questions(&parsed.variables);
        assert_eq!(questions[0].kind, QuestionKind::Number { float: false });
        assert_eq!(questions[1].kind, QuestionKind::Number { float: true });
    }

    #[test]
    fn enum_format_maps_to_select_with_initial_index() {
        let parsed = parse("# format: enum(dev,staging,prod)\n# default: staging\nENV=").unwrap();
        let questions = build_questions(&parsed.variables);
        assert_eq!(
            questions[0].kind,
            QuestionKind::Select {
                choices: vec!["dev".into(), "staging".into(), "prod".into()],
                initial: Some(1),
            }
        );
        assert_eq!(questions[0].initial.as_deref(), Some("staging"));
    }

    #[test]
    fn message_falls_back_when_description_is_absent() {
        let parsed = parse("# default: 3000\nPORT=").unwrap();
        let questions = build_questions(&parsed.variables);
        assert_eq!(questions[0].message, "Please enter a value for PORT");
    }

    #[test]
    fn description_becomes_the_message() {
        let parsed = parse("# The port to bind\nPORT=").unwrap();
        let questions = build_questions(&parsed.variables);
        assert_eq!(questions[0].message, "The port to bind");
    }
}
