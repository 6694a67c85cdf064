//! Interactive collection of answers for the built questions.
//!
//! Each question kind maps to a dialoguer prompt: `Input` for text and
//! numbers (with the format validator wired into the re-ask loop),
//! `Password` for secrets, `Select` for enum choices. Ctrl+C or EOF on
//! a single prompt skips that field; rendering later falls back to the
//! variable's default or an empty value.

use dialoguer::{Input, Password, Select, theme::ColorfulTheme};
use envsetup_core::questions::{Question, QuestionKind};
use envsetup_core::render::Answers;
use std::io::{self, IsTerminal};

/// Options for prompting behavior.
#[derive(Debug, Clone, Default)]
pub struct PromptOptions {
    /// If true, never prompt; rely on pre-supplied values and declared
    /// defaults only.
    pub batch_mode: bool,
}

/// Error type for answer collection.
#[derive(Debug)]
pub enum PromptError {
    /// A pre-supplied `--var` value failed its format validation.
    /// There is no re-ask loop to recover through, so this is fatal.
    InvalidAnswer { name: String, message: String },
    /// IO error during prompting.
    Io(io::Error),
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptError::InvalidAnswer { name, message } => {
                write!(f, "invalid value for {name}: {message}")
            }
            PromptError::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for PromptError {}

/// Collects an answer for every question that can be answered.
///
/// Pre-supplied values are validated but never prompted for again;
/// an empty pre-supplied value passes through unvalidated and resolves
/// to the variable's default at render time.
/// When stdin is not a terminal, or in batch mode, missing answers are
/// simply left out; the renderer resolves them to default-or-empty.
pub fn collect_answers(
    questions: &[Question],
    provided: &Answers,
    options: &PromptOptions,
) -> Result<Answers, PromptError> {
    let mut answers = provided.clone();
    let interactive = io::stdin().is_terminal() && !options.batch_mode;

    for question in questions {
        if let Some(value) = answers.get(&question.name) {
            // An empty pre-supplied value means "use the default"; the
            // renderer resolves it that way, so it is not validated here.
            if !value.is_empty() {
                if let Err(message) = question.format.validate(value) {
                    return Err(PromptError::InvalidAnswer {
                        name: question.name.clone(),
                        message,
                    });
                }
            }
            continue;
        }

        if !interactive {
            if question.initial.is_none() {
                tracing::warn!(variable = %question.name, "no value provided; leaving empty");
            }
            continue;
        }

        if let Some(value) = ask(question)? {
            answers.insert(question.name.clone(), value);
        }
    }

    Ok(answers)
}

/// Asks a single question. `Ok(None)` means the user skipped the field.
fn ask(question: &Question) -> Result<Option<String>, PromptError> {
    let theme = ColorfulTheme::default();

    let result = match &question.kind {
        QuestionKind::Secret => Password::with_theme(&theme)
            .with_prompt(question.message.as_str())
            .allow_empty_password(true)
            .interact(),
        QuestionKind::Select { choices, initial } => Select::with_theme(&theme)
            .with_prompt(question.message.as_str())
            .items(choices)
            .default(initial.unwrap_or(0))
            .interact()
            .map(|index| choices[index].clone()),
        QuestionKind::Text | QuestionKind::Number { .. } => {
            let format = question.format.clone();
            let mut input = Input::<String>::with_theme(&theme)
                .with_prompt(question.message.as_str())
                .validate_with(move |value: &String| format.validate(value));
            if let Some(initial) = &question.initial {
                input = input.default(initial.clone()).allow_empty(true);
            }
            input.interact_text()
        }
    };

    match result {
        Ok(value) => Ok(Some(value)),
        Err(dialoguer::Error::IO(err)) => {
            if matches!(err.kind(), io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof) {
                Ok(None)
            } else {
                Err(PromptError::Io(err))
            }
        }
    }
}

/// Parses `--var` arguments into an answers map.
///
/// Expected format: `KEY=VALUE`. Arguments without `=` are ignored.
pub fn parse_var_args(args: &[String]) -> Answers {
    let mut map = Answers::new();
    for arg in args {
        if let Some((key, value)) = arg.split_once('=') {
            map.insert(key.to_string(), value.to_string());
        } else {
            tracing::warn!(argument = %arg, "ignoring --var without KEY=VALUE shape");
        }
    }
    map
}
