//! The annotated-template parser.
//!
//! The parser is a fold over the document's trimmed lines. Comment
//! lines merge metadata into a pending declaration; a `KEY=value` line
//! closes the pending declaration into a [`VariableDeclaration`]; a
//! blank line resets the pending state. Non-declaration lines pass
//! through to the output template verbatim, declaration lines are
//! replaced by `KEY={{KEY}}` placeholders.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::debug;

use super::types::{ParseResult, PendingDeclaration, VariableDeclaration};
use crate::format::{FormatError, FormatSpec};

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

static KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Za-z0-9_]+$").expect("key pattern is a valid regex"));

/// Structural errors that abort parsing of the whole document.
///
/// Value-level problems are not errors here; those surface later as
/// re-ask messages from the validators.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A declaration key contains characters outside `[A-Za-z0-9_]`.
    #[error(
        "Key of a variable declaration can only contain letters, digits, and underscores. Received: \"{0}\""
    )]
    InvalidKey(String),

    /// A `required:`/`configurable:` annotation with a non-boolean value.
    #[error("Valid values can only be true or false. Received: \"{0}\"")]
    InvalidBoolean(String),

    /// A `format:` annotation that the format grammar rejects.
    #[error(transparent)]
    InvalidFormat(#[from] FormatError),
}

/// Parses an annotated `.env.example` document.
///
/// Returns the declared variables in file order together with the
/// output template. Template lines are joined with the platform line
/// terminator.
pub fn parse(content: &str) -> Result<ParseResult, ParseError> {
    let mut variables: Vec<VariableDeclaration> = Vec::new();
    let mut template_lines: Vec<String> = Vec::new();
    let mut pending = PendingDeclaration::default();

    for line in content.split('\n').map(str::trim) {
        if line.starts_with('#') {
            pending = apply_comment(pending, line)?;
            template_lines.push(line.to_string());
        } else if let Some((key, value)) = line.split_once('=') {
            let variable = close_declaration(pending, key, value)?;
            template_lines.push(format!("{0}={{{{{0}}}}}", variable.key));
            variables.push(variable);
            pending = PendingDeclaration::default();
        } else {
            if line.is_empty() {
                pending = PendingDeclaration::default();
            }
            template_lines.push(line.to_string());
        }
    }

    debug!(variables = variables.len(), "parsed annotated template");

    Ok(ParseResult { variables, output_template: template_lines.join(LINE_ENDING) })
}

/// Merges one comment line into the pending declaration.
///
/// Keyed annotations (`required:`, `format:`, ...) set the matching
/// field; anything else is free text appended to the description,
/// unless an explicit `description:`/`default:` was already seen.
fn apply_comment(
    mut pending: PendingDeclaration,
    line: &str,
) -> Result<PendingDeclaration, ParseError> {
    let body = line[1..].trim();

    if let Some(rest) = body.strip_prefix("required:") {
        pending.required = parse_boolean(rest)?;
    } else if let Some(rest) = body.strip_prefix("format:") {
        pending.format = FormatSpec::parse(rest)?;
    } else if let Some(rest) = body.strip_prefix("description:") {
        pending.description = Some(rest.trim().to_string());
        pending.has_explicit_description = true;
    } else if let Some(rest) = body.strip_prefix("link:") {
        pending.link = Some(rest.trim().to_string());
    } else if let Some(rest) = body.strip_prefix("default:") {
        pending.default = Some(rest.trim().to_string());
        pending.has_explicit_description = true;
    } else if let Some(rest) = body.strip_prefix("configurable:") {
        pending.configurable = parse_boolean(rest)?;
    } else if !pending.has_explicit_description {
        pending.description = Some(match pending.description.take() {
            Some(previous) => format!("{previous}\n{body}"),
            None => body.to_string(),
        });
    }

    pending.has_any_comment = true;
    Ok(pending)
}

/// Closes the pending declaration with the `key`/`value` halves of a
/// declaration line.
fn close_declaration(
    pending: PendingDeclaration,
    key: &str,
    value: &str,
) -> Result<VariableDeclaration, ParseError> {
    let key = key.trim();
    if !KEY_PATTERN.is_match(key) {
        return Err(ParseError::InvalidKey(key.to_string()));
    }

    let value = unquote(value.trim());

    let mut pending = pending;
    // A non-empty inline value overrides any `default:` annotation; an
    // empty one keeps whatever the annotations accumulated.
    if !value.is_empty() {
        pending.default = Some(value);
    }
    // Declarations without any preceding comment are not prompted for.
    if !pending.has_any_comment {
        pending.configurable = false;
    }

    Ok(pending.into_declaration(key.to_string()))
}

/// Converts `true`/`false` (any casing) into a boolean.
fn parse_boolean(text: &str) -> Result<bool, ParseError> {
    match text.trim().to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidBoolean(text.trim().to_string())),
    }
}

/// Strips a wrapping pair of double or single quotes and unescapes the
/// matching quote character inside.
fn unquote(value: &str) -> String {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            let inner = &value[1..value.len() - 1];
            return inner.replace(&format!("\\{quote}"), &quote.to_string());
        }
    }
    value.to_string()
}
