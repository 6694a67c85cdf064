//! Variable declaration records.

use crate::format::FormatSpec;

/// One fully parsed variable from the template.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    /// Unique identifier, only `[A-Za-z0-9_]` characters.
    pub key: String,
    /// Whether a value must be supplied. Defaults to `true`.
    pub required: bool,
    /// Declared value format. Defaults to `text`.
    pub format: FormatSpec,
    /// Human-readable description, possibly multi-line.
    pub description: Option<String>,
    /// Reference URL with further documentation.
    pub link: Option<String>,
    /// Default/current value.
    pub default: Option<String>,
    /// Whether the variable should be prompted for at all.
    pub configurable: bool,
}

/// The accumulating state carried from an annotation comment block to
/// the declaration line that closes it. Reset to [`Default`] on blank
/// lines and after every completed declaration.
#[derive(Debug, Clone)]
pub(crate) struct PendingDeclaration {
    pub required: bool,
    pub format: FormatSpec,
    pub description: Option<String>,
    pub link: Option<String>,
    pub default: Option<String>,
    pub configurable: bool,
    /// Set by `description:`/`default:` annotations; stops free-text
    /// comment lines from accumulating into the description.
    pub has_explicit_description: bool,
    /// Whether any comment line preceded the declaration.
    pub has_any_comment: bool,
}

impl Default for PendingDeclaration {
    fn default() -> Self {
        PendingDeclaration {
            required: true,
            format: FormatSpec::default(),
            description: None,
            link: None,
            default: None,
            configurable: true,
            has_explicit_description: false,
            has_any_comment: false,
        }
    }
}

impl PendingDeclaration {
    /// Closes the pending state into an emitted record, dropping the
    /// bookkeeping flags.
    pub(crate) fn into_declaration(self, key: String) -> VariableDeclaration {
        VariableDeclaration {
            key,
            required: self.required,
            format: self.format,
            description: self.description,
            link: self.link,
            default: self.default,
            configurable: self.configurable,
        }
    }
}

/// Result of parsing a template document.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    /// Declared variables, in order of first appearance.
    pub variables: Vec<VariableDeclaration>,
    /// The input document with every declaration line replaced by a
    /// `KEY={{KEY}}` placeholder line.
    pub output_template: String,
}
