//! Format-type grammar for variable declarations.
//!
//! A format string is either a base keyword (`text`, `email`, ...), a
//! compound wrapper `list(base)` or `map(base,base)` (with the alias
//! `nested_list(base,base)`), or an enumerated choice set `enum(a,b,c)`.
//! Compound formats take exactly one level of nesting: a list or map
//! element must be a base format.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced while parsing a format string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormatError {
    /// The text matches no base keyword and no compound wrapper.
    #[error("Invalid format. Received: \"{0}\"")]
    Unknown(String),

    /// The element format inside `list(...)` is not a base format.
    #[error("Invalid list format value. Received \"{0}\"")]
    InvalidListElement(String),

    /// A sub-format inside `map(...)` / `nested_list(...)` is not a base format.
    #[error("Invalid map format value. Received \"{key}\" for key and \"{value}\" for value")]
    InvalidMapFormats { key: String, value: String },

    /// `enum(...)` with no choices, or with an empty choice.
    #[error("Enum format requires at least one non-empty choice. Received: \"{0}\"")]
    EmptyEnumChoice(String),
}

/// The fixed set of scalar value formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseFormat {
    Text,
    PhoneNumber,
    Email,
    Url,
    Sid,
    Integer,
    Number,
    Secret,
}

impl BaseFormat {
    /// Every base format, in declaration order.
    pub const ALL: [BaseFormat; 8] = [
        BaseFormat::Text,
        BaseFormat::PhoneNumber,
        BaseFormat::Email,
        BaseFormat::Url,
        BaseFormat::Sid,
        BaseFormat::Integer,
        BaseFormat::Number,
        BaseFormat::Secret,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BaseFormat::Text => "text",
            BaseFormat::PhoneNumber => "phone_number",
            BaseFormat::Email => "email",
            BaseFormat::Url => "url",
            BaseFormat::Sid => "sid",
            BaseFormat::Integer => "integer",
            BaseFormat::Number => "number",
            BaseFormat::Secret => "secret",
        }
    }

    fn from_keyword(text: &str) -> Option<BaseFormat> {
        Self::ALL.into_iter().find(|base| base.as_str() == text)
    }
}

impl fmt::Display for BaseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed, validated variable format.
///
/// `Display` renders the canonical lower-cased string form
/// (`list(x)`, `map(x,y)`, `enum(a,b,c)`); parsing that form again
/// yields an equal `FormatSpec`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSpec {
    /// A scalar value.
    Base(BaseFormat),
    /// A comma-separated list of homogeneous elements.
    List(BaseFormat),
    /// A semicolon-separated list of `key,value` entries.
    Map(BaseFormat, BaseFormat),
    /// One value out of a fixed choice set.
    Enum(Vec<String>),
}

impl Default for FormatSpec {
    fn default() -> Self {
        FormatSpec::Base(BaseFormat::Text)
    }
}

impl FormatSpec {
    /// Parses a format annotation string.
    ///
    /// The input is trimmed and lower-cased before matching, except for
    /// `enum(...)` choices which keep their original casing.
    pub fn parse(text: &str) -> Result<FormatSpec, FormatError> {
        let sanitized = text.trim().to_lowercase();

        if let Some(base) = BaseFormat::from_keyword(&sanitized) {
            return Ok(FormatSpec::Base(base));
        }

        if let Some(inner) = unwrap_call("list", &sanitized) {
            let inner = inner.trim();
            let element = BaseFormat::from_keyword(inner)
                .ok_or_else(|| FormatError::InvalidListElement(inner.to_string()))?;
            return Ok(FormatSpec::List(element));
        }

        for keyword in ["map", "nested_list"] {
            if let Some(inner) = unwrap_call(keyword, &sanitized) {
                // The declaration splits on the first comma only; value
                // *inputs* may contain further commas, declarations may not.
                let (key, value) = inner.split_once(',').unwrap_or((inner, ""));
                let (key, value) = (key.trim(), value.trim());
                return match (BaseFormat::from_keyword(key), BaseFormat::from_keyword(value)) {
                    (Some(key_format), Some(value_format)) => {
                        Ok(FormatSpec::Map(key_format, value_format))
                    }
                    _ => Err(FormatError::InvalidMapFormats {
                        key: key.to_string(),
                        value: value.to_string(),
                    }),
                };
            }
        }

        if sanitized.starts_with("enum(") && sanitized.ends_with(')') {
            // Re-slice the original text so choices keep their casing.
            let trimmed = text.trim();
            let inner = &trimmed[5..trimmed.len() - 1];
            let choices: Vec<String> =
                inner.split(',').map(|choice| choice.trim().to_string()).collect();
            if choices.is_empty() || choices.iter().any(String::is_empty) {
                return Err(FormatError::EmptyEnumChoice(text.trim().to_string()));
            }
            return Ok(FormatSpec::Enum(choices));
        }

        Err(FormatError::Unknown(text.to_string()))
    }
}

impl FromStr for FormatSpec {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatSpec::parse(s)
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatSpec::Base(base) => write!(f, "{base}"),
            FormatSpec::List(element) => write!(f, "list({element})"),
            FormatSpec::Map(key, value) => write!(f, "map({key},{value})"),
            FormatSpec::Enum(choices) => write!(f, "enum({})", choices.join(",")),
        }
    }
}

/// Returns the content between `keyword(` and a trailing `)`, if the
/// text has exactly that shape.
fn unwrap_call<'a>(keyword: &str, text: &'a str) -> Option<&'a str> {
    let rest = text.strip_prefix(keyword)?.strip_prefix('(')?;
    rest.strip_suffix(')')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_base_keyword() {
        for base in BaseFormat::ALL {
            assert_eq!(FormatSpec::parse(base.as_str()).unwrap(), FormatSpec::Base(base));
        }
    }

    #[test]
    fn parse_is_case_and_whitespace_insensitive() {
        assert_eq!(
            FormatSpec::parse("  Phone_Number ").unwrap(),
            FormatSpec::Base(BaseFormat::PhoneNumber)
        );
        assert_eq!(
            FormatSpec::parse("LIST( email )").unwrap(),
            FormatSpec::List(BaseFormat::Email)
        );
    }

    #[test]
    fn parses_list_format() {
        assert_eq!(
            FormatSpec::parse("list(email)").unwrap(),
            FormatSpec::List(BaseFormat::Email)
        );
    }

    #[test]
    fn parses_map_format() {
        assert_eq!(
            FormatSpec::parse("map(text,phone_number)").unwrap(),
            FormatSpec::Map(BaseFormat::Text, BaseFormat::PhoneNumber)
        );
    }

    #[test]
    fn nested_list_is_an_alias_for_map() {
        assert_eq!(
            FormatSpec::parse("nested_list(sid,url)").unwrap(),
            FormatSpec::parse("map(sid,url)").unwrap()
        );
        assert_eq!(
            FormatSpec::parse("nested_list(sid,url)").unwrap().to_string(),
            "map(sid,url)"
        );
    }

    #[test]
    fn parses_enum_format_preserving_choice_case() {
        assert_eq!(
            FormatSpec::parse("enum(Dev, Staging, Prod)").unwrap(),
            FormatSpec::Enum(vec!["Dev".into(), "Staging".into(), "Prod".into()])
        );
    }

    #[test]
    fn rejects_unknown_format() {
        assert_eq!(
            FormatSpec::parse("uuid"),
            Err(FormatError::Unknown("uuid".to_string()))
        );
    }

    #[test]
    fn rejects_invalid_list_element() {
        assert_eq!(
            FormatSpec::parse("list(uuid)"),
            Err(FormatError::InvalidListElement("uuid".to_string()))
        );
    }

    #[test]
    fn rejects_nested_compound_formats() {
        assert!(matches!(
            FormatSpec::parse("list(list(text))"),
            Err(FormatError::InvalidListElement(_))
        ));
        assert!(matches!(
            FormatSpec::parse("map(text,list(text))"),
            Err(FormatError::InvalidMapFormats { .. })
        ));
    }

    #[test]
    fn map_declaration_splits_on_first_comma_only() {
        // "text" key, "text,text" value: the remainder is one (invalid) sub-format.
        assert_eq!(
            FormatSpec::parse("map(text,text,text)"),
            Err(FormatError::InvalidMapFormats {
                key: "text".to_string(),
                value: "text,text".to_string(),
            })
        );
    }

    #[test]
    fn rejects_malformed_parentheses() {
        assert!(matches!(FormatSpec::parse("list(email"), Err(FormatError::Unknown(_))));
        assert!(matches!(FormatSpec::parse("map text,text)"), Err(FormatError::Unknown(_))));
    }

    #[test]
    fn rejects_empty_enum_choices() {
        assert!(matches!(
            FormatSpec::parse("enum()"),
            Err(FormatError::EmptyEnumChoice(_))
        ));
        assert!(matches!(
            FormatSpec::parse("enum(a,,b)"),
            Err(FormatError::EmptyEnumChoice(_))
        ));
    }

    #[test]
    fn parse_of_canonical_display_is_idempotent() {
        for input in ["TEXT", "list( Phone_Number )", "NESTED_LIST(sid , email)", "enum(a, b)"] {
            let first = FormatSpec::parse(input).unwrap();
            let second = FormatSpec::parse(&first.to_string()).unwrap();
            assert_eq!(first, second, "round-trip failed for {input:?}");
        }
    }
}
