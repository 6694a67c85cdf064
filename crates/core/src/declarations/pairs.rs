//! Comment/declaration pair extraction.
//!
//! The predecessor of the annotation grammar: only a `#` comment line
//! immediately followed by a `KEY=value` line yields a variable. Bare
//! declarations and everything else pass through untouched, so a file
//! with no commented pairs round-trips byte-identically.

/// A variable captured from a comment line plus the declaration below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentedPair {
    pub name: String,
    /// The comment text, `#` and surrounding whitespace stripped.
    pub comment: String,
    /// The inline value, if any.
    pub default: Option<String>,
}

/// Result of a pair-extraction pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairParseResult {
    pub variables: Vec<CommentedPair>,
    /// The document with each captured declaration replaced by a
    /// `KEY={{KEY}}` placeholder line, joined with `\n`.
    pub output_template: String,
}

/// Extracts comment/declaration pairs from a template document.
#[must_use]
pub fn parse_pairs(content: &str) -> PairParseResult {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut variables = Vec::new();
    let mut template_lines: Vec<String> = Vec::new();

    let mut index = 0;
    while index < lines.len() {
        let current = lines[index].trim();
        template_lines.push(current.to_string());

        let next = lines.get(index + 1).map(|line| line.trim());
        if let Some(declaration) = next.filter(|line| current.starts_with('#') && line.contains('='))
        {
            let comment = current[1..].trim().to_string();
            let (name, value) = declaration.split_once('=').unwrap_or((declaration, ""));
            let name = name.trim().to_string();
            let value = value.trim();

            template_lines.push(format!("{name}={{{{{name}}}}}"));
            variables.push(CommentedPair {
                name,
                comment,
                default: (!value.is_empty()).then(|| value.to_string()),
            });

            // the declaration line was consumed together with its comment
            index += 2;
            continue;
        }

        index += 1;
    }

    PairParseResult { variables, output_template: template_lines.join("\n") }
}
