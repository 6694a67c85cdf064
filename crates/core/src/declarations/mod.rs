//! Parsing of annotated `.env.example` documents.
//!
//! Two parsers live here:
//! - [`parse`] understands the full annotation grammar (`required:`,
//!   `format:`, `description:`, `link:`, `default:`, `configurable:`
//!   comments accumulating onto the next `KEY=value` line).
//! - [`pairs::parse_pairs`] is the lightweight predecessor that only
//!   extracts a comment line immediately followed by a declaration.

mod parser;
pub mod pairs;
mod types;

pub use parser::{ParseError, parse};
pub use types::{ParseResult, VariableDeclaration};
