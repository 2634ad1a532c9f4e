//! Error types for the extraction pipeline

use miette::Diagnostic;
use sqlparser::parser::ParserError;
use thiserror::Error;

/// Failure of a whole extraction call.
///
/// Extraction is all-or-nothing: the grammar either produces a tree for the
/// full batch or the call fails with no partial result. Parsing is
/// deterministic, so retrying an unchanged input is pointless; callers that
/// want per-statement resilience must split the batch before calling in.
#[derive(Debug, Error, Diagnostic)]
pub enum ExtractError {
    /// The grammar could not parse the input. The parser message names the
    /// offending token and its line/column.
    #[error("failed to parse SQL batch: {0}")]
    #[diagnostic(
        code(sqldeps::parse_failure),
        help("the batch is rejected as a whole; split it into independent statements to skip the bad one")
    )]
    Parse(#[from] ParserError),
}
