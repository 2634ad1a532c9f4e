//! Object-name extraction pipeline

mod collector;
mod normalize;

use sqlparser::ast::Visit;
use sqlparser::parser::Parser;
use tracing::debug;

use crate::dialect::PlSqlDialect;
use crate::error::ExtractError;
use crate::names::ObjectNameSet;
use crate::stream::CaseFoldingStream;

use collector::NameCollector;

/// Extracts referenced object names from SQL batches.
///
/// One call performs one parse and one tree walk, synchronously, and either
/// returns the full result set or fails with no partial result.
pub struct Extractor {
    dialect: PlSqlDialect,
}

impl Extractor {
    pub fn new() -> Self {
        Self {
            dialect: PlSqlDialect,
        }
    }

    /// Collect every distinct object name referenced in a batch of SQL
    /// statements.
    ///
    /// The grammar parses a case-folded view of the input, so unquoted
    /// names come back upper-cased while quoted names keep their original
    /// spelling. An input that parses to zero statements (empty text,
    /// comments, whitespace) yields an empty set, not an error.
    pub fn extract(&self, sql: &str) -> Result<ObjectNameSet, ExtractError> {
        let mut stream = CaseFoldingStream::new(sql);
        let folded = stream.folded_text();
        let statements = Parser::parse_sql(&self.dialect, &folded)?;
        debug!(
            source = stream.source_name(),
            statements = statements.len(),
            "parsed SQL batch"
        );

        let mut collector = NameCollector::new(&stream);
        for statement in &statements {
            let _ = statement.visit(&mut collector);
        }
        Ok(collector.into_names())
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract every distinct object name referenced in `sql`.
///
/// Convenience wrapper over a default [`Extractor`].
pub fn extract_object_names(sql: &str) -> Result<ObjectNameSet, ExtractError> {
    Extractor::new().extract(sql)
}
