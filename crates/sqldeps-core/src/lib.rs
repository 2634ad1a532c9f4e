//! sqldeps-core: referenced-object extraction for SQL batches
//!
//! This library parses a batch of PL/SQL-family SQL statements and collects
//! the set of database object names (tables, views, materialized views,
//! synonyms) the batch references, without executing anything. Names are
//! normalized into canonical dotted identifiers and deduplicated
//! case-insensitively.

pub mod dialect;
pub mod error;
pub mod extract;
pub mod names;
pub mod stream;

pub use dialect::PlSqlDialect;
pub use error::ExtractError;
pub use extract::{extract_object_names, Extractor};
pub use names::ObjectNameSet;
pub use stream::CaseFoldingStream;
