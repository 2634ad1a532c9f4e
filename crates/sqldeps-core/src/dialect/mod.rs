//! PL/SQL-family dialect support

use sqlparser::dialect::Dialect;

/// Dialect for the PL/SQL family of SQL (Oracle-style).
///
/// Identifier rules follow Oracle: names start with a letter (or `_`) and
/// may continue with digits, `_`, `$` and `#`. `@` is additionally accepted
/// as an identifier-part character so that a remote reference like
/// `dept@dblink` reaches the syntax tree as a single name token; the
/// database-link suffix is stripped later during normalization.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlSqlDialect;

impl Dialect for PlSqlDialect {
    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_ascii_alphabetic() || ch == '_'
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_ascii_alphanumeric() || matches!(ch, '_' | '$' | '#' | '@')
    }

    /// Only `"` delimits identifiers; brackets and backticks belong to
    /// other dialect families.
    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        ch == '"'
    }

    /// Oracle hierarchical queries (`CONNECT BY`).
    fn supports_connect_by(&self) -> bool {
        true
    }
}
