//! Syntax-tree walk that collects qualified object references

use std::ops::ControlFlow;

use sqlparser::ast::{Ident, ObjectName, TableFactor, Visitor};
use tracing::trace;

use crate::names::ObjectNameSet;
use crate::stream::CaseFoldingStream;

use super::normalize::normalize_parts;

/// The two grammar productions that deliver a qualified object reference.
///
/// They are distinct entry points in the grammar but identical inputs to
/// normalization, so both variants funnel into [`NameCollector::record`].
enum NameNode<'a> {
    /// A relation mention anywhere in a statement — `FROM` references as
    /// well as `INSERT`/`UPDATE`/`DELETE` targets.
    Relation(&'a ObjectName),
    /// A `FROM`-clause table factor.
    Factor(&'a ObjectName),
}

/// Visitor that records every table/view reference in a statement tree.
///
/// The derived traversal visits every node reachable from the statement
/// root, so references inside subqueries, `EXISTS` predicates, joins, CTE
/// bodies and set operations are all seen. The same physical reference may
/// arrive through both [`NameNode`] kinds; the case-insensitive set makes
/// the second arrival a no-op.
pub(crate) struct NameCollector<'a> {
    stream: &'a CaseFoldingStream,
    names: ObjectNameSet,
}

impl<'a> NameCollector<'a> {
    pub(crate) fn new(stream: &'a CaseFoldingStream) -> Self {
        Self {
            stream,
            names: ObjectNameSet::new(),
        }
    }

    pub(crate) fn into_names(self) -> ObjectNameSet {
        self.names
    }

    fn record(&mut self, node: NameNode<'_>) {
        let name = match node {
            NameNode::Relation(name) | NameNode::Factor(name) => name,
        };
        let parts: Vec<String> = name.0.iter().map(|part| self.part_text(part)).collect();
        if let Some(canonical) = normalize_parts(parts) {
            if self.names.insert(canonical.clone()) {
                trace!(name = %canonical, "collected object reference");
            }
        }
    }

    /// Text captured for one name part. A quoted identifier takes the raw
    /// source slice behind its token span, so the folded parse does not
    /// erase its case; an unquoted identifier is already canonical in the
    /// folded view.
    fn part_text(&self, part: &Ident) -> String {
        match part.quote_style {
            Some(quote) => self
                .stream
                .slice_span(&part.span)
                .unwrap_or_else(|| format!("{quote}{}{quote}", part.value)),
            None => part.value.clone(),
        }
    }
}

impl Visitor for NameCollector<'_> {
    type Break = ();

    fn pre_visit_relation(&mut self, relation: &ObjectName) -> ControlFlow<Self::Break> {
        self.record(NameNode::Relation(relation));
        ControlFlow::Continue(())
    }

    fn pre_visit_table_factor(&mut self, table_factor: &TableFactor) -> ControlFlow<Self::Break> {
        if let TableFactor::Table { name, .. } = table_factor {
            self.record(NameNode::Factor(name));
        }
        ControlFlow::Continue(())
    }
}
