use super::condition::CompiledCondition;
use crate::error::EngineError;
use model::{query::descriptor::WhereClause, records::row::Row};
use tracing::warn;

pub trait Filter {
    fn should_keep(&self, row: &Row) -> bool;
}

/// The conjunction of a query's WHERE clauses.
#[derive(Debug, Clone, Default)]
pub struct WhereFilter {
    conditions: Vec<CompiledCondition>,
}

impl WhereFilter {
    /// Parses every clause up front, so a bad operator fails the query even
    /// when there are no rows to test.
    pub fn compile(clauses: &[WhereClause]) -> Result<Self, EngineError> {
        let conditions = clauses
            .iter()
            .map(CompiledCondition::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(WhereFilter { conditions })
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Keeps rows passing every condition, preserving order.
    pub fn apply(&self, rows: Vec<Row>) -> Vec<Row> {
        if self.is_empty() {
            return rows;
        }

        if !rows.is_empty() {
            for cond in &self.conditions {
                if !rows.iter().any(|row| row.contains_key(&cond.field)) {
                    warn!(
                        "WHERE column '{}' is not present in any row; comparisons see it as undefined",
                        cond.field
                    );
                }
            }
        }

        rows.into_iter().filter(|row| self.should_keep(row)).collect()
    }
}

impl Filter for WhereFilter {
    fn should_keep(&self, row: &Row) -> bool {
        self.conditions.iter().all(|cond| cond.eval(row))
    }
}
