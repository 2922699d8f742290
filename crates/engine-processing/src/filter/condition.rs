use crate::error::EngineError;
use model::{
    core::value::Value,
    query::{comparator::Comparator, descriptor::WhereClause},
    records::row::Row,
};
use std::str::FromStr;

/// A WHERE comparison with its operator already parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledCondition {
    pub field: String,
    pub comparator: Comparator,
    pub value: Value,
}

impl CompiledCondition {
    pub fn compile(clause: &WhereClause) -> Result<Self, EngineError> {
        let comparator = Comparator::from_str(&clause.operator)
            .map_err(|_| EngineError::UnsupportedOperator(clause.operator.clone()))?;

        Ok(CompiledCondition {
            field: clause.field.clone(),
            comparator,
            value: clause.value.clone(),
        })
    }

    /// Compares the value stored under the exact key `field` with the
    /// clause value. Qualified names are not resolved against bare keys.
    pub fn eval(&self, row: &Row) -> bool {
        self.comparator.test(row.get(&self.field), &self.value)
    }
}

/// Evaluates a single clause against a single row.
pub fn evaluate_condition(row: &Row, clause: &WhereClause) -> Result<bool, EngineError> {
    Ok(CompiledCondition::compile(clause)?.eval(row))
}
