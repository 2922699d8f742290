use crate::error::EngineError;
use model::{
    query::{
        descriptor::JoinCondition,
        join::{JoinType, RightJoinPolicy},
    },
    records::row::Row,
};
use std::str::FromStr;
use tracing::debug;

pub mod inner;
pub mod left;
pub mod right;

pub use inner::inner_join;
pub use left::left_join;
pub use right::right_join;

/// Everything a join algorithm reads. Nothing here is mutated.
#[derive(Debug, Clone, Copy)]
pub struct JoinInputs<'a> {
    pub main_rows: &'a [Row],
    pub join_rows: &'a [Row],
    pub condition: &'a JoinCondition,
    pub selected_fields: &'a [String],
    pub main_table: &'a str,
}

/// Parses a join type as written in a query. A missing join type is a
/// plain `JOIN`, i.e. inner.
pub fn parse_join_type(raw: Option<&str>) -> Result<JoinType, EngineError> {
    match raw {
        None => Ok(JoinType::Inner),
        Some(raw) => {
            JoinType::from_str(raw).map_err(|_| EngineError::UnsupportedJoinType(raw.to_string()))
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JoinEngine {
    right_policy: RightJoinPolicy,
}

impl JoinEngine {
    pub fn new(right_policy: RightJoinPolicy) -> Self {
        JoinEngine { right_policy }
    }

    pub fn join(&self, join_type: JoinType, inputs: &JoinInputs<'_>) -> Vec<Row> {
        let rows = match join_type {
            JoinType::Inner => inner_join(inputs),
            JoinType::Left => left_join(inputs),
            JoinType::Right => right_join(inputs, self.right_policy),
        };

        debug!(
            "{} join on {} = {}: {} x {} rows -> {} rows",
            join_type,
            inputs.condition.left,
            inputs.condition.right,
            inputs.main_rows.len(),
            inputs.join_rows.len(),
            rows.len()
        );

        rows
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use model::core::value::Value;

    pub fn table(rows: &[&[(&str, Value)]]) -> Vec<Row> {
        rows.iter().map(|r| r.iter().cloned().collect()).collect()
    }

    pub fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    pub fn condition(left: &str, right: &str) -> JoinCondition {
        JoinCondition {
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    /// `main: [{id:1,name:"a"}, {id:2,name:"b"}]`
    pub fn main_rows() -> Vec<Row> {
        table(&[
            &[("id", Value::Int(1)), ("name", Value::from("a"))],
            &[("id", Value::Int(2)), ("name", Value::from("b"))],
        ])
    }

    /// `join: [{id:1,val:"x"}]`
    pub fn join_rows() -> Vec<Row> {
        table(&[&[("id", Value::Int(1)), ("val", Value::from("x"))]])
    }
}
