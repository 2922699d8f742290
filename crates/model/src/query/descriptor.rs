use crate::core::value::Value;
use serde::{Deserialize, Serialize};

/// A parsed SELECT-style query, as produced by the external query parser.
///
/// The descriptor is trusted structurally. `join_type` and the clause
/// operators are kept verbatim and only interpreted during execution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryDescriptor {
    pub fields: Vec<String>,
    pub table: String,
    pub where_clauses: Vec<WhereClause>,
    pub join_table: Option<String>,
    pub join_condition: Option<JoinCondition>,
    pub join_type: Option<String>,
}

impl QueryDescriptor {
    pub fn new(table: &str, fields: &[&str]) -> Self {
        QueryDescriptor {
            fields: fields.iter().map(|f| f.to_string()).collect(),
            table: table.to_string(),
            ..Default::default()
        }
    }

    pub fn join(mut self, join_type: &str, table: &str, left: &str, right: &str) -> Self {
        self.join_type = Some(join_type.to_string());
        self.join_table = Some(table.to_string());
        self.join_condition = Some(JoinCondition {
            left: left.to_string(),
            right: right.to_string(),
        });
        self
    }

    pub fn filter(mut self, field: &str, operator: &str, value: impl Into<Value>) -> Self {
        self.where_clauses.push(WhereClause {
            field: field.to_string(),
            operator: operator.to_string(),
            value: value.into(),
        });
        self
    }

    /// The join table and condition, when both are declared.
    pub fn join_spec(&self) -> Option<(&str, &JoinCondition)> {
        match (&self.join_table, &self.join_condition) {
            (Some(table), Some(cond)) => Some((table.as_str(), cond)),
            _ => None,
        }
    }
}

/// `left` names the main-table column and `right` the join-table column,
/// each written as `table.field`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinCondition {
    pub left: String,
    pub right: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhereClause {
    pub field: String,
    pub operator: String,
    pub value: Value,
}

/// Splits `table.field` at the first dot. A name without a dot has no table.
pub fn split_qualified(name: &str) -> (Option<&str>, &str) {
    match name.split_once('.') {
        Some((table, field)) => (Some(table), field),
        None => (None, name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_parser_output() {
        let json = r#"{
            "fields": ["student.name", "enrollment.course"],
            "table": "student",
            "whereClauses": [{"field": "age", "operator": ">", "value": 30}],
            "joinTable": "enrollment",
            "joinCondition": {"left": "student.id", "right": "enrollment.student_id"},
            "joinType": "LEFT"
        }"#;
        let query: QueryDescriptor = serde_json::from_str(json).unwrap();

        assert_eq!(query.table, "student");
        assert_eq!(query.where_clauses[0].value, Value::Int(30));
        let (table, cond) = query.join_spec().unwrap();
        assert_eq!(table, "enrollment");
        assert_eq!(cond.right, "enrollment.student_id");
        assert_eq!(query.join_type.as_deref(), Some("LEFT"));
    }

    #[test]
    fn missing_optional_parts_default() {
        let query: QueryDescriptor =
            serde_json::from_str(r#"{"fields": ["id"], "table": "t"}"#).unwrap();
        assert!(query.where_clauses.is_empty());
        assert!(query.join_spec().is_none());
    }

    #[test]
    fn join_spec_requires_table_and_condition() {
        let mut query = QueryDescriptor::new("a", &["id"]).join("INNER", "b", "a.id", "b.id");
        query.join_condition = None;
        assert!(query.join_spec().is_none());
    }

    #[test]
    fn splits_at_first_dot() {
        assert_eq!(split_qualified("orders.id"), (Some("orders"), "id"));
        assert_eq!(split_qualified("id"), (None, "id"));
        assert_eq!(split_qualified("a.b.c"), (Some("a"), "b.c"));
    }
}
