use super::JoinInputs;
use crate::{resolve::FieldResolver, row_builder::build_result_row};
use model::records::row::Row;

/// Emits one row per (main row, matching join row) pair, in main-row order.
/// Unmatched main rows produce nothing.
///
/// The condition is matched on bare column names only, and output rows
/// carry just the selected fields.
pub fn inner_join(inputs: &JoinInputs<'_>) -> Vec<Row> {
    let cond = inputs.condition;
    let resolver = FieldResolver::BARE;

    inputs
        .main_rows
        .iter()
        .flat_map(|main_row| {
            inputs
                .join_rows
                .iter()
                .filter(move |join_row| {
                    resolver.matches(main_row, &cond.left, join_row, &cond.right)
                })
                .map(move |join_row| {
                    build_result_row(
                        Some(main_row),
                        Some(join_row),
                        inputs.selected_fields,
                        inputs.main_table,
                        false,
                    )
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::join::fixtures::*;
    use model::core::value::Value;

    fn run(main: &[Row], join: &[Row], left: &str, right: &str, selected: &[&str]) -> Vec<Row> {
        let cond = condition(left, right);
        let selected = fields(selected);
        inner_join(&JoinInputs {
            main_rows: main,
            join_rows: join,
            condition: &cond,
            selected_fields: &selected,
            main_table: "main",
        })
    }

    #[test]
    fn keeps_only_matching_pairs() {
        let rows = run(
            &main_rows(),
            &join_rows(),
            "main.id",
            "join.id",
            &["main.id", "join.val"],
        );

        let expected: Row = [("main.id", Value::Int(1)), ("join.val", Value::from("x"))]
            .into_iter()
            .collect();
        assert_eq!(rows, vec![expected]);
    }

    #[test]
    fn cardinality_is_sum_of_matches() {
        let main = table(&[
            &[("id", Value::Int(1))],
            &[("id", Value::Int(2))],
            &[("id", Value::Int(3))],
        ]);
        let join = table(&[
            &[("mid", Value::Int(1)), ("n", Value::Int(10))],
            &[("mid", Value::Int(1)), ("n", Value::Int(11))],
            &[("mid", Value::Int(2)), ("n", Value::Int(20))],
            &[("mid", Value::Int(4)), ("n", Value::Int(40))],
        ]);

        let rows = run(&main, &join, "main.id", "join.mid", &["main.id", "join.n"]);

        assert_eq!(rows.len(), 3);
        let ns: Vec<_> = rows.iter().map(|r| r.get("join.n").cloned()).collect();
        assert_eq!(
            ns,
            vec![
                Some(Value::Int(10)),
                Some(Value::Int(11)),
                Some(Value::Int(20))
            ]
        );
    }

    #[test]
    fn does_not_expand_main_columns() {
        let rows = run(&main_rows(), &join_rows(), "main.id", "join.id", &["join.val"]);
        assert_eq!(rows[0].keys().collect::<Vec<_>>(), vec!["join.val"]);
    }

    #[test]
    fn ignores_prefixed_keys_in_condition() {
        let main = table(&[&[("main.id", Value::Int(1))]]);
        let rows = run(&main, &join_rows(), "main.id", "join.id", &["join.val"]);
        assert!(rows.is_empty());
    }

    #[test]
    fn empty_inputs_yield_nothing() {
        assert!(run(&[], &join_rows(), "main.id", "join.id", &["join.val"]).is_empty());
        assert!(run(&main_rows(), &[], "main.id", "join.id", &["join.val"]).is_empty());
    }
}
