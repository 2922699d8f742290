use super::JoinInputs;
use crate::{resolve::FieldResolver, row_builder::build_result_row};
use model::records::row::Row;

/// Emits one row per matching join row for every main row, or a single row
/// with a `Null` join side when nothing matches. Every main row appears at
/// least once, with all its columns copied under `<main_table>.<column>`.
pub fn left_join(inputs: &JoinInputs<'_>) -> Vec<Row> {
    let cond = inputs.condition;
    let resolver = FieldResolver::QUALIFIED;
    let mut out = Vec::with_capacity(inputs.main_rows.len());

    for main_row in inputs.main_rows {
        let matched: Vec<&Row> = inputs
            .join_rows
            .iter()
            .filter(|join_row| resolver.matches(main_row, &cond.left, join_row, &cond.right))
            .collect();

        if matched.is_empty() {
            out.push(build_result_row(
                Some(main_row),
                None,
                inputs.selected_fields,
                inputs.main_table,
                true,
            ));
            continue;
        }

        out.extend(matched.into_iter().map(|join_row| {
            build_result_row(
                Some(main_row),
                Some(join_row),
                inputs.selected_fields,
                inputs.main_table,
                true,
            )
        }));
    }

    out
}
