use super::JoinInputs;
use crate::{resolve::FieldResolver, row_builder::build_result_row};
use model::{query::join::RightJoinPolicy, records::row::Row};

/// Emits rows in join-row order; every join row appears at least once.
///
/// Under [`RightJoinPolicy::FirstMatch`] each join row is paired with the
/// first matching main row only. Under [`RightJoinPolicy::AllMatches`] it is
/// paired with every matching main row. A join row with no match is paired
/// with a template carrying the first main row's columns, all `Null` (or no
/// columns when the main side is empty).
pub fn right_join(inputs: &JoinInputs<'_>, policy: RightJoinPolicy) -> Vec<Row> {
    let cond = inputs.condition;
    let resolver = FieldResolver::QUALIFIED;
    let template = inputs
        .main_rows
        .first()
        .map(Row::null_shaped)
        .unwrap_or_default();

    let emit = |main_row: &Row, join_row: &Row| {
        build_result_row(
            Some(main_row),
            Some(join_row),
            inputs.selected_fields,
            inputs.main_table,
            true,
        )
    };

    let mut out = Vec::with_capacity(inputs.join_rows.len());
    for join_row in inputs.join_rows {
        let mut matches = inputs
            .main_rows
            .iter()
            .filter(|main_row| resolver.matches(main_row, &cond.left, join_row, &cond.right));

        match policy {
            RightJoinPolicy::FirstMatch => {
                let main_row = matches.next().unwrap_or(&template);
                out.push(emit(main_row, join_row));
            }
            RightJoinPolicy::AllMatches => {
                let before = out.len();
                out.extend(matches.map(|main_row| emit(main_row, join_row)));
                if out.len() == before {
                    out.push(emit(&template, join_row));
                }
            }
        }
    }

    out
}
