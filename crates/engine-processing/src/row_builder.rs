use model::{core::value::Value, query::descriptor::split_qualified, records::row::Row};

/// Assembles one output row from a main-side row and an optional join-side
/// row. Every join algorithm goes through here, so column naming is the
/// same whatever the join type.
///
/// With `include_all_main_fields`, each column of `main_row` is first copied
/// under `<main_table>.<column>`. Then every selected field is written under
/// its key exactly as written in the query: a bare field belongs to
/// `main_table`, a field of another table is read from `join_row`, and a
/// join-side field with no join row is `Null`.
pub fn build_result_row(
    main_row: Option<&Row>,
    join_row: Option<&Row>,
    selected_fields: &[String],
    main_table: &str,
    include_all_main_fields: bool,
) -> Row {
    let mut result = Row::with_capacity(selected_fields.len());

    if include_all_main_fields && let Some(main) = main_row {
        for field in main.fields() {
            result.insert(&format!("{main_table}.{}", field.name), field.value.clone());
        }
    }

    for selected in selected_fields {
        let (table, field) = match split_qualified(selected) {
            (Some(table), field) => (table, field),
            (None, field) => (main_table, field),
        };

        let value = match (main_row, join_row) {
            (Some(main), _) if table == main_table => main.get(field).cloned(),
            (_, Some(join)) => join.get(field).cloned(),
            _ => Some(Value::Null),
        };
        result.insert(selected, value);
    }

    result
}
