use model::records::row::Row;

/// Builds a fresh row holding exactly the keys in `fields`, in that order.
/// A key missing from `row` is kept as undefined.
pub fn project_row(row: &Row, fields: &[String]) -> Row {
    let mut projected = Row::with_capacity(fields.len());
    for field in fields {
        let value = row.field(field).and_then(|f| f.value.clone());
        projected.insert(field, value);
    }
    projected
}

pub fn project(rows: &[Row], fields: &[String]) -> Vec<Row> {
    rows.iter().map(|row| project_row(row, fields)).collect()
}
