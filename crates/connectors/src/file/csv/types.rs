use model::core::value::Value;

/// Cell kinds tried in order; the first one that parses wins and a cell no
/// kind accepts stays a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellKind {
    Int,
    Float,
    Boolean,
}

const CHAIN: &[CellKind] = &[CellKind::Int, CellKind::Float, CellKind::Boolean];

/// Numerals such as `007` or `-01.5` are identifiers, not numbers.
fn has_leading_zero(token: &str) -> bool {
    let digits = token.strip_prefix(['-', '+']).unwrap_or(token);
    let mut chars = digits.chars();
    chars.next() == Some('0') && chars.next().is_some_and(|c| c.is_ascii_digit())
}

fn parse_as(kind: CellKind, cell: &str) -> Option<Value> {
    let token = cell.trim();
    match kind {
        CellKind::Int | CellKind::Float if has_leading_zero(token) => None,
        CellKind::Int => token.parse::<i64>().ok().map(Value::Int),
        CellKind::Float => token
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(Value::Float),
        CellKind::Boolean => match token.to_ascii_lowercase().as_str() {
            "true" => Some(Value::Boolean(true)),
            "false" => Some(Value::Boolean(false)),
            _ => None,
        },
    }
}

/// Converts a raw CSV cell to a value. Without inference every cell stays a
/// string. With it, numbers and booleans are recognised; everything else,
/// including an empty cell, keeps its raw text.
pub fn cell_value(cell: &str, infer: bool) -> Value {
    if !infer {
        return Value::String(cell.to_string());
    }

    CHAIN
        .iter()
        .find_map(|kind| parse_as(*kind, cell))
        .unwrap_or_else(|| Value::String(cell.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_numbers_booleans_and_strings() {
        assert_eq!(cell_value("42", true), Value::Int(42));
        assert_eq!(cell_value(" 42 ", true), Value::Int(42));
        assert_eq!(cell_value("-3.5", true), Value::Float(-3.5));
        assert_eq!(cell_value("0.25", true), Value::Float(0.25));
        assert_eq!(cell_value("0", true), Value::Int(0));
        assert_eq!(cell_value("TRUE", true), Value::Boolean(true));
        assert_eq!(cell_value("Alice", true), Value::from("Alice"));
    }

    #[test]
    fn empty_and_padded_text_cells_keep_raw_text() {
        assert_eq!(cell_value("", true), Value::from(""));
        assert_eq!(cell_value(" Alice ", true), Value::from(" Alice "));
    }

    #[test]
    fn leading_zero_numerals_stay_strings() {
        assert_eq!(cell_value("007", true), Value::from("007"));
        assert_eq!(cell_value("-01.5", true), Value::from("-01.5"));
    }

    #[test]
    fn non_finite_floats_stay_strings() {
        assert_eq!(cell_value("NaN", true), Value::from("NaN"));
        assert_eq!(cell_value("inf", true), Value::from("inf"));
    }

    #[test]
    fn inference_off_keeps_raw_text() {
        assert_eq!(cell_value("42", false), Value::from("42"));
        assert_eq!(cell_value("", false), Value::from(""));
    }
}
