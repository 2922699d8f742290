use crate::core::value::Value;
use std::{cmp::Ordering, fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

impl Comparator {
    /// Applies the comparison to an optional left-hand value.
    ///
    /// `=` and `!=` use [`Value::equal`], so `Null = Null` holds. An absent
    /// or unordered operand fails every other comparison. An absent operand
    /// equals nothing.
    pub fn test(&self, actual: Option<&Value>, target: &Value) -> bool {
        let equal = actual.is_some_and(|v| v.equal(target));
        let ordering = actual.and_then(|v| v.compare(target));
        match self {
            Comparator::Equal => equal,
            Comparator::NotEqual => !equal,
            Comparator::GreaterThan => matches!(ordering, Some(Ordering::Greater)),
            Comparator::GreaterThanOrEqual => {
                matches!(ordering, Some(Ordering::Greater) | Some(Ordering::Equal))
            }
            Comparator::LessThan => matches!(ordering, Some(Ordering::Less)),
            Comparator::LessThanOrEqual => {
                matches!(ordering, Some(Ordering::Less) | Some(Ordering::Equal))
            }
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Comparator::Equal => "=",
            Comparator::NotEqual => "!=",
            Comparator::GreaterThan => ">",
            Comparator::GreaterThanOrEqual => ">=",
            Comparator::LessThan => "<",
            Comparator::LessThanOrEqual => "<=",
        }
    }
}

impl FromStr for Comparator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(Comparator::Equal),
            "!=" => Ok(Comparator::NotEqual),
            ">" => Ok(Comparator::GreaterThan),
            ">=" => Ok(Comparator::GreaterThanOrEqual),
            "<" => Ok(Comparator::LessThan),
            "<=" => Ok(Comparator::LessThanOrEqual),
            _ => Err(format!("Unsupported comparator: {s}")),
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_supported_symbol() {
        for sym in ["=", "!=", ">", ">=", "<", "<="] {
            let cmp: Comparator = sym.parse().unwrap();
            assert_eq!(cmp.symbol(), sym);
        }
        assert!("<>".parse::<Comparator>().is_err());
        assert!("LIKE".parse::<Comparator>().is_err());
        assert_eq!(
            " = ".parse::<Comparator>(),
            Err("Unsupported comparator:  = ".to_string())
        );
    }

    #[test]
    fn absent_operand_only_passes_not_equal() {
        let target = Value::Int(1);
        assert!(!Comparator::Equal.test(None, &target));
        assert!(Comparator::NotEqual.test(None, &target));
        assert!(!Comparator::GreaterThan.test(None, &target));
        assert!(!Comparator::LessThanOrEqual.test(None, &target));
    }

    #[test]
    fn strings_do_not_coerce_to_numbers() {
        let actual = Value::from("35");
        assert!(!Comparator::GreaterThan.test(Some(&actual), &Value::Int(30)));
        assert!(Comparator::GreaterThan.test(Some(&actual), &Value::from("30")));
    }

    #[test]
    fn null_only_equals_null() {
        let null = Value::Null;
        assert!(Comparator::Equal.test(Some(&null), &Value::Null));
        assert!(!Comparator::NotEqual.test(Some(&null), &Value::Null));
        assert!(Comparator::NotEqual.test(Some(&Value::Int(1)), &Value::Null));
        assert!(!Comparator::GreaterThanOrEqual.test(Some(&null), &Value::Null));
        assert!(!Comparator::Equal.test(None, &Value::Null));
    }
}
