use model::{core::value::Value, query::descriptor::split_qualified, records::row::Row};

/// How a `table.field` reference is looked up in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveStrategy {
    /// Only the bare `field` key is consulted.
    Bare,
    /// The exact `table.field` key first, then the bare `field` key.
    QualifiedThenBare,
}

/// Resolves possibly-qualified field references against rows that may store
/// their columns bare (freshly loaded) or prefixed (produced by a join).
#[derive(Debug, Clone, Copy)]
pub struct FieldResolver {
    strategy: ResolveStrategy,
}

impl FieldResolver {
    pub const BARE: FieldResolver = FieldResolver {
        strategy: ResolveStrategy::Bare,
    };

    pub const QUALIFIED: FieldResolver = FieldResolver {
        strategy: ResolveStrategy::QualifiedThenBare,
    };

    /// Returns `None` when no candidate key holds a value.
    pub fn resolve<'a>(&self, row: &'a Row, compound: &str) -> Option<&'a Value> {
        let (_, field) = split_qualified(compound);
        match self.strategy {
            ResolveStrategy::Bare => row.get(field),
            ResolveStrategy::QualifiedThenBare => row.get(compound).or_else(|| row.get(field)),
        }
    }

    /// Whether `left` on the main row and `right` on the join row resolve to
    /// equal values. An unresolved side never matches; two explicit nulls do.
    pub fn matches(&self, main_row: &Row, left: &str, join_row: &Row, right: &str) -> bool {
        match (self.resolve(main_row, left), self.resolve(join_row, right)) {
            (Some(a), Some(b)) => a.equal(b),
            _ => false,
        }
    }
}
