use crate::core::value::Value;
use serde::{Serialize, Serializer, ser::SerializeMap};

/// A named cell. `value: None` is an absent ("undefined") cell, which is
/// distinct from an explicit `Some(Value::Null)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub value: Option<Value>,
}

/// An ordered mapping from column name to value.
///
/// Column names are stored exactly as given, so a row may hold bare keys
/// (`id`), prefixed keys (`orders.id`) or both side by side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    fields: Vec<Field>,
}

impl Row {
    pub fn new() -> Self {
        Row { fields: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Row {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Sets `name` to `value`, replacing an existing cell of the same name
    /// in place so column order follows first insertion.
    pub fn insert(&mut self, name: &str, value: Option<Value>) {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => field.value = value,
            None => self.fields.push(Field {
                name: name.to_string(),
                value,
            }),
        }
    }

    pub fn set(&mut self, name: &str, value: Value) {
        self.insert(name, Some(value));
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Looks up the value stored under the exact key `name`. Absent keys and
    /// keys holding an undefined cell both yield `None`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.field(name).and_then(|f| f.value.as_ref())
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// A row with the same keys as `self`, every value set to `Null`.
    pub fn null_shaped(&self) -> Row {
        let mut row = Row::with_capacity(self.len());
        for key in self.keys() {
            row.set(key, Value::Null);
        }
        row
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: AsRef<str>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (name, value) in iter {
            row.set(name.as_ref(), value.into());
        }
        row
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for field in &self.fields {
            map.serialize_entry(&field.name, &field.value)?;
        }
        map.end()
    }
}
