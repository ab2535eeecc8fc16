use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identity of the logical source of a value (the parent column for values
/// copied across a foreign-key relationship).
///
/// Only these three strings are consumed by processors; they are joined into
/// the composite key used by the consistency tables.
pub trait ColumnSource {
    fn schema(&self) -> &str;
    fn table(&self) -> &str;
    fn column(&self) -> &str;

    /// `schema.table.column`, or `None` when any part is empty (unkeyed).
    fn composite_key(&self) -> Option<String> {
        composite_key(self.schema(), self.table(), self.column())
    }
}

/// Owned column reference, usable wherever a [`ColumnSource`] is expected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnRef {
    #[serde(default)]
    pub schema: String,
    #[serde(default)]
    pub table: String,
    #[serde(default)]
    pub column: String,
}

impl ColumnRef {
    pub fn new(
        schema: impl Into<String>,
        table: impl Into<String>,
        column: impl Into<String>,
    ) -> Self {
        Self {
            schema: schema.into(),
            table: table.into(),
            column: column.into(),
        }
    }

    /// A reference with no identity; values processed against it are never memoized.
    pub fn unkeyed() -> Self {
        Self::default()
    }

    /// Parse `schema.table.column`. Each part must be non-empty.
    pub fn parse(value: &str) -> Result<Self> {
        let parts: Vec<&str> = value.split('.').collect();
        if parts.len() != 3 {
            return Err(Error::InvalidColumnRef(format!(
                "expected schema.table.column, got '{value}'"
            )));
        }
        if parts.iter().any(|part| part.trim().is_empty()) {
            return Err(Error::InvalidColumnRef(format!(
                "empty component in '{value}'"
            )));
        }
        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

impl ColumnSource for ColumnRef {
    fn schema(&self) -> &str {
        &self.schema
    }

    fn table(&self) -> &str {
        &self.table
    }

    fn column(&self) -> &str {
        &self.column
    }
}

pub fn composite_key(schema: &str, table: &str, column: &str) -> Option<String> {
    if schema.is_empty() || table.is_empty() || column.is_empty() {
        return None;
    }
    Some(format!("{schema}.{table}.{column}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_composite_key_when_fully_qualified() {
        let source = ColumnRef::new("public", "users", "ssn");
        assert_eq!(source.composite_key().as_deref(), Some("public.users.ssn"));
    }

    #[test]
    fn partial_reference_is_unkeyed() {
        assert_eq!(ColumnRef::new("public", "", "ssn").composite_key(), None);
        assert_eq!(ColumnRef::unkeyed().composite_key(), None);
    }

    #[test]
    fn parse_rejects_malformed_references() {
        assert!(ColumnRef::parse("public.users").is_err());
        assert!(ColumnRef::parse("public..ssn").is_err());
        assert!(ColumnRef::parse("a.b.c.d").is_err());

        let parsed = ColumnRef::parse("crm.orders.customer_id").expect("parse");
        assert_eq!(parsed, ColumnRef::new("crm", "orders", "customer_id"));
    }
}
