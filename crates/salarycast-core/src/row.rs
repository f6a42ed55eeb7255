//! Feature row: one fully-populated record conforming to a feature schema.

use crate::schema::FeatureSchema;
use std::sync::Arc;

/// A single fixed-width feature record in schema column order.
///
/// Every schema column has exactly one value; columns start at zero and are
/// overwritten by the encoder. Writes to names outside the schema are
/// dropped, so the row can never grow past the schema ("lookup-or-skip").
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    schema: Arc<FeatureSchema>,
    values: Vec<f64>,
}

impl FeatureRow {
    /// Create a zero-initialized row over the given schema.
    pub fn zeros(schema: Arc<FeatureSchema>) -> Self {
        let values = vec![0.0; schema.len()];
        Self { schema, values }
    }

    /// Write a value into a named column.
    ///
    /// Returns `true` if the column exists in the schema and was written,
    /// `false` if the name was unknown and the write was skipped.
    pub fn set(&mut self, name: &str, value: f64) -> bool {
        match self.schema.index_of(name) {
            Some(i) => {
                self.values[i] = value;
                true
            }
            None => false,
        }
    }

    /// Read a named column, if it exists in the schema.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.schema.index_of(name).map(|i| self.values[i])
    }

    /// Values in schema column order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The schema this row conforms to.
    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(names: &[&str]) -> Arc<FeatureSchema> {
        Arc::new(FeatureSchema::new(names.iter().map(|s| s.to_string()).collect()).unwrap())
    }

    #[test]
    fn test_zeros_matches_schema_width() {
        let row = FeatureRow::zeros(schema(&["a", "b", "c"]));
        assert_eq!(row.len(), 3);
        assert_eq!(row.values(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_set_known_column() {
        let mut row = FeatureRow::zeros(schema(&["a", "b"]));
        assert!(row.set("b", 7.0));
        assert_eq!(row.get("b"), Some(7.0));
        assert_eq!(row.values(), &[0.0, 7.0]);
    }

    #[test]
    fn test_set_unknown_column_is_skipped() {
        let mut row = FeatureRow::zeros(schema(&["a"]));
        assert!(!row.set("missing", 1.0));
        assert_eq!(row.get("missing"), None);
        assert_eq!(row.values(), &[0.0]);
        assert_eq!(row.len(), 1);
    }

    #[test]
    fn test_values_preserve_schema_order() {
        let mut row = FeatureRow::zeros(schema(&["x", "y", "z"]));
        row.set("z", 3.0);
        row.set("x", 1.0);
        row.set("y", 2.0);
        assert_eq!(row.values(), &[1.0, 2.0, 3.0]);
    }
}
