//! Feature schema: the ordered column list a trained model expects.
//!
//! The schema is produced by the external training pipeline and consumed
//! here as an opaque, read-only artifact. Nothing in this system ever
//! modifies it.

use crate::error::{CoreError, CoreResult};
use crate::input::CountryCode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Prefix for one-hot job-title indicator columns.
pub const JOB_TITLE_PREFIX: &str = "job_";

/// Prefix for one-hot employee-country indicator columns.
pub const EMPLOYEE_COUNTRY_PREFIX: &str = "emp_country_";

/// Prefix for one-hot company-country indicator columns.
pub const COMPANY_COUNTRY_PREFIX: &str = "comp_country_";

/// Full column name for a job-title indicator.
pub fn job_title_column(title: &str) -> String {
    format!("{JOB_TITLE_PREFIX}{title}")
}

/// Full column name for an employee-country indicator.
pub fn employee_country_column(code: &CountryCode) -> String {
    format!("{EMPLOYEE_COUNTRY_PREFIX}{code}")
}

/// Full column name for a company-country indicator.
pub fn company_country_column(code: &CountryCode) -> String {
    format!("{COMPANY_COUNTRY_PREFIX}{code}")
}

/// Ordered list of feature column names, with O(1) name lookup.
///
/// Serialized form is a plain JSON array of strings, which is exactly the
/// shape of the exported `feature_names.json` artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct FeatureSchema {
    columns: Vec<String>,
    index: HashMap<String, usize>,
}

impl FeatureSchema {
    /// Build a schema from an ordered column list.
    ///
    /// # Errors
    ///
    /// Returns an error if the same column name appears twice.
    pub fn new(columns: Vec<String>) -> CoreResult<Self> {
        let mut index = HashMap::with_capacity(columns.len());
        for (i, name) in columns.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(CoreError::DuplicateColumn(name.clone()));
            }
        }
        Ok(Self { columns, index })
    }

    /// Load a schema from a JSON artifact (array of column names).
    pub fn from_json_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let columns: Vec<String> = serde_json::from_str(&raw)
            .map_err(|e| CoreError::schema_parse(e.to_string()))?;
        Self::new(columns)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Columns in schema order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Position of a column, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Whether the schema contains a column.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }
}

impl TryFrom<Vec<String>> for FeatureSchema {
    type Error = CoreError;

    fn try_from(columns: Vec<String>) -> CoreResult<Self> {
        Self::new(columns)
    }
}

impl From<FeatureSchema> for Vec<String> {
    fn from(schema: FeatureSchema) -> Vec<String> {
        schema.columns
    }
}
