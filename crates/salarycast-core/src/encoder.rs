//! Feature encoder: raw job attributes into a model-ready feature row.

use crate::input::RawInput;
use crate::row::FeatureRow;
use crate::schema::{self, FeatureSchema};
use std::sync::Arc;
use tracing::debug;

/// Direct-encoded column names expected by the trained model.
mod columns {
    pub const EXPERIENCE: &str = "experience_encoded";
    pub const COMPANY_SIZE: &str = "company_size_encoded";
    pub const EMPLOYMENT_TYPE: &str = "employment_type_encoded";
    pub const REMOTE_RATIO: &str = "remote_ratio";
    pub const WORK_YEAR: &str = "work_year";
    pub const SAME_LOCATION: &str = "same_location";
    pub const IS_REMOTE: &str = "is_remote";
    pub const IS_HYBRID: &str = "is_hybrid";
}

/// Maps raw inputs into fixed-width feature rows over one schema.
///
/// Encoding is deterministic and side-effect free: the same input against
/// the same schema always produces an identical row. Every write is
/// lookup-or-skip against the schema, so a one-hot column the model was
/// never trained with is silently dropped rather than treated as an error.
#[derive(Debug, Clone)]
pub struct FeatureEncoder {
    schema: Arc<FeatureSchema>,
}

impl FeatureEncoder {
    /// Create an encoder over the given schema.
    pub fn new(schema: Arc<FeatureSchema>) -> Self {
        Self { schema }
    }

    /// The schema this encoder targets.
    pub fn schema(&self) -> &Arc<FeatureSchema> {
        &self.schema
    }

    /// Encode one raw input into a feature row.
    pub fn encode(&self, input: &RawInput) -> FeatureRow {
        let mut row = FeatureRow::zeros(Arc::clone(&self.schema));

        // Ordinal and numeric encodings.
        row.set(columns::EXPERIENCE, input.experience_level.ordinal() as f64);
        row.set(columns::COMPANY_SIZE, input.company_size.ordinal() as f64);
        row.set(
            columns::EMPLOYMENT_TYPE,
            input.employment_type.ordinal() as f64,
        );
        row.set(columns::REMOTE_RATIO, input.remote_ratio.percent() as f64);
        row.set(columns::WORK_YEAR, input.work_year.value() as f64);
        row.set(columns::SAME_LOCATION, input.same_location() as u8 as f64);
        row.set(columns::IS_REMOTE, input.remote_ratio.is_remote() as u8 as f64);
        row.set(columns::IS_HYBRID, input.remote_ratio.is_hybrid() as u8 as f64);

        // One-hot indicators, present-or-skip.
        let job_col = schema::job_title_column(&input.job_title);
        if !row.set(&job_col, 1.0) {
            debug!(column = %job_col, "job title not in schema, indicator dropped");
        }
        let emp_col = schema::employee_country_column(&input.employee_residence);
        if !row.set(&emp_col, 1.0) {
            debug!(column = %emp_col, "employee country not in schema, indicator dropped");
        }
        let comp_col = schema::company_country_column(&input.company_location);
        if !row.set(&comp_col, 1.0) {
            debug!(column = %comp_col, "company country not in schema, indicator dropped");
        }

        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{
        CompanySize, CountryCode, EmploymentType, ExperienceLevel, RemoteRatio, WorkYear,
    };

    fn schema_of(names: &[&str]) -> Arc<FeatureSchema> {
        Arc::new(FeatureSchema::new(names.iter().map(|s| s.to_string()).collect()).unwrap())
    }

    fn input(remote: RemoteRatio, residence: &str, location: &str) -> RawInput {
        RawInput::builder()
            .experience_level(ExperienceLevel::Senior)
            .employment_type(EmploymentType::FullTime)
            .job_title("Data Scientist")
            .company_size(CompanySize::Large)
            .company_location(CountryCode::new(location).unwrap())
            .employee_residence(CountryCode::new(residence).unwrap())
            .remote_ratio(remote)
            .work_year(WorkYear::new(2024).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_row_matches_schema_exactly() {
        let schema = schema_of(&[
            "experience_encoded",
            "company_size_encoded",
            "employment_type_encoded",
            "remote_ratio",
            "work_year",
            "same_location",
            "is_remote",
            "is_hybrid",
        ]);
        let encoder = FeatureEncoder::new(Arc::clone(&schema));
        let row = encoder.encode(&input(RemoteRatio::Hybrid, "IN", "US"));
        assert_eq!(row.len(), schema.len());
    }

    #[test]
    fn test_spec_example_row() {
        // SE + L + "Data Scientist" + fully remote over a four-column schema.
        let schema = schema_of(&[
            "experience_encoded",
            "company_size_encoded",
            "job_Data Scientist",
            "remote_ratio",
        ]);
        let encoder = FeatureEncoder::new(schema);
        let row = encoder.encode(&input(RemoteRatio::Remote, "US", "US"));
        assert_eq!(row.values(), &[3.0, 3.0, 1.0, 100.0]);
    }

    #[test]
    fn test_same_location_flag() {
        let schema = schema_of(&["same_location"]);
        let encoder = FeatureEncoder::new(schema);

        let row = encoder.encode(&input(RemoteRatio::OnSite, "US", "US"));
        assert_eq!(row.get("same_location"), Some(1.0));

        let row = encoder.encode(&input(RemoteRatio::OnSite, "IN", "US"));
        assert_eq!(row.get("same_location"), Some(0.0));
    }

    #[test]
    fn test_remote_flags() {
        let schema = schema_of(&["is_remote", "is_hybrid"]);
        let encoder = FeatureEncoder::new(schema);

        let row = encoder.encode(&input(RemoteRatio::Remote, "IN", "US"));
        assert_eq!(row.get("is_remote"), Some(1.0));
        assert_eq!(row.get("is_hybrid"), Some(0.0));

        let row = encoder.encode(&input(RemoteRatio::Hybrid, "IN", "US"));
        assert_eq!(row.get("is_remote"), Some(0.0));
        assert_eq!(row.get("is_hybrid"), Some(1.0));

        let row = encoder.encode(&input(RemoteRatio::OnSite, "IN", "US"));
        assert_eq!(row.get("is_remote"), Some(0.0));
        assert_eq!(row.get("is_hybrid"), Some(0.0));
    }

    #[test]
    fn test_one_hot_country_columns() {
        let schema = schema_of(&["emp_country_IN", "comp_country_US"]);
        let encoder = FeatureEncoder::new(schema);
        let row = encoder.encode(&input(RemoteRatio::Remote, "IN", "US"));
        assert_eq!(row.get("emp_country_IN"), Some(1.0));
        assert_eq!(row.get("comp_country_US"), Some(1.0));
    }

    #[test]
    fn test_unknown_one_hot_is_dropped() {
        // Schema trained without this job title: the row is still fully
        // defined and no other column is disturbed.
        let schema = schema_of(&["experience_encoded", "job_ML Engineer"]);
        let encoder = FeatureEncoder::new(Arc::clone(&schema));
        let row = encoder.encode(&input(RemoteRatio::OnSite, "IN", "US"));
        assert_eq!(row.len(), 2);
        assert_eq!(row.get("experience_encoded"), Some(3.0));
        assert_eq!(row.get("job_ML Engineer"), Some(0.0));
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let schema = schema_of(&[
            "experience_encoded",
            "employment_type_encoded",
            "work_year",
            "job_Data Scientist",
            "emp_country_IN",
        ]);
        let encoder = FeatureEncoder::new(schema);
        let raw = input(RemoteRatio::Hybrid, "IN", "US");
        let a = encoder.encode(&raw);
        let b = encoder.encode(&raw);
        assert_eq!(a, b);
    }
}
