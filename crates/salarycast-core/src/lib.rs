//! Core domain types and feature encoding for salarycast.
//!
//! This crate defines the shared vocabulary of the salary-prediction system:
//!
//! - **Raw inputs** ([`input::RawInput`]): the validated job attributes a
//!   caller supplies for one prediction.
//! - **Feature schema** ([`schema::FeatureSchema`]): the ordered column list
//!   the trained model expects, loaded from an external artifact and treated
//!   as immutable.
//! - **Feature row** ([`row::FeatureRow`]): one fixed-width record over a
//!   schema, all writes lookup-or-skip.
//! - **Feature encoder** ([`encoder::FeatureEncoder`]): the deterministic
//!   mapping from raw input to feature row.
//! - **Currency** ([`currency`]): fixed-rate USD/INR display conversion.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use salarycast_core::encoder::FeatureEncoder;
//! use salarycast_core::input::{
//!     CompanySize, EmploymentType, ExperienceLevel, RawInput, RemoteRatio,
//! };
//! use salarycast_core::schema::FeatureSchema;
//!
//! let schema = Arc::new(FeatureSchema::new(vec![
//!     "experience_encoded".to_string(),
//!     "remote_ratio".to_string(),
//!     "job_Data Scientist".to_string(),
//! ]).unwrap());
//!
//! let input = RawInput::builder()
//!     .experience_level(ExperienceLevel::Senior)
//!     .employment_type(EmploymentType::FullTime)
//!     .job_title("Data Scientist")
//!     .company_size(CompanySize::Medium)
//!     .company_location("US".parse().unwrap())
//!     .employee_residence("US".parse().unwrap())
//!     .remote_ratio(RemoteRatio::Remote)
//!     .work_year(2024.try_into().unwrap())
//!     .build()
//!     .unwrap();
//!
//! let row = FeatureEncoder::new(schema).encode(&input);
//! assert_eq!(row.values(), &[3.0, 100.0, 1.0]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod currency;
pub mod encoder;
pub mod error;
pub mod input;
pub mod row;
pub mod schema;

pub use currency::{Currency, CurrencyConverter};
pub use encoder::FeatureEncoder;
pub use error::{CoreError, CoreResult};
pub use input::{
    CompanySize, CountryCode, EmploymentType, ExperienceLevel, RawInput, RawInputBuilder,
    RemoteRatio, WorkYear,
};
pub use row::FeatureRow;
pub use schema::FeatureSchema;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_re_exports() {
        let _ = CurrencyConverter::default();
        let _ = RawInput::builder();
    }
}
