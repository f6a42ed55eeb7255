//! Model serving for salarycast.
//!
//! This crate loads exported salary-model artifacts and serves predictions
//! from them:
//!
//! - [`ModelLoader`]: reads an export directory (`model.json`,
//!   `feature_names.json`, optional `metadata.json`) once and shares the
//!   built model read-only.
//! - [`SalaryModel`]: the capability the predictor depends on, a row
//!   shaped like the feature schema in and a scalar salary out. The trained
//!   artifact can be swapped without touching encoding logic.
//! - [`PredictorService`]: one synchronous encode-predict cycle per
//!   request, with display-currency conversion and running statistics.
//!
//! # Quick start
//!
//! ```no_run
//! use std::sync::Arc;
//! use salarycast_core::currency::{Currency, CurrencyConverter};
//! use salarycast_core::input::{
//!     CompanySize, EmploymentType, ExperienceLevel, RawInput, RemoteRatio,
//! };
//! use salarycast_serving::{ModelLoader, PredictionRequest, PredictorService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let loader = Arc::new(ModelLoader::new());
//! loader.load("/models/salary-rf").await?;
//!
//! let service = PredictorService::new(loader, CurrencyConverter::default());
//!
//! let input = RawInput::builder()
//!     .experience_level(ExperienceLevel::Senior)
//!     .employment_type(EmploymentType::FullTime)
//!     .job_title("Data Scientist")
//!     .company_size(CompanySize::Large)
//!     .company_location("US".parse()?)
//!     .employee_residence("IN".parse()?)
//!     .remote_ratio(RemoteRatio::Hybrid)
//!     .work_year(2024.try_into()?)
//!     .build()?;
//!
//! let response = service
//!     .predict(PredictionRequest {
//!         request_id: "req-001".to_string(),
//!         input,
//!         display_currency: Some(Currency::Inr),
//!     })
//!     .await?;
//! println!("predicted: ${:.0}", response.salary_usd);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod model;
pub mod model_loader;
pub mod predictor;

pub use config::{ServingConfig, ServingConfigBuilder};
pub use error::{ServingError, ServingResult};
pub use model::{build_model, ModelSpec, SalaryModel};
pub use model_loader::{LoadedModel, ModelLoader, ModelMetadata};
pub use predictor::{
    ConvertedAmount, PredictionRequest, PredictionResponse, PredictorService, ServiceStats,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ForestSpec, TreeNode, TreeSpec};
    use salarycast_core::currency::{Currency, CurrencyConverter};
    use salarycast_core::input::{
        CompanySize, EmploymentType, ExperienceLevel, RawInput, RemoteRatio,
    };
    use std::sync::Arc;
    use tempfile::tempdir;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "salarycast-serving");
    }

    #[tokio::test]
    async fn test_integration_flow() {
        // Full cycle against a forest export: write artifacts, load, predict.
        let dir = tempdir().unwrap();
        let export = dir.path().join("salary-rf");
        std::fs::create_dir_all(&export).unwrap();

        let columns = vec![
            "experience_encoded",
            "is_remote",
            "job_Data Scientist",
            "emp_country_IN",
        ];
        std::fs::write(
            export.join(model_loader::SCHEMA_FILE),
            serde_json::to_string(&columns).unwrap(),
        )
        .unwrap();

        // Single stump on experience: seniors and up earn more.
        let spec = ModelSpec::RandomForest(ForestSpec {
            trees: vec![TreeSpec {
                nodes: vec![
                    TreeNode::Split {
                        feature: 0,
                        threshold: 2.5,
                        left: 1,
                        right: 2,
                    },
                    TreeNode::Leaf { value: 70_000.0 },
                    TreeNode::Leaf { value: 160_000.0 },
                ],
            }],
        });
        std::fs::write(
            export.join(model_loader::MODEL_FILE),
            serde_json::to_string(&spec).unwrap(),
        )
        .unwrap();
        std::fs::write(
            export.join(model_loader::METADATA_FILE),
            r#"{"name": "salary-rf-v1"}"#,
        )
        .unwrap();

        let loader = Arc::new(ModelLoader::new());
        loader.load(&export).await.unwrap();
        let service = PredictorService::new(loader, CurrencyConverter::new(83.0));

        let input = RawInput::builder()
            .experience_level(ExperienceLevel::Senior)
            .employment_type(EmploymentType::FullTime)
            .job_title("Data Scientist")
            .company_size(CompanySize::Large)
            .company_location("US".parse().unwrap())
            .employee_residence("IN".parse().unwrap())
            .remote_ratio(RemoteRatio::Remote)
            .work_year(2024.try_into().unwrap())
            .build()
            .unwrap();

        let response = service
            .predict(PredictionRequest {
                request_id: "integration".to_string(),
                input,
                display_currency: Some(Currency::Inr),
            })
            .await
            .unwrap();

        assert_eq!(response.salary_usd, 160_000.0);
        assert_eq!(response.model_version, "salary-rf-v1");
        let converted = response.converted.unwrap();
        assert_eq!(converted.amount, 160_000.0 * 83.0);

        let stats = service.stats();
        assert_eq!(stats.successful_requests, 1);
    }
}
