//! Salary dataset loading and market-analysis aggregations for salarycast.
//!
//! The dataset is an externally produced CSV of cleaned salary records,
//! consumed read-only. [`SalaryDataset`] loads it once;
//! [`MarketAnalysis`] computes the aggregate views the analysis pages show
//! (salary by experience, company size, remote ratio, location and year).
//!
//! # Example
//!
//! ```no_run
//! use salarycast_data::{MarketAnalysis, SalaryDataset};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dataset = SalaryDataset::load("clean_data.csv")?;
//! let analysis = MarketAnalysis::new(&dataset);
//!
//! let overview = analysis.overview();
//! println!(
//!     "{} records, mean ${:.0}",
//!     overview.total_records, overview.mean_salary_usd
//! );
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod analysis;
pub mod dataset;
pub mod error;

pub use analysis::{
    CompanySizeSummary, ExperienceSummary, LocationSummary, MarketAnalysis, MarketOverview,
    RemoteRatioSummary, SimilarProfiles, YearSummary,
};
pub use dataset::{SalaryDataset, SalaryRecord};
pub use error::{DataError, DataResult};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
