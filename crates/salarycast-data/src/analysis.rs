//! Aggregate market-analysis summaries over the salary dataset.
//!
//! These mirror the analysis views of the original application: salary by
//! experience level, company size, remote ratio, location and year, plus a
//! similar-profile lookup used to contextualize individual predictions.
//! All groupings return sorted, deterministic output; an empty dataset
//! yields empty summaries rather than errors.

use crate::dataset::SalaryDataset;
use salarycast_core::input::{CompanySize, ExperienceLevel};
use std::collections::BTreeMap;

/// Headline numbers for the whole dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketOverview {
    /// Total number of salary records.
    pub total_records: usize,

    /// Mean salary across all records, in USD.
    pub mean_salary_usd: f64,

    /// Number of distinct company locations.
    pub distinct_locations: usize,
}

/// Salary statistics for one experience level.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceSummary {
    /// The experience level.
    pub level: ExperienceLevel,

    /// Mean salary in USD.
    pub mean_usd: f64,

    /// Median salary in USD.
    pub median_usd: f64,

    /// Number of records at this level.
    pub count: usize,
}

/// Salary statistics for one company-size band.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanySizeSummary {
    /// The company size.
    pub size: CompanySize,

    /// Mean salary in USD.
    pub mean_usd: f64,

    /// Number of records in this band.
    pub count: usize,
}

/// Salary statistics for one remote-work percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteRatioSummary {
    /// The remote percentage (0, 50 or 100 in the cleaned data).
    pub remote_ratio: u32,

    /// Mean salary in USD.
    pub mean_usd: f64,

    /// Number of records at this percentage.
    pub count: usize,
}

/// Salary statistics for one company location.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationSummary {
    /// ISO-2 company location code.
    pub location: String,

    /// Mean salary in USD.
    pub mean_usd: f64,

    /// Number of records at this location.
    pub count: usize,
}

/// Salary statistics for one work year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearSummary {
    /// The work year.
    pub year: u16,

    /// Mean salary in USD.
    pub mean_usd: f64,

    /// Number of records for this year.
    pub count: usize,
}

/// Records matching a given experience level and company size.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarProfiles {
    /// How many matching records were found.
    pub count: usize,

    /// Mean salary of the matching records, in USD (0 when none match).
    pub mean_usd: f64,
}

/// Market-analysis view over a loaded dataset.
#[derive(Debug, Clone, Copy)]
pub struct MarketAnalysis<'a> {
    dataset: &'a SalaryDataset,
}

impl<'a> MarketAnalysis<'a> {
    /// Create an analysis view over a dataset.
    pub fn new(dataset: &'a SalaryDataset) -> Self {
        Self { dataset }
    }

    /// Headline numbers for the whole dataset.
    pub fn overview(&self) -> MarketOverview {
        let salaries: Vec<f64> = self
            .dataset
            .records()
            .iter()
            .map(|r| r.salary_in_usd)
            .collect();
        MarketOverview {
            total_records: salaries.len(),
            mean_salary_usd: mean(&salaries),
            distinct_locations: self.dataset.distinct_company_locations(),
        }
    }

    /// Mean, median and count per experience level, in ordinal order.
    pub fn salary_by_experience(&self) -> Vec<ExperienceSummary> {
        ExperienceLevel::all()
            .iter()
            .filter_map(|level| {
                let salaries: Vec<f64> = self
                    .dataset
                    .records()
                    .iter()
                    .filter(|r| r.experience_level == *level)
                    .map(|r| r.salary_in_usd)
                    .collect();
                if salaries.is_empty() {
                    return None;
                }
                Some(ExperienceSummary {
                    level: *level,
                    mean_usd: mean(&salaries),
                    median_usd: median(&salaries),
                    count: salaries.len(),
                })
            })
            .collect()
    }

    /// Mean and count per company-size band, in ordinal order.
    pub fn salary_by_company_size(&self) -> Vec<CompanySizeSummary> {
        CompanySize::all()
            .iter()
            .filter_map(|size| {
                let salaries: Vec<f64> = self
                    .dataset
                    .records()
                    .iter()
                    .filter(|r| r.company_size == *size)
                    .map(|r| r.salary_in_usd)
                    .collect();
                if salaries.is_empty() {
                    return None;
                }
                Some(CompanySizeSummary {
                    size: *size,
                    mean_usd: mean(&salaries),
                    count: salaries.len(),
                })
            })
            .collect()
    }

    /// Mean and count per remote percentage, ascending.
    pub fn salary_by_remote_ratio(&self) -> Vec<RemoteRatioSummary> {
        let mut groups: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
        for record in self.dataset.records() {
            groups
                .entry(record.remote_ratio)
                .or_default()
                .push(record.salary_in_usd);
        }
        groups
            .into_iter()
            .map(|(remote_ratio, salaries)| RemoteRatioSummary {
                remote_ratio,
                mean_usd: mean(&salaries),
                count: salaries.len(),
            })
            .collect()
    }

    /// Company locations with at least `min_count` records, sorted by mean
    /// salary descending and truncated to `limit` entries.
    pub fn top_locations(&self, min_count: usize, limit: usize) -> Vec<LocationSummary> {
        let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
        for record in self.dataset.records() {
            groups
                .entry(record.company_location.as_str().to_string())
                .or_default()
                .push(record.salary_in_usd);
        }

        let mut summaries: Vec<LocationSummary> = groups
            .into_iter()
            .filter(|(_, salaries)| salaries.len() >= min_count)
            .map(|(location, salaries)| LocationSummary {
                location,
                mean_usd: mean(&salaries),
                count: salaries.len(),
            })
            .collect();

        // BTreeMap iteration gives a stable tiebreak on location code.
        summaries.sort_by(|a, b| b.mean_usd.total_cmp(&a.mean_usd));
        summaries.truncate(limit);
        summaries
    }

    /// Mean and count per work year, ascending by year.
    pub fn salary_trend_by_year(&self) -> Vec<YearSummary> {
        let mut groups: BTreeMap<u16, Vec<f64>> = BTreeMap::new();
        for record in self.dataset.records() {
            groups
                .entry(record.work_year)
                .or_default()
                .push(record.salary_in_usd);
        }
        groups
            .into_iter()
            .map(|(year, salaries)| YearSummary {
                year,
                mean_usd: mean(&salaries),
                count: salaries.len(),
            })
            .collect()
    }

    /// Count and mean salary of records matching both attributes.
    pub fn similar_profiles(
        &self,
        level: ExperienceLevel,
        size: CompanySize,
    ) -> SimilarProfiles {
        let salaries: Vec<f64> = self
            .dataset
            .records()
            .iter()
            .filter(|r| r.experience_level == level && r.company_size == size)
            .map(|r| r.salary_in_usd)
            .collect();
        SimilarProfiles {
            count: salaries.len(),
            mean_usd: mean(&salaries),
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::SalaryRecord;
    use salarycast_core::input::CountryCode;

    fn record(
        year: u16,
        level: ExperienceLevel,
        size: CompanySize,
        location: &str,
        remote: u32,
        salary: f64,
    ) -> SalaryRecord {
        SalaryRecord {
            work_year: year,
            experience_level: level,
            employment_type: "FT".to_string(),
            job_title: "Data Scientist".to_string(),
            salary_in_usd: salary,
            employee_residence: CountryCode::new(location).unwrap(),
            remote_ratio: remote,
            company_location: CountryCode::new(location).unwrap(),
            company_size: size,
        }
    }

    fn dataset() -> SalaryDataset {
        SalaryDataset::from_records(vec![
            record(2022, ExperienceLevel::Entry, CompanySize::Small, "IN", 0, 50_000.0),
            record(2023, ExperienceLevel::Senior, CompanySize::Large, "US", 100, 150_000.0),
            record(2023, ExperienceLevel::Senior, CompanySize::Large, "US", 50, 170_000.0),
            record(2024, ExperienceLevel::Mid, CompanySize::Medium, "GB", 100, 90_000.0),
        ])
    }

    #[test]
    fn test_overview() {
        let dataset = dataset();
        let overview = MarketAnalysis::new(&dataset).overview();
        assert_eq!(overview.total_records, 4);
        assert_eq!(overview.mean_salary_usd, 115_000.0);
        assert_eq!(overview.distinct_locations, 3);
    }

    #[test]
    fn test_salary_by_experience() {
        let dataset = dataset();
        let summaries = MarketAnalysis::new(&dataset).salary_by_experience();

        // Ordinal order, empty levels absent (no Executive records).
        let levels: Vec<_> = summaries.iter().map(|s| s.level).collect();
        assert_eq!(
            levels,
            vec![
                ExperienceLevel::Entry,
                ExperienceLevel::Mid,
                ExperienceLevel::Senior
            ]
        );

        let senior = &summaries[2];
        assert_eq!(senior.count, 2);
        assert_eq!(senior.mean_usd, 160_000.0);
        assert_eq!(senior.median_usd, 160_000.0);
    }

    #[test]
    fn test_salary_by_company_size() {
        let dataset = dataset();
        let summaries = MarketAnalysis::new(&dataset).salary_by_company_size();
        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[2].size, CompanySize::Large);
        assert_eq!(summaries[2].count, 2);
    }

    #[test]
    fn test_salary_by_remote_ratio() {
        let dataset = dataset();
        let summaries = MarketAnalysis::new(&dataset).salary_by_remote_ratio();
        let ratios: Vec<_> = summaries.iter().map(|s| s.remote_ratio).collect();
        assert_eq!(ratios, vec![0, 50, 100]);

        let fully_remote = &summaries[2];
        assert_eq!(fully_remote.count, 2);
        assert_eq!(fully_remote.mean_usd, 120_000.0);
    }

    #[test]
    fn test_top_locations_filters_and_sorts() {
        let dataset = dataset();
        let analysis = MarketAnalysis::new(&dataset);

        let top = analysis.top_locations(1, 10);
        assert_eq!(top[0].location, "US");
        assert_eq!(top[0].count, 2);

        // min_count 2 drops the single-record locations.
        let top = analysis.top_locations(2, 10);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].location, "US");

        // limit truncates.
        let top = analysis.top_locations(1, 2);
        assert_eq!(top.len(), 2);
    }

    #[test]
    fn test_salary_trend_by_year() {
        let dataset = dataset();
        let trend = MarketAnalysis::new(&dataset).salary_trend_by_year();
        let years: Vec<_> = trend.iter().map(|s| s.year).collect();
        assert_eq!(years, vec![2022, 2023, 2024]);
        assert_eq!(trend[1].count, 2);
    }

    #[test]
    fn test_similar_profiles() {
        let dataset = dataset();
        let analysis = MarketAnalysis::new(&dataset);

        let similar = analysis.similar_profiles(ExperienceLevel::Senior, CompanySize::Large);
        assert_eq!(similar.count, 2);
        assert_eq!(similar.mean_usd, 160_000.0);

        let none = analysis.similar_profiles(ExperienceLevel::Executive, CompanySize::Small);
        assert_eq!(none.count, 0);
        assert_eq!(none.mean_usd, 0.0);
    }

    #[test]
    fn test_empty_dataset_yields_empty_summaries() {
        let dataset = SalaryDataset::default();
        let analysis = MarketAnalysis::new(&dataset);
        assert!(analysis.salary_by_experience().is_empty());
        assert!(analysis.salary_by_remote_ratio().is_empty());
        assert!(analysis.top_locations(1, 10).is_empty());
        assert_eq!(analysis.overview().total_records, 0);
    }

    #[test]
    fn test_median_even_and_odd() {
        assert_eq!(median(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(median(&[]), 0.0);
    }
}
