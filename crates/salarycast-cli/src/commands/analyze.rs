//! Analyze Command Implementation
//!
//! Aggregate market analysis over the cleaned salary dataset: salary by
//! experience level, company size, remote ratio, location and year.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use salarycast_core::currency::{format_amount, Currency};
use salarycast_data::{MarketAnalysis, SalaryDataset};
use std::path::PathBuf;

/// Which analysis view to print.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    /// Headline dataset numbers.
    Overview,
    /// Salary by experience level.
    Experience,
    /// Salary by company size and remote ratio.
    Company,
    /// Top company locations by average salary.
    Location,
    /// Salary trend by work year.
    Trends,
}

/// Aggregate market analysis over the salary dataset
///
/// # Example
///
/// ```bash
/// salarycast analyze --data clean_data.csv --report experience
/// ```
#[derive(Args, Debug, Clone)]
pub struct AnalyzeCommand {
    /// Path to the cleaned salary dataset CSV
    #[arg(long, env = "SALARYCAST_DATA")]
    pub data: PathBuf,

    /// Analysis view to print
    #[arg(long, value_enum, default_value = "overview")]
    pub report: Report,

    /// Minimum records per location for the location report
    #[arg(long, default_value = "10")]
    pub min_count: usize,

    /// Maximum locations to list in the location report
    #[arg(long, default_value = "15")]
    pub limit: usize,
}

impl AnalyzeCommand {
    /// Execute the analyze command
    pub async fn run(&self) -> Result<()> {
        let dataset = SalaryDataset::load(&self.data)
            .with_context(|| format!("loading dataset from {:?}", self.data))?;
        let analysis = MarketAnalysis::new(&dataset);

        match self.report {
            Report::Overview => self.print_overview(&analysis),
            Report::Experience => self.print_experience(&analysis),
            Report::Company => self.print_company(&analysis),
            Report::Location => self.print_locations(&analysis),
            Report::Trends => self.print_trends(&analysis),
        }
        Ok(())
    }

    fn print_overview(&self, analysis: &MarketAnalysis<'_>) {
        let overview = analysis.overview();
        println!("Market overview");
        println!("  Total records:   {}", overview.total_records);
        println!(
            "  Average salary:  {}",
            format_amount(overview.mean_salary_usd, Currency::Usd)
        );
        println!("  Countries:       {}", overview.distinct_locations);
    }

    fn print_experience(&self, analysis: &MarketAnalysis<'_>) {
        println!("Salary by experience level");
        println!("  {:<6} {:>12} {:>12} {:>8}", "level", "mean", "median", "count");
        for summary in analysis.salary_by_experience() {
            println!(
                "  {:<6} {:>12} {:>12} {:>8}",
                summary.level.code(),
                format_amount(summary.mean_usd, Currency::Usd),
                format_amount(summary.median_usd, Currency::Usd),
                summary.count
            );
        }
    }

    fn print_company(&self, analysis: &MarketAnalysis<'_>) {
        println!("Salary by company size");
        println!("  {:<6} {:>12} {:>8}", "size", "mean", "count");
        for summary in analysis.salary_by_company_size() {
            println!(
                "  {:<6} {:>12} {:>8}",
                summary.size.code(),
                format_amount(summary.mean_usd, Currency::Usd),
                summary.count
            );
        }

        println!();
        println!("Salary by remote ratio");
        println!("  {:<6} {:>12} {:>8}", "remote", "mean", "count");
        for summary in analysis.salary_by_remote_ratio() {
            println!(
                "  {:<6} {:>12} {:>8}",
                summary.remote_ratio,
                format_amount(summary.mean_usd, Currency::Usd),
                summary.count
            );
        }
    }

    fn print_locations(&self, analysis: &MarketAnalysis<'_>) {
        println!(
            "Top {} locations by average salary (min {} records)",
            self.limit, self.min_count
        );
        println!("  {:<9} {:>12} {:>8}", "location", "mean", "count");
        for summary in analysis.top_locations(self.min_count, self.limit) {
            println!(
                "  {:<9} {:>12} {:>8}",
                summary.location,
                format_amount(summary.mean_usd, Currency::Usd),
                summary.count
            );
        }
    }

    fn print_trends(&self, analysis: &MarketAnalysis<'_>) {
        println!("Salary trend by year");
        println!("  {:<6} {:>12} {:>8}", "year", "mean", "count");
        for summary in analysis.salary_trend_by_year() {
            println!(
                "  {:<6} {:>12} {:>8}",
                summary.year,
                format_amount(summary.mean_usd, Currency::Usd),
                summary.count
            );
        }
    }
}
