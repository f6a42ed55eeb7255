//! Predict Command Implementation
//!
//! One-shot salary prediction: loads a model export, encodes the supplied
//! job attributes and prints the predicted annual salary.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use salarycast_core::currency::{format_amount, Currency, CurrencyConverter};
use salarycast_core::input::{
    CompanySize, CountryCode, EmploymentType, ExperienceLevel, RawInput, RemoteRatio, WorkYear,
};
use salarycast_data::{MarketAnalysis, SalaryDataset};
use salarycast_serving::{
    ModelLoader, PredictionRequest, PredictorService, ServingConfig,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Currency selection for the printed prediction.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyChoice {
    /// US dollars only.
    Usd,
    /// Indian rupees only.
    Inr,
    /// Both currencies.
    Both,
}

/// Predict an annual salary for one set of job attributes
///
/// # Example
///
/// ```bash
/// salarycast predict \
///     --model-dir /models/salary-rf \
///     --experience SE --employment FT --job-title "Data Scientist" \
///     --company-size L --company-location US --residence IN \
///     --remote 50 --year 2024 --currency both
/// ```
#[derive(Args, Debug, Clone)]
pub struct PredictCommand {
    /// Directory containing the model export
    #[arg(long, short = 'd', env = "SALARYCAST_MODEL_DIR")]
    pub model_dir: PathBuf,

    /// Experience level code (EN, MI, SE, EX)
    #[arg(long)]
    pub experience: String,

    /// Employment type code (FT, PT, CT, FL)
    #[arg(long)]
    pub employment: String,

    /// Job title, e.g. "Data Scientist"
    #[arg(long)]
    pub job_title: String,

    /// Company size code (S, M, L)
    #[arg(long)]
    pub company_size: String,

    /// Company location as an ISO-2 country code
    #[arg(long)]
    pub company_location: String,

    /// Employee residence as an ISO-2 country code
    #[arg(long)]
    pub residence: String,

    /// Remote percentage (0, 50 or 100)
    #[arg(long, default_value = "0")]
    pub remote: u32,

    /// Work year
    #[arg(long, default_value = "2024")]
    pub year: u16,

    /// Currency to display the prediction in
    #[arg(long, value_enum, default_value = "usd")]
    pub currency: CurrencyChoice,

    /// USD to INR conversion rate
    #[arg(long, default_value = "83.0")]
    pub usd_to_inr: f64,

    /// Optional salary dataset CSV, for percentile and similar-profile context
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Defer loading the model export until the first prediction
    #[arg(long)]
    pub lazy: bool,
}

impl PredictCommand {
    /// Execute the predict command
    pub async fn run(&self) -> Result<()> {
        let input = self.build_input()?;
        let config = self.build_config()?;

        let loader = Arc::new(ModelLoader::new());
        let converter = CurrencyConverter::new(config.usd_to_inr);
        let service = if config.lazy_loading {
            PredictorService::with_deferred_load(
                Arc::clone(&loader),
                converter,
                config.model_dir.clone(),
            )
        } else {
            loader
                .load(&config.model_dir)
                .await
                .with_context(|| format!("loading model export from {:?}", config.model_dir))?;
            PredictorService::new(Arc::clone(&loader), converter)
        };

        let display_currency = match self.currency {
            CurrencyChoice::Usd => None,
            CurrencyChoice::Inr | CurrencyChoice::Both => Some(Currency::Inr),
        };

        let response = service
            .predict(PredictionRequest {
                request_id: "cli".to_string(),
                input: input.clone(),
                display_currency,
            })
            .await
            .context("prediction failed")?;

        info!(model_version = %response.model_version, "prediction complete");

        println!();
        println!("Predicted annual salary");
        if self.currency != CurrencyChoice::Inr {
            println!("  {}", format_amount(response.salary_usd, Currency::Usd));
        }
        if let Some(converted) = &response.converted {
            println!(
                "  {} (rate {})",
                format_amount(converted.amount, converted.currency),
                converted.rate
            );
        }
        println!();
        println!(
            "Model: {} ({:.1} ms)",
            response.model_version, response.latency_ms
        );

        if let Some(data_path) = &config.dataset_path {
            self.print_market_context(data_path, &input, response.salary_usd)?;
        }

        Ok(())
    }

    fn build_config(&self) -> Result<ServingConfig> {
        let mut builder = ServingConfig::builder()
            .model_dir(&self.model_dir)
            .usd_to_inr(self.usd_to_inr)
            .lazy_loading(self.lazy);
        if let Some(data) = &self.data {
            builder = builder.dataset_path(data);
        }
        let config = builder.build();
        config.validate().context("invalid serving configuration")?;
        Ok(config)
    }

    fn build_input(&self) -> Result<RawInput> {
        let experience: ExperienceLevel = self
            .experience
            .parse()
            .context("invalid --experience value")?;
        let employment: EmploymentType = self
            .employment
            .parse()
            .context("invalid --employment value")?;
        let company_size: CompanySize = self
            .company_size
            .parse()
            .context("invalid --company-size value")?;
        let company_location: CountryCode = self
            .company_location
            .parse()
            .context("invalid --company-location value")?;
        let residence: CountryCode = self.residence.parse().context("invalid --residence value")?;
        let remote = RemoteRatio::from_percent(self.remote).context("invalid --remote value")?;
        let year = WorkYear::new(self.year).context("invalid --year value")?;

        RawInput::builder()
            .experience_level(experience)
            .employment_type(employment)
            .job_title(&self.job_title)
            .company_size(company_size)
            .company_location(company_location)
            .employee_residence(residence)
            .remote_ratio(remote)
            .work_year(year)
            .build()
            .context("invalid input")
    }

    fn print_market_context(
        &self,
        data_path: &Path,
        input: &RawInput,
        salary_usd: f64,
    ) -> Result<()> {
        let dataset = SalaryDataset::load(data_path)
            .with_context(|| format!("loading dataset from {data_path:?}"))?;
        let analysis = MarketAnalysis::new(&dataset);

        println!();
        println!("Market context ({} records)", dataset.len());
        println!(
            "  Percentile: {:.0}th",
            dataset.salary_percentile(salary_usd)
        );

        let similar = analysis.similar_profiles(input.experience_level, input.company_size);
        if similar.count > 0 {
            let diff_pct = (salary_usd - similar.mean_usd) / similar.mean_usd * 100.0;
            println!(
                "  Similar profiles ({} × {}): {} at {} average ({:+.1}% vs prediction)",
                input.experience_level,
                input.company_size,
                similar.count,
                format_amount(similar.mean_usd, Currency::Usd),
                diff_pct
            );
        }

        Ok(())
    }
}
