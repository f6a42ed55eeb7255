//! Serving configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ServingError, ServingResult};
use salarycast_core::currency::DEFAULT_USD_TO_INR;

/// Configuration for a salarycast serving instance.
///
/// # Example
///
/// ```
/// use salarycast_serving::config::ServingConfig;
///
/// let config = ServingConfig::builder()
///     .model_dir("/models/salary-rf")
///     .usd_to_inr(83.0)
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServingConfig {
    /// Directory holding the exported model artifacts.
    pub model_dir: PathBuf,

    /// Optional path to the cleaned salary dataset CSV, used only by the
    /// analysis views.
    pub dataset_path: Option<PathBuf>,

    /// Fixed USD to INR display-conversion rate.
    pub usd_to_inr: f64,

    /// Load the model lazily on the first prediction instead of at startup.
    pub lazy_loading: bool,
}

impl Default for ServingConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("./model"),
            dataset_path: None,
            usd_to_inr: DEFAULT_USD_TO_INR,
            lazy_loading: false,
        }
    }
}

impl ServingConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ServingConfigBuilder {
        ServingConfigBuilder::default()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ServingError::Config`] for an empty model directory or a
    /// non-positive or non-finite conversion rate.
    pub fn validate(&self) -> ServingResult<()> {
        if self.model_dir.as_os_str().is_empty() {
            return Err(ServingError::config("model_dir must not be empty"));
        }
        if !self.usd_to_inr.is_finite() || self.usd_to_inr <= 0.0 {
            return Err(ServingError::config(format!(
                "usd_to_inr must be finite and positive, got {}",
                self.usd_to_inr
            )));
        }
        Ok(())
    }
}

/// Builder for [`ServingConfig`].
#[derive(Debug, Default)]
pub struct ServingConfigBuilder {
    model_dir: Option<PathBuf>,
    dataset_path: Option<PathBuf>,
    usd_to_inr: Option<f64>,
    lazy_loading: Option<bool>,
}

impl ServingConfigBuilder {
    /// Set the model directory.
    pub fn model_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.model_dir = Some(dir.into());
        self
    }

    /// Set the dataset path.
    pub fn dataset_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dataset_path = Some(path.into());
        self
    }

    /// Set the USD to INR rate.
    pub fn usd_to_inr(mut self, rate: f64) -> Self {
        self.usd_to_inr = Some(rate);
        self
    }

    /// Enable or disable lazy loading.
    pub fn lazy_loading(mut self, lazy: bool) -> Self {
        self.lazy_loading = Some(lazy);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ServingConfig {
        let default = ServingConfig::default();
        ServingConfig {
            model_dir: self.model_dir.unwrap_or(default.model_dir),
            dataset_path: self.dataset_path.or(default.dataset_path),
            usd_to_inr: self.usd_to_inr.unwrap_or(default.usd_to_inr),
            lazy_loading: self.lazy_loading.unwrap_or(default.lazy_loading),
        }
    }
}
