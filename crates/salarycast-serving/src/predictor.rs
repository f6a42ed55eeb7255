//! The predictor service: one raw input in, one salary prediction out.

use crate::error::{ServingError, ServingResult};
use crate::model_loader::ModelLoader;
use parking_lot::RwLock;
use salarycast_core::currency::{Currency, CurrencyConverter};
use salarycast_core::input::RawInput;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// A single prediction request.
#[derive(Debug, Clone)]
pub struct PredictionRequest {
    /// Request ID for tracing.
    pub request_id: String,

    /// Raw job attributes to predict a salary for.
    pub input: RawInput,

    /// Optional second currency to convert the prediction into for display.
    pub display_currency: Option<Currency>,
}

/// Response to a prediction request.
#[derive(Debug, Clone)]
pub struct PredictionResponse {
    /// Request ID echoed back.
    pub request_id: String,

    /// Predicted annual salary in the model's training currency (USD).
    pub salary_usd: f64,

    /// Converted amount, when a non-USD display currency was requested.
    pub converted: Option<ConvertedAmount>,

    /// Version of the model that produced the prediction.
    pub model_version: String,

    /// End-to-end latency of the encode-predict cycle.
    pub latency_ms: f64,
}

/// A display-currency conversion of the predicted salary.
#[derive(Debug, Clone)]
pub struct ConvertedAmount {
    /// The display currency.
    pub currency: Currency,

    /// The converted amount.
    pub amount: f64,

    /// The fixed conversion rate applied.
    pub rate: f64,
}

/// Running statistics for the predictor service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceStats {
    /// Total requests received.
    pub total_requests: u64,

    /// Requests that produced a prediction.
    pub successful_requests: u64,

    /// Requests that failed.
    pub failed_requests: u64,

    /// Mean latency over successful requests, in milliseconds.
    pub avg_latency_ms: f64,
}

/// Serves predictions from the currently loaded model.
///
/// Each request is one synchronous encode-predict cycle: the raw input is
/// encoded against the loaded model's schema and submitted to the model,
/// and the scalar comes back optionally converted for display. The model is
/// never invoked when no model is loaded.
pub struct PredictorService {
    loader: Arc<ModelLoader>,
    converter: CurrencyConverter,
    deferred_export: Option<PathBuf>,
    stats: RwLock<ServiceStats>,
}

impl PredictorService {
    /// Create a service over a model loader.
    pub fn new(loader: Arc<ModelLoader>, converter: CurrencyConverter) -> Self {
        Self {
            loader,
            converter,
            deferred_export: None,
            stats: RwLock::new(ServiceStats::default()),
        }
    }

    /// Create a service that defers loading the given export directory until
    /// the first prediction.
    pub fn with_deferred_load(
        loader: Arc<ModelLoader>,
        converter: CurrencyConverter,
        export: impl Into<PathBuf>,
    ) -> Self {
        Self {
            loader,
            converter,
            deferred_export: Some(export.into()),
            stats: RwLock::new(ServiceStats::default()),
        }
    }

    /// Handle one prediction request.
    ///
    /// # Errors
    ///
    /// - [`ServingError::ModelNotLoaded`] when no model is ready and no
    ///   deferred export was configured; the model is never invoked.
    /// - [`ServingError::ModelLoad`] / [`ServingError::SchemaLoad`] when a
    ///   deferred export fails to load on the first prediction.
    /// - [`ServingError::Prediction`] when the model's prediction call
    ///   fails; the underlying detail is reported verbatim, no retry, no
    ///   partial result.
    pub async fn predict(&self, request: PredictionRequest) -> ServingResult<PredictionResponse> {
        let start = Instant::now();
        debug!(request_id = %request.request_id, "prediction request received");

        let result = self.predict_inner(&request).await;
        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

        match result {
            Ok((salary_usd, model_version)) => {
                self.record_success(latency_ms);

                let converted = match request.display_currency {
                    Some(currency) if currency != Currency::Usd => Some(ConvertedAmount {
                        currency,
                        amount: self.converter.convert(salary_usd, currency),
                        rate: self.converter.usd_to_inr(),
                    }),
                    _ => None,
                };

                info!(
                    request_id = %request.request_id,
                    salary_usd,
                    latency_ms,
                    "prediction served"
                );
                Ok(PredictionResponse {
                    request_id: request.request_id,
                    salary_usd,
                    converted,
                    model_version,
                    latency_ms,
                })
            }
            Err(e) => {
                self.record_failure();
                warn!(request_id = %request.request_id, error = %e, "prediction failed");
                Err(e)
            }
        }
    }

    /// Returns the salary and the version of the model that produced it.
    /// The version is taken from the model held for this prediction, so a
    /// concurrent reload or unload cannot misattribute the response.
    async fn predict_inner(&self, request: &PredictionRequest) -> ServingResult<(f64, String)> {
        if !self.loader.is_ready() {
            if let Some(export) = &self.deferred_export {
                info!(path = %export.display(), "loading deferred model export on first prediction");
                self.loader.load(export).await?;
            }
        }

        let model = self
            .loader
            .current_model()
            .ok_or(ServingError::ModelNotLoaded)?;

        let row = model.encoder.encode(&request.input);
        let salary = model.model.predict(&row)?;
        Ok((salary, model.version.clone()))
    }

    /// Snapshot of the running statistics.
    pub fn stats(&self) -> ServiceStats {
        self.stats.read().clone()
    }

    fn record_success(&self, latency_ms: f64) {
        let mut stats = self.stats.write();
        stats.total_requests += 1;
        stats.successful_requests += 1;
        // Running mean over successful requests only.
        let n = stats.successful_requests as f64;
        stats.avg_latency_ms += (latency_ms - stats.avg_latency_ms) / n;
    }

    fn record_failure(&self) {
        let mut stats = self.stats.write();
        stats.total_requests += 1;
        stats.failed_requests += 1;
    }
}

impl std::fmt::Debug for PredictorService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictorService")
            .field("ready", &self.loader.is_ready())
            .field("stats", &self.stats.read())
            .finish()
    }
}
