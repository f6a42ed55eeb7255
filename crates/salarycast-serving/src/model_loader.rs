//! Loading and sharing of exported model artifacts.
//!
//! An export directory holds three artifacts:
//!
//! - `model.json`: the [`ModelSpec`](crate::model::ModelSpec) of the
//!   trained regressor;
//! - `feature_names.json`: the ordered feature schema;
//! - `metadata.json`: optional name/description/provenance.
//!
//! The [`ModelLoader`] reads them once, builds the live model and shares it
//! read-only behind an `Arc`. Load failures are fatal preconditions: the
//! previously loaded model (if any) stays in place untouched.

use crate::error::{ServingError, ServingResult};
use crate::model::{build_model, ModelSpec, SalaryModel};
use parking_lot::RwLock;
use salarycast_core::encoder::FeatureEncoder;
use salarycast_core::schema::FeatureSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Model-spec artifact file name.
pub const MODEL_FILE: &str = "model.json";

/// Feature-schema artifact file name.
pub const SCHEMA_FILE: &str = "feature_names.json";

/// Optional metadata artifact file name.
pub const METADATA_FILE: &str = "metadata.json";

/// Metadata exported next to a model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Model name, e.g. "salary-rf".
    #[serde(default)]
    pub name: String,

    /// Human-readable description.
    #[serde(default)]
    pub description: String,

    /// When the model was trained (free-form, as exported).
    #[serde(default)]
    pub trained_at: Option<String>,

    /// Custom metadata key-value pairs.
    #[serde(default)]
    pub extra: HashMap<String, String>,
}

/// A loaded model ready for serving.
pub struct LoadedModel {
    /// Path the model was loaded from.
    pub path: PathBuf,

    /// Version identifier (metadata name, or the directory name).
    pub version: String,

    /// When the model was loaded.
    pub loaded_at: std::time::Instant,

    /// Metadata from the export.
    pub metadata: ModelMetadata,

    /// The feature schema the model was trained against.
    pub schema: Arc<FeatureSchema>,

    /// Encoder over that schema.
    pub encoder: FeatureEncoder,

    /// The live model.
    pub model: Arc<dyn SalaryModel>,
}

impl std::fmt::Debug for LoadedModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedModel")
            .field("path", &self.path)
            .field("version", &self.version)
            .field("loaded_at", &self.loaded_at)
            .field("metadata", &self.metadata)
            .field("schema_len", &self.schema.len())
            .finish()
    }
}

/// Loads export directories and shares the current model read-only.
///
/// # Example
///
/// ```no_run
/// use salarycast_serving::model_loader::ModelLoader;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let loader = ModelLoader::new();
/// loader.load("/models/salary-rf").await?;
///
/// if let Some(model) = loader.current_model() {
///     println!("Loaded model version: {}", model.version);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct ModelLoader {
    current_model: Arc<RwLock<Option<Arc<LoadedModel>>>>,
    version_history: Arc<RwLock<Vec<String>>>,
}

impl ModelLoader {
    /// Create an empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a model from an export directory, replacing the current model
    /// on success.
    ///
    /// # Errors
    ///
    /// Returns [`ServingError::ModelLoad`] / [`ServingError::SchemaLoad`]
    /// when an artifact is missing or undeserializable. On error nothing is
    /// swapped: a previously loaded model remains current.
    pub async fn load(&self, path: impl AsRef<Path>) -> ServingResult<()> {
        let path = path.as_ref().to_path_buf();
        info!(path = %path.display(), "loading model export");

        if !path.is_dir() {
            return Err(ServingError::model_load(format!(
                "export directory does not exist: {}",
                path.display()
            )));
        }

        let schema = Arc::new(load_schema(&path)?);
        debug!(columns = schema.len(), "loaded feature schema");

        let spec = load_spec(&path)?;
        let model: Arc<dyn SalaryModel> = Arc::from(build_model(&spec, schema.len())?);

        let metadata = load_metadata(&path);
        let version = determine_version(&path, &metadata);
        info!(version = %version, "model ready");

        let loaded = LoadedModel {
            path,
            version: version.clone(),
            loaded_at: std::time::Instant::now(),
            metadata,
            encoder: FeatureEncoder::new(Arc::clone(&schema)),
            schema,
            model,
        };

        *self.current_model.write() = Some(Arc::new(loaded));
        self.version_history.write().push(version);
        Ok(())
    }

    /// Get the currently loaded model, if any.
    pub fn current_model(&self) -> Option<Arc<LoadedModel>> {
        self.current_model.read().clone()
    }

    /// Whether a model is loaded and ready.
    pub fn is_ready(&self) -> bool {
        self.current_model.read().is_some()
    }

    /// Reload the current model from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ServingError::ModelNotLoaded`] when nothing was ever
    /// loaded, or any load error from re-reading the artifacts.
    pub async fn reload(&self) -> ServingResult<()> {
        let path = {
            let current = self.current_model.read();
            current
                .as_ref()
                .map(|m| m.path.clone())
                .ok_or(ServingError::ModelNotLoaded)?
        };
        info!(path = %path.display(), "reloading model");
        self.load(&path).await
    }

    /// Unload the current model, freeing resources.
    pub fn unload(&self) {
        let mut current = self.current_model.write();
        if current.is_some() {
            info!("unloading current model");
            *current = None;
        }
    }

    /// Versions loaded over this process's lifetime, oldest first.
    pub fn version_history(&self) -> Vec<String> {
        self.version_history.read().clone()
    }
}

impl std::fmt::Debug for ModelLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelLoader")
            .field("has_model", &self.current_model.read().is_some())
            .finish()
    }
}

fn load_schema(dir: &Path) -> ServingResult<FeatureSchema> {
    let path = dir.join(SCHEMA_FILE);
    FeatureSchema::from_json_file(&path).map_err(|e| {
        ServingError::schema_load(format!("{} at {}: {e}", SCHEMA_FILE, path.display()))
    })
}

fn load_spec(dir: &Path) -> ServingResult<ModelSpec> {
    let path = dir.join(MODEL_FILE);
    let raw = std::fs::read_to_string(&path).map_err(|e| {
        ServingError::model_load(format!("{} at {}: {e}", MODEL_FILE, path.display()))
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        ServingError::model_load(format!("{} at {}: {e}", MODEL_FILE, path.display()))
    })
}

fn load_metadata(dir: &Path) -> ModelMetadata {
    let path = dir.join(METADATA_FILE);
    if !path.exists() {
        debug!("no metadata.json in export, using defaults");
        return ModelMetadata::default();
    }
    match std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|raw| serde_json::from_str(&raw).map_err(|e| e.to_string()))
    {
        Ok(metadata) => metadata,
        Err(e) => {
            // Metadata is advisory; a bad file must not block serving.
            warn!(error = %e, "ignoring unreadable metadata.json");
            ModelMetadata::default()
        }
    }
}

fn determine_version(path: &Path, metadata: &ModelMetadata) -> String {
    if !metadata.name.is_empty() {
        return metadata.name.clone();
    }
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|s| s.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ForestSpec, TreeNode, TreeSpec};
    use tempfile::tempdir;

    fn write_export(dir: &Path, columns: &[&str], spec: &ModelSpec) {
        std::fs::create_dir_all(dir).unwrap();
        std::fs::write(
            dir.join(SCHEMA_FILE),
            serde_json::to_string(&columns).unwrap(),
        )
        .unwrap();
        std::fs::write(dir.join(MODEL_FILE), serde_json::to_string(spec).unwrap()).unwrap();
    }

    fn linear_spec(weights: Vec<f64>) -> ModelSpec {
        ModelSpec::Linear(crate::model::LinearSpec {
            weights,
            intercept: 0.0,
        })
    }

    #[tokio::test]
    async fn test_load_and_version_from_dir_name() {
        let dir = tempdir().unwrap();
        let export = dir.path().join("salary_v1");
        write_export(&export, &["a", "b"], &linear_spec(vec![1.0, 2.0]));

        let loader = ModelLoader::new();
        loader.load(&export).await.unwrap();

        assert!(loader.is_ready());
        let model = loader.current_model().unwrap();
        assert_eq!(model.version, "salary_v1");
        assert_eq!(model.schema.len(), 2);
        assert_eq!(loader.version_history(), vec!["salary_v1"]);
    }

    #[tokio::test]
    async fn test_version_from_metadata_name() {
        let dir = tempdir().unwrap();
        let export = dir.path().join("export");
        write_export(&export, &["a"], &linear_spec(vec![1.0]));
        std::fs::write(
            export.join(METADATA_FILE),
            r#"{"name": "salary-rf", "description": "random forest"}"#,
        )
        .unwrap();

        let loader = ModelLoader::new();
        loader.load(&export).await.unwrap();

        let model = loader.current_model().unwrap();
        assert_eq!(model.version, "salary-rf");
        assert_eq!(model.metadata.description, "random forest");
    }

    #[tokio::test]
    async fn test_corrupt_metadata_is_ignored() {
        let dir = tempdir().unwrap();
        let export = dir.path().join("export");
        write_export(&export, &["a"], &linear_spec(vec![1.0]));
        std::fs::write(export.join(METADATA_FILE), "{{{not json").unwrap();

        let loader = ModelLoader::new();
        loader.load(&export).await.unwrap();
        assert!(loader.is_ready());
    }

    #[tokio::test]
    async fn test_missing_directory_fails() {
        let loader = ModelLoader::new();
        let result = loader.load("/nonexistent/export").await;
        assert!(matches!(result, Err(ServingError::ModelLoad(_))));
        assert!(!loader.is_ready());
    }

    #[tokio::test]
    async fn test_missing_model_file_fails() {
        let dir = tempdir().unwrap();
        let export = dir.path().join("export");
        std::fs::create_dir_all(&export).unwrap();
        std::fs::write(export.join(SCHEMA_FILE), r#"["a"]"#).unwrap();

        let loader = ModelLoader::new();
        let result = loader.load(&export).await;
        assert!(matches!(result, Err(ServingError::ModelLoad(_))));
    }

    #[tokio::test]
    async fn test_missing_schema_file_fails() {
        let dir = tempdir().unwrap();
        let export = dir.path().join("export");
        std::fs::create_dir_all(&export).unwrap();
        std::fs::write(
            export.join(MODEL_FILE),
            serde_json::to_string(&linear_spec(vec![1.0])).unwrap(),
        )
        .unwrap();

        let loader = ModelLoader::new();
        let result = loader.load(&export).await;
        assert!(matches!(result, Err(ServingError::SchemaLoad(_))));
    }

    #[tokio::test]
    async fn test_spec_schema_mismatch_fails() {
        let dir = tempdir().unwrap();
        let export = dir.path().join("export");
        // Two columns in the schema, one weight in the model.
        write_export(&export, &["a", "b"], &linear_spec(vec![1.0]));

        let loader = ModelLoader::new();
        let result = loader.load(&export).await;
        assert!(matches!(result, Err(ServingError::ModelLoad(_))));
    }

    #[tokio::test]
    async fn test_failed_load_keeps_previous_model() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good");
        write_export(&good, &["a"], &linear_spec(vec![1.0]));

        let loader = ModelLoader::new();
        loader.load(&good).await.unwrap();

        let result = loader.load(dir.path().join("missing")).await;
        assert!(result.is_err());

        let model = loader.current_model().unwrap();
        assert_eq!(model.version, "good");
        assert_eq!(loader.version_history(), vec!["good"]);
    }

    #[tokio::test]
    async fn test_reload_and_unload() {
        let dir = tempdir().unwrap();
        let export = dir.path().join("export");
        write_export(&export, &["a"], &linear_spec(vec![1.0]));

        let loader = ModelLoader::new();
        assert!(matches!(
            loader.reload().await,
            Err(ServingError::ModelNotLoaded)
        ));

        loader.load(&export).await.unwrap();
        loader.reload().await.unwrap();
        assert_eq!(loader.version_history().len(), 2);

        loader.unload();
        assert!(!loader.is_ready());
        assert!(loader.current_model().is_none());
    }

    #[tokio::test]
    async fn test_forest_export_round_trip() {
        let dir = tempdir().unwrap();
        let export = dir.path().join("rf");
        let spec = ModelSpec::RandomForest(ForestSpec {
            trees: vec![TreeSpec {
                nodes: vec![
                    TreeNode::Split {
                        feature: 0,
                        threshold: 2.0,
                        left: 1,
                        right: 2,
                    },
                    TreeNode::Leaf { value: 80_000.0 },
                    TreeNode::Leaf { value: 150_000.0 },
                ],
            }],
        });
        write_export(&export, &["experience_encoded"], &spec);

        let loader = ModelLoader::new();
        loader.load(&export).await.unwrap();
        let loaded = loader.current_model().unwrap();
        assert_eq!(loaded.model.num_features(), 1);
    }
}
