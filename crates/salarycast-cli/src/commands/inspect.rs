//! Inspect Command Implementation
//!
//! Shows what a model export contains: version, metadata and the feature
//! schema the model was trained against.

use anyhow::{Context, Result};
use clap::Args;
use salarycast_serving::ModelLoader;
use std::path::PathBuf;

/// Show a model export's version, metadata and feature schema
///
/// # Example
///
/// ```bash
/// salarycast inspect --model-dir /models/salary-rf --columns 20
/// ```
#[derive(Args, Debug, Clone)]
pub struct InspectCommand {
    /// Directory containing the model export
    #[arg(long, short = 'd', env = "SALARYCAST_MODEL_DIR")]
    pub model_dir: PathBuf,

    /// How many schema columns to list
    #[arg(long, default_value = "10")]
    pub columns: usize,
}

impl InspectCommand {
    /// Execute the inspect command
    pub async fn run(&self) -> Result<()> {
        let loader = ModelLoader::new();
        loader
            .load(&self.model_dir)
            .await
            .with_context(|| format!("loading model export from {:?}", self.model_dir))?;

        let model = loader
            .current_model()
            .context("model did not load")?;

        println!("Model export: {}", model.path.display());
        println!("  Version:     {}", model.version);
        if !model.metadata.description.is_empty() {
            println!("  Description: {}", model.metadata.description);
        }
        if let Some(trained_at) = &model.metadata.trained_at {
            println!("  Trained at:  {trained_at}");
        }
        for (key, value) in &model.metadata.extra {
            println!("  {key}: {value}");
        }

        println!("  Features:    {}", model.schema.len());
        for column in model.schema.columns().iter().take(self.columns) {
            println!("    {column}");
        }
        if model.schema.len() > self.columns {
            println!("    ... and {} more", model.schema.len() - self.columns);
        }

        Ok(())
    }
}
