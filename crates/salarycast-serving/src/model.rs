//! The salary-model capability and its exported artifact format.
//!
//! The predictor depends only on the [`SalaryModel`] trait: "accepts a row
//! shaped like the feature schema and returns a scalar". The trained
//! artifact is a JSON `model.json` describing one of the supported
//! regressor families; [`build_model`] validates it against the schema
//! width and turns it into a live model.

use crate::error::{ServingError, ServingResult};
use salarycast_core::row::FeatureRow;
use serde::{Deserialize, Serialize};

/// An opaque trained regressor: one feature row in, one scalar out.
pub trait SalaryModel: Send + Sync {
    /// Number of features the model expects.
    fn num_features(&self) -> usize;

    /// Predict an annual salary (in the model's training currency) for one
    /// encoded feature row.
    ///
    /// # Errors
    ///
    /// Returns a [`ServingError::Prediction`] if the row's shape does not
    /// match the model, reported verbatim to the caller with no retry.
    fn predict(&self, row: &FeatureRow) -> ServingResult<f64>;
}

/// Exported model specification (`model.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModelSpec {
    /// Random-forest regressor: the mean of per-tree leaf values.
    RandomForest(ForestSpec),
    /// Linear regressor: dot product plus intercept.
    Linear(LinearSpec),
}

/// A forest of decision trees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestSpec {
    /// The trees, each evaluated independently.
    pub trees: Vec<TreeSpec>,
}

/// One decision tree as a flat node array; node 0 is the root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeSpec {
    /// Nodes of the tree.
    pub nodes: Vec<TreeNode>,
}

/// One node of a decision tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    /// Internal split: go left when `row[feature] <= threshold`.
    Split {
        /// Index of the feature column to test.
        feature: usize,
        /// Split threshold.
        threshold: f64,
        /// Child node index when the test passes.
        left: usize,
        /// Child node index when the test fails.
        right: usize,
    },
    /// Terminal leaf carrying the tree's output.
    Leaf {
        /// Predicted value.
        value: f64,
    },
}

/// Linear-regression weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearSpec {
    /// One weight per feature column, in schema order.
    pub weights: Vec<f64>,
    /// Additive intercept.
    pub intercept: f64,
}

/// Validate a spec against the schema width and build a live model.
///
/// # Errors
///
/// Returns a [`ServingError::ModelLoad`] when the spec is internally
/// inconsistent: empty forest, out-of-range feature or child indices, or a
/// weight vector whose length differs from the schema.
pub fn build_model(spec: &ModelSpec, num_features: usize) -> ServingResult<Box<dyn SalaryModel>> {
    match spec {
        ModelSpec::RandomForest(forest) => {
            Ok(Box::new(RandomForestModel::new(forest.clone(), num_features)?))
        }
        ModelSpec::Linear(linear) => Ok(Box::new(LinearModel::new(linear.clone(), num_features)?)),
    }
}

/// Random-forest regressor.
#[derive(Debug)]
pub struct RandomForestModel {
    forest: ForestSpec,
    num_features: usize,
}

impl RandomForestModel {
    /// Validate and build a forest model.
    pub fn new(forest: ForestSpec, num_features: usize) -> ServingResult<Self> {
        if forest.trees.is_empty() {
            return Err(ServingError::model_load("forest has no trees"));
        }
        for (tree_idx, tree) in forest.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(ServingError::model_load(format!(
                    "tree {tree_idx} has no nodes"
                )));
            }
            for (node_idx, node) in tree.nodes.iter().enumerate() {
                if let TreeNode::Split {
                    feature,
                    left,
                    right,
                    ..
                } = node
                {
                    if *feature >= num_features {
                        return Err(ServingError::model_load(format!(
                            "tree {tree_idx} node {node_idx} tests feature {feature}, schema has {num_features}"
                        )));
                    }
                    if *left >= tree.nodes.len() || *right >= tree.nodes.len() {
                        return Err(ServingError::model_load(format!(
                            "tree {tree_idx} node {node_idx} has out-of-range child"
                        )));
                    }
                }
            }
        }
        Ok(Self {
            forest,
            num_features,
        })
    }

    fn eval_tree(&self, tree: &TreeSpec, values: &[f64]) -> ServingResult<f64> {
        let mut node_idx = 0usize;
        // A well-formed tree terminates within nodes.len() hops; anything
        // longer means the node graph has a cycle.
        for _ in 0..tree.nodes.len() {
            match &tree.nodes[node_idx] {
                TreeNode::Leaf { value } => return Ok(*value),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node_idx = if values[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
        Err(ServingError::prediction(
            "tree traversal did not reach a leaf",
        ))
    }
}

impl SalaryModel for RandomForestModel {
    fn num_features(&self) -> usize {
        self.num_features
    }

    fn predict(&self, row: &FeatureRow) -> ServingResult<f64> {
        if row.len() != self.num_features {
            return Err(ServingError::prediction(format!(
                "row has {} features, model expects {}",
                row.len(),
                self.num_features
            )));
        }
        let mut total = 0.0;
        for tree in &self.forest.trees {
            total += self.eval_tree(tree, row.values())?;
        }
        Ok(total / self.forest.trees.len() as f64)
    }
}

/// Linear regressor.
#[derive(Debug)]
pub struct LinearModel {
    spec: LinearSpec,
}

impl LinearModel {
    /// Validate and build a linear model.
    pub fn new(spec: LinearSpec, num_features: usize) -> ServingResult<Self> {
        if spec.weights.len() != num_features {
            return Err(ServingError::model_load(format!(
                "linear model has {} weights, schema has {num_features} columns",
                spec.weights.len()
            )));
        }
        Ok(Self { spec })
    }
}

impl SalaryModel for LinearModel {
    fn num_features(&self) -> usize {
        self.spec.weights.len()
    }

    fn predict(&self, row: &FeatureRow) -> ServingResult<f64> {
        if row.len() != self.spec.weights.len() {
            return Err(ServingError::prediction(format!(
                "row has {} features, model expects {}",
                row.len(),
                self.spec.weights.len()
            )));
        }
        let dot: f64 = row
            .values()
            .iter()
            .zip(&self.spec.weights)
            .map(|(x, w)| x * w)
            .sum();
        Ok(dot + self.spec.intercept)
    }
}
