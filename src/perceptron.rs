//! Online perceptron training, prediction, and boundary geometry.
//!
//! Implements the classic perceptron learning rule for binary
//! classification of 2-D points. Each call to [`Perceptron::fit`]
//! re-initializes weights and bias to zero and trains from scratch over
//! the full dataset; there is no incremental training across runs.
//!
//! # Example
//!
//! ```
//! use ensenar::dataset::Dataset;
//! use ensenar::perceptron::Perceptron;
//!
//! let mut data = Dataset::new();
//! data.replace_all(
//!     &[[-1.0, -1.0], [-1.0, 1.0], [1.0, -1.0], [1.0, 1.0]],
//!     &[0, 0, 1, 1],
//! ).unwrap();
//!
//! let mut model = Perceptron::new()
//!     .with_learning_rate(1.0)
//!     .with_max_epochs(20);
//! model.fit(&data).unwrap();
//!
//! assert_eq!(model.final_accuracy(), Some(1.0));
//! assert_eq!(model.predict(2.0, 0.0).unwrap(), 1);
//! assert_eq!(model.predict(-2.0, 0.0).unwrap(), 0);
//! ```

use crate::dataset::Dataset;
use crate::error::{EnsenarError, Result};
use crate::metrics::accuracy;
use serde::{Deserialize, Serialize};

/// Below this magnitude of the second weight the decision boundary is
/// treated as vertical/degenerate in the x2-over-x1 parameterization.
const BOUNDARY_EPSILON: f32 = 1e-6;

/// One entry of the per-epoch convergence trace.
///
/// Carries the weights and bias as they stood at the end of the epoch,
/// so a UI can replay the boundary's movement across the run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochRecord {
    /// 1-based epoch index.
    pub epoch: usize,
    /// Number of points misclassified during this epoch's update pass.
    pub misclassified: usize,
    /// Accuracy over the full dataset after this epoch's updates.
    pub accuracy: f32,
    /// Weights after this epoch's updates.
    pub weights: [f32; 2],
    /// Bias after this epoch's updates.
    pub bias: f32,
}

/// Renderable two-endpoint segment of the decision boundary.
///
/// Spans the supplied x1 range; `x2` holds the matching boundary heights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionBoundary {
    /// Endpoint x1 coordinates.
    pub x1: [f32; 2],
    /// Endpoint x2 coordinates.
    pub x2: [f32; 2],
}

/// Binary perceptron classifier for 2-D points.
///
/// Uses the online perceptron learning rule with a hard threshold.
/// Activation exactly 0 classifies as label 1, consistently in training
/// and prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Perceptron {
    /// Learned weights, `None` until fitted
    weights: Option<[f32; 2]>,
    /// Learned bias term
    bias: f32,
    /// Learning rate for the update rule
    learning_rate: f32,
    /// Maximum number of training epochs
    max_epochs: usize,
    /// Per-epoch convergence trace of the last fit
    history: Vec<EpochRecord>,
}

impl Default for Perceptron {
    fn default() -> Self {
        Self::new()
    }
}

fn step(activation: f32) -> usize {
    usize::from(activation >= 0.0)
}

impl Perceptron {
    /// Creates a new perceptron with default hyperparameters
    /// (`learning_rate = 0.01`, `max_epochs = 100`).
    #[must_use]
    pub fn new() -> Self {
        Self {
            weights: None,
            bias: 0.0,
            learning_rate: 0.01,
            max_epochs: 100,
            history: Vec::new(),
        }
    }

    /// Sets the learning rate.
    #[must_use]
    pub fn with_learning_rate(mut self, lr: f32) -> Self {
        self.learning_rate = lr;
        self
    }

    /// Sets the maximum number of training epochs.
    #[must_use]
    pub fn with_max_epochs(mut self, max_epochs: usize) -> Self {
        self.max_epochs = max_epochs;
        self
    }

    /// Fits the perceptron to the dataset with the online learning rule.
    ///
    /// Weights and bias are re-initialized to zero at the start of every
    /// call. Points are visited in dataset order. After each epoch's
    /// updates the full dataset is re-scored and an [`EpochRecord`] is
    /// appended; an epoch with zero misclassifications stops training
    /// early. Given identical dataset order and hyperparameters the
    /// result is bit-for-bit deterministic.
    ///
    /// # Errors
    ///
    /// Returns [`EnsenarError::EmptyDataset`] for an empty dataset and
    /// [`EnsenarError::InvalidHyperparameter`] for a non-positive or
    /// non-finite learning rate or a zero epoch budget. On error the
    /// estimator's previous state is untouched.
    pub fn fit(&mut self, data: &Dataset) -> Result<()> {
        if !(self.learning_rate > 0.0 && self.learning_rate.is_finite()) {
            return Err(EnsenarError::invalid_hyperparameter(
                "learning_rate",
                self.learning_rate,
                ">0 and finite",
            ));
        }
        if self.max_epochs == 0 {
            return Err(EnsenarError::invalid_hyperparameter(
                "max_epochs",
                self.max_epochs,
                ">=1",
            ));
        }
        if data.is_empty() {
            return Err(EnsenarError::empty_dataset("train"));
        }

        let mut weights = [0.0_f32; 2];
        let mut bias = 0.0_f32;
        let mut history = Vec::new();
        let y_true: Vec<usize> = data.iter().map(|p| p.label).collect();

        for epoch in 1..=self.max_epochs {
            let mut misclassified = 0;

            for p in data {
                let activation = weights[0] * p.x1 + weights[1] * p.x2 + bias;
                let predicted = step(activation);
                if predicted != p.label {
                    misclassified += 1;
                    let error = p.label as f32 - predicted as f32;
                    weights[0] += self.learning_rate * error * p.x1;
                    weights[1] += self.learning_rate * error * p.x2;
                    bias += self.learning_rate * error;
                }
            }

            // Post-update-pass accuracy: re-score the full dataset with
            // the weights as they stand after this epoch.
            let y_pred: Vec<usize> = data
                .iter()
                .map(|p| step(weights[0] * p.x1 + weights[1] * p.x2 + bias))
                .collect();
            history.push(EpochRecord {
                epoch,
                misclassified,
                accuracy: accuracy(&y_pred, &y_true),
                weights,
                bias,
            });

            if misclassified == 0 {
                break;
            }
        }

        self.weights = Some(weights);
        self.bias = bias;
        self.history = history;
        Ok(())
    }

    /// Classifies a query point with the same activation and tie-break
    /// rule used during training.
    ///
    /// # Errors
    ///
    /// Returns [`EnsenarError::NoModel`] when the perceptron has not
    /// been fitted, or a validation error for non-finite coordinates.
    pub fn predict(&self, x1: f32, x2: f32) -> Result<usize> {
        let weights = self.weights.ok_or(EnsenarError::NoModel)?;
        if !x1.is_finite() || !x2.is_finite() {
            return Err(EnsenarError::Validation {
                message: format!("query coordinates must be finite, got ({x1}, {x2})"),
            });
        }
        Ok(step(weights[0] * x1 + weights[1] * x2 + self.bias))
    }

    /// Computes the decision boundary segment over `x1_range`.
    ///
    /// The boundary is the line `w1*x1 + w2*x2 + b = 0`. Returns
    /// `Ok(None)` when `|w2|` is below epsilon: the boundary is
    /// (near-)vertical in this parameterization and has no renderable
    /// x2-over-x1 form. This is not a failure; training can still have
    /// succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`EnsenarError::NoModel`] when the perceptron has not
    /// been fitted.
    pub fn decision_boundary(&self, x1_range: (f32, f32)) -> Result<Option<DecisionBoundary>> {
        let weights = self.weights.ok_or(EnsenarError::NoModel)?;
        if weights[1].abs() < BOUNDARY_EPSILON {
            return Ok(None);
        }

        let (lo, hi) = x1_range;
        let x2_at = |x1: f32| -(weights[0] * x1 + self.bias) / weights[1];
        Ok(Some(DecisionBoundary {
            x1: [lo, hi],
            x2: [x2_at(lo), x2_at(hi)],
        }))
    }

    /// Returns true if the model has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.weights.is_some()
    }

    /// Learned weights, `None` before the first successful fit.
    #[must_use]
    pub fn weights(&self) -> Option<[f32; 2]> {
        self.weights
    }

    /// Learned bias term.
    #[must_use]
    pub fn bias(&self) -> f32 {
        self.bias
    }

    /// Configured learning rate.
    #[must_use]
    pub fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    /// Per-epoch convergence trace of the last fit.
    #[must_use]
    pub fn history(&self) -> &[EpochRecord] {
        &self.history
    }

    /// Accuracy recorded by the last epoch of the last fit.
    #[must_use]
    pub fn final_accuracy(&self) -> Option<f32> {
        self.history.last().map(|r| r.accuracy)
    }
}
