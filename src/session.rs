//! Session-scoped state and the boundary-facing operations.
//!
//! A [`Session`] owns one [`Dataset`] and at most one trained
//! [`Perceptron`]. Every dataset mutation drops the model: a stale model
//! must never be queried against mutated data. The transport layer
//! (HTTP, FFI, in-process calls) owns the session object and is expected
//! to serialize access to it; there is no internal locking.
//!
//! All operations are synchronous and return either a payload or an
//! [`EnsenarError`](crate::error::EnsenarError); no panic crosses this
//! surface for any input the boundary layer can produce.
//!
//! # Example
//!
//! ```
//! use ensenar::session::Session;
//! use ensenar::synthetic::GeneratorKind;
//!
//! let mut session = Session::new();
//! session.generate_data(GeneratorKind::Linear, 50, Some(42)).unwrap();
//! let report = session.train_model(0.1, 100).unwrap();
//! assert_eq!(report.final_accuracy, 1.0);
//!
//! let label = session.predict(3.0, 3.0).unwrap();
//! assert_eq!(label, 1);
//! ```

use crate::dataset::{Dataset, DatasetSummary, LabeledPoint};
use crate::error::{EnsenarError, Result};
use crate::perceptron::{DecisionBoundary, EpochRecord, Perceptron};
use crate::synthetic::{DataGenerator, GeneratorKind};
use serde::{Deserialize, Serialize};

/// Margin added on each side of the dataset's x1 range when computing
/// the renderable decision boundary segment.
const BOUNDARY_MARGIN: f32 = 1.0;

/// Payload of a successful [`Session::generate_data`] call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedData {
    /// The freshly generated points, now the session dataset.
    pub points: Vec<LabeledPoint>,
    /// Summary statistics over the generated points.
    pub summary: DatasetSummary,
}

/// Payload of a successful [`Session::train_model`] call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    /// Learned weights.
    pub weights: [f32; 2],
    /// Learned bias term.
    pub bias: f32,
    /// Learning rate the run was trained with.
    pub learning_rate: f32,
    /// Per-epoch convergence trace.
    pub training_history: Vec<EpochRecord>,
    /// Accuracy recorded by the last epoch.
    pub final_accuracy: f32,
    /// Renderable boundary segment, absent when (near-)vertical.
    pub decision_boundary: Option<DecisionBoundary>,
}

/// One teaching session: a dataset and the model trained on it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    dataset: Dataset,
    model: Option<Perceptron>,
}

impl Session {
    /// Creates a session with an empty dataset and no model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the dataset with synthetic data and drops any model.
    ///
    /// # Errors
    ///
    /// Returns an error when `n_samples` is zero. The previous dataset
    /// and model are untouched on error.
    pub fn generate_data(
        &mut self,
        kind: GeneratorKind,
        n_samples: usize,
        seed: Option<u64>,
    ) -> Result<GeneratedData> {
        let mut generator = DataGenerator::new(kind);
        if let Some(seed) = seed {
            generator = generator.with_random_state(seed);
        }
        let data = generator.generate(n_samples)?;
        let summary = data.summary()?;

        self.dataset = data;
        self.model = None;
        Ok(GeneratedData {
            points: self.dataset.points().to_vec(),
            summary,
        })
    }

    /// Appends one hand-placed point and drops any model.
    ///
    /// Returns the updated point list.
    ///
    /// # Errors
    ///
    /// Returns an error for a non-finite coordinate or a label outside
    /// {0, 1}; the dataset and model are untouched on error.
    pub fn add_point(&mut self, x1: f32, x2: f32, label: usize) -> Result<&[LabeledPoint]> {
        self.dataset.push(x1, x2, label)?;
        self.model = None;
        Ok(self.dataset.points())
    }

    /// Empties the dataset and drops any model. Never fails.
    pub fn clear_data(&mut self) {
        self.dataset.clear();
        self.model = None;
    }

    /// Trains a fresh perceptron over the current dataset.
    ///
    /// The new model replaces the session model only on success; a
    /// failed run leaves the previous model (if any) in place.
    ///
    /// # Errors
    ///
    /// Returns [`EnsenarError::EmptyDataset`] when the dataset is empty
    /// and [`EnsenarError::InvalidHyperparameter`] for a non-positive
    /// learning rate or zero epoch budget.
    pub fn train_model(&mut self, learning_rate: f32, max_epochs: usize) -> Result<TrainReport> {
        let mut model = Perceptron::new()
            .with_learning_rate(learning_rate)
            .with_max_epochs(max_epochs);
        model.fit(&self.dataset)?;

        let weights = model.weights().ok_or(EnsenarError::NoModel)?;
        let final_accuracy = model.final_accuracy().ok_or(EnsenarError::NoModel)?;

        // Boundary segment spans the data's x1 extent plus a margin.
        let (x1_min, x1_max) = self.dataset.summary()?.x1_range;
        let decision_boundary =
            model.decision_boundary((x1_min - BOUNDARY_MARGIN, x1_max + BOUNDARY_MARGIN))?;

        let report = TrainReport {
            weights,
            bias: model.bias(),
            learning_rate: model.learning_rate(),
            training_history: model.history().to_vec(),
            final_accuracy,
            decision_boundary,
        };
        self.model = Some(model);
        Ok(report)
    }

    /// Classifies a query point with the session model.
    ///
    /// # Errors
    ///
    /// Returns [`EnsenarError::NoModel`] when no model exists, either
    /// because training never ran or because a dataset mutation dropped
    /// it, or a validation error for non-finite coordinates.
    pub fn predict(&self, x1: f32, x2: f32) -> Result<usize> {
        let model = self.model.as_ref().ok_or(EnsenarError::NoModel)?;
        model.predict(x1, x2)
    }

    /// Read-only snapshot of the dataset; empty when no data exists.
    #[must_use]
    pub fn export_dataset(&self) -> &[LabeledPoint] {
        self.dataset.points()
    }

    /// The current dataset.
    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The current model, if a training run succeeded since the last
    /// dataset mutation.
    #[must_use]
    pub fn model(&self) -> Option<&Perceptron> {
        self.model.as_ref()
    }
}
