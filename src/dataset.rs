//! Labeled 2-D point collections.
//!
//! The [`Dataset`] is the single shared mutable resource of a teaching
//! session: generators fill it, the trainer reads a snapshot of it, and
//! every mutation invalidates whatever model was trained on the old
//! contents (enforced by [`crate::session::Session`]).
//!
//! # Example
//!
//! ```
//! use ensenar::dataset::Dataset;
//!
//! let mut data = Dataset::new();
//! data.push(1.0, 2.0, 1).unwrap();
//! data.push(-1.0, -2.0, 0).unwrap();
//!
//! let summary = data.summary().unwrap();
//! assert_eq!(summary.total, 2);
//! assert_eq!(summary.class_counts, [1, 1]);
//! ```

use crate::error::{EnsenarError, Result};
use serde::{Deserialize, Serialize};

/// A single 2-D observation with its binary class label.
///
/// Immutable once created; `label` is always 0 or 1 for points that
/// entered through [`Dataset`] methods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledPoint {
    /// First feature.
    pub x1: f32,
    /// Second feature.
    pub x2: f32,
    /// Binary class label (0 or 1).
    pub label: usize,
}

/// Summary statistics over a non-empty dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Total number of points.
    pub total: usize,
    /// Number of points per class, indexed by label.
    pub class_counts: [usize; 2],
    /// (min, max) of the first feature.
    pub x1_range: (f32, f32),
    /// (min, max) of the second feature.
    pub x2_range: (f32, f32),
}

/// Ordered, mutable collection of labeled 2-D points.
///
/// Insertion order is preserved and matters only as the iteration order
/// of online training passes. An empty dataset is valid and means
/// "no data".
///
/// Every path into a dataset validates labels and coordinates, including
/// deserialization: decoding a point with a label outside {0, 1} or a
/// non-finite coordinate fails instead of producing a dataset that
/// violates the invariant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDataset")]
pub struct Dataset {
    points: Vec<LabeledPoint>,
}

/// Unvalidated wire form of [`Dataset`]; converted via `TryFrom` so the
/// label and finiteness invariants hold for deserialized data too.
#[derive(Deserialize)]
struct RawDataset {
    points: Vec<LabeledPoint>,
}

impl TryFrom<RawDataset> for Dataset {
    type Error = EnsenarError;

    fn try_from(raw: RawDataset) -> Result<Self> {
        let mut data = Dataset::new();
        for p in raw.points {
            data.push(p.x1, p.x2, p.label)?;
        }
        Ok(data)
    }
}

fn validate_label(label: usize) -> Result<()> {
    if label > 1 {
        return Err(EnsenarError::InvalidLabel { value: label });
    }
    Ok(())
}

fn validate_coordinates(x1: f32, x2: f32) -> Result<()> {
    if !x1.is_finite() || !x2.is_finite() {
        return Err(EnsenarError::Validation {
            message: format!("coordinates must be finite, got ({x1}, {x2})"),
        });
    }
    Ok(())
}

impl Dataset {
    /// Creates an empty dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entire contents atomically.
    ///
    /// Either all `(point, label)` pairs are accepted, or the dataset is
    /// left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns an error if `points` and `labels` differ in length, if
    /// any coordinate is non-finite, or if any label is not 0 or 1.
    ///
    /// # Example
    ///
    /// ```
    /// use ensenar::dataset::Dataset;
    ///
    /// let mut data = Dataset::new();
    /// data.replace_all(&[[0.0, 1.0], [2.0, 3.0]], &[0, 1]).unwrap();
    /// assert_eq!(data.len(), 2);
    ///
    /// // Length mismatch leaves the old contents intact.
    /// assert!(data.replace_all(&[[0.0, 0.0]], &[0, 1]).is_err());
    /// assert_eq!(data.len(), 2);
    /// ```
    pub fn replace_all(&mut self, points: &[[f32; 2]], labels: &[usize]) -> Result<()> {
        if points.len() != labels.len() {
            return Err(EnsenarError::Validation {
                message: format!(
                    "points and labels must have equal length, got {} and {}",
                    points.len(),
                    labels.len()
                ),
            });
        }

        // Validate everything before touching self.points.
        let mut replacement = Vec::with_capacity(points.len());
        for (&[x1, x2], &label) in points.iter().zip(labels.iter()) {
            validate_coordinates(x1, x2)?;
            validate_label(label)?;
            replacement.push(LabeledPoint { x1, x2, label });
        }

        self.points = replacement;
        Ok(())
    }

    /// Appends a single labeled point in O(1).
    ///
    /// # Errors
    ///
    /// Returns an error if either coordinate is non-finite or the label
    /// is not 0 or 1. The dataset is unchanged on error.
    pub fn push(&mut self, x1: f32, x2: f32, label: usize) -> Result<()> {
        validate_coordinates(x1, x2)?;
        validate_label(label)?;
        self.points.push(LabeledPoint { x1, x2, label });
        Ok(())
    }

    /// Removes all points unconditionally.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Returns the points in insertion order.
    #[must_use]
    pub fn points(&self) -> &[LabeledPoint] {
        &self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the dataset holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over points in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, LabeledPoint> {
        self.points.iter()
    }

    /// Computes total count, per-class counts, and per-feature ranges.
    ///
    /// # Errors
    ///
    /// Returns [`EnsenarError::EmptyDataset`] when called on an empty
    /// dataset: there are no stats to show.
    pub fn summary(&self) -> Result<DatasetSummary> {
        let first = self
            .points
            .first()
            .ok_or_else(|| EnsenarError::empty_dataset("summary"))?;

        let mut class_counts = [0usize; 2];
        let (mut x1_min, mut x1_max) = (first.x1, first.x1);
        let (mut x2_min, mut x2_max) = (first.x2, first.x2);

        for p in &self.points {
            class_counts[p.label] += 1;
            x1_min = x1_min.min(p.x1);
            x1_max = x1_max.max(p.x1);
            x2_min = x2_min.min(p.x2);
            x2_max = x2_max.max(p.x2);
        }

        Ok(DatasetSummary {
            total: self.points.len(),
            class_counts,
            x1_range: (x1_min, x1_max),
            x2_range: (x2_min, x2_max),
        })
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a LabeledPoint;
    type IntoIter = std::slice::Iter<'a, LabeledPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
