//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use ensenar::prelude::*;
//! ```

pub use crate::dataset::{Dataset, DatasetSummary, LabeledPoint};
pub use crate::error::{EnsenarError, Result};
pub use crate::perceptron::{DecisionBoundary, EpochRecord, Perceptron};
pub use crate::session::{GeneratedData, Session, TrainReport};
pub use crate::synthetic::{DataGenerator, GeneratorKind};
