//! Ensenar: computational engine for an interactive perceptron teaching tool.
//!
//! Ensenar drives the four stateful operations a perceptron-teaching UI
//! needs: dataset construction and mutation, synthetic data generation,
//! online perceptron training with a per-epoch convergence trace, and
//! decision-boundary geometry plus single-point prediction. Transport,
//! rendering, and charting are external collaborators that call into a
//! [`session::Session`] and encode its payloads.
//!
//! # Quick Start
//!
//! ```
//! use ensenar::prelude::*;
//!
//! let mut session = Session::new();
//!
//! // Two linearly separable clusters, reproducible under the seed.
//! session.generate_data(GeneratorKind::Linear, 50, Some(42)).unwrap();
//!
//! // Online perceptron training with early stop on convergence.
//! let report = session.train_model(0.1, 100).unwrap();
//! assert_eq!(report.final_accuracy, 1.0);
//! assert!(report.training_history.len() < 100);
//!
//! // Classify a query point with the trained model.
//! let label = session.predict(3.0, 3.0).unwrap();
//! assert_eq!(label, 1);
//! ```
//!
//! # Modules
//!
//! - [`dataset`]: ordered, validated collections of labeled 2-D points
//! - [`synthetic`]: reproducible synthetic dataset generation
//! - [`perceptron`]: online perceptron training, prediction, boundaries
//! - [`metrics`]: evaluation metrics
//! - [`session`]: session-scoped state and boundary-facing operations
//! - [`error`]: error types
//!
//! # Concurrency
//!
//! A session has single-threaded semantics: one dataset and at most one
//! model live at a time, with no internal locking. Callers that share a
//! session across threads must serialize access to it.

pub mod dataset;
pub mod error;
pub mod metrics;
pub mod perceptron;
pub mod prelude;
pub mod session;
pub mod synthetic;

pub use error::{EnsenarError, Result};
pub use session::Session;
