//! Evaluation metrics.

/// Compute classification accuracy.
///
/// accuracy = `correct_predictions` / `total_predictions`
///
/// # Panics
///
/// Panics if the slices have different lengths or are empty. Callers in
/// this crate always score a full dataset against its own predictions,
/// so both conditions are internal invariants.
///
/// # Examples
///
/// ```
/// use ensenar::metrics::accuracy;
///
/// let y_true = vec![0, 1, 1, 0];
/// let y_pred = vec![0, 1, 0, 0];
/// let acc = accuracy(&y_pred, &y_true);
/// assert!((acc - 0.75).abs() < 1e-6);
/// ```
#[must_use]
pub fn accuracy(y_pred: &[usize], y_true: &[usize]) -> f32 {
    assert_eq!(y_pred.len(), y_true.len(), "Vectors must have same length");
    assert!(!y_true.is_empty(), "Vectors cannot be empty");

    let correct = y_pred
        .iter()
        .zip(y_true.iter())
        .filter(|(p, t)| p == t)
        .count();

    correct as f32 / y_true.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_perfect() {
        let y = vec![0, 1, 0, 1];
        assert_eq!(accuracy(&y, &y), 1.0);
    }

    #[test]
    fn test_accuracy_none_correct() {
        let y_true = vec![0, 0, 0];
        let y_pred = vec![1, 1, 1];
        assert_eq!(accuracy(&y_pred, &y_true), 0.0);
    }

    #[test]
    fn test_accuracy_partial() {
        let y_true = vec![0, 1, 1, 0];
        let y_pred = vec![0, 1, 0, 1];
        assert!((accuracy(&y_pred, &y_true) - 0.5).abs() < 1e-6);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_accuracy_length_mismatch_panics() {
        accuracy(&[0, 1], &[0]);
    }

    #[test]
    #[should_panic(expected = "cannot be empty")]
    fn test_accuracy_empty_panics() {
        accuracy(&[], &[]);
    }
}
