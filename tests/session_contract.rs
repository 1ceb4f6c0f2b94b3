//! Contract tests for the session-facing operations.
//!
//! These exercise the engine end to end the way a boundary layer would:
//! generate or hand-place points, train, inspect the report, classify.
//! Run with: cargo test --test session_contract

use ensenar::prelude::*;

#[test]
fn append_then_export_contains_point_and_increments_total() {
    let mut session = Session::new();
    session
        .generate_data(GeneratorKind::Linear, 10, Some(1))
        .expect("generation succeeds");
    let before = session.dataset().summary().expect("non-empty").total;

    session.add_point(0.25, -0.75, 1).expect("valid point");

    let exported = session.export_dataset();
    let matching = exported
        .iter()
        .filter(|p| p.x1 == 0.25 && p.x2 == -0.75 && p.label == 1)
        .count();
    assert_eq!(matching, 1);
    assert_eq!(
        session.dataset().summary().expect("non-empty").total,
        before + 1
    );
}

#[test]
fn clear_then_export_is_empty_and_training_fails() {
    let mut session = Session::new();
    session
        .generate_data(GeneratorKind::Xor, 40, Some(2))
        .expect("generation succeeds");
    session.clear_data();

    assert!(session.export_dataset().is_empty());
    let err = session.train_model(0.1, 100).unwrap_err();
    assert!(matches!(err, EnsenarError::EmptyDataset { .. }));
}

#[test]
fn generator_is_deterministic_under_seed() {
    let mut a = Session::new();
    let mut b = Session::new();
    let first = a
        .generate_data(GeneratorKind::Linear, 50, Some(42))
        .expect("generation succeeds");
    let second = b
        .generate_data(GeneratorKind::Linear, 50, Some(42))
        .expect("generation succeeds");
    assert_eq!(first, second);
}

#[test]
fn training_converges_on_linear_data_with_early_stop() {
    let mut session = Session::new();
    session
        .generate_data(GeneratorKind::Linear, 50, Some(42))
        .expect("generation succeeds");

    let report = session.train_model(0.1, 100).expect("training succeeds");
    assert_eq!(report.final_accuracy, 1.0);
    assert!(report.training_history.len() < 100, "early stop must fire");
}

#[test]
fn history_is_bounded_by_max_epochs_on_inseparable_data() {
    let mut session = Session::new();
    session
        .generate_data(GeneratorKind::Xor, 40, Some(7))
        .expect("generation succeeds");

    let report = session.train_model(0.1, 25).expect("training succeeds");
    assert!(report.training_history.len() <= 25);
}

#[test]
fn mutation_invalidates_model_until_retrained() {
    let mut session = Session::new();
    session
        .generate_data(GeneratorKind::Linear, 20, Some(9))
        .expect("generation succeeds");
    session.train_model(0.1, 100).expect("training succeeds");
    session.predict(1.0, 1.0).expect("model is live");

    session.add_point(0.0, 0.1, 0).expect("valid point");
    assert!(matches!(
        session.predict(1.0, 1.0).unwrap_err(),
        EnsenarError::NoModel
    ));

    session.train_model(0.1, 100).expect("training succeeds");
    session.predict(1.0, 1.0).expect("model restored");
}

#[test]
fn hand_placed_points_end_to_end() {
    // Four points separable by x1 = 0.
    let mut session = Session::new();
    session.add_point(-1.0, -1.0, 0).expect("valid point");
    session.add_point(-1.0, 1.0, 0).expect("valid point");
    session.add_point(1.0, -1.0, 1).expect("valid point");
    session.add_point(1.0, 1.0, 1).expect("valid point");

    let report = session.train_model(1.0, 20).expect("training succeeds");
    assert_eq!(report.final_accuracy, 1.0);
    assert!(
        report.weights[0] > 0.0,
        "weight sign must separate on x1: {:?}",
        report.weights
    );
    assert_eq!(session.predict(2.0, 0.0).expect("model is live"), 1);
    assert_eq!(session.predict(-2.0, 0.0).expect("model is live"), 0);
}

#[test]
fn vertical_boundary_is_absent_not_an_error() {
    // Training on x1-separable data lands on weights [2, 0]: a vertical
    // boundary with no x2-over-x1 form.
    let mut session = Session::new();
    session.add_point(-1.0, -1.0, 0).expect("valid point");
    session.add_point(-1.0, 1.0, 0).expect("valid point");
    session.add_point(1.0, -1.0, 1).expect("valid point");
    session.add_point(1.0, 1.0, 1).expect("valid point");

    let report = session.train_model(1.0, 20).expect("training succeeds");
    assert_eq!(report.weights, [2.0, 0.0]);
    assert_eq!(report.decision_boundary, None);
}

#[test]
fn tie_break_is_class_one_in_training_and_prediction() {
    let mut session = Session::new();
    session.add_point(-1.0, 0.0, 0).expect("valid point");
    session.add_point(1.0, 0.0, 1).expect("valid point");

    // Converges to weights [1, 0], bias -1: activation is exactly 0
    // along x1 = 1, including for the class-1 training point itself.
    let report = session.train_model(1.0, 10).expect("training succeeds");
    assert_eq!(report.final_accuracy, 1.0);
    assert_eq!(session.predict(1.0, 0.0).expect("model is live"), 1);
    assert_eq!(session.predict(1.0, 99.0).expect("model is live"), 1);
}

#[test]
fn report_payload_round_trips_through_json() {
    let mut session = Session::new();
    session
        .generate_data(GeneratorKind::Blobs, 30, Some(4))
        .expect("generation succeeds");
    let report = session.train_model(0.05, 50).expect("training succeeds");

    let json = serde_json::to_string(&report).expect("serialize");
    let back: TrainReport = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, report);
}

#[test]
fn unseeded_generation_is_valid_even_if_nondeterministic() {
    // No seed: output content is unspecified, but contracts still hold.
    let mut session = Session::new();
    let generated = session
        .generate_data(GeneratorKind::Linear, 21, None)
        .expect("generation succeeds");
    assert_eq!(generated.summary.total, 21);
    let diff = generated.summary.class_counts[0].abs_diff(generated.summary.class_counts[1]);
    assert!(diff <= 1);
}
