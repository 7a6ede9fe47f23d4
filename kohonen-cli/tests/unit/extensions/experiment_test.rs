use super::*;
use crate::helpers::{create_collecting_logger, create_small_config};
use std::sync::Arc;

fn run_small_experiment(seed: u64) -> Report {
    run_experiment(&create_small_config(), &Environment::new_repeatable(seed)).unwrap()
}

#[test]
fn can_run_experiment() {
    let report = run_small_experiment(0);

    assert!(report.quantization_error >= 0.);
    assert!(report.dispersion >= 0.);
    assert_eq!(report.map.nodes.len(), 16);
    assert_eq!(report.map.shape, (4, 4, SAMPLE_DIMENSION));

    assert_eq!(report.motor_position.len(), 2);
    assert!(report.motor_position.iter().all(|&theta| (MOTOR_TEST_RANGE.0..MOTOR_TEST_RANGE.1).contains(&theta)));
    let (x, y) = TwoLinkArm::default().hand_position(report.motor_position[0], report.motor_position[1]);
    assert_eq!(report.ideal_position, vec![x, y]);
}

#[test]
fn can_evaluate_all_strategies() {
    let report = run_small_experiment(1);

    assert_eq!(
        report.estimates.iter().map(|estimate| estimate.strategy.as_str()).collect::<Vec<_>>(),
        vec!["nearest", "uniform-3", "weighted-3"]
    );
    assert_eq!(report.estimates.iter().map(|estimate| estimate.neighbours.len()).collect::<Vec<_>>(), vec![1, 3, 3]);
    report.estimates.iter().for_each(|estimate| {
        assert_eq!(estimate.position.len(), 2);
        let expected =
            euclidean_distance(estimate.position.iter().copied(), report.ideal_position.iter().copied());
        assert_eq!(estimate.error, expected);
    });
}

#[test]
fn can_generate_trajectory_per_strategy() {
    let report = run_small_experiment(2);

    assert_eq!(report.trajectories.len(), 3);
    report.trajectories.iter().for_each(|trajectory| {
        assert_eq!(trajectory.points.len(), 5);
        assert!(trajectory.points.iter().all(|point| point.query.len() == 2 && point.output.len() == 2));
    });
}

#[test]
fn can_repeat_experiment_with_same_seed() {
    let first = serde_json::to_string(&run_small_experiment(7)).unwrap();
    let second = serde_json::to_string(&run_small_experiment(7)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn can_log_training_progress() {
    let (logger, messages) = create_collecting_logger();
    let environment = Environment::new(Arc::new(DefaultRandom::new_repeatable(0)), logger);

    run_experiment(&create_small_config(), &environment).unwrap();

    let messages = messages.lock().unwrap();
    let progress = messages.iter().filter(|msg| msg.contains("quantization error:") && msg.starts_with('[')).count();
    assert_eq!(progress, 4);
    assert!(messages.iter().any(|msg| msg.starts_with("[299/300]")));
    assert!(messages.iter().any(|msg| msg.starts_with("generated 100 samples")));
}

#[test]
fn can_fail_on_empty_dataset() {
    let mut config = create_small_config();
    config.dataset = Some(DatasetConfig { samples: Some(0), l1: None, l2: None });

    let result = run_experiment(&config, &Environment::new_repeatable(0));

    assert_eq!(result.err().map(|err| err.to_string()), Some("dataset has no samples".to_string()));
}

#[test]
fn can_fail_on_too_many_neighbours() {
    let mut config = create_small_config();
    config.query = Some(QueryConfig { k: Some(20), steps: None, from: None, to: None });

    let result = run_experiment(&config, &Environment::new_repeatable(0));

    assert_eq!(
        result.err().map(|err| err.to_string()),
        Some("invalid amount of neighbours: 20, map size: 16".to_string())
    );
}

#[test]
fn can_fail_on_invalid_trajectory_points() {
    let mut config = create_small_config();
    config.query = Some(QueryConfig { k: None, steps: None, from: Some(vec![1.]), to: None });

    let result = run_experiment(&config, &Environment::new_repeatable(0));

    assert_eq!(result.err().map(|err| err.to_string()), Some("dimension mismatch: expected 2, got 1".to_string()));
}

#[test]
fn can_write_report_as_json() {
    let report = run_small_experiment(3);
    let mut buffer = Vec::new();

    write_report(BufWriter::new(&mut buffer), &report).unwrap();

    let json: serde_json::Value = serde_json::from_slice(buffer.as_slice()).unwrap();
    assert!(json["quantizationError"].is_f64());
    assert!(json["idealPosition"].is_array());
    assert_eq!(json["estimates"].as_array().map(|estimates| estimates.len()), Some(3));
    assert_eq!(json["trajectories"][0]["points"].as_array().map(|points| points.len()), Some(5));
    assert_eq!(json["map"]["nodes"].as_array().map(|nodes| nodes.len()), Some(16));
}
