use super::*;
use crate::algorithms::som::Coordinate;
use crate::helpers::algorithms::som::{create_grid_map, create_test_map};
use crate::helpers::utils::assert_vec_close;

fn create_line_map(first: [Float; 2], second: [Float; 2]) -> Map {
    Map::from_weights((1, 2), vec![first.to_vec(), second.to_vec()]).unwrap()
}

fn line_subspaces() -> Subspaces {
    Subspaces::new(vec![0], vec![1])
}

#[test]
fn can_estimate_with_nearest_prototype() {
    let map = create_grid_map(3, 3);

    let estimate = InverseStrategy::Nearest.estimate(&map, &Subspaces::split_at(4, 2), &[2., 1.]).unwrap();

    assert_eq!(estimate.neighbours.len(), 1);
    assert_eq!(estimate.neighbours[0].coordinate, Coordinate(2, 1));
    assert_eq!(estimate.point, TrajectoryPoint { query: vec![2., 1.], output: vec![3., 2.] });
}

#[test]
fn can_estimate_with_uniform_k() {
    let map = create_grid_map(3, 3);

    let estimate = InverseStrategy::UniformK { k: 5 }.estimate(&map, &Subspaces::split_at(4, 2), &[1., 1.]).unwrap();

    // center and its four grid neighbours
    assert_eq!(estimate.neighbours[0].coordinate, Coordinate(1, 1));
    assert_vec_close(estimate.point.query.as_slice(), &[1., 1.], 1E-12);
    assert_vec_close(estimate.point.output.as_slice(), &[2., 1.], 1E-12);
}

#[test]
fn can_estimate_with_weighted_k() {
    let map = create_line_map([1., 10.], [-3., 20.]);

    let estimate = InverseStrategy::WeightedK { k: 2 }.estimate(&map, &line_subspaces(), &[0.]).unwrap();

    assert_eq!(estimate.neighbours.iter().map(|n| n.distance).collect::<Vec<_>>(), vec![1., 3.]);
    assert_vec_close(estimate.point.query.as_slice(), &[0.], 1E-12);
    assert_vec_close(estimate.point.output.as_slice(), &[12.5], 1E-12);
}

parameterized_test! {can_estimate_mean_for_equal_distances, (strategy, first, second), {
    let map = create_line_map(first, second);

    let estimate = strategy.estimate(&map, &line_subspaces(), &[0.]).unwrap();

    assert_vec_close(estimate.point.output.as_slice(), &[15.], 1E-12);
}}

can_estimate_mean_for_equal_distances! {
    case01_uniform: (InverseStrategy::UniformK { k: 2 }, [1., 10.], [-1., 20.]),
    case02_weighted: (InverseStrategy::WeightedK { k: 2 }, [1., 10.], [-1., 20.]),
    case03_weighted_zero_distance: (InverseStrategy::WeightedK { k: 2 }, [0., 10.], [0., 20.]),
    case04_uniform_zero_distance: (InverseStrategy::UniformK { k: 2 }, [0., 10.], [0., 20.]),
}

#[test]
fn can_reproduce_affine_weights_with_weighted_k() {
    // output is an affine function of the query, so any convex combination keeps the relation
    let map = Map::from_weights((1, 3), vec![vec![0., 1.], vec![2., 5.], vec![5., 11.]]).unwrap();

    let estimate = InverseStrategy::WeightedK { k: 3 }.estimate(&map, &line_subspaces(), &[1.5]).unwrap();

    let query = estimate.point.query[0];
    assert_vec_close(estimate.point.output.as_slice(), &[2. * query + 1.], 1E-12);
}

parameterized_test! {can_reject_invalid_k, (strategy, k), {
    let map = create_test_map();

    let result = strategy.estimate(&map, &Subspaces::split_at(4, 2), &[0., 0.]);

    assert_eq!(result, Err(SomError::InvalidK { k, size: 4 }));
}}

can_reject_invalid_k! {
    case01_weighted_single: (InverseStrategy::WeightedK { k: 1 }, 1),
    case02_weighted_zero: (InverseStrategy::WeightedK { k: 0 }, 0),
    case03_uniform_zero: (InverseStrategy::UniformK { k: 0 }, 0),
    case04_uniform_too_many: (InverseStrategy::UniformK { k: 5 }, 5),
    case05_weighted_too_many: (InverseStrategy::WeightedK { k: 5 }, 5),
}

#[test]
fn can_reject_empty_map() {
    let map = Map::from_weights((0, 0), vec![]).unwrap();
    let subspaces = Subspaces::new(vec![], vec![]);

    [
        InverseStrategy::Nearest,
        InverseStrategy::UniformK { k: 0 },
        InverseStrategy::UniformK { k: 1 },
        InverseStrategy::WeightedK { k: 0 },
        InverseStrategy::WeightedK { k: 1 },
        InverseStrategy::WeightedK { k: 2 },
    ]
    .iter()
    .for_each(|strategy| assert_eq!(strategy.estimate(&map, &subspaces, &[]).map(|_| ()), Err(SomError::EmptyMap)));
}

#[test]
fn can_reject_invalid_output_subspace() {
    let map = create_test_map();

    let result = InverseStrategy::Nearest.estimate(&map, &Subspaces::new(vec![0, 1], vec![2, 9]), &[0., 0.]);

    assert_eq!(result.map(|_| ()), Err(SomError::DimensionMismatch { expected: 4, actual: 10 }));
}

parameterized_test! {can_display_strategy, (strategy, expected), {
    assert_eq!(strategy.to_string(), expected);
}}

can_display_strategy! {
    case01_nearest: (InverseStrategy::Nearest, "nearest"),
    case02_uniform: (InverseStrategy::UniformK { k: 4 }, "uniform-4"),
    case03_weighted: (InverseStrategy::WeightedK { k: 3 }, "weighted-3"),
}
