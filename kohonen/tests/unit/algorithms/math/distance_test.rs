use super::*;

#[test]
fn can_handle_euclidean_distance_empty() {
    let a: Vec<Float> = vec![];
    let b: Vec<Float> = vec![];

    assert_eq!(euclidean_distance(a.into_iter(), b.into_iter()), 0.);
}

#[test]
fn can_calculate_euclidean_distance() {
    let a = vec![1., 2.];
    let b = vec![4., 6.];

    assert_eq!(euclidean_distance(a.into_iter(), b.into_iter()), 5.);
}

#[test]
fn can_handle_euclidean_distance_identical_vectors() {
    let a = vec![0.3, 0.7, 1.1];

    assert_eq!(euclidean_distance(a.clone().into_iter(), a.into_iter()), 0.);
}

#[test]
fn can_calculate_squared_euclidean_distance() {
    let a = vec![1.0, 2.0, 3.0];
    let b = vec![-1.0, -2.0, -3.0];

    assert!((squared_euclidean_distance(a.into_iter(), b.into_iter()) - 56.).abs() < 1E-12);
}
