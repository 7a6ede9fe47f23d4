use super::*;

#[test]
fn can_produce_repeatable_sequence() {
    let first = DefaultRandom::new_repeatable(42);
    let second = DefaultRandom::new_repeatable(42);

    let first = (0..10).map(|_| first.uniform_real(0., 1.)).collect::<Vec<_>>();
    let second = (0..10).map(|_| second.uniform_real(0., 1.)).collect::<Vec<_>>();

    assert_eq!(first, second);
}

#[test]
fn can_return_uniform_int_in_closed_range() {
    let random = DefaultRandom::new_repeatable(0);

    let values = (0..1000).map(|_| random.uniform_int(-2, 2)).collect::<Vec<_>>();

    assert!(values.iter().all(|value| (-2..=2).contains(value)));
    assert!(values.contains(&-2));
    assert!(values.contains(&2));
}

#[test]
fn can_return_uniform_real_in_half_open_range() {
    let random = DefaultRandom::default();

    assert!((0..1000).map(|_| random.uniform_real(0.5, 1.5)).all(|value| (0.5..1.5).contains(&value)));
}

#[test]
fn can_handle_equal_bounds() {
    let random = DefaultRandom::default();

    assert_eq!(random.uniform_int(3, 3), 3);
    assert_eq!(random.uniform_real(0.25, 0.25), 0.25);
}
