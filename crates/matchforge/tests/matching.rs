//! End-to-end matching scenarios.

use matchforge::prelude::*;
use matchforge_test::fixtures::{is_42, is_between, is_gt_10, sum_is_15};

fn run(arena: &PredicateArena, handle: PredicateHandle, value: ValueBox) -> bool {
    arena.execute(handle, &value)
}

#[test]
fn test_type_checking_rejects_other_widths() {
    let mut arena = PredicateArena::new();
    let pred = arena.obey(SubTest::function(is_42));
    assert!(!run(&arena, pred, encapsulate(42_u8)));
    assert!(!run(&arena, pred, encapsulate(41_u8)));
    assert!(run(&arena, pred, encapsulate(42)));
}

#[test]
fn test_equality_on_arrays() {
    let expected: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    let actual: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 10];
    let wider: [i32; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

    let mut arena = PredicateArena::new();
    let eq_expected = arena.is_equal_array(expected);
    let eq_actual = arena.is_equal_array(actual);
    let eq_wider = arena.is_equal_array([0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);

    assert!(!run(&arena, eq_expected, encapsulate(actual)));
    assert!(run(&arena, eq_actual, encapsulate(actual)));
    assert!(!run(&arena, eq_expected, encapsulate(wider)));
    assert!(run(&arena, eq_wider, encapsulate(wider)));
    assert!(!run(&arena, eq_wider, encapsulate(expected)));
    assert!(!run(&arena, eq_wider, encapsulate([0, 1, 2, 3, 4, 5, 6, 7, 8, 10])));
}

#[test]
fn test_equality_on_collections_and_scalars() {
    let mut arena = PredicateArena::new();
    let eq_vec = arena.is_equal(vec![0_u8, 1, 2, 3, 4, 5, 6, 7, 8, 10]);
    let eq_42 = arena.is_equal(42);

    assert!(run(&arena, eq_vec, encapsulate(vec![0_u8, 1, 2, 3, 4, 5, 6, 7, 8, 10])));
    assert!(!run(&arena, eq_vec, encapsulate(vec![0_u8, 1, 2])));
    assert!(run(&arena, eq_42, encapsulate(42)));
    assert!(!run(&arena, eq_42, encapsulate(24)));
}

#[test]
fn test_numeric_families() {
    let mut arena = PredicateArena::new();

    let odd_u8 = arena.is_odd::<u8>();
    let even_u8 = arena.is_even::<u8>();
    let div7 = arena.is_divisible_by(7_u8);
    let between = arena.in_between(10_u8, 20);
    let outside = arena.outside(10_u8, 20);
    let close = arena.is_equal_epsilon(15_u8, 2);

    assert!(!run(&arena, odd_u8, encapsulate(42_u8)));
    assert!(!run(&arena, even_u8, encapsulate(21_u8)));
    assert!(run(&arena, div7, encapsulate(42_u8)));
    assert!(!run(&arena, div7, encapsulate(43_u8)));
    assert!(run(&arena, between, encapsulate(15_u8)));
    assert!(!run(&arena, between, encapsulate(42_u8)));
    assert!(run(&arena, outside, encapsulate(42_u8)));
    assert!(!run(&arena, outside, encapsulate(15_u8)));
    for v in [12_u8, 18] {
        assert!(!run(&arena, close, encapsulate(v)), "{v}");
    }
    for v in 13_u8..=17 {
        assert!(run(&arena, close, encapsulate(v)), "{v}");
    }
}

#[test]
fn test_range_bounds_are_inclusive() {
    let mut arena = PredicateArena::new();
    let between = arena.in_between(10, 20);
    assert!(run(&arena, between, encapsulate(10)));
    assert!(run(&arena, between, encapsulate(20)));
    assert!(!run(&arena, between, encapsulate(9)));
    assert!(!run(&arena, between, encapsulate(21)));
}

#[test]
fn test_floating_families() {
    let mut arena = PredicateArena::new();

    let loose = arena.is_equal_epsilon(0.2, 0.1);
    let tight = arena.is_equal_epsilon(0.2, 0.001);
    let le = arena.is_lesser_eq(42.5);
    let odd = arena.is_odd::<f64>();
    let even = arena.is_even::<f64>();
    let zero = arena.is_zero::<f64>();
    let non_zero = arena.is_non_zero::<f64>();
    let between = arena.in_between(10.2, 10.8);
    let div = arena.is_divisible_by(2.5);

    assert!(!run(&arena, tight, encapsulate(0.3)));
    assert!(run(&arena, loose, encapsulate(0.3)));
    assert!(!run(&arena, le, encapsulate(102.3)));
    assert!(run(&arena, le, encapsulate(12.3)));
    assert!(!run(&arena, odd, encapsulate(102.3)));
    assert!(!run(&arena, even, encapsulate(102.3)));
    assert!(!run(&arena, odd, encapsulate(102.0)));
    assert!(run(&arena, even, encapsulate(102.0)));
    assert!(run(&arena, odd, encapsulate(103.0)));
    assert!(!run(&arena, even, encapsulate(103.0)));
    assert!(!run(&arena, zero, encapsulate(102.3)));
    assert!(run(&arena, zero, encapsulate(0.0)));
    assert!(run(&arena, non_zero, encapsulate(102.3)));
    assert!(!run(&arena, between, encapsulate(10.9)));
    assert!(run(&arena, div, encapsulate(5.0)));
}

#[test]
fn test_polarity_over_functions_and_handles() {
    let mut arena = PredicateArena::new();
    let obey = arena.obey(SubTest::function(is_42));
    let resist = arena.resist(SubTest::function(is_42));
    for (v, expected) in [(41, false), (42, true), (43, false)] {
        assert_eq!(run(&arena, obey, encapsulate(v)), expected);
        assert_eq!(run(&arena, resist, encapsulate(v)), !expected);
    }

    let odd = arena.is_odd::<i32>();
    let obey_odd = arena.obey(odd);
    let resist_odd = arena.resist(odd);
    assert!(run(&arena, obey_odd, encapsulate(13)));
    assert!(!run(&arena, obey_odd, encapsulate(42)));
    assert!(!run(&arena, resist_odd, encapsulate(13)));
    assert!(run(&arena, resist_odd, encapsulate(42)));
}

#[test]
fn test_polarity_over_closures() {
    let mut arena = PredicateArena::new();
    let always = arena.obey(SubTest::closure(|_| true));
    let never = arena.obey(SubTest::closure(|_| false));
    let is_42_closure = arena.obey(SubTest::closure(|value| {
        decapsulate::<i32>(value).is_some_and(|v| *v == 42)
    }));

    assert!(run(&arena, always, encapsulate(13)));
    assert!(!run(&arena, never, encapsulate(13)));
    assert!(run(&arena, is_42_closure, encapsulate(42)));
    assert!(!run(&arena, is_42_closure, encapsulate(13)));
}

#[test]
fn test_combinators_over_mixed_sources() {
    let mut arena = PredicateArena::new();
    let even = arena.is_even::<i32>();

    let all = arena.match_all([SubTest::function(is_gt_10::<i32>), even.into()]);
    let one = arena.match_one([SubTest::function(is_gt_10::<i32>), even.into()]);
    let any = arena.match_any([SubTest::function(is_gt_10::<i32>), even.into()]);
    let none = arena.match_none([SubTest::function(is_gt_10::<i32>), even.into()]);

    // (value, all, one, any, none)
    let expectations = [
        (42, true, false, true, false),
        (43, false, true, true, false),
        (8, false, true, true, false),
        (7, false, false, false, true),
    ];

    for (v, e_all, e_one, e_any, e_none) in expectations {
        assert_eq!(run(&arena, all, encapsulate(v)), e_all, "all {v}");
        assert_eq!(run(&arena, one, encapsulate(v)), e_one, "one {v}");
        assert_eq!(run(&arena, any, encapsulate(v)), e_any, "any {v}");
        assert_eq!(run(&arena, none, encapsulate(v)), e_none, "none {v}");
    }
}

#[test]
fn test_with_args_inside_combinator() {
    let mut arena = PredicateArena::new();
    let between = arena.with_args(is_between::<i32>, (10, 20));
    let odd = arena.is_odd::<i32>();
    let odd_between = arena.match_all([between.into(), odd.into()]);

    assert!(!run(&arena, odd_between, encapsulate(42)));
    assert!(!run(&arena, odd_between, encapsulate(43)));
    assert!(!run(&arena, odd_between, encapsulate(12)));
    assert!(run(&arena, odd_between, encapsulate(13)));
}

#[test]
fn test_tuples_pack_several_values() {
    let mut arena = PredicateArena::new();
    let sum = arena.obey(SubTest::function(sum_is_15::<i32>));

    assert!(run(&arena, sum, encapsulate((7, 8))));
    assert!(run(&arena, sum, encapsulate((8, 7))));
    assert!(!run(&arena, sum, encapsulate((8, 8))));
    assert!(!run(&arena, sum, encapsulate((7, 7))));
    assert!(!run(&arena, sum, encapsulate((7_u32, 8))));
    assert!(!run(&arena, sum, encapsulate((7, 8, 9))));
}

#[test]
fn test_nested_combinators() {
    let mut arena = PredicateArena::new();
    let small = arena.is_lesser_than(0);
    let big = arena.is_greater_than(100);
    let extreme = arena.match_any([small.into(), big.into()]);
    let even = arena.is_even::<i32>();
    let extreme_and_even = arena.match_all([extreme.into(), SubTest::nested(even)]);
    let tame = arena.resist(extreme);

    assert!(run(&arena, extreme_and_even, encapsulate(102)));
    assert!(!run(&arena, extreme_and_even, encapsulate(101)));
    assert!(!run(&arena, extreme_and_even, encapsulate(50)));
    assert!(run(&arena, tame, encapsulate(50)));
    assert!(!run(&arena, tame, encapsulate(-5)));
}

#[test]
fn test_reset_and_rebuild() {
    let mut arena = PredicateArena::new();
    let build = |arena: &mut PredicateArena| {
        let even = arena.is_even::<i32>();
        arena.match_all([SubTest::function(is_gt_10::<i32>), even.into()])
    };

    let first = build(&mut arena);
    let first_results: Vec<bool> = [42, 43, 8, 7]
        .into_iter()
        .map(|v| run(&arena, first, encapsulate(v)))
        .collect();

    arena.reset();
    assert!(arena.is_empty());
    assert!(matches!(
        arena.try_execute(first, &encapsulate(42)),
        Err(ArenaError::StaleHandle { .. })
    ));

    let second = build(&mut arena);
    let second_results: Vec<bool> = [42, 43, 8, 7]
        .into_iter()
        .map(|v| run(&arena, second, encapsulate(v)))
        .collect();

    assert_eq!(first_results, second_results);
    assert_eq!(first_results, vec![true, false, false, false]);
}

#[test]
fn test_classifiers_are_shared_per_type_until_reset() {
    let mut arena = PredicateArena::new();
    let odd_i32 = arena.is_odd::<i32>();
    assert_eq!(arena.is_odd::<i32>(), odd_i32);
    assert_ne!(arena.is_odd::<u8>(), odd_i32);
    assert_ne!(arena.is_even::<i32>(), odd_i32);

    let in_combinator = arena.match_all([odd_i32.into()]);
    assert!(run(&arena, in_combinator, encapsulate(13)));

    arena.reset();
    assert!(!arena.contains(odd_i32));
    let rebuilt = arena.is_odd::<i32>();
    assert!(arena.contains(rebuilt));
    assert!(run(&arena, rebuilt, encapsulate(13)));
    assert!(!run(&arena, rebuilt, encapsulate(14)));
}

#[test]
#[should_panic(expected = "stale predicate handle")]
fn test_stale_handle_fails_checked_assertion() {
    let mut arena = PredicateArena::new();
    let odd = arena.is_odd::<i32>();
    arena.reset();
    arena.execute(odd, &encapsulate(13));
}
