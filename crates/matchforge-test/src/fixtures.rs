//! Sample test functions.
//!
//! Each one decapsulates its payload first and fails on a type mismatch,
//! the same way user-written test functions are expected to.
//!
//! # Example
//!
//! ```
//! use matchforge_core::ValueBox;
//! use matchforge_test::fixtures::{is_gt_10, sum_is_15};
//!
//! assert!(is_gt_10::<i32>(&ValueBox::new(11)));
//! assert!(!is_gt_10::<i32>(&ValueBox::new(11_u8)));
//! assert!(sum_is_15::<i32>(&ValueBox::new((7, 8))));
//! ```

use std::fmt::Display;
use std::ops::Add;

use matchforge_core::{decapsulate, report_failure, ValueBox};

/// Accepts the `i32` 42.
pub fn is_42(value: &ValueBox) -> bool {
    let Some(v) = decapsulate::<i32>(value) else {
        return false;
    };
    report_failure(*v == 42, || format!("{v} is not fortytwo"))
}

/// Accepts a `T` greater than ten.
pub fn is_gt_10<T>(value: &ValueBox) -> bool
where
    T: PartialOrd + From<u8> + Display + 'static,
{
    let Some(v) = decapsulate::<T>(value) else {
        return false;
    };
    report_failure(*v > T::from(10), || format!("{v} is not greater than ten"))
}

/// Accepts a `T` in `low..=high`. Meant for binding with `WithArgs`.
pub fn is_between<T>(value: &ValueBox, low: &T, high: &T) -> bool
where
    T: PartialOrd + Display + 'static,
{
    let Some(v) = decapsulate::<T>(value) else {
        return false;
    };
    report_failure(v >= low && v <= high, || {
        format!("{v} is not between {low} and {high}")
    })
}

/// Accepts a `(T, T)` pair summing to fifteen.
pub fn sum_is_15<T>(value: &ValueBox) -> bool
where
    T: Copy + Add<Output = T> + PartialEq + From<u8> + Display + 'static,
{
    let Some((a, b)) = decapsulate::<(T, T)>(value) else {
        return false;
    };
    report_failure(*a + *b == T::from(15), || {
        format!("the sum of {a} and {b} is not 15")
    })
}
