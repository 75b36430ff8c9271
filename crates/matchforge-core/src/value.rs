//! Type-erased value boxes.
//!
//! A [`ValueBox`] owns one value of any `'static` type together with the
//! [`TypeId`] of that type. The only way back to the concrete value is a
//! checked extraction: asking for the wrong type yields `None` (or a
//! [`TypeMismatch`]), never a reinterpretation of the stored value.

use std::any::{type_name, Any, TypeId};
use std::fmt;

use tracing::debug;

use crate::diagnostics::report_failure;
use crate::error::TypeMismatch;

/// An immutable, type-erased value plus its type identity.
///
/// Fixed-size arrays keep their length in the type identity, so a box
/// holding `[u8; 10]` is not compatible with `[u8; 9]`, `[i32; 10]` or `u8`.
///
/// # Example
///
/// ```
/// use matchforge_core::ValueBox;
///
/// let boxed = ValueBox::new(42_i32);
/// assert_eq!(boxed.try_decapsulate::<i32>(), Ok(&42));
/// assert!(boxed.try_decapsulate::<u8>().is_err());
/// ```
pub struct ValueBox {
    value: Box<dyn Any>,
    type_id: TypeId,
    type_name: &'static str,
}

impl ValueBox {
    /// Wraps `value`, recording its type identity.
    pub fn new<T: 'static>(value: T) -> Self {
        Self {
            value: Box::new(value),
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
        }
    }

    /// Returns the type identity token of the stored value.
    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the human-readable name of the stored type.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns true if the box holds a `T`.
    #[inline]
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Extracts a view of the stored value if it is a `T`.
    ///
    /// Does not report anything to the diagnostic sink; see [`decapsulate`]
    /// for the reporting form.
    pub fn try_decapsulate<T: 'static>(&self) -> Result<&T, TypeMismatch> {
        let mismatch = || TypeMismatch {
            actual: self.type_name,
            expected: type_name::<T>(),
        };
        if !self.is::<T>() {
            return Err(mismatch());
        }
        self.value.downcast_ref::<T>().ok_or_else(mismatch)
    }
}

impl fmt::Debug for ValueBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueBox")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Wraps `value` into a [`ValueBox`].
#[inline]
pub fn encapsulate<T: 'static>(value: T) -> ValueBox {
    ValueBox::new(value)
}

/// Extracts a `T` from `value`, reporting a mismatch to the diagnostic sink.
///
/// # Example
///
/// ```
/// use matchforge_core::{decapsulate, encapsulate};
///
/// let boxed = encapsulate((7_i32, 8_i32));
/// assert_eq!(decapsulate::<(i32, i32)>(&boxed), Some(&(7, 8)));
/// assert_eq!(decapsulate::<(u32, i32)>(&boxed), None);
/// ```
pub fn decapsulate<T: 'static>(value: &ValueBox) -> Option<&T> {
    match value.try_decapsulate::<T>() {
        Ok(inner) => Some(inner),
        Err(mismatch) => {
            debug!(
                event = "type_mismatch",
                actual = mismatch.actual,
                expected = mismatch.expected,
            );
            report_failure(false, || mismatch.to_string());
            None
        }
    }
}

/// Array-shaped form of [`decapsulate`]: the box must hold exactly `[T; N]`.
#[inline]
pub fn decapsulate_array<T: 'static, const N: usize>(value: &ValueBox) -> Option<&[T; N]> {
    decapsulate::<[T; N]>(value)
}
