//! The shared capability of every contact field.

use std::fmt;

/// A validated scalar value with a canonical string rendering.
///
/// Implementors guarantee that `value()` has already passed the field's
/// validation rule; there is no way to obtain an unvalidated field.
pub trait Field: fmt::Display {
    /// The payload type held by the field.
    type Value: ?Sized;

    /// Borrow the validated payload.
    fn value(&self) -> &Self::Value;
}
