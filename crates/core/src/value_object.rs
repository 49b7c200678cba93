//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two
/// `MissingParamError("email")` instances built by separate requests are the
/// same error. To "modify" one, build a new one.
///
/// ```ignore
/// let a = MissingParamError::new("email");
/// let b = MissingParamError::new("email");
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
