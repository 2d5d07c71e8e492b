//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. Two value objects with the same values are
//! equal, and "changing" one means building a new one.
//!
//! ```ignore
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Availability { Yes, No }
//!
//! impl ValueObject for Availability {}
//! ```

/// Marker trait for value objects.
///
/// - **Clone**: value objects are cheap to copy
/// - **PartialEq**: compared by attribute values
/// - **Debug**: show up in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
