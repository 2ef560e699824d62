//! Numeric identifiers for scapes and graph elements.
//!
//! Identifiers are assigned by an [`ElementStore`](crate::store::ElementStore)
//! when a record is created and never change afterwards. They render as plain
//! decimal numbers, which is also how they appear in generated documents.

use std::fmt;

/// Identifier of a [`GraphElement`](crate::element::GraphElement).
///
/// # Examples
///
/// ```
/// use scape_core::identifier::ElementId;
///
/// let id = ElementId::new(7);
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    /// Creates an identifier from its raw value.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a [`Scape`](crate::scape::Scape).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScapeId(u64);

impl ScapeId {
    /// Creates an identifier from its raw value.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ScapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_id_display_is_decimal() {
        assert_eq!(ElementId::new(42).to_string(), "42");
        assert_eq!(ElementId::new(0).to_string(), "0");
    }

    #[test]
    fn test_ids_compare_by_raw_value() {
        assert!(ElementId::new(1) < ElementId::new(2));
        assert_eq!(ScapeId::new(3), ScapeId::new(3));
        assert_ne!(ScapeId::new(3), ScapeId::new(4));
    }
}
