use super::Error;

/// Error when a reference binding's selector navigates more than one
/// property. References must be a single direct hop; deeper chains belong on
/// the referenced table's own `bind_to` columns.
#[derive(Debug)]
pub(super) struct NestedReference;

impl std::error::Error for NestedReference {}

impl core::fmt::Display for NestedReference {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("reference binding doesn't support nested properties")
    }
}

impl Error {
    pub fn nested_reference() -> Error {
        Error::from(super::ErrorKind::NestedReference(NestedReference))
    }

    /// Returns `true` if this error is a nested reference error.
    pub fn is_nested_reference(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NestedReference(_))
    }
}
