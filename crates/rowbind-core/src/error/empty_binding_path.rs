use super::Error;

/// Error when a selector ran to completion without reading any property of
/// the recorded entity, e.g. it returned a literal.
#[derive(Debug)]
pub(super) struct EmptyBindingPath;

impl std::error::Error for EmptyBindingPath {}

impl core::fmt::Display for EmptyBindingPath {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("no binding properties found")
    }
}

impl Error {
    pub fn empty_binding_path() -> Error {
        Error::from(super::ErrorKind::EmptyBindingPath(EmptyBindingPath))
    }

    /// Returns `true` if this error is an empty binding path error.
    pub fn is_empty_binding_path(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::EmptyBindingPath(_))
    }
}
