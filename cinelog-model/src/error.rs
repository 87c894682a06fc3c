use std::fmt::{self, Display};

/// Raised when a path segment does not parse as a catalog identifier.
///
/// Identifiers are opaque to clients, so a malformed one can never
/// match a record; callers generally treat this the same as a lookup
/// miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError(pub String);

impl Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid identifier: {}", self.0)
    }
}

impl std::error::Error for ParseIdError {}
