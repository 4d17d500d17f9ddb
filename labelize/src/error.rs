use thiserror::Error;

use crate::Identifier;

/// An error that can occur when resolving a label.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LabelError {
    /// The labelled record could not be found in the store.
    ///
    /// Record stores may return this instead of `Ok(None)`; either way, the
    /// label getter treats it as a stale reference.
    #[error("Record with identifier `{id}` not found")]
    RecordNotFound {
        /// The identifier of the record that was not found.
        id: Identifier,
    },
    /// The record store failed to look up a record.
    #[error("Error when looking up a labelled record: {0}")]
    Lookup(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl LabelError {
    /// Creates a new error for a record that could not be found.
    #[must_use]
    pub fn record_not_found(id: impl Into<Identifier>) -> Self {
        Self::RecordNotFound { id: id.into() }
    }

    /// Creates a new error from a record store failure.
    #[must_use]
    pub fn lookup(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Lookup(Box::new(error))
    }

    /// Returns `true` if this error signals a missing record.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RecordNotFound { .. })
    }
}

/// An alias for [`Result`] that uses [`LabelError`] as the error type.
pub type Result<T> = std::result::Result<T, LabelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_not_found_display() {
        let error = LabelError::record_not_found(42);

        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "Record with identifier `42` not found");
    }

    #[test]
    fn lookup_display() {
        let error = LabelError::lookup(std::io::Error::other("connection reset"));

        assert!(!error.is_not_found());
        assert_eq!(
            error.to_string(),
            "Error when looking up a labelled record: connection reset"
        );
    }
}
