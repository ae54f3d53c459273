use thiserror::Error;

/// Errors raised at the API boundary of a routed call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CallError {
    /// An argument was missing or malformed.
    ///
    /// `argument` names the offending parameter (`"method"`, `"url"`, `"host"`),
    /// `reason` says what was wrong with it.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: &'static str,
    },
}

impl CallError {
    pub(crate) const fn invalid(argument: &'static str, reason: &'static str) -> Self {
        Self::InvalidArgument { argument, reason }
    }

    /// Name of the rejected argument
    pub fn argument(&self) -> &'static str {
        match self {
            Self::InvalidArgument { argument, .. } => *argument,
        }
    }
}

/// Result type for routed call operations
pub type Result<T> = core::result::Result<T, CallError>;
