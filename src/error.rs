/// Errors reported at the crate's validation boundaries.
///
/// Every operation here is pure and deterministic, so both variants signal
/// a defect in the caller's input rather than a transient condition; the
/// fix is to correct the input, never to retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A raw grid that is not exactly 5 rows of 9 cells holding only 0 or 1.
    #[error("invalid board shape: {detail}")]
    InvalidShape { detail: String },

    /// A square index, coordinate pair, or direction outside the board's
    /// domain.
    #[error("precondition violated: {detail}")]
    PreconditionViolation { detail: String },
}

impl Error {
    pub(crate) fn invalid_shape(detail: impl Into<String>) -> Error {
        Error::InvalidShape {
            detail: detail.into(),
        }
    }

    pub(crate) fn precondition(detail: impl Into<String>) -> Error {
        Error::PreconditionViolation {
            detail: detail.into(),
        }
    }
}
