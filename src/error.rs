//! Errors raised by the pagination helpers.

use thiserror::Error;

/// Broad classification of a [`WindowError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed arguments that violate the documented preconditions.
    InvalidArgument,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("total pages must be at least 1")]
    NoPages,

    #[error("page {page} is outside 1..={total}")]
    PageOutOfRange { page: usize, total: usize },
}

impl WindowError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NoPages | Self::PageOutOfRange { .. } => ErrorKind::InvalidArgument,
        }
    }
}
