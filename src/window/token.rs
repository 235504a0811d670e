//! Display tokens emitted by the window calculator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single entry in a rendered page window.
///
/// A renderer turns [`DisplayToken::Page`] into a clickable control and
/// [`DisplayToken::Ellipsis`] into a non-interactive marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DisplayToken {
    /// A 1-based page number.
    Page {
        /// Page index, always within `1..=total_pages`.
        page: usize,
    },
    /// A collapsed run of two or more hidden pages.
    Ellipsis,
}

impl DisplayToken {
    /// Shorthand for a page token.
    pub const fn page(page: usize) -> Self {
        Self::Page { page }
    }

    /// The page number, if this is a page token.
    pub const fn as_page(&self) -> Option<usize> {
        match self {
            Self::Page { page } => Some(*page),
            Self::Ellipsis => None,
        }
    }

    pub const fn is_ellipsis(&self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

impl fmt::Display for DisplayToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page { page } => write!(f, "{page}"),
            Self::Ellipsis => f.write_str("…"),
        }
    }
}
