//! Navigation state for a pagination control.

use serde::Serialize;

use crate::error::WindowError;
use crate::window::{validate, window_tokens, DisplayToken};

/// Everything a renderer needs to draw one pagination control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageControls {
    pub current: usize,
    pub total: usize,
    /// Target of the "previous" button, `None` on the first page.
    pub previous: Option<usize>,
    /// Target of the "next" button, `None` on the last page.
    pub next: Option<usize>,
    pub tokens: Vec<DisplayToken>,
}

impl PageControls {
    /// Build the controls for `current` out of `total` pages.
    ///
    /// Returns `Ok(None)` when there is a single page: the control should
    /// not be rendered at all.
    pub fn build(current: usize, total: usize, radius: usize) -> Result<Option<Self>, WindowError> {
        validate(current, total)?;
        if total <= 1 {
            return Ok(None);
        }

        Ok(Some(Self::from_tokens(current, total, window_tokens(current, total, radius))))
    }

    /// Same as [`build`](Self::build), but renders the control even for a single page.
    pub fn build_always(current: usize, total: usize, radius: usize) -> Result<Self, WindowError> {
        validate(current, total)?;
        Ok(Self::from_tokens(current, total, window_tokens(current, total, radius)))
    }

    fn from_tokens(current: usize, total: usize, tokens: Vec<DisplayToken>) -> Self {
        Self {
            current,
            total,
            previous: (current > 1).then(|| current - 1),
            next: (current < total).then(|| current + 1),
            tokens,
        }
    }

    /// Page numbers a click can navigate to (every shown page except the current one).
    pub fn targets(&self) -> impl Iterator<Item = usize> + '_ {
        self.tokens
            .iter()
            .filter_map(DisplayToken::as_page)
            .filter(move |page| *page != self.current)
    }

    pub const fn is_first(&self) -> bool {
        self.previous.is_none()
    }

    pub const fn is_last(&self) -> bool {
        self.next.is_none()
    }
}
