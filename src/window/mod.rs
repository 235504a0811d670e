//! Page window calculation.
//!
//! Produces the ordered tokens a pagination control shows: the first and
//! last page, a band of `radius` pages on each side of the current page,
//! and ellipsis markers for the gaps between them.
//!
//! A gap hiding exactly one page is filled with that page instead of an
//! ellipsis, so an [`DisplayToken::Ellipsis`] always stands for two or
//! more pages and two ellipses are never adjacent.

mod token;

pub use token::DisplayToken;

use crate::error::WindowError;

/// Pages shown on each side of the current page.
pub const DEFAULT_RADIUS: usize = 2;

/// Computes page windows with a fixed neighbor radius.
///
/// # Example
///
/// ```
/// use pagewin::window::{DisplayToken, PageWindowCalculator};
///
/// let calc = PageWindowCalculator::default();
/// let tokens = calc.compute(50, 100).unwrap();
/// assert_eq!(tokens.first(), Some(&DisplayToken::page(1)));
/// assert_eq!(tokens[1], DisplayToken::Ellipsis);
/// assert_eq!(tokens.last(), Some(&DisplayToken::page(100)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindowCalculator {
    radius: usize,
}

impl Default for PageWindowCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS)
    }
}

impl PageWindowCalculator {
    pub const fn new(radius: usize) -> Self {
        Self { radius }
    }

    pub const fn radius(&self) -> usize {
        self.radius
    }

    /// Compute the window for `current` out of `total` pages.
    pub fn compute(&self, current: usize, total: usize) -> Result<Vec<DisplayToken>, WindowError> {
        compute_window(current, total, self.radius)
    }

    /// Like [`compute`](Self::compute), but `None` when there is nothing to paginate.
    pub fn visible(
        &self,
        current: usize,
        total: usize,
    ) -> Result<Option<Vec<DisplayToken>>, WindowError> {
        visible_window(current, total, self.radius)
    }
}

/// Check `1 <= current <= total`.
pub fn validate(current: usize, total: usize) -> Result<(), WindowError> {
    if total == 0 {
        tracing::debug!(current, "rejecting page window with no pages");
        return Err(WindowError::NoPages);
    }
    if current == 0 || current > total {
        tracing::debug!(current, total, "rejecting out-of-range page");
        return Err(WindowError::PageOutOfRange {
            page: current,
            total,
        });
    }
    Ok(())
}

/// Compute the display tokens for a pagination control.
///
/// The first token is always page 1 and, when `total > 1`, the last token
/// is always `total`. Interior pages within `radius` of `current` are kept;
/// every other run of hidden pages collapses to one ellipsis, unless the
/// run is a single page, which is shown directly.
pub fn compute_window(
    current: usize,
    total: usize,
    radius: usize,
) -> Result<Vec<DisplayToken>, WindowError> {
    validate(current, total)?;
    Ok(window_tokens(current, total, radius))
}

/// Token computation for arguments that already passed [`validate`].
pub(crate) fn window_tokens(current: usize, total: usize, radius: usize) -> Vec<DisplayToken> {
    if total == 1 {
        return vec![DisplayToken::page(1)];
    }

    let start = current.saturating_sub(radius).max(2);
    let end = current.saturating_add(radius).min(total - 1);

    let mut anchors = Vec::with_capacity(end.saturating_sub(start) + 3);
    anchors.push(1);
    anchors.extend(start..=end);
    anchors.push(total);

    let mut tokens = Vec::with_capacity(anchors.len() + 2);
    let mut last: Option<usize> = None;
    for page in anchors {
        if let Some(prev) = last {
            match page - prev {
                1 => {}
                2 => tokens.push(DisplayToken::page(prev + 1)),
                _ => tokens.push(DisplayToken::Ellipsis),
            }
        }
        tokens.push(DisplayToken::page(page));
        last = Some(page);
    }

    tracing::trace!(current, total, radius, tokens = tokens.len(), "computed page window");
    tokens
}

/// Compute the window, or `None` when `total <= 1` and the control
/// should not be shown at all.
///
/// Arguments are still validated, so `total == 0` is an error rather than `None`.
pub fn visible_window(
    current: usize,
    total: usize,
    radius: usize,
) -> Result<Option<Vec<DisplayToken>>, WindowError> {
    validate(current, total)?;
    if total <= 1 {
        return Ok(None);
    }
    Ok(Some(window_tokens(current, total, radius)))
}
