#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions
)]

//! # pagewin
//!
//! Pagination windows with ellipsis collapsing.
//!
//! Given the current page and the page count, pagewin produces the
//! ordered tokens a pagination control renders, for example
//! `1 … 48 49 [50] 51 52 … 100`. The width of the control depends only
//! on the neighbor radius, never on the number of pages.
//!
//! ## Modules
//!
//! - [`window`]: Page window calculation and display tokens
//! - [`page`]: Item/page arithmetic
//! - [`controls`]: Previous/next targets bundled with the window
//! - [`format`]: Text and JSON output
//! - [`config`]: Saved CLI defaults
//! - [`perf`]: Timing scopes

pub mod config;
pub mod controls;
pub mod error;
pub mod format;
pub mod page;
pub mod perf;
pub mod window;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::controls::PageControls;
    pub use crate::error::{ErrorKind, WindowError};
    pub use crate::window::{
        compute_window, visible_window, DisplayToken, PageWindowCalculator, DEFAULT_RADIUS,
    };
}
