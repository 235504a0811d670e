//! pagewin - print the page window a pagination control should show.
//!
//! # Usage
//!
//! ```bash
//! pagewin --page 50 --total-pages 100
//! pagewin --page 3 --items 245 --per-page 20 --format json
//! pagewin --page 40 --total-pages 12 --clamp
//! pagewin --radius 1 --save
//! ```

use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::Parser;

use pagewin::config::{
    clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags, ConfigFlags, OutputFormat,
};
use pagewin::controls::PageControls;
use pagewin::format::{render_json, render_text};
use pagewin::page::{clamp_page, parse_one_based_page, total_pages};
use pagewin::perf;
use pagewin::window::DEFAULT_RADIUS;

/// Print the page window for a pagination control
#[derive(Parser, Debug)]
#[command(name = "pagewin", version, about, long_about = None)]
struct Cli {
    /// Current page (1-based, defaults to 1)
    #[arg(short, long, value_name = "N")]
    page: Option<String>,

    /// Move a page past the end onto the last page instead of failing
    #[arg(long)]
    clamp: bool,

    /// Total number of pages
    #[arg(short, long, value_name = "N", conflicts_with = "items")]
    total_pages: Option<usize>,

    /// Derive the page count from an item count instead
    #[arg(long, value_name = "N")]
    items: Option<usize>,

    /// Items per page, used with --items
    #[arg(long, value_name = "N", default_value_t = 10)]
    per_page: usize,

    /// Pages shown on each side of the current page
    #[arg(short, long, value_name = "N")]
    radius: Option<usize>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Print the window even when there is only one page
    #[arg(long)]
    always: bool,

    /// Report timings
    #[arg(long)]
    perf: bool,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

impl Cli {
    const fn flags(&self) -> ConfigFlags {
        ConfigFlags {
            radius: self.radius,
            format: self.format,
            perf: self.perf,
            always: self.always,
        }
    }

    fn total(&self) -> Result<usize> {
        match (self.total_pages, self.items) {
            (Some(total), _) => Ok(total),
            (None, Some(items)) => Ok(total_pages(items, self.per_page)),
            (None, None) => anyhow::bail!("one of --total-pages or --items is required"),
        }
    }

    fn current(&self, total: usize) -> Result<usize> {
        let raw = self.page.as_deref();
        let Some(page) = parse_one_based_page(raw) else {
            anyhow::bail!("invalid page {:?}: expected an integer >= 1", raw.unwrap_or_default());
        };
        Ok(if self.clamp { clamp_page(page, total) } else { page })
    }
}

fn main() -> Result<()> {
    // Initialize logging; perf scopes report at info and are gated by --perf
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into())
                .add_directive("pagewin::perf=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = cli.flags();

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
        tracing::info!(path = %global_path.display(), "saved defaults");
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);
    perf::set_enabled(effective.perf);

    if (cli.save || cli.clear) && cli.total_pages.is_none() && cli.items.is_none() {
        return Ok(());
    }

    let total = cli.total()?;
    let current = cli.current(total)?;
    let radius = effective.radius.unwrap_or(DEFAULT_RADIUS);

    let controls = {
        let _scope = perf::scope("window.compute");
        if effective.always {
            PageControls::build_always(current, total, radius).map(Some)
        } else {
            PageControls::build(current, total, radius)
        }
    }
    .with_context(|| format!("cannot paginate page {current} of {total}"))?;

    let Some(controls) = controls else {
        tracing::debug!(total, "single page, nothing to show");
        return Ok(());
    };

    match effective.format.unwrap_or(OutputFormat::Text) {
        OutputFormat::Text => println!("{}", render_text(&controls.tokens, controls.current)),
        OutputFormat::Json => println!("{}", render_json(&controls).context("serialize window")?),
    }
    Ok(())
}
