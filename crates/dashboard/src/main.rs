//! Headless dashboard runner.
//!
//! Enters a dashboard session, captures the shimmer frame, applies the
//! requested gestures, waits for loading to resolve and captures again.
//!
//! Run with: cargo run -p dashboard -- --loading-secs 1 --long-press 0 --out /tmp

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use dashboard::capture::{self, Script};
use dashboard::config::{self, DashboardConfig};
use embedded_graphics::prelude::Size;
use grid_system::staggered::ColumnCount;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dashboard")]
#[command(about = "Render the staggered widget dashboard to PNG captures", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of grid columns
    #[arg(long, default_value_t = config::DEFAULT_COLUMNS.get())]
    columns: usize,
    /// Viewport width in pixels
    #[arg(long, default_value_t = config::DEFAULT_VIEWPORT.width)]
    width: u32,
    /// Viewport height in pixels
    #[arg(long, default_value_t = config::DEFAULT_VIEWPORT.height)]
    height: u32,
    /// Seconds until the shimmer resolves
    #[arg(long, default_value_t = config::LOADING_DELAY.as_secs_f64())]
    loading_secs: f64,
    /// Long-press the card at this index (toggles remove icons)
    #[arg(long)]
    long_press: Option<usize>,
    /// Remove the card at this index; repeat to remove several, in order
    #[arg(long)]
    remove: Vec<usize>,
    /// Vertical scroll offset for the captures
    #[arg(long, default_value_t = 0)]
    scroll: u32,
    /// Output directory for loading.png and resolved.png
    #[arg(long, default_value = ".")]
    out: PathBuf,
}

impl Cli {
    fn config(&self) -> Result<DashboardConfig> {
        let columns = ColumnCount::new(self.columns).context("--columns must be at least 1")?;
        let delay = Duration::try_from_secs_f64(self.loading_secs)
            .context("--loading-secs must be a non-negative number")?;
        Ok(DashboardConfig::default()
            .columns(columns)
            .loading_delay(delay)
            .viewport(Size::new(self.width, self.height)))
    }

    fn script(&self) -> Script {
        Script {
            long_press: self.long_press,
            removals: self.remove.clone(),
            scroll_y: self.scroll,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    tracing::info!("{} v{}", config::APP_NAME, config::APP_VERSION);

    let config = cli.config()?;
    std::fs::create_dir_all(&cli.out)
        .with_context(|| format!("creating output directory {}", cli.out.display()))?;

    let report = capture::run(config, &cli.script(), &cli.out)
        .await
        .context("dashboard capture failed")?;

    tracing::info!(
        loading = %report.loading.display(),
        resolved = %report.resolved.display(),
        items = report.items,
        removed = report.removed.len(),
        height = report.content_height,
        "done"
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_config() {
        let cli = Cli::parse_from(["dashboard"]);
        assert_eq!(cli.config().unwrap(), DashboardConfig::default());
        assert_eq!(cli.script(), Script::default());
    }

    #[test]
    fn test_repeated_removals_keep_order() {
        let cli = Cli::parse_from(["dashboard", "--remove", "3", "--remove", "0", "--long-press", "1"]);
        let script = cli.script();
        assert_eq!(script.removals, [3, 0]);
        assert_eq!(script.long_press, Some(1));
    }

    #[test]
    fn test_zero_columns_rejected() {
        let cli = Cli::parse_from(["dashboard", "--columns", "0"]);
        assert!(cli.config().is_err());
    }

    #[test]
    fn test_negative_delay_rejected() {
        let cli = Cli::parse_from(["dashboard", "--loading-secs=-1"]);
        assert!(cli.config().is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
