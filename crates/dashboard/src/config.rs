//! Application configuration and constants
//!
//! Central values used across the dashboard. CLI flags override the
//! [`DashboardConfig`] defaults; everything else references these constants.

use core::time::Duration;

use embedded_graphics::prelude::Size;
use grid_system::staggered::ColumnCount;
use ui::LoadingSchedule;

/// The application name
pub const APP_NAME: &str = "Staggered Dashboard";

/// Application version (synchronized with Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Grid columns when none are requested.
pub const DEFAULT_COLUMNS: ColumnCount = ColumnCount::TWO;

/// Time from entering the dashboard until the shimmer resolves.
pub const LOADING_DELAY: Duration = ui::DEFAULT_LOADING_DELAY;

/// Capture viewport (portrait phone-sized).
pub const DEFAULT_VIEWPORT: Size = Size::new(720, 1600);

/// Session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Number of grid columns.
    pub columns: ColumnCount,
    /// Delay before loading resolves.
    pub loading_delay: Duration,
    /// Visible area; its width is split evenly between the columns.
    pub viewport: Size,
}

impl DashboardConfig {
    /// Two columns, ten-second loading, 720×1600 viewport.
    pub const DEFAULT: Self = Self {
        columns: DEFAULT_COLUMNS,
        loading_delay: LOADING_DELAY,
        viewport: DEFAULT_VIEWPORT,
    };

    /// Set the column count
    #[must_use]
    pub fn columns(mut self, columns: ColumnCount) -> Self {
        self.columns = columns;
        self
    }

    /// Set the loading delay
    #[must_use]
    pub fn loading_delay(mut self, delay: Duration) -> Self {
        self.loading_delay = delay;
        self
    }

    /// Set the viewport
    #[must_use]
    pub fn viewport(mut self, viewport: Size) -> Self {
        self.viewport = viewport;
        self
    }

    /// The loading flag as a function of elapsed time.
    #[must_use]
    pub fn loading_schedule(&self) -> LoadingSchedule {
        LoadingSchedule::new(self.loading_delay)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.columns.get(), 2);
        assert_eq!(config.loading_delay, Duration::from_secs(10));
        assert_eq!(config.viewport, Size::new(720, 1600));
    }

    #[test]
    fn test_builder_overrides() {
        let config = DashboardConfig::default()
            .columns(ColumnCount::ONE)
            .loading_delay(Duration::from_millis(500))
            .viewport(Size::new(400, 800));
        assert_eq!(config.columns, ColumnCount::ONE);
        assert!(config.loading_schedule().is_loading_at(Duration::from_millis(499)));
        assert!(!config.loading_schedule().is_loading_at(Duration::from_millis(500)));
        assert_eq!(config.viewport.width, 400);
    }
}
