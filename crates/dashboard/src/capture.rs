//! Scripted capture: enter, apply gestures, wait for loading, capture, exit.

use std::path::{Path, PathBuf};

use ui::WidgetItem;

use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::framebuffer::Framebuffer;
use crate::render::Frame;
use crate::session::DashboardSession;

/// File name of the frame captured right after entering.
pub const LOADING_CAPTURE: &str = "loading.png";

/// File name of the frame captured after loading resolves.
pub const RESOLVED_CAPTURE: &str = "resolved.png";

/// Gestures applied between the two captures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    /// Card to long-press, toggling the remove icons.
    pub long_press: Option<usize>,
    /// Cards to remove, applied in order; each index refers to the list as it
    /// stands after the previous removal.
    pub removals: Vec<usize>,
    /// Vertical scroll offset for both captures.
    pub scroll_y: u32,
}

/// What a capture run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureReport {
    /// Path of the loading-state capture.
    pub loading: PathBuf,
    /// Path of the resolved-state capture.
    pub resolved: PathBuf,
    /// Items removed by the script, in removal order.
    pub removed: Vec<WidgetItem>,
    /// Items left on the dashboard.
    pub items: usize,
    /// Height of the resolved grid content.
    pub content_height: u32,
}

/// Compose the session's current frame, draw it and save it as a PNG.
pub fn capture_frame(
    session: &DashboardSession,
    path: &Path,
    scroll_y: u32,
) -> Result<Frame, DashboardError> {
    let viewport = session.config().viewport;
    let frame = session.compose(viewport)?;

    let mut framebuffer = Framebuffer::with_size(viewport);
    let drawn = frame
        .draw(&mut framebuffer, scroll_y)
        .unwrap_or_else(|never| match never {});
    framebuffer.save_png(path)?;

    tracing::info!(
        path = %path.display(),
        drawn,
        loading = session.is_loading(),
        "frame captured"
    );
    Ok(frame)
}

/// Run one dashboard visit and write both captures into `out_dir`.
pub async fn run(
    config: DashboardConfig,
    script: &Script,
    out_dir: &Path,
) -> Result<CaptureReport, DashboardError> {
    let session = DashboardSession::enter(config)?;

    let loading = out_dir.join(LOADING_CAPTURE);
    capture_frame(&session, &loading, script.scroll_y)?;

    if let Some(index) = script.long_press {
        session.long_press(index)?;
    }
    let removed = script
        .removals
        .iter()
        .map(|&index| session.remove_item(index))
        .collect::<Result<Vec<_>, _>>()?;

    session.wait_until_loaded().await?;

    let resolved = out_dir.join(RESOLVED_CAPTURE);
    let frame = capture_frame(&session, &resolved, script.scroll_y)?;

    let report = CaptureReport {
        loading,
        resolved,
        removed,
        items: session.len(),
        content_height: frame.content_height(),
    };
    session.exit();
    Ok(report)
}
