//! Error type for the desktop dashboard.

use std::path::PathBuf;

use grid_system::staggered::LayoutError;
use ui::ItemListError;

/// Everything a session, a frame or a capture can fail with.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// Grid placement failed.
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// An item index was rejected.
    #[error(transparent)]
    Items(#[from] ItemListError),

    /// `enter` was called outside a tokio runtime.
    #[error("dashboard sessions need a running tokio runtime")]
    NoRuntime,

    /// The revision channel closed while waiting on it.
    #[error("dashboard session closed")]
    SessionClosed,

    /// Writing a frame capture failed.
    #[error("failed to write capture {}", .path.display())]
    Capture {
        /// Destination file.
        path: PathBuf,
        /// Underlying encoder or I/O error.
        #[source]
        source: image::ImageError,
    },
}
