//! Desktop host for the staggered widget dashboard.
//!
//! - [`session`]: state container lifecycle and the cancelable loading timer
//! - [`render`]: cards placed by the staggered grid into a [`Frame`](render::Frame)
//! - [`framebuffer`]: in-memory draw target with PNG export
//! - [`capture`]: scripted gestures between the loading and resolved captures
//! - [`config`]: constants and [`DashboardConfig`](config::DashboardConfig)

pub mod capture;
pub mod config;
pub mod error;
pub mod framebuffer;
pub mod render;
pub mod session;

pub use config::DashboardConfig;
pub use error::DashboardError;
pub use framebuffer::Framebuffer;
pub use render::Frame;
pub use session::DashboardSession;
