//! Dashboard UI layer: widget items, the item list, loading state and the
//! state container the renderer reads each frame.
//!
//! This crate is `no_std` by default; it only uses `core` + `heapless`.

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod item_list;
pub mod loading;
pub mod state;
pub mod widget;

pub use item_list::{DashboardList, ItemList, ItemListError, MAX_ITEMS};
pub use loading::{LoadingPhase, LoadingSchedule, LoadingState, DEFAULT_LOADING_DELAY};
pub use state::{CardMode, CardPresentation, DashboardState};
pub use widget::{WidgetColor, WidgetItem, WidgetKind};
