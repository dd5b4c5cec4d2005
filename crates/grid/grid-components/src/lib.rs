//! Dashboard UI components
//!
//! Widget cards and their building blocks, drawn with embedded-graphics and
//! laid out through the `grid-system` [`Layout`](grid_system::layout::Layout) trait.
//!
//! # Components
//!
//! - `WidgetCard` - One dashboard card (resolved, shimmer, add-new)
//! - `Label` - Static text display
//! - `Icon` - Plus / minus circle glyphs
//!
//! # Example
//!
//! ```
//! use grid_components::prelude::*;
//! use grid_system::prelude::*;
//! use ui::{CardMode, CardPresentation, WidgetColor, WidgetKind};
//!
//! let card = WidgetCard::new(
//!     CardPresentation {
//!         index: 0,
//!         kind: WidgetKind::Battery,
//!         color: WidgetColor::BatteryGreen,
//!         mode: CardMode::Resolved,
//!         show_remove: false,
//!     },
//!     360,
//! );
//! let result = card.layout(Constraints::scrollable(360));
//! assert_eq!(result.size.height, 190 + 20);
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

use embedded_graphics::prelude::Point;

pub mod card;
pub mod icon;
pub mod label;

/// Common component imports.
pub mod prelude {
    pub use crate::card::*;
    pub use crate::icon::*;
    pub use crate::label::*;
}

/// Clamp a pixel extent into the signed coordinate space.
pub(crate) fn px(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// `origin` moved right by `dx` and down by `dy`, saturating at the edges.
pub(crate) fn at(origin: Point, dx: u32, dy: u32) -> Point {
    Point::new(
        origin.x.saturating_add(px(dx)),
        origin.y.saturating_add(px(dy)),
    )
}
