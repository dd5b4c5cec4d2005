//! Grid Layout System
//!
//! Constraint-based layout engine for card dashboards.
//!
//! # Architecture
//!
//! - Core types: Constraints, ChildLayout, LayoutResult, Edges
//! - Staggered grid: round-robin column placement of measured children
//! - Rendering: Integration with embedded-graphics
//!
//! # Example
//!
//! ```
//! use grid_system::prelude::*;
//! use embedded_graphics::prelude::Size;
//!
//! let children = [Size::new(180, 190), Size::new(180, 220)];
//! let columns = ColumnCount::new(2)?;
//! let result = staggered_layout(&children, columns, Constraints::loose(Size::new(360, 2000)))?;
//! assert_eq!(result.size, Size::new(360, 220));
//! # Ok::<(), grid_system::staggered::LayoutError>(())
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

pub mod layout;
pub mod render;
pub mod staggered;
pub mod style;

pub mod prelude {
    // Layout traits (public API)
    pub use crate::layout::{ChildLayout, Constraints, Layout, LayoutResult, MAX_CHILDREN};

    // Staggered grid (public API)
    pub use crate::staggered::{staggered_layout, ColumnCount, LayoutError, StaggeredGrid};

    // Style system (public API)
    pub use crate::style::Edges;

    // Render utilities (public API)
    pub use crate::render::*;
}
