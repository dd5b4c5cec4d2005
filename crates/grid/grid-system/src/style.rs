//! Styling primitives for card layouts.
//!
//! All types are `no_std` compatible.

use embedded_graphics::prelude::{Point, Size};

/// Edge insets for padding (top, right, bottom, left) in pixels.
///
/// # Examples
///
/// ```
/// use grid_system::style::Edges;
///
/// let padding = Edges::all(10);
/// assert_eq!(padding.horizontal(), 20);
///
/// let hv = Edges::horizontal_vertical(24, 12);
/// assert_eq!(hv.left, 24);
/// assert_eq!(hv.top, 12);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Edges {
    /// Top edge inset in pixels.
    pub top: u32,

    /// Right edge inset in pixels.
    pub right: u32,

    /// Bottom edge inset in pixels.
    pub bottom: u32,

    /// Left edge inset in pixels.
    pub left: u32,
}

impl Edges {
    /// Creates edges with all sides set to the same value.
    pub const fn all(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Creates edges with individual values for each side.
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates edges with separate horizontal and vertical values.
    pub const fn horizontal_vertical(horizontal: u32, vertical: u32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Returns the total horizontal space (left + right).
    pub const fn horizontal(self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// Returns the total vertical space (top + bottom).
    pub const fn vertical(self) -> u32 {
        self.top.saturating_add(self.bottom)
    }

    /// Total inset as a size (horizontal, vertical).
    pub const fn total(self) -> Size {
        Size::new(self.horizontal(), self.vertical())
    }

    /// Offset of the content box from the outer top-left corner.
    #[allow(clippy::cast_possible_wrap)]
    pub fn content_offset(self) -> Point {
        // Insets are small pixel counts; the i32 cast cannot wrap in practice.
        Point::new(self.left as i32, self.top as i32)
    }

    /// Shrink an outer size to its content size, saturating at zero.
    pub fn inner(self, outer: Size) -> Size {
        Size::new(
            outer.width.saturating_sub(self.horizontal()),
            outer.height.saturating_sub(self.vertical()),
        )
    }
}

impl Default for Edges {
    fn default() -> Self {
        Self::all(0)
    }
}
