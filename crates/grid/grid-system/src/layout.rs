//! Core layout types for card grids.
//!
//! The layout system is a two-pass constraint-based approach, in the
//! spirit of Flutter's box constraints:
//!
//! 1. **Constraint Pass (Down)**: Parent passes constraints to children
//! 2. **Size Pass (Up)**: Children return their size; the parent places them
//!
//! ## Example
//!
//! ```rust
//! use grid_system::layout::{Constraints, Layout, LayoutResult};
//! use embedded_graphics::prelude::Size;
//!
//! struct Tile;
//!
//! impl Layout for Tile {
//!     fn layout(&self, constraints: Constraints) -> LayoutResult {
//!         LayoutResult::leaf(constraints.constrain(Size::new(180, 210)))
//!     }
//! }
//!
//! let result = Tile.layout(Constraints::loose(Size::new(360, 640)));
//! assert_eq!(result.size, Size::new(180, 210));
//! ```
//!
//! # Constraints
//!
//! - **Tight**: Exact size (min == max)
//! - **Loose**: Range from zero to max
//! - **Scrollable**: Bounded width, unbounded height (vertical scroll viewport)

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;

/// Maximum number of children in a layout result.
///
/// Compile-time constant for `no_std` compatibility. A dashboard screen
/// holds a few dozen cards at most.
pub const MAX_CHILDREN: usize = 64;

/// Constraints define the valid range of sizes for layout.
///
/// # Invariants
///
/// - `min.width <= max.width`
/// - `min.height <= max.height`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraints {
    /// Minimum allowed size (inclusive).
    pub min: Size,
    /// Maximum allowed size (inclusive).
    pub max: Size,
}

impl Constraints {
    /// Create new constraints with explicit min and max bounds.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if min > max on either axis.
    pub fn new(min: Size, max: Size) -> Self {
        debug_assert!(
            min.width <= max.width,
            "min.width ({}) must be <= max.width ({})",
            min.width,
            max.width
        );
        debug_assert!(
            min.height <= max.height,
            "min.height ({}) must be <= max.height ({})",
            min.height,
            max.height
        );

        Self { min, max }
    }

    /// Create tight constraints (exact size).
    pub fn tight(size: Size) -> Self {
        Self {
            min: size,
            max: size,
        }
    }

    /// Create loose constraints (zero to max).
    ///
    /// ```rust
    /// use grid_system::layout::Constraints;
    /// use embedded_graphics::prelude::Size;
    ///
    /// let constraints = Constraints::loose(Size::new(200, 100));
    /// assert_eq!(constraints.min, Size::zero());
    /// assert_eq!(constraints.max, Size::new(200, 100));
    /// ```
    pub fn loose(max: Size) -> Self {
        Self {
            min: Size::zero(),
            max,
        }
    }

    /// Constraints of a vertically scrolling viewport: width up to
    /// `max_width`, any height.
    ///
    /// ```rust
    /// use grid_system::layout::Constraints;
    /// use embedded_graphics::prelude::Size;
    ///
    /// let constraints = Constraints::scrollable(720);
    /// assert_eq!(constraints.max, Size::new(720, u32::MAX));
    /// ```
    pub fn scrollable(max_width: u32) -> Self {
        Self::loose(Size::new(max_width, u32::MAX))
    }

    /// Clamp a size into the valid range defined by min and max.
    ///
    /// ```rust
    /// use grid_system::layout::Constraints;
    /// use embedded_graphics::prelude::Size;
    ///
    /// let constraints = Constraints::new(Size::new(50, 25), Size::new(200, 100));
    ///
    /// assert_eq!(constraints.constrain(Size::new(10, 10)), Size::new(50, 25));
    /// assert_eq!(constraints.constrain(Size::new(300, 300)), Size::new(200, 100));
    /// assert_eq!(constraints.constrain(Size::new(100, 50)), Size::new(100, 50));
    /// ```
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(self.constrain_width(size.width), self.constrain_height(size.height))
    }

    /// Clamp a width into `[min.width, max.width]`.
    pub fn constrain_width(&self, width: u32) -> u32 {
        width.clamp(self.min.width, self.max.width)
    }

    /// Clamp a height into `[min.height, max.height]`.
    pub fn constrain_height(&self, height: u32) -> u32 {
        height.clamp(self.min.height, self.max.height)
    }

    /// Check if these constraints are tight (min == max).
    pub fn is_tight(&self) -> bool {
        self.min == self.max
    }

    /// Shrink both bounds by the given amount, saturating at zero.
    ///
    /// Used for padding: a padded card measures its content with the
    /// deflated constraints.
    pub fn deflate(&self, amount: Size) -> Self {
        Self {
            min: Size::new(
                self.min.width.saturating_sub(amount.width),
                self.min.height.saturating_sub(amount.height),
            ),
            max: Size::new(
                self.max.width.saturating_sub(amount.width),
                self.max.height.saturating_sub(amount.height),
            ),
        }
    }

    /// Grow both bounds by the given amount, saturating at `u32::MAX`.
    pub fn inflate(&self, amount: Size) -> Self {
        Self {
            min: Size::new(
                self.min.width.saturating_add(amount.width),
                self.min.height.saturating_add(amount.height),
            ),
            max: Size::new(
                self.max.width.saturating_add(amount.width),
                self.max.height.saturating_add(amount.height),
            ),
        }
    }
}

/// Layout information for a single child component.
///
/// Contains the child's position relative to its parent and its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildLayout {
    /// Position offset from parent's top-left corner.
    pub offset: Point,
    /// Size of the child.
    pub size: Size,
}

impl ChildLayout {
    /// Create a new child layout.
    pub fn new(offset: Point, size: Size) -> Self {
        Self { offset, size }
    }

    /// Bounding rectangle of this child, relative to the parent.
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(self.offset, self.size)
    }
}

/// Result of a layout operation.
///
/// Contains the component's size and the positions of its children,
/// in the order the children were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutResult {
    /// Total size of this component.
    pub size: Size,
    /// Layout information for each child.
    ///
    /// Limited to [`MAX_CHILDREN`] children.
    pub children: Vec<ChildLayout, MAX_CHILDREN>,
}

impl LayoutResult {
    /// Create a new layout result.
    pub fn new(size: Size, children: Vec<ChildLayout, MAX_CHILDREN>) -> Self {
        Self { size, children }
    }

    /// Create a leaf layout result (no children).
    ///
    /// ```rust
    /// use grid_system::layout::LayoutResult;
    /// use embedded_graphics::prelude::Size;
    ///
    /// let result = LayoutResult::leaf(Size::new(100, 50));
    /// assert!(result.is_leaf());
    /// ```
    pub fn leaf(size: Size) -> Self {
        Self {
            size,
            children: Vec::new(),
        }
    }

    /// Add a child to this layout result.
    ///
    /// # Errors
    ///
    /// Returns `Err(child)` once [`MAX_CHILDREN`] children are present.
    pub fn add_child(&mut self, child: ChildLayout) -> Result<(), ChildLayout> {
        self.children.push(child)
    }

    /// Number of children in this layout.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Check if this layout has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Trait for components that can participate in layout.
///
/// # Contract
///
/// - The returned size MUST satisfy the given constraints
/// - Child positions are relative to the component's top-left corner (0, 0)
pub trait Layout {
    /// Compute the layout for this component given constraints.
    fn layout(&self, constraints: Constraints) -> LayoutResult;
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_constraints_new() {
        let c = Constraints::new(Size::new(10, 20), Size::new(100, 200));
        assert_eq!(c.min, Size::new(10, 20));
        assert_eq!(c.max, Size::new(100, 200));
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_constraints_invalid_width() {
        Constraints::new(Size::new(100, 20), Size::new(10, 200));
    }

    #[test]
    fn test_constraints_tight() {
        let c = Constraints::tight(Size::new(100, 50));
        assert_eq!(c.min, c.max);
        assert!(c.is_tight());
    }

    #[test]
    fn test_constraints_scrollable_is_unbounded_vertically() {
        let c = Constraints::scrollable(720);
        assert_eq!(c.min, Size::zero());
        assert_eq!(c.constrain(Size::new(360, 5_000)), Size::new(360, 5_000));
        assert_eq!(c.constrain(Size::new(900, 10)), Size::new(720, 10));
    }

    #[test]
    fn test_constraints_constrain_axes_independently() {
        let c = Constraints::new(Size::new(50, 25), Size::new(200, 100));

        assert_eq!(c.constrain(Size::new(10, 50)), Size::new(50, 50));
        assert_eq!(c.constrain_width(500), 200);
        assert_eq!(c.constrain_height(0), 25);
    }

    #[test]
    fn test_constraints_deflate_saturates() {
        let c = Constraints::tight(Size::new(10, 5));
        let deflated = c.deflate(Size::new(20, 20));
        assert_eq!(deflated.min, Size::zero());
        assert_eq!(deflated.max, Size::zero());
    }

    #[test]
    fn test_constraints_inflate_saturates() {
        let c = Constraints::scrollable(100).inflate(Size::new(20, 20));
        assert_eq!(c.max, Size::new(120, u32::MAX));
        assert_eq!(c.min, Size::new(20, 20));
    }

    #[test]
    fn test_child_layout_bounds() {
        let child = ChildLayout::new(Point::new(10, 20), Size::new(100, 50));
        let bounds = child.bounds();

        assert_eq!(bounds.top_left, Point::new(10, 20));
        assert_eq!(bounds.size, Size::new(100, 50));
    }

    #[test]
    fn test_layout_result_max_children() {
        let mut result = LayoutResult::leaf(Size::new(1000, 1000));

        for i in 0..MAX_CHILDREN {
            let y = i32::try_from(i).unwrap();
            result
                .add_child(ChildLayout::new(Point::new(0, y), Size::new(10, 10)))
                .unwrap();
        }
        assert_eq!(result.child_count(), MAX_CHILDREN);

        let overflow = result.add_child(ChildLayout::new(Point::zero(), Size::new(10, 10)));
        assert!(overflow.is_err());
    }

    #[test]
    fn test_layout_trait_leaf() {
        struct FixedBox(Size);

        impl Layout for FixedBox {
            fn layout(&self, constraints: Constraints) -> LayoutResult {
                LayoutResult::leaf(constraints.constrain(self.0))
            }
        }

        let tile = FixedBox(Size::new(100, 50));

        let result = tile.layout(Constraints::loose(Size::new(200, 100)));
        assert_eq!(result.size, Size::new(100, 50));

        let result = tile.layout(Constraints::new(Size::new(150, 75), Size::new(200, 100)));
        assert_eq!(result.size, Size::new(150, 75));
        assert!(result.is_leaf());
    }
}
