//! Staggered (masonry-style) grid layout.
//!
//! Children are assigned to columns round-robin by input order: child `i`
//! lands in column `i % columns`, whatever its height. Within a column,
//! children stack top-to-bottom with no gap. Columns sit side by side, each
//! as wide as its widest child.
//!
//! ```text
//!  col 0      col 1
//! +------+   +------+
//! |  0   |   |  1   |
//! |      |   +------+
//! +------+   |  3   |
//! |  2   |   |      |
//! |      |   +------+
//! +------+
//! ```
//!
//! # Example
//!
//! ```
//! use grid_system::staggered::{staggered_layout, ColumnCount};
//! use grid_system::layout::Constraints;
//! use embedded_graphics::prelude::{Point, Size};
//!
//! let heights = [190, 220, 240, 220];
//! let children = heights.map(|h| Size::new(100, h));
//!
//! let result = staggered_layout(
//!     &children,
//!     ColumnCount::new(2)?,
//!     Constraints::scrollable(200),
//! )?;
//!
//! assert_eq!(result.children[2].offset, Point::new(0, 190));
//! assert_eq!(result.children[3].offset, Point::new(100, 220));
//! assert_eq!(result.size, Size::new(200, 440));
//! # Ok::<(), grid_system::staggered::LayoutError>(())
//! ```

use core::num::NonZeroUsize;

use alloc::boxed::Box;
use embedded_graphics::prelude::{Point, Size};
use heapless::Vec;

use crate::layout::{ChildLayout, Constraints, Layout, LayoutResult, MAX_CHILDREN};

/// Errors produced by the staggered grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// A grid with zero columns has no valid placement.
    #[error("staggered grid needs at least one column")]
    ZeroColumns,
    /// More children than the fixed-capacity layout result can hold.
    #[error("{count} children exceed the grid capacity of {capacity}")]
    TooManyChildren {
        /// Number of children supplied.
        count: usize,
        /// Maximum number of children ([`MAX_CHILDREN`]).
        capacity: usize,
    },
}

/// Validated, strictly positive column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnCount(NonZeroUsize);

impl ColumnCount {
    /// A single column (plain vertical list).
    pub const ONE: Self = Self(NonZeroUsize::MIN);

    /// Two columns, the dashboard default.
    pub const TWO: Self = Self(NonZeroUsize::MIN.saturating_add(1));

    /// Validate a column count.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::ZeroColumns`] when `columns == 0`.
    pub fn new(columns: usize) -> Result<Self, LayoutError> {
        NonZeroUsize::new(columns)
            .map(Self)
            .ok_or(LayoutError::ZeroColumns)
    }

    /// The column count as a plain integer (always `>= 1`).
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Column assigned to the child at `index`.
    ///
    /// ```
    /// use grid_system::staggered::ColumnCount;
    ///
    /// let columns = ColumnCount::TWO;
    /// assert_eq!(columns.column_of(0), 0);
    /// assert_eq!(columns.column_of(3), 1);
    /// ```
    pub fn column_of(self, index: usize) -> usize {
        index % self.0
    }
}

impl TryFrom<usize> for ColumnCount {
    type Error = LayoutError;

    fn try_from(columns: usize) -> Result<Self, Self::Error> {
        Self::new(columns)
    }
}

impl Default for ColumnCount {
    fn default() -> Self {
        Self::TWO
    }
}

/// Saturating conversion of a pixel extent into a coordinate.
fn coord(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Place already-measured children into a round-robin staggered grid.
///
/// Returns one [`ChildLayout`] per child in input order and the container
/// size: the tallest column clamped into the height constraints, and the sum
/// of column widths clamped into the width constraints.
///
/// # Errors
///
/// Returns [`LayoutError::TooManyChildren`] when `children` holds more than
/// [`MAX_CHILDREN`] entries.
pub fn staggered_layout(
    children: &[Size],
    columns: ColumnCount,
    constraints: Constraints,
) -> Result<LayoutResult, LayoutError> {
    let too_many = LayoutError::TooManyChildren {
        count: children.len(),
        capacity: MAX_CHILDREN,
    };
    if children.len() > MAX_CHILDREN {
        return Err(too_many);
    }

    // Columns beyond the child count stay empty and zero-wide, so only the
    // first `used` columns need storage.
    let used = columns.get().min(children.len());
    let mut widths = [0u32; MAX_CHILDREN];
    let mut heights = [0u32; MAX_CHILDREN];

    for (index, size) in children.iter().enumerate() {
        let col = columns.column_of(index);
        if let Some(width) = widths.get_mut(col) {
            *width = (*width).max(size.width);
        }
        if let Some(height) = heights.get_mut(col) {
            *height = height.saturating_add(size.height);
        }
    }

    let height = heights
        .iter()
        .take(used)
        .copied()
        .max()
        .map_or(constraints.min.height, |tallest| {
            constraints.constrain_height(tallest)
        });

    let total_width = widths
        .iter()
        .take(used)
        .fold(0u32, |acc, w| acc.saturating_add(*w));
    let width = constraints.constrain_width(total_width);

    let mut column_x = [0u32; MAX_CHILDREN];
    let mut running = 0u32;
    for (x, w) in column_x.iter_mut().zip(widths.iter()).take(used) {
        *x = running;
        running = running.saturating_add(*w);
    }

    let mut column_y = [0u32; MAX_CHILDREN];
    let mut placed: Vec<ChildLayout, MAX_CHILDREN> = Vec::new();

    for (index, size) in children.iter().enumerate() {
        let col = columns.column_of(index);
        let x = column_x.get(col).copied().unwrap_or(0);
        let y = column_y.get_mut(col).map_or(0, |y| {
            let top = *y;
            *y = y.saturating_add(size.height);
            top
        });

        placed
            .push(ChildLayout::new(Point::new(coord(x), coord(y)), *size))
            .map_err(|_| too_many)?;
    }

    Ok(LayoutResult::new(Size::new(width, height), placed))
}

/// Staggered grid container.
///
/// Owns up to `N` children, measures each one with the incoming constraints
/// and places them with [`staggered_layout`].
///
/// # Type Parameters
///
/// - `N`: Maximum number of children, at most [`MAX_CHILDREN`]
///
/// # Example
///
/// ```
/// use grid_system::prelude::*;
/// use embedded_graphics::prelude::Size;
///
/// struct Tile(u32);
///
/// impl Layout for Tile {
///     fn layout(&self, constraints: Constraints) -> LayoutResult {
///         LayoutResult::leaf(constraints.constrain(Size::new(100, self.0)))
///     }
/// }
///
/// let mut grid = StaggeredGrid::<4>::new(ColumnCount::TWO);
/// for h in [190, 220, 240] {
///     assert!(grid.add_child(Box::new(Tile(h))).is_ok());
/// }
///
/// let result = grid.layout(Constraints::scrollable(200));
/// assert_eq!(result.size, Size::new(200, 430));
/// ```
pub struct StaggeredGrid<const N: usize> {
    children: Vec<Box<dyn Layout>, N>,
    columns: ColumnCount,
}

impl<const N: usize> StaggeredGrid<N> {
    const CAPACITY_FITS: () = assert!(
        N <= MAX_CHILDREN,
        "StaggeredGrid capacity exceeds MAX_CHILDREN"
    );

    /// Create an empty grid with the given column count.
    pub fn new(columns: ColumnCount) -> Self {
        let () = Self::CAPACITY_FITS;
        Self {
            children: Vec::new(),
            columns,
        }
    }

    /// Column count of this grid.
    pub fn columns(&self) -> ColumnCount {
        self.columns
    }

    /// Add a single child.
    ///
    /// # Errors
    ///
    /// Returns the child if the grid is full.
    pub fn add_child(&mut self, child: Box<dyn Layout>) -> Result<(), Box<dyn Layout>> {
        self.children.push(child)
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the grid has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<const N: usize> Layout for StaggeredGrid<N> {
    fn layout(&self, constraints: Constraints) -> LayoutResult {
        let mut measured: Vec<Size, N> = Vec::new();
        for child in &self.children {
            // Same capacity as `children`, so this never overflows.
            let _ = measured.push(child.layout(constraints).size);
        }

        // N <= MAX_CHILDREN is checked at compile time, so placement cannot
        // run out of capacity.
        staggered_layout(&measured, self.columns, constraints)
            .unwrap_or_else(|_| LayoutResult::leaf(constraints.min))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn sizes(heights: &[u32], width: u32) -> std::vec::Vec<Size> {
        heights.iter().map(|&h| Size::new(width, h)).collect()
    }

    #[test]
    fn test_zero_columns_rejected() {
        assert_eq!(ColumnCount::new(0), Err(LayoutError::ZeroColumns));
        assert_eq!(ColumnCount::try_from(0), Err(LayoutError::ZeroColumns));
    }

    #[test]
    fn test_column_count_constants() {
        assert_eq!(ColumnCount::ONE.get(), 1);
        assert_eq!(ColumnCount::TWO.get(), 2);
        assert_eq!(ColumnCount::default(), ColumnCount::TWO);
    }

    #[test]
    fn test_two_column_scenario() {
        let children = sizes(&[190, 220, 240, 220], 100);
        let result =
            staggered_layout(&children, ColumnCount::TWO, Constraints::scrollable(1000)).unwrap();

        assert_eq!(result.child_count(), 4);
        assert_eq!(result.children[0].offset, Point::new(0, 0));
        assert_eq!(result.children[2].offset, Point::new(0, 190));
        assert_eq!(result.children[1].offset, Point::new(100, 0));
        assert_eq!(result.children[3].offset, Point::new(100, 220));
        assert_eq!(result.size, Size::new(200, 440));
    }

    #[test]
    fn test_round_robin_ignores_heights() {
        // A shortest-column heuristic would put child 2 under child 1.
        let children = sizes(&[500, 10, 10], 50);
        let result =
            staggered_layout(&children, ColumnCount::TWO, Constraints::scrollable(1000)).unwrap();

        assert_eq!(result.children[2].offset, Point::new(0, 500));
    }

    #[test]
    fn test_single_column_stacks_everything() {
        let children = sizes(&[10, 20, 30], 40);
        let result =
            staggered_layout(&children, ColumnCount::ONE, Constraints::scrollable(1000)).unwrap();

        let ys: std::vec::Vec<i32> = result.children.iter().map(|c| c.offset.y).collect();
        assert_eq!(ys, [0, 10, 30]);
        assert_eq!(result.size, Size::new(40, 60));
    }

    #[test]
    fn test_column_width_is_widest_child() {
        let children = [
            Size::new(80, 10),
            Size::new(50, 10),
            Size::new(120, 10),
            Size::new(60, 10),
        ];
        let result =
            staggered_layout(&children, ColumnCount::TWO, Constraints::scrollable(1000)).unwrap();

        // Column 0 is 120 wide, so column 1 starts at 120.
        assert_eq!(result.children[1].offset.x, 120);
        assert_eq!(result.children[3].offset.x, 120);
        assert_eq!(result.size.width, 180);
    }

    #[test]
    fn test_more_columns_than_children() {
        let children = sizes(&[30, 40], 25);
        let columns = ColumnCount::new(5).unwrap();
        let result = staggered_layout(&children, columns, Constraints::scrollable(1000)).unwrap();

        assert_eq!(result.children[1].offset, Point::new(25, 0));
        assert_eq!(result.size, Size::new(50, 40));
    }

    #[test]
    fn test_container_size_clamped() {
        let children = sizes(&[190, 220, 240, 220], 100);
        let tight = Constraints::new(Size::new(250, 0), Size::new(300, 400));
        let result = staggered_layout(&children, ColumnCount::TWO, tight).unwrap();

        assert_eq!(result.size, Size::new(250, 400));
        // Placement is not affected by clamping.
        assert_eq!(result.children[3].offset, Point::new(100, 220));
    }

    #[test]
    fn test_empty_falls_back_to_min_size() {
        let c = Constraints::new(Size::new(10, 20), Size::new(100, 200));
        let result = staggered_layout(&[], ColumnCount::TWO, c).unwrap();

        assert!(result.is_leaf());
        assert_eq!(result.size, Size::new(10, 20));
    }

    #[test]
    fn test_too_many_children() {
        let children = std::vec![Size::new(1, 1); MAX_CHILDREN + 1];
        let err = staggered_layout(&children, ColumnCount::TWO, Constraints::scrollable(10))
            .unwrap_err();

        assert_eq!(
            err,
            LayoutError::TooManyChildren {
                count: MAX_CHILDREN + 1,
                capacity: MAX_CHILDREN,
            }
        );
    }

    #[test]
    fn test_grid_measures_children_with_incoming_constraints() {
        struct Greedy;

        impl Layout for Greedy {
            fn layout(&self, constraints: Constraints) -> LayoutResult {
                LayoutResult::leaf(constraints.constrain(Size::new(u32::MAX, 50)))
            }
        }

        let mut grid = StaggeredGrid::<3>::new(ColumnCount::TWO);
        for _ in 0..3 {
            assert!(grid.add_child(Box::new(Greedy)).is_ok());
        }
        assert!(grid.add_child(Box::new(Greedy)).is_err());
        assert_eq!(grid.len(), 3);

        let result = grid.layout(Constraints::scrollable(80));
        assert_eq!(result.children[1].offset, Point::new(80, 0));
        assert_eq!(result.children[2].offset, Point::new(0, 50));
        // Two 80-wide columns are clamped back to the 80px maximum.
        assert_eq!(result.size, Size::new(80, 100));
    }

    #[test]
    fn test_empty_grid_layout() {
        let grid = StaggeredGrid::<4>::new(ColumnCount::TWO);
        assert!(grid.is_empty());

        let result = grid.layout(Constraints::tight(Size::new(30, 40)));
        assert_eq!(result.size, Size::new(30, 40));
    }
}
