//! Rendering of computed layouts onto embedded-graphics targets.
//!
//! - [`Renderable`]: anything that can draw itself at an offset
//! - [`render_placed`]: draw a set of children at their layout offsets,
//!   skipping the ones that fall outside the clip rectangle
//! - Helpers: background fill, visibility test
//!
//! # Example
//!
//! ```
//! use grid_system::render::*;
//! use embedded_graphics::mock_display::MockDisplay;
//! use embedded_graphics::pixelcolor::Rgb888;
//! use embedded_graphics::prelude::*;
//! use embedded_graphics::primitives::Rectangle;
//!
//! let mut display: MockDisplay<Rgb888> = MockDisplay::new();
//! let rect = Rectangle::new(Point::new(2, 2), Size::new(4, 4));
//! render_background(rect, Rgb888::WHITE, &mut display)?;
//! assert_eq!(display.affected_area(), rect);
//! # Ok::<(), core::convert::Infallible>(())
//! ```

use embedded_graphics::{
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};

use crate::layout::LayoutResult;

/// Trait for types that can be rendered to a display.
pub trait Renderable<C: PixelColor> {
    /// Render this element with its top-left corner at `offset`.
    fn render<D: DrawTarget<Color = C>>(&self, display: &mut D, offset: Point)
        -> Result<(), D::Error>;
}

/// Fill a rectangle with a solid color.
pub fn render_background<C, D>(rect: Rectangle, color: C, display: &mut D) -> Result<(), D::Error>
where
    C: PixelColor,
    D: DrawTarget<Color = C>,
{
    rect.into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
}

/// Draw `items` at the offsets of `layout.children`, translated by `origin`.
///
/// Items and child layouts are paired by index; extra entries on either side
/// are ignored. Items whose translated bounds miss `clip` are not drawn.
/// Returns the number of items drawn.
pub fn render_placed<'a, C, D, R>(
    layout: &LayoutResult,
    items: impl IntoIterator<Item = &'a R>,
    origin: Point,
    clip: Rectangle,
    display: &mut D,
) -> Result<usize, D::Error>
where
    C: PixelColor,
    D: DrawTarget<Color = C>,
    R: Renderable<C> + 'a,
{
    let mut drawn = 0usize;
    for (child, item) in layout.children.iter().zip(items) {
        let top_left = translate(child.offset, origin);
        if !is_visible(Rectangle::new(top_left, child.size), clip) {
            continue;
        }
        item.render(display, top_left)?;
        drawn = drawn.saturating_add(1);
    }
    Ok(drawn)
}

fn translate(point: Point, by: Point) -> Point {
    Point::new(point.x.saturating_add(by.x), point.y.saturating_add(by.y))
}

/// Check whether `rect` intersects `clip_bounds`.
///
/// ```
/// use grid_system::render::is_visible;
/// use embedded_graphics::prelude::*;
/// use embedded_graphics::primitives::Rectangle;
///
/// let clip = Rectangle::new(Point::zero(), Size::new(100, 100));
/// assert!(is_visible(Rectangle::new(Point::new(10, 10), Size::new(50, 50)), clip));
/// assert!(!is_visible(Rectangle::new(Point::new(200, 200), Size::new(50, 50)), clip));
/// ```
pub fn is_visible(rect: Rectangle, clip_bounds: Rectangle) -> bool {
    let extent = |r: Rectangle| {
        let right = r
            .top_left
            .x
            .saturating_add(i32::try_from(r.size.width).unwrap_or(i32::MAX));
        let bottom = r
            .top_left
            .y
            .saturating_add(i32::try_from(r.size.height).unwrap_or(i32::MAX));
        (right, bottom)
    };
    let (rect_right, rect_bottom) = extent(rect);
    let (clip_right, clip_bottom) = extent(clip_bounds);

    !(rect.top_left.x >= clip_right
        || rect_right <= clip_bounds.top_left.x
        || rect.top_left.y >= clip_bottom
        || rect_bottom <= clip_bounds.top_left.y)
}
