//! Circle glyph icons

use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{Circle, PrimitiveStyle, Rectangle},
};
use grid_system::render::Renderable;

use crate::at;

/// Icon types
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IconType {
    /// Filled circle with a plus sign (add-new card).
    AddCircle,
    /// Filled circle with a minus bar (remove badge).
    RemoveCircle,
}

/// Simple icon component
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Icon {
    icon_type: IconType,
    size: u32,
    color: Rgb888,
    glyph: Rgb888,
}

impl Icon {
    /// Create a new icon
    #[must_use]
    pub fn new(icon_type: IconType, size: u32) -> Self {
        Self {
            icon_type,
            size,
            color: Rgb888::BLACK,
            glyph: Rgb888::WHITE,
        }
    }

    /// Set circle color
    #[must_use]
    pub fn color(mut self, color: Rgb888) -> Self {
        self.color = color;
        self
    }

    /// Set the color of the plus / minus glyph
    #[must_use]
    pub fn glyph(mut self, glyph: Rgb888) -> Self {
        self.glyph = glyph;
        self
    }

    /// Get icon dimensions
    #[must_use]
    pub fn dimensions(&self) -> Size {
        Size::new(self.size, self.size)
    }

    /// Bounding box when drawn at `position`.
    #[must_use]
    pub fn bounds(&self, position: Point) -> Rectangle {
        Rectangle::new(position, self.dimensions())
    }

    /// Stroke thickness of the glyph bars, at least 2px.
    fn bar_thickness(&self) -> u32 {
        (self.size / 8).max(2)
    }

    /// Length of the glyph bars: half the diameter.
    fn bar_length(&self) -> u32 {
        self.size / 2
    }

    fn horizontal_bar(&self, position: Point) -> Rectangle {
        let len = self.bar_length();
        let thick = self.bar_thickness();
        let inset_x = self.size.saturating_sub(len) / 2;
        let inset_y = self.size.saturating_sub(thick) / 2;
        Rectangle::new(
            at(position, inset_x, inset_y),
            Size::new(len, thick),
        )
    }

    fn vertical_bar(&self, position: Point) -> Rectangle {
        let len = self.bar_length();
        let thick = self.bar_thickness();
        let inset_x = self.size.saturating_sub(thick) / 2;
        let inset_y = self.size.saturating_sub(len) / 2;
        Rectangle::new(
            at(position, inset_x, inset_y),
            Size::new(thick, len),
        )
    }
}

impl Renderable<Rgb888> for Icon {
    fn render<D>(&self, display: &mut D, position: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        Circle::new(position, self.size)
            .into_styled(PrimitiveStyle::with_fill(self.color))
            .draw(display)?;

        let glyph = PrimitiveStyle::with_fill(self.glyph);
        self.horizontal_bar(position)
            .into_styled(glyph)
            .draw(display)?;

        if self.icon_type == IconType::AddCircle {
            self.vertical_bar(position).into_styled(glyph).draw(display)?;
        }

        Ok(())
    }
}
