//! Widget card component
//!
//! A card is built from one [`CardPresentation`] and a column width. Its
//! outer box is the column width by the kind's height plus vertical padding;
//! the rounded body sits inside the padding.
//!
//! Body contents, relative to the body's top-left corner:
//!
//! - title label: 21 from the start, 24 from the top
//! - caption label: horizontally centered, 17 from the bottom
//! - remove badge: 5 from the end, 5 from the top
//!
//! The add-new placeholder draws a white body with a thin black border and a
//! centered plus icon instead of labels, and never shows the remove badge.

use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{CornerRadii, PrimitiveStyle, Rectangle, RoundedRectangle},
};
use grid_system::prelude::*;
use ui::{CardMode, CardPresentation, WidgetColor, WidgetKind};

use crate::icon::{Icon, IconType};
use crate::label::{Label, LabelBuilder};
use crate::{at, px};

/// Title inset from the body's start edge.
pub const TITLE_START: u32 = 21;
/// Title inset from the body's top edge.
pub const TITLE_TOP: u32 = 24;
/// Caption inset from the body's bottom edge.
pub const CAPTION_BOTTOM: u32 = 17;
/// Remove badge inset from the body's top and end edges.
pub const BADGE_INSET: u32 = 5;

/// Card style
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CardStyle {
    /// Body corner radius.
    pub corner_radius: u32,
    /// Space between the outer box and the body.
    pub padding: Edges,
    /// Elevation shade drawn under resolved bodies.
    pub shadow: Rgb888,
    /// Downward shift of the elevation shade.
    pub shadow_offset: u32,
    /// Body fill while loading.
    pub shimmer: Rgb888,
    /// Highlight band across the shimmer fill.
    pub shimmer_highlight: Rgb888,
    /// Label color.
    pub text: Rgb888,
    /// Add-new card border.
    pub border: Rgb888,
    /// Remove badge circle.
    pub badge: Rgb888,
    /// Remove badge diameter.
    pub badge_size: u32,
    /// Add-new plus icon circle.
    pub add_icon: Rgb888,
    /// Add-new plus icon diameter.
    pub add_icon_size: u32,
}

impl CardStyle {
    /// The dashboard's card style
    #[must_use]
    pub fn standard() -> Self {
        Self {
            corner_radius: 20,
            padding: Edges::all(10),
            shadow: Rgb888::new(0xD6, 0xD6, 0xD6),
            shadow_offset: 3,
            shimmer: Rgb888::new(0xCC, 0xCC, 0xCC),
            shimmer_highlight: Rgb888::new(0xE8, 0xE8, 0xE8),
            text: Rgb888::BLACK,
            border: Rgb888::BLACK,
            badge: Rgb888::BLACK,
            badge_size: 24,
            add_icon: widget_rgb(WidgetColor::BatteryGreen),
            add_icon_size: 48,
        }
    }
}

impl Default for CardStyle {
    fn default() -> Self {
        Self::standard()
    }
}

/// Convert a palette entry to a pixel color.
#[must_use]
pub fn widget_rgb(color: WidgetColor) -> Rgb888 {
    let (r, g, b) = color.rgb();
    Rgb888::new(r, g, b)
}

/// One dashboard card
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WidgetCard {
    presentation: CardPresentation,
    width: u32,
    style: CardStyle,
}

impl WidgetCard {
    /// Create a card `width` wide (usually the column width).
    #[must_use]
    pub fn new(presentation: CardPresentation, width: u32) -> Self {
        Self {
            presentation,
            width,
            style: CardStyle::standard(),
        }
    }

    /// Set card style
    #[must_use]
    pub fn style(mut self, style: CardStyle) -> Self {
        self.style = style;
        self
    }

    /// What this card shows.
    #[must_use]
    pub fn presentation(&self) -> &CardPresentation {
        &self.presentation
    }

    /// Outer size, padding included.
    #[must_use]
    pub fn outer_size(&self) -> Size {
        Size::new(
            self.width,
            self.presentation
                .height()
                .saturating_add(self.style.padding.vertical()),
        )
    }

    /// The rounded body's box when the card's outer box starts at `offset`.
    #[must_use]
    pub fn body(&self, offset: Point) -> Rectangle {
        let padding = self.style.padding;
        Rectangle::new(
            at(offset, padding.left, padding.top),
            padding.inner(self.outer_size()),
        )
    }

    /// Where the remove badge is drawn, if it is drawn at all.
    ///
    /// This is also the tap target for removing the card.
    #[must_use]
    pub fn remove_badge_bounds(&self, offset: Point) -> Option<Rectangle> {
        if !self.presentation.show_remove || self.presentation.kind.is_placeholder() {
            return None;
        }
        let body = self.body(offset);
        let size = self.style.badge_size;
        let x = body
            .size
            .width
            .saturating_sub(BADGE_INSET)
            .saturating_sub(size);
        Some(Rectangle::new(
            at(body.top_left, x, BADGE_INSET),
            Size::new(size, size),
        ))
    }

    /// Plus icon box on the add-new card, centered in the body.
    #[must_use]
    pub fn add_icon_bounds(&self, offset: Point) -> Rectangle {
        let body = self.body(offset);
        let size = self.style.add_icon_size;
        let dx = body.size.width.saturating_sub(size) / 2;
        let dy = body.size.height.saturating_sub(size) / 2;
        Rectangle::new(at(body.top_left, dx, dy), Size::new(size, size))
    }

    /// Light band across the middle third of the body, kept clear of the
    /// rounded corners.
    #[must_use]
    pub fn shimmer_band(&self, body: Rectangle) -> Rectangle {
        let third = body.size.height / 3;
        let band = Rectangle::new(
            at(body.top_left, 0, third),
            Size::new(body.size.width, third),
        );
        let radius = self.style.corner_radius;
        let straight = Rectangle::new(
            at(body.top_left, 0, radius),
            Size::new(
                body.size.width,
                body.size.height.saturating_sub(radius.saturating_mul(2)),
            ),
        );
        band.intersection(&straight)
    }

    fn rounded(&self, rect: Rectangle) -> RoundedRectangle {
        let r = self.style.corner_radius;
        RoundedRectangle::new(rect, CornerRadii::new(Size::new(r, r)))
    }

    fn title(&self) -> Label {
        LabelBuilder::title(self.presentation.kind.title()).color(self.style.text)
    }

    fn caption(&self) -> Label {
        LabelBuilder::caption(self.presentation.kind.caption()).color(self.style.text)
    }

    fn caption_position(&self, body: Rectangle, caption: &Label) -> Point {
        let dims = caption.dimensions();
        let dx = body.size.width.saturating_sub(dims.width) / 2;
        let dy = body
            .size
            .height
            .saturating_sub(CAPTION_BOTTOM)
            .saturating_sub(dims.height);
        at(body.top_left, dx, dy)
    }

    fn fill(&self) -> Rgb888 {
        match self.presentation.mode {
            CardMode::Shimmer => self.style.shimmer,
            CardMode::Resolved => widget_rgb(self.presentation.color),
        }
    }

    fn render_body<D>(&self, display: &mut D, body: Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        if self.presentation.mode == CardMode::Resolved {
            let shade = Rectangle::new(
                Point::new(
                    body.top_left.x,
                    body.top_left.y.saturating_add(px(self.style.shadow_offset)),
                ),
                body.size,
            );
            self.rounded(shade)
                .into_styled(PrimitiveStyle::with_fill(self.style.shadow))
                .draw(display)?;
        }

        self.rounded(body)
            .into_styled(PrimitiveStyle::with_fill(self.fill()))
            .draw(display)?;

        if self.presentation.mode == CardMode::Shimmer {
            render_background(
                self.shimmer_band(body),
                self.style.shimmer_highlight,
                display,
            )?;
        }
        Ok(())
    }

    fn render_add_new<D>(&self, display: &mut D, offset: Point, body: Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        if self.presentation.mode == CardMode::Shimmer {
            // Flat placeholder, no elevation.
            self.rounded(body)
                .into_styled(PrimitiveStyle::with_fill(self.style.shimmer))
                .draw(display)?;
            return render_background(
                self.shimmer_band(body),
                self.style.shimmer_highlight,
                display,
            );
        }

        self.render_body(display, body)?;
        self.rounded(body)
            .into_styled(PrimitiveStyle::with_stroke(self.style.border, 1))
            .draw(display)?;

        let icon = self.add_icon_bounds(offset);
        Icon::new(IconType::AddCircle, icon.size.width)
            .color(self.style.add_icon)
            .render(display, icon.top_left)
    }
}

impl Layout for WidgetCard {
    fn layout(&self, constraints: Constraints) -> LayoutResult {
        LayoutResult::leaf(constraints.constrain(self.outer_size()))
    }
}

impl Renderable<Rgb888> for WidgetCard {
    fn render<D>(&self, display: &mut D, offset: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let body = self.body(offset);

        if self.presentation.kind == WidgetKind::AddNew {
            return self.render_add_new(display, offset, body);
        }

        self.render_body(display, body)?;

        self.title()
            .render(display, at(body.top_left, TITLE_START, TITLE_TOP))?;
        let caption = self.caption();
        caption.render(display, self.caption_position(body, &caption))?;

        if let Some(badge) = self.remove_badge_bounds(offset) {
            Icon::new(IconType::RemoveCircle, badge.size.width)
                .color(self.style.badge)
                .render(display, badge.top_left)?;
        }

        Ok(())
    }
}
