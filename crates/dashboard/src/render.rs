//! Frame composition: cards from presentations, placed by the staggered grid.

use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::Rectangle};
use grid_components::card::WidgetCard;
use grid_system::prelude::*;
use ui::CardPresentation;

/// One laid-out dashboard frame.
#[derive(Debug, Clone)]
pub struct Frame {
    layout: LayoutResult,
    cards: Vec<WidgetCard>,
    viewport: Size,
}

impl Frame {
    /// Build cards for `presentations` and place them in `columns` columns.
    ///
    /// Each column is `viewport.width / columns` wide. Cards are measured under
    /// constraints bounded by the viewport width with unbounded height, so the
    /// content can grow past the viewport and be scrolled.
    pub fn compose(
        presentations: impl IntoIterator<Item = CardPresentation>,
        columns: ColumnCount,
        viewport: Size,
    ) -> Result<Self, LayoutError> {
        let column_width = column_width(viewport.width, columns);
        let cards: Vec<WidgetCard> = presentations
            .into_iter()
            .map(|p| WidgetCard::new(p, column_width))
            .collect();

        let constraints = Constraints::scrollable(viewport.width);
        let sizes: Vec<Size> = cards.iter().map(|c| c.layout(constraints).size).collect();
        let layout = staggered_layout(&sizes, columns, constraints)?;

        tracing::trace!(
            cards = cards.len(),
            width = layout.size.width,
            height = layout.size.height,
            "frame composed"
        );
        Ok(Self {
            layout,
            cards,
            viewport,
        })
    }

    /// Placement of every card, in list order.
    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    /// Cards, in list order.
    pub fn cards(&self) -> &[WidgetCard] {
        &self.cards
    }

    /// Visible area this frame was composed for.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Total height of the grid content.
    pub fn content_height(&self) -> u32 {
        self.layout.size.height
    }

    /// Largest useful scroll offset.
    pub fn max_scroll(&self) -> u32 {
        self.content_height().saturating_sub(self.viewport.height)
    }

    /// Index of the card whose remove badge contains `point` (viewport
    /// coordinates), if any.
    pub fn remove_badge_at(&self, point: Point, scroll_y: u32) -> Option<usize> {
        let origin = scroll_origin(scroll_y.min(self.max_scroll()));
        self.layout
            .children
            .iter()
            .zip(&self.cards)
            .find_map(|(child, card)| {
                let top_left = Point::new(
                    child.offset.x.saturating_add(origin.x),
                    child.offset.y.saturating_add(origin.y),
                );
                card.remove_badge_bounds(top_left)
                    .filter(|badge| badge.contains(point))
                    .map(|_| card.presentation().index)
            })
    }

    /// Clear `display` to white and draw every visible card, scrolled up by
    /// `scroll_y` (clamped to [`max_scroll`](Self::max_scroll)).
    ///
    /// Returns the number of cards drawn.
    pub fn draw<D>(&self, display: &mut D, scroll_y: u32) -> Result<usize, D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let clip = Rectangle::new(Point::zero(), self.viewport);
        render_background(clip, Rgb888::WHITE, display)?;

        let scroll_y = scroll_y.min(self.max_scroll());
        render_placed(
            &self.layout,
            &self.cards,
            scroll_origin(scroll_y),
            clip,
            display,
        )
    }
}

/// Even split of the viewport width; any remainder is left unused.
pub fn column_width(viewport_width: u32, columns: ColumnCount) -> u32 {
    let columns = u32::try_from(columns.get()).unwrap_or(u32::MAX);
    viewport_width.checked_div(columns).unwrap_or(0)
}

fn scroll_origin(scroll_y: u32) -> Point {
    Point::new(0, 0i32.saturating_sub(i32::try_from(scroll_y).unwrap_or(i32::MAX)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::framebuffer::Framebuffer;
    use grid_components::card::widget_rgb;
    use ui::{CardMode, DashboardState, WidgetColor, WidgetKind};

    fn resolved_seed() -> Vec<CardPresentation> {
        let mut state: DashboardState<32> = DashboardState::seeded().unwrap();
        state.show();
        state.finish_loading();
        state.presentations().collect()
    }

    #[test]
    fn test_column_width_splits_viewport() {
        assert_eq!(column_width(720, ColumnCount::TWO), 360);
        assert_eq!(column_width(721, ColumnCount::TWO), 360);
        assert_eq!(column_width(720, ColumnCount::new(7).unwrap()), 102);
    }

    #[test]
    fn test_seeded_frame_layout() {
        let frame = Frame::compose(resolved_seed(), ColumnCount::TWO, Size::new(720, 1600)).unwrap();
        let offsets: Vec<Point> = frame.layout().children.iter().map(|c| c.offset).collect();

        // Outer heights are card height + 20 padding.
        // Even indices: 210 + 260 + 240 + 210 + 260 + 260 + 260 = 1700
        // Odd indices:  240 + 210 + 260 + 240 + 240 + 260 = 1450
        assert_eq!(offsets[0], Point::new(0, 0));
        assert_eq!(offsets[1], Point::new(360, 0));
        assert_eq!(offsets[2], Point::new(0, 210));
        assert_eq!(offsets[3], Point::new(360, 240));
        assert_eq!(offsets[4], Point::new(0, 470));
        assert_eq!(frame.layout().size, Size::new(720, 1700));
        assert_eq!(frame.max_scroll(), 100);
    }

    #[test]
    fn test_draw_renders_first_card_color() {
        let viewport = Size::new(720, 1600);
        let frame = Frame::compose(resolved_seed(), ColumnCount::TWO, viewport).unwrap();
        let mut fb = Framebuffer::with_size(viewport);

        let drawn = frame.draw(&mut fb, 0).unwrap();

        assert!(drawn > 0);
        // Inside the first card's body, above the title.
        assert_eq!(fb.get_pixel(180, 20), Some(widget_rgb(WidgetColor::BatteryGreen)));
        // Padding between the two columns stays white.
        assert_eq!(fb.get_pixel(360, 100), Some(Rgb888::WHITE));
    }

    #[test]
    fn test_scroll_culls_cards_above_viewport() {
        let viewport = Size::new(720, 300);
        let frame = Frame::compose(resolved_seed(), ColumnCount::TWO, viewport).unwrap();
        let mut fb = Framebuffer::with_size(viewport);

        let unscrolled = frame.draw(&mut fb, 0).unwrap();
        assert_eq!(unscrolled, 4);

        let bottom = frame.draw(&mut fb, frame.max_scroll()).unwrap();
        assert!(bottom < frame.cards().len());
    }

    #[test]
    fn test_scroll_is_clamped() {
        let viewport = Size::new(720, 1600);
        let frame = Frame::compose(resolved_seed(), ColumnCount::TWO, viewport).unwrap();
        let mut a = Framebuffer::with_size(viewport);
        let mut b = Framebuffer::with_size(viewport);

        frame.draw(&mut a, frame.max_scroll()).unwrap();
        frame.draw(&mut b, 10_000).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_remove_badge_hit_test() {
        let mut state: DashboardState<32> = DashboardState::seeded().unwrap();
        state.show();
        state.long_press(0).unwrap();
        let frame = Frame::compose(state.presentations(), ColumnCount::TWO, Size::new(720, 1600)).unwrap();

        // Card 0 body spans x 10..350; badge is 24 wide, 5 in from the end.
        assert_eq!(frame.remove_badge_at(Point::new(330, 25), 0), Some(0));
        // Card 1 sits in the second column.
        assert_eq!(frame.remove_badge_at(Point::new(690, 25), 0), Some(1));
        assert_eq!(frame.remove_badge_at(Point::new(180, 100), 0), None);
    }

    #[test]
    fn test_empty_frame() {
        let frame = Frame::compose(Vec::new(), ColumnCount::TWO, Size::new(720, 1600)).unwrap();
        assert_eq!(frame.content_height(), 0);
        assert!(frame.cards().is_empty());
    }

    #[test]
    fn test_shimmer_cards_render_placeholder_fill() {
        let presentations = vec![CardPresentation {
            index: 0,
            kind: WidgetKind::Range,
            color: WidgetColor::RangeBlue,
            mode: CardMode::Shimmer,
            show_remove: false,
        }];
        let viewport = Size::new(720, 400);
        let frame = Frame::compose(presentations, ColumnCount::TWO, viewport).unwrap();
        let mut fb = Framebuffer::with_size(viewport);
        frame.draw(&mut fb, 0).unwrap();

        let style = grid_components::card::CardStyle::standard();
        assert_eq!(fb.get_pixel(180, 20), Some(style.shimmer));
    }
}
