//! Label component for displaying text

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_6X10, FONT_9X18},
        MonoFont, MonoTextStyle,
    },
    pixelcolor::Rgb888,
    prelude::*,
    text::{Baseline, Text},
};
use grid_system::render::Renderable;

/// Text size variants
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextSize {
    /// 6x10 font
    Small,
    /// 9x18 font (card titles)
    Normal,
    /// 10x20 font (card captions)
    Large,
}

impl TextSize {
    fn font(self) -> &'static MonoFont<'static> {
        match self {
            TextSize::Small => &FONT_6X10,
            TextSize::Normal => &FONT_9X18,
            TextSize::Large => &FONT_10X20,
        }
    }

    /// Height of one line of text.
    #[must_use]
    pub fn line_height(self) -> u32 {
        self.font().character_size.height
    }

    /// Advance width of one character.
    #[must_use]
    pub fn char_width(self) -> u32 {
        let font = self.font();
        font.character_size
            .width
            .saturating_add(font.character_spacing)
    }
}

/// Label component for static text display
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Label {
    text: &'static str,
    color: Rgb888,
    size: TextSize,
}

impl Label {
    /// Create a new label with the given text
    #[must_use]
    pub fn new(text: &'static str) -> Self {
        Self {
            text,
            color: Rgb888::BLACK,
            size: TextSize::Normal,
        }
    }

    /// Set text color
    #[must_use]
    pub fn color(mut self, color: Rgb888) -> Self {
        self.color = color;
        self
    }

    /// Set text size
    #[must_use]
    pub fn size(mut self, size: TextSize) -> Self {
        self.size = size;
        self
    }

    /// The label text.
    #[must_use]
    pub fn text(&self) -> &'static str {
        self.text
    }

    /// Get text dimensions
    #[must_use]
    pub fn dimensions(&self) -> Size {
        let chars = u32::try_from(self.text.chars().count()).unwrap_or(u32::MAX);
        Size::new(
            chars.saturating_mul(self.size.char_width()),
            self.size.line_height(),
        )
    }
}

impl Renderable<Rgb888> for Label {
    /// Draw with the top-left corner of the text box at `position`.
    fn render<D>(&self, display: &mut D, position: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let style = MonoTextStyle::new(self.size.font(), self.color);
        Text::with_baseline(self.text, position, style, Baseline::Top).draw(display)?;
        Ok(())
    }
}

/// Helper for creating labels with different styles
pub struct LabelBuilder;

impl LabelBuilder {
    /// Card title, drawn top-left
    #[must_use]
    pub fn title(text: &'static str) -> Label {
        Label::new(text).size(TextSize::Normal)
    }

    /// Card caption, drawn bottom-centered
    #[must_use]
    pub fn caption(text: &'static str) -> Label {
        Label::new(text).size(TextSize::Large)
    }
}
