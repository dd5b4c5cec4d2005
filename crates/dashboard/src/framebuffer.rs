//! CPU framebuffer for headless frame capture
//!
//! An `Rgb888` draw target backed by a `Vec`. Pixels outside the buffer are
//! dropped, so cards scrolled partially off-screen clip cleanly.

use std::path::Path;

use embedded_graphics::{pixelcolor::Rgb888, prelude::*};
use image::{ImageFormat, Rgb, RgbImage};

use crate::error::DashboardError;

/// In-memory `Rgb888` framebuffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pixels: Vec<Rgb888>,
    width: u32,
    height: u32,
}

impl Framebuffer {
    /// Create a framebuffer filled with white
    // SAFETY: width * height is a pixel count bounded by viewport dimensions,
    // so it fits in usize on 32-bit+ targets.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            pixels: vec![Rgb888::WHITE; len],
            width,
            height,
        }
    }

    /// Create a framebuffer covering `size`
    pub fn with_size(size: Size) -> Self {
        Self::new(size.width, size.height)
    }

    /// Buffer width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let row = usize::try_from(y).ok()?.checked_mul(usize::try_from(self.width).ok()?)?;
        row.checked_add(usize::try_from(x).ok()?)
    }

    /// Set pixel at coordinates; out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb888) {
        if let Some(slot) = self.index(x, y).and_then(|i| self.pixels.get_mut(i)) {
            *slot = color;
        }
    }

    /// Get pixel at coordinates
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb888> {
        self.index(x, y).and_then(|i| self.pixels.get(i)).copied()
    }

    /// Fill entire framebuffer with color
    pub fn fill(&mut self, color: Rgb888) {
        self.pixels.fill(color);
    }

    /// Clear framebuffer (fill with white)
    pub fn clear(&mut self) {
        self.fill(Rgb888::WHITE);
    }

    /// Copy into an `image` buffer.
    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            let color = self.get_pixel(x, y).unwrap_or(Rgb888::WHITE);
            Rgb([color.r(), color.g(), color.b()])
        })
    }

    /// Save as PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), DashboardError> {
        let path = path.as_ref();
        self.to_image()
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| DashboardError::Capture {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), "frame captured");
        Ok(())
    }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
