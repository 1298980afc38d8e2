// SPDX-License-Identifier: MPL-2.0
//! Gallery content and geometry value objects.

/// Width and height in layout points (viewport) or pixels (content).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Creates a size from integer pixel dimensions.
    // Allow cast_precision_loss: f32 is exact up to 2^24, far above real image sides.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_pixels(width: u32, height: u32) -> Self {
        Self::new(width as f32, height as f32)
    }

    /// Returns true when either side is zero, negative or not finite.
    ///
    /// Degenerate sizes never take part in scale computations.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    /// Returns this size multiplied on both axes.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

/// An item shown by the carousel: an opaque handle plus natural size.
///
/// The handle is whatever the shell uses to find the content again (a path,
/// a texture id, an `Arc` of decoded pixels). The core only ever clones the
/// handle and reads the size.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem<H> {
    handle: H,
    natural_size: Size,
}

impl<H> GalleryItem<H> {
    #[must_use]
    pub fn new(handle: H, natural_size: Size) -> Self {
        Self {
            handle,
            natural_size,
        }
    }

    #[must_use]
    pub fn handle(&self) -> &H {
        &self.handle
    }

    #[must_use]
    pub fn natural_size(&self) -> Size {
        self.natural_size
    }
}

/// Padding that centers undersized content in the viewport.
///
/// `vertical` applies to top and bottom, `horizontal` to left and right.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentInset {
    pub vertical: f32,
    pub horizontal: f32,
}

impl ContentInset {
    /// Computes the centering inset for content of `scaled` size in `viewport`.
    #[must_use]
    pub fn centering(viewport: Size, scaled: Size) -> Self {
        Self {
            vertical: ((viewport.height - scaled.height) / 2.0).max(0.0),
            horizontal: ((viewport.width - scaled.width) / 2.0).max(0.0),
        }
    }
}

/// What the shell applies to the rendered item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomTransform {
    pub scale: f32,
    pub inset: ContentInset,
    pub zoomed: bool,
}
