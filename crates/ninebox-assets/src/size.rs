//! Pixel sizes and aspect-ratio-preserving scaling.

/// Width and height of an image in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{width}x{height}")]
pub struct ImageSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageSize {
    /// Creates a size from its dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either dimension is zero.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Height divided by width.
    #[must_use]
    pub fn aspect_ratio(self) -> f64 {
        f64::from(self.height) / f64::from(self.width)
    }

    /// Largest size with the same aspect ratio whose sides are at most
    /// `max_side`. Sizes that already fit are returned unchanged.
    ///
    /// Neither side shrinks below one pixel.
    #[must_use]
    pub fn fit_within(self, max_side: u32) -> Self {
        let max_side = max_side.max(1);
        let longest = self.width.max(self.height);
        if longest <= max_side {
            return self;
        }
        let factor = f64::from(max_side) / f64::from(longest);
        Self::new(
            shrink_side(self.width, factor, max_side),
            shrink_side(self.height, factor, max_side),
        )
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn shrink_side(side: u32, factor: f64, max_side: u32) -> u32 {
    (f64::from(side) * factor)
        .round()
        .clamp(1.0, f64::from(max_side)) as u32
}

/// Computes the size of `natural` scaled to `target_width`, keeping its
/// aspect ratio.
///
/// The height is `round(target_width * height / width)`. Returns `None` if
/// `natural` is empty or the scaled height rounds to zero, since no bitmap
/// can be allocated for such a size.
///
/// # Examples
///
/// ```
/// use ninebox_assets::{ImageSize, scaled_size};
///
/// assert_eq!(
///     scaled_size(ImageSize::new(100, 400), 200),
///     Some(ImageSize::new(200, 800))
/// );
/// assert_eq!(scaled_size(ImageSize::new(0, 400), 200), None);
/// ```
#[must_use]
pub fn scaled_size(natural: ImageSize, target_width: u32) -> Option<ImageSize> {
    if natural.is_empty() || target_width == 0 {
        return None;
    }
    let height = (f64::from(target_width) * natural.aspect_ratio()).round();
    if height < 1.0 || height > f64::from(u32::MAX) {
        return None;
    }
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let height = height as u32;
    Some(ImageSize::new(target_width, height))
}
