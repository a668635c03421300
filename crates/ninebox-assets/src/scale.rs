//! Bicubic icon scaling.

use std::path::Path;

use image::imageops::{self, FilterType};

use crate::{AssetLoadError, ImageSize, LoadedImage, RgbaImage, load_image, scaled_size};

/// Width, in pixels, every homepage button icon is scaled to.
pub const BUTTON_TARGET_WIDTH: u32 = 200;

/// Bicubic filter used for icon resampling.
const ICON_FILTER: FilterType = FilterType::CatmullRom;

/// An icon bitmap resampled to its display size.
///
/// Each call to [`scale_to_width`] produces a fresh buffer; icons never share
/// pixels.
#[derive(Debug, Clone)]
pub struct ScaledIcon {
    pixels: RgbaImage,
}

impl ScaledIcon {
    /// Display size of the icon.
    #[must_use]
    pub fn size(&self) -> ImageSize {
        ImageSize::new(self.pixels.width(), self.pixels.height())
    }

    /// The resampled pixels.
    #[must_use]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Consumes the icon and returns its pixels.
    #[must_use]
    pub fn into_pixels(self) -> RgbaImage {
        self.pixels
    }
}

/// Resamples `image` to `target_width`, keeping its aspect ratio.
///
/// # Errors
///
/// Returns [`AssetLoadError::Degenerate`] if the scaled height would be zero.
pub fn scale_to_width(image: &LoadedImage, target_width: u32) -> Result<ScaledIcon, AssetLoadError> {
    let natural = image.size();
    let Some(size) = scaled_size(natural, target_width) else {
        return Err(AssetLoadError::Degenerate {
            path: image.path().to_owned(),
            size: ImageSize::new(target_width, 0),
        });
    };
    let pixels = imageops::resize(image.pixels(), size.width, size.height, ICON_FILTER);
    Ok(ScaledIcon { pixels })
}

/// Downscales `pixels` so that neither side exceeds `max_side`, keeping the
/// aspect ratio. Images that already fit are returned as they are.
#[must_use]
pub fn fit_to_max_side(pixels: RgbaImage, max_side: u32) -> RgbaImage {
    let size = ImageSize::new(pixels.width(), pixels.height());
    let fitted = size.fit_within(max_side);
    if fitted == size {
        return pixels;
    }
    imageops::resize(&pixels, fitted.width, fitted.height, ICON_FILTER)
}

/// Loads the icon at `path` and scales it to `target_width`.
///
/// # Errors
///
/// Any error of [`load_image`] or [`scale_to_width`].
pub fn load_scaled_icon(
    path: impl AsRef<Path>,
    target_width: u32,
) -> Result<ScaledIcon, AssetLoadError> {
    let image = load_image(path)?;
    scale_to_width(&image, target_width)
}
