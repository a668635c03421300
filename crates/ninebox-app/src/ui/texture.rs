use std::mem;

use eframe::egui::{ColorImage, Context, TextureFilter, TextureHandle, TextureOptions};
use log::debug;
use ninebox_assets::{RgbaImage, fit_to_max_side};

/// Sampling used for every homepage image: linear filtering with linear
/// mipmaps, the smoothest the renderer offers.
pub(crate) const HIGH_QUALITY: TextureOptions = TextureOptions {
    mipmap_mode: Some(TextureFilter::Linear),
    ..TextureOptions::LINEAR
};

/// Decoded pixels that are uploaded to the renderer the first time they are
/// painted. The CPU copy is released after the upload.
///
/// Images larger than the renderer's maximum texture side are downscaled
/// before upload. They are still painted at their full display size.
pub(crate) struct LazyTexture {
    name: String,
    pixels: RgbaImage,
    handle: Option<TextureHandle>,
}

impl std::fmt::Debug for LazyTexture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyTexture")
            .field("name", &self.name)
            .field("uploaded", &self.handle.is_some())
            .finish_non_exhaustive()
    }
}

impl LazyTexture {
    #[must_use]
    pub(crate) fn new(name: impl Into<String>, pixels: RgbaImage) -> Self {
        Self {
            name: name.into(),
            pixels,
            handle: None,
        }
    }

    pub(crate) fn texture(&mut self, ctx: &Context) -> &TextureHandle {
        let Self {
            name,
            pixels,
            handle,
        } = self;
        handle.get_or_insert_with(|| {
            let max_side = ctx.input(|i| i.max_texture_side);
            let max_side = u32::try_from(max_side).unwrap_or(u32::MAX);
            let (width, height) = pixels.dimensions();
            let fitted = fit_to_max_side(mem::take(pixels), max_side);
            if fitted.dimensions() != (width, height) {
                debug!(
                    "Texture {name} downscaled from {width}x{height} to {}x{} for upload",
                    fitted.width(),
                    fitted.height()
                );
            }
            ctx.load_texture(name.as_str(), to_color_image(&fitted), HIGH_QUALITY)
        })
    }
}

#[cfg(test)]
impl LazyTexture {
    pub(crate) fn is_uploaded(&self) -> bool {
        self.handle.is_some()
    }
}

fn to_color_image(pixels: &RgbaImage) -> ColorImage {
    let size = [pixels.width() as usize, pixels.height() as usize];
    ColorImage::from_rgba_unmultiplied(size, pixels.as_raw())
}
