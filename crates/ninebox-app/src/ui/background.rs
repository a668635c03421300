//! Full-window background image.

use std::path::Path;

use eframe::egui::{Color32, Context, Mesh, Painter, Pos2, Rect, Shape};
use log::warn;
use ninebox_assets::load_image;

use crate::ui::texture::LazyTexture;

const FULL_UV: Rect = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));

/// A surface that paints one image stretched over its whole area.
///
/// The image is not kept in proportion: it always covers exactly the rect it
/// is painted into. A panel whose image failed to load paints nothing.
#[derive(Debug)]
pub(crate) struct BackgroundPanel {
    image: Option<LazyTexture>,
}

impl BackgroundPanel {
    #[must_use]
    pub(crate) fn new(path: &Path) -> Self {
        let image = match load_image(path) {
            Ok(image) => Some(LazyTexture::new(
                format!("background:{}", path.display()),
                image.into_pixels(),
            )),
            Err(err) => {
                warn!("Background image not found at {}: {err}", path.display());
                None
            }
        };
        Self { image }
    }

    #[must_use]
    pub(crate) fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub(crate) fn paint(&mut self, ctx: &Context, painter: &Painter, rect: Rect) {
        let Some(image) = &mut self.image else {
            return;
        };
        let mut mesh = Mesh::with_texture(image.texture(ctx).id());
        mesh.add_rect_with_uv(rect, FULL_UV, Color32::WHITE);
        painter.add(Shape::mesh(mesh));
    }
}
