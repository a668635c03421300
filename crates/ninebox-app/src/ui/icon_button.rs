//! Image-only buttons with icons scaled to a fixed width.

use std::path::Path;

use eframe::egui::{Button, CursorIcon, Image, Response, Sense, Ui, Vec2, load::SizedTexture};
use log::{debug, warn};
use ninebox_assets::{ImageSize, ScaledIcon, load_scaled_icon};

use crate::{
    action::{Action, ActionRequestQueue},
    ui::texture::LazyTexture,
};

/// A clickable icon with no border, fill or focus ring.
///
/// The icon is scaled once, when the button is created. A button whose icon
/// failed to load is still usable; it paints nothing and takes no space.
/// The click action is attached after creation.
#[derive(Debug)]
pub(crate) struct IconButton {
    name: String,
    icon: Option<LazyTexture>,
    icon_size: Option<ImageSize>,
    action: Option<Action>,
}

impl IconButton {
    /// Loads the icon at `path` scaled to `target_width` and wraps it in a
    /// button. Load failures are logged and yield a button without an icon.
    #[must_use]
    pub(crate) fn from_icon_path(name: impl Into<String>, path: &Path, target_width: u32) -> Self {
        let icon = match load_scaled_icon(path, target_width) {
            Ok(icon) => Some(icon),
            Err(err) => {
                warn!("Button icon not found at {}: {err}", path.display());
                None
            }
        };
        Self::from_icon(name, icon)
    }

    #[must_use]
    pub(crate) fn from_icon(name: impl Into<String>, icon: Option<ScaledIcon>) -> Self {
        let name = name.into();
        let icon_size = icon.as_ref().map(ScaledIcon::size);
        let icon = icon.map(|icon| LazyTexture::new(format!("icon:{name}"), icon.into_pixels()));
        Self {
            name,
            icon,
            icon_size,
            action: None,
        }
    }

    #[must_use]
    pub(crate) fn has_icon(&self) -> bool {
        self.icon.is_some()
    }

    #[must_use]
    pub(crate) fn icon_size(&self) -> Option<ImageSize> {
        self.icon_size
    }

    /// Size the button asks its layout for: the scaled icon size, or nothing.
    #[must_use]
    pub(crate) fn preferred_size(&self) -> Vec2 {
        self.icon_size().map_or(Vec2::ZERO, to_points)
    }

    #[must_use]
    pub(crate) fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    pub(crate) fn set_action(&mut self, action: Action) {
        self.action = Some(action);
    }

    #[must_use]
    pub(crate) fn with_action(mut self, action: Action) -> Self {
        self.set_action(action);
        self
    }

    /// Requests the attached action, if any.
    pub(crate) fn fire(&self, action_queue: &mut ActionRequestQueue) {
        if let Some(action) = self.action() {
            debug!("{} clicked", self.name);
            action_queue.request(action.clone());
        }
    }

    /// Adds the button at the cursor. It takes exactly its preferred size.
    pub(crate) fn show(&mut self, ui: &mut Ui, action_queue: &mut ActionRequestQueue) -> Response {
        let size = self.preferred_size();
        let response = match &mut self.icon {
            Some(icon) => {
                let texture = SizedTexture::new(icon.texture(ui.ctx()).id(), size);
                ui.scope(|ui| {
                    ui.spacing_mut().button_padding = Vec2::ZERO;
                    ui.add(
                        Button::image(Image::from_texture(texture))
                            .frame(false)
                            .min_size(size),
                    )
                })
                .inner
            }
            None => ui.allocate_exact_size(size, Sense::click()).1,
        }
        .on_hover_cursor(CursorIcon::PointingHand);

        if response.clicked() {
            self.fire(action_queue);
        }
        response
    }
}

#[expect(clippy::cast_precision_loss)]
fn to_points(size: ImageSize) -> Vec2 {
    Vec2::new(size.width as f32, size.height as f32)
}
