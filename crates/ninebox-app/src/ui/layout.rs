//! Equal-cell grids and centering used by the homepage.

use eframe::egui::{Pos2, Rect, Sense, Ui, UiBuilder, Vec2};
use egui_extras::{Size, StripBuilder};

use crate::{action::ActionRequestQueue, ui::icon_button::IconButton};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    Horizontal,
    Vertical,
}

/// A single row or column of equally sized cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CellGrid {
    pub(crate) axis: Axis,
    pub(crate) cell: Vec2,
    pub(crate) count: usize,
    pub(crate) gap: f32,
}

impl CellGrid {
    /// Grid whose cells fit the largest of `buttons`.
    #[must_use]
    pub(crate) fn fitting(axis: Axis, buttons: &[IconButton], gap: f32) -> Self {
        let cell = buttons
            .iter()
            .map(IconButton::preferred_size)
            .fold(Vec2::ZERO, Vec2::max);
        Self {
            axis,
            cell,
            count: buttons.len(),
            gap,
        }
    }

    /// Total size of all cells and the gaps between them.
    #[must_use]
    pub(crate) fn extent(&self) -> Vec2 {
        #[expect(clippy::cast_precision_loss)]
        let count = self.count as f32;
        let along = count * self.main(self.cell) + (count - 1.0).max(0.0) * self.gap;
        match self.axis {
            Axis::Horizontal => Vec2::new(along, self.cell.y),
            Axis::Vertical => Vec2::new(self.cell.x, along),
        }
    }

    #[must_use]
    pub(crate) fn cell_rects(&self, origin: Pos2) -> Vec<Rect> {
        let step = self.main(self.cell) + self.gap;
        (0..self.count)
            .map(|i| {
                #[expect(clippy::cast_precision_loss)]
                let offset = i as f32 * step;
                let offset = match self.axis {
                    Axis::Horizontal => Vec2::new(offset, 0.0),
                    Axis::Vertical => Vec2::new(0.0, offset),
                };
                Rect::from_min_size(origin + offset, self.cell)
            })
            .collect()
    }

    fn main(&self, size: Vec2) -> f32 {
        match self.axis {
            Axis::Horizontal => size.x,
            Axis::Vertical => size.y,
        }
    }

    /// Places each button centered in its cell, starting at the cursor.
    ///
    /// Only the grid's extent is allocated in `ui`; buttons are laid out in
    /// child uis that never push the surrounding content.
    pub(crate) fn show(
        &self,
        ui: &mut Ui,
        buttons: &mut [IconButton],
        action_queue: &mut ActionRequestQueue,
    ) -> Rect {
        let (area, _) = ui.allocate_exact_size(self.extent(), Sense::hover());
        for (button, cell) in buttons.iter_mut().zip(self.cell_rects(area.min)) {
            let rect = Rect::from_center_size(cell.center(), button.preferred_size());
            let mut cell_ui = ui.new_child(UiBuilder::new().max_rect(rect));
            button.show(&mut cell_ui, action_queue);
        }
        area
    }
}

/// Runs `add_contents` in a region of size `extent` centered in the
/// available space.
pub(crate) fn centered(ui: &mut Ui, extent: Vec2, add_contents: impl FnOnce(&mut Ui)) {
    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(extent.x))
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.empty();
            strip.cell(|ui| {
                StripBuilder::new(ui)
                    .size(Size::remainder())
                    .size(Size::exact(extent.y))
                    .size(Size::remainder())
                    .vertical(|mut strip| {
                        strip.empty();
                        strip.cell(add_contents);
                        strip.empty();
                    });
            });
            strip.empty();
        });
}
