//! The start screen: background, navigation row, title and level column.

use eframe::egui::{CentralPanel, Color32, Context, Frame, Rect, RichText, Vec2};
use log::debug;
use ninebox_core::{Destination, Difficulty};

use crate::{
    action::{ActionRequestQueue, ScreenAction, WindowAction},
    config::HomepageConfig,
    ui::{
        background::BackgroundPanel,
        icon_button::IconButton,
        layout::{self, Axis, CellGrid},
    },
};

/// Space above and below the navigation row.
const NAVIGATION_MARGIN: f32 = 10.0;
/// Space above and below the title label.
const TITLE_MARGIN: f32 = 20.0;

/// Homepage contents, built once and dropped as a whole when a game starts.
#[derive(Debug)]
pub(crate) struct Homepage {
    background: BackgroundPanel,
    navigation: Vec<IconButton>,
    levels: Vec<IconButton>,
    title: String,
    title_size: f32,
    padding: i8,
    gap: f32,
}

impl Homepage {
    /// Loads every homepage image and wires each button to its action.
    #[must_use]
    pub(crate) fn new(config: &HomepageConfig) -> Self {
        let catalog = &config.catalog;
        let width = config.icon_target_width;

        let background = BackgroundPanel::new(&catalog.background());
        let navigation: Vec<_> = Destination::ALL
            .into_iter()
            .map(|destination| {
                let mut button = IconButton::from_icon_path(
                    destination.title(),
                    &catalog.destination_icon(destination),
                    width,
                );
                button.set_action(WindowAction::OpenPlaceholder(destination).into());
                button
            })
            .collect();
        let levels: Vec<_> = Difficulty::ALL
            .into_iter()
            .map(|difficulty| {
                IconButton::from_icon_path(
                    difficulty.label(),
                    &catalog.difficulty_icon(difficulty),
                    width,
                )
                .with_action(ScreenAction::StartGame(difficulty).into())
            })
            .collect();
        debug!(
            "Homepage constructed from {} (background: {}, icons: {}/{})",
            catalog.root().display(),
            if background.has_image() { "loaded" } else { "missing" },
            navigation
                .iter()
                .chain(&levels)
                .filter(|button| button.has_icon())
                .count(),
            navigation.len() + levels.len(),
        );

        Self {
            background,
            navigation,
            levels,
            title: config.title.clone(),
            title_size: config.title_size,
            padding: config.padding,
            gap: config.gap,
        }
    }

    /// Renders the homepage over the whole main window and returns its rect.
    pub(crate) fn show(&mut self, ctx: &Context, action_queue: &mut ActionRequestQueue) -> Rect {
        let Self {
            background,
            navigation,
            levels,
            title,
            title_size,
            padding,
            gap,
        } = self;
        let navigation_grid = CellGrid::fitting(Axis::Horizontal, navigation, *gap);
        let level_grid = CellGrid::fitting(Axis::Vertical, levels, *gap);

        CentralPanel::default().frame(Frame::NONE).show(ctx, |ui| {
            background.paint(ctx, ui.painter(), ui.max_rect());

            Frame::NONE.inner_margin(*padding).show(ui, |ui| {
                ui.set_min_size(ui.available_size());
                ui.spacing_mut().item_spacing = Vec2::ZERO;

                ui.add_space(NAVIGATION_MARGIN);
                ui.vertical_centered(|ui| {
                    navigation_grid.show(ui, navigation, action_queue);
                });
                ui.add_space(NAVIGATION_MARGIN + *gap + TITLE_MARGIN);

                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(title.as_str())
                            .size(*title_size)
                            .color(Color32::WHITE),
                    );
                });
                ui.add_space(TITLE_MARGIN);

                layout::centered(ui, level_grid.extent(), |ui| {
                    level_grid.show(ui, levels, action_queue);
                });
            });
        })
        .response
        .rect
    }
}

#[cfg(test)]
impl Homepage {
    pub(crate) fn has_background(&self) -> bool {
        self.background.has_image()
    }

    pub(crate) fn navigation(&self) -> &[IconButton] {
        &self.navigation
    }

    pub(crate) fn levels(&self) -> &[IconButton] {
        &self.levels
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{Color32, Context, FullOutput, Pos2, RawInput, Rect, Shape};
    use ninebox_assets::{ImageSize, testing::TestImageDir};
    use ninebox_core::{AssetCatalog, Destination, Difficulty};

    use super::Homepage;
    use crate::{
        action::{Action, ActionRequestQueue, ScreenAction, WindowAction},
        config::HomepageConfig,
    };

    fn config_at(dir: &TestImageDir) -> HomepageConfig {
        HomepageConfig {
            catalog: AssetCatalog::new(dir.path()),
            ..HomepageConfig::default()
        }
    }

    fn write_all_images(dir: &TestImageDir) {
        dir.write_png("images/background.jpg", 64, 48);
        for name in ["leaderboard", "aboutus", "rules", "achievements"] {
            dir.write_png(format!("images/{name}.png"), 400, 100);
        }
        for name in ["easy", "medium", "hard"] {
            dir.write_png(format!("images/{name}.png"), 300, 90);
        }
    }

    const SCREEN: Rect = Rect::from_min_max(Pos2::ZERO, Pos2::new(1024.0, 768.0));

    fn render(homepage: &mut Homepage) -> (FullOutput, Rect) {
        let mut queue = ActionRequestQueue::default();
        let ctx = Context::default();
        let input = RawInput {
            screen_rect: Some(SCREEN),
            ..Default::default()
        };
        let mut rect = Rect::NOTHING;
        let output = ctx.run(input, |ctx| rect = homepage.show(ctx, &mut queue));
        assert!(queue.is_empty());
        (output, rect)
    }

    fn actions(buttons: &[crate::ui::icon_button::IconButton]) -> Vec<Action> {
        buttons
            .iter()
            .filter_map(|button| button.action().cloned())
            .collect()
    }

    #[test]
    fn builds_seven_scaled_buttons_with_actions() {
        let dir = TestImageDir::new();
        write_all_images(&dir);
        let homepage = Homepage::new(&config_at(&dir));

        assert!(homepage.has_background());
        assert_eq!(homepage.navigation().len(), 4);
        assert_eq!(homepage.levels().len(), 3);
        for button in homepage.navigation() {
            assert_eq!(button.icon_size(), Some(ImageSize::new(200, 50)));
        }
        for button in homepage.levels() {
            assert_eq!(button.icon_size(), Some(ImageSize::new(200, 60)));
        }

        assert_eq!(
            actions(homepage.navigation()),
            Destination::ALL
                .map(|destination| Action::Window(WindowAction::OpenPlaceholder(destination)))
        );
        assert_eq!(
            actions(homepage.levels()),
            Difficulty::ALL.map(|difficulty| Action::Screen(ScreenAction::StartGame(difficulty)))
        );
    }

    #[test]
    fn missing_images_still_give_working_buttons() {
        let dir = TestImageDir::new();
        let homepage = Homepage::new(&config_at(&dir));

        assert!(!homepage.has_background());
        assert!(homepage.navigation().iter().all(|button| !button.has_icon()));
        assert!(homepage.levels().iter().all(|button| !button.has_icon()));
        assert_eq!(actions(homepage.navigation()).len(), 4);
        assert_eq!(actions(homepage.levels()).len(), 3);
    }

    #[test]
    fn renders_background_behind_the_whole_window() {
        let dir = TestImageDir::new();
        write_all_images(&dir);
        let mut homepage = Homepage::new(&config_at(&dir));

        let (output, rect) = render(&mut homepage);
        assert_eq!(rect, SCREEN);

        let full_window_meshes = output
            .shapes
            .iter()
            .filter(|clipped| matches!(&clipped.shape, Shape::Mesh(mesh) if mesh.calc_bounds() == SCREEN))
            .count();
        assert_eq!(full_window_meshes, 1);
    }

    #[test]
    fn renders_without_any_images() {
        let dir = TestImageDir::new();
        let mut homepage = Homepage::new(&config_at(&dir));
        let mut queue = ActionRequestQueue::default();

        let ctx = Context::default();
        let output = ctx.run(RawInput::default(), |ctx| {
            homepage.show(ctx, &mut queue);
        });
        assert!(
            !output
                .shapes
                .iter()
                .any(|clipped| matches!(&clipped.shape, Shape::Mesh(_)))
        );
    }

    #[test]
    fn missing_images_keep_the_homepage_inside_the_window() {
        let dir = TestImageDir::new();
        let mut homepage = Homepage::new(&config_at(&dir));

        let (_, rect) = render(&mut homepage);
        assert_eq!(rect, SCREEN);
    }

    #[test]
    fn title_sits_below_navigation_row_in_white() {
        let dir = TestImageDir::new();
        write_all_images(&dir);
        let mut homepage = Homepage::new(&config_at(&dir));

        let (output, _) = render(&mut homepage);
        let title = output
            .shapes
            .iter()
            .find_map(|clipped| match &clipped.shape {
                Shape::Text(text) if text.galley.text() == "9-Box Puzzle Game" => Some(text),
                _ => None,
            })
            .expect("title label painted");

        // padding 20, navigation margin 10, row 50, then 10 + 20 + 20 of space
        assert!((title.pos.y - 130.0).abs() < 0.5, "title at {}", title.pos.y);
        let format = &title.galley.job.sections[0].format;
        assert_eq!(format.color, Color32::WHITE);
        assert_eq!(format.font_id.size, 36.0);
    }
}
