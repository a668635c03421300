//! Small secondary windows opened by the navigation buttons.

use eframe::egui::{Align2, Context, Id, Pos2, Rect, RichText, Vec2, Window};
use log::debug;
use ninebox_core::Destination;

use crate::action::{ActionRequestQueue, WindowAction};

const LABEL_SIZE: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("#{_0}")]
pub(crate) struct PlaceholderId(u64);

/// One open placeholder window.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Placeholder {
    id: PlaceholderId,
    destination: Destination,
    center: Option<Pos2>,
}

impl Placeholder {
    #[must_use]
    pub(crate) fn id(&self) -> PlaceholderId {
        self.id
    }

    #[must_use]
    pub(crate) fn destination(&self) -> Destination {
        self.destination
    }

    #[must_use]
    pub(crate) fn title(&self) -> &'static str {
        self.destination().title()
    }

    /// Where the window is first placed, if the main window was known when
    /// it opened.
    #[must_use]
    pub(crate) fn center(&self) -> Option<Pos2> {
        self.center
    }
}

/// All open placeholder windows in opening order.
///
/// Windows are independent: any number may be open, several may share a
/// destination, and closing one leaves the rest untouched.
#[derive(Debug, Default)]
pub(crate) struct Placeholders {
    next_id: u64,
    open: Vec<Placeholder>,
}

impl Placeholders {
    /// Opens a window for `destination` centered over `anchor`.
    pub(crate) fn open(&mut self, destination: Destination, anchor: Option<Rect>) -> PlaceholderId {
        let id = PlaceholderId(self.next_id);
        self.next_id += 1;
        self.open.push(Placeholder {
            id,
            destination,
            center: anchor.map(|rect| rect.center()),
        });
        debug!("Placeholder {id} opened: {}", destination.title());
        id
    }

    /// Closes the window with `id`. Returns false if it was not open.
    pub(crate) fn close(&mut self, id: PlaceholderId) -> bool {
        let Some(index) = self.open.iter().position(|placeholder| placeholder.id == id) else {
            return false;
        };
        let placeholder = self.open.remove(index);
        debug!("Placeholder {id} closed: {}", placeholder.title());
        true
    }

    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.open.len()
    }

    #[must_use]
    pub(crate) fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Placeholder> {
        self.open.iter()
    }

    pub(crate) fn show(&self, ctx: &Context, size: Vec2, action_queue: &mut ActionRequestQueue) {
        for placeholder in self.iter() {
            show(ctx, placeholder, size, action_queue);
        }
    }
}

fn show(ctx: &Context, placeholder: &Placeholder, size: Vec2, action_queue: &mut ActionRequestQueue) {
    let mut open = true;
    let mut window = Window::new(placeholder.title())
        .id(window_id(placeholder.id()))
        .collapsible(false)
        .resizable(false)
        .fixed_size(size)
        .open(&mut open);
    if let Some(center) = placeholder.center() {
        window = window.pivot(Align2::CENTER_CENTER).default_pos(center);
    }
    window.show(ctx, |ui| {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new(placeholder.title()).size(LABEL_SIZE).strong());
        });
    });

    if !open {
        action_queue.request(WindowAction::ClosePlaceholder(placeholder.id()).into());
    }
}

fn window_id(id: PlaceholderId) -> Id {
    Id::new(("placeholder", id))
}

#[cfg(test)]
mod tests {
    use eframe::egui::{
        Context, Event, FullOutput, Modifiers, PointerButton, Pos2, RawInput, Rect, Shape, Vec2,
    };
    use ninebox_core::Destination;

    use super::Placeholders;
    use crate::action::{Action, ActionRequestQueue, WindowAction};

    const SCREEN: Rect = Rect::from_min_max(Pos2::ZERO, Pos2::new(1024.0, 768.0));

    fn pass(
        ctx: &Context,
        placeholders: &Placeholders,
        action_queue: &mut ActionRequestQueue,
        events: Vec<Event>,
    ) -> FullOutput {
        let input = RawInput {
            screen_rect: Some(SCREEN),
            events,
            ..Default::default()
        };
        ctx.run(input, |ctx| {
            placeholders.show(ctx, Vec2::new(400.0, 300.0), action_queue);
        })
    }

    fn press(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    /// The close button is the only cross drawn from diagonal segments.
    fn close_button_center(output: &FullOutput) -> Option<Pos2> {
        output
            .shapes
            .iter()
            .find_map(|clipped| match &clipped.shape {
                Shape::LineSegment { points: [a, b], .. } if (a.x - b.x).abs() > 1.0 && (a.y - b.y).abs() > 1.0 => {
                    Some(a.lerp(*b, 0.5))
                }
                _ => None,
            })
    }

    #[test]
    fn opens_titled_after_destination() {
        let mut placeholders = Placeholders::default();
        let anchor = Rect::from_min_size(Pos2::new(100.0, 50.0), Vec2::new(1024.0, 768.0));
        let id = placeholders.open(Destination::GameRules, Some(anchor));

        let placeholder = placeholders.iter().next().unwrap();
        assert_eq!(placeholder.id(), id);
        assert_eq!(placeholder.destination(), Destination::GameRules);
        assert_eq!(placeholder.title(), "Game Rules");
        assert_eq!(placeholder.center(), Some(Pos2::new(612.0, 434.0)));
    }

    #[test]
    fn same_destination_can_be_open_twice() {
        let mut placeholders = Placeholders::default();
        let first = placeholders.open(Destination::Leaderboard, None);
        let second = placeholders.open(Destination::Leaderboard, None);

        assert_ne!(first, second);
        assert_eq!(placeholders.len(), 2);
        assert!(
            placeholders
                .iter()
                .all(|placeholder| placeholder.title() == "Leaderboard")
        );
    }

    #[test]
    fn closing_one_leaves_the_others_open() {
        let mut placeholders = Placeholders::default();
        let about = placeholders.open(Destination::AboutUs, None);
        let rules = placeholders.open(Destination::GameRules, None);
        let achievements = placeholders.open(Destination::Achievements, None);

        assert!(placeholders.close(rules));
        assert!(!placeholders.close(rules));

        let remaining: Vec<_> = placeholders.iter().map(|placeholder| placeholder.id()).collect();
        assert_eq!(remaining, [about, achievements]);

        assert!(placeholders.close(about));
        assert!(placeholders.close(achievements));
        assert!(placeholders.is_empty());
    }

    #[test]
    fn open_windows_request_nothing_while_shown() {
        let mut placeholders = Placeholders::default();
        placeholders.open(Destination::Achievements, None);
        placeholders.open(Destination::AboutUs, None);
        let mut queue = ActionRequestQueue::default();

        let ctx = Context::default();
        for _ in 0..2 {
            let _ = pass(&ctx, &placeholders, &mut queue, Vec::new());
        }
        assert!(queue.is_empty());
        assert_eq!(placeholders.len(), 2);
    }

    #[test]
    fn close_button_requests_closing_that_window() {
        let mut placeholders = Placeholders::default();
        let id = placeholders.open(Destination::Leaderboard, Some(SCREEN));
        let mut queue = ActionRequestQueue::default();
        let ctx = Context::default();

        let mut output = pass(&ctx, &placeholders, &mut queue, Vec::new());
        for _ in 0..2 {
            output = pass(&ctx, &placeholders, &mut queue, Vec::new());
        }
        let close = close_button_center(&output).expect("close button painted");
        assert!(queue.is_empty());

        let _ = pass(&ctx, &placeholders, &mut queue, vec![Event::PointerMoved(close)]);
        let _ = pass(&ctx, &placeholders, &mut queue, vec![press(close, true)]);
        let _ = pass(&ctx, &placeholders, &mut queue, vec![press(close, false)]);

        assert_eq!(
            queue.take_all(),
            [Action::Window(WindowAction::ClosePlaceholder(id))]
        );
    }
}
