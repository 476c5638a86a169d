use crate::carousel::{Carousel, CarouselIntent, Feedback};
use crate::config::{CardConfig, Config};
use crate::ui::layout::Regions;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Host state of the terminal demo.
///
/// The app plays the role of the selection owner: it keeps the bound
/// value, receives outward commits from the carousel and pushes its own
/// jumps inward through [`Carousel::set_index`].
pub struct App {
    should_quit: bool,
    deck: Vec<CardConfig>,
    carousel: Carousel,
    selection: Rc<Cell<usize>>,
    card_height: Option<u16>,
    track: Rect,
    tick_rate: Duration,
}

impl App {
    pub fn new(config: &Config, initial: Option<usize>, feedback: impl Feedback + 'static) -> Self {
        let deck = config.deck();
        if config.cards.is_empty() {
            tracing::debug!("no cards configured, using the built-in deck");
        }
        let selection = Rc::new(Cell::new(0));
        let sink = Rc::clone(&selection);
        let carousel = Carousel::new(deck.len(), config.carousel.options())
            .with_feedback(feedback)
            .with_selection(initial.unwrap_or(0), move |index| sink.set(index));
        selection.set(carousel.index());

        Self {
            should_quit: false,
            deck,
            carousel,
            selection,
            card_height: config.ui.card_height,
            track: Rect::default(),
            tick_rate: config.ui.tick_rate(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn deck(&self) -> &[CardConfig] {
        &self.deck
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Current value of the bound selection.
    pub fn selection(&self) -> usize {
        self.selection.get()
    }

    pub fn card_height(&self) -> Option<u16> {
        self.card_height
    }

    pub fn track(&self) -> Rect {
        self.track
    }

    pub fn on_tick(&mut self) {}

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.track = Regions::compute(Rect::new(0, 0, cols, rows), self.card_height).track;
        let metrics = self.carousel.resize(self.track.width as f32);
        tracing::debug!(
            width = metrics.track_width,
            spacing = metrics.spacing,
            peek = metrics.peek_width,
            "track measured"
        );
    }

    /// How long the event loop may sleep before the next frame is due.
    pub fn frame_timeout(&self, now: Instant) -> Duration {
        if self.carousel.is_settling(now) {
            Duration::from_millis(16)
        } else {
            self.tick_rate
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        let x = mouse.column as f32;
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.track.contains(Position::new(mouse.column, mouse.row)) {
                    self.carousel.dispatch(CarouselIntent::PointerDown { x });
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.carousel.dispatch(CarouselIntent::PointerMoved { x });
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.carousel.dispatch(CarouselIntent::PointerReleased { x });
            }
            _ => {}
        }
    }

    /// Abandons an in-flight drag without committing.
    ///
    /// Returns false when no drag was active.
    pub fn cancel_drag(&mut self) -> bool {
        if !self.carousel.state().is_dragging() {
            return false;
        }
        self.carousel.dispatch(CarouselIntent::PointerCancelled);
        true
    }

    pub fn step_next(&mut self) {
        self.carousel.dispatch(CarouselIntent::StepNext);
    }

    pub fn step_previous(&mut self) {
        self.carousel.dispatch(CarouselIntent::StepPrevious);
    }

    /// Programmatic page jump: the owner updates its value, then writes it
    /// inward. The carousel only writes back if it had to clamp.
    pub fn jump_to(&mut self, index: usize) {
        self.selection.set(index);
        self.carousel.set_index(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{NoFeedback, PulseCounter};
    use crossterm::event::KeyModifiers;

    fn make_app(initial: Option<usize>) -> (App, PulseCounter) {
        let pulses = PulseCounter::new();
        let mut app = App::new(&Config::default(), initial, pulses.clone());
        app.on_resize(120, 30);
        (app, pulses)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    fn drag(app: &mut App, from: u16, to: u16) {
        app.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), from, 10));
        app.on_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), to, 10));
        app.on_mouse(mouse(MouseEventKind::Up(MouseButton::Left), to, 10));
    }

    #[test]
    fn initial_selection_is_mounted_silently() {
        let (app, pulses) = make_app(Some(2));
        assert_eq!(app.carousel().index(), 2);
        assert_eq!(app.selection(), 2);
        assert_eq!(pulses.count(), 0);
    }

    #[test]
    fn initial_selection_past_deck_is_clamped() {
        let (app, _) = make_app(Some(40));
        assert_eq!(app.carousel().index(), 4);
    }

    #[test]
    fn long_drag_commits_and_updates_selection() {
        let (mut app, pulses) = make_app(None);
        drag(&mut app, 100, 30);
        assert_eq!(app.carousel().index(), 1);
        assert_eq!(app.selection(), 1);
        assert_eq!(pulses.count(), 1);
    }

    #[test]
    fn short_drag_snaps_back() {
        let (mut app, pulses) = make_app(Some(1));
        drag(&mut app, 60, 50);
        assert_eq!(app.carousel().index(), 1);
        assert_eq!(pulses.count(), 0);
    }

    #[test]
    fn press_outside_track_does_not_start_drag() {
        let (mut app, _) = make_app(None);
        drag(&mut app, 100, 30);
        assert_eq!(app.carousel().index(), 1);
        app.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 100, 0));
        assert!(!app.carousel().state().is_dragging());
    }

    #[test]
    fn cancelled_drag_keeps_index() {
        let (mut app, pulses) = make_app(Some(1));
        app.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 100, 10));
        app.on_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 10, 10));
        assert!(app.cancel_drag());
        app.on_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 10, 10));
        assert_eq!(app.carousel().index(), 1);
        assert_eq!(pulses.count(), 0);
        assert!(!app.cancel_drag());
    }

    #[test]
    fn jump_writes_inward_without_feedback() {
        let (mut app, pulses) = make_app(None);
        app.jump_to(3);
        assert_eq!(app.carousel().index(), 3);
        assert_eq!(app.selection(), 3);
        assert_eq!(pulses.count(), 0);
    }

    #[test]
    fn jump_past_deck_is_written_back_clamped() {
        let (mut app, pulses) = make_app(None);
        app.jump_to(usize::MAX);
        assert_eq!(app.carousel().index(), 4);
        assert_eq!(app.selection(), 4);
        assert_eq!(pulses.count(), 0);
    }

    #[test]
    fn card_height_narrows_the_drag_area() {
        let mut config = Config::default();
        config.ui.card_height = Some(4);
        let mut app = App::new(&config, None, NoFeedback);
        app.on_resize(120, 30);
        assert_eq!(app.track().height, 4);
        app.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 50, 5));
        assert!(!app.carousel().state().is_dragging());
    }

    #[test]
    fn settling_shortens_frame_timeout() {
        let (mut app, _) = make_app(None);
        let now = Instant::now();
        assert_eq!(app.frame_timeout(now), Duration::from_millis(250));
        app.step_next();
        assert_eq!(app.frame_timeout(Instant::now()), Duration::from_millis(16));
    }
}
