//! Carousel controller.
//!
//! Keeps exactly one active item among N and moves between them on explicit
//! navigation, indicator selection, autoplay, arrow keys and swipes. Every
//! user interaction stops autoplay, acts, then restarts it, so the timer never
//! races a user action.

use std::time::Duration;

use tracing::{debug, trace};

use crate::config::CarouselConfig;
use crate::event::{Direction, Event, Key, swipe_direction};
use crate::slide::{Indicator, Slide};
use crate::state::AutoPlayState;
use crate::timer::Timer;
use crate::viewport::Bounds;

#[derive(Debug)]
pub struct Carousel<T> {
    slides: Vec<Slide<T>>,
    indicators: Vec<Indicator>,
    current_index: usize,
    config: CarouselConfig,
    timer: Timer,
    // Last reported position of the carousel and the viewport height.
    layout: Option<(Bounds, f32)>,
}

impl<T> Carousel<T> {
    /// Builds a carousel over `items` with `indicator_count` indicator dots,
    /// shows the first item and starts autoplay. Returns `None` for an empty
    /// item set: there is nothing to cycle through.
    pub fn new(items: Vec<T>, indicator_count: usize, config: CarouselConfig) -> Option<Self> {
        if items.is_empty() {
            debug!("no items, carousel disabled");
            return None;
        }
        if indicator_count != items.len() {
            debug!(
                items = items.len(),
                indicators = indicator_count,
                "indicator count does not match item count"
            );
        }

        let mut carousel = Self {
            slides: items.into_iter().map(Slide::new).collect(),
            indicators: vec![Indicator::default(); indicator_count],
            current_index: 0,
            config,
            timer: Timer::new(),
            layout: None,
        };
        carousel.show_item(0);
        carousel.start_auto_play();
        Some(carousel)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false: an empty carousel is never constructed.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.current_index
    }

    pub fn active_item(&self) -> &T {
        &self.slides[self.current_index].item
    }

    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.slides.iter().map(|slide| &slide.item)
    }

    pub fn slides(&self) -> &[Slide<T>] {
        &self.slides
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn auto_play_state(&self) -> AutoPlayState {
        if self.timer.is_pending() {
            AutoPlayState::Playing
        } else {
            AutoPlayState::Stopped
        }
    }

    pub fn is_auto_playing(&self) -> bool {
        self.auto_play_state() == AutoPlayState::Playing
    }

    /// Time left before the next automatic advance, if autoplay is running.
    pub fn time_to_next_advance(&self) -> Option<Duration> {
        self.timer.remaining()
    }

    /// Marks `index` active and every other item and indicator inactive.
    /// `index` must be below `len()`; indicators past the end of the
    /// indicator list are simply absent.
    pub fn show_item(&mut self, index: usize) {
        for (i, slide) in self.slides.iter_mut().enumerate() {
            slide.set_active(i == index);
        }
        for (i, indicator) in self.indicators.iter_mut().enumerate() {
            indicator.set_active(i == index);
        }
        if self.current_index != index {
            debug!(from = self.current_index, to = index, "active item changed");
        }
        self.current_index = index;
    }

    pub fn next(&mut self) {
        let next_index = (self.current_index + 1) % self.slides.len();
        self.show_item(next_index);
    }

    pub fn prev(&mut self) {
        let len = self.slides.len();
        let prev_index = (self.current_index + len - 1) % len;
        self.show_item(prev_index);
    }

    /// Shows item `index` if it exists. Out-of-range requests are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.slides.len() {
            self.show_item(index);
            true
        } else {
            trace!(index, len = self.slides.len(), "ignoring out-of-range item");
            false
        }
    }

    /// (Re)starts autoplay. Any pending advance is cancelled first.
    pub fn start_auto_play(&mut self) {
        self.stop_auto_play();
        self.timer.start(self.config.autoplay_delay);
        debug!(
            delay_ms = self.config.autoplay_delay.as_millis() as u64,
            "autoplay started"
        );
    }

    pub fn stop_auto_play(&mut self) {
        if self.timer.cancel() {
            debug!("autoplay stopped");
        }
    }

    /// Moves the clock forward by `dt`, advancing once per elapsed autoplay
    /// period. Returns the number of automatic advances.
    pub fn update(&mut self, dt: Duration) -> u32 {
        let fired = self.timer.advance(dt);
        for _ in 0..fired {
            self.next();
        }
        fired
    }

    /// Reports where the carousel currently sits relative to the viewport.
    pub fn set_layout(&mut self, bounds: Bounds, viewport_height: f32) {
        self.layout = Some((bounds, viewport_height));
    }

    /// Keyboard input is only honored while the carousel is on screen. Before
    /// any layout is reported it is considered off screen.
    pub fn is_in_viewport(&self) -> bool {
        self.layout
            .is_some_and(|(bounds, viewport_height)| bounds.intersects_viewport(viewport_height))
    }

    pub fn handle(&mut self, event: Event) {
        match event {
            Event::ControlActivated(direction) => self.interact(|c| c.step(direction)),
            Event::IndicatorActivated(index) => self.interact(|c| {
                c.go_to(index);
            }),
            Event::KeyPressed(key) => {
                if !self.is_in_viewport() {
                    trace!(?key, "carousel off screen, ignoring key");
                    return;
                }
                match key {
                    Key::ArrowLeft => self.interact(Self::prev),
                    Key::ArrowRight => self.interact(Self::next),
                    Key::Other => {}
                }
            }
            Event::PointerEntered | Event::GestureStarted => self.stop_auto_play(),
            Event::PointerLeft => self.start_auto_play(),
            Event::Gesture { start, end } => {
                let threshold = self.config.swipe_threshold;
                self.interact(|c| {
                    if let Some(direction) = swipe_direction(start, end, threshold) {
                        c.step(direction);
                    }
                });
            }
        }
    }

    fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Previous => self.prev(),
            Direction::Next => self.next(),
        }
    }

    fn interact(&mut self, action: impl FnOnce(&mut Self)) {
        self.stop_auto_play();
        action(self);
        self.start_auto_play();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn carousel(len: usize) -> Carousel<usize> {
        Carousel::new((0..len).collect(), len, CarouselConfig::default()).unwrap()
    }

    fn visible(mut carousel: Carousel<usize>) -> Carousel<usize> {
        carousel.set_layout(Bounds::new(100.0, 460.0), 720.0);
        carousel
    }

    fn assert_single_active(carousel: &Carousel<usize>) {
        let active: Vec<_> = carousel
            .slides()
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_active())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(active, [carousel.active_index()]);
    }

    #[test]
    fn empty_item_set_is_inert() {
        assert!(Carousel::<usize>::new(Vec::new(), 3, CarouselConfig::default()).is_none());
    }

    #[test]
    fn starts_on_first_item_with_autoplay() {
        let c = carousel(4);
        assert_eq!(c.active_index(), 0);
        assert!(c.is_auto_playing());
        assert!(c.slides()[0].is_active());
        assert!(!c.slides()[0].aria_hidden());
        assert!(c.slides()[1].aria_hidden());
        assert!(c.indicators()[0].aria_current());
        assert!(!c.indicators()[1].aria_current());
        assert_eq!(c.time_to_next_advance(), Some(ms(8000)));
    }

    #[test]
    fn index_stays_in_range() {
        for len in 1..=6 {
            let mut c = carousel(len);
            for step in 0..50 {
                if step % 3 == 0 {
                    c.prev();
                } else {
                    c.next();
                }
                assert!(c.active_index() < len);
                assert_single_active(&c);
            }
        }
    }

    #[test]
    fn next_and_prev_are_inverse() {
        for len in 1..=5 {
            let mut c = carousel(len);
            for start in 0..len {
                c.show_item(start);
                c.next();
                c.prev();
                assert_eq!(c.active_index(), start);
                c.prev();
                c.next();
                assert_eq!(c.active_index(), start);
            }
        }
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let len = 5;
        let mut c = carousel(len);
        for start in 0..len {
            c.show_item(start);
            for _ in 0..len {
                c.next();
            }
            assert_eq!(c.active_index(), start);
        }
    }

    #[test]
    fn wraps_at_both_ends() {
        let mut c = carousel(3);
        c.prev();
        assert_eq!(c.active_index(), 2);
        c.next();
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut c = carousel(3);
        c.show_item(1);
        assert!(!c.go_to(3));
        assert!(!c.go_to(usize::MAX));
        assert_eq!(c.active_index(), 1);
        assert!(c.go_to(2));
        assert_eq!(c.active_index(), 2);
    }

    #[test]
    fn final_stop_leaves_no_pending_advance() {
        let mut c = carousel(4);
        c.start_auto_play();
        c.start_auto_play();
        c.stop_auto_play();
        c.start_auto_play();
        c.stop_auto_play();
        c.stop_auto_play();

        assert_eq!(c.update(ms(100_000)), 0);
        assert_eq!(c.active_index(), 0);
        assert!(!c.is_auto_playing());
    }

    #[test]
    fn repeated_starts_advance_once_per_period() {
        let mut c = carousel(10);
        for _ in 0..5 {
            c.start_auto_play();
        }
        assert_eq!(c.update(ms(8000)), 1);
        assert_eq!(c.active_index(), 1);
    }

    #[test]
    fn prev_click_restarts_autoplay() {
        let mut c = carousel(5);

        c.update(ms(8000));
        assert_eq!(c.active_index(), 1);

        c.update(ms(500));
        c.handle(Event::ControlActivated(Direction::Previous));
        assert_eq!(c.active_index(), 0);

        // t = 16499
        c.update(ms(7999));
        assert_eq!(c.active_index(), 0);
        // t = 16500
        c.update(ms(1));
        assert_eq!(c.active_index(), 1);
    }

    #[test]
    fn next_control_advances() {
        let mut c = carousel(3);
        c.handle(Event::ControlActivated(Direction::Next));
        assert_eq!(c.active_index(), 1);
        assert!(c.is_auto_playing());
    }

    #[test]
    fn swipe_beyond_threshold_moves() {
        let mut c = carousel(5);
        c.show_item(2);

        c.handle(Event::GestureStarted);
        assert!(!c.is_auto_playing());
        c.handle(Event::Gesture { start: 400.0, end: 330.0 });
        assert_eq!(c.active_index(), 3);
        assert!(c.is_auto_playing());

        c.handle(Event::Gesture { start: 330.0, end: 400.0 });
        assert_eq!(c.active_index(), 2);
    }

    #[test]
    fn short_swipe_does_not_move_but_resumes_autoplay() {
        let mut c = carousel(5);
        c.handle(Event::GestureStarted);
        c.handle(Event::Gesture { start: 400.0, end: 370.0 });
        assert_eq!(c.active_index(), 0);
        assert!(c.is_auto_playing());
    }

    #[test]
    fn swipe_threshold_is_configurable() {
        let config = CarouselConfig::default().with_swipe_threshold(100.0);
        let mut c = Carousel::new(vec!['a', 'b', 'c'], 3, config).unwrap();
        c.handle(Event::Gesture { start: 400.0, end: 330.0 });
        assert_eq!(c.active_index(), 0);
        c.handle(Event::Gesture { start: 400.0, end: 290.0 });
        assert_eq!(c.active_index(), 1);
    }

    #[test]
    fn indicator_mismatch_is_tolerated() {
        let mut c = Carousel::new(vec!["first", "second"], 3, CarouselConfig::default()).unwrap();
        c.handle(Event::IndicatorActivated(1));
        assert_eq!(c.active_index(), 1);

        c.handle(Event::IndicatorActivated(2));
        assert_eq!(c.active_index(), 1);
        assert!(c.is_auto_playing());
        assert!(!c.indicators()[2].is_active());
    }

    #[test]
    fn fewer_indicators_than_items() {
        let mut c = Carousel::new(vec![1, 2, 3], 0, CarouselConfig::default()).unwrap();
        assert!(c.indicators().is_empty());
        c.next();
        c.handle(Event::IndicatorActivated(0));
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn arrow_keys_need_visible_carousel() {
        let mut c = carousel(4);
        c.handle(Event::KeyPressed(Key::ArrowRight));
        assert_eq!(c.active_index(), 0);

        let mut c = visible(c);
        c.handle(Event::KeyPressed(Key::ArrowRight));
        assert_eq!(c.active_index(), 1);
        c.handle(Event::KeyPressed(Key::ArrowLeft));
        c.handle(Event::KeyPressed(Key::ArrowLeft));
        assert_eq!(c.active_index(), 3);
        c.handle(Event::KeyPressed(Key::Other));
        assert_eq!(c.active_index(), 3);

        c.set_layout(Bounds::new(-500.0, -140.0), 720.0);
        c.handle(Event::KeyPressed(Key::ArrowRight));
        assert_eq!(c.active_index(), 3);
    }

    #[test]
    fn hover_pauses_until_pointer_leaves() {
        let mut c = carousel(3);
        c.update(ms(4000));
        c.handle(Event::PointerEntered);
        assert!(!c.is_auto_playing());
        assert_eq!(c.update(ms(60_000)), 0);
        assert_eq!(c.active_index(), 0);

        c.handle(Event::PointerLeft);
        assert_eq!(c.time_to_next_advance(), Some(ms(8000)));
        c.update(ms(8000));
        assert_eq!(c.active_index(), 1);
    }

    #[test]
    fn large_step_fires_every_elapsed_period() {
        let mut c = carousel(5);
        assert_eq!(c.update(ms(24_000)), 3);
        assert_eq!(c.active_index(), 3);
    }

    #[test]
    fn instances_are_independent() {
        let mut a = carousel(3);
        let mut b = carousel(3);
        a.next();
        b.stop_auto_play();
        a.update(ms(8000));
        b.update(ms(8000));
        assert_eq!(a.active_index(), 2);
        assert_eq!(b.active_index(), 0);
    }

    #[test]
    fn single_item_wraps_onto_itself() {
        let mut c = carousel(1);
        c.next();
        c.prev();
        c.update(ms(16_000));
        assert_eq!(c.active_index(), 0);
        assert_eq!(*c.active_item(), 0);
    }
}
