use raylib::prelude::*;

use quote_carousel::constants::*;
use quote_carousel::{Bounds, Carousel, Direction, Event, Key, Quote};

const CAROUSEL_TOP: f32 = 260.0;     // Position of the carousel on the page
const MARGIN: f32 = 80.0;            // Horizontal page margin
const BUTTON_WIDTH: f32 = 44.0;
const BUTTON_HEIGHT: f32 = 64.0;
const DOT_SPACING: f32 = 26.0;
const DOT_RADIUS: f32 = 6.0;
const QUOTE_FONT_SIZE: i32 = 30;
const WRAP_CHARS: usize = 52;        // Line length used to wrap quote text

const BACKGROUND: Color = Color::new(13, 11, 14, 255);
const PANEL: Color = Color::new(30, 26, 32, 255);
const ACCENT: Color = Color::new(201, 162, 90, 255);
const MUTED: Color = Color::new(120, 112, 118, 255);

/// Translates raylib input into carousel events and draws the page hosting
/// the carousel.
pub struct QuoteView {
    scroll: f32,
    hovered: bool,
    drag_start: Option<f32>,

    shown_index: usize,
    opacity: f32,
    fade_delay: f32,
    tween_fade: ease::Tween,
}

impl QuoteView {
    pub fn new() -> Self {
        Self {
            scroll: 0.0,
            hovered: false,
            drag_start: None,
            shown_index: 0,
            opacity: 0.0,
            fade_delay: FADE_DELAY,
            tween_fade: ease::Tween::new(ease::cubic_out, 0.0, 1.0, FADE_DURATION),
        }
    }

    // --- Layout ---

    fn carousel_rect(&self, screen_width: f32) -> Rectangle {
        Rectangle::new(
            MARGIN,
            CAROUSEL_TOP - self.scroll,
            screen_width - MARGIN * 2.0,
            CAROUSEL_HEIGHT,
        )
    }

    fn button_rect(&self, panel: Rectangle, direction: Direction) -> Rectangle {
        let y = panel.y + (panel.height - BUTTON_HEIGHT) * 0.5;
        match direction {
            Direction::Previous => Rectangle::new(panel.x + 12.0, y, BUTTON_WIDTH, BUTTON_HEIGHT),
            Direction::Next => Rectangle::new(
                panel.x + panel.width - 12.0 - BUTTON_WIDTH,
                y,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            ),
        }
    }

    fn dot_center(&self, panel: Rectangle, index: usize, count: usize) -> Vector2 {
        let row_width = DOT_SPACING * count.saturating_sub(1) as f32;
        Vector2::new(
            panel.x + (panel.width - row_width) * 0.5 + DOT_SPACING * index as f32,
            panel.y + panel.height - 28.0,
        )
    }

    fn dot_hit_rect(&self, center: Vector2) -> Rectangle {
        let half = DOT_SPACING * 0.5;
        Rectangle::new(center.x - half, center.y - half, DOT_SPACING, DOT_SPACING)
    }

    /// Where the carousel sits relative to the top of the window.
    pub fn bounds(&self) -> Bounds {
        let top = CAROUSEL_TOP - self.scroll;
        Bounds::new(top, top + CAROUSEL_HEIGHT)
    }

    // --- Input ---

    /// Reads this frame's input and returns the carousel events it produced.
    pub fn poll_events(&mut self, rl: &mut RaylibHandle, indicator_count: usize) -> Vec<Event> {
        let mut events = Vec::new();

        let screen_height = rl.get_screen_height() as f32;
        let max_scroll = (PAGE_HEIGHT - screen_height).max(0.0);
        self.scroll = (self.scroll - rl.get_mouse_wheel_move() * SCROLL_SPEED).clamp(0.0, max_scroll);

        while let Some(key) = rl.get_key_pressed() {
            let key = match key {
                KeyboardKey::KEY_LEFT => Key::ArrowLeft,
                KeyboardKey::KEY_RIGHT => Key::ArrowRight,
                _ => Key::Other,
            };
            events.push(Event::KeyPressed(key));
        }

        let panel = self.carousel_rect(rl.get_screen_width() as f32);
        let mouse = rl.get_mouse_position();

        let hovered = panel.check_collision_point_rec(mouse);
        if hovered != self.hovered {
            self.hovered = hovered;
            events.push(if hovered {
                Event::PointerEntered
            } else {
                Event::PointerLeft
            });
        }

        if hovered && rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(event) = self.click_target(panel, mouse, indicator_count) {
                events.push(event);
            } else {
                self.drag_start = Some(mouse.x);
                events.push(Event::GestureStarted);
            }
        }

        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(start) = self.drag_start.take() {
                events.push(Event::Gesture { start, end: mouse.x });
                // Releasing over the panel keeps the pointer inside it.
                if self.hovered {
                    events.push(Event::PointerEntered);
                }
            }
        }

        events
    }

    fn click_target(&self, panel: Rectangle, mouse: Vector2, indicator_count: usize) -> Option<Event> {
        for direction in [Direction::Previous, Direction::Next] {
            if self.button_rect(panel, direction).check_collision_point_rec(mouse) {
                return Some(Event::ControlActivated(direction));
            }
        }
        (0..indicator_count)
            .find(|&i| {
                self.dot_hit_rect(self.dot_center(panel, i, indicator_count))
                    .check_collision_point_rec(mouse)
            })
            .map(Event::IndicatorActivated)
    }

    // --- Animation ---

    pub fn update(&mut self, dt: f32, active_index: usize) {
        if active_index != self.shown_index {
            self.shown_index = active_index;
            self.opacity = 0.0;
            self.fade_delay = FADE_DELAY;
            self.tween_fade = ease::Tween::new(ease::cubic_out, 0.0, 1.0, FADE_DURATION);
        }

        if self.fade_delay > 0.0 {
            self.fade_delay -= dt;
            return;
        }
        self.opacity = self.tween_fade.apply(dt).clamp(0.0, 1.0);
    }

    // --- Drawing ---

    pub fn draw(&self, d: &mut RaylibDrawHandle, carousel: &Carousel<Quote>) {
        d.clear_background(BACKGROUND);

        let screen_width = d.get_screen_width() as f32;
        let page_y = |y: f32| (y - self.scroll) as i32;

        d.draw_text("Dostoevsky", MARGIN as i32, page_y(80.0), 56, ACCENT);
        d.draw_text("Literature Embracing History", MARGIN as i32, page_y(150.0), 24, MUTED);
        for (i, heading) in ["Family", "Works", "Anna", "Timeline"].iter().enumerate() {
            let y = CAROUSEL_TOP + CAROUSEL_HEIGHT + 120.0 + i as f32 * 400.0;
            d.draw_text(heading, MARGIN as i32, page_y(y), 36, MUTED);
            d.draw_rectangle_lines(
                MARGIN as i32,
                page_y(y + 56.0),
                (screen_width - MARGIN * 2.0) as i32,
                260,
                PANEL,
            );
        }

        let panel = self.carousel_rect(screen_width);
        d.draw_rectangle_rec(panel, PANEL);

        let alpha = (self.opacity * 255.0) as u8;
        let quote = carousel.active_item();
        let lines = wrap_text(&quote.text, WRAP_CHARS);
        let mut y = panel.y + 60.0;
        for line in &lines {
            d.draw_text(
                line,
                (panel.x + 80.0) as i32,
                y as i32,
                QUOTE_FONT_SIZE,
                Color::new(235, 225, 210, alpha),
            );
            y += QUOTE_FONT_SIZE as f32 + 10.0;
        }
        d.draw_text(
            &format!("- {}", quote.attribution()),
            (panel.x + 80.0) as i32,
            (y + 16.0) as i32,
            20,
            Color::new(ACCENT.r, ACCENT.g, ACCENT.b, alpha),
        );

        for (direction, label) in [(Direction::Previous, "<"), (Direction::Next, ">")] {
            let button = self.button_rect(panel, direction);
            d.draw_rectangle_lines(
                button.x as i32,
                button.y as i32,
                button.width as i32,
                button.height as i32,
                MUTED,
            );
            d.draw_text(label, (button.x + 14.0) as i32, (button.y + 18.0) as i32, 30, ACCENT);
        }

        let count = carousel.indicators().len();
        for (i, indicator) in carousel.indicators().iter().enumerate() {
            let center = self.dot_center(panel, i, count);
            let color = if indicator.aria_current() { ACCENT } else { MUTED };
            d.draw_circle(center.x as i32, center.y as i32, DOT_RADIUS, color);
        }

        // --- Status line, fixed to the window ---
        let autoplay = match carousel.time_to_next_advance() {
            Some(remaining) => format!("autoplay: next in {:.1}s", remaining.as_secs_f32()),
            None => "autoplay: paused".to_string(),
        };
        let keyboard = if carousel.is_in_viewport() {
            "arrows: active"
        } else {
            "arrows: off screen"
        };
        let status = format!(
            "{} / {}   {}   {}",
            carousel.active_index() + 1,
            carousel.len(),
            autoplay,
            keyboard
        );
        let bottom = d.get_screen_height() - 30;
        d.draw_text(&status, 20, bottom, 20, MUTED);
    }
}

/// Greedy word wrap on character count.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::wrap_text;

    #[test]
    fn wraps_on_word_boundaries() {
        let lines = wrap_text("Beauty will save the world.", 12);
        assert_eq!(lines, ["Beauty will", "save the", "world."]);
    }

    #[test]
    fn long_words_get_their_own_line() {
        let lines = wrap_text("a incomprehensibilities b", 5);
        assert_eq!(lines, ["a", "incomprehensibilities", "b"]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(wrap_text("   ", 10).is_empty());
    }
}
