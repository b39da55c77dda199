use std::time::Duration;

pub const AUTOPLAY_DELAY: Duration = Duration::from_millis(8000); // Default time between automatic advances
pub const SWIPE_THRESHOLD: f32 = 50.0;                            // Minimum horizontal drag (pixels) that counts as a swipe

pub const WINDOW_WIDTH: i32 = 1280;           // Width of the demo window
pub const WINDOW_HEIGHT: i32 = 720;           // Height of the demo window
pub const FPS: u32 = 60;                      // Frames per second

pub const CAROUSEL_HEIGHT: f32 = 360.0;       // Height of the carousel panel (pixels)
pub const PAGE_HEIGHT: f32 = 2400.0;          // Height of the scrollable page hosting the carousel
pub const SCROLL_SPEED: f32 = 60.0;           // Pixels scrolled per mouse wheel notch

pub const FADE_DURATION: f32 = 0.5;           // Opacity transition of the active quote (seconds)
pub const FADE_DELAY: f32 = 0.1;              // Delay before the incoming quote starts fading in (seconds)
