//! Quote carousel: a bounded carousel controller cycling through a fixed set
//! of quotes under button, indicator, keyboard, hover, swipe and autoplay
//! input, independent of any UI toolkit.

pub mod carousel;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod quotes;
pub mod slide;
pub mod state;
pub mod timer;
pub mod viewport;

pub use carousel::Carousel;
pub use config::CarouselConfig;
pub use error::{Error, Result};
pub use event::{Direction, Event, Key};
pub use quotes::Quote;
pub use viewport::Bounds;
