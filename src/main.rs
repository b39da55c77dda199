use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use quote_carousel::constants::*;
use quote_carousel::quotes::{builtin_quotes, load_quotes};
use quote_carousel::{Carousel, CarouselConfig};

mod view;

use crate::view::QuoteView;

#[derive(Parser, Debug)]
#[command(name = "quote-carousel")]
#[command(about = "Cycle through quotes with autoplay, buttons, dots, arrow keys and swipes")]
struct Args {
    /// TOML file of [[quote]] tables, or a directory of such files
    quotes: Option<PathBuf>,

    /// Carousel settings file (autoplay_delay_ms, swipe_threshold)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Time between automatic advances, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Minimum horizontal drag, in pixels, that counts as a swipe
    #[arg(long)]
    swipe_threshold: Option<f32>,

    /// Number of indicator dots (defaults to the number of quotes)
    #[arg(long)]
    indicators: Option<usize>,

    /// Shuffle the quotes once at startup
    #[arg(long)]
    shuffle: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &Args) -> Result<CarouselConfig> {
    let mut config = match &args.config {
        Some(path) => CarouselConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CarouselConfig::default(),
    };
    if let Some(delay_ms) = args.delay_ms {
        config = config.with_autoplay_delay(Duration::from_millis(delay_ms));
    }
    if let Some(threshold) = args.swipe_threshold {
        config = config.with_swipe_threshold(threshold);
    }
    config.validate().context("invalid carousel settings")?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = load_config(&args)?;

    // --- Load Quotes ---
    let mut quotes = match &args.quotes {
        Some(path) => load_quotes(path)
            .with_context(|| format!("loading quotes from {}", path.display()))?,
        None => builtin_quotes(),
    };
    if args.shuffle {
        quotes.shuffle(&mut rand::rng());
    }

    let indicator_count = args.indicators.unwrap_or(quotes.len());
    let Some(mut carousel) = Carousel::new(quotes, indicator_count, config) else {
        warn!("no quotes to show");
        return Ok(());
    };
    info!(
        quotes = carousel.len(),
        indicators = indicator_count,
        delay_ms = config.autoplay_delay.as_millis() as u64,
        "carousel ready"
    );

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Quote Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut view = QuoteView::new();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time().max(0.0);

        // 1. Input, dispatched in arrival order
        let events = view.poll_events(&mut rl, carousel.indicators().len());
        carousel.set_layout(view.bounds(), rl.get_screen_height() as f32);
        for event in events {
            carousel.handle(event);
        }

        // 2. Autoplay clock and quote fade
        carousel.update(Duration::from_secs_f32(dt));
        view.update(dt, carousel.active_index());

        // 3. Render
        let mut d = rl.begin_drawing(&thread);
        view.draw(&mut d, &carousel);
    }

    info!("window closed");
    Ok(())
}
