//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `newsdash_core` linkage and print the core version.
//! - Start core file logging under the default log directory.
//! - Render the seeded feed for an optional category and tab.
//!
//! Usage: `newsdash [category] [latest|popular|trending]`

use newsdash_core::{
    core_version, default_log_dir, init_logging, CategoryFilter, FeedConfig, FeedIntent,
    FeedSession, FeedView, LogLevel, MockFeedSource, ViewMode,
};
use std::process::ExitCode;
use std::time::{Duration, Instant};

fn main() -> ExitCode {
    println!("newsdash_core version={}", core_version());
    if let Err(err) = init_logging(LogLevel::build_default().as_str(), default_log_dir()) {
        eprintln!("logging disabled: {err}");
    }

    let mut args = std::env::args().skip(1);
    let category = match args.next().map(|value| value.parse::<CategoryFilter>()) {
        Some(Ok(filter)) => filter,
        Some(Err(err)) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
        None => CategoryFilter::All,
    };
    let mode = match args.next().map(|value| value.parse::<ViewMode>()) {
        Some(Ok(mode)) => mode,
        Some(Err(err)) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
        None => ViewMode::Latest,
    };

    let config = FeedConfig::default().with_load_delay(Duration::ZERO);
    let mut session = FeedSession::start(config, MockFeedSource, Instant::now());
    if let Err(err) = session.poll(Instant::now()) {
        eprintln!("feed load failed: {err}");
        return ExitCode::FAILURE;
    }
    session.dispatch(FeedIntent::SelectCategory(category));
    session.dispatch(FeedIntent::SelectViewMode(mode));

    print_feed(&session.render_now());
    ExitCode::SUCCESS
}

fn print_feed(view: &FeedView) {
    println!("# {} [{}]", view.heading, view.mode.label());
    if let Some(message) = view.empty_message {
        println!("{message}");
        return;
    }
    for card in &view.cards {
        println!(
            "{:>4}  {}  ({}, {}, {} comments)",
            card.votes, card.title, card.category, card.date, card.comment_count
        );
    }
}
