//! Exhaustive scoring statistics for five-card cribbage show hands.
//!
//! A show hand is 4 draw cards plus 1 starter. Every one of the
//! 52 x C(51,4) = 12,994,800 (draw, starter) assignments is scored under the
//! five show rules and tallied into a frequency table indexed by score.

pub mod cards;
pub mod scoring;
pub mod tally;

/// Points awarded by a scoring rule. A full show hand never exceeds 29.
pub type Points = u8;

/// Random instance generation for tests and benches.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Initialize terminal logging. INFO and above, no module targets.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
