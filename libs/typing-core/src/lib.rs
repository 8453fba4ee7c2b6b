//! Core typing test library shared by the race server and its clients.
//!
//! Provides:
//! - Accuracy and words-per-minute scoring
//! - Bounded diff functions (substitutions, edit distance, transpositions)
//! - Autocorrect built on a pluggable diff function
//! - Multiplayer match timing, fastest words and progress reports
//! - Paragraph selection by topic

pub mod autocorrect;
pub mod diff;
pub mod error;
pub mod paragraph;
pub mod race;
pub mod scoring;
pub mod text;
pub mod types;

pub use autocorrect::{autocorrect, autocorrect_transcript, autocorrect_with};
pub use diff::{final_diff, minimum_mewtations, sphinx_swaps, DiffResult};
pub use error::{Axis, Result, TypingError};
pub use paragraph::{about, choose};
pub use race::{report_progress, Match};
pub use scoring::{accuracy, score, wpm};
pub use text::split;
pub use types::{AutocorrectSettings, DiffAlgorithm, ProgressRecord, TypingScore};
