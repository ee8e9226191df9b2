//! Top-level module for the rewrite pipeline.
//!
//! The pipeline turns stiff Japanese text into a casual rewrite:
//! - Lexical substitution (`substitution`)
//! - Filler injection and reassembly (`noise`)
//! - Sentence ending rewrites (`ending`)
//! - Grammar repair of the damage done by the steps above (`repair`)
//! - Punctuation cleanup (`finisher`)
//!
//! `Humanizer` wires the stages together; `RuleTables` holds their data.

/// High-level interface running the whole pipeline on one request.
pub mod humanizer;

/// Request sliders and the probabilities derived from them.
pub mod levels;

/// Probabilistic replacement of lexicon words by casual candidates.
pub mod substitution;

/// Filler phrases and their injection in front of tokens.
pub mod noise;

/// Sentence splitting and tail-pattern ending rewrites.
///
/// At most one rule is attempted per sentence.
pub mod ending;

/// Ordered, deterministic pattern rewrites fixing conjugation breakage.
pub mod repair;

/// Duplicate punctuation cleanup and terminal `。` restoration.
pub mod finisher;

/// Immutable tables shared by every request.
pub mod tables;

pub use humanizer::Humanizer;
pub use levels::Levels;
pub use tables::RuleTables;
