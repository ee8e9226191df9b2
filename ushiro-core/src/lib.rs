//! Japanese text humanizing library.
//!
//! This crate rewrites stiff, business-style Japanese into a casual voice:
//! - Longest-unit segmentation behind a narrow `Tokenizer` seam
//! - Dictionary-driven synonym substitution
//! - Filler injection and sentence ending rewrites controlled by two sliders
//! - A fixed grammar repair pass and punctuation cleanup
//!
//! Every random decision is drawn from a caller-supplied `rand::Rng`, so
//! results are reproducible under a seeded generator.

/// Error type shared by table construction and tokenizers.
pub mod error;

/// Stiff → casual vocabulary (built-in or loaded from a table file).
pub mod lexicon;

/// Tokenizer seam and the built-in longest-unit segmenter.
pub mod tokenizer;

/// Rewrite pipeline stages and the `Humanizer` driving them.
pub mod humanize;

/// I/O utilities (table and word-list loading).
///
/// Not exposed
pub(crate) mod io;

pub use error::{HumanizeError, HumanizeResult};
pub use humanize::{Humanizer, Levels, RuleTables};
pub use lexicon::Lexicon;
pub use tokenizer::{LexiconTokenizer, Token, Tokenizer};
