use std::sync::Arc;

use rand::Rng;
use tracing::{debug, warn};

use crate::error::HumanizeResult;
use crate::lexicon::Lexicon;
use crate::tokenizer::{LexiconTokenizer, Tokenizer};
use super::finisher::finish;
use super::levels::Levels;
use super::noise::inject;
use super::substitution::substitute;
use super::tables::RuleTables;

/// High-level rewrite pipeline.
///
/// # Responsibilities
/// - Segment the input with the shared tokenizer
/// - Run substitution, filler injection, ending rewrites, grammar repair
///   and finishing, in that order
/// - Never fail: without a working tokenizer the input comes back unchanged
///
/// The struct is immutable after construction and can be shared across
/// threads as is.
pub struct Humanizer {
	tokenizer: Option<Arc<dyn Tokenizer>>,
	tables: RuleTables,
}

impl Humanizer {
	/// Creates a humanizer.
	///
	/// `tokenizer` is `None` when the tokenizer failed to initialize; the
	/// humanizer then runs in pass-through mode.
	pub fn new(tokenizer: Option<Arc<dyn Tokenizer>>, tables: RuleTables) -> Self {
		if tokenizer.is_none() {
			warn!("No tokenizer available, humanizer will return its input unchanged");
		}
		Self { tokenizer, tables }
	}

	/// Creates a humanizer with the built-in lexicon and a tokenizer that
	/// knows every lexicon key.
	///
	/// # Errors
	/// Returns an error if a built-in pattern fails to compile.
	pub fn builtin() -> HumanizeResult<Self> {
		Self::from_lexicon(Lexicon::builtin())
	}

	/// Creates a humanizer around `lexicon` with the standard tables.
	pub fn from_lexicon(lexicon: Lexicon) -> HumanizeResult<Self> {
		let tokenizer = LexiconTokenizer::new(lexicon.words());
		let tables = RuleTables::standard(lexicon)?;
		Ok(Self::new(Some(Arc::new(tokenizer)), tables))
	}

	pub fn tables(&self) -> &RuleTables {
		&self.tables
	}

	/// Returns `true` when running without a tokenizer.
	pub fn is_degraded(&self) -> bool {
		self.tokenizer.is_none()
	}

	/// Rewrites `text` using the thread-local random generator.
	pub fn humanize(&self, text: &str, levels: &Levels) -> String {
		self.humanize_with_rng(text, levels, &mut rand::rng())
	}

	/// Rewrites `text` drawing every random decision from `rng`.
	///
	/// # Behavior
	/// - Empty text comes back empty.
	/// - Missing or failing tokenizer: `text` comes back unchanged.
	pub fn humanize_with_rng<R: Rng + ?Sized>(&self, text: &str, levels: &Levels, rng: &mut R) -> String {
		if text.is_empty() {
			return String::new();
		}

		let Some(tokenizer) = &self.tokenizer else {
			return text.to_owned();
		};
		let tokens = match tokenizer.segment(text) {
			Ok(tokens) => tokens,
			Err(e) => {
				warn!("Tokenizer failed, returning input unchanged: {e}");
				return text.to_owned();
			}
		};
		debug!("Segmented {} tokens", tokens.len());

		let tokens = substitute(tokens, &self.tables.lexicon, levels.substitution_probability(), rng);
		let buffer = inject(&tokens, &self.tables.fillers, levels.noise_probability(), rng);
		let buffer = self.tables.endings.apply(&buffer, levels.ending_probability(), rng);
		let buffer = self.tables.repairs.apply(&buffer);
		finish(text, &buffer)
	}
}
