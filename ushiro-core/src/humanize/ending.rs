use rand::Rng;
use rand::seq::IndexedRandom;
use regex::Regex;
use tracing::debug;

use crate::error::{HumanizeError, HumanizeResult};
use super::levels::chance;

/// Sentence delimiter used for splitting and rejoining.
pub const FULL_STOP: &str = "。";

/// Ending table in priority order: the first tail that matches is the only
/// one attempted for a sentence, so longer tails sit above their suffixes.
const STANDARD_ENDINGS: &[(&str, &[&str])] = &[
	("と思います", &["と思う", "と思うんですよね", "かなって思います"]),
	("でしょうか", &["かな", "でしょうかね"]),
	("ですか", &["なの", "ですかね"]),
	("でございます", &["です"]),
	("いたします", &["します", "しますね"]),
	("ました", &["ましたね", "ましたよ"]),
	("ません", &["ませんね", "ませんよ"]),
	("ください", &["くださいね"]),
	("ます", &["ますね", "ますよ"]),
	("でした", &["だった", "でしたね"]),
	("でしょう", &["だろうね", "でしょうね"]),
	("です", &["だよ", "なんだ", "ですね"]),
	("である", &["だ", "なんだ"]),
];

/// A tail pattern with its casual replacements.
///
/// # Invariants
/// - `pattern` is anchored at the end of the sentence
/// - `candidates` is non-empty
#[derive(Debug, Clone)]
pub struct EndingRule {
	pattern: Regex,
	candidates: Vec<String>,
}

impl EndingRule {
	/// Builds a rule from an unanchored tail regex.
	///
	/// # Errors
	/// Returns `InvalidPattern` if the regex does not compile or no
	/// candidate is given.
	pub fn new<I, S>(tail: &str, candidates: I) -> HumanizeResult<Self>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let candidates: Vec<String> = candidates.into_iter().map(Into::into).collect();
		if candidates.is_empty() {
			return Err(HumanizeError::InvalidPattern {
				pattern: tail.to_owned(),
				reason: "ending rule needs at least one candidate".to_owned(),
			});
		}
		let pattern = Regex::new(&format!("(?:{tail})$")).map_err(|e| HumanizeError::InvalidPattern {
			pattern: tail.to_owned(),
			reason: e.to_string(),
		})?;
		Ok(Self { pattern, candidates })
	}

	/// Byte offset where the matched tail starts, if the sentence ends with it.
	fn tail_start(&self, sentence: &str) -> Option<usize> {
		self.pattern.find(sentence).map(|m| m.start())
	}
}

/// Ordered list of ending rules.
#[derive(Debug, Clone)]
pub struct EndingRules {
	rules: Vec<EndingRule>,
}

impl EndingRules {
	pub fn new(rules: Vec<EndingRule>) -> Self {
		Self { rules }
	}

	/// The built-in polite → casual ending table.
	pub fn standard() -> HumanizeResult<Self> {
		let rules = STANDARD_ENDINGS
			.iter()
			.map(|(tail, candidates)| EndingRule::new(tail, candidates.iter().copied()))
			.collect::<HumanizeResult<Vec<_>>>()?;
		Ok(Self::new(rules))
	}

	pub fn len(&self) -> usize {
		self.rules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	/// Splits `text` into sentences, rewrites their endings and rejoins them.
	///
	/// # Behavior
	/// - Splits on `。` and drops empty fragments (so a trailing `。` is lost
	///   here and restored by the finisher).
	/// - For each sentence, the first rule whose tail matches is attempted
	///   with probability `probability`; hit or miss, no other rule is tried.
	/// - Fragments are rejoined with `。`.
	pub fn apply<R: Rng + ?Sized>(&self, text: &str, probability: f32, rng: &mut R) -> String {
		text.split(FULL_STOP)
			.filter(|fragment| !fragment.is_empty())
			.map(|sentence| self.rewrite_sentence(sentence, probability, rng))
			.collect::<Vec<_>>()
			.join(FULL_STOP)
	}

	fn rewrite_sentence<R: Rng + ?Sized>(&self, sentence: &str, probability: f32, rng: &mut R) -> String {
		for rule in &self.rules {
			let Some(start) = rule.tail_start(sentence) else { continue };
			if chance(rng, probability) {
				if let Some(candidate) = rule.candidates.choose(rng) {
					debug!("Rewriting ending of {} with {}", sentence, candidate);
					return format!("{}{}", &sentence[..start], candidate);
				}
			}
			break;
		}
		sentence.to_owned()
	}
}
