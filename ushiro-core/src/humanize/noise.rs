use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

use crate::tokenizer::Token;
use super::levels::chance;

const DEFAULT_FILLERS: &[&str] = &[
	"えっと、",
	"まあ、",
	"なんか、",
	"あの、",
	"正直、",
	"ぶっちゃけ、",
	"ちなみに、",
];

/// Conversational filler phrases, one of which is picked per injection site.
#[derive(Debug, Clone)]
pub struct FillerSet {
	fillers: Vec<String>,
}

impl Default for FillerSet {
	fn default() -> Self {
		Self::new(DEFAULT_FILLERS.iter().copied())
	}
}

impl FillerSet {
	/// Creates a filler set, ignoring blank entries.
	pub fn new<I, S>(fillers: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Self {
			fillers: fillers
				.into_iter()
				.filter(|f| !f.as_ref().trim().is_empty())
				.map(|f| f.as_ref().to_owned())
				.collect(),
		}
	}

	pub fn len(&self) -> usize {
		self.fillers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fillers.is_empty()
	}

	pub fn contains(&self, filler: &str) -> bool {
		self.fillers.iter().any(|f| f == filler)
	}

	fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		self.fillers.choose(rng).map(String::as_str)
	}
}

/// Reassembles tokens into one buffer, prepending fillers at random.
///
/// Each token independently receives a filler with probability
/// `probability`, wherever it sits in the sentence. An empty filler set
/// injects nothing.
pub fn inject<R: Rng + ?Sized>(
	tokens: &[Token],
	fillers: &FillerSet,
	probability: f32,
	rng: &mut R,
) -> String {
	let mut buffer = String::new();
	for token in tokens {
		if !fillers.is_empty() && chance(rng, probability) {
			if let Some(filler) = fillers.choose(rng) {
				debug!("Injecting filler {} before {}", filler, token.surface);
				buffer.push_str(filler);
			}
		}
		buffer.push_str(&token.surface);
	}
	buffer
}
