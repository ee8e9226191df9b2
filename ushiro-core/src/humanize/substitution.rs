use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

use crate::lexicon::Lexicon;
use crate::tokenizer::Token;
use super::levels::chance;

/// Replaces lexicon words with one of their casual candidates.
///
/// # Behavior
/// - A token whose surface is a lexicon key is replaced with probability
///   `probability` by a uniformly chosen candidate.
/// - Any other token passes through untouched and consumes no randomness.
pub fn substitute<R: Rng + ?Sized>(
	tokens: Vec<Token>,
	lexicon: &Lexicon,
	probability: f32,
	rng: &mut R,
) -> Vec<Token> {
	tokens
		.into_iter()
		.map(|token| {
			let Some(candidates) = lexicon.candidates(&token.surface) else { return token };
			if !chance(rng, probability) {
				return token;
			}
			match candidates.choose(rng) {
				Some(candidate) => {
					debug!("Substituting {} -> {}", token.surface, candidate);
					Token::new(candidate.as_str())
				}
				None => token,
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn lexicon() -> Lexicon {
		Lexicon::from_rows(vec![
			vec!["提供".to_owned(), "シェア".to_owned(), "渡す".to_owned()],
			vec!["本日".to_owned(), "今日".to_owned()],
		])
	}

	fn tokens(surfaces: &[&str]) -> Vec<Token> {
		surfaces.iter().map(|s| Token::new(*s)).collect()
	}

	#[test]
	fn saturated_probability_replaces_every_key() {
		let lexicon = lexicon();
		let mut rng = StdRng::seed_from_u64(1);
		for _ in 0..50 {
			let out = substitute(tokens(&["本日", "は", "提供", "。"]), &lexicon, 1.1, &mut rng);
			assert_eq!(out[0].surface, "今日");
			assert_eq!(out[1].surface, "は");
			assert!(["シェア", "渡す"].contains(&out[2].surface.as_str()));
			assert_eq!(out[3].surface, "。");
		}
	}

	#[test]
	fn zero_probability_keeps_everything() {
		let mut rng = StdRng::seed_from_u64(2);
		let input = tokens(&["本日", "提供"]);
		assert_eq!(substitute(input.clone(), &lexicon(), 0.0, &mut rng), input);
	}

	#[test]
	fn unknown_words_pass_through() {
		let mut rng = StdRng::seed_from_u64(3);
		let input = tokens(&["資料", "を", "読む"]);
		assert_eq!(substitute(input.clone(), &lexicon(), 5.0, &mut rng), input);
	}

	#[test]
	fn empty_lexicon_is_a_no_op() {
		let mut rng = StdRng::seed_from_u64(4);
		let input = tokens(&["提供", "します"]);
		assert_eq!(substitute(input.clone(), &Lexicon::empty(), 1.0, &mut rng), input);
	}
}
