use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HumanizeError, HumanizeResult};
use crate::io::read_word_list;

/// A single segmented unit of the input text.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Token {
	/// Literal text as it appears in the source string.
	pub surface: String,
}

impl Token {
	pub fn new(surface: impl Into<String>) -> Self {
		Self { surface: surface.into() }
	}
}

/// Splits raw text into an ordered sequence of surface-form tokens.
///
/// Implementations are built once at startup and shared read-only between
/// concurrent requests, hence the `Send + Sync` bound.
pub trait Tokenizer: Send + Sync {
	/// Segments `text`.
	///
	/// Concatenating the returned surfaces must reproduce `text`.
	fn segment(&self, text: &str) -> HumanizeResult<Vec<Token>>;
}

/// Character classes used to group unknown text into runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Script {
	Kanji,
	Hiragana,
	Katakana,
	Alphanumeric,
	Space,
	/// Punctuation and anything else: always a one-character token.
	Other,
}

impl Script {
	fn of(c: char) -> Self {
		match c {
			'々' | '〆' | '\u{3400}'..='\u{4DBF}' | '\u{4E00}'..='\u{9FFF}' | '\u{F900}'..='\u{FAFF}' => Script::Kanji,
			'\u{3041}'..='\u{309F}' => Script::Hiragana,
			'ー' | '\u{30A0}'..='\u{30FA}' | '\u{30FC}'..='\u{30FF}' | '\u{FF66}'..='\u{FF9F}' => Script::Katakana,
			'０'..='９' | 'Ａ'..='Ｚ' | 'ａ'..='ｚ' => Script::Alphanumeric,
			c if c.is_ascii_alphanumeric() => Script::Alphanumeric,
			c if c.is_whitespace() => Script::Space,
			_ => Script::Other,
		}
	}
}

/// Longest-unit segmenter driven by a word list.
///
/// # Behavior
/// - At each position the longest known word starting there is emitted.
/// - Otherwise a run of characters sharing the same script is emitted,
///   stopping early where a known word begins.
/// - Punctuation and symbols are emitted one character at a time.
///
/// # Invariants
/// - No empty word is ever stored
/// - `max_word_chars` is the character length of the longest stored word
#[derive(Debug, Clone, Default)]
pub struct LexiconTokenizer {
	words: HashSet<String>,
	max_word_chars: usize,
}

impl LexiconTokenizer {
	/// Creates a segmenter knowing the given words.
	pub fn new<I, S>(words: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut tokenizer = Self::default();
		tokenizer.extend(words);
		tokenizer
	}

	/// Creates a segmenter from `words` plus a user dictionary file
	/// (one word per line, `#` comments allowed).
	///
	/// # Errors
	/// Returns `TokenizerUnavailable` if the dictionary cannot be read.
	pub fn with_user_dictionary<I, S, P>(words: I, path: P) -> HumanizeResult<Self>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
		P: AsRef<Path>,
	{
		let user_words = read_word_list(&path).map_err(|e| {
			HumanizeError::TokenizerUnavailable(format!("{}: {e}", path.as_ref().display()))
		})?;
		let mut tokenizer = Self::new(words);
		tokenizer.extend(user_words);
		Ok(tokenizer)
	}

	/// Adds words to the known set.
	pub fn extend<I, S>(&mut self, words: I)
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		for word in words {
			let word = word.as_ref();
			if word.is_empty() {
				continue;
			}
			self.max_word_chars = self.max_word_chars.max(word.chars().count());
			self.words.insert(word.to_owned());
		}
	}

	/// Returns the number of known words.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Length (in chars) of the longest known word starting at `chars[start..]`.
	fn longest_match(&self, chars: &[char], start: usize) -> Option<usize> {
		let limit = self.max_word_chars.min(chars.len() - start);
		(1..=limit)
			.rev()
			.find(|&len| self.words.contains(&chars[start..start + len].iter().collect::<String>()))
	}

	/// Length (in chars) of the same-script run starting at `chars[start..]`.
	fn script_run(&self, chars: &[char], start: usize) -> usize {
		let script = Script::of(chars[start]);
		if script == Script::Other {
			return 1;
		}
		let mut end = start + 1;
		while end < chars.len()
			&& Script::of(chars[end]) == script
			&& self.longest_match(chars, end).is_none()
		{
			end += 1;
		}
		end - start
	}
}

impl Tokenizer for LexiconTokenizer {
	fn segment(&self, text: &str) -> HumanizeResult<Vec<Token>> {
		let chars: Vec<char> = text.chars().collect();
		let mut tokens = Vec::new();
		let mut position = 0;

		while position < chars.len() {
			let len = match self.longest_match(&chars, position) {
				Some(len) => len,
				None => self.script_run(&chars, position),
			};
			tokens.push(Token::new(chars[position..position + len].iter().collect::<String>()));
			position += len;
		}

		Ok(tokens)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn surfaces(tokens: &[Token]) -> Vec<&str> {
		tokens.iter().map(|t| t.surface.as_str()).collect()
	}

	#[test]
	fn splits_on_script_changes() {
		let tokenizer = LexiconTokenizer::default();
		let tokens = tokenizer.segment("資料を提供します。").unwrap();
		assert_eq!(surfaces(&tokens), vec!["資料", "を", "提供", "します", "。"]);
	}

	#[test]
	fn known_words_break_script_runs() {
		let tokenizer = LexiconTokenizer::new(["提供"]);
		let tokens = tokenizer.segment("資料提供です").unwrap();
		assert_eq!(surfaces(&tokens), vec!["資料", "提供", "です"]);
	}

	#[test]
	fn longest_known_word_wins() {
		let tokenizer = LexiconTokenizer::new(["非常", "非常に"]);
		let tokens = tokenizer.segment("非常に重要").unwrap();
		assert_eq!(surfaces(&tokens), vec!["非常に", "重要"]);
	}

	#[test]
	fn punctuation_is_split_per_character() {
		let tokenizer = LexiconTokenizer::default();
		let tokens = tokenizer.segment("はい。。OK!").unwrap();
		assert_eq!(surfaces(&tokens), vec!["はい", "。", "。", "OK", "!"]);
	}

	#[test]
	fn concatenation_reproduces_input() {
		let tokenizer = LexiconTokenizer::new(["本日", "いたします"]);
		let text = "本日はABC 123について、ご説明いたします。\nカタカナー！";
		let tokens = tokenizer.segment(text).unwrap();
		let joined: String = tokens.iter().map(|t| t.surface.as_str()).collect();
		assert_eq!(joined, text);
	}

	#[test]
	fn empty_input_yields_no_tokens() {
		assert!(LexiconTokenizer::default().segment("").unwrap().is_empty());
	}

	#[test]
	fn unreadable_user_dictionary_is_unavailable() {
		let result = LexiconTokenizer::with_user_dictionary(["提供"], "./missing/user.dic");
		assert!(matches!(result, Err(HumanizeError::TokenizerUnavailable(_))));
	}
}
