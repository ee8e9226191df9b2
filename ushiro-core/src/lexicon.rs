use std::collections::HashMap;
use std::path::Path;

use tracing::{info, warn};

use crate::error::HumanizeResult;
use crate::io::read_table;

/// Built-in stiff → casual vocabulary, used when no dictionary file is configured.
///
/// Verb candidates are given in dictionary form; the grammar repair pass
/// re-conjugates them when they land in front of `します` / `した` / `して`.
const BUILTIN: &[(&str, &[&str])] = &[
	("提供", &["シェア", "渡す"]),
	("確認", &["チェック"]),
	("検討", &["考える"]),
	("実施", &["行う"]),
	("利用", &["使う"]),
	("使用", &["使う"]),
	("購入", &["買う"]),
	("送付", &["送る"]),
	("開始", &["始める", "スタート"]),
	("終了", &["終わる"]),
	("理解", &["分かる"]),
	("返信", &["返事"]),
	("重要", &["大事", "大切"]),
	("問題", &["トラブル"]),
	("非常に", &["すごく", "めっちゃ"]),
	("迅速に", &["すぐに", "さっさと"]),
	("誠に", &["本当に"]),
	("本日", &["今日"]),
	("明日", &["あした"]),
	("先日", &["この前"]),
	("少々", &["ちょっと"]),
	("至急", &["急いで"]),
	("御社", &["そちら"]),
	("弊社", &["うち"]),
	("是非", &["ぜひ"]),
	("何卒", &["どうか"]),
	("幸い", &["うれしい"]),
	("致します", &["します"]),
	("いたします", &["します"]),
	("いただき", &["もらい"]),
	("存じます", &["思います"]),
	("申し訳ございません", &["ごめんなさい", "すみません"]),
];

/// Mapping from a surface word to its casual replacement candidates.
///
/// # Invariants
/// - Keys are unique
/// - Every candidate list is non-empty and keeps its declared order
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
	entries: HashMap<String, Vec<String>>,
}

impl Lexicon {
	/// Returns an empty lexicon: every lookup misses.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Returns the built-in business → casual table.
	pub fn builtin() -> Self {
		Self::from_rows(BUILTIN.iter().map(|(key, candidates)| {
			std::iter::once(*key)
				.chain(candidates.iter().copied())
				.map(str::to_owned)
				.collect::<Vec<_>>()
		}))
	}

	/// Builds a lexicon from rows of columns (`key, candidate, candidate, ...`).
	///
	/// # Behavior
	/// - Rows with fewer than two columns are skipped.
	/// - Blank candidates are dropped; a row left without candidates is skipped.
	/// - A blank key skips the row.
	/// - A repeated key replaces the earlier row.
	pub fn from_rows<I, R>(rows: I) -> Self
	where
		I: IntoIterator<Item = R>,
		R: AsRef<[String]>,
	{
		let mut entries = HashMap::new();
		for row in rows {
			let row = row.as_ref();
			let Some((key, rest)) = row.split_first() else { continue };
			let key = key.trim();
			if key.is_empty() || rest.is_empty() {
				continue;
			}
			let candidates: Vec<String> = rest
				.iter()
				.map(|c| c.trim())
				.filter(|c| !c.is_empty())
				.map(str::to_owned)
				.collect();
			if candidates.is_empty() {
				continue;
			}
			entries.insert(key.to_owned(), candidates);
		}
		Self { entries }
	}

	/// Loads a lexicon from a comma or tab separated file.
	///
	/// # Errors
	/// Returns an error if the file cannot be read.
	pub fn load<P: AsRef<Path>>(path: P) -> HumanizeResult<Self> {
		let lexicon = Self::from_rows(read_table(&path)?);
		info!("Loaded {} lexicon entries from {}", lexicon.len(), path.as_ref().display());
		Ok(lexicon)
	}

	/// Loads a lexicon, falling back to an empty one when the file is unusable.
	pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
		match Self::load(&path) {
			Ok(lexicon) => lexicon,
			Err(e) => {
				warn!("Lexicon {} unavailable, substitution disabled: {e}", path.as_ref().display());
				Self::empty()
			}
		}
	}

	/// Returns the candidates declared for `word`, if it is a key.
	pub fn candidates(&self, word: &str) -> Option<&[String]> {
		self.entries.get(word).map(Vec::as_slice)
	}

	/// Iterates over every key.
	pub fn words(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
