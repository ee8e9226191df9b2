//! End-to-end checks of the rewrite pipeline.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use ushiro_core::humanize::finisher::finish;
use ushiro_core::{HumanizeResult, Humanizer, Levels, Lexicon, RuleTables, Token, Tokenizer};

const FILLERS: &[&str] = &["えっと、", "まあ、", "なんか、", "あの、", "正直、", "ぶっちゃけ、", "ちなみに、"];

fn seeded(seed: u64) -> StdRng {
	StdRng::seed_from_u64(seed)
}

#[test]
fn business_sentence_is_casualized() {
	let humanizer = Humanizer::builtin().unwrap();
	let expected = ["資料をシェアしますね。", "資料をシェアしますよ。", "資料を渡しますね。", "資料を渡しますよ。"];

	for seed in 0..40 {
		let out = humanizer.humanize_with_rng("資料を提供します。", &Levels::new(0.0, 1.0), &mut seeded(seed));
		assert!(expected.contains(&out.as_str()), "unexpected output: {out}");
		assert!(!out.contains("提供"));
		assert!(!out.contains("。。"));
	}
}

#[test]
fn saturated_human_level_replaces_every_key() {
	let humanizer = Humanizer::builtin().unwrap();

	for seed in 0..40 {
		let out = humanizer.humanize_with_rng("本日は誠に重要な会議です。", &Levels::new(0.0, 1.0), &mut seeded(seed));
		assert!(out.starts_with("今日は本当に"), "unexpected output: {out}");
		assert!(out.contains("大事な会議") || out.contains("大切な会議"));
		for key in ["本日", "誠に", "重要"] {
			assert!(!out.contains(key));
		}
	}
}

#[test]
fn forced_ending_keeps_the_full_stop() {
	let humanizer = Humanizer::builtin().unwrap();
	let expected = ["今日は晴れだよ。", "今日は晴れなんだ。", "今日は晴れですね。"];

	for seed in 0..40 {
		let out = humanizer.humanize_with_rng("今日は晴れです。", &Levels::new(0.0, 1.0), &mut seeded(seed));
		assert!(expected.contains(&out.as_str()), "unexpected output: {out}");
	}
}

#[test]
fn noun_endings_are_not_mistaken_for_adjectives() {
	let humanizer = Humanizer::builtin().unwrap();
	let expected = ["それは間違いだよ。", "それは間違いなんだ。", "それは間違いですね。"];

	for seed in 0..20 {
		let out = humanizer.humanize_with_rng("それは間違いです。", &Levels::new(0.0, 1.0), &mut seeded(seed));
		assert!(expected.contains(&out.as_str()), "unexpected output: {out}");
	}
}

#[test]
fn zero_levels_leave_clean_text_alone() {
	let humanizer = Humanizer::builtin().unwrap();
	let text = "本日は資料を提供します。ご確認ください。";
	for seed in 0..20 {
		assert_eq!(humanizer.humanize_with_rng(text, &Levels::new(0.0, 0.0), &mut seeded(seed)), text);
	}
}

#[test]
fn unknown_words_survive_any_human_level() {
	let humanizer = Humanizer::builtin().unwrap();
	for seed in 0..20 {
		let out = humanizer.humanize_with_rng("猫が好きです。", &Levels::new(0.0, 5.0), &mut seeded(seed));
		assert!(out.starts_with("猫が好き"), "unexpected output: {out}");
		assert!(out.ends_with('。'));
	}
}

#[test]
fn saturated_noise_prefixes_fillers() {
	let humanizer = Humanizer::builtin().unwrap();
	let out = humanizer.humanize_with_rng("今日は晴れ", &Levels::new(40.0, 0.0), &mut seeded(3));

	assert!(FILLERS.iter().any(|f| out.starts_with(f)), "unexpected output: {out}");
	let stripped = FILLERS.iter().fold(out.clone(), |acc, f| acc.replace(f, ""));
	assert_eq!(stripped, "今日は晴れ");
}

#[test]
fn outputs_are_already_finished() {
	let humanizer = Humanizer::builtin().unwrap();
	let text = "本日はご利用いただき、誠にありがとうございます。。資料を送付しました！！何卒よろしくお願い致します。";

	for seed in 0..50 {
		let out = humanizer.humanize_with_rng(text, &Levels::new(1.0, 1.0), &mut seeded(seed));
		assert_eq!(finish(text, &out), out);
		assert!(!out.contains("。。"));
		assert!(!out.contains("！！"));
		assert!(!out.contains("、、"));
		assert!(out.ends_with('。'));
	}
}

#[test]
fn same_seed_same_output() {
	let humanizer = Humanizer::builtin().unwrap();
	let text = "先日の件について、迅速に確認します。少々お待ちください。";
	let levels = Levels::new(0.8, 0.6);
	let first = humanizer.humanize_with_rng(text, &levels, &mut seeded(42));
	let second = humanizer.humanize_with_rng(text, &levels, &mut seeded(42));
	assert_eq!(first, second);
}

#[test]
fn empty_lexicon_disables_substitution() {
	let humanizer = Humanizer::from_lexicon(Lexicon::empty()).unwrap();
	for seed in 0..20 {
		let out = humanizer.humanize_with_rng("資料を提供します。", &Levels::new(0.0, 1.0), &mut seeded(seed));
		assert!(out.starts_with("資料を提供します"), "unexpected output: {out}");
	}
}

/// Splits on ASCII spaces only, keeping the spaces as their own tokens.
struct SpaceTokenizer;

impl Tokenizer for SpaceTokenizer {
	fn segment(&self, text: &str) -> HumanizeResult<Vec<Token>> {
		let mut tokens = Vec::new();
		for (i, word) in text.split(' ').enumerate() {
			if i > 0 {
				tokens.push(Token::new(" "));
			}
			if !word.is_empty() {
				tokens.push(Token::new(word));
			}
		}
		Ok(tokens)
	}
}

#[test]
fn any_tokenizer_can_be_plugged_in() {
	let tables = RuleTables::standard(Lexicon::builtin()).unwrap();
	let humanizer = Humanizer::new(Some(Arc::new(SpaceTokenizer)), tables);

	let out = humanizer.humanize_with_rng("本日 は 晴れ", &Levels::new(0.0, 1.0), &mut seeded(1));
	assert_eq!(out, "今日 は 晴れ");

	// Without a space the whole text is one token and no key matches.
	let out = humanizer.humanize_with_rng("本日は晴れ", &Levels::new(0.0, 1.0), &mut seeded(1));
	assert_eq!(out, "本日は晴れ");
}
