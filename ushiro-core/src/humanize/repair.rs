use regex::Regex;
use tracing::debug;

use crate::error::{HumanizeError, HumanizeResult};

/// Hiragana of the i- and e-rows: `<kanji><one of these>る` is taken as an
/// ichidan verb (考える, 始める), anything else ending in `る` as godan.
const ICHIDAN_VOWELS: &str = "いきしちにひみりぎじびぴえけせてねへめれげぜでべぺ";

/// Godan conjugation table, one row per dictionary-form ending:
/// `(ending, masu stem, past, te form, negative stem)`.
const GODAN: &[(&str, &str, &str, &str, &str)] = &[
	("う", "い", "った", "って", "わ"),
	("く", "き", "いた", "いて", "か"),
	("ぐ", "ぎ", "いだ", "いで", "が"),
	("す", "し", "した", "して", "さ"),
	("つ", "ち", "った", "って", "た"),
	("ぬ", "に", "んだ", "んで", "な"),
	("ぶ", "び", "んだ", "んで", "ば"),
	("む", "み", "んだ", "んで", "ま"),
	("る", "り", "った", "って", "ら"),
];

/// Stem in front of a godan ending: one kanji plus optional okurigana.
const GODAN_STEM: &str = r"(\p{Han}[ぁ-ゖ]?)";

/// Stem in front of `く`: a bare kanji that does not start a common
/// adjective, so `早くします` or `新しくした` are left alone.
const KU_STEM: &str = r"([\p{Han}&&[^早良高安強弱長広多少遅低短深浅近遠古若重軽厚薄暑寒熱冷固細太美悪白黒赤青明暗濃速全暫如]])";

fn godan_stem(ending: &str) -> &'static str {
	if ending == "く" { KU_STEM } else { GODAN_STEM }
}

/// Verbs whose past / te form does not follow their row.
/// Must run before the generated godan rules.
const IRREGULAR: &[(&str, &str)] = &[
	("行くした", "行った"),
	("行くして", "行って"),
];

/// Auxiliaries that take a te form (`ご利用いただき` → `ご使ういただき`).
const AUXILIARY: &str = "(ください|もら|いただ)";

/// Particles that substitution can leave doubled (`資料をを`).
const DOUBLED_PARTICLES: &[&str] = &["を", "が", "に", "で"];

/// Written-style connectives and their spoken equivalents.
/// Longer forms come first so `しかしながら` is not cut down to `でもながら`.
const CONNECTIVES: &[(&str, &str)] = &[
	("しかしながら", "でも"),
	("しかし、", "でも、"),
	("であるが、", "だけど、"),
	("であるため", "だから"),
	("であり、", "で、"),
	("ならびに", "と"),
	("および", "と"),
	("ゆえに", "だから"),
	("において", "で"),
	("における", "での"),
	("すなわち", "つまり"),
	("ものの、", "けど、"),
];

/// `により` as a connective; the leading group keeps `なにより` intact.
const NIYORI: &str = "(^|[^な])により";

/// Kanji that form an i-adjective with a bare `い` (`高い`, `痛い`).
/// Nouns such as `間違い` or `お願い` and na-adjectives like `嫌い` stay out.
const I_ADJECTIVE_KANJI: &str = "高安強弱長広多遅低短深浅近遠古若重軽厚薄暑寒熱冷固細太美悪白黒赤青明暗濃速早良痛辛甘怖狭丸暖温緩鈍鋭偉酸渋醜憎眠";

/// Kana i-adjective tails; with the kanji above, `だよ` / `なんだ` / `なの`
/// cannot follow them directly.
const I_ADJECTIVE_TAILS: &str = "[^み]たい|しい|ない|いい|さい|きい|かい|ごい|るい|よい|くい|すい";

/// One global `pattern` → `template` rewrite.
///
/// The template uses `regex` replacement syntax (`${1}` for groups).
#[derive(Debug, Clone)]
pub struct RepairRule {
	pattern: Regex,
	template: String,
}

impl RepairRule {
	/// # Errors
	/// Returns `InvalidPattern` if `pattern` does not compile.
	pub fn new(pattern: &str, template: &str) -> HumanizeResult<Self> {
		let regex = Regex::new(pattern).map_err(|e| HumanizeError::InvalidPattern {
			pattern: pattern.to_owned(),
			reason: e.to_string(),
		})?;
		Ok(Self { pattern: regex, template: template.to_owned() })
	}

	/// Rewrites every non-overlapping match of the pattern.
	pub fn apply(&self, text: &str) -> String {
		self.pattern.replace_all(text, self.template.as_str()).into_owned()
	}

	pub fn pattern(&self) -> &str {
		self.pattern.as_str()
	}
}

/// Ordered grammar repair pass.
///
/// Every rule runs once over the whole text, in declaration order, and
/// sees the output of the rules before it. There is no fixed-point loop:
/// a rule never revisits text produced by a later rule.
#[derive(Debug, Clone)]
pub struct GrammarRepair {
	rules: Vec<RepairRule>,
}

impl GrammarRepair {
	pub fn new(rules: Vec<RepairRule>) -> Self {
		Self { rules }
	}

	/// Builds the standard repair list.
	///
	/// # Order
	/// 1. Verb + auxiliary collisions (`ご使うください` → `使ってください`)
	/// 2. Verb + `する` family: ichidan first, then irregulars, then the
	///    generated godan rows (masu, past, te, negative, plain)
	/// 3. Doubled particles
	/// 4. Written connectives
	/// 5. Repeated `こと`
	/// 6. I-adjective + casual copula left by the ending step
	pub fn standard() -> HumanizeResult<Self> {
		let mut table: Vec<(String, String)> = Vec::new();
		let ichidan = format!(r"(\p{{Han}}[{ICHIDAN_VOWELS}])る");

		table.push((format!("[ごお]?{ichidan}{AUXILIARY}"), "${1}て${2}".to_owned()));
		for (ending, _, _, te, _) in GODAN {
			table.push((format!("[ごお]?{}{ending}{AUXILIARY}", godan_stem(ending)), format!("${{1}}{te}${{2}}")));
		}

		table.push((format!("{ichidan}しま"), "${1}ま".to_owned()));
		table.push((format!("{ichidan}した"), "${1}た".to_owned()));
		table.push((format!("{ichidan}して"), "${1}て".to_owned()));
		table.push((format!("{ichidan}しな(い|かった)"), "${1}な${2}".to_owned()));
		table.push((format!("{ichidan}する"), "${1}る".to_owned()));

		for (pattern, template) in IRREGULAR {
			table.push(((*pattern).to_owned(), (*template).to_owned()));
		}

		for (ending, masu, past, te, negative) in GODAN {
			let stem = godan_stem(ending);
			table.push((format!("{stem}{ending}しま"), format!("${{1}}{masu}ま")));
			table.push((format!("{stem}{ending}した"), format!("${{1}}{past}")));
			table.push((format!("{stem}{ending}して"), format!("${{1}}{te}")));
			table.push((format!("{stem}{ending}しな(い|かった)"), format!("${{1}}{negative}な${{2}}")));
			// Any adverbial `く` + する is legitimate.
			if *ending != "く" {
				table.push((format!("{stem}{ending}する"), format!("${{1}}{ending}")));
			}
		}

		for particle in DOUBLED_PARTICLES {
			table.push((format!("{particle}{particle}"), (*particle).to_owned()));
		}

		for (written, spoken) in CONNECTIVES {
			table.push((regex::escape(written), (*spoken).to_owned()));
		}

		table.push((NIYORI.to_owned(), "${1}で".to_owned()));

		table.push(("(?:こと){2,}".to_owned(), "こと".to_owned()));

		let adjective = format!("([{I_ADJECTIVE_KANJI}]い|{I_ADJECTIVE_TAILS})");
		table.push((format!("{adjective}だ(よ|ね)"), "${1}${2}".to_owned()));
		table.push((format!("{adjective}なんだ"), "${1}んだ".to_owned()));
		table.push((format!("{adjective}なの"), "${1}の".to_owned()));

		let rules = table
			.iter()
			.map(|(pattern, template)| RepairRule::new(pattern, template))
			.collect::<HumanizeResult<Vec<_>>>()?;
		Ok(Self::new(rules))
	}

	pub fn len(&self) -> usize {
		self.rules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	pub fn rules(&self) -> &[RepairRule] {
		&self.rules
	}

	/// Runs every rule once, in order, over the whole text.
	pub fn apply(&self, text: &str) -> String {
		self.rules.iter().fold(text.to_owned(), |current, rule| {
			let repaired = rule.apply(&current);
			if repaired != current {
				debug!("Repair {} applied", rule.pattern());
			}
			repaired
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn repair(text: &str) -> String {
		GrammarRepair::standard().unwrap().apply(text)
	}

	#[test]
	fn godan_verbs_regain_polite_form() {
		assert_eq!(repair("資料を渡すします"), "資料を渡します");
		assert_eq!(repair("本を買うしました"), "本を買いました");
		assert_eq!(repair("書類を送るしません"), "書類を送りません");
		assert_eq!(repair("内容が分かるします"), "内容が分かります");
	}

	#[test]
	fn ichidan_verbs_drop_the_ru() {
		assert_eq!(repair("少し考えるします"), "少し考えます");
		assert_eq!(repair("会議を始めるしました"), "会議を始めました");
	}

	#[test]
	fn past_tense_sound_changes() {
		assert_eq!(repair("渡すした"), "渡した");
		assert_eq!(repair("使うした"), "使った");
		assert_eq!(repair("終わるした"), "終わった");
		assert_eq!(repair("読むした"), "読んだ");
		assert_eq!(repair("泳ぐした"), "泳いだ");
		assert_eq!(repair("書くした"), "書いた");
		assert_eq!(repair("考えるした"), "考えた");
	}

	#[test]
	fn irregular_iku_beats_its_row() {
		assert_eq!(repair("東京に行くした"), "東京に行った");
		assert_eq!(repair("東京に行くして"), "東京に行って");
	}

	#[test]
	fn te_and_negative_forms() {
		assert_eq!(repair("使うして"), "使って");
		assert_eq!(repair("渡すしない"), "渡さない");
		assert_eq!(repair("考えるしなかった"), "考えなかった");
	}

	#[test]
	fn plain_suru_after_a_verb_is_dropped() {
		assert_eq!(repair("渡すすることにした"), "渡すことにした");
		assert_eq!(repair("考えるする"), "考える");
	}

	#[test]
	fn auxiliary_collision_becomes_te_form() {
		assert_eq!(repair("ご使うください"), "使ってください");
		assert_eq!(repair("ご考えるください"), "考えてください");
		assert_eq!(repair("送るください"), "送ってください");
		assert_eq!(repair("ご使うもらい"), "使ってもらい");
		assert_eq!(repair("お読むいただき"), "読んでいただき");
	}

	#[test]
	fn doubled_particles_and_koto_collapse() {
		assert_eq!(repair("資料をを読む"), "資料を読む");
		assert_eq!(repair("大事なことことこと"), "大事なこと");
	}

	#[test]
	fn written_connectives_become_spoken() {
		assert_eq!(repair("しかしながら、難しい"), "でも、難しい");
		assert_eq!(repair("しかし、無理だ"), "でも、無理だ");
		assert_eq!(repair("東京において開催"), "東京で開催");
		assert_eq!(repair("AおよびB"), "AとB");
		assert_eq!(repair("事故により遅延"), "事故で遅延");
		assert_eq!(repair("なにより大事"), "なにより大事");
	}

	#[test]
	fn adjective_copula_artifacts() {
		assert_eq!(repair("うれしいだよ"), "うれしいよ");
		assert_eq!(repair("高いなんだ"), "高いんだ");
		assert_eq!(repair("いいなの"), "いいの");
		assert_eq!(repair("痛いだよ"), "痛いよ");
		assert_eq!(repair("行くみたいだよ"), "行くみたいだよ");
	}

	#[test]
	fn clean_text_is_untouched() {
		for text in ["今日は晴れです。", "資料を読みました。", "早くします。", "新しくしました。", "全くしない。", "きれいだよ。", "それは間違いだよ。", "お願いだよ。", "嫌いなんだ。", "なにより大事だ。"] {
			assert_eq!(repair(text), text);
		}
	}

	#[test]
	fn repair_is_deterministic() {
		let repair_pass = GrammarRepair::standard().unwrap();
		let text = "しかしながら、資料を渡すしましたことこと。";
		let first = repair_pass.apply(text);
		assert_eq!(first, "でも、資料を渡しましたこと。");
		assert_eq!(repair_pass.apply(text), first);
	}
}
