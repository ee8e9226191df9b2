use super::ending::FULL_STOP;

/// Punctuation whose consecutive repeats are collapsed to one.
const COLLAPSIBLE: &[char] = &['。', '！', '、'];

/// Collapses runs of identical `。`, `！` or `、` into a single mark.
pub fn collapse_punctuation(text: &str) -> String {
	let mut result = String::with_capacity(text.len());
	let mut previous: Option<char> = None;
	for c in text.chars() {
		if previous == Some(c) && COLLAPSIBLE.contains(&c) {
			continue;
		}
		result.push(c);
		previous = Some(c);
	}
	result
}

/// Final normalization of a rewritten text.
///
/// - Duplicate punctuation is collapsed.
/// - If `original` ended with `。` and the output lost it, one is appended.
///
/// Idempotent: `finish(o, &finish(o, t)) == finish(o, t)`.
pub fn finish(original: &str, text: &str) -> String {
	let mut result = collapse_punctuation(text);
	if original.ends_with(FULL_STOP) && !result.ends_with(FULL_STOP) {
		result.push_str(FULL_STOP);
	}
	result
}
