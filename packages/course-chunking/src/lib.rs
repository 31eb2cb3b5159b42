use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

/// A sentence boundary is only used when it keeps at least this share of the limit.
const MIN_SENTENCE_CUT_RATIO: f32 = 0.6;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct OverviewSplit {
	pub short: String,
	pub remaining: String,
}

/// Splits `text` into a lead of at most `limit_chars` characters and the rest.
pub fn split_overview(text: &str, limit_chars: usize) -> OverviewSplit {
	let text = text.trim();
	let Some((limit_byte, _)) = text.char_indices().nth(limit_chars) else {
		return OverviewSplit { short: text.to_string(), remaining: String::new() };
	};
	let min_chars = (limit_chars as f32 * MIN_SENTENCE_CUT_RATIO) as usize;
	let min_byte = text.char_indices().nth(min_chars).map(|(idx, _)| idx).unwrap_or(limit_byte);
	let cut = sentence_cut(text, min_byte, limit_byte)
		.or_else(|| whitespace_cut(text, limit_byte))
		.unwrap_or(limit_byte);
	let (short, remaining) = text.split_at(cut);

	OverviewSplit { short: short.trim_end().to_string(), remaining: remaining.trim().to_string() }
}

fn sentence_cut(text: &str, min_byte: usize, limit_byte: usize) -> Option<usize> {
	text.split_sentence_bound_indices()
		.map(|(idx, sentence)| idx + sentence.len())
		.take_while(|end| *end <= limit_byte)
		.last()
		.filter(|end| *end >= min_byte)
}

fn whitespace_cut(text: &str, limit_byte: usize) -> Option<usize> {
	text.split_word_bound_indices()
		.take_while(|(idx, _)| *idx <= limit_byte)
		.filter(|(idx, word)| *idx > 0 && word.trim().is_empty())
		.map(|(idx, _)| idx)
		.last()
}
