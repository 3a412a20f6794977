/// Tokens removed from every word stream after segmentation.
///
/// The inventory mirrors the punctuation found in the source corpora:
/// quotation marks, full stops, colons, percent and permille signs,
/// parentheses and sentence-ending punctuation of the Urdu script
/// (the Urdu comma `،` and question mark `؟`).
pub(crate) const EXCLUDED_TOKENS: [&str; 14] = [
	"٪", "!", "%", "`", "‘", "’", "\"", ")", "(", ".", ":", "'", "،", "؟",
];

/// Returns true if `c` is split off from word edges as its own token.
fn splits_off(c: char) -> bool {
	EXCLUDED_TOKENS.iter().any(|t| t.starts_with(c))
}

/// Segments one whitespace-delimited chunk into word and punctuation tokens.
///
/// Punctuation characters glued to the front or back of a word become
/// separate tokens, in their original order. The word core stays intact,
/// so mid-word punctuation is never split.
fn segment(chunk: &str) -> Vec<String> {
	let chars: Vec<char> = chunk.chars().collect();
	let mut start = 0;
	let mut end = chars.len();
	while start < end && splits_off(chars[start]) {
		start += 1;
	}
	while end > start && splits_off(chars[end - 1]) {
		end -= 1;
	}

	let mut tokens = Vec::new();
	for c in &chars[..start] {
		tokens.push(c.to_string());
	}
	if start < end {
		tokens.push(chars[start..end].iter().collect());
	}
	for c in &chars[end..] {
		tokens.push(c.to_string());
	}
	tokens
}

/// Tokenizes raw lines into one flat word stream.
///
/// # Behavior
/// - Each line is trimmed; empty and whitespace-only lines contribute
///   no tokens.
/// - Per-line token order is emitted reversed; `backward` reverses it
///   back to reading order.
/// - Lines accumulate by prepending, so tokens from earlier lines end up
///   after tokens from later lines. This affects n-gram adjacency across
///   line boundaries and is part of the model's contract.
/// - Tokens matching `EXCLUDED_TOKENS` are removed in a final pass over
///   the whole stream.
pub(crate) fn tokenize<S: AsRef<str>>(lines: &[S], backward: bool) -> Vec<String> {
	let mut all_words = Vec::new();
	for line in lines.iter().rev() {
		let line = line.as_ref().trim();
		if line.is_empty() {
			continue;
		}

		let mut tokens: Vec<String> = line.split_whitespace().flat_map(segment).collect();
		tokens.reverse();
		if backward {
			tokens.reverse();
		}
		all_words.extend(tokens);
	}

	all_words.retain(|t| !EXCLUDED_TOKENS.contains(&t.as_str()));
	all_words
}
