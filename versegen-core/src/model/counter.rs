use std::collections::HashMap;

/// Separator used to join tokens into n-gram keys and generated lines.
pub(crate) const SEPARATOR: &str = " ";

/// Occurrence counts keyed by token or joined n-gram key.
pub(crate) type FrequencyTable = HashMap<String, usize>;

/// One n-gram window from a word stream.
///
/// `key` is the full window joined with `SEPARATOR`, `context` its first
/// n-1 tokens joined the same way, `next_word` its terminal token.
#[derive(Clone, Debug)]
pub(crate) struct Window {
	pub key: String,
	pub context: String,
	pub next_word: String,
}

/// Counts n-gram windows of width `n` over a word stream.
///
/// Slides a window with stride 1, producing exactly `len - n + 1` windows
/// in stream order. A stream shorter than `n` produces empty tables rather
/// than an error; callers must tolerate a model with no entries.
pub(crate) fn count_ngrams(stream: &[String], n: usize) -> (FrequencyTable, Vec<Window>) {
	let mut counts = FrequencyTable::new();
	let mut windows = Vec::new();
	if n == 0 || stream.len() < n {
		return (counts, windows);
	}

	for slice in stream.windows(n) {
		let key = slice.join(SEPARATOR);
		let context = slice[..n - 1].join(SEPARATOR);
		let next_word = slice[n - 1].clone();

		*counts.entry(key.clone()).or_insert(0) += 1;
		windows.push(Window { key, context, next_word });
	}

	(counts, windows)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn stream(words: &[&str]) -> Vec<String> {
		words.iter().map(|w| (*w).to_owned()).collect()
	}

	#[test]
	fn window_count_law() {
		let stream = stream(&["a", "b", "c", "d", "e"]);
		for n in 1..=stream.len() {
			let (_, windows) = count_ngrams(&stream, n);
			assert_eq!(windows.len(), stream.len() - n + 1, "n = {n}");
		}
	}

	#[test]
	fn short_stream_yields_empty_tables() {
		let stream = stream(&["a", "b"]);
		let (counts, windows) = count_ngrams(&stream, 3);
		assert!(counts.is_empty());
		assert!(windows.is_empty());
	}

	#[test]
	fn counts_accumulate_per_key() {
		let stream = stream(&["a", "b", "a", "b"]);
		let (counts, _) = count_ngrams(&stream, 2);
		assert_eq!(counts["a b"], 2);
		assert_eq!(counts["b a"], 1);
	}

	#[test]
	fn windows_record_context_and_terminal() {
		let stream = stream(&["a", "b", "c"]);
		let (_, windows) = count_ngrams(&stream, 3);
		assert_eq!(windows.len(), 1);
		assert_eq!(windows[0].key, "a b c");
		assert_eq!(windows[0].context, "a b");
		assert_eq!(windows[0].next_word, "c");
	}

	#[test]
	fn unigram_windows_have_empty_context() {
		let stream = stream(&["a", "b"]);
		let (counts, windows) = count_ngrams(&stream, 1);
		assert_eq!(counts["a"], 1);
		assert!(windows.iter().all(|w| w.context.is_empty()));
	}
}
