use serde::{Deserialize, Serialize};

use super::tokenizer::tokenize;

/// Directional variant of the word stream built from a corpus.
///
/// # Variants
/// - `Standard`: per-line reversed order, the model's native direction.
/// - `Backward`: per-line reading order.
/// - `Bidirectional`: the backward stream followed by the standard stream
///   (backward segment first).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ModelType {
	#[default]
	Standard,
	Backward,
	Bidirectional,
}

/// One named source of corpus lines.
#[derive(Serialize, Deserialize, Clone, Debug)]
struct CorpusSource {
	id: String,
	lines: Vec<String>,
}

/// An ordered collection of named line sources.
///
/// The `Corpus` owns the raw lines of every source text and produces the
/// flat word stream that model training consumes. Sources keep their
/// insertion order; their lines are concatenated in that order before
/// tokenization, so source order affects n-gram adjacency at the seams.
///
/// # Responsibilities
/// - Accumulate raw lines from explicitly named sources
/// - Concatenate sources in insertion order
/// - Build the directional word stream for a given `ModelType`
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Corpus {
	sources: Vec<CorpusSource>,
}

impl Corpus {
	/// Creates an empty corpus.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a named source after all previously added sources.
	pub fn add_source(&mut self, id: &str, lines: Vec<String>) {
		self.sources.push(CorpusSource { id: id.to_owned(), lines });
	}

	/// Returns the source identifiers in insertion order.
	pub fn source_ids(&self) -> impl Iterator<Item = &str> {
		self.sources.iter().map(|s| s.id.as_str())
	}

	/// Returns the total number of raw lines across all sources.
	pub fn line_count(&self) -> usize {
		self.sources.iter().map(|s| s.lines.len()).sum()
	}

	/// Builds the flat word stream for the requested directional variant.
	///
	/// # Notes
	/// - `Bidirectional` concatenates the backward stream and the standard
	///   stream, backward segment first.
	/// - No sentence-boundary markers are inserted between lines.
	pub fn word_stream(&self, model_type: ModelType) -> Vec<String> {
		let lines: Vec<&str> = self
			.sources
			.iter()
			.flat_map(|s| s.lines.iter().map(String::as_str))
			.collect();

		match model_type {
			ModelType::Standard => tokenize(&lines, false),
			ModelType::Backward => tokenize(&lines, true),
			ModelType::Bidirectional => {
				let mut stream = tokenize(&lines, true);
				stream.extend(tokenize(&lines, false));
				stream
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn corpus(lines: &[&str]) -> Corpus {
		let mut corpus = Corpus::new();
		corpus.add_source("test", lines.iter().map(|l| (*l).to_owned()).collect());
		corpus
	}

	#[test]
	fn sources_concatenate_in_insertion_order() {
		let mut corpus = Corpus::new();
		corpus.add_source("first", vec!["a b".to_owned()]);
		corpus.add_source("second", vec!["c d".to_owned()]);
		assert_eq!(corpus.source_ids().collect::<Vec<_>>(), vec!["first", "second"]);
		assert_eq!(corpus.line_count(), 2);
		// Prepend accumulation acts over the concatenated line list.
		assert_eq!(corpus.word_stream(ModelType::Standard), vec!["d", "c", "b", "a"]);
	}

	#[test]
	fn bidirectional_is_backward_then_standard() {
		let corpus = corpus(&["a b", "c d"]);
		let backward = corpus.word_stream(ModelType::Backward);
		let standard = corpus.word_stream(ModelType::Standard);
		let bidirectional = corpus.word_stream(ModelType::Bidirectional);

		assert_eq!(bidirectional.len(), backward.len() + standard.len());
		assert_eq!(&bidirectional[..backward.len()], backward.as_slice());
		assert_eq!(&bidirectional[backward.len()..], standard.as_slice());
	}

	#[test]
	fn empty_corpus_yields_empty_streams() {
		let corpus = Corpus::new();
		assert!(corpus.word_stream(ModelType::Standard).is_empty());
		assert!(corpus.word_stream(ModelType::Bidirectional).is_empty());
	}
}
