use std::collections::HashSet;

use indexmap::IndexMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::corpus::{Corpus, ModelType};
use super::counter::count_ngrams;
use super::error::ModelError;

/// Contexts excluded from the model.
///
/// Sentence-boundary markers are disabled in this design and the curly
/// quotes are already filtered at tokenization, but the historical
/// exclusion set is kept intact so corpora containing these strings as
/// literal words behave identically.
const EXCLUDED_CONTEXTS: [&str; 4] = ["<s>", "</s>", "‘", "’"];

/// Resolution policy when one (context, word) pair receives a second score.
///
/// Tagged explicitly so the behavior is part of the contract instead of an
/// artifact of map iteration order.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MergePolicy {
	/// The later score replaces the earlier one; the word keeps its
	/// original position in the distribution.
	#[default]
	OverwriteOnConflict,
}

/// Conditional next-word model over (context, next-word) pairs.
///
/// For each (n-1)-word context the model stores an insertion-ordered
/// mapping from candidate next word to an affinity score
/// `count(ngram) / count(next word)`. Scores are NOT a normalized
/// conditional distribution: each is computed independently against the
/// candidate's unigram count, and they need not sum to 1 per context.
/// This scoring is preserved as-is for output fidelity.
///
/// # Responsibilities
/// - Build the model from a corpus via tokenization and window counting
/// - Keep contexts and candidates in first-observed order
/// - Serve read-only score lookups during generation
///
/// # Invariants
/// - `n >= 1`
/// - Every stored score is in (0, 1]: an n-gram never occurs more often
///   than its own terminal word
/// - Every stored context has at least one candidate
/// - The model is immutable once built
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ConditionalModel {
	/// The order of the model (number of words in the n-gram).
	n: usize,

	/// Conflict policy applied while building the distributions.
	merge_policy: MergePolicy,

	/// Mapping from context to its candidate distribution, both in
	/// first-observed order.
	contexts: IndexMap<String, IndexMap<String, f64>>,
}

impl ConditionalModel {
	/// Trains a model of order `n` over the corpus's directional stream.
	///
	/// # Behavior
	/// - Builds the word stream for `model_type`, counts unigrams and
	///   n-gram windows, then scores each distinct window key as
	///   `count(key) / count(terminal word)`.
	/// - Windows whose context matches the exclusion set are skipped.
	/// - A stream shorter than `n` yields an empty model, not an error;
	///   generation over it then fails with a lookup error.
	///
	/// # Errors
	/// Returns `ModelError::InvalidOrder` if `n` is 0.
	pub fn train(corpus: &Corpus, n: usize, model_type: ModelType) -> Result<Self, ModelError> {
		if n < 1 {
			return Err(ModelError::InvalidOrder(n));
		}
		if n > 2 {
			// Greedy chaining feeds single words back as contexts.
			warn!("order {n} model: greedy chaining is only available for n = 2");
		}

		let stream = corpus.word_stream(model_type);
		let (unigrams, _) = count_ngrams(&stream, 1);
		let (ngrams, windows) = count_ngrams(&stream, n);
		debug!(
			"training order {n} {model_type:?} model: {} tokens, {} windows",
			stream.len(),
			windows.len()
		);

		let merge_policy = MergePolicy::default();
		let mut contexts: IndexMap<String, IndexMap<String, f64>> = IndexMap::new();
		let mut seen_keys = HashSet::new();
		for window in &windows {
			if EXCLUDED_CONTEXTS.contains(&window.context.as_str()) {
				continue;
			}
			// Each distinct key is scored once; its count already covers
			// every occurrence. A key determines its context, so a global
			// seen-set is enough.
			if !seen_keys.insert(window.key.as_str()) {
				continue;
			}

			// Both tables were counted from the same stream, so the
			// lookups cannot miss.
			let score = ngrams[window.key.as_str()] as f64 / unigrams[window.next_word.as_str()] as f64;
			let distribution = contexts.entry(window.context.clone()).or_default();
			match merge_policy {
				MergePolicy::OverwriteOnConflict => {
					distribution.insert(window.next_word.clone(), score);
				}
			}
		}

		debug!("trained model with {} contexts", contexts.len());
		Ok(Self { n, merge_policy, contexts })
	}

	/// Returns the order `n` of the model.
	pub fn order(&self) -> usize {
		self.n
	}

	/// Returns the conflict policy used while building the model.
	pub fn merge_policy(&self) -> MergePolicy {
		self.merge_policy
	}

	/// Returns the number of contexts in the model.
	pub fn context_count(&self) -> usize {
		self.contexts.len()
	}

	/// Returns true if the model has no contexts.
	pub fn is_empty(&self) -> bool {
		self.contexts.is_empty()
	}

	/// Returns the context keys in first-observed order.
	///
	/// This materialized ordering is what seed sampling draws from, so
	/// generation is reproducible under a seeded random source.
	pub fn context_keys(&self) -> impl Iterator<Item = &str> {
		self.contexts.keys().map(String::as_str)
	}

	/// Returns the score of `word` after `context`, if both are known.
	pub fn score(&self, context: &str, word: &str) -> Option<f64> {
		self.contexts.get(context)?.get(word).copied()
	}

	/// Returns the candidate distribution for `context`, in
	/// first-observed order.
	pub(crate) fn distribution(&self, context: &str) -> Option<&IndexMap<String, f64>> {
		self.contexts.get(context)
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

	// Two verse lines: "میں جانتا ہوں" / "وہ جانتا ہوں".
	fn toy_corpus() -> Corpus {
		corpus(&["میں جانتا ہوں", "وہ جانتا ہوں"])
	}

	#[test]
	fn order_zero_is_rejected() {
		let err = ConditionalModel::train(&toy_corpus(), 0, ModelType::Standard).unwrap_err();
		assert_eq!(err, ModelError::InvalidOrder(0));
	}

	#[test]
	fn toy_corpus_bigram_model() {
		let model = ConditionalModel::train(&toy_corpus(), 2, ModelType::Standard).unwrap();

		// Reversed-per-line tokenization puts "ہوں" before "جانتا" in the
		// stream; both its occurrences are followed by "جانتا".
		assert_eq!(model.score("ہوں", "جانتا"), Some(1.0));
		// "جانتا" is followed once by each line's remaining word.
		assert_eq!(model.score("جانتا", "وہ"), Some(1.0));
		assert_eq!(model.score("جانتا", "میں"), Some(1.0));
		// "وہ ہوں" occurs once, "ہوں" twice overall.
		assert_eq!(model.score("وہ", "ہوں"), Some(0.5));

		assert_eq!(
			model.context_keys().collect::<Vec<_>>(),
			vec!["ہوں", "جانتا", "وہ"]
		);
	}

	#[test]
	fn backward_model_follows_reading_order() {
		let model = ConditionalModel::train(&toy_corpus(), 2, ModelType::Backward).unwrap();
		// In reading order "جانتا" is followed by "ہوں" in both lines.
		assert_eq!(model.score("جانتا", "ہوں"), Some(1.0));
	}

	#[test]
	fn scores_stay_in_unit_interval() {
		let corpus = corpus(&["the cat sat", "the dog sat", "the cat ran", "a cat sat here"]);
		for model_type in [ModelType::Standard, ModelType::Backward, ModelType::Bidirectional] {
			let model = ConditionalModel::train(&corpus, 2, model_type).unwrap();
			assert!(!model.is_empty());
			for context in model.context_keys() {
				for (word, score) in model.distribution(context).unwrap() {
					assert!(
						*score > 0.0 && *score <= 1.0,
						"score {score} out of range for ({context:?}, {word:?})"
					);
				}
			}
		}
	}

	#[test]
	fn excluded_contexts_are_absent() {
		let model = ConditionalModel::train(&corpus(&["a <s> b"]), 2, ModelType::Standard).unwrap();
		assert!(model.distribution("<s>").is_none());
		// "<s>" may still appear as a candidate word.
		assert_eq!(model.score("b", "<s>"), Some(1.0));
	}

	#[test]
	fn short_stream_yields_empty_model() {
		let model = ConditionalModel::train(&corpus(&["lonely"]), 2, ModelType::Standard).unwrap();
		assert!(model.is_empty());
		assert_eq!(model.context_count(), 0);
	}

	#[test]
	fn trigram_contexts_join_two_words() {
		let model = ConditionalModel::train(&toy_corpus(), 3, ModelType::Backward).unwrap();
		// Reading-order stream: وہ جانتا ہوں میں جانتا ہوں
		assert_eq!(model.score("وہ جانتا", "ہوں"), Some(0.5));
		assert_eq!(model.merge_policy(), MergePolicy::OverwriteOnConflict);
	}

	#[test]
	fn repeated_ngrams_score_with_full_counts() {
		let model = ConditionalModel::train(&corpus(&["b a", "b a"]), 2, ModelType::Standard).unwrap();
		// Stream: a b a b; "a b" twice over two "b" unigrams.
		assert_eq!(model.score("a", "b"), Some(1.0));
	}
}
