use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::conditional::ConditionalModel;
use super::counter::SEPARATOR;
use super::error::ModelError;

/// Input parameters for the verse generation loop.
///
/// # Responsibilities
/// - Track how many lines to generate and how long each may grow
/// - Track the blank-line rhythm between stanzas
///
/// # Invariants
/// - `min_extra_words <= max_extra_words`
/// - `blank_line_every == 0` disables separator lines
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PoetryInput {
	/// Number of verse lines to generate.
	pub line_count: usize,

	/// Minimum number of words chained after the seed word.
	pub min_extra_words: usize,

	/// Maximum number of words chained after the seed word.
	pub max_extra_words: usize,

	/// A blank separator line follows every this many verse lines.
	pub blank_line_every: usize,
}

impl Default for PoetryInput {
	/// Twelve lines of 3 to 7 words (seed included), a blank line after
	/// every fourth.
	fn default() -> Self {
		Self {
			line_count: 12,
			min_extra_words: 2,
			max_extra_words: 6,
			blank_line_every: 4,
		}
	}
}

/// Generation interface over a trained `ConditionalModel`.
///
/// The generator borrows the model read-only and keeps no state of its
/// own, so one model may serve any number of generators concurrently.
///
/// # Responsibilities
/// - Ranked top-k continuation of a single seed context
/// - Greedy highest-score next-word chaining
/// - The verse loop: seeded lines of random length with stanza breaks
#[derive(Clone, Copy, Debug)]
pub struct Generator<'a> {
	model: &'a ConditionalModel,
}

impl<'a> Generator<'a> {
	/// Creates a generator over a trained model.
	pub fn new(model: &'a ConditionalModel) -> Self {
		Self { model }
	}

	/// Returns one line: the seed followed by its top `length` candidates.
	///
	/// Candidates are sorted by score descending; the sort is stable, so
	/// equal scores keep their first-observed order and repeated calls
	/// return identical output.
	///
	/// # Errors
	/// Returns `ModelError::UnknownContext` if `seed` is not a context of
	/// the model.
	pub fn ranked_continuation(&self, seed: &str, length: usize) -> Result<String, ModelError> {
		let distribution = self
			.model
			.distribution(seed)
			.ok_or_else(|| ModelError::UnknownContext(seed.to_owned()))?;

		let mut candidates: Vec<(&str, f64)> =
			distribution.iter().map(|(word, score)| (word.as_str(), *score)).collect();
		candidates.sort_by(|a, b| b.1.total_cmp(&a.1));

		let mut line = vec![seed];
		line.extend(candidates.iter().take(length).map(|(word, _)| *word));
		Ok(line.join(SEPARATOR))
	}

	/// Returns the highest-scored word following `context`.
	///
	/// Equal scores resolve to the first-observed candidate.
	///
	/// # Errors
	/// Returns `ModelError::UnknownContext` if `context` is not a context
	/// of the model.
	pub fn next_word(&self, context: &str) -> Result<&'a str, ModelError> {
		let distribution = self
			.model
			.distribution(context)
			.ok_or_else(|| ModelError::UnknownContext(context.to_owned()))?;

		let mut best: Option<(&str, f64)> = None;
		for (word, score) in distribution {
			if best.is_none_or(|(_, b)| *score > b) {
				best = Some((word.as_str(), *score));
			}
		}
		// A stored context always has at least one candidate.
		best.map(|(word, _)| word)
			.ok_or_else(|| ModelError::UnknownContext(context.to_owned()))
	}

	/// Generates verse lines by greedy chaining from random seed words.
	///
	/// # Behavior
	/// - Each line starts from a context sampled uniformly from the
	///   model's own ordered key list via the injected random source, so
	///   a seeded source reproduces the same poem.
	/// - Each seed is extended by a random number of words in
	///   `[min_extra_words, max_extra_words]`; every generated word
	///   becomes the next lookup context.
	/// - A chained word that is not itself a known context ends the line
	///   early instead of failing the whole poem.
	/// - Every `blank_line_every` lines, an empty separator line is
	///   emitted.
	///
	/// # Errors
	/// - `ModelError::IncompatibleOrder` unless the model order is 2:
	///   chaining single words as contexts only lines up for bigrams.
	/// - `ModelError::EmptyModel` if the model has no contexts.
	pub fn poetry<R: Rng>(&self, input: &PoetryInput, rng: &mut R) -> Result<Vec<String>, ModelError> {
		if self.model.order() != 2 {
			return Err(ModelError::IncompatibleOrder(self.model.order()));
		}
		let seeds: Vec<&str> = self.model.context_keys().collect();
		if seeds.is_empty() {
			return Err(ModelError::EmptyModel);
		}

		let mut lines = Vec::new();
		for i in 0..input.line_count {
			let seed = seeds[rng.random_range(0..seeds.len())];
			let extra_words = rng.random_range(input.min_extra_words..=input.max_extra_words);

			let mut words = vec![seed];
			let mut context = seed;
			for _ in 0..extra_words {
				match self.next_word(context) {
					Ok(word) => {
						words.push(word);
						context = word;
					}
					Err(ModelError::UnknownContext(_)) => {
						debug!("chain from {seed:?} ended early at {context:?}");
						break;
					}
					Err(e) => return Err(e),
				}
			}

			lines.push(words.join(SEPARATOR));
			if input.blank_line_every > 0 && (i + 1) % input.blank_line_every == 0 {
				lines.push(String::new());
			}
		}
		Ok(lines)
	}
}
