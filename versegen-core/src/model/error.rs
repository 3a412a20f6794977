use thiserror::Error;

/// Errors surfaced by model training and generation.
///
/// All failures are synchronous; there are no retries or partial results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
	/// The queried context is absent from the model. Callers either
	/// pre-filter seeds against the model's known contexts or catch and
	/// skip.
	#[error("unknown context: {0:?}")]
	UnknownContext(String),

	/// The requested n-gram order is out of range.
	#[error("n-gram order must be >= 1, got {0}")]
	InvalidOrder(usize),

	/// Greedy chaining feeds each generated word back as the next
	/// context, which only lines up when contexts are single words.
	#[error("greedy chaining requires a bigram model, got order {0}")]
	IncompatibleOrder(usize),

	/// The model has no contexts, typically because the word stream was
	/// shorter than the n-gram order.
	#[error("model has no contexts")]
	EmptyModel,
}
