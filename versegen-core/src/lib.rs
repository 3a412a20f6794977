//! N-gram-based verse generation library.
//!
//! This crate builds statistical word-level n-gram models from a corpus of
//! verse lines and generates new lines from them. It provides:
//! - Word-level tokenization with punctuation filtering
//! - Directional corpus assembly (standard, backward, bidirectional)
//! - Conditional next-word models over (context, next-word) pairs
//! - Greedy and ranked generation strategies
//!
//! The crate never touches files or the console: callers supply raw text
//! lines and consume generated strings. Only the high-level API is exposed
//! publicly; the counting internals are kept private to ensure consistency
//! and prevent misuse.

/// Core n-gram models and generation logic.
///
/// This module exposes the high-level model and generator interface while
/// keeping internal pipeline stages private.
pub mod model;
