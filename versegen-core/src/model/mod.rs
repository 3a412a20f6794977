//! Top-level module for the verse generation system.
//!
//! This module provides the word-level n-gram modeling pipeline, including:
//! - Corpus assembly from named sources (`Corpus`, `ModelType`)
//! - Conditional next-word models (`ConditionalModel`)
//! - A generation interface (`Generator`, `PoetryInput`)
//! - Error types shared across the pipeline (`ModelError`)

/// Conditional next-word model built from n-gram frequency counts.
///
/// Maps each (n-1)-word context to an insertion-ordered distribution of
/// candidate next words and their affinity scores.
pub mod conditional;

/// Corpus assembly from an ordered list of named line sources.
///
/// Produces the flat word stream consumed by model training, in one of
/// three directional variants.
pub mod corpus;

/// Error types for model training and generation.
pub mod error;

/// Generation strategies over a trained `ConditionalModel`.
///
/// Exposes ranked top-k continuation, greedy next-word chaining and the
/// verse loop with configurable line counts and lengths.
pub mod generator;

/// Internal n-gram window counting over a word stream.
///
/// Builds frequency tables and the per-window side table used by model
/// training. This module is not exposed publicly.
mod counter;

/// Internal word-level tokenizer.
///
/// Handles segmentation, per-line reversal and punctuation filtering.
/// This module is not exposed publicly.
mod tokenizer;
