//! Text analysis module for Sibyl.
//!
//! Provides the normalization pipeline shared by training and prediction:
//! tokenization, optional stemming, and sentence segmentation. The same
//! [`Analyzer`] instance is handed to both phases, so features computed at
//! prediction time are guaranteed to use the normalization the model was
//! trained with.

pub mod analyzer;
pub mod sentence;
pub mod stemmer;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use sentence::*;
pub use stemmer::*;
pub use tokenizer::*;
