//! Statement classification for auto-suggested annotations.
//!
//! Three layers, built bottom-up:
//!
//! - [`TfIdfVectorizer`]: turns text into TF-IDF feature vectors under a
//!   fixed, training-time vocabulary.
//! - [`NaiveBayesModel`]: multinomial-style Naive Bayes over those features,
//!   with Laplace smoothing.
//! - [`SuggestionTrainer`]: assembles one classifier per annotation variable
//!   from the annotation store and offers a single prediction entry point
//!   across all of them.
//!
//! Trained classifiers are immutable and rebuilt from scratch on every
//! training pass; there is no incremental update path.

pub mod naive_bayes;
pub mod tfidf;
pub mod trainer;

pub use naive_bayes::*;
pub use tfidf::*;
pub use trainer::*;

use serde::{Deserialize, Serialize};

/// One training sample: a sentence-length text and its ground-truth value
/// for a single variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    /// Sample text.
    pub text: String,
    /// Value label.
    pub label: String,
}

impl Sample {
    /// Create a new sample.
    pub fn new<T: Into<String>, L: Into<String>>(text: T, label: L) -> Self {
        Sample {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// Configuration for the suggestion trainer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// The variable that flags whether a sentence is a statement at all.
    /// Negative samples are synthesized for this variable only, and
    /// `predict_all` reports a probability for it.
    pub designated_variable: String,
    /// Reserved label for synthesized negative samples.
    pub non_statement_label: String,
    /// Per document, at most `negative_ratio × coded statements` negative
    /// samples are synthesized.
    pub negative_ratio: usize,
    /// Apply Porter stemming during tokenization.
    pub stemming: bool,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            designated_variable: "concept".to_string(),
            non_statement_label: "nonstatement".to_string(),
            negative_ratio: 2,
            stemming: true,
        }
    }
}
