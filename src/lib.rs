//! # Sibyl
//!
//! Statement auto-suggestion engine for text annotation tools.
//!
//! Human coders highlight spans of text in documents and attach structured
//! values ("statements") to them. Sibyl learns from those historical
//! annotations and scores new sentences into the same value categories, so
//! that coders can accept or reject machine suggestions instead of coding
//! from scratch.
//!
//! ## Features
//!
//! - From-scratch TF-IDF vectorization over a fixed, training-time vocabulary
//! - Multinomial-style Naive Bayes with Laplace smoothing
//! - One classifier per annotation variable, trained from the coder's data
//! - Synthesized negative samples for statement detection
//! - Abbreviation-aware sentence segmentation shared by training and inference

pub mod analysis;
pub mod error;
pub mod ml;
pub mod store;

pub mod prelude {
    pub use crate::analysis::{Analyzer, split_sentences};
    pub use crate::error::{Result, SibylError};
    pub use crate::ml::{
        NaiveBayesModel, Prediction, Sample, SuggestionTrainer, TfIdfVectorizer,
        TrainedClassifier, TrainerConfig,
    };
    pub use crate::store::{AnnotationStore, CodedSpan, DocumentStore, VariableSchema};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
