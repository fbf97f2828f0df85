//! Analyzer combining tokenization with optional stemming.

use std::sync::Arc;

use crate::analysis::stemmer::{PorterStemmer, Stemmer};
use crate::analysis::tokenizer::{AlphanumericTokenizer, Tokenizer};

/// Text normalization pipeline: a tokenizer followed by an optional stemmer.
///
/// One `Analyzer` is shared (via [`Arc`]) between the training pass and all
/// later predictions of the classifiers it produced. Feature vectors are only
/// comparable when both phases normalize text identically, so the pipeline is
/// immutable after construction.
pub struct Analyzer {
    /// Tokenizer producing normalized word tokens.
    tokenizer: Arc<dyn Tokenizer>,
    /// Optional stemmer applied to every token.
    stemmer: Option<Arc<dyn Stemmer>>,
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field("stemmer", &self.stemmer.as_ref().map(|s| s.name()))
            .finish()
    }
}

impl Analyzer {
    /// Create an analyzer with the given tokenizer and no stemming.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Analyzer {
            tokenizer,
            stemmer: None,
        }
    }

    /// Attach a stemmer to this analyzer.
    pub fn with_stemmer(mut self, stemmer: Arc<dyn Stemmer>) -> Self {
        self.stemmer = Some(stemmer);
        self
    }

    /// The standard pipeline: alphanumeric tokenization, Porter stemming
    /// when `stemming` is true.
    pub fn standard(stemming: bool) -> Self {
        let analyzer = Analyzer::new(Arc::new(AlphanumericTokenizer::new()));
        if stemming {
            analyzer.with_stemmer(Arc::new(PorterStemmer::new()))
        } else {
            analyzer
        }
    }

    /// Run the full pipeline over a piece of text.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let tokens = self.tokenizer.tokenize(text);
        match &self.stemmer {
            Some(stemmer) => tokens.iter().map(|t| stemmer.stem(t)).collect(),
            None => tokens,
        }
    }

    /// Get the name of this analyzer's tokenizer.
    pub fn name(&self) -> &'static str {
        self.tokenizer.name()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Analyzer::standard(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyzer_without_stemming() {
        let analyzer = Analyzer::standard(false);
        let tokens = analyzer.analyze("The cats were running!");

        assert_eq!(tokens, vec!["the", "cats", "were", "running"]);
    }

    #[test]
    fn test_analyzer_with_stemming() {
        let analyzer = Analyzer::standard(true);
        let tokens = analyzer.analyze("The cats were running!");

        assert_eq!(tokens, vec!["the", "cat", "were", "run"]);
    }

    #[test]
    fn test_analyze_empty() {
        let analyzer = Analyzer::default();

        assert!(analyzer.analyze("").is_empty());
    }
}
