//! TF-IDF vectorization for text feature extraction.
//!
//! Vocabulary and document-frequency table are built once per training run
//! and must be reused verbatim at prediction time. Recomputing either for new
//! text would silently change feature semantics and break the trained model,
//! which is why [`vectorize_one`](TfIdfVectorizer::vectorize_one) takes the
//! training artifacts as arguments instead of deriving anything itself.

use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::Analyzer;
use crate::ml::Sample;

/// TF-IDF vectorizer over a controlled vocabulary.
///
/// IDF is computed as `ln(N / df)` with a document-frequency fallback of 1
/// for tokens missing from the table, matching the behavior the deployed
/// models were trained with. There is no `+1` denominator smoothing.
#[derive(Clone)]
pub struct TfIdfVectorizer {
    /// Analyzer shared between training and prediction.
    analyzer: Arc<Analyzer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("analyzer", &self.analyzer)
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Create a new TF-IDF vectorizer with the specified analyzer.
    pub fn new(analyzer: Arc<Analyzer>) -> Self {
        TfIdfVectorizer { analyzer }
    }

    /// Tokenize text through the shared analysis pipeline.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.analyzer.analyze(text)
    }

    /// Build the vocabulary for a sample set: the deduplicated token union,
    /// sorted lexicographically so feature-vector positions are reproducible
    /// across runs.
    pub fn build_vocabulary(&self, samples: &[Sample]) -> Vec<String> {
        let mut vocabulary: Vec<String> = samples
            .iter()
            .flat_map(|sample| self.tokenize(&sample.text))
            .collect();
        vocabulary.sort_unstable();
        vocabulary.dedup();
        vocabulary
    }

    /// Document frequency: for each vocabulary token, the number of samples
    /// containing it at least once (not total occurrences).
    pub fn document_frequency(
        &self,
        samples: &[Sample],
        vocabulary: &[String],
    ) -> AHashMap<String, usize> {
        let mut df: AHashMap<String, usize> =
            vocabulary.iter().map(|term| (term.clone(), 0)).collect();
        for sample in samples {
            let mut tokens = self.tokenize(&sample.text);
            tokens.sort_unstable();
            tokens.dedup();
            for token in tokens {
                if let Some(count) = df.get_mut(&token) {
                    *count += 1;
                }
            }
        }
        df
    }

    /// Compute the TF-IDF matrix for a batch of training samples.
    pub fn vectorize_batch(
        &self,
        samples: &[Sample],
        vocabulary: &[String],
        df: &AHashMap<String, usize>,
    ) -> Vec<Vec<f64>> {
        let n = samples.len();
        samples
            .iter()
            .map(|sample| self.vectorize_one(&sample.text, vocabulary, df, n))
            .collect()
    }

    /// Compute the TF-IDF vector for a single text.
    ///
    /// `n` must be the training-time sample count the `df` table was built
    /// from, so that the IDF scale matches the trained model. Tokens outside
    /// the vocabulary contribute nothing; text with no in-vocabulary tokens
    /// yields an all-zero vector.
    pub fn vectorize_one(
        &self,
        text: &str,
        vocabulary: &[String],
        df: &AHashMap<String, usize>,
        n: usize,
    ) -> Vec<f64> {
        let mut tf: AHashMap<String, usize> = AHashMap::new();
        for token in self.tokenize(text) {
            *tf.entry(token).or_insert(0) += 1;
        }

        vocabulary
            .iter()
            .map(|term| {
                let tf_term = tf.get(term).copied().unwrap_or(0);
                // A term absent from the table counts as df = 1, never 0.
                let df_term = df.get(term).copied().unwrap_or(1).max(1);
                let idf = (n as f64 / df_term as f64).ln();
                tf_term as f64 * idf
            })
            .collect()
    }
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        TfIdfVectorizer::new(Arc::new(Analyzer::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vectorizer() -> TfIdfVectorizer {
        // No stemming so vocabulary terms match the raw tokens.
        TfIdfVectorizer::new(Arc::new(Analyzer::standard(false)))
    }

    fn samples() -> Vec<Sample> {
        vec![
            Sample::new("the cat sat", "A"),
            Sample::new("the dog ran", "B"),
            Sample::new("a cat ran", "A"),
        ]
    }

    #[test]
    fn test_build_vocabulary_sorted() {
        let v = vectorizer();
        let vocabulary = v.build_vocabulary(&samples());

        assert_eq!(vocabulary, vec!["a", "cat", "dog", "ran", "sat", "the"]);
    }

    #[test]
    fn test_document_frequency_counts_samples_not_occurrences() {
        let v = vectorizer();
        let s = vec![
            Sample::new("cat cat cat", "A"),
            Sample::new("cat dog", "B"),
        ];
        let vocabulary = v.build_vocabulary(&s);
        let df = v.document_frequency(&s, &vocabulary);

        assert_eq!(df["cat"], 2);
        assert_eq!(df["dog"], 1);
    }

    #[test]
    fn test_vectorize_batch_shape() {
        let v = vectorizer();
        let s = samples();
        let vocabulary = v.build_vocabulary(&s);
        let df = v.document_frequency(&s, &vocabulary);
        let x = v.vectorize_batch(&s, &vocabulary, &df);

        assert_eq!(x.len(), 3);
        for row in &x {
            assert_eq!(row.len(), vocabulary.len());
        }
    }

    #[test]
    fn test_ubiquitous_term_has_zero_weight() {
        let v = vectorizer();
        let s = vec![
            Sample::new("the cat", "A"),
            Sample::new("the dog", "B"),
            Sample::new("the the the bird", "A"),
        ];
        let vocabulary = v.build_vocabulary(&s);
        let df = v.document_frequency(&s, &vocabulary);
        let x = v.vectorize_batch(&s, &vocabulary, &df);

        // "the" appears in every sample: idf = ln(3/3) = 0, so its TF-IDF
        // contribution is 0 regardless of term frequency.
        let the_idx = vocabulary.iter().position(|t| t == "the").unwrap();
        for row in &x {
            assert_eq!(row[the_idx], 0.0);
        }
    }

    #[test]
    fn test_unseen_tokens_ignored() {
        let v = vectorizer();
        let s = samples();
        let vocabulary = v.build_vocabulary(&s);
        let df = v.document_frequency(&s, &vocabulary);

        let x = v.vectorize_one("unicorns jumped", &vocabulary, &df, s.len());

        assert_eq!(x.len(), vocabulary.len());
        assert!(x.iter().all(|&value| value == 0.0));
    }

    #[test]
    fn test_empty_text_yields_zero_vector() {
        let v = vectorizer();
        let s = samples();
        let vocabulary = v.build_vocabulary(&s);
        let df = v.document_frequency(&s, &vocabulary);

        let x = v.vectorize_one("", &vocabulary, &df, s.len());

        assert!(x.iter().all(|&value| value == 0.0));
    }

    #[test]
    fn test_missing_df_defaults_to_one() {
        let v = vectorizer();
        let vocabulary = vec!["cat".to_string()];
        let df = AHashMap::new();

        let x = v.vectorize_one("cat", &vocabulary, &df, 3);

        // df falls back to 1: idf = ln(3/1).
        assert!((x[0] - 3.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_determinism() {
        let v = vectorizer();
        let s = samples();
        let vocab_a = v.build_vocabulary(&s);
        let vocab_b = v.build_vocabulary(&s);
        let df_a = v.document_frequency(&s, &vocab_a);
        let df_b = v.document_frequency(&s, &vocab_b);

        assert_eq!(vocab_a, vocab_b);
        assert_eq!(df_a, df_b);
        assert_eq!(
            v.vectorize_batch(&s, &vocab_a, &df_a),
            v.vectorize_batch(&s, &vocab_b, &df_b)
        );
    }
}
