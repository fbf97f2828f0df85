//! Tokenizers for turning raw text into normalized word tokens.

/// Trait for tokenizers.
pub trait Tokenizer: Send + Sync {
    /// Split text into normalized tokens.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Get the name of this tokenizer.
    fn name(&self) -> &'static str;
}

/// A tokenizer that lower-cases text, strips everything except ASCII letters,
/// digits and spaces, and splits on whitespace.
///
/// This matches the feature semantics the classifiers are trained with:
/// punctuation and non-ASCII characters act as token separators and never
/// appear inside a token.
#[derive(Clone, Debug, Default)]
pub struct AlphanumericTokenizer;

impl AlphanumericTokenizer {
    /// Create a new alphanumeric tokenizer.
    pub fn new() -> Self {
        AlphanumericTokenizer
    }
}

impl Tokenizer for AlphanumericTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized: String = text
            .chars()
            .map(|c| {
                let c = c.to_ascii_lowercase();
                if c.is_ascii_lowercase() || c.is_ascii_digit() {
                    c
                } else {
                    ' '
                }
            })
            .collect();

        normalized
            .split_whitespace()
            .map(|word| word.to_string())
            .collect()
    }

    fn name(&self) -> &'static str {
        "alphanumeric"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphanumeric_tokenizer() {
        let tokenizer = AlphanumericTokenizer::new();
        let tokens = tokenizer.tokenize("The cat sat, didn't it?");

        assert_eq!(tokens, vec!["the", "cat", "sat", "didn", "t", "it"]);
    }

    #[test]
    fn test_digits_kept() {
        let tokenizer = AlphanumericTokenizer::new();
        let tokens = tokenizer.tokenize("Article 42a applies");

        assert_eq!(tokens, vec!["article", "42a", "applies"]);
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        let tokenizer = AlphanumericTokenizer::new();

        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("?!—…").is_empty());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(AlphanumericTokenizer::new().name(), "alphanumeric");
    }
}
