//! Sentence segmentation shared by training and inference.
//!
//! The heuristic is intentionally simple: a sentence ends at `.`, `!` or `?`
//! when it is directly followed by whitespace and an upper-case letter. A
//! fixed list of titles and abbreviations is protected so "Dr. Smith" does
//! not become two sentences. Known to mis-segment in places (quotes,
//! ellipses, unlisted abbreviations), but deterministic and cheap, and it is
//! the exact segmentation the classifiers were trained against.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Titles and abbreviations whose trailing period never ends a sentence.
    static ref ABBREVIATION: Regex = Regex::new(r"\b(Mr|Ms|Mrs|Dr|Prof|hon|Sr|Jr)\.").unwrap();
}

/// Byte offsets of abbreviation periods in `text`. The scan in
/// [`sentence_spans`] skips these as boundary candidates, so the input is
/// never rewritten and offsets always refer to the original text.
fn protected_periods(text: &str) -> HashSet<usize> {
    ABBREVIATION.find_iter(text).map(|m| m.end() - 1).collect()
}

/// Byte-offset spans of the sentences of `text`, in document order.
///
/// Each span `(start, end)` satisfies `&text[start..end] ==` the
/// corresponding sentence from [`split_sentences`]; the separating
/// whitespace between sentences belongs to no span.
pub fn sentence_spans(text: &str) -> Vec<(usize, usize)> {
    let protected = protected_periods(text);
    let chars: Vec<(usize, char)> = text.char_indices().collect();

    let mut spans = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < chars.len() {
        let (offset, c) = chars[i];
        if matches!(c, '.' | '!' | '?') && !protected.contains(&offset) {
            // Whitespace run directly after the terminator, then an
            // upper-case letter, marks a boundary.
            let mut j = i + 1;
            while j < chars.len() && chars[j].1.is_whitespace() {
                j += 1;
            }
            if j > i + 1 && j < chars.len() && chars[j].1.is_ascii_uppercase() {
                spans.push((start, chars[i + 1].0));
                start = chars[j].0;
                i = j;
                continue;
            }
        }
        i += 1;
    }
    if start < text.len() {
        spans.push((start, text.len()));
    }

    spans
}

/// Split text into sentences.
///
/// Pure and deterministic: the same input always yields the same sentences,
/// and every sentence is a verbatim substring of the input.
pub fn split_sentences(text: &str) -> Vec<String> {
    sentence_spans(text)
        .into_iter()
        .map(|(start, end)| text[start..end].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        let sentences = split_sentences("The cat sat. The dog ran! Did it rain? Yes.");

        assert_eq!(
            sentences,
            vec!["The cat sat.", "The dog ran!", "Did it rain?", "Yes."]
        );
    }

    #[test]
    fn test_abbreviations_protected() {
        let sentences = split_sentences("Dr. Smith spoke first. Mr. Jones replied.");

        assert_eq!(
            sentences,
            vec!["Dr. Smith spoke first.", "Mr. Jones replied."]
        );
    }

    #[test]
    fn test_no_split_before_lowercase() {
        let sentences = split_sentences("It cost 3.50 dollars. the end");

        // "the" is lower-case, so the period does not end a sentence.
        assert_eq!(sentences, vec!["It cost 3.50 dollars. the end"]);
    }

    #[test]
    fn test_no_split_without_whitespace() {
        let sentences = split_sentences("See section 2.Albeit briefly.");

        assert_eq!(sentences, vec!["See section 2.Albeit briefly."]);
    }

    #[test]
    fn test_empty_text() {
        assert!(split_sentences("").is_empty());
        assert!(sentence_spans("").is_empty());
    }

    #[test]
    fn test_deterministic() {
        let text = "One sentence. Another one! Dr. Who? Exactly.";

        assert_eq!(split_sentences(text), split_sentences(text));
    }

    #[test]
    fn test_sentence_spans_slice_back() {
        let text = "The cat sat. The dog ran! Short.";
        let sentences = split_sentences(text);
        let spans = sentence_spans(text);

        assert_eq!(sentences.len(), spans.len());
        for (sentence, (start, end)) in sentences.iter().zip(&spans) {
            assert_eq!(&text[*start..*end], sentence);
        }
    }

    #[test]
    fn test_spans_are_ordered_and_disjoint() {
        let text = "A first sentence. A second one. A third one.";
        let spans = sentence_spans(text);

        for pair in spans.windows(2) {
            assert!(pair[0].1 <= pair[1].0);
        }
    }

    #[test]
    fn test_unusual_characters_survive_verbatim() {
        // Private-use and other exotic characters are carried through
        // untouched, and spans still slice back exactly.
        let text = "An odd \u{f8ff} character. Dr. Smith ignored it. The end.";
        let sentences = split_sentences(text);

        assert_eq!(
            sentences,
            vec![
                "An odd \u{f8ff} character.",
                "Dr. Smith ignored it.",
                "The end."
            ]
        );

        let spans = sentence_spans(text);
        assert_eq!(spans.len(), sentences.len());
        for (sentence, (start, end)) in sentences.iter().zip(&spans) {
            assert_eq!(&text[*start..*end], sentence);
        }
    }

    #[test]
    fn test_protected_periods_offsets() {
        let text = "Mr. Jones met Dr. Smith.";
        let protected = protected_periods(text);

        assert!(protected.contains(&2)); // "Mr."
        assert!(protected.contains(&16)); // "Dr."
        assert!(!protected.contains(&23)); // final period
    }
}
