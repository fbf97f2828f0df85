//! Stemming for reducing words to their root forms.

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// Simplified Porter stemming algorithm for English.
///
/// Suffix stripping is guarded by the Porter vowel-consonant measure, so very
/// short stems are left alone. Input is expected to be already lower-cased
/// ASCII (the tokenizer guarantees this); mixed-case input is folded anyway.
#[derive(Debug, Clone, Default)]
pub struct PorterStemmer;

/// Vowel test. `y` counts as a vowel when it follows a consonant.
fn is_vowel(w: &[u8], i: usize) -> bool {
    match w[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => true,
        b'y' => i > 0 && !is_vowel(w, i - 1),
        _ => false,
    }
}

/// The Porter measure: number of vowel-to-consonant transitions.
fn measure(w: &[u8]) -> usize {
    let mut m = 0;
    let mut i = 0;
    while i < w.len() && !is_vowel(w, i) {
        i += 1;
    }
    loop {
        while i < w.len() && is_vowel(w, i) {
            i += 1;
        }
        if i == w.len() {
            break;
        }
        m += 1;
        while i < w.len() && !is_vowel(w, i) {
            i += 1;
        }
    }
    m
}

fn has_vowel(w: &[u8]) -> bool {
    (0..w.len()).any(|i| is_vowel(w, i))
}

fn ends_double_consonant(w: &[u8]) -> bool {
    let n = w.len();
    n >= 2 && w[n - 1] == w[n - 2] && !is_vowel(w, n - 1)
}

/// Consonant-vowel-consonant ending, where the final consonant is not
/// `w`, `x` or `y`.
fn ends_cvc(w: &[u8]) -> bool {
    let n = w.len();
    n >= 3
        && !is_vowel(w, n - 3)
        && is_vowel(w, n - 2)
        && !is_vowel(w, n - 1)
        && !matches!(w[n - 1], b'w' | b'x' | b'y')
}

/// Derivational suffix rewrites, applied when the remaining stem has a
/// measure greater than zero. Longest suffixes first so the longest match
/// wins.
const DERIVATIONAL: &[(&str, &str)] = &[
    ("ization", "ize"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("ational", "ate"),
    ("tional", "tion"),
    ("biliti", "ble"),
    ("ation", "ate"),
    ("alism", "al"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("ator", "ate"),
    ("ical", "ic"),
    ("ness", ""),
    ("ful", ""),
];

/// Residual suffixes dropped outright when the remaining stem has a measure
/// greater than one.
const RESIDUAL: &[&str] = &[
    "ement", "ance", "ence", "able", "ible", "ment", "ant", "ent", "ion", "ism", "ate", "iti",
    "ous", "ive", "ize", "al", "er", "ic", "ou",
];

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Plural reduction: `sses` -> `ss`, `ies` -> `i`, trailing `s` dropped.
    fn strip_plural(&self, word: String) -> String {
        if let Some(stem) = word.strip_suffix("sses") {
            format!("{stem}ss")
        } else if let Some(stem) = word.strip_suffix("ies") {
            format!("{stem}i")
        } else if word.ends_with("ss") {
            word
        } else if word.len() > 1 && word.ends_with('s') {
            word[..word.len() - 1].to_string()
        } else {
            word
        }
    }

    /// Past-tense and progressive reduction: `eed`, `ed`, `ing`.
    fn strip_participle(&self, word: String) -> String {
        if let Some(stem) = word.strip_suffix("eed") {
            if measure(stem.as_bytes()) > 0 {
                return format!("{stem}ee");
            }
            return word;
        }

        let stem = if let Some(stem) = word.strip_suffix("ed") {
            stem
        } else if let Some(stem) = word.strip_suffix("ing") {
            stem
        } else {
            return word;
        };
        if !has_vowel(stem.as_bytes()) {
            return word;
        }

        // Restore a trailing `e` or undouble the final consonant so that the
        // stem lines up with other inflections of the same word.
        if stem.ends_with("at") || stem.ends_with("bl") || stem.ends_with("iz") {
            format!("{stem}e")
        } else if ends_double_consonant(stem.as_bytes())
            && !matches!(stem.as_bytes().last(), Some(b'l' | b's' | b'z'))
        {
            stem[..stem.len() - 1].to_string()
        } else if measure(stem.as_bytes()) == 1 && ends_cvc(stem.as_bytes()) {
            format!("{stem}e")
        } else {
            stem.to_string()
        }
    }

    /// Derivational suffix rewriting over the [`DERIVATIONAL`] table.
    fn strip_derivational(&self, word: String) -> String {
        for (suffix, replacement) in DERIVATIONAL {
            if let Some(stem) = word.strip_suffix(suffix) {
                if measure(stem.as_bytes()) > 0 {
                    return format!("{stem}{replacement}");
                }
                return word;
            }
        }
        word
    }

    /// Residual suffix removal over the [`RESIDUAL`] table.
    fn strip_residual(&self, word: String) -> String {
        for suffix in RESIDUAL {
            if let Some(stem) = word.strip_suffix(suffix) {
                // `ion` only drops after `s` or `t` (decision/connection).
                let ion_blocked =
                    *suffix == "ion" && !matches!(stem.as_bytes().last(), Some(b's' | b't'));
                if !ion_blocked && measure(stem.as_bytes()) > 1 {
                    return stem.to_string();
                }
                return word;
            }
        }
        word
    }

    /// Final `e` removal and `ll` undoubling.
    fn strip_final_e(&self, word: String) -> String {
        let word = if word.ends_with('e') {
            let stem = &word[..word.len() - 1];
            let m = measure(stem.as_bytes());
            if m > 1 || (m == 1 && !ends_cvc(stem.as_bytes())) {
                stem.to_string()
            } else {
                word
            }
        } else {
            word
        };

        if word.ends_with("ll") && measure(word.as_bytes()) > 1 {
            word[..word.len() - 1].to_string()
        } else {
            word
        }
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let word = word.to_lowercase();
        if word.len() <= 2 || !word.is_ascii() {
            return word;
        }

        let word = self.strip_plural(word);
        let word = self.strip_participle(word);
        let word = self.strip_derivational(word);
        let word = self.strip_residual(word);
        self.strip_final_e(word)
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_porter_stemmer() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("cats"), "cat");
        assert_eq!(stemmer.stem("flies"), "fli");
        assert_eq!(stemmer.stem("agreed"), "agre");
        assert_eq!(stemmer.stem("connection"), "connect");
        assert_eq!(stemmer.stem("itemization"), "item");
        assert_eq!(stemmer.stem("sensational"), "sensat");
    }

    #[test]
    fn test_short_words_unchanged() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("a"), "a");
        assert_eq!(stemmer.stem("is"), "is");
        assert_eq!(stemmer.stem("cat"), "cat");
    }

    #[test]
    fn test_case_folding() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("Running"), "run");
    }

    #[test]
    fn test_inflections_share_a_stem() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("argued"), stemmer.stem("arguing"));
        assert_eq!(stemmer.stem("hopped"), stemmer.stem("hopping"));
    }

    #[test]
    fn test_measure() {
        assert_eq!(measure(b"tree"), 0);
        assert_eq!(measure(b"trees"), 1);
        assert_eq!(measure(b"trouble"), 1);
        assert_eq!(measure(b"troubles"), 2);
    }

    #[test]
    fn test_vowel_detection() {
        let word = b"syzygy";

        assert!(!is_vowel(word, 0)); // s
        assert!(is_vowel(word, 1)); // y after consonant
        assert!(!is_vowel(word, 2)); // z
        assert!(is_vowel(word, 3)); // y after consonant
    }
}
