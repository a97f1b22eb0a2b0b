//! Pluggable name matching policies.
//!
//! The extraction layer matches stored symptom/condition names against free
//! text. The policy is behind a trait so it can be swapped and tested
//! independently of the scoring logic.

use strsim::jaro_winkler;

/// Decides whether a stored record name is mentioned in a piece of text.
///
/// Both arguments are matched case-insensitively; implementations fold case
/// themselves.
pub trait NameMatcher {
    fn matches(&self, name: &str, text: &str) -> bool;
}

/// Full-name substring containment. Used for condition mentions.
#[derive(Debug, Default)]
pub struct SubstringMatcher;

impl NameMatcher for SubstringMatcher {
    fn matches(&self, name: &str, text: &str) -> bool {
        text.to_lowercase().contains(&name.to_lowercase())
    }
}

/// Full-name containment, or any single significant word of the name
/// appearing as a substring. Used for symptom mentions, so "my throat hurts"
/// still reaches "Sore Throat".
#[derive(Debug)]
pub struct KeywordMatcher {
    /// Words of the name must be strictly longer than this to count.
    pub min_word_len: usize,
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self { min_word_len: 3 }
    }
}

impl NameMatcher for KeywordMatcher {
    fn matches(&self, name: &str, text: &str) -> bool {
        let name_lower = name.to_lowercase();
        let text_lower = text.to_lowercase();

        if text_lower.contains(&name_lower) {
            return true;
        }

        name_lower
            .split_whitespace()
            .any(|word| word.chars().count() > self.min_word_len && text_lower.contains(word))
    }
}

/// Similarity matching over text tokens, for misspelled mentions.
///
/// Available as an alternative policy; the default extraction pipeline uses
/// the lexical matchers above.
#[derive(Debug)]
pub struct FuzzyMatcher {
    /// Minimum Jaro-Winkler similarity for a token to count as a mention.
    pub threshold: f64,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self { threshold: 0.9 }
    }
}

impl NameMatcher for FuzzyMatcher {
    fn matches(&self, name: &str, text: &str) -> bool {
        let name_lower = name.to_lowercase();
        let text_lower = text.to_lowercase();

        text_lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .any(|token| jaro_winkler(&name_lower, token) >= self.threshold)
    }
}
