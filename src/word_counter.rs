use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

// @module: Word counting and frequency tables

// @const: Maximal run of word characters, the frequency tokenization rule
static WORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9_]+").unwrap());

/// One entry of a word frequency table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    /// Lowercase word token
    pub word: String,

    /// Number of occurrences
    pub count: usize,
}

// @struct: Word counting operations
pub struct WordCounter;

impl WordCounter {
    /// Count whitespace-delimited tokens.
    ///
    /// This is a plain token count: splitting happens on any run of
    /// whitespace and punctuation is not stripped, so it is distinct from
    /// the word rule used for frequency counting.
    pub fn count_total_words(content: &str) -> usize {
        content.split_whitespace().count()
    }

    /// Build a frequency table over the lowercased text.
    ///
    /// Tokens are maximal `[A-Za-z0-9_]+` runs. Entries are sorted by
    /// descending count; entries with equal counts keep the order in which
    /// their word first appeared. The tie rule is made explicit by pairing
    /// each word with its first-seen index and using a stable sort.
    pub fn count_unique_words(content: &str) -> Vec<WordCount> {
        let lowered = content.to_lowercase();

        let mut first_seen: HashMap<&str, usize> = HashMap::new();
        let mut entries: Vec<WordCount> = Vec::new();

        for token in WORD_REGEX.find_iter(&lowered) {
            let word = token.as_str();
            match first_seen.get(word) {
                Some(&index) => entries[index].count += 1,
                None => {
                    first_seen.insert(word, entries.len());
                    entries.push(WordCount {
                        word: word.to_string(),
                        count: 1,
                    });
                }
            }
        }

        // Stable sort: ties keep first-appearance (insertion) order
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries
    }
}
