/*!
 * Tests for word counting functionality
 */

use subtext::word_counter::{WordCount, WordCounter};

/// Test that total word count splits on whitespace, keeping punctuation
#[test]
fn test_count_total_words_withPunctuation_shouldCountTokens() {
    assert_eq!(WordCounter::count_total_words("a, b, c"), 3);
}

/// Test that runs of whitespace produce no empty tokens
#[test]
fn test_count_total_words_withMixedWhitespace_shouldIgnoreEmptyTokens() {
    assert_eq!(WordCounter::count_total_words("  one\t\ttwo \n three  "), 3);
}

/// Test total count on an empty string
#[test]
fn test_count_total_words_withEmptyInput_shouldBeZero() {
    assert_eq!(WordCounter::count_total_words(""), 0);
    assert_eq!(WordCounter::count_total_words("   \n\t "), 0);
}

/// Test that frequency counting is case-insensitive
#[test]
fn test_count_unique_words_withMixedCase_shouldLowercase() {
    let counts = WordCounter::count_unique_words("Cat cat CAT");
    assert_eq!(
        counts,
        vec![WordCount { word: "cat".to_string(), count: 3 }]
    );
}

/// Test that punctuation is stripped from frequency keys
#[test]
fn test_count_unique_words_withPunctuation_shouldStripIt() {
    let counts = WordCounter::count_unique_words("hello, world!");
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].word, "hello");
    assert_eq!(counts[1].word, "world");

    // The same text yields 2 whitespace tokens for the total count
    assert_eq!(WordCounter::count_total_words("hello, world!"), 2);
}

/// Test that ties in frequency preserve first-appearance order
#[test]
fn test_count_unique_words_withTiedCounts_shouldKeepFirstSeenOrder() {
    let counts = WordCounter::count_unique_words("b a b a");
    assert_eq!(
        counts,
        vec![
            WordCount { word: "b".to_string(), count: 2 },
            WordCount { word: "a".to_string(), count: 2 },
        ]
    );
}

/// Test descending sort with a tie below the top entry
#[test]
fn test_count_unique_words_withMixedCounts_shouldSortDescending() {
    let counts = WordCounter::count_unique_words("b a a b c a");
    assert_eq!(
        counts,
        vec![
            WordCount { word: "a".to_string(), count: 3 },
            WordCount { word: "b".to_string(), count: 2 },
            WordCount { word: "c".to_string(), count: 1 },
        ]
    );
}

/// Test that underscores and digits count as word characters
#[test]
fn test_count_unique_words_withUnderscoresAndDigits_shouldKeepThem() {
    let counts = WordCounter::count_unique_words("foo_bar foo_bar 42");
    assert_eq!(
        counts,
        vec![
            WordCount { word: "foo_bar".to_string(), count: 2 },
            WordCount { word: "42".to_string(), count: 1 },
        ]
    );
}

/// Test frequency table of an empty string
#[test]
fn test_count_unique_words_withEmptyInput_shouldBeEmpty() {
    assert!(WordCounter::count_unique_words("").is_empty());
    assert!(WordCounter::count_unique_words("...!?").is_empty());
}
