//! Tokenizer: text → comparable word tokens
//!
//! Split on whitespace, then strip every leading/trailing character that is
//! not an ASCII letter, digit or apostrophe. Words emptied by stripping are
//! dropped. Internal punctuation ("sea-slugs", "don't") survives.
//!
//! Compare mode lower-cases each word after stripping, so compare tokens are
//! always the lower-cased display tokens.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_EDGE_PUNCTUATION: Regex =
        Regex::new(r"^[^A-Za-z0-9']+|[^A-Za-z0-9']+$").unwrap();
}

/// Tokenization mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenMode {
    /// Preserves case, for on-screen rendering
    Display,
    /// Lower-cased, for equality comparisons
    Compare,
}

/// Tokenize text in the given mode. Pure and idempotent.
pub fn tokenize(text: &str, mode: TokenMode) -> Vec<String> {
    text.split_whitespace()
        .map(|word| RE_EDGE_PUNCTUATION.replace_all(word, ""))
        .filter(|word| !word.is_empty())
        .map(|word| match mode {
            TokenMode::Display => word.into_owned(),
            TokenMode::Compare => word.to_lowercase(),
        })
        .collect()
}

/// Compare-mode tokens
pub fn tokenize_compare(text: &str) -> Vec<String> {
    tokenize(text, TokenMode::Compare)
}

/// Display-mode tokens
pub fn tokenize_display(text: &str) -> Vec<String> {
    tokenize(text, TokenMode::Display)
}

/// Normalize already-split tokens into compare mode
pub fn to_compare_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens
        .iter()
        .flat_map(|token| tokenize_compare(token.as_ref()))
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compare_mode_strips_and_lowercases() {
        let tokens = tokenize_compare("Stout sprinters stretch, sprint, surge swiftly.");
        assert_eq!(tokens, vec!["stout", "sprinters", "stretch", "sprint", "surge", "swiftly"]);
    }

    #[test]
    fn test_display_mode_preserves_case() {
        let tokens = tokenize_display("Sly, sea-slugs!! slide.");
        assert_eq!(tokens, vec!["Sly", "sea-slugs", "slide"]);
    }

    #[test]
    fn test_internal_apostrophes_survive() {
        let tokens = tokenize_compare("'Don't' stop \"rock'n'roll\"");
        assert_eq!(tokens, vec!["'don't'", "stop", "rock'n'roll"]);
    }

    #[test]
    fn test_punctuation_only_words_dropped() {
        let tokens = tokenize_compare("fuzzy -- foxes ... !!");
        assert_eq!(tokens, vec!["fuzzy", "foxes"]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(tokenize_compare("").is_empty());
        assert!(tokenize_compare("   \n\t ").is_empty());
    }

    #[test]
    fn test_idempotence() {
        let samples = [
            "Stormy sea swans swirl, splashing slick shells, shoals, skiffs.",
            "  \"Quoted\"  (parens) [brackets] émigré café naïve ",
            "a--b ...c... 'd' 42! ??",
        ];
        for text in samples {
            for mode in [TokenMode::Display, TokenMode::Compare] {
                let once = tokenize(text, mode);
                let twice = tokenize(&once.join(" "), mode);
                assert_eq!(once, twice, "not idempotent for {:?} in {:?}", text, mode);
            }
        }
    }

    #[test]
    fn test_non_ascii_edges_are_stripped() {
        assert_eq!(tokenize_display("café"), vec!["caf"]);
        assert_eq!(tokenize_display("émigré"), vec!["migr"]);
    }

    #[test]
    fn test_compare_is_lowercased_display() {
        let samples = [
            "\u{212A}elp kites kick",
            "\u{130}stanbul islands idle",
            "Sly, sea-slugs!! slide.",
            "ÉCLAIR eels eat",
        ];
        for text in samples {
            let lowered: Vec<String> = tokenize_display(text).iter().map(|t| t.to_lowercase()).collect();
            assert_eq!(tokenize_compare(text), lowered, "{:?}", text);
            assert_eq!(to_compare_tokens(&tokenize_display(text)), tokenize_compare(text), "{:?}", text);
        }
        assert_eq!(tokenize_compare("\u{212A}elp kites kick"), vec!["elp", "kites", "kick"]);
    }

    #[test]
    fn test_to_compare_tokens() {
        let display = vec!["Fuzzy".to_string(), "Foxes,".to_string(), "--".to_string()];
        assert_eq!(to_compare_tokens(&display), vec!["fuzzy", "foxes"]);
    }
}
