//! Utility functions for Markdown text assembly.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that carry meaning in Markdown and are backslash-escaped in
/// literal text.
pub const MARKDOWN_SPECIAL_CHARS: &[char] = &[
    '\\', '`', '*', '_', '{', '}', '[', ']', '(', ')', '#', '+', '-', '!', '|', '>',
];

static MARKDOWN_SPECIAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\\`*_{}\[\]()#+\-!|>]").expect("MARKDOWN_SPECIAL: hardcoded regex is valid")
});

/// Escape markdown special characters
///
/// Each character in [`MARKDOWN_SPECIAL_CHARS`] gets exactly one backslash
/// in front of it. Applying this twice escapes the inserted backslashes too,
/// so callers run it once per text leaf.
pub fn escape_markdown(text: &str) -> String {
    MARKDOWN_SPECIAL.replace_all(text, r"\$0").into_owned()
}

/// A run of `n` spaces.
pub fn indentation(n: usize) -> String {
    " ".repeat(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("*test*"), "\\*test\\*");
        assert_eq!(escape_markdown("_test_"), "\\_test\\_");
        assert_eq!(escape_markdown("[link]"), "\\[link\\]");
        assert_eq!(escape_markdown("normal"), "normal");
    }

    #[test]
    fn test_escape_every_special_char() {
        assert_eq!(
            escape_markdown(r"\`*_{}[]()#+-!|>"),
            r"\\\`\*\_\{\}\[\]\(\)\#\+\-\!\|\>"
        );
    }

    #[test]
    fn test_escape_leaves_other_punctuation() {
        assert_eq!(escape_markdown("1. a, b; c? <d> & \"e\""), "1. a, b; c? <d\\> & \"e\"");
    }

    #[test]
    fn test_escape_empty() {
        assert_eq!(escape_markdown(""), "");
    }

    #[test]
    fn test_escape_not_idempotent() {
        let once = escape_markdown("a*b");
        assert_eq!(once, "a\\*b");
        assert_eq!(escape_markdown(&once), "a\\\\\\*b");
    }

    #[test]
    fn test_indentation() {
        assert_eq!(indentation(0), "");
        assert_eq!(indentation(4), "    ");
    }

    proptest! {
        #[test]
        fn escape_prefixes_each_special_char_once(text in "\\PC{0,64}") {
            let escaped = escape_markdown(&text);

            let mut expected = String::new();
            for c in text.chars() {
                if MARKDOWN_SPECIAL_CHARS.contains(&c) {
                    expected.push('\\');
                }
                expected.push(c);
            }
            prop_assert_eq!(escaped, expected);
        }

        #[test]
        fn escape_without_specials_is_identity(text in "[a-zA-Z0-9 .,;:?<&\"']{0,64}") {
            prop_assert_eq!(escape_markdown(&text), text);
        }

        #[test]
        fn unescaping_recovers_input(text in "\\PC{0,64}") {
            let escaped = escape_markdown(&text);
            let mut recovered = String::new();
            let mut chars = escaped.chars();
            while let Some(c) = chars.next() {
                if c == '\\' {
                    if let Some(next) = chars.next() {
                        recovered.push(next);
                    }
                } else {
                    recovered.push(c);
                }
            }
            prop_assert_eq!(recovered, text);
        }
    }
}
