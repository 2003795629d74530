//! Reversible escaping of artifact delimiter tokens.
//!
//! File content is attacker-controlled: a repository can contain text that
//! looks exactly like the serializer's own markers. Before embedding,
//! every occurrence of a marker token is rewritten so embedded content can
//! never terminate a section early or forge a synthetic one, and the
//! rewrite is exactly reversible for arbitrary input.
//!
//! The scheme is structural, not HTML-style: an escape sentinel (`<|`) is
//! doubled first, then each marker token `<tok` becomes `<|tok`. Unescaping
//! applies the inverse substitutions in reverse order. Doubling the
//! sentinel first is what makes the round trip exact even for content that
//! already contains escaped-looking sequences.

/// Sentinel inserted into marker tokens; doubled when it occurs naturally.
const SENTINEL: &str = "<|";

/// Marker token bodies, matched with and without the closing slash.
/// Longer (closing) forms must be rewritten before their open forms.
const TOKENS: &[(&str, &str)] = &[
    ("</artifact", "<|/artifact"),
    ("<artifact", "<|artifact"),
    ("</file", "<|/file"),
    ("<file", "<|file"),
];

/// Escape all delimiter tokens in `content`.
///
/// The output contains no unescaped `<file`, `</file`, `<artifact`, or
/// `</artifact` substrings.
#[must_use]
pub fn escape_content(content: &str) -> String {
    let mut out = content.replace(SENTINEL, "<||");
    for (token, escaped) in TOKENS {
        out = out.replace(token, escaped);
    }
    out
}

/// Exact inverse of [`escape_content`].
#[must_use]
pub fn unescape_content(content: &str) -> String {
    let mut out = content.to_string();
    for (token, escaped) in TOKENS.iter().rev() {
        out = out.replace(escaped, token);
    }
    out.replace("<||", SENTINEL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn plain_content_is_untouched() {
        let s = "fn main() { println!(\"hello\"); }";
        assert_eq!(escape_content(s), s);
    }

    #[test]
    fn end_marker_cannot_survive_escaping() {
        let escaped = escape_content("text </file> more </artifact> text");
        assert!(!escaped.contains("</file"));
        assert!(!escaped.contains("</artifact"));
        assert_eq!(
            unescape_content(&escaped),
            "text </file> more </artifact> text"
        );
    }

    #[test]
    fn start_marker_cannot_survive_escaping() {
        let escaped = escape_content("<file path=\"evil\">payload</file>");
        assert!(!escaped.contains("<file"));
        assert!(!escaped.contains("</file"));
    }

    #[test]
    fn sentinel_sequences_round_trip() {
        for s in ["<|", "<||", "<|||", "<|file", "<|/file", "<||file", "<|artifact"] {
            assert_eq!(unescape_content(&escape_content(s)), s, "case: {s:?}");
        }
    }

    #[test]
    fn markup_like_content_round_trips() {
        let s = "<html><body><file path=\"x\">a</file><|escaped?</body></html>";
        assert_eq!(unescape_content(&escape_content(s)), s);
    }

    #[test]
    fn empty_content_round_trips() {
        assert_eq!(unescape_content(&escape_content("")), "");
    }

    proptest! {
        #[test]
        fn escape_unescape_round_trips(s in ".*") {
            prop_assert_eq!(unescape_content(&escape_content(&s)), s);
        }

        #[test]
        fn escape_round_trips_marker_dense_input(
            parts in proptest::collection::vec(
                prop_oneof![
                    Just("<file".to_string()),
                    Just("</file>".to_string()),
                    Just("<artifact".to_string()),
                    Just("</artifact>".to_string()),
                    Just("<|".to_string()),
                    Just("<||".to_string()),
                    Just("|".to_string()),
                    Just("<".to_string()),
                    "[a-z]{0,4}",
                ],
                0..32,
            )
        ) {
            let s = parts.concat();
            prop_assert_eq!(unescape_content(&escape_content(&s)), s.clone());
            let escaped = escape_content(&s);
            prop_assert!(!escaped.contains("<file"));
            prop_assert!(!escaped.contains("</file"));
            prop_assert!(!escaped.contains("<artifact"));
            prop_assert!(!escaped.contains("</artifact"));
        }
    }
}
