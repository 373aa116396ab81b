//! Splitting course text into highlighted spans for the active query.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightTextSpan {
    pub text: String,
    pub is_highlighted: bool,
    pub index: u64,
}

/// Per-character lowercase mapping shared by query matching and highlighting,
/// so a course that matches always gets its match highlighted.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Splits `text` around every case-insensitive, non-overlapping occurrence of
/// the trimmed `query`. A blank query gives one unhighlighted span.
pub fn highlight_query(text: &str, query: &str) -> Vec<HighlightTextSpan> {
    let needle: Vec<char> = fold_case(query.trim()).chars().collect();
    let mut spans = Vec::new();
    if needle.is_empty() {
        push_span(&mut spans, text, false);
        return spans;
    }

    let mut plain_start = 0;
    let mut pos = 0;
    while pos < text.len() {
        match match_len_at(&text[pos..], &needle) {
            Some(len) => {
                push_span(&mut spans, &text[plain_start..pos], false);
                push_span(&mut spans, &text[pos..pos + len], true);
                pos += len;
                plain_start = pos;
            }
            None => {
                pos += text[pos..].chars().next().map_or(1, |c| c.len_utf8());
            }
        }
    }
    push_span(&mut spans, &text[plain_start..], false);
    spans
}

/// Byte length of the prefix of `haystack` whose lowercase form is `needle`.
fn match_len_at(haystack: &str, needle: &[char]) -> Option<usize> {
    let mut matched = 0;
    for (offset, c) in haystack.char_indices() {
        for lower in c.to_lowercase() {
            if matched >= needle.len() || lower != needle[matched] {
                return None;
            }
            matched += 1;
        }
        if matched == needle.len() {
            return Some(offset + c.len_utf8());
        }
    }
    None
}

fn push_span(spans: &mut Vec<HighlightTextSpan>, text: &str, is_highlighted: bool) {
    if text.is_empty() {
        return;
    }
    spans.push(HighlightTextSpan { text: text.to_string(), is_highlighted, index: spans.len() as u64 });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(spans: &[HighlightTextSpan]) -> String {
        spans.iter().map(|s| if s.is_highlighted { format!("[{}]", s.text) } else { s.text.clone() }).collect()
    }

    #[test]
    fn highlights_every_occurrence_case_insensitively() {
        let spans = highlight_query("Maths for Class 10 - maths revision", " MATHS ");
        assert_eq!(render(&spans), "[Maths] for Class 10 - [maths] revision");
        assert_eq!(spans.iter().map(|s| s.index).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn blank_query_leaves_text_alone() {
        let spans = highlight_query("Accountancy", "  ");
        assert_eq!(spans.len(), 1);
        assert!(!spans[0].is_highlighted);
    }

    #[test]
    fn handles_non_ascii_text() {
        assert_eq!(render(&highlight_query("Hindi व्याकरण Basics", "basics")), "Hindi व्याकरण [Basics]");
        assert_eq!(render(&highlight_query("₹999 crash course", "crash")), "₹999 [crash] course");
    }

    #[test]
    fn multi_char_lowercase_is_folded_like_the_matcher() {
        // 'İ' lowercases to "i\u{307}", two chars
        let title = "İSTANBUL Heritage Walk";
        let query = "i\u{307}stanbul";
        assert!(fold_case(title).contains(&fold_case(query)));
        assert_eq!(render(&highlight_query(title, query)), "[İSTANBUL] Heritage Walk");
        assert_eq!(render(&highlight_query(title, "İstanbul")), "[İSTANBUL] Heritage Walk");
    }

    #[test]
    fn final_sigma_folds_the_same_everywhere() {
        assert_eq!(fold_case("ΛΟΓΟΣ"), "λογοσ");
        assert_eq!(render(&highlight_query("ΛΟΓΟΣ Greek", "λογοσ")), "[ΛΟΓΟΣ] Greek");
    }

    #[test]
    fn no_match_gives_plain_text() {
        assert_eq!(render(&highlight_query("Physics", "chem")), "Physics");
    }
}
