// src/search/highlight.rs

//! Case-insensitive literal highlighting of search terms.
//!
//! The query is always matched as plain text: regex meta characters are
//! escaped before compilation, so `(` or `.` in a query highlight exactly
//! those characters. Matching scans left to right and never overlaps.
//!
//! Every entry point accepts absent input (`None`) and falls back to the
//! empty or unchanged text instead of failing.

use regex::{Captures, Regex, RegexBuilder};

use crate::models::Fragment;
use crate::utils::escape_html;

/// CSS class put on `<mark>` elements unless configured otherwise.
pub const DEFAULT_MARK_CLASS: &str = "bg-primary/20 text-foreground rounded px-0.5";

/// Escape a query so the regex engine treats it literally.
pub fn escape_regex(query: &str) -> String {
    regex::escape(query)
}

/// Wrap every occurrence of `query` in `text` with a `<mark>` element.
///
/// Only the query is escaped. `text` is copied through verbatim, so callers
/// injecting the result into a page must trust or sanitize it themselves.
pub fn highlight_search_term<'t, 'q>(
    text: impl Into<Option<&'t str>>,
    query: impl Into<Option<&'q str>>,
) -> String {
    let text = text.into().unwrap_or_default();
    if text.is_empty() {
        return String::new();
    }
    Highlighter::new(query).mark(text)
}

/// Split `text` into alternating non-matching and matching fragments.
pub fn highlighted_fragments<'t, 'q>(
    text: impl Into<Option<&'t str>>,
    query: impl Into<Option<&'q str>>,
) -> Vec<Fragment> {
    let text = text.into().unwrap_or_default();
    if text.is_empty() {
        return Vec::new();
    }
    Highlighter::new(query).fragments(text)
}

/// A query compiled once and applied to many texts.
#[derive(Debug, Clone)]
pub struct Highlighter {
    query: String,
    pattern: Option<Regex>,
    mark_open: String,
}

impl Highlighter {
    /// Compile a highlighter for `query`.
    ///
    /// A blank or absent query yields an inert highlighter that leaves text
    /// unchanged.
    pub fn new<'q>(query: impl Into<Option<&'q str>>) -> Self {
        let query = query.into().map(str::trim).unwrap_or_default();
        let pattern = if query.is_empty() {
            None
        } else {
            compile(query)
        };

        Self {
            query: query.to_string(),
            pattern,
            mark_open: mark_open_tag(Some(DEFAULT_MARK_CLASS)),
        }
    }

    /// Use a different CSS class on `<mark>`; `None` or blank emits a bare tag.
    pub fn with_mark_class(mut self, class: Option<&str>) -> Self {
        self.mark_open = mark_open_tag(class);
        self
    }

    /// The trimmed query this highlighter matches.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether any text can be highlighted at all.
    pub fn is_active(&self) -> bool {
        self.pattern.is_some()
    }

    /// Split `text` into fragments covering it exactly once, left to right.
    pub fn fragments<'t>(&self, text: impl Into<Option<&'t str>>) -> Vec<Fragment> {
        let text = text.into().unwrap_or_default();
        if text.is_empty() {
            return Vec::new();
        }
        let Some(pattern) = &self.pattern else {
            return vec![Fragment::text(text)];
        };

        let mut parts = Vec::new();
        let mut last = 0;
        for m in pattern.find_iter(text) {
            if m.start() > last {
                parts.push(Fragment::text(&text[last..m.start()]));
            }
            parts.push(Fragment::matched(m.as_str()));
            last = m.end();
        }
        if last < text.len() {
            parts.push(Fragment::text(&text[last..]));
        }
        parts
    }

    /// Produce `text` with each match wrapped in `<mark>`.
    pub fn mark<'t>(&self, text: impl Into<Option<&'t str>>) -> String {
        let text = text.into().unwrap_or_default();
        if text.is_empty() {
            return String::new();
        }
        let Some(pattern) = &self.pattern else {
            return text.to_string();
        };

        pattern
            .replace_all(text, |caps: &Captures<'_>| {
                format!("{}{}</mark>", self.mark_open, &caps[0])
            })
            .into_owned()
    }
}

fn compile(query: &str) -> Option<Regex> {
    match RegexBuilder::new(&escape_regex(query))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => Some(pattern),
        Err(e) => {
            log::debug!("Highlight disabled for query {:?}: {}", query, e);
            None
        }
    }
}

fn mark_open_tag(class: Option<&str>) -> String {
    match class.map(str::trim).filter(|c| !c.is_empty()) {
        Some(class) => format!("<mark class=\"{}\">", escape_html(class)),
        None => "<mark>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FragmentKind;

    fn joined(fragments: &[Fragment]) -> String {
        fragments.iter().map(|f| f.value.as_str()).collect()
    }

    #[test]
    fn test_empty_text_gives_empty_output() {
        assert_eq!(highlight_search_term("", "foo"), "");
        assert_eq!(highlight_search_term(None::<&str>, "foo"), "");
        assert!(highlighted_fragments("", "foo").is_empty());
        assert!(highlighted_fragments(None::<&str>, None::<&str>).is_empty());
    }

    #[test]
    fn test_blank_query_leaves_text_unchanged() {
        let text = "Las cinco del día";
        assert_eq!(highlight_search_term(text, ""), text);
        assert_eq!(highlight_search_term(text, "   "), text);
        assert_eq!(highlight_search_term(text, None::<&str>), text);
        assert_eq!(
            highlighted_fragments("Hello world", ""),
            vec![Fragment::text("Hello world")]
        );
        assert_eq!(
            highlighted_fragments("Hello world", "\t \n"),
            vec![Fragment::text("Hello world")]
        );
    }

    #[test]
    fn test_wraps_single_match_in_mark() {
        assert_eq!(
            highlight_search_term("Las cinco del día", "cinco"),
            "Las <mark class=\"bg-primary/20 text-foreground rounded px-0.5\">cinco</mark> del día"
        );
    }

    #[test]
    fn test_mark_preserves_original_casing() {
        let result = highlight_search_term("CINCO del día", "cinco");
        assert!(result.starts_with("<mark"));
        assert!(result.contains(">CINCO</mark>"));
        assert!(result.ends_with(" del día"));
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let result = Highlighter::new("(").with_mark_class(None).mark("a (b) c");
        assert_eq!(result, "a <mark>(</mark>b) c");

        let dots = Highlighter::new(".").with_mark_class(None).mark("1.5 + 2x5");
        assert_eq!(dots, "1<mark>.</mark>5 + 2x5");

        for query in ["*", "+", "?", "^", "$", "{", "}", "|", "[", "]", "\\", "a+b", "[x]"] {
            let text = format!("pre {query} post");
            let fragments = highlighted_fragments(text.as_str(), query);
            assert_eq!(fragments.len(), 3, "query {query:?}");
            assert_eq!(fragments[1], Fragment::matched(query));
            assert_eq!(joined(&fragments), text);
        }
    }

    #[test]
    fn test_splits_text_and_match() {
        assert_eq!(
            highlighted_fragments("Las cinco del día", "cinco"),
            vec![
                Fragment::text("Las "),
                Fragment::matched("cinco"),
                Fragment::text(" del día"),
            ]
        );
    }

    #[test]
    fn test_fragments_are_case_insensitive() {
        assert_eq!(
            highlighted_fragments("CINCO", "cinco"),
            vec![Fragment::matched("CINCO")]
        );
        assert_eq!(
            highlighted_fragments("Resumen del DÍA", "día"),
            vec![Fragment::text("Resumen del "), Fragment::matched("DÍA")]
        );
    }

    #[test]
    fn test_query_is_trimmed() {
        assert_eq!(
            highlighted_fragments("uno cinco", "  cinco "),
            vec![Fragment::text("uno "), Fragment::matched("cinco")]
        );
    }

    #[test]
    fn test_no_occurrence_returns_whole_text() {
        assert_eq!(
            highlighted_fragments("Las cinco del día", "seis"),
            vec![Fragment::text("Las cinco del día")]
        );
        assert_eq!(
            highlight_search_term("Las cinco del día", "seis"),
            "Las cinco del día"
        );
    }

    #[test]
    fn test_adjacent_matches_stay_separate() {
        assert_eq!(
            highlighted_fragments("abAB", "ab"),
            vec![Fragment::matched("ab"), Fragment::matched("AB")]
        );
        assert_eq!(
            Highlighter::new("ab").with_mark_class(None).mark("abab"),
            "<mark>ab</mark><mark>ab</mark>"
        );
    }

    #[test]
    fn test_scan_is_non_overlapping() {
        assert_eq!(
            highlighted_fragments("aaa", "aa"),
            vec![Fragment::matched("aa"), Fragment::text("a")]
        );
    }

    #[test]
    fn test_fragments_reconstruct_text() {
        let samples = [
            ("Las cinco del día", "cinco"),
            ("¿Qué pasó? (actualizado)", "?"),
            ("Año nuevo, año viejo", "AÑO"),
            ("no match here", "zzz"),
            ("xxxx", "x"),
            ("  spaced  ", " "),
        ];
        for (text, query) in samples {
            let fragments = highlighted_fragments(text, query);
            assert_eq!(joined(&fragments), text, "text {text:?} query {query:?}");
            assert!(fragments.iter().all(|f| !f.value.is_empty()));
        }
    }

    #[test]
    fn test_fragments_alternate_unless_adjacent_matches() {
        let fragments = highlighted_fragments("a-b-a", "-");
        let kinds: Vec<_> = fragments.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![
                FragmentKind::Text,
                FragmentKind::Match,
                FragmentKind::Text,
                FragmentKind::Match,
                FragmentKind::Text,
            ]
        );
    }

    #[test]
    fn test_highlighter_reuse_and_state() {
        let highlighter = Highlighter::new(" Ley ");
        assert!(highlighter.is_active());
        assert_eq!(highlighter.query(), "Ley");
        assert_eq!(highlighter.fragments("ley").len(), 1);
        assert_eq!(highlighter.fragments("Una ley nueva").len(), 3);

        let inert = Highlighter::new(None::<&str>);
        assert!(!inert.is_active());
        assert_eq!(inert.mark("texto"), "texto");
    }

    #[test]
    fn test_mark_class_is_escaped() {
        let highlighter = Highlighter::new("x").with_mark_class(Some("a\"b"));
        assert_eq!(highlighter.mark("x"), "<mark class=\"a&quot;b\">x</mark>");

        let blank = Highlighter::new("x").with_mark_class(Some("  "));
        assert_eq!(blank.mark("x"), "<mark>x</mark>");
    }

    #[test]
    fn test_escape_regex() {
        assert_eq!(escape_regex("a.b(c)"), r"a\.b\(c\)");
        assert_eq!(escape_regex("plain"), "plain");
    }
}
