// src/pipeline/highlight.rs

//! Offline highlighting of arbitrary text.

use serde::{Deserialize, Serialize};

use super::render::{RenderStyle, render_fragments};
use crate::error::Result;
use crate::models::SearchConfig;
use crate::search::Highlighter;

/// Output format of [`run_highlight`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum HighlightFormat {
    /// Text with `<mark>` around matches, unescaped
    #[default]
    Html,
    /// Fragment list as JSON
    Json,
    /// Reverse video around matches
    Ansi,
}

/// Highlight `query` in `text`.
pub fn run_highlight(
    text: &str,
    query: &str,
    format: HighlightFormat,
    config: &SearchConfig,
) -> Result<String> {
    let highlighter = Highlighter::new(query).with_mark_class(Some(&config.mark_class));

    let output = match format {
        HighlightFormat::Html => highlighter.mark(text),
        HighlightFormat::Json => serde_json::to_string_pretty(&highlighter.fragments(text))?,
        HighlightFormat::Ansi => render_fragments(
            &highlighter.fragments(text),
            RenderStyle::Ansi,
            &config.mark_class,
        ),
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Fragment;

    fn config() -> SearchConfig {
        SearchConfig {
            mark_class: String::new(),
            ..SearchConfig::default()
        }
    }

    #[test]
    fn test_html() {
        let out = run_highlight("Precio (USD) y precio", "precio", HighlightFormat::Html, &config())
            .unwrap();
        assert_eq!(out, "<mark>Precio</mark> (USD) y <mark>precio</mark>");
    }

    #[test]
    fn test_json() {
        let out = run_highlight("Las cinco", "CINCO", HighlightFormat::Json, &config()).unwrap();
        let parsed: Vec<Fragment> = serde_json::from_str(&out).unwrap();
        assert_eq!(
            parsed,
            vec![Fragment::text("Las "), Fragment::matched("cinco")]
        );
    }

    #[test]
    fn test_ansi() {
        let out = run_highlight("a.b", ".", HighlightFormat::Ansi, &config()).unwrap();
        assert_eq!(out, "a\x1b[7m.\x1b[0mb");
    }

    #[test]
    fn test_blank_query_leaves_text() {
        let out = run_highlight("<b>x</b>", "  ", HighlightFormat::Html, &config()).unwrap();
        assert_eq!(out, "<b>x</b>");
        let json = run_highlight("", "x", HighlightFormat::Json, &config()).unwrap();
        assert_eq!(json, "[]");
    }
}
