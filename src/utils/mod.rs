// src/utils/mod.rs

//! Utility functions and helpers.

pub mod date;
pub mod http;

use scraper::Html;
use unicode_segmentation::UnicodeSegmentation;

use crate::models::Category;

/// Category slugs WordPress uses for "no category".
const UNCATEGORIZED_SLUGS: [&str; 3] = ["uncategorized", "sin-categoria", "sin-categoría"];
const UNCATEGORIZED_NAMES: [&str; 3] = ["uncategorized", "sin categoría", "sin categoria"];

/// Display name and slug used in place of the default category.
pub const UNCATEGORIZED_DISPLAY_NAME: &str = "Subsidios";
pub const UNCATEGORIZED_FALLBACK_SLUG: &str = "subsidios";

/// Strip markup from rendered HTML and decode entities.
pub fn strip_html(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let text: String = fragment.root_element().text().collect();
    text.trim().to_string()
}

/// Escape text for use in HTML content or a quoted attribute.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Collapse runs of whitespace into single spaces.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cut `text` to at most `length` graphemes, appending `...` when cut.
pub fn truncate(text: &str, length: usize) -> String {
    match text.grapheme_indices(true).nth(length) {
        Some((cut, _)) => format!("{}...", text[..cut].trim()),
        None => text.to_string(),
    }
}

/// Site path of an article.
pub fn article_url(slug: &str) -> String {
    format!("/noticias/{slug}")
}

/// Site path of a category archive.
pub fn category_url(slug: &str) -> String {
    format!("/categoria/{slug}")
}

/// Site path of a tag archive.
pub fn tag_url(slug: &str) -> String {
    format!("/etiqueta/{slug}")
}

/// Site path of an author archive.
pub fn author_url(slug: &str) -> String {
    format!("/autor/{slug}")
}

/// Join a site origin and a path into an absolute URL.
pub fn absolute(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Whether a category is WordPress's default "Uncategorized".
pub fn is_uncategorized(category: &Category) -> bool {
    let slug = category.slug.trim().to_lowercase();
    let name = category.name.trim().to_lowercase();
    UNCATEGORIZED_SLUGS.contains(&slug.as_str()) || UNCATEGORIZED_NAMES.contains(&name.as_str())
}

/// Name to show for a category.
pub fn category_display_name(category: &Category) -> &str {
    if is_uncategorized(category) {
        UNCATEGORIZED_DISPLAY_NAME
    } else {
        &category.name
    }
}

/// Site path for a category, redirecting "Uncategorized" to the fallback.
pub fn category_href(category: &Category) -> String {
    if is_uncategorized(category) {
        category_url(UNCATEGORIZED_FALLBACK_SLUG)
    } else {
        category_url(&category.slug)
    }
}
