// src/models/article.rs

//! News article data structures.

use serde::{Deserialize, Serialize};

use crate::utils;

/// Name shown when WordPress does not embed the post author.
pub const UNKNOWN_AUTHOR: &str = "Autor desconocido";

/// A published article, normalized from the WordPress REST shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsArticle {
    /// WordPress post ID
    pub id: u64,

    /// Rendered title (may contain HTML entities)
    pub title: String,

    /// URL slug
    pub slug: String,

    /// Rendered excerpt HTML
    pub excerpt: String,

    /// Rendered body HTML
    pub content: String,

    /// Publication date as sent by WordPress (`YYYY-MM-DDTHH:MM:SS`)
    pub date: String,

    /// Last modification date
    pub modified: String,

    pub author: Author,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<FeaturedImage>,

    #[serde(default)]
    pub categories: Vec<Category>,

    #[serde(default)]
    pub tags: Vec<Tag>,

    /// Permalink on the WordPress side
    pub link: String,

    /// Pinned to the top of listings
    #[serde(default)]
    pub is_sticky: bool,
}

impl NewsArticle {
    /// Format the article for display using a template.
    ///
    /// Supported placeholders:
    /// - `{id}`, `{title}`, `{slug}`, `{date}`, `{author}`
    /// - `{link}` (WordPress permalink), `{url}` (site-relative article path)
    pub fn format(&self, template: &str) -> String {
        template
            .replace("{id}", &self.id.to_string())
            .replace("{title}", &self.title)
            .replace("{slug}", &self.slug)
            .replace("{date}", &self.date)
            .replace("{author}", &self.author.name)
            .replace("{link}", &self.link)
            .replace("{url}", &utils::article_url(&self.slug))
    }

    /// Title with markup removed and entities decoded.
    pub fn plain_title(&self) -> String {
        utils::strip_html(&self.title)
    }

    /// Excerpt with markup removed and entities decoded.
    pub fn plain_excerpt(&self) -> String {
        utils::strip_html(&self.excerpt)
    }
}

/// Article author.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Author {
    /// Placeholder author for posts whose author was not embedded.
    pub fn unknown(id: u64) -> Self {
        Self {
            id,
            name: UNKNOWN_AUTHOR.to_string(),
            slug: String::new(),
            avatar: None,
            description: None,
            url: None,
        }
    }
}

/// Featured image of an article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeaturedImage {
    pub id: u64,
    pub url: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
}

/// Article category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

/// Article tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

/// One page of an archive listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ArchivePage {
    pub posts: Vec<NewsArticle>,
    /// Total matching posts across all pages (`X-WP-Total`)
    pub total: u64,
    /// Number of pages (`X-WP-TotalPages`), at least 1 when the source answered
    pub total_pages: u64,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn article(id: u64, title: &str, excerpt: &str) -> NewsArticle {
        NewsArticle {
            id,
            title: title.to_string(),
            slug: format!("articulo-{id}"),
            excerpt: excerpt.to_string(),
            content: String::new(),
            date: "2024-01-15T10:30:00".to_string(),
            modified: "2024-01-15T11:00:00".to_string(),
            author: Author::unknown(3),
            featured_image: None,
            categories: Vec::new(),
            tags: Vec::new(),
            link: format!("https://cms.example.com/?p={id}"),
            is_sticky: false,
        }
    }
}
