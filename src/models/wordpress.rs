// src/models/wordpress.rs

//! WordPress REST API wire types.
//!
//! Only the fields the search front end reads are modeled. Every field is
//! optional on the wire: WordPress replaces unavailable embeds with error
//! objects, which deserialize here into empty defaults.

use std::collections::HashMap;

use serde::Deserialize;

use super::article::{Author, Category, FeaturedImage, NewsArticle, Tag};

/// A `{"rendered": "..."}` field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WpRendered {
    #[serde(default)]
    pub rendered: String,
}

/// A post from `/wp/v2/posts`, optionally with `_embed`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WpPost {
    pub id: u64,
    pub date: String,
    pub modified: String,
    pub slug: String,
    pub link: String,
    pub title: WpRendered,
    pub excerpt: Option<WpRendered>,
    pub content: Option<WpRendered>,
    pub author: u64,
    pub sticky: bool,
    #[serde(rename = "_embedded")]
    pub embedded: Option<WpEmbedded>,
}

/// Embedded resources requested with `_embed=true`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WpEmbedded {
    pub author: Vec<WpAuthor>,
    #[serde(rename = "wp:featuredmedia")]
    pub featured_media: Vec<WpMedia>,
    #[serde(rename = "wp:term")]
    pub terms: Vec<Vec<WpTerm>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WpAuthor {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub avatar_urls: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WpMedia {
    pub id: u64,
    pub source_url: Option<String>,
    pub alt_text: Option<String>,
    pub media_details: Option<WpMediaDetails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WpMediaDetails {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// A category or tag, embedded under `wp:term` or listed by `/categories`
/// and `/tags`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WpTerm {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub taxonomy: String,
    pub description: Option<String>,
    pub count: Option<u64>,
}

impl From<WpAuthor> for Author {
    fn from(a: WpAuthor) -> Self {
        Self {
            avatar: a.avatar_urls.get("96").cloned(),
            id: a.id,
            name: a.name,
            slug: a.slug,
            description: a.description,
            url: a.url,
        }
    }
}

impl From<WpMedia> for FeaturedImage {
    fn from(m: WpMedia) -> Self {
        let details = m.media_details.unwrap_or_default();
        Self {
            id: m.id,
            url: m.source_url.unwrap_or_default(),
            alt: m.alt_text.unwrap_or_default(),
            width: details.width.unwrap_or(0),
            height: details.height.unwrap_or(0),
        }
    }
}

impl From<WpTerm> for Category {
    fn from(t: WpTerm) -> Self {
        Self {
            id: t.id,
            name: t.name,
            slug: t.slug,
            description: t.description,
            count: t.count,
        }
    }
}

impl From<WpTerm> for Tag {
    fn from(t: WpTerm) -> Self {
        Self {
            id: t.id,
            name: t.name,
            slug: t.slug,
            count: t.count,
        }
    }
}

impl From<WpPost> for NewsArticle {
    fn from(p: WpPost) -> Self {
        let embedded = p.embedded.unwrap_or_default();

        let author = embedded
            .author
            .into_iter()
            .next()
            .filter(|a| !a.name.is_empty())
            .map(Author::from)
            .unwrap_or_else(|| Author::unknown(p.author));

        let featured_image = embedded
            .featured_media
            .into_iter()
            .next()
            .filter(|m| m.id != 0)
            .map(FeaturedImage::from);

        let mut categories = Vec::new();
        let mut tags = Vec::new();
        for term in embedded.terms.into_iter().flatten() {
            match term.taxonomy.as_str() {
                "category" => categories.push(Category::from(term)),
                "post_tag" => tags.push(Tag::from(term)),
                _ => {}
            }
        }

        Self {
            id: p.id,
            title: p.title.rendered,
            slug: p.slug,
            excerpt: p.excerpt.map(|e| e.rendered).unwrap_or_default(),
            content: p.content.map(|c| c.rendered).unwrap_or_default(),
            date: p.date,
            modified: p.modified,
            author,
            featured_image,
            categories,
            tags,
            link: p.link,
            is_sticky: p.sticky,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMBEDDED_POST: &str = r#"{
        "id": 42,
        "date": "2024-01-15T10:30:00",
        "modified": "2024-01-16T08:00:00",
        "slug": "las-cinco-del-dia",
        "link": "https://cms.example.com/las-cinco-del-dia/",
        "title": {"rendered": "Las cinco del d&iacute;a"},
        "excerpt": {"rendered": "<p>Resumen</p>", "protected": false},
        "content": {"rendered": "<p>Cuerpo</p>", "protected": false},
        "author": 3,
        "sticky": true,
        "_embedded": {
            "author": [{
                "id": 3,
                "name": "Ana Pérez",
                "slug": "ana-perez",
                "avatar_urls": {"24": "https://x/24.png", "96": "https://x/96.png"}
            }],
            "wp:featuredmedia": [{
                "id": 9,
                "source_url": "https://cms.example.com/img.jpg",
                "alt_text": "Portada",
                "media_details": {"width": 1200, "height": 630}
            }],
            "wp:term": [
                [{"id": 1, "name": "Economía", "slug": "economia", "taxonomy": "category", "count": 12}],
                [{"id": 5, "name": "ayudas", "slug": "ayudas", "taxonomy": "post_tag"}]
            ]
        }
    }"#;

    #[test]
    fn test_transform_embedded_post() {
        let post: WpPost = serde_json::from_str(EMBEDDED_POST).unwrap();
        let article = NewsArticle::from(post);

        assert_eq!(article.id, 42);
        assert_eq!(article.slug, "las-cinco-del-dia");
        assert_eq!(article.excerpt, "<p>Resumen</p>");
        assert!(article.is_sticky);
        assert_eq!(article.author.name, "Ana Pérez");
        assert_eq!(article.author.avatar.as_deref(), Some("https://x/96.png"));

        let image = article.featured_image.unwrap();
        assert_eq!(image.url, "https://cms.example.com/img.jpg");
        assert_eq!((image.width, image.height), (1200, 630));

        assert_eq!(article.categories.len(), 1);
        assert_eq!(article.categories[0].slug, "economia");
        assert_eq!(article.categories[0].count, Some(12));
        assert_eq!(article.tags.len(), 1);
        assert_eq!(article.tags[0].name, "ayudas");
    }

    #[test]
    fn test_transform_without_embeds() {
        let json = r#"{"id": 7, "title": {"rendered": "Sin datos"}, "author": 11, "slug": "sin-datos"}"#;
        let article = NewsArticle::from(serde_json::from_str::<WpPost>(json).unwrap());

        assert_eq!(article.author, Author::unknown(11));
        assert_eq!(article.excerpt, "");
        assert_eq!(article.content, "");
        assert!(article.featured_image.is_none());
        assert!(article.categories.is_empty());
        assert!(!article.is_sticky);
    }

    #[test]
    fn test_embedded_error_objects_fall_back() {
        let json = r#"{
            "id": 8,
            "title": {"rendered": "x"},
            "author": 4,
            "_embedded": {
                "author": [{"code": "rest_user_invalid_id", "message": "Invalid user ID."}],
                "wp:featuredmedia": [{"code": "rest_forbidden", "data": {"status": 401}}]
            }
        }"#;
        let article = NewsArticle::from(serde_json::from_str::<WpPost>(json).unwrap());

        assert_eq!(article.author.name, "Autor desconocido");
        assert_eq!(article.author.id, 4);
        assert!(article.featured_image.is_none());
    }
}
