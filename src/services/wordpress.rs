// src/services/wordpress.rs

//! WordPress REST API client.
//!
//! Fetches posts with `_embed=true` so author, featured media and terms come
//! back in one request, then normalizes them into [`NewsArticle`]s.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

use super::{ArchiveRequest, ArticleSource};
use crate::error::{AppError, Result};
use crate::models::{
    ArchivePage, Author, Category, NewsArticle, Tag, WordPressConfig, WpAuthor, WpPost, WpTerm,
};
use crate::utils::http;

const TOTAL_HEADER: &str = "X-WP-Total";
const TOTAL_PAGES_HEADER: &str = "X-WP-TotalPages";

/// Article source backed by the WordPress REST API.
pub struct WordPressClient {
    config: WordPressConfig,
    client: Client,
}

impl WordPressClient {
    /// Create a client with the given configuration.
    pub fn new(config: WordPressConfig) -> Result<Self> {
        let client = http::create_client(&config)?;
        Ok(Self { config, client })
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// URL of a search request, or `None` when no API URL is configured.
    pub fn search_url(&self, query: &str) -> Result<Option<Url>> {
        self.posts_url(vec![
            ("search", query.trim().to_string()),
            ("per_page", self.config.per_page.to_string()),
            ("_embed", "true".to_string()),
        ])
    }

    /// URL of an archive page request.
    pub fn archive_url(&self, request: &ArchiveRequest) -> Result<Option<Url>> {
        let mut params = vec![
            ("page", request.page.max(1).to_string()),
            ("per_page", request.per_page.to_string()),
            ("_embed", "true".to_string()),
        ];
        if let Some(id) = request.category_id {
            params.push(("categories", id.to_string()));
        }
        if let Some(id) = request.tag_id {
            params.push(("tags", id.to_string()));
        }
        if let Some(id) = request.author_id {
            params.push(("author", id.to_string()));
        }
        self.posts_url(params)
    }

    /// URL of a single-post lookup by slug.
    pub fn slug_url(&self, slug: &str) -> Result<Option<Url>> {
        self.posts_url(vec![
            ("slug", slug.to_string()),
            ("_embed", "true".to_string()),
        ])
    }

    /// URL of a slug lookup on another collection (`categories`, `tags`, `users`).
    pub fn lookup_url(&self, collection: &str, slug: &str) -> Result<Option<Url>> {
        self.endpoint_url(collection, vec![("slug", slug.to_string())])
    }

    fn posts_url(&self, params: Vec<(&str, String)>) -> Result<Option<Url>> {
        self.endpoint_url("posts", params)
    }

    fn endpoint_url(&self, collection: &str, params: Vec<(&str, String)>) -> Result<Option<Url>> {
        let Some(base) = self.config.base_url() else {
            return Ok(None);
        };
        let mut url = Url::parse(&format!("{base}/{collection}"))?;
        url.query_pairs_mut().extend_pairs(params);
        Ok(Some(url))
    }

    async fn get(&self, url: Url) -> Result<Response> {
        log::debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::api(status, url.as_str()));
        }
        Ok(response)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn read_posts(response: Response) -> Result<Vec<NewsArticle>> {
        let posts: Vec<WpPost> = Self::read_json(response).await?;
        Ok(posts.into_iter().map(NewsArticle::from).collect())
    }

    /// First item of `/{collection}?slug=...`, or `None` when nothing matches.
    async fn find_by_slug<T: DeserializeOwned>(
        &self,
        collection: &str,
        slug: &str,
    ) -> Result<Option<T>> {
        let slug = slug.trim();
        if slug.is_empty() {
            return Ok(None);
        }
        let Some(url) = self.lookup_url(collection, slug)? else {
            return Ok(None);
        };

        let items: Vec<T> = Self::read_json(self.get(url).await?).await?;
        Ok(items.into_iter().next())
    }
}

#[async_trait]
impl ArticleSource for WordPressClient {
    async fn search_posts(&self, query: &str) -> Result<Vec<NewsArticle>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        let Some(url) = self.search_url(query)? else {
            log::debug!("WordPress API URL not configured; search skipped");
            return Ok(Vec::new());
        };

        let articles = Self::read_posts(self.get(url).await?).await?;
        log::debug!("Search '{}' returned {} posts", query.trim(), articles.len());
        Ok(articles)
    }

    async fn fetch_archive(&self, request: &ArchiveRequest) -> Result<ArchivePage> {
        let Some(url) = self.archive_url(request)? else {
            return Ok(ArchivePage::default());
        };

        let response = self.get(url).await?;
        let (total, total_pages) = page_totals(response.headers());
        let posts = Self::read_posts(response).await?;

        Ok(ArchivePage {
            posts,
            total,
            total_pages,
        })
    }

    async fn post_by_slug(&self, slug: &str) -> Result<Option<NewsArticle>> {
        if slug.trim().is_empty() {
            return Ok(None);
        }
        let Some(url) = self.slug_url(slug.trim())? else {
            return Ok(None);
        };

        let posts = Self::read_posts(self.get(url).await?).await?;
        Ok(posts.into_iter().next())
    }

    async fn category_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        let term: Option<WpTerm> = self.find_by_slug("categories", slug).await?;
        Ok(term.map(Category::from))
    }

    async fn tag_by_slug(&self, slug: &str) -> Result<Option<Tag>> {
        let term: Option<WpTerm> = self.find_by_slug("tags", slug).await?;
        Ok(term.map(Tag::from))
    }

    async fn author_by_slug(&self, slug: &str) -> Result<Option<Author>> {
        let author: Option<WpAuthor> = self.find_by_slug("users", slug).await?;
        Ok(author.map(Author::from))
    }
}

/// Read `(total, total_pages)` from pagination headers.
///
/// Missing or malformed headers count as zero posts on one page.
fn page_totals(headers: &HeaderMap) -> (u64, u64) {
    let read = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
    };
    let total = read(TOTAL_HEADER).unwrap_or(0);
    let total_pages = read(TOTAL_PAGES_HEADER).unwrap_or(1).max(1);
    (total, total_pages)
}
