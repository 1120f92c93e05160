// src/services/mod.rs

//! Service layer for the search application.
//!
//! This module contains the article sources the pipelines read from:
//! - The [`ArticleSource`] abstraction
//! - WordPress REST API access (`WordPressClient`)

mod wordpress;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{ArchivePage, Author, Category, NewsArticle, Tag};

pub use wordpress::WordPressClient;

/// Filters for one page of an archive listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveRequest {
    /// 1-based page number
    pub page: u32,
    pub per_page: u32,
    pub category_id: Option<u64>,
    pub tag_id: Option<u64>,
    pub author_id: Option<u64>,
}

impl Default for ArchiveRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 12,
            category_id: None,
            tag_id: None,
            author_id: None,
        }
    }
}

/// Trait for article backends.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Full-text search over published posts.
    async fn search_posts(&self, query: &str) -> Result<Vec<NewsArticle>>;

    /// One page of posts, optionally filtered by category, tag or author.
    async fn fetch_archive(&self, request: &ArchiveRequest) -> Result<ArchivePage>;

    /// A single post by slug.
    async fn post_by_slug(&self, slug: &str) -> Result<Option<NewsArticle>>;

    async fn category_by_slug(&self, slug: &str) -> Result<Option<Category>>;

    async fn tag_by_slug(&self, slug: &str) -> Result<Option<Tag>>;

    async fn author_by_slug(&self, slug: &str) -> Result<Option<Author>>;
}
