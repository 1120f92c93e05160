// src/pipeline/archive.rs

//! Archive listing pipeline.

use crate::error::{AppError, Result};
use crate::models::{ArchivePage, NewsArticle};
use crate::services::{ArchiveRequest, ArticleSource};

/// Archive filters as typed by a user: each is a numeric ID or a slug.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveFilter {
    pub category: Option<String>,
    pub tag: Option<String>,
    pub author: Option<String>,
}

/// Turn `filter` into an ID-based request, looking up slugs on `source`.
///
/// An unknown slug is a validation error.
pub async fn resolve_filter(
    source: &dyn ArticleSource,
    filter: &ArchiveFilter,
    page: u32,
    per_page: u32,
) -> Result<ArchiveRequest> {
    let category_id = match term_key(&filter.category) {
        None => None,
        Some(Key::Id(id)) => Some(id),
        Some(Key::Slug(slug)) => Some(
            source
                .category_by_slug(slug)
                .await?
                .ok_or_else(|| not_found("category", slug))?
                .id,
        ),
    };
    let tag_id = match term_key(&filter.tag) {
        None => None,
        Some(Key::Id(id)) => Some(id),
        Some(Key::Slug(slug)) => Some(
            source
                .tag_by_slug(slug)
                .await?
                .ok_or_else(|| not_found("tag", slug))?
                .id,
        ),
    };
    let author_id = match term_key(&filter.author) {
        None => None,
        Some(Key::Id(id)) => Some(id),
        Some(Key::Slug(slug)) => Some(
            source
                .author_by_slug(slug)
                .await?
                .ok_or_else(|| not_found("author", slug))?
                .id,
        ),
    };

    Ok(ArchiveRequest {
        page: page.max(1),
        per_page,
        category_id,
        tag_id,
        author_id,
    })
}

enum Key<'a> {
    Id(u64),
    Slug(&'a str),
}

fn term_key(value: &Option<String>) -> Option<Key<'_>> {
    let value = value.as_deref().map(str::trim).filter(|v| !v.is_empty())?;
    Some(match value.parse::<u64>() {
        Ok(id) => Key::Id(id),
        Err(_) => Key::Slug(value),
    })
}

fn not_found(kind: &str, slug: &str) -> AppError {
    AppError::validation(format!("No {kind} with slug '{slug}'"))
}

/// Fetch one archive page, sticky posts first.
pub async fn run_archive(
    source: &dyn ArticleSource,
    request: &ArchiveRequest,
) -> Result<ArchivePage> {
    let mut page = source.fetch_archive(request).await?;
    page.posts.sort_by_key(|post| !post.is_sticky);

    log::info!(
        "Archive page {}/{}: {} of {} posts",
        request.page.max(1),
        page.total_pages,
        page.posts.len(),
        page.total
    );
    Ok(page)
}

/// Look up a single post by slug.
pub async fn find_post(source: &dyn ArticleSource, slug: &str) -> Result<Option<NewsArticle>> {
    let post = source.post_by_slug(slug.trim()).await?;
    if post.is_none() {
        log::warn!("No post with slug '{}'", slug.trim());
    }
    Ok(post)
}
