// src/pipeline/search.rs

//! One-shot search pipeline.

use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use super::render::{RenderStyle, render_fragments};
use crate::error::{AppError, Result};
use crate::models::{Config, Fragment, NewsArticle};
use crate::search::Highlighter;
use crate::services::ArticleSource;
use crate::utils::{self, date};

/// A named link on the public site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub name: String,
    /// Absolute URL; `None` when the target has no page
    pub href: Option<String>,
}

/// A search result ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub id: u64,
    pub slug: String,
    /// Absolute article URL on the public site
    pub url: String,
    /// Relative or long-form publication date
    pub date: String,
    pub author: Link,
    pub categories: Vec<Link>,
    pub tags: Vec<Link>,
    pub title: Vec<Fragment>,
    pub excerpt: Vec<Fragment>,
    #[serde(skip)]
    mark_class: String,
}

impl SearchHit {
    /// Build a hit from an article, highlighting title and excerpt.
    pub fn from_article(
        article: &NewsArticle,
        highlighter: &Highlighter,
        config: &Config,
        now: NaiveDateTime,
    ) -> Self {
        let excerpt = utils::truncate(
            &utils::normalize_whitespace(&article.plain_excerpt()),
            config.search.excerpt_length,
        );

        let site = config.site.url.as_str();
        let author = &article.author;

        Self {
            id: article.id,
            slug: article.slug.clone(),
            url: utils::absolute(site, &utils::article_url(&article.slug)),
            date: date::format_relative_time(&article.date, now),
            author: Link {
                name: author.name.clone(),
                href: (!author.slug.is_empty())
                    .then(|| utils::absolute(site, &utils::author_url(&author.slug))),
            },
            categories: article
                .categories
                .iter()
                .map(|c| Link {
                    name: utils::category_display_name(c).to_string(),
                    href: Some(utils::absolute(site, &utils::category_href(c))),
                })
                .collect(),
            tags: article
                .tags
                .iter()
                .map(|t| Link {
                    name: t.name.clone(),
                    href: Some(utils::absolute(site, &utils::tag_url(&t.slug))),
                })
                .collect(),
            title: highlighter.fragments(article.plain_title().as_str()),
            excerpt: highlighter.fragments(excerpt.as_str()),
            mark_class: config.search.mark_class.clone(),
        }
    }

    /// Number of highlighted spans in title and excerpt.
    pub fn match_count(&self) -> usize {
        self.title
            .iter()
            .chain(&self.excerpt)
            .filter(|f| f.is_match())
            .count()
    }

    /// Render the hit as a small block of text or HTML.
    pub fn render(&self, style: RenderStyle) -> String {
        let title = render_fragments(&self.title, style, &self.mark_class);
        let excerpt = render_fragments(&self.excerpt, style, &self.mark_class);

        match style {
            RenderStyle::Html => {
                let mut meta = vec![utils::escape_html(&self.date), html_link(&self.author)];
                meta.extend(self.categories.iter().map(html_link));
                let mut out = format!(
                    "<article class=\"search-result\">\n  <h3><a href=\"{}\">{}</a></h3>\n  <p class=\"meta\">{}</p>\n",
                    utils::escape_html(&self.url),
                    title,
                    meta.join(" · "),
                );
                if !excerpt.is_empty() {
                    out.push_str(&format!("  <p>{excerpt}</p>\n"));
                }
                out.push_str("</article>");
                out
            }
            RenderStyle::Ansi | RenderStyle::Plain => {
                let mut out = format!("{title}\n  {} · {}", self.date, self.author.name);
                if !self.categories.is_empty() {
                    let names: Vec<&str> = self.categories.iter().map(|c| c.name.as_str()).collect();
                    out.push_str(&format!(" · [{}]", names.join(", ")));
                }
                out.push_str(&format!(" · {}", self.url));
                if !excerpt.is_empty() {
                    out.push_str(&format!("\n  {excerpt}"));
                }
                out
            }
        }
    }
}

fn html_link(link: &Link) -> String {
    let name = utils::escape_html(&link.name);
    match &link.href {
        Some(href) => format!("<a href=\"{}\">{}</a>", utils::escape_html(href), name),
        None => name,
    }
}

/// Search `source` for `query` and highlight the results.
///
/// A blank query returns no hits without querying the source.
pub async fn run_search(
    source: &dyn ArticleSource,
    config: &Config,
    query: &str,
) -> Result<Vec<SearchHit>> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let articles = source
        .search_posts(query)
        .await
        .map_err(|e| AppError::search(query, e))?;
    log::debug!("Search '{}' found {} articles", query, articles.len());

    let highlighter = Highlighter::new(query).with_mark_class(Some(&config.search.mark_class));
    let now = Local::now().naive_local();

    Ok(articles
        .iter()
        .map(|article| SearchHit::from_article(article, &highlighter, config, now))
        .collect())
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::error::{AppError, Result};
    use crate::models::{ArchivePage, Author, Category, NewsArticle, Tag};
    use crate::services::{ArchiveRequest, ArticleSource};

    /// In-memory source that records every search it receives.
    #[derive(Default)]
    pub struct FakeSource {
        pub articles: Vec<NewsArticle>,
        pub categories: Vec<Category>,
        pub tags: Vec<Tag>,
        pub authors: Vec<Author>,
        /// Fail every search
        pub fail: bool,
        /// Fail searches for these queries only
        pub fail_on: Vec<String>,
        pub queries: Mutex<Vec<String>>,
        pub requests: Mutex<Vec<ArchiveRequest>>,
    }

    impl FakeSource {
        pub fn with(articles: Vec<NewsArticle>) -> Self {
            Self {
                articles,
                ..Self::default()
            }
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        pub fn queries(&self) -> Vec<String> {
            self.queries.lock().unwrap().clone()
        }

        pub fn requests(&self) -> Vec<ArchiveRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ArticleSource for FakeSource {
        async fn search_posts(&self, query: &str) -> Result<Vec<NewsArticle>> {
            self.queries.lock().unwrap().push(query.to_string());
            if self.fail || self.fail_on.iter().any(|q| q == query) {
                return Err(AppError::config("source offline"));
            }
            let needle = query.to_lowercase();
            Ok(self
                .articles
                .iter()
                .filter(|a| {
                    a.title.to_lowercase().contains(&needle)
                        || a.excerpt.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect())
        }

        async fn fetch_archive(&self, request: &ArchiveRequest) -> Result<ArchivePage> {
            self.requests.lock().unwrap().push(request.clone());
            let per_page = request.per_page.max(1) as usize;
            let start = (request.page.max(1) as usize - 1) * per_page;
            let posts: Vec<_> = self
                .articles
                .iter()
                .skip(start)
                .take(per_page)
                .cloned()
                .collect();
            let total = self.articles.len() as u64;
            Ok(ArchivePage {
                posts,
                total,
                total_pages: total.div_ceil(per_page as u64).max(1),
            })
        }

        async fn post_by_slug(&self, slug: &str) -> Result<Option<NewsArticle>> {
            Ok(self.articles.iter().find(|a| a.slug == slug).cloned())
        }

        async fn category_by_slug(&self, slug: &str) -> Result<Option<Category>> {
            Ok(self.categories.iter().find(|c| c.slug == slug).cloned())
        }

        async fn tag_by_slug(&self, slug: &str) -> Result<Option<Tag>> {
            Ok(self.tags.iter().find(|t| t.slug == slug).cloned())
        }

        async fn author_by_slug(&self, slug: &str) -> Result<Option<Author>> {
            Ok(self.authors.iter().find(|a| a.slug == slug).cloned())
        }
    }
}
