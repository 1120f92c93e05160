// src/models/mod.rs

//! Domain models for the search application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod article;
mod config;
mod fragment;
mod wordpress;

// Re-export all public types
pub use article::{
    ArchivePage, Author, Category, FeaturedImage, NewsArticle, Tag, UNKNOWN_AUTHOR,
};
pub use config::{Config, LoggingConfig, SearchConfig, SiteConfig, WordPressConfig};
pub use fragment::{Fragment, FragmentKind};
pub use wordpress::{WpAuthor, WpEmbedded, WpMedia, WpMediaDetails, WpPost, WpRendered, WpTerm};

#[cfg(test)]
pub(crate) use article::fixtures;
