// src/pipeline/mod.rs

//! Pipeline entry points for search operations.
//!
//! - `run_search`: One-shot search with highlighted results
//! - `run_live`: Debounced search-as-you-type over a line stream
//! - `run_highlight`: Highlight a query in arbitrary text
//! - `run_archive`: List a page of posts, filtered by ID or slug

pub mod archive;
pub mod highlight;
pub mod live;
pub mod render;
pub mod search;

pub use archive::{ArchiveFilter, find_post, resolve_filter, run_archive};
pub use highlight::{HighlightFormat, run_highlight};
pub use live::{LiveResult, run_live};
pub use render::{RenderStyle, render_fragments};
pub use search::{Link, SearchHit, run_search};
