// src/search/mod.rs

//! Search-box utilities: query highlighting and call debouncing.
//!
//! Both are leaf components with no shared state.

mod debounce;
mod highlight;

pub use debounce::{DebounceState, Debounced, debounce, debounce_async};
pub use highlight::{
    DEFAULT_MARK_CLASS, Highlighter, escape_regex, highlight_search_term, highlighted_fragments,
};
