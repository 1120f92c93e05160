// src/lib.rs

//! News search library: WordPress article search, query highlighting and
//! debounced search-as-you-type.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod search;
pub mod services;
pub mod utils;
