// src/pipeline/live.rs

//! Search-as-you-type pipeline.
//!
//! Each input line is what the search box holds after a keystroke. Non-blank
//! queries go through a debounced search, so a burst of typing costs one
//! request for the final query.

use std::sync::Arc;

use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use super::search::{SearchHit, run_search};
use crate::error::{AppError, Result};
use crate::models::Config;
use crate::search::{DebounceState, debounce_async};
use crate::services::ArticleSource;

/// Results of one settled query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveResult {
    /// Trimmed query; empty when the box was cleared
    pub query: String,
    pub hits: Vec<SearchHit>,
}

/// Read queries from `input` until EOF, reporting each settled search.
///
/// A blank line reports an empty result right away. It does not cancel a
/// search that is already pending. At EOF the pending search, if any, is
/// allowed to fire and every in-flight search is awaited. A failed search is
/// logged and reported with no hits, so earlier results never stand in for it.
///
/// Returns every reported result in arrival order.
pub async fn run_live<R, F>(
    source: Arc<dyn ArticleSource>,
    config: &Config,
    input: R,
    mut on_result: F,
) -> Result<Vec<LiveResult>>
where
    R: AsyncBufRead + Unpin,
    F: FnMut(&LiveResult),
{
    let (tx, mut rx) = mpsc::unbounded_channel::<LiveResult>();

    let wait = config.search.debounce();
    let searcher = {
        let tx = tx.clone();
        let config = Arc::new(config.clone());
        debounce_async(
            move |query: String| {
                let source = Arc::clone(&source);
                let config = Arc::clone(&config);
                let tx = tx.clone();
                async move {
                    let hits = match run_search(source.as_ref(), &config, &query).await {
                        Ok(hits) => {
                            log::info!("'{}': {} results", query, hits.len());
                            hits
                        }
                        Err(e) => {
                            log::warn!("{}", e);
                            Vec::new()
                        }
                    };
                    let _ = tx.send(LiveResult { query, hits });
                    Ok::<(), AppError>(())
                }
            },
            wait,
        )
    };

    let mut results = Vec::new();
    let mut lines = input.lines();

    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => {
                    let query = line.trim();
                    if query.is_empty() {
                        let _ = tx.send(LiveResult { query: String::new(), hits: Vec::new() });
                    } else {
                        log::debug!("Query typed: '{}'", query);
                        searcher.call(query.to_string());
                    }
                }
                None => break,
            },
            Some(result) = rx.recv() => {
                on_result(&result);
                results.push(result);
            }
        }
    }

    while searcher.state() == DebounceState::Pending {
        tokio::time::sleep(searcher.wait()).await;
    }

    // In-flight searches hold the last senders; the channel closes once they finish.
    drop(searcher);
    drop(tx);
    while let Some(result) = rx.recv().await {
        on_result(&result);
        results.push(result);
    }

    Ok(results)
}
