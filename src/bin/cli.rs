//! News search CLI
//!
//! Searches the configured WordPress site from the terminal.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use news_search::{
    error::{AppError, Result},
    models::Config,
    pipeline::{self, ArchiveFilter, HighlightFormat, RenderStyle, SearchHit},
    services::WordPressClient,
};

/// News search - query and highlight WordPress articles
#[derive(Parser, Debug)]
#[command(
    name = "news-search",
    version,
    about = "Search a WordPress news site with highlighted results"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search once and print highlighted results
    Search {
        /// Search query
        query: String,

        /// Output style
        #[arg(long, value_enum, default_value_t = RenderStyle::Ansi)]
        style: RenderStyle,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read queries from stdin, one per keystroke, and search as you type
    Live {
        /// Output style
        #[arg(long, value_enum, default_value_t = RenderStyle::Ansi)]
        style: RenderStyle,

        /// Override the configured debounce delay
        #[arg(long)]
        debounce_ms: Option<u64>,
    },

    /// Highlight a query in the given text (stdin when omitted)
    Highlight {
        /// Search query
        query: String,

        /// Text to highlight
        text: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = HighlightFormat::Html)]
        format: HighlightFormat,
    },

    /// List a page of posts
    Archive {
        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Posts per page
        #[arg(long, default_value_t = 12)]
        per_page: u32,

        /// Filter by category ID or slug
        #[arg(long)]
        category: Option<String>,

        /// Filter by tag ID or slug
        #[arg(long)]
        tag: Option<String>,

        /// Filter by author ID or slug
        #[arg(long)]
        author: Option<String>,

        /// Show a single post by slug instead
        #[arg(long, conflicts_with_all = ["page", "category", "tag", "author"])]
        slug: Option<String>,

        /// Line template ({id}, {title}, {slug}, {date}, {author}, {link}, {url})
        #[arg(long, default_value = "{date}  {title}  {url}")]
        template: String,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag and configured level.
fn init_logging(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn print_hits(hits: &[SearchHit], style: RenderStyle) {
    for hit in hits {
        println!("{}\n", hit.render(style));
    }
}

fn summary(query: &str, hits: &[SearchHit]) -> String {
    let matches: usize = hits.iter().map(SearchHit::match_count).sum();
    format!(
        "{} results for '{}' ({} highlighted matches)",
        hits.len(),
        query,
        matches
    )
}

fn wordpress(config: &Config) -> Result<WordPressClient> {
    let client = WordPressClient::new(config.wordpress.clone())?;
    if !client.is_configured() {
        log::warn!("No WordPress API URL configured (set WP_API_URL); searches return nothing");
    }
    Ok(client)
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = Config::load(&cli.config);
    let mut config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => Config::default(),
    };
    config.apply_env();
    init_logging(cli.verbose, &config.logging.level);

    match loaded {
        Ok(_) => log::debug!("Loaded configuration from {}", cli.config.display()),
        Err(e) => log::warn!(
            "Config load failed from {}: {}. Using defaults.",
            cli.config.display(),
            e
        ),
    }

    match cli.command {
        Command::Search { query, style, json } => {
            let client = wordpress(&config)?;
            let hits = pipeline::run_search(&client, &config, &query).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else {
                println!("{}\n", summary(query.trim(), &hits));
                print_hits(&hits, style);
            }
        }

        Command::Live { style, debounce_ms } => {
            if let Some(ms) = debounce_ms {
                config.search.debounce_ms = ms;
            }
            config.validate()?;

            let client = Arc::new(wordpress(&config)?);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());

            log::info!(
                "Type a query per line; searching after {} ms of quiet",
                config.search.debounce_ms
            );
            let results = pipeline::run_live(client, &config, stdin, |result| {
                if result.query.is_empty() {
                    println!("-- cleared --");
                    return;
                }
                println!("== {}", summary(&result.query, &result.hits));
                print_hits(&result.hits, style);
            })
            .await?;

            log::info!("{} searches completed", results.len());
        }

        Command::Highlight {
            query,
            text,
            format,
        } => {
            let text = match text {
                Some(text) => text,
                None => std::io::read_to_string(std::io::stdin())?,
            };
            let output = pipeline::run_highlight(&text, &query, format, &config.search)?;
            println!("{output}");
        }

        Command::Archive {
            page,
            per_page,
            category,
            tag,
            author,
            slug,
            template,
        } => {
            let client = wordpress(&config)?;

            if let Some(slug) = slug {
                let Some(post) = pipeline::find_post(&client, &slug).await? else {
                    return Err(AppError::validation(format!("No post with slug '{slug}'")));
                };
                println!("{}", post.format(&template));
                return Ok(());
            }

            let filter = ArchiveFilter {
                category,
                tag,
                author,
            };
            let request = pipeline::resolve_filter(&client, &filter, page, per_page).await?;
            let archive = pipeline::run_archive(&client, &request).await?;
            for post in &archive.posts {
                println!("{}", post.format(&template));
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
            if !config.wordpress.is_configured() {
                log::warn!("wordpress.api_url is empty; searches will return nothing");
            }
        }
    }

    Ok(())
}
