// src/pipeline/render.rs

//! Rendering of highlighted fragments for different outputs.

use serde::{Deserialize, Serialize};

use crate::models::{Fragment, FragmentKind};
use crate::utils::escape_html;

const ANSI_MATCH: &str = "\x1b[7m";
const ANSI_RESET: &str = "\x1b[0m";

/// Output style for rendered results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// Escaped HTML with `<mark>` around matches
    Html,
    /// Reverse video around matches, for terminals
    #[default]
    Ansi,
    /// `**match**`, no control characters
    Plain,
}

/// Render fragments in `style`.
///
/// HTML output escapes every fragment value, so article text is never
/// interpreted as markup. `mark_class` only applies to HTML.
pub fn render_fragments(fragments: &[Fragment], style: RenderStyle, mark_class: &str) -> String {
    let mut out = String::new();
    for fragment in fragments {
        match (fragment.kind, style) {
            (FragmentKind::Text, RenderStyle::Html) => out.push_str(&escape_html(&fragment.value)),
            (FragmentKind::Text, _) => out.push_str(&fragment.value),
            (FragmentKind::Match, RenderStyle::Html) => {
                let class = mark_class.trim();
                if class.is_empty() {
                    out.push_str("<mark>");
                } else {
                    out.push_str(&format!("<mark class=\"{}\">", escape_html(class)));
                }
                out.push_str(&escape_html(&fragment.value));
                out.push_str("</mark>");
            }
            (FragmentKind::Match, RenderStyle::Ansi) => {
                out.push_str(ANSI_MATCH);
                out.push_str(&fragment.value);
                out.push_str(ANSI_RESET);
            }
            (FragmentKind::Match, RenderStyle::Plain) => {
                out.push_str("**");
                out.push_str(&fragment.value);
                out.push_str("**");
            }
        }
    }
    out
}
