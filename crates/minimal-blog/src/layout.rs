use maud::{DOCTYPE, Markup, PreEscaped, html};
use maudit::maud::generator;
use maudit::route::PageContext;

mod footer;
mod header;

pub use footer::default_footer;
pub use header::header;

use crate::theme::Theme;

const THEME_CSS: &str = include_str!("../assets/theme.css");

/// Per-page values for the document `<head>`.
#[derive(Debug, Default)]
pub struct Document {
    /// Page title. The home page leaves it empty and uses `siteTitleAlt` instead.
    pub title: Option<String>,
    pub description: Option<String>,
    pub current_path: String,
    pub canonical_url: Option<String>,
}

impl Document {
    pub fn from_context(ctx: &PageContext, title: Option<String>) -> Self {
        Self {
            title,
            description: None,
            current_path: ctx.current_path.clone(),
            canonical_url: ctx.canonical_url(),
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn full_title(&self, theme: &Theme) -> String {
        match &self.title {
            Some(title) => format!("{} | {}", title, theme.metadata.site_title),
            None => theme.metadata.site_title_alt.clone(),
        }
    }
}

pub fn layout(theme: &Theme, document: &Document, main: Markup) -> Markup {
    let metadata = &theme.metadata;
    let title = document.full_title(theme);
    let description = document
        .description
        .as_deref()
        .unwrap_or(&metadata.site_headline);

    html! {
        (DOCTYPE)
        html lang=(metadata.site_language) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                (generator())
                title { (title) }
                meta name="description" content=(description);
                @if !metadata.author.is_empty() {
                    meta name="twitter:creator" content=(metadata.author);
                }
                meta property="og:title" content=(title);
                meta property="og:description" content=(description);
                meta property="og:type" content="website";
                @if let Some(canonical_url) = &document.canonical_url {
                    meta property="og:url" content=(canonical_url);
                    link rel="canonical" href=(canonical_url);
                }
                style { (PreEscaped(THEME_CSS)) }
                (theme.head)
            }
            body {
                div.container {
                    (header(theme, &document.current_path))
                    main { (main) }
                    ((theme.footer)())
                }
            }
        }
    }
}
