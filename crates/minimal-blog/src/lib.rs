//! A minimal blog theme for [Maudit](https://maudit.org).
//!
//! The theme renders a home page, a blog listing, posts, tags and standalone markdown pages. Sites customize it through
//! the options of the `minimal-blog` directive and can replace its footer. Other directives resolve to
//! [`plugins`](crate::plugins) that run alongside the build.

// Modules the end-user will interact directly or indirectly with
pub mod content;
pub mod errors;
pub mod layout;
pub mod options;
pub mod plugins;
pub mod routes;
pub mod theme;

mod logging;

use std::error::Error;
use std::path::PathBuf;

use maudit::{BuildOptions, BuildOutput, coronate, routes};

use errors::ThemeError;
use options::{SiteMetadata, ThemeOptions};
use plugins::{PluginContext, PluginDirective, PluginSet, THEME_PLUGIN};
use theme::{Component, Theme};

pub use maudit;

/// Reads the theme options out of the plugin list. Without a theme directive, the defaults are used.
pub fn theme_options(directives: &[PluginDirective]) -> Result<ThemeOptions, ThemeError> {
    match directives.iter().find(|d| d.name() == THEME_PLUGIN) {
        Some(directive) => ThemeOptions::from_value(directive.options()),
        None => Ok(ThemeOptions::default()),
    }
}

/// 🪶 Theme entrypoint. Builds the site with Maudit, then runs the plugins.
///
/// ## Example
/// ```rust,no_run
/// use minimal_blog::{build, maudit::BuildOptions, options::SiteMetadata, plugins::PluginDirective};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let plugins = vec![PluginDirective::bare("sitemap")];
///     build(SiteMetadata::default(), &plugins, None, BuildOptions::default())?;
///     Ok(())
/// }
/// ```
pub fn build(
    metadata: SiteMetadata,
    directives: &[PluginDirective],
    footer: Option<Component>,
    mut options: BuildOptions,
) -> Result<BuildOutput, Box<dyn Error>> {
    let theme_options = theme_options(directives)?;
    let plugins = PluginSet::from_directives(directives)?;

    if options.base_url.is_none() && !metadata.site_url.is_empty() {
        options.base_url = Some(metadata.site_url.trim_end_matches('/').to_string());
    }
    plugins.configure(&mut options)?;

    let mut theme = Theme::new(metadata, theme_options).with_head(plugins.head());
    if let Some(footer) = footer {
        theme = theme.with_footer(footer);
    }
    let theme = Theme::install(theme)?;

    let output_dir: PathBuf = options.output_dir.clone();

    let output = coronate(
        routes![
            routes::Home,
            routes::Blog,
            routes::Post,
            routes::Tags,
            routes::Tag,
            routes::MarkdownPage,
            routes::NotFound
        ],
        content::content_sources(),
        options,
    )?;

    plugins.post_build(&PluginContext::new(&theme.metadata, &output_dir, &output.pages))?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_theme_options_from_directive() {
        let directives = vec![
            PluginDirective::bare("sitemap"),
            PluginDirective::resolved(
                THEME_PLUGIN,
                json!({ "navigation": [{ "title": "Blog", "slug": "/blog" }] }),
            ),
        ];

        let options = theme_options(&directives).unwrap();
        assert_eq!(options.navigation[0].slug, "/blog");
    }

    #[test]
    fn test_theme_options_default_without_directive() {
        let options = theme_options(&[PluginDirective::bare("offline")]).unwrap();
        assert_eq!(options, ThemeOptions::default());
    }
}
