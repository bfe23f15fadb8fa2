//! Plugins extend the build with head markup and generated files.
//!
//! The site declares its plugins as an ordered list of [`PluginDirective`]s, each naming a plugin and carrying an
//! untyped options payload. Plugins parse their own options when resolved, the configuration itself is never validated.
//!
//! ## Example
//! ```rust
//! use minimal_blog::plugins::{PluginDirective, PluginSet};
//! use serde_json::json;
//!
//! let directives = vec![
//!     PluginDirective::resolved("google-analytics", json!({ "trackingId": "UA-000000-1" })),
//!     PluginDirective::bare("sitemap"),
//! ];
//!
//! let plugins = PluginSet::from_directives(&directives).unwrap();
//! assert_eq!(plugins.names(), vec!["google-analytics", "sitemap"]);
//! ```
use std::path::{Component, Path, PathBuf};
use std::time::Instant;

use colored::Colorize;
use log::{debug, info};
use maud::{Markup, html};
use maudit::{BuildOptions, PageOutput};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::PluginError;
use crate::logging::{FormatElapsedTimeOptions, format_elapsed_time, print_title};
use crate::options::SiteMetadata;

mod analytics;
mod manifest;
mod netlify;
mod offline;
mod sitemap;

pub use analytics::{GoogleAnalytics, GoogleAnalyticsOptions};
pub use manifest::{Manifest, ManifestIcon, ManifestOptions};
pub use netlify::{Netlify, NetlifyOptions};
pub use offline::{Offline, OfflineOptions};
pub use sitemap::{Sitemap, SitemapOptions};

/// Identifier of the theme's own directive. Resolving it yields no plugin, its options configure the theme.
pub const THEME_PLUGIN: &str = "minimal-blog";

static NO_OPTIONS: Value = Value::Null;

/// An entry of the plugin list: a bare plugin name, or a name with options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginDirective {
    Bare(String),
    Resolved { resolve: String, options: Value },
}

impl PluginDirective {
    pub fn bare(name: impl Into<String>) -> Self {
        PluginDirective::Bare(name.into())
    }

    pub fn resolved(name: impl Into<String>, options: Value) -> Self {
        PluginDirective::Resolved {
            resolve: name.into(),
            options,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            PluginDirective::Bare(name) => name,
            PluginDirective::Resolved { resolve, .. } => resolve,
        }
    }

    /// The options payload, `null` for bare directives.
    pub fn options(&self) -> &Value {
        match self {
            PluginDirective::Bare(_) => &NO_OPTIONS,
            PluginDirective::Resolved { options, .. } => options,
        }
    }
}

/// What plugins get to see once Maudit has written every page.
pub struct PluginContext<'a> {
    pub metadata: &'a SiteMetadata,
    pub output_dir: &'a Path,
    /// URLs of every page written, e.g. `/blog/hello-world/`.
    pub pages: Vec<String>,
}

impl<'a> PluginContext<'a> {
    /// Collects the URLs of the pages Maudit wrote into `output_dir`.
    pub fn new(metadata: &'a SiteMetadata, output_dir: &'a Path, pages: &[PageOutput]) -> Self {
        let pages = pages
            .iter()
            .filter_map(|page| {
                let url = page_url(output_dir, Path::new(&page.file_path));
                if url.is_none() {
                    debug!(target: "plugins", "{} was written outside of {}", page.file_path, output_dir.display());
                }
                url
            })
            .collect();

        Self {
            metadata,
            output_dir,
            pages,
        }
    }

    /// Absolute URL for a route, using the site URL from the metadata.
    pub fn absolute_url(&self, route: &str) -> String {
        format!(
            "{}/{}",
            self.metadata.site_url.trim_end_matches('/'),
            route.trim_start_matches('/')
        )
    }

    pub(crate) fn write(&self, name: &str, file: &str, contents: &[u8]) -> Result<PathBuf, PluginError> {
        let path = self.output_dir.join(file);
        std::fs::write(&path, contents).map_err(|source| PluginError::WriteFailed {
            name: name.to_string(),
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

/// URL serving `file_path`, relative to the output directory. `index.html` files are served from their directory.
pub fn page_url(output_dir: &Path, file_path: &Path) -> Option<String> {
    let relative = file_path.strip_prefix(output_dir).ok()?;

    let segments = relative
        .components()
        .map(|component| match component {
            Component::Normal(segment) => segment.to_str(),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?;

    let url = format!("/{}", segments.join("/"));
    match url.strip_suffix("index.html") {
        Some(directory) => Some(directory.to_string()),
        None => Some(url),
    }
}

pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    /// Adjusts Maudit's options before the build starts.
    fn configure(&self, _options: &mut BuildOptions) -> Result<(), PluginError> {
        Ok(())
    }

    /// Markup added to the `<head>` of every page.
    fn head(&self) -> Option<Markup> {
        None
    }

    /// Runs after the build, typically to write files into the output directory.
    fn post_build(&self, _ctx: &PluginContext) -> Result<(), PluginError> {
        Ok(())
    }
}

/// Parses the options of a directive, treating `null` as the plugin's defaults.
pub(crate) fn parse_options<T>(name: &str, options: &Value) -> Result<T, PluginError>
where
    T: DeserializeOwned + Default,
{
    if options.is_null() {
        return Ok(T::default());
    }

    T::deserialize(options).map_err(|source| PluginError::InvalidOptions {
        name: name.to_string(),
        source,
    })
}

/// Turns a directive into the plugin it names. The theme's own directive resolves to `None`.
pub fn resolve(directive: &PluginDirective) -> Result<Option<Box<dyn Plugin>>, PluginError> {
    let name = directive.name();
    let options = directive.options();

    let plugin: Box<dyn Plugin> = match name {
        THEME_PLUGIN => return Ok(None),
        analytics::NAME => Box::new(GoogleAnalytics::new(parse_options(name, options)?)),
        sitemap::NAME => Box::new(Sitemap::new(parse_options(name, options)?)),
        manifest::NAME => Box::new(Manifest::new(parse_options(name, options)?)),
        offline::NAME => Box::new(Offline::new(parse_options(name, options)?)),
        netlify::NAME => Box::new(Netlify::new(parse_options(name, options)?)),
        _ => {
            return Err(PluginError::Unknown {
                name: name.to_string(),
            });
        }
    };

    Ok(Some(plugin))
}

/// Resolved plugins, in declaration order.
#[derive(Default)]
pub struct PluginSet(Vec<Box<dyn Plugin>>);

impl PluginSet {
    pub fn new(plugins: Vec<Box<dyn Plugin>>) -> Self {
        Self(plugins)
    }

    pub fn from_directives(directives: &[PluginDirective]) -> Result<Self, PluginError> {
        let mut plugins = Vec::with_capacity(directives.len());
        for directive in directives {
            if let Some(plugin) = resolve(directive)? {
                plugins.push(plugin);
            }
        }

        Ok(Self(plugins))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.0.iter().map(|plugin| plugin.name()).collect()
    }

    pub fn head(&self) -> Markup {
        html! {
            @for plugin in &self.0 {
                @if let Some(head) = plugin.head() {
                    (head)
                }
            }
        }
    }

    /// Lets every plugin adjust the build options, in order.
    pub fn configure(&self, options: &mut BuildOptions) -> Result<(), PluginError> {
        for plugin in &self.0 {
            plugin.configure(options)?;
        }

        Ok(())
    }

    /// Runs every plugin's post-build step in order, stopping at the first error.
    pub fn post_build(&self, ctx: &PluginContext) -> Result<(), PluginError> {
        if self.0.is_empty() {
            return Ok(());
        }

        print_title("running plugins");

        let elapsed_options = FormatElapsedTimeOptions::default();
        let plugins_start = Instant::now();

        for plugin in &self.0 {
            let start = Instant::now();
            plugin.post_build(ctx)?;
            info!(
                target: "plugins",
                "{} {}",
                plugin.name(),
                format_elapsed_time(start.elapsed(), &elapsed_options)
            );
        }

        info!(
            target: "plugins",
            "{}",
            format!(
                "{} plugins ran in {}",
                self.0.len(),
                format_elapsed_time(plugins_start.elapsed(), &elapsed_options)
            )
            .bold()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_directive_deserializes_both_shapes() {
        let directives: Vec<PluginDirective> = serde_json::from_value(json!([
            "sitemap",
            { "resolve": "google-analytics", "options": { "trackingId": "UA-1" } },
        ]))
        .unwrap();

        assert_eq!(directives[0], PluginDirective::bare("sitemap"));
        assert_eq!(directives[1].name(), "google-analytics");
        assert_eq!(directives[1].options()["trackingId"], "UA-1");
        assert!(directives[0].options().is_null());
    }

    #[test]
    fn test_from_directives_keeps_order_and_skips_theme() {
        let directives = vec![
            PluginDirective::resolved(THEME_PLUGIN, json!({ "navigation": [] })),
            PluginDirective::bare("netlify"),
            PluginDirective::bare("sitemap"),
            PluginDirective::bare("offline"),
        ];

        let plugins = PluginSet::from_directives(&directives).unwrap();
        assert_eq!(plugins.names(), vec!["netlify", "sitemap", "offline"]);
    }

    #[test]
    fn test_unknown_plugin_is_rejected() {
        let result = PluginSet::from_directives(&[PluginDirective::bare("webpack-bundle-analyser")]);

        match result {
            Err(PluginError::Unknown { name }) => assert_eq!(name, "webpack-bundle-analyser"),
            _ => panic!("expected an unknown plugin error"),
        }
    }

    #[test]
    fn test_invalid_options_name_the_plugin() {
        let result = resolve(&PluginDirective::resolved(
            "sitemap",
            json!({ "maxUrlsPerSitemap": "many" }),
        ));

        match result {
            Err(PluginError::InvalidOptions { name, .. }) => assert_eq!(name, "sitemap"),
            _ => panic!("expected invalid options"),
        }
    }

    #[test]
    fn test_absolute_url() {
        let metadata = SiteMetadata {
            site_url: "https://example.com/".to_string(),
            ..Default::default()
        };
        let ctx = PluginContext {
            metadata: &metadata,
            output_dir: Path::new("dist"),
            pages: vec![],
        };

        assert_eq!(ctx.absolute_url("/blog/post"), "https://example.com/blog/post");
        assert_eq!(ctx.absolute_url("/"), "https://example.com/");
    }

    fn page(route: &str, file_path: &Path) -> PageOutput {
        PageOutput {
            route: route.to_string(),
            file_path: file_path.to_string_lossy().to_string(),
            params: None,
            cached: false,
        }
    }

    #[test]
    fn test_context_pages_are_urls_not_route_patterns() {
        let metadata = SiteMetadata::default();
        let output_dir = Path::new("dist");
        let pages = vec![
            page("/", &output_dir.join("index.html")),
            page("/blog/[post]", &output_dir.join("blog/hello-world/index.html")),
            page("/[page]", &output_dir.join("about/index.html")),
            page("/tags/[tag]", &output_dir.join("tags/rust/index.html")),
            page("404.html", &output_dir.join("404.html")),
            page("/elsewhere", Path::new("other/index.html")),
        ];

        let ctx = PluginContext::new(&metadata, output_dir, &pages);

        assert_eq!(
            ctx.pages,
            vec!["/", "/blog/hello-world/", "/about/", "/tags/rust/", "/404.html"]
        );
        assert!(ctx.pages.iter().all(|url| !url.contains('[')));
    }

    #[test]
    fn test_configure_runs_every_plugin() {
        let directives = vec![
            PluginDirective::bare("offline"),
            PluginDirective::resolved("sitemap", json!({ "output": "map.xml" })),
        ];
        let plugins = PluginSet::from_directives(&directives).unwrap();

        let mut options = BuildOptions {
            base_url: Some("https://example.com".to_string()),
            ..Default::default()
        };
        plugins.configure(&mut options).unwrap();

        assert!(options.sitemap.enabled);
        assert_eq!(options.sitemap.filename, "map.xml");
    }

    #[test]
    fn test_head_concatenates_in_order() {
        struct Named(&'static str);
        impl Plugin for Named {
            fn name(&self) -> &'static str {
                self.0
            }
            fn head(&self) -> Option<Markup> {
                Some(html! { meta name=(self.0); })
            }
        }

        let plugins = PluginSet::new(vec![Box::new(Named("first")), Box::new(Named("second"))]);
        assert_eq!(
            plugins.head().into_string(),
            r#"<meta name="first"><meta name="second">"#
        );
    }
}
