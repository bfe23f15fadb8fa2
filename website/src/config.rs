//! Site configuration: metadata, the theme's navigation and the plugin list.
//!
//! The environment is loaded from `.env` before the record is built so that the analytics tracking ID can be read
//! from `GOOGLE_ANALYTICS_ID`.
use std::path::{Path, PathBuf};

use log::{debug, warn};
use minimal_blog::options::{ExternalLink, NavigationEntry, SiteMetadata};
use minimal_blog::plugins::{ManifestIcon, PluginDirective, THEME_PLUGIN};
use serde_json::{Value, json};

pub const TRACKING_ID_VAR: &str = "GOOGLE_ANALYTICS_ID";

pub struct SiteConfig {
    pub site_metadata: SiteMetadata,
    /// Applied in order by the theme.
    pub plugins: Vec<PluginDirective>,
}

impl SiteConfig {
    /// Builds the record from the current process environment.
    pub fn from_env() -> Self {
        Self {
            site_metadata: site_metadata(),
            plugins: vec![
                PluginDirective::resolved(
                    THEME_PLUGIN,
                    json!({
                        "navigation": navigation(),
                        "externalLinks": external_links(),
                    }),
                ),
                PluginDirective::resolved(
                    "google-analytics",
                    json!({ "trackingId": tracking_id() }),
                ),
                PluginDirective::bare("sitemap"),
                PluginDirective::resolved(
                    "manifest",
                    json!({
                        "name": "Yunus Emre Dilber - Personal Blog",
                        "short_name": "Yunus Emre Dilber",
                        "description": "Developer. I love to make beautiful and well-coded applications. Also, interested in compiler and interpreters.",
                        "start_url": "/",
                        "background_color": "#fff",
                        "theme_color": "#6B46C1",
                        "display": "standalone",
                        "icons": manifest_icons(),
                    }),
                ),
                PluginDirective::bare("offline"),
                PluginDirective::bare("netlify"),
            ],
        }
    }

    /// First directive for the plugin `name`.
    pub fn plugin(&self, name: &str) -> Option<&PluginDirective> {
        self.plugins.iter().find(|directive| directive.name() == name)
    }

    /// Options of the plugin `name`, `null` for bare directives.
    pub fn plugin_options(&self, name: &str) -> Option<&Value> {
        self.plugin(name).map(PluginDirective::options)
    }
}

/// Loads `.env` into the environment, then builds the configuration.
pub fn site_config() -> SiteConfig {
    load_env();
    SiteConfig::from_env()
}

/// Loads `.env` from the working directory. Variables already set are left alone.
pub fn load_env() -> Option<PathBuf> {
    load_env_from(Path::new(".env"))
}

pub fn load_env_from(path: &Path) -> Option<PathBuf> {
    match dotenvy::from_path(path) {
        Ok(()) => {
            debug!(target: "config", "Loaded environment from {}", path.display());
            Some(path.to_path_buf())
        }
        Err(err) if err.not_found() => {
            debug!(target: "config", "No environment file at {}", path.display());
            None
        }
        Err(err) => {
            warn!(target: "config", "Ignoring environment file {}: {}", path.display(), err);
            None
        }
    }
}

/// The analytics tracking ID, when `GOOGLE_ANALYTICS_ID` is set to something.
pub fn tracking_id() -> Option<String> {
    std::env::var(TRACKING_ID_VAR)
        .ok()
        .filter(|id| !id.trim().is_empty())
}

pub fn site_metadata() -> SiteMetadata {
    SiteMetadata {
        site_title: "Yunus Emre Dilber".to_string(),
        site_title_alt: "Yunus Emre Dilber - Personal Blog".to_string(),
        site_headline: "Developer. I love to make beautiful and well-coded applications."
            .to_string(),
        site_url: "https://yunusemredilber.com".to_string(),
        site_language: "en".to_string(),
        author: "@yunusemredilber".to_string(),
    }
}

pub fn navigation() -> Vec<NavigationEntry> {
    vec![
        NavigationEntry::new("Blog", "/blog"),
        NavigationEntry::new("About", "/about"),
    ]
}

pub fn external_links() -> Vec<ExternalLink> {
    vec![
        ExternalLink::new("Twitter", "https://twitter.com/yunusemredilber"),
        ExternalLink::new("Dev", "https://dev.to/yunusemredilber"),
        ExternalLink::new("Github", "https://github.com/yunusemredilber"),
    ]
}

pub fn manifest_icons() -> Vec<ManifestIcon> {
    vec![
        ManifestIcon::png("/android-chrome-192x192.png", "192x192"),
        ManifestIcon::png("/android-chrome-512x512.png", "512x512"),
    ]
}
