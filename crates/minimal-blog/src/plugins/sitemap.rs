use maudit::BuildOptions;
use serde::Deserialize;

use super::Plugin;
use crate::errors::PluginError;

pub(super) const NAME: &str = "sitemap";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SitemapOptions {
    /// Name of the sitemap, or of the sitemap index when the URLs are split. Default: `"sitemap.xml"`
    pub output: String,
    /// Maximum number of URLs per sitemap file. Default: `10000`
    pub max_urls_per_sitemap: usize,
    /// Priority given to every page, between `0.0` and `1.0`.
    pub default_priority: Option<f32>,
}

impl Default for SitemapOptions {
    fn default() -> Self {
        Self {
            output: "sitemap.xml".to_string(),
            max_urls_per_sitemap: 10000,
            default_priority: None,
        }
    }
}

/// Turns on Maudit's sitemap generation. Maudit lists the URL of every page it writes, except `404.html`.
pub struct Sitemap {
    options: SitemapOptions,
}

impl Sitemap {
    pub fn new(options: SitemapOptions) -> Self {
        Self { options }
    }
}

impl Plugin for Sitemap {
    fn name(&self) -> &'static str {
        NAME
    }

    fn configure(&self, options: &mut BuildOptions) -> Result<(), PluginError> {
        if options.base_url.as_deref().is_none_or(str::is_empty) {
            return Err(PluginError::MissingSiteUrl {
                name: NAME.to_string(),
            });
        }

        options.sitemap = maudit::SitemapOptions {
            enabled: true,
            filename: self.options.output.clone(),
            max_urls_per_sitemap: self.options.max_urls_per_sitemap,
            default_priority: self.options.default_priority,
            ..Default::default()
        };

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_options(base_url: Option<&str>) -> BuildOptions {
        BuildOptions {
            base_url: base_url.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_configure_enables_sitemap() {
        let mut options = build_options(Some("https://example.com"));

        Sitemap::new(SitemapOptions::default())
            .configure(&mut options)
            .unwrap();

        assert!(options.sitemap.enabled);
        assert_eq!(options.sitemap.filename, "sitemap.xml");
        assert_eq!(options.sitemap.max_urls_per_sitemap, 10000);
        assert_eq!(options.sitemap.default_priority, None);
    }

    #[test]
    fn test_configure_passes_options_through() {
        let mut options = build_options(Some("https://example.com"));

        Sitemap::new(SitemapOptions {
            output: "pages.xml".to_string(),
            max_urls_per_sitemap: 2,
            default_priority: Some(0.5),
        })
        .configure(&mut options)
        .unwrap();

        assert_eq!(options.sitemap.filename, "pages.xml");
        assert_eq!(options.sitemap.max_urls_per_sitemap, 2);
        assert_eq!(options.sitemap.default_priority, Some(0.5));
    }

    #[test]
    fn test_configure_requires_base_url() {
        for base_url in [None, Some("")] {
            let mut options = build_options(base_url);
            let result = Sitemap::new(SitemapOptions::default()).configure(&mut options);

            match result {
                Err(PluginError::MissingSiteUrl { name }) => assert_eq!(name, "sitemap"),
                _ => panic!("expected a missing site URL error"),
            }
            assert!(!options.sitemap.enabled);
        }
    }
}
