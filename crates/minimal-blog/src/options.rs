//! Typed views over the site metadata and the theme directive's options.
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ThemeError;

/// Site-wide metadata, read once when the build starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMetadata {
    pub site_title: String,
    /// Used as the document title of the home page.
    pub site_title_alt: String,
    pub site_headline: String,
    /// Absolute URL of the deployed site, without a trailing slash.
    pub site_url: String,
    pub site_language: String,
    pub author: String,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            site_title: "Minimal Blog".to_string(),
            site_title_alt: "Minimal Blog".to_string(),
            site_headline: String::new(),
            site_url: String::new(),
            site_language: "en".to_string(),
            author: String::new(),
        }
    }
}

/// A link in the header navigation. Rendered in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    pub title: String,
    pub slug: String,
}

impl NavigationEntry {
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
        }
    }
}

/// A link to another website, rendered on the right side of the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub name: String,
    pub url: String,
}

impl ExternalLink {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Options accepted by the `minimal-blog` directive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeOptions {
    pub navigation: Vec<NavigationEntry>,
    pub external_links: Vec<ExternalLink>,
    /// `chrono` format string used for post dates.
    pub format_string: String,
    /// Number of posts listed on the home page.
    pub latest_posts: usize,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            navigation: Vec::new(),
            external_links: Vec::new(),
            format_string: "%d.%m.%Y".to_string(),
            latest_posts: 3,
        }
    }
}

impl ThemeOptions {
    /// Reads the options out of the untyped payload of a directive. `null` yields the defaults.
    pub fn from_value(value: &Value) -> Result<Self, ThemeError> {
        let options: ThemeOptions = if value.is_null() {
            ThemeOptions::default()
        } else {
            ThemeOptions::deserialize(value).map_err(ThemeError::InvalidOptions)?
        };

        if let Some(index) = options
            .navigation
            .iter()
            .position(|entry| entry.title.trim().is_empty() || entry.slug.trim().is_empty())
        {
            return Err(ThemeError::InvalidNavigation { index });
        }

        if StrftimeItems::new(&options.format_string).any(|item| matches!(item, Item::Error)) {
            return Err(ThemeError::InvalidDateFormat {
                format: options.format_string,
            });
        }

        Ok(options)
    }

    /// Returns the navigation entry matching `path`, ignoring trailing slashes.
    pub fn active_navigation(&self, path: &str) -> Option<&NavigationEntry> {
        let path = path.trim_end_matches('/');
        self.navigation
            .iter()
            .find(|entry| entry.slug.trim_end_matches('/') == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_keeps_navigation_order() {
        let options = ThemeOptions::from_value(&json!({
            "navigation": [
                { "title": "Blog", "slug": "/blog" },
                { "title": "About", "slug": "/about" },
            ],
            "externalLinks": [
                { "name": "Github", "url": "https://github.com/example" },
            ],
        }))
        .unwrap();

        let titles: Vec<_> = options.navigation.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Blog", "About"]);
        assert_eq!(options.external_links[0].url, "https://github.com/example");
        assert_eq!(options.format_string, "%d.%m.%Y");
        assert_eq!(options.latest_posts, 3);
    }

    #[test]
    fn test_from_value_null_is_default() {
        assert_eq!(
            ThemeOptions::from_value(&Value::Null).unwrap(),
            ThemeOptions::default()
        );
    }

    #[test]
    fn test_from_value_rejects_empty_slug() {
        let result = ThemeOptions::from_value(&json!({
            "navigation": [
                { "title": "Blog", "slug": "/blog" },
                { "title": "About", "slug": "" },
            ],
        }));

        assert!(matches!(
            result,
            Err(ThemeError::InvalidNavigation { index: 1 })
        ));
    }

    #[test]
    fn test_from_value_rejects_wrong_shape() {
        let result = ThemeOptions::from_value(&json!({ "navigation": "blog" }));
        assert!(matches!(result, Err(ThemeError::InvalidOptions(_))));
    }

    #[test]
    fn test_from_value_rejects_invalid_date_format() {
        let result = ThemeOptions::from_value(&json!({ "formatString": "%Q" }));

        match result {
            Err(ThemeError::InvalidDateFormat { format }) => assert_eq!(format, "%Q"),
            _ => panic!("expected an invalid date format error"),
        }

        let options = ThemeOptions::from_value(&json!({ "formatString": "%B %e, %Y" })).unwrap();
        assert_eq!(options.format_string, "%B %e, %Y");
    }

    #[test]
    fn test_active_navigation_ignores_trailing_slash() {
        let options = ThemeOptions {
            navigation: vec![
                NavigationEntry::new("Blog", "/blog"),
                NavigationEntry::new("About", "/about"),
            ],
            ..Default::default()
        };

        assert_eq!(options.active_navigation("/about/").unwrap().title, "About");
        assert!(options.active_navigation("/tags").is_none());
    }
}
