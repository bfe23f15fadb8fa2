use std::fmt::Write;
use std::sync::OnceLock;

use maud::{Markup, html};

use crate::errors::ThemeError;
use crate::layout::default_footer;
use crate::options::{SiteMetadata, ThemeOptions};

/// A component the site can substitute for one of the theme's own.
pub type Component = fn() -> Markup;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Everything the theme's pages need to render, installed once per build.
pub struct Theme {
    pub metadata: SiteMetadata,
    pub options: ThemeOptions,
    /// Rendered at the bottom of every page.
    pub footer: Component,
    /// Extra markup for `<head>`, contributed by plugins.
    pub head: Markup,
}

impl Theme {
    pub fn new(metadata: SiteMetadata, options: ThemeOptions) -> Self {
        Self {
            metadata,
            options,
            footer: default_footer,
            head: html! {},
        }
    }

    pub fn with_footer(mut self, footer: Component) -> Self {
        self.footer = footer;
        self
    }

    pub fn with_head(mut self, head: Markup) -> Self {
        self.head = head;
        self
    }

    /// Makes the theme available to pages through [`Theme::current`].
    pub fn install(theme: Theme) -> Result<&'static Theme, ThemeError> {
        THEME.set(theme).map_err(|_| ThemeError::AlreadyInstalled)?;
        Theme::current()
    }

    pub fn current() -> Result<&'static Theme, ThemeError> {
        THEME.get().ok_or(ThemeError::NotInstalled)
    }

    /// Formats a post date with the theme's `formatString`, falling back to `YYYY-MM-DD` if it cannot be applied.
    pub fn format_date(&self, date: &chrono::NaiveDate) -> String {
        let mut formatted = String::new();
        match write!(formatted, "{}", date.format(&self.options.format_string)) {
            Ok(()) => formatted,
            Err(_) => date.format("%Y-%m-%d").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn theme(format_string: &str) -> Theme {
        Theme::new(
            SiteMetadata::default(),
            ThemeOptions {
                format_string: format_string.to_string(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2020, 5, 17).unwrap();
        assert_eq!(theme("%d.%m.%Y").format_date(&date), "17.05.2020");
    }

    #[test]
    fn test_format_date_falls_back_on_invalid_format() {
        let date = NaiveDate::from_ymd_opt(2020, 5, 17).unwrap();
        assert_eq!(theme("%Q").format_date(&date), "2020-05-17");
    }
}
