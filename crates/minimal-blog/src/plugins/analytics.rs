use log::warn;
use maud::{Markup, PreEscaped, html};
use serde::Deserialize;
use serde_json::json;

use super::{Plugin, PluginContext};
use crate::errors::PluginError;

pub(super) const NAME: &str = "google-analytics";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoogleAnalyticsOptions {
    /// Usually read from the environment. Without it the plugin renders nothing.
    pub tracking_id: Option<String>,
    pub anonymize: bool,
    /// Skip tracking for visitors sending `Do Not Track`.
    pub respect_dnt: bool,
}

/// Adds the gtag.js snippet to every page.
pub struct GoogleAnalytics {
    options: GoogleAnalyticsOptions,
}

impl GoogleAnalytics {
    pub fn new(options: GoogleAnalyticsOptions) -> Self {
        Self { options }
    }
}

impl GoogleAnalyticsOptions {
    pub fn tracking_id(&self) -> Option<&str> {
        self.tracking_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

impl Plugin for GoogleAnalytics {
    fn name(&self) -> &'static str {
        NAME
    }

    fn head(&self) -> Option<Markup> {
        let tracking_id = self.options.tracking_id()?;

        let config = if self.options.anonymize {
            json!({ "anonymize_ip": true })
        } else {
            json!({})
        };

        let mut script = format!(
            "window.dataLayer=window.dataLayer||[];function gtag(){{dataLayer.push(arguments);}}gtag('js',new Date());gtag('config',{},{});",
            json!(tracking_id),
            config
        );

        if self.options.respect_dnt {
            script = format!(
                "if(!(navigator.doNotTrack===\"1\"||window.doNotTrack===\"1\")){{{}}}",
                script
            );
        }

        // Keep the payload from closing the script element early.
        let script = script.replace("</", "<\\/");

        Some(html! {
            script async src=(format!("https://www.googletagmanager.com/gtag/js?id={}", tracking_id)) {}
            script { (PreEscaped(script)) }
        })
    }

    fn post_build(&self, _ctx: &PluginContext) -> Result<(), PluginError> {
        if self.options.tracking_id().is_none() {
            warn!(target: "plugins", "{}: no tracking ID set, pages were built without analytics", NAME);
        }

        Ok(())
    }
}
