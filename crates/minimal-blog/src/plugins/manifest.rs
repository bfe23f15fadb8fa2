use log::info;
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use super::{Plugin, PluginContext};
use crate::errors::PluginError;

pub(super) const NAME: &str = "manifest";
const MANIFEST_FILE: &str = "manifest.webmanifest";

/// An image browsers can use to represent the installed site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl ManifestIcon {
    pub fn png(src: impl Into<String>, sizes: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            sizes: sizes.into(),
            mime_type: "image/png".to_string(),
        }
    }
}

/// Written as-is to the web app manifest, field names follow the manifest format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestOptions {
    pub name: String,
    pub short_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub start_url: String,
    pub background_color: String,
    pub theme_color: String,
    pub display: String,
    pub icons: Vec<ManifestIcon>,
}

/// Writes `manifest.webmanifest` and links it from every page.
pub struct Manifest {
    options: ManifestOptions,
}

impl Manifest {
    pub fn new(mut options: ManifestOptions) -> Self {
        if options.start_url.is_empty() {
            options.start_url = "/".to_string();
        }
        if options.display.is_empty() {
            options.display = "minimal-ui".to_string();
        }

        Self { options }
    }

    pub fn to_json(&self) -> Result<String, PluginError> {
        serde_json::to_string_pretty(&self.options).map_err(|source| PluginError::Serialize {
            name: NAME.to_string(),
            source,
        })
    }
}

impl Plugin for Manifest {
    fn name(&self) -> &'static str {
        NAME
    }

    fn head(&self) -> Option<Markup> {
        Some(html! {
            link rel="manifest" href=(format!("/{}", MANIFEST_FILE));
            @if !self.options.theme_color.is_empty() {
                meta name="theme-color" content=(self.options.theme_color);
            }
            @if let Some(icon) = self.options.icons.first() {
                link rel="apple-touch-icon" sizes=(icon.sizes) href=(icon.src);
            }
        })
    }

    fn post_build(&self, ctx: &PluginContext) -> Result<(), PluginError> {
        for icon in &self.options.icons {
            let path = ctx.output_dir.join(icon.src.trim_start_matches('/'));
            if !path.is_file() {
                return Err(PluginError::MissingIcon {
                    src: icon.src.clone(),
                    path,
                });
            }
        }

        ctx.write(NAME, MANIFEST_FILE, self.to_json()?.as_bytes())?;

        info!(target: "plugins", "Generated {} with {} icons", MANIFEST_FILE, self.options.icons.len());
        Ok(())
    }
}
