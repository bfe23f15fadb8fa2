use log::info;
use serde::Deserialize;

use super::{Plugin, PluginContext};
use crate::errors::PluginError;

pub(super) const NAME: &str = "netlify";
const HEADERS_FILE: &str = "_headers";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NetlifyOptions {
    /// Extra headers per path pattern, written after the defaults.
    pub headers: Vec<(String, Vec<String>)>,
    /// Whether to add security headers to every route. Default: `true`
    pub merge_security_headers: Option<bool>,
}

/// Writes Netlify's `_headers` file.
pub struct Netlify {
    options: NetlifyOptions,
}

impl Netlify {
    pub fn new(options: NetlifyOptions) -> Self {
        Self { options }
    }

    fn headers_file(&self) -> String {
        let mut rules: Vec<(String, Vec<String>)> = Vec::new();

        if self.options.merge_security_headers.unwrap_or(true) {
            rules.push((
                "/*".to_string(),
                vec![
                    "X-Frame-Options: DENY".to_string(),
                    "X-XSS-Protection: 1; mode=block".to_string(),
                    "X-Content-Type-Options: nosniff".to_string(),
                    "Referrer-Policy: same-origin".to_string(),
                ],
            ));
        }

        rules.push((
            "/_maudit/*".to_string(),
            vec!["Cache-Control: public, max-age=31536000, immutable".to_string()],
        ));
        rules.push((
            "/sw.js".to_string(),
            vec!["Cache-Control: no-cache".to_string()],
        ));
        rules.extend(self.options.headers.iter().cloned());

        let mut file = String::new();
        for (path, headers) in rules {
            file.push_str(&path);
            file.push('\n');
            for header in headers {
                file.push_str("  ");
                file.push_str(&header);
                file.push('\n');
            }
        }

        file
    }
}

impl Plugin for Netlify {
    fn name(&self) -> &'static str {
        NAME
    }

    fn post_build(&self, ctx: &PluginContext) -> Result<(), PluginError> {
        ctx.write(NAME, HEADERS_FILE, self.headers_file().as_bytes())?;

        info!(target: "plugins", "Generated {}", HEADERS_FILE);
        Ok(())
    }
}
