use log::info;
use maud::{Markup, PreEscaped, html};
use serde::Deserialize;

use super::{Plugin, PluginContext};
use crate::errors::PluginError;

pub(super) const NAME: &str = "offline";
const SERVICE_WORKER_FILE: &str = "sw.js";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OfflineOptions {
    /// Bump to invalidate caches of previous deployments.
    pub cache_name: String,
    /// Extra URLs to pre-cache besides the built pages, e.g. icons.
    pub precache: Vec<String>,
}

impl Default for OfflineOptions {
    fn default() -> Self {
        Self {
            cache_name: "offline-v1".to_string(),
            precache: Vec::new(),
        }
    }
}

/// Writes a service worker that pre-caches every page, and registers it on every page.
pub struct Offline {
    options: OfflineOptions,
}

impl Offline {
    pub fn new(options: OfflineOptions) -> Self {
        Self { options }
    }

    fn service_worker(&self, urls: &[String]) -> String {
        let cache_name = serde_json::Value::from(self.options.cache_name.as_str());
        let urls = serde_json::Value::from(urls.to_vec());

        format!(
            r#"const CACHE_NAME = {cache_name};
const PRECACHE_URLS = {urls};

self.addEventListener("install", (event) => {{
  event.waitUntil(
    caches.open(CACHE_NAME).then((cache) => cache.addAll(PRECACHE_URLS)).then(() => self.skipWaiting())
  );
}});

self.addEventListener("activate", (event) => {{
  event.waitUntil(
    caches.keys().then((names) =>
      Promise.all(names.filter((name) => name !== CACHE_NAME).map((name) => caches.delete(name)))
    ).then(() => self.clients.claim())
  );
}});

self.addEventListener("fetch", (event) => {{
  if (event.request.method !== "GET") return;
  event.respondWith(
    fetch(event.request)
      .then((response) => {{
        const copy = response.clone();
        caches.open(CACHE_NAME).then((cache) => cache.put(event.request, copy));
        return response;
      }})
      .catch(() => caches.match(event.request))
  );
}});
"#
        )
    }
}

impl Plugin for Offline {
    fn name(&self) -> &'static str {
        NAME
    }

    fn head(&self) -> Option<Markup> {
        Some(html! {
            script {
                (PreEscaped(format!(
                    "if(\"serviceWorker\" in navigator){{window.addEventListener(\"load\",function(){{navigator.serviceWorker.register(\"/{}\");}});}}",
                    SERVICE_WORKER_FILE
                )))
            }
        })
    }

    fn post_build(&self, ctx: &PluginContext) -> Result<(), PluginError> {
        let mut urls: Vec<String> = ctx
            .pages
            .iter()
            .filter(|url| !url.ends_with("404.html"))
            .cloned()
            .chain(self.options.precache.iter().cloned())
            .collect();
        urls.sort();
        urls.dedup();

        ctx.write(NAME, SERVICE_WORKER_FILE, self.service_worker(&urls).as_bytes())?;

        info!(target: "plugins", "Generated {} pre-caching {} URLs", SERVICE_WORKER_FILE, urls.len());
        Ok(())
    }
}
