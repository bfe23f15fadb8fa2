use chrono::Datelike;
use maud::{Markup, html};

use crate::theme::Theme;

/// Used when the site doesn't provide its own footer.
pub fn default_footer() -> Markup {
    let year = chrono::Local::now().year();
    let site_title = Theme::current()
        .map(|theme| theme.metadata.site_title.clone())
        .unwrap_or_default();

    html! {
        footer.footer.divider-top.links-secondary {
            div { "© " (year) " by " (site_title) ". All rights reserved." }
            div { "Built with " a href="https://maudit.org" { "Maudit" } }
        }
    }
}
