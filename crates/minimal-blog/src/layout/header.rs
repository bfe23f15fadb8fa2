use maud::{Markup, html};

use crate::theme::Theme;

pub fn header(theme: &Theme, current_path: &str) -> Markup {
    let options = &theme.options;
    let active = options.active_navigation(current_path);

    html! {
        header.header {
            div.header-title {
                a href="/" aria-label=(format!("{} - Back to home", theme.metadata.site_title)) {
                    h1 { (theme.metadata.site_title) }
                }
            }
            div.header-links.divider-bottom {
                nav {
                    @for entry in &options.navigation {
                        @if active == Some(entry) {
                            a href=(entry.slug) aria-current="page" { (entry.title) }
                        } @else {
                            a href=(entry.slug) { (entry.title) }
                        }
                    }
                }
                @if !options.external_links.is_empty() {
                    div.external-links {
                        @for link in &options.external_links {
                            a href=(link.url) target="_blank" rel="noopener noreferrer" { (link.name) }
                        }
                    }
                }
            }
        }
    }
}
