//! Pages provided by the theme.
use maud::{Markup, html};

use crate::content::{PostSummary, tag_slug};
use crate::theme::Theme;

mod blog;
mod home;
mod not_found;
mod page;
mod tags;

pub use blog::{Blog, Post, PostParams};
pub use home::Home;
pub use not_found::NotFound;
pub use page::{MarkdownPage, MarkdownPageParams};
pub use tags::{Tag, TagParams, Tags};

/// `None` for tags that have no page, see [`crate::content::tags`].
pub(crate) fn tag_url(tag: &str) -> Option<String> {
    let slug = tag_slug(tag);
    (!slug.is_empty()).then(|| format!("/tags/{}", slug))
}

/// Date and tags of a post.
pub(crate) fn post_meta(theme: &Theme, date: &chrono::NaiveDate, tags: &[String]) -> Markup {
    html! {
        p.post-meta {
            time datetime=(date.format("%Y-%m-%d").to_string()) { (theme.format_date(date)) }
            @if !tags.is_empty() {
                " · "
                @for (i, tag) in tags.iter().enumerate() {
                    @if i > 0 { ", " }
                    @if let Some(url) = tag_url(tag) {
                        a href=(url) { (tag) }
                    } @else {
                        (tag)
                    }
                }
            }
        }
    }
}

pub(crate) fn post_list(theme: &Theme, posts: &[PostSummary]) -> Markup {
    html! {
        @if posts.is_empty() {
            p { "Nothing here yet." }
        } @else {
            ul.post-list {
                @for post in posts {
                    li {
                        a.post-title href=(post.url()) { (post.title) }
                        (post_meta(theme, &post.date, &post.tags))
                        @if let Some(description) = &post.description {
                            p { (description) }
                        }
                    }
                }
            }
        }
    }
}
