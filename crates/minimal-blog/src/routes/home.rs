use std::error::Error;

use maud::{Markup, html};
use maudit::route::prelude::*;

use super::post_list;
use crate::content::posts;
use crate::layout::{Document, layout};
use crate::theme::Theme;

#[route("/")]
pub struct Home;

impl Route for Home {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        render_home(ctx)
    }
}

fn render_home(ctx: &mut PageContext) -> Result<Markup, Box<dyn Error>> {
    let theme = Theme::current()?;

    let posts = posts(ctx);
    let latest = &posts[..posts.len().min(theme.options.latest_posts)];

    let main = html! {
        section.hero {
            p { (theme.metadata.site_headline) }
        }
        h2 { "Latest Posts" }
        (post_list(theme, latest))
        @if posts.len() > latest.len() {
            a href="/blog" { "Read all posts" }
        }
    };

    Ok(layout(theme, &Document::from_context(ctx, None), main))
}
