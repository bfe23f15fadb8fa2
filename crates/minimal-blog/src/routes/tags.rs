use std::error::Error;

use maud::{Markup, html};
use maudit::route::prelude::*;

use super::post_list;
use crate::content::{posts, posts_for_pages, tag_slug, tags};
use crate::layout::{Document, layout};
use crate::theme::Theme;

#[route("/tags")]
pub struct Tags;

impl Route for Tags {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        render_tags(ctx)
    }
}

fn render_tags(ctx: &mut PageContext) -> Result<Markup, Box<dyn Error>> {
    let theme = Theme::current()?;
    let tags = tags(&posts(ctx));

    let main = html! {
        h1 { "Tags" }
        ul {
            @for (name, slug, count) in &tags {
                li {
                    a href=(format!("/tags/{}", slug)) { (name) }
                    " (" (count) ")"
                }
            }
        }
    };

    Ok(layout(
        theme,
        &Document::from_context(ctx, Some("Tags".to_string())),
        main,
    ))
}

#[route("/tags/[tag]")]
pub struct Tag;

#[derive(Params, Clone)]
pub struct TagParams {
    pub tag: String,
}

impl Route<TagParams> for Tag {
    fn pages(&self, ctx: &mut DynamicRouteContext) -> Pages<TagParams> {
        tags(&posts_for_pages(ctx))
            .into_iter()
            .map(|(_, slug, _)| Page::from_params(TagParams { tag: slug }))
            .collect()
    }

    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        render_tag(ctx)
    }
}

fn render_tag(ctx: &mut PageContext) -> Result<Markup, Box<dyn Error>> {
    let theme = Theme::current()?;
    let params = ctx.params::<TagParams>();

    let tagged: Vec<_> = posts(ctx)
        .into_iter()
        .filter(|post| post.tags.iter().any(|tag| tag_slug(tag) == params.tag))
        .collect();

    let name = tagged
        .iter()
        .flat_map(|post| &post.tags)
        .find(|tag| tag_slug(tag) == params.tag)
        .cloned()
        .unwrap_or_else(|| params.tag.clone());

    let main = html! {
        h1 { "Tag: " (name) }
        (post_list(theme, &tagged))
        a href="/tags" { "View all tags" }
    };

    Ok(layout(
        theme,
        &Document::from_context(ctx, Some(format!("Tag: {}", name))),
        main,
    ))
}
