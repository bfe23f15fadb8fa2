use std::error::Error;

use maud::{Markup, PreEscaped, html};
use maudit::route::prelude::*;

use super::{post_list, post_meta};
use crate::content::{POSTS, PostContent, posts};
use crate::layout::{Document, layout};
use crate::theme::Theme;

#[route("/blog")]
pub struct Blog;

impl Route for Blog {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        render_blog(ctx)
    }
}

fn render_blog(ctx: &mut PageContext) -> Result<Markup, Box<dyn Error>> {
    let theme = Theme::current()?;
    let posts = posts(ctx);

    let main = html! {
        h1 { "Blog" }
        (post_list(theme, &posts))
    };

    Ok(layout(
        theme,
        &Document::from_context(ctx, Some("Blog".to_string())),
        main,
    ))
}

#[route("/blog/[post]")]
pub struct Post;

#[derive(Params, Clone)]
pub struct PostParams {
    pub post: String,
}

impl Route<PostParams> for Post {
    fn pages(&self, ctx: &mut DynamicRouteContext) -> Pages<PostParams> {
        ctx.content::<PostContent>(POSTS)
            .into_pages(|entry| {
                Page::from_params(PostParams {
                    post: entry.id.clone(),
                })
            })
    }

    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        render_post(ctx)
    }
}

fn render_post(ctx: &mut PageContext) -> Result<Markup, Box<dyn Error>> {
    let theme = Theme::current()?;
    let params = ctx.params::<PostParams>();
    let entry = ctx.content::<PostContent>(POSTS)
        .get_entry(&params.post);

    let data = entry.data(ctx);
    let title = data.title.clone();
    let date = data.date;
    let description = data.description.clone();
    let tags = data.tags.clone().unwrap_or_default();

    let content = entry.render(ctx);

    let main = html! {
        article {
            h1 { (title) }
            (post_meta(theme, &date, &tags))
            section { (PreEscaped(content)) }
        }
    };

    Ok(layout(
        theme,
        &Document::from_context(ctx, Some(title)).with_description(description),
        main,
    ))
}
