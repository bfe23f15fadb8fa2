use std::error::Error;

use maud::{Markup, PreEscaped, html};
use maudit::route::prelude::*;

use crate::content::{PAGES, PageContent};
use crate::layout::{Document, layout};
use crate::theme::Theme;

/// Standalone pages such as `/about`, one per file in `content/pages`.
#[route("/[page]")]
pub struct MarkdownPage;

#[derive(Params, Clone)]
pub struct MarkdownPageParams {
    pub page: String,
}

impl Route<MarkdownPageParams> for MarkdownPage {
    fn pages(&self, ctx: &mut DynamicRouteContext) -> Pages<MarkdownPageParams> {
        ctx.content::<PageContent>(PAGES)
            .into_pages(|entry| {
                Page::from_params(MarkdownPageParams {
                    page: entry.id.clone(),
                })
            })
    }

    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        render_page(ctx)
    }
}

fn render_page(ctx: &mut PageContext) -> Result<Markup, Box<dyn Error>> {
    let theme = Theme::current()?;
    let params = ctx.params::<MarkdownPageParams>();
    let entry = ctx.content::<PageContent>(PAGES)
        .get_entry(&params.page);

    let title = entry.data(ctx).title.clone();
    let content = entry.render(ctx);

    let main = html! {
        h1 { (title) }
        section { (PreEscaped(content)) }
    };

    Ok(layout(theme, &Document::from_context(ctx, Some(title)), main))
}
