use std::error::Error;

use maud::{Markup, html};
use maudit::route::prelude::*;

use crate::layout::{Document, layout};
use crate::theme::Theme;

#[route("404.html")]
pub struct NotFound;

impl Route for NotFound {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        render_not_found(ctx)
    }
}

fn render_not_found(ctx: &mut PageContext) -> Result<Markup, Box<dyn Error>> {
    let theme = Theme::current()?;

    let main = html! {
        h1 { "404 - Page not found" }
        p { "You just hit a route that doesn't exist." }
        a href="/" { "Go back home" }
    };

    Ok(layout(
        theme,
        &Document::from_context(ctx, Some("404 - Not Found".to_string())),
        main,
    ))
}
