use chrono::Datelike;
use maud::{Markup, html};

pub const PROFILE_URL: &str = "https://github.com/yunusemredilber";
pub const THEME_URL: &str =
    "https://github.com/LekoArts/gatsby-themes/tree/master/themes/gatsby-theme-minimal-blog";

/// Footer of every page, with the copyright for the current year.
pub fn footer() -> Markup {
    footer_for_year(chrono::Local::now().year())
}

pub fn footer_for_year(year: i32) -> Markup {
    html! {
        footer.flex.flex-col."md:flex-row".justify-between.mt-6.text-secondary.divider-top.links-secondary {
            div {
                "© " (year) " by "
                a aria-label="Link to the my Github Profile" target="_blank" href=(PROFILE_URL) {
                    "Yunus Emre Dilber"
                }
            }
            div {
                a aria-label="Link to the theme's GitHub repository" href=(THEME_URL) { "Theme" }
                " by LekoArts"
            }
        }
    }
}
