//! Components replacing the theme's own.
mod footer;

pub use footer::{PROFILE_URL, THEME_URL, footer, footer_for_year};
