//! Error types for the theme and its plugins.
use std::fmt::{self, Debug, Formatter};
use std::path::PathBuf;
use thiserror::Error;

macro_rules! impl_debug_for_error {
    ($($t:ty),*) => {
        $(
            impl Debug for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    // Errors returned from `main` are printed with Debug, show the Display message instead.
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

#[derive(Error)]
pub enum ThemeError {
    #[error("The theme was already installed for this build")]
    AlreadyInstalled,

    #[error("No theme installed, call `Theme::install` before rendering pages")]
    NotInstalled,

    #[error("Invalid options for the theme directive")]
    InvalidOptions(#[source] serde_json::Error),

    #[error("Navigation entry #{index} must have a non-empty title and slug")]
    InvalidNavigation { index: usize },

    #[error("`{format}` is not a valid date format string")]
    InvalidDateFormat { format: String },
}

#[derive(Error)]
pub enum PluginError {
    #[error("Unknown plugin `{name}`")]
    Unknown { name: String },

    #[error("Invalid options for plugin `{name}`")]
    InvalidOptions {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Plugin `{name}` requires a site URL, set `siteUrl` in the site metadata")]
    MissingSiteUrl { name: String },

    #[error("Manifest icon `{src}` was not found in the output directory at {path}")]
    MissingIcon { src: String, path: PathBuf },

    #[error("Plugin `{name}` failed to write {path}")]
    WriteFailed {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Plugin `{name}` failed to serialize its output")]
    Serialize {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

impl_debug_for_error!(ThemeError, PluginError);
