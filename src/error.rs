use crate::font::FontFace;
use crate::units::Pt;
use std::path::PathBuf;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum SlidesError {
    #[error("passage `{reference}` has no content to lay out")]
    /// The passage had no content blocks after normalization
    EmptyPassage { reference: String },

    #[error("no font metrics available for {font} at {size}pt")]
    /// The metrics provider cannot measure this face / size combination
    UnresolvedFontMetrics { font: FontFace, size: Pt },

    #[error("unsupported font `{0}` (expected Helvetica, Times-Roman or Courier)")]
    /// A font name that is not one of the supported families
    UnknownFont(String),

    #[error("config file {path} is invalid: {source}")]
    /// The settings file could not be parsed
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{0}")]
    /// The settings are unusable (e.g. a missing API key)
    Settings(String),

    #[error("input file {path}: {reason}")]
    /// The reference list file was missing or empty
    InputFile { path: PathBuf, reason: String },

    #[error("{0}")]
    /// The passage API rejected or failed the request
    Api(String),

    #[error(transparent)]
    /// The HTTP request itself failed
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    /// The API returned a body that is not the expected JSON
    Json(#[from] serde_json::Error),

    #[error("a page in the page order is missing from the document")]
    /// A page id in the page order doesn't refer to a page of the document
    PageMissing,

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),
}

/// Non-fatal conditions found while laying out a passage. These are collected
/// and handed back alongside a successful result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutWarning {
    #[error("word `{word}` is wider than the available {available}pt")]
    /// A single word is wider than the line it was placed on
    OverflowWord { word: String, available: Pt },

    #[error("`{text}` is {height}pt tall but a slide only holds {capacity}pt")]
    /// A single line or heading is taller than an entire slide
    OversizedElement { text: String, height: Pt, capacity: Pt },
}
