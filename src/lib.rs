//! Turns scripture passages into fixed-size presentation slides.
//!
//! A [Passage] is normalized once from raw text (verse markers, section
//! headings, indented poetry), then [layout::paginate] wraps and distributes it
//! over a title slide and as many body slides as it needs. Slides can be
//! composed into positioned text runs and written to a PDF with [pdf].

mod colour;
pub use colour::*;

mod config;
pub use config::*;

mod error;
pub use error::*;

/// Retrieving passage text from the ESV API
pub mod esv;

mod font;
pub use font::*;

/// Utility functions and structures to wrap, paginate and position passage text on slides
pub mod layout;

/// File naming for generated documents
pub mod output;

mod passage;
pub use passage::*;

pub mod pdf;

mod rect;
pub use rect::*;

pub mod settings;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
