//! Writes laid out slides to a PDF: one page per slide, drawn with the base-14
//! fonts so no font data needs embedding.

mod content;
mod document;
mod encoding;
mod info;
mod page;
mod refs;

pub use document::Document;
pub use info::Info;
pub use page::Page;

use crate::error::SlidesError;
use crate::font::FontMetrics;
use crate::layout::{compose_slide, LayoutContext, Pagination};
use log::info;
use std::io::Write;

/// Build a document holding every slide of the given passages, in order
pub fn build_document(
    paginations: &[Pagination],
    ctx: &LayoutContext,
    metrics: &dyn FontMetrics,
) -> Result<Document, SlidesError> {
    let references: Vec<&str> = paginations
        .iter()
        .map(|pagination| pagination.reference.as_str())
        .collect();

    let mut info = Info::new();
    info.title(references.join("; "))
        .subject(format!("Scripture slides ({})", ctx.attribution));

    let mut document = Document::default();
    document.set_info(info);
    for pagination in paginations {
        for slide in pagination.slides.iter() {
            let drawing = compose_slide(slide, ctx, metrics)?;
            document.add_page(Page::new(&ctx.canvas, drawing));
        }
    }
    Ok(document)
}

/// Render the given passages as one PDF into `w`
pub fn write_slides<W: Write>(
    paginations: &[Pagination],
    ctx: &LayoutContext,
    metrics: &dyn FontMetrics,
    w: W,
) -> Result<(), SlidesError> {
    let document = build_document(paginations, ctx, metrics)?;
    info!(
        "writing {} slides for {} passage(s)",
        document.page_count(),
        paginations.len()
    );
    document.write(w)
}
