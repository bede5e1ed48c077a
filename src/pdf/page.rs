use super::content::{font_name, render_drawing};
use super::refs::{ObjectReferences, RefType};
use crate::error::SlidesError;
use crate::font::FontFace;
use crate::layout::{Canvas, SlideDrawing};
use crate::rect::Rect;
use pdf_writer::{Filter, Finish, Name, Pdf};

/// One slide as a PDF page
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where passage text lives, i.e. within the margins
    pub content_box: Rect,
    pub drawing: SlideDrawing,
}

impl Page {
    pub fn new(canvas: &Canvas, drawing: SlideDrawing) -> Page {
        Page {
            media_box: canvas.media_box(),
            content_box: canvas.content_box(),
            drawing,
        }
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &[FontFace],
        writer: &mut Pdf,
    ) -> Result<(), SlidesError> {
        let id = refs
            .get(RefType::Page(page_index))
            .ok_or(SlidesError::PageMissing)?;
        let parent = refs
            .get(RefType::PageTree)
            .ok_or(SlidesError::PageMissing)?;
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(parent);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for face in fonts {
            if let Some(font_ref) = refs.get(RefType::Font(*face)) {
                resource_fonts.pair(Name(font_name(*face).as_bytes()), font_ref);
            }
        }
        resource_fonts.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let rendered = render_drawing(&self.drawing);
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            rendered.as_slice(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        let mut stream = writer.stream(content_id, compressed.as_slice());
        stream.filter(Filter::FlateDecode);
        Ok(())
    }
}
