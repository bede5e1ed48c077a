use super::info::Info;
use super::page::Page;
use super::refs::{ObjectReferences, RefType};
use crate::error::SlidesError;
use crate::font::FontFace;
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Name, Pdf, Ref};
use std::io::Write;

#[derive(Default)]
/// A document stores every slide page of the PDF, then renders it out with a
/// call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// The faces drawn anywhere in the document, in [FontFace::all] order
    pub fn faces(&self) -> Vec<FontFace> {
        let used: Vec<FontFace> = self
            .pages
            .iter()
            .flat_map(|(_, page)| page.drawing.faces())
            .collect();
        FontFace::all()
            .iter()
            .copied()
            .filter(|face| used.contains(face))
            .collect()
    }

    /// Write the entire document to the writer. The document is rendered in
    /// memory first, then written out in one go.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), SlidesError> {
        let faces = self.faces();
        let Document {
            info,
            pages,
            page_order,
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        let page_refs: Vec<Ref> = (0..page_order.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for face in faces.iter() {
            let id = refs.gen(RefType::Font(*face));
            writer
                .type1_font(id)
                .base_font(Name(face.base_font().as_bytes()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(SlidesError::PageMissing)?;
            page.write(&mut refs, page_index, &faces, &mut writer)?;
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}
