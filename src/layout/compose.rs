use super::{split_verse_numbers, LayoutContext, LineRun, PlacedElement, Slide, WrappedLine};
use crate::colour::Colour;
use crate::error::SlidesError;
use crate::font::{FontFace, FontMetrics};
use crate::units::Pt;

/// A run of text at an absolute position. `x` and `y` are the start of the
/// baseline in PDF coordinates (origin at the bottom-left of the slide).
#[derive(Debug, Clone, PartialEq)]
pub struct DrawText {
    pub text: String,
    pub x: Pt,
    pub y: Pt,
    pub face: FontFace,
    pub size: Pt,
    pub colour: Colour,
}

/// Everything needed to paint one slide
#[derive(Debug, Clone, PartialEq)]
pub struct SlideDrawing {
    pub width: Pt,
    pub height: Pt,
    pub background: Colour,
    pub texts: Vec<DrawText>,
    pub footer: Option<DrawText>,
}

impl SlideDrawing {
    /// Every face the slide draws with, in first-use order
    pub fn faces(&self) -> Vec<FontFace> {
        let mut faces = Vec::new();
        for text in self.texts.iter().chain(self.footer.iter()) {
            if !faces.contains(&text.face) {
                faces.push(text.face);
            }
        }
        faces
    }
}

struct Composer<'a> {
    ctx: &'a LayoutContext,
    metrics: &'a dyn FontMetrics,
    texts: Vec<DrawText>,
}

impl Composer<'_> {
    /// PDF baseline of an element whose line box starts `top` below the content box
    fn baseline(&self, top: Pt, face: FontFace, size: Pt) -> Result<Pt, SlidesError> {
        let ascent = self.metrics.ascent(face, size)?;
        Ok(self.ctx.canvas.content_box().y2 - top - ascent)
    }

    fn centred(&mut self, text: &str, top: Pt, size: Pt) -> Result<(), SlidesError> {
        let face = self.ctx.heading_face();
        let content = self.ctx.canvas.content_box();
        let width = self.metrics.text_width(face, size, text)?;
        self.texts.push(DrawText {
            text: text.to_string(),
            x: content.x1 + (content.width() - width) / 2.0,
            y: self.baseline(top, face, size)?,
            face,
            size,
            colour: self.ctx.theme.text,
        });
        Ok(())
    }

    fn line(&mut self, line: &WrappedLine, top: Pt) -> Result<(), SlidesError> {
        let ctx = self.ctx;
        let (face, scale, theme) = (ctx.body_face(), &ctx.scale, &ctx.theme);
        let y = self.baseline(top, face, scale.body)?;
        let mut x = ctx.canvas.content_box().x1 + line.indent;

        for run in split_verse_numbers(&line.text) {
            let (size, y, colour) = match run {
                LineRun::Plain(_) => (scale.body, y, theme.text),
                LineRun::VerseNumber(_) => (
                    scale.verse_number,
                    y + scale.superscript_rise(),
                    theme.verse_number,
                ),
            };
            let text = run.text();
            if text.is_empty() {
                continue;
            }
            self.texts.push(DrawText {
                text: text.to_string(),
                x,
                y,
                face,
                size,
                colour,
            });
            x += self.metrics.text_width(face, size, text)?;
        }
        Ok(())
    }
}

/// Position every element of a slide. Titles and headings are centred in the
/// bold face; body lines start at their indent with verse numbers raised.
pub fn compose_slide(
    slide: &Slide,
    ctx: &LayoutContext,
    metrics: &dyn FontMetrics,
) -> Result<SlideDrawing, SlidesError> {
    let mut composer = Composer {
        ctx,
        metrics,
        texts: Vec::new(),
    };

    for element in slide.elements.iter() {
        match element {
            PlacedElement::Title { text, top } => composer.centred(text, *top, ctx.scale.title)?,
            PlacedElement::Subheading { text, top } | PlacedElement::Heading { text, top } => {
                composer.centred(text, *top, ctx.scale.heading)?
            }
            PlacedElement::Line { line, top } => composer.line(line, *top)?,
        }
    }

    let footer = if slide.footer.is_empty() {
        None
    } else {
        let (x, y) = ctx.canvas.footer_origin();
        Some(DrawText {
            text: slide.footer.clone(),
            x,
            y,
            face: ctx.body_face(),
            size: ctx.scale.footer,
            colour: ctx.theme.text,
        })
    };

    Ok(SlideDrawing {
        width: ctx.canvas.width,
        height: ctx.canvas.height,
        background: ctx.theme.background,
        texts: composer.texts,
        footer,
    })
}
