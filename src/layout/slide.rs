use super::WrappedLine;
use crate::units::Pt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SlideKind {
    /// Opens a passage: its reference and, optionally, its first heading
    Title,
    /// Carries passage text
    Body,
}

/// Something placed on a slide. `top` is the distance from the top edge of the
/// content box down to the top of the element's line box.
#[derive(Debug, Clone, PartialEq)]
pub enum PlacedElement {
    Title { text: String, top: Pt },
    Subheading { text: String, top: Pt },
    Heading { text: String, top: Pt },
    Line { line: WrappedLine, top: Pt },
}

impl PlacedElement {
    pub fn top(&self) -> Pt {
        match self {
            PlacedElement::Title { top, .. }
            | PlacedElement::Subheading { top, .. }
            | PlacedElement::Heading { top, .. }
            | PlacedElement::Line { top, .. } => *top,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            PlacedElement::Title { text, .. }
            | PlacedElement::Subheading { text, .. }
            | PlacedElement::Heading { text, .. } => text,
            PlacedElement::Line { line, .. } => &line.text,
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, PlacedElement::Heading { .. })
    }

    pub fn is_line(&self) -> bool {
        matches!(self, PlacedElement::Line { .. })
    }
}

/// One finished slide
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub kind: SlideKind,
    /// In top-to-bottom order
    pub elements: Vec<PlacedElement>,
    pub footer: String,
}

impl Slide {
    /// The body lines on this slide, in order
    pub fn lines(&self) -> impl Iterator<Item = &WrappedLine> {
        self.elements.iter().filter_map(|element| match element {
            PlacedElement::Line { line, .. } => Some(line),
            _ => None,
        })
    }

    pub fn ends_with_heading(&self) -> bool {
        self.elements.last().is_some_and(PlacedElement::is_heading)
    }
}
