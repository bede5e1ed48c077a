use crate::rect::Rect;
use crate::units::Pt;

/// Margins bound the region of a slide that passage text may occupy. The
/// footer is the one element drawn inside the bottom margin.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins::trbl(value, value, value, value)
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric(vertical: Pt, horizontal: Pt) -> Margins {
        Margins::trbl(vertical, horizontal, vertical, horizontal)
    }
}

/// Distance of the footer baseline below the bottom edge of the content box
const FOOTER_DROP: Pt = Pt(60.0);

/// A slide surface: its size and the margins inside it
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Canvas {
    pub width: Pt,
    pub height: Pt,
    pub margins: Margins,
}

impl Canvas {
    pub fn new(width: Pt, height: Pt, margins: Margins) -> Canvas {
        Canvas {
            width,
            height,
            margins,
        }
    }

    /// The full slide, in PDF coordinates (origin bottom-left)
    pub fn media_box(&self) -> Rect {
        Rect {
            x1: Pt(0.0),
            y1: Pt(0.0),
            x2: self.width,
            y2: self.height,
        }
    }

    /// The region inside the margins, in PDF coordinates
    pub fn content_box(&self) -> Rect {
        Rect {
            x1: self.margins.left,
            y1: self.margins.bottom,
            x2: self.width - self.margins.right,
            y2: self.height - self.margins.top,
        }
    }

    pub fn content_width(&self) -> Pt {
        self.content_box().width()
    }

    pub fn content_height(&self) -> Pt {
        self.content_box().height()
    }

    /// Where the footer baseline starts, in PDF coordinates
    pub fn footer_origin(&self) -> (Pt, Pt) {
        (self.margins.left, self.margins.bottom - FOOTER_DROP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_box_of_a_hd_slide() {
        let canvas = Canvas::new(
            Pt(1920.0),
            Pt(1080.0),
            Margins::trbl(Pt(150.0), Pt(150.0), Pt(120.0), Pt(150.0)),
        );
        assert_eq!(canvas.content_width(), Pt(1620.0));
        assert_eq!(canvas.content_height(), Pt(810.0));
        assert_eq!(canvas.content_box().y2, Pt(930.0));
        assert_eq!(canvas.footer_origin(), (Pt(150.0), Pt(60.0)));
    }

    #[test]
    fn margin_constructors() {
        assert_eq!(Margins::all(Pt(10.0)), Margins::symmetric(Pt(10.0), Pt(10.0)));
        let margins = Margins::symmetric(Pt(1.0), Pt(2.0));
        assert_eq!((margins.top, margins.left), (Pt(1.0), Pt(2.0)));
    }
}
