use crate::units::Pt;

/// The body size every other size is proportioned against
const REFERENCE_BODY: f32 = 64.0;
const TITLE: f32 = 72.0;
const HEADING: f32 = 64.0;
const FOOTER: f32 = 24.0;
const VERSE_NUMBER: f32 = 42.0;

const LINE_SPACING: f32 = 1.5;
const SUPERSCRIPT_RISE: f32 = 0.4;

/// All font sizes and vertical rhythm derived from one body size. Every value
/// is linear in the body size; nothing is rounded or clamped.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TypeScale {
    pub body: Pt,
    pub title: Pt,
    pub heading: Pt,
    pub footer: Pt,
    pub verse_number: Pt,
}

impl TypeScale {
    pub fn new(body: Pt) -> TypeScale {
        let factor = body.0 / REFERENCE_BODY;
        TypeScale {
            body,
            title: Pt(TITLE * factor),
            heading: Pt(HEADING * factor),
            footer: Pt(FOOTER * factor),
            verse_number: Pt(VERSE_NUMBER * factor),
        }
    }

    /// Baseline-to-baseline distance of body lines
    pub fn line_height(&self) -> Pt {
        self.body * LINE_SPACING
    }

    pub fn heading_line_height(&self) -> Pt {
        self.heading * LINE_SPACING
    }

    pub fn title_line_height(&self) -> Pt {
        self.title * LINE_SPACING
    }

    /// How far verse numbers sit above the body baseline
    pub fn superscript_rise(&self) -> Pt {
        self.body * SUPERSCRIPT_RISE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_sizes() {
        let scale = TypeScale::new(Pt(64.0));
        assert_eq!(scale.title, Pt(72.0));
        assert_eq!(scale.heading, Pt(64.0));
        assert_eq!(scale.footer, Pt(24.0));
        assert_eq!(scale.verse_number, Pt(42.0));
        assert_eq!(scale.line_height(), Pt(96.0));
        assert!((scale.superscript_rise().0 - 25.6).abs() < 1e-4);
    }

    #[test]
    fn sizes_scale_linearly() {
        for body in [20.0f32, 32.0, 48.0, 64.0, 90.0] {
            let small = TypeScale::new(Pt(body));
            let large = TypeScale::new(Pt(body * 2.0));
            for (s, l) in [
                (small.title, large.title),
                (small.heading, large.heading),
                (small.footer, large.footer),
                (small.verse_number, large.verse_number),
                (small.line_height(), large.line_height()),
                (small.superscript_rise(), large.superscript_rise()),
            ] {
                assert!((l.0 - 2.0 * s.0).abs() < 1e-3, "{body}: {s} vs {l}");
            }
        }
    }
}
