//! Slide layout: wrapping passage text, paginating it onto fixed-size slides
//! and positioning the result.
//!
//! Layout runs in three steps, each a pure function of its inputs:
//!
//! - [`wrap_block`](crate::layout::wrap_block) - greedy word wrapping of one content block
//! - [`paginate`](crate::layout::paginate) - assigns wrapped lines and headings to slides,
//!   keeping every heading on the same slide as the line that follows it
//! - [`compose_slide`](crate::layout::compose_slide) - turns a slide into positioned text runs
//!
//! # Example
//!
//! ```
//! use scripture_slides::{LayoutConfig, Passage, StandardMetrics};
//! use scripture_slides::layout::{compose_slide, paginate, LayoutContext};
//!
//! let config = LayoutConfig::default();
//! let ctx = LayoutContext::new(&config);
//! let passage = Passage::parse(
//!     "Psalm 23:1",
//!     "[1] The Lord is my shepherd;\n  I shall not want.",
//!     config.poetry_indent_unit,
//! );
//!
//! let pagination = paginate(&passage, &ctx, &StandardMetrics).expect("can lay out psalm");
//! assert_eq!(pagination.slides.len(), 2);
//!
//! let drawing =
//!     compose_slide(&pagination.slides[1], &ctx, &StandardMetrics).expect("can compose");
//! assert!(!drawing.texts.is_empty());
//! ```

mod compose;
mod margins;
mod paginate;
mod scale;
mod slide;
pub mod verse;
mod wrap;

pub use compose::*;
pub use margins::*;
pub use paginate::*;
pub use scale::*;
pub use slide::*;
pub use verse::{split_verse_numbers, LineRun};
pub use wrap::*;

use crate::colour::Theme;
use crate::config::LayoutConfig;
use crate::error::SlidesError;
use crate::font::{FontFace, FontFamily, FontMetrics};
use crate::units::Pt;

/// Width of one leading source space, as a fraction of the body size
const INDENT_PER_SPACE: f32 = 0.3;

/// A [LayoutConfig] resolved into the geometry and sizes layout works with
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutContext {
    pub family: FontFamily,
    pub scale: TypeScale,
    pub canvas: Canvas,
    pub include_headings: bool,
    pub indent_unit: usize,
    pub attribution: String,
    pub theme: Theme,
}

impl LayoutContext {
    pub fn new(config: &LayoutConfig) -> LayoutContext {
        LayoutContext {
            family: config.font_family,
            scale: TypeScale::new(config.body_font_size),
            canvas: Canvas::new(
                config.canvas_width,
                config.canvas_height,
                Margins::trbl(
                    config.margin_top,
                    config.margin_right,
                    config.margin_bottom,
                    config.margin_left,
                ),
            ),
            include_headings: config.include_headings,
            indent_unit: config.poetry_indent_unit.max(1),
            attribution: config.attribution.clone(),
            theme: config.theme,
        }
    }

    pub fn body_face(&self) -> FontFace {
        self.family.regular()
    }

    /// Titles and section headings
    pub fn heading_face(&self) -> FontFace {
        self.family.bold()
    }

    /// Horizontal offset of a poetry line at the given indent level
    pub fn indent_offset(&self, level: usize) -> Pt {
        self.scale.body * ((level * self.indent_unit) as f32 * INDENT_PER_SPACE)
    }

    /// Height taken by one body line. Never less than the face's own line
    /// height, so tall faces don't collide.
    pub fn line_height(&self, metrics: &dyn FontMetrics) -> Result<Pt, SlidesError> {
        let face = metrics.line_height(self.body_face(), self.scale.body)?;
        Ok(self.scale.line_height().max(face))
    }

    /// Height taken by one section heading line, not counting the gap above it
    pub fn heading_height(&self, metrics: &dyn FontMetrics) -> Result<Pt, SlidesError> {
        let face = metrics.line_height(self.heading_face(), self.scale.heading)?;
        Ok(self.scale.heading_line_height().max(face))
    }

    /// Footer text of a body slide
    pub fn body_footer(&self, reference: &str) -> String {
        if self.attribution.is_empty() {
            reference.to_string()
        } else {
            format!("{reference} | {}", self.attribution)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::StandardMetrics;

    #[test]
    fn context_from_defaults() {
        let ctx = LayoutContext::new(&LayoutConfig::default());
        assert_eq!(ctx.canvas.content_width(), Pt(1620.0));
        assert_eq!(ctx.line_height(&StandardMetrics).unwrap(), Pt(96.0));
        assert_eq!(ctx.heading_height(&StandardMetrics).unwrap(), Pt(96.0));
        assert_eq!(ctx.body_face(), FontFace::Helvetica);
        assert_eq!(ctx.heading_face(), FontFace::HelveticaBold);
    }

    #[test]
    fn indent_is_proportional_to_body_size() {
        let ctx = LayoutContext::new(&LayoutConfig::default());
        assert_eq!(ctx.indent_offset(0), Pt(0.0));
        // two levels of two spaces at 0.3 em each
        assert!((ctx.indent_offset(2).0 - 76.8).abs() < 1e-3);
    }

    #[test]
    fn footers() {
        let mut config = LayoutConfig::default();
        let ctx = LayoutContext::new(&config);
        assert_eq!(ctx.body_footer("John 3:16"), "John 3:16 | ESV");
        config.attribution.clear();
        assert_eq!(LayoutContext::new(&config).body_footer("John 3:16"), "John 3:16");
    }

    #[test]
    fn unusable_body_size_fails_to_measure() {
        let config = LayoutConfig {
            body_font_size: Pt(0.0),
            ..LayoutConfig::default()
        };
        let ctx = LayoutContext::new(&config);
        assert!(matches!(
            ctx.line_height(&StandardMetrics),
            Err(SlidesError::UnresolvedFontMetrics { .. })
        ));
    }
}
