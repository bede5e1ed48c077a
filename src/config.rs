use crate::colour::Theme;
use crate::font::FontFamily;
use crate::units::Pt;
use serde::Deserialize;

/// Everything the layout engine needs to know about the slides it produces.
/// Every field has a default, so any subset can be given in a `[layout]`
/// settings table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub font_family: FontFamily,
    pub body_font_size: Pt,
    pub include_headings: bool,
    /// Leading source spaces per poetry indent level
    pub poetry_indent_unit: usize,
    pub canvas_width: Pt,
    pub canvas_height: Pt,
    pub margin_left: Pt,
    pub margin_right: Pt,
    pub margin_top: Pt,
    pub margin_bottom: Pt,
    /// Translation name shown in every footer
    pub attribution: String,
    pub theme: Theme,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            font_family: FontFamily::Helvetica,
            body_font_size: Pt(64.0),
            include_headings: true,
            poetry_indent_unit: 2,
            canvas_width: Pt(1920.0),
            canvas_height: Pt(1080.0),
            margin_left: Pt(150.0),
            margin_right: Pt(150.0),
            margin_top: Pt(150.0),
            margin_bottom: Pt(120.0),
            attribution: "ESV".to_string(),
            theme: Theme::default(),
        }
    }
}
