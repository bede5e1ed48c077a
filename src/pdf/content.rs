//! Content stream rendering for slides.

use super::encoding::to_winansi_bytes;
use crate::colour::Colour;
use crate::font::FontFace;
use crate::layout::{DrawText, SlideDrawing};
use pdf_writer::{Content, Name, Str};

/// The resource name a face is registered under on every page
pub(crate) fn font_name(face: FontFace) -> String {
    let index = FontFace::all()
        .iter()
        .position(|f| *f == face)
        .unwrap_or_default();
    format!("F{index}")
}

fn set_fill(content: &mut Content, colour: Colour) {
    match colour {
        Colour::RGB { r, g, b } => content.set_fill_rgb(r, g, b),
        Colour::Grey { g } => content.set_fill_gray(g),
    };
}

fn show_text(content: &mut Content, text: &DrawText) {
    let font = font_name(text.face);
    set_fill(content, text.colour);
    content
        .begin_text()
        .set_font(Name(font.as_bytes()), text.size.0)
        .next_line(text.x.0, text.y.0)
        .show(Str(&to_winansi_bytes(&text.text)))
        .end_text();
}

/// Paint the background, then every text run and the footer
pub(crate) fn render_drawing(drawing: &SlideDrawing) -> Vec<u8> {
    let mut content = Content::new();

    content.save_state();
    set_fill(&mut content, drawing.background);
    content
        .rect(0.0, 0.0, drawing.width.0, drawing.height.0)
        .fill_nonzero();
    content.restore_state();

    for text in drawing.texts.iter().chain(drawing.footer.iter()) {
        show_text(&mut content, text);
    }

    content.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::units::Pt;

    #[test]
    fn font_names_follow_face_order() {
        assert_eq!(font_name(FontFace::Helvetica), "F0");
        assert_eq!(font_name(FontFace::CourierBold), "F5");
    }

    #[test]
    fn renders_background_and_text() {
        let drawing = SlideDrawing {
            width: Pt(1920.0),
            height: Pt(1080.0),
            background: colours::BLACK,
            texts: vec![DrawText {
                text: "“Jesus wept.”".to_string(),
                x: Pt(150.0),
                y: Pt(884.0),
                face: FontFace::TimesRoman,
                size: Pt(64.0),
                colour: colours::WHITE,
            }],
            footer: None,
        };
        let stream = render_drawing(&drawing);
        let text = String::from_utf8_lossy(&stream);

        assert!(text.contains("0 0 1920 1080 re"));
        assert!(text.contains("/F2 64 Tf"));
        assert!(text.contains("150 884 Td"));
        assert!(text.contains("Tj"));
        assert_eq!(text.matches("BT").count(), text.matches("ET").count());
    }
}
