use super::LayoutContext;
use crate::error::{LayoutWarning, SlidesError};
use crate::font::{FontFace, FontMetrics};
use crate::passage::{inline_text, ContentBlock};
use crate::units::Pt;

/// One line of body text after wrapping, ready to be placed on a slide
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine {
    /// The line's text, verse markers still inline as `[n]`
    pub text: String,
    /// Horizontal offset from the left edge of the content box
    pub indent: Pt,
    pub indent_level: usize,
    /// Whether this is the first line its source block produced
    pub first_of_block: bool,
    /// The verse the block opens with; only set on the block's first line
    pub verse: Option<u32>,
    pub height: Pt,
}

/// The result of wrapping one run of text
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WrappedText {
    pub lines: Vec<String>,
    /// Words that are wider than the available width on their own. Each sits
    /// alone on its line.
    pub overflowing: Vec<String>,
}

/// Greedily wrap `text` at word boundaries so that every line measures no more
/// than `available`. Words are never split; runs of whitespace collapse to a
/// single space.
pub fn wrap_text(
    metrics: &dyn FontMetrics,
    text: &str,
    available: Pt,
    face: FontFace,
    size: Pt,
) -> Result<WrappedText, SlidesError> {
    let mut wrapped = WrappedText::default();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else {
            let candidate = format!("{current} {word}");
            if metrics.text_width(face, size, &candidate)? <= available {
                current = candidate;
                continue;
            }
            wrapped.lines.push(std::mem::replace(&mut current, word.to_string()));
        }

        // a word that starts a line and still doesn't fit will stay alone on it
        if metrics.text_width(face, size, word)? > available {
            wrapped.overflowing.push(word.to_string());
        }
    }

    if !current.is_empty() {
        wrapped.lines.push(current);
    }

    Ok(wrapped)
}

/// Wrap one body block (a prose paragraph or a poetry line) into slide lines.
/// Headings are not wrapped and produce no lines.
pub fn wrap_block(
    block: &ContentBlock,
    ctx: &LayoutContext,
    metrics: &dyn FontMetrics,
    warnings: &mut Vec<LayoutWarning>,
) -> Result<Vec<WrappedLine>, SlidesError> {
    let (indent_level, segments) = match block {
        ContentBlock::Heading { .. } => return Ok(Vec::new()),
        ContentBlock::ProseParagraph { segments } => (0, segments),
        ContentBlock::PoetryLine {
            indent_level,
            segments,
        } => (*indent_level, segments),
    };

    let indent = ctx.indent_offset(indent_level);
    let available = ctx.canvas.content_width() - indent;
    let height = ctx.line_height(metrics)?;
    let wrapped = wrap_text(
        metrics,
        &inline_text(segments),
        available,
        ctx.body_face(),
        ctx.scale.body,
    )?;

    warnings.extend(
        wrapped
            .overflowing
            .into_iter()
            .map(|word| LayoutWarning::OverflowWord { word, available }),
    );

    let verse = block.leading_verse();
    Ok(wrapped
        .lines
        .into_iter()
        .enumerate()
        .map(|(i, text)| WrappedLine {
            text,
            indent,
            indent_level,
            first_of_block: i == 0,
            verse: if i == 0 { verse } else { None },
            height,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::font::StandardMetrics;
    use crate::passage::Passage;

    const COURIER: FontFace = FontFace::Courier;

    /// Courier is monospaced at 0.6 em, so at 10pt every character is 6pt wide
    fn courier(text: &str, chars: usize) -> WrappedText {
        wrap_text(&StandardMetrics, text, Pt(6.0 * chars as f32), COURIER, Pt(10.0)).unwrap()
    }

    #[test]
    fn wraps_greedily_at_word_boundaries() {
        let wrapped = courier("the lord is my shepherd", 10);
        assert_eq!(wrapped.lines, vec!["the lord", "is my", "shepherd"]);
        assert!(wrapped.overflowing.is_empty());
    }

    #[test]
    fn exact_fit_stays_on_the_line() {
        let wrapped = courier("abcd efghi", 10);
        assert_eq!(wrapped.lines, vec!["abcd efghi"]);
    }

    #[test]
    fn long_words_sit_alone_and_are_reported() {
        let wrapped = courier("a Mahershalalhashbaz b", 8);
        assert_eq!(wrapped.lines, vec!["a", "Mahershalalhashbaz", "b"]);
        assert_eq!(wrapped.overflowing, vec!["Mahershalalhashbaz"]);
    }

    #[test]
    fn whitespace_collapses() {
        let wrapped = courier("  in   green\tpastures ", 40);
        assert_eq!(wrapped.lines, vec!["in green pastures"]);
        assert!(courier("   ", 40).lines.is_empty());
    }

    #[test]
    fn lines_never_exceed_the_available_width() {
        let text = lipsum::lipsum(200);
        let available = Pt(700.0);
        let wrapped =
            wrap_text(&StandardMetrics, &text, available, FontFace::Helvetica, Pt(40.0)).unwrap();
        assert!(wrapped.lines.len() > 5);
        for line in wrapped.lines {
            let width = StandardMetrics
                .text_width(FontFace::Helvetica, Pt(40.0), &line)
                .unwrap();
            assert!(width <= available, "{line}: {width}");
        }
    }

    #[test]
    fn poetry_continuations_keep_their_indent() {
        let ctx = LayoutContext::new(&LayoutConfig::default());
        let raw = format!("    [3] {}", lipsum::lipsum(60));
        let passage = Passage::parse("Psalm 23:3", &raw, 2);
        let mut warnings = Vec::new();
        let lines = wrap_block(&passage.blocks[0], &ctx, &StandardMetrics, &mut warnings).unwrap();

        assert!(lines.len() > 1);
        assert!(warnings.is_empty());
        assert_eq!(lines[0].verse, Some(3));
        assert!(lines[0].first_of_block);
        for line in &lines {
            assert_eq!(line.indent_level, 2);
            assert_eq!(line.indent, ctx.indent_offset(2));
        }
        assert!(lines[1..].iter().all(|l| !l.first_of_block && l.verse.is_none()));
    }
}
