use scripture_slides::layout::{
    compose_slide, paginate, split_verse_numbers, LayoutContext, LineRun, Pagination, SlideKind,
    TypeScale,
};
use scripture_slides::{
    ContentBlock, FontFace, FontMetrics, LayoutConfig, Passage, Pt, SlidesError, StandardMetrics,
};

const PSALM_23: &str = "  [1] The Lord is my shepherd; I shall not want.
    [2] He makes me lie down in green pastures.
  He leads me beside still waters.
    [3] He restores my soul.
  He leads me in paths of righteousness
    for his name's sake.";

fn layout(config: &LayoutConfig, reference: &str, raw: &str) -> Pagination {
    let ctx = LayoutContext::new(config);
    let passage = Passage::parse(reference, raw, config.poetry_indent_unit);
    paginate(&passage, &ctx, &StandardMetrics).expect("passage lays out")
}

/// A body slide may only end with a heading if no line follows anywhere after it
fn assert_no_orphaned_headings(pagination: &Pagination) {
    for (i, slide) in pagination.slides.iter().enumerate() {
        if slide.ends_with_heading() {
            let lines_follow = pagination.slides[i + 1..]
                .iter()
                .any(|later| later.lines().count() > 0);
            assert!(!lines_follow, "slide {i} of {} ends with a heading", pagination.reference);
        }
    }
}

#[test]
fn short_psalm_is_a_title_and_one_body_slide() {
    let pagination = layout(&LayoutConfig::default(), "Psalm 23:1–3", PSALM_23);

    assert_eq!(pagination.slides.len(), 2);
    assert_eq!(pagination.slides[0].kind, SlideKind::Title);
    assert_eq!(pagination.slides[1].kind, SlideKind::Body);

    let levels: Vec<usize> = pagination.slides[1]
        .lines()
        .map(|line| line.indent_level)
        .collect();
    assert_eq!(levels, vec![1, 2, 1, 2, 1, 2]);
    assert!(pagination.warnings.is_empty());
}

#[test]
fn heading_that_fits_without_its_first_line_moves_to_the_next_slide() {
    // six one-line verses leave 234pt: room for the gap and heading (192pt)
    // but not for the first line after them as well (288pt)
    let mut raw: Vec<String> = (1..=6).map(|v| format!("  [{v}] Short line {v}")).collect();
    raw.push("The Long Section".to_string());
    raw.extend((7..=26).map(|v| format!("  [{v}] {}", lipsum::lipsum(40))));
    let pagination = layout(&LayoutConfig::default(), "Lorem 1", &raw.join("\n"));

    let first_body = &pagination.slides[1];
    assert_eq!(first_body.lines().count(), 6);
    assert!(!first_body.ends_with_heading());

    let second_body = &pagination.slides[2];
    assert!(second_body.elements[0].is_heading());
    assert_eq!(second_body.elements[0].top(), Pt(0.0));
    assert!(second_body.elements[1].is_line());
    assert!(pagination.slides.len() > 10);
    assert_no_orphaned_headings(&pagination);
}

#[test]
fn headings_are_never_orphaned() {
    for sections in 1..8 {
        let mut raw = Vec::new();
        let mut verse = 1;
        for section in 0..sections {
            raw.push(format!("Section {section}"));
            for _ in 0..(section % 3 + 1) {
                raw.push(format!("[{verse}] {}", lipsum::lipsum(12 + 7 * section)));
                verse += 1;
            }
        }
        let pagination = layout(&LayoutConfig::default(), "Lorem 2", &raw.join("\n"));
        assert_no_orphaned_headings(&pagination);
    }
}

#[test]
fn wrapped_lines_fit_the_content_width() {
    let config = LayoutConfig::default();
    let ctx = LayoutContext::new(&config);
    let pagination = layout(&config, "Lorem 3", &format!("[1] {}", lipsum::lipsum(400)));

    assert!(pagination.slides.len() > 3);
    for line in pagination.slides.iter().flat_map(|slide| slide.lines()) {
        let width = StandardMetrics
            .text_width(FontFace::Helvetica, config.body_font_size, &line.text)
            .unwrap();
        assert!(width <= ctx.canvas.content_width() - line.indent, "{}", line.text);
    }
}

#[test]
fn doubling_the_body_size_doubles_every_size_and_rewraps() {
    let small = LayoutConfig {
        body_font_size: Pt(32.0),
        ..LayoutConfig::default()
    };
    let large = LayoutConfig {
        body_font_size: Pt(64.0),
        ..LayoutConfig::default()
    };

    let (s, l) = (TypeScale::new(small.body_font_size), TypeScale::new(large.body_font_size));
    assert_eq!(l.title, s.title * 2.0);
    assert_eq!(l.heading, s.heading * 2.0);
    assert_eq!(l.footer, s.footer * 2.0);
    assert_eq!(l.verse_number, s.verse_number * 2.0);
    assert_eq!(l.line_height(), s.line_height() * 2.0);

    let raw = format!("[1] {}", lipsum::lipsum(150));
    let count = |pagination: &Pagination| {
        pagination
            .slides
            .iter()
            .map(|slide| slide.lines().count())
            .sum::<usize>()
    };
    let small_lines = count(&layout(&small, "Lorem 4", &raw));
    let large_lines = count(&layout(&large, "Lorem 4", &raw));
    assert!(large_lines > small_lines, "{large_lines} vs {small_lines}");
}

#[test]
fn pagination_is_deterministic() {
    let raw = format!("Heading\n[1] {}\nAnother\n[2] {}", lipsum::lipsum(90), lipsum::lipsum(60));
    let first = layout(&LayoutConfig::default(), "Lorem 5", &raw);
    for _ in 0..5 {
        assert_eq!(layout(&LayoutConfig::default(), "Lorem 5", &raw), first);
    }
}

#[test]
fn malformed_verse_markers_stay_in_the_text() {
    let config = LayoutConfig::default();
    let ctx = LayoutContext::new(&config);
    let passage = Passage::parse("John 3:16", "[16] For God so loved [17 the world", 2);

    assert!(matches!(
        &passage.blocks[..],
        [ContentBlock::ProseParagraph { segments }] if segments.len() == 1
    ));

    let pagination = paginate(&passage, &ctx, &StandardMetrics).unwrap();
    let line = pagination.slides[1].lines().next().unwrap();
    assert_eq!(
        split_verse_numbers(&line.text),
        vec![
            LineRun::VerseNumber("16"),
            LineRun::Plain(" For God so loved [17 the world")
        ]
    );

    let drawing = compose_slide(&pagination.slides[1], &ctx, &StandardMetrics).unwrap();
    assert_eq!(drawing.texts.len(), 2);
    assert_eq!(drawing.texts[0].size, ctx.scale.verse_number);
    assert_eq!(drawing.texts[1].size, ctx.scale.body);
}

#[test]
fn empty_passage_has_no_slides() {
    let ctx = LayoutContext::new(&LayoutConfig::default());
    let passage = Passage::parse("Obadiah 22", "\n\n", 2);
    assert!(matches!(
        paginate(&passage, &ctx, &StandardMetrics),
        Err(SlidesError::EmptyPassage { .. })
    ));
}

/// Measures regular faces like Courier and has no metrics for bold faces
struct RegularOnly;

impl FontMetrics for RegularOnly {
    fn text_width(&self, face: FontFace, size: Pt, text: &str) -> Result<Pt, SlidesError> {
        self.check(face, size)?;
        Ok(Pt(0.6 * size.0 * text.chars().count() as f32))
    }

    fn ascent(&self, face: FontFace, size: Pt) -> Result<Pt, SlidesError> {
        self.check(face, size)?;
        Ok(size * 0.75)
    }

    fn line_height(&self, face: FontFace, size: Pt) -> Result<Pt, SlidesError> {
        self.check(face, size)?;
        Ok(size)
    }
}

impl RegularOnly {
    fn check(&self, face: FontFace, size: Pt) -> Result<(), SlidesError> {
        match face {
            FontFace::HelveticaBold | FontFace::TimesBold | FontFace::CourierBold => {
                Err(SlidesError::UnresolvedFontMetrics { font: face, size })
            }
            _ => Ok(()),
        }
    }
}

#[test]
fn custom_metrics_drive_wrapping() {
    let ctx = LayoutContext::new(&LayoutConfig {
        include_headings: false,
        ..LayoutConfig::default()
    });
    // 0.6 * 64 = 38.4pt per char, so 42 chars fit in 1620pt
    let word = "abcdefghij";
    let raw = format!("[1] {}", vec![word; 12].join(" "));
    let passage = Passage::parse("Test 1", &raw, 2);
    let pagination = paginate(&passage, &ctx, &RegularOnly).unwrap();

    let lines: Vec<&str> = pagination.slides[1]
        .lines()
        .map(|line| line.text.as_str())
        .collect();
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|line| line.chars().count() <= 42));
}

#[test]
fn missing_metrics_fail_the_call() {
    let ctx = LayoutContext::new(&LayoutConfig::default());
    let passage = Passage::parse("Test 1", "A Heading\n[1] text\nAnother\n[2] more", 2);
    let result = paginate(&passage, &ctx, &RegularOnly);
    assert!(matches!(
        result,
        Err(SlidesError::UnresolvedFontMetrics {
            font: FontFace::HelveticaBold,
            ..
        })
    ));
}
