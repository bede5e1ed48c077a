//! The typed form of a retrieved passage.
//!
//! Raw passage text arrives as lines with inline `[n]` verse markers, unindented
//! section headings and (for poetry) indented lines. [Passage::parse] runs a
//! single normalization pass over it so nothing downstream has to re-parse
//! strings:
//!
//! 1. [scan_lines] types every non-blank line as a heading or a body line
//! 2. [classify] picks one [FlowMode] for the whole passage
//! 3. [assemble] groups body lines into [ContentBlock]s for that mode

use crate::layout::verse::{contains_verse_marker, verse_markers};

/// A run of passage text, optionally introduced by a verse number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseSegment {
    pub verse: Option<u32>,
    pub text: String,
}

/// One typed unit of passage content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Heading {
        text: String,
    },
    /// Body text that is reflowed to fill the slide width
    ProseParagraph {
        segments: Vec<VerseSegment>,
    },
    /// One source line of poetry; its line break and indent are preserved
    PoetryLine {
        indent_level: usize,
        segments: Vec<VerseSegment>,
    },
}

impl ContentBlock {
    pub fn is_heading(&self) -> bool {
        matches!(self, ContentBlock::Heading { .. })
    }

    /// The block's text with verse markers restored inline, e.g. `[1] The Lord is my shepherd`
    pub fn inline_text(&self) -> String {
        match self {
            ContentBlock::Heading { text } => text.clone(),
            ContentBlock::ProseParagraph { segments }
            | ContentBlock::PoetryLine { segments, .. } => inline_text(segments),
        }
    }

    /// The verse number the block opens with, if it opens with one
    pub fn leading_verse(&self) -> Option<u32> {
        match self {
            ContentBlock::Heading { .. } => None,
            ContentBlock::ProseParagraph { segments }
            | ContentBlock::PoetryLine { segments, .. } => {
                segments.first().and_then(|segment| segment.verse)
            }
        }
    }
}

/// How body text of a passage is laid out
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum FlowMode {
    /// Paragraphs are reflowed to fill the width, ignoring source line breaks
    #[default]
    Prose,
    /// Every source line is kept, with its indent
    Poetry,
}

/// One scripture reference's full content, ready for layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    /// The canonical reference, e.g. `John 3:16–21`
    pub reference: String,
    pub flow: FlowMode,
    pub blocks: Vec<ContentBlock>,
}

impl Passage {
    /// Normalize raw passage text. `indent_unit` is the number of leading source
    /// spaces that make up one poetry indent level.
    pub fn parse<S: Into<String>>(reference: S, raw: &str, indent_unit: usize) -> Passage {
        let lines = scan_lines(raw);
        let flow = classify(&lines);
        let blocks = assemble(&lines, flow, indent_unit);
        Passage {
            reference: reference.into(),
            flow,
            blocks,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// A non-blank line of raw passage text
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SourceLine<'a> {
    Heading(&'a str),
    Body {
        /// leading whitespace characters in the source
        indent: usize,
        /// the line without its surrounding whitespace
        text: &'a str,
    },
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|ch| ch.is_whitespace()).count()
}

/// Whether a raw line is a section heading: it has text, no verse marker and no
/// leading whitespace. Blank lines are never headings.
pub fn is_section_heading(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && leading_whitespace(line) == 0 && !contains_verse_marker(trimmed)
}

/// Type every non-blank line of the raw text, in order
pub fn scan_lines(raw: &str) -> Vec<SourceLine<'_>> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            if is_section_heading(line) {
                SourceLine::Heading(line.trim())
            } else {
                SourceLine::Body {
                    indent: leading_whitespace(line),
                    text: line.trim(),
                }
            }
        })
        .collect()
}

/// A passage is poetry as soon as any one of its body lines is indented
pub fn classify(lines: &[SourceLine<'_>]) -> FlowMode {
    let indented = lines
        .iter()
        .any(|line| matches!(line, SourceLine::Body { indent, .. } if *indent > 0));
    if indented {
        FlowMode::Poetry
    } else {
        FlowMode::Prose
    }
}

/// Group typed lines into content blocks for the given flow mode
pub fn assemble(lines: &[SourceLine<'_>], flow: FlowMode, indent_unit: usize) -> Vec<ContentBlock> {
    let indent_unit = indent_unit.max(1);
    let mut blocks = Vec::new();
    let mut paragraph: Vec<VerseSegment> = Vec::new();

    for line in lines {
        match (line, flow) {
            (SourceLine::Heading(text), _) => {
                if !paragraph.is_empty() {
                    blocks.push(ContentBlock::ProseParagraph {
                        segments: std::mem::take(&mut paragraph),
                    });
                }
                blocks.push(ContentBlock::Heading {
                    text: text.to_string(),
                });
            }
            (SourceLine::Body { indent, text }, FlowMode::Poetry) => {
                blocks.push(ContentBlock::PoetryLine {
                    indent_level: indent / indent_unit,
                    segments: parse_segments(text),
                });
            }
            (SourceLine::Body { text, .. }, FlowMode::Prose) => {
                append_segments(&mut paragraph, parse_segments(text));
            }
        }
    }

    if !paragraph.is_empty() {
        blocks.push(ContentBlock::ProseParagraph {
            segments: paragraph,
        });
    }

    blocks
}

/// Split one line of body text at its verse markers
pub fn parse_segments(text: &str) -> Vec<VerseSegment> {
    let mut segments = Vec::new();
    let mut verse = None;
    let mut last = 0;

    for (range, number) in verse_markers(text) {
        let before = text[last..range.start].trim();
        if !before.is_empty() || verse.is_some() {
            segments.push(VerseSegment {
                verse,
                text: before.to_string(),
            });
        }
        verse = Some(number);
        last = range.end;
    }

    let rest = text[last..].trim();
    if !rest.is_empty() || verse.is_some() {
        segments.push(VerseSegment {
            verse,
            text: rest.to_string(),
        });
    }

    segments
}

/// Continue a prose paragraph with the segments of its next source line. A line
/// that starts mid-verse extends the verse it continues.
fn append_segments(paragraph: &mut Vec<VerseSegment>, segments: Vec<VerseSegment>) {
    let mut segments = segments.into_iter();
    if let Some(first) = segments.next() {
        match paragraph.last_mut() {
            Some(previous) if first.verse.is_none() => {
                if !previous.text.is_empty() {
                    previous.text.push(' ');
                }
                previous.text.push_str(&first.text);
            }
            _ => paragraph.push(first),
        }
    }
    paragraph.extend(segments);
}

/// Join segments back into text, writing verse numbers as inline `[n]` markers
pub fn inline_text(segments: &[VerseSegment]) -> String {
    segments
        .iter()
        .map(|segment| match (segment.verse, segment.text.is_empty()) {
            (Some(verse), true) => format!("[{verse}]"),
            (Some(verse), false) => format!("[{verse}] {}", segment.text),
            (None, _) => segment.text.clone(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
