use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// `[16]`: a bracketed run of digits with nothing else inside the brackets
static VERSE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(\d+)\]").expect("verse marker pattern is valid"));

/// One piece of a laid out line, rendered differently depending on what it is
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineRun<'a> {
    /// Ordinary passage text, rendered at body size
    Plain(&'a str),
    /// The digits of a verse marker (without brackets), rendered smaller and raised
    VerseNumber(&'a str),
}

impl<'a> LineRun<'a> {
    pub fn is_verse_number(&self) -> bool {
        matches!(self, LineRun::VerseNumber(_))
    }

    pub fn text(&self) -> &'a str {
        match self {
            LineRun::Plain(text) | LineRun::VerseNumber(text) => text,
        }
    }
}

/// Iterate over the well-formed verse markers in `text`, yielding the byte range
/// of the whole marker and its verse number. Markers whose number doesn't fit a
/// `u32` are not markers.
pub(crate) fn verse_markers(text: &str) -> impl Iterator<Item = (Range<usize>, u32)> + '_ {
    VERSE_MARKER.captures_iter(text).filter_map(|captures| {
        let marker = captures.get(0)?;
        let number = captures.get(1)?.as_str().parse().ok()?;
        Some((marker.range(), number))
    })
}

pub(crate) fn contains_verse_marker(text: &str) -> bool {
    verse_markers(text).next().is_some()
}

/// Split a finished line into plain runs and verse-number runs, in order.
/// Anything that isn't a well-formed marker (`[12`, `[ 3]`, `[a]`) stays plain.
pub fn split_verse_numbers(line: &str) -> Vec<LineRun<'_>> {
    let mut runs = Vec::new();
    let mut last = 0;

    for (range, _) in verse_markers(line) {
        if range.start > last {
            runs.push(LineRun::Plain(&line[last..range.start]));
        }
        runs.push(LineRun::VerseNumber(&line[range.start + 1..range.end - 1]));
        last = range.end;
    }

    if last < line.len() {
        runs.push(LineRun::Plain(&line[last..]));
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_numbers_from_text() {
        let runs = split_verse_numbers("[16] For God so loved the world, [17] For God");
        assert_eq!(
            runs,
            vec![
                LineRun::VerseNumber("16"),
                LineRun::Plain(" For God so loved the world, "),
                LineRun::VerseNumber("17"),
                LineRun::Plain(" For God"),
            ]
        );
    }

    #[test]
    fn line_without_markers_is_one_plain_run() {
        assert_eq!(
            split_verse_numbers("he leads me beside still waters."),
            vec![LineRun::Plain("he leads me beside still waters.")]
        );
        assert!(split_verse_numbers("").is_empty());
    }

    #[test]
    fn malformed_markers_stay_plain() {
        for line in ["[16 For God", "[ 16] For God", "[1a] For", "16] For", "[] For"] {
            let runs = split_verse_numbers(line);
            assert_eq!(runs, vec![LineRun::Plain(line)], "{line}");
        }
    }

    #[test]
    fn partial_marker_next_to_a_real_one() {
        let runs = split_verse_numbers("[3 [4] text");
        assert_eq!(
            runs,
            vec![
                LineRun::Plain("[3 "),
                LineRun::VerseNumber("4"),
                LineRun::Plain(" text")
            ]
        );
        assert!(runs[1].is_verse_number());
        assert_eq!(runs[2].text(), " text");
    }

    #[test]
    fn oversized_numbers_are_not_markers() {
        let line = "[99999999999] text";
        assert_eq!(split_verse_numbers(line), vec![LineRun::Plain(line)]);
        assert!(!contains_verse_marker(line));
    }
}
