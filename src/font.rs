use crate::error::SlidesError;
use crate::units::Pt;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

mod afm;

/// The font families slides can be set in. Each family carries its own regular
/// and bold faces, so an unsupported font name can't reach the layout engine.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum FontFamily {
    #[default]
    Helvetica,
    TimesRoman,
    Courier,
}

impl FontFamily {
    pub fn all() -> &'static [FontFamily] {
        &[
            FontFamily::Helvetica,
            FontFamily::TimesRoman,
            FontFamily::Courier,
        ]
    }

    /// The face used for body text, verse numbers and the footer
    pub fn regular(self) -> FontFace {
        match self {
            FontFamily::Helvetica => FontFace::Helvetica,
            FontFamily::TimesRoman => FontFace::TimesRoman,
            FontFamily::Courier => FontFace::Courier,
        }
    }

    /// The face used for titles and section headings
    pub fn bold(self) -> FontFace {
        match self {
            FontFamily::Helvetica => FontFace::HelveticaBold,
            FontFamily::TimesRoman => FontFace::TimesBold,
            FontFamily::Courier => FontFace::CourierBold,
        }
    }

    fn name(self) -> &'static str {
        match self {
            FontFamily::Helvetica => "Helvetica",
            FontFamily::TimesRoman => "Times-Roman",
            FontFamily::Courier => "Courier",
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FontFamily {
    type Err = SlidesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FontFamily::all()
            .iter()
            .copied()
            .find(|family| family.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SlidesError::UnknownFont(s.to_string()))
    }
}

impl TryFrom<String> for FontFamily {
    type Error = SlidesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A concrete face: one of the PDF base-14 fonts that every reader provides
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FontFace {
    Helvetica,
    HelveticaBold,
    TimesRoman,
    TimesBold,
    Courier,
    CourierBold,
}

impl FontFace {
    pub fn all() -> &'static [FontFace] {
        &[
            FontFace::Helvetica,
            FontFace::HelveticaBold,
            FontFace::TimesRoman,
            FontFace::TimesBold,
            FontFace::Courier,
            FontFace::CourierBold,
        ]
    }

    /// The PostScript name written as the `BaseFont` of the PDF font object
    pub fn base_font(self) -> &'static str {
        match self {
            FontFace::Helvetica => "Helvetica",
            FontFace::HelveticaBold => "Helvetica-Bold",
            FontFace::TimesRoman => "Times-Roman",
            FontFace::TimesBold => "Times-Bold",
            FontFace::Courier => "Courier",
            FontFace::CourierBold => "Courier-Bold",
        }
    }
}

impl fmt::Display for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base_font())
    }
}

/// Measures text. Implementations must be pure: the same face, size and text
/// always produce the same answer.
pub trait FontMetrics: Sync {
    /// Calculate the width of a given string of text given the face and font size
    fn text_width(&self, face: FontFace, size: Pt, text: &str) -> Result<Pt, SlidesError>;

    /// Calculate the ascent (distance from the baseline to the top of the face)
    fn ascent(&self, face: FontFace, size: Pt) -> Result<Pt, SlidesError>;

    /// Calculate the default line height of the face for the given size. The returned
    /// value is how much to vertically offset a second row of text below a first row.
    fn line_height(&self, face: FontFace, size: Pt) -> Result<Pt, SlidesError>;
}

/// Metrics for the base-14 faces, built from their AFM advance widths. Glyphs
/// outside the tables are measured as the face's `o`.
#[derive(Debug, Default, Copy, Clone)]
pub struct StandardMetrics;

impl StandardMetrics {
    fn tables(face: FontFace) -> (&'static afm::AsciiWidths, &'static afm::PunctuationWidths) {
        match face {
            FontFace::Helvetica => (&afm::HELVETICA, &afm::HELVETICA_PUNCTUATION),
            FontFace::HelveticaBold => (&afm::HELVETICA_BOLD, &afm::HELVETICA_BOLD_PUNCTUATION),
            FontFace::TimesRoman => (&afm::TIMES_ROMAN, &afm::TIMES_ROMAN_PUNCTUATION),
            FontFace::TimesBold => (&afm::TIMES_BOLD, &afm::TIMES_BOLD_PUNCTUATION),
            FontFace::Courier | FontFace::CourierBold => {
                (&afm::COURIER, &afm::COURIER_PUNCTUATION)
            }
        }
    }

    /// (ascender, descender) in 1/1000 em
    fn vertical(face: FontFace) -> (i16, i16) {
        match face {
            FontFace::Helvetica | FontFace::HelveticaBold => (718, -207),
            FontFace::TimesRoman | FontFace::TimesBold => (683, -217),
            FontFace::Courier | FontFace::CourierBold => (629, -157),
        }
    }

    fn char_width(face: FontFace, ch: char) -> u16 {
        let (ascii, punctuation) = Self::tables(face);
        match ch {
            ' '..='~' => ascii[ch as usize - ' ' as usize],
            '\u{00A0}' => ascii[0],
            _ => afm::punctuation_index(ch)
                .map(|i| punctuation[i])
                .unwrap_or(ascii['o' as usize - ' ' as usize]),
        }
    }

    fn scaling(face: FontFace, size: Pt) -> Result<f32, SlidesError> {
        if !size.is_finite() || size.0 <= 0.0 {
            return Err(SlidesError::UnresolvedFontMetrics { font: face, size });
        }
        Ok(size.0 / 1000.0)
    }
}

impl FontMetrics for StandardMetrics {
    fn text_width(&self, face: FontFace, size: Pt, text: &str) -> Result<Pt, SlidesError> {
        let scaling = Self::scaling(face, size)?;
        Ok(text
            .chars()
            .map(|ch| Pt(scaling * Self::char_width(face, ch) as f32))
            .sum())
    }

    fn ascent(&self, face: FontFace, size: Pt) -> Result<Pt, SlidesError> {
        let scaling = Self::scaling(face, size)?;
        Ok(Pt(scaling * Self::vertical(face).0 as f32))
    }

    fn line_height(&self, face: FontFace, size: Pt) -> Result<Pt, SlidesError> {
        let scaling = Self::scaling(face, size)?;
        let (ascender, descender) = Self::vertical(face);
        Ok(Pt(scaling * (ascender - descender) as f32))
    }
}
