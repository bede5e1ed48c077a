use serde::Deserialize;

/// A fill colour, expressed in the RGB or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Parse a `#RRGGBB` hex string, as written in the settings file
    pub fn from_hex(hex: &str) -> Option<Colour> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Colour::new_rgb_bytes(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Colour {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Colour::from_hex(&value).ok_or_else(|| format!("`{value}` is not a #RRGGBB colour"))
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Colour::try_from(value).map_err(serde::de::Error::custom)
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
}

/// The colours a slide is painted with
#[derive(Copy, Clone, PartialEq, Debug, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background: Colour,
    pub text: Colour,
    pub verse_number: Colour,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: colours::BLACK,
            text: colours::WHITE,
            verse_number: colours::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colours() {
        assert_eq!(
            Colour::from_hex("#FF0080"),
            Some(Colour::RGB {
                r: 1.0,
                g: 0.0,
                b: 128.0 / 255.0
            })
        );
        assert_eq!(Colour::from_hex("00ff00"), Colour::from_hex("#00FF00"));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(Colour::from_hex("#FFF"), None);
        assert_eq!(Colour::from_hex("#GG0000"), None);
        assert_eq!(Colour::from_hex("#ééé"), None);
    }
}
