//! RGB colors carried by organizations and projects

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An RGB color, written on the wire as a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component
    pub red: u8,
    /// Green component
    pub green: u8,
    /// Blue component
    pub blue: u8,
}

impl Color {
    /// Create a color from components.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (the `#` or a `0x` prefix is
    /// optional). Alpha is ignored.
    pub fn from_hex(text: &str) -> Option<Self> {
        let hex = text
            .strip_prefix('#')
            .or_else(|| text.strip_prefix("0x"))
            .unwrap_or(text);
        if !hex.is_ascii() {
            return None;
        }

        let component = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            3 => {
                let mut digits = hex.chars().map(|c| component(&format!("{c}{c}")));
                Some(Self::new(digits.next()??, digits.next()??, digits.next()??))
            }
            6 | 8 => Some(Self::new(
                component(&hex[0..2])?,
                component(&hex[2..4])?,
                component(&hex[4..6])?,
            )),
            _ => None,
        }
    }

    /// Six lowercase hex digits, without a prefix.
    pub fn hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Color::from_hex(&text)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color {text:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("#3b5998", Some(Color::new(0x3b, 0x59, 0x98)))]
    #[case("3B5998", Some(Color::new(0x3b, 0x59, 0x98)))]
    #[case("0x3b5998", Some(Color::new(0x3b, 0x59, 0x98)))]
    #[case("#fa0", Some(Color::new(0xff, 0xaa, 0x00)))]
    #[case("#3b5998ff", Some(Color::new(0x3b, 0x59, 0x98)))]
    #[case("#3b59", None)]
    #[case("zzzzzz", None)]
    #[case("", None)]
    #[case("ééé", None)]
    fn test_from_hex(#[case] input: &str, #[case] expected: Option<Color>) {
        assert_eq!(Color::from_hex(input), expected);
    }

    #[test]
    fn test_hex_is_zero_padded() {
        assert_eq!(Color::new(0, 10, 255).hex(), "000aff");
    }

    #[test]
    fn test_serde_as_hex_string() {
        let color = Color::new(0x3b, 0x59, 0x98);
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"3b5998\"");
        assert_eq!(serde_json::from_str::<Color>("\"#3b5998\"").unwrap(), color);
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }
}
