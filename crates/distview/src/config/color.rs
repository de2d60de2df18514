//! Colour strings as they appear in theme files.
//!
//! Two forms are accepted: `grayN` with `N` a percentage (bare `gray` is
//! mid-grey) and literal `#rrggbb` hex. Short `#rgb` hex is refused.

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use distview_core::ConfigurationError;
use ratatui::style::Color;

/// An opaque 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn gray(level: u8) -> Self {
        Self(level, level, level)
    }
}

impl FromStr for Rgb {
    type Err = ConfigurationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigurationError::InvalidColor(value.to_string());

        if let Some(percent) = value.strip_prefix("gray") {
            if percent.is_empty() {
                return Ok(Rgb::gray(0x80));
            }
            // Out-of-range integers saturate; the level clamps either way
            let percent = match percent.parse::<i64>() {
                Ok(p) => p,
                Err(e) if *e.kind() == IntErrorKind::PosOverflow => i64::MAX,
                Err(e) if *e.kind() == IntErrorKind::NegOverflow => i64::MIN,
                Err(_) => return Err(invalid()),
            };
            // Linear scale then truncate, clamped to the byte range
            let level = (percent as f64 * 255.0 / 100.0).clamp(0.0, 255.0) as u8;
            return Ok(Rgb::gray(level));
        }

        if let Some(hex) = value.strip_prefix('#') {
            if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
            return Ok(Rgb(channel(0)?, channel(2)?, channel(4)?));
        }

        Err(invalid())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_hex(value: &str) -> Result<String, ConfigurationError> {
        value.parse::<Rgb>().map(|rgb| rgb.to_string())
    }

    #[test]
    fn test_gray_percentages() {
        assert_eq!(to_hex("gray0").unwrap(), "#000000");
        assert_eq!(to_hex("gray100").unwrap(), "#ffffff");
        assert_eq!(to_hex("gray50").unwrap(), "#7f7f7f");
        assert_eq!(to_hex("gray14").unwrap(), "#232323");
    }

    #[test]
    fn test_bare_gray_is_mid_gray() {
        assert_eq!(to_hex("gray").unwrap(), "#808080");
    }

    #[test]
    fn test_gray_clamps() {
        assert_eq!(to_hex("gray150").unwrap(), "#ffffff");
        assert_eq!(to_hex("gray-20").unwrap(), "#000000");
    }

    #[test]
    fn test_gray_saturates_beyond_integer_range() {
        assert_eq!(to_hex("gray99999999999999999999").unwrap(), "#ffffff");
        assert_eq!(to_hex("gray-99999999999999999999").unwrap(), "#000000");
    }

    #[test]
    fn test_short_hex_error_names_the_form() {
        let err = to_hex("#abc").unwrap_err();
        assert!(err.to_string().contains("#RGB"));
    }

    #[test]
    fn test_hex_passthrough() {
        assert_eq!(to_hex("#abcdef").unwrap(), "#abcdef");
        assert_eq!("#2FA572".parse::<Rgb>().unwrap(), Rgb(0x2f, 0xa5, 0x72));
    }

    #[test]
    fn test_rejects_other_formats() {
        for bad in ["blue", "grayish", "gray5x", "#abc", "#ggghhh", "", "#abcdef0"] {
            assert!(
                matches!(to_hex(bad), Err(ConfigurationError::InvalidColor(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_into_terminal_color() {
        let color: Color = Rgb(1, 2, 3).into();
        assert_eq!(color, Color::Rgb(1, 2, 3));
    }
}
