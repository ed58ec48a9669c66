//! QR rendering options and logo placement.
//!
//! Module encoding and rasterisation happen in the shell; this module holds
//! the validated options and the geometry both steps depend on.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::OnceLock;

/// Share of the QR width and height covered by a logo.
pub const LOGO_SCALE: f64 = 0.2;

pub const DEFAULT_MARGIN: u32 = 4;
pub const DEFAULT_WIDTH: u32 = 256;
pub const MAX_WIDTH: u32 = 4096;
/// Widest quiet zone accepted, in modules.
pub const MAX_MARGIN: u32 = 64;

pub type Rgba = [u8; 4];

pub const BLACK: Rgba = [0, 0, 0, 255];
pub const WHITE: Rgba = [255, 255, 255, 255];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QrOptionsError {
    #[error("Enter text first")]
    EmptyText,

    #[error("Invalid color: {0}. Use #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),

    #[error("Invalid error correction level: {0}. Use L, M, Q or H")]
    InvalidLevel(String),

    #[error("Width must be between 1 and 4096 pixels")]
    InvalidWidth,

    #[error("Margin must be between 0 and 64 modules")]
    InvalidMargin,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCorrection {
    #[serde(alias = "l")]
    L,
    #[default]
    #[serde(alias = "m")]
    M,
    #[serde(alias = "q")]
    Q,
    #[serde(alias = "h")]
    H,
}

impl FromStr for ErrorCorrection {
    type Err = QrOptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" | "LOW" => Ok(ErrorCorrection::L),
            "M" | "MEDIUM" => Ok(ErrorCorrection::M),
            "Q" | "QUARTILE" => Ok(ErrorCorrection::Q),
            "H" | "HIGH" => Ok(ErrorCorrection::H),
            _ => Err(QrOptionsError::InvalidLevel(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrOptions {
    pub error_correction: ErrorCorrection,
    /// Quiet zone, in modules.
    pub margin: u32,
    /// Output width and height, in pixels.
    pub width: u32,
    pub dark: Rgba,
    pub light: Rgba,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            error_correction: ErrorCorrection::M,
            margin: DEFAULT_MARGIN,
            width: DEFAULT_WIDTH,
            dark: BLACK,
            light: WHITE,
        }
    }
}

impl QrOptions {
    pub fn validate(&self) -> Result<(), QrOptionsError> {
        if self.width == 0 || self.width > MAX_WIDTH {
            return Err(QrOptionsError::InvalidWidth);
        }
        if self.margin > MAX_MARGIN {
            return Err(QrOptionsError::InvalidMargin);
        }
        Ok(())
    }
}

/// Checks that there is something to encode.
pub fn validate_text(text: &str) -> Result<&str, QrOptionsError> {
    if text.is_empty() {
        return Err(QrOptionsError::EmptyText);
    }
    Ok(text)
}

fn color_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^#?([0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").expect("color pattern is valid")
    })
}

/// Parses `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
pub fn parse_hex_color(input: &str) -> Result<Rgba, QrOptionsError> {
    let invalid = || QrOptionsError::InvalidColor(input.to_string());

    let hex = color_regex()
        .captures(input.trim())
        .and_then(|caps| caps.get(1))
        .ok_or_else(invalid)?
        .as_str();

    let channel = |i: usize| u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).map_err(|_| invalid());

    Ok([
        channel(0)?,
        channel(1)?,
        channel(2)?,
        if hex.len() == 8 { channel(3)? } else { 255 },
    ])
}

/// Where a logo goes on top of a QR image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoPlacement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Centred box covering [`LOGO_SCALE`] of the QR width and height.
pub fn logo_placement(qr_width: u32, qr_height: u32) -> LogoPlacement {
    let width = ((qr_width as f64 * LOGO_SCALE).round() as u32).max(1);
    let height = ((qr_height as f64 * LOGO_SCALE).round() as u32).max(1);

    LogoPlacement {
        x: qr_width.saturating_sub(width) / 2,
        y: qr_height.saturating_sub(height) / 2,
        width,
        height,
    }
}

/// Pixel size of one module so that `modules + 2 * margin` modules fit in
/// `width` pixels. Never less than one.
pub fn module_pixels(modules: u32, margin: u32, width: u32) -> u32 {
    match side_modules(modules, margin) {
        Some(0) | None => 1,
        Some(total) => (width / total).max(1),
    }
}

/// Modules along one side, quiet zone included. `None` on overflow.
pub fn side_modules(modules: u32, margin: u32) -> Option<u32> {
    margin.checked_mul(2)?.checked_add(modules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#000000"), Ok(BLACK));
        assert_eq!(parse_hex_color("ffffff"), Ok(WHITE));
        assert_eq!(parse_hex_color("#4F46E580"), Ok([0x4F, 0x46, 0xE5, 0x80]));
    }

    #[test]
    fn test_parse_hex_color_rejects_garbage() {
        assert_eq!(
            parse_hex_color("#12345"),
            Err(QrOptionsError::InvalidColor("#12345".to_string()))
        );
        assert!(parse_hex_color("red").is_err());
        assert!(parse_hex_color("#GGGGGG").is_err());
    }

    #[test]
    fn test_error_correction_from_str() {
        assert_eq!("h".parse::<ErrorCorrection>(), Ok(ErrorCorrection::H));
        assert_eq!("Quartile".parse::<ErrorCorrection>(), Ok(ErrorCorrection::Q));
        assert!("X".parse::<ErrorCorrection>().is_err());
    }

    #[test]
    fn test_logo_placement_is_centred_at_twenty_percent() {
        assert_eq!(
            logo_placement(250, 250),
            LogoPlacement {
                x: 100,
                y: 100,
                width: 50,
                height: 50
            }
        );
    }

    #[test]
    fn test_logo_placement_on_tiny_image() {
        let placement = logo_placement(2, 2);
        assert_eq!(placement.width, 1);
        assert_eq!(placement.x, 0);
    }

    #[test]
    fn test_module_pixels() {
        // Version 1 is 21 modules; with a 4 module margin that is 29.
        assert_eq!(module_pixels(21, 4, 290), 10);
        assert_eq!(module_pixels(21, 4, 10), 1);
        assert_eq!(module_pixels(0, 0, 10), 1);
        assert_eq!(module_pixels(21, u32::MAX, 256), 1);
        assert_eq!(side_modules(21, 4), Some(29));
        assert_eq!(side_modules(21, u32::MAX / 2), None);
    }

    #[test]
    fn test_options_validation() {
        assert!(QrOptions::default().validate().is_ok());
        let options = QrOptions {
            width: 0,
            ..QrOptions::default()
        };
        assert_eq!(options.validate(), Err(QrOptionsError::InvalidWidth));
        assert_eq!(validate_text(""), Err(QrOptionsError::EmptyText));
    }

    #[test]
    fn test_margin_is_bounded() {
        let options = |margin| QrOptions {
            margin,
            ..QrOptions::default()
        };
        assert!(options(0).validate().is_ok());
        assert!(options(MAX_MARGIN).validate().is_ok());
        assert_eq!(
            options(MAX_MARGIN + 1).validate(),
            Err(QrOptionsError::InvalidMargin)
        );
        assert_eq!(
            options(1_000_000).validate(),
            Err(QrOptionsError::InvalidMargin)
        );
        assert_eq!(
            QrOptionsError::InvalidMargin.to_string(),
            "Margin must be between 0 and 64 modules"
        );
    }
}
