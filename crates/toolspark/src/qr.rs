//! QR rasterisation: module matrix from `qrcode`, pixels and PNG from `image`.

use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgba, RgbaImage};
use qrcode::{Color, EcLevel, QrCode};
use std::io::Cursor;
use std::path::Path;
use toolspark_core::qr::{
    logo_placement, module_pixels, side_modules, ErrorCorrection, QrOptions,
};

use crate::error::Error;

fn ec_level(level: ErrorCorrection) -> EcLevel {
    match level {
        ErrorCorrection::L => EcLevel::L,
        ErrorCorrection::M => EcLevel::M,
        ErrorCorrection::Q => EcLevel::Q,
        ErrorCorrection::H => EcLevel::H,
    }
}

/// Draws `text` as a square QR image of `options.width` pixels.
pub fn render(text: &str, options: &QrOptions) -> Result<RgbaImage, Error> {
    options
        .validate()
        .map_err(|e| Error::QrEncoding(e.to_string()))?;

    let code = QrCode::with_error_correction_level(text.as_bytes(), ec_level(options.error_correction))
        .map_err(|e| Error::QrEncoding(e.to_string()))?;

    let modules = code.width() as u32;
    let scale = module_pixels(modules, options.margin, options.width);
    let size = side_modules(modules, options.margin)
        .and_then(|side| side.checked_mul(scale))
        .ok_or_else(|| Error::QrEncoding(format!("{} modules do not fit", modules)))?;

    let mut image = RgbaImage::from_pixel(size, size, Rgba(options.light));
    let dark = Rgba(options.dark);

    for (index, color) in code.to_colors().into_iter().enumerate() {
        if color != Color::Dark {
            continue;
        }
        let x0 = (index as u32 % modules + options.margin) * scale;
        let y0 = (index as u32 / modules + options.margin) * scale;
        for dy in 0..scale {
            for dx in 0..scale {
                image.put_pixel(x0 + dx, y0 + dy, dark);
            }
        }
    }

    if size != options.width {
        image = imageops::resize(&image, options.width, options.width, FilterType::Nearest);
    }

    Ok(image)
}

/// Puts the logo at `path` in the middle of `qr`. A logo that cannot be read
/// leaves the QR untouched.
pub fn overlay_logo(mut qr: RgbaImage, path: &Path) -> RgbaImage {
    let logo = match image::open(path) {
        Ok(logo) => logo.to_rgba8(),
        Err(e) => {
            log::warn!("Ignoring logo {}: {}", path.display(), e);
            return qr;
        }
    };

    let placement = logo_placement(qr.width(), qr.height());
    let logo = imageops::resize(&logo, placement.width, placement.height, FilterType::Triangle);
    imageops::overlay(&mut qr, &logo, placement.x as i64, placement.y as i64);

    qr
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, Error> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| Error::Image(e.to_string()))?;
    Ok(bytes)
}

/// Full QR pipeline: encode, draw, optionally add a logo, then PNG.
pub fn render_png(text: &str, options: &QrOptions, logo: Option<&Path>) -> Result<Vec<u8>, Error> {
    let mut image = render(text, options)?;
    if let Some(path) = logo {
        image = overlay_logo(image, path);
    }
    encode_png(&image)
}
