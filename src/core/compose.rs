//! Image composition - logo embedding and preview scaling.
//!
//! All pixel work is delegated to the `image` crate: decode, Lanczos
//! resize, and alpha-blended overlay. The logo keeps its aspect ratio and
//! is centered within the symbol bounds.

use image::{RgbaImage, imageops};
use std::path::Path;

use crate::core::params::{LOGO_SCALE_MAX, LOGO_SCALE_MIN};
use crate::core::render::RenderError;

/// Decode a logo image file (PNG/JPEG/BMP/GIF/WebP) into RGBA.
pub fn load_logo(path: &Path) -> Result<RgbaImage, RenderError> {
    let img = image::open(path).map_err(|e| RenderError::LogoUnreadable(e.to_string()))?;
    Ok(img.to_rgba8())
}

/// Composite a logo into the center of a rendered symbol.
///
/// The logo is resized (aspect-preserving, Lanczos3) so that neither edge
/// exceeds `scale_percent` of the symbol's shorter side, then
/// alpha-composited centered. The symbol itself is not modified.
pub fn embed_logo(symbol: &RgbaImage, logo: &RgbaImage, scale_percent: u32) -> RgbaImage {
    let (qr_w, qr_h) = symbol.dimensions();
    let max_side = qr_w.min(qr_h);
    let scale = scale_percent.clamp(LOGO_SCALE_MIN, LOGO_SCALE_MAX) as f64 / 100.0;
    let target = (max_side as f64 * scale) as u32;

    let ratio = (target as f64 / logo.width() as f64).min(target as f64 / logo.height() as f64);
    let logo_w = ((logo.width() as f64 * ratio) as u32).max(1);
    let logo_h = ((logo.height() as f64 * ratio) as u32).max(1);
    let resized = imageops::resize(logo, logo_w, logo_h, imageops::FilterType::Lanczos3);

    log::debug!(
        "Embedding {}x{} logo (from {}x{}) into {}x{} symbol",
        logo_w,
        logo_h,
        logo.width(),
        logo.height(),
        qr_w,
        qr_h
    );

    let x = ((qr_w - logo_w) / 2) as i64;
    let y = ((qr_h - logo_h) / 2) as i64;
    let mut composited = symbol.clone();
    imageops::overlay(&mut composited, &resized, x, y);
    composited
}

/// Downscale an image to fit the preview area. Never upscales.
pub fn fit_preview(img: &RgbaImage, max_w: u32, max_h: u32) -> RgbaImage {
    let (w, h) = img.dimensions();
    let ratio = (max_w as f64 / w as f64)
        .min(max_h as f64 / h as f64)
        .min(1.0);
    if ratio >= 1.0 {
        return img.clone();
    }
    let new_w = ((w as f64 * ratio) as u32).max(1);
    let new_h = ((h as f64 * ratio) as u32).max(1);
    imageops::resize(img, new_w, new_h, imageops::FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(w: u32, h: u32, px: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba(px))
    }

    #[test]
    fn test_logo_centered_and_aspect_preserved() {
        let symbol = solid(100, 100, [255, 255, 255, 255]);
        // 1:2 logo, scale 40% of 100 -> target 40 -> resized to 20x40
        let logo = solid(10, 20, [255, 0, 0, 255]);

        let out = embed_logo(&symbol, &logo, 40);
        assert_eq!(out.dimensions(), (100, 100));

        // Center pixel is logo red
        assert_eq!(out.get_pixel(50, 50).0, [255, 0, 0, 255]);

        // Logo occupies exactly x in [40,60), y in [30,70)
        assert_eq!(out.get_pixel(40, 30).0, [255, 0, 0, 255]);
        assert_eq!(out.get_pixel(59, 69).0, [255, 0, 0, 255]);
        assert_eq!(out.get_pixel(39, 50).0, [255, 255, 255, 255]);
        assert_eq!(out.get_pixel(60, 50).0, [255, 255, 255, 255]);
        assert_eq!(out.get_pixel(50, 29).0, [255, 255, 255, 255]);
        assert_eq!(out.get_pixel(50, 70).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_scale_clamped_to_range() {
        let symbol = solid(200, 200, [255, 255, 255, 255]);
        let logo = solid(50, 50, [0, 0, 255, 255]);

        // Requesting 90% clamps to 40% -> 80x80 logo, so (200-80)/2 = 60
        let out = embed_logo(&symbol, &logo, 90);
        assert_eq!(out.get_pixel(60, 60).0, [0, 0, 255, 255]);
        assert_eq!(out.get_pixel(59, 60).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_transparent_logo_leaves_symbol() {
        let symbol = solid(80, 80, [10, 20, 30, 255]);
        let logo = solid(40, 40, [255, 0, 0, 0]); // fully transparent

        let out = embed_logo(&symbol, &logo, 30);
        for (_, _, px) in out.enumerate_pixels() {
            assert_eq!(px.0, [10, 20, 30, 255]);
        }
    }

    #[test]
    fn test_source_symbol_untouched() {
        let symbol = solid(64, 64, [255, 255, 255, 255]);
        let logo = solid(16, 16, [0, 255, 0, 255]);

        let _ = embed_logo(&symbol, &logo, 20);
        assert_eq!(symbol.get_pixel(32, 32).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_fit_preview_downscales() {
        let img = solid(800, 400, [1, 2, 3, 255]);
        let out = fit_preview(&img, 400, 400);
        assert_eq!(out.dimensions(), (400, 200));
    }

    #[test]
    fn test_fit_preview_never_upscales() {
        let img = solid(100, 50, [1, 2, 3, 255]);
        let out = fit_preview(&img, 400, 400);
        assert_eq!(out.dimensions(), (100, 50));
    }
}
