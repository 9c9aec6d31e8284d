//! QR symbol rendering - the only module that talks to the encoder crate.
//!
//! Symbol matrix construction is delegated to `qrcode`; this module maps
//! the parameter record onto it and produces either an RGBA raster (with
//! the configured border padded around the library-rendered symbol) or an
//! SVG document built from the encoded module matrix.

use image::{ImageBuffer, Rgba, RgbaImage};
use qrcode::{QrCode, Version};
use std::fmt::Write as _;

use crate::core::params::QrParams;

/// Rendering errors
#[derive(Debug)]
pub enum RenderError {
    EmptyContent,
    Encode(String),
    LogoUnreadable(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::EmptyContent => write!(f, "Content is empty"),
            RenderError::Encode(msg) => write!(f, "QR encoding failed: {}", msg),
            RenderError::LogoUnreadable(msg) => {
                write!(f, "Failed to read logo image: {}", msg)
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Encode content into a QR symbol using the parameter record.
///
/// Auto version picks the smallest symbol that fits; a forced version
/// surfaces the library error when the content does not fit it.
pub fn encode(content: &str, params: &QrParams) -> Result<QrCode, RenderError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(RenderError::EmptyContent);
    }

    let ec = params.error_correction.to_ec_level();
    let code = match params.version {
        Some(v) => QrCode::with_version(content.as_bytes(), Version::Normal(v), ec),
        None => QrCode::with_error_correction_level(content.as_bytes(), ec),
    }
    .map_err(|e| RenderError::Encode(e.to_string()))?;

    log::debug!(
        "Encoded {} bytes into version {:?} symbol ({} modules/side)",
        content.len(),
        code.version(),
        code.width()
    );
    Ok(code)
}

/// Pixel edge length of the full raster for a given module count.
pub fn raster_dimension(params: &QrParams, module_count: u32) -> u32 {
    params.box_size() * (module_count + 2 * params.border)
}

/// Render content to an RGBA raster without logo.
///
/// The symbol itself comes from the library renderer; the quiet zone is
/// padded on afterwards so the border parameter is honored exactly
/// instead of the renderer's fixed 4-module zone.
pub fn render_raster(content: &str, params: &QrParams) -> Result<RgbaImage, RenderError> {
    let code = encode(content, params)?;
    Ok(rasterize(&code, params))
}

/// Rasterize an already-encoded symbol.
pub fn rasterize(code: &QrCode, params: &QrParams) -> RgbaImage {
    let box_size = params.box_size();
    let [fr, fg, fb] = params.fill_color;
    let [br, bg, bb] = params.back_color;
    let dark = Rgba([fr, fg, fb, 255]);
    let light = Rgba([br, bg, bb, 255]);

    let symbol: RgbaImage = code
        .render::<Rgba<u8>>()
        .quiet_zone(false)
        .module_dimensions(box_size, box_size)
        .dark_color(dark)
        .light_color(light)
        .build();

    let dim = raster_dimension(params, code.width() as u32);
    let mut canvas = ImageBuffer::from_pixel(dim, dim, light);
    let offset = (box_size * params.border) as i64;
    image::imageops::replace(&mut canvas, &symbol, offset, offset);
    canvas
}

/// Render content to an SVG document string.
///
/// The module matrix comes from the encoder; the document is a background
/// rect plus one path covering the dark modules, with width/height/viewBox
/// following the same dimension formula as the raster output.
pub fn render_svg(content: &str, params: &QrParams) -> Result<String, RenderError> {
    let code = encode(content, params)?;
    let box_size = params.box_size();
    let border = params.border;
    let modules = code.width() as u32;
    let dim = raster_dimension(params, modules);

    let mut path = String::new();
    for (i, color) in code.to_colors().iter().enumerate() {
        if *color == qrcode::Color::Dark {
            let x = (i as u32 % modules + border) * box_size;
            let y = (i as u32 / modules + border) * box_size;
            let _ = write!(path, "M{} {}h{}v{}h-{}z", x, y, box_size, box_size, box_size);
        }
    }

    Ok(format!(
        "<?xml version=\"1.0\" standalone=\"yes\"?>\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" \
         width=\"{dim}\" height=\"{dim}\" viewBox=\"0 0 {dim} {dim}\" \
         shape-rendering=\"crispEdges\">\n\
         <rect x=\"0\" y=\"0\" width=\"{dim}\" height=\"{dim}\" fill=\"{back}\"/>\n\
         <path fill=\"{fill}\" d=\"{path}\"/>\n\
         </svg>\n",
        dim = dim,
        back = params.back_hex(),
        fill = params.fill_hex(),
        path = path,
    ))
}
