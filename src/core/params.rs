//! QR generation parameters - the flat record behind the parameter form.
//!
//! Holds everything the UI collects: symbol version, error correction,
//! pixel scale, border, colors, output format and the optional logo.
//! Lives in memory for the session only; nothing is persisted.

use std::path::PathBuf;

/// Symbol version upper bound defined by the QR standard.
pub const MAX_VERSION: i16 = 40;

/// Logo width limits as a percentage of the symbol edge.
pub const LOGO_SCALE_MIN: u32 = 5;
pub const LOGO_SCALE_MAX: u32 = 40;

/// Error correction level (redundancy tier).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCorrection {
    L,
    M,
    Q,
    H,
}

impl ErrorCorrection {
    pub fn all() -> &'static [ErrorCorrection] {
        &[
            ErrorCorrection::L,
            ErrorCorrection::M,
            ErrorCorrection::Q,
            ErrorCorrection::H,
        ]
    }

    /// Map to the encoder crate's level.
    pub fn to_ec_level(self) -> qrcode::EcLevel {
        match self {
            ErrorCorrection::L => qrcode::EcLevel::L,
            ErrorCorrection::M => qrcode::EcLevel::M,
            ErrorCorrection::Q => qrcode::EcLevel::Q,
            ErrorCorrection::H => qrcode::EcLevel::H,
        }
    }
}

impl std::fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCorrection::L => write!(f, "L (7%)"),
            ErrorCorrection::M => write!(f, "M (15%)"),
            ErrorCorrection::Q => write!(f, "Q (25%)"),
            ErrorCorrection::H => write!(f, "H (30%)"),
        }
    }
}

/// Export format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum OutputFormat {
    PNG,
    SVG,
}

impl OutputFormat {
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::PNG, OutputFormat::SVG]
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::PNG => "png",
            OutputFormat::SVG => "svg",
        }
    }

    /// Bitmap logos can only be composited into raster output.
    pub fn supports_logo(&self) -> bool {
        matches!(self, OutputFormat::PNG)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::PNG => write!(f, "PNG"),
            OutputFormat::SVG => write!(f, "SVG"),
        }
    }
}

/// The full parameter record collected by the form.
#[derive(Clone, Debug, PartialEq)]
pub struct QrParams {
    /// Forced symbol version (1-40), or None for auto-fit.
    pub version: Option<i16>,
    pub error_correction: ErrorCorrection,
    /// Pixel edge length of one module in raster output.
    pub box_size: u32,
    /// Quiet-zone width in modules around the symbol.
    pub border: u32,
    pub fill_color: [u8; 3],
    pub back_color: [u8; 3],
    pub format: OutputFormat,
    pub logo_path: Option<PathBuf>,
    /// Logo width as a percentage of the symbol edge.
    pub logo_scale_percent: u32,
}

impl Default for QrParams {
    fn default() -> Self {
        Self {
            version: None,
            error_correction: ErrorCorrection::M,
            box_size: 10,
            border: 4,
            fill_color: [0x00, 0x00, 0x00],
            back_color: [0xFF, 0xFF, 0xFF],
            format: OutputFormat::PNG,
            logo_path: None,
            logo_scale_percent: 20,
        }
    }
}

impl QrParams {
    /// Effective box size (never below one pixel per module).
    pub fn box_size(&self) -> u32 {
        self.box_size.max(1)
    }

    /// Effective logo scale, clamped to the allowed range.
    pub fn logo_scale(&self) -> u32 {
        self.logo_scale_percent.clamp(LOGO_SCALE_MIN, LOGO_SCALE_MAX)
    }

    /// Change the export format, enforcing the cross-field rule:
    /// switching to a vector format drops any configured bitmap logo.
    /// Returns true if a logo path was cleared.
    pub fn set_format(&mut self, format: OutputFormat) -> bool {
        self.format = format;
        if !format.supports_logo() && self.logo_path.is_some() {
            log::info!("Vector output selected, clearing logo path");
            self.logo_path = None;
            return true;
        }
        false
    }

    /// Hex string of the module color, e.g. "#000000".
    pub fn fill_hex(&self) -> String {
        hex(self.fill_color)
    }

    /// Hex string of the background color.
    pub fn back_hex(&self) -> String {
        hex(self.back_color)
    }
}

fn hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_form() {
        let p = QrParams::default();
        assert_eq!(p.version, None);
        assert_eq!(p.error_correction, ErrorCorrection::M);
        assert_eq!(p.box_size, 10);
        assert_eq!(p.border, 4);
        assert_eq!(p.format, OutputFormat::PNG);
        assert_eq!(p.logo_scale_percent, 20);
    }

    #[test]
    fn test_box_size_floor() {
        let p = QrParams {
            box_size: 0,
            ..Default::default()
        };
        assert_eq!(p.box_size(), 1);
    }

    #[test]
    fn test_logo_scale_clamped() {
        let mut p = QrParams::default();
        p.logo_scale_percent = 1;
        assert_eq!(p.logo_scale(), LOGO_SCALE_MIN);
        p.logo_scale_percent = 90;
        assert_eq!(p.logo_scale(), LOGO_SCALE_MAX);
        p.logo_scale_percent = 25;
        assert_eq!(p.logo_scale(), 25);
    }

    #[test]
    fn test_svg_clears_logo() {
        let mut p = QrParams {
            logo_path: Some(PathBuf::from("logo.png")),
            ..Default::default()
        };
        assert!(p.set_format(OutputFormat::SVG));
        assert_eq!(p.logo_path, None);

        // Switching back does not resurrect the path
        assert!(!p.set_format(OutputFormat::PNG));
        assert_eq!(p.logo_path, None);
    }

    #[test]
    fn test_png_keeps_logo() {
        let mut p = QrParams {
            logo_path: Some(PathBuf::from("logo.png")),
            ..Default::default()
        };
        assert!(!p.set_format(OutputFormat::PNG));
        assert!(p.logo_path.is_some());
    }

    #[test]
    fn test_hex_formatting() {
        let p = QrParams {
            fill_color: [0x12, 0xAB, 0x00],
            back_color: [0xFF, 0xFF, 0xFF],
            ..Default::default()
        };
        assert_eq!(p.fill_hex(), "#12ab00");
        assert_eq!(p.back_hex(), "#ffffff");
    }
}
