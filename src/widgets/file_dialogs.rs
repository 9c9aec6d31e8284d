//! Shared file dialog and message box helpers for widget UI.

use std::path::PathBuf;

use crate::core::params::OutputFormat;

/// Extensions accepted for logo images.
pub const LOGO_EXTS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "webp"];

/// Extensions offered for text content files.
pub const TEXT_EXTS: &[&str] = &["txt", "md", "csv", "json", "xml", "yml", "yaml"];

/// Pick a text file to load as content.
pub fn pick_text_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Load content from file")
        .add_filter("Text", TEXT_EXTS)
        .add_filter("All Files", &["*"])
        .pick_file()
}

/// Pick a logo image.
pub fn pick_logo_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Choose logo image")
        .add_filter("Images", LOGO_EXTS)
        .add_filter("All Files", &["*"])
        .pick_file()
}

/// Save-as dialog for the selected export format.
pub fn pick_save_file(format: OutputFormat) -> Option<PathBuf> {
    let ext = format.extension();
    rfd::FileDialog::new()
        .set_title(&format!("Save as {}", format))
        .add_filter(&format.to_string(), &[ext])
        .set_file_name(&format!("qrcode.{}", ext))
        .save_file()
}

/// Modal error box (save/load failures are always reported).
pub fn show_error(title: &str, message: &str) {
    log::error!("{}: {}", title, message);
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title(title)
        .set_description(message)
        .show();
}

/// Modal info box.
pub fn show_info(title: &str, message: &str) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Info)
        .set_title(title)
        .set_description(message)
        .show();
}
