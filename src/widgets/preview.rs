//! Preview panel - texture upload and display of the rendered symbol.

use eframe::egui;
use image::RgbaImage;

/// Preview area target size in points.
pub const PREVIEW_MAX: u32 = 400;

/// Holds the uploaded preview texture plus status info about the
/// full-resolution render it was downscaled from.
#[derive(Default)]
pub struct PreviewState {
    texture: Option<egui::TextureHandle>,
    /// Full-resolution export dimensions
    full_size: (u32, u32),
    /// Modules per side of the encoded symbol
    module_count: u32,
}

impl PreviewState {
    /// Upload a (already downscaled) preview image as the current texture.
    pub fn set_image(
        &mut self,
        ctx: &egui::Context,
        preview: &RgbaImage,
        full_size: (u32, u32),
        module_count: u32,
    ) {
        let size = [preview.width() as usize, preview.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, preview.as_raw());
        // NEAREST keeps module edges crisp when egui rescales
        self.texture = Some(ctx.load_texture("qr_preview", color_image, egui::TextureOptions::NEAREST));
        self.full_size = full_size;
        self.module_count = module_count;
    }

    /// Drop the current preview (e.g. content cleared).
    pub fn clear(&mut self) {
        self.texture = None;
        self.full_size = (0, 0);
        self.module_count = 0;
    }

    /// Render the preview area with a status line underneath.
    pub fn render(&self, ui: &mut egui::Ui) {
        match &self.texture {
            Some(texture) => {
                ui.vertical_centered(|ui| {
                    ui.image(texture);
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(format!(
                            "{} modules • export {}×{} px",
                            self.module_count, self.full_size.0, self.full_size.1
                        ))
                        .small()
                        .weak(),
                    );
                });
            }
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label(egui::RichText::new("Preview appears after you enter content").weak());
                });
            }
        }
    }
}
