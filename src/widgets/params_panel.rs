//! Parameter form - the right-hand panel of the main window.
//!
//! Edits the `QrParams` record in place and reports what happened through
//! a `ParamActions` result so the app can schedule the debounced preview
//! and surface the SVG/logo interaction.

use eframe::egui;

use crate::core::params::{
    ErrorCorrection, LOGO_SCALE_MAX, LOGO_SCALE_MIN, MAX_VERSION, OutputFormat, QrParams,
};
use crate::widgets::file_dialogs;

/// Result of rendering the form.
#[derive(Default)]
pub struct ParamActions {
    /// Any parameter changed this frame
    pub changed: bool,
    /// The cross-field rule fired: switching to SVG dropped the logo path
    pub logo_cleared: bool,
}

/// Render the parameter form.
pub fn render(ui: &mut egui::Ui, params: &mut QrParams) -> ParamActions {
    let before = params.clone();
    let mut logo_cleared = false;

    ui.heading("Parameters");
    ui.add_space(4.0);

    // Version
    ui.horizontal(|ui| {
        ui.label("Version (1-40):");
        let selected = match params.version {
            None => "Auto".to_string(),
            Some(v) => v.to_string(),
        };
        egui::ComboBox::from_id_salt("qr_version")
            .selected_text(selected)
            .width(70.0)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut params.version, None, "Auto");
                for v in 1..=MAX_VERSION {
                    ui.selectable_value(&mut params.version, Some(v), v.to_string());
                }
            });
    });

    // Error correction
    ui.horizontal(|ui| {
        ui.label("Error correction:");
        egui::ComboBox::from_id_salt("qr_ec_level")
            .selected_text(params.error_correction.to_string())
            .width(90.0)
            .show_ui(ui, |ui| {
                for level in ErrorCorrection::all() {
                    ui.selectable_value(&mut params.error_correction, *level, level.to_string());
                }
            });
    });

    ui.add_space(4.0);

    // Pixel scale and quiet zone
    ui.horizontal(|ui| {
        ui.label("Box size:");
        ui.add(egui::Slider::new(&mut params.box_size, 1..=50).text("px/module"));
    });
    ui.horizontal(|ui| {
        ui.label("Border:");
        ui.add(egui::Slider::new(&mut params.border, 0..=10).text("modules"));
    });

    ui.add_space(4.0);

    // Colors
    ui.horizontal(|ui| {
        ui.label("Foreground:");
        ui.color_edit_button_srgb(&mut params.fill_color);
        ui.label("Background:");
        ui.color_edit_button_srgb(&mut params.back_color);
    });

    ui.add_space(4.0);

    // Output format
    ui.horizontal(|ui| {
        ui.label("Output format:");
        let mut format = params.format;
        egui::ComboBox::from_id_salt("qr_format")
            .selected_text(format.to_string())
            .width(70.0)
            .show_ui(ui, |ui| {
                for f in OutputFormat::all() {
                    ui.selectable_value(&mut format, *f, f.to_string());
                }
            });
        if format != params.format {
            logo_cleared = params.set_format(format);
        }
    });

    ui.add_space(8.0);
    ui.separator();

    // Logo group (raster output only)
    ui.label(format!("Logo ({} only)", OutputFormat::PNG));
    ui.add_enabled_ui(params.format.supports_logo(), |ui| {
        ui.horizontal(|ui| {
            let path_text = params
                .logo_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(none)".to_string());
            ui.label(egui::RichText::new(path_text).monospace().small());
        });
        ui.horizontal(|ui| {
            if ui.button("Browse…").clicked()
                && let Some(path) = file_dialogs::pick_logo_file()
            {
                params.logo_path = Some(path);
            }
            if ui.button("Clear").clicked() {
                params.logo_path = None;
            }
        });
        ui.horizontal(|ui| {
            ui.label("Width %:");
            ui.add(egui::Slider::new(
                &mut params.logo_scale_percent,
                LOGO_SCALE_MIN..=LOGO_SCALE_MAX,
            ));
        });
    });

    ParamActions {
        changed: *params != before,
        logo_cleared,
    }
}
