use qrstudio::cli::Args;
use qrstudio::core::compose;
use qrstudio::core::debounce::DebouncedPreview;
use qrstudio::core::params::{OutputFormat, QrParams};
use qrstudio::core::render::{self, RenderError};
use qrstudio::widgets::file_dialogs;
use qrstudio::widgets::params_panel;
use qrstudio::widgets::preview::{PREVIEW_MAX, PreviewState};

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use image::RgbaImage;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Main application state
struct QrStudioApp {
    /// Content to encode (text box buffer)
    content: String,
    params: QrParams,
    preview: PreviewState,
    /// One-shot timer coalescing rapid edits into a single re-render
    debounce: DebouncedPreview,
}

impl Default for QrStudioApp {
    fn default() -> Self {
        Self {
            content: String::new(),
            params: QrParams::default(),
            preview: PreviewState::default(),
            debounce: DebouncedPreview::default(),
        }
    }
}

impl QrStudioApp {
    /// Load a text file into the content buffer and re-render.
    fn load_content_file(&mut self, ctx: &egui::Context, path: &Path) {
        match std::fs::read_to_string(path) {
            Ok(data) => {
                info!("Loaded content from {}", path.display());
                self.content = data;
                self.debounce.cancel();
                self.refresh_preview(ctx, false);
            }
            Err(e) => {
                file_dialogs::show_error(
                    "Load failed",
                    &format!("{}: {}", path.display(), e),
                );
            }
        }
    }

    /// Build the full-resolution export raster (with logo when set).
    ///
    /// Unlike the preview path, logo failures here are hard errors - a
    /// save must never silently drop the configured logo.
    fn build_export_image(&self) -> Result<RgbaImage, RenderError> {
        let code = render::encode(&self.content, &self.params)?;
        let mut img = render::rasterize(&code, &self.params);

        if self.params.format.supports_logo()
            && let Some(path) = &self.params.logo_path
        {
            let logo = compose::load_logo(path)?;
            img = compose::embed_logo(&img, &logo, self.params.logo_scale());
        }
        Ok(img)
    }

    /// Re-render the preview texture.
    ///
    /// The preview always shows the raster path, even when SVG export is
    /// selected. With `report_errors` false (debounced typing flow),
    /// failures are swallowed and the previous preview stays on screen.
    fn refresh_preview(&mut self, ctx: &egui::Context, report_errors: bool) {
        let code = match render::encode(&self.content, &self.params) {
            Ok(code) => code,
            Err(RenderError::EmptyContent) => {
                self.preview.clear();
                if report_errors {
                    file_dialogs::show_error("Generate failed", "Please enter content first");
                }
                return;
            }
            Err(e) => {
                if report_errors {
                    file_dialogs::show_error("Generate failed", &e.to_string());
                } else {
                    debug!("Preview refresh skipped: {}", e);
                }
                return;
            }
        };

        let mut img = render::rasterize(&code, &self.params);

        // Logo failures never break the preview, only the bare symbol is shown
        if self.params.format.supports_logo()
            && let Some(path) = self.params.logo_path.clone()
        {
            match compose::load_logo(&path) {
                Ok(logo) => img = compose::embed_logo(&img, &logo, self.params.logo_scale()),
                Err(e) => warn!("Logo compositing failed, previewing bare symbol: {}", e),
            }
        }

        let full_size = img.dimensions();
        let scaled = compose::fit_preview(&img, PREVIEW_MAX, PREVIEW_MAX);
        self.preview
            .set_image(ctx, &scaled, full_size, code.width() as u32);
    }

    /// Save the symbol in the selected export format.
    fn save(&mut self) {
        match self.params.format {
            OutputFormat::PNG => {
                let Some(path) = file_dialogs::pick_save_file(OutputFormat::PNG) else {
                    return;
                };
                match self.build_export_image() {
                    Ok(img) => match img.save(&path) {
                        Ok(()) => {
                            info!("Saved PNG to {}", path.display());
                            file_dialogs::show_info(
                                "Saved",
                                &format!("Saved:\n{}", path.display()),
                            );
                        }
                        Err(e) => file_dialogs::show_error("Save failed", &e.to_string()),
                    },
                    Err(e) => file_dialogs::show_error("Save failed", &e.to_string()),
                }
            }
            OutputFormat::SVG => {
                let Some(path) = file_dialogs::pick_save_file(OutputFormat::SVG) else {
                    return;
                };
                match render::render_svg(&self.content, &self.params) {
                    Ok(svg) => match std::fs::write(&path, svg) {
                        Ok(()) => {
                            info!("Saved SVG to {}", path.display());
                            file_dialogs::show_info(
                                "Saved",
                                &format!("Saved:\n{}", path.display()),
                            );
                        }
                        Err(e) => file_dialogs::show_error("Save failed", &e.to_string()),
                    },
                    Err(e) => file_dialogs::show_error("Save failed", &e.to_string()),
                }
            }
        }
    }
}

impl eframe::App for QrStudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Debounced refresh fires here; failures are silent by design
        if self.debounce.tick() {
            self.refresh_preview(ctx, false);
        }

        // Handle dropped text files - load as content
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        if let Some(path) = dropped.first() {
            info!("File dropped: {}", path.display());
            self.load_content_file(ctx, path);
        }

        egui::SidePanel::right("params_panel")
            .resizable(false)
            .default_width(300.0)
            .show(ctx, |ui| {
                let actions = params_panel::render(ui, &mut self.params);
                if actions.logo_cleared {
                    file_dialogs::show_info(
                        "Logo cleared",
                        "SVG output cannot embed a bitmap logo; the logo setting was removed.",
                    );
                }
                if actions.changed {
                    self.debounce.schedule();
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label("Content (text / URL / JSON):");
            let edit = ui.add(
                egui::TextEdit::multiline(&mut self.content)
                    .desired_rows(8)
                    .desired_width(f32::INFINITY),
            );
            if edit.changed() {
                self.debounce.schedule();
            }

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("Load from file…").clicked()
                    && let Some(path) = file_dialogs::pick_text_file()
                {
                    self.load_content_file(ctx, &path);
                }
                if ui.button("Clear").clicked() {
                    self.content.clear();
                    self.debounce.cancel();
                    self.preview.clear();
                }
                if ui.button("Generate preview").clicked() {
                    self.debounce.cancel();
                    self.refresh_preview(ctx, true);
                }
                if ui.button("Save…").clicked() {
                    self.save();
                }
            });

            ui.add_space(8.0);
            ui.separator();
            ui.label("Preview");
            self.preview.render(ui);
        });

        // Keep repainting until the pending debounce deadline is serviced
        if let Some(remaining) = self.debounce.time_until_fire() {
            ctx.request_repaint_after(remaining);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Determine log level based on verbosity flags
    // 0 (default) = warn, 1 (-v) = info, 2 (-vv) = debug, 3+ (-vvv) = trace
    let log_level = match args.verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    // Initialize logger based on --log flag
    if let Some(log_path_opt) = &args.log_file {
        let log_path = log_path_opt
            .as_ref()
            .cloned()
            .unwrap_or_else(|| PathBuf::from("qrstudio.log"));

        let file = std::fs::File::create(&log_path)
            .with_context(|| format!("failed to create log file {}", log_path.display()))?;

        env_logger::Builder::new()
            .filter_level(log_level)
            .filter_module("egui", log::LevelFilter::Info) // Suppress egui DEBUG spam
            .format_timestamp_millis()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();

        info!(
            "Logging to file: {} (level: {:?})",
            log_path.display(),
            log_level
        );
    } else {
        let default_level = match args.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
            .filter_module("egui", log::LevelFilter::Info) // Suppress egui DEBUG spam
            .format_timestamp_millis()
            .init();
    }

    info!("QR Studio starting...");
    debug!("Command-line args: {:?}", args);

    // Initial content from CLI (inline text wins over the file argument)
    let initial_content = if let Some(text) = args.text {
        Some(text)
    } else if let Some(ref path) = args.file_path {
        match std::fs::read_to_string(path) {
            Ok(data) => {
                info!("Preloading content from {}", path.display());
                Some(data)
            }
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    } else {
        None
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!("QR Studio v{}", env!("CARGO_PKG_VERSION")))
            .with_inner_size(egui::vec2(1200.0, 700.0))
            .with_min_inner_size(egui::vec2(1100.0, 680.0))
            .with_resizable(true)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "QR Studio",
        native_options,
        Box::new(move |cc| {
            let mut app = QrStudioApp::default();
            if let Some(content) = initial_content {
                app.content = content;
                app.refresh_preview(&cc.egui_ctx, false);
            }
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to run UI: {e}"))?;

    info!("Application exiting");
    Ok(())
}
