//! UI widgets - the parameter form, the preview panel, and shared dialogs.

pub mod file_dialogs;
pub mod params_panel;
pub mod preview;
