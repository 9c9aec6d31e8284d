//! QRSTUDIO - QR code generator library
//!
//! Re-exports all modules for use by the binary target.

// Core (parameters, debounce, rendering, composition)
pub mod core;

// App modules
pub mod cli;
pub mod widgets;

// Re-export commonly used types from core
pub use core::debounce::DebouncedPreview;
pub use core::params::{ErrorCorrection, OutputFormat, QrParams};
pub use core::render::RenderError;
