//! Core modules - parameters, debounce, rendering, composition.
//!
//! Everything here is independent of the UI and covered by unit tests.

pub mod compose;
pub mod debounce;
pub mod params;
pub mod render;

// Re-exports for convenience
pub use debounce::DebouncedPreview;
pub use params::{ErrorCorrection, OutputFormat, QrParams};
pub use render::RenderError;
