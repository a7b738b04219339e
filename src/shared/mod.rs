//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und einem Renderer geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod preview_scene;

pub use options::DigitizerOptions;
pub use options::{PREVIEW_HEIGHT, PREVIEW_WIDTH, SEGMENT_SNAP_DISTANCE};
pub use preview_scene::{PreviewLine, PreviewPoint, PreviewScene};
