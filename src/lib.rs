//! Curve Digitizer Library.
//! Kurven-Modell eines Graph-Digitalisierers als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod json;
pub mod shared;

pub use app::{commit, CurvePropertiesCommand, CurvePropertiesModel, CurvePropertiesSession};
pub use core::{
    compute_order, insert_on_segment, ColorPalette, ConnectAs, Curve, CurvePoint, CurveStyle,
    Document, LineStyle, OrderingError, PointShape, PointStyle,
};
pub use json::{parse_document, write_document};
pub use shared::{DigitizerOptions, PreviewScene};
