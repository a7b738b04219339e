//! Core-Domänentypen: Punkte, Kurven, Stile, Dokument und Punkt-Reihenfolge.

pub mod connect_as;
pub mod curve;
pub mod document;
pub mod error;
/// Reine Reihenfolge-Berechnung (Function / Relation) und Einfügen auf Linien
pub mod ordering;
pub mod point;
pub mod style;

pub use connect_as::ConnectAs;
pub use curve::Curve;
pub use document::{Document, AXIS_CURVE_NAME, DEFAULT_GRAPH_CURVE_NAME};
pub use error::{DocumentError, OrderingError, StyleError};
pub use ordering::{
    compute_order, distance_to_segment, insert_on_segment, nearest_segment, splice_between,
    AgeAssignment, SegmentHit,
};
pub use point::CurvePoint;
pub use style::{
    point_polygon, ColorPalette, CurveStyle, LineStyle, PointShape, PointStyle, MIN_LINE_WIDTH,
    MIN_POINT_RADIUS,
};
