//! Fehlertypen des Domänen-Kerns.

use thiserror::Error;

use super::style::{MIN_LINE_WIDTH, MIN_POINT_RADIUS};

/// Fehler bei der Berechnung von Punkt-Reihenfolgen und Alters-Zuweisungen.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderingError {
    /// Ein Segment-Endpunkt ist nicht Teil der übergebenen Punktmenge
    #[error("Segment-Endpunkt {missing} fehlt in der Punktmenge")]
    InvalidInput {
        /// ID des fehlenden Endpunkts
        missing: u64,
    },
    /// Start- und Endpunkt des Segments sind identisch
    #[error("Segment mit identischen Endpunkten ({0})")]
    DegenerateSegment(u64),
    /// Fangabstand ist negativ oder nicht endlich
    #[error("Ungültiger Fangabstand: {0}")]
    InvalidThreshold(f64),
    /// Position enthält NaN oder Unendlich
    #[error("Position ist nicht endlich: ({x}, {y})")]
    NonFinitePosition {
        /// x-Koordinate
        x: f64,
        /// y-Koordinate
        y: f64,
    },
}

/// Verletzte Grenzen eines Kurven-Stils.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("Punktgröße muss mindestens {min} sein (war {0})", min = MIN_POINT_RADIUS)]
    PointRadiusTooSmall(u32),
    #[error("Linienbreite muss mindestens {min} sein (war {0})", min = MIN_LINE_WIDTH)]
    LineWidthTooSmall(u32),
    #[error("Punkte dürfen nicht transparent sein")]
    TransparentPointColor,
}

/// Fehler beim Verwalten der Kurven eines Dokuments.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DocumentError {
    #[error("Kurvenname darf nicht leer sein")]
    EmptyCurveName,
    #[error("Kurve '{0}' existiert bereits")]
    DuplicateCurveName(String),
    #[error("Kurve '{0}' nicht gefunden")]
    UnknownCurve(String),
    #[error("Die Achsen-Kurve kann weder entfernt noch umbenannt werden")]
    AxisCurveImmutable,
    #[error("Kurven-Schlüssel '{key}' passt nicht zum Kurvennamen '{name}'")]
    NameMismatch { key: String, name: String },
    #[error("Kurve '{curve}': Punkt-ID {id} ist doppelt vergeben")]
    DuplicatePointId { curve: String, id: u64 },
    #[error("Kurve '{curve}': Alter {age} ist doppelt vergeben")]
    DuplicateAge { curve: String, age: u64 },
    #[error("Kurve '{curve}': Alter {age} ist nicht kleiner als der Alterszähler {next_age}")]
    AgeOutOfRange {
        curve: String,
        age: u64,
        next_age: u64,
    },
    /// Neue Punkte erhalten ihr Alter als ID; geladene IDs müssen darunter liegen
    #[error("Kurve '{curve}': Punkt-ID {id} ist nicht kleiner als der Alterszähler {next_age}")]
    IdOutOfRange {
        curve: String,
        id: u64,
        next_age: u64,
    },
    #[error("Kurve '{curve}': Punkt {id} hat keine endliche Position")]
    NonFinitePoint { curve: String, id: u64 },
    #[error("Kurve '{curve}': {source}")]
    InvalidStyle {
        curve: String,
        #[source]
        source: StyleError,
    },
}
