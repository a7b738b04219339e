//! Repräsentiert einen digitalisierten Punkt einer Kurve.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Ein digitalisierter Kurvenpunkt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Eindeutige ID innerhalb der Kurve
    pub id: u64,
    /// Position in Dokument-Koordinaten
    pub position: DVec2,
    /// Erzeugungs-Index (streng monoton steigend, wird nie wiederverwendet)
    pub age: u64,
    /// Sortierschlüssel der Relation-Reihenfolge.
    ///
    /// Entspricht `age`, außer bei Punkten, die auf eine bestehende Linie
    /// gesetzt wurden: diese liegen zwischen den Schlüsseln der beiden Endpunkte.
    pub ordinal: f64,
}

impl CurvePoint {
    /// Erstellt einen normal angehängten Punkt (Sortierschlüssel = Alter)
    pub fn new(id: u64, position: DVec2, age: u64) -> Self {
        Self {
            id,
            position,
            age,
            ordinal: age as f64,
        }
    }

    /// Erstellt einen Punkt mit explizitem Relation-Sortierschlüssel
    pub fn with_ordinal(id: u64, position: DVec2, age: u64, ordinal: f64) -> Self {
        Self {
            id,
            position,
            age,
            ordinal,
        }
    }

    /// Unabhängige Variable (x-Koordinate)
    pub fn x(&self) -> f64 {
        self.position.x
    }
}
