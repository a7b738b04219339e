//! Vorschau-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein Renderer sie konsumiert.

use glam::DVec2;

/// Ein als Umriss gezeichneter Punkt der Vorschau.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewPoint {
    /// Mittelpunkt in Szenen-Koordinaten
    pub center: DVec2,
    /// Umriss, bereits auf `center` verschoben
    pub outline: Vec<DVec2>,
    /// `true` wenn der Umriss geschlossen gezeichnet wird
    pub closed: bool,
    /// Umrissfarbe (RGBA)
    pub color: [f32; 4],
}

/// Eine Linie der Vorschau.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewLine {
    pub start: DVec2,
    pub end: DVec2,
    /// Linienbreite in Pixeln
    pub width: f64,
    /// Linienfarbe (RGBA)
    pub color: [f32; 4],
}

/// Read-only Daten für die Stil-Vorschau einer Kurve.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewScene {
    /// Name der dargestellten Kurve
    pub curve_name: String,
    /// Szenen-Rechteck: (0,0) bis `size`
    pub size: DVec2,
    /// Punkt-Elemente (links, rechts)
    pub points: Vec<PreviewPoint>,
    /// Linie zwischen den Punkten (fehlt bei transparenter Linienfarbe)
    pub line: Option<PreviewLine>,
}

impl PreviewScene {
    /// Gibt zurück, ob eine Linie sichtbar gezeichnet wird.
    pub fn has_line(&self) -> bool {
        self.line.is_some()
    }
}
