//! Darstellungs-Eigenschaften einer Kurve: Punktform, Farben, Linienbreite
//! und Verbindungsregel.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use super::{ConnectAs, StyleError};

/// Minimale Punktgröße (Radius in Pixeln).
pub const MIN_POINT_RADIUS: u32 = 1;
/// Minimale Linienbreite in Pixeln.
pub const MIN_LINE_WIDTH: u32 = 1;
/// Standard-Punktgröße.
pub const DEFAULT_POINT_RADIUS: u32 = 10;
/// Standard-Linienbreite.
pub const DEFAULT_LINE_WIDTH: u32 = 1;

/// Form, mit der ein Punkt gezeichnet wird
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PointShape {
    #[default]
    Circle,
    Cross,
    Diamond,
    Square,
    Triangle,
    X,
}

/// Farbpalette für Punkte und Linien
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ColorPalette {
    Black,
    #[default]
    Blue,
    Cyan,
    Gold,
    Green,
    Magenta,
    Red,
    Transparent,
    Yellow,
}

impl ColorPalette {
    /// RGBA-Farbwert (0.0..=1.0) für das Rendering
    pub fn rgba(self) -> [f32; 4] {
        match self {
            ColorPalette::Black => [0.0, 0.0, 0.0, 1.0],
            ColorPalette::Blue => [0.0, 0.0, 1.0, 1.0],
            ColorPalette::Cyan => [0.0, 1.0, 1.0, 1.0],
            ColorPalette::Gold => [1.0, 0.84, 0.0, 1.0],
            ColorPalette::Green => [0.0, 1.0, 0.0, 1.0],
            ColorPalette::Magenta => [1.0, 0.0, 1.0, 1.0],
            ColorPalette::Red => [1.0, 0.0, 0.0, 1.0],
            ColorPalette::Transparent => [0.0, 0.0, 0.0, 0.0],
            ColorPalette::Yellow => [1.0, 1.0, 0.0, 1.0],
        }
    }

    /// `true` wenn mit dieser Farbe nichts sichtbar gezeichnet wird
    pub fn is_transparent(self) -> bool {
        self == ColorPalette::Transparent
    }
}

/// Darstellung der Punkte einer Kurve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointStyle {
    /// Punktform
    pub shape: PointShape,
    /// Radius in Pixeln (mindestens [`MIN_POINT_RADIUS`])
    pub radius: u32,
    /// Farbe der Umrisslinie
    pub color: ColorPalette,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            shape: PointShape::Circle,
            radius: DEFAULT_POINT_RADIUS,
            color: ColorPalette::Blue,
        }
    }
}

/// Darstellung der Linien zwischen den Punkten einer Kurve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Linienbreite in Pixeln (mindestens [`MIN_LINE_WIDTH`])
    pub width: u32,
    /// Linienfarbe
    pub color: ColorPalette,
    /// Regel für die Punkt-Reihenfolge
    pub connect_as: ConnectAs,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            width: DEFAULT_LINE_WIDTH,
            color: ColorPalette::Blue,
            connect_as: ConnectAs::Function,
        }
    }
}

/// Vollständiger Stil einer Kurve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CurveStyle {
    pub point: PointStyle,
    pub line: LineStyle,
}

impl CurveStyle {
    /// Stil der Achsen-Kurve: rote Kreuze, keine sichtbaren Linien.
    pub fn axes() -> Self {
        Self {
            point: PointStyle {
                shape: PointShape::Cross,
                radius: DEFAULT_POINT_RADIUS,
                color: ColorPalette::Red,
            },
            line: LineStyle {
                width: DEFAULT_LINE_WIDTH,
                color: ColorPalette::Transparent,
                connect_as: ConnectAs::Relation,
            },
        }
    }

    /// Prüft die Grenzen von Punktgröße, Linienbreite und Punktfarbe.
    pub fn validate(&self) -> Result<(), StyleError> {
        if self.point.radius < MIN_POINT_RADIUS {
            return Err(StyleError::PointRadiusTooSmall(self.point.radius));
        }
        if self.line.width < MIN_LINE_WIDTH {
            return Err(StyleError::LineWidthTooSmall(self.line.width));
        }
        if self.point.color.is_transparent() {
            return Err(StyleError::TransparentPointColor);
        }
        Ok(())
    }
}

/// Umriss der Punktform, zentriert im Ursprung, Ausdehnung = Radius.
///
/// Kreuz und X werden als offener Linienzug über den Mittelpunkt geliefert,
/// alle anderen Formen als geschlossenes Polygon (ohne Wiederholung des Startpunkts).
pub fn point_polygon(style: &PointStyle, circle_segments: usize) -> Vec<DVec2> {
    let r = style.radius as f64;

    match style.shape {
        PointShape::Circle => {
            let segments = circle_segments.max(3);
            (0..segments)
                .map(|i| {
                    let angle = TAU * i as f64 / segments as f64;
                    DVec2::new(angle.cos(), angle.sin()) * r
                })
                .collect()
        }
        PointShape::Cross => vec![
            DVec2::new(-r, 0.0),
            DVec2::new(r, 0.0),
            DVec2::ZERO,
            DVec2::new(0.0, r),
            DVec2::new(0.0, -r),
            DVec2::ZERO,
        ],
        PointShape::Diamond => vec![
            DVec2::new(0.0, -r),
            DVec2::new(r, 0.0),
            DVec2::new(0.0, r),
            DVec2::new(-r, 0.0),
        ],
        PointShape::Square => vec![
            DVec2::new(-r, -r),
            DVec2::new(r, -r),
            DVec2::new(r, r),
            DVec2::new(-r, r),
        ],
        PointShape::Triangle => vec![
            DVec2::new(-r, r),
            DVec2::new(0.0, -r),
            DVec2::new(r, r),
        ],
        PointShape::X => {
            // Diagonalen mit gleicher Ausdehnung wie das Kreuz
            let d = r * std::f64::consts::FRAC_1_SQRT_2;
            vec![
                DVec2::new(-d, -d),
                DVec2::new(d, d),
                DVec2::ZERO,
                DVec2::new(-d, d),
                DVec2::new(d, -d),
                DVec2::ZERO,
            ]
        }
    }
}
