//! Momentaufnahme der Kurven-Stile eines Dokuments.
//!
//! Das Modell ist ein reiner Wert: Änderungen wirken erst, wenn es über
//! [`CurvePropertiesModel::apply_to`] auf ein Dokument angewendet wird.

use indexmap::IndexMap;
use thiserror::Error;

use crate::core::{
    ColorPalette, ConnectAs, CurveStyle, Document, PointShape, StyleError, MIN_LINE_WIDTH,
    MIN_POINT_RADIUS,
};

/// Fehler beim Ändern eines Kurven-Stils.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertiesError {
    #[error("Kurve '{0}' nicht gefunden")]
    UnknownCurve(String),
    #[error(transparent)]
    Style(#[from] StyleError),
}

/// Stile aller Kurven, indexiert nach Kurvenname (Dokument-Reihenfolge).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CurvePropertiesModel {
    styles: IndexMap<String, CurveStyle>,
}

impl CurvePropertiesModel {
    /// Erstellt eine Momentaufnahme aller Kurven-Stile des Dokuments
    pub fn from_document(document: &Document) -> Self {
        Self {
            styles: document
                .curves()
                .map(|curve| (curve.name.clone(), curve.style))
                .collect(),
        }
    }

    /// Kurvennamen in Dokument-Reihenfolge
    pub fn curve_names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    pub fn contains(&self, curve_name: &str) -> bool {
        self.styles.contains_key(curve_name)
    }

    /// Stil einer Kurve
    pub fn style(&self, curve_name: &str) -> Result<&CurveStyle, PropertiesError> {
        self.styles
            .get(curve_name)
            .ok_or_else(|| PropertiesError::UnknownCurve(curve_name.to_string()))
    }

    fn style_mut(&mut self, curve_name: &str) -> Result<&mut CurveStyle, PropertiesError> {
        self.styles
            .get_mut(curve_name)
            .ok_or_else(|| PropertiesError::UnknownCurve(curve_name.to_string()))
    }

    pub fn set_point_shape(
        &mut self,
        curve_name: &str,
        shape: PointShape,
    ) -> Result<(), PropertiesError> {
        self.style_mut(curve_name)?.point.shape = shape;
        Ok(())
    }

    pub fn set_point_radius(&mut self, curve_name: &str, radius: u32) -> Result<(), PropertiesError> {
        if radius < MIN_POINT_RADIUS {
            return Err(StyleError::PointRadiusTooSmall(radius).into());
        }
        self.style_mut(curve_name)?.point.radius = radius;
        Ok(())
    }

    /// Setzt die Punktfarbe. Transparente Punkte sind nicht erlaubt.
    pub fn set_point_color(
        &mut self,
        curve_name: &str,
        color: ColorPalette,
    ) -> Result<(), PropertiesError> {
        if color.is_transparent() {
            return Err(StyleError::TransparentPointColor.into());
        }
        self.style_mut(curve_name)?.point.color = color;
        Ok(())
    }

    pub fn set_line_width(&mut self, curve_name: &str, width: u32) -> Result<(), PropertiesError> {
        if width < MIN_LINE_WIDTH {
            return Err(StyleError::LineWidthTooSmall(width).into());
        }
        self.style_mut(curve_name)?.line.width = width;
        Ok(())
    }

    pub fn set_line_color(
        &mut self,
        curve_name: &str,
        color: ColorPalette,
    ) -> Result<(), PropertiesError> {
        self.style_mut(curve_name)?.line.color = color;
        Ok(())
    }

    pub fn set_connect_as(
        &mut self,
        curve_name: &str,
        connect_as: ConnectAs,
    ) -> Result<(), PropertiesError> {
        self.style_mut(curve_name)?.line.connect_as = connect_as;
        Ok(())
    }

    /// Schreibt alle Stile in das Dokument. Punkte werden nicht angefasst.
    ///
    /// Kurven, die im Dokument inzwischen fehlen, werden übersprungen.
    /// Gibt die Anzahl tatsächlich geänderter Kurven zurück.
    pub fn apply_to(&self, document: &mut Document) -> usize {
        let mut changed = 0;
        for (name, style) in &self.styles {
            let Some(curve) = document.curve_mut(name) else {
                log::warn!("Kurve '{}' fehlt im Dokument, Stil übersprungen", name);
                continue;
            };
            if curve.style != *style {
                curve.style = *style;
                changed += 1;
            }
        }
        changed
    }
}
