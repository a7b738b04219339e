//! Das Dokument: Achsen-Kurve plus geordnete Graph-Kurven.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Curve, CurveStyle, DocumentError};

/// Fester Name der Achsen-Kurve.
pub const AXIS_CURVE_NAME: &str = "Axes";
/// Name der ersten Graph-Kurve in einem neuen Dokument.
pub const DEFAULT_GRAPH_CURVE_NAME: &str = "Curve1";

/// Alle Kurven eines digitalisierten Graphen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Kalibrierpunkte der Achsen (immer vorhanden, immer zuerst)
    axis_curve: Curve,
    /// Graph-Kurven, indexiert nach Name, in Anlagereihenfolge
    graph_curves: IndexMap<String, Curve>,
}

impl Document {
    /// Erstellt ein Dokument nur mit der Achsen-Kurve
    pub fn new() -> Self {
        Self {
            axis_curve: Curve::new(AXIS_CURVE_NAME, CurveStyle::axes()),
            graph_curves: IndexMap::new(),
        }
    }

    /// Erstellt ein Dokument mit Achsen-Kurve und einer leeren Graph-Kurve
    pub fn with_default_curve(style: CurveStyle) -> Self {
        let mut document = Self::new();
        document.graph_curves.insert(
            DEFAULT_GRAPH_CURVE_NAME.to_string(),
            Curve::new(DEFAULT_GRAPH_CURVE_NAME, style),
        );
        document
    }

    /// Kurvennamen: Achsen-Kurve zuerst, danach die Graph-Kurven
    pub fn curve_names(&self) -> Vec<String> {
        std::iter::once(self.axis_curve.name.clone())
            .chain(self.graph_curves.keys().cloned())
            .collect()
    }

    /// Nur die Namen der Graph-Kurven
    pub fn graph_curve_names(&self) -> Vec<String> {
        self.graph_curves.keys().cloned().collect()
    }

    /// Iterator über alle Kurven (Achsen-Kurve zuerst)
    pub fn curves(&self) -> impl Iterator<Item = &Curve> {
        std::iter::once(&self.axis_curve).chain(self.graph_curves.values())
    }

    pub fn axis_curve(&self) -> &Curve {
        &self.axis_curve
    }

    pub fn curve(&self, name: &str) -> Option<&Curve> {
        if name == AXIS_CURVE_NAME {
            Some(&self.axis_curve)
        } else {
            self.graph_curves.get(name)
        }
    }

    pub fn curve_mut(&mut self, name: &str) -> Option<&mut Curve> {
        if name == AXIS_CURVE_NAME {
            Some(&mut self.axis_curve)
        } else {
            self.graph_curves.get_mut(name)
        }
    }

    pub fn contains_curve(&self, name: &str) -> bool {
        self.curve(name).is_some()
    }

    /// Anzahl aller Kurven inklusive Achsen-Kurve
    pub fn curve_count(&self) -> usize {
        1 + self.graph_curves.len()
    }

    /// Legt eine neue Graph-Kurve am Ende an
    pub fn add_graph_curve(
        &mut self,
        name: &str,
        style: CurveStyle,
    ) -> Result<&mut Curve, DocumentError> {
        self.check_new_name(name)?;
        style
            .validate()
            .map_err(|source| DocumentError::InvalidStyle {
                curve: name.to_string(),
                source,
            })?;

        log::info!("Graph-Kurve '{}' angelegt", name);
        Ok(self
            .graph_curves
            .entry(name.to_string())
            .or_insert_with(|| Curve::new(name, style)))
    }

    /// Entfernt eine Graph-Kurve
    pub fn remove_graph_curve(&mut self, name: &str) -> Result<Curve, DocumentError> {
        if name == AXIS_CURVE_NAME {
            return Err(DocumentError::AxisCurveImmutable);
        }
        let curve = self
            .graph_curves
            .shift_remove(name)
            .ok_or_else(|| DocumentError::UnknownCurve(name.to_string()))?;

        log::info!("Graph-Kurve '{}' entfernt ({} Punkte)", name, curve.len());
        Ok(curve)
    }

    /// Benennt eine Graph-Kurve um; ihre Position bleibt erhalten
    pub fn rename_graph_curve(&mut self, old: &str, new: &str) -> Result<(), DocumentError> {
        if old == AXIS_CURVE_NAME {
            return Err(DocumentError::AxisCurveImmutable);
        }
        let index = self
            .graph_curves
            .get_index_of(old)
            .ok_or_else(|| DocumentError::UnknownCurve(old.to_string()))?;
        if old == new {
            return Ok(());
        }
        self.check_new_name(new)?;

        if let Some((_, mut curve)) = self.graph_curves.shift_remove_index(index) {
            curve.name = new.to_string();
            self.graph_curves.shift_insert(index, new.to_string(), curve);
        }
        log::info!("Graph-Kurve '{}' umbenannt in '{}'", old, new);
        Ok(())
    }

    fn check_new_name(&self, name: &str) -> Result<(), DocumentError> {
        if name.trim().is_empty() {
            return Err(DocumentError::EmptyCurveName);
        }
        if self.contains_curve(name) {
            return Err(DocumentError::DuplicateCurveName(name.to_string()));
        }
        Ok(())
    }

    /// Prüft alle Dokument- und Kurven-Invarianten
    pub fn validate(&self) -> Result<(), DocumentError> {
        if self.axis_curve.name != AXIS_CURVE_NAME {
            return Err(DocumentError::NameMismatch {
                key: AXIS_CURVE_NAME.to_string(),
                name: self.axis_curve.name.clone(),
            });
        }
        if self.graph_curves.contains_key(AXIS_CURVE_NAME) {
            return Err(DocumentError::DuplicateCurveName(AXIS_CURVE_NAME.to_string()));
        }

        for (key, curve) in &self.graph_curves {
            if key.trim().is_empty() {
                return Err(DocumentError::EmptyCurveName);
            }
            if *key != curve.name {
                return Err(DocumentError::NameMismatch {
                    key: key.clone(),
                    name: curve.name.clone(),
                });
            }
        }

        self.curves().try_for_each(Curve::validate)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StyleError;

    #[test]
    fn axis_curve_is_listed_first() {
        let mut document = Document::with_default_curve(CurveStyle::default());
        document
            .add_graph_curve("Curve2", CurveStyle::default())
            .unwrap();

        assert_eq!(document.curve_names(), vec!["Axes", "Curve1", "Curve2"]);
        assert_eq!(document.curve_count(), 3);
    }

    #[test]
    fn duplicate_and_empty_names_are_rejected() {
        let mut document = Document::with_default_curve(CurveStyle::default());

        assert_eq!(
            document.add_graph_curve("Curve1", CurveStyle::default()).err(),
            Some(DocumentError::DuplicateCurveName("Curve1".to_string()))
        );
        assert_eq!(
            document.add_graph_curve("Axes", CurveStyle::default()).err(),
            Some(DocumentError::DuplicateCurveName("Axes".to_string()))
        );
        assert_eq!(
            document.add_graph_curve("  ", CurveStyle::default()).err(),
            Some(DocumentError::EmptyCurveName)
        );
    }

    #[test]
    fn axis_curve_cannot_be_removed_or_renamed() {
        let mut document = Document::new();

        assert_eq!(
            document.remove_graph_curve(AXIS_CURVE_NAME).err(),
            Some(DocumentError::AxisCurveImmutable)
        );
        assert_eq!(
            document.rename_graph_curve(AXIS_CURVE_NAME, "X"),
            Err(DocumentError::AxisCurveImmutable)
        );
    }

    #[test]
    fn rename_keeps_position() {
        let mut document = Document::with_default_curve(CurveStyle::default());
        document.add_graph_curve("B", CurveStyle::default()).unwrap();
        document.add_graph_curve("C", CurveStyle::default()).unwrap();

        document.rename_graph_curve("B", "Beta").unwrap();

        assert_eq!(document.curve_names(), vec!["Axes", "Curve1", "Beta", "C"]);
        assert_eq!(document.curve("Beta").map(|c| c.name.as_str()), Some("Beta"));
        assert!(document.validate().is_ok());
    }

    #[test]
    fn invalid_style_is_rejected_on_add() {
        let mut document = Document::new();
        let mut style = CurveStyle::default();
        style.point.radius = 0;

        assert_eq!(
            document.add_graph_curve("Klein", style).err(),
            Some(DocumentError::InvalidStyle {
                curve: "Klein".to_string(),
                source: StyleError::PointRadiusTooSmall(0),
            })
        );
        assert!(!document.contains_curve("Klein"));
    }

    #[test]
    fn remove_unknown_curve_fails() {
        let mut document = Document::new();
        assert_eq!(
            document.remove_graph_curve("Nope").err(),
            Some(DocumentError::UnknownCurve("Nope".to_string()))
        );
    }
}
