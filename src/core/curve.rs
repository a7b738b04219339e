//! Eine benannte Kurve mit ihren digitalisierten Punkten.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::ordering::{self, AgeAssignment};
use super::{ConnectAs, CurvePoint, CurveStyle, DocumentError, OrderingError};

/// Kurve: Name, Stil und Punktspeicher.
///
/// Die Kurve besitzt die Punkte; die Zeichenreihenfolge wird bei Bedarf über
/// [`ordering::compute_order`] abgeleitet und nie gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    /// Kurvenname (eindeutig im Dokument)
    pub name: String,
    /// Darstellung und Verbindungsregel
    pub style: CurveStyle,
    /// Punkte in Einfügereihenfolge
    points: Vec<CurvePoint>,
    /// Nächstes zu vergebendes Alter (auch ID), wird nie zurückgesetzt
    next_age: u64,
}

impl Curve {
    /// Erstellt eine leere Kurve
    pub fn new(name: impl Into<String>, style: CurveStyle) -> Self {
        Self {
            name: name.into(),
            style,
            points: Vec::new(),
            next_age: 1,
        }
    }

    /// Aktive Verbindungsregel
    pub fn connect_as(&self) -> ConnectAs {
        self.style.line.connect_as
    }

    /// Setzt die Verbindungsregel. Die gespeicherten Punkte bleiben unverändert.
    pub fn set_connect_as(&mut self, connect_as: ConnectAs) {
        self.style.line.connect_as = connect_as;
    }

    /// Alle Punkte in Einfügereihenfolge
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Sucht einen Punkt nach ID
    pub fn point(&self, id: u64) -> Option<&CurvePoint> {
        self.points.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Nächstes zu vergebendes Alter
    pub fn next_age(&self) -> u64 {
        self.next_age
    }

    /// Fügt einen Punkt normal an (nächstes Alter, ans Ende der Relation-Reihenfolge).
    pub fn add_point(&mut self, position: DVec2) -> Result<CurvePoint, OrderingError> {
        if !position.is_finite() {
            return Err(OrderingError::NonFinitePosition {
                x: position.x,
                y: position.y,
            });
        }

        let assignment = ordering::append(&self.points, self.next_age);
        Ok(self.apply_assignment(&assignment, position))
    }

    /// Fügt einen Punkt ein; liegt er im Relation-Modus höchstens `threshold`
    /// neben einer bestehenden Linie, wird er zwischen deren Endpunkte gesetzt.
    pub fn add_point_near_segment(
        &mut self,
        position: DVec2,
        threshold: f64,
    ) -> Result<CurvePoint, OrderingError> {
        let ordered = self.ordered_points();
        let assignment = ordering::insert_on_segment(
            &self.points,
            self.connect_as(),
            position,
            &ordered,
            threshold,
            self.next_age,
        )?;

        if let Some(hit) = assignment.spliced {
            log::info!(
                "Kurve '{}': Punkt zwischen {} und {} eingefügt (Abstand {:.3})",
                self.name,
                hit.start_id,
                hit.end_id,
                hit.distance
            );
        }

        Ok(self.apply_assignment(&assignment, position))
    }

    fn apply_assignment(&mut self, assignment: &AgeAssignment, position: DVec2) -> CurvePoint {
        for &(id, ordinal) in &assignment.relabeled {
            if let Some(point) = self.points.iter_mut().find(|p| p.id == id) {
                point.ordinal = ordinal;
            }
        }

        let point = assignment.to_point(assignment.age, position);
        self.points.push(point);
        self.next_age = assignment.age + 1;

        log::debug!(
            "Kurve '{}': Punkt {} bei ({:.3}, {:.3}) hinzugefügt",
            self.name,
            point.id,
            position.x,
            position.y
        );
        point
    }

    /// Entfernt einen Punkt. Sein Alter wird nicht wiederverwendet.
    pub fn remove_point(&mut self, id: u64) -> Option<CurvePoint> {
        let index = self.points.iter().position(|p| p.id == id)?;
        Some(self.points.remove(index))
    }

    /// Verschiebt einen Punkt; Alter und Relation-Schlüssel bleiben erhalten.
    pub fn move_point(&mut self, id: u64, position: DVec2) -> bool {
        if !position.is_finite() {
            return false;
        }
        let Some(point) = self.points.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        point.position = position;
        true
    }

    /// Zeichenreihenfolge nach der aktiven Verbindungsregel
    pub fn ordered_points(&self) -> Vec<CurvePoint> {
        ordering::compute_order(&self.points, self.connect_as())
    }

    /// Liniensegmente zwischen aufeinanderfolgenden Punkten der Zeichenreihenfolge
    pub fn segments(&self) -> Vec<(CurvePoint, CurvePoint)> {
        self.ordered_points()
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
            .collect()
    }

    /// Prüft die Invarianten nach dem Laden: eindeutige IDs und Alter,
    /// Alter und IDs unter dem Alterszähler, endliche Positionen, gültiger Stil.
    pub fn validate(&self) -> Result<(), DocumentError> {
        self.style
            .validate()
            .map_err(|source| DocumentError::InvalidStyle {
                curve: self.name.clone(),
                source,
            })?;

        let mut ids = HashSet::new();
        let mut ages = HashSet::new();
        for point in &self.points {
            if !ids.insert(point.id) {
                return Err(DocumentError::DuplicatePointId {
                    curve: self.name.clone(),
                    id: point.id,
                });
            }
            if !ages.insert(point.age) {
                return Err(DocumentError::DuplicateAge {
                    curve: self.name.clone(),
                    age: point.age,
                });
            }
            if point.age >= self.next_age {
                return Err(DocumentError::AgeOutOfRange {
                    curve: self.name.clone(),
                    age: point.age,
                    next_age: self.next_age,
                });
            }
            if point.id >= self.next_age {
                return Err(DocumentError::IdOutOfRange {
                    curve: self.name.clone(),
                    id: point.id,
                    next_age: self.next_age,
                });
            }
            if !point.position.is_finite() || !point.ordinal.is_finite() {
                return Err(DocumentError::NonFinitePoint {
                    curve: self.name.clone(),
                    id: point.id,
                });
            }
        }
        Ok(())
    }
}
