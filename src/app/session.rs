//! Bearbeitungs-Sitzung der Kurven-Eigenschaften (Zustand ohne Widgets).
//!
//! Die Sitzung hält ein explizites Vorher/Nachher-Paar. Alle Änderungen gehen
//! in `after`; erst [`CurvePropertiesSession::finish`] liefert den Command,
//! den der Aufrufer auf das Dokument anwendet.

use super::command::CurvePropertiesCommand;
use super::curve_properties::{CurvePropertiesModel, PropertiesError};
use super::preview;
use crate::core::{ColorPalette, ConnectAs, CurveStyle, Document, PointShape};
use crate::shared::{DigitizerOptions, PreviewScene};

/// Zustand einer laufenden Kurven-Eigenschaften-Bearbeitung
#[derive(Debug, Clone)]
pub struct CurvePropertiesSession {
    before: CurvePropertiesModel,
    after: CurvePropertiesModel,
    selected_curve: String,
    changed: bool,
}

impl CurvePropertiesSession {
    /// Startet eine Sitzung für das Dokument mit der gegebenen Kurve ausgewählt
    pub fn load(document: &Document, selected_curve: &str) -> Result<Self, PropertiesError> {
        let before = CurvePropertiesModel::from_document(document);
        if !before.contains(selected_curve) {
            return Err(PropertiesError::UnknownCurve(selected_curve.to_string()));
        }

        log::info!("Kurven-Eigenschaften geladen für '{}'", selected_curve);
        Ok(Self {
            after: before.clone(),
            before,
            selected_curve: selected_curve.to_string(),
            changed: false,
        })
    }

    /// Aktuell ausgewählte Kurve
    pub fn selected_curve(&self) -> &str {
        &self.selected_curve
    }

    /// Wählt eine andere Kurve zur Bearbeitung aus
    pub fn select_curve(&mut self, curve_name: &str) -> Result<(), PropertiesError> {
        if !self.after.contains(curve_name) {
            return Err(PropertiesError::UnknownCurve(curve_name.to_string()));
        }
        self.selected_curve = curve_name.to_string();
        Ok(())
    }

    /// Bearbeiteter Stil der ausgewählten Kurve
    pub fn current_style(&self) -> Result<&CurveStyle, PropertiesError> {
        self.after.style(&self.selected_curve)
    }

    /// `true` sobald eine Änderung vorgenommen wurde (OK aktivierbar)
    pub fn has_changes(&self) -> bool {
        self.changed
    }

    pub fn set_point_shape(&mut self, shape: PointShape) -> Result<(), PropertiesError> {
        self.after.set_point_shape(&self.selected_curve, shape)?;
        self.mark_changed("point_shape");
        Ok(())
    }

    pub fn set_point_radius(&mut self, radius: u32) -> Result<(), PropertiesError> {
        self.after.set_point_radius(&self.selected_curve, radius)?;
        self.mark_changed("point_radius");
        Ok(())
    }

    pub fn set_point_color(&mut self, color: ColorPalette) -> Result<(), PropertiesError> {
        self.after.set_point_color(&self.selected_curve, color)?;
        self.mark_changed("point_color");
        Ok(())
    }

    pub fn set_line_width(&mut self, width: u32) -> Result<(), PropertiesError> {
        self.after.set_line_width(&self.selected_curve, width)?;
        self.mark_changed("line_width");
        Ok(())
    }

    pub fn set_line_color(&mut self, color: ColorPalette) -> Result<(), PropertiesError> {
        self.after.set_line_color(&self.selected_curve, color)?;
        self.mark_changed("line_color");
        Ok(())
    }

    pub fn set_connect_as(&mut self, connect_as: ConnectAs) -> Result<(), PropertiesError> {
        self.after.set_connect_as(&self.selected_curve, connect_as)?;
        self.mark_changed("connect_as");
        Ok(())
    }

    fn mark_changed(&mut self, field: &str) {
        log::debug!("Kurve '{}': {} geändert", self.selected_curve, field);
        self.changed = true;
    }

    /// Vorschau des bearbeiteten Stils der ausgewählten Kurve
    pub fn preview(&self, options: &DigitizerOptions) -> Result<PreviewScene, PropertiesError> {
        preview::build(&self.after, &self.selected_curve, options)
    }

    /// Beendet die Sitzung. Liefert `None`, wenn nichts geändert wurde
    /// oder die Änderungen sich gegenseitig aufheben.
    pub fn finish(self) -> Option<CurvePropertiesCommand> {
        if !self.changed || self.before == self.after {
            log::info!("Kurven-Eigenschaften ohne Änderung geschlossen");
            return None;
        }
        Some(CurvePropertiesCommand::new(self.before, self.after))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> Document {
        let mut document = Document::with_default_curve(CurveStyle::default());
        document
            .add_graph_curve("Curve2", CurveStyle::default())
            .unwrap();
        document
    }

    #[test]
    fn load_rejects_unknown_curve() {
        assert_eq!(
            CurvePropertiesSession::load(&document(), "Nope").err(),
            Some(PropertiesError::UnknownCurve("Nope".to_string()))
        );
    }

    #[test]
    fn edits_target_selected_curve_only() {
        let doc = document();
        let mut session = CurvePropertiesSession::load(&doc, "Curve1").unwrap();
        session.select_curve("Curve2").unwrap();
        session.set_connect_as(ConnectAs::Relation).unwrap();

        let command = session.finish().expect("Command erwartet");
        assert_eq!(
            command.after().style("Curve2").unwrap().line.connect_as,
            ConnectAs::Relation
        );
        assert_eq!(
            command.after().style("Curve1").unwrap().line.connect_as,
            ConnectAs::Function
        );
    }

    #[test]
    fn failed_edit_does_not_mark_changed() {
        let mut session = CurvePropertiesSession::load(&document(), "Curve1").unwrap();
        assert!(session.set_point_radius(0).is_err());
        assert!(!session.has_changes());
        assert!(session.finish().is_none());
    }

    #[test]
    fn reverted_edit_yields_no_command() {
        let mut session = CurvePropertiesSession::load(&document(), "Curve1").unwrap();
        session.set_line_width(5).unwrap();
        session.set_line_width(1).unwrap();

        assert!(session.has_changes());
        assert!(session.finish().is_none());
    }
}
