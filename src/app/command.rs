//! Rückgängig machbarer Command für Kurven-Stil-Änderungen.

use super::CurvePropertiesModel;
use crate::core::Document;

/// Vorher/Nachher-Paar der Kurven-Stile.
///
/// `redo` wendet `after` an, `undo` stellt `before` wieder her. Punkte der
/// Kurven bleiben in beiden Richtungen unverändert.
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePropertiesCommand {
    before: CurvePropertiesModel,
    after: CurvePropertiesModel,
}

impl CurvePropertiesCommand {
    /// Erstellt den Command ohne ihn anzuwenden
    pub fn new(before: CurvePropertiesModel, after: CurvePropertiesModel) -> Self {
        Self { before, after }
    }

    pub fn before(&self) -> &CurvePropertiesModel {
        &self.before
    }

    pub fn after(&self) -> &CurvePropertiesModel {
        &self.after
    }

    /// Wendet den Nachher-Zustand an
    pub fn redo(&self, document: &mut Document) {
        let changed = self.after.apply_to(document);
        log::info!("Kurven-Eigenschaften angewendet ({} Kurven geändert)", changed);
    }

    /// Stellt den Vorher-Zustand wieder her
    pub fn undo(&self, document: &mut Document) {
        let changed = self.before.apply_to(document);
        log::info!(
            "Kurven-Eigenschaften zurückgenommen ({} Kurven geändert)",
            changed
        );
    }
}

/// Wendet ein Vorher/Nachher-Paar auf das Dokument an und liefert den Command
/// für die Undo-Verwaltung des Aufrufers.
pub fn commit(
    document: &mut Document,
    before: CurvePropertiesModel,
    after: CurvePropertiesModel,
) -> CurvePropertiesCommand {
    let command = CurvePropertiesCommand::new(before, after);
    command.redo(document);
    command
}
