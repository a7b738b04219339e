//! Parser für Dokument-Dateien.

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use super::FORMAT_VERSION;
use crate::core::Document;

#[derive(Deserialize)]
struct DocumentFile {
    version: u32,
    document: Document,
}

/// Parst eine Dokument-Datei und prüft ihre Invarianten.
pub fn parse_document(content: &str) -> Result<Document> {
    let file: DocumentFile =
        serde_json::from_str(content).context("Dokument-Datei ist kein gültiges JSON-Dokument")?;

    if file.version != FORMAT_VERSION {
        bail!(
            "Nicht unterstützte Formatversion {} (erwartet {})",
            file.version,
            FORMAT_VERSION
        );
    }

    file.document
        .validate()
        .context("Dokument verletzt Kurven-Invarianten")?;

    log::info!(
        "Dokument geladen: {} Kurven, {} Punkte",
        file.document.curve_count(),
        file.document.curves().map(|c| c.len()).sum::<usize>()
    );
    Ok(file.document)
}
