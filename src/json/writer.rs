//! Writer für Dokument-Dateien.

use anyhow::Result;
use serde::Serialize;

use super::FORMAT_VERSION;
use crate::core::Document;

#[derive(Serialize)]
struct DocumentFileRef<'a> {
    version: u32,
    document: &'a Document,
}

/// Schreibt ein Dokument als formatiertes JSON
pub fn write_document(document: &Document) -> Result<String> {
    let file = DocumentFileRef {
        version: FORMAT_VERSION,
        document,
    };
    Ok(serde_json::to_string_pretty(&file)?)
}
