//! JSON Import/Export für Digitalisier-Dokumente.
//!
//! Die Datei kapselt das Dokument mit einer Formatversion; nach dem Parsen
//! werden alle Kurven-Invarianten geprüft.

pub mod parser;
pub mod writer;

pub use parser::parse_document;
pub use writer::write_document;

/// Aktuelle Version des Dateiformats.
pub const FORMAT_VERSION: u32 = 1;
