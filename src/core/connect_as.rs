//! Regel, nach der die Punkte einer Kurve zu Linien verbunden werden.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Verbindungsregel einer Kurve ("Connect as")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ConnectAs {
    /// Eindeutige Funktion: Reihenfolge nach steigender unabhängiger Variable
    #[default]
    Function,
    /// Relation (z.B. geschlossene Kontur): Reihenfolge nach Alter,
    /// auf Linien gesetzte Punkte werden zwischen deren Endpunkten eingefügt
    Relation,
}

impl fmt::Display for ConnectAs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectAs::Function => write!(f, "Function"),
            ConnectAs::Relation => write!(f, "Relation"),
        }
    }
}
