//! Application-Layer: Kurven-Eigenschaften, Commit-Command, Vorschau
//! und Punkt-Editing auf dem Dokument.

pub mod command;
pub mod curve_properties;
pub mod editing;
pub mod preview;
pub mod session;

pub use command::{commit, CurvePropertiesCommand};
pub use curve_properties::{CurvePropertiesModel, PropertiesError};
pub use session::CurvePropertiesSession;
