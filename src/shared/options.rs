//! Zentrale Konfiguration des Kurven-Digitalisierers.
//!
//! `DigitizerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::{ConnectAs, LineStyle, PointStyle};

// ── Einfügen ────────────────────────────────────────────────────────

/// Fangabstand (Dokument-Einheiten): Punkte innerhalb dieses Abstands zu einer
/// Linie werden im Relation-Modus zwischen deren Endpunkte eingefügt.
pub const SEGMENT_SNAP_DISTANCE: f64 = 5.0;

// ── Vorschau ────────────────────────────────────────────────────────

/// Breite der Vorschau-Szene.
pub const PREVIEW_WIDTH: f64 = 100.0;
/// Höhe der Vorschau-Szene.
pub const PREVIEW_HEIGHT: f64 = 100.0;
/// Anzahl Polygon-Ecken für kreisförmige Punkte.
pub const CIRCLE_SEGMENTS: usize = 24;

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `curve_digitizer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DigitizerOptions {
    /// Fangabstand für das Einfügen auf bestehenden Linien
    pub segment_snap_distance: f64,
    /// Verbindungsregel neuer Kurven
    pub default_connect_as: ConnectAs,

    // ── Vorschau ────────────────────────────────────────────────
    /// Breite der Vorschau-Szene
    pub preview_width: f64,
    /// Höhe der Vorschau-Szene
    pub preview_height: f64,
    /// Polygon-Auflösung für Kreise
    #[serde(default = "default_circle_segments")]
    pub circle_segments: usize,

    // ── Stil neuer Graph-Kurven ─────────────────────────────────
    // TOML: Tabellen nach allen Skalar-Feldern
    /// Punkt-Stil neuer Kurven
    pub default_point_style: PointStyle,
    /// Linien-Stil neuer Kurven (`connect_as` wird durch `default_connect_as` ersetzt)
    pub default_line_style: LineStyle,
}

impl Default for DigitizerOptions {
    fn default() -> Self {
        Self {
            segment_snap_distance: SEGMENT_SNAP_DISTANCE,
            default_connect_as: ConnectAs::Function,
            preview_width: PREVIEW_WIDTH,
            preview_height: PREVIEW_HEIGHT,
            circle_segments: CIRCLE_SEGMENTS,
            default_point_style: PointStyle::default(),
            default_line_style: LineStyle::default(),
        }
    }
}

/// Serde-Default für `circle_segments` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_circle_segments() -> usize {
    CIRCLE_SEGMENTS
}

impl DigitizerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => match opts.validate() {
                    Ok(()) => {
                        log::info!("Optionen geladen aus: {}", path.display());
                        opts
                    }
                    Err(e) => {
                        log::warn!("Optionen ungültig, verwende Standardwerte: {:#}", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Prüft Fangabstand, Vorschau-Größe und den Standard-Stil neuer Kurven.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.segment_snap_distance.is_finite() || self.segment_snap_distance < 0.0 {
            anyhow::bail!("Ungültiger Fangabstand: {}", self.segment_snap_distance);
        }
        let size_ok = |v: f64| v.is_finite() && v > 0.0;
        if !size_ok(self.preview_width) || !size_ok(self.preview_height) {
            anyhow::bail!(
                "Ungültige Vorschau-Größe: {} x {}",
                self.preview_width,
                self.preview_height
            );
        }
        self.default_curve_style()
            .validate()
            .context("Ungültiger Stil für neue Kurven")?;
        Ok(())
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("curve_digitizer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("curve_digitizer.toml")
    }

    /// Stil für neu angelegte Graph-Kurven
    pub fn default_curve_style(&self) -> crate::core::CurveStyle {
        let mut line = self.default_line_style;
        line.connect_as = self.default_connect_as;
        crate::core::CurveStyle {
            point: self.default_point_style,
            line,
        }
    }
}
