//! Use-Cases für das Punkt-Editing auf einer Kurve des Dokuments.

use anyhow::{anyhow, Context};
use glam::DVec2;

use crate::core::{CurvePoint, Document};
use crate::shared::DigitizerOptions;

/// Legt eine neue Graph-Kurve mit dem Standard-Stil aus den Optionen an.
pub fn add_curve(
    document: &mut Document,
    curve_name: &str,
    options: &DigitizerOptions,
) -> anyhow::Result<()> {
    document
        .add_graph_curve(curve_name, options.default_curve_style())
        .with_context(|| format!("Kurve '{}' nicht anlegbar", curve_name))?;

    log::info!("Kurve '{}' angelegt", curve_name);
    Ok(())
}

/// Digitalisiert einen neuen Punkt auf der Kurve.
///
/// Im Relation-Modus wird ein Punkt, der höchstens `segment_snap_distance`
/// neben einer bestehenden Linie liegt, zwischen deren Endpunkte eingefügt.
pub fn add_point(
    document: &mut Document,
    curve_name: &str,
    position: DVec2,
    options: &DigitizerOptions,
) -> anyhow::Result<CurvePoint> {
    let curve = document
        .curve_mut(curve_name)
        .ok_or_else(|| anyhow!("Kurve '{}' nicht gefunden", curve_name))?;

    let point = curve
        .add_point_near_segment(position, options.segment_snap_distance)
        .with_context(|| format!("Punkt auf Kurve '{}' nicht einfügbar", curve_name))?;

    log::info!(
        "Punkt {} an Position ({:.3}, {:.3}) zu '{}' hinzugefügt",
        point.id,
        position.x,
        position.y,
        curve_name
    );
    Ok(point)
}

/// Entfernt einen Punkt von der Kurve.
pub fn delete_point(
    document: &mut Document,
    curve_name: &str,
    point_id: u64,
) -> anyhow::Result<CurvePoint> {
    let curve = document
        .curve_mut(curve_name)
        .ok_or_else(|| anyhow!("Kurve '{}' nicht gefunden", curve_name))?;

    let removed = curve
        .remove_point(point_id)
        .ok_or_else(|| anyhow!("Punkt {} nicht auf Kurve '{}'", point_id, curve_name))?;

    log::info!("Punkt {} von '{}' entfernt", point_id, curve_name);
    Ok(removed)
}

/// Verschiebt einen Punkt; seine Position in der Relation-Reihenfolge bleibt.
pub fn move_point(
    document: &mut Document,
    curve_name: &str,
    point_id: u64,
    position: DVec2,
) -> anyhow::Result<()> {
    let curve = document
        .curve_mut(curve_name)
        .ok_or_else(|| anyhow!("Kurve '{}' nicht gefunden", curve_name))?;

    if !curve.move_point(point_id, position) {
        anyhow::bail!(
            "Punkt {} auf Kurve '{}' nicht verschiebbar",
            point_id,
            curve_name
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConnectAs, CurveStyle};

    fn relation_document() -> Document {
        let mut style = CurveStyle::default();
        style.line.connect_as = ConnectAs::Relation;
        Document::with_default_curve(style)
    }

    #[test]
    fn add_point_splices_within_snap_distance() {
        let mut document = relation_document();
        let options = DigitizerOptions::default();
        for (x, y) in [(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)] {
            add_point(&mut document, "Curve1", DVec2::new(x, y), &options).unwrap();
        }

        let spliced = add_point(&mut document, "Curve1", DVec2::new(50.0, 2.0), &options).unwrap();
        let order: Vec<u64> = document
            .curve("Curve1")
            .unwrap()
            .ordered_points()
            .iter()
            .map(|p| p.id)
            .collect();

        assert_eq!(order, vec![1, spliced.id, 2, 3]);
    }

    #[test]
    fn add_curve_uses_configured_connect_as() {
        let mut document = Document::new();
        let mut options = DigitizerOptions::default();
        options.default_connect_as = ConnectAs::Relation;

        add_curve(&mut document, "Kontur", &options).unwrap();
        assert_eq!(
            document.curve("Kontur").unwrap().connect_as(),
            ConnectAs::Relation
        );
        assert!(add_curve(&mut document, "Kontur", &options).is_err());
        assert!(add_curve(&mut document, "Axes", &options).is_err());
    }

    #[test]
    fn add_curve_rejects_invalid_default_style() {
        let mut document = Document::new();
        let mut options = DigitizerOptions::default();
        options.default_point_style.color = crate::core::ColorPalette::Transparent;

        let err = add_curve(&mut document, "Unsichtbar", &options).unwrap_err();
        assert!(format!("{:#}", err).contains("Unsichtbar"));
        assert!(!document.contains_curve("Unsichtbar"));
        assert!(document.validate().is_ok());
    }

    #[test]
    fn unknown_curve_and_point_are_errors() {
        let mut document = relation_document();
        let options = DigitizerOptions::default();

        assert!(add_point(&mut document, "Nope", DVec2::ZERO, &options).is_err());
        assert!(delete_point(&mut document, "Curve1", 42).is_err());
        assert!(move_point(&mut document, "Curve1", 42, DVec2::ZERO).is_err());
    }

    #[test]
    fn non_finite_position_is_reported_with_context() {
        let mut document = relation_document();
        let err = add_point(
            &mut document,
            "Curve1",
            DVec2::new(f64::INFINITY, 0.0),
            &DigitizerOptions::default(),
        )
        .unwrap_err();

        assert!(format!("{:#}", err).contains("Curve1"));
    }
}
