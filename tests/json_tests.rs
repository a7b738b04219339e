use curve_digitizer::{parse_document, write_document, ConnectAs, PointShape};
use glam::DVec2;
use serde_json::{json, Value};

const FIXTURE: &str = include_str!("fixtures/spliced_relation.json");

fn ordered_ids(document: &curve_digitizer::Document, curve: &str) -> Vec<u64> {
    document
        .curve(curve)
        .expect("Kurve erwartet")
        .ordered_points()
        .iter()
        .map(|p| p.id)
        .collect()
}

/// Parst die Fixture, wendet `edit` auf das JSON an und parst erneut.
fn parse_edited(edit: impl FnOnce(&mut Value)) -> anyhow::Result<curve_digitizer::Document> {
    let mut value: Value = serde_json::from_str(FIXTURE).expect("Fixture ist gültiges JSON");
    edit(&mut value);
    parse_document(&value.to_string())
}

#[test]
fn test_fixture_keeps_curve_order_and_styles() {
    let document = parse_document(FIXTURE).expect("Fixture-Parsing fehlgeschlagen");

    assert_eq!(document.curve_names(), vec!["Axes", "Kontur", "Messreihe"]);

    let kontur = document.curve("Kontur").unwrap();
    assert_eq!(kontur.connect_as(), ConnectAs::Relation);
    assert_eq!(kontur.style.point.shape, PointShape::Diamond);
    assert_eq!(kontur.next_age(), 6);

    assert_eq!(ordered_ids(&document, "Kontur"), vec![1, 2, 4, 3]);
    assert_eq!(ordered_ids(&document, "Messreihe"), vec![2, 3, 1]);
    assert_eq!(ordered_ids(&document, "Axes"), vec![1, 2, 3]);
}

#[test]
fn test_roundtrip_preserves_points_and_counters() {
    let parsed = parse_document(FIXTURE).expect("Initiales Parsing fehlgeschlagen");
    let written = write_document(&parsed).expect("JSON-Export fehlgeschlagen");
    let reparsed = parse_document(&written).expect("Re-Parsing fehlgeschlagen");

    assert_eq!(parsed, reparsed);
    assert_eq!(ordered_ids(&reparsed, "Kontur"), vec![1, 2, 4, 3]);
}

#[test]
fn test_loaded_curve_continues_age_counter() {
    let mut document = parse_document(FIXTURE).unwrap();
    let kontur = document.curve_mut("Kontur").unwrap();

    let point = kontur.add_point(DVec2::new(-5.0, -5.0)).unwrap();

    // Alter 5 wurde vor dem Speichern gelöscht und wird nicht erneut vergeben
    assert_eq!(point.age, 6);
    assert_eq!(kontur.next_age(), 7);
}

#[test]
fn test_rejects_unknown_format_version() {
    let err = parse_edited(|value| value["version"] = json!(2)).unwrap_err();
    assert!(format!("{:#}", err).contains("Formatversion 2"));
}

#[test]
fn test_rejects_duplicate_point_ids() {
    let result = parse_edited(|value| {
        value["document"]["graph_curves"]["Kontur"]["points"][3]["id"] = json!(2);
    });
    assert!(result.is_err());
}

#[test]
fn test_rejects_age_at_or_above_counter() {
    let result = parse_edited(|value| {
        value["document"]["graph_curves"]["Messreihe"]["next_age"] = json!(3);
    });
    assert!(result.is_err());
}

#[test]
fn test_rejects_point_id_reserved_for_future_points() {
    // Punkt-ID 4 ist bei Alterszähler 4 die ID des nächsten neuen Punkts
    let result = parse_edited(|value| {
        value["document"]["graph_curves"]["Messreihe"]["points"][0]["id"] = json!(4);
    });
    let err = result.unwrap_err();
    assert!(format!("{:#}", err).contains("Punkt-ID 4"));
}

#[test]
fn test_accepted_ids_stay_unique_after_adding_points() {
    let mut document = parse_edited(|value| {
        // IDs weichen vom Alter ab, liegen aber unter dem Alterszähler
        let points = &mut value["document"]["graph_curves"]["Messreihe"]["points"];
        points[0]["id"] = json!(3);
        points[2]["id"] = json!(1);
    })
    .expect("gültiges Dokument erwartet");

    let curve = document.curve_mut("Messreihe").unwrap();
    curve.add_point(DVec2::new(7.0, 0.0)).unwrap();
    curve.add_point(DVec2::new(9.0, 0.0)).unwrap();

    assert!(document.validate().is_ok());
}

#[test]
fn test_negative_zero_x_is_a_tie() {
    let document = parse_edited(|value| {
        let points = &mut value["document"]["graph_curves"]["Messreihe"]["points"];
        points[0]["position"] = json!([0.0, 2.0]);
        points[1]["position"] = json!([-0.0, 4.0]);
    })
    .unwrap();

    assert_eq!(ordered_ids(&document, "Messreihe"), vec![1, 2, 3]);
}

#[test]
fn test_rejects_invalid_style() {
    let zero_radius = parse_edited(|value| {
        value["document"]["graph_curves"]["Kontur"]["style"]["point"]["radius"] = json!(0);
    });
    assert!(zero_radius.is_err());

    let transparent_points = parse_edited(|value| {
        value["document"]["graph_curves"]["Kontur"]["style"]["point"]["color"] =
            json!("Transparent");
    });
    assert!(transparent_points.is_err());
}

#[test]
fn test_rejects_mismatched_curve_key() {
    let result = parse_edited(|value| {
        value["document"]["graph_curves"]["Kontur"]["name"] = json!("Andere");
    });
    assert!(result.is_err());
}

#[test]
fn test_rejects_malformed_json() {
    assert!(parse_document("{ \"version\": 1, ").is_err());
}
