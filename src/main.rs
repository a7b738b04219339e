//! Curve Digitizer (headless).
//!
//! Lädt ein Dokument und gibt die Zeichenreihenfolge der Kurvenpunkte aus.
//! Mit Koordinaten wird vorher ein Punkt auf der Kurve digitalisiert und das
//! Dokument gespeichert.
//!
//! Aufruf: `curve-digitizer <dokument.json> [kurve [x y]]`

use anyhow::Context;
use curve_digitizer::app::editing;
use curve_digitizer::{parse_document, write_document, Curve, DigitizerOptions};
use glam::DVec2;

const USAGE: &str = "Aufruf: curve-digitizer <dokument.json> [kurve [x y]]";

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Curve Digitizer v{} startet...", env!("CARGO_PKG_VERSION"));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(path) = args.first() else {
        anyhow::bail!(USAGE);
    };
    let curve_filter = args.get(1);
    let position = match &args[args.len().min(2)..] {
        [] => None,
        [x, y] => Some(DVec2::new(
            x.parse().with_context(|| format!("x-Koordinate '{}' ungültig", x))?,
            y.parse().with_context(|| format!("y-Koordinate '{}' ungültig", y))?,
        )),
        _ => anyhow::bail!(USAGE),
    };

    let options = DigitizerOptions::load_from_file(&DigitizerOptions::config_path());

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Dokument '{}' nicht lesbar", path))?;
    let mut document = parse_document(&content)?;

    if let (Some(name), Some(position)) = (curve_filter, position) {
        let point = editing::add_point(&mut document, name, position, &options)?;
        println!(
            "Punkt {} hinzugefügt (Fangabstand {})",
            point.id, options.segment_snap_distance
        );
        std::fs::write(path, write_document(&document)?)
            .with_context(|| format!("Dokument '{}' nicht schreibbar", path))?;
    }

    match curve_filter {
        Some(name) => {
            let curve = document
                .curve(name)
                .with_context(|| format!("Kurve '{}' nicht im Dokument", name))?;
            print_curve(curve);
        }
        None => document.curves().for_each(print_curve),
    }

    Ok(())
}

fn print_curve(curve: &Curve) {
    println!(
        "{} ({}, {} Punkte)",
        curve.name,
        curve.connect_as(),
        curve.len()
    );
    for point in curve.ordered_points() {
        println!(
            "  id={:<6} age={:<6} x={:>12.4} y={:>12.4}",
            point.id, point.age, point.position.x, point.position.y
        );
    }
}
