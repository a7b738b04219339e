//! Builder für die Stil-Vorschau einer Kurve.

use glam::DVec2;

use super::curve_properties::{CurvePropertiesModel, PropertiesError};
use crate::core::point_polygon;
use crate::core::PointShape;
use crate::shared::{DigitizerOptions, PreviewLine, PreviewPoint, PreviewScene};

/// Baut die Vorschau: zwei Punkte bei (B/3, H/2) und (2B/3, H/2) mit der
/// Linie der Kurve dazwischen.
pub fn build(
    model: &CurvePropertiesModel,
    curve_name: &str,
    options: &DigitizerOptions,
) -> Result<PreviewScene, PropertiesError> {
    let style = model.style(curve_name)?;
    let size = DVec2::new(options.preview_width, options.preview_height);

    let left = DVec2::new(size.x / 3.0, size.y / 2.0);
    let right = DVec2::new(2.0 * size.x / 3.0, size.y / 2.0);

    let outline = point_polygon(&style.point, options.circle_segments);
    let closed = !matches!(style.point.shape, PointShape::Cross | PointShape::X);
    let color = style.point.color.rgba();

    let points = [left, right]
        .into_iter()
        .map(|center| PreviewPoint {
            center,
            outline: outline.iter().map(|v| *v + center).collect(),
            closed,
            color,
        })
        .collect();

    let line = (!style.line.color.is_transparent()).then(|| PreviewLine {
        start: left,
        end: right,
        width: style.line.width as f64,
        color: style.line.color.rgba(),
    });

    Ok(PreviewScene {
        curve_name: curve_name.to_string(),
        size,
        points,
        line,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ColorPalette, CurveStyle, Document};
    use approx::assert_relative_eq;

    fn model() -> CurvePropertiesModel {
        CurvePropertiesModel::from_document(&Document::with_default_curve(CurveStyle::default()))
    }

    #[test]
    fn points_sit_at_thirds_of_the_scene() {
        let scene = build(&model(), "Curve1", &DigitizerOptions::default()).unwrap();

        assert_eq!(scene.points.len(), 2);
        assert_relative_eq!(scene.points[0].center.x, 100.0 / 3.0);
        assert_relative_eq!(scene.points[1].center.x, 200.0 / 3.0);
        assert_relative_eq!(scene.points[0].center.y, 50.0);
        assert!(scene.points[0].closed);
    }

    #[test]
    fn outline_is_translated_to_center() {
        let mut model = model();
        model.set_point_shape("Curve1", PointShape::Square).unwrap();
        model.set_point_radius("Curve1", 3).unwrap();

        let scene = build(&model, "Curve1", &DigitizerOptions::default()).unwrap();
        let right = &scene.points[1];
        for vertex in &right.outline {
            assert_relative_eq!((vertex.x - right.center.x).abs(), 3.0);
            assert_relative_eq!((vertex.y - right.center.y).abs(), 3.0);
        }
    }

    #[test]
    fn transparent_line_is_omitted() {
        let scene = build(&model(), "Axes", &DigitizerOptions::default()).unwrap();
        assert!(!scene.has_line());
        assert!(!scene.points[0].closed);
    }

    #[test]
    fn line_uses_width_and_color() {
        let mut model = model();
        model.set_line_width("Curve1", 3).unwrap();
        model.set_line_color("Curve1", ColorPalette::Red).unwrap();

        let scene = build(&model, "Curve1", &DigitizerOptions::default()).unwrap();
        let line = scene.line.expect("Linie erwartet");
        assert_eq!(line.width, 3.0);
        assert_eq!(line.color, ColorPalette::Red.rgba());
    }
}
