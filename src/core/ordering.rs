//! Reihenfolge der Kurvenpunkte, zwischen denen Linien gezeichnet werden.
//!
//! Reine Funktionen über einer Punktmenge und einer [`ConnectAs`]-Regel:
//! - `Function`: aufsteigend nach x, Gleichstand nach Alter
//! - `Relation`: aufsteigend nach Alter; Punkte, die auf eine bestehende Linie
//!   gesetzt wurden, liegen zwischen den beiden Endpunkten dieser Linie
//!
//! Der Relation-Sortierschlüssel ist [`CurvePoint::ordinal`]. Ein auf eine Linie
//! gesetzter Punkt erhält den Mittelwert der Schlüssel seiner Nachbarn. Ist die
//! Gleitkomma-Auflösung erschöpft, werden alle Schlüssel in Relation-Reihenfolge
//! auf ganze Zahlen 1..=n umnummeriert (siehe [`AgeAssignment::relabeled`]).

use std::cmp::Ordering;

use glam::DVec2;

use super::{ConnectAs, CurvePoint, OrderingError};

/// Treffer eines Liniensegments zwischen zwei aufeinanderfolgenden Punkten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    /// ID des ersten Endpunkts (in Zeichenreihenfolge)
    pub start_id: u64,
    /// ID des zweiten Endpunkts
    pub end_id: u64,
    /// Abstand der Abfrageposition zum Segment
    pub distance: f64,
}

/// Alter und Sortierschlüssel für einen neu einzufügenden Punkt.
#[derive(Debug, Clone, PartialEq)]
pub struct AgeAssignment {
    /// Erzeugungs-Index des neuen Punkts
    pub age: u64,
    /// Relation-Sortierschlüssel des neuen Punkts
    pub ordinal: f64,
    /// Segment, in das der Punkt eingefügt wurde (`None` = normal angehängt)
    pub spliced: Option<SegmentHit>,
    /// Neue Schlüssel bestehender Punkte `(id, ordinal)`.
    /// Nur nicht-leer, wenn zwischen den Nachbarn kein Platz mehr war.
    pub relabeled: Vec<(u64, f64)>,
}

impl AgeAssignment {
    /// `true` wenn der Punkt zwischen zwei bestehende Punkte eingefügt wurde
    pub fn is_spliced(&self) -> bool {
        self.spliced.is_some()
    }

    /// Baut den neuen Punkt aus der Zuweisung
    pub fn to_point(&self, id: u64, position: DVec2) -> CurvePoint {
        CurvePoint::with_ordinal(id, position, self.age, self.ordinal)
    }
}

/// Berechnet die Zeichenreihenfolge der Punkte für die gegebene Regel.
///
/// Das Ergebnis ist immer eine Permutation der Eingabe und für unveränderte
/// Eingaben stabil.
pub fn compute_order(points: &[CurvePoint], mode: ConnectAs) -> Vec<CurvePoint> {
    let mut ordered = points.to_vec();
    if ordered.len() < 2 {
        return ordered;
    }

    match mode {
        ConnectAs::Function => ordered.sort_by(compare_function),
        ConnectAs::Relation => ordered.sort_by(compare_relation),
    }
    ordered
}

/// `total_cmp` mit -0.0 == 0.0, damit Gleichstände beim Alter landen.
fn cmp_key(a: f64, b: f64) -> Ordering {
    (a + 0.0).total_cmp(&(b + 0.0))
}

fn compare_function(a: &CurvePoint, b: &CurvePoint) -> Ordering {
    cmp_key(a.position.x, b.position.x)
        .then(a.age.cmp(&b.age))
        .then(a.id.cmp(&b.id))
}

fn compare_relation(a: &CurvePoint, b: &CurvePoint) -> Ordering {
    cmp_key(a.ordinal, b.ordinal)
        .then(a.age.cmp(&b.age))
        .then(a.id.cmp(&b.id))
}

/// Abstand eines Punkts zu einem Liniensegment.
pub fn distance_to_segment(point: DVec2, start: DVec2, end: DVec2) -> f64 {
    let ab = end - start;
    let len_sq = ab.length_squared();
    if len_sq <= f64::EPSILON {
        return point.distance(start);
    }

    let t = ((point - start).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(start + ab * t)
}

/// Findet das nächstgelegene Segment zwischen aufeinanderfolgenden Punkten
/// innerhalb von `threshold`. Bei gleichem Abstand gewinnt das frühere Segment.
pub fn nearest_segment(ordered: &[CurvePoint], position: DVec2, threshold: f64) -> Option<SegmentHit> {
    let mut best: Option<SegmentHit> = None;

    for pair in ordered.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let distance = distance_to_segment(position, a.position, b.position);
        if distance > threshold {
            continue;
        }
        if best.is_none_or(|hit| distance < hit.distance) {
            best = Some(SegmentHit {
                start_id: a.id,
                end_id: b.id,
                distance,
            });
        }
    }

    best
}

/// Weist einem neuen Punkt Alter und Relation-Schlüssel zu.
///
/// Im Relation-Modus wird der Punkt zwischen die Endpunkte des nächstgelegenen
/// Segments aus `ordered` eingefügt, sofern dieses höchstens `threshold` entfernt
/// ist. Andernfalls (und immer im Function-Modus) wird normal angehängt.
///
/// `next_age` ist der Alterszähler der Kurve; das zurückgegebene Alter ist nie
/// kleiner und liegt immer über allen Altern in `points`.
pub fn insert_on_segment(
    points: &[CurvePoint],
    mode: ConnectAs,
    position: DVec2,
    ordered: &[CurvePoint],
    threshold: f64,
    next_age: u64,
) -> Result<AgeAssignment, OrderingError> {
    if !position.is_finite() {
        return Err(OrderingError::NonFinitePosition {
            x: position.x,
            y: position.y,
        });
    }
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(OrderingError::InvalidThreshold(threshold));
    }

    if mode == ConnectAs::Function {
        return Ok(append(points, next_age));
    }

    match nearest_segment(ordered, position, threshold) {
        Some(hit) => {
            let mut assignment = splice_between(points, hit.start_id, hit.end_id, next_age)?;
            assignment.spliced = Some(hit);
            Ok(assignment)
        }
        None => Ok(append(points, next_age)),
    }
}

/// Normales Anhängen: nächstes ganzzahliges Alter, Schlüssel hinter allen anderen.
pub fn append(points: &[CurvePoint], next_age: u64) -> AgeAssignment {
    let age = next_free_age(points, next_age);
    let last_ordinal = points
        .iter()
        .map(|p| p.ordinal)
        .fold(f64::NEG_INFINITY, f64::max);
    let ordinal = if last_ordinal.is_finite() {
        (age as f64).max(last_ordinal.floor() + 1.0)
    } else {
        age as f64
    };

    AgeAssignment {
        age,
        ordinal,
        spliced: None,
        relabeled: Vec::new(),
    }
}

/// Fügt einen neuen Punkt direkt hinter den früheren der beiden Endpunkte
/// (in Relation-Reihenfolge) ein.
///
/// Sind die Endpunkte in Relation-Reihenfolge benachbart, liegt der neue Punkt
/// genau zwischen ihnen. `spliced` bleibt `None`; das Segment kennt nur der Aufrufer.
pub fn splice_between(
    points: &[CurvePoint],
    start_id: u64,
    end_id: u64,
    next_age: u64,
) -> Result<AgeAssignment, OrderingError> {
    if start_id == end_id {
        return Err(OrderingError::DegenerateSegment(start_id));
    }

    let relation = compute_order(points, ConnectAs::Relation);
    let index_of = |id: u64| {
        relation
            .iter()
            .position(|p| p.id == id)
            .ok_or(OrderingError::InvalidInput { missing: id })
    };
    let first = index_of(start_id)?.min(index_of(end_id)?);

    let age = next_free_age(points, next_age);
    let lower = relation[first].ordinal;
    let upper = relation[first + 1].ordinal;
    let midpoint = lower + (upper - lower) * 0.5;

    if lower < midpoint && midpoint < upper {
        log::debug!(
            "Punkt mit Alter {} zwischen Schlüssel {} und {} eingefügt",
            age,
            lower,
            upper
        );
        return Ok(AgeAssignment {
            age,
            ordinal: midpoint,
            spliced: None,
            relabeled: Vec::new(),
        });
    }

    // Kein Platz zwischen den Nachbarn: Schlüssel 1..=n in Relation-Reihenfolge
    let relabeled: Vec<(u64, f64)> = relation
        .iter()
        .enumerate()
        .filter_map(|(index, p)| {
            let ordinal = (index + 1) as f64;
            (p.ordinal != ordinal).then_some((p.id, ordinal))
        })
        .collect();

    log::debug!(
        "Relation-Schlüssel erschöpft, {} Punkte umnummeriert",
        relabeled.len()
    );

    Ok(AgeAssignment {
        age,
        ordinal: (first + 1) as f64 + 0.5,
        spliced: None,
        relabeled,
    })
}

fn next_free_age(points: &[CurvePoint], next_age: u64) -> u64 {
    points
        .iter()
        .map(|p| p.age + 1)
        .max()
        .map_or(next_age, |above| above.max(next_age))
}
