//! Planare Distanz, Segment-Unterteilung und Kursberechnung.
//!
//! Rein-mathematische Funktionen ohne Zustand. Planare Koordinaten liegen in
//! Projektionseinheiten (z.B. Meter), geographische als `(lng, lat)` in Grad.

use glam::DVec2;
use thiserror::Error;

/// Nachkommastellen, auf die Zwischenpunkte gerundet werden.
pub const ROUND_DECIMALS: i32 = 6;

/// Obergrenze der Schritte je Segment.
pub const MAX_STEPS: usize = 1_000_000;

/// Toleranz, ab der ein berechneter Schritt als "auf dem Endpunkt" gilt.
const ENDPOINT_EPSILON: f64 = 1e-6;

/// Fehler der Segment-Unterteilung.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// Schrittweite ist null, negativ oder keine endliche Zahl.
    #[error("Schrittweite muss positiv sein (erhalten: {0})")]
    NonPositiveStep(f64),
    /// Start- und Endpunkt fallen zusammen.
    #[error("Start- und Endpunkt des Segments sind identisch")]
    CoincidentEndpoints,
    /// Segmentlänge / Schrittweite ist nicht endlich oder größer als [`MAX_STEPS`].
    #[error("Segment ergäbe {0} Schritte (maximal {max})", max = MAX_STEPS)]
    TooManySteps(f64),
}

/// Euklidische Distanz zweier planarer Koordinaten.
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    let dy = b.y - a.y;
    let dx = b.x - a.x;
    (dy * dy + dx * dx).sqrt()
}

/// Rundet einen Wert auf `decimals` Nachkommastellen.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn round_coord(p: DVec2) -> DVec2 {
    DVec2::new(round_to(p.x, ROUND_DECIMALS), round_to(p.y, ROUND_DECIMALS))
}

/// Unterteilt das Segment `a → b` in Schritte der Länge `step`.
///
/// Das Ergebnis beginnt mit `a`, schreitet in Richtung `b` fort und endet
/// immer exakt mit `b`. Landet der letzte volle Schritt auf `b`, wird er durch
/// `b` ersetzt statt doppelt angehängt. Zwischenpunkte werden auf
/// [`ROUND_DECIMALS`] Stellen gerundet.
pub fn divide_segment(a: DVec2, b: DVec2, step: f64) -> Result<Vec<DVec2>, GeometryError> {
    if !(step.is_finite() && step > 0.0) {
        return Err(GeometryError::NonPositiveStep(step));
    }
    let total = distance(a, b);
    if total < ENDPOINT_EPSILON {
        return Err(GeometryError::CoincidentEndpoints);
    }

    let ratio = (total / step).floor();
    if !(ratio.is_finite() && ratio <= MAX_STEPS as f64) {
        return Err(GeometryError::TooManySteps(ratio));
    }

    let direction = (b - a) / total;
    let full_steps = ratio as usize;

    let mut points = Vec::with_capacity(full_steps + 2);
    points.push(a);
    for i in 1..=full_steps {
        points.push(round_coord(a + direction * (step * i as f64)));
    }

    if let Some(last) = points.last() {
        if points.len() > 1 && distance(*last, b) <= ENDPOINT_EPSILON {
            points.pop();
        }
    }
    points.push(b);

    Ok(points)
}

/// Anfangskurs (Großkreis) von `from` nach `to` in Grad, Bereich `[0, 360)`.
///
/// Beide Koordinaten als `(lng, lat)` in Grad. Für identische Punkte ist der
/// Kurs undefiniert; `atan2(0, 0)` liefert dann 0.
pub fn heading(from: DVec2, to: DVec2) -> f64 {
    let lat1 = from.y.to_radians();
    let lat2 = to.y.to_radians();
    let d_lng = (to.x - from.x).to_radians();

    let y = d_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();
    let bearing = y.atan2(x).to_degrees();

    (bearing + 360.0) % 360.0
}
