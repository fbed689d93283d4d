//! Writer für die Export-Tabellen.

use crate::core::Waypoint;
use chrono::NaiveDateTime;
use glam::DVec2;
use std::borrow::Cow;

/// Feldtrenner
pub const DELIMITER: &str = ";";
/// Kopfzeile für Punktlisten
pub const POINTS_HEADER: [&str; 3] = ["nro", "latitud", "longitud"];
/// Kopfzeile für Wegpunktlisten
pub const WAYPOINTS_HEADER: [&str; 5] = ["nro", "nombre", "latitud", "longitud", "angulo"];

/// Schreibt Punkte `(lng, lat)` als Tabelle `nro;latitud;longitud`.
///
/// Gibt `None` zurück, wenn keine Punkte vorhanden sind.
pub fn points_to_delimited_text(points: &[DVec2]) -> Option<String> {
    if points.is_empty() {
        return None;
    }

    let mut rows = Vec::with_capacity(points.len() + 1);
    rows.push(POINTS_HEADER.join(DELIMITER));
    for (i, p) in points.iter().enumerate() {
        rows.push(
            [(i + 1).to_string(), format_fixed(p.y, 6), format_fixed(p.x, 6)].join(DELIMITER),
        );
    }
    Some(rows.join("\n"))
}

/// Schreibt Wegpunkte als Tabelle `nro;nombre;latitud;longitud;angulo`.
///
/// Gibt `None` zurück, wenn keine Wegpunkte vorhanden sind.
pub fn waypoints_to_delimited_text(waypoints: &[Waypoint]) -> Option<String> {
    if waypoints.is_empty() {
        return None;
    }

    let mut rows = Vec::with_capacity(waypoints.len() + 1);
    rows.push(WAYPOINTS_HEADER.join(DELIMITER));
    for (i, w) in waypoints.iter().enumerate() {
        rows.push(
            [
                (i + 1).to_string(),
                sanitize_field(&w.name).into_owned(),
                format_fixed(w.position.y, 6),
                format_fixed(w.position.x, 6),
                format_fixed(w.heading, 2),
            ]
            .join(DELIMITER),
        );
    }
    Some(rows.join("\n"))
}

/// Dateiname `wp_<YYYYMMDDhhmmss>.csv` für den gegebenen lokalen Zeitpunkt.
pub fn export_file_name(local_time: NaiveDateTime) -> String {
    format!("wp_{}.csv", local_time.format("%Y%m%d%H%M%S"))
}

/// Festkomma-Formatierung ohne negatives Vorzeichen bei `-0.0`.
fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value + 0.0)
}

/// Trenner und Zeilenumbrüche im Freitext würden die Spaltenanzahl verschieben:
/// `;` wird zu `,`, Zeilenumbrüche zu Leerzeichen. Jede Anpassung wird geloggt.
fn sanitize_field(text: &str) -> Cow<'_, str> {
    if !text.contains([';', '\n', '\r']) {
        return Cow::Borrowed(text);
    }
    let cleaned: String = text
        .chars()
        .map(|c| match c {
            ';' => ',',
            '\n' | '\r' => ' ',
            other => other,
        })
        .collect();
    log::warn!(
        "Name '{}' für den Export angepasst: '{}'",
        text.escape_debug(),
        cleaned
    );
    Cow::Owned(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WaypointId;
    use chrono::NaiveDate;

    #[test]
    fn empty_points_produce_nothing() {
        assert_eq!(points_to_delimited_text(&[]), None);
        assert_eq!(waypoints_to_delimited_text(&[]), None);
    }

    #[test]
    fn single_point_swaps_to_lat_lng() {
        let text = points_to_delimited_text(&[DVec2::new(-71.978, -13.516)]).unwrap();
        assert_eq!(text, "nro;latitud;longitud\n1;-13.516000;-71.978000");
    }

    #[test]
    fn rows_are_numbered_from_one() {
        let text = points_to_delimited_text(&[
            DVec2::new(1.0, 2.0),
            DVec2::new(3.5, 4.25),
            DVec2::new(0.0, -0.0),
        ])
        .unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "1;2.000000;1.000000");
        assert_eq!(lines[2], "2;4.250000;3.500000");
        assert_eq!(lines[3], "3;0.000000;0.000000");
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn waypoint_rows_carry_name_and_heading() {
        let waypoints = vec![
            Waypoint::new(
                WaypointId(1),
                DVec2::new(-71.978, -13.516),
                "Plaza".into(),
                123.456,
            ),
            Waypoint::new(
                WaypointId(2),
                DVec2::new(-71.9, -13.5),
                "a;b\nc".into(),
                0.0,
            ),
        ];
        let text = waypoints_to_delimited_text(&waypoints).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "nro;nombre;latitud;longitud;angulo");
        assert_eq!(lines[1], "1;Plaza;-13.516000;-71.978000;123.46");
        assert_eq!(lines[2], "2;a,b c;-13.500000;-71.900000;0.00");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn sanitize_only_touches_names_with_delimiters() {
        assert!(matches!(sanitize_field("Plaza de Armas"), Cow::Borrowed(_)));
        assert_eq!(sanitize_field("Km 3;5\r\nPuente"), "Km 3,5  Puente");
    }

    #[test]
    fn file_name_uses_compact_timestamp() {
        let t = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(7, 8, 9)
            .unwrap();
        assert_eq!(export_file_name(t), "wp_20240305070809.csv");
    }
}
