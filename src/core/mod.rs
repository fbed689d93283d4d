//! Core-Domänentypen: Geometrie, Projektion, Farbcodec, Strecke und Wegpunkte.

pub mod color;
/// Rein-mathematische Funktionen der Digitalisierung
///
/// - `distance`: planare euklidische Distanz
/// - `divide_segment`: Unterteilung in feste Schrittweite
/// - `heading`: Anfangskurs zwischen zwei geographischen Koordinaten
pub mod geometry;
pub mod line_segment;
pub mod projection;
pub mod track;
pub mod waypoint;

pub use color::{hex_to_rgba, ColorError};
pub use geometry::{distance, divide_segment, heading, GeometryError};
pub use line_segment::LineSegment;
pub use projection::{Datum, Hemisphere, LinearUnit, Projection, ProjectionConfig, ProjectionError};
pub use track::Track;
pub use waypoint::{Waypoint, WaypointId};
