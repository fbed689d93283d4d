//! CSV-Export (Semikolon-getrennt) für Punkt- und Wegpunktlisten.
//!
//! Spaltenreihenfolge ist `lat, lng`, obwohl Koordinaten intern als
//! `(lng, lat)` vorliegen.

pub mod kind;
pub mod writer;

pub use kind::ExportKind;
pub use writer::{
    export_file_name, points_to_delimited_text, waypoints_to_delimited_text, POINTS_HEADER,
    WAYPOINTS_HEADER,
};
