//! Wegpunkt-Digitalisierer Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod export;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, CommandLog, UiState, ViewState};
pub use core::{
    distance, divide_segment, heading, hex_to_rgba, ColorError, GeometryError, LineSegment,
    Projection, ProjectionConfig, ProjectionError, Track, Waypoint, WaypointId,
};
pub use export::ExportKind;
pub use shared::{DigitizerOptions, LayerStyle, LayerStyles};
