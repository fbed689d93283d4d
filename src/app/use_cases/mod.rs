//! Use-Cases der Application-Layer-Orchestrierung.

pub mod digitize;
pub mod export;
pub mod options;
pub mod waypoints;
