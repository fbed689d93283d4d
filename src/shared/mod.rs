//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Optionen und dekodierte Layer-Styles, die zwischen `app` und
//! einem Karten-Frontend geteilt werden.

pub mod layer_style;
pub mod options;

pub use layer_style::{LayerStyle, LayerStyles};
pub use options::{DigitizerOptions, InitialView};
pub use options::{is_valid_step_length, MIN_STEP_LENGTH, PROJECTION_DEFINITION, STEP_LENGTH};
