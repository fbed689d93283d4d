//! Hex-Farbcodec für Layer-Farben.
//!
//! Ergebnis ist `[r, g, b, a]`: RGB als Byte-Werte 0–255, Alpha bei 8-stelliger
//! Angabe als Anteil 0–1, ohne Alpha-Angabe aber 255. Diese Skalen-Mischung
//! ist das Format, das der Renderer erwartet, und bleibt so erhalten.

use thiserror::Error;

/// Alpha-Wert, wenn die Hex-Angabe keinen Alpha-Kanal enthält.
pub const DEFAULT_ALPHA: f32 = 255.0;

/// Fehler beim Dekodieren einer Hex-Farbe.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Anzahl Hex-Ziffern ist nicht 3, 6 oder 8.
    #[error("Ungültiges Hex-Farbformat: {0} Ziffern (erwartet 3, 6 oder 8)")]
    InvalidLength(usize),
    /// Zeichen ist keine Hex-Ziffer.
    #[error("Ungültige Hex-Ziffer in '{0}'")]
    InvalidDigit(String),
}

/// Dekodiert `#rgb`, `#rrggbb` oder `#rrggbbaa` (Raute optional).
pub fn hex_to_rgba(hex: &str) -> Result<[f32; 4], ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidDigit(hex.to_string()));
    }

    // Nach obiger Prüfung ist jede Ziffer genau ein Byte breit.
    let byte = |range: std::ops::Range<usize>| -> f32 {
        u8::from_str_radix(&digits[range], 16).map_or(0.0, f32::from)
    };
    // "f" → "ff": verdoppelte Ziffer entspricht Ziffer · 17
    let doubled = |i: usize| -> f32 {
        char::from(digits.as_bytes()[i])
            .to_digit(16)
            .map_or(0.0, |d| (d * 17) as f32)
    };

    match digits.len() {
        3 => Ok([doubled(0), doubled(1), doubled(2), DEFAULT_ALPHA]),
        6 => Ok([byte(0..2), byte(2..4), byte(4..6), DEFAULT_ALPHA]),
        8 => Ok([byte(0..2), byte(2..4), byte(4..6), byte(6..8) / 255.0]),
        len => Err(ColorError::InvalidLength(len)),
    }
}
