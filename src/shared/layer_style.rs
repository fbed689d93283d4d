//! Dekodierte Layer-Farben für einen Karten-Renderer.

use super::DigitizerOptions;
use crate::core::{hex_to_rgba, ColorError};

/// Darstellung eines Karten-Layers (Farben im Format von [`hex_to_rgba`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerStyle {
    pub fill_color: [f32; 4],
    pub line_color: [f32; 4],
    pub radius: f32,
    pub line_width: f32,
}

/// Styles der drei Layer: Abschnitte, Klickpunkte, granulare Punkte.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerStyles {
    pub route: LayerStyle,
    pub points: LayerStyle,
    pub granular: LayerStyle,
}

const ORANGE: [f32; 4] = [255.0, 140.0, 0.0, 255.0];
const RED: [f32; 4] = [255.0, 0.0, 0.0, 255.0];
const WHITE: [f32; 4] = [255.0, 255.0, 255.0, 255.0];

/// Entspricht den dekodierten Standardfarben der Optionen.
impl Default for LayerStyles {
    fn default() -> Self {
        Self {
            route: LayerStyle {
                fill_color: ORANGE,
                line_color: ORANGE,
                radius: 0.0,
                line_width: 5.0,
            },
            points: LayerStyle {
                fill_color: ORANGE,
                line_color: WHITE,
                radius: 1.0,
                line_width: 0.5,
            },
            granular: LayerStyle {
                fill_color: RED,
                line_color: WHITE,
                radius: 0.5,
                line_width: 0.2,
            },
        }
    }
}

impl LayerStyles {
    /// Dekodiert alle Hex-Farben der Optionen.
    pub fn from_options(options: &DigitizerOptions) -> Result<Self, ColorError> {
        let route_color = hex_to_rgba(&options.route_color)?;
        let outline = hex_to_rgba(&options.outline_color)?;

        Ok(Self {
            route: LayerStyle {
                fill_color: route_color,
                line_color: route_color,
                radius: 0.0,
                line_width: options.route_width,
            },
            points: LayerStyle {
                fill_color: hex_to_rgba(&options.point_fill_color)?,
                line_color: outline,
                radius: options.point_radius,
                line_width: options.point_outline_width,
            },
            granular: LayerStyle {
                fill_color: hex_to_rgba(&options.granular_fill_color)?,
                line_color: outline,
                radius: options.granular_radius,
                line_width: options.granular_outline_width,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_styles_match_layer_colors() {
        let styles = LayerStyles::from_options(&DigitizerOptions::default()).unwrap();
        assert_eq!(styles.route.line_color, [255.0, 140.0, 0.0, 255.0]);
        assert_eq!(styles.points.fill_color, [255.0, 140.0, 0.0, 255.0]);
        assert_eq!(styles.granular.fill_color, [255.0, 0.0, 0.0, 255.0]);
        assert_eq!(styles.granular.line_color, [255.0, 255.0, 255.0, 255.0]);
        assert_eq!(styles.route.line_width, 5.0);
        assert_eq!(styles.granular.radius, 0.5);
        assert_eq!(styles, LayerStyles::default());
    }

    #[test]
    fn translucent_fill_keeps_fractional_alpha() {
        let options = DigitizerOptions {
            granular_fill_color: "#ff000080".into(),
            ..Default::default()
        };
        let styles = LayerStyles::from_options(&options).unwrap();
        assert!((styles.granular.fill_color[3] - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn invalid_color_is_reported() {
        let options = DigitizerOptions {
            outline_color: "white".into(),
            ..Default::default()
        };
        assert!(LayerStyles::from_options(&options).is_err());
    }
}
