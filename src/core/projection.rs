//! Projektions-Adapter: geographisch `(lng, lat)` ↔ planar `(easting, northing)`.
//!
//! Unterstützt UTM auf WGS84/GRS80. Die Definition kommt als PROJ-Zeichenkette
//! aus der Konfiguration, wird einmalig zu [`ProjectionConfig`] geparst und
//! zu einer [`Projection`] aufgebaut, die die Transformation an `proj4rs`
//! delegiert.

use glam::DVec2;
use proj4rs::proj::Proj;
use proj4rs::transform::transform;
use regex::Regex;
use std::cell::OnceCell;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

static PARAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+([A-Za-z_][A-Za-z0-9_]*)(?:=(\S+))?$").expect("statische Regex ist gültig")
});

/// Fehler beim Parsen einer Projektionsdefinition oder bei der Transformation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// Token entspricht nicht der Form `+key` oder `+key=value`.
    #[error("Ungültiger Projektionsparameter: '{0}'")]
    Malformed(String),
    /// Pflichtparameter fehlt.
    #[error("Projektionsparameter '+{0}' fehlt")]
    MissingParameter(&'static str),
    /// Parameterwert wird nicht unterstützt.
    #[error("Nicht unterstützter Wert für '+{key}': '{value}'")]
    Unsupported { key: String, value: String },
    /// UTM-Zone außerhalb 1..=60 oder nicht numerisch.
    #[error("Ungültige UTM-Zone: '{0}'")]
    InvalidZone(String),
    /// Koordinate liegt außerhalb des Gültigkeitsbereichs der Projektion.
    #[error("Koordinate ({x}, {y}) außerhalb des Projektionsbereichs")]
    OutOfDomain { x: f64, y: f64 },
    /// Fehler der Projektionsbibliothek.
    #[error("Projektion fehlgeschlagen: {0}")]
    Transform(String),
}

/// Halbkugel der UTM-Zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Hemisphere {
    #[default]
    North,
    South,
}

/// Bezugsellipsoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Datum {
    #[default]
    Wgs84,
    Grs80,
}

impl Datum {
    /// Parameter in PROJ-Schreibweise.
    fn proj_param(self) -> &'static str {
        match self {
            Datum::Wgs84 => "+datum=WGS84",
            Datum::Grs80 => "+ellps=GRS80",
        }
    }
}

/// Lineare Ausgabeeinheit der planaren Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinearUnit {
    #[default]
    Meter,
    Kilometer,
    Foot,
    UsSurveyFoot,
}

impl LinearUnit {
    /// Meter pro Einheit.
    pub fn meters_per_unit(self) -> f64 {
        match self {
            LinearUnit::Meter => 1.0,
            LinearUnit::Kilometer => 1000.0,
            LinearUnit::Foot => 0.3048,
            LinearUnit::UsSurveyFoot => 1200.0 / 3937.0,
        }
    }

    fn proj_name(self) -> &'static str {
        match self {
            LinearUnit::Meter => "m",
            LinearUnit::Kilometer => "km",
            LinearUnit::Foot => "ft",
            LinearUnit::UsSurveyFoot => "us-ft",
        }
    }
}

/// Typisierte Form einer UTM-Projektionsdefinition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionConfig {
    /// UTM-Zone (1..=60)
    pub zone: u8,
    pub hemisphere: Hemisphere,
    pub datum: Datum,
    pub unit: LinearUnit,
}

impl ProjectionConfig {
    /// Parst eine PROJ-Zeichenkette wie
    /// `+proj=utm +zone=18 +south +datum=WGS84 +units=m +no_defs +type=crs`.
    pub fn parse(definition: &str) -> Result<Self, ProjectionError> {
        let mut proj = None;
        let mut zone = None;
        let mut hemisphere = Hemisphere::North;
        let mut datum = Datum::Wgs84;
        let mut unit = LinearUnit::Meter;

        for token in definition.split_whitespace() {
            let caps = PARAM_RE
                .captures(token)
                .ok_or_else(|| ProjectionError::Malformed(token.to_string()))?;
            let key = &caps[1];
            let value = caps.get(2).map(|m| m.as_str());

            match (key, value) {
                ("proj", Some(v)) => proj = Some(v.to_string()),
                ("zone", Some(v)) => zone = Some(parse_zone(v)?),
                ("south", None) => hemisphere = Hemisphere::South,
                ("north", None) => hemisphere = Hemisphere::North,
                ("datum" | "ellps", Some(v)) => datum = parse_datum(key, v)?,
                ("units", Some(v)) => unit = parse_unit(v)?,
                ("towgs84", Some(v)) => {
                    if v.split(',').any(|c| c.parse::<f64>().map_or(true, |n| n != 0.0)) {
                        return Err(unsupported(key, v));
                    }
                }
                ("no_defs" | "type" | "wktext", _) => {}
                (other, _) => log::debug!("Projektionsparameter '+{}' ignoriert", other),
            }
        }

        match proj.as_deref() {
            Some("utm") => {}
            Some(other) => return Err(unsupported("proj", other)),
            None => return Err(ProjectionError::MissingParameter("proj")),
        }
        let zone = zone.ok_or(ProjectionError::MissingParameter("zone"))?;

        Ok(Self {
            zone,
            hemisphere,
            datum,
            unit,
        })
    }

    /// Zentralmeridian der Zone in Grad.
    pub fn central_meridian(&self) -> f64 {
        f64::from(self.zone) * 6.0 - 183.0
    }

    /// Baut die Projektion; die Koordinatensysteme entstehen beim ersten Gebrauch.
    pub fn build(&self) -> Projection {
        Projection::new(*self)
    }
}

/// UTM Zone 18 Süd, WGS84, Meter.
impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            zone: 18,
            hemisphere: Hemisphere::South,
            datum: Datum::Wgs84,
            unit: LinearUnit::Meter,
        }
    }
}

impl FromStr for ProjectionConfig {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ProjectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+proj=utm +zone={}", self.zone)?;
        if self.hemisphere == Hemisphere::South {
            write!(f, " +south")?;
        }
        write!(
            f,
            " {} +units={} +no_defs +type=crs",
            self.datum.proj_param(),
            self.unit.proj_name()
        )
    }
}

fn unsupported(key: &str, value: &str) -> ProjectionError {
    ProjectionError::Unsupported {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_zone(value: &str) -> Result<u8, ProjectionError> {
    match value.parse::<u8>() {
        Ok(zone) if (1..=60).contains(&zone) => Ok(zone),
        _ => Err(ProjectionError::InvalidZone(value.to_string())),
    }
}

fn parse_datum(key: &str, value: &str) -> Result<Datum, ProjectionError> {
    match value.to_ascii_uppercase().as_str() {
        "WGS84" => Ok(Datum::Wgs84),
        "GRS80" => Ok(Datum::Grs80),
        _ => Err(unsupported(key, value)),
    }
}

fn parse_unit(value: &str) -> Result<LinearUnit, ProjectionError> {
    match value {
        "m" => Ok(LinearUnit::Meter),
        "km" => Ok(LinearUnit::Kilometer),
        "ft" => Ok(LinearUnit::Foot),
        "us-ft" => Ok(LinearUnit::UsSurveyFoot),
        _ => Err(unsupported("units", value)),
    }
}

/// Geographisches und planares Koordinatensystem für `proj4rs`.
struct CoordinateSystems {
    geographic: Proj,
    planar: Proj,
}

impl CoordinateSystems {
    fn new(config: &ProjectionConfig) -> Result<Self, ProjectionError> {
        let datum = config.datum.proj_param();
        let geographic = format!("+proj=longlat {datum} +no_defs");
        // Einheiten skaliert der Adapter selbst, proj4rs rechnet in Metern
        let mut planar = format!("+proj=utm +zone={}", config.zone);
        if config.hemisphere == Hemisphere::South {
            planar.push_str(" +south");
        }
        planar.push_str(&format!(" {datum} +units=m +no_defs"));

        Ok(Self {
            geographic: Proj::from_proj_string(&geographic).map_err(transform_error)?,
            planar: Proj::from_proj_string(&planar).map_err(transform_error)?,
        })
    }
}

/// Einsatzbereite UTM-Projektion.
///
/// Die eigentliche Transformation übernimmt `proj4rs`. Die Koordinatensysteme
/// werden einmalig beim ersten Gebrauch (oder über [`Projection::ensure_ready`])
/// aufgebaut und danach wiederverwendet.
pub struct Projection {
    config: ProjectionConfig,
    systems: OnceCell<Result<CoordinateSystems, ProjectionError>>,
}

impl fmt::Debug for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Projection")
            .field("config", &self.config.to_string())
            .finish_non_exhaustive()
    }
}

impl Projection {
    pub fn new(config: ProjectionConfig) -> Self {
        Self {
            config,
            systems: OnceCell::new(),
        }
    }

    /// Zugrunde liegende Konfiguration.
    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Baut die Koordinatensysteme auf und meldet Fehler sofort.
    pub fn ensure_ready(&self) -> Result<(), ProjectionError> {
        self.systems().map(|_| ())
    }

    fn systems(&self) -> Result<&CoordinateSystems, ProjectionError> {
        self.systems
            .get_or_init(|| CoordinateSystems::new(&self.config))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Geographisch `(lng, lat)` in Grad → planar `(easting, northing)` in der
    /// konfigurierten Einheit.
    pub fn forward(&self, geographic: DVec2) -> Result<DVec2, ProjectionError> {
        let out_of_domain = || ProjectionError::OutOfDomain {
            x: geographic.x,
            y: geographic.y,
        };
        if !(geographic.y.abs() < 90.0 && geographic.x.abs() <= 180.0) {
            return Err(out_of_domain());
        }
        // Mehr als 90° vom Zentralmeridian entfernt ist UTM nicht definiert
        let d_lambda = (geographic.x - self.config.central_meridian()).to_radians();
        if d_lambda.cos() <= 0.0 {
            return Err(out_of_domain());
        }

        let systems = self.systems()?;
        let mut point = (geographic.x.to_radians(), geographic.y.to_radians(), 0.0);
        transform(&systems.geographic, &systems.planar, &mut point).map_err(transform_error)?;

        let planar = DVec2::new(point.0, point.1) / self.config.unit.meters_per_unit();
        if planar.is_finite() {
            Ok(planar)
        } else {
            Err(out_of_domain())
        }
    }

    /// Planar `(easting, northing)` → geographisch `(lng, lat)` in Grad.
    pub fn inverse(&self, planar: DVec2) -> Result<DVec2, ProjectionError> {
        let out_of_domain = || ProjectionError::OutOfDomain {
            x: planar.x,
            y: planar.y,
        };
        if !planar.is_finite() {
            return Err(out_of_domain());
        }

        let systems = self.systems()?;
        let meters = planar * self.config.unit.meters_per_unit();
        let mut point = (meters.x, meters.y, 0.0);
        transform(&systems.planar, &systems.geographic, &mut point).map_err(transform_error)?;

        let geographic = DVec2::new(point.0.to_degrees(), point.1.to_degrees());
        if geographic.is_finite() {
            Ok(geographic)
        } else {
            Err(out_of_domain())
        }
    }
}

fn transform_error(e: proj4rs::errors::Error) -> ProjectionError {
    ProjectionError::Transform(e.to_string())
}
