use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of decimal places kept by [`CoordinateKey`] (about one meter).
pub const KEY_PRECISION: i32 = 5;

const KEY_SCALE: f64 = 100_000.0;

/// A validated WGS84 position in decimal degrees.
///
/// The only way to build one is [`Coordinate::new`], so every value reaching
/// the engine is already inside `[-90,90] x [-180,180]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> AppResult<Self> {
        let lat_ok = latitude.is_finite() && (-90.0..=90.0).contains(&latitude);
        let lon_ok = longitude.is_finite() && (-180.0..=180.0).contains(&longitude);

        if !lat_ok || !lon_ok {
            return Err(AppError::InvalidCoordinate {
                lat: latitude,
                lon: longitude,
            });
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Parse the `"LAT,LON"` form accepted on the command line.
    pub fn parse_pair(s: &str) -> AppResult<Self> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| AppError::InvalidNumber(format!("expected LAT,LON, got '{}'", s)))?;

        Self::new(parse_degrees(lat)?, parse_degrees(lon)?)
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn key(&self) -> CoordinateKey {
        CoordinateKey::from(*self)
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            latitude: f64,
            longitude: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Coordinate::new(raw.latitude, raw.longitude).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5},{:.5}", self.latitude, self.longitude)
    }
}

/// Parse a decimal-degree string such as `"40.7128"` (resolver responses and CLI input).
pub fn parse_degrees(s: &str) -> AppResult<f64> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| AppError::InvalidNumber(s.to_string()))
}

/// Grouping key: both axes rounded independently to [`KEY_PRECISION`] decimals.
///
/// Stored as integer hundred-thousandths so equality is exact and `-0.000001`
/// lands on the same key as `0.000001`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordinateKey {
    lat_e5: i64,
    lon_e5: i64,
}

impl From<Coordinate> for CoordinateKey {
    fn from(c: Coordinate) -> Self {
        Self {
            lat_e5: to_e5(c.latitude),
            lon_e5: to_e5(c.longitude),
        }
    }
}

/// Round the exact binary value to 5 decimals, halves away from zero, and
/// return it in hundred-thousandths.
///
/// A value sits exactly on a half step only when `v * 64` is an odd integer
/// (`v = n / 200000` must have a power-of-two denominator). Everything else
/// goes through the correctly rounded decimal formatter.
fn to_e5(v: f64) -> i64 {
    let m = v * 64.0;
    if m.fract() == 0.0 && (m as i64) % 2 != 0 {
        let twice = (m as i64) * 3125;
        return (twice + twice.signum()) / 2;
    }

    format!("{:.*}", KEY_PRECISION as usize, v)
        .replace('.', "")
        .parse::<i64>()
        .unwrap_or_else(|_| (v * KEY_SCALE).round() as i64)
}

fn write_fixed(f: &mut fmt::Formatter<'_>, v: i64) -> fmt::Result {
    let sign = if v < 0 { "-" } else { "" };
    let abs = v.unsigned_abs();
    let scale = KEY_SCALE as u64;
    write!(
        f,
        "{}{}.{:0width$}",
        sign,
        abs / scale,
        abs % scale,
        width = KEY_PRECISION as usize
    )
}

impl fmt::Display for CoordinateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fixed(f, self.lat_e5)?;
        f.write_str(",")?;
        write_fixed(f, self.lon_e5)
    }
}

impl Serialize for CoordinateKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
