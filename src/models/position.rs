use super::coordinate::Coordinate;
use serde::Serialize;

/// Where the active reference position came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SourceKind {
    Sensor,
    Fallback,
    ManualSearch,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Sensor => "sensor",
            SourceKind::Fallback => "fallback",
            SourceKind::ManualSearch => "manual-search",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            SourceKind::Sensor => "Using your current location",
            SourceKind::Fallback => "Location unavailable, using the default location",
            SourceKind::ManualSearch => "Showing events near the searched location",
        }
    }
}

/// The point distances are measured from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferencePosition {
    pub coordinate: Coordinate,
    pub source: SourceKind,
    /// Resolver label for `ManualSearch` positions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ReferencePosition {
    pub fn sensor(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            source: SourceKind::Sensor,
            label: None,
        }
    }

    pub fn fallback(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            source: SourceKind::Fallback,
            label: None,
        }
    }

    pub fn manual(coordinate: Coordinate, label: impl Into<String>) -> Self {
        Self {
            coordinate,
            source: SourceKind::ManualSearch,
            label: Some(label.into()),
        }
    }
}
