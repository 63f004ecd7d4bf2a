use std::{fmt, str::FromStr};

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::coordinates::Coordinates;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct WorkoutId(Uuid);

impl WorkoutId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WorkoutId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for WorkoutId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    #[default]
    Running,
    Cycling,
}

impl WorkoutKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "🏃‍♂️",
            WorkoutKind::Cycling => "🚴‍♀️",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "running" => Ok(WorkoutKind::Running),
            "cycling" => Ok(WorkoutKind::Cycling),
            other => Err(format!("Unknown workout kind: {other}")),
        }
    }
}

/// Kind-specific input and the metric derived from it.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WorkoutMetrics {
    Running { cadence_spm: f64, pace_min_per_km: f64 },
    Cycling { elevation_gain_m: f64, speed_km_per_h: f64 },
}

impl WorkoutMetrics {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutMetrics::Running { .. } => WorkoutKind::Running,
            WorkoutMetrics::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

pub fn pace(distance_km: f64, duration_min: f64) -> f64 {
    duration_min / distance_km
}

pub fn speed(distance_km: f64, duration_min: f64) -> f64 {
    duration_min / (distance_km / 60.)
}

pub fn describe(kind: WorkoutKind, at: &DateTime<FixedOffset>) -> String {
    format!("{} on {}", kind.label(), at.format("%B %-d"))
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Workout {
    id: WorkoutId,
    created_at: DateTime<FixedOffset>,
    coordinates: Coordinates,
    distance_km: f64,
    duration_min: f64,
    metrics: WorkoutMetrics,
    description: String,
}

impl Workout {
    pub fn running(coordinates: Coordinates, distance_km: f64, duration_min: f64, cadence_spm: f64, created_at: DateTime<FixedOffset>) -> Self {
        let metrics = WorkoutMetrics::Running {
            cadence_spm,
            pace_min_per_km: pace(distance_km, duration_min),
        };
        Self::with_metrics(coordinates, distance_km, duration_min, metrics, created_at)
    }

    pub fn cycling(coordinates: Coordinates, distance_km: f64, duration_min: f64, elevation_gain_m: f64, created_at: DateTime<FixedOffset>) -> Self {
        let metrics = WorkoutMetrics::Cycling {
            elevation_gain_m,
            speed_km_per_h: speed(distance_km, duration_min),
        };
        Self::with_metrics(coordinates, distance_km, duration_min, metrics, created_at)
    }

    fn with_metrics(coordinates: Coordinates, distance_km: f64, duration_min: f64, metrics: WorkoutMetrics, created_at: DateTime<FixedOffset>) -> Self {
        Self {
            id: WorkoutId::new(),
            description: describe(metrics.kind(), &created_at),
            created_at,
            coordinates,
            distance_km,
            duration_min,
            metrics,
        }
    }

    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn metrics(&self) -> &WorkoutMetrics {
        &self.metrics
    }

    pub fn kind(&self) -> WorkoutKind {
        self.metrics.kind()
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
