use crate::{
    config::ValidationRules,
    coordinates::Coordinates,
    error::ValidationError,
    workout::WorkoutKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FormState {
    #[default]
    Hidden,
    AwaitingInput { location: Coordinates },
}

impl FormState {
    /// A map click while the form is already open just moves the pending location.
    pub fn open(&mut self, location: Coordinates) {
        *self = FormState::AwaitingInput { location };
    }

    /// Consumes the pending location and hides the form.
    pub fn take_location(&mut self) -> Option<Coordinates> {
        match std::mem::take(self) {
            FormState::AwaitingInput { location } => Some(location),
            FormState::Hidden => None,
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, FormState::AwaitingInput { .. })
    }
}

/// Display mode of the form element. Collapsed right after a hide so the
/// list doesn't jump while the hide transition runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormLayout {
    #[default]
    Grid,
    Collapsed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Distance,
    Duration,
    Cadence,
    Elevation,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Distance => "distance",
            Field::Duration => "duration",
            Field::Cadence => "cadence",
            Field::Elevation => "elevation",
        }
    }
}

/// Which kind-specific row is shown. Exactly one of the two is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeRows {
    cadence_visible: bool,
}

impl TypeRows {
    pub fn for_kind(kind: WorkoutKind) -> Self {
        Self { cadence_visible: kind == WorkoutKind::Running }
    }

    pub fn toggled(self) -> Self {
        Self { cadence_visible: !self.cadence_visible }
    }

    pub fn cadence_visible(&self) -> bool {
        self.cadence_visible
    }

    pub fn elevation_visible(&self) -> bool {
        !self.cadence_visible
    }
}

impl Default for TypeRows {
    fn default() -> Self {
        Self::for_kind(WorkoutKind::default())
    }
}

/// Raw text currently typed into the form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormFields {
    kind: WorkoutKind,
    rows: TypeRows,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

impl FormFields {
    pub fn kind(&self) -> WorkoutKind {
        self.kind
    }

    pub fn type_rows(&self) -> TypeRows {
        self.rows
    }

    pub fn select_kind(&mut self, kind: WorkoutKind) {
        if kind != self.kind {
            self.kind = kind;
            self.rows = self.rows.toggled();
        }
        debug_assert_eq!(self.rows, TypeRows::for_kind(self.kind));
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Distance => &self.distance,
            Field::Duration => &self.duration,
            Field::Cadence => &self.cadence,
            Field::Elevation => &self.elevation,
        }
    }

    pub fn set(&mut self, field: Field, text: String) {
        match field {
            Field::Distance => self.distance = text,
            Field::Duration => self.duration = text,
            Field::Cadence => self.cadence = text,
            Field::Elevation => self.elevation = text,
        }
    }

    /// Blanks the numeric inputs, the selected kind stays.
    pub fn clear(&mut self) {
        self.distance.clear();
        self.duration.clear();
        self.cadence.clear();
        self.elevation.clear();
    }
}

pub fn parse_metric(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

pub fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|value| value.is_finite())
}

pub fn all_positive(values: &[f64]) -> bool {
    values.iter().all(|value| *value > 0.)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidSubmission {
    pub kind: WorkoutKind,
    pub distance_km: f64,
    pub duration_min: f64,
    /// Cadence for running, elevation gain for cycling.
    pub metric: f64,
}

pub fn validate(fields: &FormFields, rules: &ValidationRules) -> Result<ValidSubmission, ValidationError> {
    let kind = fields.kind();
    let metric_field = match kind {
        WorkoutKind::Running => Field::Cadence,
        WorkoutKind::Cycling => Field::Elevation,
    };

    let values = [Field::Distance, Field::Duration, metric_field]
        .map(|field| (field, parse_metric(fields.get(field))));

    if let Some((field, _)) = values.iter().find(|(_, value)| !all_finite(&[*value])) {
        return Err(ValidationError::NotFinite { field: field.name() });
    }

    let must_be_positive = kind == WorkoutKind::Running || rules.require_positive_elevation;
    let positive_checked = if must_be_positive { &values[..] } else { &values[..2] };
    if let Some((field, _)) = positive_checked.iter().find(|(_, value)| !all_positive(&[*value])) {
        return Err(ValidationError::NotPositive { field: field.name() });
    }

    Ok(ValidSubmission {
        kind,
        distance_km: values[0].1,
        duration_min: values[1].1,
        metric: values[2].1,
    })
}
