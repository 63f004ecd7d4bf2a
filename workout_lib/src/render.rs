use crate::workout::{Workout, WorkoutId, WorkoutKind, WorkoutMetrics};

#[derive(Debug, Clone, PartialEq)]
pub struct PopupOptions {
    pub max_width: f64,
    pub min_width: f64,
    pub auto_close: bool,
    pub close_on_click: bool,
    pub class_name: String,
}

impl PopupOptions {
    pub fn for_kind(kind: WorkoutKind) -> Self {
        Self {
            max_width: 250.,
            min_width: 100.,
            auto_close: false,
            close_on_click: false,
            class_name: format!("{}-popup", kind.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub options: PopupOptions,
    pub content: String,
}

impl Popup {
    pub fn for_workout(workout: &Workout) -> Self {
        Self {
            options: PopupOptions::for_kind(workout.kind()),
            content: format!("{}{}", workout.kind().emoji(), workout.description()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

impl Detail {
    fn new(icon: &'static str, value: String, unit: &'static str) -> Self {
        Self { icon, value, unit }
    }
}

/// One row of the workout list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub id: WorkoutId,
    pub kind: WorkoutKind,
    pub title: String,
    pub details: Vec<Detail>,
}

impl ListEntry {
    pub fn for_workout(workout: &Workout) -> Self {
        let kind = workout.kind();
        let mut details = vec![
            Detail::new(kind.emoji(), format_number(workout.distance_km()), "km"),
            Detail::new("⏱", format_number(workout.duration_min()), "min"),
        ];

        match *workout.metrics() {
            WorkoutMetrics::Running { cadence_spm, pace_min_per_km } => {
                details.push(Detail::new("⚡️", to_fixed_1(pace_min_per_km), "min/km"));
                details.push(Detail::new("🦶🏼", format_number(cadence_spm), "spm"));
            }
            WorkoutMetrics::Cycling { elevation_gain_m, speed_km_per_h } => {
                details.push(Detail::new("⚡️", to_fixed_1(speed_km_per_h), "km/h"));
                details.push(Detail::new("⛰", format_number(elevation_gain_m), "m"));
            }
        }

        Self {
            id: *workout.id(),
            kind,
            title: workout.description().to_owned(),
            details,
        }
    }

    pub fn class_name(&self) -> String {
        format!("workout workout--{}", self.kind.as_str())
    }
}

/// One decimal, ties rounded away from zero so 0.25 shows as "0.3".
pub fn to_fixed_1(value: f64) -> String {
    format!("{:.1}", (value * 10.).round() / 10.)
}

/// Prints a number as typed by the user, so 5.0 shows as "5" and 5.25 as "5.25".
pub fn format_number(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{coordinates::Coordinates, test_support::fixed_time};

    #[test]
    fn running_popup_and_entry() {
        let workout = Workout::running(Coordinates::new(40., -73.9), 5., 27., 180., fixed_time(2024, 4, 2));

        let popup = Popup::for_workout(&workout);
        assert_eq!(popup.content, "🏃‍♂️Running on April 2");
        assert_eq!(popup.options.class_name, "running-popup");
        assert_eq!(popup.options.max_width, 250.);
        assert_eq!(popup.options.min_width, 100.);
        assert!(!popup.options.auto_close);
        assert!(!popup.options.close_on_click);

        let entry = ListEntry::for_workout(&workout);
        assert_eq!(entry.id, *workout.id());
        assert_eq!(entry.class_name(), "workout workout--running");
        assert_eq!(entry.title, "Running on April 2");
        let values: Vec<(&str, &str)> = entry.details.iter().map(|d| (d.value.as_str(), d.unit)).collect();
        assert_eq!(values, vec![("5", "km"), ("27", "min"), ("5.4", "min/km"), ("180", "spm")]);
    }

    #[test]
    fn cycling_entry_shows_speed_and_elevation() {
        let workout = Workout::cycling(Coordinates::new(0., 0.), 12.5, 40., 0., fixed_time(2024, 4, 2));

        let entry = ListEntry::for_workout(&workout);
        let values: Vec<(&str, &str, &str)> = entry.details.iter().map(|d| (d.icon, d.value.as_str(), d.unit)).collect();
        assert_eq!(values, vec![
            ("🚴‍♀️", "12.5", "km"),
            ("⏱", "40", "min"),
            ("⚡️", "192.0", "km/h"),
            ("⛰", "0", "m"),
        ]);
        assert_eq!(Popup::for_workout(&workout).options.class_name, "cycling-popup");
    }

    #[test]
    fn derived_metrics_round_ties_up() {
        let workout = Workout::running(Coordinates::new(0., 0.), 4., 1., 170., fixed_time(2024, 4, 2));
        assert_eq!(ListEntry::for_workout(&workout).details[2].value, "0.3");

        assert_eq!(to_fixed_1(0.25), "0.3");
        assert_eq!(to_fixed_1(2.45), "2.5");
        assert_eq!(to_fixed_1(5.), "5.0");
        assert_eq!(to_fixed_1(-0.25), "-0.3");
    }

    #[test]
    fn format_number_drops_trailing_zero() {
        assert_eq!(format_number(5.), "5");
        assert_eq!(format_number(5.25), "5.25");
        assert_eq!(format_number(-12.), "-12");
    }
}
