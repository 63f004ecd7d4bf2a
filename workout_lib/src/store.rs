use crate::workout::{Workout, WorkoutId};

/// Append-only, insertion ordered list of the workouts logged in this session.
#[derive(Debug, Default, Clone)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, workout: Workout) {
        self.workouts.push(workout);
    }

    pub fn find_by_id(&self, id: &WorkoutId) -> Option<&Workout> {
        self.workouts.iter().find(|workout| workout.id() == id)
    }

    /// Lookup by the textual id carried on a rendered list entry.
    pub fn find_by_id_str(&self, id: &str) -> Option<&Workout> {
        let id = id.parse::<WorkoutId>().ok()?;
        self.find_by_id(&id)
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Workout> {
        self.workouts.iter()
    }

    pub fn iter_newest_first(&self) -> impl Iterator<Item = &Workout> {
        self.workouts.iter().rev()
    }
}
