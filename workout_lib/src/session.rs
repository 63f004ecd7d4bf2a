use tracing::{debug, info, warn};

use crate::{
    capability::{ClickHandler, Clock, Geolocation, MapProvider, MapSurface, Notifier, PositionCallback, ViewOptions},
    config::SessionConfig,
    coordinates::Coordinates,
    error::{LocationError, SessionError},
    form::{validate, Field, FormFields, FormLayout, FormState, TypeRows},
    render::{ListEntry, Popup},
    store::WorkoutStore,
    workout::{Workout, WorkoutId, WorkoutKind},
};

/// Owns the workouts of one session and keeps the form, the map markers and the
/// rendered list in agreement. Every handler runs to completion and either
/// applies its change fully or alerts and leaves state untouched.
pub struct SessionController<P: MapProvider, N: Notifier, C: Clock> {
    config: SessionConfig,
    provider: P,
    notifier: N,
    clock: C,
    map: Option<P::Map>,
    form: FormState,
    layout: FormLayout,
    fields: FormFields,
    store: WorkoutStore,
}

impl<P: MapProvider, N: Notifier, C: Clock> SessionController<P, N, C> {
    pub fn new(config: SessionConfig, provider: P, notifier: N, clock: C) -> Self {
        Self {
            config,
            provider,
            notifier,
            clock,
            map: None,
            form: FormState::default(),
            layout: FormLayout::default(),
            fields: FormFields::default(),
            store: WorkoutStore::new(),
        }
    }

    pub fn request_location<G: Geolocation>(&self, geolocation: &G, deliver: PositionCallback) {
        debug!("Requesting current position");
        geolocation.current_position(deliver);
    }

    pub fn handle_position(&mut self, result: Result<Coordinates, LocationError>, on_map_click: ClickHandler) -> Result<(), SessionError> {
        let center = match result {
            Ok(center) => center,
            Err(err) => {
                warn!("Could not get position: {err}");
                self.notifier.alert(&self.config.messages.location_unavailable);
                return Err(err.into());
            }
        };

        if self.map.is_some() {
            debug!("Map already initialized, ignoring position {center:?}");
            return Ok(());
        }

        info!("Initializing map at {center:?}");
        let map = self.provider.create_map(center, self.config.initial_zoom, &self.config.tiles, on_map_click);
        self.map = Some(map);
        Ok(())
    }

    pub fn handle_map_click(&mut self, location: Coordinates) {
        if self.map.is_none() {
            warn!("Map click before the map exists");
            return;
        }

        debug!("Opening form at {location:?}");
        self.form.open(location);
        self.layout = FormLayout::Grid;
    }

    pub fn select_kind(&mut self, kind: WorkoutKind) {
        self.fields.select_kind(kind);
    }

    pub fn set_field(&mut self, field: Field, text: String) {
        self.fields.set(field, text);
    }

    pub fn submit(&mut self) -> Result<WorkoutId, SessionError> {
        if !self.form.is_visible() {
            warn!("Submit without a pending location");
            self.notifier.alert(&self.config.messages.form_not_open);
            return Err(SessionError::FormNotOpen);
        }

        let submission = match validate(&self.fields, &self.config.validation) {
            Ok(submission) => submission,
            Err(err) => {
                debug!("Rejected submission: {err}");
                self.notifier.alert(&self.config.messages.invalid_input);
                return Err(err.into());
            }
        };

        let Some(location) = self.form.take_location() else {
            return Err(SessionError::FormNotOpen);
        };

        let created_at = self.clock.now();
        let workout = match submission.kind {
            WorkoutKind::Running => Workout::running(location, submission.distance_km, submission.duration_min, submission.metric, created_at),
            WorkoutKind::Cycling => Workout::cycling(location, submission.distance_km, submission.duration_min, submission.metric, created_at),
        };
        let id = *workout.id();

        if let Some(map) = self.map.as_mut() {
            map.add_marker(workout.coordinates(), Popup::for_workout(&workout));
        }
        info!("Logged {} ({id})", workout.description());
        self.store.append(workout);

        self.fields.clear();
        self.layout = FormLayout::Collapsed;

        Ok(id)
    }

    pub fn restore_form_layout(&mut self) {
        self.layout = FormLayout::Grid;
    }

    /// Pans to the workout behind a clicked list entry. Returns whether a pan happened.
    pub fn handle_list_click(&mut self, id: Option<&str>) -> bool {
        let Some(workout) = id.and_then(|id| self.store.find_by_id_str(id)) else {
            debug!("List click without a known workout id: {id:?}");
            return false;
        };
        let Some(map) = self.map.as_mut() else {
            return false;
        };

        map.set_view(workout.coordinates(), self.config.focus_zoom, ViewOptions::animated(self.config.pan_duration_secs));
        true
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn form_state(&self) -> FormState {
        self.form
    }

    pub fn form_layout(&self) -> FormLayout {
        self.layout
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn type_rows(&self) -> TypeRows {
        self.fields.type_rows()
    }

    pub fn store(&self) -> &WorkoutStore {
        &self.store
    }

    /// Newest first, the order the list is shown in.
    pub fn list_entries(&self) -> impl Iterator<Item = ListEntry> + '_ {
        self.store.iter_newest_first().map(ListEntry::for_workout)
    }

    pub fn is_map_ready(&self) -> bool {
        self.map.is_some()
    }
}
