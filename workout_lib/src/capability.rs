use chrono::{DateTime, FixedOffset, Local};

use crate::{config::TileConfig, coordinates::Coordinates, error::LocationError, render::Popup};

pub type ClickHandler = Box<dyn Fn(Coordinates)>;
pub type PositionCallback = Box<dyn FnOnce(Result<Coordinates, LocationError>)>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewOptions {
    pub animate: bool,
    pub pan_duration_secs: f64,
}

impl ViewOptions {
    pub fn animated(pan_duration_secs: f64) -> Self {
        Self { animate: true, pan_duration_secs }
    }
}

/// An initialized map that workouts are drawn onto.
pub trait MapSurface {
    fn set_view(&mut self, center: Coordinates, zoom: f64, options: ViewOptions);

    /// Adds a marker with the popup bound and opened.
    fn add_marker(&mut self, at: Coordinates, popup: Popup);
}

/// Creates the map once a position is known.
pub trait MapProvider {
    type Map: MapSurface;

    fn create_map(&mut self, center: Coordinates, zoom: f64, tiles: &TileConfig, on_click: ClickHandler) -> Self::Map;
}

pub trait Geolocation {
    /// The callback is invoked exactly once, possibly after this call returns.
    fn current_position(&self, callback: PositionCallback);
}

pub trait Notifier {
    fn alert(&self, message: &str);
}

pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}
